//! 效率損失模型

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OeeError, Result};

/// 損失分類（彙總用類別）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossClassification {
    /// 重工
    Rework,
    /// 報廢
    Scrap,
    /// 換模/調機
    Setup,
    /// 設備故障
    #[serde(rename = "Equipment Failure")]
    EquipmentFailure,
    /// 缺料
    #[serde(rename = "Material Shortage")]
    MaterialShortage,
    /// 組織問題（含未歸因的微停機）
    #[serde(rename = "Organizational Issues")]
    OrganizationalIssues,
}

impl LossClassification {
    /// 顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rework => "Rework",
            Self::Scrap => "Scrap",
            Self::Setup => "Setup",
            Self::EquipmentFailure => "Equipment Failure",
            Self::MaterialShortage => "Material Shortage",
            Self::OrganizationalIssues => "Organizational Issues",
        }
    }
}

impl fmt::Display for LossClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 現場回報的原始損失原因
///
/// 重工與報廢以「件數」回報，其餘原因以「分鐘」回報。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossCause {
    #[serde(rename = "Retrabalho")]
    Rework,
    #[serde(rename = "Refugo")]
    Scrap,
    #[serde(rename = "Setup")]
    Setup,
    #[serde(rename = "Ajuste de processo")]
    ProcessAdjustment,
    #[serde(rename = "Manutenção")]
    Maintenance,
    #[serde(rename = "Falta de material")]
    MaterialShortage,
    #[serde(rename = "Falta de operador")]
    OperatorShortage,
    #[serde(rename = "Reunião")]
    Meeting,
    #[serde(rename = "Micro stoppages", alias = "Micro paradas")]
    MicroStoppage,
}

impl LossCause {
    /// 所有原因
    pub const ALL: [LossCause; 9] = [
        LossCause::Rework,
        LossCause::Scrap,
        LossCause::Setup,
        LossCause::ProcessAdjustment,
        LossCause::Maintenance,
        LossCause::MaterialShortage,
        LossCause::OperatorShortage,
        LossCause::Meeting,
        LossCause::MicroStoppage,
    ];

    /// 原始標籤
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rework => "Retrabalho",
            Self::Scrap => "Refugo",
            Self::Setup => "Setup",
            Self::ProcessAdjustment => "Ajuste de processo",
            Self::Maintenance => "Manutenção",
            Self::MaterialShortage => "Falta de material",
            Self::OperatorShortage => "Falta de operador",
            Self::Meeting => "Reunião",
            Self::MicroStoppage => "Micro stoppages",
        }
    }

    /// 對應的損失分類
    pub fn classification(&self) -> LossClassification {
        match self {
            Self::Rework => LossClassification::Rework,
            Self::Scrap => LossClassification::Scrap,
            Self::Setup | Self::ProcessAdjustment => LossClassification::Setup,
            Self::Maintenance => LossClassification::EquipmentFailure,
            Self::MaterialShortage => LossClassification::MaterialShortage,
            Self::OperatorShortage | Self::Meeting | Self::MicroStoppage => {
                LossClassification::OrganizationalIssues
            }
        }
    }

    /// 是否以件數回報（重工、報廢）
    pub fn is_piece_denominated(&self) -> bool {
        matches!(self, Self::Rework | Self::Scrap)
    }
}

impl FromStr for LossCause {
    type Err = OeeError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "Micro paradas" {
            return Ok(Self::MicroStoppage);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|cause| cause.label() == s)
            .ok_or_else(|| OeeError::UnknownLossClassification(s.to_string()))
    }
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 回報的損失原因（輸入，未經單位換算）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossReason {
    /// 原始原因標籤
    pub class: String,

    /// 說明
    #[serde(default)]
    pub description: String,

    /// 件數（重工/報廢）或分鐘（其他原因）
    pub time: Decimal,
}

impl LossReason {
    /// 創建新的損失原因
    pub fn new(class: impl Into<String>, time: Decimal) -> Self {
        Self {
            class: class.into(),
            description: String::new(),
            time,
        }
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 解析原始標籤
    pub fn cause(&self) -> Result<LossCause> {
        self.class.parse()
    }
}

/// 正規化後的效率損失（持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyLoss {
    /// 損失分類
    pub classification: LossClassification,

    /// 原始原因
    pub cause: LossCause,

    /// 說明
    pub description: String,

    /// 損失時間（分鐘，已換算）
    pub lost_time_in_minutes: Decimal,
}

impl EfficiencyLoss {
    /// 創建新的效率損失，分類由原因決定
    pub fn new(cause: LossCause, description: String, lost_time_in_minutes: Decimal) -> Self {
        Self {
            classification: cause.classification(),
            cause,
            description,
            lost_time_in_minutes,
        }
    }

    /// 微停機損失（無說明）
    pub fn micro_stoppage(lost_time_in_minutes: Decimal) -> Self {
        Self::new(LossCause::MicroStoppage, String::new(), lost_time_in_minutes)
    }

    /// 顯示標題
    pub fn title(&self) -> &'static str {
        self.cause.label()
    }

    /// 是否為推算的微停機
    pub fn is_micro_stoppage(&self) -> bool {
        self.cause == LossCause::MicroStoppage
    }
}
