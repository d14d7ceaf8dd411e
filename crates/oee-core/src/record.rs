//! 效率記錄模型

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::loss::EfficiencyLoss;

/// 班別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
}

impl Turn {
    /// 所有班別（輸入表單選項）
    pub const ALL: [Turn; 3] = [Turn::First, Turn::Second, Turn::Third];

    /// 班別代碼
    pub fn code(&self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 生產單位（UTE）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ute {
    #[serde(rename = "UTE1")]
    Ute1,
    #[serde(rename = "UTE2")]
    Ute2,
    #[serde(rename = "UTE3")]
    Ute3,
    #[serde(rename = "UTE4")]
    Ute4,
    #[serde(rename = "UTE5")]
    Ute5,
}

impl Ute {
    pub const ALL: [Ute; 5] = [Ute::Ute1, Ute::Ute2, Ute::Ute3, Ute::Ute4, Ute::Ute5];

    /// UTE 代碼
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ute1 => "UTE1",
            Self::Ute2 => "UTE2",
            Self::Ute3 => "UTE3",
            Self::Ute4 => "UTE4",
            Self::Ute5 => "UTE5",
        }
    }
}

impl fmt::Display for Ute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 班別時段（日期 + 班別 + UTE + 時段鍵）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSlot {
    pub date: NaiveDate,
    pub turn: Turn,
    pub ute: Ute,
    pub hour_interval: String,
}

impl ShiftSlot {
    pub fn new(date: NaiveDate, turn: Turn, ute: Ute, hour_interval: String) -> Self {
        Self {
            date,
            turn,
            ute,
            hour_interval,
        }
    }
}

/// 效率記錄（每次提交產生一筆，不可變更）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyRecord {
    /// 記錄ID
    pub id: Uuid,

    /// 日期
    pub date: NaiveDate,

    /// 班別
    pub turn: Turn,

    /// 生產單位
    pub ute: Ute,

    /// 時段鍵
    pub hour_interval: String,

    /// 生產製程ID
    pub production_process_id: String,

    /// 良品數量
    pub pieces_quantity: u32,

    /// 可用生產時間（分鐘）
    pub production_time_in_minutes: Decimal,

    /// OEE 值（未截斷）
    pub oee_value: Decimal,

    /// 效率損失（保持回報順序，微停機在最後）
    pub production_efficiency_losses: Vec<EfficiencyLoss>,
}

impl EfficiencyRecord {
    /// 創建新的效率記錄
    pub fn new(
        slot: ShiftSlot,
        production_process_id: String,
        pieces_quantity: u32,
        production_time_in_minutes: Decimal,
        oee_value: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: slot.date,
            turn: slot.turn,
            ute: slot.ute,
            hour_interval: slot.hour_interval,
            production_process_id,
            pieces_quantity,
            production_time_in_minutes,
            oee_value,
            production_efficiency_losses: Vec::new(),
        }
    }

    /// 建構器模式：設置效率損失
    pub fn with_losses(mut self, losses: Vec<EfficiencyLoss>) -> Self {
        self.production_efficiency_losses = losses;
        self
    }

    /// 所有損失時間合計（分鐘）
    pub fn total_lost_minutes(&self) -> Decimal {
        self.production_efficiency_losses
            .iter()
            .map(|loss| loss.lost_time_in_minutes)
            .sum()
    }

    /// 有效生產時間（分鐘）= OEE × 可用時間
    pub fn useful_minutes(&self) -> Decimal {
        self.oee_value * self.production_time_in_minutes
    }

    /// 未被損失或有效時間解釋的時間（分鐘）
    pub fn unaccounted_minutes(&self) -> Decimal {
        self.production_time_in_minutes - self.total_lost_minutes() - self.useful_minutes()
    }

    /// 是否包含推算的微停機
    pub fn has_micro_stoppage(&self) -> bool {
        self.production_efficiency_losses
            .iter()
            .any(EfficiencyLoss::is_micro_stoppage)
    }
}
