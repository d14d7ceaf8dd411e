//! 生產製程模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OeeError, Result};

/// 每分鐘秒數
pub const SECONDS_PER_MINUTE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// 生產製程（外部主資料，核心唯讀）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionProcess {
    /// 製程ID
    pub id: String,

    /// 顯示名稱
    pub description: String,

    /// 模穴數（每個週期產出的零件數）
    pub cavities_number: u32,

    /// 週期時間（秒）
    pub cycle_time_in_seconds: Decimal,
}

impl ProductionProcess {
    /// 創建新的生產製程
    pub fn new(
        id: String,
        description: String,
        cavities_number: u32,
        cycle_time_in_seconds: Decimal,
    ) -> Self {
        Self {
            id,
            description,
            cavities_number,
            cycle_time_in_seconds,
        }
    }

    /// 檢查模穴數與週期時間皆為正值
    pub fn validate(&self) -> Result<()> {
        if self.cavities_number == 0 {
            return Err(OeeError::InvalidProcessConfiguration(format!(
                "製程 {} 模穴數為 0",
                self.id
            )));
        }

        if self.cycle_time_in_seconds <= Decimal::ZERO {
            return Err(OeeError::InvalidProcessConfiguration(format!(
                "製程 {} 週期時間必須大於 0，實際為 {}",
                self.id, self.cycle_time_in_seconds
            )));
        }

        Ok(())
    }
}
