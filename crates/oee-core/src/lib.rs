//! # OEE Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod dto;
pub mod loss;
pub mod process;
pub mod record;
pub mod repository;

// Re-export 主要類型
pub use config::{IntervalPolicy, OeeConfig};
pub use dto::{CreateEfficiencyRecordRequest, CreateEfficiencyRecordResponse};
pub use loss::{EfficiencyLoss, LossCause, LossClassification, LossReason};
pub use process::ProductionProcess;
pub use record::{EfficiencyRecord, ShiftSlot, Turn, Ute};
pub use repository::{EfficiencyRecordRepository, ProductionProcessRepository};

/// OEE 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum OeeError {
    #[error("找不到生產製程: {0}")]
    ProcessNotFound(String),

    #[error("無效的製程配置: {0}")]
    InvalidProcessConfiguration(String),

    #[error("未知的損失分類: {0}")]
    UnknownLossClassification(String),

    #[error("未知的時段: {0}")]
    UnknownHourInterval(String),

    #[error("無效的損失時間: {cause} = {time}")]
    InvalidLossTime {
        cause: String,
        time: rust_decimal::Decimal,
    },

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("持久化錯誤: {0}")]
    Repository(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, OeeError>;
