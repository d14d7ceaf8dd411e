//! # OEE Calculation Engine
//!
//! 班別時段 OEE 計算引擎

pub mod aggregation;
pub mod assembler;
pub mod micro_loss;
pub mod normalizer;
pub mod oee;
pub mod service;
pub mod time_window;

// Re-export 主要類型
pub use aggregation::{LossAggregator, LossTotals};
pub use assembler::RecordAssembler;
pub use micro_loss::MicroLossInferencer;
pub use normalizer::LossNormalizer;
pub use oee::OeeCalculator;
pub use service::EfficiencyRecordService;
pub use time_window::{TimeWindow, TimeWindowResolver};

use oee_core::{CreateEfficiencyRecordResponse, EfficiencyRecord};
use serde::Serialize;

/// 組裝結果
#[derive(Debug, Clone)]
pub struct AssembledRecord {
    /// 待持久化的記錄
    pub record: EfficiencyRecord,

    /// 回傳給呼叫端的摘要
    pub summary: CreateEfficiencyRecordResponse,

    /// 警告信息
    pub warnings: Vec<AssemblyWarning>,
}

impl AssembledRecord {
    /// 是否有指定類型的警告
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}

/// 組裝警告
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyWarning {
    pub kind: WarningKind,
    pub message: String,
    pub severity: WarningSeverity,
}

impl AssemblyWarning {
    pub fn new(kind: WarningKind, message: String, severity: WarningSeverity) -> Self {
        Self {
            kind,
            message,
            severity,
        }
    }

    pub fn info(kind: WarningKind, message: String) -> Self {
        Self::new(kind, message, WarningSeverity::Info)
    }

    pub fn warning(kind: WarningKind, message: String) -> Self {
        Self::new(kind, message, WarningSeverity::Warning)
    }
}

/// 警告類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// 未知時段以一般時段計算
    IntervalDefaulted,
    /// OEE 超過 1（良品數可能回報錯誤）
    OeeAboveOne,
    /// 回報損失加有效時間超過可用時間
    LossesExceedWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
