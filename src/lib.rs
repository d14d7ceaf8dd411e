//! # OEE
//!
//! 班別時段設備綜合效率（OEE）記錄引擎
//!
//! - `oee_core`: 資料模型、配置、錯誤與持久化埠
//! - `oee_calc`: 時段、損失正規化、OEE、彙總、微停機推算與記錄組裝
//! - `oee_store`: 持久化埠的記憶體實作

pub use oee_calc::{
    AssembledRecord, AssemblyWarning, EfficiencyRecordService, LossAggregator, LossNormalizer,
    LossTotals, MicroLossInferencer, OeeCalculator, RecordAssembler, TimeWindow,
    TimeWindowResolver, WarningKind, WarningSeverity,
};
pub use oee_core::{
    CreateEfficiencyRecordRequest, CreateEfficiencyRecordResponse, EfficiencyLoss,
    EfficiencyRecord, EfficiencyRecordRepository, IntervalPolicy, LossCause, LossClassification,
    LossReason, OeeConfig, OeeError, ProductionProcess, ProductionProcessRepository, Result,
    ShiftSlot, Turn, Ute,
};
pub use oee_store::{InMemoryProcessCatalog, InMemoryRecordStore};
