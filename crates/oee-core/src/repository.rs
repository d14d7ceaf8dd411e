//! 持久化埠（由外部儲存實作）

use async_trait::async_trait;

use crate::process::ProductionProcess;
use crate::record::EfficiencyRecord;
use crate::Result;

/// 生產製程查詢埠
#[async_trait]
pub trait ProductionProcessRepository: Send + Sync {
    /// 依 ID 取得製程，不存在時回傳 `None`
    async fn get_by_id(&self, id: &str) -> Result<Option<ProductionProcess>>;
}

/// 效率記錄儲存埠
#[async_trait]
pub trait EfficiencyRecordRepository: Send + Sync {
    /// 寫入一筆新記錄
    async fn create(&self, record: &EfficiencyRecord) -> Result<()>;

    /// 取得所有記錄（匯出用）
    async fn get_all(&self) -> Result<Vec<EfficiencyRecord>>;
}
