//! 效率記錄服務（查詢製程 → 組裝 → 持久化）

use std::sync::Arc;

use oee_core::{
    CreateEfficiencyRecordRequest, CreateEfficiencyRecordResponse, EfficiencyRecord,
    EfficiencyRecordRepository, OeeConfig, OeeError, ProductionProcessRepository,
};

use crate::assembler::RecordAssembler;
use crate::AssembledRecord;

/// 效率記錄服務
///
/// 兩個持久化埠由呼叫端注入；服務本身不保存跨呼叫狀態。
pub struct EfficiencyRecordService {
    /// 生產製程查詢埠
    processes: Arc<dyn ProductionProcessRepository>,

    /// 效率記錄儲存埠
    records: Arc<dyn EfficiencyRecordRepository>,

    /// 記錄組裝器
    assembler: RecordAssembler,
}

impl EfficiencyRecordService {
    /// 創建新的服務（使用預設配置）
    pub fn new(
        processes: Arc<dyn ProductionProcessRepository>,
        records: Arc<dyn EfficiencyRecordRepository>,
    ) -> Self {
        Self::with_config(processes, records, OeeConfig::default())
    }

    /// 創建新的服務（指定配置）
    pub fn with_config(
        processes: Arc<dyn ProductionProcessRepository>,
        records: Arc<dyn EfficiencyRecordRepository>,
        config: OeeConfig,
    ) -> Self {
        Self {
            processes,
            records,
            assembler: RecordAssembler::new(config),
        }
    }

    /// 建立效率記錄，回傳摘要
    pub async fn create_record(
        &self,
        request: CreateEfficiencyRecordRequest,
    ) -> oee_core::Result<CreateEfficiencyRecordResponse> {
        self.create_record_detailed(request)
            .await
            .map(|assembled| assembled.summary)
    }

    /// 建立效率記錄，回傳完整組裝結果（含記錄與警告）
    ///
    /// 製程查詢失敗或任何計算錯誤都會在寫入前中止。
    pub async fn create_record_detailed(
        &self,
        request: CreateEfficiencyRecordRequest,
    ) -> oee_core::Result<AssembledRecord> {
        tracing::info!(
            "開始建立效率記錄：製程 {}，時段 {} {}",
            request.process,
            request.date,
            request.hour_interval
        );

        let process = self
            .processes
            .get_by_id(&request.process)
            .await?
            .ok_or_else(|| OeeError::ProcessNotFound(request.process.clone()))?;

        let assembled = self.assembler.assemble(&process, &request)?;

        self.records.create(&assembled.record).await?;

        tracing::info!(
            "效率記錄 {} 已建立，OEE {}，損失 {} 筆，警告 {} 筆",
            assembled.record.id,
            assembled.record.oee_value,
            assembled.record.production_efficiency_losses.len(),
            assembled.warnings.len()
        );

        Ok(assembled)
    }

    /// 取得所有效率記錄
    pub async fn list_records(&self) -> oee_core::Result<Vec<EfficiencyRecord>> {
        let records = self.records.get_all().await?;
        tracing::debug!("讀取效率記錄 {} 筆", records.len());
        Ok(records)
    }

    /// 獲取組裝器引用
    pub fn assembler(&self) -> &RecordAssembler {
        &self.assembler
    }
}
