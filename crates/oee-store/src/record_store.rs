//! 效率記錄儲存

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use oee_core::{EfficiencyRecord, EfficiencyRecordRepository, OeeError};
use tokio::sync::RwLock;

/// 記憶體效率記錄儲存（只追加）
pub struct InMemoryRecordStore {
    records: RwLock<Vec<EfficiencyRecord>>,

    /// 寫入呼叫次數（含失敗）
    create_calls: AtomicUsize,

    /// 設定後所有寫入皆失敗
    failure: Option<String>,
}

impl InMemoryRecordStore {
    /// 創建空儲存
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            create_calls: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// 創建寫入必定失敗的儲存
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// 寫入呼叫次數
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// 已儲存記錄數
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// 是否無記錄
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EfficiencyRecordRepository for InMemoryRecordStore {
    async fn create(&self, record: &EfficiencyRecord) -> oee_core::Result<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            tracing::warn!("寫入效率記錄 {} 失敗: {}", record.id, message);
            return Err(OeeError::Repository(message.clone()));
        }

        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn get_all(&self) -> oee_core::Result<Vec<EfficiencyRecord>> {
        if let Some(message) = &self.failure {
            return Err(OeeError::Repository(message.clone()));
        }

        Ok(self.records.read().await.clone())
    }
}
