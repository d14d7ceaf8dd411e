//! 生產製程目錄

use std::collections::HashMap;

use async_trait::async_trait;
use oee_core::{ProductionProcess, ProductionProcessRepository};
use tokio::sync::RwLock;

/// 記憶體製程目錄
pub struct InMemoryProcessCatalog {
    processes: RwLock<HashMap<String, ProductionProcess>>,
}

impl InMemoryProcessCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self {
            processes: RwLock::new(HashMap::new()),
        }
    }

    /// 由製程清單創建目錄
    pub fn with_processes(processes: Vec<ProductionProcess>) -> Self {
        Self {
            processes: RwLock::new(
                processes
                    .into_iter()
                    .map(|process| (process.id.clone(), process))
                    .collect(),
            ),
        }
    }

    /// 新增或取代製程
    pub async fn upsert(&self, process: ProductionProcess) {
        self.processes
            .write()
            .await
            .insert(process.id.clone(), process);
    }

    /// 製程數量
    pub async fn len(&self) -> usize {
        self.processes.read().await.len()
    }

    /// 目錄是否為空
    pub async fn is_empty(&self) -> bool {
        self.processes.read().await.is_empty()
    }
}

impl Default for InMemoryProcessCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductionProcessRepository for InMemoryProcessCatalog {
    async fn get_by_id(&self, id: &str) -> oee_core::Result<Option<ProductionProcess>> {
        let process = self.processes.read().await.get(id).cloned();
        if process.is_none() {
            tracing::debug!("製程 {} 不在目錄中", id);
        }
        Ok(process)
    }
}
