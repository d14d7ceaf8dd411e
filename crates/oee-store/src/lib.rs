//! # OEE Store
//!
//! 持久化埠的記憶體實作（測試、示範與嵌入式使用）

pub mod process_catalog;
pub mod record_store;

// Re-export 主要類型
pub use process_catalog::InMemoryProcessCatalog;
pub use record_store::InMemoryRecordStore;
