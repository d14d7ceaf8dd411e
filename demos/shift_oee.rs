//! 單一時段 OEE 記錄示例

use std::sync::Arc;

use oee::{
    CreateEfficiencyRecordRequest, EfficiencyRecordService, InMemoryProcessCatalog,
    InMemoryRecordStore, LossReason, ProductionProcess, Turn, Ute,
};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("=== 單一時段 OEE 記錄示例 ===\n");

    // 製程：4 模穴，週期 20 秒
    let catalog = Arc::new(InMemoryProcessCatalog::with_processes(vec![
        ProductionProcess::new(
            "PROC-FLIP".to_string(),
            "Tampa flip-top 28mm".to_string(),
            4,
            Decimal::from(20),
        ),
    ]));
    let store = Arc::new(InMemoryRecordStore::new());
    let service = EfficiencyRecordService::new(catalog, store);

    let request = CreateEfficiencyRecordRequest::new(
        "PROC-FLIP",
        "2025-11-03",
        Turn::First,
        Ute::Ute2,
        "08:00-09:00",
        200,
    )
    .with_reason(LossReason::new("Refugo", Decimal::from(10)).with_description("rebarba"))
    .with_reason(LossReason::new("Setup", Decimal::from(5)).with_description("troca de cor"));

    let assembled = service.create_record_detailed(request).await?;
    let summary = &assembled.summary;

    println!("製程: {}", summary.process_name);
    println!("良品: {} 件", summary.pieces_quantity);
    println!("OEE: {:.4}", summary.oee);
    println!("回報損失: {:.2} 分鐘", summary.total_reasons_time);
    println!("報廢: {:.0} 件，重工: {:.0} 件", summary.total_scrap, summary.total_rework);

    println!("\n損失明細:");
    for loss in &assembled.record.production_efficiency_losses {
        println!(
            "  - {} [{}] {:.2} 分鐘",
            loss.title(),
            loss.classification,
            loss.lost_time_in_minutes
        );
    }

    for warning in &assembled.warnings {
        println!("警告: {}", warning.message);
    }

    Ok(())
}
