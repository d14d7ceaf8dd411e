//! 整班記錄與讀取示例

use std::sync::Arc;

use oee::{
    CreateEfficiencyRecordRequest, EfficiencyRecordService, InMemoryProcessCatalog,
    InMemoryRecordStore, LossReason, OeeConfig, ProductionProcess, Turn, Ute,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== 整班 OEE 記錄示例 ===\n");

    let catalog = Arc::new(InMemoryProcessCatalog::with_processes(vec![
        ProductionProcess::new(
            "PROC-PET".to_string(),
            "Pré-forma PET 500ml".to_string(),
            8,
            Decimal::from(24),
        ),
    ]));
    let store = Arc::new(InMemoryRecordStore::new());
    let config = OeeConfig::default();
    let intervals: Vec<String> = config.intervals()[8..17].to_vec();
    let service = EfficiencyRecordService::with_config(catalog, store, config);

    // 第一班 08:00 ~ 15:59
    for (index, interval) in intervals.iter().enumerate() {
        let pieces = 900 + (index as u32 * 37) % 250;
        let mut request = CreateEfficiencyRecordRequest::new(
            "PROC-PET",
            "2025-11-03",
            Turn::First,
            Ute::Ute3,
            interval.as_str(),
            pieces,
        );
        if index % 3 == 0 {
            request = request.with_reason(LossReason::new("Refugo", Decimal::from(12)));
        }
        if index == 4 {
            request = request.with_reason(
                LossReason::new("Manutenção", Decimal::from(15)).with_description("vazamento"),
            );
        }

        service.create_record(request).await?;
    }

    println!("{:<14} {:>6} {:>8} {:>10}", "時段", "良品", "OEE", "微停機");
    for record in service.list_records().await? {
        let micro: Decimal = record
            .production_efficiency_losses
            .iter()
            .filter(|loss| loss.is_micro_stoppage())
            .map(|loss| loss.lost_time_in_minutes)
            .sum();
        println!(
            "{:<14} {:>6} {:>8.3} {:>10.2}",
            record.hour_interval, record.pieces_quantity, record.oee_value, micro
        );
    }

    Ok(())
}
