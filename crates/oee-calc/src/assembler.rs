//! 效率記錄組裝

use oee_core::{
    CreateEfficiencyRecordRequest, CreateEfficiencyRecordResponse, EfficiencyRecord, OeeConfig,
    ProductionProcess, ShiftSlot,
};
use rust_decimal::Decimal;

use crate::aggregation::LossAggregator;
use crate::micro_loss::MicroLossInferencer;
use crate::normalizer::LossNormalizer;
use crate::oee::OeeCalculator;
use crate::time_window::TimeWindowResolver;
use crate::{AssembledRecord, AssemblyWarning, WarningKind};

/// 效率記錄組裝器（純計算，不做 I/O）
#[derive(Debug, Clone, Default)]
pub struct RecordAssembler {
    config: OeeConfig,
}

impl RecordAssembler {
    /// 創建新的組裝器
    pub fn new(config: OeeConfig) -> Self {
        Self { config }
    }

    /// 由已查得的製程與請求組裝記錄及摘要
    pub fn assemble(
        &self,
        process: &ProductionProcess,
        request: &CreateEfficiencyRecordRequest,
    ) -> oee_core::Result<AssembledRecord> {
        process.validate()?;
        let date = request.parsed_date()?;
        let mut warnings = Vec::new();

        // Step 1: 時段可用時間
        let window = TimeWindowResolver::resolve(&request.hour_interval, &self.config)?;
        let production_time_in_minutes = window.minutes;
        tracing::debug!(
            "Step 1: 時段 {} 可用 {} 分鐘",
            request.hour_interval,
            production_time_in_minutes
        );
        if window.defaulted {
            warnings.push(AssemblyWarning::info(
                WarningKind::IntervalDefaulted,
                format!(
                    "時段 {} 未定義，以 {} 分鐘計算",
                    request.hour_interval, production_time_in_minutes
                ),
            ));
        }

        // Step 2: 損失正規化
        let cycle_time_in_seconds = process.cycle_time_in_seconds;
        let losses = LossNormalizer::normalize(&request.reasons, cycle_time_in_seconds)?;
        tracing::debug!("Step 2: 正規化損失 {} 筆", losses.len());

        // Step 3: OEE
        let oee_value = OeeCalculator::calculate(
            request.pieces_quantity,
            cycle_time_in_seconds,
            process.cavities_number,
            production_time_in_minutes,
        )?;
        tracing::debug!("Step 3: OEE = {}", oee_value);
        if oee_value > Decimal::ONE {
            tracing::warn!("製程 {} OEE {} 超過 1", process.id, oee_value);
            warnings.push(AssemblyWarning::warning(
                WarningKind::OeeAboveOne,
                format!("OEE {} 超過 1，請確認良品數量", oee_value),
            ));
        }

        // Step 4: 損失彙總
        let totals = LossAggregator::aggregate(&losses)?;
        let total_reasons_time = totals.total_reasons_time()?;
        tracing::debug!("Step 4: 回報損失合計 {} 分鐘", total_reasons_time);

        // Step 5: 微停機
        let residual = MicroLossInferencer::residual(
            production_time_in_minutes,
            total_reasons_time,
            oee_value,
        )?;
        if residual < Decimal::ZERO {
            tracing::warn!("回報損失超出可用時間 {} 分鐘", -residual);
            warnings.push(AssemblyWarning::warning(
                WarningKind::LossesExceedWindow,
                format!("回報損失與有效時間超出可用時間 {} 分鐘", -residual),
            ));
        }
        let losses = MicroLossInferencer::complete(
            losses,
            production_time_in_minutes,
            total_reasons_time,
            oee_value,
        )?;
        tracing::debug!("Step 5: 剩餘時間 {} 分鐘，損失共 {} 筆", residual, losses.len());

        let slot = ShiftSlot::new(date, request.turn, request.ute, request.hour_interval.clone());
        let record = EfficiencyRecord::new(
            slot,
            process.id.clone(),
            request.pieces_quantity,
            production_time_in_minutes,
            oee_value,
        )
        .with_losses(losses);

        let summary = CreateEfficiencyRecordResponse {
            process_name: process.description.clone(),
            pieces_quantity: request.pieces_quantity,
            total_reasons_time,
            total_scrap: totals.scrap_in_pieces(cycle_time_in_seconds)?,
            total_rework: totals.rework_in_pieces(cycle_time_in_seconds)?,
            oee: oee_value,
            ute: request.ute,
        };

        Ok(AssembledRecord {
            record,
            summary,
            warnings,
        })
    }

    /// 獲取配置引用
    pub fn config(&self) -> &OeeConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oee_core::{IntervalPolicy, LossCause, LossReason, OeeError, Turn, Ute};

    fn approx_eq(left: Decimal, right: Decimal) -> bool {
        (left - right).abs() < Decimal::new(1, 9)
    }

    fn process() -> ProductionProcess {
        ProductionProcess::new(
            "PROC-010".to_string(),
            "Tampa flip-top".to_string(),
            4,
            Decimal::from(20),
        )
    }

    fn request() -> CreateEfficiencyRecordRequest {
        CreateEfficiencyRecordRequest::new(
            "PROC-010",
            "2025-11-03",
            Turn::First,
            Ute::Ute1,
            "08:00-09:00",
            200,
        )
        .with_reason(LossReason::new("Refugo", Decimal::from(10)))
        .with_reason(LossReason::new("Setup", Decimal::from(5)))
    }

    #[test]
    fn test_assemble_scenario() {
        let assembler = RecordAssembler::default();
        let assembled = assembler.assemble(&process(), &request()).unwrap();
        let record = &assembled.record;
        let summary = &assembled.summary;

        assert_eq!(record.production_time_in_minutes, Decimal::from(60));
        assert!(approx_eq(record.oee_value, Decimal::new(27777777778, 11)));

        // 報廢 3.33 + 調機 5 + 微停機 35
        assert_eq!(record.production_efficiency_losses.len(), 3);
        assert_eq!(record.production_efficiency_losses[0].cause, LossCause::Scrap);
        assert_eq!(record.production_efficiency_losses[1].cause, LossCause::Setup);
        let micro = &record.production_efficiency_losses[2];
        assert!(micro.is_micro_stoppage());
        assert!(approx_eq(micro.lost_time_in_minutes, Decimal::from(35)));
        assert!(approx_eq(record.unaccounted_minutes(), Decimal::ZERO));

        assert_eq!(summary.process_name, "Tampa flip-top");
        assert_eq!(summary.pieces_quantity, 200);
        assert!(approx_eq(summary.total_reasons_time, Decimal::new(833333333333, 11)));
        assert!(approx_eq(summary.total_scrap, Decimal::from(10)));
        assert_eq!(summary.total_rework, Decimal::ZERO);
        assert_eq!(summary.ute, Ute::Ute1);
        assert!(assembled.warnings.is_empty());
    }

    #[test]
    fn test_total_reasons_time_excludes_micro_stoppage() {
        let assembled = RecordAssembler::default()
            .assemble(&process(), &request())
            .unwrap();

        let reported: Decimal = assembled
            .record
            .production_efficiency_losses
            .iter()
            .filter(|loss| !loss.is_micro_stoppage())
            .map(|loss| loss.lost_time_in_minutes)
            .sum();

        assert!(assembled.record.has_micro_stoppage());
        assert!(approx_eq(assembled.summary.total_reasons_time, reported));
        assert!(assembled.summary.total_reasons_time < assembled.record.total_lost_minutes());
    }

    #[test]
    fn test_over_reported_losses_warn_without_micro_stoppage() {
        let request = request().with_reason(LossReason::new("Manutenção", Decimal::from(50)));

        let assembled = RecordAssembler::default()
            .assemble(&process(), &request)
            .unwrap();

        assert_eq!(assembled.record.production_efficiency_losses.len(), 3);
        assert!(!assembled.record.has_micro_stoppage());
        assert!(assembled.has_warning(WarningKind::LossesExceedWindow));
    }

    #[test]
    fn test_oee_above_one_is_passed_through() {
        let mut request = request();
        request.pieces_quantity = 1000;
        request.reasons.clear();

        let assembled = RecordAssembler::default()
            .assemble(&process(), &request)
            .unwrap();

        assert!(assembled.record.oee_value > Decimal::ONE);
        assert!(assembled.has_warning(WarningKind::OeeAboveOne));
        assert!(assembled.record.production_efficiency_losses.is_empty());
    }

    #[test]
    fn test_shift_change_interval() {
        let mut request = request();
        request.hour_interval = "15:00-15:48".to_string();

        let assembled = RecordAssembler::default()
            .assemble(&process(), &request)
            .unwrap();

        assert_eq!(assembled.record.production_time_in_minutes, Decimal::from(48));
        assert_eq!(assembled.record.hour_interval, "15:00-15:48");
    }

    #[test]
    fn test_unknown_interval_warns_or_fails() {
        let mut request = request();
        request.hour_interval = "99:00-99:30".to_string();

        let assembled = RecordAssembler::default()
            .assemble(&process(), &request)
            .unwrap();
        assert!(assembled.has_warning(WarningKind::IntervalDefaulted));

        let strict = RecordAssembler::new(OeeConfig::new().with_interval_policy(IntervalPolicy::Strict));
        assert!(matches!(
            strict.assemble(&process(), &request),
            Err(OeeError::UnknownHourInterval(_))
        ));
    }

    #[test]
    fn test_invalid_process_configuration() {
        let mut process = process();
        process.cavities_number = 0;

        let result = RecordAssembler::default().assemble(&process, &request());
        assert!(matches!(
            result,
            Err(OeeError::InvalidProcessConfiguration(_))
        ));
    }

    #[test]
    fn test_unknown_classification_aborts() {
        let request = request().with_reason(LossReason::new("Chuva", Decimal::from(3)));

        let result = RecordAssembler::default().assemble(&process(), &request);
        assert!(matches!(result, Err(OeeError::UnknownLossClassification(_))));
    }

    #[test]
    fn test_exact_full_window_has_no_micro_stoppage() {
        // 180 件 × 20 秒 / 1 穴 = 60 分鐘
        let process = ProductionProcess::new(
            "PROC-020".to_string(),
            "Tampa 38mm".to_string(),
            1,
            Decimal::from(20),
        );
        let mut request = request();
        request.pieces_quantity = 180;
        request.reasons.clear();

        let assembled = RecordAssembler::default()
            .assemble(&process, &request)
            .unwrap();

        assert_eq!(assembled.record.oee_value, Decimal::ONE);
        assert!(assembled.record.production_efficiency_losses.is_empty());
        assert!(assembled.warnings.is_empty());
    }

    #[test]
    fn test_scrap_filling_window_has_no_micro_stoppage() {
        // 450 件 × 20 秒 / 3 穴 = 50 分鐘，報廢 30 件 × 20 秒 = 10 分鐘
        let process = ProductionProcess::new(
            "PROC-030".to_string(),
            "Tampa 3 cavidades".to_string(),
            3,
            Decimal::from(20),
        );
        let mut request = request();
        request.pieces_quantity = 450;
        request.reasons = vec![LossReason::new("Refugo", Decimal::from(30))];

        let assembled = RecordAssembler::default()
            .assemble(&process, &request)
            .unwrap();

        let losses = &assembled.record.production_efficiency_losses;
        assert_eq!(losses.len(), 1);
        assert_eq!(losses[0].lost_time_in_minutes, Decimal::from(10));
        assert!(!assembled.record.has_micro_stoppage());
        assert_eq!(assembled.summary.total_scrap, Decimal::from(30));
        assert!(!assembled.has_warning(WarningKind::LossesExceedWindow));
    }

    #[test]
    fn test_huge_loss_times_are_calculation_errors() {
        let mut request = request();
        request.reasons = vec![
            LossReason::new("Setup", Decimal::MAX),
            LossReason::new("Setup", Decimal::MAX),
        ];

        let result = RecordAssembler::default().assemble(&process(), &request);
        assert!(matches!(result, Err(OeeError::CalculationError(_))));
    }

    #[test]
    fn test_invalid_date_aborts() {
        let mut request = request();
        request.date = "ontem".to_string();

        let result = RecordAssembler::default().assemble(&process(), &request);
        assert!(matches!(result, Err(OeeError::InvalidDate(_))));
    }
}
