//! 損失彙總

use oee_core::process::SECONDS_PER_MINUTE;
use oee_core::{EfficiencyLoss, LossCause, OeeError};
use rust_decimal::Decimal;

/// 損失彙總結果（分鐘）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LossTotals {
    /// 重工換算分鐘
    pub rework_minutes: Decimal,
    /// 報廢換算分鐘
    pub scrap_minutes: Decimal,
    /// 其他原因分鐘
    pub other_minutes: Decimal,
}

impl LossTotals {
    /// 所有回報損失合計（分鐘）
    pub fn total_reasons_time(&self) -> oee_core::Result<Decimal> {
        self.other_minutes
            .checked_add(self.rework_minutes)
            .and_then(|sum| sum.checked_add(self.scrap_minutes))
            .ok_or_else(|| OeeError::CalculationError("回報損失合計溢位".to_string()))
    }

    /// 重工分鐘換回件數
    pub fn rework_in_pieces(&self, cycle_time_in_seconds: Decimal) -> oee_core::Result<Decimal> {
        Self::minutes_to_pieces(self.rework_minutes, cycle_time_in_seconds)
    }

    /// 報廢分鐘換回件數
    pub fn scrap_in_pieces(&self, cycle_time_in_seconds: Decimal) -> oee_core::Result<Decimal> {
        Self::minutes_to_pieces(self.scrap_minutes, cycle_time_in_seconds)
    }

    /// 分鐘 × 60 / 週期秒數
    fn minutes_to_pieces(
        minutes: Decimal,
        cycle_time_in_seconds: Decimal,
    ) -> oee_core::Result<Decimal> {
        if cycle_time_in_seconds <= Decimal::ZERO {
            return Err(OeeError::InvalidProcessConfiguration(format!(
                "週期時間 {} 秒無法換算件數",
                cycle_time_in_seconds
            )));
        }

        minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(|seconds| seconds.checked_div(cycle_time_in_seconds))
            .ok_or_else(|| OeeError::CalculationError(format!("{} 分鐘換算件數溢位", minutes)))
    }
}

/// 損失彙總器
pub struct LossAggregator;

impl LossAggregator {
    /// 依正規化後的損失計算重工、報廢與其他損失合計
    pub fn aggregate(losses: &[EfficiencyLoss]) -> oee_core::Result<LossTotals> {
        let totals = losses
            .iter()
            .try_fold(LossTotals::default(), |mut totals, loss| {
                let bucket = match loss.cause {
                    LossCause::Rework => &mut totals.rework_minutes,
                    LossCause::Scrap => &mut totals.scrap_minutes,
                    _ => &mut totals.other_minutes,
                };
                *bucket = bucket.checked_add(loss.lost_time_in_minutes).ok_or_else(|| {
                    OeeError::CalculationError(format!("{} 損失合計溢位", loss.title()))
                })?;
                Ok::<_, OeeError>(totals)
            })?;

        tracing::debug!(
            "損失彙總：重工 {} 分鐘，報廢 {} 分鐘，其他 {} 分鐘",
            totals.rework_minutes,
            totals.scrap_minutes,
            totals.other_minutes
        );

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::LossNormalizer;
    use oee_core::LossReason;

    fn approx_eq(left: Decimal, right: Decimal) -> bool {
        (left - right).abs() < Decimal::new(1, 12)
    }

    fn aggregate(reasons: &[LossReason], cycle_time_in_seconds: Decimal) -> LossTotals {
        let losses = LossNormalizer::normalize(reasons, cycle_time_in_seconds).unwrap();
        LossAggregator::aggregate(&losses).unwrap()
    }

    #[test]
    fn test_aggregate_mixed_units() {
        let reasons = vec![
            LossReason::new("Retrabalho", Decimal::from(4)),
            LossReason::new("Refugo", Decimal::from(6)),
            LossReason::new("Retrabalho", Decimal::from(2)),
            LossReason::new("Setup", Decimal::from(5)),
            LossReason::new("Reunião", Decimal::from(10)),
        ];

        let totals = aggregate(&reasons, Decimal::from(30));

        assert_eq!(totals.rework_minutes, Decimal::from(3));
        assert_eq!(totals.scrap_minutes, Decimal::from(3));
        assert_eq!(totals.other_minutes, Decimal::from(15));
        // 15 + 3 + 3
        assert_eq!(totals.total_reasons_time().unwrap(), Decimal::from(21));
        assert_eq!(totals.rework_in_pieces(Decimal::from(30)).unwrap(), Decimal::from(6));
    }

    #[test]
    fn test_pieces_round_trip() {
        let reasons = vec![
            LossReason::new("Retrabalho", Decimal::from(7)),
            LossReason::new("Refugo", Decimal::from(10)),
        ];

        let totals = aggregate(&reasons, Decimal::from(20));

        assert!(approx_eq(totals.rework_in_pieces(Decimal::from(20)).unwrap(), Decimal::from(7)));
        assert!(approx_eq(totals.scrap_in_pieces(Decimal::from(20)).unwrap(), Decimal::from(10)));
    }

    #[test]
    fn test_zero_cycle_time_cannot_convert_back() {
        let totals = LossTotals::default();
        assert!(matches!(
            totals.rework_in_pieces(Decimal::ZERO),
            Err(OeeError::InvalidProcessConfiguration(_))
        ));
    }

    #[test]
    fn test_no_losses() {
        let totals = LossAggregator::aggregate(&[]).unwrap();
        assert_eq!(totals.total_reasons_time().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_sum_overflow_is_calculation_error() {
        let losses = vec![
            EfficiencyLoss::new(LossCause::Setup, String::new(), Decimal::MAX),
            EfficiencyLoss::new(LossCause::Setup, String::new(), Decimal::MAX),
        ];

        let result = LossAggregator::aggregate(&losses);
        assert!(matches!(result, Err(OeeError::CalculationError(_))));
    }

    #[test]
    fn test_total_overflow_is_calculation_error() {
        let totals = LossTotals {
            rework_minutes: Decimal::MAX,
            scrap_minutes: Decimal::ZERO,
            other_minutes: Decimal::MAX,
        };
        assert!(matches!(
            totals.total_reasons_time(),
            Err(OeeError::CalculationError(_))
        ));
    }
}
