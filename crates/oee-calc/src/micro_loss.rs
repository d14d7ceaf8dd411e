//! 微停機推算

use oee_core::{EfficiencyLoss, OeeError};
use rust_decimal::Decimal;

/// 剩餘時間保留的小數位數（分鐘）
pub const RESIDUAL_DECIMAL_PLACES: u32 = 10;

/// 微停機推算器
///
/// 可用時間扣除回報損失與有效生產時間後的正餘額，
/// 視為未歸因的微停機。
pub struct MicroLossInferencer;

impl MicroLossInferencer {
    /// 有效生產時間（分鐘）
    pub fn useful_time(
        oee_value: Decimal,
        production_time_in_minutes: Decimal,
    ) -> oee_core::Result<Decimal> {
        oee_value.checked_mul(production_time_in_minutes).ok_or_else(|| {
            OeeError::CalculationError(format!(
                "有效時間 {} × {} 溢位",
                oee_value, production_time_in_minutes
            ))
        })
    }

    /// 未解釋的剩餘時間（可為負），取至 `RESIDUAL_DECIMAL_PLACES` 位
    pub fn residual(
        production_time_in_minutes: Decimal,
        total_reasons_time: Decimal,
        oee_value: Decimal,
    ) -> oee_core::Result<Decimal> {
        let useful_time = Self::useful_time(oee_value, production_time_in_minutes)?;

        production_time_in_minutes
            .checked_sub(total_reasons_time)
            .and_then(|remaining| remaining.checked_sub(useful_time))
            .map(|residual| residual.round_dp(RESIDUAL_DECIMAL_PLACES))
            .ok_or_else(|| OeeError::CalculationError("剩餘時間溢位".to_string()))
    }

    /// 剩餘時間大於 0 時產生微停機損失
    pub fn infer(
        production_time_in_minutes: Decimal,
        total_reasons_time: Decimal,
        oee_value: Decimal,
    ) -> oee_core::Result<Option<EfficiencyLoss>> {
        let residual = Self::residual(production_time_in_minutes, total_reasons_time, oee_value)?;

        if residual > Decimal::ZERO {
            tracing::debug!("推算微停機 {} 分鐘", residual);
            Ok(Some(EfficiencyLoss::micro_stoppage(residual)))
        } else {
            Ok(None)
        }
    }

    /// 回傳附加微停機後的損失序列（無剩餘時間時原樣回傳）
    pub fn complete(
        losses: Vec<EfficiencyLoss>,
        production_time_in_minutes: Decimal,
        total_reasons_time: Decimal,
        oee_value: Decimal,
    ) -> oee_core::Result<Vec<EfficiencyLoss>> {
        let micro = Self::infer(production_time_in_minutes, total_reasons_time, oee_value)?;
        Ok(losses.into_iter().chain(micro).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oee_core::{LossCause, LossClassification};

    fn setup_loss(minutes: i64) -> EfficiencyLoss {
        EfficiencyLoss::new(LossCause::Setup, String::new(), Decimal::from(minutes))
    }

    /// OEE 使有效時間為 25 分鐘（可用 60 分鐘）
    fn oee_for_25_minutes() -> Decimal {
        Decimal::from(25) / Decimal::from(60)
    }

    #[test]
    fn test_negative_residual_appends_nothing() {
        // 60 - 40 - 25 = -5
        let losses = vec![setup_loss(40)];

        let completed = MicroLossInferencer::complete(
            losses,
            Decimal::from(60),
            Decimal::from(40),
            oee_for_25_minutes(),
        )
        .unwrap();

        assert_eq!(completed.len(), 1);
        assert!(!completed[0].is_micro_stoppage());
    }

    #[test]
    fn test_positive_residual_appends_one_entry() {
        // 60 - 20 - 25 = 15
        let losses = vec![setup_loss(20)];

        let completed = MicroLossInferencer::complete(
            losses,
            Decimal::from(60),
            Decimal::from(20),
            oee_for_25_minutes(),
        )
        .unwrap();

        assert_eq!(completed.len(), 2);
        let micro = &completed[1];
        assert_eq!(micro.classification, LossClassification::OrganizationalIssues);
        assert_eq!(micro.cause, LossCause::MicroStoppage);
        assert!(micro.description.is_empty());
        assert_eq!(micro.lost_time_in_minutes, Decimal::from(15));
    }

    #[test]
    fn test_zero_residual_appends_nothing() {
        let micro =
            MicroLossInferencer::infer(Decimal::from(60), Decimal::from(30), Decimal::new(5, 1))
                .unwrap();
        assert!(micro.is_none());
    }

    #[test]
    fn test_rounding_dust_is_not_a_micro_stoppage() {
        // 0.8333... × 60 = 49.999...998，剩餘 60 - 10 - 49.999...998 四捨五入為 0
        let oee = Decimal::from(5) / Decimal::from(6);

        let micro = MicroLossInferencer::infer(Decimal::from(60), Decimal::from(10), oee).unwrap();
        assert!(micro.is_none());
    }

    #[test]
    fn test_residual_value() {
        let residual =
            MicroLossInferencer::residual(Decimal::from(48), Decimal::from(8), Decimal::new(5, 1))
                .unwrap();
        // 48 - 8 - 24
        assert_eq!(residual, Decimal::from(16));
    }

    #[test]
    fn test_useful_time_overflow_is_calculation_error() {
        let result = MicroLossInferencer::residual(Decimal::from(60), Decimal::ZERO, Decimal::MAX);
        assert!(matches!(result, Err(OeeError::CalculationError(_))));
    }
}
