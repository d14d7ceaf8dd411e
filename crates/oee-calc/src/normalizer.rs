//! 損失正規化（件數 → 分鐘）

use oee_core::process::SECONDS_PER_MINUTE;
use oee_core::{EfficiencyLoss, LossCause, LossReason, OeeError};
use rust_decimal::Decimal;

/// 損失正規化器
pub struct LossNormalizer;

impl LossNormalizer {
    /// 將回報的損失原因換算為分鐘並分類
    ///
    /// 重工與報廢的 `time` 為件數，乘以週期時間換算分鐘；
    /// 其他原因的 `time` 已是分鐘。輸出順序與輸入相同。
    pub fn normalize(
        reasons: &[LossReason],
        cycle_time_in_seconds: Decimal,
    ) -> oee_core::Result<Vec<EfficiencyLoss>> {
        reasons
            .iter()
            .map(|reason| -> oee_core::Result<EfficiencyLoss> {
                let cause = Self::checked_cause(reason)?;
                let lost_time_in_minutes =
                    Self::to_minutes(cause, reason.time, cycle_time_in_seconds)?;

                Ok(EfficiencyLoss::new(
                    cause,
                    reason.description.clone(),
                    lost_time_in_minutes,
                ))
            })
            .collect()
    }

    /// 解析原因並檢查時間非負
    fn checked_cause(reason: &LossReason) -> oee_core::Result<LossCause> {
        let cause = reason.cause()?;

        if reason.time < Decimal::ZERO {
            return Err(OeeError::InvalidLossTime {
                cause: reason.class.clone(),
                time: reason.time,
            });
        }

        Ok(cause)
    }

    /// 將原始數值換算為分鐘（件數 × 週期秒數 / 60）
    pub fn to_minutes(
        cause: LossCause,
        time: Decimal,
        cycle_time_in_seconds: Decimal,
    ) -> oee_core::Result<Decimal> {
        if !cause.is_piece_denominated() {
            return Ok(time);
        }

        time
            .checked_mul(cycle_time_in_seconds)
            .and_then(|seconds| seconds.checked_div(SECONDS_PER_MINUTE))
            .ok_or_else(|| {
                OeeError::CalculationError(format!("{} 件 × {} 秒溢位", time, cycle_time_in_seconds))
            })
    }
}
