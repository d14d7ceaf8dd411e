//! OEE 計算

use oee_core::process::SECONDS_PER_MINUTE;
use oee_core::OeeError;
use rust_decimal::Decimal;

/// OEE 計算器
pub struct OeeCalculator;

impl OeeCalculator {
    /// 計算 OEE
    ///
    /// `oee = 良品數 × (週期時間分鐘 / 模穴數) / 可用時間分鐘`
    ///
    /// 實際以 `良品數 × 週期秒數 / (60 × 模穴數 × 可用分鐘)` 計算。
    ///
    /// 分子是產出良品所需的理論最短時間。結果不截斷，
    /// 大於 1 或異常值原樣回傳。
    pub fn calculate(
        pieces_quantity: u32,
        cycle_time_in_seconds: Decimal,
        cavities_number: u32,
        production_time_in_minutes: Decimal,
    ) -> oee_core::Result<Decimal> {
        if cavities_number == 0 {
            return Err(OeeError::InvalidProcessConfiguration(
                "模穴數為 0".to_string(),
            ));
        }

        if cycle_time_in_seconds <= Decimal::ZERO {
            return Err(OeeError::InvalidProcessConfiguration(format!(
                "週期時間必須大於 0，實際為 {}",
                cycle_time_in_seconds
            )));
        }

        if production_time_in_minutes <= Decimal::ZERO {
            return Err(OeeError::InvalidProcessConfiguration(format!(
                "可用時間必須大於 0，實際為 {}",
                production_time_in_minutes
            )));
        }

        // 先乘後除
        let numerator = Decimal::from(pieces_quantity)
            .checked_mul(cycle_time_in_seconds)
            .ok_or_else(|| OeeError::CalculationError("理論生產時間溢位".to_string()))?;

        let denominator = SECONDS_PER_MINUTE
            .checked_mul(Decimal::from(cavities_number))
            .and_then(|d| d.checked_mul(production_time_in_minutes))
            .ok_or_else(|| OeeError::CalculationError("可用時間換算秒數溢位".to_string()))?;

        numerator.checked_div(denominator).ok_or_else(|| {
            OeeError::CalculationError(format!("{} / {} 無法計算", numerator, denominator))
        })
    }
}
