//! 時段可用時間

use oee_core::{IntervalPolicy, OeeConfig, OeeError};
use rust_decimal::Decimal;

/// 時段解析結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// 可用生產時間（分鐘）
    pub minutes: Decimal,
    /// 是否因未知時段而使用一般時段
    pub defaulted: bool,
}

/// 時段解析器
pub struct TimeWindowResolver;

impl TimeWindowResolver {
    /// 解析時段鍵的可用生產時間
    pub fn resolve(interval: &str, config: &OeeConfig) -> oee_core::Result<TimeWindow> {
        let window = match config.window_overrides.get(interval) {
            Some(&minutes) => TimeWindow {
                minutes,
                defaulted: false,
            },
            None => {
                let known = config.is_known_interval(interval);
                if !known && config.interval_policy == IntervalPolicy::Strict {
                    return Err(OeeError::UnknownHourInterval(interval.to_string()));
                }
                if !known {
                    tracing::warn!(
                        "未知時段 {}，以 {} 分鐘計算",
                        interval,
                        config.default_window_minutes
                    );
                }
                TimeWindow {
                    minutes: config.default_window_minutes,
                    defaulted: !known,
                }
            }
        };

        if window.minutes <= Decimal::ZERO {
            return Err(OeeError::InvalidProcessConfiguration(format!(
                "時段 {} 可用時間為 {} 分鐘",
                interval, window.minutes
            )));
        }

        Ok(window)
    }
}
