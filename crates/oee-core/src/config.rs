//! OEE 配置模型

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OeeError, Result};

/// 換班前的縮短時段
pub const SHIFT_CHANGE_INTERVAL: &str = "15:00-15:48";

/// 換班後的縮短時段
pub const SHIFT_HANDOVER_INTERVAL: &str = "15:49-15:59";

/// OEE 計算配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OeeConfig {
    /// 一般時段的可用時間（分鐘）
    pub default_window_minutes: Decimal,

    /// 特定時段的可用時間（分鐘）
    pub window_overrides: BTreeMap<String, Decimal>,

    /// 已知時段鍵（依時間排序，供輸入表單使用）
    pub known_intervals: Vec<String>,

    /// 未知時段的處理策略
    ///
    /// - FallbackToDefault: 視為一般時段（預設）
    /// - Strict: 回報 `UnknownHourInterval` 錯誤
    pub interval_policy: IntervalPolicy,
}

impl OeeConfig {
    /// 創建預設配置（整點時段 60 分鐘，換班時段 48 / 10 分鐘）
    pub fn new() -> Self {
        let mut window_overrides = BTreeMap::new();
        window_overrides.insert(SHIFT_CHANGE_INTERVAL.to_string(), Decimal::from(48));
        window_overrides.insert(SHIFT_HANDOVER_INTERVAL.to_string(), Decimal::from(10));

        Self {
            default_window_minutes: Decimal::from(60),
            window_overrides,
            known_intervals: Self::hourly_intervals(),
            interval_policy: IntervalPolicy::FallbackToDefault,
        }
    }

    /// 從 JSON 載入配置，未提供的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| OeeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置一般時段分鐘數
    pub fn with_default_window_minutes(mut self, minutes: Decimal) -> Self {
        self.default_window_minutes = minutes;
        self
    }

    /// 建構器模式：設置特定時段分鐘數
    pub fn with_window_override(mut self, interval: impl Into<String>, minutes: Decimal) -> Self {
        let interval = interval.into();
        if !self.known_intervals.contains(&interval) {
            self.known_intervals.push(interval.clone());
        }
        self.window_overrides.insert(interval, minutes);
        self
    }

    /// 建構器模式：設置未知時段策略
    pub fn with_interval_policy(mut self, policy: IntervalPolicy) -> Self {
        self.interval_policy = policy;
        self
    }

    /// 檢查所有時段皆有正的可用時間
    pub fn validate(&self) -> Result<()> {
        if self.default_window_minutes <= Decimal::ZERO {
            return Err(OeeError::InvalidConfig(format!(
                "一般時段分鐘數必須大於 0，實際為 {}",
                self.default_window_minutes
            )));
        }

        if let Some((interval, minutes)) = self
            .window_overrides
            .iter()
            .find(|(_, minutes)| **minutes <= Decimal::ZERO)
        {
            return Err(OeeError::InvalidConfig(format!(
                "時段 {} 分鐘數必須大於 0，實際為 {}",
                interval, minutes
            )));
        }

        Ok(())
    }

    /// 已知時段鍵
    pub fn intervals(&self) -> &[String] {
        &self.known_intervals
    }

    /// 是否為已知時段
    pub fn is_known_interval(&self, interval: &str) -> bool {
        self.window_overrides.contains_key(interval)
            || self.known_intervals.iter().any(|known| known == interval)
    }

    /// 整點時段清單，15 點拆成換班前後兩段
    fn hourly_intervals() -> Vec<String> {
        let mut intervals = Vec::with_capacity(25);
        for hour in 0..24u32 {
            if hour == 15 {
                intervals.push(SHIFT_CHANGE_INTERVAL.to_string());
                intervals.push(SHIFT_HANDOVER_INTERVAL.to_string());
                continue;
            }
            intervals.push(format!("{:02}:00-{:02}:00", hour, (hour + 1) % 24));
        }
        intervals
    }
}

impl Default for OeeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 未知時段策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntervalPolicy {
    /// 視為一般時段
    #[default]
    FallbackToDefault,
    /// 拒絕未知時段
    Strict,
}
