//! 提交請求與回應摘要

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::loss::LossReason;
use crate::record::{Turn, Ute};
use crate::{OeeError, Result};

/// 建立效率記錄的請求（每個班別時段提交一次）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEfficiencyRecordRequest {
    /// 生產製程ID
    pub process: String,

    /// 日期字串（YYYY-MM-DD 或 RFC 3339）
    pub date: String,

    /// 班別
    pub turn: Turn,

    /// 生產單位
    pub ute: Ute,

    /// 時段鍵
    pub hour_interval: String,

    /// 良品數量
    pub pieces_quantity: u32,

    /// 損失原因（保持輸入順序）
    #[serde(default)]
    pub reasons: Vec<LossReason>,
}

impl CreateEfficiencyRecordRequest {
    /// 創建新的請求（無損失原因）
    pub fn new(
        process: impl Into<String>,
        date: impl Into<String>,
        turn: Turn,
        ute: Ute,
        hour_interval: impl Into<String>,
        pieces_quantity: u32,
    ) -> Self {
        Self {
            process: process.into(),
            date: date.into(),
            turn,
            ute,
            hour_interval: hour_interval.into(),
            pieces_quantity,
            reasons: Vec::new(),
        }
    }

    /// 建構器模式：設置損失原因
    pub fn with_reasons(mut self, reasons: Vec<LossReason>) -> Self {
        self.reasons = reasons;
        self
    }

    /// 建構器模式：添加損失原因
    pub fn with_reason(mut self, reason: LossReason) -> Self {
        self.reasons.push(reason);
        self
    }

    /// 解析日期
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        let raw = self.date.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }

        DateTime::parse_from_rfc3339(raw)
            .map(|datetime| datetime.date_naive())
            .map_err(|_| OeeError::InvalidDate(self.date.clone()))
    }
}

/// 提交後回傳給呼叫端的摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEfficiencyRecordResponse {
    /// 製程名稱
    pub process_name: String,

    /// 良品數量
    pub pieces_quantity: u32,

    /// 回報損失合計（分鐘，不含推算的微停機）
    pub total_reasons_time: Decimal,

    /// 報廢（件）
    pub total_scrap: Decimal,

    /// 重工（件）
    pub total_rework: Decimal,

    /// OEE（未截斷）
    pub oee: Decimal,

    /// 生產單位
    pub ute: Ute,
}
