//! Единицы времени начала записи.
//!
//! В памяти и в выходном файле время хранится в миллисекундах от Unix
//! epoch. Старые записи содержат секунды, поэтому единица исходного файла
//! задаётся вызывающим кодом и приводится один раз, сразу после чтения.

use chrono::{DateTime, SecondsFormat, Utc};
use sdriq_types::HeaderRecord;

/// Единица `start_timestamp` во входном файле
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampUnit {
    /// Секунды от epoch (умножаются на 1000)
    #[default]
    Seconds,
    /// Миллисекунды от epoch (без изменений)
    Milliseconds,
}

impl TimestampUnit {
    pub fn to_millis(
        &self,
        raw: i64,
    ) -> i64 {
        match self {
            TimestampUnit::Seconds => raw.saturating_mul(1000),
            TimestampUnit::Milliseconds => raw,
        }
    }
}

/// Приводит `start_timestamp` к миллисекундам.
pub fn reconcile(
    record: &HeaderRecord,
    unit: TimestampUnit,
) -> HeaderRecord {
    HeaderRecord {
        start_timestamp: unit.to_millis(record.start_timestamp),
        ..*record
    }
}

/// Разбирает строку RFC 3339 в миллисекунды от epoch.
pub fn parse_rfc3339_millis(s: &str) -> Result<i64, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s.trim()).map(|dt| dt.timestamp_millis())
}

/// Текущее время в миллисекундах от epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// UTC-представление для отчётов.
pub fn format_millis(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => "<out of range>".to_string(),
    }
}
