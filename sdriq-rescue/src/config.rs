use std::path::PathBuf;

use sdriq_core::{parse_rfc3339_millis, HeaderRecord, SampleSize, TimestampUnit};
use thiserror::Error;

/// Переопределение времени начала записи.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampOverride {
    /// Явное время в формате RFC 3339.
    At(String),
    /// Текущее время.
    Now,
}

/// Переопределения полей заголовка. `None` — поле не трогаем.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub sample_rate: Option<u32>,
    pub center_frequency: Option<u64>,
    /// Сырое значение: вне {16, 24} заменяется на 16.
    pub sample_size: Option<u32>,
    pub timestamp: Option<TimestampOverride>,
}

/// Замечание о заменённом значении переопределения.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideWarning {
    #[error("Sample size {given} is not 16 or 24, using 16")]
    InvalidSampleSize { given: u32 },

    #[error("Cannot parse timestamp '{given}' as RFC 3339, using current time")]
    UnparsableTimestamp { given: String },
}

/// Полная конфигурация запуска.
#[derive(Debug, Clone)]
pub struct RescueConfig {
    /// Путь к входному .sdriq файлу
    pub input_path: PathBuf,
    /// Путь к выходному файлу (None = только показать заголовок)
    pub output_path: Option<PathBuf>,
    /// Единица времени во входном заголовке
    pub timestamp_unit: TimestampUnit,
    /// Размер чанка копирования в блоках по 4096 байт
    pub chunk_blocks: u32,
    pub overrides: Overrides,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl TimestampOverride {
    /// `--ts` имеет приоритет над `--now`.
    pub fn from_flags(
        ts: Option<String>,
        now: bool,
    ) -> Option<Self> {
        match (ts, now) {
            (Some(s), _) => Some(TimestampOverride::At(s)),
            (None, true) => Some(TimestampOverride::Now),
            (None, false) => None,
        }
    }
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        *self == Overrides::default()
    }

    /// Применяет переопределения к `record`.
    ///
    /// Неверные значения заменяются значениями по умолчанию и возвращаются
    /// в виде замечаний; ошибкой это не считается. CRC не пересчитывается.
    pub fn apply(
        &self,
        record: &mut HeaderRecord,
        now_ms: i64,
    ) -> Vec<OverrideWarning> {
        let mut warnings = Vec::new();

        if let Some(rate) = self.sample_rate {
            record.sample_rate = rate;
        }

        if let Some(freq) = self.center_frequency {
            record.center_frequency = freq;
        }

        if let Some(bits) = self.sample_size {
            let size = SampleSize::from_bits(bits).unwrap_or_else(|| {
                warnings.push(OverrideWarning::InvalidSampleSize { given: bits });
                SampleSize::default()
            });
            record.sample_size = size.bits();
        }

        match &self.timestamp {
            Some(TimestampOverride::At(s)) => {
                record.start_timestamp = parse_rfc3339_millis(s).unwrap_or_else(|_| {
                    warnings.push(OverrideWarning::UnparsableTimestamp { given: s.clone() });
                    now_ms
                });
            }
            Some(TimestampOverride::Now) => record.start_timestamp = now_ms,
            None => {}
        }

        warnings
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl Default for RescueConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("capture.sdriq"),
            output_path: None,
            timestamp_unit: TimestampUnit::Seconds,
            chunk_blocks: 1,
            overrides: Overrides::default(),
        }
    }
}

/// Парсит строку частоты в герцы.
///
/// Поддерживает суффиксы: `GHz`, `MHz`, `kHz`, `Hz` (регистронезависимо).
///
/// # Примеры
/// ```
/// use sdriq_rescue::config::parse_freq_hz;
/// assert_eq!(parse_freq_hz("435MHz").unwrap(), 435_000_000);
/// assert_eq!(parse_freq_hz("1.602GHz").unwrap(), 1_602_000_000);
/// assert_eq!(parse_freq_hz("435000000").unwrap(), 435_000_000);
/// ```
pub fn parse_freq_hz(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let lower = s.to_lowercase();

    let (num_str, mult) = if let Some(v) = lower.strip_suffix("ghz") {
        (v.trim(), 1_000_000_000_f64)
    } else if let Some(v) = lower.strip_suffix("mhz") {
        (v.trim(), 1_000_000_f64)
    } else if let Some(v) = lower.strip_suffix("khz") {
        (v.trim(), 1_000_f64)
    } else if let Some(v) = lower.strip_suffix("hz") {
        (v.trim(), 1_f64)
    } else {
        // Без суффикса — число в герцах
        return s
            .parse::<u64>()
            .map_err(|e| format!("Invalid frequency '{s}': {e}"));
    };

    let n: f64 = num_str
        .parse()
        .map_err(|e| format!("Invalid frequency value '{num_str}': {e}"))?;

    if !n.is_finite() || n < 0.0 {
        return Err(format!("Invalid frequency value '{num_str}'"));
    }

    Ok((n * mult).round() as u64)
}

/// Частота дискретизации: как [`parse_freq_hz`], но в пределах u32.
pub fn parse_rate_hz(s: &str) -> Result<u32, String> {
    let hz = parse_freq_hz(s)?;
    u32::try_from(hz).map_err(|_| format!("Sample rate {hz} Hz exceeds u32::MAX"))
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
