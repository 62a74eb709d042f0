use sdriq_types::{HeaderRecord, SampleSize};

use crate::{format_millis, IntegrityGuard};

/// Снимок заголовка для вывода в консоль.
#[derive(Debug, Clone)]
pub struct HeaderReport {
    pub record: HeaderRecord,
    pub checksum_ok: bool,
    pub expected_checksum: u32,
    /// Размер полезной нагрузки после заголовка, если известен.
    pub payload_len: Option<u64>,
    /// Время начала в мс для вывода. Отличается от `record.start_timestamp`,
    /// если на диске время хранится в секундах.
    pub start_ms: i64,
}

impl HeaderReport {
    pub fn new(record: &HeaderRecord) -> Self {
        Self {
            record: *record,
            checksum_ok: record.verify(),
            expected_checksum: record.expected_checksum(),
            payload_len: None,
            start_ms: record.start_timestamp,
        }
    }

    pub fn with_payload_len(
        mut self,
        payload_len: u64,
    ) -> Self {
        self.payload_len = Some(payload_len);
        self
    }

    /// Задаёт время начала в мс, приведённое из единиц файла.
    pub fn with_start_ms(
        mut self,
        start_ms: i64,
    ) -> Self {
        self.start_ms = start_ms;
        self
    }

    /// Длительность записи в секундах: `payload / (frame_bytes * sample_rate)`.
    ///
    /// `None` если размер нагрузки неизвестен, частота нулевая или
    /// разрядность вне {16, 24}.
    pub fn record_length_secs(&self) -> Option<f64> {
        let payload = self.payload_len?;
        let size = SampleSize::from_bits(self.record.sample_size)?;

        if self.record.sample_rate == 0 {
            return None;
        }

        let bytes_per_sec = size.frame_bytes() as f64 * self.record.sample_rate as f64;
        Some(payload as f64 / bytes_per_sec)
    }
}

impl std::fmt::Display for HeaderReport {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let r = &self.record;

        writeln!(f, "  Sample rate   : {} S/s", r.sample_rate)?;
        writeln!(
            f,
            "  Center freq   : {} Hz ({:.6} MHz)",
            r.center_frequency,
            r.center_frequency as f64 / 1e6
        )?;
        write!(
            f,
            "  Start time    : {} ms ({})",
            self.start_ms,
            format_millis(self.start_ms)
        )?;
        if self.start_ms != r.start_timestamp {
            write!(f, " [on disk: {}]", r.start_timestamp)?;
        }
        writeln!(f)?;
        match SampleSize::from_bits(r.sample_size) {
            Some(size) => writeln!(f, "  Sample size   : {size}")?,
            None => writeln!(f, "  Sample size   : {} bits (invalid)", r.sample_size)?,
        }
        if let Some(len) = self.payload_len {
            writeln!(f, "  Payload       : {len} bytes")?;
        }
        if let Some(secs) = self.record_length_secs() {
            writeln!(f, "  Record length : {secs:.3} s")?;
        }
        if self.checksum_ok {
            write!(f, "  CRC32         : {:08x} (OK)", r.checksum)
        } else {
            write!(
                f,
                "  CRC32         : {:08x} (mismatch, expected {:08x})",
                r.checksum, self.expected_checksum
            )
        }
    }
}
