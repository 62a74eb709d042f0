/// Размер фиксированного заголовка .sdriq файла (32 байта)
pub const HEADER_SIZE: usize = 32;

/// Длина области, покрываемой CRC32: [0..28)
pub const CRC_SPAN: usize = 28;

/// Смещения полей внутри заголовка (little-endian, без padding).
pub const OFFSET_SAMPLE_RATE: usize = 0;
pub const OFFSET_CENTER_FREQUENCY: usize = 4;
pub const OFFSET_START_TIMESTAMP: usize = 12;
pub const OFFSET_SAMPLE_SIZE: usize = 20;
pub const OFFSET_RESERVED: usize = 24;
pub const OFFSET_CHECKSUM: usize = 28;

/// Заголовок .sdriq файла (фиксированный размер 32 байта).
///
/// Значения хранятся "как есть": при декодировании домен полей не
/// проверяется, `reserved` и `checksum` сохраняются такими, какими они были
/// прочитаны с диска.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderRecord {
    /// Частота дискретизации в Гц
    pub sample_rate: u32,
    /// Несущая частота в Гц
    pub center_frequency: u64,
    /// Время начала записи (мс от Unix epoch в каноническом виде)
    pub start_timestamp: i64,
    /// Разрядность компоненты I/Q в битах (16 или 24)
    pub sample_size: u32,
    /// Зарезервировано, обнуляется перед подсчётом CRC
    pub reserved: u32,
    /// CRC32 (IEEE) по байтам [0..28)
    pub checksum: u32,
}

impl HeaderRecord {
    /// Создаёт запись с нулевыми полями `reserved` и `checksum`.
    pub fn new(
        sample_rate: u32,
        center_frequency: u64,
        start_timestamp: i64,
        sample_size: u32,
    ) -> Self {
        HeaderRecord {
            sample_rate,
            center_frequency,
            start_timestamp,
            sample_size,
            reserved: 0,
            checksum: 0,
        }
    }

    /// Копия записи в канонической для CRC форме (`reserved == 0`).
    pub fn canonical(&self) -> Self {
        HeaderRecord {
            reserved: 0,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_offsets_cover_header() {
        assert_eq!(OFFSET_CENTER_FREQUENCY - OFFSET_SAMPLE_RATE, 4);
        assert_eq!(OFFSET_START_TIMESTAMP - OFFSET_CENTER_FREQUENCY, 8);
        assert_eq!(OFFSET_SAMPLE_SIZE - OFFSET_START_TIMESTAMP, 8);
        assert_eq!(OFFSET_RESERVED - OFFSET_SAMPLE_SIZE, 4);
        assert_eq!(OFFSET_CHECKSUM - OFFSET_RESERVED, 4);
        assert_eq!(OFFSET_CHECKSUM, CRC_SPAN);
        assert_eq!(OFFSET_CHECKSUM + 4, HEADER_SIZE);
    }

    #[test]
    fn test_canonical_zeroes_reserved_only() {
        let mut record = HeaderRecord::new(75_000, 435_000_000, 1_539_083_921, 16);
        record.reserved = 0xDEAD_BEEF;
        record.checksum = 42;

        let canonical = record.canonical();
        assert_eq!(canonical.reserved, 0);
        assert_eq!(canonical.checksum, 42);
        assert_eq!(canonical.sample_rate, record.sample_rate);
    }
}
