//! Контроль целостности заголовка.
//!
//! CRC32 (IEEE 802.3, как в zlib/gzip) считается по байтам [0..28)
//! закодированного заголовка, при этом поле `reserved` предварительно
//! обнуляется. Само поле `checksum` в подсчёт не входит.

use crc32fast::Hasher;
use sdriq_types::{HeaderRecord, CRC_SPAN};

use crate::HeaderCodec;

/// Проверка и пересчёт CRC заголовка.
pub trait IntegrityGuard: Sized {
    /// CRC32, который должен стоять в поле `checksum`.
    fn expected_checksum(&self) -> u32;

    /// `true` если сохранённый CRC совпадает с вычисленным.
    ///
    /// Несовпадение не является ошибкой разбора: метаданные остаются
    /// пригодными, результат используется только для отчёта.
    fn verify(&self) -> bool;

    /// Копия с `reserved = 0` и актуальным `checksum`.
    fn recompute(&self) -> Self;

    fn recompute_in_place(&mut self);
}

impl IntegrityGuard for HeaderRecord {
    fn expected_checksum(&self) -> u32 {
        let bytes = self.canonical().encode();
        crc32_checksum(&bytes[..CRC_SPAN])
    }

    fn verify(&self) -> bool {
        self.checksum == self.expected_checksum()
    }

    fn recompute(&self) -> Self {
        let mut record = self.canonical();
        record.checksum = record.expected_checksum();
        record
    }

    fn recompute_in_place(&mut self) {
        *self = self.recompute();
    }
}

/// CRC32 (IEEE 802.3 / crc32fast)
pub fn crc32_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
