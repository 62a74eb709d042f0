use std::io::Write;

use sdriq_types::{HeaderRecord, SdriqResult};

use crate::HeaderCodec;

/// Записывает 32 байта заголовка "как есть".
///
/// CRC не пересчитывается: перед вызовом после любых изменений полей нужен
/// [`IntegrityGuard::recompute`](crate::IntegrityGuard::recompute).
pub fn write_header<W: Write>(
    writer: &mut W,
    record: &HeaderRecord,
) -> SdriqResult<()> {
    writer.write_all(&record.encode())?;
    Ok(())
}
