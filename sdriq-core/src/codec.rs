//! Бинарное представление заголовка .sdriq.
//!
//! 32 байта, все многобайтовые числа в порядке little-endian, поля идут
//! подряд без выравнивания:
//!
//! | offset | size | field            |
//! |--------|------|------------------|
//! | 0      | 4    | sample_rate      |
//! | 4      | 8    | center_frequency |
//! | 12     | 8    | start_timestamp  |
//! | 20     | 4    | sample_size      |
//! | 24     | 4    | reserved         |
//! | 28     | 4    | checksum         |

use byteorder::{ByteOrder, LittleEndian};
use sdriq_types::{
    HeaderRecord, SdriqError, SdriqResult, HEADER_SIZE, OFFSET_CENTER_FREQUENCY, OFFSET_CHECKSUM,
    OFFSET_RESERVED, OFFSET_SAMPLE_RATE, OFFSET_SAMPLE_SIZE, OFFSET_START_TIMESTAMP,
};

/// Сериализация/десериализация заголовка.
pub trait HeaderCodec: Sized {
    /// Десериализация из первых 32 байт `buf`.
    ///
    /// Более короткий буфер даёт [`SdriqError::HeaderTruncated`]: частично
    /// прочитанному заголовку доверять нельзя. Хвост длиннее 32 байт
    /// игнорируется.
    fn decode(buf: &[u8]) -> SdriqResult<Self>;

    /// Сериализация в 32 байта. CRC не пересчитывается.
    fn encode(&self) -> [u8; HEADER_SIZE];
}

impl HeaderCodec for HeaderRecord {
    fn decode(buf: &[u8]) -> SdriqResult<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(SdriqError::HeaderTruncated { found: buf.len() });
        }

        Ok(HeaderRecord {
            sample_rate: LittleEndian::read_u32(&buf[OFFSET_SAMPLE_RATE..]),
            center_frequency: LittleEndian::read_u64(&buf[OFFSET_CENTER_FREQUENCY..]),
            start_timestamp: LittleEndian::read_i64(&buf[OFFSET_START_TIMESTAMP..]),
            sample_size: LittleEndian::read_u32(&buf[OFFSET_SAMPLE_SIZE..]),
            reserved: LittleEndian::read_u32(&buf[OFFSET_RESERVED..]),
            checksum: LittleEndian::read_u32(&buf[OFFSET_CHECKSUM..]),
        })
    }

    fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];

        LittleEndian::write_u32(&mut buf[OFFSET_SAMPLE_RATE..], self.sample_rate);
        LittleEndian::write_u64(&mut buf[OFFSET_CENTER_FREQUENCY..], self.center_frequency);
        LittleEndian::write_i64(&mut buf[OFFSET_START_TIMESTAMP..], self.start_timestamp);
        LittleEndian::write_u32(&mut buf[OFFSET_SAMPLE_SIZE..], self.sample_size);
        LittleEndian::write_u32(&mut buf[OFFSET_RESERVED..], self.reserved);
        LittleEndian::write_u32(&mut buf[OFFSET_CHECKSUM..], self.checksum);

        buf
    }
}
