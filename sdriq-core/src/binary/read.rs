use std::io::{ErrorKind, Read};

use sdriq_types::{HeaderRecord, SdriqResult, HEADER_SIZE};

use crate::HeaderCodec;

/// Читает и декодирует заголовок из начала потока.
///
/// Дочитывает до 32 байт или до EOF. Если поток закончился раньше,
/// возвращает `HeaderTruncated` с числом реально прочитанных байт.
pub fn read_header<R: Read>(reader: &mut R) -> SdriqResult<HeaderRecord> {
    let mut buf = [0u8; HEADER_SIZE];
    let mut filled = 0;

    while filled < HEADER_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    HeaderRecord::decode(&buf[..filled])
}
