use std::{
    io::{ErrorKind, Read, Write},
    time::{Duration, Instant},
};

use sdriq_types::{SdriqError, SdriqResult};

/// Гранулярность размера чанка копирования (байт)
pub const CHUNK_BLOCK_SIZE: usize = 4096;

/// Потоковое копирование выборок, следующих за заголовком.
///
/// Содержимое не декодируется: каждый прочитанный кусок сразу целиком
/// пишется в приёмник. Память ограничена одним буфером `chunk_size` байт.
pub struct StreamTranscoder {
    buf: Vec<u8>,
}

/// Итог копирования полезной нагрузки.
#[derive(Debug)]
pub struct CopyReport {
    /// Байт передано в приёмник.
    pub bytes_copied: u64,
    /// Количество непустых чтений, переданных в приёмник.
    pub chunks: u64,
    /// Время копирования.
    pub elapsed: Duration,
    /// `Some(CopyAborted)` если чтение оборвалось ошибкой.
    pub aborted: Option<SdriqError>,
}

impl StreamTranscoder {
    /// Создаёт копировщик. `chunk_size` — положительное кратное 4096.
    pub fn new(chunk_size: usize) -> SdriqResult<Self> {
        if chunk_size == 0 || chunk_size % CHUNK_BLOCK_SIZE != 0 {
            return Err(SdriqError::InvalidChunkSize(chunk_size));
        }

        Ok(Self {
            buf: vec![0u8; chunk_size],
        })
    }

    /// То же, что [`StreamTranscoder::new`], но размер задан в блоках по 4096.
    pub fn with_blocks(blocks: u32) -> SdriqResult<Self> {
        Self::new(chunk_size_from_blocks(blocks)?)
    }

    pub fn chunk_size(&self) -> usize {
        self.buf.len()
    }

    /// Копирует `source` в `destination` до EOF.
    ///
    /// Ошибка чтения не фатальна: копирование прекращается, в приёмнике
    /// остаётся корректный префикс, а в отчёте выставляется `aborted`.
    /// Ошибка записи возвращается как `Err`.
    pub fn copy<R: Read, W: Write>(
        &mut self,
        source: &mut R,
        destination: &mut W,
    ) -> SdriqResult<CopyReport> {
        let started = Instant::now();
        let mut bytes_copied = 0u64;
        let mut chunks = 0u64;
        let mut aborted = None;

        loop {
            match source.read(&mut self.buf) {
                Ok(0) => break,
                Ok(n) => {
                    destination.write_all(&self.buf[..n])?;
                    bytes_copied += n as u64;
                    chunks += 1;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    aborted = Some(SdriqError::CopyAborted {
                        copied: bytes_copied,
                        source: e,
                    });
                    break;
                }
            }
        }

        Ok(CopyReport {
            bytes_copied,
            chunks,
            elapsed: started.elapsed(),
            aborted,
        })
    }
}

/// Переводит число блоков `--bz` в байты.
pub fn chunk_size_from_blocks(blocks: u32) -> SdriqResult<usize> {
    let requested = (blocks as usize).saturating_mul(CHUNK_BLOCK_SIZE);

    (blocks as usize)
        .checked_mul(CHUNK_BLOCK_SIZE)
        .filter(|&size| size > 0)
        .ok_or(SdriqError::InvalidChunkSize(requested))
}

/// Convenience: копирование одним вызовом.
pub fn copy_payload<R: Read, W: Write>(
    source: &mut R,
    destination: &mut W,
    chunk_size: usize,
) -> SdriqResult<CopyReport> {
    StreamTranscoder::new(chunk_size)?.copy(source, destination)
}

impl CopyReport {
    /// `true` если поток дочитан до EOF без ошибок.
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }

    /// Скорость копирования в МБ/с.
    pub fn speed_mbps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();

        if secs < 1e-9 {
            return 0.0;
        }

        self.bytes_copied as f64 / secs / 1_000_000.0
    }
}

impl std::fmt::Display for CopyReport {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(f, "  Bytes copied  : {}", self.bytes_copied)?;
        writeln!(f, "  Chunks        : {}", self.chunks)?;
        writeln!(f, "  Duration      : {:.3}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "  Copy speed    : {:.1} MB/s", self.speed_mbps())?;
        match &self.aborted {
            None => writeln!(f, "  Status        : complete")?,
            Some(e) => writeln!(f, "  Status        : partial ({e})")?,
        }
        write!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")
    }
}
