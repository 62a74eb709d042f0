use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, info, warn};
use sdriq_core::{
    now_millis, read_header, reconcile, write_header, CopyReport, HeaderReport, IntegrityGuard,
    StreamTranscoder, HEADER_SIZE,
};

use crate::{OverrideWarning, RescueConfig, RescueError, RescueResult};

/// Один запуск: чтение заголовка, правка, запись и копирование выборок.
pub struct RescueSession {
    config: RescueConfig,
    transcoder: StreamTranscoder,
}

/// Итог запуска.
#[derive(Debug)]
pub struct RescueOutcome {
    /// Заголовок в том виде, в каком он прочитан с диска. Время начала
    /// для вывода уже приведено к мс.
    pub original: HeaderReport,
    /// Заголовок после приведения времени, переопределений и пересчёта CRC.
    pub rewritten: HeaderReport,
    pub warnings: Vec<OverrideWarning>,
    /// `None` если выходной файл не задан.
    pub copy: Option<CopyReport>,
}

impl RescueSession {
    /// Создаёт сессию, проверяя конфигурацию.
    pub fn new(config: RescueConfig) -> RescueResult<Self> {
        let transcoder = StreamTranscoder::with_blocks(config.chunk_blocks)?;

        if let Some(out) = &config.output_path {
            if same_file(&config.input_path, out) {
                return Err(RescueError::Config(format!(
                    "output {out:?} is the same file as input"
                )));
            }
        }

        Ok(Self { config, transcoder })
    }

    /// Запускает обработку. Файлы закрываются на любом пути выхода.
    pub fn run(mut self) -> RescueResult<RescueOutcome> {
        let cfg = &self.config;

        let mut input = File::open(&cfg.input_path).map_err(|source| RescueError::OpenInput {
            path: cfg.input_path.clone(),
            source,
        })?;
        let file_len = input.metadata()?.len();

        let header = read_header(&mut input)?;
        // Время приводится к миллисекундам до любых переопределений
        let reconciled = reconcile(&header, cfg.timestamp_unit);

        let original = HeaderReport::new(&header)
            .with_payload_len(file_len.saturating_sub(HEADER_SIZE as u64))
            .with_start_ms(reconciled.start_timestamp);

        info!("Header of {:?}:\n{original}", cfg.input_path);

        if !original.checksum_ok {
            warn!(
                "Header CRC mismatch: stored {:08x}, computed {:08x}. Metadata is still usable",
                header.checksum, original.expected_checksum
            );
        }

        let mut header = reconciled;
        debug!(
            "Timestamp unit {:?}: {} -> {} ms",
            cfg.timestamp_unit, original.record.start_timestamp, header.start_timestamp
        );

        if cfg.overrides.is_empty() {
            debug!("No header overrides given");
        }

        let warnings = cfg.overrides.apply(&mut header, now_millis());
        for w in &warnings {
            warn!("{w}");
        }

        header.recompute_in_place();

        let mut rewritten = HeaderReport::new(&header);
        rewritten.payload_len = original.payload_len;

        info!("Header after update:\n{rewritten}");

        let Some(out_path) = cfg.output_path.clone() else {
            return Ok(RescueOutcome {
                original,
                rewritten,
                warnings,
                copy: None,
            });
        };

        let file = File::create(&out_path).map_err(|source| RescueError::CreateOutput {
            path: out_path.clone(),
            source,
        })?;
        let mut writer = BufWriter::with_capacity(self.transcoder.chunk_size(), file);

        write_header(&mut writer, &header)?;

        let copy = self.transcoder.copy(&mut input, &mut writer)?;
        writer.flush()?;

        if let Some(e) = &copy.aborted {
            warn!("Output {out_path:?} holds only a prefix of the payload: {e}");
        }

        info!("\n{copy}");
        info!("✓ Written: {out_path:?}");

        Ok(RescueOutcome {
            original,
            rewritten,
            warnings,
            copy: Some(copy),
        })
    }
}

fn same_file(
    a: &Path,
    b: &Path,
) -> bool {
    if a == b {
        return true;
    }

    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_chunk_blocks_rejected() {
        let config = RescueConfig {
            chunk_blocks: 0,
            ..Default::default()
        };

        assert!(matches!(
            RescueSession::new(config),
            Err(RescueError::Sdriq(sdriq_core::SdriqError::InvalidChunkSize(_)))
        ));
    }

    #[test]
    fn test_output_equal_to_input_rejected() {
        let config = RescueConfig {
            input_path: "capture.sdriq".into(),
            output_path: Some("capture.sdriq".into()),
            ..Default::default()
        };

        assert!(matches!(
            RescueSession::new(config),
            Err(RescueError::Config(_))
        ));
    }
}
