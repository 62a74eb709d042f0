//! Библиотека заголовка .sdriq
//!
//! Кодек 32-байтного заголовка IQ-записей SDR, контроль CRC32 и потоковое
//! копирование выборок, следующих за заголовком.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use sdriq_core::{read_header, write_header, IntegrityGuard, StreamTranscoder};
//! use std::fs::File;
//!
//! let mut input = File::open("capture.sdriq")?;
//! let mut header = read_header(&mut input)?;
//! header.center_frequency = 145_800_000;
//! header.recompute_in_place();
//!
//! let mut output = File::create("fixed.sdriq")?;
//! write_header(&mut output, &header)?;
//! StreamTranscoder::with_blocks(1)?.copy(&mut input, &mut output)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod codec;
pub mod integrity;
pub mod report;
pub mod timestamp;
pub mod transcoder;

pub use binary::*;
pub use codec::*;
pub use integrity::*;
pub use report::*;
pub use sdriq_types::{error, HeaderRecord, SampleSize, SdriqError, SdriqResult, HEADER_SIZE};
pub use timestamp::*;
pub use transcoder::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
