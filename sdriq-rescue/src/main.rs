use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};
use sdriq_core::TimestampUnit;
use sdriq_rescue::{
    parse_freq_hz, parse_rate_hz, Overrides, RescueConfig, RescueSession, TimestampOverride,
};

#[derive(Parser, Debug)]
#[command(
    name = "sdriq-rescue",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect and fix the header of a .sdriq IQ capture",
    long_about = None,
)]
struct Cli {
    /// Входной .sdriq файл
    #[arg(long = "in")]
    input: Option<PathBuf>,
    /// Выходной файл: заголовок перезаписывается, выборки копируются
    #[arg(long = "out")]
    output: Option<PathBuf>,
    /// Частота дискретизации (75000, 75kHz, 2MHz)
    #[arg(long = "sr", value_parser = parse_rate_hz)]
    sample_rate: Option<u32>,
    /// Несущая частота (435000000, 435MHz, 1.602GHz)
    #[arg(long = "cf", value_parser = parse_freq_hz)]
    center_freq: Option<u64>,
    /// Разрядность выборок: 16 или 24
    #[arg(long = "sz")]
    sample_size: Option<u32>,
    /// Время начала записи в формате RFC 3339
    #[arg(long = "ts")]
    timestamp: Option<String>,
    /// Время начала записи = текущее время (--ts имеет приоритет)
    #[arg(long)]
    now: bool,
    /// Время во входном файле уже в миллисекундах (по умолчанию — секунды)
    #[arg(long)]
    msec: bool,
    /// Размер чанка копирования в блоках по 4096 байт
    #[arg(long = "bz", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    chunk_blocks: u32,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let Some(input_path) = cli.input else {
        info!("No input file given");
        return;
    };

    let overrides = Overrides {
        sample_rate: cli.sample_rate,
        center_frequency: cli.center_freq,
        sample_size: cli.sample_size,
        timestamp: TimestampOverride::from_flags(cli.timestamp, cli.now),
    };

    let config = RescueConfig {
        input_path,
        output_path: cli.output,
        timestamp_unit: if cli.msec {
            TimestampUnit::Milliseconds
        } else {
            TimestampUnit::Seconds
        },
        chunk_blocks: cli.chunk_blocks,
        overrides,
    };

    let session = match RescueSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    match session.run() {
        Ok(outcome) => {
            if outcome.copy.as_ref().is_some_and(|c| !c.is_complete()) {
                warn!("⚠ Payload copy was cut short, see above");
            }
        }
        Err(e) => {
            error!("Rescue failed: {e}");
            std::process::exit(1);
        }
    }
}
