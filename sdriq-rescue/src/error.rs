use std::path::PathBuf;

use thiserror::Error;

pub type RescueResult<T> = std::result::Result<T, RescueError>;

/// Фатальные ошибки запуска. Восстановимые ситуации (CRC, неверные
/// переопределения, оборванное копирование) сюда не попадают.
#[derive(Debug, Error)]
pub enum RescueError {
    /// Входной файл не найден или не открывается
    #[error("Cannot open input {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Выходной файл не создаётся
    #[error("Cannot create output {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ошибка кодека заголовка или стадии копирования
    #[error("SDRIQ error: {0}")]
    Sdriq(#[from] sdriq_types::SdriqError),

    /// Ошибка записи/сброса выходного файла
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Некорректная конфигурация
    #[error("Config error: {0}")]
    Config(String),
}
