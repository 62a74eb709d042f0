use thiserror::Error;

/// Результат для операций с заголовком .sdriq
pub type SdriqResult<T> = std::result::Result<T, SdriqError>;

/// Типы ошибок кодека заголовка и стадии копирования.
#[derive(Debug, Error)]
pub enum SdriqError {
    /// Прочитано меньше 32 байт заголовка
    #[error("Header truncated: got {found} of 32 bytes")]
    HeaderTruncated { found: usize },

    /// Размер чанка не кратен 4096 или равен нулю
    #[error("Invalid chunk size: {0} (must be a positive multiple of 4096)")]
    InvalidChunkSize(usize),

    /// Ошибка чтения посреди копирования полезной нагрузки
    #[error("Copy aborted after {copied} bytes: {source}")]
    CopyAborted {
        copied: u64,
        #[source]
        source: std::io::Error,
    },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
