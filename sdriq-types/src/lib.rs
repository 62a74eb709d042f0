pub mod error;
pub mod header;
pub mod sample_size;

pub use error::*;
pub use header::*;
pub use sample_size::*;
