//! Export module for SnipShot
//!
//! Writes captured regions to disk.

mod png;

pub use png::PngExporter;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Nothing to export: frame is {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },
}

pub type ExportResult<T> = Result<T, ExportError>;
