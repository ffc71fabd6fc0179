// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("payload name '{0}' is not ASCII")]
    NameNotAscii(String),

    #[error("payload name '{0}' contains a NUL byte")]
    NameContainsNul(String),

    #[error("payload name '{name}' is {len} bytes, metadata sector fits at most {max}")]
    NameTooLong { name: String, len: usize, max: usize },

    #[error("payload is {0} bytes, size field is 32 bits")]
    PayloadTooLarge(usize),

    #[error("payload start sector {0} does not fit in 32 bits")]
    StartSectorOverflow(usize),

    #[error("metadata sector is truncated ({0} bytes)")]
    TruncatedMetadata(usize),

    #[error("payload name in metadata sector is not NUL terminated")]
    UnterminatedName,

    #[error(
        "payload of {size} bytes at sector {start} runs past the end of a {image_len} byte image"
    )]
    PayloadOutOfBounds {
        start: u32,
        size: u32,
        image_len: usize,
    },
}

pub type Result<T> = std::result::Result<T, ImageError>;
