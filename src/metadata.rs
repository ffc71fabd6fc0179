// src/metadata.rs
//! Metadata sector placed between the bootstrap and the payload.
//!
//! Layout (little-endian):
//!
//! | Offset | Size | Field                  |
//! |--------|------|------------------------|
//! | 0      | 4    | `payload_size`         |
//! | 4      | 4    | `payload_start_sector` |
//! | 8      | n    | `payload_name` (ASCII) |
//! | 8 + n  | 1    | NUL                    |
//!
//! The rest of the sector is zero.

use crate::error::{ImageError, Result};
use crate::sector::SECTOR_SIZE;

/// Bytes taken by the two fixed `u32` fields.
pub const METADATA_HEADER_LEN: usize = 8;

/// Longest name that keeps the encoded record strictly below one sector.
pub const MAX_NAME_LEN: usize = SECTOR_SIZE - METADATA_HEADER_LEN - 1 - 1;

const _: () = assert!(METADATA_HEADER_LEN + MAX_NAME_LEN + 1 < SECTOR_SIZE);

/// Validated payload name: ASCII, no NUL, short enough for the metadata sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadName(String);

impl PayloadName {
    pub fn new(name: &str) -> Result<Self> {
        if !name.is_ascii() {
            return Err(ImageError::NameNotAscii(name.to_string()));
        }
        if name.as_bytes().contains(&0) {
            return Err(ImageError::NameContainsNul(name.to_string()));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(ImageError::NameTooLong {
                name: name.to_string(),
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Record read by the bootstrap code to find and load the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Unpadded payload length in bytes.
    pub payload_size: u32,
    /// First sector of the payload region.
    pub payload_start_sector: u32,
    pub payload_name: PayloadName,
}

impl MetadataRecord {
    /// Build a record, checking that both counters fit their 32-bit fields.
    pub fn new(
        payload_len: usize,
        payload_start_sector: usize,
        payload_name: PayloadName,
    ) -> Result<Self> {
        let payload_size =
            u32::try_from(payload_len).map_err(|_| ImageError::PayloadTooLarge(payload_len))?;
        let payload_start_sector = u32::try_from(payload_start_sector)
            .map_err(|_| ImageError::StartSectorOverflow(payload_start_sector))?;

        Ok(Self {
            payload_size,
            payload_start_sector,
            payload_name,
        })
    }

    /// Length of the record without sector padding, NUL included.
    pub fn encoded_len(&self) -> usize {
        METADATA_HEADER_LEN + self.payload_name.len() + 1
    }

    /// Encode the record into a full, zero-padded sector.
    pub fn encode(&self) -> [u8; SECTOR_SIZE] {
        let mut sector = [0u8; SECTOR_SIZE];
        let name = self.payload_name.as_str().as_bytes();

        sector[0..4].copy_from_slice(&self.payload_size.to_le_bytes());
        sector[4..8].copy_from_slice(&self.payload_start_sector.to_le_bytes());
        sector[METADATA_HEADER_LEN..METADATA_HEADER_LEN + name.len()].copy_from_slice(name);
        // NUL terminator is already there: the sector starts zeroed.

        sector
    }

    /// Parse a metadata sector back, as the bootstrap code would.
    pub fn decode(sector: &[u8]) -> Result<Self> {
        if sector.len() < SECTOR_SIZE {
            return Err(ImageError::TruncatedMetadata(sector.len()));
        }

        let payload_size = read_u32_le(&sector[0..4]);
        let payload_start_sector = read_u32_le(&sector[4..8]);

        let name_area = &sector[METADATA_HEADER_LEN..SECTOR_SIZE];
        let nul = name_area
            .iter()
            .position(|&b| b == 0)
            .ok_or(ImageError::UnterminatedName)?;
        let name = String::from_utf8_lossy(&name_area[..nul]);

        Ok(Self {
            payload_size,
            payload_start_sector,
            payload_name: PayloadName::new(&name)?,
        })
    }
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(bytes);
    u32::from_le_bytes(raw)
}
