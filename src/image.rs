// src/image.rs
//! Image assembly: bootstrap sectors, one metadata sector, payload sectors.

use std::fs;
use std::path::Path;

use crate::error::{ImageError, Result};
use crate::metadata::{MetadataRecord, PayloadName};
use crate::sector::{pad_to_sector, sector_count, METADATA_SECTOR_COUNT, SECTOR_SIZE};

/// Where each region landed, in sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLayout {
    pub bootstrap_sectors: usize,
    pub metadata_sector: usize,
    pub payload_start_sector: usize,
    pub payload_sectors: usize,
    pub payload_size: usize,
}

impl ImageLayout {
    pub fn total_sectors(&self) -> usize {
        self.payload_start_sector + self.payload_sectors
    }

    pub fn total_bytes(&self) -> usize {
        self.total_sectors() * SECTOR_SIZE
    }
}

/// A fully assembled image, still in memory.
#[derive(Debug, Clone)]
pub struct AssembledImage {
    pub bytes: Vec<u8>,
    pub layout: ImageLayout,
    pub metadata: MetadataRecord,
}

/// Assemble an image from the two blobs. Nothing is written anywhere.
pub fn assemble(bootstrap: &[u8], payload: &[u8], name: &str) -> Result<AssembledImage> {
    let payload_name = PayloadName::new(name)?;

    let mut image = bootstrap.to_vec();
    pad_to_sector(&mut image);

    let metadata_sector = image.len() / SECTOR_SIZE;
    let payload_start_sector = metadata_sector + METADATA_SECTOR_COUNT;
    let metadata = MetadataRecord::new(payload.len(), payload_start_sector, payload_name)?;

    image.reserve(METADATA_SECTOR_COUNT * SECTOR_SIZE + payload.len() + SECTOR_SIZE);
    image.extend_from_slice(&metadata.encode());
    pad_to_sector(&mut image);

    image.extend_from_slice(payload);
    pad_to_sector(&mut image);

    let layout = ImageLayout {
        bootstrap_sectors: sector_count(bootstrap.len()),
        metadata_sector,
        payload_start_sector,
        payload_sectors: sector_count(payload.len()),
        payload_size: payload.len(),
    };
    debug_assert_eq!(image.len(), layout.total_bytes());

    Ok(AssembledImage {
        bytes: image,
        layout,
        metadata,
    })
}

/// Read both inputs, assemble, and write the image to `output`.
///
/// The payload path, as given, becomes the name recorded in the metadata
/// sector. `output` is created or truncated only once the whole image has
/// been built, so a failed run never leaves a partial image behind.
pub fn build_image(output: &Path, bootstrap: &Path, payload: &Path) -> Result<AssembledImage> {
    let bootstrap_bytes = read_input(bootstrap)?;
    let payload_bytes = read_input(payload)?;
    let name = payload.to_string_lossy();

    let image = assemble(&bootstrap_bytes, &payload_bytes, &name)?;

    fs::write(output, &image.bytes).map_err(|source| ImageError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(image)
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Payload located inside an existing image.
#[derive(Debug)]
pub struct ImageView<'a> {
    pub metadata: MetadataRecord,
    pub payload: &'a [u8],
}

/// Locate the metadata sector right after `bootstrap_sectors` and slice out
/// the payload it points at.
pub fn read_image(image: &[u8], bootstrap_sectors: usize) -> Result<ImageView<'_>> {
    let sector = bootstrap_sectors
        .checked_mul(SECTOR_SIZE)
        .and_then(|start| image.get(start..))
        .unwrap_or_default();
    let metadata = MetadataRecord::decode(sector)?;

    let offset = metadata.payload_start_sector as usize * SECTOR_SIZE;
    let payload = offset
        .checked_add(metadata.payload_size as usize)
        .and_then(|end| image.get(offset..end))
        .ok_or(ImageError::PayloadOutOfBounds {
            start: metadata.payload_start_sector,
            size: metadata.payload_size,
            image_len: image.len(),
        })?;

    Ok(ImageView { metadata, payload })
}
