// src/sector.rs
//! Sector arithmetic shared by every region of the image

/// Size of one disk sector in bytes. Every region boundary is aligned to it.
pub const SECTOR_SIZE: usize = 512;

/// Number of sectors reserved for the metadata record between the
/// bootstrap and the payload.
pub const METADATA_SECTOR_COUNT: usize = 1;

/// Round `len` up to the next sector boundary.
pub const fn align_up(len: usize) -> usize {
    sector_count(len) * SECTOR_SIZE
}

/// Number of sectors needed to hold `len` bytes.
pub const fn sector_count(len: usize) -> usize {
    len.div_ceil(SECTOR_SIZE)
}

/// Zero-fill `buf` up to the next sector boundary. Aligned buffers are left alone.
pub fn pad_to_sector(buf: &mut Vec<u8>) {
    buf.resize(align_up(buf.len()), 0);
}
