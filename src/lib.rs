pub mod cli;
pub mod error;
pub mod image;
pub mod metadata;
pub mod sector;

pub use error::{ImageError, Result};
pub use image::{assemble, build_image, read_image, AssembledImage, ImageLayout, ImageView};
pub use metadata::{MetadataRecord, PayloadName, MAX_NAME_LEN, METADATA_HEADER_LEN};
pub use sector::{METADATA_SECTOR_COUNT, SECTOR_SIZE};
