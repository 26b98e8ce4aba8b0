pub mod adapter;
pub mod model;

pub use adapter::{epsg_code, is_valid_crs, is_valid_crs_format, CrsAdapter, SUPPORTED_FORMATS};
pub use model::Resolution;
