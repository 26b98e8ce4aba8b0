pub mod adapters;
pub mod config;
pub mod core;
pub mod utils;

pub use adapters::maptiler::MapTilerAdapter;
pub use config::MapTilerConfig;
pub use core::{CrsAdapter, Resolution};
pub use utils::error::{ResolveError, Result};
