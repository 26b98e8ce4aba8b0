pub mod maptiler;

pub use maptiler::MapTilerAdapter;
