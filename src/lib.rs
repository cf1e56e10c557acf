pub mod carousel;
pub mod config;
pub mod content;

// Image decoding (local assets only)
pub mod media;
