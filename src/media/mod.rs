//! Image loading for avatars and the hero photo.

pub mod image;
