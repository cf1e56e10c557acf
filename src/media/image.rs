//! Background image loader.
//!
//! Local references are read and decoded on worker threads into RGBA
//! buffers ready for egui textures. Remote references are never fetched;
//! they resolve straight to `Unavailable` so the page draws its fallback.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::content::ImageSource;

/// Longest edge kept after decoding.
pub const MAX_EDGE: u32 = 640;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// What the page should draw for a reference.
pub enum ImageStatus<'a> {
    /// Not requested yet.
    Unknown,
    Loading,
    Ready(&'a ImageData),
    /// Missing, undecodable or remote: draw the fallback.
    Unavailable,
}

/// Manages background reading and decoding, keyed by `ImageSource::key`.
pub struct ImageLoader {
    asset_dir: PathBuf,
    pending: HashMap<String, mpsc::Receiver<Option<ImageData>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
}

impl ImageLoader {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Request an image. Repeated requests for the same source are ignored.
    pub fn request(&mut self, source: &ImageSource) {
        let key = source.key();
        if self.loaded.contains_key(&key)
            || self.pending.contains_key(&key)
            || self.failed.contains(&key)
        {
            return;
        }

        let Some(path) = source.resolve(&self.asset_dir) else {
            log::debug!("image {key}: remote source, using fallback");
            self.failed.insert(key);
            return;
        };

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(read_and_decode(&path));
        });
        self.pending.insert(key, rx);
    }

    /// Poll for completed decodes. Call every frame.
    pub fn poll(&mut self) {
        let mut completed = Vec::new();
        for (key, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Some(data)) => {
                    self.loaded.insert(key.clone(), data);
                    completed.push(key.clone());
                }
                Ok(None) | Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(key.clone());
                    completed.push(key.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for key in completed {
            self.pending.remove(&key);
        }
    }

    pub fn status(&self, source: &ImageSource) -> ImageStatus<'_> {
        let key = source.key();
        if let Some(data) = self.loaded.get(&key) {
            ImageStatus::Ready(data)
        } else if self.pending.contains_key(&key) {
            ImageStatus::Loading
        } else if self.failed.contains(&key) {
            ImageStatus::Unavailable
        } else {
            ImageStatus::Unknown
        }
    }

    pub fn get(&self, source: &ImageSource) -> Option<&ImageData> {
        self.loaded.get(&source.key())
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn read_and_decode(path: &Path) -> Option<ImageData> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("image {}: {err}", path.display());
            return None;
        }
    };
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(err) => {
            log::warn!("image {}: {err}", path.display());
            return None;
        }
    };

    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    // Avatars and the hero pane never need more than MAX_EDGE pixels.
    let longest = w.max(h);
    let (w, h, pixels) = if longest > MAX_EDGE {
        let ratio = MAX_EDGE as f32 / longest as f32;
        let new_w = ((w as f32 * ratio) as u32).max(1);
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized =
            image::imageops::resize(&rgba, new_w, new_h, image::imageops::FilterType::Triangle);
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Some(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}
