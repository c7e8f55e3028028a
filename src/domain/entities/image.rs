//! Stored animal photos.

use serde::Serialize;

/// Public prefix under which stored images are served.
pub const IMAGE_URL_PREFIX: &str = "/images";

/// A photo accepted by the image store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredImage {
    pub key: String,
    pub url: String,
    pub size: usize,
}

impl StoredImage {
    pub fn new(key: String, size: usize) -> Self {
        let url = format!("{}/{}", IMAGE_URL_PREFIX, key);
        Self { key, url, size }
    }
}
