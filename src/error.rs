//! Error types for the gallery viewer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// A gallery name that is not part of the index
    #[error("unknown gallery '{0}'")]
    UnknownGallery(String),
    /// An image name that is not part of the named gallery
    #[error("unknown image '{image}' in gallery '{gallery}'")]
    UnknownImage { gallery: String, image: String },
    /// A pagination position past the end of the gallery
    #[error("gallery '{gallery}' has no image at position {position}")]
    PositionOutOfRange { gallery: String, position: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to walk library: {0}")]
    Walk(#[from] ignore::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("could not determine config directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, GalleryError>;
