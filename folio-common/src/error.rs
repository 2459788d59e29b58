use thiserror::Error;

/// Rejected `Lightbox::open` input. The controller state is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LightboxError {
    #[error("cannot open a lightbox for a group with no images")]
    EmptyGroup,
    #[error("start index {index} is out of range for a group of {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Invalid gallery aspect ratio in page content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("malformed aspect ratio {0:?}, expected \"W:H\"")]
    Malformed(String),
    #[error("aspect ratio {0:?} must have positive sides")]
    NonPositive(String),
}
