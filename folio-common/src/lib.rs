//! folio-common - Pure lightbox and gallery logic for the portfolio page
//!
//! Nothing in this crate touches the DOM. Browser side effects are reached
//! through the [`PageEffects`] trait so the controller can be driven from
//! tests with a recording implementation.

pub mod error;
pub mod gallery;
pub mod lightbox;

pub use error::{GalleryError, LightboxError};
pub use gallery::{AspectRatio, Gallery, GalleryImage, THUMBNAIL_ROW_HEIGHT};
pub use lightbox::{Lightbox, LightboxAction, LightboxGroup, LightboxState, PageEffects};
