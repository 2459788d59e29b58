//! folio-ui - UI types and components for the portfolio page
//!
//! Contains display types, browser interop, and pure view components. Pages
//! in folio-web compose these with the embedded content.

pub mod components;
pub mod display_types;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
