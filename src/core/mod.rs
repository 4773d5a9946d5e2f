//! Core compositing building blocks: mask and contour primitives, case
//! extraction, placeholder detection, resizing and alpha pasting. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
