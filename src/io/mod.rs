//! I/O layer: locating input images, decoding them to RGBA, naming outputs,
//! and the `writers` that encode composites and batch reports.
pub mod discovery;
pub use discovery::{SUPPORTED_EXTENSIONS, discover_images, has_image_extension};

pub mod loader;
pub use loader::load_rgba;

pub mod naming;
pub use naming::{NamePattern, output_path};

pub mod writers;
