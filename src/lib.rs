#![doc = r#"
caseshot: product photos from phone-case shots.

This crate cuts the phone-case silhouette out of a photo with a transparent
background, cleans stray pixels off its edges, and pastes it into the
low-opacity placeholder of a template image. It powers the `caseshot` CLI and
can be embedded in your own Rust applications.

Quick start: compose one pair to a file
---------------------------------------
```rust,no_run
use std::path::Path;
use caseshot::{CompositeParams, OutputFormat, ResizeMethod, process_pair_to_path};

fn main() -> caseshot::Result<()> {
    let params = CompositeParams::builder()
        .format(OutputFormat::Jpeg)
        .quality(90)
        .resize_method(ResizeMethod::Lanczos)
        .build()?;

    process_pair_to_path(
        Path::new("/photos/red_case.png"),
        Path::new("/templates/studio.png"),
        Path::new("/out/red_case_studio.jpg"),
        &params,
    )
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use caseshot::{BatchOptions, CompositeParams, NamePattern, discover_images, process_batch};

fn main() -> caseshot::Result<()> {
    let cases = discover_images(Path::new("/photos"))?;
    let templates = discover_images(Path::new("/templates"))?;
    let pattern = NamePattern::parse("{input}_{template}_{timestamp}")?;

    let report = process_batch(
        &cases,
        &templates,
        Path::new("/out"),
        &pattern,
        &CompositeParams::default(),
        BatchOptions { progress: true },
    )?;

    println!("ok={} failed={}", report.succeeded, report.failed);
    Ok(())
}
```

Error handling
--------------
All public functions return `caseshot::Result<T>`. Load, encode and write
failures are separate `caseshot::Error` variants so callers can decide what
to skip.

```rust,no_run
use std::path::Path;
use caseshot::{CompositeParams, Error, process_pair};

fn main() {
    match process_pair(Path::new("case.png"), Path::new("tpl.png"), &CompositeParams::default()) {
        Ok(image) => println!("{}x{}", image.width(), image.height()),
        Err(Error::Load { path, .. }) => eprintln!("could not read {path:?}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`]: high-level entry points and the batch runner.
- [`core`]: parameters and the mask/contour/composite primitives.
- [`io`]: discovery, loading, output naming and encoders.
- [`types`]: `OutputFormat`, `ResizeMethod`, `BoundingBox`.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use core::params::{CompositeParams, ParamOverrides, ParamsBuilder};
pub use error::{Error, Result};
pub use types::{BoundingBox, OutputFormat, ResizeMethod};

// Pipeline stages
pub use core::processing::composite::composite;
pub use core::processing::extract::extract_case;
pub use core::processing::placeholder::locate_placeholder;

// I/O helpers
pub use io::naming::{DEFAULT_NAME_PATTERN, NamePattern};
pub use io::{discover_images, load_rgba};

// High-level API re-exports
pub use api::{
    BatchOptions, BatchReport, PairOutcome, compose_images, process_batch, process_pair,
    process_pair_to_path,
};
