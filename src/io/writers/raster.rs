use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ImageError, RgbaImage};

use crate::error::{Error, Result};

pub fn write_png(output: &Path, image: &RgbaImage) -> Result<()> {
    write_with(output, |writer| {
        image.write_with_encoder(PngEncoder::new(writer))
    })
}

/// Lossless WebP; the encoder has no quality knob.
pub fn write_webp(output: &Path, image: &RgbaImage) -> Result<()> {
    write_with(output, |writer| {
        image.write_with_encoder(WebPEncoder::new_lossless(writer))
    })
}

fn write_with<F>(output: &Path, encode: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> image::ImageResult<()>,
{
    let write_err = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer).map_err(|e| match e {
        ImageError::IoError(source) => write_err(source),
        other => Error::encode(output, other),
    })?;
    writer.flush().map_err(write_err)?;
    Ok(())
}
