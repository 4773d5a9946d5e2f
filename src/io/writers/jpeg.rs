use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

/// Write an RGBA image as a baseline JPEG. The alpha channel is discarded.
pub fn write_rgba_jpeg(output: &Path, image: &RgbaImage, quality: u8) -> Result<()> {
    let (cols, rows) = image.dimensions();
    let (cols, rows) = match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(c), Ok(r)) => (c, r),
        _ => {
            return Err(Error::encode(
                output,
                format!("{}x{} exceeds the JPEG size limit of 65535", cols, rows),
            ));
        }
    };

    let file = File::create(output).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder
        .encode(image.as_raw(), cols, rows, ColorType::Rgba)
        .map_err(|e| Error::encode(output, e))?;
    writer.flush().map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(())
}
