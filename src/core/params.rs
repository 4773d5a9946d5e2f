use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::types::{OutputFormat, ResizeMethod};

pub const DEFAULT_QUALITY: u8 = 95;
pub const DEFAULT_ENHANCE_FACTOR: f32 = 1.1;

/// Compositing parameters suitable for config files and CLI overrides.
///
/// Built once per run through [`ParamsBuilder`]; the fields are public for
/// reading but a value is never modified after `build()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeParams {
    /// Encoder quality, 1..=100 (JPEG only)
    pub output_quality: u8,
    pub output_format: OutputFormat,
    pub auto_adjust_brightness: bool,
    pub auto_adjust_contrast: bool,
    /// Keep only the largest opaque contour of the case image
    pub detect_edges: bool,
    pub resize_method: ResizeMethod,
    pub brightness_factor: f32,
    pub contrast_factor: f32,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            output_quality: DEFAULT_QUALITY,
            output_format: OutputFormat::Png,
            auto_adjust_brightness: true,
            auto_adjust_contrast: true,
            detect_edges: true,
            resize_method: ResizeMethod::Lanczos,
            brightness_factor: DEFAULT_ENHANCE_FACTOR,
            contrast_factor: DEFAULT_ENHANCE_FACTOR,
        }
    }
}

impl CompositeParams {
    pub fn builder() -> ParamsBuilder {
        ParamsBuilder::default()
    }
}

/// Partial parameter set; `None` leaves the underlying value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamOverrides {
    pub output_quality: Option<u8>,
    pub output_format: Option<OutputFormat>,
    pub auto_adjust_brightness: Option<bool>,
    pub auto_adjust_contrast: Option<bool>,
    pub detect_edges: Option<bool>,
    pub resize_method: Option<ResizeMethod>,
    pub brightness_factor: Option<f32>,
    pub contrast_factor: Option<f32>,
}

impl ParamOverrides {
    /// Read overrides from a JSON file.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Overlays overrides onto defaults and validates the result.
#[derive(Debug, Clone, Default)]
pub struct ParamsBuilder {
    params: CompositeParams,
}

impl ParamsBuilder {
    /// Apply every field that is set in `overrides`. Later calls win.
    pub fn apply(mut self, overrides: &ParamOverrides) -> Self {
        let p = &mut self.params;
        if let Some(v) = overrides.output_quality {
            p.output_quality = v;
        }
        if let Some(v) = overrides.output_format {
            p.output_format = v;
        }
        if let Some(v) = overrides.auto_adjust_brightness {
            p.auto_adjust_brightness = v;
        }
        if let Some(v) = overrides.auto_adjust_contrast {
            p.auto_adjust_contrast = v;
        }
        if let Some(v) = overrides.detect_edges {
            p.detect_edges = v;
        }
        if let Some(v) = overrides.resize_method {
            p.resize_method = v;
        }
        if let Some(v) = overrides.brightness_factor {
            p.brightness_factor = v;
        }
        if let Some(v) = overrides.contrast_factor {
            p.contrast_factor = v;
        }
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.params.output_quality = quality;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.params.output_format = format;
        self
    }

    pub fn detect_edges(mut self, enabled: bool) -> Self {
        self.params.detect_edges = enabled;
        self
    }

    pub fn resize_method(mut self, method: ResizeMethod) -> Self {
        self.params.resize_method = method;
        self
    }

    pub fn brightness(mut self, enabled: bool, factor: f32) -> Self {
        self.params.auto_adjust_brightness = enabled;
        self.params.brightness_factor = factor;
        self
    }

    pub fn contrast(mut self, enabled: bool, factor: f32) -> Self {
        self.params.auto_adjust_contrast = enabled;
        self.params.contrast_factor = factor;
        self
    }

    pub fn build(self) -> Result<CompositeParams> {
        let mut params = self.params;

        if !(1..=100).contains(&params.output_quality) {
            return Err(Error::InvalidArgument {
                arg: "quality",
                value: params.output_quality.to_string(),
            });
        }

        params.brightness_factor = validate_factor("brightness", params.brightness_factor)?;
        params.contrast_factor = validate_factor("contrast", params.contrast_factor)?;

        Ok(params)
    }
}

fn validate_factor(arg: &'static str, factor: f32) -> Result<f32> {
    if !factor.is_finite() {
        return Err(Error::InvalidArgument {
            arg,
            value: factor.to_string(),
        });
    }
    if factor < 0.0 {
        warn!("{} factor {} is negative, clamping to 0", arg, factor);
        return Ok(0.0);
    }
    Ok(factor)
}
