//! Shared types and enums used across caseshot.
//! Includes `OutputFormat`, `ResizeMethod` and the `BoundingBox` of a placeholder region.
use std::str::FromStr;

use clap::ValueEnum;
use fast_image_resize::{FilterType, ResizeAlg};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Png,
    #[value(name = "jpg", alias = "jpeg")]
    Jpeg,
    Webp,
}

impl OutputFormat {
    /// Canonical encoder identifier ("PNG", "JPEG", "WEBP").
    pub fn encoder_name(&self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Webp => "WEBP",
        }
    }

    /// File extension appended to generated output names.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Webp => "webp",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "webp" => Ok(OutputFormat::Webp),
            _ => Err(Error::InvalidArgument {
                arg: "format",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encoder_name())
    }
}

/// Resampling filter used when fitting a case into its placeholder.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ResizeMethod {
    Nearest,
    Box,
    Bilinear,
    Hamming,
    Bicubic,
    #[default]
    Lanczos,
}

impl ResizeMethod {
    pub fn resize_alg(&self) -> ResizeAlg {
        match self {
            ResizeMethod::Nearest => ResizeAlg::Nearest,
            ResizeMethod::Box => ResizeAlg::Convolution(FilterType::Box),
            ResizeMethod::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResizeMethod::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
            ResizeMethod::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResizeMethod::Lanczos => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

impl FromStr for ResizeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(ResizeMethod::Nearest),
            "box" => Ok(ResizeMethod::Box),
            "bilinear" => Ok(ResizeMethod::Bilinear),
            "hamming" => Ok(ResizeMethod::Hamming),
            "bicubic" => Ok(ResizeMethod::Bicubic),
            "lanczos" => Ok(ResizeMethod::Lanczos),
            _ => Err(Error::InvalidArgument {
                arg: "resize_method",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ResizeMethod {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for ResizeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResizeMethod::Nearest => "nearest",
            ResizeMethod::Box => "box",
            ResizeMethod::Bilinear => "bilinear",
            ResizeMethod::Hamming => "hamming",
            ResizeMethod::Bicubic => "bicubic",
            ResizeMethod::Lanczos => "lanczos",
        };
        write!(f, "{}", s)
    }
}

/// Axis-aligned region in pixel coordinates, inclusive of its edge pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centered quadrant used when a template has no detectable placeholder.
    pub fn centered_quadrant(width: u32, height: u32) -> Self {
        Self {
            x: width / 4,
            y: height / 4,
            width: (width / 2).max(1),
            height: (height / 2).max(1),
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}
