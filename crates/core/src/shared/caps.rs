use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::constants::OUTPUT_CHANNELS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapsError {
    #[error("frame dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("YUYV 4:2:2 frames need an even width, got {0}")]
    OddYuyvWidth(u32),
    #[error("no native pixel layout for {0} channels")]
    UnsupportedChannels(u8),
    #[error("frame size {width}x{height}x{channels} overflows the address space")]
    Overflow {
        width: u32,
        height: u32,
        channels: usize,
    },
    #[error("unknown pixel format: {0}")]
    UnknownFormat(String),
}

/// Byte layout of the raw frames a detector instance accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Gray8,
    /// Packed Y0 U Y1 V, two bytes per pixel.
    Yuyv422,
    Bgr24,
    Rgb24,
    Bgra32,
    Rgba32,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 6] = [
        PixelFormat::Gray8,
        PixelFormat::Yuyv422,
        PixelFormat::Bgr24,
        PixelFormat::Rgb24,
        PixelFormat::Bgra32,
        PixelFormat::Rgba32,
    ];

    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Yuyv422 => 2,
            PixelFormat::Bgr24 | PixelFormat::Rgb24 => 3,
            PixelFormat::Bgra32 | PixelFormat::Rgba32 => 4,
        }
    }

    /// Native layout for a bare channel count.
    pub fn from_channels(channels: u8) -> Result<Self, CapsError> {
        match channels {
            1 => Ok(PixelFormat::Gray8),
            2 => Ok(PixelFormat::Yuyv422),
            3 => Ok(PixelFormat::Bgr24),
            4 => Ok(PixelFormat::Bgra32),
            other => Err(CapsError::UnsupportedChannels(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::Gray8 => "gray8",
            PixelFormat::Yuyv422 => "yuyv422",
            PixelFormat::Bgr24 => "bgr24",
            PixelFormat::Rgb24 => "rgb24",
            PixelFormat::Bgra32 => "bgra32",
            PixelFormat::Rgba32 => "rgba32",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = CapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        PixelFormat::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| CapsError::UnknownFormat(s.to_string()))
    }
}

/// Frame geometry a detector instance is bound to for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OdCaps {
    width: u32,
    height: u32,
    format: PixelFormat,
    input_len: usize,
    output_len: usize,
}

impl OdCaps {
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self, CapsError> {
        if width == 0 || height == 0 {
            return Err(CapsError::ZeroDimension { width, height });
        }
        if format == PixelFormat::Yuyv422 && width % 2 != 0 {
            return Err(CapsError::OddYuyvWidth(width));
        }
        let overflow = |channels| CapsError::Overflow {
            width,
            height,
            channels,
        };
        let pixels = (width as usize)
            .checked_mul(height as usize)
            .ok_or(overflow(format.channels()))?;
        let input_len = pixels
            .checked_mul(format.channels())
            .ok_or(overflow(format.channels()))?;
        let output_len = pixels
            .checked_mul(OUTPUT_CHANNELS)
            .ok_or(overflow(OUTPUT_CHANNELS))?;
        Ok(Self {
            width,
            height,
            format,
            input_len,
            output_len,
        })
    }

    pub fn from_channels(width: u32, height: u32, channels: u8) -> Result<Self, CapsError> {
        Self::new(width, height, PixelFormat::from_channels(channels)?)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn channels(&self) -> usize {
        self.format.channels()
    }

    /// Exact byte length of every input frame.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Byte length of every annotated (BGR) output frame.
    pub fn output_len(&self) -> usize {
        self.output_len
    }
}

impl fmt::Display for OdCaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.format)
    }
}
