//! Float pixel buffer exchanged with the codecs.
//!
//! Samples are `f32`. Two layouts are supported:
//!
//! ```text
//! Interleaved: R G B R G B R G B ...
//! Planar:      R R R ... G G G ... B B B ...
//! ```
//!
//! Readers always return interleaved buffers. Writers accept either
//! layout and interleave before encoding.

use crate::{IoError, IoResult};

/// Sample layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Channels of one pixel are adjacent.
    #[default]
    Interleaved,
    /// One full plane per channel.
    Planar,
}

/// RGB or RGBA float image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// 3 for RGB, 4 for RGBA.
    pub channels: u32,
    /// Sample order in `data`.
    pub layout: Layout,
    /// Samples, `width * height * channels` of them.
    pub data: Vec<f32>,
}

impl PixelBuffer {
    /// Creates a black interleaved buffer.
    ///
    /// # Errors
    ///
    /// [`IoError::UnsupportedChannels`] unless `channels` is 3 or 4, and
    /// [`IoError::InvalidFile`] when the sample count exceeds
    /// [`MAX_SAMPLES`].
    pub fn new(width: u32, height: u32, channels: u32) -> IoResult<Self> {
        check_channels(channels)?;
        let len = checked_sample_count(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            layout: Layout::Interleaved,
            data: vec![0.0; len],
        })
    }

    /// Wraps interleaved samples.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math32_io::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_interleaved(1, 1, 3, vec![0.1, 0.2, 0.3]).unwrap();
    /// assert_eq!(buf.pixel(0, 0), Some([0.1, 0.2, 0.3, 1.0]));
    /// ```
    pub fn from_interleaved(width: u32, height: u32, channels: u32, data: Vec<f32>) -> IoResult<Self> {
        Self::with_layout(width, height, channels, Layout::Interleaved, data)
    }

    /// Wraps planar samples.
    pub fn from_planar(width: u32, height: u32, channels: u32, data: Vec<f32>) -> IoResult<Self> {
        Self::with_layout(width, height, channels, Layout::Planar, data)
    }

    fn with_layout(
        width: u32,
        height: u32,
        channels: u32,
        layout: Layout,
        data: Vec<f32>,
    ) -> IoResult<Self> {
        let buf = Self {
            width,
            height,
            channels,
            layout,
            data,
        };
        buf.validate()?;
        Ok(buf)
    }

    /// Checks the channel count and the sample count.
    pub fn validate(&self) -> IoResult<()> {
        check_channels(self.channels)?;
        let expected = sample_count(self.width, self.height, self.channels);
        if expected != Some(self.data.len()) {
            return Err(IoError::DimensionMismatch {
                expected: format!(
                    "{} samples ({}x{}x{})",
                    expected.map_or_else(|| "too many".to_string(), |n| n.to_string()),
                    self.width,
                    self.height,
                    self.channels
                ),
                actual: format!("{} samples", self.data.len()),
            });
        }
        Ok(())
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true if the buffer has an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Returns an interleaved copy.
    pub fn to_interleaved(&self) -> Self {
        match self.layout {
            Layout::Interleaved => self.clone(),
            Layout::Planar => {
                let n = self.pixel_count();
                let c = self.channels as usize;
                let mut data = vec![0.0; n * c];
                for (i, px) in data.chunks_exact_mut(c).enumerate() {
                    for (ch, v) in px.iter_mut().enumerate() {
                        *v = self.data[ch * n + i];
                    }
                }
                Self {
                    layout: Layout::Interleaved,
                    data,
                    ..*self
                }
            }
        }
    }

    /// Returns a planar copy.
    pub fn to_planar(&self) -> Self {
        match self.layout {
            Layout::Planar => self.clone(),
            Layout::Interleaved => {
                let n = self.pixel_count();
                let c = self.channels as usize;
                let mut data = vec![0.0; n * c];
                for (i, px) in self.data.chunks_exact(c).enumerate() {
                    for (ch, &v) in px.iter().enumerate() {
                        data[ch * n + i] = v;
                    }
                }
                Self {
                    layout: Layout::Planar,
                    data,
                    ..*self
                }
            }
        }
    }

    /// Returns an interleaved RGBA copy. A missing alpha channel is filled
    /// with 1.0.
    pub fn to_rgba(&self) -> Self {
        let src = self.to_interleaved();
        if src.channels == 4 {
            return src;
        }
        let mut data = Vec::with_capacity(self.pixel_count() * 4);
        for px in src.data.chunks_exact(3) {
            data.extend_from_slice(px);
            data.push(1.0);
        }
        Self {
            channels: 4,
            layout: Layout::Interleaved,
            data,
            ..*self
        }
    }

    /// Reads one pixel as RGBA, alpha 1.0 for RGB buffers.
    ///
    /// Returns `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let n = self.pixel_count();
        let c = self.channels as usize;
        let i = y as usize * self.width as usize + x as usize;
        let sample = |ch: usize| match self.layout {
            Layout::Interleaved => self.data.get(i * c + ch).copied(),
            Layout::Planar => self.data.get(ch * n + i).copied(),
        };
        let alpha = if c == 4 { sample(3)? } else { 1.0 };
        Some([sample(0)?, sample(1)?, sample(2)?, alpha])
    }
}

fn check_channels(channels: u32) -> IoResult<()> {
    match channels {
        3 | 4 => Ok(()),
        n => Err(IoError::UnsupportedChannels(n)),
    }
}

/// Largest number of samples a buffer or a decoder will allocate.
pub const MAX_SAMPLES: usize = 1 << 30;

#[inline]
fn sample_count(width: u32, height: u32, channels: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
}

/// Sample count for dimensions read from an untrusted header.
pub(crate) fn checked_sample_count(width: u32, height: u32, channels: u32) -> IoResult<usize> {
    sample_count(width, height, channels)
        .filter(|&n| n <= MAX_SAMPLES)
        .ok_or_else(|| {
            IoError::InvalidFile(format!(
                "image too large: {}x{}x{} samples",
                width, height, channels
            ))
        })
}
