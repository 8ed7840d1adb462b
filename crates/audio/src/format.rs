//! Sample format translation.
//!
//! Decoders describe their output with SDL-style format codes. The native
//! layer wants one combined enumeration per (sample width, channel layout).
//! Both tables are closed: anything outside them is a caller defect and is
//! reported as a [`FormatError`].

use crate::consts::*;
use thiserror::Error;

/// Error returned for sample layouts outside the supported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The platform format code is not one of the recognized encodings.
    #[error("unhandled sample format code {0:#06x}")]
    UnknownSampleFormat(u16),
    /// No native format exists for this width/channel combination.
    #[error("unhandled sample size / channel count: {byte_width} bytes x {channels} channels")]
    UnsupportedLayout {
        /// Bytes per sample.
        byte_width: u8,
        /// Interleaved channel count.
        channels: u16,
    },
}

/// Platform (SDL) sample encodings produced by the decoding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SampleFormat {
    /// Unsigned 8-bit.
    U8 = 0x0008,
    /// Signed 8-bit.
    S8 = 0x8008,
    /// Unsigned 16-bit, little endian.
    U16Lsb = 0x0010,
    /// Signed 16-bit, little endian.
    S16Lsb = 0x8010,
    /// Unsigned 16-bit, big endian.
    U16Msb = 0x1010,
    /// Signed 16-bit, big endian.
    S16Msb = 0x9010,
    /// Signed 32-bit, little endian.
    S32Lsb = 0x8020,
    /// Signed 32-bit, big endian.
    S32Msb = 0x9020,
    /// 32-bit float, little endian.
    F32Lsb = 0x8120,
    /// 32-bit float, big endian.
    F32Msb = 0x9120,
}

const BITSIZE_MASK: u16 = 0x00FF;
const FLOAT_FLAG: u16 = 0x0100;
const BIG_ENDIAN_FLAG: u16 = 0x1000;
const SIGNED_FLAG: u16 = 0x8000;

impl SampleFormat {
    /// Every recognized encoding.
    pub const ALL: [Self; 10] = [
        Self::U8,
        Self::S8,
        Self::U16Lsb,
        Self::S16Lsb,
        Self::U16Msb,
        Self::S16Msb,
        Self::S32Lsb,
        Self::S32Msb,
        Self::F32Lsb,
        Self::F32Msb,
    ];

    /// The platform code.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Look up a platform code.
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0x0008 => Some(Self::U8),
            0x8008 => Some(Self::S8),
            0x0010 => Some(Self::U16Lsb),
            0x8010 => Some(Self::S16Lsb),
            0x1010 => Some(Self::U16Msb),
            0x9010 => Some(Self::S16Msb),
            0x8020 => Some(Self::S32Lsb),
            0x9020 => Some(Self::S32Msb),
            0x8120 => Some(Self::F32Lsb),
            0x9120 => Some(Self::F32Msb),
            _ => None,
        }
    }

    /// Bytes per sample.
    pub const fn byte_width(self) -> u8 {
        match self {
            Self::U8 | Self::S8 => 1,
            Self::U16Lsb | Self::U16Msb | Self::S16Lsb | Self::S16Msb => 2,
            Self::S32Lsb | Self::S32Msb | Self::F32Lsb | Self::F32Msb => 4,
        }
    }

    /// Bits per sample, as encoded in the code.
    pub const fn bits(self) -> u8 {
        (self.code() & BITSIZE_MASK) as u8
    }

    /// Whether samples are signed.
    pub const fn is_signed(self) -> bool {
        self.code() & SIGNED_FLAG != 0
    }

    /// Whether samples are IEEE floats.
    pub const fn is_float(self) -> bool {
        self.code() & FLOAT_FLAG != 0
    }

    /// Whether multi-byte samples are big endian.
    pub const fn is_big_endian(self) -> bool {
        self.code() & BIG_ENDIAN_FLAG != 0
    }
}

/// Native combined sample formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeFormat {
    /// 8-bit mono.
    Mono8,
    /// 8-bit stereo.
    Stereo8,
    /// 16-bit mono.
    Mono16,
    /// 16-bit stereo.
    Stereo16,
    /// 32-bit float mono.
    MonoFloat32,
    /// 32-bit float stereo.
    StereoFloat32,
}

impl NativeFormat {
    /// The native enumeration value passed to buffer uploads.
    pub const fn raw(self) -> i32 {
        match self {
            Self::Mono8 => AL_FORMAT_MONO8,
            Self::Stereo8 => AL_FORMAT_STEREO8,
            Self::Mono16 => AL_FORMAT_MONO16,
            Self::Stereo16 => AL_FORMAT_STEREO16,
            Self::MonoFloat32 => AL_FORMAT_MONO_FLOAT32,
            Self::StereoFloat32 => AL_FORMAT_STEREO_FLOAT32,
        }
    }

    /// Decode a native enumeration value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            AL_FORMAT_MONO8 => Some(Self::Mono8),
            AL_FORMAT_STEREO8 => Some(Self::Stereo8),
            AL_FORMAT_MONO16 => Some(Self::Mono16),
            AL_FORMAT_STEREO16 => Some(Self::Stereo16),
            AL_FORMAT_MONO_FLOAT32 => Some(Self::MonoFloat32),
            AL_FORMAT_STEREO_FLOAT32 => Some(Self::StereoFloat32),
            _ => None,
        }
    }

    /// Bytes per sample.
    pub const fn byte_width(self) -> u8 {
        match self {
            Self::Mono8 | Self::Stereo8 => 1,
            Self::Mono16 | Self::Stereo16 => 2,
            Self::MonoFloat32 | Self::StereoFloat32 => 4,
        }
    }

    /// Interleaved channel count.
    pub const fn channels(self) -> u16 {
        match self {
            Self::Mono8 | Self::Mono16 | Self::MonoFloat32 => 1,
            Self::Stereo8 | Self::Stereo16 | Self::StereoFloat32 => 2,
        }
    }

    /// Bytes per sample frame (all channels).
    pub const fn frame_size(self) -> usize {
        self.byte_width() as usize * self.channels() as usize
    }
}

/// Byte width of one sample for a platform format code.
pub fn sample_byte_width(code: u16) -> Result<u8, FormatError> {
    SampleFormat::from_code(code)
        .map(SampleFormat::byte_width)
        .ok_or(FormatError::UnknownSampleFormat(code))
}

/// Native format for a sample width and channel count.
pub fn choose_native_format(byte_width: u8, channels: u16) -> Result<NativeFormat, FormatError> {
    match (byte_width, channels) {
        (1, 1) => Ok(NativeFormat::Mono8),
        (1, 2) => Ok(NativeFormat::Stereo8),
        (2, 1) => Ok(NativeFormat::Mono16),
        (2, 2) => Ok(NativeFormat::Stereo16),
        (4, 1) => Ok(NativeFormat::MonoFloat32),
        (4, 2) => Ok(NativeFormat::StereoFloat32),
        _ => Err(FormatError::UnsupportedLayout {
            byte_width,
            channels,
        }),
    }
}
