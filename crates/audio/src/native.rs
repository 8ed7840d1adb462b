//! The native audio API seam.
//!
//! [`NativeAudio`] mirrors the OpenAL entry points the buffer and source
//! operations forward to. Arguments are raw native values; nothing here
//! validates them.

use crate::consts::*;

/// Raw entry points of the native audio API.
///
/// Implementations must behave like the OpenAL function of the same name.
/// Errors are not returned; they are latched in the native error slot and
/// read back through [`NativeAudio::get_error`].
pub trait NativeAudio {
    /// `alGenBuffers`: fill `out` with fresh buffer names.
    fn gen_buffers(&mut self, out: &mut [u32]);

    /// `alDeleteBuffers`.
    fn delete_buffers(&mut self, buffers: &[u32]);

    /// `alBufferData`. The byte count is `data.len()`.
    fn buffer_data(&mut self, buffer: u32, format: i32, data: &[u8], frequency: i32);

    /// `alGetBufferi`.
    fn get_buffer_i(&self, buffer: u32, param: i32) -> i32;

    /// `alGenSources`: fill `out` with fresh source names.
    fn gen_sources(&mut self, out: &mut [u32]);

    /// `alDeleteSources`.
    fn delete_sources(&mut self, sources: &[u32]);

    /// `alSourcei`.
    fn source_i(&mut self, source: u32, param: i32, value: i32);

    /// `alSourcef`.
    fn source_f(&mut self, source: u32, param: i32, value: f32);

    /// `alGetSourcei`.
    fn get_source_i(&self, source: u32, param: i32) -> i32;

    /// `alGetSourcef`.
    fn get_source_f(&self, source: u32, param: i32) -> f32;

    /// `alSourceQueueBuffers`.
    fn source_queue_buffers(&mut self, source: u32, buffers: &[u32]);

    /// `alSourceUnqueueBuffers`: fill `out` with the removed names.
    fn source_unqueue_buffers(&mut self, source: u32, out: &mut [u32]);

    /// `alSourcePlay`.
    fn source_play(&mut self, source: u32);

    /// `alSourceStop`.
    fn source_stop(&mut self, source: u32);

    /// `alSourcePause`.
    fn source_pause(&mut self, source: u32);

    /// `alGetError`: return and clear the pending error.
    fn get_error(&mut self) -> i32;
}

/// Typed view of a native source state.
///
/// The source accessors return the raw integer; this is for callers that
/// want to match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceState {
    /// Never played, or rewound.
    Initial,
    /// Currently playing.
    Playing,
    /// Paused mid-playback.
    Paused,
    /// Stopped or ran out of data.
    Stopped,
}

impl SourceState {
    /// Native value of this state.
    pub const fn raw(self) -> i32 {
        match self {
            Self::Initial => AL_INITIAL,
            Self::Playing => AL_PLAYING,
            Self::Paused => AL_PAUSED,
            Self::Stopped => AL_STOPPED,
        }
    }

    /// Decode a native state value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            AL_INITIAL => Some(Self::Initial),
            AL_PLAYING => Some(Self::Playing),
            AL_PAUSED => Some(Self::Paused),
            AL_STOPPED => Some(Self::Stopped),
            _ => None,
        }
    }
}

/// Typed view of a native error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeError {
    /// Bad buffer or source name.
    InvalidName,
    /// Bad enum argument.
    InvalidEnum,
    /// Bad value argument.
    InvalidValue,
    /// Call not valid in the current state.
    InvalidOperation,
    /// Allocation failed.
    OutOfMemory,
}

impl NativeError {
    /// Native value of this error.
    pub const fn raw(self) -> i32 {
        match self {
            Self::InvalidName => AL_INVALID_NAME,
            Self::InvalidEnum => AL_INVALID_ENUM,
            Self::InvalidValue => AL_INVALID_VALUE,
            Self::InvalidOperation => AL_INVALID_OPERATION,
            Self::OutOfMemory => AL_OUT_OF_MEMORY,
        }
    }

    /// Decode a native error value. `AL_NO_ERROR` and unknown codes map to `None`.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            AL_INVALID_NAME => Some(Self::InvalidName),
            AL_INVALID_ENUM => Some(Self::InvalidEnum),
            AL_INVALID_VALUE => Some(Self::InvalidValue),
            AL_INVALID_OPERATION => Some(Self::InvalidOperation),
            AL_OUT_OF_MEMORY => Some(Self::OutOfMemory),
            _ => None,
        }
    }
}

/// Read and clear the native error slot, passed through unexamined.
pub fn last_error<A: NativeAudio + ?Sized>(al: &mut A) -> i32 {
    al.get_error()
}
