#![warn(missing_docs)]
//! Native audio adaptation layer.
//!
//! Wraps OpenAL buffer and source names in typed handles, forwards the
//! buffer/source operations a game runtime needs, and translates decoder
//! sample formats into native format enumerations. Volume goes through the
//! legacy -35 dB curve before it reaches the native gain.
//!
//! # Architecture
//!
//! - [`BufferId`] / [`SourceId`] - Typed native handles
//! - [`buffer`] / [`source`] - Operations, generic over [`NativeAudio`]
//! - [`format`] - Sample format tables
//! - [`AudioConfig`] - Master volume and streaming parameters
//! - [`SoftAudio`] - In-memory native model (always available)
//! - `OpenAl` - System OpenAL (`openal_backend` feature)
//!
//! # Example
//!
//! ```
//! use alkit_audio::{buffer, source, AudioConfig, NativeFormat, SoftAudio};
//!
//! let config = AudioConfig::default();
//! let mut al = SoftAudio::new();
//! let buf = buffer::allocate(&mut al);
//! buffer::upload(&mut al, buf, NativeFormat::Mono16, &[0u8; 882], 44100);
//! let src = source::allocate(&mut al);
//! source::attach_buffer(&mut al, src, buf);
//! source::set_volume(&mut al, src, 0.8, config.global_volume);
//! source::play(&mut al, src);
//! ```

pub mod buffer;
mod config;
pub mod consts;
pub mod format;
mod handle;
mod native;
#[cfg(feature = "openal_backend")]
mod openal;
mod soft;
pub mod source;
mod volume;

pub use config::{AudioConfig, AUDIO_SLEEP_MS, GLOBAL_VOLUME, STREAM_BUF_SIZE};
pub use format::{
    choose_native_format, sample_byte_width, FormatError, NativeFormat, SampleFormat,
};
pub use handle::{BufferId, BufferKind, Handle, ResourceKind, SourceId, SourceKind};
pub use native::{last_error, NativeAudio, NativeError, SourceState};
#[cfg(feature = "openal_backend")]
pub use openal::OpenAl;
pub use soft::{SoftAudio, SoftSource};
pub use volume::{linear_to_gain, ATTENUATION_RANGE_DB, SILENCE_EPSILON};
