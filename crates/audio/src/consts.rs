//! Native enumeration values (OpenAL 1.1 plus `AL_EXT_float32`).
//!
//! These are the raw integers the native layer expects. They are kept local
//! so the crate builds without the native headers; the values are fixed by
//! OpenAL 1.1.

/// `AL_NONE`, also the null buffer/source name.
pub const AL_NONE: i32 = 0;

// Error codes.
/// No error pending.
pub const AL_NO_ERROR: i32 = 0;
/// A bad name (id) was passed.
pub const AL_INVALID_NAME: i32 = 0xA001;
/// An invalid enum value was passed.
pub const AL_INVALID_ENUM: i32 = 0xA002;
/// An invalid value was passed.
pub const AL_INVALID_VALUE: i32 = 0xA003;
/// The requested operation is not valid in the current state.
pub const AL_INVALID_OPERATION: i32 = 0xA004;
/// The requested operation resulted in running out of memory.
pub const AL_OUT_OF_MEMORY: i32 = 0xA005;

// Source properties.
/// Pitch multiplier (float).
pub const AL_PITCH: i32 = 0x1003;
/// Looping flag (int).
pub const AL_LOOPING: i32 = 0x1007;
/// Attached buffer (int).
pub const AL_BUFFER: i32 = 0x1009;
/// Gain (float).
pub const AL_GAIN: i32 = 0x100A;
/// Playback state (int).
pub const AL_SOURCE_STATE: i32 = 0x1010;
/// Number of buffers in the queue (int).
pub const AL_BUFFERS_QUEUED: i32 = 0x1015;
/// Number of queued buffers fully played (int).
pub const AL_BUFFERS_PROCESSED: i32 = 0x1016;
/// Playback position in seconds (float).
pub const AL_SEC_OFFSET: i32 = 0x1024;
/// Static / streaming / undetermined (int).
pub const AL_SOURCE_TYPE: i32 = 0x1027;

// Source states.
/// Source has never been played or was rewound.
pub const AL_INITIAL: i32 = 0x1011;
/// Source is playing.
pub const AL_PLAYING: i32 = 0x1012;
/// Source is paused.
pub const AL_PAUSED: i32 = 0x1013;
/// Source is stopped.
pub const AL_STOPPED: i32 = 0x1014;

// Source types.
/// Single attached buffer.
pub const AL_STATIC: i32 = 0x1028;
/// Buffer queue.
pub const AL_STREAMING: i32 = 0x1029;
/// No buffers.
pub const AL_UNDETERMINED: i32 = 0x1030;

// Buffer properties.
/// Sample rate in Hz.
pub const AL_FREQUENCY: i32 = 0x2001;
/// Bits per sample.
pub const AL_BITS: i32 = 0x2002;
/// Channel count.
pub const AL_CHANNELS: i32 = 0x2003;
/// Data size in bytes.
pub const AL_SIZE: i32 = 0x2004;

// Formats.
/// 8-bit unsigned mono.
pub const AL_FORMAT_MONO8: i32 = 0x1100;
/// 16-bit signed mono.
pub const AL_FORMAT_MONO16: i32 = 0x1101;
/// 8-bit unsigned stereo.
pub const AL_FORMAT_STEREO8: i32 = 0x1102;
/// 16-bit signed stereo.
pub const AL_FORMAT_STEREO16: i32 = 0x1103;
/// 32-bit float mono (`AL_EXT_float32`).
pub const AL_FORMAT_MONO_FLOAT32: i32 = 0x10010;
/// 32-bit float stereo (`AL_EXT_float32`).
pub const AL_FORMAT_STEREO_FLOAT32: i32 = 0x10011;
