//! Legacy volume curve.
//!
//! Content authored for the emulated engine uses a percentage volume on a
//! -35 dB scale: 100% is 0 dB, 99% is -0.35 dB, 98% is -0.7 dB and so on,
//! with 0% hardcoded to silence. [`linear_to_gain`] reproduces that mapping.

/// Total attenuation of the legacy scale at 0%, in decibels.
pub const ATTENUATION_RANGE_DB: f32 = 35.0;

/// Volumes at or below this value are treated as 0% (silence).
pub const SILENCE_EPSILON: f32 = f32::EPSILON;

/// Convert a legacy linear volume in `[0, 1]` to a native gain.
///
/// The result is scaled by `global_volume`, the process-wide master volume.
pub fn linear_to_gain(volume: f32, global_volume: f32) -> f32 {
    if volume <= SILENCE_EPSILON {
        return 0.0;
    }
    10.0_f32.powf(-(ATTENUATION_RANGE_DB / 20.0) * (1.0 - volume)) * global_volume
}
