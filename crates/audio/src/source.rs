//! Source operations.
//!
//! A source plays either one attached buffer or a FIFO queue of buffers.
//! Which mode is in use is the caller's business; these calls forward to the
//! native layer as-is.

use crate::consts::{
    AL_BUFFER, AL_BUFFERS_PROCESSED, AL_BUFFERS_QUEUED, AL_GAIN, AL_PITCH, AL_SEC_OFFSET,
    AL_SOURCE_STATE,
};
use crate::handle::{BufferId, SourceId};
use crate::native::NativeAudio;
use crate::volume::linear_to_gain;
use tracing::trace;

/// Allocate one native source.
pub fn allocate<A: NativeAudio + ?Sized>(al: &mut A) -> SourceId {
    let mut raw = [0u32; 1];
    al.gen_sources(&mut raw);
    let id = SourceId::new(raw[0]);
    trace!(?id, "allocated source");
    id
}

/// Free a native source.
pub fn release<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId) {
    trace!(?id, "releasing source");
    al.delete_sources(&[id.raw()]);
}

/// Bind `buffer` for direct playback. A null buffer detaches.
pub fn attach_buffer<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId, buffer: BufferId) {
    // AL_BUFFER takes the name through the signed integer setter.
    al.source_i(id.raw(), AL_BUFFER, buffer.raw() as i32);
}

/// Detach whatever buffer is bound.
pub fn detach_buffer<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId) {
    attach_buffer(al, id, BufferId::NULL);
}

/// Append `buffer` to the streaming queue.
pub fn queue_buffer<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId, buffer: BufferId) {
    al.source_queue_buffers(id.raw(), &[buffer.raw()]);
}

/// Remove and return the head of the streaming queue.
///
/// Only valid for buffers the native layer has finished with (see
/// [`processed_buffer_count`]).
pub fn unqueue_buffer<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId) -> BufferId {
    let mut raw = [0u32; 1];
    al.source_unqueue_buffers(id.raw(), &mut raw);
    BufferId::new(raw[0])
}

/// Drop the whole buffer queue.
///
/// Same native call as [`detach_buffer`]. The native layer rejects it while
/// the source is playing or paused, so stop the source first.
pub fn clear_queue<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId) {
    attach_buffer(al, id, BufferId::NULL);
}

/// Query an integer source property.
pub fn query_int<A: NativeAudio + ?Sized>(al: &A, id: SourceId, param: i32) -> i32 {
    al.get_source_i(id.raw(), param)
}

/// Number of queued buffers that have been fully played.
pub fn processed_buffer_count<A: NativeAudio + ?Sized>(al: &A, id: SourceId) -> i32 {
    query_int(al, id, AL_BUFFERS_PROCESSED)
}

/// Number of buffers in the queue, processed or not.
pub fn queued_buffer_count<A: NativeAudio + ?Sized>(al: &A, id: SourceId) -> i32 {
    query_int(al, id, AL_BUFFERS_QUEUED)
}

/// Raw native playback state. See [`crate::SourceState`] for a typed view.
pub fn state<A: NativeAudio + ?Sized>(al: &A, id: SourceId) -> i32 {
    query_int(al, id, AL_SOURCE_STATE)
}

/// Playback position in seconds.
pub fn seconds_offset<A: NativeAudio + ?Sized>(al: &A, id: SourceId) -> f32 {
    al.get_source_f(id.raw(), AL_SEC_OFFSET)
}

/// Set volume on the legacy -35 dB scale, scaled by `global_volume`.
pub fn set_volume<A: NativeAudio + ?Sized>(
    al: &mut A,
    id: SourceId,
    volume: f32,
    global_volume: f32,
) {
    al.source_f(id.raw(), AL_GAIN, linear_to_gain(volume, global_volume));
}

/// Set the pitch multiplier.
pub fn set_pitch<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId, pitch: f32) {
    al.source_f(id.raw(), AL_PITCH, pitch);
}

/// Start or resume playback.
pub fn play<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId) {
    trace!(?id, "play");
    al.source_play(id.raw());
}

/// Stop playback.
pub fn stop<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId) {
    trace!(?id, "stop");
    al.source_stop(id.raw());
}

/// Pause playback.
pub fn pause<A: NativeAudio + ?Sized>(al: &mut A, id: SourceId) {
    trace!(?id, "pause");
    al.source_pause(id.raw());
}
