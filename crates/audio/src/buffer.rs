//! Buffer operations.
//!
//! Thin forwarding over the native buffer API. Nothing is validated or
//! tracked here; allocation and release must be paired by the caller.

use crate::consts::{AL_BITS, AL_CHANNELS, AL_FREQUENCY, AL_SIZE};
use crate::format::NativeFormat;
use crate::handle::BufferId;
use crate::native::NativeAudio;
use tracing::{debug, trace};

/// Allocate one native buffer.
pub fn allocate<A: NativeAudio + ?Sized>(al: &mut A) -> BufferId {
    let mut raw = [0u32; 1];
    al.gen_buffers(&mut raw);
    let id = BufferId::new(raw[0]);
    trace!(?id, "allocated buffer");
    id
}

/// Free a native buffer.
pub fn release<A: NativeAudio + ?Sized>(al: &mut A, id: BufferId) {
    trace!(?id, "releasing buffer");
    al.delete_buffers(&[id.raw()]);
}

/// Copy sample data into `id`, tagged with `format` and `sample_rate`.
pub fn upload<A: NativeAudio + ?Sized>(
    al: &mut A,
    id: BufferId,
    format: NativeFormat,
    data: &[u8],
    sample_rate: i32,
) {
    debug!(?id, ?format, bytes = data.len(), sample_rate, "uploading buffer data");
    al.buffer_data(id.raw(), format.raw(), data, sample_rate);
}

/// Query an integer buffer property.
pub fn query_int<A: NativeAudio + ?Sized>(al: &A, id: BufferId, param: i32) -> i32 {
    al.get_buffer_i(id.raw(), param)
}

/// Size of the uploaded data in bytes.
pub fn size<A: NativeAudio + ?Sized>(al: &A, id: BufferId) -> i32 {
    query_int(al, id, AL_SIZE)
}

/// Bits per sample of the uploaded data.
pub fn bits<A: NativeAudio + ?Sized>(al: &A, id: BufferId) -> i32 {
    query_int(al, id, AL_BITS)
}

/// Channel count of the uploaded data.
pub fn channels<A: NativeAudio + ?Sized>(al: &A, id: BufferId) -> i32 {
    query_int(al, id, AL_CHANNELS)
}

/// Sample rate of the uploaded data.
pub fn frequency<A: NativeAudio + ?Sized>(al: &A, id: BufferId) -> i32 {
    query_int(al, id, AL_FREQUENCY)
}
