//! Verifies each operation issues exactly the expected native call.

use alkit_audio::consts::*;
use alkit_audio::{buffer, linear_to_gain, source, BufferId, NativeAudio, NativeFormat, SourceId};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    GenBuffers(usize),
    DeleteBuffers(Vec<u32>),
    BufferData(u32, i32, usize, i32),
    GetBufferI(u32, i32),
    GenSources(usize),
    DeleteSources(Vec<u32>),
    SourceI(u32, i32, i32),
    SourceF(u32, i32, f32),
    GetSourceI(u32, i32),
    GetSourceF(u32, i32),
    Queue(u32, Vec<u32>),
    Unqueue(u32, usize),
    Play(u32),
    Stop(u32),
    Pause(u32),
}

/// Records every call and answers queries with fixed values.
#[derive(Default)]
struct Recorder {
    calls: std::cell::RefCell<Vec<Call>>,
    next_name: u32,
}

impl Recorder {
    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

impl NativeAudio for Recorder {
    fn gen_buffers(&mut self, out: &mut [u32]) {
        self.push(Call::GenBuffers(out.len()));
        for slot in out {
            self.next_name += 1;
            *slot = self.next_name;
        }
    }

    fn delete_buffers(&mut self, buffers: &[u32]) {
        self.push(Call::DeleteBuffers(buffers.to_vec()));
    }

    fn buffer_data(&mut self, buffer: u32, format: i32, data: &[u8], frequency: i32) {
        self.push(Call::BufferData(buffer, format, data.len(), frequency));
    }

    fn get_buffer_i(&self, buffer: u32, param: i32) -> i32 {
        self.push(Call::GetBufferI(buffer, param));
        param + 1
    }

    fn gen_sources(&mut self, out: &mut [u32]) {
        self.push(Call::GenSources(out.len()));
        for slot in out {
            self.next_name += 1;
            *slot = self.next_name;
        }
    }

    fn delete_sources(&mut self, sources: &[u32]) {
        self.push(Call::DeleteSources(sources.to_vec()));
    }

    fn source_i(&mut self, source: u32, param: i32, value: i32) {
        self.push(Call::SourceI(source, param, value));
    }

    fn source_f(&mut self, source: u32, param: i32, value: f32) {
        self.push(Call::SourceF(source, param, value));
    }

    fn get_source_i(&self, source: u32, param: i32) -> i32 {
        self.push(Call::GetSourceI(source, param));
        param + 1
    }

    fn get_source_f(&self, source: u32, param: i32) -> f32 {
        self.push(Call::GetSourceF(source, param));
        1.25
    }

    fn source_queue_buffers(&mut self, source: u32, buffers: &[u32]) {
        self.push(Call::Queue(source, buffers.to_vec()));
    }

    fn source_unqueue_buffers(&mut self, source: u32, out: &mut [u32]) {
        self.push(Call::Unqueue(source, out.len()));
        out.fill(77);
    }

    fn source_play(&mut self, source: u32) {
        self.push(Call::Play(source));
    }

    fn source_stop(&mut self, source: u32) {
        self.push(Call::Stop(source));
    }

    fn source_pause(&mut self, source: u32) {
        self.push(Call::Pause(source));
    }

    fn get_error(&mut self) -> i32 {
        AL_NO_ERROR
    }
}

#[test]
fn buffer_calls_forward_one_to_one() {
    let mut al = Recorder::default();
    let id = buffer::allocate(&mut al);
    assert_eq!(id, BufferId::new(1));
    buffer::upload(&mut al, id, NativeFormat::Stereo8, &[0u8; 10], 11025);
    assert_eq!(buffer::size(&al, id), AL_SIZE + 1);
    assert_eq!(buffer::bits(&al, id), AL_BITS + 1);
    assert_eq!(buffer::channels(&al, id), AL_CHANNELS + 1);
    assert_eq!(buffer::frequency(&al, id), AL_FREQUENCY + 1);
    buffer::release(&mut al, id);

    assert_eq!(
        al.take(),
        vec![
            Call::GenBuffers(1),
            Call::BufferData(1, AL_FORMAT_STEREO8, 10, 11025),
            Call::GetBufferI(1, AL_SIZE),
            Call::GetBufferI(1, AL_BITS),
            Call::GetBufferI(1, AL_CHANNELS),
            Call::GetBufferI(1, AL_FREQUENCY),
            Call::DeleteBuffers(vec![1]),
        ]
    );
}

#[test]
fn source_calls_forward_one_to_one() {
    let mut al = Recorder::default();
    let src = source::allocate(&mut al);
    let buf = BufferId::new(9);

    source::attach_buffer(&mut al, src, buf);
    source::queue_buffer(&mut al, src, buf);
    assert_eq!(source::unqueue_buffer(&mut al, src), BufferId::new(77));
    assert_eq!(source::processed_buffer_count(&al, src), AL_BUFFERS_PROCESSED + 1);
    assert_eq!(source::queued_buffer_count(&al, src), AL_BUFFERS_QUEUED + 1);
    assert_eq!(source::state(&al, src), AL_SOURCE_STATE + 1);
    assert_eq!(source::seconds_offset(&al, src), 1.25);
    source::set_pitch(&mut al, src, 0.75);
    source::play(&mut al, src);
    source::pause(&mut al, src);
    source::stop(&mut al, src);
    source::release(&mut al, src);

    assert_eq!(
        al.take(),
        vec![
            Call::GenSources(1),
            Call::SourceI(1, AL_BUFFER, 9),
            Call::Queue(1, vec![9]),
            Call::Unqueue(1, 1),
            Call::GetSourceI(1, AL_BUFFERS_PROCESSED),
            Call::GetSourceI(1, AL_BUFFERS_QUEUED),
            Call::GetSourceI(1, AL_SOURCE_STATE),
            Call::GetSourceF(1, AL_SEC_OFFSET),
            Call::SourceF(1, AL_PITCH, 0.75),
            Call::Play(1),
            Call::Pause(1),
            Call::Stop(1),
            Call::DeleteSources(vec![1]),
        ]
    );
}

#[test]
fn clear_queue_issues_the_same_call_as_detach() {
    let mut al = Recorder::default();
    let src = SourceId::new(4);

    source::clear_queue(&mut al, src);
    let cleared = al.take();
    source::detach_buffer(&mut al, src);
    let detached = al.take();

    assert_eq!(cleared, detached);
    assert_eq!(cleared, vec![Call::SourceI(4, AL_BUFFER, AL_NONE)]);
}

#[test]
fn set_volume_sends_converted_gain() {
    let mut al = Recorder::default();
    let src = SourceId::new(2);

    source::set_volume(&mut al, src, 0.5, 0.8);
    source::set_volume(&mut al, src, 0.0, 0.8);
    source::set_volume(&mut al, src, 1.0, 0.8);

    assert_eq!(
        al.take(),
        vec![
            Call::SourceF(2, AL_GAIN, linear_to_gain(0.5, 0.8)),
            Call::SourceF(2, AL_GAIN, 0.0),
            Call::SourceF(2, AL_GAIN, 0.8),
        ]
    );
}
