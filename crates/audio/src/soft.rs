//! In-memory native audio model.
//!
//! [`SoftAudio`] implements [`NativeAudio`] without touching an output
//! device. It follows OpenAL 1.1 rules for the buffer and source calls the
//! crate uses, including error latching, so code written against it behaves
//! the same on a real device. Time only moves when [`SoftAudio::advance`] is
//! called, which keeps tests deterministic.

use crate::consts::*;
use crate::format::NativeFormat;
use crate::handle::{BufferId, SourceId};
use crate::native::NativeAudio;
use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
struct SoftBuffer {
    format: Option<NativeFormat>,
    bytes: usize,
    frequency: i32,
}

impl SoftBuffer {
    fn frames(&self) -> usize {
        self.format
            .map(|format| self.bytes / format.frame_size())
            .unwrap_or(0)
    }

    fn duration(&self) -> f64 {
        if self.frequency > 0 {
            self.frames() as f64 / f64::from(self.frequency)
        } else {
            0.0
        }
    }
}

/// Observable state of one modelled source.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftSource {
    state: i32,
    source_type: i32,
    queue: VecDeque<u32>,
    /// Index of the buffer being played; everything before it is processed.
    current: usize,
    /// Frame position inside the current buffer.
    frame_pos: f64,
    gain: f32,
    pitch: f32,
    looping: bool,
}

impl Default for SoftSource {
    fn default() -> Self {
        Self {
            state: AL_INITIAL,
            source_type: AL_UNDETERMINED,
            queue: VecDeque::new(),
            current: 0,
            frame_pos: 0.0,
            gain: 1.0,
            pitch: 1.0,
            looping: false,
        }
    }
}

impl SoftSource {
    /// Raw playback state.
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Raw source type (static, streaming or undetermined).
    pub fn source_type(&self) -> i32 {
        self.source_type
    }

    /// Buffer names in queue order.
    pub fn queue(&self) -> impl Iterator<Item = BufferId> + '_ {
        self.queue.iter().map(|&raw| BufferId::new(raw))
    }

    /// Current gain.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Current pitch.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Whether the queue restarts when it runs dry.
    pub fn looping(&self) -> bool {
        self.looping
    }

    fn processed(&self) -> usize {
        if self.source_type == AL_STREAMING && !self.looping {
            self.current.min(self.queue.len())
        } else {
            0
        }
    }

    fn rewind(&mut self) {
        self.current = 0;
        self.frame_pos = 0.0;
    }
}

/// Deterministic in-memory implementation of the native audio API.
#[derive(Debug, Default)]
pub struct SoftAudio {
    buffers: HashMap<u32, SoftBuffer>,
    sources: HashMap<u32, SoftSource>,
    next_buffer: u32,
    next_source: u32,
    error: Cell<i32>,
}

impl SoftAudio {
    /// Create an empty model with no buffers or sources.
    pub fn new() -> Self {
        debug!("Audio backend: soft (in-memory)");
        Self::default()
    }

    /// Whether `id` names a live buffer.
    pub fn has_buffer(&self, id: BufferId) -> bool {
        self.buffers.contains_key(&id.raw())
    }

    /// Whether `id` names a live source.
    pub fn has_source(&self, id: SourceId) -> bool {
        self.sources.contains_key(&id.raw())
    }

    /// Number of live buffers.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Number of live sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Inspect a source.
    pub fn source(&self, id: SourceId) -> Option<&SoftSource> {
        self.sources.get(&id.raw())
    }

    /// Advance playback of every playing source by `seconds`.
    ///
    /// Buffers are consumed in queue order at their own sample rate scaled
    /// by the source pitch. A looping source wraps to the head of its queue;
    /// any other source whose queue runs dry stops.
    pub fn advance(&mut self, seconds: f64) {
        let buffers = &self.buffers;
        for source in self.sources.values_mut() {
            if source.state != AL_PLAYING {
                continue;
            }
            let audible = source
                .queue
                .iter()
                .any(|raw| buffers[raw].duration() > 0.0);
            let mut remaining = seconds;
            loop {
                while remaining > 0.0 && source.current < source.queue.len() {
                    let buf = &buffers[&source.queue[source.current]];
                    let rate = f64::from(buf.frequency) * f64::from(source.pitch);
                    let frames_left = buf.frames() as f64 - source.frame_pos;
                    let time_left = if rate > 0.0 { frames_left / rate } else { 0.0 };
                    if remaining >= time_left {
                        remaining -= time_left;
                        source.current += 1;
                        source.frame_pos = 0.0;
                    } else {
                        source.frame_pos += remaining * rate;
                        remaining = 0.0;
                    }
                }
                if source.current < source.queue.len() {
                    break;
                }
                if source.looping && audible {
                    source.rewind();
                    if remaining > 0.0 {
                        continue;
                    }
                    break;
                }
                source.state = AL_STOPPED;
                break;
            }
        }
    }

    fn set_error(&self, code: i32, call: &str) {
        warn!("{call}: native error {code:#06x}");
        if self.error.get() == AL_NO_ERROR {
            self.error.set(code);
        }
    }

    fn buffer_in_use(&self, raw: u32) -> bool {
        self.sources.values().any(|s| s.queue.contains(&raw))
    }

    fn source_mut(&mut self, raw: u32, call: &str) -> Option<&mut SoftSource> {
        if !self.sources.contains_key(&raw) {
            self.set_error(AL_INVALID_NAME, call);
            return None;
        }
        self.sources.get_mut(&raw)
    }

    fn seconds_offset(&self, source: &SoftSource) -> f32 {
        if source.state != AL_PLAYING && source.state != AL_PAUSED {
            return 0.0;
        }
        let played: f64 = source
            .queue
            .iter()
            .take(source.current)
            .map(|raw| self.buffers[raw].duration())
            .sum();
        let partial = source
            .queue
            .get(source.current)
            .map(|raw| &self.buffers[raw])
            .filter(|buf| buf.frequency > 0)
            .map(|buf| source.frame_pos / f64::from(buf.frequency))
            .unwrap_or(0.0);
        (played + partial) as f32
    }
}

impl NativeAudio for SoftAudio {
    fn gen_buffers(&mut self, out: &mut [u32]) {
        for slot in out {
            self.next_buffer += 1;
            self.buffers.insert(self.next_buffer, SoftBuffer::default());
            *slot = self.next_buffer;
        }
    }

    fn delete_buffers(&mut self, buffers: &[u32]) {
        let named = buffers.iter().copied().filter(|&raw| raw != 0);
        for raw in named.clone() {
            if !self.buffers.contains_key(&raw) {
                return self.set_error(AL_INVALID_NAME, "delete_buffers");
            }
            if self.buffer_in_use(raw) {
                return self.set_error(AL_INVALID_OPERATION, "delete_buffers");
            }
        }
        for raw in named {
            self.buffers.remove(&raw);
        }
    }

    fn buffer_data(&mut self, buffer: u32, format: i32, data: &[u8], frequency: i32) {
        if !self.buffers.contains_key(&buffer) {
            return self.set_error(AL_INVALID_NAME, "buffer_data");
        }
        let Some(native) = NativeFormat::from_raw(format) else {
            return self.set_error(AL_INVALID_ENUM, "buffer_data");
        };
        if frequency <= 0 || data.len() % native.frame_size() != 0 {
            return self.set_error(AL_INVALID_VALUE, "buffer_data");
        }
        if self.buffer_in_use(buffer) {
            return self.set_error(AL_INVALID_OPERATION, "buffer_data");
        }
        self.buffers.insert(
            buffer,
            SoftBuffer {
                format: Some(native),
                bytes: data.len(),
                frequency,
            },
        );
    }

    fn get_buffer_i(&self, buffer: u32, param: i32) -> i32 {
        let Some(buf) = self.buffers.get(&buffer) else {
            self.set_error(AL_INVALID_NAME, "get_buffer_i");
            return 0;
        };
        match param {
            AL_FREQUENCY => buf.frequency,
            AL_SIZE => buf.bytes as i32,
            AL_BITS => buf.format.map_or(0, |f| i32::from(f.byte_width()) * 8),
            AL_CHANNELS => buf.format.map_or(0, |f| i32::from(f.channels())),
            _ => {
                self.set_error(AL_INVALID_ENUM, "get_buffer_i");
                0
            }
        }
    }

    fn gen_sources(&mut self, out: &mut [u32]) {
        for slot in out {
            self.next_source += 1;
            self.sources.insert(self.next_source, SoftSource::default());
            *slot = self.next_source;
        }
    }

    fn delete_sources(&mut self, sources: &[u32]) {
        if sources.iter().any(|raw| !self.sources.contains_key(raw)) {
            return self.set_error(AL_INVALID_NAME, "delete_sources");
        }
        for raw in sources {
            self.sources.remove(raw);
        }
    }

    fn source_i(&mut self, source: u32, param: i32, value: i32) {
        if param == AL_LOOPING {
            let Some(src) = self.source_mut(source, "source_i") else {
                return;
            };
            if matches!(value, 0 | 1) {
                src.looping = value == 1;
            } else {
                self.set_error(AL_INVALID_VALUE, "source_i");
            }
            return;
        }
        if param != AL_BUFFER {
            if self.sources.contains_key(&source) {
                self.set_error(AL_INVALID_ENUM, "source_i");
            } else {
                self.set_error(AL_INVALID_NAME, "source_i");
            }
            return;
        }
        let buffer = value as u32;
        if buffer != 0 && !self.buffers.contains_key(&buffer) {
            return self.set_error(AL_INVALID_VALUE, "source_i");
        }
        let Some(src) = self.source_mut(source, "source_i") else {
            return;
        };
        if src.state == AL_PLAYING || src.state == AL_PAUSED {
            return self.set_error(AL_INVALID_OPERATION, "source_i");
        }
        src.queue.clear();
        src.rewind();
        if buffer == 0 {
            src.source_type = AL_UNDETERMINED;
        } else {
            src.queue.push_back(buffer);
            src.source_type = AL_STATIC;
        }
    }

    fn source_f(&mut self, source: u32, param: i32, value: f32) {
        let Some(src) = self.source_mut(source, "source_f") else {
            return;
        };
        match param {
            AL_GAIN if value >= 0.0 => src.gain = value,
            AL_PITCH if value > 0.0 => src.pitch = value,
            AL_GAIN | AL_PITCH => self.set_error(AL_INVALID_VALUE, "source_f"),
            _ => self.set_error(AL_INVALID_ENUM, "source_f"),
        }
    }

    fn get_source_i(&self, source: u32, param: i32) -> i32 {
        let Some(src) = self.sources.get(&source) else {
            self.set_error(AL_INVALID_NAME, "get_source_i");
            return 0;
        };
        match param {
            AL_SOURCE_STATE => src.state,
            AL_SOURCE_TYPE => src.source_type,
            AL_LOOPING => i32::from(src.looping),
            AL_BUFFERS_QUEUED => src.queue.len() as i32,
            AL_BUFFERS_PROCESSED => src.processed() as i32,
            AL_BUFFER => src
                .queue
                .get(src.current)
                .or_else(|| src.queue.back())
                .map_or(AL_NONE, |&raw| raw as i32),
            _ => {
                self.set_error(AL_INVALID_ENUM, "get_source_i");
                0
            }
        }
    }

    fn get_source_f(&self, source: u32, param: i32) -> f32 {
        let Some(src) = self.sources.get(&source) else {
            self.set_error(AL_INVALID_NAME, "get_source_f");
            return 0.0;
        };
        match param {
            AL_GAIN => src.gain,
            AL_PITCH => src.pitch,
            AL_SEC_OFFSET => self.seconds_offset(src),
            _ => {
                self.set_error(AL_INVALID_ENUM, "get_source_f");
                0.0
            }
        }
    }

    fn source_queue_buffers(&mut self, source: u32, buffers: &[u32]) {
        if buffers.iter().any(|raw| !self.buffers.contains_key(raw)) {
            return self.set_error(AL_INVALID_NAME, "source_queue_buffers");
        }
        let formats: Vec<_> = buffers.iter().map(|raw| self.buffers[raw].format).collect();
        let queued_format = self
            .sources
            .get(&source)
            .and_then(|s| s.queue.front())
            .map(|raw| self.buffers[raw].format);
        let Some(src) = self.source_mut(source, "source_queue_buffers") else {
            return;
        };
        let expected = queued_format.or_else(|| formats.first().copied());
        if src.source_type == AL_STATIC || formats.iter().any(|f| Some(*f) != expected) {
            return self.set_error(AL_INVALID_OPERATION, "source_queue_buffers");
        }
        src.queue.extend(buffers);
        src.source_type = AL_STREAMING;
    }

    fn source_unqueue_buffers(&mut self, source: u32, out: &mut [u32]) {
        let Some(src) = self.source_mut(source, "source_unqueue_buffers") else {
            return;
        };
        if src.source_type == AL_STATIC || out.len() > src.processed() {
            return self.set_error(AL_INVALID_VALUE, "source_unqueue_buffers");
        }
        for slot in out.iter_mut() {
            if let Some(raw) = src.queue.pop_front() {
                *slot = raw;
                src.current -= 1;
            }
        }
        if src.queue.is_empty() {
            src.source_type = AL_UNDETERMINED;
        }
    }

    fn source_play(&mut self, source: u32) {
        let Some(src) = self.source_mut(source, "source_play") else {
            return;
        };
        if src.state != AL_PAUSED {
            src.rewind();
        }
        src.state = if src.queue.is_empty() {
            AL_STOPPED
        } else {
            AL_PLAYING
        };
    }

    fn source_stop(&mut self, source: u32) {
        let Some(src) = self.source_mut(source, "source_stop") else {
            return;
        };
        if src.state == AL_INITIAL {
            return;
        }
        src.state = AL_STOPPED;
        src.current = src.queue.len();
        src.frame_pos = 0.0;
    }

    fn source_pause(&mut self, source: u32) {
        let Some(src) = self.source_mut(source, "source_pause") else {
            return;
        };
        if src.state == AL_PLAYING {
            src.state = AL_PAUSED;
        }
    }

    fn get_error(&mut self) -> i32 {
        self.error.replace(AL_NO_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono16(al: &mut SoftAudio, frames: usize, rate: i32) -> u32 {
        let mut raw = [0u32; 1];
        al.gen_buffers(&mut raw);
        al.buffer_data(raw[0], AL_FORMAT_MONO16, &vec![0u8; frames * 2], rate);
        raw[0]
    }

    fn new_source(al: &mut SoftAudio) -> u32 {
        let mut raw = [0u32; 1];
        al.gen_sources(&mut raw);
        raw[0]
    }

    #[test]
    fn errors_latch_until_read() {
        let mut al = SoftAudio::new();
        al.source_play(99);
        al.get_buffer_i(42, AL_SIZE);
        assert_eq!(al.get_error(), AL_INVALID_NAME);
        assert_eq!(al.get_error(), AL_NO_ERROR);
    }

    #[test]
    fn buffer_data_checks_layout() {
        let mut al = SoftAudio::new();
        let mut raw = [0u32; 1];
        al.gen_buffers(&mut raw);
        al.buffer_data(raw[0], AL_FORMAT_STEREO16, &[0u8; 3], 44100);
        assert_eq!(al.get_error(), AL_INVALID_VALUE);
        al.buffer_data(raw[0], 0x1234, &[0u8; 4], 44100);
        assert_eq!(al.get_error(), AL_INVALID_ENUM);
        assert_eq!(al.get_buffer_i(raw[0], AL_SIZE), 0);
    }

    #[test]
    fn null_attach_is_rejected_while_playing() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        let buf = mono16(&mut al, 100, 1000);
        al.source_queue_buffers(src, &[buf]);
        al.source_play(src);
        al.source_i(src, AL_BUFFER, 0);
        assert_eq!(al.get_error(), AL_INVALID_OPERATION);
        assert_eq!(al.get_source_i(src, AL_BUFFERS_QUEUED), 1);

        al.source_stop(src);
        al.source_i(src, AL_BUFFER, 0);
        assert_eq!(al.get_error(), AL_NO_ERROR);
        assert_eq!(al.get_source_i(src, AL_BUFFERS_QUEUED), 0);
        assert_eq!(al.get_source_i(src, AL_SOURCE_TYPE), AL_UNDETERMINED);
    }

    #[test]
    fn static_source_refuses_queueing() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        let a = mono16(&mut al, 10, 1000);
        let b = mono16(&mut al, 10, 1000);
        al.source_i(src, AL_BUFFER, a as i32);
        al.source_queue_buffers(src, &[b]);
        assert_eq!(al.get_error(), AL_INVALID_OPERATION);
        assert_eq!(al.get_source_i(src, AL_SOURCE_TYPE), AL_STATIC);
    }

    #[test]
    fn queued_buffers_cannot_be_deleted() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        let buf = mono16(&mut al, 10, 1000);
        al.source_queue_buffers(src, &[buf]);
        al.delete_buffers(&[buf]);
        assert_eq!(al.get_error(), AL_INVALID_OPERATION);
        assert_eq!(al.buffer_count(), 1);
    }

    #[test]
    fn stop_marks_queue_processed() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        let a = mono16(&mut al, 100, 1000);
        let b = mono16(&mut al, 100, 1000);
        al.source_queue_buffers(src, &[a, b]);
        al.source_play(src);
        al.source_stop(src);
        assert_eq!(al.get_source_i(src, AL_BUFFERS_PROCESSED), 2);

        let mut out = [0u32; 2];
        al.source_unqueue_buffers(src, &mut out);
        assert_eq!(out, [a, b]);
        assert_eq!(al.get_error(), AL_NO_ERROR);
    }

    #[test]
    fn play_on_empty_source_stops() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        al.source_play(src);
        assert_eq!(al.get_source_i(src, AL_SOURCE_STATE), AL_STOPPED);
    }

    #[test]
    fn pitch_scales_consumption() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        let buf = mono16(&mut al, 1000, 1000);
        al.source_i(src, AL_BUFFER, buf as i32);
        al.source_f(src, AL_PITCH, 2.0);
        al.source_play(src);
        al.advance(0.25);
        let offset = al.get_source_f(src, AL_SEC_OFFSET);
        assert!((offset - 0.5).abs() < 1e-6, "offset {offset}");
        al.advance(0.25);
        assert_eq!(al.get_source_i(src, AL_SOURCE_STATE), AL_STOPPED);
    }

    #[test]
    fn pause_keeps_position() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        let buf = mono16(&mut al, 1000, 1000);
        al.source_i(src, AL_BUFFER, buf as i32);
        al.source_play(src);
        al.advance(0.3);
        al.source_pause(src);
        al.advance(0.3);
        al.source_play(src);
        let offset = al.get_source_f(src, AL_SEC_OFFSET);
        assert!((offset - 0.3).abs() < 1e-6, "offset {offset}");
    }

    #[test]
    fn looping_source_wraps_instead_of_stopping() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        let buf = mono16(&mut al, 1000, 1000);
        al.source_i(src, AL_BUFFER, buf as i32);
        al.source_i(src, AL_LOOPING, 1);
        assert_eq!(al.get_error(), AL_NO_ERROR);
        assert_eq!(al.get_source_i(src, AL_LOOPING), 1);

        al.source_play(src);
        al.advance(2.25);
        assert_eq!(al.get_source_i(src, AL_SOURCE_STATE), AL_PLAYING);
        let offset = al.get_source_f(src, AL_SEC_OFFSET);
        assert!((offset - 0.25).abs() < 1e-6, "offset {offset}");

        al.source_i(src, AL_LOOPING, 0);
        al.advance(1.0);
        assert_eq!(al.get_source_i(src, AL_SOURCE_STATE), AL_STOPPED);
    }

    #[test]
    fn looping_flag_rejects_non_boolean() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        al.source_i(src, AL_LOOPING, 2);
        assert_eq!(al.get_error(), AL_INVALID_VALUE);
        assert!(!al.source(SourceId::new(src)).unwrap().looping());
    }

    #[test]
    fn invalid_gain_and_pitch_are_rejected() {
        let mut al = SoftAudio::new();
        let src = new_source(&mut al);
        al.source_f(src, AL_GAIN, -1.0);
        assert_eq!(al.get_error(), AL_INVALID_VALUE);
        al.source_f(src, AL_PITCH, 0.0);
        assert_eq!(al.get_error(), AL_INVALID_VALUE);
        assert_eq!(al.get_source_f(src, AL_GAIN), 1.0);
        assert_eq!(al.get_source_f(src, AL_PITCH), 1.0);
    }
}
