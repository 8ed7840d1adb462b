//! System OpenAL backend.
//!
//! Loads the OpenAL library at runtime and forwards every [`NativeAudio`]
//! call to it. Device and context setup stay with the caller: a context must
//! be current before any call here does anything useful.

use crate::native::NativeAudio;
use al_sys::{AlApi, ALfloat, ALint, ALsizei, ALuint, ALvoid};
use anyhow::{Context, Result};
use tracing::debug;

/// Forwarding backend over the system OpenAL library.
pub struct OpenAl {
    api: AlApi,
}

impl OpenAl {
    /// Load the platform's default OpenAL library.
    pub fn load_default() -> Result<Self> {
        let api = AlApi::load_default().context("Failed to load OpenAL library")?;
        debug!("Audio backend: system OpenAL");
        Ok(Self { api })
    }
}

fn count(len: usize) -> ALsizei {
    len as ALsizei
}

impl NativeAudio for OpenAl {
    fn gen_buffers(&mut self, out: &mut [u32]) {
        unsafe { self.api.alGenBuffers(count(out.len()), out.as_mut_ptr() as *mut ALuint) }
    }

    fn delete_buffers(&mut self, buffers: &[u32]) {
        unsafe {
            self.api
                .alDeleteBuffers(count(buffers.len()), buffers.as_ptr() as *const ALuint)
        }
    }

    fn buffer_data(&mut self, buffer: u32, format: i32, data: &[u8], frequency: i32) {
        unsafe {
            self.api.alBufferData(
                buffer as ALuint,
                format,
                data.as_ptr() as *const ALvoid,
                count(data.len()),
                frequency as ALsizei,
            )
        }
    }

    fn get_buffer_i(&self, buffer: u32, param: i32) -> i32 {
        let mut value: ALint = 0;
        unsafe { self.api.alGetBufferi(buffer as ALuint, param, &mut value) };
        value
    }

    fn gen_sources(&mut self, out: &mut [u32]) {
        unsafe { self.api.alGenSources(count(out.len()), out.as_mut_ptr() as *mut ALuint) }
    }

    fn delete_sources(&mut self, sources: &[u32]) {
        unsafe {
            self.api
                .alDeleteSources(count(sources.len()), sources.as_ptr() as *const ALuint)
        }
    }

    fn source_i(&mut self, source: u32, param: i32, value: i32) {
        unsafe { self.api.alSourcei(source as ALuint, param, value as ALint) }
    }

    fn source_f(&mut self, source: u32, param: i32, value: f32) {
        unsafe { self.api.alSourcef(source as ALuint, param, value as ALfloat) }
    }

    fn get_source_i(&self, source: u32, param: i32) -> i32 {
        let mut value: ALint = 0;
        unsafe { self.api.alGetSourcei(source as ALuint, param, &mut value) };
        value
    }

    fn get_source_f(&self, source: u32, param: i32) -> f32 {
        let mut value: ALfloat = 0.0;
        unsafe { self.api.alGetSourcef(source as ALuint, param, &mut value) };
        value
    }

    fn source_queue_buffers(&mut self, source: u32, buffers: &[u32]) {
        unsafe {
            self.api.alSourceQueueBuffers(
                source as ALuint,
                count(buffers.len()),
                buffers.as_ptr() as *const ALuint,
            )
        }
    }

    fn source_unqueue_buffers(&mut self, source: u32, out: &mut [u32]) {
        unsafe {
            self.api.alSourceUnqueueBuffers(
                source as ALuint,
                count(out.len()),
                out.as_mut_ptr() as *mut ALuint,
            )
        }
    }

    fn source_play(&mut self, source: u32) {
        unsafe { self.api.alSourcePlay(source as ALuint) }
    }

    fn source_stop(&mut self, source: u32) {
        unsafe { self.api.alSourceStop(source as ALuint) }
    }

    fn source_pause(&mut self, source: u32) {
        unsafe { self.api.alSourcePause(source as ALuint) }
    }

    fn get_error(&mut self) -> i32 {
        unsafe { self.api.alGetError() }
    }
}
