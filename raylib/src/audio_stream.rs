// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Raw audio stream handles.

use raylib_sys::AUDIO_STREAM;

use crate::api::CallArg;
use crate::view::StructView;
use crate::Raylib;

/// A raw PCM audio stream.
#[derive(Debug)]
pub struct AudioStream {
    rl: Raylib,
    view: StructView,
}

impl AudioStream {
    /// Load audio stream (to stream raw audio pcm data).
    pub fn load(rl: &Raylib, sample_rate: u32, sample_size: u32, channels: u32) -> AudioStream {
        let bytes = rl.call_struct(
            "LoadAudioStream",
            &[CallArg::U32(sample_rate), CallArg::U32(sample_size), CallArg::U32(channels)],
        );
        AudioStream { rl: rl.clone(), view: StructView::new(bytes, &AUDIO_STREAM) }
    }

    /// Check if the audio stream is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsAudioStreamReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload audio stream and free memory.
    pub fn unload(self) {
        self.rl.call_void("UnloadAudioStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Update audio stream buffers with data.
    pub fn update(&self, data: &[u8], frame_count: i32) {
        self.rl.call_void(
            "UpdateAudioStream",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(data), CallArg::I32(frame_count)],
        );
    }

    /// Check if any audio stream buffers requires refill.
    pub fn is_processed(&self) -> bool {
        self.rl.call_bool("IsAudioStreamProcessed", &[CallArg::Struct(self.view.bytes())])
    }

    /// Play the audio stream.
    pub fn play(&self) {
        self.rl.call_void("PlayAudioStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Pause the audio stream.
    pub fn pause(&self) {
        self.rl.call_void("PauseAudioStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Resume the audio stream.
    pub fn resume(&self) {
        self.rl.call_void("ResumeAudioStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Check if the audio stream is playing.
    pub fn is_playing(&self) -> bool {
        self.rl.call_bool("IsAudioStreamPlaying", &[CallArg::Struct(self.view.bytes())])
    }

    /// Stop the audio stream.
    pub fn stop(&self) {
        self.rl.call_void("StopAudioStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Set volume for the audio stream (1.0 is max level).
    pub fn set_volume(&self, volume: f32) {
        self.rl.call_void(
            "SetAudioStreamVolume",
            &[CallArg::Struct(self.view.bytes()), CallArg::F32(volume)],
        );
    }

    /// Set pitch for the audio stream (1.0 is base level).
    pub fn set_pitch(&self, pitch: f32) {
        self.rl.call_void(
            "SetAudioStreamPitch",
            &[CallArg::Struct(self.view.bytes()), CallArg::F32(pitch)],
        );
    }

    /// Set pan for the audio stream (0.5 is centered).
    pub fn set_pan(&self, pan: f32) {
        self.rl.call_void(
            "SetAudioStreamPan",
            &[CallArg::Struct(self.view.bytes()), CallArg::F32(pan)],
        );
    }
}

impl Raylib {
    /// Default size for new audio streams.
    pub fn set_audio_stream_buffer_size_default(&self, size: i32) {
        self.call_void("SetAudioStreamBufferSizeDefault", &[CallArg::I32(size)]);
    }
}
