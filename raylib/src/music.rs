// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Streamed music handles.

use raylib_sys::MUSIC;

use crate::api::CallArg;
use crate::marshal::encode_text;
use crate::view::StructView;
use crate::Raylib;

/// A music stream, anything longer than ~10 seconds should be streamed.
#[derive(Debug)]
pub struct Music {
    rl: Raylib,
    view: StructView,
}

impl Music {
    /// Load music stream from file.
    pub fn load(rl: &Raylib, file_name: &str) -> Music {
        let file_name = encode_text(file_name);
        let bytes = rl.call_struct("LoadMusicStream", &[CallArg::Buffer(&file_name)]);
        Music { rl: rl.clone(), view: StructView::new(bytes, &MUSIC) }
    }

    /// Load music stream from data, file_type refers to extension:
    /// i.e. ".mp3".
    pub fn load_from_memory(rl: &Raylib, file_type: &str, data: &[u8]) -> Music {
        let file_type = encode_text(file_type);
        let bytes = rl.call_struct(
            "LoadMusicStreamFromMemory",
            &[CallArg::Buffer(&file_type), CallArg::Buffer(data), CallArg::I32(data.len() as i32)],
        );
        Music { rl: rl.clone(), view: StructView::new(bytes, &MUSIC) }
    }

    /// Check if the music stream is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsMusicReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload the music stream.
    pub fn unload(self) {
        self.rl.call_void("UnloadMusicStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Start music playing.
    pub fn play(&self) {
        self.rl.call_void("PlayMusicStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Check if music is playing.
    pub fn is_playing(&self) -> bool {
        self.rl.call_bool("IsMusicStreamPlaying", &[CallArg::Struct(self.view.bytes())])
    }

    /// Update buffers for music streaming. Call every frame.
    pub fn update(&self) {
        self.rl.call_void("UpdateMusicStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Stop music playing.
    pub fn stop(&self) {
        self.rl.call_void("StopMusicStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Pause music playing.
    pub fn pause(&self) {
        self.rl.call_void("PauseMusicStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Resume playing paused music.
    pub fn resume(&self) {
        self.rl.call_void("ResumeMusicStream", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Seek music to a position (in seconds).
    pub fn seek(&self, position: f32) {
        self.rl.call_void(
            "SeekMusicStream",
            &[CallArg::Struct(self.view.bytes()), CallArg::F32(position)],
        );
    }

    /// Set volume for music (1.0 is max level).
    pub fn set_volume(&self, volume: f32) {
        self.rl
            .call_void("SetMusicVolume", &[CallArg::Struct(self.view.bytes()), CallArg::F32(volume)]);
    }

    /// Set pitch for music (1.0 is base level).
    pub fn set_pitch(&self, pitch: f32) {
        self.rl
            .call_void("SetMusicPitch", &[CallArg::Struct(self.view.bytes()), CallArg::F32(pitch)]);
    }

    /// Set pan for music (0.5 is center).
    pub fn set_pan(&self, pan: f32) {
        self.rl.call_void("SetMusicPan", &[CallArg::Struct(self.view.bytes()), CallArg::F32(pan)]);
    }

    /// Get music time length (in seconds).
    pub fn get_time_length(&self) -> f32 {
        self.rl.call_f32("GetMusicTimeLength", &[CallArg::Struct(self.view.bytes())])
    }

    /// Get current music time played (in seconds).
    pub fn get_time_played(&self) -> f32 {
        self.rl.call_f32("GetMusicTimePlayed", &[CallArg::Struct(self.view.bytes())])
    }
}
