// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Sound handles.

use raylib_sys::SOUND;

use crate::api::CallArg;
use crate::marshal::encode_text;
use crate::view::StructView;
use crate::wave::Wave;
use crate::Raylib;

/// A loaded sound effect.
#[derive(Debug)]
pub struct Sound {
    rl: Raylib,
    view: StructView,
}

impl Sound {
    /// Total number of frames (considering channels).
    pub fn frame_count(&self) -> u32 {
        self.view.u32_field(6)
    }

    /// Load sound from file.
    pub fn load(rl: &Raylib, file_name: &str) -> Sound {
        let file_name = encode_text(file_name);
        let bytes = rl.call_struct("LoadSound", &[CallArg::Buffer(&file_name)]);
        Sound { rl: rl.clone(), view: StructView::new(bytes, &SOUND) }
    }

    /// Load sound from wave data.
    pub fn load_from_wave(rl: &Raylib, wave: &Wave) -> Sound {
        let bytes = rl.call_struct("LoadSoundFromWave", &[CallArg::Struct(wave.bytes())]);
        Sound { rl: rl.clone(), view: StructView::new(bytes, &SOUND) }
    }

    /// Create a new sound that shares the same sample data as this sound;
    /// the alias does not own the sample data.
    pub fn alias(&self) -> Sound {
        let bytes = self.rl.call_struct("LoadSoundAlias", &[CallArg::Struct(self.view.bytes())]);
        Sound { rl: self.rl.clone(), view: StructView::new(bytes, &SOUND) }
    }

    /// Check if the sound is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsSoundReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Update sound buffer with new data.
    pub fn update(&self, data: &[u8], sample_count: i32) {
        self.rl.call_void(
            "UpdateSound",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Buffer(data),
                CallArg::I32(sample_count),
            ],
        );
    }

    /// Unload the sound.
    pub fn unload(self) {
        self.rl.call_void("UnloadSound", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Unload a sound alias (does not deallocate sample data).
    pub fn unload_alias(self) {
        self.rl.call_void("UnloadSoundAlias", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Play the sound.
    pub fn play(&self) {
        self.rl.call_void("PlaySound", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Stop playing the sound.
    pub fn stop(&self) {
        self.rl.call_void("StopSound", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Pause the sound.
    pub fn pause(&self) {
        self.rl.call_void("PauseSound", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Resume the paused sound.
    pub fn resume(&self) {
        self.rl.call_void("ResumeSound", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Check if the sound is currently playing.
    pub fn is_playing(&self) -> bool {
        self.rl.call_bool("IsSoundPlaying", &[CallArg::Struct(self.view.bytes())])
    }

    /// Set volume for the sound (1.0 is max level).
    pub fn set_volume(&self, volume: f32) {
        self.rl
            .call_void("SetSoundVolume", &[CallArg::Struct(self.view.bytes()), CallArg::F32(volume)]);
    }

    /// Set pitch for the sound (1.0 is base level).
    pub fn set_pitch(&self, pitch: f32) {
        self.rl
            .call_void("SetSoundPitch", &[CallArg::Struct(self.view.bytes()), CallArg::F32(pitch)]);
    }

    /// Set pan for the sound (0.5 is center).
    pub fn set_pan(&self, pan: f32) {
        self.rl.call_void("SetSoundPan", &[CallArg::Struct(self.view.bytes()), CallArg::F32(pan)]);
    }
}
