// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Audio device control.

use crate::api::CallArg;
use crate::Raylib;

impl Raylib {
    /// Initialize audio device and context.
    pub fn init_audio_device(&self) {
        self.call_void("InitAudioDevice", &[]);
    }

    /// Close the audio device and context.
    pub fn close_audio_device(&self) {
        self.call_void("CloseAudioDevice", &[]);
    }

    /// Check if audio device has been initialized successfully.
    pub fn is_audio_device_ready(&self) -> bool {
        self.call_bool("IsAudioDeviceReady", &[])
    }

    /// Set master volume (listener).
    pub fn set_master_volume(&self, volume: f32) {
        self.call_void("SetMasterVolume", &[CallArg::F32(volume)]);
    }

    /// Get master volume (listener).
    pub fn get_master_volume(&self) -> f32 {
        self.call_f32("GetMasterVolume", &[])
    }
}
