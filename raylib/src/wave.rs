// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Wave data handles (audio samples in CPU memory).

use raylib_sys::WAVE;

use crate::api::CallArg;
use crate::marshal::{encode_text, read_f32};
use crate::view::StructView;
use crate::Raylib;

/// Audio wave data kept in CPU memory.
#[derive(Debug)]
pub struct Wave {
    rl: Raylib,
    view: StructView,
}

impl Wave {
    pub(crate) fn bytes(&self) -> &[u8] {
        self.view.bytes()
    }

    /// Total number of frames (considering channels).
    pub fn frame_count(&self) -> u32 {
        self.view.u32_field(0)
    }

    /// Frequency (samples per second).
    pub fn sample_rate(&self) -> u32 {
        self.view.u32_field(1)
    }

    /// Bit depth (bits per sample): 8, 16, 32 (24 not supported).
    pub fn sample_size(&self) -> u32 {
        self.view.u32_field(2)
    }

    /// Number of channels (1-mono, 2-stereo, ...).
    pub fn channels(&self) -> u32 {
        self.view.u32_field(3)
    }

    /// Load wave data from file.
    pub fn load(rl: &Raylib, file_name: &str) -> Wave {
        let file_name = encode_text(file_name);
        let bytes = rl.call_struct("LoadWave", &[CallArg::Buffer(&file_name)]);
        Wave { rl: rl.clone(), view: StructView::new(bytes, &WAVE) }
    }

    /// Load wave from memory buffer, file_type refers to extension:
    /// i.e. ".wav".
    pub fn load_from_memory(rl: &Raylib, file_type: &str, file_data: &[u8]) -> Wave {
        let file_type = encode_text(file_type);
        let bytes = rl.call_struct(
            "LoadWaveFromMemory",
            &[
                CallArg::Buffer(&file_type),
                CallArg::Buffer(file_data),
                CallArg::I32(file_data.len() as i32),
            ],
        );
        Wave { rl: rl.clone(), view: StructView::new(bytes, &WAVE) }
    }

    /// Check if wave data is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsWaveReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload wave data.
    pub fn unload(self) {
        self.rl.call_void("UnloadWave", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Export wave data to file, returns true on success.
    pub fn export(&self, file_name: &str) -> bool {
        let file_name = encode_text(file_name);
        self.rl.call_bool(
            "ExportWave",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(&file_name)],
        )
    }

    /// Export wave sample data to code (.h), returns true on success.
    pub fn export_as_code(&self, file_name: &str) -> bool {
        let file_name = encode_text(file_name);
        self.rl.call_bool(
            "ExportWaveAsCode",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(&file_name)],
        )
    }

    /// Copy this wave to a new wave.
    pub fn copy(&self) -> Wave {
        let bytes = self.rl.call_struct("WaveCopy", &[CallArg::Struct(self.view.bytes())]);
        Wave { rl: self.rl.clone(), view: StructView::new(bytes, &WAVE) }
    }

    /// Crop this wave to the defined frame range.
    pub fn crop(&mut self, init_frame: i32, final_frame: i32) {
        let ptr = self.view.as_mut_ptr();
        self.rl.call_void(
            "WaveCrop",
            &[CallArg::Pointer(ptr), CallArg::I32(init_frame), CallArg::I32(final_frame)],
        );
    }

    /// Convert wave data to desired format.
    pub fn format(&mut self, sample_rate: i32, sample_size: i32, channels: i32) {
        let ptr = self.view.as_mut_ptr();
        self.rl.call_void(
            "WaveFormat",
            &[
                CallArg::Pointer(ptr),
                CallArg::I32(sample_rate),
                CallArg::I32(sample_size),
                CallArg::I32(channels),
            ],
        );
    }

    /// Load samples data from the wave as a 32bit float array, releasing
    /// the native buffer before returning.
    pub fn samples(&self) -> Vec<f32> {
        let ptr = self.rl.call_ptr("LoadWaveSamples", &[CallArg::Struct(self.view.bytes())]);
        let count = (self.frame_count() * self.channels()) as usize;
        let mut samples = Vec::with_capacity(count);
        if !ptr.is_null() {
            let raw = unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), count * 4) };
            for index in 0..count {
                samples.push(read_f32(raw, index * 4));
            }
        }
        self.rl.call_void("UnloadWaveSamples", &[CallArg::Pointer(ptr)]);
        samples
    }
}
