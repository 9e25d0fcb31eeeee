// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Frame timing.

use crate::api::CallArg;
use crate::Raylib;

impl Raylib {
    /// Set target FPS (maximum).
    pub fn set_target_fps(&self, fps: i32) {
        self.call_void("SetTargetFPS", &[CallArg::I32(fps)]);
    }

    /// Get time in seconds for last frame drawn (delta time).
    pub fn get_frame_time(&self) -> f32 {
        self.call_f32("GetFrameTime", &[])
    }

    /// Get elapsed time in seconds since init_window().
    pub fn get_time(&self) -> f64 {
        self.call_f64("GetTime", &[])
    }

    /// Get current FPS.
    pub fn get_fps(&self) -> i32 {
        self.call_i32("GetFPS", &[])
    }
}
