// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Frame bracketing and drawing-mode operations.
//!
//! The "drawing frame open" / "2D or 3D mode active" state lives entirely on
//! the native side; nothing here guards against unbalanced begin/end pairs.

use crate::api::CallArg;
use crate::geom::{Camera2D, Camera3D, Color};
use crate::texture::RenderTexture2D;
use crate::Raylib;

/// Color blending mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Alpha,
    Additive,
    Multiplied,
    AddColors,
    SubtractColors,
    AlphaPremultiply,
    Custom,
    CustomSeparate,
}

impl Raylib {
    /// Set background color (framebuffer clear color).
    pub fn clear_background(&self, color: Color) {
        self.call_void("ClearBackground", &[CallArg::Struct(&color.encode())]);
    }

    /// Setup canvas (framebuffer) to start drawing.
    pub fn begin_drawing(&self) {
        self.call_void("BeginDrawing", &[]);
    }

    /// End canvas drawing and swap buffers (double buffering).
    pub fn end_drawing(&self) {
        self.call_void("EndDrawing", &[]);
    }

    /// Begin 2D mode with custom camera.
    pub fn begin_mode2d(&self, camera: Camera2D) {
        self.call_void("BeginMode2D", &[CallArg::Struct(&camera.encode())]);
    }

    /// Ends 2D mode with custom camera.
    pub fn end_mode2d(&self) {
        self.call_void("EndMode2D", &[]);
    }

    /// Begin 3D mode with custom camera.
    pub fn begin_mode3d(&self, camera: Camera3D) {
        self.call_void("BeginMode3D", &[CallArg::Struct(&camera.encode())]);
    }

    /// Ends 3D mode and returns to default 2D orthographic mode.
    pub fn end_mode3d(&self) {
        self.call_void("EndMode3D", &[]);
    }

    /// Begin drawing to render texture.
    pub fn begin_texture_mode(&self, target: &RenderTexture2D) {
        self.call_void("BeginTextureMode", &[CallArg::Struct(target.bytes())]);
    }

    /// Ends drawing to render texture.
    pub fn end_texture_mode(&self) {
        self.call_void("EndTextureMode", &[]);
    }

    /// Begin blending mode.
    pub fn begin_blend_mode(&self, mode: BlendMode) {
        self.call_void("BeginBlendMode", &[CallArg::I32(mode as i32)]);
    }

    /// End blending mode (reset to default: alpha blending).
    pub fn end_blend_mode(&self) {
        self.call_void("EndBlendMode", &[]);
    }

    /// Begin scissor mode (define screen area for following drawing).
    pub fn begin_scissor_mode(&self, x: i32, y: i32, width: i32, height: i32) {
        self.call_void(
            "BeginScissorMode",
            &[CallArg::I32(x), CallArg::I32(y), CallArg::I32(width), CallArg::I32(height)],
        );
    }

    /// End scissor mode.
    pub fn end_scissor_mode(&self) {
        self.call_void("EndScissorMode", &[]);
    }
}
