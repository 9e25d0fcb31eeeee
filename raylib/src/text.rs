// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Text drawing and measuring.

use crate::api::CallArg;
use crate::font::Font;
use crate::geom::{Color, Vector2};
use crate::marshal::encode_text;
use crate::Raylib;

impl Raylib {
    /// Draw current FPS.
    pub fn draw_fps(&self, x: i32, y: i32) {
        self.call_void("DrawFPS", &[CallArg::I32(x), CallArg::I32(y)]);
    }

    /// Draw text (using default font).
    pub fn draw_text(&self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        let text = encode_text(text);
        self.call_void(
            "DrawText",
            &[
                CallArg::Buffer(&text),
                CallArg::I32(x),
                CallArg::I32(y),
                CallArg::I32(font_size),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw text using font and additional parameters.
    pub fn draw_text_ex(
        &self,
        font: &Font,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) {
        let text = encode_text(text);
        self.call_void(
            "DrawTextEx",
            &[
                CallArg::Struct(font.bytes()),
                CallArg::Buffer(&text),
                CallArg::Struct(&position.encode()),
                CallArg::F32(font_size),
                CallArg::F32(spacing),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw text using font and pro parameters (rotation).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_pro(
        &self,
        font: &Font,
        text: &str,
        position: Vector2,
        origin: Vector2,
        rotation: f32,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) {
        let text = encode_text(text);
        self.call_void(
            "DrawTextPro",
            &[
                CallArg::Struct(font.bytes()),
                CallArg::Buffer(&text),
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&origin.encode()),
                CallArg::F32(rotation),
                CallArg::F32(font_size),
                CallArg::F32(spacing),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Set vertical line spacing when drawing with line-breaks.
    pub fn set_text_line_spacing(&self, spacing: i32) {
        self.call_void("SetTextLineSpacing", &[CallArg::I32(spacing)]);
    }

    /// Measure string width for default font.
    pub fn measure_text(&self, text: &str, font_size: i32) -> i32 {
        let text = encode_text(text);
        self.call_i32("MeasureText", &[CallArg::Buffer(&text), CallArg::I32(font_size)])
    }

    /// Measure string size for font.
    pub fn measure_text_ex(&self, font: &Font, text: &str, font_size: f32, spacing: f32) -> Vector2 {
        let text = encode_text(text);
        Vector2::decode(&self.call_struct(
            "MeasureTextEx",
            &[
                CallArg::Struct(font.bytes()),
                CallArg::Buffer(&text),
                CallArg::F32(font_size),
                CallArg::F32(spacing),
            ],
        ))
    }
}
