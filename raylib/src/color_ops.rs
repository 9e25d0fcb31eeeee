// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Color conversions and blending through the native library.

use crate::api::CallArg;
use crate::geom::{Color, Vector3, Vector4};
use crate::Raylib;

impl Raylib {
    /// Get color with alpha applied, alpha goes from 0.0 to 1.0.
    pub fn fade(&self, color: Color, alpha: f32) -> Color {
        Color::decode(
            &self.call_struct("Fade", &[CallArg::Struct(&color.encode()), CallArg::F32(alpha)]),
        )
    }

    /// Get hexadecimal value for a color.
    pub fn color_to_int(&self, color: Color) -> i32 {
        self.call_i32("ColorToInt", &[CallArg::Struct(&color.encode())])
    }

    /// Get color normalized as float [0..1].
    pub fn color_normalize(&self, color: Color) -> Vector4 {
        Vector4::decode(&self.call_struct("ColorNormalize", &[CallArg::Struct(&color.encode())]))
    }

    /// Get color from normalized values [0..1].
    pub fn color_from_normalized(&self, normalized: Vector4) -> Color {
        Color::decode(
            &self.call_struct("ColorFromNormalized", &[CallArg::Struct(&normalized.encode())]),
        )
    }

    /// Get HSV values for a color, hue [0..360], saturation/value [0..1].
    pub fn color_to_hsv(&self, color: Color) -> Vector3 {
        Vector3::decode(&self.call_struct("ColorToHSV", &[CallArg::Struct(&color.encode())]))
    }

    /// Get a color from HSV values, hue [0..360], saturation/value [0..1].
    pub fn color_from_hsv(&self, hue: f32, saturation: f32, value: f32) -> Color {
        Color::decode(&self.call_struct(
            "ColorFromHSV",
            &[CallArg::F32(hue), CallArg::F32(saturation), CallArg::F32(value)],
        ))
    }

    /// Get color multiplied with another color.
    pub fn color_tint(&self, color: Color, tint: Color) -> Color {
        Color::decode(&self.call_struct(
            "ColorTint",
            &[CallArg::Struct(&color.encode()), CallArg::Struct(&tint.encode())],
        ))
    }

    /// Get color with brightness correction, factor goes from -1.0 to 1.0.
    pub fn color_brightness(&self, color: Color, factor: f32) -> Color {
        Color::decode(&self.call_struct(
            "ColorBrightness",
            &[CallArg::Struct(&color.encode()), CallArg::F32(factor)],
        ))
    }

    /// Get color with contrast correction, contrast between -1.0 and 1.0.
    pub fn color_contrast(&self, color: Color, contrast: f32) -> Color {
        Color::decode(&self.call_struct(
            "ColorContrast",
            &[CallArg::Struct(&color.encode()), CallArg::F32(contrast)],
        ))
    }

    /// Get color with alpha applied, alpha goes from 0.0 to 1.0.
    pub fn color_alpha(&self, color: Color, alpha: f32) -> Color {
        Color::decode(&self.call_struct(
            "ColorAlpha",
            &[CallArg::Struct(&color.encode()), CallArg::F32(alpha)],
        ))
    }

    /// Get src alpha-blended into dst color with tint.
    pub fn color_alpha_blend(&self, dst: Color, src: Color, tint: Color) -> Color {
        Color::decode(&self.call_struct(
            "ColorAlphaBlend",
            &[
                CallArg::Struct(&dst.encode()),
                CallArg::Struct(&src.encode()),
                CallArg::Struct(&tint.encode()),
            ],
        ))
    }

    /// Get color structure from hexadecimal value.
    pub fn color_from_int(&self, hex_value: u32) -> Color {
        Color::decode(&self.call_struct("GetColor", &[CallArg::U32(hex_value)]))
    }
}
