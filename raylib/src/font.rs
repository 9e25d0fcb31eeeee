// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Font handles.

use raylib_sys::FONT;

use crate::api::CallArg;
use crate::marshal::{encode_text, write_i32};
use crate::view::StructView;
use crate::Raylib;

/// A font loaded into GPU memory (VRAM).
#[derive(Debug)]
pub struct Font {
    rl: Raylib,
    view: StructView,
}

impl Font {
    pub(crate) fn bytes(&self) -> &[u8] {
        self.view.bytes()
    }

    /// Base size (default chars height).
    pub fn base_size(&self) -> i32 {
        self.view.i32_field(0)
    }

    /// Number of glyph characters.
    pub fn glyph_count(&self) -> i32 {
        self.view.i32_field(1)
    }

    /// Get the default font.
    pub fn get_default(rl: &Raylib) -> Font {
        let bytes = rl.call_struct("GetFontDefault", &[]);
        Font { rl: rl.clone(), view: StructView::new(bytes, &FONT) }
    }

    /// Load font from file into GPU memory (VRAM).
    pub fn load(rl: &Raylib, file_name: &str) -> Font {
        let file_name = encode_text(file_name);
        let bytes = rl.call_struct("LoadFont", &[CallArg::Buffer(&file_name)]);
        Font { rl: rl.clone(), view: StructView::new(bytes, &FONT) }
    }

    /// Load font from file with extended parameters. Pass `None` for
    /// codepoints to load the default character set.
    pub fn load_ex(rl: &Raylib, file_name: &str, font_size: i32, codepoints: Option<&[i32]>) -> Font {
        let file_name = encode_text(file_name);
        let packed = codepoints.map(|codepoints| {
            let mut bytes = vec![0u8; codepoints.len() * 4];
            for (index, codepoint) in codepoints.iter().enumerate() {
                write_i32(&mut bytes, index * 4, *codepoint);
            }
            bytes
        });
        let count = codepoints.map_or(0, |codepoints| codepoints.len() as i32);
        let codepoints_arg = match &packed {
            Some(bytes) => CallArg::Buffer(bytes),
            None => CallArg::Pointer(std::ptr::null_mut()),
        };
        let bytes = rl.call_struct(
            "LoadFontEx",
            &[
                CallArg::Buffer(&file_name),
                CallArg::I32(font_size),
                codepoints_arg,
                CallArg::I32(count),
            ],
        );
        Font { rl: rl.clone(), view: StructView::new(bytes, &FONT) }
    }

    /// Check if the font is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsFontReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload font from GPU memory (VRAM).
    pub fn unload(self) {
        self.rl.call_void("UnloadFont", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Export font as code file, returns true on success.
    pub fn export_as_code(&self, file_name: &str) -> bool {
        let file_name = encode_text(file_name);
        self.rl.call_bool(
            "ExportFontAsCode",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(&file_name)],
        )
    }
}
