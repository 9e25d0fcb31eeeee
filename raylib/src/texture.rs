// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! GPU texture handles.
//!
//! Textures live in VRAM and are owned by the native library; the handles
//! here wrap the opaque descriptor struct and must be released with their
//! consuming `unload` methods. Dropping a handle without unloading leaks the
//! GPU resource.

use raylib_sys::{RENDER_TEXTURE2D, TEXTURE2D};

use crate::api::CallArg;
use crate::geom::{Color, NPatchInfo, Rectangle, Vector2};
use crate::image::Image;
use crate::marshal::encode_text;
use crate::view::StructView;
use crate::Raylib;

/// Texture scaling filter mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureFilter {
    #[default]
    Point,
    Bilinear,
    Trilinear,
    Anisotropic4x,
    Anisotropic8x,
    Anisotropic16x,
}

/// Texture wrapping mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureWrap {
    #[default]
    Repeat,
    Clamp,
    MirrorRepeat,
    MirrorClamp,
}

/// Cubemap layout of a source image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CubemapLayout {
    /// Automatically detect layout type.
    #[default]
    Auto,
    /// Layout is defined by a vertical line with faces.
    LineVertical,
    /// Layout is defined by a horizontal line with faces.
    LineHorizontal,
    /// Layout is defined by a 3x4 cross with cubemap faces.
    CrossThreeByFour,
    /// Layout is defined by a 4x3 cross with cubemap faces.
    CrossFourByThree,
    /// Layout is defined by a panorama image (equirectangular map).
    Panorama,
}

/// A texture loaded into GPU memory (VRAM).
#[derive(Debug)]
pub struct Texture2D {
    rl: Raylib,
    view: StructView,
}

impl Texture2D {
    /// Load texture from file into GPU memory (VRAM).
    pub fn load(rl: &Raylib, file_name: &str) -> Texture2D {
        let file_name = encode_text(file_name);
        let bytes = rl.call_struct("LoadTexture", &[CallArg::Buffer(&file_name)]);
        Texture2D { rl: rl.clone(), view: StructView::new(bytes, &TEXTURE2D) }
    }

    /// Load texture from image data.
    pub fn load_from_image(rl: &Raylib, image: &Image) -> Texture2D {
        let bytes = rl.call_struct("LoadTextureFromImage", &[CallArg::Struct(image.bytes())]);
        Texture2D { rl: rl.clone(), view: StructView::new(bytes, &TEXTURE2D) }
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        self.view.bytes()
    }

    /// Texture base width.
    pub fn width(&self) -> i32 {
        self.view.i32_field(1)
    }

    /// Texture base height.
    pub fn height(&self) -> i32 {
        self.view.i32_field(2)
    }

    /// Check if the texture is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsTextureReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload texture from GPU memory (VRAM).
    pub fn unload(self) {
        self.rl.call_void("UnloadTexture", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Update GPU texture with new data.
    pub fn update(&self, pixels: &[u8]) {
        self.rl.call_void(
            "UpdateTexture",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(pixels)],
        );
    }

    /// Update GPU texture rectangle with new data.
    pub fn update_rec(&self, rec: Rectangle, pixels: &[u8]) {
        self.rl.call_void(
            "UpdateTextureRec",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&rec.encode()),
                CallArg::Buffer(pixels),
            ],
        );
    }

    /// Generate GPU mipmaps for the texture.
    pub fn gen_mipmaps(&mut self) {
        let ptr = self.view.as_mut_ptr();
        self.rl.call_void("GenTextureMipmaps", &[CallArg::Pointer(ptr)]);
    }

    /// Set texture scaling filter mode.
    pub fn set_filter(&self, filter: TextureFilter) {
        self.rl.call_void(
            "SetTextureFilter",
            &[CallArg::Struct(self.view.bytes()), CallArg::I32(filter as i32)],
        );
    }

    /// Set texture wrapping mode.
    pub fn set_wrap(&self, wrap: TextureWrap) {
        self.rl.call_void(
            "SetTextureWrap",
            &[CallArg::Struct(self.view.bytes()), CallArg::I32(wrap as i32)],
        );
    }

    /// Draw the texture.
    pub fn draw(&self, pos_x: i32, pos_y: i32, tint: Color) {
        self.rl.call_void(
            "DrawTexture",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::I32(pos_x),
                CallArg::I32(pos_y),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw the texture with position defined as Vector2.
    pub fn draw_v(&self, position: Vector2, tint: Color) {
        self.rl.call_void(
            "DrawTextureV",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw the texture with extended parameters.
    pub fn draw_ex(&self, position: Vector2, rotation: f32, scale: f32, tint: Color) {
        self.rl.call_void(
            "DrawTextureEx",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&position.encode()),
                CallArg::F32(rotation),
                CallArg::F32(scale),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw a part of the texture defined by a rectangle.
    pub fn draw_rec(&self, source: Rectangle, position: Vector2, tint: Color) {
        self.rl.call_void(
            "DrawTextureRec",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&source.encode()),
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw a part of the texture defined by a rectangle with 'pro'
    /// parameters.
    pub fn draw_pro(
        &self,
        source: Rectangle,
        dest: Rectangle,
        origin: Vector2,
        rotation: f32,
        tint: Color,
    ) {
        self.rl.call_void(
            "DrawTexturePro",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&source.encode()),
                CallArg::Struct(&dest.encode()),
                CallArg::Struct(&origin.encode()),
                CallArg::F32(rotation),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw the texture (or part of it) stretching the n-patch borders
    /// nicely.
    pub fn draw_npatch(
        &self,
        info: NPatchInfo,
        dest: Rectangle,
        origin: Vector2,
        rotation: f32,
        tint: Color,
    ) {
        self.rl.call_void(
            "DrawTextureNPatch",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&info.encode()),
                CallArg::Struct(&dest.encode()),
                CallArg::Struct(&origin.encode()),
                CallArg::F32(rotation),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }
}

/// A cubemap texture loaded into GPU memory.
#[derive(Debug)]
pub struct TextureCubemap {
    rl: Raylib,
    view: StructView,
}

impl TextureCubemap {
    /// Load cubemap from image, multiple image cubemap layouts supported.
    pub fn load(rl: &Raylib, image: &Image, layout: CubemapLayout) -> TextureCubemap {
        let bytes = rl.call_struct(
            "LoadTextureCubemap",
            &[CallArg::Struct(image.bytes()), CallArg::I32(layout as i32)],
        );
        TextureCubemap { rl: rl.clone(), view: StructView::new(bytes, &TEXTURE2D) }
    }

    /// Unload cubemap from GPU memory (VRAM).
    pub fn unload(self) {
        self.rl.call_void("UnloadTexture", &[CallArg::Struct(self.view.bytes())]);
    }
}

/// A render target texture (framebuffer).
#[derive(Debug)]
pub struct RenderTexture2D {
    rl: Raylib,
    view: StructView,
}

impl RenderTexture2D {
    /// Load texture for rendering (framebuffer).
    pub fn load(rl: &Raylib, width: i32, height: i32) -> RenderTexture2D {
        let bytes =
            rl.call_struct("LoadRenderTexture", &[CallArg::I32(width), CallArg::I32(height)]);
        RenderTexture2D { rl: rl.clone(), view: StructView::new(bytes, &RENDER_TEXTURE2D) }
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        self.view.bytes()
    }

    /// Check if the render texture is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsRenderTextureReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload render texture from GPU memory (VRAM).
    pub fn unload(self) {
        self.rl.call_void("UnloadRenderTexture", &[CallArg::Struct(self.view.bytes())]);
    }
}
