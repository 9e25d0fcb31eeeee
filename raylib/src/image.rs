// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! CPU-side image handles.
//!
//! An [`Image`] wraps the opaque native descriptor (data pointer plus
//! dimensions and format) as a [`StructView`]; width and height are read
//! lazily from the descriptor instead of being decoded eagerly. In-place
//! transforms pass a pointer to the descriptor so the native side rewrites
//! it, including the internal data pointer.

use raylib_sys::IMAGE;

use crate::api::CallArg;
use crate::font::Font;
use crate::geom::{Color, Rectangle, Vector2};
use crate::marshal::{encode_text, read_i32};
use crate::texture::Texture2D;
use crate::view::StructView;
use crate::Raylib;

/// Image data stored in CPU memory (RAM).
#[derive(Debug)]
pub struct Image {
    rl: Raylib,
    view: StructView,
}

impl Image {
    fn wrap(rl: &Raylib, bytes: Vec<u8>) -> Image {
        Image { rl: rl.clone(), view: StructView::new(bytes, &IMAGE) }
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        self.view.bytes()
    }

    /// Image base width, read from the descriptor.
    pub fn width(&self) -> i32 {
        self.view.i32_field(1)
    }

    /// Image base height, read from the descriptor.
    pub fn height(&self) -> i32 {
        self.view.i32_field(2)
    }

    /// Mipmap levels, 1 by default.
    pub fn mipmaps(&self) -> i32 {
        self.view.i32_field(3)
    }

    /// Data format (PixelFormat value).
    pub fn format(&self) -> i32 {
        self.view.i32_field(4)
    }

    /// Load image from file into CPU memory (RAM).
    pub fn load(rl: &Raylib, file_name: &str) -> Image {
        let file_name = encode_text(file_name);
        let bytes = rl.call_struct("LoadImage", &[CallArg::Buffer(&file_name)]);
        Image::wrap(rl, bytes)
    }

    /// Load image from RAW file data.
    pub fn load_raw(
        rl: &Raylib,
        file_name: &str,
        width: i32,
        height: i32,
        format: i32,
        header_size: i32,
    ) -> Image {
        let file_name = encode_text(file_name);
        let bytes = rl.call_struct(
            "LoadImageRaw",
            &[
                CallArg::Buffer(&file_name),
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::I32(format),
                CallArg::I32(header_size),
            ],
        );
        Image::wrap(rl, bytes)
    }

    /// Load image from SVG file data or string with specified size.
    pub fn load_svg(rl: &Raylib, file_name_or_string: &str, width: i32, height: i32) -> Image {
        let source = encode_text(file_name_or_string);
        let bytes = rl.call_struct(
            "LoadImageSvg",
            &[CallArg::Buffer(&source), CallArg::I32(width), CallArg::I32(height)],
        );
        Image::wrap(rl, bytes)
    }

    /// Load image from memory buffer, file_type refers to extension:
    /// i.e. ".png".
    pub fn load_from_memory(rl: &Raylib, file_type: &str, file_data: &[u8]) -> Image {
        let file_type = encode_text(file_type);
        let bytes = rl.call_struct(
            "LoadImageFromMemory",
            &[
                CallArg::Buffer(&file_type),
                CallArg::Buffer(file_data),
                CallArg::I32(file_data.len() as i32),
            ],
        );
        Image::wrap(rl, bytes)
    }

    /// Load image from GPU texture data.
    pub fn load_from_texture(rl: &Raylib, texture: &Texture2D) -> Image {
        let bytes = rl.call_struct("LoadImageFromTexture", &[CallArg::Struct(texture.bytes())]);
        Image::wrap(rl, bytes)
    }

    /// Load image from screen buffer (screenshot).
    pub fn load_from_screen(rl: &Raylib) -> Image {
        let bytes = rl.call_struct("LoadImageFromScreen", &[]);
        Image::wrap(rl, bytes)
    }

    /// Check if the image is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsImageReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload image from CPU memory (RAM).
    pub fn unload(self) {
        self.rl.call_void("UnloadImage", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Export image data to file, returns true on success.
    pub fn export(&self, file_name: &str) -> bool {
        let file_name = encode_text(file_name);
        self.rl.call_bool(
            "ExportImage",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(&file_name)],
        )
    }

    /// Export image as code file defining an array of bytes, returns true
    /// on success.
    pub fn export_as_code(&self, file_name: &str) -> bool {
        let file_name = encode_text(file_name);
        self.rl.call_bool(
            "ExportImageAsCode",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(&file_name)],
        )
    }

    /// Generate image: plain color.
    pub fn gen_color(rl: &Raylib, width: i32, height: i32, color: Color) -> Image {
        let bytes = rl.call_struct(
            "GenImageColor",
            &[CallArg::I32(width), CallArg::I32(height), CallArg::Struct(&color.encode())],
        );
        Image::wrap(rl, bytes)
    }

    /// Generate image: linear gradient, direction in degrees [0..360],
    /// 0 = vertical gradient.
    pub fn gen_gradient_linear(
        rl: &Raylib,
        width: i32,
        height: i32,
        direction: i32,
        start: Color,
        end: Color,
    ) -> Image {
        let bytes = rl.call_struct(
            "GenImageGradientLinear",
            &[
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::I32(direction),
                CallArg::Struct(&start.encode()),
                CallArg::Struct(&end.encode()),
            ],
        );
        Image::wrap(rl, bytes)
    }

    /// Generate image: radial gradient.
    pub fn gen_gradient_radial(
        rl: &Raylib,
        width: i32,
        height: i32,
        density: f32,
        inner: Color,
        outer: Color,
    ) -> Image {
        let bytes = rl.call_struct(
            "GenImageGradientRadial",
            &[
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::F32(density),
                CallArg::Struct(&inner.encode()),
                CallArg::Struct(&outer.encode()),
            ],
        );
        Image::wrap(rl, bytes)
    }

    /// Generate image: square gradient.
    pub fn gen_gradient_square(
        rl: &Raylib,
        width: i32,
        height: i32,
        density: f32,
        inner: Color,
        outer: Color,
    ) -> Image {
        let bytes = rl.call_struct(
            "GenImageGradientSquare",
            &[
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::F32(density),
                CallArg::Struct(&inner.encode()),
                CallArg::Struct(&outer.encode()),
            ],
        );
        Image::wrap(rl, bytes)
    }

    /// Generate image: checked.
    pub fn gen_checked(
        rl: &Raylib,
        width: i32,
        height: i32,
        checks_x: i32,
        checks_y: i32,
        col1: Color,
        col2: Color,
    ) -> Image {
        let bytes = rl.call_struct(
            "GenImageChecked",
            &[
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::I32(checks_x),
                CallArg::I32(checks_y),
                CallArg::Struct(&col1.encode()),
                CallArg::Struct(&col2.encode()),
            ],
        );
        Image::wrap(rl, bytes)
    }

    /// Generate image: white noise.
    pub fn gen_white_noise(rl: &Raylib, width: i32, height: i32, factor: f32) -> Image {
        let bytes = rl.call_struct(
            "GenImageWhiteNoise",
            &[CallArg::I32(width), CallArg::I32(height), CallArg::F32(factor)],
        );
        Image::wrap(rl, bytes)
    }

    /// Generate image: perlin noise.
    pub fn gen_perlin_noise(
        rl: &Raylib,
        width: i32,
        height: i32,
        offset_x: i32,
        offset_y: i32,
        scale: f32,
    ) -> Image {
        let bytes = rl.call_struct(
            "GenImagePerlinNoise",
            &[
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::I32(offset_x),
                CallArg::I32(offset_y),
                CallArg::F32(scale),
            ],
        );
        Image::wrap(rl, bytes)
    }

    /// Generate image: cellular algorithm, bigger tile_size means bigger
    /// cells.
    pub fn gen_cellular(rl: &Raylib, width: i32, height: i32, tile_size: i32) -> Image {
        let bytes = rl.call_struct(
            "GenImageCellular",
            &[CallArg::I32(width), CallArg::I32(height), CallArg::I32(tile_size)],
        );
        Image::wrap(rl, bytes)
    }

    /// Generate image: grayscale image from text data.
    pub fn gen_text(rl: &Raylib, width: i32, height: i32, text: &str) -> Image {
        let text = encode_text(text);
        let bytes = rl.call_struct(
            "GenImageText",
            &[CallArg::I32(width), CallArg::I32(height), CallArg::Buffer(&text)],
        );
        Image::wrap(rl, bytes)
    }

    /// Create an image duplicate (useful for transformations).
    pub fn copy(&self) -> Image {
        let bytes = self.rl.call_struct("ImageCopy", &[CallArg::Struct(self.view.bytes())]);
        Image::wrap(&self.rl, bytes)
    }

    /// Create an image from another image piece.
    pub fn from_image(&self, rec: Rectangle) -> Image {
        let bytes = self.rl.call_struct(
            "ImageFromImage",
            &[CallArg::Struct(self.view.bytes()), CallArg::Struct(&rec.encode())],
        );
        Image::wrap(&self.rl, bytes)
    }

    /// Create an image from text (default font).
    pub fn text(rl: &Raylib, text: &str, font_size: i32, color: Color) -> Image {
        let text = encode_text(text);
        let bytes = rl.call_struct(
            "ImageText",
            &[CallArg::Buffer(&text), CallArg::I32(font_size), CallArg::Struct(&color.encode())],
        );
        Image::wrap(rl, bytes)
    }

    /// Create an image from text (custom sprite font).
    pub fn text_ex(rl: &Raylib, font: &Font, text: &str, font_size: f32, spacing: f32, tint: Color) -> Image {
        let text = encode_text(text);
        let bytes = rl.call_struct(
            "ImageTextEx",
            &[
                CallArg::Struct(font.bytes()),
                CallArg::Buffer(&text),
                CallArg::F32(font_size),
                CallArg::F32(spacing),
                CallArg::Struct(&tint.encode()),
            ],
        );
        Image::wrap(rl, bytes)
    }

    fn mutate(&mut self, name: &'static str, mut tail: Vec<CallArg<'_>>) {
        let mut args = vec![CallArg::Pointer(self.view.as_mut_ptr())];
        args.append(&mut tail);
        self.rl.call_void(name, &args);
    }

    /// Convert image data to desired format.
    pub fn set_format(&mut self, new_format: i32) {
        self.mutate("ImageFormat", vec![CallArg::I32(new_format)]);
    }

    /// Convert image to POT (power-of-two).
    pub fn to_pot(&mut self, fill: Color) {
        let fill = fill.encode();
        self.mutate("ImageToPOT", vec![CallArg::Struct(&fill)]);
    }

    /// Crop the image to a defined rectangle.
    pub fn crop(&mut self, rec: Rectangle) {
        let rec = rec.encode();
        self.mutate("ImageCrop", vec![CallArg::Struct(&rec)]);
    }

    /// Crop image depending on alpha value.
    pub fn alpha_crop(&mut self, threshold: f32) {
        self.mutate("ImageAlphaCrop", vec![CallArg::F32(threshold)]);
    }

    /// Clear alpha channel to desired color.
    pub fn alpha_clear(&mut self, color: Color, threshold: f32) {
        let color = color.encode();
        self.mutate("ImageAlphaClear", vec![CallArg::Struct(&color), CallArg::F32(threshold)]);
    }

    /// Apply alpha mask to image.
    pub fn alpha_mask(&mut self, alpha_mask: &Image) {
        let mask = alpha_mask.view.bytes().to_vec();
        self.mutate("ImageAlphaMask", vec![CallArg::Struct(&mask)]);
    }

    /// Premultiply alpha channel.
    pub fn alpha_premultiply(&mut self) {
        self.mutate("ImageAlphaPremultiply", Vec::new());
    }

    /// Apply Gaussian blur using a box blur approximation.
    pub fn blur_gaussian(&mut self, blur_size: i32) {
        self.mutate("ImageBlurGaussian", vec![CallArg::I32(blur_size)]);
    }

    /// Resize image (Bicubic scaling algorithm).
    pub fn resize(&mut self, new_width: i32, new_height: i32) {
        self.mutate("ImageResize", vec![CallArg::I32(new_width), CallArg::I32(new_height)]);
    }

    /// Resize image (Nearest-Neighbor scaling algorithm).
    pub fn resize_nn(&mut self, new_width: i32, new_height: i32) {
        self.mutate("ImageResizeNN", vec![CallArg::I32(new_width), CallArg::I32(new_height)]);
    }

    /// Resize canvas and fill with color.
    pub fn resize_canvas(
        &mut self,
        new_width: i32,
        new_height: i32,
        offset_x: i32,
        offset_y: i32,
        fill: Color,
    ) {
        let fill = fill.encode();
        self.mutate(
            "ImageResizeCanvas",
            vec![
                CallArg::I32(new_width),
                CallArg::I32(new_height),
                CallArg::I32(offset_x),
                CallArg::I32(offset_y),
                CallArg::Struct(&fill),
            ],
        );
    }

    /// Compute all mipmap levels for the image.
    pub fn gen_mipmaps(&mut self) {
        self.mutate("ImageMipmaps", Vec::new());
    }

    /// Dither image data to 16bpp or lower (Floyd-Steinberg dithering).
    pub fn dither(&mut self, r_bpp: i32, g_bpp: i32, b_bpp: i32, a_bpp: i32) {
        self.mutate(
            "ImageDither",
            vec![CallArg::I32(r_bpp), CallArg::I32(g_bpp), CallArg::I32(b_bpp), CallArg::I32(a_bpp)],
        );
    }

    /// Flip image vertically.
    pub fn flip_vertical(&mut self) {
        self.mutate("ImageFlipVertical", Vec::new());
    }

    /// Flip image horizontally.
    pub fn flip_horizontal(&mut self) {
        self.mutate("ImageFlipHorizontal", Vec::new());
    }

    /// Rotate image by input angle in degrees (-359 to 359).
    pub fn rotate(&mut self, degrees: i32) {
        self.mutate("ImageRotate", vec![CallArg::I32(degrees)]);
    }

    /// Rotate image clockwise 90deg.
    pub fn rotate_cw(&mut self) {
        self.mutate("ImageRotateCW", Vec::new());
    }

    /// Rotate image counter-clockwise 90deg.
    pub fn rotate_ccw(&mut self) {
        self.mutate("ImageRotateCCW", Vec::new());
    }

    /// Modify image color: tint.
    pub fn color_tint(&mut self, color: Color) {
        let color = color.encode();
        self.mutate("ImageColorTint", vec![CallArg::Struct(&color)]);
    }

    /// Modify image color: invert.
    pub fn color_invert(&mut self) {
        self.mutate("ImageColorInvert", Vec::new());
    }

    /// Modify image color: grayscale.
    pub fn color_grayscale(&mut self) {
        self.mutate("ImageColorGrayscale", Vec::new());
    }

    /// Modify image color: contrast (-100 to 100).
    pub fn color_contrast(&mut self, contrast: f32) {
        self.mutate("ImageColorContrast", vec![CallArg::F32(contrast)]);
    }

    /// Modify image color: brightness (-255 to 255).
    pub fn color_brightness(&mut self, brightness: i32) {
        self.mutate("ImageColorBrightness", vec![CallArg::I32(brightness)]);
    }

    /// Modify image color: replace color.
    pub fn color_replace(&mut self, color: Color, replace: Color) {
        let color = color.encode();
        let replace = replace.encode();
        self.mutate("ImageColorReplace", vec![CallArg::Struct(&color), CallArg::Struct(&replace)]);
    }

    /// Load color data from image as an RGBA color list.
    ///
    /// Walks the native color array and releases it with the matching
    /// unload before returning.
    pub fn load_colors(&self) -> Vec<Color> {
        let ptr = self.rl.call_ptr("LoadImageColors", &[CallArg::Struct(self.view.bytes())]);
        let count = (self.width() * self.height()).max(0) as usize;
        let colors = read_color_array(ptr, count);
        self.rl.call_void("UnloadImageColors", &[CallArg::Pointer(ptr)]);
        colors
    }

    /// Load colors palette from image as an RGBA color list, at most
    /// max_palette_size entries.
    pub fn load_palette(&self, max_palette_size: i32) -> Vec<Color> {
        let mut count_out = [0u8; 4];
        let ptr = self.rl.call_ptr(
            "LoadImagePalette",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::I32(max_palette_size),
                CallArg::Pointer(count_out.as_mut_ptr().cast()),
            ],
        );
        let count = read_i32(&count_out, 0).max(0) as usize;
        let colors = read_color_array(ptr, count);
        self.rl.call_void("UnloadImagePalette", &[CallArg::Pointer(ptr)]);
        colors
    }

    /// Get image alpha border rectangle.
    pub fn get_alpha_border(&self, threshold: f32) -> Rectangle {
        Rectangle::decode(&self.rl.call_struct(
            "GetImageAlphaBorder",
            &[CallArg::Struct(self.view.bytes()), CallArg::F32(threshold)],
        ))
    }

    /// Get image pixel color at (x, y) position.
    pub fn get_color(&self, x: i32, y: i32) -> Color {
        Color::decode(&self.rl.call_struct(
            "GetImageColor",
            &[CallArg::Struct(self.view.bytes()), CallArg::I32(x), CallArg::I32(y)],
        ))
    }

    /// Clear image background with given color.
    pub fn clear_background(&mut self, color: Color) {
        let color = color.encode();
        self.mutate("ImageClearBackground", vec![CallArg::Struct(&color)]);
    }

    /// Draw pixel within the image.
    pub fn draw_pixel(&mut self, pos_x: i32, pos_y: i32, color: Color) {
        let color = color.encode();
        self.mutate(
            "ImageDrawPixel",
            vec![CallArg::I32(pos_x), CallArg::I32(pos_y), CallArg::Struct(&color)],
        );
    }

    /// Draw pixel within the image (Vector version).
    pub fn draw_pixel_v(&mut self, position: Vector2, color: Color) {
        let position = position.encode();
        let color = color.encode();
        self.mutate("ImageDrawPixelV", vec![CallArg::Struct(&position), CallArg::Struct(&color)]);
    }

    /// Draw line within the image.
    pub fn draw_line(&mut self, start_x: i32, start_y: i32, end_x: i32, end_y: i32, color: Color) {
        let color = color.encode();
        self.mutate(
            "ImageDrawLine",
            vec![
                CallArg::I32(start_x),
                CallArg::I32(start_y),
                CallArg::I32(end_x),
                CallArg::I32(end_y),
                CallArg::Struct(&color),
            ],
        );
    }

    /// Draw line within the image (Vector version).
    pub fn draw_line_v(&mut self, start: Vector2, end: Vector2, color: Color) {
        let start = start.encode();
        let end = end.encode();
        let color = color.encode();
        self.mutate(
            "ImageDrawLineV",
            vec![CallArg::Struct(&start), CallArg::Struct(&end), CallArg::Struct(&color)],
        );
    }

    /// Draw a filled circle within the image.
    pub fn draw_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: Color) {
        let color = color.encode();
        self.mutate(
            "ImageDrawCircle",
            vec![
                CallArg::I32(center_x),
                CallArg::I32(center_y),
                CallArg::I32(radius),
                CallArg::Struct(&color),
            ],
        );
    }

    /// Draw a filled circle within the image (Vector version).
    pub fn draw_circle_v(&mut self, center: Vector2, radius: i32, color: Color) {
        let center = center.encode();
        let color = color.encode();
        self.mutate(
            "ImageDrawCircleV",
            vec![CallArg::Struct(&center), CallArg::I32(radius), CallArg::Struct(&color)],
        );
    }

    /// Draw circle outline within the image.
    pub fn draw_circle_lines(&mut self, center_x: i32, center_y: i32, radius: i32, color: Color) {
        let color = color.encode();
        self.mutate(
            "ImageDrawCircleLines",
            vec![
                CallArg::I32(center_x),
                CallArg::I32(center_y),
                CallArg::I32(radius),
                CallArg::Struct(&color),
            ],
        );
    }

    /// Draw circle outline within the image (Vector version).
    pub fn draw_circle_lines_v(&mut self, center: Vector2, radius: i32, color: Color) {
        let center = center.encode();
        let color = color.encode();
        self.mutate(
            "ImageDrawCircleLinesV",
            vec![CallArg::Struct(&center), CallArg::I32(radius), CallArg::Struct(&color)],
        );
    }

    /// Draw rectangle within the image.
    pub fn draw_rectangle(&mut self, pos_x: i32, pos_y: i32, width: i32, height: i32, color: Color) {
        let color = color.encode();
        self.mutate(
            "ImageDrawRectangle",
            vec![
                CallArg::I32(pos_x),
                CallArg::I32(pos_y),
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::Struct(&color),
            ],
        );
    }

    /// Draw rectangle within the image (Vector version).
    pub fn draw_rectangle_v(&mut self, position: Vector2, size: Vector2, color: Color) {
        let position = position.encode();
        let size = size.encode();
        let color = color.encode();
        self.mutate(
            "ImageDrawRectangleV",
            vec![CallArg::Struct(&position), CallArg::Struct(&size), CallArg::Struct(&color)],
        );
    }

    /// Draw rectangle within the image.
    pub fn draw_rectangle_rec(&mut self, rec: Rectangle, color: Color) {
        let rec = rec.encode();
        let color = color.encode();
        self.mutate("ImageDrawRectangleRec", vec![CallArg::Struct(&rec), CallArg::Struct(&color)]);
    }

    /// Draw rectangle lines within the image.
    pub fn draw_rectangle_lines(&mut self, rec: Rectangle, thick: i32, color: Color) {
        let rec = rec.encode();
        let color = color.encode();
        self.mutate(
            "ImageDrawRectangleLines",
            vec![CallArg::Struct(&rec), CallArg::I32(thick), CallArg::Struct(&color)],
        );
    }

    /// Draw a source image within this image (tint applied to source).
    pub fn draw(&mut self, src: &Image, src_rec: Rectangle, dst_rec: Rectangle, tint: Color) {
        let src = src.view.bytes().to_vec();
        let src_rec = src_rec.encode();
        let dst_rec = dst_rec.encode();
        let tint = tint.encode();
        self.mutate(
            "ImageDraw",
            vec![
                CallArg::Struct(&src),
                CallArg::Struct(&src_rec),
                CallArg::Struct(&dst_rec),
                CallArg::Struct(&tint),
            ],
        );
    }

    /// Draw text (using default font) within the image.
    pub fn draw_text(&mut self, text: &str, pos_x: i32, pos_y: i32, font_size: i32, color: Color) {
        let text = encode_text(text);
        let color = color.encode();
        self.mutate(
            "ImageDrawText",
            vec![
                CallArg::Buffer(&text),
                CallArg::I32(pos_x),
                CallArg::I32(pos_y),
                CallArg::I32(font_size),
                CallArg::Struct(&color),
            ],
        );
    }

    /// Draw text (custom sprite font) within the image.
    pub fn draw_text_ex(
        &mut self,
        font: &Font,
        text: &str,
        position: Vector2,
        font_size: f32,
        spacing: f32,
        tint: Color,
    ) {
        let font = font.bytes().to_vec();
        let text = encode_text(text);
        let position = position.encode();
        let tint = tint.encode();
        self.mutate(
            "ImageDrawTextEx",
            vec![
                CallArg::Struct(&font),
                CallArg::Buffer(&text),
                CallArg::Struct(&position),
                CallArg::F32(font_size),
                CallArg::F32(spacing),
                CallArg::Struct(&tint),
            ],
        );
    }
}

/// Materializes `count` RGBA colors from a native `Color *` array.
fn read_color_array(ptr: *mut std::ffi::c_void, count: usize) -> Vec<Color> {
    if ptr.is_null() || count == 0 {
        return Vec::new();
    }
    let raw = unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), count * 4) };
    raw.chunks_exact(4).map(Color::decode).collect()
}
