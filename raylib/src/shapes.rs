// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Basic 2D shape drawing.
//!
//! Point-array variants pack their input into one contiguous f32 buffer per
//! call before passing it as a pointer+count pair.

use crate::api::CallArg;
use crate::geom::{Color, Rectangle, Vector2};
use crate::marshal::pack_vector2s;
use crate::texture::Texture2D;
use crate::Raylib;

impl Raylib {
    /// Set texture and rectangle to be used on shapes drawing.
    pub fn set_shapes_texture(&self, texture: &Texture2D, source: Rectangle) {
        self.call_void(
            "SetShapesTexture",
            &[CallArg::Struct(texture.bytes()), CallArg::Struct(&source.encode())],
        );
    }

    /// Draw a pixel.
    pub fn draw_pixel(&self, pos_x: i32, pos_y: i32, color: Color) {
        self.call_void(
            "DrawPixel",
            &[CallArg::I32(pos_x), CallArg::I32(pos_y), CallArg::Struct(&color.encode())],
        );
    }

    /// Draw a pixel (Vector version).
    pub fn draw_pixel_v(&self, position: Vector2, color: Color) {
        self.call_void(
            "DrawPixelV",
            &[CallArg::Struct(&position.encode()), CallArg::Struct(&color.encode())],
        );
    }

    /// Draw a line.
    pub fn draw_line(&self, start_x: i32, start_y: i32, end_x: i32, end_y: i32, color: Color) {
        self.call_void(
            "DrawLine",
            &[
                CallArg::I32(start_x),
                CallArg::I32(start_y),
                CallArg::I32(end_x),
                CallArg::I32(end_y),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a line (using gl lines).
    pub fn draw_line_v(&self, start: Vector2, end: Vector2, color: Color) {
        self.call_void(
            "DrawLineV",
            &[
                CallArg::Struct(&start.encode()),
                CallArg::Struct(&end.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a line (using triangles/quads).
    pub fn draw_line_ex(&self, start: Vector2, end: Vector2, thick: f32, color: Color) {
        self.call_void(
            "DrawLineEx",
            &[
                CallArg::Struct(&start.encode()),
                CallArg::Struct(&end.encode()),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw lines sequence (using gl lines).
    pub fn draw_line_strip(&self, points: &[Vector2], color: Color) {
        let packed = pack_vector2s(points);
        self.call_void(
            "DrawLineStrip",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw line segment cubic-bezier in-out interpolation.
    pub fn draw_line_bezier(&self, start: Vector2, end: Vector2, thick: f32, color: Color) {
        self.call_void(
            "DrawLineBezier",
            &[
                CallArg::Struct(&start.encode()),
                CallArg::Struct(&end.encode()),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a color-filled circle.
    pub fn draw_circle(&self, center_x: i32, center_y: i32, radius: f32, color: Color) {
        self.call_void(
            "DrawCircle",
            &[
                CallArg::I32(center_x),
                CallArg::I32(center_y),
                CallArg::F32(radius),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a piece of a circle.
    pub fn draw_circle_sector(
        &self,
        center: Vector2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawCircleSector",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::F32(start_angle),
                CallArg::F32(end_angle),
                CallArg::I32(segments),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw circle sector outline.
    pub fn draw_circle_sector_lines(
        &self,
        center: Vector2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawCircleSectorLines",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::F32(start_angle),
                CallArg::F32(end_angle),
                CallArg::I32(segments),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a gradient-filled circle.
    pub fn draw_circle_gradient(
        &self,
        center_x: i32,
        center_y: i32,
        radius: f32,
        color1: Color,
        color2: Color,
    ) {
        self.call_void(
            "DrawCircleGradient",
            &[
                CallArg::I32(center_x),
                CallArg::I32(center_y),
                CallArg::F32(radius),
                CallArg::Struct(&color1.encode()),
                CallArg::Struct(&color2.encode()),
            ],
        );
    }

    /// Draw a color-filled circle (Vector version).
    pub fn draw_circle_v(&self, center: Vector2, radius: f32, color: Color) {
        self.call_void(
            "DrawCircleV",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw circle outline.
    pub fn draw_circle_lines(&self, center_x: i32, center_y: i32, radius: f32, color: Color) {
        self.call_void(
            "DrawCircleLines",
            &[
                CallArg::I32(center_x),
                CallArg::I32(center_y),
                CallArg::F32(radius),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw circle outline (Vector version).
    pub fn draw_circle_lines_v(&self, center: Vector2, radius: f32, color: Color) {
        self.call_void(
            "DrawCircleLinesV",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw ellipse.
    pub fn draw_ellipse(
        &self,
        center_x: i32,
        center_y: i32,
        radius_h: f32,
        radius_v: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawEllipse",
            &[
                CallArg::I32(center_x),
                CallArg::I32(center_y),
                CallArg::F32(radius_h),
                CallArg::F32(radius_v),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw ellipse outline.
    pub fn draw_ellipse_lines(
        &self,
        center_x: i32,
        center_y: i32,
        radius_h: f32,
        radius_v: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawEllipseLines",
            &[
                CallArg::I32(center_x),
                CallArg::I32(center_y),
                CallArg::F32(radius_h),
                CallArg::F32(radius_v),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw ring.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_ring(
        &self,
        center: Vector2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawRing",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(inner_radius),
                CallArg::F32(outer_radius),
                CallArg::F32(start_angle),
                CallArg::F32(end_angle),
                CallArg::I32(segments),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw ring outline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_ring_lines(
        &self,
        center: Vector2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        segments: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawRingLines",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(inner_radius),
                CallArg::F32(outer_radius),
                CallArg::F32(start_angle),
                CallArg::F32(end_angle),
                CallArg::I32(segments),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a color-filled rectangle.
    pub fn draw_rectangle(&self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.call_void(
            "DrawRectangle",
            &[
                CallArg::I32(x),
                CallArg::I32(y),
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a color-filled rectangle (Vector version).
    pub fn draw_rectangle_v(&self, position: Vector2, size: Vector2, color: Color) {
        self.call_void(
            "DrawRectangleV",
            &[
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&size.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a color-filled rectangle.
    pub fn draw_rectangle_rec(&self, rec: Rectangle, color: Color) {
        self.call_void(
            "DrawRectangleRec",
            &[CallArg::Struct(&rec.encode()), CallArg::Struct(&color.encode())],
        );
    }

    /// Draw a color-filled rectangle with pro parameters.
    pub fn draw_rectangle_pro(&self, rec: Rectangle, origin: Vector2, rotation: f32, color: Color) {
        self.call_void(
            "DrawRectanglePro",
            &[
                CallArg::Struct(&rec.encode()),
                CallArg::Struct(&origin.encode()),
                CallArg::F32(rotation),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a vertical-gradient-filled rectangle.
    pub fn draw_rectangle_gradient_v(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color1: Color,
        color2: Color,
    ) {
        self.call_void(
            "DrawRectangleGradientV",
            &[
                CallArg::I32(x),
                CallArg::I32(y),
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::Struct(&color1.encode()),
                CallArg::Struct(&color2.encode()),
            ],
        );
    }

    /// Draw a horizontal-gradient-filled rectangle.
    pub fn draw_rectangle_gradient_h(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color1: Color,
        color2: Color,
    ) {
        self.call_void(
            "DrawRectangleGradientH",
            &[
                CallArg::I32(x),
                CallArg::I32(y),
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::Struct(&color1.encode()),
                CallArg::Struct(&color2.encode()),
            ],
        );
    }

    /// Draw a gradient-filled rectangle with custom vertex colors.
    pub fn draw_rectangle_gradient_ex(
        &self,
        rec: Rectangle,
        col1: Color,
        col2: Color,
        col3: Color,
        col4: Color,
    ) {
        self.call_void(
            "DrawRectangleGradientEx",
            &[
                CallArg::Struct(&rec.encode()),
                CallArg::Struct(&col1.encode()),
                CallArg::Struct(&col2.encode()),
                CallArg::Struct(&col3.encode()),
                CallArg::Struct(&col4.encode()),
            ],
        );
    }

    /// Draw rectangle outline.
    pub fn draw_rectangle_lines(&self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.call_void(
            "DrawRectangleLines",
            &[
                CallArg::I32(x),
                CallArg::I32(y),
                CallArg::I32(width),
                CallArg::I32(height),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw rectangle outline with extended parameters.
    pub fn draw_rectangle_lines_ex(&self, rec: Rectangle, thick: f32, color: Color) {
        self.call_void(
            "DrawRectangleLinesEx",
            &[
                CallArg::Struct(&rec.encode()),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw rectangle with rounded edges.
    pub fn draw_rectangle_rounded(&self, rec: Rectangle, roundness: f32, segments: i32, color: Color) {
        self.call_void(
            "DrawRectangleRounded",
            &[
                CallArg::Struct(&rec.encode()),
                CallArg::F32(roundness),
                CallArg::I32(segments),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw rectangle with rounded edges outline.
    pub fn draw_rectangle_rounded_lines(
        &self,
        rec: Rectangle,
        roundness: f32,
        segments: i32,
        thick: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawRectangleRoundedLines",
            &[
                CallArg::Struct(&rec.encode()),
                CallArg::F32(roundness),
                CallArg::I32(segments),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a color-filled triangle (vertex in counter-clockwise order!).
    pub fn draw_triangle(&self, v1: Vector2, v2: Vector2, v3: Vector2, color: Color) {
        self.call_void(
            "DrawTriangle",
            &[
                CallArg::Struct(&v1.encode()),
                CallArg::Struct(&v2.encode()),
                CallArg::Struct(&v3.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw triangle outline (vertex in counter-clockwise order!).
    pub fn draw_triangle_lines(&self, v1: Vector2, v2: Vector2, v3: Vector2, color: Color) {
        self.call_void(
            "DrawTriangleLines",
            &[
                CallArg::Struct(&v1.encode()),
                CallArg::Struct(&v2.encode()),
                CallArg::Struct(&v3.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a triangle fan defined by points (first vertex is the center).
    pub fn draw_triangle_fan(&self, points: &[Vector2], color: Color) {
        let packed = pack_vector2s(points);
        self.call_void(
            "DrawTriangleFan",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a triangle strip defined by points.
    pub fn draw_triangle_strip(&self, points: &[Vector2], color: Color) {
        let packed = pack_vector2s(points);
        self.call_void(
            "DrawTriangleStrip",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a regular polygon (Vector version).
    pub fn draw_poly(&self, center: Vector2, sides: i32, radius: f32, rotation: f32, color: Color) {
        self.call_void(
            "DrawPoly",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::I32(sides),
                CallArg::F32(radius),
                CallArg::F32(rotation),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a polygon outline of n sides.
    pub fn draw_poly_lines(
        &self,
        center: Vector2,
        sides: i32,
        radius: f32,
        rotation: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawPolyLines",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::I32(sides),
                CallArg::F32(radius),
                CallArg::F32(rotation),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a polygon outline of n sides with extended parameters.
    pub fn draw_poly_lines_ex(
        &self,
        center: Vector2,
        sides: i32,
        radius: f32,
        rotation: f32,
        thick: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawPolyLinesEx",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::I32(sides),
                CallArg::F32(radius),
                CallArg::F32(rotation),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }
}
