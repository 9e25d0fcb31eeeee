// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Spline drawing and evaluation.

use crate::api::CallArg;
use crate::geom::{Color, Vector2};
use crate::marshal::pack_vector2s;
use crate::Raylib;

impl Raylib {
    /// Draw spline: Linear, minimum 2 points.
    pub fn draw_spline_linear(&self, points: &[Vector2], thick: f32, color: Color) {
        let packed = pack_vector2s(points);
        self.call_void(
            "DrawSplineLinear",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline: B-Spline, minimum 4 points.
    pub fn draw_spline_basis(&self, points: &[Vector2], thick: f32, color: Color) {
        let packed = pack_vector2s(points);
        self.call_void(
            "DrawSplineBasis",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline: Catmull-Rom, minimum 4 points.
    pub fn draw_spline_catmull_rom(&self, points: &[Vector2], thick: f32, color: Color) {
        let packed = pack_vector2s(points);
        self.call_void(
            "DrawSplineCatmullRom",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline: Quadratic Bezier, minimum 3 points (1 control point).
    pub fn draw_spline_bezier_quadratic(&self, points: &[Vector2], thick: f32, color: Color) {
        let packed = pack_vector2s(points);
        self.call_void(
            "DrawSplineBezierQuadratic",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline: Cubic Bezier, minimum 4 points (2 control points).
    pub fn draw_spline_bezier_cubic(&self, points: &[Vector2], thick: f32, color: Color) {
        let packed = pack_vector2s(points);
        self.call_void(
            "DrawSplineBezierCubic",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline segment: Linear, 2 points.
    pub fn draw_spline_segment_linear(&self, p1: Vector2, p2: Vector2, thick: f32, color: Color) {
        self.call_void(
            "DrawSplineSegmentLinear",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline segment: B-Spline, 4 points.
    pub fn draw_spline_segment_basis(
        &self,
        p1: Vector2,
        p2: Vector2,
        p3: Vector2,
        p4: Vector2,
        thick: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawSplineSegmentBasis",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::Struct(&p3.encode()),
                CallArg::Struct(&p4.encode()),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline segment: Catmull-Rom, 4 points.
    pub fn draw_spline_segment_catmull_rom(
        &self,
        p1: Vector2,
        p2: Vector2,
        p3: Vector2,
        p4: Vector2,
        thick: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawSplineSegmentCatmullRom",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::Struct(&p3.encode()),
                CallArg::Struct(&p4.encode()),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline segment: Quadratic Bezier, 2 points, 1 control point.
    pub fn draw_spline_segment_bezier_quadratic(
        &self,
        p1: Vector2,
        c2: Vector2,
        p3: Vector2,
        thick: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawSplineSegmentBezierQuadratic",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&c2.encode()),
                CallArg::Struct(&p3.encode()),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw spline segment: Cubic Bezier, 2 points, 2 control points.
    pub fn draw_spline_segment_bezier_cubic(
        &self,
        p1: Vector2,
        c2: Vector2,
        c3: Vector2,
        p4: Vector2,
        thick: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawSplineSegmentBezierCubic",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&c2.encode()),
                CallArg::Struct(&c3.encode()),
                CallArg::Struct(&p4.encode()),
                CallArg::F32(thick),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Get (evaluate) spline point: Linear.
    pub fn get_spline_point_linear(&self, start: Vector2, end: Vector2, t: f32) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetSplinePointLinear",
            &[CallArg::Struct(&start.encode()), CallArg::Struct(&end.encode()), CallArg::F32(t)],
        ))
    }

    /// Get (evaluate) spline point: B-Spline.
    pub fn get_spline_point_basis(
        &self,
        p1: Vector2,
        p2: Vector2,
        p3: Vector2,
        p4: Vector2,
        t: f32,
    ) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetSplinePointBasis",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::Struct(&p3.encode()),
                CallArg::Struct(&p4.encode()),
                CallArg::F32(t),
            ],
        ))
    }

    /// Get (evaluate) spline point: Catmull-Rom.
    pub fn get_spline_point_catmull_rom(
        &self,
        p1: Vector2,
        p2: Vector2,
        p3: Vector2,
        p4: Vector2,
        t: f32,
    ) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetSplinePointCatmullRom",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::Struct(&p3.encode()),
                CallArg::Struct(&p4.encode()),
                CallArg::F32(t),
            ],
        ))
    }

    /// Get (evaluate) spline point: Quadratic Bezier.
    pub fn get_spline_point_bezier_quad(
        &self,
        p1: Vector2,
        c2: Vector2,
        p3: Vector2,
        t: f32,
    ) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetSplinePointBezierQuad",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&c2.encode()),
                CallArg::Struct(&p3.encode()),
                CallArg::F32(t),
            ],
        ))
    }

    /// Get (evaluate) spline point: Cubic Bezier.
    pub fn get_spline_point_bezier_cubic(
        &self,
        p1: Vector2,
        c2: Vector2,
        c3: Vector2,
        p4: Vector2,
        t: f32,
    ) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetSplinePointBezierCubic",
            &[
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&c2.encode()),
                CallArg::Struct(&c3.encode()),
                CallArg::Struct(&p4.encode()),
                CallArg::F32(t),
            ],
        ))
    }
}
