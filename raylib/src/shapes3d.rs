// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Basic 3D shape drawing.

use crate::api::CallArg;
use crate::geom::{Color, Ray, Vector2, Vector3};
use crate::marshal::pack_vector3s;
use crate::Raylib;

impl Raylib {
    /// Draw a line in 3D world space.
    pub fn draw_line3d(&self, start: Vector3, end: Vector3, color: Color) {
        self.call_void(
            "DrawLine3D",
            &[
                CallArg::Struct(&start.encode()),
                CallArg::Struct(&end.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a point in 3D space, actually a small line.
    pub fn draw_point3d(&self, position: Vector3, color: Color) {
        self.call_void(
            "DrawPoint3D",
            &[CallArg::Struct(&position.encode()), CallArg::Struct(&color.encode())],
        );
    }

    /// Draw a circle in 3D world space.
    pub fn draw_circle3d(
        &self,
        center: Vector3,
        radius: f32,
        rotation_axis: Vector3,
        rotation_angle: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawCircle3D",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::Struct(&rotation_axis.encode()),
                CallArg::F32(rotation_angle),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a color-filled 3D triangle (vertex in counter-clockwise order!).
    pub fn draw_triangle3d(&self, v1: Vector3, v2: Vector3, v3: Vector3, color: Color) {
        self.call_void(
            "DrawTriangle3D",
            &[
                CallArg::Struct(&v1.encode()),
                CallArg::Struct(&v2.encode()),
                CallArg::Struct(&v3.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a 3D triangle strip defined by points.
    pub fn draw_triangle_strip3d(&self, points: &[Vector3], color: Color) {
        let packed = pack_vector3s(points);
        self.call_void(
            "DrawTriangleStrip3D",
            &[
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw cube.
    pub fn draw_cube(&self, position: Vector3, width: f32, height: f32, length: f32, color: Color) {
        self.call_void(
            "DrawCube",
            &[
                CallArg::Struct(&position.encode()),
                CallArg::F32(width),
                CallArg::F32(height),
                CallArg::F32(length),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw cube (Vector version).
    pub fn draw_cube_v(&self, position: Vector3, size: Vector3, color: Color) {
        self.call_void(
            "DrawCubeV",
            &[
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&size.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw cube wires.
    pub fn draw_cube_wires(
        &self,
        position: Vector3,
        width: f32,
        height: f32,
        length: f32,
        color: Color,
    ) {
        self.call_void(
            "DrawCubeWires",
            &[
                CallArg::Struct(&position.encode()),
                CallArg::F32(width),
                CallArg::F32(height),
                CallArg::F32(length),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw cube wires (Vector version).
    pub fn draw_cube_wires_v(&self, position: Vector3, size: Vector3, color: Color) {
        self.call_void(
            "DrawCubeWiresV",
            &[
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&size.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw sphere.
    pub fn draw_sphere(&self, center: Vector3, radius: f32, color: Color) {
        self.call_void(
            "DrawSphere",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw sphere with extended parameters.
    pub fn draw_sphere_ex(
        &self,
        center: Vector3,
        radius: f32,
        rings: i32,
        slices: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawSphereEx",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::I32(rings),
                CallArg::I32(slices),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw sphere wires.
    pub fn draw_sphere_wires(
        &self,
        center: Vector3,
        radius: f32,
        rings: i32,
        slices: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawSphereWires",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::I32(rings),
                CallArg::I32(slices),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a cylinder/cone.
    pub fn draw_cylinder(
        &self,
        position: Vector3,
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        slices: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawCylinder",
            &[
                CallArg::Struct(&position.encode()),
                CallArg::F32(radius_top),
                CallArg::F32(radius_bottom),
                CallArg::F32(height),
                CallArg::I32(slices),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a cylinder with base at start_pos and top at end_pos.
    pub fn draw_cylinder_ex(
        &self,
        start_pos: Vector3,
        end_pos: Vector3,
        start_radius: f32,
        end_radius: f32,
        sides: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawCylinderEx",
            &[
                CallArg::Struct(&start_pos.encode()),
                CallArg::Struct(&end_pos.encode()),
                CallArg::F32(start_radius),
                CallArg::F32(end_radius),
                CallArg::I32(sides),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a cylinder/cone wires.
    pub fn draw_cylinder_wires(
        &self,
        position: Vector3,
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        slices: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawCylinderWires",
            &[
                CallArg::Struct(&position.encode()),
                CallArg::F32(radius_top),
                CallArg::F32(radius_bottom),
                CallArg::F32(height),
                CallArg::I32(slices),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a cylinder wires with base at start_pos and top at end_pos.
    pub fn draw_cylinder_wires_ex(
        &self,
        start_pos: Vector3,
        end_pos: Vector3,
        start_radius: f32,
        end_radius: f32,
        sides: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawCylinderWiresEx",
            &[
                CallArg::Struct(&start_pos.encode()),
                CallArg::Struct(&end_pos.encode()),
                CallArg::F32(start_radius),
                CallArg::F32(end_radius),
                CallArg::I32(sides),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a capsule with the center of its sphere caps at start_pos and
    /// end_pos.
    pub fn draw_capsule(
        &self,
        start_pos: Vector3,
        end_pos: Vector3,
        radius: f32,
        slices: i32,
        rings: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawCapsule",
            &[
                CallArg::Struct(&start_pos.encode()),
                CallArg::Struct(&end_pos.encode()),
                CallArg::F32(radius),
                CallArg::I32(slices),
                CallArg::I32(rings),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw capsule wireframe with the center of its sphere caps at
    /// start_pos and end_pos.
    pub fn draw_capsule_wires(
        &self,
        start_pos: Vector3,
        end_pos: Vector3,
        radius: f32,
        slices: i32,
        rings: i32,
        color: Color,
    ) {
        self.call_void(
            "DrawCapsuleWires",
            &[
                CallArg::Struct(&start_pos.encode()),
                CallArg::Struct(&end_pos.encode()),
                CallArg::F32(radius),
                CallArg::I32(slices),
                CallArg::I32(rings),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a plane XZ.
    pub fn draw_plane(&self, center: Vector3, size: Vector2, color: Color) {
        self.call_void(
            "DrawPlane",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::Struct(&size.encode()),
                CallArg::Struct(&color.encode()),
            ],
        );
    }

    /// Draw a ray line.
    pub fn draw_ray(&self, ray: Ray, color: Color) {
        self.call_void(
            "DrawRay",
            &[CallArg::Struct(&ray.encode()), CallArg::Struct(&color.encode())],
        );
    }

    /// Draw a grid (centered at origin).
    pub fn draw_grid(&self, slices: i32, spacing: f32) {
        self.call_void("DrawGrid", &[CallArg::I32(slices), CallArg::F32(spacing)]);
    }
}
