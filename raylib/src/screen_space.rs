// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Screen-space transformations.

use crate::api::CallArg;
use crate::geom::{Camera2D, Camera3D, Matrix, Ray, Vector2, Vector3};
use crate::Raylib;

impl Raylib {
    /// Get a ray trace from mouse position.
    pub fn get_mouse_ray(&self, mouse_position: Vector2, camera: Camera3D) -> Ray {
        Ray::decode(&self.call_struct(
            "GetMouseRay",
            &[CallArg::Struct(&mouse_position.encode()), CallArg::Struct(&camera.encode())],
        ))
    }

    /// Get camera transform matrix (view matrix).
    pub fn get_camera_matrix(&self, camera: Camera3D) -> Matrix {
        Matrix::decode(&self.call_struct("GetCameraMatrix", &[CallArg::Struct(&camera.encode())]))
    }

    /// Get camera 2d transform matrix.
    pub fn get_camera_matrix_2d(&self, camera: Camera2D) -> Matrix {
        Matrix::decode(&self.call_struct("GetCameraMatrix2D", &[CallArg::Struct(&camera.encode())]))
    }

    /// Get the screen space position for a 3d world space position.
    pub fn get_world_to_screen(&self, position: Vector3, camera: Camera3D) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetWorldToScreen",
            &[CallArg::Struct(&position.encode()), CallArg::Struct(&camera.encode())],
        ))
    }

    /// Get the world space position for a 2d camera screen space position.
    pub fn get_screen_to_world_2d(&self, position: Vector2, camera: Camera2D) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetScreenToWorld2D",
            &[CallArg::Struct(&position.encode()), CallArg::Struct(&camera.encode())],
        ))
    }

    /// Get size position for a 3d world space position.
    pub fn get_world_to_screen_ex(
        &self,
        position: Vector3,
        camera: Camera3D,
        width: i32,
        height: i32,
    ) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetWorldToScreenEx",
            &[
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&camera.encode()),
                CallArg::I32(width),
                CallArg::I32(height),
            ],
        ))
    }

    /// Get the screen space position for a 2d camera world space position.
    pub fn get_world_to_screen_2d(&self, position: Vector2, camera: Camera2D) -> Vector2 {
        Vector2::decode(&self.call_struct(
            "GetWorldToScreen2D",
            &[CallArg::Struct(&position.encode()), CallArg::Struct(&camera.encode())],
        ))
    }
}
