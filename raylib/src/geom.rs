// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Geometric value types crossing the FFI boundary by value.
//!
//! Each type decodes from and encodes to the fixed byte layout described by
//! its table in `raylib-sys`, little-endian pinned. `decode(encode(x))`
//! reproduces `x` exactly for every field.
//!
//! `Color` here is R,G,B,A byte order. The *generated* packed constants in
//! `raylib_sys::colors` are blue-green-red-alpha instead; the two encodings
//! are deliberately distinct and must not be unified.

use crate::marshal::{read_f32, read_i32, write_f32, write_i32, write_u32};

/// 2-component vector, 8 bytes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::VECTOR2.size());
        Self { x: read_f32(bytes, 0), y: read_f32(bytes, 4) }
    }

    pub fn encode(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        write_f32(&mut bytes, 0, self.x);
        write_f32(&mut bytes, 4, self.y);
        bytes
    }
}

/// 3-component vector, 12 bytes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::VECTOR3.size());
        Self { x: read_f32(bytes, 0), y: read_f32(bytes, 4), z: read_f32(bytes, 8) }
    }

    pub fn encode(&self) -> [u8; 12] {
        let mut bytes = [0u8; 12];
        write_f32(&mut bytes, 0, self.x);
        write_f32(&mut bytes, 4, self.y);
        write_f32(&mut bytes, 8, self.z);
        bytes
    }
}

/// 4-component vector, 16 bytes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::VECTOR4.size());
        Self {
            x: read_f32(bytes, 0),
            y: read_f32(bytes, 4),
            z: read_f32(bytes, 8),
            w: read_f32(bytes, 12),
        }
    }

    pub fn encode(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        write_f32(&mut bytes, 0, self.x);
        write_f32(&mut bytes, 4, self.y);
        write_f32(&mut bytes, 8, self.z);
        write_f32(&mut bytes, 12, self.w);
        bytes
    }
}

/// Axis-aligned rectangle, 16 bytes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::RECTANGLE.size());
        Self {
            x: read_f32(bytes, 0),
            y: read_f32(bytes, 4),
            width: read_f32(bytes, 8),
            height: read_f32(bytes, 12),
        }
    }

    pub fn encode(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        write_f32(&mut bytes, 0, self.x);
        write_f32(&mut bytes, 4, self.y);
        write_f32(&mut bytes, 8, self.width);
        write_f32(&mut bytes, 12, self.height);
        bytes
    }
}

/// RGBA color, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::COLOR.size());
        Self { r: bytes[0], g: bytes[1], b: bytes[2], a: bytes[3] }
    }

    pub fn encode(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const LIGHTGRAY: Color = Color::new(200, 200, 200, 255);
    pub const GRAY: Color = Color::new(130, 130, 130, 255);
    pub const DARKGRAY: Color = Color::new(80, 80, 80, 255);
    pub const YELLOW: Color = Color::new(253, 249, 0, 255);
    pub const GOLD: Color = Color::new(255, 203, 0, 255);
    pub const ORANGE: Color = Color::new(255, 161, 0, 255);
    pub const PINK: Color = Color::new(255, 109, 194, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const MAROON: Color = Color::new(190, 33, 55, 255);
    pub const GREEN: Color = Color::new(0, 228, 48, 255);
    pub const LIME: Color = Color::new(0, 158, 47, 255);
    pub const DARKGREEN: Color = Color::new(0, 117, 44, 255);
    pub const SKYBLUE: Color = Color::new(102, 191, 255, 255);
    pub const BLUE: Color = Color::new(0, 121, 241, 255);
    pub const DARKBLUE: Color = Color::new(0, 82, 172, 255);
    pub const PURPLE: Color = Color::new(200, 122, 255, 255);
    pub const VIOLET: Color = Color::new(135, 60, 190, 255);
    pub const DARKPURPLE: Color = Color::new(112, 31, 126, 255);
    pub const BEIGE: Color = Color::new(211, 176, 131, 255);
    pub const BROWN: Color = Color::new(127, 106, 79, 255);
    pub const DARKBROWN: Color = Color::new(76, 63, 47, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const BLANK: Color = Color::new(0, 0, 0, 0);
    pub const MAGENTA: Color = Color::new(255, 0, 255, 255);
    pub const RAYWHITE: Color = Color::new(245, 245, 245, 255);
}

/// 4x4 transform matrix, 64 bytes on the wire.
///
/// Cells are kept in the native structure's field order
/// (m0, m4, m8, m12, m1, m5, ...), not row-major reading order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub cells: [f32; 16],
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        cells: [
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::MATRIX.size());
        let mut cells = [0.0f32; 16];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = read_f32(bytes, index * 4);
        }
        Self { cells }
    }

    pub fn encode(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        for (index, cell) in self.cells.iter().enumerate() {
            write_f32(&mut bytes, index * 4, *cell);
        }
        bytes
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 2D camera, 24 bytes on the wire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera2D {
    /// Camera offset (displacement from target).
    pub offset: Vector2,
    /// Camera target (rotation and zoom origin).
    pub target: Vector2,
    /// Camera rotation in degrees.
    pub rotation: f32,
    /// Camera zoom (scaling), 1.0 by default.
    pub zoom: f32,
}

impl Camera2D {
    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::CAMERA2D.size());
        Self {
            offset: Vector2::decode(&bytes[0..8]),
            target: Vector2::decode(&bytes[8..16]),
            rotation: read_f32(bytes, 16),
            zoom: read_f32(bytes, 20),
        }
    }

    pub fn encode(&self) -> [u8; 24] {
        let mut bytes = [0u8; 24];
        bytes[0..8].copy_from_slice(&self.offset.encode());
        bytes[8..16].copy_from_slice(&self.target.encode());
        write_f32(&mut bytes, 16, self.rotation);
        write_f32(&mut bytes, 20, self.zoom);
        bytes
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            offset: Vector2::default(),
            target: Vector2::default(),
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

/// Camera projection mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraProjection {
    #[default]
    Perspective,
    Orthographic,
}

impl CameraProjection {
    fn to_native(self) -> i32 {
        match self {
            CameraProjection::Perspective => 0,
            CameraProjection::Orthographic => 1,
        }
    }

    fn from_native(value: i32) -> Self {
        if value == 1 { CameraProjection::Orthographic } else { CameraProjection::Perspective }
    }
}

/// 3D camera, 44 bytes on the wire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera3D {
    /// Camera position.
    pub position: Vector3,
    /// Camera target (what it looks at).
    pub target: Vector3,
    /// Camera up vector (rotation over its axis).
    pub up: Vector3,
    /// Camera field-of-view aperture in Y (degrees).
    pub fovy: f32,
    /// Projection type.
    pub projection: CameraProjection,
}

impl Camera3D {
    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::CAMERA3D.size());
        Self {
            position: Vector3::decode(&bytes[0..12]),
            target: Vector3::decode(&bytes[12..24]),
            up: Vector3::decode(&bytes[24..36]),
            fovy: read_f32(bytes, 36),
            projection: CameraProjection::from_native(read_i32(bytes, 40)),
        }
    }

    pub fn encode(&self) -> [u8; 44] {
        let mut bytes = [0u8; 44];
        bytes[0..12].copy_from_slice(&self.position.encode());
        bytes[12..24].copy_from_slice(&self.target.encode());
        bytes[24..36].copy_from_slice(&self.up.encode());
        write_f32(&mut bytes, 36, self.fovy);
        write_i32(&mut bytes, 40, self.projection.to_native());
        bytes
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: Vector3::default(),
            target: Vector3::new(0.0, 1.0, 0.0),
            up: Vector3::new(0.0, 0.0, 1.0),
            fovy: 90.0,
            projection: CameraProjection::Perspective,
        }
    }
}

/// Axis-aligned bounding box, 24 bytes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::BOUNDING_BOX.size());
        Self { min: Vector3::decode(&bytes[0..12]), max: Vector3::decode(&bytes[12..24]) }
    }

    pub fn encode(&self) -> [u8; 24] {
        let mut bytes = [0u8; 24];
        bytes[0..12].copy_from_slice(&self.min.encode());
        bytes[12..24].copy_from_slice(&self.max.encode());
        bytes
    }
}

/// Ray (origin plus direction), 24 bytes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub const fn new(position: Vector3, direction: Vector3) -> Self {
        Self { position, direction }
    }

    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::RAY.size());
        Self {
            position: Vector3::decode(&bytes[0..12]),
            direction: Vector3::decode(&bytes[12..24]),
        }
    }

    pub fn encode(&self) -> [u8; 24] {
        let mut bytes = [0u8; 24];
        bytes[0..12].copy_from_slice(&self.position.encode());
        bytes[12..24].copy_from_slice(&self.direction.encode());
        bytes
    }
}

/// Result of a ray collision query, 32 bytes on the wire.
///
/// The native bool occupies a 4-byte slot (1 byte plus alignment padding);
/// only its low byte is meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayCollision {
    pub hit: bool,
    pub distance: f32,
    pub point: Vector3,
    pub normal: Vector3,
}

impl RayCollision {
    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::RAY_COLLISION.size());
        Self {
            hit: bytes[0] != 0,
            distance: read_f32(bytes, 4),
            point: Vector3::decode(&bytes[8..20]),
            normal: Vector3::decode(&bytes[20..32]),
        }
    }

    pub fn encode(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        write_u32(&mut bytes, 0, self.hit as u32);
        write_f32(&mut bytes, 4, self.distance);
        bytes[8..20].copy_from_slice(&self.point.encode());
        bytes[20..32].copy_from_slice(&self.normal.encode());
        bytes
    }
}

/// Layout of an n-patch: 3x3, 1x3 or 3x1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NPatchLayout {
    #[default]
    NinePatch,
    ThreePatchVertical,
    ThreePatchHorizontal,
}

impl NPatchLayout {
    fn to_native(self) -> i32 {
        match self {
            NPatchLayout::NinePatch => 0,
            NPatchLayout::ThreePatchVertical => 1,
            NPatchLayout::ThreePatchHorizontal => 2,
        }
    }

    fn from_native(value: i32) -> Self {
        match value {
            1 => NPatchLayout::ThreePatchVertical,
            2 => NPatchLayout::ThreePatchHorizontal,
            _ => NPatchLayout::NinePatch,
        }
    }
}

/// N-patch scaling description, 36 bytes on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NPatchInfo {
    /// Texture source rectangle.
    pub source: Rectangle,
    /// Left border offset.
    pub left: i32,
    /// Top border offset.
    pub top: i32,
    /// Right border offset.
    pub right: i32,
    /// Bottom border offset.
    pub bottom: i32,
    pub layout: NPatchLayout,
}

impl NPatchInfo {
    pub fn decode(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), raylib_sys::NPATCH_INFO.size());
        Self {
            source: Rectangle::decode(&bytes[0..16]),
            left: read_i32(bytes, 16),
            top: read_i32(bytes, 20),
            right: read_i32(bytes, 24),
            bottom: read_i32(bytes, 28),
            layout: NPatchLayout::from_native(read_i32(bytes, 32)),
        }
    }

    pub fn encode(&self) -> [u8; 36] {
        let mut bytes = [0u8; 36];
        bytes[0..16].copy_from_slice(&self.source.encode());
        write_i32(&mut bytes, 16, self.left);
        write_i32(&mut bytes, 20, self.top);
        write_i32(&mut bytes, 24, self.right);
        write_i32(&mut bytes, 28, self.bottom);
        write_i32(&mut bytes, 32, self.layout.to_native());
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_round_trips() {
        for value in [
            Vector2::new(0.0, 0.0),
            Vector2::new(-1.5, f32::MAX),
            Vector2::new(f32::MIN_POSITIVE, -0.0),
        ] {
            assert_eq!(Vector2::decode(&value.encode()), value);
        }
        let v3 = Vector3::new(1.0, -2.0, 3.5);
        assert_eq!(Vector3::decode(&v3.encode()), v3);
        let v4 = Vector4::new(0.25, -0.5, f32::MAX, 4.0);
        assert_eq!(Vector4::decode(&v4.encode()), v4);
    }

    #[test]
    fn rectangle_round_trip() {
        let rect = Rectangle::new(10.0, 20.0, 640.0, 480.0);
        assert_eq!(Rectangle::decode(&rect.encode()), rect);
        assert_eq!(rect.encode().len(), raylib_sys::RECTANGLE.size());
    }

    #[test]
    fn color_round_trip_and_byte_order() {
        let color = Color::new(230, 41, 55, 255);
        // Managed colors are R,G,B,A on the wire...
        assert_eq!(color.encode(), [230, 41, 55, 255]);
        assert_eq!(Color::decode(&color.encode()), color);
        // ...while the generated packed constant for the same color is
        // blue-green-red-alpha.
        assert_eq!(raylib_sys::colors::RED, [55, 41, 230, 255]);
    }

    #[test]
    fn matrix_round_trip() {
        let mut matrix = Matrix::IDENTITY;
        matrix.cells[3] = -42.5;
        matrix.cells[15] = f32::MAX;
        assert_eq!(Matrix::decode(&matrix.encode()), matrix);
        assert_eq!(matrix.encode().len(), 64);
    }

    #[test]
    fn camera_round_trips() {
        let cam2 = Camera2D {
            offset: Vector2::new(400.0, 300.0),
            target: Vector2::new(10.0, -10.0),
            rotation: 45.0,
            zoom: 2.0,
        };
        assert_eq!(Camera2D::decode(&cam2.encode()), cam2);

        let cam3 = Camera3D {
            position: Vector3::new(0.0, 10.0, 10.0),
            target: Vector3::default(),
            up: Vector3::new(0.0, 1.0, 0.0),
            fovy: 45.0,
            projection: CameraProjection::Orthographic,
        };
        let bytes = cam3.encode();
        assert_eq!(bytes.len(), raylib_sys::CAMERA3D.size());
        assert_eq!(Camera3D::decode(&bytes), cam3);
    }

    #[test]
    fn default_cameras_match_upstream() {
        assert_eq!(Camera2D::default().zoom, 1.0);
        let cam = Camera3D::default();
        assert_eq!(cam.target, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(cam.up, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(cam.fovy, 90.0);
    }

    #[test]
    fn ray_and_box_round_trips() {
        let ray = Ray::new(Vector3::new(0.0, 1.0, 2.0), Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(Ray::decode(&ray.encode()), ray);
        let bb = BoundingBox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(BoundingBox::decode(&bb.encode()), bb);
    }

    #[test]
    fn ray_collision_round_trip() {
        let collision = RayCollision {
            hit: true,
            distance: 4.25,
            point: Vector3::new(1.0, 2.0, 3.0),
            normal: Vector3::new(0.0, 1.0, 0.0),
        };
        let bytes = collision.encode();
        assert_eq!(bytes.len(), 32);
        assert_eq!(RayCollision::decode(&bytes), collision);
        // The hit flag decodes from the low byte only.
        let miss = RayCollision { hit: false, ..collision };
        assert_eq!(RayCollision::decode(&miss.encode()), miss);
    }

    #[test]
    fn npatch_round_trip() {
        let info = NPatchInfo {
            source: Rectangle::new(0.0, 0.0, 64.0, 64.0),
            left: 12,
            top: 12,
            right: 12,
            bottom: 12,
            layout: NPatchLayout::ThreePatchHorizontal,
        };
        let bytes = info.encode();
        assert_eq!(bytes.len(), raylib_sys::NPATCH_INFO.size());
        assert_eq!(NPatchInfo::decode(&bytes), info);
    }
}
