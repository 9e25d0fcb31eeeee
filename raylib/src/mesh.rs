// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Mesh handles and mesh generation.

use raylib_sys::MESH;

use crate::api::CallArg;
use crate::geom::{BoundingBox, Matrix, Vector3};
use crate::image::Image;
use crate::marshal::encode_text;
use crate::material::Material;
use crate::view::StructView;
use crate::Raylib;

/// Vertex data kept in CPU memory with GPU buffer ids after upload.
#[derive(Debug)]
pub struct Mesh {
    rl: Raylib,
    view: StructView,
}

impl Mesh {
    fn wrap(rl: &Raylib, bytes: Vec<u8>) -> Mesh {
        Mesh { rl: rl.clone(), view: StructView::new(bytes, &MESH) }
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        self.view.bytes()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> i32 {
        self.view.i32_field(0)
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> i32 {
        self.view.i32_field(1)
    }

    /// Upload mesh vertex data to GPU and provide VAO/VBO ids.
    pub fn upload(&mut self, dynamic: bool) {
        let ptr = self.view.as_mut_ptr();
        self.rl.call_void("UploadMesh", &[CallArg::Pointer(ptr), CallArg::U8(dynamic as u8)]);
    }

    /// Update mesh vertex data in GPU for a specific buffer index.
    pub fn update_buffer(&self, index: i32, data: &[u8], offset: i32) {
        self.rl.call_void(
            "UpdateMeshBuffer",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::I32(index),
                CallArg::Buffer(data),
                CallArg::I32(data.len() as i32),
                CallArg::I32(offset),
            ],
        );
    }

    /// Unload mesh data from CPU and GPU.
    pub fn unload(self) {
        self.rl.call_void("UnloadMesh", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Draw the mesh with material and transform.
    pub fn draw(&self, material: &Material, transform: Matrix) {
        self.rl.call_void(
            "DrawMesh",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(material.bytes()),
                CallArg::Struct(&transform.encode()),
            ],
        );
    }

    /// Draw multiple mesh instances with material and different transforms.
    pub fn draw_instanced(&self, material: &Material, transforms: &[Matrix]) {
        let mut packed = vec![0u8; transforms.len() * 64];
        for (index, transform) in transforms.iter().enumerate() {
            packed[index * 64..(index + 1) * 64].copy_from_slice(&transform.encode());
        }
        self.rl.call_void(
            "DrawMeshInstanced",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(material.bytes()),
                CallArg::Buffer(&packed),
                CallArg::I32(transforms.len() as i32),
            ],
        );
    }

    /// Export mesh data to file, returns true on success.
    pub fn export(&self, file_name: &str) -> bool {
        let file_name = encode_text(file_name);
        self.rl.call_bool(
            "ExportMesh",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(&file_name)],
        )
    }

    /// Compute mesh bounding box limits.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::decode(
            &self.rl.call_struct("GetMeshBoundingBox", &[CallArg::Struct(self.view.bytes())]),
        )
    }

    /// Compute mesh tangents.
    pub fn gen_tangents(&mut self) {
        let ptr = self.view.as_mut_ptr();
        self.rl.call_void("GenMeshTangents", &[CallArg::Pointer(ptr)]);
    }

    /// Generate polygonal mesh.
    pub fn gen_poly(rl: &Raylib, sides: i32, radius: f32) -> Mesh {
        Mesh::wrap(rl, rl.call_struct("GenMeshPoly", &[CallArg::I32(sides), CallArg::F32(radius)]))
    }

    /// Generate plane mesh (with subdivisions).
    pub fn gen_plane(rl: &Raylib, width: f32, length: f32, res_x: i32, res_z: i32) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshPlane",
                &[
                    CallArg::F32(width),
                    CallArg::F32(length),
                    CallArg::I32(res_x),
                    CallArg::I32(res_z),
                ],
            ),
        )
    }

    /// Generate cuboid mesh.
    pub fn gen_cube(rl: &Raylib, width: f32, height: f32, length: f32) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshCube",
                &[CallArg::F32(width), CallArg::F32(height), CallArg::F32(length)],
            ),
        )
    }

    /// Generate sphere mesh (standard sphere).
    pub fn gen_sphere(rl: &Raylib, radius: f32, rings: i32, slices: i32) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshSphere",
                &[CallArg::F32(radius), CallArg::I32(rings), CallArg::I32(slices)],
            ),
        )
    }

    /// Generate half-sphere mesh (no bottom cap).
    pub fn gen_hemisphere(rl: &Raylib, radius: f32, rings: i32, slices: i32) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshHemiSphere",
                &[CallArg::F32(radius), CallArg::I32(rings), CallArg::I32(slices)],
            ),
        )
    }

    /// Generate cylinder mesh.
    pub fn gen_cylinder(rl: &Raylib, radius: f32, height: f32, slices: i32) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshCylinder",
                &[CallArg::F32(radius), CallArg::F32(height), CallArg::I32(slices)],
            ),
        )
    }

    /// Generate cone/pyramid mesh.
    pub fn gen_cone(rl: &Raylib, radius: f32, height: f32, slices: i32) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshCone",
                &[CallArg::F32(radius), CallArg::F32(height), CallArg::I32(slices)],
            ),
        )
    }

    /// Generate torus mesh.
    pub fn gen_torus(rl: &Raylib, radius: f32, size: f32, rad_seg: i32, sides: i32) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshTorus",
                &[
                    CallArg::F32(radius),
                    CallArg::F32(size),
                    CallArg::I32(rad_seg),
                    CallArg::I32(sides),
                ],
            ),
        )
    }

    /// Generate trefoil knot mesh.
    pub fn gen_knot(rl: &Raylib, radius: f32, size: f32, rad_seg: i32, sides: i32) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshKnot",
                &[
                    CallArg::F32(radius),
                    CallArg::F32(size),
                    CallArg::I32(rad_seg),
                    CallArg::I32(sides),
                ],
            ),
        )
    }

    /// Generate heightmap mesh from image data.
    pub fn gen_heightmap(rl: &Raylib, heightmap: &Image, size: Vector3) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshHeightmap",
                &[CallArg::Struct(heightmap.bytes()), CallArg::Struct(&size.encode())],
            ),
        )
    }

    /// Generate cubes-based map mesh from image data.
    pub fn gen_cubicmap(rl: &Raylib, cubicmap: &Image, cube_size: Vector3) -> Mesh {
        Mesh::wrap(
            rl,
            rl.call_struct(
                "GenMeshCubicmap",
                &[CallArg::Struct(cubicmap.bytes()), CallArg::Struct(&cube_size.encode())],
            ),
        )
    }
}
