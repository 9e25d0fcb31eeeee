// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Model handles and 3D billboard drawing.

use raylib_sys::MODEL;

use crate::api::CallArg;
use crate::geom::{BoundingBox, Camera3D, Color, Rectangle, Vector2, Vector3};
use crate::marshal::encode_text;
use crate::mesh::Mesh;
use crate::texture::Texture2D;
use crate::view::StructView;
use crate::Raylib;

/// A model: meshes, materials and transform.
#[derive(Debug)]
pub struct Model {
    rl: Raylib,
    view: StructView,
}

impl Model {
    /// Load model from files (meshes and materials).
    pub fn load(rl: &Raylib, file_name: &str) -> Model {
        let file_name = encode_text(file_name);
        let bytes = rl.call_struct("LoadModel", &[CallArg::Buffer(&file_name)]);
        Model { rl: rl.clone(), view: StructView::new(bytes, &MODEL) }
    }

    /// Load model from generated mesh (default material).
    pub fn load_from_mesh(rl: &Raylib, mesh: &Mesh) -> Model {
        let bytes = rl.call_struct("LoadModelFromMesh", &[CallArg::Struct(mesh.bytes())]);
        Model { rl: rl.clone(), view: StructView::new(bytes, &MODEL) }
    }

    /// Number of meshes.
    pub fn mesh_count(&self) -> i32 {
        self.view.i32_field(16)
    }

    /// Number of materials.
    pub fn material_count(&self) -> i32 {
        self.view.i32_field(17)
    }

    /// Check if the model is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsModelReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload model (including meshes) from memory (RAM and/or VRAM).
    pub fn unload(self) {
        self.rl.call_void("UnloadModel", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Compute model bounding box limits (considers all meshes).
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::decode(
            &self.rl.call_struct("GetModelBoundingBox", &[CallArg::Struct(self.view.bytes())]),
        )
    }

    /// Draw the model (with texture if set).
    pub fn draw(&self, position: Vector3, scale: f32, tint: Color) {
        self.rl.call_void(
            "DrawModel",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&position.encode()),
                CallArg::F32(scale),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw the model with extended parameters.
    pub fn draw_ex(
        &self,
        position: Vector3,
        rotation_axis: Vector3,
        rotation_angle: f32,
        scale: Vector3,
        tint: Color,
    ) {
        self.rl.call_void(
            "DrawModelEx",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&rotation_axis.encode()),
                CallArg::F32(rotation_angle),
                CallArg::Struct(&scale.encode()),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw the model wires (with texture if set).
    pub fn draw_wires(&self, position: Vector3, scale: f32, tint: Color) {
        self.rl.call_void(
            "DrawModelWires",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&position.encode()),
                CallArg::F32(scale),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw the model wires with extended parameters.
    pub fn draw_wires_ex(
        &self,
        position: Vector3,
        rotation_axis: Vector3,
        rotation_angle: f32,
        scale: Vector3,
        tint: Color,
    ) {
        self.rl.call_void(
            "DrawModelWiresEx",
            &[
                CallArg::Struct(self.view.bytes()),
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&rotation_axis.encode()),
                CallArg::F32(rotation_angle),
                CallArg::Struct(&scale.encode()),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }
}

impl Raylib {
    /// Draw bounding box (wires).
    pub fn draw_bounding_box(&self, bbox: BoundingBox, color: Color) {
        self.call_void(
            "DrawBoundingBox",
            &[CallArg::Struct(&bbox.encode()), CallArg::Struct(&color.encode())],
        );
    }

    /// Draw a billboard texture.
    pub fn draw_billboard(
        &self,
        camera: Camera3D,
        texture: &Texture2D,
        position: Vector3,
        size: f32,
        tint: Color,
    ) {
        self.call_void(
            "DrawBillboard",
            &[
                CallArg::Struct(&camera.encode()),
                CallArg::Struct(texture.bytes()),
                CallArg::Struct(&position.encode()),
                CallArg::F32(size),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw a billboard texture defined by source.
    pub fn draw_billboard_rec(
        &self,
        camera: Camera3D,
        texture: &Texture2D,
        source: Rectangle,
        position: Vector3,
        size: Vector2,
        tint: Color,
    ) {
        self.call_void(
            "DrawBillboardRec",
            &[
                CallArg::Struct(&camera.encode()),
                CallArg::Struct(texture.bytes()),
                CallArg::Struct(&source.encode()),
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&size.encode()),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Draw a billboard texture defined by source and rotation.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_billboard_pro(
        &self,
        camera: Camera3D,
        texture: &Texture2D,
        source: Rectangle,
        position: Vector3,
        up: Vector3,
        size: Vector2,
        origin: Vector2,
        rotation: f32,
        tint: Color,
    ) {
        self.call_void(
            "DrawBillboardPro",
            &[
                CallArg::Struct(&camera.encode()),
                CallArg::Struct(texture.bytes()),
                CallArg::Struct(&source.encode()),
                CallArg::Struct(&position.encode()),
                CallArg::Struct(&up.encode()),
                CallArg::Struct(&size.encode()),
                CallArg::Struct(&origin.encode()),
                CallArg::F32(rotation),
                CallArg::Struct(&tint.encode()),
            ],
        );
    }

    /// Set material for a mesh inside a model.
    pub fn set_model_mesh_material(&self, model: &mut Model, mesh_id: i32, material_id: i32) {
        let ptr = model.view.as_mut_ptr();
        self.call_void(
            "SetModelMeshMaterial",
            &[CallArg::Pointer(ptr), CallArg::I32(mesh_id), CallArg::I32(material_id)],
        );
    }
}
