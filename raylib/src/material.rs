// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Material handles.

use raylib_sys::MATERIAL;

use crate::api::CallArg;
use crate::texture::Texture2D;
use crate::view::StructView;
use crate::Raylib;

/// Material map slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum MaterialMapIndex {
    #[default]
    Albedo = 0,
    Metalness = 1,
    Normal = 2,
    Roughness = 3,
    Occlusion = 4,
    Emission = 5,
    Height = 6,
    Cubemap = 7,
    Irradiance = 8,
    Prefilter = 9,
    Brdf = 10,
}

/// A material describing how meshes are shaded.
#[derive(Debug)]
pub struct Material {
    rl: Raylib,
    view: StructView,
}

impl Material {
    pub(crate) fn bytes(&self) -> &[u8] {
        self.view.bytes()
    }

    /// Load default material (supports DIFFUSE, SPECULAR and NORMAL maps).
    pub fn load_default(rl: &Raylib) -> Material {
        let bytes = rl.call_struct("LoadMaterialDefault", &[]);
        Material { rl: rl.clone(), view: StructView::new(bytes, &MATERIAL) }
    }

    /// Check if the material is ready.
    pub fn is_ready(&self) -> bool {
        self.rl.call_bool("IsMaterialReady", &[CallArg::Struct(self.view.bytes())])
    }

    /// Unload material from GPU memory (VRAM).
    pub fn unload(self) {
        self.rl.call_void("UnloadMaterial", &[CallArg::Struct(self.view.bytes())]);
    }

    /// Set texture for a material map slot.
    pub fn set_texture(&mut self, map: MaterialMapIndex, texture: &Texture2D) {
        let ptr = self.view.as_mut_ptr();
        self.rl.call_void(
            "SetMaterialTexture",
            &[CallArg::Pointer(ptr), CallArg::I32(map as i32), CallArg::Struct(texture.bytes())],
        );
    }
}
