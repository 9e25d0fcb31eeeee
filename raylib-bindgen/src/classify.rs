// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! The fixed type-string → transportable-kind classification table.
//!
//! Every parameter and return type that can appear in the scanned
//! declaration range must have an entry here. Struct kinds carry their full
//! field layout so the emitter can render the layout tables alongside the
//! symbol table; the layouts mirror the native ABI exactly, with C alignment
//! padding spelled out as explicit filler fields.

/// Primitive field width used inside a struct layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prim {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    Pointer,
}

impl Prim {
    /// The `FieldKind` token the emitter writes for this primitive.
    pub fn token(self) -> &'static str {
        match self {
            Prim::U8 => "F::U8",
            Prim::I8 => "F::I8",
            Prim::U16 => "F::U16",
            Prim::I16 => "F::I16",
            Prim::U32 => "F::U32",
            Prim::I32 => "F::I32",
            Prim::U64 => "F::U64",
            Prim::I64 => "F::I64",
            Prim::F32 => "F::F32",
            Prim::F64 => "F::F64",
            Prim::Pointer => "F::Pointer",
        }
    }
}

/// One by-value struct known to the classification table.
#[derive(Debug, PartialEq, Eq)]
pub struct StructDef {
    /// Name of the emitted `StructLayout` constant.
    pub const_name: &'static str,
    pub fields: &'static [Prim],
}

/// Transportable kind a type string classifies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Void,
    U8,
    I8,
    U32,
    I32,
    I64,
    U64,
    F32,
    F64,
    Pointer,
    Buffer,
    Function,
    Struct(&'static StructDef),
}

impl Kind {
    /// The `ValueKind` token the emitter writes for this kind.
    pub fn token(self) -> String {
        match self {
            Kind::Void => "K::Void".into(),
            Kind::U8 => "K::U8".into(),
            Kind::I8 => "K::I8".into(),
            Kind::U32 => "K::U32".into(),
            Kind::I32 => "K::I32".into(),
            Kind::I64 => "K::I64".into(),
            Kind::U64 => "K::U64".into(),
            Kind::F32 => "K::F32".into(),
            Kind::F64 => "K::F64".into(),
            Kind::Pointer => "K::Pointer".into(),
            Kind::Buffer => "K::Buffer".into(),
            Kind::Function => "K::Function".into(),
            Kind::Struct(def) => format!("K::Struct(&{})", def.const_name),
        }
    }
}

macro_rules! layout {
    ($name:ident, $const_name:literal, [$($prim:ident),* $(,)?]) => {
        pub static $name: StructDef = StructDef {
            const_name: $const_name,
            fields: &[$(Prim::$prim),*],
        };
    };
}

layout!(VECTOR2, "VECTOR2", [F32, F32]);
layout!(VECTOR3, "VECTOR3", [F32, F32, F32]);
layout!(VECTOR4, "VECTOR4", [F32, F32, F32, F32]);
pub static MATRIX: StructDef = StructDef { const_name: "MATRIX", fields: &[Prim::F32; 16] };
layout!(COLOR, "COLOR", [U8, U8, U8, U8]);
layout!(RECTANGLE, "RECTANGLE", [F32, F32, F32, F32]);
layout!(IMAGE, "IMAGE", [Pointer, I32, I32, I32, I32]);
layout!(TEXTURE2D, "TEXTURE2D", [U32, I32, I32, I32, I32]);
layout!(
    RENDER_TEXTURE2D,
    "RENDER_TEXTURE2D",
    [U32, U32, I32, I32, I32, I32, U32, I32, I32, I32, I32]
);
layout!(NPATCH_INFO, "NPATCH_INFO", [F32, F32, F32, F32, I32, I32, I32, I32, I32]);
layout!(GLYPH_INFO, "GLYPH_INFO", [I32, I32, I32, I32, Pointer, I32, I32, I32, I32]);
layout!(FONT, "FONT", [I32, I32, I32, U32, I32, I32, I32, I32, Pointer, Pointer]);
layout!(
    CAMERA3D,
    "CAMERA3D",
    [F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, I32]
);
layout!(CAMERA2D, "CAMERA2D", [F32, F32, F32, F32, F32, F32]);
layout!(
    MESH,
    "MESH",
    [
        I32, I32, Pointer, Pointer, Pointer, Pointer, Pointer, Pointer, Pointer, Pointer, Pointer,
        Pointer, Pointer, U32, U32, Pointer
    ]
);
layout!(SHADER, "SHADER", [U32, U32, Pointer]);
layout!(MATERIAL, "MATERIAL", [U32, U32, Pointer, Pointer, F32, F32, F32, F32]);
layout!(
    MODEL,
    "MODEL",
    [
        F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, I32, I32,
        Pointer, Pointer, Pointer, I32, U32, Pointer, Pointer
    ]
);
layout!(MODEL_ANIMATION, "MODEL_ANIMATION", [I32, I32, Pointer, Pointer, U64, U64, U64, U64]);
layout!(RAY, "RAY", [F32, F32, F32, F32, F32, F32]);
layout!(RAY_COLLISION, "RAY_COLLISION", [U32, F32, F32, F32, F32, F32, F32, F32]);
layout!(BOUNDING_BOX, "BOUNDING_BOX", [F32, F32, F32, F32, F32, F32]);
layout!(WAVE, "WAVE", [U32, U32, U32, U32, Pointer]);
layout!(AUDIO_STREAM, "AUDIO_STREAM", [Pointer, Pointer, U32, U32, U32, U32]);
layout!(SOUND, "SOUND", [Pointer, Pointer, U32, U32, U32, U32, U32, U32]);
layout!(
    MUSIC,
    "MUSIC",
    [Pointer, Pointer, U32, U32, U32, U32, U32, U8, U8, U8, U8, I32, U32, Pointer]
);
layout!(
    VR_DEVICE_INFO,
    "VR_DEVICE_INFO",
    [I32, I32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32, F32]
);
pub static VR_STEREO_CONFIG: StructDef =
    StructDef { const_name: "VR_STEREO_CONFIG", fields: &[Prim::F32; 76] };
layout!(FILE_PATH_LIST, "FILE_PATH_LIST", [U32, U32, Pointer]);
layout!(AUTOMATION_EVENT, "AUTOMATION_EVENT", [U32, U32, I32, I32, I32, I32]);
layout!(AUTOMATION_EVENT_LIST, "AUTOMATION_EVENT_LIST", [U32, U32, Pointer]);

/// All struct definitions, in the order their layout constants are emitted.
pub static STRUCTS: &[&StructDef] = &[
    &VECTOR2,
    &VECTOR3,
    &VECTOR4,
    &MATRIX,
    &COLOR,
    &RECTANGLE,
    &IMAGE,
    &TEXTURE2D,
    &RENDER_TEXTURE2D,
    &NPATCH_INFO,
    &GLYPH_INFO,
    &FONT,
    &CAMERA3D,
    &CAMERA2D,
    &MESH,
    &SHADER,
    &MATERIAL,
    &MODEL,
    &MODEL_ANIMATION,
    &RAY,
    &RAY_COLLISION,
    &BOUNDING_BOX,
    &WAVE,
    &AUDIO_STREAM,
    &SOUND,
    &MUSIC,
    &VR_DEVICE_INFO,
    &VR_STEREO_CONFIG,
    &FILE_PATH_LIST,
    &AUTOMATION_EVENT,
    &AUTOMATION_EVENT_LIST,
];

/// The fixed type-string lookup table.
///
/// Keys are the exact normalized type strings produced by the declaration
/// parser (pointer depth folded into a ` *` / ` **` suffix).
static TYPE_MAP: &[(&str, Kind)] = &[
    ("void", Kind::Void),
    ("void *", Kind::Pointer),
    ("bool", Kind::U8),
    ("char", Kind::I8),
    ("unsigned int", Kind::U32),
    ("int", Kind::I32),
    ("long", Kind::I64),
    ("int *", Kind::Pointer),
    ("const int *", Kind::Pointer),
    ("const char *", Kind::Buffer),
    ("const char **", Kind::Buffer),
    ("unsigned char *", Kind::Buffer),
    ("const unsigned char *", Kind::Buffer),
    ("const void *", Kind::Buffer),
    ("char *", Kind::Buffer),
    ("float *", Kind::Buffer),
    ("float", Kind::F32),
    ("double", Kind::F64),
    // Struct types passed or returned by value
    ("Color", Kind::Struct(&COLOR)),
    ("Image", Kind::Struct(&IMAGE)),
    ("Font", Kind::Struct(&FONT)),
    ("Rectangle", Kind::Struct(&RECTANGLE)),
    ("BoundingBox", Kind::Struct(&BOUNDING_BOX)),
    ("Matrix", Kind::Struct(&MATRIX)),
    ("Vector2", Kind::Struct(&VECTOR2)),
    ("Vector3", Kind::Struct(&VECTOR3)),
    ("Vector4", Kind::Struct(&VECTOR4)),
    ("Ray", Kind::Struct(&RAY)),
    ("RayCollision", Kind::Struct(&RAY_COLLISION)),
    ("Model", Kind::Struct(&MODEL)),
    ("Mesh", Kind::Struct(&MESH)),
    ("Material", Kind::Struct(&MATERIAL)),
    ("ModelAnimation", Kind::Struct(&MODEL_ANIMATION)),
    ("Texture2D", Kind::Struct(&TEXTURE2D)),
    ("TextureCubemap", Kind::Struct(&TEXTURE2D)),
    ("RenderTexture2D", Kind::Struct(&RENDER_TEXTURE2D)),
    ("Camera", Kind::Struct(&CAMERA3D)),
    ("Camera2D", Kind::Struct(&CAMERA2D)),
    ("Camera3D", Kind::Struct(&CAMERA3D)),
    ("Shader", Kind::Struct(&SHADER)),
    ("Sound", Kind::Struct(&SOUND)),
    ("Wave", Kind::Struct(&WAVE)),
    ("Music", Kind::Struct(&MUSIC)),
    ("AudioStream", Kind::Struct(&AUDIO_STREAM)),
    ("FilePathList", Kind::Struct(&FILE_PATH_LIST)),
    ("AutomationEvent", Kind::Struct(&AUTOMATION_EVENT)),
    ("AutomationEventList", Kind::Struct(&AUTOMATION_EVENT_LIST)),
    ("NPatchInfo", Kind::Struct(&NPATCH_INFO)),
    ("GlyphInfo", Kind::Struct(&GLYPH_INFO)),
    ("VrStereoConfig", Kind::Struct(&VR_STEREO_CONFIG)),
    ("VrDeviceInfo", Kind::Struct(&VR_DEVICE_INFO)),
    // Struct pointers travel as opaque pointers
    ("Color *", Kind::Pointer),
    ("Image *", Kind::Pointer),
    ("Vector2 *", Kind::Pointer),
    ("Vector3 *", Kind::Pointer),
    ("Wave *", Kind::Pointer),
    ("ModelAnimation *", Kind::Pointer),
    ("Mesh *", Kind::Pointer),
    ("Model *", Kind::Pointer),
    ("Material *", Kind::Pointer),
    ("Camera *", Kind::Pointer),
    ("AutomationEventList *", Kind::Pointer),
    ("Texture2D *", Kind::Pointer),
    ("GlyphInfo *", Kind::Pointer),
    ("const GlyphInfo *", Kind::Pointer),
    ("Rectangle **", Kind::Pointer),
    ("const Matrix *", Kind::Pointer),
    // Function pointers
    ("AudioCallback", Kind::Function),
    ("TraceLogCallback", Kind::Function),
    ("LoadFileDataCallback", Kind::Function),
    ("SaveFileDataCallback", Kind::Function),
    ("LoadFileTextCallback", Kind::Function),
    ("SaveFileTextCallback", Kind::Function),
];

/// Classifies a normalized type string, or `None` if the table has no entry.
pub fn classify(ty: &str) -> Option<Kind> {
    TYPE_MAP.iter().find(|(key, _)| *key == ty).map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_classify() {
        assert_eq!(classify("int"), Some(Kind::I32));
        assert_eq!(classify("bool"), Some(Kind::U8));
        assert_eq!(classify("const char *"), Some(Kind::Buffer));
        assert_eq!(classify("void *"), Some(Kind::Pointer));
        assert_eq!(classify("double"), Some(Kind::F64));
    }

    #[test]
    fn structs_classify_with_layouts() {
        match classify("Vector2") {
            Some(Kind::Struct(def)) => assert_eq!(def.fields.len(), 2),
            other => panic!("Vector2 classified as {other:?}"),
        }
        // Camera is an alias of Camera3D in the header.
        assert_eq!(classify("Camera"), classify("Camera3D"));
        assert_eq!(classify("TextureCubemap"), classify("Texture2D"));
    }

    #[test]
    fn struct_pointers_are_opaque() {
        assert_eq!(classify("Image *"), Some(Kind::Pointer));
        assert_eq!(classify("Rectangle **"), Some(Kind::Pointer));
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert_eq!(classify("struct dirent *"), None);
        assert_eq!(classify("rlVertexBuffer"), None);
    }

    #[test]
    fn kind_tokens() {
        assert_eq!(Kind::I32.token(), "K::I32");
        assert_eq!(Kind::Struct(&VECTOR2).token(), "K::Struct(&VECTOR2)");
    }
}
