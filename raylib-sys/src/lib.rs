// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! # raylib-sys: generated symbol table for the raylib C library
//!
//! This crate is the contract between the offline binding generator
//! (`raylib-bindgen`) and the marshaling layer (`raylib`). It holds:
//!
//! - The type model describing how values cross the FFI boundary
//!   ([`ValueKind`]) and how native structures are laid out in memory
//!   ([`StructLayout`], [`FieldKind`]).
//! - `src/generated.rs`, the checked-in output of `raylib-bindgen`: version
//!   constants, packed color constants, per-structure layout tables, and the
//!   [`SYMBOLS`] table mapping every bound native function name to its
//!   parameter and return kinds.
//!
//! **Most users should NOT use this crate directly.** Use the `raylib`
//! wrapper crate instead, which marshals arguments and results through these
//! tables and provides typed resource handles.
//!
//! ## Regenerating
//!
//! `generated.rs` is produced by running `raylib-bindgen` against the
//! `raylib.h` the target library was built from. The layout tables must match
//! the native ABI exactly; any drift silently corrupts every value decoded
//! from that structure.

mod generated;

pub use generated::*;

/// Width and interpretation of one field inside a native structure.
///
/// Field order and widths mirror the native in-memory layout with **no
/// implicit padding**: where the C compiler inserts alignment padding, the
/// generated layout tables carry an explicit filler field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
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
    /// Raw pointer, 8 bytes on every target the native library ships for.
    Pointer,
}

impl FieldKind {
    /// Byte width of this field.
    pub const fn size(self) -> usize {
        match self {
            FieldKind::U8 | FieldKind::I8 => 1,
            FieldKind::U16 | FieldKind::I16 => 2,
            FieldKind::U32 | FieldKind::I32 | FieldKind::F32 => 4,
            FieldKind::U64 | FieldKind::I64 | FieldKind::F64 | FieldKind::Pointer => 8,
        }
    }
}

/// Ordered field list describing one native structure's exact byte layout.
///
/// The descriptor is byte-offset-addressable: [`Self::offset`] gives the
/// cumulative offset of a field, [`Self::size`] the structure's total size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructLayout {
    pub fields: &'static [FieldKind],
}

impl StructLayout {
    /// Total byte size: the sum of all field widths.
    pub const fn size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].size();
            i += 1;
        }
        total
    }

    /// Byte offset of field `index`: the sum of the widths before it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for this layout.
    pub const fn offset(&self, index: usize) -> usize {
        assert!(index < self.fields.len());
        let mut total = 0;
        let mut i = 0;
        while i < index {
            total += self.fields[i].size();
            i += 1;
        }
        total
    }
}

/// How a single parameter or return value crosses the FFI boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Void,
    /// Unsigned byte; also the native boolean representation.
    U8,
    I8,
    U32,
    I32,
    I64,
    U64,
    F32,
    F64,
    /// Opaque pointer passed through untouched.
    Pointer,
    /// Pointer to caller-owned bytes (C strings, sample data, pixel data).
    Buffer,
    /// Structure passed or returned by value, described by its layout.
    Struct(&'static StructLayout),
    /// Callback / function pointer.
    Function,
}

/// Signature of one native function: ordered parameter kinds plus one
/// return kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FnSig {
    pub params: &'static [ValueKind],
    pub ret: ValueKind,
}

/// One entry of the generated symbol table.
#[derive(Clone, Copy, Debug)]
pub struct Symbol {
    pub name: &'static str,
    pub sig: FnSig,
}

impl Symbol {
    /// Looks up a symbol by native name with a linear scan.
    ///
    /// The wrapper layer builds a hash map once at startup; this helper
    /// exists for one-off queries and tests.
    pub fn find(name: &str) -> Option<&'static Symbol> {
        SYMBOLS.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_widths() {
        assert_eq!(FieldKind::U8.size(), 1);
        assert_eq!(FieldKind::I16.size(), 2);
        assert_eq!(FieldKind::F32.size(), 4);
        assert_eq!(FieldKind::F64.size(), 8);
        assert_eq!(FieldKind::Pointer.size(), 8);
    }

    // Every layout table must sum to the structure's native ABI size.
    // A mismatch here means every decode of that structure is corrupt.
    #[test]
    fn layout_sizes_match_native_abi() {
        assert_eq!(VECTOR2.size(), 8);
        assert_eq!(VECTOR3.size(), 12);
        assert_eq!(VECTOR4.size(), 16);
        assert_eq!(RECTANGLE.size(), 16);
        assert_eq!(COLOR.size(), 4);
        assert_eq!(MATRIX.size(), 64);
        assert_eq!(CAMERA2D.size(), 24);
        assert_eq!(CAMERA3D.size(), 44);
        assert_eq!(BOUNDING_BOX.size(), 24);
        assert_eq!(RAY.size(), 24);
        assert_eq!(RAY_COLLISION.size(), 32);
        assert_eq!(NPATCH_INFO.size(), 36);
        assert_eq!(IMAGE.size(), 24);
        assert_eq!(TEXTURE2D.size(), 20);
        assert_eq!(RENDER_TEXTURE2D.size(), 44);
        assert_eq!(FONT.size(), 48);
        assert_eq!(GLYPH_INFO.size(), 40);
        assert_eq!(SHADER.size(), 16);
        assert_eq!(MESH.size(), 112);
        assert_eq!(MODEL.size(), 120);
        assert_eq!(MATERIAL.size(), 40);
        assert_eq!(WAVE.size(), 24);
        assert_eq!(AUDIO_STREAM.size(), 32);
        assert_eq!(SOUND.size(), 40);
        assert_eq!(MUSIC.size(), 56);
        assert_eq!(FILE_PATH_LIST.size(), 16);
        assert_eq!(AUTOMATION_EVENT.size(), 24);
        assert_eq!(AUTOMATION_EVENT_LIST.size(), 16);
    }

    #[test]
    fn layout_offsets_are_cumulative() {
        // Image: data pointer, then width/height at 8 and 12.
        assert_eq!(IMAGE.offset(0), 0);
        assert_eq!(IMAGE.offset(1), 8);
        assert_eq!(IMAGE.offset(2), 12);
        // FilePathList: capacity, count at 4, paths pointer at 8.
        assert_eq!(FILE_PATH_LIST.offset(1), 4);
        assert_eq!(FILE_PATH_LIST.offset(2), 8);
    }

    #[test]
    fn symbol_lookup() {
        let sym = Symbol::find("InitWindow").expect("InitWindow must be bound");
        assert_eq!(sym.sig.params.len(), 3);
        assert_eq!(sym.sig.ret, ValueKind::Void);
        assert!(Symbol::find("TraceLog").is_none(), "variadic functions are excluded");
    }

    // The generated packed constants are blue-green-red-alpha byte order;
    // RED (230, 41, 55, 255) is the discriminating case.
    #[test]
    fn packed_color_byte_order() {
        assert_eq!(colors::RED, [55, 41, 230, 255]);
        assert_eq!(colors::RAYWHITE, [245, 245, 245, 255]);
        assert_eq!(colors::BLANK, [0, 0, 0, 0]);
    }

    #[test]
    fn version_constants() {
        assert_eq!(RAYLIB_VERSION_MAJOR, 5);
        assert_eq!(RAYLIB_VERSION_MINOR, 0);
        assert_eq!(RAYLIB_VERSION_PATCH, 0);
        assert_eq!(RAYLIB_VERSION, "5.0");
    }
}
