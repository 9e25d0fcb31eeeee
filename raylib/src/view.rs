// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Typed views over opaque native struct buffers.
//!
//! Composite resources (Image, Font, Wave, Music, ...) are not decoded
//! field-by-field into managed objects: the returned buffer is stored
//! opaquely and individual fields are read on demand. [`StructView`] pairs
//! such a buffer with its layout descriptor so accessors compute offsets
//! from the descriptor instead of scattering magic byte offsets across
//! call sites.

use raylib_sys::{FieldKind, StructLayout};

use crate::marshal;

/// An owned fixed-size byte buffer paired with its layout descriptor.
pub(crate) struct StructView {
    bytes: Box<[u8]>,
    layout: &'static StructLayout,
}

impl StructView {
    /// Wraps a native struct buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer size does not match the layout — that means the
    /// symbol table and this wrapper disagree about the structure's ABI,
    /// which would corrupt every subsequent field read.
    pub(crate) fn new(bytes: Vec<u8>, layout: &'static StructLayout) -> Self {
        assert_eq!(
            bytes.len(),
            layout.size(),
            "native buffer size does not match the struct layout"
        );
        Self { bytes: bytes.into_boxed_slice(), layout }
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable pointer to the buffer, for natives that take `Struct *` and
    /// mutate it in place.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut std::ffi::c_void {
        self.bytes.as_mut_ptr().cast()
    }

    fn field_offset(&self, index: usize, expected: FieldKind) -> usize {
        let kind = self.layout.fields[index];
        assert!(kind == expected, "field {index} is {kind:?}, accessed as {expected:?}");
        self.layout.offset(index)
    }

    pub(crate) fn i32_field(&self, index: usize) -> i32 {
        marshal::read_i32(&self.bytes, self.field_offset(index, FieldKind::I32))
    }

    pub(crate) fn u32_field(&self, index: usize) -> u32 {
        marshal::read_u32(&self.bytes, self.field_offset(index, FieldKind::U32))
    }

    pub(crate) fn ptr_field(&self, index: usize) -> *mut std::ffi::c_void {
        marshal::read_ptr(&self.bytes, self.field_offset(index, FieldKind::Pointer))
    }
}

impl std::fmt::Debug for StructView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructView").field("size", &self.bytes.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib_sys::{FILE_PATH_LIST, IMAGE, WAVE};

    #[test]
    fn accessors_compute_offsets_from_the_layout() {
        // Image: data pointer, width, height, mipmaps, format.
        let mut bytes = vec![0u8; IMAGE.size()];
        marshal::write_i32(&mut bytes, 8, 640);
        marshal::write_i32(&mut bytes, 12, 480);
        let view = StructView::new(bytes, &IMAGE);
        assert_eq!(view.i32_field(1), 640);
        assert_eq!(view.i32_field(2), 480);
        assert!(view.ptr_field(0).is_null());
    }

    #[test]
    fn u32_and_ptr_fields() {
        let mut bytes = vec![0u8; FILE_PATH_LIST.size()];
        marshal::write_u32(&mut bytes, 4, 3);
        bytes[8..16].copy_from_slice(&0x1000u64.to_le_bytes());
        let view = StructView::new(bytes, &FILE_PATH_LIST);
        assert_eq!(view.u32_field(1), 3);
        assert_eq!(view.ptr_field(2) as usize, 0x1000);
    }

    #[test]
    #[should_panic(expected = "does not match the struct layout")]
    fn size_mismatch_is_fatal() {
        StructView::new(vec![0u8; 3], &WAVE);
    }

    #[test]
    #[should_panic(expected = "accessed as")]
    fn kind_mismatch_is_fatal() {
        let view = StructView::new(vec![0u8; IMAGE.size()], &IMAGE);
        view.i32_field(0); // field 0 is the data pointer
    }
}
