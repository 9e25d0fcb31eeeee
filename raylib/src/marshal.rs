// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Byte-level marshaling primitives.
//!
//! The byte order is pinned little-endian for the whole crate: every field
//! that crosses the FFI boundary goes through these helpers. Call sites must
//! never fall back to platform-default ordering, since mixing conventions
//! silently corrupts decoded values on big-endian hosts.

/// Reads a little-endian `f32` at `offset`.
pub(crate) fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes(bytes[offset..offset + 4].try_into().expect("4-byte slice"))
}

/// Reads a little-endian `i32` at `offset`.
pub(crate) fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(bytes[offset..offset + 4].try_into().expect("4-byte slice"))
}

/// Reads a little-endian `u32` at `offset`.
pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().expect("4-byte slice"))
}

/// Reads a little-endian `u64` at `offset`.
pub(crate) fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(bytes[offset..offset + 8].try_into().expect("8-byte slice"))
}

/// Reads a pointer stored little-endian at `offset`.
pub(crate) fn read_ptr(bytes: &[u8], offset: usize) -> *mut std::ffi::c_void {
    read_u64(bytes, offset) as usize as *mut std::ffi::c_void
}

/// Writes a little-endian `f32` at `offset`.
pub(crate) fn write_f32(bytes: &mut [u8], offset: usize, value: f32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Writes a little-endian `i32` at `offset`.
pub(crate) fn write_i32(bytes: &mut [u8], offset: usize, value: i32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Writes a little-endian `u32` at `offset`.
pub(crate) fn write_u32(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Encodes text as the NUL-terminated byte buffer every native string
/// parameter expects.
pub(crate) fn encode_text(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(0);
    bytes
}

/// Reads a NUL-terminated native string into an owned `String`.
///
/// Returns an empty string for a null pointer, matching raylib's convention
/// of returning NULL for "no value" (e.g. an unplugged gamepad's name).
///
/// # Safety
///
/// `ptr`, if non-null, must point to a valid NUL-terminated C string.
pub(crate) unsafe fn read_cstring(ptr: *const std::ffi::c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { std::ffi::CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Packs 2-component points into one contiguous little-endian `f32` buffer,
/// interleaved x,y,x,y,... — the in-memory shape of a native `Vector2[]`.
///
/// The result is exactly `8 * points.len()` bytes and is allocated fresh on
/// every call; nothing is reused between calls.
pub(crate) fn pack_vector2s(points: &[crate::geom::Vector2]) -> Vec<u8> {
    let mut bytes = vec![0u8; points.len() * 8];
    for (index, point) in points.iter().enumerate() {
        write_f32(&mut bytes, index * 8, point.x);
        write_f32(&mut bytes, index * 8 + 4, point.y);
    }
    bytes
}

/// Packs 3-component points the same way, 12 bytes per point.
pub(crate) fn pack_vector3s(points: &[crate::geom::Vector3]) -> Vec<u8> {
    let mut bytes = vec![0u8; points.len() * 12];
    for (index, point) in points.iter().enumerate() {
        write_f32(&mut bytes, index * 12, point.x);
        write_f32(&mut bytes, index * 12 + 4, point.y);
        write_f32(&mut bytes, index * 12 + 8, point.z);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Vector2, Vector3};

    #[test]
    fn primitive_round_trips_are_little_endian() {
        let mut bytes = [0u8; 8];
        write_i32(&mut bytes, 0, -2);
        assert_eq!(bytes[..4], [0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(read_i32(&bytes, 0), -2);

        write_u32(&mut bytes, 4, 0x0102_0304);
        assert_eq!(bytes[4..], [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(read_u32(&bytes, 4), 0x0102_0304);

        write_f32(&mut bytes, 0, 1.5);
        assert_eq!(read_f32(&bytes, 0), 1.5);
    }

    #[test]
    fn text_is_nul_terminated() {
        assert_eq!(encode_text("abc"), b"abc\0");
        assert_eq!(encode_text(""), b"\0");
    }

    #[test]
    fn cstring_of_null_is_empty() {
        assert_eq!(unsafe { read_cstring(std::ptr::null()) }, "");
    }

    // Packed buffer is exactly 8n bytes with x at 8i and y at 8i+4.
    #[test]
    fn vector2_packing_layout() {
        let points = [Vector2::new(1.0, 2.0), Vector2::new(-3.5, 4.25), Vector2::new(0.0, 0.0)];
        let bytes = pack_vector2s(&points);
        assert_eq!(bytes.len(), 24);
        for (index, point) in points.iter().enumerate() {
            assert_eq!(read_f32(&bytes, index * 8), point.x);
            assert_eq!(read_f32(&bytes, index * 8 + 4), point.y);
        }
    }

    #[test]
    fn vector2_packing_empty() {
        assert!(pack_vector2s(&[]).is_empty());
    }

    #[test]
    fn vector3_packing_layout() {
        let points = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
        let bytes = pack_vector3s(&points);
        assert_eq!(bytes.len(), 24);
        assert_eq!(read_f32(&bytes, 12), 4.0);
        assert_eq!(read_f32(&bytes, 20), 6.0);
    }
}
