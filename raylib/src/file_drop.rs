// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Dropped-file queries.
//!
//! `LoadDroppedFiles` returns a small header struct holding a count and a
//! pointer to a native `char *` array. The wrapper walks the array into
//! owned strings and then issues exactly one matching unload call; skipping
//! the unload would leak the native array on every query.

use raylib_sys::FILE_PATH_LIST;

use crate::api::CallArg;
use crate::marshal::read_cstring;
use crate::view::StructView;
use crate::Raylib;

impl Raylib {
    /// Check if a file has been dropped into the window.
    pub fn is_file_dropped(&self) -> bool {
        self.call_bool("IsFileDropped", &[])
    }

    /// Load dropped file paths, releasing the native list before returning.
    pub fn load_dropped_files(&self) -> Vec<String> {
        let list = StructView::new(self.call_struct("LoadDroppedFiles", &[]), &FILE_PATH_LIST);
        let count = list.u32_field(1) as usize;
        let paths = list.ptr_field(2).cast::<*const std::ffi::c_char>();

        let mut result = Vec::with_capacity(count);
        for index in 0..count {
            let entry = unsafe { *paths.add(index) };
            result.push(unsafe { read_cstring(entry) });
        }

        self.call_void("UnloadDroppedFiles", &[CallArg::Struct(list.bytes())]);
        result
    }
}
