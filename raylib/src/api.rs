// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! The call boundary between wrapper operations and the native library.
//!
//! Every wrapper operation is a thin encode → invoke → decode forwarder:
//! arguments travel as [`CallArg`]s, results come back as a [`CallRet`].
//! [`Raylib`] owns the dispatch backend behind an `Arc` and is handed
//! explicitly to everything that needs to call the native library — there is
//! no module-level global, and tests substitute the backend with a fake via
//! [`Raylib::with_backend`].

use std::ffi::c_void;
use std::sync::Arc;

use crate::error::Result;
use crate::ffi::FfiBackend;
use crate::marshal;

/// One argument crossing the FFI boundary.
#[derive(Debug)]
pub enum CallArg<'a> {
    U8(u8),
    I8(i8),
    U32(u32),
    I32(i32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    /// Opaque pointer passed through as-is.
    Pointer(*mut c_void),
    /// Caller-owned bytes passed by pointer (C strings, sample data,
    /// packed point arrays).
    Buffer(&'a [u8]),
    /// Struct passed by value as its fixed-layout bytes.
    Struct(&'a [u8]),
}

/// One result crossing back over the FFI boundary.
#[derive(Debug)]
pub enum CallRet {
    Void,
    U8(u8),
    I32(i32),
    U32(u32),
    I64(i64),
    F32(f32),
    F64(f64),
    Pointer(*mut c_void),
    /// Struct returned by value as its fixed-layout bytes.
    Struct(Vec<u8>),
}

/// Dispatch of one native call by symbol name.
///
/// The production implementation resolves names through the generated symbol
/// table; tests inject recording fakes. Implementations treat an unknown
/// name or a signature mismatch as a programming-invariant violation and
/// panic rather than return an error — the generated table and the wrapper
/// layer are built from the same contract, so disagreement is a build
/// defect, not a runtime condition.
pub trait NativeCall: Send + Sync {
    fn invoke(&self, name: &'static str, args: &[CallArg<'_>]) -> CallRet;
}

/// Handle to a loaded raylib library.
///
/// Cheaply cloneable; resource handles store a clone so their operations
/// can dispatch without an extra parameter.
///
/// # Examples
///
/// ```no_run
/// use raylib::{config::get_raylib_path, Color, Raylib};
///
/// # fn main() -> Result<(), raylib::Error> {
/// let rl = Raylib::load(get_raylib_path())?;
/// rl.init_window(800, 600, "raylib");
/// while !rl.window_should_close() {
///     rl.begin_drawing();
///     rl.clear_background(Color::RAYWHITE);
///     rl.draw_text("Congrats! You created your first window!", 190, 200, 20, Color::LIGHTGRAY);
///     rl.end_drawing();
/// }
/// rl.close_window();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Raylib {
    call: Arc<dyn NativeCall>,
}

impl Raylib {
    /// Loads the raylib dynamic library and resolves every symbol in the
    /// generated table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LibLoading`] if the library cannot be opened
    /// and [`crate::Error::MissingSymbol`] if a table entry is absent from
    /// it (symbol table and library built from different headers).
    pub fn load<P: AsRef<std::ffi::OsStr>>(path: P) -> Result<Self> {
        Ok(Self { call: Arc::new(FfiBackend::load(path)?) })
    }

    /// Wraps an externally supplied dispatch backend.
    ///
    /// This is the substitution seam used by tests to run the marshaling
    /// layer against a fake symbol table.
    pub fn with_backend(backend: Arc<dyn NativeCall>) -> Self {
        Self { call: backend }
    }

    pub(crate) fn invoke(&self, name: &'static str, args: &[CallArg<'_>]) -> CallRet {
        self.call.invoke(name, args)
    }

    pub(crate) fn call_void(&self, name: &'static str, args: &[CallArg<'_>]) {
        match self.invoke(name, args) {
            CallRet::Void => (),
            other => panic!("{name}: expected void result, got {other:?}"),
        }
    }

    /// Converts the native boolean-as-byte convention with a nonzero test.
    pub(crate) fn call_bool(&self, name: &'static str, args: &[CallArg<'_>]) -> bool {
        match self.invoke(name, args) {
            CallRet::U8(byte) => byte != 0,
            other => panic!("{name}: expected byte result, got {other:?}"),
        }
    }

    pub(crate) fn call_i32(&self, name: &'static str, args: &[CallArg<'_>]) -> i32 {
        match self.invoke(name, args) {
            CallRet::I32(value) => value,
            other => panic!("{name}: expected i32 result, got {other:?}"),
        }
    }

    pub(crate) fn call_f32(&self, name: &'static str, args: &[CallArg<'_>]) -> f32 {
        match self.invoke(name, args) {
            CallRet::F32(value) => value,
            other => panic!("{name}: expected f32 result, got {other:?}"),
        }
    }

    pub(crate) fn call_f64(&self, name: &'static str, args: &[CallArg<'_>]) -> f64 {
        match self.invoke(name, args) {
            CallRet::F64(value) => value,
            other => panic!("{name}: expected f64 result, got {other:?}"),
        }
    }

    pub(crate) fn call_ptr(&self, name: &'static str, args: &[CallArg<'_>]) -> *mut c_void {
        match self.invoke(name, args) {
            CallRet::Pointer(ptr) => ptr,
            other => panic!("{name}: expected pointer result, got {other:?}"),
        }
    }

    pub(crate) fn call_struct(&self, name: &'static str, args: &[CallArg<'_>]) -> Vec<u8> {
        match self.invoke(name, args) {
            CallRet::Struct(bytes) => bytes,
            other => panic!("{name}: expected struct result, got {other:?}"),
        }
    }

    /// Calls a native returning `const char *` and copies it out.
    pub(crate) fn call_string(&self, name: &'static str, args: &[CallArg<'_>]) -> String {
        unsafe { marshal::read_cstring(self.call_ptr(name, args).cast()) }
    }
}

impl std::fmt::Debug for Raylib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raylib").finish_non_exhaustive()
    }
}
