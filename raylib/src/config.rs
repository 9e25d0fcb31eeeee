// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Runtime resolution of the raylib dynamic library path.
//!
//! This module provides the default library name per platform and an
//! environment override, used by examples and tests to locate the library.

/// Environment variable that overrides the library path.
pub const RAYLIB_PATH_ENV: &str = "RAYLIB_PATH";

/// Returns the path to the raylib dynamic library.
///
/// Checks the `RAYLIB_PATH` environment variable first, then falls back to
/// the platform's conventional library name, resolved through the normal
/// dynamic linker search path.
///
/// # Examples
///
/// ```no_run
/// use raylib::{config::get_raylib_path, Raylib};
///
/// # fn main() -> Result<(), raylib::Error> {
/// let rl = Raylib::load(get_raylib_path())?;
/// # Ok(())
/// # }
/// ```
pub fn get_raylib_path() -> std::path::PathBuf {
    if let Ok(path) = std::env::var(RAYLIB_PATH_ENV) {
        return path.into();
    }
    default_library_name().into()
}

/// The platform's conventional raylib library file name.
pub fn default_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "raylib.dll"
    } else if cfg!(target_os = "macos") {
        "libraylib.dylib"
    } else {
        "libraylib.so"
    }
}
