// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading the raylib dynamic library.
//!
//! Errors only occur on the load path. Once the library is loaded and every
//! symbol resolved, native calls follow raylib's own convention: failures
//! are signaled by boolean or null-backed results, never by this error type.

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while loading the raylib library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dynamic library could not be opened.
    #[error("loading library: {0}")]
    LibLoading(#[from] libloading::Error),

    /// A function listed in the generated symbol table is missing from the
    /// loaded library. The table and the library were built from different
    /// header versions.
    #[error("symbol {name:?} not found in the loaded library")]
    MissingSymbol { name: &'static str },
}
