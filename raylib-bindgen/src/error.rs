// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for the binding generator.

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can abort a generation run.
///
/// The generator fails loudly: a header that does not match the expected
/// line layout, or a declaration using a type missing from the
/// classification table, stops the run instead of emitting a malformed
/// symbol table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the header or writing the output failed.
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The header is shorter than one of the hard-coded line indices.
    #[error("header line {0} is out of range; the header layout has changed")]
    MissingLine(usize),

    /// A scanned line did not have the expected token shape.
    #[error("malformed declaration at header line {line}: {detail}")]
    Malformed { line: usize, detail: String },

    /// A color table channel token was not a decimal 0-255 value.
    #[error("bad color channel {token:?} at header line {line}")]
    BadChannel { line: usize, token: String },

    /// A parameter or return type has no entry in the type classification
    /// table. Emitting an undefined kind would only surface later as a
    /// malformed call, so the run aborts here.
    #[error("unclassified type {ty:?} at header line {line}")]
    UnknownType { line: usize, ty: String },
}
