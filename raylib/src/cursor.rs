// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Cursor visibility and locking.

use crate::Raylib;

impl Raylib {
    /// Shows cursor.
    pub fn show_cursor(&self) {
        self.call_void("ShowCursor", &[]);
    }

    /// Hides cursor.
    pub fn hide_cursor(&self) {
        self.call_void("HideCursor", &[]);
    }

    /// Check if cursor is not visible.
    pub fn is_cursor_hidden(&self) -> bool {
        self.call_bool("IsCursorHidden", &[])
    }

    /// Enables cursor (unlock cursor).
    pub fn enable_cursor(&self) {
        self.call_void("EnableCursor", &[]);
    }

    /// Disables cursor (lock cursor).
    pub fn disable_cursor(&self) {
        self.call_void("DisableCursor", &[]);
    }

    /// Check if cursor is on the current screen.
    pub fn is_cursor_on_screen(&self) -> bool {
        self.call_bool("IsCursorOnScreen", &[])
    }
}
