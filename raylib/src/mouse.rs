// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Mouse polling.

use crate::api::CallArg;
use crate::geom::Vector2;
use crate::Raylib;

/// Mouse buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
    Side = 3,
    Extra = 4,
    Forward = 5,
    Back = 6,
}

/// Mouse cursor shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum MouseCursor {
    #[default]
    Default = 0,
    Arrow = 1,
    IBeam = 2,
    Crosshair = 3,
    PointingHand = 4,
    ResizeEw = 5,
    ResizeNs = 6,
    ResizeNwse = 7,
    ResizeNesw = 8,
    ResizeAll = 9,
    NotAllowed = 10,
}

impl Raylib {
    /// Check if a mouse button has been pressed once.
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.call_bool("IsMouseButtonPressed", &[CallArg::I32(button as i32)])
    }

    /// Check if a mouse button is being pressed.
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.call_bool("IsMouseButtonDown", &[CallArg::I32(button as i32)])
    }

    /// Check if a mouse button has been released once.
    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        self.call_bool("IsMouseButtonReleased", &[CallArg::I32(button as i32)])
    }

    /// Check if a mouse button is NOT being pressed.
    pub fn is_mouse_button_up(&self, button: MouseButton) -> bool {
        self.call_bool("IsMouseButtonUp", &[CallArg::I32(button as i32)])
    }

    /// Get mouse position X.
    pub fn get_mouse_x(&self) -> i32 {
        self.call_i32("GetMouseX", &[])
    }

    /// Get mouse position Y.
    pub fn get_mouse_y(&self) -> i32 {
        self.call_i32("GetMouseY", &[])
    }

    /// Get mouse position XY.
    pub fn get_mouse_position(&self) -> Vector2 {
        Vector2::decode(&self.call_struct("GetMousePosition", &[]))
    }

    /// Get mouse delta between frames.
    pub fn get_mouse_delta(&self) -> Vector2 {
        Vector2::decode(&self.call_struct("GetMouseDelta", &[]))
    }

    /// Set mouse position XY.
    pub fn set_mouse_position(&self, x: i32, y: i32) {
        self.call_void("SetMousePosition", &[CallArg::I32(x), CallArg::I32(y)]);
    }

    /// Set mouse offset.
    pub fn set_mouse_offset(&self, offset_x: i32, offset_y: i32) {
        self.call_void("SetMouseOffset", &[CallArg::I32(offset_x), CallArg::I32(offset_y)]);
    }

    /// Set mouse scaling.
    pub fn set_mouse_scale(&self, scale_x: f32, scale_y: f32) {
        self.call_void("SetMouseScale", &[CallArg::F32(scale_x), CallArg::F32(scale_y)]);
    }

    /// Get mouse wheel movement for X or Y, whichever is larger.
    pub fn get_mouse_wheel_move(&self) -> f32 {
        self.call_f32("GetMouseWheelMove", &[])
    }

    /// Get mouse wheel movement for both X and Y.
    pub fn get_mouse_wheel_move_v(&self) -> Vector2 {
        Vector2::decode(&self.call_struct("GetMouseWheelMoveV", &[]))
    }

    /// Set mouse cursor shape.
    pub fn set_mouse_cursor(&self, cursor: MouseCursor) {
        self.call_void("SetMouseCursor", &[CallArg::I32(cursor as i32)]);
    }
}
