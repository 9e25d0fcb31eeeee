// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Touch polling.

use crate::api::CallArg;
use crate::geom::Vector2;
use crate::Raylib;

impl Raylib {
    /// Get touch position X for touch point 0 (relative to screen size).
    pub fn get_touch_x(&self) -> i32 {
        self.call_i32("GetTouchX", &[])
    }

    /// Get touch position Y for touch point 0 (relative to screen size).
    pub fn get_touch_y(&self) -> i32 {
        self.call_i32("GetTouchY", &[])
    }

    /// Get touch position XY for a touch point index (relative to screen
    /// size).
    pub fn get_touch_position(&self, index: i32) -> Vector2 {
        Vector2::decode(&self.call_struct("GetTouchPosition", &[CallArg::I32(index)]))
    }

    /// Get touch point identifier for given index.
    pub fn get_touch_point_id(&self, index: i32) -> i32 {
        self.call_i32("GetTouchPointId", &[CallArg::I32(index)])
    }

    /// Get number of touch points.
    pub fn get_touch_point_count(&self) -> i32 {
        self.call_i32("GetTouchPointCount", &[])
    }
}
