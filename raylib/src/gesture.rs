// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Gesture detection.

use bitflags::bitflags;

use crate::api::CallArg;
use crate::geom::Vector2;
use crate::Raylib;

bitflags! {
    /// Gestures that can be enabled or tested as a set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Gestures: u32 {
        const TAP = 1;
        const DOUBLETAP = 2;
        const HOLD = 4;
        const DRAG = 8;
        const SWIPE_RIGHT = 16;
        const SWIPE_LEFT = 32;
        const SWIPE_UP = 64;
        const SWIPE_DOWN = 128;
        const PINCH_IN = 256;
        const PINCH_OUT = 512;
    }
}

/// A single detected gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    None,
    Tap,
    DoubleTap,
    Hold,
    Drag,
    SwipeRight,
    SwipeLeft,
    SwipeUp,
    SwipeDown,
    PinchIn,
    PinchOut,
}

impl Gesture {
    fn to_flag(self) -> u32 {
        match self {
            Gesture::None => 0,
            Gesture::Tap => 1,
            Gesture::DoubleTap => 2,
            Gesture::Hold => 4,
            Gesture::Drag => 8,
            Gesture::SwipeRight => 16,
            Gesture::SwipeLeft => 32,
            Gesture::SwipeUp => 64,
            Gesture::SwipeDown => 128,
            Gesture::PinchIn => 256,
            Gesture::PinchOut => 512,
        }
    }

    fn from_native(value: i32) -> Self {
        match value {
            0 => Gesture::None,
            1 => Gesture::Tap,
            2 => Gesture::DoubleTap,
            4 => Gesture::Hold,
            8 => Gesture::Drag,
            16 => Gesture::SwipeRight,
            32 => Gesture::SwipeLeft,
            64 => Gesture::SwipeUp,
            128 => Gesture::SwipeDown,
            256 => Gesture::PinchIn,
            512 => Gesture::PinchOut,
            // The native library only ever reports the flag values above;
            // anything else is a contract violation.
            other => panic!("unknown gesture value {other}"),
        }
    }
}

impl Raylib {
    /// Enable a set of gestures using flags.
    pub fn set_gestures_enabled(&self, flags: Gestures) {
        self.call_void("SetGesturesEnabled", &[CallArg::U32(flags.bits())]);
    }

    /// Check if a gesture has been detected.
    pub fn is_gesture_detected(&self, gesture: Gesture) -> bool {
        self.call_bool("IsGestureDetected", &[CallArg::U32(gesture.to_flag())])
    }

    /// Get latest detected gesture.
    pub fn get_gesture_detected(&self) -> Gesture {
        Gesture::from_native(self.call_i32("GetGestureDetected", &[]))
    }

    /// Get gesture hold time in milliseconds.
    pub fn get_gesture_hold_duration(&self) -> f32 {
        self.call_f32("GetGestureHoldDuration", &[])
    }

    /// Get gesture drag vector.
    pub fn get_gesture_drag_vector(&self) -> Vector2 {
        Vector2::decode(&self.call_struct("GetGestureDragVector", &[]))
    }

    /// Get gesture drag angle.
    pub fn get_gesture_drag_angle(&self) -> f32 {
        self.call_f32("GetGestureDragAngle", &[])
    }

    /// Get gesture pinch delta.
    pub fn get_gesture_pinch_vector(&self) -> Vector2 {
        Vector2::decode(&self.call_struct("GetGesturePinchVector", &[]))
    }

    /// Get gesture pinch angle.
    pub fn get_gesture_pinch_angle(&self) -> f32 {
        self.call_f32("GetGesturePinchAngle", &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_flags_round_trip() {
        for gesture in [
            Gesture::Tap,
            Gesture::DoubleTap,
            Gesture::Hold,
            Gesture::Drag,
            Gesture::SwipeRight,
            Gesture::SwipeLeft,
            Gesture::SwipeUp,
            Gesture::SwipeDown,
            Gesture::PinchIn,
            Gesture::PinchOut,
        ] {
            assert_eq!(Gesture::from_native(gesture.to_flag() as i32), gesture);
        }
    }

    #[test]
    #[should_panic(expected = "unknown gesture value")]
    fn unknown_gesture_value_is_fatal() {
        Gesture::from_native(3);
    }
}
