// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Gamepad polling.

use crate::api::CallArg;
use crate::marshal::encode_text;
use crate::Raylib;

impl Raylib {
    /// Check if a gamepad is available.
    pub fn is_gamepad_available(&self, gamepad: i32) -> bool {
        self.call_bool("IsGamepadAvailable", &[CallArg::I32(gamepad)])
    }

    /// Get gamepad internal name id.
    pub fn get_gamepad_name(&self, gamepad: i32) -> String {
        self.call_string("GetGamepadName", &[CallArg::I32(gamepad)])
    }

    /// Check if a gamepad button has been pressed once.
    pub fn is_gamepad_button_pressed(&self, gamepad: i32, button: i32) -> bool {
        self.call_bool("IsGamepadButtonPressed", &[CallArg::I32(gamepad), CallArg::I32(button)])
    }

    /// Check if a gamepad button is being pressed.
    pub fn is_gamepad_button_down(&self, gamepad: i32, button: i32) -> bool {
        self.call_bool("IsGamepadButtonDown", &[CallArg::I32(gamepad), CallArg::I32(button)])
    }

    /// Check if a gamepad button has been released once.
    pub fn is_gamepad_button_released(&self, gamepad: i32, button: i32) -> bool {
        self.call_bool("IsGamepadButtonReleased", &[CallArg::I32(gamepad), CallArg::I32(button)])
    }

    /// Check if a gamepad button is NOT being pressed.
    pub fn is_gamepad_button_up(&self, gamepad: i32, button: i32) -> bool {
        self.call_bool("IsGamepadButtonUp", &[CallArg::I32(gamepad), CallArg::I32(button)])
    }

    /// Get the last gamepad button pressed.
    pub fn get_gamepad_button_pressed(&self) -> i32 {
        self.call_i32("GetGamepadButtonPressed", &[])
    }

    /// Get gamepad axis count for a gamepad.
    pub fn get_gamepad_axis_count(&self, gamepad: i32) -> i32 {
        self.call_i32("GetGamepadAxisCount", &[CallArg::I32(gamepad)])
    }

    /// Get axis movement value for a gamepad axis.
    pub fn get_gamepad_axis_movement(&self, gamepad: i32, axis: i32) -> f32 {
        self.call_f32("GetGamepadAxisMovement", &[CallArg::I32(gamepad), CallArg::I32(axis)])
    }

    /// Set internal gamepad mappings (SDL_GameControllerDB).
    pub fn set_gamepad_mappings(&self, mappings: &str) -> i32 {
        let mappings = encode_text(mappings);
        self.call_i32("SetGamepadMappings", &[CallArg::Buffer(&mappings)])
    }
}
