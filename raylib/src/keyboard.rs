// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Keyboard polling.

use crate::api::CallArg;
use crate::Raylib;

/// Keyboard keys (US keyboard layout).
///
/// Discriminants are the native key codes. Use [`Raylib::get_key_pressed`]
/// to read raw codes when supporting alternative layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum KeyboardKey {
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Zero = 48,
    One = 49,
    Two = 50,
    Three = 51,
    Four = 52,
    Five = 53,
    Six = 54,
    Seven = 55,
    Eight = 56,
    Nine = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    Grave = 96,
    Space = 32,
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    KbMenu = 348,
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,
    /// Android back button.
    Back = 4,
    /// Android volume up button.
    VolumeUp = 24,
    /// Android volume down button.
    VolumeDown = 25,
}

impl Raylib {
    /// Check if a key has been pressed once.
    pub fn is_key_pressed(&self, key: KeyboardKey) -> bool {
        self.call_bool("IsKeyPressed", &[CallArg::I32(key as i32)])
    }

    /// Check if a key has been pressed again.
    pub fn is_key_pressed_repeat(&self, key: KeyboardKey) -> bool {
        self.call_bool("IsKeyPressedRepeat", &[CallArg::I32(key as i32)])
    }

    /// Check if a key is being pressed.
    pub fn is_key_down(&self, key: KeyboardKey) -> bool {
        self.call_bool("IsKeyDown", &[CallArg::I32(key as i32)])
    }

    /// Check if a key has been released once.
    pub fn is_key_released(&self, key: KeyboardKey) -> bool {
        self.call_bool("IsKeyReleased", &[CallArg::I32(key as i32)])
    }

    /// Check if a key is NOT being pressed.
    pub fn is_key_up(&self, key: KeyboardKey) -> bool {
        self.call_bool("IsKeyUp", &[CallArg::I32(key as i32)])
    }

    /// Get key pressed (keycode); call it multiple times for keys queued.
    /// Returns `None` when the queue is empty.
    pub fn get_key_pressed(&self) -> Option<i32> {
        match self.call_i32("GetKeyPressed", &[]) {
            0 => None,
            code => Some(code),
        }
    }

    /// Get char pressed (unicode); call it multiple times for chars queued.
    /// Returns `None` when the queue is empty.
    pub fn get_char_pressed(&self) -> Option<char> {
        match self.call_i32("GetCharPressed", &[]) {
            0 => None,
            code => char::from_u32(code as u32),
        }
    }

    /// Set a custom key to exit program (default is ESC).
    pub fn set_exit_key(&self, key: KeyboardKey) {
        self.call_void("SetExitKey", &[CallArg::I32(key as i32)]);
    }
}
