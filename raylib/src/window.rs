// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Window and monitor related operations.

use bitflags::bitflags;

use crate::api::CallArg;
use crate::geom::Vector2;
use crate::image::Image;
use crate::marshal::encode_text;
use crate::Raylib;

bitflags! {
    /// System/window config flags. By default all flags are off.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct WindowFlags: u32 {
        /// Set to try enabling V-Sync on GPU.
        const VSYNC_HINT = 0x0000_0040;
        /// Set to run program in fullscreen.
        const FULLSCREEN_MODE = 0x0000_0002;
        /// Set to allow resizable window.
        const WINDOW_RESIZABLE = 0x0000_0004;
        /// Set to disable window decoration (frame and buttons).
        const WINDOW_UNDECORATED = 0x0000_0008;
        /// Set to hide window.
        const WINDOW_HIDDEN = 0x0000_0080;
        /// Set to minimize window (iconify).
        const WINDOW_MINIMIZED = 0x0000_0200;
        /// Set to maximize window (expanded to monitor).
        const WINDOW_MAXIMIZED = 0x0000_0400;
        /// Set to window non focused.
        const WINDOW_UNFOCUSED = 0x0000_0800;
        /// Set to window always on top.
        const WINDOW_TOPMOST = 0x0000_1000;
        /// Set to allow windows running while minimized.
        const WINDOW_ALWAYS_RUN = 0x0000_0100;
        /// Set to allow transparent framebuffer.
        const WINDOW_TRANSPARENT = 0x0000_0010;
        /// Set to support HighDPI.
        const WINDOW_HIGHDPI = 0x0000_2000;
        /// Set to support mouse passthrough, only supported with
        /// `WINDOW_UNDECORATED`.
        const WINDOW_MOUSE_PASSTHROUGH = 0x0000_4000;
        /// Set to run program in borderless windowed mode.
        const BORDERLESS_WINDOWED_MODE = 0x0000_8000;
        /// Set to try enabling MSAA 4X.
        const MSAA_4X_HINT = 0x0000_0020;
        /// Set to try enabling interlaced video format (for V3D).
        const INTERLACED_HINT = 0x0001_0000;
    }
}

impl Raylib {
    /// Initialize window and OpenGL context.
    pub fn init_window(&self, width: i32, height: i32, title: &str) {
        let title = encode_text(title);
        self.call_void(
            "InitWindow",
            &[CallArg::I32(width), CallArg::I32(height), CallArg::Buffer(&title)],
        );
    }

    /// Close window and unload OpenGL context.
    pub fn close_window(&self) {
        self.call_void("CloseWindow", &[]);
    }

    /// Check if application should close (KEY_ESCAPE pressed or windows
    /// close icon clicked).
    pub fn window_should_close(&self) -> bool {
        self.call_bool("WindowShouldClose", &[])
    }

    /// Check if window has been initialized successfully.
    pub fn is_window_ready(&self) -> bool {
        self.call_bool("IsWindowReady", &[])
    }

    /// Check if window is currently fullscreen.
    pub fn is_window_fullscreen(&self) -> bool {
        self.call_bool("IsWindowFullscreen", &[])
    }

    /// Check if window is currently hidden.
    pub fn is_window_hidden(&self) -> bool {
        self.call_bool("IsWindowHidden", &[])
    }

    /// Check if window is currently minimized.
    pub fn is_window_minimized(&self) -> bool {
        self.call_bool("IsWindowMinimized", &[])
    }

    /// Check if window is currently maximized.
    pub fn is_window_maximized(&self) -> bool {
        self.call_bool("IsWindowMaximized", &[])
    }

    /// Check if window is currently focused.
    pub fn is_window_focused(&self) -> bool {
        self.call_bool("IsWindowFocused", &[])
    }

    /// Check if window has been resized last frame.
    pub fn is_window_resized(&self) -> bool {
        self.call_bool("IsWindowResized", &[])
    }

    /// Check if specific window flags are enabled.
    pub fn is_window_state(&self, flags: WindowFlags) -> bool {
        self.call_bool("IsWindowState", &[CallArg::U32(flags.bits())])
    }

    /// Set window configuration state using flags.
    pub fn set_window_state(&self, flags: WindowFlags) {
        self.call_void("SetWindowState", &[CallArg::U32(flags.bits())]);
    }

    /// Clear window configuration state flags.
    pub fn clear_window_state(&self, flags: WindowFlags) {
        self.call_void("ClearWindowState", &[CallArg::U32(flags.bits())]);
    }

    /// Toggle window state: fullscreen/windowed.
    pub fn toggle_fullscreen(&self) {
        self.call_void("ToggleFullscreen", &[]);
    }

    /// Toggle window state: borderless windowed.
    pub fn toggle_borderless_windowed(&self) {
        self.call_void("ToggleBorderlessWindowed", &[]);
    }

    /// Set window state: maximized, if resizable.
    pub fn maximize_window(&self) {
        self.call_void("MaximizeWindow", &[]);
    }

    /// Set window state: minimized, if resizable.
    pub fn minimize_window(&self) {
        self.call_void("MinimizeWindow", &[]);
    }

    /// Set window state: not minimized/maximized.
    pub fn restore_window(&self) {
        self.call_void("RestoreWindow", &[]);
    }

    /// Set icon for window (single image, RGBA 32bit).
    pub fn set_window_icon(&self, image: &Image) {
        self.call_void("SetWindowIcon", &[CallArg::Struct(image.bytes())]);
    }

    /// Set title for window.
    pub fn set_window_title(&self, title: &str) {
        let title = encode_text(title);
        self.call_void("SetWindowTitle", &[CallArg::Buffer(&title)]);
    }

    /// Set window position on screen.
    pub fn set_window_position(&self, x: i32, y: i32) {
        self.call_void("SetWindowPosition", &[CallArg::I32(x), CallArg::I32(y)]);
    }

    /// Set monitor for the current window.
    pub fn set_window_monitor(&self, monitor: i32) {
        self.call_void("SetWindowMonitor", &[CallArg::I32(monitor)]);
    }

    /// Set window minimum dimensions (for resizable windows).
    pub fn set_window_min_size(&self, width: i32, height: i32) {
        self.call_void("SetWindowMinSize", &[CallArg::I32(width), CallArg::I32(height)]);
    }

    /// Set window maximum dimensions (for resizable windows).
    pub fn set_window_max_size(&self, width: i32, height: i32) {
        self.call_void("SetWindowMaxSize", &[CallArg::I32(width), CallArg::I32(height)]);
    }

    /// Set window dimensions.
    pub fn set_window_size(&self, width: i32, height: i32) {
        self.call_void("SetWindowSize", &[CallArg::I32(width), CallArg::I32(height)]);
    }

    /// Set window opacity [0.0..1.0].
    pub fn set_window_opacity(&self, opacity: f32) {
        self.call_void("SetWindowOpacity", &[CallArg::F32(opacity)]);
    }

    /// Set window focused.
    pub fn set_window_focused(&self) {
        self.call_void("SetWindowFocused", &[]);
    }

    /// Get native window handle. Treat as opaque.
    pub fn get_window_handle(&self) -> *mut std::ffi::c_void {
        self.call_ptr("GetWindowHandle", &[])
    }

    /// Get current screen width.
    pub fn get_screen_width(&self) -> i32 {
        self.call_i32("GetScreenWidth", &[])
    }

    /// Get current screen height.
    pub fn get_screen_height(&self) -> i32 {
        self.call_i32("GetScreenHeight", &[])
    }

    /// Get current render width (it considers HiDPI).
    pub fn get_render_width(&self) -> i32 {
        self.call_i32("GetRenderWidth", &[])
    }

    /// Get current render height (it considers HiDPI).
    pub fn get_render_height(&self) -> i32 {
        self.call_i32("GetRenderHeight", &[])
    }

    /// Get number of connected monitors.
    pub fn get_monitor_count(&self) -> i32 {
        self.call_i32("GetMonitorCount", &[])
    }

    /// Get the currently connected monitor.
    pub fn get_current_monitor(&self) -> Monitor {
        Monitor { rl: self.clone(), id: self.call_i32("GetCurrentMonitor", &[]) }
    }

    /// Get a monitor by index (0 .. [`Self::get_monitor_count`]).
    pub fn get_monitor(&self, id: i32) -> Monitor {
        Monitor { rl: self.clone(), id }
    }

    /// Get window position XY on monitor.
    pub fn get_window_position(&self) -> Vector2 {
        Vector2::decode(&self.call_struct("GetWindowPosition", &[]))
    }

    /// Get window scale DPI factor.
    pub fn get_window_scale_dpi(&self) -> Vector2 {
        Vector2::decode(&self.call_struct("GetWindowScaleDPI", &[]))
    }

    /// Set clipboard text content.
    pub fn set_clipboard_text(&self, text: &str) {
        let text = encode_text(text);
        self.call_void("SetClipboardText", &[CallArg::Buffer(&text)]);
    }

    /// Get clipboard text content.
    pub fn get_clipboard_text(&self) -> String {
        self.call_string("GetClipboardText", &[])
    }

    /// Enable waiting for events on end_drawing(), no automatic event
    /// polling.
    pub fn enable_event_waiting(&self) {
        self.call_void("EnableEventWaiting", &[]);
    }

    /// Disable waiting for events on end_drawing(), resume automatic event
    /// polling.
    pub fn disable_event_waiting(&self) {
        self.call_void("DisableEventWaiting", &[]);
    }
}

/// One connected monitor, addressed by index.
#[derive(Clone, Debug)]
pub struct Monitor {
    rl: Raylib,
    id: i32,
}

impl Monitor {
    /// Monitor index as reported by the native library.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Get monitor position.
    pub fn position(&self) -> Vector2 {
        Vector2::decode(&self.rl.call_struct("GetMonitorPosition", &[CallArg::I32(self.id)]))
    }

    /// Get monitor width (current video mode used by monitor).
    pub fn width(&self) -> i32 {
        self.rl.call_i32("GetMonitorWidth", &[CallArg::I32(self.id)])
    }

    /// Get monitor height (current video mode used by monitor).
    pub fn height(&self) -> i32 {
        self.rl.call_i32("GetMonitorHeight", &[CallArg::I32(self.id)])
    }

    /// Get monitor physical width in millimetres.
    pub fn physical_width(&self) -> i32 {
        self.rl.call_i32("GetMonitorPhysicalWidth", &[CallArg::I32(self.id)])
    }

    /// Get monitor physical height in millimetres.
    pub fn physical_height(&self) -> i32 {
        self.rl.call_i32("GetMonitorPhysicalHeight", &[CallArg::I32(self.id)])
    }

    /// Get monitor refresh rate.
    pub fn refresh_rate(&self) -> i32 {
        self.rl.call_i32("GetMonitorRefreshRate", &[CallArg::I32(self.id)])
    }

    /// Get the human-readable, UTF-8 encoded name of the monitor.
    pub fn name(&self) -> String {
        self.rl.call_string("GetMonitorName", &[CallArg::I32(self.id)])
    }
}
