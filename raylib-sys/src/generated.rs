// This file is generated by raylib-bindgen. Do not edit by hand.

//! Generated constants, layout tables and symbol table scraped from `raylib.h`.

use crate::{FieldKind as F, FnSig, StructLayout, Symbol, ValueKind as K};

// --- Version constants ---
pub const RAYLIB_VERSION_MAJOR: i32 = 5;
pub const RAYLIB_VERSION_MINOR: i32 = 0;
pub const RAYLIB_VERSION_PATCH: i32 = 0;
pub const RAYLIB_VERSION: &str = "5.0";

// --- Color constants (packed blue-green-red-alpha) ---
pub mod colors {
    pub const LIGHTGRAY: [u8; 4] = [200, 200, 200, 255];
    pub const GRAY: [u8; 4] = [130, 130, 130, 255];
    pub const DARKGRAY: [u8; 4] = [80, 80, 80, 255];
    pub const YELLOW: [u8; 4] = [0, 249, 253, 255];
    pub const GOLD: [u8; 4] = [0, 203, 255, 255];
    pub const ORANGE: [u8; 4] = [0, 161, 255, 255];
    pub const PINK: [u8; 4] = [194, 109, 255, 255];
    pub const RED: [u8; 4] = [55, 41, 230, 255];
    pub const MAROON: [u8; 4] = [55, 33, 190, 255];
    pub const GREEN: [u8; 4] = [48, 228, 0, 255];
    pub const LIME: [u8; 4] = [47, 158, 0, 255];
    pub const DARKGREEN: [u8; 4] = [44, 117, 0, 255];
    pub const SKYBLUE: [u8; 4] = [255, 191, 102, 255];
    pub const BLUE: [u8; 4] = [241, 121, 0, 255];
    pub const DARKBLUE: [u8; 4] = [172, 82, 0, 255];
    pub const PURPLE: [u8; 4] = [255, 122, 200, 255];
    pub const VIOLET: [u8; 4] = [190, 60, 135, 255];
    pub const DARKPURPLE: [u8; 4] = [126, 31, 112, 255];
    pub const BEIGE: [u8; 4] = [131, 176, 211, 255];
    pub const BROWN: [u8; 4] = [79, 106, 127, 255];
    pub const DARKBROWN: [u8; 4] = [47, 63, 76, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const BLANK: [u8; 4] = [0, 0, 0, 0];
    pub const MAGENTA: [u8; 4] = [255, 0, 255, 255];
    pub const RAYWHITE: [u8; 4] = [245, 245, 245, 255];
}

// --- Struct layout tables ---
pub const VECTOR2: StructLayout = StructLayout { fields: &[F::F32; 2] };
pub const VECTOR3: StructLayout = StructLayout { fields: &[F::F32; 3] };
pub const VECTOR4: StructLayout = StructLayout { fields: &[F::F32; 4] };
pub const MATRIX: StructLayout = StructLayout { fields: &[F::F32; 16] };
pub const COLOR: StructLayout = StructLayout { fields: &[F::U8; 4] };
pub const RECTANGLE: StructLayout = StructLayout { fields: &[F::F32; 4] };
pub const IMAGE: StructLayout = StructLayout { fields: &[F::Pointer, F::I32, F::I32, F::I32, F::I32] };
pub const TEXTURE2D: StructLayout = StructLayout { fields: &[F::U32, F::I32, F::I32, F::I32, F::I32] };
pub const RENDER_TEXTURE2D: StructLayout = StructLayout { fields: &[F::U32, F::U32, F::I32, F::I32, F::I32, F::I32, F::U32, F::I32, F::I32, F::I32, F::I32] };
pub const NPATCH_INFO: StructLayout = StructLayout { fields: &[F::F32, F::F32, F::F32, F::F32, F::I32, F::I32, F::I32, F::I32, F::I32] };
pub const GLYPH_INFO: StructLayout = StructLayout { fields: &[F::I32, F::I32, F::I32, F::I32, F::Pointer, F::I32, F::I32, F::I32, F::I32] };
pub const FONT: StructLayout = StructLayout { fields: &[F::I32, F::I32, F::I32, F::U32, F::I32, F::I32, F::I32, F::I32, F::Pointer, F::Pointer] };
pub const CAMERA3D: StructLayout = StructLayout { fields: &[F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::I32] };
pub const CAMERA2D: StructLayout = StructLayout { fields: &[F::F32; 6] };
pub const MESH: StructLayout = StructLayout { fields: &[F::I32, F::I32, F::Pointer, F::Pointer, F::Pointer, F::Pointer, F::Pointer, F::Pointer, F::Pointer, F::Pointer, F::Pointer, F::Pointer, F::Pointer, F::U32, F::U32, F::Pointer] };
pub const SHADER: StructLayout = StructLayout { fields: &[F::U32, F::U32, F::Pointer] };
pub const MATERIAL: StructLayout = StructLayout { fields: &[F::U32, F::U32, F::Pointer, F::Pointer, F::F32, F::F32, F::F32, F::F32] };
pub const MODEL: StructLayout = StructLayout { fields: &[F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::I32, F::I32, F::Pointer, F::Pointer, F::Pointer, F::I32, F::U32, F::Pointer, F::Pointer] };
pub const MODEL_ANIMATION: StructLayout = StructLayout { fields: &[F::I32, F::I32, F::Pointer, F::Pointer, F::U64, F::U64, F::U64, F::U64] };
pub const RAY: StructLayout = StructLayout { fields: &[F::F32; 6] };
pub const RAY_COLLISION: StructLayout = StructLayout { fields: &[F::U32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32] };
pub const BOUNDING_BOX: StructLayout = StructLayout { fields: &[F::F32; 6] };
pub const WAVE: StructLayout = StructLayout { fields: &[F::U32, F::U32, F::U32, F::U32, F::Pointer] };
pub const AUDIO_STREAM: StructLayout = StructLayout { fields: &[F::Pointer, F::Pointer, F::U32, F::U32, F::U32, F::U32] };
pub const SOUND: StructLayout = StructLayout { fields: &[F::Pointer, F::Pointer, F::U32, F::U32, F::U32, F::U32, F::U32, F::U32] };
pub const MUSIC: StructLayout = StructLayout { fields: &[F::Pointer, F::Pointer, F::U32, F::U32, F::U32, F::U32, F::U32, F::U8, F::U8, F::U8, F::U8, F::I32, F::U32, F::Pointer] };
pub const VR_DEVICE_INFO: StructLayout = StructLayout { fields: &[F::I32, F::I32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32, F::F32] };
pub const VR_STEREO_CONFIG: StructLayout = StructLayout { fields: &[F::F32; 76] };
pub const FILE_PATH_LIST: StructLayout = StructLayout { fields: &[F::U32, F::U32, F::Pointer] };
pub const AUTOMATION_EVENT: StructLayout = StructLayout { fields: &[F::U32, F::U32, F::I32, F::I32, F::I32, F::I32] };
pub const AUTOMATION_EVENT_LIST: StructLayout = StructLayout { fields: &[F::U32, F::U32, F::Pointer] };

// --- Symbol table ---
pub static SYMBOLS: &[Symbol] = &[
    // Initialize window and OpenGL context
    Symbol { name: "InitWindow", sig: FnSig { params: &[K::I32, K::I32, K::Buffer], ret: K::Void } },
    // Close window and unload OpenGL context
    Symbol { name: "CloseWindow", sig: FnSig { params: &[], ret: K::Void } },
    // Check if application should close (KEY_ESCAPE pressed or windows close icon clicked)
    Symbol { name: "WindowShouldClose", sig: FnSig { params: &[], ret: K::U8 } },
    // Check if window has been initialized successfully
    Symbol { name: "IsWindowReady", sig: FnSig { params: &[], ret: K::U8 } },
    // Check if window is currently fullscreen
    Symbol { name: "IsWindowFullscreen", sig: FnSig { params: &[], ret: K::U8 } },
    // Check if window is currently hidden (only PLATFORM_DESKTOP)
    Symbol { name: "IsWindowHidden", sig: FnSig { params: &[], ret: K::U8 } },
    // Check if window is currently minimized (only PLATFORM_DESKTOP)
    Symbol { name: "IsWindowMinimized", sig: FnSig { params: &[], ret: K::U8 } },
    // Check if window is currently maximized (only PLATFORM_DESKTOP)
    Symbol { name: "IsWindowMaximized", sig: FnSig { params: &[], ret: K::U8 } },
    // Check if window is currently focused (only PLATFORM_DESKTOP)
    Symbol { name: "IsWindowFocused", sig: FnSig { params: &[], ret: K::U8 } },
    // Check if window has been resized last frame
    Symbol { name: "IsWindowResized", sig: FnSig { params: &[], ret: K::U8 } },
    // Check if one specific window flag is enabled
    Symbol { name: "IsWindowState", sig: FnSig { params: &[K::U32], ret: K::U8 } },
    // Set window configuration state using flags (only PLATFORM_DESKTOP)
    Symbol { name: "SetWindowState", sig: FnSig { params: &[K::U32], ret: K::Void } },
    // Clear window configuration state flags
    Symbol { name: "ClearWindowState", sig: FnSig { params: &[K::U32], ret: K::Void } },
    // Toggle window state: fullscreen/windowed (only PLATFORM_DESKTOP)
    Symbol { name: "ToggleFullscreen", sig: FnSig { params: &[], ret: K::Void } },
    // Toggle window state: borderless windowed (only PLATFORM_DESKTOP)
    Symbol { name: "ToggleBorderlessWindowed", sig: FnSig { params: &[], ret: K::Void } },
    // Set window state: maximized, if resizable (only PLATFORM_DESKTOP)
    Symbol { name: "MaximizeWindow", sig: FnSig { params: &[], ret: K::Void } },
    // Set window state: minimized, if resizable (only PLATFORM_DESKTOP)
    Symbol { name: "MinimizeWindow", sig: FnSig { params: &[], ret: K::Void } },
    // Set window state: not minimized/maximized (only PLATFORM_DESKTOP)
    Symbol { name: "RestoreWindow", sig: FnSig { params: &[], ret: K::Void } },
    // Set icon for window (single image, RGBA 32bit, only PLATFORM_DESKTOP)
    Symbol { name: "SetWindowIcon", sig: FnSig { params: &[K::Struct(&IMAGE)], ret: K::Void } },
    // Set icon for window (multiple images, RGBA 32bit, only PLATFORM_DESKTOP)
    Symbol { name: "SetWindowIcons", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Void } },
    // Set title for window (only PLATFORM_DESKTOP and PLATFORM_WEB)
    Symbol { name: "SetWindowTitle", sig: FnSig { params: &[K::Buffer], ret: K::Void } },
    // Set window position on screen (only PLATFORM_DESKTOP)
    Symbol { name: "SetWindowPosition", sig: FnSig { params: &[K::I32, K::I32], ret: K::Void } },
    // Set monitor for the current window
    Symbol { name: "SetWindowMonitor", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // Set window minimum dimensions (for FLAG_WINDOW_RESIZABLE)
    Symbol { name: "SetWindowMinSize", sig: FnSig { params: &[K::I32, K::I32], ret: K::Void } },
    // Set window maximum dimensions (for FLAG_WINDOW_RESIZABLE)
    Symbol { name: "SetWindowMaxSize", sig: FnSig { params: &[K::I32, K::I32], ret: K::Void } },
    // Set window dimensions
    Symbol { name: "SetWindowSize", sig: FnSig { params: &[K::I32, K::I32], ret: K::Void } },
    // Set window opacity [0.0f..1.0f] (only PLATFORM_DESKTOP)
    Symbol { name: "SetWindowOpacity", sig: FnSig { params: &[K::F32], ret: K::Void } },
    // Set window focused (only PLATFORM_DESKTOP)
    Symbol { name: "SetWindowFocused", sig: FnSig { params: &[], ret: K::Void } },
    // Get native window handle
    Symbol { name: "GetWindowHandle", sig: FnSig { params: &[], ret: K::Pointer } },
    // Get current screen width
    Symbol { name: "GetScreenWidth", sig: FnSig { params: &[], ret: K::I32 } },
    // Get current screen height
    Symbol { name: "GetScreenHeight", sig: FnSig { params: &[], ret: K::I32 } },
    // Get current render width (it considers HiDPI)
    Symbol { name: "GetRenderWidth", sig: FnSig { params: &[], ret: K::I32 } },
    // Get current render height (it considers HiDPI)
    Symbol { name: "GetRenderHeight", sig: FnSig { params: &[], ret: K::I32 } },
    // Get number of connected monitors
    Symbol { name: "GetMonitorCount", sig: FnSig { params: &[], ret: K::I32 } },
    // Get current connected monitor
    Symbol { name: "GetCurrentMonitor", sig: FnSig { params: &[], ret: K::I32 } },
    // Get specified monitor position
    Symbol { name: "GetMonitorPosition", sig: FnSig { params: &[K::I32], ret: K::Struct(&VECTOR2) } },
    // Get specified monitor width (current video mode used by monitor)
    Symbol { name: "GetMonitorWidth", sig: FnSig { params: &[K::I32], ret: K::I32 } },
    // Get specified monitor height (current video mode used by monitor)
    Symbol { name: "GetMonitorHeight", sig: FnSig { params: &[K::I32], ret: K::I32 } },
    // Get specified monitor physical width in millimetres
    Symbol { name: "GetMonitorPhysicalWidth", sig: FnSig { params: &[K::I32], ret: K::I32 } },
    // Get specified monitor physical height in millimetres
    Symbol { name: "GetMonitorPhysicalHeight", sig: FnSig { params: &[K::I32], ret: K::I32 } },
    // Get specified monitor refresh rate
    Symbol { name: "GetMonitorRefreshRate", sig: FnSig { params: &[K::I32], ret: K::I32 } },
    // Get window position XY on monitor
    Symbol { name: "GetWindowPosition", sig: FnSig { params: &[], ret: K::Struct(&VECTOR2) } },
    // Get window scale DPI factor
    Symbol { name: "GetWindowScaleDPI", sig: FnSig { params: &[], ret: K::Struct(&VECTOR2) } },
    // Get the human-readable, UTF-8 encoded name of the specified monitor
    Symbol { name: "GetMonitorName", sig: FnSig { params: &[K::I32], ret: K::Buffer } },
    // Set clipboard text content
    Symbol { name: "SetClipboardText", sig: FnSig { params: &[K::Buffer], ret: K::Void } },
    // Get clipboard text content
    Symbol { name: "GetClipboardText", sig: FnSig { params: &[], ret: K::Buffer } },
    // Enable waiting for events on EndDrawing(), no automatic event polling
    Symbol { name: "EnableEventWaiting", sig: FnSig { params: &[], ret: K::Void } },
    // Disable waiting for events on EndDrawing(), automatic events polling
    Symbol { name: "DisableEventWaiting", sig: FnSig { params: &[], ret: K::Void } },
    // Shows cursor
    Symbol { name: "ShowCursor", sig: FnSig { params: &[], ret: K::Void } },
    // Hides cursor
    Symbol { name: "HideCursor", sig: FnSig { params: &[], ret: K::Void } },
    // Check if cursor is not visible
    Symbol { name: "IsCursorHidden", sig: FnSig { params: &[], ret: K::U8 } },
    // Enables cursor (unlock cursor)
    Symbol { name: "EnableCursor", sig: FnSig { params: &[], ret: K::Void } },
    // Disables cursor (lock cursor)
    Symbol { name: "DisableCursor", sig: FnSig { params: &[], ret: K::Void } },
    // Check if cursor is on the screen
    Symbol { name: "IsCursorOnScreen", sig: FnSig { params: &[], ret: K::U8 } },
    // Set background color (framebuffer clear color)
    Symbol { name: "ClearBackground", sig: FnSig { params: &[K::Struct(&COLOR)], ret: K::Void } },
    // Setup canvas (framebuffer) to start drawing
    Symbol { name: "BeginDrawing", sig: FnSig { params: &[], ret: K::Void } },
    // End canvas drawing and swap buffers (double buffering)
    Symbol { name: "EndDrawing", sig: FnSig { params: &[], ret: K::Void } },
    // Begin 2D mode with custom camera (2D)
    Symbol { name: "BeginMode2D", sig: FnSig { params: &[K::Struct(&CAMERA2D)], ret: K::Void } },
    // Ends 2D mode with custom camera
    Symbol { name: "EndMode2D", sig: FnSig { params: &[], ret: K::Void } },
    // Begin 3D mode with custom camera (3D)
    Symbol { name: "BeginMode3D", sig: FnSig { params: &[K::Struct(&CAMERA3D)], ret: K::Void } },
    // Ends 3D mode and returns to default 2D orthographic mode
    Symbol { name: "EndMode3D", sig: FnSig { params: &[], ret: K::Void } },
    // Begin drawing to render texture
    Symbol { name: "BeginTextureMode", sig: FnSig { params: &[K::Struct(&RENDER_TEXTURE2D)], ret: K::Void } },
    // Ends drawing to render texture
    Symbol { name: "EndTextureMode", sig: FnSig { params: &[], ret: K::Void } },
    // Begin custom shader drawing
    Symbol { name: "BeginShaderMode", sig: FnSig { params: &[K::Struct(&SHADER)], ret: K::Void } },
    // End custom shader drawing (use default shader)
    Symbol { name: "EndShaderMode", sig: FnSig { params: &[], ret: K::Void } },
    // Begin blending mode (alpha, additive, multiplied, subtract, custom)
    Symbol { name: "BeginBlendMode", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // End blending mode (reset to default: alpha blending)
    Symbol { name: "EndBlendMode", sig: FnSig { params: &[], ret: K::Void } },
    // Begin scissor mode (define screen area for following drawing)
    Symbol { name: "BeginScissorMode", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::I32], ret: K::Void } },
    // End scissor mode
    Symbol { name: "EndScissorMode", sig: FnSig { params: &[], ret: K::Void } },
    // Begin stereo rendering (requires VR simulator)
    Symbol { name: "BeginVrStereoMode", sig: FnSig { params: &[K::Struct(&VR_STEREO_CONFIG)], ret: K::Void } },
    // End stereo rendering (requires VR simulator)
    Symbol { name: "EndVrStereoMode", sig: FnSig { params: &[], ret: K::Void } },
    // Load VR stereo config for VR simulator device parameters
    Symbol { name: "LoadVrStereoConfig", sig: FnSig { params: &[K::Struct(&VR_DEVICE_INFO)], ret: K::Struct(&VR_STEREO_CONFIG) } },
    // Unload VR stereo config
    Symbol { name: "UnloadVrStereoConfig", sig: FnSig { params: &[K::Struct(&VR_STEREO_CONFIG)], ret: K::Void } },
    // Load shader from files and bind default locations
    Symbol { name: "LoadShader", sig: FnSig { params: &[K::Buffer, K::Buffer], ret: K::Struct(&SHADER) } },
    // Load shader from code strings and bind default locations
    Symbol { name: "LoadShaderFromMemory", sig: FnSig { params: &[K::Buffer, K::Buffer], ret: K::Struct(&SHADER) } },
    // Check if a shader is ready
    Symbol { name: "IsShaderReady", sig: FnSig { params: &[K::Struct(&SHADER)], ret: K::U8 } },
    // Get shader uniform location
    Symbol { name: "GetShaderLocation", sig: FnSig { params: &[K::Struct(&SHADER), K::Buffer], ret: K::I32 } },
    // Get shader attribute location
    Symbol { name: "GetShaderLocationAttrib", sig: FnSig { params: &[K::Struct(&SHADER), K::Buffer], ret: K::I32 } },
    // Set shader uniform value
    Symbol { name: "SetShaderValue", sig: FnSig { params: &[K::Struct(&SHADER), K::I32, K::Buffer, K::I32], ret: K::Void } },
    // Set shader uniform value vector
    Symbol { name: "SetShaderValueV", sig: FnSig { params: &[K::Struct(&SHADER), K::I32, K::Buffer, K::I32, K::I32], ret: K::Void } },
    // Set shader uniform value (matrix 4x4)
    Symbol { name: "SetShaderValueMatrix", sig: FnSig { params: &[K::Struct(&SHADER), K::I32, K::Struct(&MATRIX)], ret: K::Void } },
    // Set shader uniform value for texture (sampler2d)
    Symbol { name: "SetShaderValueTexture", sig: FnSig { params: &[K::Struct(&SHADER), K::I32, K::Struct(&TEXTURE2D)], ret: K::Void } },
    // Unload shader from GPU memory (VRAM)
    Symbol { name: "UnloadShader", sig: FnSig { params: &[K::Struct(&SHADER)], ret: K::Void } },
    // Get a ray trace from mouse position
    Symbol { name: "GetMouseRay", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&CAMERA3D)], ret: K::Struct(&RAY) } },
    // Get camera transform matrix (view matrix)
    Symbol { name: "GetCameraMatrix", sig: FnSig { params: &[K::Struct(&CAMERA3D)], ret: K::Struct(&MATRIX) } },
    // Get camera 2d transform matrix
    Symbol { name: "GetCameraMatrix2D", sig: FnSig { params: &[K::Struct(&CAMERA2D)], ret: K::Struct(&MATRIX) } },
    // Get the screen space position for a 3d world space position
    Symbol { name: "GetWorldToScreen", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&CAMERA3D)], ret: K::Struct(&VECTOR2) } },
    // Get the world space position for a 2d camera screen space position
    Symbol { name: "GetScreenToWorld2D", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&CAMERA2D)], ret: K::Struct(&VECTOR2) } },
    // Get size position for a 3d world space position
    Symbol { name: "GetWorldToScreenEx", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&CAMERA3D), K::I32, K::I32], ret: K::Struct(&VECTOR2) } },
    // Get the screen space position for a 2d camera world space position
    Symbol { name: "GetWorldToScreen2D", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&CAMERA2D)], ret: K::Struct(&VECTOR2) } },
    // Set target FPS (maximum)
    Symbol { name: "SetTargetFPS", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // Get time in seconds for last frame drawn (delta time)
    Symbol { name: "GetFrameTime", sig: FnSig { params: &[], ret: K::F32 } },
    // Get elapsed time in seconds since InitWindow()
    Symbol { name: "GetTime", sig: FnSig { params: &[], ret: K::F64 } },
    // Get current FPS
    Symbol { name: "GetFPS", sig: FnSig { params: &[], ret: K::I32 } },
    // Swap back buffer with front buffer (screen drawing)
    Symbol { name: "SwapScreenBuffer", sig: FnSig { params: &[], ret: K::Void } },
    // Register all input events
    Symbol { name: "PollInputEvents", sig: FnSig { params: &[], ret: K::Void } },
    // Wait for some time (halt program execution)
    Symbol { name: "WaitTime", sig: FnSig { params: &[K::F64], ret: K::Void } },
    // Set the seed for the random number generator
    Symbol { name: "SetRandomSeed", sig: FnSig { params: &[K::U32], ret: K::Void } },
    // Get a random value between min and max (both included)
    Symbol { name: "GetRandomValue", sig: FnSig { params: &[K::I32, K::I32], ret: K::I32 } },
    // Load random values sequence, no values repeated
    Symbol { name: "LoadRandomSequence", sig: FnSig { params: &[K::U32, K::I32, K::I32], ret: K::Pointer } },
    // Unload random values sequence
    Symbol { name: "UnloadRandomSequence", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Takes a screenshot of current screen (filename extension defines format)
    Symbol { name: "TakeScreenshot", sig: FnSig { params: &[K::Buffer], ret: K::Void } },
    // Setup init configuration flags (view FLAGS)
    Symbol { name: "SetConfigFlags", sig: FnSig { params: &[K::U32], ret: K::Void } },
    // Open URL with default system browser (if available)
    Symbol { name: "OpenURL", sig: FnSig { params: &[K::Buffer], ret: K::Void } },
    // Set the current threshold (minimum) log level
    Symbol { name: "SetTraceLogLevel", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // Internal memory allocator
    Symbol { name: "MemAlloc", sig: FnSig { params: &[K::U32], ret: K::Pointer } },
    // Internal memory reallocator
    Symbol { name: "MemRealloc", sig: FnSig { params: &[K::Pointer, K::U32], ret: K::Pointer } },
    // Internal memory free
    Symbol { name: "MemFree", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Set custom trace log
    Symbol { name: "SetTraceLogCallback", sig: FnSig { params: &[K::Function], ret: K::Void } },
    // Set custom file binary data loader
    Symbol { name: "SetLoadFileDataCallback", sig: FnSig { params: &[K::Function], ret: K::Void } },
    // Set custom file binary data saver
    Symbol { name: "SetSaveFileDataCallback", sig: FnSig { params: &[K::Function], ret: K::Void } },
    // Set custom file text data loader
    Symbol { name: "SetLoadFileTextCallback", sig: FnSig { params: &[K::Function], ret: K::Void } },
    // Set custom file text data saver
    Symbol { name: "SetSaveFileTextCallback", sig: FnSig { params: &[K::Function], ret: K::Void } },
    // Load file data as byte array (read)
    Symbol { name: "LoadFileData", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::Buffer } },
    // Unload file data allocated by LoadFileData()
    Symbol { name: "UnloadFileData", sig: FnSig { params: &[K::Buffer], ret: K::Void } },
    // Save data to file from byte array (write), returns true on success
    Symbol { name: "SaveFileData", sig: FnSig { params: &[K::Buffer, K::Pointer, K::I32], ret: K::U8 } },
    // Export data to code (.h), returns true on success
    Symbol { name: "ExportDataAsCode", sig: FnSig { params: &[K::Buffer, K::I32, K::Buffer], ret: K::U8 } },
    // Load text data from file (read), returns a '\0' terminated string
    Symbol { name: "LoadFileText", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Unload file text data allocated by LoadFileText()
    Symbol { name: "UnloadFileText", sig: FnSig { params: &[K::Buffer], ret: K::Void } },
    // Save text data to file (write), string must be '\0' terminated, returns true on success
    Symbol { name: "SaveFileText", sig: FnSig { params: &[K::Buffer, K::Buffer], ret: K::U8 } },
    // Check if file exists
    Symbol { name: "FileExists", sig: FnSig { params: &[K::Buffer], ret: K::U8 } },
    // Check if a directory path exists
    Symbol { name: "DirectoryExists", sig: FnSig { params: &[K::Buffer], ret: K::U8 } },
    // Check file extension (including point: .png, .wav)
    Symbol { name: "IsFileExtension", sig: FnSig { params: &[K::Buffer, K::Buffer], ret: K::U8 } },
    // Get file length in bytes (NOTE: GetFileSize() conflicts with windows.h)
    Symbol { name: "GetFileLength", sig: FnSig { params: &[K::Buffer], ret: K::I32 } },
    // Get pointer to extension for a filename string (includes dot: '.png')
    Symbol { name: "GetFileExtension", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Get pointer to filename for a path string
    Symbol { name: "GetFileName", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Get filename string without extension (uses static string)
    Symbol { name: "GetFileNameWithoutExt", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Get full path for a given fileName with path (uses static string)
    Symbol { name: "GetDirectoryPath", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Get previous directory path for a given path (uses static string)
    Symbol { name: "GetPrevDirectoryPath", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Get current working directory (uses static string)
    Symbol { name: "GetWorkingDirectory", sig: FnSig { params: &[], ret: K::Buffer } },
    // Get the directory of the running application (uses static string)
    Symbol { name: "GetApplicationDirectory", sig: FnSig { params: &[], ret: K::Buffer } },
    // Change working directory, return true on success
    Symbol { name: "ChangeDirectory", sig: FnSig { params: &[K::Buffer], ret: K::U8 } },
    // Check if a given path is a file or a directory
    Symbol { name: "IsPathFile", sig: FnSig { params: &[K::Buffer], ret: K::U8 } },
    // Load directory filepaths
    Symbol { name: "LoadDirectoryFiles", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&FILE_PATH_LIST) } },
    // Load directory filepaths with extension filtering and recursive directory scan
    Symbol { name: "LoadDirectoryFilesEx", sig: FnSig { params: &[K::Buffer, K::Buffer, K::U8], ret: K::Struct(&FILE_PATH_LIST) } },
    // Unload filepaths
    Symbol { name: "UnloadDirectoryFiles", sig: FnSig { params: &[K::Struct(&FILE_PATH_LIST)], ret: K::Void } },
    // Check if a file has been dropped into window
    Symbol { name: "IsFileDropped", sig: FnSig { params: &[], ret: K::U8 } },
    // Load dropped filepaths
    Symbol { name: "LoadDroppedFiles", sig: FnSig { params: &[], ret: K::Struct(&FILE_PATH_LIST) } },
    // Unload dropped filepaths
    Symbol { name: "UnloadDroppedFiles", sig: FnSig { params: &[K::Struct(&FILE_PATH_LIST)], ret: K::Void } },
    // Get file modification time (last write time)
    Symbol { name: "GetFileModTime", sig: FnSig { params: &[K::Buffer], ret: K::I64 } },
    // Compress data (DEFLATE algorithm), memory must be MemFree()
    Symbol { name: "CompressData", sig: FnSig { params: &[K::Buffer, K::I32, K::Pointer], ret: K::Buffer } },
    // Decompress data (DEFLATE algorithm), memory must be MemFree()
    Symbol { name: "DecompressData", sig: FnSig { params: &[K::Buffer, K::I32, K::Pointer], ret: K::Buffer } },
    // Encode data to Base64 string, memory must be MemFree()
    Symbol { name: "EncodeDataBase64", sig: FnSig { params: &[K::Buffer, K::I32, K::Pointer], ret: K::Buffer } },
    // Decode Base64 string data, memory must be MemFree()
    Symbol { name: "DecodeDataBase64", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::Buffer } },
    // Load automation events list from file, NULL for empty list, capacity = MAX_AUTOMATION_EVENTS
    Symbol { name: "LoadAutomationEventList", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&AUTOMATION_EVENT_LIST) } },
    // Unload automation events list from file
    Symbol { name: "UnloadAutomationEventList", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Export automation events list as text file
    Symbol { name: "ExportAutomationEventList", sig: FnSig { params: &[K::Struct(&AUTOMATION_EVENT_LIST), K::Buffer], ret: K::U8 } },
    // Set automation event list to record to
    Symbol { name: "SetAutomationEventList", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Set automation event internal base frame to start recording
    Symbol { name: "SetAutomationEventBaseFrame", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // Start recording automation events (AutomationEventList must be set)
    Symbol { name: "StartAutomationEventRecording", sig: FnSig { params: &[], ret: K::Void } },
    // Stop recording automation events
    Symbol { name: "StopAutomationEventRecording", sig: FnSig { params: &[], ret: K::Void } },
    // Play a recorded automation event
    Symbol { name: "PlayAutomationEvent", sig: FnSig { params: &[K::Struct(&AUTOMATION_EVENT)], ret: K::Void } },
    // Check if a key has been pressed once
    Symbol { name: "IsKeyPressed", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Check if a key has been pressed again (Only PLATFORM_DESKTOP)
    Symbol { name: "IsKeyPressedRepeat", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Check if a key is being pressed
    Symbol { name: "IsKeyDown", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Check if a key has been released once
    Symbol { name: "IsKeyReleased", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Check if a key is NOT being pressed
    Symbol { name: "IsKeyUp", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Get key pressed (keycode), call it multiple times for keys queued, returns 0 when the queue is empty
    Symbol { name: "GetKeyPressed", sig: FnSig { params: &[], ret: K::I32 } },
    // Get char pressed (unicode), call it multiple times for chars queued, returns 0 when the queue is empty
    Symbol { name: "GetCharPressed", sig: FnSig { params: &[], ret: K::I32 } },
    // Set a custom key to exit program (default is ESC)
    Symbol { name: "SetExitKey", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // Check if a gamepad is available
    Symbol { name: "IsGamepadAvailable", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Get gamepad internal name id
    Symbol { name: "GetGamepadName", sig: FnSig { params: &[K::I32], ret: K::Buffer } },
    // Check if a gamepad button has been pressed once
    Symbol { name: "IsGamepadButtonPressed", sig: FnSig { params: &[K::I32, K::I32], ret: K::U8 } },
    // Check if a gamepad button is being pressed
    Symbol { name: "IsGamepadButtonDown", sig: FnSig { params: &[K::I32, K::I32], ret: K::U8 } },
    // Check if a gamepad button has been released once
    Symbol { name: "IsGamepadButtonReleased", sig: FnSig { params: &[K::I32, K::I32], ret: K::U8 } },
    // Check if a gamepad button is NOT being pressed
    Symbol { name: "IsGamepadButtonUp", sig: FnSig { params: &[K::I32, K::I32], ret: K::U8 } },
    // Get the last gamepad button pressed
    Symbol { name: "GetGamepadButtonPressed", sig: FnSig { params: &[], ret: K::I32 } },
    // Get gamepad axis count for a gamepad
    Symbol { name: "GetGamepadAxisCount", sig: FnSig { params: &[K::I32], ret: K::I32 } },
    // Get axis movement value for a gamepad axis
    Symbol { name: "GetGamepadAxisMovement", sig: FnSig { params: &[K::I32, K::I32], ret: K::F32 } },
    // Set internal gamepad mappings (SDL_GameControllerDB)
    Symbol { name: "SetGamepadMappings", sig: FnSig { params: &[K::Buffer], ret: K::I32 } },
    // Check if a mouse button has been pressed once
    Symbol { name: "IsMouseButtonPressed", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Check if a mouse button is being pressed
    Symbol { name: "IsMouseButtonDown", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Check if a mouse button has been released once
    Symbol { name: "IsMouseButtonReleased", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Check if a mouse button is NOT being pressed
    Symbol { name: "IsMouseButtonUp", sig: FnSig { params: &[K::I32], ret: K::U8 } },
    // Get mouse position X
    Symbol { name: "GetMouseX", sig: FnSig { params: &[], ret: K::I32 } },
    // Get mouse position Y
    Symbol { name: "GetMouseY", sig: FnSig { params: &[], ret: K::I32 } },
    // Get mouse position XY
    Symbol { name: "GetMousePosition", sig: FnSig { params: &[], ret: K::Struct(&VECTOR2) } },
    // Get mouse delta between frames
    Symbol { name: "GetMouseDelta", sig: FnSig { params: &[], ret: K::Struct(&VECTOR2) } },
    // Set mouse position XY
    Symbol { name: "SetMousePosition", sig: FnSig { params: &[K::I32, K::I32], ret: K::Void } },
    // Set mouse offset
    Symbol { name: "SetMouseOffset", sig: FnSig { params: &[K::I32, K::I32], ret: K::Void } },
    // Set mouse scaling
    Symbol { name: "SetMouseScale", sig: FnSig { params: &[K::F32, K::F32], ret: K::Void } },
    // Get mouse wheel movement for X or Y, whichever is larger
    Symbol { name: "GetMouseWheelMove", sig: FnSig { params: &[], ret: K::F32 } },
    // Get mouse wheel movement for both X and Y
    Symbol { name: "GetMouseWheelMoveV", sig: FnSig { params: &[], ret: K::Struct(&VECTOR2) } },
    // Set mouse cursor
    Symbol { name: "SetMouseCursor", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // Get touch position X for touch point 0 (relative to screen size)
    Symbol { name: "GetTouchX", sig: FnSig { params: &[], ret: K::I32 } },
    // Get touch position Y for touch point 0 (relative to screen size)
    Symbol { name: "GetTouchY", sig: FnSig { params: &[], ret: K::I32 } },
    // Get touch position XY for a touch point index (relative to screen size)
    Symbol { name: "GetTouchPosition", sig: FnSig { params: &[K::I32], ret: K::Struct(&VECTOR2) } },
    // Get touch point identifier for given index
    Symbol { name: "GetTouchPointId", sig: FnSig { params: &[K::I32], ret: K::I32 } },
    // Get number of touch points
    Symbol { name: "GetTouchPointCount", sig: FnSig { params: &[], ret: K::I32 } },
    // Enable a set of gestures using flags
    Symbol { name: "SetGesturesEnabled", sig: FnSig { params: &[K::U32], ret: K::Void } },
    // Check if a gesture have been detected
    Symbol { name: "IsGestureDetected", sig: FnSig { params: &[K::U32], ret: K::U8 } },
    // Get latest detected gesture
    Symbol { name: "GetGestureDetected", sig: FnSig { params: &[], ret: K::I32 } },
    // Get gesture hold time in milliseconds
    Symbol { name: "GetGestureHoldDuration", sig: FnSig { params: &[], ret: K::F32 } },
    // Get gesture drag vector
    Symbol { name: "GetGestureDragVector", sig: FnSig { params: &[], ret: K::Struct(&VECTOR2) } },
    // Get gesture drag angle
    Symbol { name: "GetGestureDragAngle", sig: FnSig { params: &[], ret: K::F32 } },
    // Get gesture pinch delta
    Symbol { name: "GetGesturePinchVector", sig: FnSig { params: &[], ret: K::Struct(&VECTOR2) } },
    // Get gesture pinch angle
    Symbol { name: "GetGesturePinchAngle", sig: FnSig { params: &[], ret: K::F32 } },
    // Update camera position for selected mode
    Symbol { name: "UpdateCamera", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Void } },
    // Update camera movement/rotation
    Symbol { name: "UpdateCameraPro", sig: FnSig { params: &[K::Pointer, K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::F32], ret: K::Void } },
    // Set texture and rectangle to be used on shapes drawing
    Symbol { name: "SetShapesTexture", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::Struct(&RECTANGLE)], ret: K::Void } },
    // Draw a pixel
    Symbol { name: "DrawPixel", sig: FnSig { params: &[K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a pixel (Vector version)
    Symbol { name: "DrawPixelV", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a line
    Symbol { name: "DrawLine", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a line (using gl lines)
    Symbol { name: "DrawLineV", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a line (using triangles/quads)
    Symbol { name: "DrawLineEx", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw lines sequence (using gl lines)
    Symbol { name: "DrawLineStrip", sig: FnSig { params: &[K::Pointer, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw line segment cubic-bezier in-out interpolation
    Symbol { name: "DrawLineBezier", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a color-filled circle
    Symbol { name: "DrawCircle", sig: FnSig { params: &[K::I32, K::I32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a piece of a circle
    Symbol { name: "DrawCircleSector", sig: FnSig { params: &[K::Struct(&VECTOR2), K::F32, K::F32, K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw circle sector outline
    Symbol { name: "DrawCircleSectorLines", sig: FnSig { params: &[K::Struct(&VECTOR2), K::F32, K::F32, K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a gradient-filled circle
    Symbol { name: "DrawCircleGradient", sig: FnSig { params: &[K::I32, K::I32, K::F32, K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a color-filled circle (Vector version)
    Symbol { name: "DrawCircleV", sig: FnSig { params: &[K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw circle outline
    Symbol { name: "DrawCircleLines", sig: FnSig { params: &[K::I32, K::I32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw circle outline (Vector version)
    Symbol { name: "DrawCircleLinesV", sig: FnSig { params: &[K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw ellipse
    Symbol { name: "DrawEllipse", sig: FnSig { params: &[K::I32, K::I32, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw ellipse outline
    Symbol { name: "DrawEllipseLines", sig: FnSig { params: &[K::I32, K::I32, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw ring
    Symbol { name: "DrawRing", sig: FnSig { params: &[K::Struct(&VECTOR2), K::F32, K::F32, K::F32, K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw ring outline
    Symbol { name: "DrawRingLines", sig: FnSig { params: &[K::Struct(&VECTOR2), K::F32, K::F32, K::F32, K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a color-filled rectangle
    Symbol { name: "DrawRectangle", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a color-filled rectangle (Vector version)
    Symbol { name: "DrawRectangleV", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a color-filled rectangle
    Symbol { name: "DrawRectangleRec", sig: FnSig { params: &[K::Struct(&RECTANGLE), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a color-filled rectangle with pro parameters
    Symbol { name: "DrawRectanglePro", sig: FnSig { params: &[K::Struct(&RECTANGLE), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a vertical-gradient-filled rectangle
    Symbol { name: "DrawRectangleGradientV", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a horizontal-gradient-filled rectangle
    Symbol { name: "DrawRectangleGradientH", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a gradient-filled rectangle with custom vertex colors
    Symbol { name: "DrawRectangleGradientEx", sig: FnSig { params: &[K::Struct(&RECTANGLE), K::Struct(&COLOR), K::Struct(&COLOR), K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Void } },
    // Draw rectangle outline
    Symbol { name: "DrawRectangleLines", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw rectangle outline with extended parameters
    Symbol { name: "DrawRectangleLinesEx", sig: FnSig { params: &[K::Struct(&RECTANGLE), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw rectangle with rounded edges
    Symbol { name: "DrawRectangleRounded", sig: FnSig { params: &[K::Struct(&RECTANGLE), K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw rectangle with rounded edges outline
    Symbol { name: "DrawRectangleRoundedLines", sig: FnSig { params: &[K::Struct(&RECTANGLE), K::F32, K::I32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a color-filled triangle (vertex in counter-clockwise order!)
    Symbol { name: "DrawTriangle", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw triangle outline (vertex in counter-clockwise order!)
    Symbol { name: "DrawTriangleLines", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a triangle fan defined by points (first vertex is the center)
    Symbol { name: "DrawTriangleFan", sig: FnSig { params: &[K::Pointer, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a triangle strip defined by points
    Symbol { name: "DrawTriangleStrip", sig: FnSig { params: &[K::Pointer, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a regular polygon (Vector version)
    Symbol { name: "DrawPoly", sig: FnSig { params: &[K::Struct(&VECTOR2), K::I32, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a polygon outline of n sides
    Symbol { name: "DrawPolyLines", sig: FnSig { params: &[K::Struct(&VECTOR2), K::I32, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a polygon outline of n sides with extended parameters
    Symbol { name: "DrawPolyLinesEx", sig: FnSig { params: &[K::Struct(&VECTOR2), K::I32, K::F32, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline: Linear, minimum 2 points
    Symbol { name: "DrawSplineLinear", sig: FnSig { params: &[K::Pointer, K::I32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline: B-Spline, minimum 4 points
    Symbol { name: "DrawSplineBasis", sig: FnSig { params: &[K::Pointer, K::I32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline: Catmull-Rom, minimum 4 points
    Symbol { name: "DrawSplineCatmullRom", sig: FnSig { params: &[K::Pointer, K::I32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline: Quadratic Bezier, minimum 3 points (1 control point): [p1, c2, p3, c4...]
    Symbol { name: "DrawSplineBezierQuadratic", sig: FnSig { params: &[K::Pointer, K::I32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline: Cubic Bezier, minimum 4 points (2 control points): [p1, c2, c3, p4, c5...]
    Symbol { name: "DrawSplineBezierCubic", sig: FnSig { params: &[K::Pointer, K::I32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline segment: Linear, 2 points
    Symbol { name: "DrawSplineSegmentLinear", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline segment: B-Spline, 4 points
    Symbol { name: "DrawSplineSegmentBasis", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline segment: Catmull-Rom, 4 points
    Symbol { name: "DrawSplineSegmentCatmullRom", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline segment: Quadratic Bezier, 2 points, 1 control point
    Symbol { name: "DrawSplineSegmentBezierQuadratic", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw spline segment: Cubic Bezier, 2 points, 2 control points
    Symbol { name: "DrawSplineSegmentBezierCubic", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Get (evaluate) spline point: Linear
    Symbol { name: "GetSplinePointLinear", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32], ret: K::Struct(&VECTOR2) } },
    // Get (evaluate) spline point: B-Spline
    Symbol { name: "GetSplinePointBasis", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32], ret: K::Struct(&VECTOR2) } },
    // Get (evaluate) spline point: Catmull-Rom
    Symbol { name: "GetSplinePointCatmullRom", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32], ret: K::Struct(&VECTOR2) } },
    // Get (evaluate) spline point: Quadratic Bezier
    Symbol { name: "GetSplinePointBezierQuad", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32], ret: K::Struct(&VECTOR2) } },
    // Get (evaluate) spline point: Cubic Bezier
    Symbol { name: "GetSplinePointBezierCubic", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32], ret: K::Struct(&VECTOR2) } },
    // Check collision between two rectangles
    Symbol { name: "CheckCollisionRecs", sig: FnSig { params: &[K::Struct(&RECTANGLE), K::Struct(&RECTANGLE)], ret: K::U8 } },
    // Check collision between two circles
    Symbol { name: "CheckCollisionCircles", sig: FnSig { params: &[K::Struct(&VECTOR2), K::F32, K::Struct(&VECTOR2), K::F32], ret: K::U8 } },
    // Check collision between circle and rectangle
    Symbol { name: "CheckCollisionCircleRec", sig: FnSig { params: &[K::Struct(&VECTOR2), K::F32, K::Struct(&RECTANGLE)], ret: K::U8 } },
    // Check if point is inside rectangle
    Symbol { name: "CheckCollisionPointRec", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&RECTANGLE)], ret: K::U8 } },
    // Check if point is inside circle
    Symbol { name: "CheckCollisionPointCircle", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32], ret: K::U8 } },
    // Check if point is inside a triangle
    Symbol { name: "CheckCollisionPointTriangle", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2)], ret: K::U8 } },
    // Check if point is within a polygon described by array of vertices
    Symbol { name: "CheckCollisionPointPoly", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Pointer, K::I32], ret: K::U8 } },
    // Check the collision between two lines defined by two points each, returns collision point by reference
    Symbol { name: "CheckCollisionLines", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Pointer], ret: K::U8 } },
    // Check if point belongs to line created between two points [p1] and [p2] with defined margin in pixels [threshold]
    Symbol { name: "CheckCollisionPointLine", sig: FnSig { params: &[K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::I32], ret: K::U8 } },
    // Get collision rectangle for two rectangles collision
    Symbol { name: "GetCollisionRec", sig: FnSig { params: &[K::Struct(&RECTANGLE), K::Struct(&RECTANGLE)], ret: K::Struct(&RECTANGLE) } },
    // Load image from file into CPU memory (RAM)
    Symbol { name: "LoadImage", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&IMAGE) } },
    // Load image from RAW file data
    Symbol { name: "LoadImageRaw", sig: FnSig { params: &[K::Buffer, K::I32, K::I32, K::I32, K::I32], ret: K::Struct(&IMAGE) } },
    // Load image from SVG file data or string with specified size
    Symbol { name: "LoadImageSvg", sig: FnSig { params: &[K::Buffer, K::I32, K::I32], ret: K::Struct(&IMAGE) } },
    // Load image sequence from file (frames appended to image.data)
    Symbol { name: "LoadImageAnim", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::Struct(&IMAGE) } },
    // Load image from memory buffer, fileType refers to extension: i.e. '.png'
    Symbol { name: "LoadImageFromMemory", sig: FnSig { params: &[K::Buffer, K::Buffer, K::I32], ret: K::Struct(&IMAGE) } },
    // Load image from GPU texture data
    Symbol { name: "LoadImageFromTexture", sig: FnSig { params: &[K::Struct(&TEXTURE2D)], ret: K::Struct(&IMAGE) } },
    // Load image from screen buffer and (screenshot)
    Symbol { name: "LoadImageFromScreen", sig: FnSig { params: &[], ret: K::Struct(&IMAGE) } },
    // Check if an image is ready
    Symbol { name: "IsImageReady", sig: FnSig { params: &[K::Struct(&IMAGE)], ret: K::U8 } },
    // Unload image from CPU memory (RAM)
    Symbol { name: "UnloadImage", sig: FnSig { params: &[K::Struct(&IMAGE)], ret: K::Void } },
    // Export image data to file, returns true on success
    Symbol { name: "ExportImage", sig: FnSig { params: &[K::Struct(&IMAGE), K::Buffer], ret: K::U8 } },
    // Export image to memory buffer
    Symbol { name: "ExportImageToMemory", sig: FnSig { params: &[K::Struct(&IMAGE), K::Buffer, K::Pointer], ret: K::Buffer } },
    // Export image as code file defining an array of bytes, returns true on success
    Symbol { name: "ExportImageAsCode", sig: FnSig { params: &[K::Struct(&IMAGE), K::Buffer], ret: K::U8 } },
    // Generate image: plain color
    Symbol { name: "GenImageColor", sig: FnSig { params: &[K::I32, K::I32, K::Struct(&COLOR)], ret: K::Struct(&IMAGE) } },
    // Generate image: linear gradient, direction in degrees [0..360], 0=Vertical gradient
    Symbol { name: "GenImageGradientLinear", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Struct(&IMAGE) } },
    // Generate image: radial gradient
    Symbol { name: "GenImageGradientRadial", sig: FnSig { params: &[K::I32, K::I32, K::F32, K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Struct(&IMAGE) } },
    // Generate image: square gradient
    Symbol { name: "GenImageGradientSquare", sig: FnSig { params: &[K::I32, K::I32, K::F32, K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Struct(&IMAGE) } },
    // Generate image: checked
    Symbol { name: "GenImageChecked", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Struct(&IMAGE) } },
    // Generate image: white noise
    Symbol { name: "GenImageWhiteNoise", sig: FnSig { params: &[K::I32, K::I32, K::F32], ret: K::Struct(&IMAGE) } },
    // Generate image: perlin noise
    Symbol { name: "GenImagePerlinNoise", sig: FnSig { params: &[K::I32, K::I32, K::I32, K::I32, K::F32], ret: K::Struct(&IMAGE) } },
    // Generate image: cellular algorithm, bigger tileSize means bigger cells
    Symbol { name: "GenImageCellular", sig: FnSig { params: &[K::I32, K::I32, K::I32], ret: K::Struct(&IMAGE) } },
    // Generate image: grayscale image from text data
    Symbol { name: "GenImageText", sig: FnSig { params: &[K::I32, K::I32, K::Buffer], ret: K::Struct(&IMAGE) } },
    // Create an image duplicate (useful for transformations)
    Symbol { name: "ImageCopy", sig: FnSig { params: &[K::Struct(&IMAGE)], ret: K::Struct(&IMAGE) } },
    // Create an image from another image piece
    Symbol { name: "ImageFromImage", sig: FnSig { params: &[K::Struct(&IMAGE), K::Struct(&RECTANGLE)], ret: K::Struct(&IMAGE) } },
    // Create an image from text (default font)
    Symbol { name: "ImageText", sig: FnSig { params: &[K::Buffer, K::I32, K::Struct(&COLOR)], ret: K::Struct(&IMAGE) } },
    // Create an image from text (custom sprite font)
    Symbol { name: "ImageTextEx", sig: FnSig { params: &[K::Struct(&FONT), K::Buffer, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Struct(&IMAGE) } },
    // Convert image data to desired format
    Symbol { name: "ImageFormat", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Void } },
    // Convert image to POT (power-of-two)
    Symbol { name: "ImageToPOT", sig: FnSig { params: &[K::Pointer, K::Struct(&COLOR)], ret: K::Void } },
    // Crop an image to a defined rectangle
    Symbol { name: "ImageCrop", sig: FnSig { params: &[K::Pointer, K::Struct(&RECTANGLE)], ret: K::Void } },
    // Crop image depending on alpha value
    Symbol { name: "ImageAlphaCrop", sig: FnSig { params: &[K::Pointer, K::F32], ret: K::Void } },
    // Clear alpha channel to desired color
    Symbol { name: "ImageAlphaClear", sig: FnSig { params: &[K::Pointer, K::Struct(&COLOR), K::F32], ret: K::Void } },
    // Apply alpha mask to image
    Symbol { name: "ImageAlphaMask", sig: FnSig { params: &[K::Pointer, K::Struct(&IMAGE)], ret: K::Void } },
    // Premultiply alpha channel
    Symbol { name: "ImageAlphaPremultiply", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Apply Gaussian blur using a box blur approximation
    Symbol { name: "ImageBlurGaussian", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Void } },
    // Resize image (Bicubic scaling algorithm)
    Symbol { name: "ImageResize", sig: FnSig { params: &[K::Pointer, K::I32, K::I32], ret: K::Void } },
    // Resize image (Nearest-Neighbor scaling algorithm)
    Symbol { name: "ImageResizeNN", sig: FnSig { params: &[K::Pointer, K::I32, K::I32], ret: K::Void } },
    // Resize canvas and fill with color
    Symbol { name: "ImageResizeCanvas", sig: FnSig { params: &[K::Pointer, K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Compute all mipmap levels for a provided image
    Symbol { name: "ImageMipmaps", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Dither image data to 16bpp or lower (Floyd-Steinberg dithering)
    Symbol { name: "ImageDither", sig: FnSig { params: &[K::Pointer, K::I32, K::I32, K::I32, K::I32], ret: K::Void } },
    // Flip image vertically
    Symbol { name: "ImageFlipVertical", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Flip image horizontally
    Symbol { name: "ImageFlipHorizontal", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Rotate image by input angle in degrees (-359 to 359)
    Symbol { name: "ImageRotate", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Void } },
    // Rotate image clockwise 90deg
    Symbol { name: "ImageRotateCW", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Rotate image counter-clockwise 90deg
    Symbol { name: "ImageRotateCCW", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Modify image color: tint
    Symbol { name: "ImageColorTint", sig: FnSig { params: &[K::Pointer, K::Struct(&COLOR)], ret: K::Void } },
    // Modify image color: invert
    Symbol { name: "ImageColorInvert", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Modify image color: grayscale
    Symbol { name: "ImageColorGrayscale", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Modify image color: contrast (-100 to 100)
    Symbol { name: "ImageColorContrast", sig: FnSig { params: &[K::Pointer, K::F32], ret: K::Void } },
    // Modify image color: brightness (-255 to 255)
    Symbol { name: "ImageColorBrightness", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Void } },
    // Modify image color: replace color
    Symbol { name: "ImageColorReplace", sig: FnSig { params: &[K::Pointer, K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Void } },
    // Load color data from image as a Color array (RGBA - 32bit)
    Symbol { name: "LoadImageColors", sig: FnSig { params: &[K::Struct(&IMAGE)], ret: K::Pointer } },
    // Load colors palette from image as a Color array (RGBA - 32bit)
    Symbol { name: "LoadImagePalette", sig: FnSig { params: &[K::Struct(&IMAGE), K::I32, K::Pointer], ret: K::Pointer } },
    // Unload color data loaded with LoadImageColors()
    Symbol { name: "UnloadImageColors", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Unload colors palette loaded with LoadImagePalette()
    Symbol { name: "UnloadImagePalette", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Get image alpha border rectangle
    Symbol { name: "GetImageAlphaBorder", sig: FnSig { params: &[K::Struct(&IMAGE), K::F32], ret: K::Struct(&RECTANGLE) } },
    // Get image pixel color at (x, y) position
    Symbol { name: "GetImageColor", sig: FnSig { params: &[K::Struct(&IMAGE), K::I32, K::I32], ret: K::Struct(&COLOR) } },
    // Clear image background with given color
    Symbol { name: "ImageClearBackground", sig: FnSig { params: &[K::Pointer, K::Struct(&COLOR)], ret: K::Void } },
    // Draw pixel within an image
    Symbol { name: "ImageDrawPixel", sig: FnSig { params: &[K::Pointer, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw pixel within an image (Vector version)
    Symbol { name: "ImageDrawPixelV", sig: FnSig { params: &[K::Pointer, K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw line within an image
    Symbol { name: "ImageDrawLine", sig: FnSig { params: &[K::Pointer, K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw line within an image (Vector version)
    Symbol { name: "ImageDrawLineV", sig: FnSig { params: &[K::Pointer, K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a filled circle within an image
    Symbol { name: "ImageDrawCircle", sig: FnSig { params: &[K::Pointer, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a filled circle within an image (Vector version)
    Symbol { name: "ImageDrawCircleV", sig: FnSig { params: &[K::Pointer, K::Struct(&VECTOR2), K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw circle outline within an image
    Symbol { name: "ImageDrawCircleLines", sig: FnSig { params: &[K::Pointer, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw circle outline within an image (Vector version)
    Symbol { name: "ImageDrawCircleLinesV", sig: FnSig { params: &[K::Pointer, K::Struct(&VECTOR2), K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw rectangle within an image
    Symbol { name: "ImageDrawRectangle", sig: FnSig { params: &[K::Pointer, K::I32, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw rectangle within an image (Vector version)
    Symbol { name: "ImageDrawRectangleV", sig: FnSig { params: &[K::Pointer, K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw rectangle within an image
    Symbol { name: "ImageDrawRectangleRec", sig: FnSig { params: &[K::Pointer, K::Struct(&RECTANGLE), K::Struct(&COLOR)], ret: K::Void } },
    // Draw rectangle lines within an image
    Symbol { name: "ImageDrawRectangleLines", sig: FnSig { params: &[K::Pointer, K::Struct(&RECTANGLE), K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a source image within a destination image (tint applied to source)
    Symbol { name: "ImageDraw", sig: FnSig { params: &[K::Pointer, K::Struct(&IMAGE), K::Struct(&RECTANGLE), K::Struct(&RECTANGLE), K::Struct(&COLOR)], ret: K::Void } },
    // Draw text (using default font) within an image (destination)
    Symbol { name: "ImageDrawText", sig: FnSig { params: &[K::Pointer, K::Buffer, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw text (custom sprite font) within an image (destination)
    Symbol { name: "ImageDrawTextEx", sig: FnSig { params: &[K::Pointer, K::Struct(&FONT), K::Buffer, K::Struct(&VECTOR2), K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Load texture from file into GPU memory (VRAM)
    Symbol { name: "LoadTexture", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&TEXTURE2D) } },
    // Load texture from image data
    Symbol { name: "LoadTextureFromImage", sig: FnSig { params: &[K::Struct(&IMAGE)], ret: K::Struct(&TEXTURE2D) } },
    // Load cubemap from image, multiple image cubemap layouts supported
    Symbol { name: "LoadTextureCubemap", sig: FnSig { params: &[K::Struct(&IMAGE), K::I32], ret: K::Struct(&TEXTURE2D) } },
    // Load texture for rendering (framebuffer)
    Symbol { name: "LoadRenderTexture", sig: FnSig { params: &[K::I32, K::I32], ret: K::Struct(&RENDER_TEXTURE2D) } },
    // Check if a texture is ready
    Symbol { name: "IsTextureReady", sig: FnSig { params: &[K::Struct(&TEXTURE2D)], ret: K::U8 } },
    // Unload texture from GPU memory (VRAM)
    Symbol { name: "UnloadTexture", sig: FnSig { params: &[K::Struct(&TEXTURE2D)], ret: K::Void } },
    // Check if a render texture is ready
    Symbol { name: "IsRenderTextureReady", sig: FnSig { params: &[K::Struct(&RENDER_TEXTURE2D)], ret: K::U8 } },
    // Unload render texture from GPU memory (VRAM)
    Symbol { name: "UnloadRenderTexture", sig: FnSig { params: &[K::Struct(&RENDER_TEXTURE2D)], ret: K::Void } },
    // Update GPU texture with new data
    Symbol { name: "UpdateTexture", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::Buffer], ret: K::Void } },
    // Update GPU texture rectangle with new data
    Symbol { name: "UpdateTextureRec", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::Struct(&RECTANGLE), K::Buffer], ret: K::Void } },
    // Generate GPU mipmaps for a texture
    Symbol { name: "GenTextureMipmaps", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Set texture scaling filter mode
    Symbol { name: "SetTextureFilter", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::I32], ret: K::Void } },
    // Set texture wrapping mode
    Symbol { name: "SetTextureWrap", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::I32], ret: K::Void } },
    // Draw a Texture2D
    Symbol { name: "DrawTexture", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a Texture2D with position defined as Vector2
    Symbol { name: "DrawTextureV", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a Texture2D with extended parameters
    Symbol { name: "DrawTextureEx", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::Struct(&VECTOR2), K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a part of a texture defined by a rectangle
    Symbol { name: "DrawTextureRec", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::Struct(&RECTANGLE), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a part of a texture defined by a rectangle with 'pro' parameters
    Symbol { name: "DrawTexturePro", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::Struct(&RECTANGLE), K::Struct(&RECTANGLE), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draws a texture (or part of it) that stretches or shrinks nicely
    Symbol { name: "DrawTextureNPatch", sig: FnSig { params: &[K::Struct(&TEXTURE2D), K::Struct(&NPATCH_INFO), K::Struct(&RECTANGLE), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Get color with alpha applied, alpha goes from 0.0f to 1.0f
    Symbol { name: "Fade", sig: FnSig { params: &[K::Struct(&COLOR), K::F32], ret: K::Struct(&COLOR) } },
    // Get hexadecimal value for a Color
    Symbol { name: "ColorToInt", sig: FnSig { params: &[K::Struct(&COLOR)], ret: K::I32 } },
    // Get Color normalized as float [0..1]
    Symbol { name: "ColorNormalize", sig: FnSig { params: &[K::Struct(&COLOR)], ret: K::Struct(&VECTOR4) } },
    // Get Color from normalized values [0..1]
    Symbol { name: "ColorFromNormalized", sig: FnSig { params: &[K::Struct(&VECTOR4)], ret: K::Struct(&COLOR) } },
    // Get HSV values for a Color, hue [0..360], saturation/value [0..1]
    Symbol { name: "ColorToHSV", sig: FnSig { params: &[K::Struct(&COLOR)], ret: K::Struct(&VECTOR3) } },
    // Get a Color from HSV values, hue [0..360], saturation/value [0..1]
    Symbol { name: "ColorFromHSV", sig: FnSig { params: &[K::F32, K::F32, K::F32], ret: K::Struct(&COLOR) } },
    // Get color multiplied with another color
    Symbol { name: "ColorTint", sig: FnSig { params: &[K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Struct(&COLOR) } },
    // Get color with brightness correction, brightness factor goes from -1.0f to 1.0f
    Symbol { name: "ColorBrightness", sig: FnSig { params: &[K::Struct(&COLOR), K::F32], ret: K::Struct(&COLOR) } },
    // Get color with contrast correction, contrast values between -1.0f and 1.0f
    Symbol { name: "ColorContrast", sig: FnSig { params: &[K::Struct(&COLOR), K::F32], ret: K::Struct(&COLOR) } },
    // Get color with alpha applied, alpha goes from 0.0f to 1.0f
    Symbol { name: "ColorAlpha", sig: FnSig { params: &[K::Struct(&COLOR), K::F32], ret: K::Struct(&COLOR) } },
    // Get src alpha-blended into dst color with tint
    Symbol { name: "ColorAlphaBlend", sig: FnSig { params: &[K::Struct(&COLOR), K::Struct(&COLOR), K::Struct(&COLOR)], ret: K::Struct(&COLOR) } },
    // Get Color structure from hexadecimal value
    Symbol { name: "GetColor", sig: FnSig { params: &[K::U32], ret: K::Struct(&COLOR) } },
    // Get Color from a source pixel pointer of certain format
    Symbol { name: "GetPixelColor", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Struct(&COLOR) } },
    // Set color formatted into destination pixel pointer
    Symbol { name: "SetPixelColor", sig: FnSig { params: &[K::Pointer, K::Struct(&COLOR), K::I32], ret: K::Void } },
    // Get pixel data size in bytes for certain format
    Symbol { name: "GetPixelDataSize", sig: FnSig { params: &[K::I32, K::I32, K::I32], ret: K::I32 } },
    // Get the default Font
    Symbol { name: "GetFontDefault", sig: FnSig { params: &[], ret: K::Struct(&FONT) } },
    // Load font from file into GPU memory (VRAM)
    Symbol { name: "LoadFont", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&FONT) } },
    // Load font from file with extended parameters, use NULL for codepoints and 0 for codepointCount to load the default character set
    Symbol { name: "LoadFontEx", sig: FnSig { params: &[K::Buffer, K::I32, K::Pointer, K::I32], ret: K::Struct(&FONT) } },
    // Load font from Image (XNA style)
    Symbol { name: "LoadFontFromImage", sig: FnSig { params: &[K::Struct(&IMAGE), K::Struct(&COLOR), K::I32], ret: K::Struct(&FONT) } },
    // Load font from memory buffer, fileType refers to extension: i.e. '.ttf'
    Symbol { name: "LoadFontFromMemory", sig: FnSig { params: &[K::Buffer, K::Buffer, K::I32, K::I32, K::Pointer, K::I32], ret: K::Struct(&FONT) } },
    // Check if a font is ready
    Symbol { name: "IsFontReady", sig: FnSig { params: &[K::Struct(&FONT)], ret: K::U8 } },
    // Load font data for further use
    Symbol { name: "LoadFontData", sig: FnSig { params: &[K::Buffer, K::I32, K::I32, K::Pointer, K::I32, K::I32], ret: K::Pointer } },
    // Generate image font atlas using chars info
    Symbol { name: "GenImageFontAtlas", sig: FnSig { params: &[K::Pointer, K::Pointer, K::I32, K::I32, K::I32, K::I32], ret: K::Struct(&IMAGE) } },
    // Unload font chars info data (RAM)
    Symbol { name: "UnloadFontData", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Void } },
    // Unload font from GPU memory (VRAM)
    Symbol { name: "UnloadFont", sig: FnSig { params: &[K::Struct(&FONT)], ret: K::Void } },
    // Export font as code file, returns true on success
    Symbol { name: "ExportFontAsCode", sig: FnSig { params: &[K::Struct(&FONT), K::Buffer], ret: K::U8 } },
    // Draw current FPS
    Symbol { name: "DrawFPS", sig: FnSig { params: &[K::I32, K::I32], ret: K::Void } },
    // Draw text (using default font)
    Symbol { name: "DrawText", sig: FnSig { params: &[K::Buffer, K::I32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw text using font and additional parameters
    Symbol { name: "DrawTextEx", sig: FnSig { params: &[K::Struct(&FONT), K::Buffer, K::Struct(&VECTOR2), K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw text using Font and pro parameters (rotation)
    Symbol { name: "DrawTextPro", sig: FnSig { params: &[K::Struct(&FONT), K::Buffer, K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw one character (codepoint)
    Symbol { name: "DrawTextCodepoint", sig: FnSig { params: &[K::Struct(&FONT), K::I32, K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw multiple character (codepoint)
    Symbol { name: "DrawTextCodepoints", sig: FnSig { params: &[K::Struct(&FONT), K::Pointer, K::I32, K::Struct(&VECTOR2), K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Set vertical line spacing when drawing with line-breaks
    Symbol { name: "SetTextLineSpacing", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // Measure string width for default font
    Symbol { name: "MeasureText", sig: FnSig { params: &[K::Buffer, K::I32], ret: K::I32 } },
    // Measure string size for Font
    Symbol { name: "MeasureTextEx", sig: FnSig { params: &[K::Struct(&FONT), K::Buffer, K::F32, K::F32], ret: K::Struct(&VECTOR2) } },
    // Get glyph index position in font for a codepoint (unicode character), fallback to '?' if not found
    Symbol { name: "GetGlyphIndex", sig: FnSig { params: &[K::Struct(&FONT), K::I32], ret: K::I32 } },
    // Get glyph font info data for a codepoint (unicode character), fallback to '?' if not found
    Symbol { name: "GetGlyphInfo", sig: FnSig { params: &[K::Struct(&FONT), K::I32], ret: K::Struct(&GLYPH_INFO) } },
    // Get glyph rectangle in font atlas for a codepoint (unicode character), fallback to '?' if not found
    Symbol { name: "GetGlyphAtlasRec", sig: FnSig { params: &[K::Struct(&FONT), K::I32], ret: K::Struct(&RECTANGLE) } },
    // Load UTF-8 text encoded from codepoints array
    Symbol { name: "LoadUTF8", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Buffer } },
    // Unload UTF-8 text encoded from codepoints array
    Symbol { name: "UnloadUTF8", sig: FnSig { params: &[K::Buffer], ret: K::Void } },
    // Load all codepoints from a UTF-8 text string, codepoints count returned by parameter
    Symbol { name: "LoadCodepoints", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::Pointer } },
    // Unload codepoints data from memory
    Symbol { name: "UnloadCodepoints", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Get total number of codepoints in a UTF-8 encoded string
    Symbol { name: "GetCodepointCount", sig: FnSig { params: &[K::Buffer], ret: K::I32 } },
    // Get next codepoint in a UTF-8 encoded string, 0x3f('?') is returned on failure
    Symbol { name: "GetCodepoint", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::I32 } },
    // Get next codepoint in a UTF-8 encoded string, 0x3f('?') is returned on failure
    Symbol { name: "GetCodepointNext", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::I32 } },
    // Get previous codepoint in a UTF-8 encoded string, 0x3f('?') is returned on failure
    Symbol { name: "GetCodepointPrevious", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::I32 } },
    // Encode one codepoint into UTF-8 byte array (array length returned as parameter)
    Symbol { name: "CodepointToUTF8", sig: FnSig { params: &[K::I32, K::Pointer], ret: K::Buffer } },
    // Copy one string to another, returns bytes copied
    Symbol { name: "TextCopy", sig: FnSig { params: &[K::Buffer, K::Buffer], ret: K::I32 } },
    // Check if two text string are equal
    Symbol { name: "TextIsEqual", sig: FnSig { params: &[K::Buffer, K::Buffer], ret: K::U8 } },
    // Get text length, checks for '\0' ending
    Symbol { name: "TextLength", sig: FnSig { params: &[K::Buffer], ret: K::U32 } },
    // Get a piece of a text string
    Symbol { name: "TextSubtext", sig: FnSig { params: &[K::Buffer, K::I32, K::I32], ret: K::Buffer } },
    // Replace text string (WARNING: memory must be freed!)
    Symbol { name: "TextReplace", sig: FnSig { params: &[K::Buffer, K::Buffer, K::Buffer], ret: K::Buffer } },
    // Insert text in a position (WARNING: memory must be freed!)
    Symbol { name: "TextInsert", sig: FnSig { params: &[K::Buffer, K::Buffer, K::I32], ret: K::Buffer } },
    // Join text strings with delimiter
    Symbol { name: "TextJoin", sig: FnSig { params: &[K::Buffer, K::I32, K::Buffer], ret: K::Buffer } },
    // Split text into multiple strings
    Symbol { name: "TextSplit", sig: FnSig { params: &[K::Buffer, K::I8, K::Pointer], ret: K::Buffer } },
    // Append text at specific position and move cursor!
    Symbol { name: "TextAppend", sig: FnSig { params: &[K::Buffer, K::Buffer, K::Pointer], ret: K::Void } },
    // Find first text occurrence within a string
    Symbol { name: "TextFindIndex", sig: FnSig { params: &[K::Buffer, K::Buffer], ret: K::I32 } },
    // Get upper case version of provided string
    Symbol { name: "TextToUpper", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Get lower case version of provided string
    Symbol { name: "TextToLower", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Get Pascal case notation version of provided string
    Symbol { name: "TextToPascal", sig: FnSig { params: &[K::Buffer], ret: K::Buffer } },
    // Get integer value from text (negative values not supported)
    Symbol { name: "TextToInteger", sig: FnSig { params: &[K::Buffer], ret: K::I32 } },
    // Draw a line in 3D world space
    Symbol { name: "DrawLine3D", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a point in 3D space, actually a small line
    Symbol { name: "DrawPoint3D", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a circle in 3D world space
    Symbol { name: "DrawCircle3D", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::Struct(&VECTOR3), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a color-filled triangle (vertex in counter-clockwise order!)
    Symbol { name: "DrawTriangle3D", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a triangle strip defined by points
    Symbol { name: "DrawTriangleStrip3D", sig: FnSig { params: &[K::Pointer, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw cube
    Symbol { name: "DrawCube", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw cube (Vector version)
    Symbol { name: "DrawCubeV", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&COLOR)], ret: K::Void } },
    // Draw cube wires
    Symbol { name: "DrawCubeWires", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::F32, K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw cube wires (Vector version)
    Symbol { name: "DrawCubeWiresV", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&COLOR)], ret: K::Void } },
    // Draw sphere
    Symbol { name: "DrawSphere", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw sphere with extended parameters
    Symbol { name: "DrawSphereEx", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw sphere wires
    Symbol { name: "DrawSphereWires", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a cylinder/cone
    Symbol { name: "DrawCylinder", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::F32, K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a cylinder with base at startPos and top at endPos
    Symbol { name: "DrawCylinderEx", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::F32, K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a cylinder/cone wires
    Symbol { name: "DrawCylinderWires", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::F32, K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a cylinder wires with base at startPos and top at endPos
    Symbol { name: "DrawCylinderWiresEx", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::F32, K::F32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a capsule with the center of its sphere caps at startPos and endPos
    Symbol { name: "DrawCapsule", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::F32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw capsule wireframe with the center of its sphere caps at startPos and endPos
    Symbol { name: "DrawCapsuleWires", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::F32, K::I32, K::I32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a plane XZ
    Symbol { name: "DrawPlane", sig: FnSig { params: &[K::Struct(&VECTOR3), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a ray line
    Symbol { name: "DrawRay", sig: FnSig { params: &[K::Struct(&RAY), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a grid (centered at (0, 0, 0))
    Symbol { name: "DrawGrid", sig: FnSig { params: &[K::I32, K::F32], ret: K::Void } },
    // Load model from files (meshes and materials)
    Symbol { name: "LoadModel", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&MODEL) } },
    // Load model from generated mesh (default material)
    Symbol { name: "LoadModelFromMesh", sig: FnSig { params: &[K::Struct(&MESH)], ret: K::Struct(&MODEL) } },
    // Check if a model is ready
    Symbol { name: "IsModelReady", sig: FnSig { params: &[K::Struct(&MODEL)], ret: K::U8 } },
    // Unload model (including meshes) from memory (RAM and/or VRAM)
    Symbol { name: "UnloadModel", sig: FnSig { params: &[K::Struct(&MODEL)], ret: K::Void } },
    // Compute model bounding box limits (considers all meshes)
    Symbol { name: "GetModelBoundingBox", sig: FnSig { params: &[K::Struct(&MODEL)], ret: K::Struct(&BOUNDING_BOX) } },
    // Draw a model (with texture if set)
    Symbol { name: "DrawModel", sig: FnSig { params: &[K::Struct(&MODEL), K::Struct(&VECTOR3), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a model with extended parameters
    Symbol { name: "DrawModelEx", sig: FnSig { params: &[K::Struct(&MODEL), K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::F32, K::Struct(&VECTOR3), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a model wires (with texture if set)
    Symbol { name: "DrawModelWires", sig: FnSig { params: &[K::Struct(&MODEL), K::Struct(&VECTOR3), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a model wires (with texture if set) with extended parameters
    Symbol { name: "DrawModelWiresEx", sig: FnSig { params: &[K::Struct(&MODEL), K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::F32, K::Struct(&VECTOR3), K::Struct(&COLOR)], ret: K::Void } },
    // Draw bounding box (wires)
    Symbol { name: "DrawBoundingBox", sig: FnSig { params: &[K::Struct(&BOUNDING_BOX), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a billboard texture
    Symbol { name: "DrawBillboard", sig: FnSig { params: &[K::Struct(&CAMERA3D), K::Struct(&TEXTURE2D), K::Struct(&VECTOR3), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Draw a billboard texture defined by source
    Symbol { name: "DrawBillboardRec", sig: FnSig { params: &[K::Struct(&CAMERA3D), K::Struct(&TEXTURE2D), K::Struct(&RECTANGLE), K::Struct(&VECTOR3), K::Struct(&VECTOR2), K::Struct(&COLOR)], ret: K::Void } },
    // Draw a billboard texture defined by source and rotation
    Symbol { name: "DrawBillboardPro", sig: FnSig { params: &[K::Struct(&CAMERA3D), K::Struct(&TEXTURE2D), K::Struct(&RECTANGLE), K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&VECTOR2), K::Struct(&VECTOR2), K::F32, K::Struct(&COLOR)], ret: K::Void } },
    // Upload mesh vertex data in GPU and provide VAO/VBO ids
    Symbol { name: "UploadMesh", sig: FnSig { params: &[K::Pointer, K::U8], ret: K::Void } },
    // Update mesh vertex data in GPU for a specific buffer index
    Symbol { name: "UpdateMeshBuffer", sig: FnSig { params: &[K::Struct(&MESH), K::I32, K::Buffer, K::I32, K::I32], ret: K::Void } },
    // Unload mesh data from CPU and GPU
    Symbol { name: "UnloadMesh", sig: FnSig { params: &[K::Struct(&MESH)], ret: K::Void } },
    // Draw a 3d mesh with material and transform
    Symbol { name: "DrawMesh", sig: FnSig { params: &[K::Struct(&MESH), K::Struct(&MATERIAL), K::Struct(&MATRIX)], ret: K::Void } },
    // Draw multiple mesh instances with material and different transforms
    Symbol { name: "DrawMeshInstanced", sig: FnSig { params: &[K::Struct(&MESH), K::Struct(&MATERIAL), K::Pointer, K::I32], ret: K::Void } },
    // Export mesh data to file, returns true on success
    Symbol { name: "ExportMesh", sig: FnSig { params: &[K::Struct(&MESH), K::Buffer], ret: K::U8 } },
    // Compute mesh bounding box limits
    Symbol { name: "GetMeshBoundingBox", sig: FnSig { params: &[K::Struct(&MESH)], ret: K::Struct(&BOUNDING_BOX) } },
    // Compute mesh tangents
    Symbol { name: "GenMeshTangents", sig: FnSig { params: &[K::Pointer], ret: K::Void } },
    // Generate polygonal mesh
    Symbol { name: "GenMeshPoly", sig: FnSig { params: &[K::I32, K::F32], ret: K::Struct(&MESH) } },
    // Generate plane mesh (with subdivisions)
    Symbol { name: "GenMeshPlane", sig: FnSig { params: &[K::F32, K::F32, K::I32, K::I32], ret: K::Struct(&MESH) } },
    // Generate cuboid mesh
    Symbol { name: "GenMeshCube", sig: FnSig { params: &[K::F32, K::F32, K::F32], ret: K::Struct(&MESH) } },
    // Generate sphere mesh (standard sphere)
    Symbol { name: "GenMeshSphere", sig: FnSig { params: &[K::F32, K::I32, K::I32], ret: K::Struct(&MESH) } },
    // Generate half-sphere mesh (no bottom cap)
    Symbol { name: "GenMeshHemiSphere", sig: FnSig { params: &[K::F32, K::I32, K::I32], ret: K::Struct(&MESH) } },
    // Generate cylinder mesh
    Symbol { name: "GenMeshCylinder", sig: FnSig { params: &[K::F32, K::F32, K::I32], ret: K::Struct(&MESH) } },
    // Generate cone/pyramid mesh
    Symbol { name: "GenMeshCone", sig: FnSig { params: &[K::F32, K::F32, K::I32], ret: K::Struct(&MESH) } },
    // Generate torus mesh
    Symbol { name: "GenMeshTorus", sig: FnSig { params: &[K::F32, K::F32, K::I32, K::I32], ret: K::Struct(&MESH) } },
    // Generate trefoil knot mesh
    Symbol { name: "GenMeshKnot", sig: FnSig { params: &[K::F32, K::F32, K::I32, K::I32], ret: K::Struct(&MESH) } },
    // Generate heightmap mesh from image data
    Symbol { name: "GenMeshHeightmap", sig: FnSig { params: &[K::Struct(&IMAGE), K::Struct(&VECTOR3)], ret: K::Struct(&MESH) } },
    // Generate cubes-based map mesh from image data
    Symbol { name: "GenMeshCubicmap", sig: FnSig { params: &[K::Struct(&IMAGE), K::Struct(&VECTOR3)], ret: K::Struct(&MESH) } },
    // Load materials from model file
    Symbol { name: "LoadMaterials", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::Pointer } },
    // Load default material (Supports: DIFFUSE, SPECULAR, NORMAL maps)
    Symbol { name: "LoadMaterialDefault", sig: FnSig { params: &[], ret: K::Struct(&MATERIAL) } },
    // Check if a material is ready
    Symbol { name: "IsMaterialReady", sig: FnSig { params: &[K::Struct(&MATERIAL)], ret: K::U8 } },
    // Unload material from GPU memory (VRAM)
    Symbol { name: "UnloadMaterial", sig: FnSig { params: &[K::Struct(&MATERIAL)], ret: K::Void } },
    // Set texture for a material map type (MATERIAL_MAP_DIFFUSE, MATERIAL_MAP_SPECULAR...)
    Symbol { name: "SetMaterialTexture", sig: FnSig { params: &[K::Pointer, K::I32, K::Struct(&TEXTURE2D)], ret: K::Void } },
    // Set material for a mesh
    Symbol { name: "SetModelMeshMaterial", sig: FnSig { params: &[K::Pointer, K::I32, K::I32], ret: K::Void } },
    // Load model animations from file
    Symbol { name: "LoadModelAnimations", sig: FnSig { params: &[K::Buffer, K::Pointer], ret: K::Pointer } },
    // Update model animation pose
    Symbol { name: "UpdateModelAnimation", sig: FnSig { params: &[K::Struct(&MODEL), K::Struct(&MODEL_ANIMATION), K::I32], ret: K::Void } },
    // Unload animation data
    Symbol { name: "UnloadModelAnimation", sig: FnSig { params: &[K::Struct(&MODEL_ANIMATION)], ret: K::Void } },
    // Unload animation array data
    Symbol { name: "UnloadModelAnimations", sig: FnSig { params: &[K::Pointer, K::I32], ret: K::Void } },
    // Check model animation skeleton match
    Symbol { name: "IsModelAnimationValid", sig: FnSig { params: &[K::Struct(&MODEL), K::Struct(&MODEL_ANIMATION)], ret: K::U8 } },
    // Check collision between two spheres
    Symbol { name: "CheckCollisionSpheres", sig: FnSig { params: &[K::Struct(&VECTOR3), K::F32, K::Struct(&VECTOR3), K::F32], ret: K::U8 } },
    // Check collision between two bounding boxes
    Symbol { name: "CheckCollisionBoxes", sig: FnSig { params: &[K::Struct(&BOUNDING_BOX), K::Struct(&BOUNDING_BOX)], ret: K::U8 } },
    // Check collision between box and sphere
    Symbol { name: "CheckCollisionBoxSphere", sig: FnSig { params: &[K::Struct(&BOUNDING_BOX), K::Struct(&VECTOR3), K::F32], ret: K::U8 } },
    // Get collision info between ray and sphere
    Symbol { name: "GetRayCollisionSphere", sig: FnSig { params: &[K::Struct(&RAY), K::Struct(&VECTOR3), K::F32], ret: K::Struct(&RAY_COLLISION) } },
    // Get collision info between ray and box
    Symbol { name: "GetRayCollisionBox", sig: FnSig { params: &[K::Struct(&RAY), K::Struct(&BOUNDING_BOX)], ret: K::Struct(&RAY_COLLISION) } },
    // Get collision info between ray and mesh
    Symbol { name: "GetRayCollisionMesh", sig: FnSig { params: &[K::Struct(&RAY), K::Struct(&MESH), K::Struct(&MATRIX)], ret: K::Struct(&RAY_COLLISION) } },
    // Get collision info between ray and triangle
    Symbol { name: "GetRayCollisionTriangle", sig: FnSig { params: &[K::Struct(&RAY), K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&VECTOR3)], ret: K::Struct(&RAY_COLLISION) } },
    // Get collision info between ray and quad
    Symbol { name: "GetRayCollisionQuad", sig: FnSig { params: &[K::Struct(&RAY), K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&VECTOR3), K::Struct(&VECTOR3)], ret: K::Struct(&RAY_COLLISION) } },
    // Initialize audio device and context
    Symbol { name: "InitAudioDevice", sig: FnSig { params: &[], ret: K::Void } },
    // Close the audio device and context
    Symbol { name: "CloseAudioDevice", sig: FnSig { params: &[], ret: K::Void } },
    // Check if audio device has been initialized successfully
    Symbol { name: "IsAudioDeviceReady", sig: FnSig { params: &[], ret: K::U8 } },
    // Set master volume (listener)
    Symbol { name: "SetMasterVolume", sig: FnSig { params: &[K::F32], ret: K::Void } },
    // Get master volume (listener)
    Symbol { name: "GetMasterVolume", sig: FnSig { params: &[], ret: K::F32 } },
    // Load wave data from file
    Symbol { name: "LoadWave", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&WAVE) } },
    // Load wave from memory buffer, fileType refers to extension: i.e. '.wav'
    Symbol { name: "LoadWaveFromMemory", sig: FnSig { params: &[K::Buffer, K::Buffer, K::I32], ret: K::Struct(&WAVE) } },
    // Checks if wave data is ready
    Symbol { name: "IsWaveReady", sig: FnSig { params: &[K::Struct(&WAVE)], ret: K::U8 } },
    // Load sound from file
    Symbol { name: "LoadSound", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&SOUND) } },
    // Load sound from wave data
    Symbol { name: "LoadSoundFromWave", sig: FnSig { params: &[K::Struct(&WAVE)], ret: K::Struct(&SOUND) } },
    // Create a new sound that shares the same sample data as the source sound, does not own the sound data
    Symbol { name: "LoadSoundAlias", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::Struct(&SOUND) } },
    // Checks if a sound is ready
    Symbol { name: "IsSoundReady", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::U8 } },
    // Update sound buffer with new data
    Symbol { name: "UpdateSound", sig: FnSig { params: &[K::Struct(&SOUND), K::Buffer, K::I32], ret: K::Void } },
    // Unload wave data
    Symbol { name: "UnloadWave", sig: FnSig { params: &[K::Struct(&WAVE)], ret: K::Void } },
    // Unload sound
    Symbol { name: "UnloadSound", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::Void } },
    // Unload a sound alias (does not deallocate sample data)
    Symbol { name: "UnloadSoundAlias", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::Void } },
    // Export wave data to file, returns true on success
    Symbol { name: "ExportWave", sig: FnSig { params: &[K::Struct(&WAVE), K::Buffer], ret: K::U8 } },
    // Export wave sample data to code (.h), returns true on success
    Symbol { name: "ExportWaveAsCode", sig: FnSig { params: &[K::Struct(&WAVE), K::Buffer], ret: K::U8 } },
    // Play a sound
    Symbol { name: "PlaySound", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::Void } },
    // Stop playing a sound
    Symbol { name: "StopSound", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::Void } },
    // Pause a sound
    Symbol { name: "PauseSound", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::Void } },
    // Resume a paused sound
    Symbol { name: "ResumeSound", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::Void } },
    // Check if a sound is currently playing
    Symbol { name: "IsSoundPlaying", sig: FnSig { params: &[K::Struct(&SOUND)], ret: K::U8 } },
    // Set volume for a sound (1.0 is max level)
    Symbol { name: "SetSoundVolume", sig: FnSig { params: &[K::Struct(&SOUND), K::F32], ret: K::Void } },
    // Set pitch for a sound (1.0 is base level)
    Symbol { name: "SetSoundPitch", sig: FnSig { params: &[K::Struct(&SOUND), K::F32], ret: K::Void } },
    // Set pan for a sound (0.5 is center)
    Symbol { name: "SetSoundPan", sig: FnSig { params: &[K::Struct(&SOUND), K::F32], ret: K::Void } },
    // Copy a wave to a new wave
    Symbol { name: "WaveCopy", sig: FnSig { params: &[K::Struct(&WAVE)], ret: K::Struct(&WAVE) } },
    // Crop a wave to defined samples range
    Symbol { name: "WaveCrop", sig: FnSig { params: &[K::Pointer, K::I32, K::I32], ret: K::Void } },
    // Convert wave data to desired format
    Symbol { name: "WaveFormat", sig: FnSig { params: &[K::Pointer, K::I32, K::I32, K::I32], ret: K::Void } },
    // Load samples data from wave as a 32bit float data array
    Symbol { name: "LoadWaveSamples", sig: FnSig { params: &[K::Struct(&WAVE)], ret: K::Buffer } },
    // Unload samples data loaded with LoadWaveSamples()
    Symbol { name: "UnloadWaveSamples", sig: FnSig { params: &[K::Buffer], ret: K::Void } },
    // Load music stream from file
    Symbol { name: "LoadMusicStream", sig: FnSig { params: &[K::Buffer], ret: K::Struct(&MUSIC) } },
    // Load music stream from data
    Symbol { name: "LoadMusicStreamFromMemory", sig: FnSig { params: &[K::Buffer, K::Buffer, K::I32], ret: K::Struct(&MUSIC) } },
    // Checks if a music stream is ready
    Symbol { name: "IsMusicReady", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::U8 } },
    // Unload music stream
    Symbol { name: "UnloadMusicStream", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::Void } },
    // Start music playing
    Symbol { name: "PlayMusicStream", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::Void } },
    // Check if music is playing
    Symbol { name: "IsMusicStreamPlaying", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::U8 } },
    // Updates buffers for music streaming
    Symbol { name: "UpdateMusicStream", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::Void } },
    // Stop music playing
    Symbol { name: "StopMusicStream", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::Void } },
    // Pause music playing
    Symbol { name: "PauseMusicStream", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::Void } },
    // Resume playing paused music
    Symbol { name: "ResumeMusicStream", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::Void } },
    // Seek music to a position (in seconds)
    Symbol { name: "SeekMusicStream", sig: FnSig { params: &[K::Struct(&MUSIC), K::F32], ret: K::Void } },
    // Set volume for music (1.0 is max level)
    Symbol { name: "SetMusicVolume", sig: FnSig { params: &[K::Struct(&MUSIC), K::F32], ret: K::Void } },
    // Set pitch for a music (1.0 is base level)
    Symbol { name: "SetMusicPitch", sig: FnSig { params: &[K::Struct(&MUSIC), K::F32], ret: K::Void } },
    // Set pan for a music (0.5 is center)
    Symbol { name: "SetMusicPan", sig: FnSig { params: &[K::Struct(&MUSIC), K::F32], ret: K::Void } },
    // Get music time length (in seconds)
    Symbol { name: "GetMusicTimeLength", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::F32 } },
    // Get current music time played (in seconds)
    Symbol { name: "GetMusicTimePlayed", sig: FnSig { params: &[K::Struct(&MUSIC)], ret: K::F32 } },
    // Load audio stream (to stream raw audio pcm data)
    Symbol { name: "LoadAudioStream", sig: FnSig { params: &[K::U32, K::U32, K::U32], ret: K::Struct(&AUDIO_STREAM) } },
    // Checks if an audio stream is ready
    Symbol { name: "IsAudioStreamReady", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM)], ret: K::U8 } },
    // Unload audio stream and free memory
    Symbol { name: "UnloadAudioStream", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM)], ret: K::Void } },
    // Update audio stream buffers with data
    Symbol { name: "UpdateAudioStream", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM), K::Buffer, K::I32], ret: K::Void } },
    // Check if any audio stream buffers requires refill
    Symbol { name: "IsAudioStreamProcessed", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM)], ret: K::U8 } },
    // Play audio stream
    Symbol { name: "PlayAudioStream", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM)], ret: K::Void } },
    // Pause audio stream
    Symbol { name: "PauseAudioStream", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM)], ret: K::Void } },
    // Resume audio stream
    Symbol { name: "ResumeAudioStream", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM)], ret: K::Void } },
    // Check if audio stream is playing
    Symbol { name: "IsAudioStreamPlaying", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM)], ret: K::U8 } },
    // Stop audio stream
    Symbol { name: "StopAudioStream", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM)], ret: K::Void } },
    // Set volume for audio stream (1.0 is max level)
    Symbol { name: "SetAudioStreamVolume", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM), K::F32], ret: K::Void } },
    // Set pitch for audio stream (1.0 is base level)
    Symbol { name: "SetAudioStreamPitch", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM), K::F32], ret: K::Void } },
    // Set pan for audio stream (0.5 is centered)
    Symbol { name: "SetAudioStreamPan", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM), K::F32], ret: K::Void } },
    // Default size for new audio streams
    Symbol { name: "SetAudioStreamBufferSizeDefault", sig: FnSig { params: &[K::I32], ret: K::Void } },
    // Audio thread callback to request new data
    Symbol { name: "SetAudioStreamCallback", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM), K::Function], ret: K::Void } },
    // Attach audio stream processor to stream, receives the samples as 'float'
    Symbol { name: "AttachAudioStreamProcessor", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM), K::Function], ret: K::Void } },
    // Detach audio stream processor from stream
    Symbol { name: "DetachAudioStreamProcessor", sig: FnSig { params: &[K::Struct(&AUDIO_STREAM), K::Function], ret: K::Void } },
    // Attach audio stream processor to the entire audio pipeline, receives the samples as 'float'
    Symbol { name: "AttachAudioMixedProcessor", sig: FnSig { params: &[K::Function], ret: K::Void } },
    // Detach audio stream processor from the entire audio pipeline
    Symbol { name: "DetachAudioMixedProcessor", sig: FnSig { params: &[K::Function], ret: K::Void } },
];
