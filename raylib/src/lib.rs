// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! # raylib - dynamic Rust bindings for the raylib C library
//!
//! Safe Rust bindings for raylib, driven entirely by the generated symbol
//! table in [`raylib_sys`]: the library is loaded at runtime with
//! `libloading`, every bound function gets a prepared libffi call interface,
//! and arguments and results are marshaled through fixed-layout byte
//! buffers that mirror the native ABI exactly.
//!
//! ## Overview
//!
//! - [`Raylib`] is the entry point: [`Raylib::load`] opens the dynamic
//!   library and resolves the symbol table once. The handle is cheap to
//!   clone and is passed explicitly to everything that calls the native
//!   side - there is no global state in this crate.
//! - Geometric values ([`Vector2`], [`Rectangle`], [`Matrix`], [`Color`],
//!   cameras, rays, ...) are plain value types encoded to and decoded from
//!   their native byte layouts, little-endian pinned.
//! - Resources ([`Image`], [`Texture2D`], [`Font`], [`Sound`], [`Music`],
//!   [`Mesh`], [`Model`], ...) wrap the opaque native descriptor structs.
//!   They are move-only and released with consuming `unload` methods: the
//!   native side owns the actual data, nothing is freed on drop, and
//!   forgetting to unload leaks the native resource.
//!
//! ## Example
//!
//! ```no_run
//! use raylib::{config::get_raylib_path, Color, Raylib};
//!
//! # fn main() -> Result<(), raylib::Error> {
//! let rl = Raylib::load(get_raylib_path())?;
//!
//! rl.init_window(800, 450, "raylib window");
//! rl.set_target_fps(60);
//!
//! while !rl.window_should_close() {
//!     rl.begin_drawing();
//!     rl.clear_background(Color::RAYWHITE);
//!     rl.draw_text("all systems operational", 190, 200, 20, Color::DARKGRAY);
//!     rl.end_drawing();
//! }
//!
//! rl.close_window();
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure model
//!
//! Native raylib signals failure through boolean or null-backed results,
//! never through status codes. Wrapper operations therefore return plain
//! values; `Result` appears only on the [`Raylib::load`] path. Check
//! `is_ready` on loaded resources to detect failed loads.
//!
//! ## Thread affinity
//!
//! raylib requires all calls on the thread that initialized the window and
//! audio device. The bindings do not verify this; it is a caller
//! obligation inherited from the native library.

mod api;
mod audio;
mod audio_stream;
mod automation;
mod collision;
mod color_ops;
mod cursor;
mod drawing;
mod error;
mod ffi;
mod file_drop;
mod font;
mod gamepad;
mod geom;
mod gesture;
mod image;
mod keyboard;
mod marshal;
mod material;
mod mesh;
mod model;
mod mouse;
mod music;
mod screen_space;
mod shapes;
mod shapes3d;
mod sound;
mod splines;
mod text;
mod texture;
mod timing;
mod touch;
mod view;
mod wave;
mod window;

pub mod config;

pub use api::{CallArg, CallRet, NativeCall, Raylib};
pub use audio_stream::AudioStream;
pub use automation::{AutomationEvent, AutomationEventList};
pub use drawing::BlendMode;
pub use error::{Error, Result};
pub use font::Font;
pub use geom::{
    BoundingBox, Camera2D, Camera3D, CameraProjection, Color, Matrix, NPatchInfo, NPatchLayout,
    Ray, RayCollision, Rectangle, Vector2, Vector3, Vector4,
};
pub use gesture::{Gesture, Gestures};
pub use image::Image;
pub use keyboard::KeyboardKey;
pub use material::{Material, MaterialMapIndex};
pub use mesh::Mesh;
pub use model::Model;
pub use mouse::{MouseButton, MouseCursor};
pub use music::Music;
pub use sound::Sound;
pub use texture::{CubemapLayout, RenderTexture2D, Texture2D, TextureCubemap, TextureFilter, TextureWrap};
pub use wave::Wave;
pub use window::{Monitor, WindowFlags};
