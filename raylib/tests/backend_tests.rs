// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Marshaling tests against an injected fake backend.
//!
//! These tests exercise the encode → invoke → decode path of the wrapper
//! layer without a native library: a recording backend stands in for the
//! symbol table, capturing every call and feeding back canned results.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::ffi::CString;
use std::sync::{Arc, Mutex, Once};

use raylib::{CallArg, CallRet, Color, Image, NativeCall, Raylib, Vector2};

/// Ensures logging is initialized only once across all tests.
static LOG_ONCE: Once = Once::new();

fn init_logging() {
    LOG_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .init();
    });
}

/// Owned snapshot of one argument, recorded at invoke time.
#[derive(Clone, Debug, PartialEq)]
enum Recorded {
    U8(u8),
    I32(i32),
    U32(u32),
    F32(f32),
    /// Buffer and struct arguments, captured by value.
    Bytes(Vec<u8>),
    Ptr(usize),
    Other,
}

fn snapshot(arg: &CallArg<'_>) -> Recorded {
    match arg {
        CallArg::U8(v) => Recorded::U8(*v),
        CallArg::I32(v) => Recorded::I32(*v),
        CallArg::U32(v) => Recorded::U32(*v),
        CallArg::F32(v) => Recorded::F32(*v),
        CallArg::Buffer(bytes) => Recorded::Bytes(bytes.to_vec()),
        CallArg::Struct(bytes) => Recorded::Bytes(bytes.to_vec()),
        CallArg::Pointer(ptr) => Recorded::Ptr(*ptr as usize),
        _ => Recorded::Other,
    }
}

/// Recording stand-in for the native symbol table.
#[derive(Default)]
struct FakeBackend {
    calls: Mutex<Vec<(&'static str, Vec<Recorded>)>>,
    returns: Mutex<HashMap<&'static str, VecDeque<CallRet>>>,
}

// Safety: only raw pointers planted by the tests themselves travel through
// the queued results; the fake never dereferences anything.
unsafe impl Send for FakeBackend {}
unsafe impl Sync for FakeBackend {}

impl FakeBackend {
    fn new() -> Arc<Self> {
        init_logging();
        Arc::new(Self::default())
    }

    fn queue(&self, name: &'static str, ret: CallRet) {
        self.returns.lock().unwrap().entry(name).or_default().push_back(ret);
    }

    fn calls_named(&self, name: &str) -> Vec<Vec<Recorded>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(called, _)| *called == name)
            .map(|(_, args)| args.clone())
            .collect()
    }
}

impl NativeCall for FakeBackend {
    fn invoke(&self, name: &'static str, args: &[CallArg<'_>]) -> CallRet {
        self.calls.lock().unwrap().push((name, args.iter().map(snapshot).collect()));
        self.returns
            .lock()
            .unwrap()
            .get_mut(name)
            .and_then(VecDeque::pop_front)
            .unwrap_or(CallRet::Void)
    }
}

#[test]
fn boolean_results_use_nonzero_sentinel() {
    let backend = FakeBackend::new();
    backend.queue("WindowShouldClose", CallRet::U8(0));
    backend.queue("WindowShouldClose", CallRet::U8(1));
    backend.queue("WindowShouldClose", CallRet::U8(42));
    let rl = Raylib::with_backend(backend.clone());

    assert!(!rl.window_should_close());
    assert!(rl.window_should_close());
    // Any nonzero byte is logically true.
    assert!(rl.window_should_close());
}

#[test]
fn init_window_encodes_title_with_nul() {
    let backend = FakeBackend::new();
    let rl = Raylib::with_backend(backend.clone());

    rl.init_window(800, 450, "hello");

    let calls = backend.calls_named("InitWindow");
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![Recorded::I32(800), Recorded::I32(450), Recorded::Bytes(b"hello\0".to_vec())]
    );
}

#[test]
fn clear_background_passes_rgba_color_struct() {
    let backend = FakeBackend::new();
    let rl = Raylib::with_backend(backend.clone());

    rl.clear_background(Color::RED);

    let calls = backend.calls_named("ClearBackground");
    // Managed colors travel as R,G,B,A bytes, unlike the generated
    // blue-green-red-alpha packed constants.
    assert_eq!(calls[0], vec![Recorded::Bytes(vec![230, 41, 55, 255])]);
}

#[test]
fn line_strip_packs_points_into_one_buffer() {
    let backend = FakeBackend::new();
    let rl = Raylib::with_backend(backend.clone());

    let points =
        [Vector2::new(0.0, 1.0), Vector2::new(2.0, 3.0), Vector2::new(-4.0, 5.5)];
    rl.draw_line_strip(&points, Color::BLACK);

    let calls = backend.calls_named("DrawLineStrip");
    assert_eq!(calls.len(), 1);
    let Recorded::Bytes(packed) = &calls[0][0] else { panic!("expected packed buffer") };
    assert_eq!(packed.len(), points.len() * 8);
    for (index, point) in points.iter().enumerate() {
        let x = f32::from_le_bytes(packed[index * 8..index * 8 + 4].try_into().unwrap());
        let y = f32::from_le_bytes(packed[index * 8 + 4..index * 8 + 8].try_into().unwrap());
        assert_eq!((x, y), (point.x, point.y));
    }
    assert_eq!(calls[0][1], Recorded::I32(3));
}

#[test]
fn image_fields_are_read_lazily_from_the_descriptor() {
    let backend = FakeBackend::new();
    let mut descriptor = vec![0u8; 24];
    descriptor[8..12].copy_from_slice(&640i32.to_le_bytes());
    descriptor[12..16].copy_from_slice(&480i32.to_le_bytes());
    descriptor[16..20].copy_from_slice(&1i32.to_le_bytes());
    backend.queue("LoadImage", CallRet::Struct(descriptor.clone()));
    let rl = Raylib::with_backend(backend.clone());

    let image = Image::load(&rl, "sprite.png");
    assert_eq!(image.width(), 640);
    assert_eq!(image.height(), 480);
    assert_eq!(image.mipmaps(), 1);

    // Consuming unload passes the descriptor back by value, exactly once.
    image.unload();
    let unloads = backend.calls_named("UnloadImage");
    assert_eq!(unloads.len(), 1);
    assert_eq!(unloads[0], vec![Recorded::Bytes(descriptor)]);
}

#[test]
fn dropped_files_walk_releases_the_native_list_once() {
    let backend = FakeBackend::new();

    // Simulate a native FilePathList: two C strings behind a pointer array.
    let first = CString::new("/tmp/a.png").unwrap();
    let second = CString::new("/tmp/b.wav").unwrap();
    let entries: &'static mut [*const std::ffi::c_char; 2] =
        Box::leak(Box::new([first.as_ptr(), second.as_ptr()]));

    let mut list = vec![0u8; 16];
    list[0..4].copy_from_slice(&4u32.to_le_bytes()); // capacity
    list[4..8].copy_from_slice(&2u32.to_le_bytes()); // count
    list[8..16].copy_from_slice(&(entries.as_ptr() as u64).to_le_bytes());

    backend.queue("IsFileDropped", CallRet::U8(1));
    backend.queue("LoadDroppedFiles", CallRet::Struct(list.clone()));
    let rl = Raylib::with_backend(backend.clone());

    assert!(rl.is_file_dropped());
    let paths = rl.load_dropped_files();
    assert_eq!(paths, vec!["/tmp/a.png".to_string(), "/tmp/b.wav".to_string()]);

    // Exactly one matching unload, handed the same header struct.
    let unloads = backend.calls_named("UnloadDroppedFiles");
    assert_eq!(unloads.len(), 1);
    assert_eq!(unloads[0], vec![Recorded::Bytes(list)]);
}

#[test]
fn image_color_walk_decodes_rgba_and_unloads() {
    let backend = FakeBackend::new();

    // A 2x1 image descriptor and its native color array.
    let mut descriptor = vec![0u8; 24];
    descriptor[8..12].copy_from_slice(&2i32.to_le_bytes());
    descriptor[12..16].copy_from_slice(&1i32.to_le_bytes());
    backend.queue("GenImageColor", CallRet::Struct(descriptor));

    let pixels: &'static mut [u8; 8] = Box::leak(Box::new([230, 41, 55, 255, 0, 121, 241, 255]));
    backend.queue("LoadImageColors", CallRet::Pointer(pixels.as_mut_ptr().cast()));
    let rl = Raylib::with_backend(backend.clone());

    let image = Image::gen_color(&rl, 2, 1, Color::RED);
    let colors = image.load_colors();
    assert_eq!(colors, vec![Color::RED, Color::BLUE]);
    assert_eq!(backend.calls_named("UnloadImageColors").len(), 1);
}

#[test]
fn monitor_name_reads_native_string() {
    let backend = FakeBackend::new();
    backend.queue("GetCurrentMonitor", CallRet::I32(1));
    let name: &'static CString = Box::leak(Box::new(CString::new("Virtual Display").unwrap()));
    backend.queue("GetMonitorName", CallRet::Pointer(name.as_ptr() as *mut _));
    let rl = Raylib::with_backend(backend.clone());

    let monitor = rl.get_current_monitor();
    assert_eq!(monitor.id(), 1);
    assert_eq!(monitor.name(), "Virtual Display");
    assert_eq!(backend.calls_named("GetMonitorName")[0], vec![Recorded::I32(1)]);
}

#[test]
fn struct_results_decode_into_value_types() {
    let backend = FakeBackend::new();
    let mut position = vec![0u8; 8];
    position[0..4].copy_from_slice(&120.5f32.to_le_bytes());
    position[4..8].copy_from_slice(&(-16.0f32).to_le_bytes());
    backend.queue("GetMousePosition", CallRet::Struct(position));
    let rl = Raylib::with_backend(backend.clone());

    assert_eq!(rl.get_mouse_position(), Vector2::new(120.5, -16.0));
}

#[test]
fn window_state_flags_travel_as_bitmask() {
    let backend = FakeBackend::new();
    backend.queue("IsWindowState", CallRet::U8(1));
    let rl = Raylib::with_backend(backend.clone());

    use raylib::WindowFlags;
    assert!(rl.is_window_state(WindowFlags::VSYNC_HINT | WindowFlags::WINDOW_RESIZABLE));
    assert_eq!(
        backend.calls_named("IsWindowState")[0],
        vec![Recorded::U32(0x0000_0040 | 0x0000_0004)]
    );
}

#[test]
fn check_collision_lines_decodes_out_pointer_on_hit() {
    let backend = FakeBackend::new();
    backend.queue("CheckCollisionLines", CallRet::U8(0));
    let rl = Raylib::with_backend(backend.clone());

    let miss = rl.check_collision_lines(
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 1.0),
        Vector2::new(1.0, 1.0),
    );
    assert_eq!(miss, None);
}
