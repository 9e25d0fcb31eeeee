// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Automation event recording and playback.

use raylib_sys::{AUTOMATION_EVENT, AUTOMATION_EVENT_LIST};

use crate::api::CallArg;
use crate::marshal::encode_text;
use crate::view::StructView;
use crate::Raylib;

/// One recorded automation event.
#[derive(Debug)]
pub struct AutomationEvent {
    rl: Raylib,
    view: StructView,
}

impl AutomationEvent {
    /// Event frame.
    pub fn frame(&self) -> u32 {
        self.view.u32_field(0)
    }

    /// Event type (AutomationEventType value).
    pub fn event_type(&self) -> u32 {
        self.view.u32_field(1)
    }

    /// Play the recorded event.
    pub fn play(&self) {
        self.rl.call_void("PlayAutomationEvent", &[CallArg::Struct(self.view.bytes())]);
    }
}

/// A list of automation events, recorded or loaded from file.
#[derive(Debug)]
pub struct AutomationEventList {
    rl: Raylib,
    view: StructView,
}

impl AutomationEventList {
    /// Load automation events list from file, or an empty list with default
    /// capacity when no file is given.
    pub fn load(rl: &Raylib, file_name: Option<&str>) -> AutomationEventList {
        let encoded = file_name.map(encode_text);
        let arg = match &encoded {
            Some(bytes) => CallArg::Buffer(bytes),
            None => CallArg::Pointer(std::ptr::null_mut()),
        };
        let bytes = rl.call_struct("LoadAutomationEventList", &[arg]);
        AutomationEventList { rl: rl.clone(), view: StructView::new(bytes, &AUTOMATION_EVENT_LIST) }
    }

    /// Number of recorded events.
    pub fn count(&self) -> u32 {
        self.view.u32_field(1)
    }

    /// Materialize the recorded events by walking the native array.
    pub fn events(&self) -> Vec<AutomationEvent> {
        let count = self.count() as usize;
        let base = self.view.ptr_field(2).cast::<u8>();
        if base.is_null() {
            return Vec::new();
        }
        let stride = AUTOMATION_EVENT.size();
        let mut events = Vec::with_capacity(count);
        for index in 0..count {
            let bytes =
                unsafe { std::slice::from_raw_parts(base.add(index * stride), stride) }.to_vec();
            events.push(AutomationEvent {
                rl: self.rl.clone(),
                view: StructView::new(bytes, &AUTOMATION_EVENT),
            });
        }
        events
    }

    /// Unload automation events list.
    pub fn unload(mut self) {
        let ptr = self.view.as_mut_ptr();
        self.rl.call_void("UnloadAutomationEventList", &[CallArg::Pointer(ptr)]);
    }

    /// Export automation events list as text file, returns true on success.
    pub fn export(&self, file_name: &str) -> bool {
        let file_name = encode_text(file_name);
        self.rl.call_bool(
            "ExportAutomationEventList",
            &[CallArg::Struct(self.view.bytes()), CallArg::Buffer(&file_name)],
        )
    }

    /// Set this list as the recording target.
    pub fn set_active(&mut self) {
        let ptr = self.view.as_mut_ptr();
        self.rl.call_void("SetAutomationEventList", &[CallArg::Pointer(ptr)]);
    }
}

impl Raylib {
    /// Set automation event internal base frame to start recording.
    pub fn set_automation_event_base_frame(&self, frame: i32) {
        self.call_void("SetAutomationEventBaseFrame", &[CallArg::I32(frame)]);
    }

    /// Start recording automation events (a list must be set as target).
    pub fn start_automation_event_recording(&self) {
        self.call_void("StartAutomationEventRecording", &[]);
    }

    /// Stop recording automation events.
    pub fn stop_automation_event_recording(&self) {
        self.call_void("StopAutomationEventRecording", &[]);
    }
}
