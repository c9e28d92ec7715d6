// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(dead_code)]

use std::{
    ffi::{CStr, CString},
    os::raw::c_char,
    ptr,
    time::{Duration, Instant},
};

use rtc_interop::{
    interop::{
        libwebrtc::LibWebRTC_Initialize,
        peer_connection_factory::{
            RTCPeerConnectionFactory_Create, RTCPeerConnectionFactory_CreateAudioSource,
            RTCPeerConnectionFactory_CreateAudioTrack, RTCPeerConnectionFactory_CreateStream,
            RTCPeerConnectionFactory_Initialize,
        },
        ref_counted::RefCountedObject_Release,
    },
    RtcBool32, RtcObjectHandle, RtcResultU4,
};

pub fn init() {
    assert_eq!(LibWebRTC_Initialize(), RtcBool32::TRUE);
}

/// Releases the reference it owns when dropped.
#[derive(Debug)]
pub struct Handle(pub RtcObjectHandle);

impl Handle {
    pub fn new(handle: RtcObjectHandle) -> Self {
        assert!(!handle.is_null(), "expected a handle");
        Self(handle)
    }

    pub fn raw(&self) -> RtcObjectHandle {
        self.0
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        unsafe { RefCountedObject_Release(self.0) };
    }
}

/// An initialized factory.
pub fn factory() -> Handle {
    init();
    let factory = Handle::new(RTCPeerConnectionFactory_Create());
    assert_eq!(unsafe { RTCPeerConnectionFactory_Initialize(factory.raw()) }, RtcBool32::TRUE);
    factory
}

pub fn cstr(value: &str) -> CString {
    CString::new(value).unwrap()
}

pub fn text(buf: &[c_char]) -> String {
    unsafe { CStr::from_ptr(buf.as_ptr()) }.to_str().unwrap().to_owned()
}

/// Runs a `(handle, out)` style call and wraps the handle it produced.
pub fn created(f: impl FnOnce(*mut RtcObjectHandle) -> RtcResultU4) -> Handle {
    let mut out: RtcObjectHandle = ptr::null_mut();
    let result = f(&mut out);
    assert_eq!(result, RtcResultU4::SUCCESS, "{}", result);
    Handle::new(out)
}

pub fn stream(factory: &Handle, id: &str) -> Handle {
    let id = cstr(id);
    created(|out| unsafe { RTCPeerConnectionFactory_CreateStream(factory.raw(), id.as_ptr(), out) })
}

pub fn audio_track(factory: &Handle, id: &str) -> Handle {
    let label = cstr("microphone");
    let source = created(|out| unsafe {
        RTCPeerConnectionFactory_CreateAudioSource(factory.raw(), label.as_ptr(), out)
    });
    let id = cstr(id);
    created(|out| unsafe {
        RTCPeerConnectionFactory_CreateAudioTrack(factory.raw(), source.raw(), id.as_ptr(), out)
    })
}

/// Polls `condition` until it holds or two seconds pass.
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    condition()
}
