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

use std::{
    os::raw::{c_char, c_uint},
    ptr,
};

use rtc_engine::peer_connection_factory::PeerConnectionFactory;

use crate::{
    buffer::{clear_text, write_text},
    error::InteropError,
    globals,
    handle::{guard, guard_value, into_handle},
    result::RtcResultU4,
    types::{RtcBool32, RtcPeerConnectionFactoryHandle},
};

/// Initializes the library, calling it again is a no-op. The logger follows
/// `RUST_LOG` and defaults to `info`.
#[no_mangle]
pub extern "C" fn LibWebRTC_Initialize() -> RtcBool32 {
    guard_value("LibWebRTC_Initialize", RtcBool32::FALSE, || {
        if !globals::initialize() {
            log::debug!("LibWebRTC_Initialize called twice");
        }
        Ok(RtcBool32::TRUE)
    })
}

/// Creates an uninitialized factory, or null before `LibWebRTC_Initialize`.
#[no_mangle]
pub extern "C" fn LibWebRTC_CreateRTCPeerConnectionFactory() -> RtcPeerConnectionFactoryHandle {
    guard_value("LibWebRTC_CreateRTCPeerConnectionFactory", ptr::null_mut(), || {
        globals::check_initialized()?;
        Ok(into_handle(PeerConnectionFactory::create()))
    })
}

/// Factories created so far stay usable until released.
#[no_mangle]
pub extern "C" fn LibWebRTC_Terminate() {
    guard_value("LibWebRTC_Terminate", (), || {
        if !globals::terminate() {
            log::debug!("LibWebRTC_Terminate called on an uninitialized library");
        }
        Ok(())
    })
}

/// Writes the description of `code`, known or not, into `buffer`.
///
/// # Safety
/// `buffer` must be null or valid for `cch_buffer` bytes.
#[no_mangle]
pub unsafe extern "C" fn LibWebRTC_GetErrorMessage(
    code: RtcResultU4,
    buffer: *mut c_char,
    cch_buffer: c_uint,
) -> RtcResultU4 {
    let capacity = cch_buffer as usize;
    clear_text(buffer, capacity);
    guard("LibWebRTC_GetErrorMessage", || {
        if buffer.is_null() {
            return Err(InteropError::NullPointer("buffer"));
        }
        write_text(code.message(), buffer, capacity)
    })
}
