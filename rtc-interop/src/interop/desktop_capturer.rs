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

use rtc_engine::desktop_capturer::{CaptureState, DesktopCapturer};

use crate::{
    handle::{guard, guard_value, object},
    result::RtcResultU4,
    types::{RtcBool32, RtcDesktopCapturerHandle},
};

/// True once the capturer runs.
///
/// # Safety
/// `capturer` must be null or a live desktop capturer handle.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopCapturer_Start(capturer: RtcDesktopCapturerHandle) -> RtcBool32 {
    guard_value("RTCDesktopCapturer_Start", RtcBool32::FALSE, || {
        let capturer = object::<DesktopCapturer>(capturer, "capturer")?;
        Ok((capturer.start() == CaptureState::Running).into())
    })
}

/// # Safety
/// `capturer` must be null or a live desktop capturer handle.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopCapturer_Stop(
    capturer: RtcDesktopCapturerHandle,
) -> RtcResultU4 {
    guard("RTCDesktopCapturer_Stop", || {
        object::<DesktopCapturer>(capturer, "capturer")?.stop();
        Ok(())
    })
}

/// # Safety
/// `capturer` must be null or a live desktop capturer handle.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopCapturer_IsRunning(
    capturer: RtcDesktopCapturerHandle,
) -> RtcBool32 {
    guard_value("RTCDesktopCapturer_IsRunning", RtcBool32::FALSE, || {
        Ok(object::<DesktopCapturer>(capturer, "capturer")?.is_running().into())
    })
}
