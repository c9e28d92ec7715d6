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

use rtc_engine::video_device::VideoCapturer;

use crate::{
    handle::{guard, guard_value, object},
    result::RtcResultU4,
    types::{RtcBool32, RtcVideoCapturerHandle},
};

/// # Safety
/// `capturer` must be null or a live video capturer handle.
#[no_mangle]
pub unsafe extern "C" fn RTCVideoCapturer_StartCapture(
    capturer: RtcVideoCapturerHandle,
) -> RtcBool32 {
    guard_value("RTCVideoCapturer_StartCapture", RtcBool32::FALSE, || {
        Ok(object::<VideoCapturer>(capturer, "capturer")?.start_capture().into())
    })
}

/// # Safety
/// `capturer` must be null or a live video capturer handle.
#[no_mangle]
pub unsafe extern "C" fn RTCVideoCapturer_CaptureStarted(
    capturer: RtcVideoCapturerHandle,
) -> RtcBool32 {
    guard_value("RTCVideoCapturer_CaptureStarted", RtcBool32::FALSE, || {
        Ok(object::<VideoCapturer>(capturer, "capturer")?.capture_started().into())
    })
}

/// # Safety
/// `capturer` must be null or a live video capturer handle.
#[no_mangle]
pub unsafe extern "C" fn RTCVideoCapturer_StopCapture(
    capturer: RtcVideoCapturerHandle,
) -> RtcResultU4 {
    guard("RTCVideoCapturer_StopCapture", || {
        object::<VideoCapturer>(capturer, "capturer")?.stop_capture();
        Ok(())
    })
}
