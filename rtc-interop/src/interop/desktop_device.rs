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

use std::{os::raw::c_int, ptr};

use rtc_engine::{desktop_device::DesktopDevice, desktop_media_list::MediaSource};

use crate::{
    conversion,
    handle::{guard, into_handle, object, out_ref, reset_out, retain},
    result::RtcResultU4,
    types::{
        RtcDesktopCapturerHandle, RtcDesktopDeviceHandle, RtcDesktopMediaListHandle,
        RtcDesktopMediaSourceHandle,
    },
};

/// # Safety
/// Handles must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopDevice_CreateDesktopCapturer(
    device: RtcDesktopDeviceHandle,
    source: RtcDesktopMediaSourceHandle,
    out: *mut RtcDesktopCapturerHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCDesktopDevice_CreateDesktopCapturer", || {
        let device = object::<DesktopDevice>(device, "device")?;
        let source = retain::<MediaSource>(source, "source")?;
        let out = out_ref(out, "out")?;
        *out = into_handle(device.create_desktop_capturer(source));
        Ok(())
    })
}

/// Lists are cached per type, repeated calls hand out the same list.
///
/// # Safety
/// `device` must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopDevice_GetDesktopMediaList(
    device: RtcDesktopDeviceHandle,
    desktop_type: c_int,
    out: *mut RtcDesktopMediaListHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCDesktopDevice_GetDesktopMediaList", || {
        let device = object::<DesktopDevice>(device, "device")?;
        let out = out_ref(out, "out")?;
        let desktop_type = conversion::desktop_type(desktop_type)?;
        *out = into_handle(device.get_desktop_media_list(desktop_type));
        Ok(())
    })
}
