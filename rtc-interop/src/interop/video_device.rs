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
    os::raw::{c_char, c_int},
    ptr,
};

use rtc_engine::video_device::VideoDevice;

use crate::{
    buffer::{capacity, clear_text, write_text},
    error::InteropError,
    handle::{guard, guard_value, in_str, into_handle, object, out_ref, reset_out},
    result::RtcResultU4,
    types::{RtcVideoCapturerHandle, RtcVideoDeviceHandle},
};

/// Number of capture devices, 0 for an invalid handle.
///
/// # Safety
/// `device` must be null or a live video device handle.
#[no_mangle]
pub unsafe extern "C" fn RTCVideoDevice_NumberOfDevices(device: RtcVideoDeviceHandle) -> c_int {
    guard_value("RTCVideoDevice_NumberOfDevices", 0, || {
        let device = object::<VideoDevice>(device, "device")?;
        Ok(device.number_of_devices().try_into().unwrap_or(c_int::MAX))
    })
}

/// `product_id` is optional and skipped when null. All buffers are written
/// even if an earlier one truncated.
///
/// # Safety
/// `device` must be null or live, every buffer null or valid for its size.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn RTCVideoDevice_GetDeviceName(
    device: RtcVideoDeviceHandle,
    index: c_int,
    name: *mut c_char,
    cch_name: c_int,
    unique_id: *mut c_char,
    cch_unique_id: c_int,
    product_id: *mut c_char,
    cch_product_id: c_int,
) -> RtcResultU4 {
    let cch_name = capacity(cch_name);
    let cch_unique_id = capacity(cch_unique_id);
    let cch_product_id = capacity(cch_product_id);
    clear_text(name, cch_name);
    clear_text(unique_id, cch_unique_id);
    clear_text(product_id, cch_product_id);

    guard("RTCVideoDevice_GetDeviceName", || {
        let device = object::<VideoDevice>(device, "device")?;
        if name.is_null() {
            return Err(InteropError::NullPointer("name"));
        }
        if unique_id.is_null() {
            return Err(InteropError::NullPointer("unique_id"));
        }

        let info = device.get_device_name(index)?;
        let mut result = write_text(&info.name, name, cch_name);
        result = result.and(write_text(&info.unique_id, unique_id, cch_unique_id));
        if !product_id.is_null() {
            result = result.and(write_text(&info.product_id, product_id, cch_product_id));
        }
        result
    })
}

/// # Safety
/// `device` must be null or live, `name` null or NUL terminated, `out` null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCVideoDevice_CreateVideoCapturer(
    device: RtcVideoDeviceHandle,
    name: *const c_char,
    index: c_int,
    width: c_int,
    height: c_int,
    target_fps: c_int,
    out: *mut RtcVideoCapturerHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCVideoDevice_CreateVideoCapturer", || {
        let device = object::<VideoDevice>(device, "device")?;
        let out = out_ref(out, "out")?;
        let name = in_str(name, "name")?;
        *out = into_handle(device.create_capturer(name, index, width, height, target_fps)?);
        Ok(())
    })
}
