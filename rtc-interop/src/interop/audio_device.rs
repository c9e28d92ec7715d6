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
    os::raw::{c_char, c_int, c_uint},
    sync::Arc,
};

use rtc_engine::{
    audio_device::{AudioDevice, DeviceChangeCallback},
    config::AudioDeviceInfo,
    RtcResult,
};

use crate::{
    buffer::{capacity, clear_text, write_text},
    error::{InteropError, InteropResult},
    handle::{guard, guard_value, object, out_ref, reset_out},
    result::RtcResultU4,
    types::{RtcAudioDeviceChangeDelegate, RtcAudioDeviceHandle},
};

/// Writes both strings even when the first one is truncated.
unsafe fn write_device_info(
    info: &AudioDeviceInfo,
    name: *mut c_char,
    cch_name: usize,
    guid: *mut c_char,
    cch_guid: usize,
) -> InteropResult<()> {
    let name = write_text(&info.name, name, cch_name);
    let guid = write_text(&info.guid, guid, cch_guid);
    name.and(guid)
}

unsafe fn device_name(
    entry_point: &'static str,
    device: RtcAudioDeviceHandle,
    name: *mut c_char,
    cch_name: c_int,
    guid: *mut c_char,
    cch_guid: c_int,
    lookup: impl FnOnce(&AudioDevice) -> RtcResult<AudioDeviceInfo>,
) -> RtcResultU4 {
    let (cch_name, cch_guid) = (capacity(cch_name), capacity(cch_guid));
    clear_text(name, cch_name);
    clear_text(guid, cch_guid);
    guard(entry_point, || {
        let device = object::<AudioDevice>(device, "device")?;
        if name.is_null() {
            return Err(InteropError::NullPointer("name"));
        }
        if guid.is_null() {
            return Err(InteropError::NullPointer("guid"));
        }
        let info = lookup(device)?;
        write_device_info(&info, name, cch_name, guid, cch_guid)
    })
}

/// Number of playout devices, 0 for an invalid handle.
///
/// # Safety
/// `device` must be null or a live audio device handle.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_PlayoutDevices(device: RtcAudioDeviceHandle) -> c_int {
    guard_value("RTCAudioDevice_PlayoutDevices", 0, || {
        let device = object::<AudioDevice>(device, "device")?;
        Ok(device.playout_devices().try_into().unwrap_or(c_int::MAX))
    })
}

/// Number of recording devices, 0 for an invalid handle.
///
/// # Safety
/// `device` must be null or a live audio device handle.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_RecordingDevices(device: RtcAudioDeviceHandle) -> c_int {
    guard_value("RTCAudioDevice_RecordingDevices", 0, || {
        let device = object::<AudioDevice>(device, "device")?;
        Ok(device.recording_devices().try_into().unwrap_or(c_int::MAX))
    })
}

/// # Safety
/// `device` must be null or live, `name` and `guid` null or valid for their
/// sizes.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_PlayoutDeviceName(
    device: RtcAudioDeviceHandle,
    index: c_int,
    name: *mut c_char,
    cch_name: c_int,
    guid: *mut c_char,
    cch_guid: c_int,
) -> RtcResultU4 {
    device_name("RTCAudioDevice_PlayoutDeviceName", device, name, cch_name, guid, cch_guid, |d| {
        d.playout_device_name(index)
    })
}

/// # Safety
/// `device` must be null or live, `name` and `guid` null or valid for their
/// sizes.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_RecordingDeviceName(
    device: RtcAudioDeviceHandle,
    index: c_int,
    name: *mut c_char,
    cch_name: c_int,
    guid: *mut c_char,
    cch_guid: c_int,
) -> RtcResultU4 {
    device_name("RTCAudioDevice_RecordingDeviceName", device, name, cch_name, guid, cch_guid, |d| {
        d.recording_device_name(index)
    })
}

/// # Safety
/// `device` must be null or a live audio device handle.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_SetPlayoutDevice(
    device: RtcAudioDeviceHandle,
    index: c_int,
) -> RtcResultU4 {
    guard("RTCAudioDevice_SetPlayoutDevice", || {
        object::<AudioDevice>(device, "device")?.set_playout_device(index)?;
        Ok(())
    })
}

/// # Safety
/// `device` must be null or a live audio device handle.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_SetRecordingDevice(
    device: RtcAudioDeviceHandle,
    index: c_int,
) -> RtcResultU4 {
    guard("RTCAudioDevice_SetRecordingDevice", || {
        object::<AudioDevice>(device, "device")?.set_recording_device(index)?;
        Ok(())
    })
}

/// Replaces the device change callback, a null delegate unregisters it. The
/// callback runs on an engine thread.
///
/// # Safety
/// `device` must be null or live, `callback` must stay callable until it is
/// replaced or the device is released.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_RegisterDeviceChangeCallback(
    device: RtcAudioDeviceHandle,
    callback: RtcAudioDeviceChangeDelegate,
) -> RtcResultU4 {
    guard("RTCAudioDevice_RegisterDeviceChangeCallback", || {
        let device = object::<AudioDevice>(device, "device")?;
        let callback = callback.map(|callback| {
            Arc::new(move || callback()) as DeviceChangeCallback
        });
        device.register_device_change_callback(callback);
        Ok(())
    })
}

/// # Safety
/// `device` must be null or a live audio device handle.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_SetMicrophoneVolume(
    device: RtcAudioDeviceHandle,
    volume: c_uint,
) -> RtcResultU4 {
    guard("RTCAudioDevice_SetMicrophoneVolume", || {
        object::<AudioDevice>(device, "device")?.set_microphone_volume(volume)?;
        Ok(())
    })
}

/// # Safety
/// `device` must be null or live, `volume` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_GetMicrophoneVolume(
    device: RtcAudioDeviceHandle,
    volume: *mut c_uint,
) -> RtcResultU4 {
    reset_out(volume, 0);
    guard("RTCAudioDevice_GetMicrophoneVolume", || {
        let device = object::<AudioDevice>(device, "device")?;
        *out_ref(volume, "volume")? = device.microphone_volume();
        Ok(())
    })
}

/// # Safety
/// `device` must be null or a live audio device handle.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_SetSpeakerVolume(
    device: RtcAudioDeviceHandle,
    volume: c_uint,
) -> RtcResultU4 {
    guard("RTCAudioDevice_SetSpeakerVolume", || {
        object::<AudioDevice>(device, "device")?.set_speaker_volume(volume)?;
        Ok(())
    })
}

/// # Safety
/// `device` must be null or live, `volume` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioDevice_GetSpeakerVolume(
    device: RtcAudioDeviceHandle,
    volume: *mut c_uint,
) -> RtcResultU4 {
    reset_out(volume, 0);
    guard("RTCAudioDevice_GetSpeakerVolume", || {
        let device = object::<AudioDevice>(device, "device")?;
        *out_ref(volume, "volume")? = device.speaker_volume();
        Ok(())
    })
}
