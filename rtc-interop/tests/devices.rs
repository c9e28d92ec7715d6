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

mod common;

use std::{
    os::raw::{c_char, c_int, c_uint},
    ptr,
};

use common::{created, cstr, factory, text};
use rtc_interop::{
    interop::{
        audio_device::*,
        peer_connection_factory::{
            RTCPeerConnectionFactory_GetAudioDevice,
            RTCPeerConnectionFactory_GetRtpReceiverCapabilities,
            RTCPeerConnectionFactory_GetRtpSenderCapabilities,
            RTCPeerConnectionFactory_GetVideoDevice,
        },
        rtp_capabilities::*,
        video_capturer::*,
        video_device::*,
    },
    values, RtcBool32, RtcObjectHandle, RtcResultU4, RtcRtpTransceiverDirection,
};

unsafe extern "C" fn on_device_change() {}

#[test]
fn audio_device_enumeration() {
    let factory = factory();
    let device =
        created(|out| unsafe { RTCPeerConnectionFactory_GetAudioDevice(factory.raw(), out) });

    assert_eq!(unsafe { RTCAudioDevice_PlayoutDevices(device.raw()) }, 1);
    assert_eq!(unsafe { RTCAudioDevice_RecordingDevices(device.raw()) }, 1);

    let mut name = [0 as c_char; 64];
    let mut guid = [0 as c_char; 64];
    let result = unsafe {
        RTCAudioDevice_PlayoutDeviceName(
            device.raw(),
            0,
            name.as_mut_ptr(),
            64,
            guid.as_mut_ptr(),
            64,
        )
    };
    assert_eq!(result, RtcResultU4::SUCCESS);
    assert_eq!(text(&name), "Default Playout Device");
    assert_eq!(text(&guid), "default-playout");

    let result = unsafe {
        RTCAudioDevice_RecordingDeviceName(
            device.raw(),
            1,
            name.as_mut_ptr(),
            64,
            guid.as_mut_ptr(),
            64,
        )
    };
    assert_eq!(result, RtcResultU4::OUT_OF_RANGE);
    assert_eq!(text(&name), "");

    let result = unsafe {
        RTCAudioDevice_RecordingDeviceName(
            device.raw(),
            0,
            name.as_mut_ptr(),
            64,
            ptr::null_mut(),
            64,
        )
    };
    assert_eq!(result, RtcResultU4::INVALID_POINTER);

    assert_eq!(unsafe { RTCAudioDevice_SetPlayoutDevice(device.raw(), 0) }, RtcResultU4::SUCCESS);
    assert_eq!(
        unsafe { RTCAudioDevice_SetRecordingDevice(device.raw(), 3) },
        RtcResultU4::OUT_OF_RANGE
    );
}

#[test]
fn audio_device_volumes_and_callback() {
    let factory = factory();
    let device =
        created(|out| unsafe { RTCPeerConnectionFactory_GetAudioDevice(factory.raw(), out) });

    assert_eq!(
        unsafe { RTCAudioDevice_SetMicrophoneVolume(device.raw(), 100) },
        RtcResultU4::SUCCESS
    );
    let mut volume: c_uint = 0;
    assert_eq!(
        unsafe { RTCAudioDevice_GetMicrophoneVolume(device.raw(), &mut volume) },
        RtcResultU4::SUCCESS
    );
    assert_eq!(volume, 100);

    assert_eq!(
        unsafe { RTCAudioDevice_SetSpeakerVolume(device.raw(), 256) },
        RtcResultU4::OUT_OF_RANGE
    );
    assert_eq!(
        unsafe { RTCAudioDevice_GetSpeakerVolume(device.raw(), &mut volume) },
        RtcResultU4::SUCCESS
    );
    assert_eq!(volume, 255);
    assert_eq!(
        unsafe { RTCAudioDevice_GetSpeakerVolume(device.raw(), ptr::null_mut()) },
        RtcResultU4::INVALID_POINTER
    );

    let result = unsafe {
        RTCAudioDevice_RegisterDeviceChangeCallback(device.raw(), Some(on_device_change))
    };
    assert_eq!(result, RtcResultU4::SUCCESS);
    let result = unsafe { RTCAudioDevice_RegisterDeviceChangeCallback(device.raw(), None) };
    assert_eq!(result, RtcResultU4::SUCCESS);
    let result = unsafe {
        RTCAudioDevice_RegisterDeviceChangeCallback(ptr::null_mut(), Some(on_device_change))
    };
    assert_eq!(result, RtcResultU4::INVALID_NATIVE_HANDLE);
}

#[test]
fn video_device_and_capturer() {
    let factory = factory();
    let device =
        created(|out| unsafe { RTCPeerConnectionFactory_GetVideoDevice(factory.raw(), out) });
    assert_eq!(unsafe { RTCVideoDevice_NumberOfDevices(device.raw()) }, 1);

    let mut name = [0 as c_char; 64];
    let mut unique_id = [0 as c_char; 64];
    let result = unsafe {
        RTCVideoDevice_GetDeviceName(
            device.raw(),
            0,
            name.as_mut_ptr(),
            64,
            unique_id.as_mut_ptr(),
            64,
            ptr::null_mut(),
            0,
        )
    };
    assert_eq!(result, RtcResultU4::SUCCESS);
    assert_eq!(text(&name), "Virtual Camera");
    assert_eq!(text(&unique_id), "virtual-camera-0");

    let label = cstr("camera");
    let mut out: RtcObjectHandle = ptr::null_mut();
    let result = unsafe {
        RTCVideoDevice_CreateVideoCapturer(device.raw(), label.as_ptr(), 0, 0, 480, 30, &mut out)
    };
    assert_eq!(result, RtcResultU4::INVALID_PARAMETER);
    assert!(out.is_null());

    let capturer = created(|out| unsafe {
        RTCVideoDevice_CreateVideoCapturer(device.raw(), label.as_ptr(), 0, 640, 480, 30, out)
    });
    assert_eq!(unsafe { RTCVideoCapturer_CaptureStarted(capturer.raw()) }, RtcBool32::FALSE);
    assert_eq!(unsafe { RTCVideoCapturer_StartCapture(capturer.raw()) }, RtcBool32::TRUE);
    assert_eq!(unsafe { RTCVideoCapturer_CaptureStarted(capturer.raw()) }, RtcBool32::TRUE);
    assert_eq!(unsafe { RTCVideoCapturer_StopCapture(capturer.raw()) }, RtcResultU4::SUCCESS);
    assert_eq!(unsafe { RTCVideoCapturer_CaptureStarted(capturer.raw()) }, RtcBool32::FALSE);
}

#[test]
fn rtp_capabilities() {
    let factory = factory();
    let audio = created(|out| unsafe {
        RTCPeerConnectionFactory_GetRtpSenderCapabilities(
            factory.raw(),
            values::MEDIA_TYPE_AUDIO,
            out,
        )
    });
    assert_eq!(unsafe { RTCRtpCapabilities_GetCodecCount(audio.raw()) }, 5);

    let mut mime = [0 as c_char; 64];
    let mut fmtp = [0 as c_char; 64];
    let (mut clock_rate, mut channels): (c_int, c_int) = (0, 0);
    let result = unsafe {
        RTCRtpCapabilities_GetCodec(
            audio.raw(),
            0,
            mime.as_mut_ptr(),
            64,
            &mut clock_rate,
            &mut channels,
            fmtp.as_mut_ptr(),
            64,
        )
    };
    assert_eq!(result, RtcResultU4::SUCCESS);
    assert_eq!(text(&mime), "audio/opus");
    assert_eq!((clock_rate, channels), (48000, 2));
    assert_eq!(text(&fmtp), "minptime=10;useinbandfec=1");

    let video = created(|out| unsafe {
        RTCPeerConnectionFactory_GetRtpReceiverCapabilities(
            factory.raw(),
            values::MEDIA_TYPE_VIDEO,
            out,
        )
    });
    assert!(unsafe { RTCRtpCapabilities_GetHeaderExtensionCount(video.raw()) } > 0);
    let mut uri = [0 as c_char; 128];
    let mut direction = RtcRtpTransceiverDirection::SendRecv;
    let result = unsafe {
        RTCRtpCapabilities_GetHeaderExtension(video.raw(), 0, uri.as_mut_ptr(), 128, &mut direction)
    };
    assert_eq!(result, RtcResultU4::SUCCESS);
    assert_eq!(text(&uri), "urn:ietf:params:rtp-hdrext:toffset");
    assert_eq!(direction, RtcRtpTransceiverDirection::RecvOnly);

    let data = created(|out| unsafe {
        RTCPeerConnectionFactory_GetRtpSenderCapabilities(
            factory.raw(),
            values::MEDIA_TYPE_DATA,
            out,
        )
    });
    assert_eq!(unsafe { RTCRtpCapabilities_GetCodecCount(data.raw()) }, 0);

    let mut out: RtcObjectHandle = ptr::null_mut();
    let result =
        unsafe { RTCPeerConnectionFactory_GetRtpSenderCapabilities(factory.raw(), 9, &mut out) };
    assert_eq!(result, RtcResultU4::INVALID_PARAMETER);
}
