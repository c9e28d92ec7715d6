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

use std::ptr;

use common::{audio_track, created, cstr, factory, stream, Handle};
use rtc_interop::{
    interop::{
        audio_device::RTCAudioDevice_PlayoutDevices,
        configuration::RTCPeerConnectionConfiguration_InitDefault,
        media_constraints::{MediaConstraints_AddMandatoryConstraint, MediaConstraints_Create},
        media_stream::{
            RTCMediaStream_AddAudioTrack, RTCMediaStream_GetAudioTrack,
            RTCMediaStream_NumberOfAudioTracks,
        },
        media_track::{RTCAudioTrack_SetVolume, RTCMediaTrack_GetState},
        peer_connection::RTCPeerConnection_IsClosed,
        peer_connection_factory::{
            RTCPeerConnectionFactory_CreatePeerConnection, RTCPeerConnectionFactory_CreateStream,
            RTCPeerConnectionFactory_CreateVideoSource, RTCPeerConnectionFactory_CreateVideoTrack,
            RTCPeerConnectionFactory_GetVideoDevice,
        },
        video_device::RTCVideoDevice_CreateVideoCapturer,
    },
    values, RtcBool32, RtcObjectHandle, RtcPeerConnectionConfiguration, RtcResultU4,
    RtcTrackState,
};

fn sentinel() -> RtcObjectHandle {
    0x10 as RtcObjectHandle
}

fn video_track(factory: &Handle) -> Handle {
    let device =
        created(|out| unsafe { RTCPeerConnectionFactory_GetVideoDevice(factory.raw(), out) });
    let name = cstr("camera");
    let capturer = created(|out| unsafe {
        RTCVideoDevice_CreateVideoCapturer(device.raw(), name.as_ptr(), 0, 640, 480, 30, out)
    });
    let label = cstr("camera source");
    let source = created(|out| unsafe {
        RTCPeerConnectionFactory_CreateVideoSource(
            factory.raw(),
            capturer.raw(),
            label.as_ptr(),
            ptr::null_mut(),
            out,
        )
    });
    let id = cstr("video0");
    created(|out| unsafe {
        RTCPeerConnectionFactory_CreateVideoTrack(factory.raw(), source.raw(), id.as_ptr(), out)
    })
}

#[test]
fn null_handle_is_rejected_and_output_cleared() {
    let id = cstr("stream");
    let mut out = sentinel();
    let result =
        unsafe { RTCPeerConnectionFactory_CreateStream(ptr::null_mut(), id.as_ptr(), &mut out) };
    assert_eq!(result, RtcResultU4::INVALID_NATIVE_HANDLE);
    assert!(out.is_null());
}

#[test]
fn null_out_pointer_is_rejected() {
    let factory = factory();
    let id = cstr("stream");
    let result = unsafe {
        RTCPeerConnectionFactory_CreateStream(factory.raw(), id.as_ptr(), ptr::null_mut())
    };
    assert_eq!(result, RtcResultU4::INVALID_POINTER);
}

#[test]
fn null_input_string_is_rejected() {
    let factory = factory();
    let mut out = sentinel();
    let result =
        unsafe { RTCPeerConnectionFactory_CreateStream(factory.raw(), ptr::null(), &mut out) };
    assert_eq!(result, RtcResultU4::INVALID_PARAMETER);
    assert!(out.is_null());

    let constraints = Handle::new(MediaConstraints_Create());
    let key = cstr("googEchoCancellation");
    let result = unsafe {
        MediaConstraints_AddMandatoryConstraint(constraints.raw(), key.as_ptr(), ptr::null())
    };
    assert_eq!(result, RtcResultU4::INVALID_PARAMETER);
}

#[test]
fn handle_of_another_type_is_rejected() {
    let factory = factory();
    let stream = stream(&factory, "stream");

    assert_eq!(unsafe { RTCAudioDevice_PlayoutDevices(stream.raw()) }, 0);

    let id = cstr("other");
    let mut out = sentinel();
    let result =
        unsafe { RTCPeerConnectionFactory_CreateStream(stream.raw(), id.as_ptr(), &mut out) };
    assert_eq!(result, RtcResultU4::INVALID_NATIVE_HANDLE);
    assert!(out.is_null());
}

#[test]
fn audio_entry_point_rejects_video_track() {
    let factory = factory();
    let video = video_track(&factory);
    let audio = audio_track(&factory, "audio0");

    assert_eq!(
        unsafe { RTCAudioTrack_SetVolume(video.raw(), 1.0) },
        RtcResultU4::INVALID_MEDIA_KIND
    );
    assert_eq!(unsafe { RTCAudioTrack_SetVolume(audio.raw(), 1.0) }, RtcResultU4::SUCCESS);
    assert_eq!(unsafe { RTCAudioTrack_SetVolume(audio.raw(), 11.0) }, RtcResultU4::OUT_OF_RANGE);

    let stream = stream(&factory, "stream");
    assert_eq!(
        unsafe { RTCMediaStream_AddAudioTrack(stream.raw(), video.raw()) },
        RtcBool32::FALSE
    );
    assert_eq!(unsafe { RTCMediaStream_NumberOfAudioTracks(stream.raw()) }, 0);
}

#[test]
fn index_on_empty_stream_is_out_of_range() {
    let factory = factory();
    let stream = stream(&factory, "stream");

    let mut out = sentinel();
    let result = unsafe { RTCMediaStream_GetAudioTrack(stream.raw(), 0, &mut out) };
    assert_eq!(result, RtcResultU4::OUT_OF_RANGE);
    assert!(out.is_null());

    let mut out = sentinel();
    let result = unsafe { RTCMediaStream_GetAudioTrack(stream.raw(), -1, &mut out) };
    assert_eq!(result, RtcResultU4::OUT_OF_RANGE);
    assert!(out.is_null());
}

#[test]
fn plain_value_entry_points_return_neutral_values() {
    assert_eq!(unsafe { RTCMediaStream_NumberOfAudioTracks(ptr::null_mut()) }, 0);
    assert_eq!(unsafe { RTCMediaTrack_GetState(ptr::null_mut()) }, RtcTrackState::Unknown);
    assert_eq!(unsafe { RTCPeerConnection_IsClosed(ptr::null_mut()) }, RtcBool32::FALSE);
}

#[test]
fn peer_connection_with_one_ice_server() {
    let factory = factory();
    let uri = cstr("stun:stun.l.google.com:19302");

    let mut config = RtcPeerConnectionConfiguration::default();
    assert_eq!(
        unsafe { RTCPeerConnectionConfiguration_InitDefault(&mut config) },
        RtcResultU4::SUCCESS
    );
    config.ice_servers[0].uri = uri.as_ptr();

    let connection = created(|out| unsafe {
        RTCPeerConnectionFactory_CreatePeerConnection(factory.raw(), &config, ptr::null_mut(), out)
    });
    assert_eq!(unsafe { RTCPeerConnection_IsClosed(connection.raw()) }, RtcBool32::FALSE);
}

#[test]
fn invalid_configuration_is_rejected() {
    let factory = factory();

    let mut out = sentinel();
    let result = unsafe {
        RTCPeerConnectionFactory_CreatePeerConnection(
            factory.raw(),
            ptr::null(),
            ptr::null_mut(),
            &mut out,
        )
    };
    assert_eq!(result, RtcResultU4::INVALID_PARAMETER);
    assert!(out.is_null());

    let mut config = RtcPeerConnectionConfiguration::default();
    config.bundle_policy = 42;
    let result = unsafe {
        RTCPeerConnectionFactory_CreatePeerConnection(
            factory.raw(),
            &config,
            ptr::null_mut(),
            &mut out,
        )
    };
    assert_eq!(result, RtcResultU4::INVALID_PARAMETER);

    let uri = cstr("http://example.com");
    let mut config = RtcPeerConnectionConfiguration::default();
    config.sdp_semantics = values::SDP_SEMANTICS_PLAN_B;
    config.ice_servers[0].uri = uri.as_ptr();
    let result = unsafe {
        RTCPeerConnectionFactory_CreatePeerConnection(
            factory.raw(),
            &config,
            ptr::null_mut(),
            &mut out,
        )
    };
    assert_eq!(result, RtcResultU4::INVALID_PARAMETER);
    assert!(out.is_null());
}
