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

#[cfg(feature = "desktop-device")]
use rtc_engine::desktop_capturer::DesktopCapturer;
use rtc_engine::{
    audio_source::AudioSource, media_constraints::MediaConstraints,
    peer_connection::PeerConnection, peer_connection_factory::PeerConnectionFactory,
    video_device::VideoCapturer, video_source::VideoSource,
};

use crate::{
    conversion,
    error::InteropError,
    globals,
    handle::{
        guard, guard_value, in_str, into_handle, object, out_ref, reset_out, retain, retain_opt,
    },
    result::RtcResultU4,
    types::*,
};

/// Same as `LibWebRTC_CreateRTCPeerConnectionFactory`.
#[no_mangle]
pub extern "C" fn RTCPeerConnectionFactory_Create() -> RtcPeerConnectionFactoryHandle {
    guard_value("RTCPeerConnectionFactory_Create", ptr::null_mut(), || {
        globals::check_initialized()?;
        Ok(into_handle(PeerConnectionFactory::create()))
    })
}

/// # Safety
/// `factory` must be null or a live factory handle.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_Initialize(
    factory: RtcPeerConnectionFactoryHandle,
) -> RtcBool32 {
    guard_value("RTCPeerConnectionFactory_Initialize", RtcBool32::FALSE, || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        Ok(factory.initialize().into())
    })
}

/// # Safety
/// `factory` must be null or a live factory handle.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_Terminate(
    factory: RtcPeerConnectionFactoryHandle,
) -> RtcBool32 {
    guard_value("RTCPeerConnectionFactory_Terminate", RtcBool32::FALSE, || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        Ok(factory.terminate().into())
    })
}

/// `constraints` may be null. The factory keeps the connection registered
/// until `RTCPeerConnectionFactory_DeletePeerConnection`.
///
/// # Safety
/// Handles must be null or live, `configuration` null or valid, `out` null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_CreatePeerConnection(
    factory: RtcPeerConnectionFactoryHandle,
    configuration: *const RtcPeerConnectionConfiguration,
    constraints: RtcMediaConstraintsHandle,
    out: *mut RtcPeerConnectionHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_CreatePeerConnection", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let out = out_ref(out, "out")?;
        let configuration =
            configuration.as_ref().ok_or(InteropError::NullParameter("configuration"))?;
        let constraints = retain_opt::<MediaConstraints>(constraints, "constraints")?;

        let configuration = conversion::rtc_configuration(configuration)?;
        let connection = factory.create_peer_connection(configuration, constraints)?;
        *out = into_handle(connection);
        Ok(())
    })
}

/// Closes `connection` and drops the factory's reference. The caller still
/// owns its own handle.
///
/// # Safety
/// Handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_DeletePeerConnection(
    factory: RtcPeerConnectionFactoryHandle,
    connection: RtcPeerConnectionHandle,
) -> RtcResultU4 {
    guard("RTCPeerConnectionFactory_DeletePeerConnection", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let connection = retain::<PeerConnection>(connection, "connection")?;
        factory.delete_peer_connection(&connection)?;
        Ok(())
    })
}

/// # Safety
/// `factory` must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_GetAudioDevice(
    factory: RtcPeerConnectionFactoryHandle,
    out: *mut RtcAudioDeviceHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_GetAudioDevice", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let out = out_ref(out, "out")?;
        *out = into_handle(factory.get_audio_device()?);
        Ok(())
    })
}

/// # Safety
/// `factory` must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_GetVideoDevice(
    factory: RtcPeerConnectionFactoryHandle,
    out: *mut RtcVideoDeviceHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_GetVideoDevice", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let out = out_ref(out, "out")?;
        *out = into_handle(factory.get_video_device()?);
        Ok(())
    })
}

/// # Safety
/// `factory` must be null or live, `out` null or valid for writes.
#[cfg(feature = "desktop-device")]
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_GetDesktopDevice(
    factory: RtcPeerConnectionFactoryHandle,
    out: *mut RtcDesktopDeviceHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_GetDesktopDevice", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let out = out_ref(out, "out")?;
        *out = into_handle(factory.get_desktop_device()?);
        Ok(())
    })
}

/// # Safety
/// `factory` must be null or live, `label` null or NUL terminated, `out` null
/// or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_CreateAudioSource(
    factory: RtcPeerConnectionFactoryHandle,
    label: *const c_char,
    out: *mut RtcAudioSourceHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_CreateAudioSource", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let out = out_ref(out, "out")?;
        let label = in_str(label, "label")?;
        *out = into_handle(factory.create_audio_source(label)?);
        Ok(())
    })
}

/// `constraints` may be null.
///
/// # Safety
/// Handles must be null or live, `label` null or NUL terminated, `out` null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_CreateVideoSource(
    factory: RtcPeerConnectionFactoryHandle,
    capturer: RtcVideoCapturerHandle,
    label: *const c_char,
    constraints: RtcMediaConstraintsHandle,
    out: *mut RtcVideoSourceHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_CreateVideoSource", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let capturer = retain::<VideoCapturer>(capturer, "capturer")?;
        let out = out_ref(out, "out")?;
        let label = in_str(label, "label")?;
        let constraints = retain_opt::<MediaConstraints>(constraints, "constraints")?;
        *out = into_handle(factory.create_video_source(capturer, label, constraints)?);
        Ok(())
    })
}

/// `constraints` may be null.
///
/// # Safety
/// Handles must be null or live, `label` null or NUL terminated, `out` null or
/// valid for writes.
#[cfg(feature = "desktop-device")]
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_CreateDesktopSource(
    factory: RtcPeerConnectionFactoryHandle,
    capturer: RtcDesktopCapturerHandle,
    label: *const c_char,
    constraints: RtcMediaConstraintsHandle,
    out: *mut RtcVideoSourceHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_CreateDesktopSource", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let capturer = retain::<DesktopCapturer>(capturer, "capturer")?;
        let out = out_ref(out, "out")?;
        let label = in_str(label, "label")?;
        let constraints = retain_opt::<MediaConstraints>(constraints, "constraints")?;
        *out = into_handle(factory.create_desktop_source(capturer, label, constraints)?);
        Ok(())
    })
}

/// # Safety
/// Handles must be null or live, `track_id` null or NUL terminated, `out` null
/// or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_CreateAudioTrack(
    factory: RtcPeerConnectionFactoryHandle,
    source: RtcAudioSourceHandle,
    track_id: *const c_char,
    out: *mut RtcAudioTrackHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_CreateAudioTrack", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let source = retain::<AudioSource>(source, "source")?;
        let out = out_ref(out, "out")?;
        let track_id = in_str(track_id, "track_id")?;
        *out = into_handle(factory.create_audio_track(source, track_id)?);
        Ok(())
    })
}

/// # Safety
/// Handles must be null or live, `track_id` null or NUL terminated, `out` null
/// or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_CreateVideoTrack(
    factory: RtcPeerConnectionFactoryHandle,
    source: RtcVideoSourceHandle,
    track_id: *const c_char,
    out: *mut RtcVideoTrackHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_CreateVideoTrack", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let source = retain::<VideoSource>(source, "source")?;
        let out = out_ref(out, "out")?;
        let track_id = in_str(track_id, "track_id")?;
        *out = into_handle(factory.create_video_track(source, track_id)?);
        Ok(())
    })
}

/// # Safety
/// `factory` must be null or live, `stream_id` null or NUL terminated, `out`
/// null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_CreateStream(
    factory: RtcPeerConnectionFactoryHandle,
    stream_id: *const c_char,
    out: *mut RtcMediaStreamHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_CreateStream", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let out = out_ref(out, "out")?;
        let stream_id = in_str(stream_id, "stream_id")?;
        *out = into_handle(factory.create_stream(stream_id)?);
        Ok(())
    })
}

/// # Safety
/// `factory` must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_GetRtpSenderCapabilities(
    factory: RtcPeerConnectionFactoryHandle,
    media_type: c_int,
    out: *mut RtcRtpCapabilitiesHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_GetRtpSenderCapabilities", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let out = out_ref(out, "out")?;
        let media_type = conversion::media_type(media_type)?;
        *out = into_handle(factory.get_rtp_sender_capabilities(media_type)?);
        Ok(())
    })
}

/// # Safety
/// `factory` must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionFactory_GetRtpReceiverCapabilities(
    factory: RtcPeerConnectionFactoryHandle,
    media_type: c_int,
    out: *mut RtcRtpCapabilitiesHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCPeerConnectionFactory_GetRtpReceiverCapabilities", || {
        let factory = object::<PeerConnectionFactory>(factory, "factory")?;
        let out = out_ref(out, "out")?;
        let media_type = conversion::media_type(media_type)?;
        *out = into_handle(factory.get_rtp_receiver_capabilities(media_type)?);
        Ok(())
    })
}
