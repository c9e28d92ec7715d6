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

use rtc_engine::{media_stream::MediaStream, peer_connection::PeerConnection};

use crate::{
    handle::{guard, guard_value, object, retain},
    result::RtcResultU4,
    types::{RtcBool32, RtcMediaStreamHandle, RtcPeerConnectionHandle},
};

/// # Safety
/// `connection` must be null or a live peer connection handle.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnection_Close(
    connection: RtcPeerConnectionHandle,
) -> RtcResultU4 {
    guard("RTCPeerConnection_Close", || {
        object::<PeerConnection>(connection, "connection")?.close();
        Ok(())
    })
}

/// # Safety
/// `connection` must be null or a live peer connection handle.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnection_IsClosed(
    connection: RtcPeerConnectionHandle,
) -> RtcBool32 {
    guard_value("RTCPeerConnection_IsClosed", RtcBool32::FALSE, || {
        Ok(object::<PeerConnection>(connection, "connection")?.is_closed().into())
    })
}

/// # Safety
/// Handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnection_AddStream(
    connection: RtcPeerConnectionHandle,
    stream: RtcMediaStreamHandle,
) -> RtcResultU4 {
    guard("RTCPeerConnection_AddStream", || {
        let connection = object::<PeerConnection>(connection, "connection")?;
        let stream = retain::<MediaStream>(stream, "stream")?;
        connection.add_stream(stream)?;
        Ok(())
    })
}

/// # Safety
/// Handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnection_RemoveStream(
    connection: RtcPeerConnectionHandle,
    stream: RtcMediaStreamHandle,
) -> RtcResultU4 {
    guard("RTCPeerConnection_RemoveStream", || {
        let connection = object::<PeerConnection>(connection, "connection")?;
        let stream = retain::<MediaStream>(stream, "stream")?;
        connection.remove_stream(&stream)?;
        Ok(())
    })
}
