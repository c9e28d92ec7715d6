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

use common::{created, factory, stream};
use rtc_interop::{
    interop::{
        peer_connection::{
            RTCPeerConnection_AddStream, RTCPeerConnection_Close, RTCPeerConnection_IsClosed,
            RTCPeerConnection_RemoveStream,
        },
        peer_connection_factory::{
            RTCPeerConnectionFactory_CreatePeerConnection,
            RTCPeerConnectionFactory_DeletePeerConnection,
        },
    },
    RtcBool32, RtcPeerConnectionConfiguration, RtcResultU4,
};

#[test]
fn streams_on_an_open_connection() {
    let factory = factory();
    let config = RtcPeerConnectionConfiguration::default();
    let connection = created(|out| unsafe {
        RTCPeerConnectionFactory_CreatePeerConnection(factory.raw(), &config, ptr::null_mut(), out)
    });
    let stream = stream(&factory, "stream");

    assert_eq!(
        unsafe { RTCPeerConnection_AddStream(connection.raw(), stream.raw()) },
        RtcResultU4::SUCCESS
    );
    assert_eq!(
        unsafe { RTCPeerConnection_AddStream(connection.raw(), stream.raw()) },
        RtcResultU4::INVALID_OPERATION
    );
    assert_eq!(
        unsafe { RTCPeerConnection_RemoveStream(connection.raw(), stream.raw()) },
        RtcResultU4::SUCCESS
    );
    assert_eq!(
        unsafe { RTCPeerConnection_RemoveStream(connection.raw(), stream.raw()) },
        RtcResultU4::NOT_FOUND
    );
}

#[test]
fn closed_connection_rejects_streams() {
    let factory = factory();
    let config = RtcPeerConnectionConfiguration::default();
    let connection = created(|out| unsafe {
        RTCPeerConnectionFactory_CreatePeerConnection(factory.raw(), &config, ptr::null_mut(), out)
    });
    let stream = stream(&factory, "stream");

    assert_eq!(unsafe { RTCPeerConnection_Close(connection.raw()) }, RtcResultU4::SUCCESS);
    assert_eq!(unsafe { RTCPeerConnection_IsClosed(connection.raw()) }, RtcBool32::TRUE);
    assert_eq!(
        unsafe { RTCPeerConnection_AddStream(connection.raw(), stream.raw()) },
        RtcResultU4::PEER_CONNECTION_CLOSED
    );
}

#[test]
fn delete_closes_the_connection() {
    let factory = factory();
    let config = RtcPeerConnectionConfiguration::default();
    let connection = created(|out| unsafe {
        RTCPeerConnectionFactory_CreatePeerConnection(factory.raw(), &config, ptr::null_mut(), out)
    });

    let result =
        unsafe { RTCPeerConnectionFactory_DeletePeerConnection(factory.raw(), connection.raw()) };
    assert_eq!(result, RtcResultU4::SUCCESS);
    assert_eq!(unsafe { RTCPeerConnection_IsClosed(connection.raw()) }, RtcBool32::TRUE);

    let result =
        unsafe { RTCPeerConnectionFactory_DeletePeerConnection(factory.raw(), connection.raw()) };
    assert_eq!(result, RtcResultU4::NOT_FOUND);
}
