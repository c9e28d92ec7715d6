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

use common::{audio_track, created, factory, stream};
use rtc_interop::{
    interop::{
        media_stream::{RTCMediaStream_AddAudioTrack, RTCMediaStream_GetAudioTrack},
        media_track::RTCMediaTrack_GetEnabled,
        ref_counted::{RefCountedObject_AddRef, RefCountedObject_Release},
    },
    RtcBool32,
};

#[test]
fn null_handle_counts_are_zero() {
    assert_eq!(unsafe { RefCountedObject_AddRef(ptr::null_mut()) }, 0);
    assert_eq!(unsafe { RefCountedObject_Release(ptr::null_mut()) }, 0);
}

#[test]
fn add_ref_and_release_balance() {
    let factory = factory();
    let stream = stream(&factory, "stream");

    assert_eq!(unsafe { RefCountedObject_AddRef(stream.raw()) }, 2);
    assert_eq!(unsafe { RefCountedObject_AddRef(stream.raw()) }, 3);
    assert_eq!(unsafe { RefCountedObject_Release(stream.raw()) }, 2);
    assert_eq!(unsafe { RefCountedObject_Release(stream.raw()) }, 1);
}

#[test]
fn containers_hold_their_own_reference() {
    let factory = factory();
    let stream = stream(&factory, "stream");
    let track = audio_track(&factory, "audio0");

    assert_eq!(unsafe { RTCMediaStream_AddAudioTrack(stream.raw(), track.raw()) }, RtcBool32::TRUE);
    // caller + stream
    assert_eq!(unsafe { RefCountedObject_AddRef(track.raw()) }, 3);
    assert_eq!(unsafe { RefCountedObject_Release(track.raw()) }, 2);

    // Every getter hands out a new reference on the same object.
    let fetched = created(|out| unsafe { RTCMediaStream_GetAudioTrack(stream.raw(), 0, out) });
    assert_eq!(fetched.raw(), track.raw());
    assert_eq!(unsafe { RefCountedObject_AddRef(track.raw()) }, 4);
    assert_eq!(unsafe { RefCountedObject_Release(track.raw()) }, 3);
    drop(fetched);

    // The stream keeps the track alive after the caller lets go.
    let raw = track.raw();
    drop(track);
    assert_eq!(unsafe { RTCMediaTrack_GetEnabled(raw) }, RtcBool32::TRUE);
    drop(stream);
}
