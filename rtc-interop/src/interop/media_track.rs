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

use std::os::raw::{c_char, c_double, c_int};

use rtc_engine::media_stream_track::MediaStreamTrack;

use crate::{
    buffer::{capacity, clear_text, write_text},
    error::InteropError,
    handle::{audio_track, guard, guard_value, media_track},
    result::RtcResultU4,
    types::{RtcAudioTrackHandle, RtcBool32, RtcMediaTrackHandle, RtcTrackState},
};

/// `RtcTrackState::Unknown` for an invalid handle.
///
/// # Safety
/// `track` must be null or a live track handle.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaTrack_GetState(track: RtcMediaTrackHandle) -> RtcTrackState {
    guard_value("RTCMediaTrack_GetState", RtcTrackState::Unknown, || {
        Ok(media_track(track, "track")?.state().into())
    })
}

unsafe fn track_text(
    entry_point: &'static str,
    track: RtcMediaTrackHandle,
    value: *mut c_char,
    cch_value: c_int,
    read: impl FnOnce(&dyn MediaStreamTrack) -> String,
) -> RtcResultU4 {
    let cch_value = capacity(cch_value);
    clear_text(value, cch_value);
    guard(entry_point, || {
        let track = media_track(track, "track")?;
        if value.is_null() {
            return Err(InteropError::NullPointer("value"));
        }
        write_text(&read(track), value, cch_value)
    })
}

/// Writes "audio" or "video".
///
/// # Safety
/// `track` must be null or live, `kind` null or valid for `cch_kind` bytes.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaTrack_GetKind(
    track: RtcMediaTrackHandle,
    kind: *mut c_char,
    cch_kind: c_int,
) -> RtcResultU4 {
    track_text("RTCMediaTrack_GetKind", track, kind, cch_kind, |t| t.kind().to_owned())
}

/// # Safety
/// `track` must be null or live, `id` null or valid for `cch_id` bytes.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaTrack_GetId(
    track: RtcMediaTrackHandle,
    id: *mut c_char,
    cch_id: c_int,
) -> RtcResultU4 {
    track_text("RTCMediaTrack_GetId", track, id, cch_id, |t| t.id())
}

/// # Safety
/// `track` must be null or a live track handle.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaTrack_GetEnabled(track: RtcMediaTrackHandle) -> RtcBool32 {
    guard_value("RTCMediaTrack_GetEnabled", RtcBool32::FALSE, || {
        Ok(media_track(track, "track")?.enabled().into())
    })
}

/// Returns true when the enabled flag changed, false when it already had
/// that value or the handle is invalid.
///
/// # Safety
/// `track` must be null or a live track handle.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaTrack_SetEnabled(
    track: RtcMediaTrackHandle,
    enabled: RtcBool32,
) -> RtcBool32 {
    guard_value("RTCMediaTrack_SetEnabled", RtcBool32::FALSE, || {
        Ok(media_track(track, "track")?.set_enabled(enabled.is_true()).into())
    })
}

/// # Safety
/// `track` must be null or a live audio track handle.
#[no_mangle]
pub unsafe extern "C" fn RTCAudioTrack_SetVolume(
    track: RtcAudioTrackHandle,
    volume: c_double,
) -> RtcResultU4 {
    guard("RTCAudioTrack_SetVolume", || {
        audio_track(track, "track")?.set_volume(volume)?;
        Ok(())
    })
}
