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

use rtc_engine::{media_stream::MediaStream, RefCounted};

use crate::{
    buffer::{capacity, clear_text, write_text},
    error::{InteropError, InteropResult},
    handle::{
        audio_track, check_index, guard, guard_value, in_str, into_handle, object, out_ref,
        reset_out, video_track,
    },
    result::RtcResultU4,
    types::{RtcAudioTrackHandle, RtcBool32, RtcMediaStreamHandle, RtcVideoTrackHandle},
};

fn count(tracks: usize) -> c_int {
    tracks.try_into().unwrap_or(c_int::MAX)
}

// Works on a snapshot, the stream may change between the count and the get.
fn track_at<T>(mut tracks: Vec<RefCounted<T>>, index: c_int) -> InteropResult<RefCounted<T>> {
    let index = check_index(index, tracks.len())?;
    Ok(tracks.swap_remove(index))
}

fn found<T>(
    track: Option<RefCounted<T>>,
    track_id: &str,
) -> InteropResult<RefCounted<T>> {
    track.ok_or_else(|| InteropError::NotFound { name: "track", id: track_id.to_owned() })
}

/// # Safety
/// Handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_AddAudioTrack(
    stream: RtcMediaStreamHandle,
    track: RtcAudioTrackHandle,
) -> RtcBool32 {
    guard_value("RTCMediaStream_AddAudioTrack", RtcBool32::FALSE, || {
        let stream = object::<MediaStream>(stream, "stream")?;
        Ok(stream.add_audio_track(audio_track(track, "track")?).into())
    })
}

/// # Safety
/// Handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_AddVideoTrack(
    stream: RtcMediaStreamHandle,
    track: RtcVideoTrackHandle,
) -> RtcBool32 {
    guard_value("RTCMediaStream_AddVideoTrack", RtcBool32::FALSE, || {
        let stream = object::<MediaStream>(stream, "stream")?;
        Ok(stream.add_video_track(video_track(track, "track")?).into())
    })
}

/// # Safety
/// Handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_RemoveAudioTrack(
    stream: RtcMediaStreamHandle,
    track: RtcAudioTrackHandle,
) -> RtcBool32 {
    guard_value("RTCMediaStream_RemoveAudioTrack", RtcBool32::FALSE, || {
        let stream = object::<MediaStream>(stream, "stream")?;
        Ok(stream.remove_audio_track(&audio_track(track, "track")?).into())
    })
}

/// # Safety
/// Handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_RemoveVideoTrack(
    stream: RtcMediaStreamHandle,
    track: RtcVideoTrackHandle,
) -> RtcBool32 {
    guard_value("RTCMediaStream_RemoveVideoTrack", RtcBool32::FALSE, || {
        let stream = object::<MediaStream>(stream, "stream")?;
        Ok(stream.remove_video_track(&video_track(track, "track")?).into())
    })
}

/// # Safety
/// `stream` must be null or a live stream handle.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_NumberOfAudioTracks(stream: RtcMediaStreamHandle) -> c_int {
    guard_value("RTCMediaStream_NumberOfAudioTracks", 0, || {
        Ok(count(object::<MediaStream>(stream, "stream")?.audio_tracks().len()))
    })
}

/// # Safety
/// `stream` must be null or a live stream handle.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_NumberOfVideoTracks(stream: RtcMediaStreamHandle) -> c_int {
    guard_value("RTCMediaStream_NumberOfVideoTracks", 0, || {
        Ok(count(object::<MediaStream>(stream, "stream")?.video_tracks().len()))
    })
}

/// The caller owns one reference on the returned track.
///
/// # Safety
/// `stream` must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_GetAudioTrack(
    stream: RtcMediaStreamHandle,
    index: c_int,
    out: *mut RtcAudioTrackHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCMediaStream_GetAudioTrack", || {
        let stream = object::<MediaStream>(stream, "stream")?;
        let out = out_ref(out, "out")?;
        *out = into_handle(track_at(stream.audio_tracks(), index)?);
        Ok(())
    })
}

/// The caller owns one reference on the returned track.
///
/// # Safety
/// `stream` must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_GetVideoTrack(
    stream: RtcMediaStreamHandle,
    index: c_int,
    out: *mut RtcVideoTrackHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCMediaStream_GetVideoTrack", || {
        let stream = object::<MediaStream>(stream, "stream")?;
        let out = out_ref(out, "out")?;
        *out = into_handle(track_at(stream.video_tracks(), index)?);
        Ok(())
    })
}

/// `NotFound` when no audio track has that id.
///
/// # Safety
/// `stream` must be null or live, `track_id` null or NUL terminated, `out`
/// null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_FindAudioTrack(
    stream: RtcMediaStreamHandle,
    track_id: *const c_char,
    out: *mut RtcAudioTrackHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCMediaStream_FindAudioTrack", || {
        let stream = object::<MediaStream>(stream, "stream")?;
        let out = out_ref(out, "out")?;
        let track_id = in_str(track_id, "track_id")?;
        *out = into_handle(found(stream.find_audio_track(track_id), track_id)?);
        Ok(())
    })
}

/// `NotFound` when no video track has that id.
///
/// # Safety
/// `stream` must be null or live, `track_id` null or NUL terminated, `out`
/// null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_FindVideoTrack(
    stream: RtcMediaStreamHandle,
    track_id: *const c_char,
    out: *mut RtcVideoTrackHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCMediaStream_FindVideoTrack", || {
        let stream = object::<MediaStream>(stream, "stream")?;
        let out = out_ref(out, "out")?;
        let track_id = in_str(track_id, "track_id")?;
        *out = into_handle(found(stream.find_video_track(track_id), track_id)?);
        Ok(())
    })
}

unsafe fn stream_text(
    entry_point: &'static str,
    stream: RtcMediaStreamHandle,
    value: *mut c_char,
    cch_value: c_int,
    read: impl FnOnce(&MediaStream) -> String,
) -> RtcResultU4 {
    let cch_value = capacity(cch_value);
    clear_text(value, cch_value);
    guard(entry_point, || {
        let stream = object::<MediaStream>(stream, "stream")?;
        if value.is_null() {
            return Err(InteropError::NullPointer("value"));
        }
        write_text(&read(stream), value, cch_value)
    })
}

/// # Safety
/// `stream` must be null or live, `label` null or valid for `cch_label` bytes.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_GetLabel(
    stream: RtcMediaStreamHandle,
    label: *mut c_char,
    cch_label: c_int,
) -> RtcResultU4 {
    stream_text("RTCMediaStream_GetLabel", stream, label, cch_label, MediaStream::label)
}

/// # Safety
/// `stream` must be null or live, `id` null or valid for `cch_id` bytes.
#[no_mangle]
pub unsafe extern "C" fn RTCMediaStream_GetId(
    stream: RtcMediaStreamHandle,
    id: *mut c_char,
    cch_id: c_int,
) -> RtcResultU4 {
    stream_text("RTCMediaStream_GetId", stream, id, cch_id, MediaStream::id)
}
