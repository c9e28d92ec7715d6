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

//! Validation applied by every entry point before it touches the engine.
//!
//! Out-pointers are neutralized first, then handles are checked, then out
//! and input pointers, then ranges. Engine objects are only reached through a
//! handle whose runtime type matched.

use std::{
    any::{type_name, Any},
    ffi::{c_void, CStr},
    os::raw::{c_char, c_int},
    panic::{self, AssertUnwindSafe},
};

use rtc_engine::{
    audio_track::AudioTrack,
    media_stream_track::MediaStreamTrack,
    refcount::{downcast_ref, type_name_of},
    video_track::VideoTrack,
    RefCounted,
};

use crate::{
    error::{InteropError, InteropResult},
    result::RtcResultU4,
};

/// Resets `out` to `neutral` when it is not null.
///
/// # Safety
/// `out` must be null or valid for writes.
pub(crate) unsafe fn reset_out<T>(out: *mut T, neutral: T) {
    if !out.is_null() {
        out.write(neutral);
    }
}

/// # Safety
/// `out` must be null or valid for writes for the returned lifetime.
pub(crate) unsafe fn out_ref<'a, T>(out: *mut T, name: &'static str) -> InteropResult<&'a mut T> {
    out.as_mut().ok_or(InteropError::NullPointer(name))
}

/// # Safety
/// `value` must be null or a NUL terminated string.
pub(crate) unsafe fn in_str<'a>(
    value: *const c_char,
    name: &'static str,
) -> InteropResult<&'a str> {
    if value.is_null() {
        return Err(InteropError::NullParameter(name));
    }
    CStr::from_ptr(value).to_str().map_err(|err| InteropError::InvalidParameter {
        name,
        value: err.to_string(),
    })
}

/// Borrows the object behind a handle without touching its count.
///
/// # Safety
/// `handle` must be null or a live handle produced by this library.
pub(crate) unsafe fn object<'a, T: 'static>(
    handle: *mut c_void,
    name: &'static str,
) -> InteropResult<&'a T> {
    if handle.is_null() {
        return Err(InteropError::NullHandle(name));
    }
    downcast_ref::<T>(handle).ok_or_else(|| InteropError::WrongHandleType {
        name,
        expected: type_name::<T>(),
        found: type_name_of(handle).unwrap_or("unknown"),
    })
}

/// Takes a new reference on the object behind a handle, for the engine to
/// keep.
///
/// # Safety
/// `handle` must be null or a live handle produced by this library.
pub(crate) unsafe fn retain<T: 'static>(
    handle: *mut c_void,
    name: &'static str,
) -> InteropResult<RefCounted<T>> {
    object::<T>(handle, name)?;
    RefCounted::retain_raw(handle).ok_or(InteropError::NullHandle(name))
}

/// Same as [`retain`] for an optional handle, null maps to `None`.
///
/// # Safety
/// `handle` must be null or a live handle produced by this library.
pub(crate) unsafe fn retain_opt<T: 'static>(
    handle: *mut c_void,
    name: &'static str,
) -> InteropResult<Option<RefCounted<T>>> {
    if handle.is_null() {
        return Ok(None);
    }
    retain(handle, name).map(Some)
}

/// Hands a new reference over to the caller.
pub(crate) fn into_handle<T: 'static>(object: RefCounted<T>) -> *mut c_void {
    RefCounted::into_raw(object)
}

unsafe fn track_of_kind<T: 'static, Other: 'static>(
    handle: *mut c_void,
    name: &'static str,
    expected: &'static str,
    found: &'static str,
) -> InteropResult<RefCounted<T>> {
    if downcast_ref::<Other>(handle).is_some() {
        return Err(InteropError::WrongMediaKind { name, expected, found });
    }
    retain::<T>(handle, name)
}

/// # Safety
/// `handle` must be null or a live handle produced by this library.
pub(crate) unsafe fn audio_track(
    handle: *mut c_void,
    name: &'static str,
) -> InteropResult<RefCounted<AudioTrack>> {
    track_of_kind::<AudioTrack, VideoTrack>(handle, name, "audio", "video")
}

/// # Safety
/// `handle` must be null or a live handle produced by this library.
pub(crate) unsafe fn video_track(
    handle: *mut c_void,
    name: &'static str,
) -> InteropResult<RefCounted<VideoTrack>> {
    track_of_kind::<VideoTrack, AudioTrack>(handle, name, "video", "audio")
}

/// Either kind of track.
///
/// # Safety
/// `handle` must be null or a live handle produced by this library.
pub(crate) unsafe fn media_track<'a>(
    handle: *mut c_void,
    name: &'static str,
) -> InteropResult<&'a dyn MediaStreamTrack> {
    if let Some(track) = downcast_ref::<AudioTrack>(handle) {
        return Ok(track);
    }
    if let Some(track) = downcast_ref::<VideoTrack>(handle) {
        return Ok(track);
    }
    object::<AudioTrack>(handle, name).map(|track| track as &dyn MediaStreamTrack)
}

/// Checks a caller supplied index against the live element count.
pub(crate) fn check_index(index: c_int, count: usize) -> InteropResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|index| *index < count)
        .ok_or(InteropError::OutOfRange { index: index.into(), count })
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Runs an entry point body, turning errors and panics into a result code.
pub(crate) fn guard<F>(name: &'static str, f: F) -> RtcResultU4
where
    F: FnOnce() -> InteropResult<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => RtcResultU4::SUCCESS,
        Ok(Err(err)) => {
            log::debug!("{} failed: {}", name, err);
            err.code()
        }
        Err(panic) => {
            log::error!("panic in {}: {}", name, panic_message(panic.as_ref()));
            RtcResultU4::UNKNOWN_ERROR
        }
    }
}

/// Like [`guard`] for entry points returning a plain value, `fallback` is
/// returned on error.
pub(crate) fn guard_value<T, F>(name: &'static str, fallback: T, f: F) -> T
where
    F: FnOnce() -> InteropResult<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            log::debug!("{} failed: {}", name, err);
            fallback
        }
        Err(panic) => {
            log::error!("panic in {}: {}", name, panic_message(panic.as_ref()));
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtc_engine::media_constraints::MediaConstraints;

    #[test]
    fn guard_maps_errors_and_panics() {
        assert_eq!(guard("ok", || Ok(())), RtcResultU4::SUCCESS);
        assert_eq!(
            guard("null", || Err(InteropError::NullPointer("out"))),
            RtcResultU4::INVALID_POINTER
        );
        assert_eq!(guard("panic", || panic!("boom")), RtcResultU4::UNKNOWN_ERROR);
        assert_eq!(guard_value("value", 7, || panic!("boom")), 7);
        assert_eq!(guard_value("value", 7, || Err(InteropError::NotInitialized)), 7);
    }

    #[test]
    fn index_is_checked_against_the_count() {
        assert_eq!(check_index(0, 1).unwrap(), 0);
        assert_eq!(check_index(1, 1).unwrap_err().code(), RtcResultU4::OUT_OF_RANGE);
        assert_eq!(check_index(-1, 4).unwrap_err().code(), RtcResultU4::OUT_OF_RANGE);
        assert!(check_index(0, 0).is_err());
    }

    #[test]
    fn wrong_handle_type_is_rejected() {
        let constraints = MediaConstraints::create();
        let handle = RefCounted::as_raw(&constraints);
        let err = unsafe { object::<AudioTrack>(handle, "track") }.unwrap_err();
        assert_eq!(err.code(), RtcResultU4::INVALID_NATIVE_HANDLE);
        assert!(unsafe { object::<MediaConstraints>(handle, "constraints") }.is_ok());
        assert_eq!(RefCounted::ref_count(&constraints), 1);
    }

    #[test]
    fn retain_takes_a_reference() {
        let constraints = MediaConstraints::create();
        let handle = RefCounted::as_raw(&constraints);
        let retained = unsafe { retain::<MediaConstraints>(handle, "constraints") }.unwrap();
        assert_eq!(RefCounted::ref_count(&constraints), 2);
        drop(retained);
        assert!(unsafe { retain_opt::<MediaConstraints>(std::ptr::null_mut(), "c") }
            .unwrap()
            .is_none());
    }
}
