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

use std::os::raw::{c_char, c_int};

use rtc_engine::desktop_media_list::MediaSource;

use crate::{
    buffer::{capacity, clear_text, write_bytes, write_text},
    error::InteropError,
    handle::{guard, guard_value, object, out_ref, reset_out},
    result::RtcResultU4,
    types::{RtcBool32, RtcDesktopMediaSourceHandle, RtcDesktopType},
};

/// # Safety
/// `source` must be null or live, `id` and `name` null or valid for their
/// sizes, `desktop_type` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn MediaSource_GetInfo(
    source: RtcDesktopMediaSourceHandle,
    id: *mut c_char,
    cch_id: c_int,
    name: *mut c_char,
    cch_name: c_int,
    desktop_type: *mut RtcDesktopType,
) -> RtcResultU4 {
    let (cch_id, cch_name) = (capacity(cch_id), capacity(cch_name));
    clear_text(id, cch_id);
    clear_text(name, cch_name);
    reset_out(desktop_type, RtcDesktopType::Screen);

    guard("MediaSource_GetInfo", || {
        let source = object::<MediaSource>(source, "source")?;
        if id.is_null() {
            return Err(InteropError::NullPointer("id"));
        }
        if name.is_null() {
            return Err(InteropError::NullPointer("name"));
        }
        *out_ref(desktop_type, "desktop_type")? = source.desktop_type().into();

        let result = write_text(&source.id(), id, cch_id);
        result.and(write_text(&source.name(), name, cch_name))
    })
}

/// # Safety
/// `source` must be null or a live media source handle.
#[no_mangle]
pub unsafe extern "C" fn MediaSource_UpdateThumbnail(
    source: RtcDesktopMediaSourceHandle,
) -> RtcBool32 {
    guard_value("MediaSource_UpdateThumbnail", RtcBool32::FALSE, || {
        Ok(object::<MediaSource>(source, "source")?.update_thumbnail().into())
    })
}

/// Copies the JPEG thumbnail. `size` holds the buffer capacity on input and
/// the thumbnail size on output; nothing is copied when the buffer is too
/// small, so a caller can query the size with a null buffer first.
///
/// # Safety
/// `source` must be null or live, `size` null or valid, `buffer` valid for
/// `*size` bytes.
#[no_mangle]
pub unsafe extern "C" fn MediaSource_GetThumbnail(
    source: RtcDesktopMediaSourceHandle,
    buffer: *mut u8,
    size: *mut c_int,
) -> RtcResultU4 {
    guard("MediaSource_GetThumbnail", || {
        let source = object::<MediaSource>(source, "source")?;
        if size.is_null() {
            return Err(InteropError::NullPointer("size"));
        }
        write_bytes(&source.thumbnail(), buffer, size)
    })
}
