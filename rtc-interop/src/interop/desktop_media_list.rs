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

use std::{os::raw::c_int, ptr, sync::Arc};

use rtc_engine::{
    desktop_media_list::{DesktopMediaList, MediaListObserver, MediaSource},
    RefCounted,
};

use crate::{
    error::InteropError,
    handle::{check_index, guard, guard_value, into_handle, object, out_ref, reset_out, retain},
    result::RtcResultU4,
    types::{
        RtcBool32, RtcDesktopMediaListHandle, RtcDesktopMediaSourceHandle, RtcDesktopType,
        RtcMediaListObserverCallbacks, RtcMediaListObserverDelegate, RtcObjectHandle,
    },
};

/// Forwards list events to the caller's delegates.
struct CallbackObserver {
    callbacks: RtcMediaListObserverCallbacks,
}

// The user data pointers are opaque to us, the caller registering them
// vouches for using them from engine threads.
unsafe impl Send for CallbackObserver {}
unsafe impl Sync for CallbackObserver {}

impl CallbackObserver {
    fn invoke(
        delegate: RtcMediaListObserverDelegate,
        user_data: RtcObjectHandle,
        source: &RefCounted<MediaSource>,
    ) {
        if let Some(delegate) = delegate {
            unsafe { delegate(user_data, RefCounted::as_raw(source)) }
        }
    }
}

impl MediaListObserver for CallbackObserver {
    fn on_media_source_added(&self, source: &RefCounted<MediaSource>) {
        let c = &self.callbacks;
        Self::invoke(c.media_source_added, c.user_data_added, source);
    }

    fn on_media_source_removed(&self, source: &RefCounted<MediaSource>) {
        let c = &self.callbacks;
        Self::invoke(c.media_source_removed, c.user_data_removed, source);
    }

    fn on_media_source_name_changed(&self, source: &RefCounted<MediaSource>) {
        let c = &self.callbacks;
        Self::invoke(c.media_source_name_changed, c.user_data_name_changed, source);
    }

    fn on_media_source_thumbnail_changed(&self, source: &RefCounted<MediaSource>) {
        let c = &self.callbacks;
        Self::invoke(c.media_source_thumbnail_changed, c.user_data_thumbnail_changed, source);
    }
}

/// Registers the delegates of `callbacks`, replacing any previous observer.
/// The struct is copied, it does not need to outlive the call. Source handles
/// passed to the delegates are borrowed for the duration of the call only.
///
/// # Safety
/// `list` must be null or live, `callbacks` null or valid for reads. The
/// delegates must stay callable until deregistered.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopMediaList_RegisterMediaListObserver(
    list: RtcDesktopMediaListHandle,
    callbacks: *const RtcMediaListObserverCallbacks,
) -> RtcResultU4 {
    guard("RTCDesktopMediaList_RegisterMediaListObserver", || {
        let list = object::<DesktopMediaList>(list, "list")?;
        let callbacks = *callbacks.as_ref().ok_or(InteropError::NullParameter("callbacks"))?;
        list.register_media_list_observer(Arc::new(CallbackObserver { callbacks }));
        Ok(())
    })
}

/// Events already queued are still delivered.
///
/// # Safety
/// `list` must be null or a live media list handle.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopMediaList_DeRegisterMediaListObserver(
    list: RtcDesktopMediaListHandle,
) -> RtcResultU4 {
    guard("RTCDesktopMediaList_DeRegisterMediaListObserver", || {
        object::<DesktopMediaList>(list, "list")?.deregister_media_list_observer();
        Ok(())
    })
}

/// `RtcDesktopType::Screen` for an invalid handle.
///
/// # Safety
/// `list` must be null or a live media list handle.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopMediaList_GetType(
    list: RtcDesktopMediaListHandle,
) -> RtcDesktopType {
    guard_value("RTCDesktopMediaList_GetType", RtcDesktopType::Screen, || {
        Ok(object::<DesktopMediaList>(list, "list")?.desktop_type().into())
    })
}

/// Re-enumerates the sources and returns their count, 0 for an invalid
/// handle. Changes are reported to the observer.
///
/// # Safety
/// `list` must be null or a live media list handle.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopMediaList_UpdateSourceList(
    list: RtcDesktopMediaListHandle,
    force_reload: RtcBool32,
    get_thumbnail: RtcBool32,
) -> c_int {
    guard_value("RTCDesktopMediaList_UpdateSourceList", 0, || {
        let list = object::<DesktopMediaList>(list, "list")?;
        let count = list.update_source_list(force_reload.is_true(), get_thumbnail.is_true());
        Ok(count.try_into().unwrap_or(c_int::MAX))
    })
}

/// # Safety
/// `list` must be null or a live media list handle.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopMediaList_GetSourceCount(
    list: RtcDesktopMediaListHandle,
) -> c_int {
    guard_value("RTCDesktopMediaList_GetSourceCount", 0, || {
        let list = object::<DesktopMediaList>(list, "list")?;
        Ok(list.get_source_count().try_into().unwrap_or(c_int::MAX))
    })
}

/// # Safety
/// `list` must be null or live, `out` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopMediaList_GetSource(
    list: RtcDesktopMediaListHandle,
    index: c_int,
    out: *mut RtcDesktopMediaSourceHandle,
) -> RtcResultU4 {
    reset_out(out, ptr::null_mut());
    guard("RTCDesktopMediaList_GetSource", || {
        let list = object::<DesktopMediaList>(list, "list")?;
        let out = out_ref(out, "out")?;
        let mut sources = list.sources();
        let index = check_index(index, sources.len())?;
        *out = into_handle(sources.swap_remove(index));
        Ok(())
    })
}

/// Refreshes the thumbnail of `source`, which must belong to `list`.
///
/// # Safety
/// Handles must be null or live.
#[no_mangle]
pub unsafe extern "C" fn RTCDesktopMediaList_GetThumbnail(
    list: RtcDesktopMediaListHandle,
    source: RtcDesktopMediaSourceHandle,
    notify: RtcBool32,
) -> RtcBool32 {
    guard_value("RTCDesktopMediaList_GetThumbnail", RtcBool32::FALSE, || {
        let list = object::<DesktopMediaList>(list, "list")?;
        let source = retain::<MediaSource>(source, "source")?;
        Ok(list.get_thumbnail(&source, notify.is_true()).into())
    })
}
