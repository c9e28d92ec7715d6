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

use std::os::raw::c_int;

use rtc_engine::refcount;

use crate::types::RtcRefCountedObjectHandle;

/// Returns the new count, 0 for a null handle.
///
/// # Safety
/// `handle` must be null or a live handle produced by this library.
#[no_mangle]
pub unsafe extern "C" fn RefCountedObject_AddRef(handle: RtcRefCountedObjectHandle) -> c_int {
    refcount::add_ref(handle)
}

/// Returns the remaining count. The object is destroyed on this thread when it
/// reaches 0.
///
/// # Safety
/// `handle` must be null or a live handle produced by this library, and the
/// caller must own the reference it gives up.
#[no_mangle]
pub unsafe extern "C" fn RefCountedObject_Release(handle: RtcRefCountedObjectHandle) -> c_int {
    refcount::release(handle)
}
