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

use std::os::raw::c_char;

use rtc_engine::media_constraints::MediaConstraints;

use crate::{
    handle::{guard, in_str, into_handle, object},
    result::RtcResultU4,
    types::RtcMediaConstraintsHandle,
};

#[no_mangle]
pub extern "C" fn MediaConstraints_Create() -> RtcMediaConstraintsHandle {
    into_handle(MediaConstraints::create())
}

/// # Safety
/// `handle` must be null or a live constraints handle, `key` and `value` null
/// or NUL terminated.
#[no_mangle]
pub unsafe extern "C" fn MediaConstraints_AddMandatoryConstraint(
    handle: RtcMediaConstraintsHandle,
    key: *const c_char,
    value: *const c_char,
) -> RtcResultU4 {
    guard("MediaConstraints_AddMandatoryConstraint", || {
        let constraints = object::<MediaConstraints>(handle, "constraints")?;
        constraints.add_mandatory_constraint(in_str(key, "key")?, in_str(value, "value")?);
        Ok(())
    })
}

/// # Safety
/// `handle` must be null or a live constraints handle, `key` and `value` null
/// or NUL terminated.
#[no_mangle]
pub unsafe extern "C" fn MediaConstraints_AddOptionalConstraint(
    handle: RtcMediaConstraintsHandle,
    key: *const c_char,
    value: *const c_char,
) -> RtcResultU4 {
    guard("MediaConstraints_AddOptionalConstraint", || {
        let constraints = object::<MediaConstraints>(handle, "constraints")?;
        constraints.add_optional_constraint(in_str(key, "key")?, in_str(value, "value")?);
        Ok(())
    })
}
