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

use crate::{
    handle::{guard, out_ref},
    result::RtcResultU4,
    types::RtcPeerConnectionConfiguration,
};

/// Fills `config` with the documented defaults: no ICE servers, all
/// transports, balanced bundling, DTLS-SRTP and unified plan.
///
/// # Safety
/// `config` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCPeerConnectionConfiguration_InitDefault(
    config: *mut RtcPeerConnectionConfiguration,
) -> RtcResultU4 {
    guard("RTCPeerConnectionConfiguration_InitDefault", || {
        *out_ref(config, "config")? = RtcPeerConnectionConfiguration::default();
        Ok(())
    })
}
