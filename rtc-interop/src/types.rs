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
    ffi::c_void,
    os::raw::{c_char, c_int},
    ptr,
};

/// Maximum number of ICE servers in a [`RtcPeerConnectionConfiguration`].
pub const MAX_ICE_SERVER_SIZE: usize = 8;

/// 32-bit boolean. Any non-zero value reads as true.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RtcBool32(pub i32);

impl RtcBool32 {
    pub const TRUE: Self = Self(-1);
    pub const FALSE: Self = Self(0);

    pub fn is_true(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for RtcBool32 {
    fn from(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }
}

impl From<RtcBool32> for bool {
    fn from(value: RtcBool32) -> Self {
        value.is_true()
    }
}

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtcTrackState {
    Unknown = -1,
    Live = 0,
    Ended = 1,
}

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtcDesktopType {
    Screen = 0,
    Window = 1,
}

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtcRtpTransceiverDirection {
    SendRecv = 0,
    SendOnly = 1,
    RecvOnly = 2,
    Inactive = 3,
    Stopped = 4,
}

/// Values of the integer enums read from the caller.
pub mod values {
    use std::os::raw::c_int;

    pub const ICE_TRANSPORTS_NONE: c_int = 0;
    pub const ICE_TRANSPORTS_RELAY: c_int = 1;
    pub const ICE_TRANSPORTS_NO_HOST: c_int = 2;
    pub const ICE_TRANSPORTS_ALL: c_int = 3;

    pub const BUNDLE_POLICY_BALANCED: c_int = 0;
    pub const BUNDLE_POLICY_MAX_BUNDLE: c_int = 1;
    pub const BUNDLE_POLICY_MAX_COMPAT: c_int = 2;

    pub const RTCP_MUX_POLICY_NEGOTIATE: c_int = 0;
    pub const RTCP_MUX_POLICY_REQUIRE: c_int = 1;

    pub const CANDIDATE_NETWORK_POLICY_ALL: c_int = 0;
    pub const CANDIDATE_NETWORK_POLICY_LOW_COST: c_int = 1;

    pub const TCP_CANDIDATE_POLICY_ENABLED: c_int = 0;
    pub const TCP_CANDIDATE_POLICY_DISABLED: c_int = 1;

    pub const SRTP_NONE: c_int = 0;
    pub const SDES_SRTP: c_int = 1;
    pub const DTLS_SRTP: c_int = 2;

    pub const SDP_SEMANTICS_PLAN_B: c_int = 0;
    pub const SDP_SEMANTICS_UNIFIED_PLAN: c_int = 1;

    pub const MEDIA_TYPE_AUDIO: c_int = 0;
    pub const MEDIA_TYPE_VIDEO: c_int = 1;
    pub const MEDIA_TYPE_DATA: c_int = 2;
    pub const MEDIA_TYPE_UNSUPPORTED: c_int = 3;

    pub const DESKTOP_TYPE_SCREEN: c_int = 0;
    pub const DESKTOP_TYPE_WINDOW: c_int = 1;
}

pub type RtcObjectHandle = *mut c_void;
pub type RtcRefCountedObjectHandle = RtcObjectHandle;
pub type RtcPeerConnectionFactoryHandle = RtcRefCountedObjectHandle;
pub type RtcPeerConnectionHandle = RtcRefCountedObjectHandle;
pub type RtcAudioDeviceHandle = RtcRefCountedObjectHandle;
pub type RtcVideoDeviceHandle = RtcRefCountedObjectHandle;
pub type RtcAudioSourceHandle = RtcRefCountedObjectHandle;
pub type RtcVideoSourceHandle = RtcRefCountedObjectHandle;
pub type RtcVideoCapturerHandle = RtcRefCountedObjectHandle;
pub type RtcMediaConstraintsHandle = RtcRefCountedObjectHandle;
pub type RtcDesktopDeviceHandle = RtcRefCountedObjectHandle;
pub type RtcDesktopCapturerHandle = RtcRefCountedObjectHandle;
pub type RtcDesktopMediaSourceHandle = RtcRefCountedObjectHandle;
pub type RtcDesktopMediaListHandle = RtcRefCountedObjectHandle;
pub type RtcMediaStreamHandle = RtcRefCountedObjectHandle;
pub type RtcRtpCapabilitiesHandle = RtcRefCountedObjectHandle;
pub type RtcMediaTrackHandle = RtcRefCountedObjectHandle;
pub type RtcAudioTrackHandle = RtcMediaTrackHandle;
pub type RtcVideoTrackHandle = RtcMediaTrackHandle;

pub type RtcAudioDeviceChangeDelegate = Option<unsafe extern "C" fn()>;

/// `source` is only valid for the duration of the call.
pub type RtcMediaListObserverDelegate =
    Option<unsafe extern "C" fn(user_data: RtcObjectHandle, source: RtcDesktopMediaSourceHandle)>;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct RtcMediaListObserverCallbacks {
    pub media_source_added: RtcMediaListObserverDelegate,
    pub user_data_added: RtcObjectHandle,
    pub media_source_removed: RtcMediaListObserverDelegate,
    pub user_data_removed: RtcObjectHandle,
    pub media_source_name_changed: RtcMediaListObserverDelegate,
    pub user_data_name_changed: RtcObjectHandle,
    pub media_source_thumbnail_changed: RtcMediaListObserverDelegate,
    pub user_data_thumbnail_changed: RtcObjectHandle,
}

impl Default for RtcMediaListObserverCallbacks {
    fn default() -> Self {
        Self {
            media_source_added: None,
            user_data_added: ptr::null_mut(),
            media_source_removed: None,
            user_data_removed: ptr::null_mut(),
            media_source_name_changed: None,
            user_data_name_changed: ptr::null_mut(),
            media_source_thumbnail_changed: None,
            user_data_thumbnail_changed: ptr::null_mut(),
        }
    }
}

/// An empty slot has a null `uri`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct RtcIceServer {
    pub uri: *const c_char,
    pub username: *const c_char,
    pub password: *const c_char,
}

impl Default for RtcIceServer {
    fn default() -> Self {
        Self { uri: ptr::null(), username: ptr::null(), password: ptr::null() }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct RtcPeerConnectionConfiguration {
    pub ice_servers: [RtcIceServer; MAX_ICE_SERVER_SIZE],
    pub ice_transports_type: c_int,
    pub bundle_policy: c_int,
    pub rtcp_mux_policy: c_int,
    pub candidate_network_policy: c_int,
    pub tcp_candidate_policy: c_int,
    pub ice_candidate_pool_size: c_int,
    pub srtp_type: c_int,
    pub sdp_semantics: c_int,
    pub offer_to_receive_audio: RtcBool32,
    pub offer_to_receive_video: RtcBool32,
    pub disable_ipv6: RtcBool32,
    pub disable_ipv6_on_wifi: RtcBool32,
    pub max_ipv6_networks: c_int,
    pub disable_link_local_networks: RtcBool32,
    pub screencast_min_bitrate: c_int,
    pub use_rtp_mux: RtcBool32,
    pub local_audio_bandwidth: u32,
    pub local_video_bandwidth: u32,
}

impl Default for RtcPeerConnectionConfiguration {
    fn default() -> Self {
        Self {
            ice_servers: [RtcIceServer::default(); MAX_ICE_SERVER_SIZE],
            ice_transports_type: values::ICE_TRANSPORTS_ALL,
            bundle_policy: values::BUNDLE_POLICY_BALANCED,
            rtcp_mux_policy: values::RTCP_MUX_POLICY_REQUIRE,
            candidate_network_policy: values::CANDIDATE_NETWORK_POLICY_ALL,
            tcp_candidate_policy: values::TCP_CANDIDATE_POLICY_ENABLED,
            ice_candidate_pool_size: 0,
            srtp_type: values::DTLS_SRTP,
            sdp_semantics: values::SDP_SEMANTICS_UNIFIED_PLAN,
            offer_to_receive_audio: RtcBool32::TRUE,
            offer_to_receive_video: RtcBool32::TRUE,
            disable_ipv6: RtcBool32::FALSE,
            disable_ipv6_on_wifi: RtcBool32::FALSE,
            max_ipv6_networks: 5,
            disable_link_local_networks: RtcBool32::FALSE,
            screencast_min_bitrate: -1,
            use_rtp_mux: RtcBool32::TRUE,
            local_audio_bandwidth: 128,
            local_video_bandwidth: 512,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool32_reads_any_non_zero_as_true() {
        assert!(RtcBool32(1).is_true());
        assert!(RtcBool32(i32::MIN).is_true());
        assert!(!RtcBool32(0).is_true());
        assert_eq!(RtcBool32::from(true), RtcBool32::TRUE);
        assert_eq!(RtcBool32::TRUE.0, -1);
    }

    #[test]
    fn layout_is_flat() {
        assert_eq!(std::mem::size_of::<RtcBool32>(), 4);
        assert_eq!(std::mem::size_of::<RtcTrackState>(), 4);
        assert_eq!(
            std::mem::size_of::<RtcIceServer>(),
            3 * std::mem::size_of::<*const c_char>()
        );
        let config = RtcPeerConnectionConfiguration::default();
        assert!(config.ice_servers.iter().all(|server| server.uri.is_null()));
        assert_eq!(config.max_ipv6_networks, 5);
    }
}
