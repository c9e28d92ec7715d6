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

#[cfg(feature = "desktop-device")]
use rtc_engine::desktop_device::DesktopType;
use rtc_engine::{
    media_stream_track::RtcTrackState as EngineTrackState,
    peer_connection_factory::{
        BundlePolicy, CandidateNetworkPolicy, IceServer, IceTransportsType, MediaSecurityType,
        RtcConfiguration, RtcpMuxPolicy, SdpSemantics, TcpCandidatePolicy,
    },
    rtp_parameters::RtpTransceiverDirection,
    MediaType,
};

#[cfg(feature = "desktop-device")]
use crate::types::RtcDesktopType;
use crate::{
    error::{InteropError, InteropResult},
    handle::in_str,
    types::{values, RtcPeerConnectionConfiguration, RtcRtpTransceiverDirection, RtcTrackState},
};

macro_rules! enum_from_c {
    ($fn_name:ident, $what:literal, $ty:ty { $($value:pat => $variant:expr),+ $(,)? }) => {
        pub(crate) fn $fn_name(value: c_int) -> InteropResult<$ty> {
            match value {
                $($value => Ok($variant),)+
                _ => Err(InteropError::InvalidParameter { name: $what, value: value.to_string() }),
            }
        }
    };
}

enum_from_c!(ice_transports_type, "ice transports type", IceTransportsType {
    values::ICE_TRANSPORTS_NONE => IceTransportsType::None,
    values::ICE_TRANSPORTS_RELAY => IceTransportsType::Relay,
    values::ICE_TRANSPORTS_NO_HOST => IceTransportsType::NoHost,
    values::ICE_TRANSPORTS_ALL => IceTransportsType::All,
});

enum_from_c!(bundle_policy, "bundle policy", BundlePolicy {
    values::BUNDLE_POLICY_BALANCED => BundlePolicy::Balanced,
    values::BUNDLE_POLICY_MAX_BUNDLE => BundlePolicy::MaxBundle,
    values::BUNDLE_POLICY_MAX_COMPAT => BundlePolicy::MaxCompat,
});

enum_from_c!(rtcp_mux_policy, "rtcp mux policy", RtcpMuxPolicy {
    values::RTCP_MUX_POLICY_NEGOTIATE => RtcpMuxPolicy::Negotiate,
    values::RTCP_MUX_POLICY_REQUIRE => RtcpMuxPolicy::Require,
});

enum_from_c!(candidate_network_policy, "candidate network policy", CandidateNetworkPolicy {
    values::CANDIDATE_NETWORK_POLICY_ALL => CandidateNetworkPolicy::All,
    values::CANDIDATE_NETWORK_POLICY_LOW_COST => CandidateNetworkPolicy::LowCost,
});

enum_from_c!(tcp_candidate_policy, "tcp candidate policy", TcpCandidatePolicy {
    values::TCP_CANDIDATE_POLICY_ENABLED => TcpCandidatePolicy::Enabled,
    values::TCP_CANDIDATE_POLICY_DISABLED => TcpCandidatePolicy::Disabled,
});

enum_from_c!(media_security_type, "srtp type", MediaSecurityType {
    values::SRTP_NONE => MediaSecurityType::SrtpNone,
    values::SDES_SRTP => MediaSecurityType::SdesSrtp,
    values::DTLS_SRTP => MediaSecurityType::DtlsSrtp,
});

enum_from_c!(sdp_semantics, "sdp semantics", SdpSemantics {
    values::SDP_SEMANTICS_PLAN_B => SdpSemantics::PlanB,
    values::SDP_SEMANTICS_UNIFIED_PLAN => SdpSemantics::UnifiedPlan,
});

enum_from_c!(media_type, "media type", MediaType {
    values::MEDIA_TYPE_AUDIO => MediaType::Audio,
    values::MEDIA_TYPE_VIDEO => MediaType::Video,
    values::MEDIA_TYPE_DATA => MediaType::Data,
    values::MEDIA_TYPE_UNSUPPORTED => MediaType::Unsupported,
});

#[cfg(feature = "desktop-device")]
enum_from_c!(desktop_type, "desktop type", DesktopType {
    values::DESKTOP_TYPE_SCREEN => DesktopType::Screen,
    values::DESKTOP_TYPE_WINDOW => DesktopType::Window,
});

#[cfg(feature = "desktop-device")]
impl From<DesktopType> for RtcDesktopType {
    fn from(value: DesktopType) -> Self {
        match value {
            DesktopType::Screen => Self::Screen,
            DesktopType::Window => Self::Window,
        }
    }
}

impl From<EngineTrackState> for RtcTrackState {
    fn from(value: EngineTrackState) -> Self {
        match value {
            EngineTrackState::Live => Self::Live,
            EngineTrackState::Ended => Self::Ended,
        }
    }
}

impl From<RtpTransceiverDirection> for RtcRtpTransceiverDirection {
    fn from(value: RtpTransceiverDirection) -> Self {
        match value {
            RtpTransceiverDirection::SendRecv => Self::SendRecv,
            RtpTransceiverDirection::SendOnly => Self::SendOnly,
            RtpTransceiverDirection::RecvOnly => Self::RecvOnly,
            RtpTransceiverDirection::Inactive => Self::Inactive,
            RtpTransceiverDirection::Stopped => Self::Stopped,
        }
    }
}

unsafe fn optional_str(value: *const c_char, name: &'static str) -> InteropResult<String> {
    if value.is_null() {
        return Ok(String::new());
    }
    in_str(value, name).map(str::to_owned)
}

/// Reads a caller configuration. Nothing is retained past the call.
///
/// # Safety
/// Every non-null string of `config` must be NUL terminated.
pub(crate) unsafe fn rtc_configuration(
    config: &RtcPeerConnectionConfiguration,
) -> InteropResult<RtcConfiguration> {
    let mut ice_servers = Vec::new();
    for server in config.ice_servers.iter().filter(|server| !server.uri.is_null()) {
        ice_servers.push(IceServer {
            urls: vec![in_str(server.uri, "ice server uri")?.to_owned()],
            username: optional_str(server.username, "ice server username")?,
            password: optional_str(server.password, "ice server password")?,
        });
    }

    Ok(RtcConfiguration {
        ice_servers,
        ice_transport_type: ice_transports_type(config.ice_transports_type)?,
        bundle_policy: bundle_policy(config.bundle_policy)?,
        rtcp_mux_policy: rtcp_mux_policy(config.rtcp_mux_policy)?,
        candidate_network_policy: candidate_network_policy(config.candidate_network_policy)?,
        tcp_candidate_policy: tcp_candidate_policy(config.tcp_candidate_policy)?,
        ice_candidate_pool_size: config.ice_candidate_pool_size,
        srtp_type: media_security_type(config.srtp_type)?,
        sdp_semantics: sdp_semantics(config.sdp_semantics)?,
        offer_to_receive_audio: config.offer_to_receive_audio.is_true(),
        offer_to_receive_video: config.offer_to_receive_video.is_true(),
        disable_ipv6: config.disable_ipv6.is_true(),
        disable_ipv6_on_wifi: config.disable_ipv6_on_wifi.is_true(),
        max_ipv6_networks: config.max_ipv6_networks,
        disable_link_local_networks: config.disable_link_local_networks.is_true(),
        screencast_min_bitrate: config.screencast_min_bitrate,
        use_rtp_mux: config.use_rtp_mux.is_true(),
        local_audio_bandwidth: config.local_audio_bandwidth,
        local_video_bandwidth: config.local_video_bandwidth,
    })
}
