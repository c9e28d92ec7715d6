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

use std::{fmt::Debug, sync::Arc};

use dashmap::DashMap;
use parking_lot::Mutex;

#[cfg(feature = "desktop-device")]
use crate::{desktop_capturer::DesktopCapturer, desktop_device::DesktopDevice};
use crate::{
    audio_device::AudioDevice,
    audio_source::AudioSource,
    audio_track::AudioTrack,
    config::EngineConfig,
    media_constraints::MediaConstraints,
    media_stream::MediaStream,
    peer_connection::PeerConnection,
    rtp_parameters::{capabilities_for, RtpCapabilities, RtpTransceiverDirection},
    runtime::EngineRuntime,
    video_device::{VideoCapturer, VideoDevice},
    video_source::{VideoCapture, VideoSource},
    video_track::VideoTrack,
    MediaType, RefCounted, RtcError, RtcErrorType, RtcResult,
};

pub const MAX_ICE_SERVERS: usize = 8;

const ICE_SCHEMES: [&str; 4] = ["stun:", "stuns:", "turn:", "turns:"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IceServer {
    pub urls: Vec<String>,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IceTransportsType {
    None,
    Relay,
    NoHost,
    All,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BundlePolicy {
    Balanced,
    MaxBundle,
    MaxCompat,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtcpMuxPolicy {
    Negotiate,
    Require,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CandidateNetworkPolicy {
    All,
    LowCost,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TcpCandidatePolicy {
    Enabled,
    Disabled,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaSecurityType {
    SrtpNone,
    SdesSrtp,
    DtlsSrtp,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SdpSemantics {
    PlanB,
    UnifiedPlan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtcConfiguration {
    pub ice_servers: Vec<IceServer>,
    pub ice_transport_type: IceTransportsType,
    pub bundle_policy: BundlePolicy,
    pub rtcp_mux_policy: RtcpMuxPolicy,
    pub candidate_network_policy: CandidateNetworkPolicy,
    pub tcp_candidate_policy: TcpCandidatePolicy,
    pub ice_candidate_pool_size: i32,
    pub srtp_type: MediaSecurityType,
    pub sdp_semantics: SdpSemantics,
    pub offer_to_receive_audio: bool,
    pub offer_to_receive_video: bool,
    pub disable_ipv6: bool,
    pub disable_ipv6_on_wifi: bool,
    pub max_ipv6_networks: i32,
    pub disable_link_local_networks: bool,
    /// Negative leaves the engine default in place.
    pub screencast_min_bitrate: i32,
    pub use_rtp_mux: bool,
    /// kbps
    pub local_audio_bandwidth: u32,
    /// kbps
    pub local_video_bandwidth: u32,
}

impl Default for RtcConfiguration {
    fn default() -> Self {
        Self {
            ice_servers: vec![],
            ice_transport_type: IceTransportsType::All,
            bundle_policy: BundlePolicy::Balanced,
            rtcp_mux_policy: RtcpMuxPolicy::Require,
            candidate_network_policy: CandidateNetworkPolicy::All,
            tcp_candidate_policy: TcpCandidatePolicy::Enabled,
            ice_candidate_pool_size: 0,
            srtp_type: MediaSecurityType::DtlsSrtp,
            sdp_semantics: SdpSemantics::UnifiedPlan,
            offer_to_receive_audio: true,
            offer_to_receive_video: true,
            disable_ipv6: false,
            disable_ipv6_on_wifi: false,
            max_ipv6_networks: 5,
            disable_link_local_networks: false,
            screencast_min_bitrate: -1,
            use_rtp_mux: true,
            local_audio_bandwidth: 128,
            local_video_bandwidth: 512,
        }
    }
}

impl RtcConfiguration {
    fn validate(&self) -> RtcResult<()> {
        let invalid =
            |message: String| Err(RtcError::new(RtcErrorType::InvalidParameter, message));

        if self.ice_servers.len() > MAX_ICE_SERVERS {
            return invalid(format!("at most {MAX_ICE_SERVERS} ice servers are supported"));
        }
        for url in self.ice_servers.iter().flat_map(|server| server.urls.iter()) {
            if !ICE_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
                return invalid(format!("invalid ice server url {url:?}"));
            }
        }
        if self.ice_candidate_pool_size < 0 {
            return invalid(format!("invalid candidate pool size {}", self.ice_candidate_pool_size));
        }
        if self.max_ipv6_networks < 0 {
            return invalid(format!("invalid max ipv6 networks {}", self.max_ipv6_networks));
        }
        Ok(())
    }
}

struct FactoryState {
    runtime: Arc<EngineRuntime>,
    audio_device: RefCounted<AudioDevice>,
    video_device: RefCounted<VideoDevice>,
    #[cfg(feature = "desktop-device")]
    desktop_device: RefCounted<DesktopDevice>,
}

pub struct PeerConnectionFactory {
    config: EngineConfig,
    state: Mutex<Option<FactoryState>>,
    connections: DashMap<usize, RefCounted<PeerConnection>>,
}

impl Debug for PeerConnectionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("PeerConnectionFactory")
            .field("initialized", &self.is_initialized())
            .field("connections", &self.connections.len())
            .finish()
    }
}

fn connection_key(connection: &RefCounted<PeerConnection>) -> usize {
    RefCounted::as_raw(connection) as usize
}

impl PeerConnectionFactory {
    pub fn create() -> RefCounted<Self> {
        let config = EngineConfig::from_env().unwrap_or_else(|err| {
            log::warn!("{}, using the default device catalog", err);
            EngineConfig::default()
        });
        Self::with_config(config)
    }

    pub fn with_config(config: EngineConfig) -> RefCounted<Self> {
        RefCounted::new(Self { config, state: Default::default(), connections: DashMap::new() })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().is_some()
    }

    /// Starts the engine threads and opens the devices. Calling it again on an
    /// initialized factory is a no-op.
    pub fn initialize(&self) -> bool {
        let mut state = self.state.lock();
        if state.is_some() {
            return true;
        }

        let runtime = match EngineRuntime::new() {
            Ok(runtime) => Arc::new(runtime),
            Err(err) => {
                log::error!("failed to initialize the peer connection factory: {}", err);
                return false;
            }
        };

        *state = Some(FactoryState {
            audio_device: RefCounted::new(AudioDevice::new(&self.config, runtime.clone())),
            video_device: RefCounted::new(VideoDevice::new(self.config.video_devices.clone())),
            #[cfg(feature = "desktop-device")]
            desktop_device: RefCounted::new(DesktopDevice::new(&self.config, runtime.clone())),
            runtime,
        });
        log::info!("peer connection factory initialized");
        true
    }

    /// Closes every connection this factory created and stops the engine
    /// threads. Handles already given out stay valid.
    pub fn terminate(&self) -> bool {
        let Some(state) = self.state.lock().take() else {
            return true;
        };

        for entry in self.connections.iter() {
            entry.value().close();
        }
        self.connections.clear();
        state.runtime.shutdown();
        log::info!("peer connection factory terminated");
        true
    }

    fn with_state<T>(&self, f: impl FnOnce(&FactoryState) -> T) -> RtcResult<T> {
        match self.state.lock().as_ref() {
            Some(state) => Ok(f(state)),
            None => Err(RtcError::new(
                RtcErrorType::NotInitialized,
                "the peer connection factory is not initialized",
            )),
        }
    }

    fn check_initialized(&self) -> RtcResult<()> {
        self.with_state(|_| ())
    }

    pub fn create_peer_connection(
        &self,
        configuration: RtcConfiguration,
        constraints: Option<RefCounted<MediaConstraints>>,
    ) -> RtcResult<RefCounted<PeerConnection>> {
        self.check_initialized()?;
        configuration.validate()?;

        let connection = RefCounted::new(PeerConnection::new(configuration, constraints));
        self.connections.insert(connection_key(&connection), connection.clone());
        log::debug!("created peer connection {:?}", connection);
        Ok(connection)
    }

    /// Closes `connection` and drops the factory's reference to it.
    pub fn delete_peer_connection(
        &self,
        connection: &RefCounted<PeerConnection>,
    ) -> RtcResult<()> {
        let Some((_, connection)) = self.connections.remove(&connection_key(connection)) else {
            return Err(RtcError::new(
                RtcErrorType::NotFound,
                "the peer connection was not created by this factory",
            ));
        };
        connection.close();
        Ok(())
    }

    pub fn peer_connections(&self) -> usize {
        self.connections.len()
    }

    pub fn get_audio_device(&self) -> RtcResult<RefCounted<AudioDevice>> {
        self.with_state(|state| state.audio_device.clone())
    }

    pub fn get_video_device(&self) -> RtcResult<RefCounted<VideoDevice>> {
        self.with_state(|state| state.video_device.clone())
    }

    #[cfg(feature = "desktop-device")]
    pub fn get_desktop_device(&self) -> RtcResult<RefCounted<DesktopDevice>> {
        self.with_state(|state| state.desktop_device.clone())
    }

    pub fn create_audio_source(&self, label: &str) -> RtcResult<RefCounted<AudioSource>> {
        self.check_initialized()?;
        Ok(RefCounted::new(AudioSource::new(label)))
    }

    pub fn create_video_source(
        &self,
        capturer: RefCounted<VideoCapturer>,
        label: &str,
        constraints: Option<RefCounted<MediaConstraints>>,
    ) -> RtcResult<RefCounted<VideoSource>> {
        self.check_initialized()?;
        Ok(RefCounted::new(VideoSource::new(label, VideoCapture::Camera(capturer), constraints)))
    }

    #[cfg(feature = "desktop-device")]
    pub fn create_desktop_source(
        &self,
        capturer: RefCounted<DesktopCapturer>,
        label: &str,
        constraints: Option<RefCounted<MediaConstraints>>,
    ) -> RtcResult<RefCounted<VideoSource>> {
        self.check_initialized()?;
        Ok(RefCounted::new(VideoSource::new(label, VideoCapture::Desktop(capturer), constraints)))
    }

    pub fn create_audio_track(
        &self,
        source: RefCounted<AudioSource>,
        track_id: &str,
    ) -> RtcResult<RefCounted<AudioTrack>> {
        self.check_initialized()?;
        Ok(RefCounted::new(AudioTrack::new(track_id, source)))
    }

    pub fn create_video_track(
        &self,
        source: RefCounted<VideoSource>,
        track_id: &str,
    ) -> RtcResult<RefCounted<VideoTrack>> {
        self.check_initialized()?;
        Ok(RefCounted::new(VideoTrack::new(track_id, source)))
    }

    pub fn create_stream(&self, stream_id: &str) -> RtcResult<RefCounted<MediaStream>> {
        self.check_initialized()?;
        Ok(RefCounted::new(MediaStream::new(stream_id)))
    }

    pub fn get_rtp_sender_capabilities(
        &self,
        media_type: MediaType,
    ) -> RtcResult<RefCounted<RtpCapabilities>> {
        self.check_initialized()?;
        Ok(capabilities_for(media_type, RtpTransceiverDirection::SendOnly))
    }

    pub fn get_rtp_receiver_capabilities(
        &self,
        media_type: MediaType,
    ) -> RtcResult<RefCounted<RtpCapabilities>> {
        self.check_initialized()?;
        Ok(capabilities_for(media_type, RtpTransceiverDirection::RecvOnly))
    }
}

impl Drop for PeerConnectionFactory {
    fn drop(&mut self) {
        self.terminate();
    }
}
