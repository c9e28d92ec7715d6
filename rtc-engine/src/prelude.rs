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

pub use crate::audio_device::{AudioDevice, DeviceChangeCallback};
pub use crate::audio_source::AudioSource;
pub use crate::audio_track::AudioTrack;
pub use crate::config::{
    AudioDeviceInfo, DesktopSourceInfo, EngineConfig, ThumbnailConfig, VideoDeviceInfo,
};
#[cfg(feature = "desktop-device")]
pub use crate::desktop_capturer::{CaptureState, DesktopCapturer};
#[cfg(feature = "desktop-device")]
pub use crate::desktop_device::{
    DesktopDevice, DesktopSourceEnumerator, DesktopType, VirtualDesktop,
};
#[cfg(feature = "desktop-device")]
pub use crate::desktop_media_list::{DesktopMediaList, MediaListObserver, MediaSource};
pub use crate::media_constraints::MediaConstraints;
pub use crate::media_stream::MediaStream;
pub use crate::media_stream_track::{MediaStreamTrack, RtcTrackState};
pub use crate::peer_connection::{PeerConnection, PeerConnectionState};
pub use crate::peer_connection_factory::{
    BundlePolicy, CandidateNetworkPolicy, IceServer, IceTransportsType, MediaSecurityType,
    PeerConnectionFactory, RtcConfiguration, RtcpMuxPolicy, SdpSemantics, TcpCandidatePolicy,
};
pub use crate::rtp_parameters::*;
pub use crate::video_device::{VideoCapturer, VideoDevice};
pub use crate::video_frame::{RgbFrame, VideoFrameClearType};
pub use crate::video_source::{VideoCapture, VideoSource};
pub use crate::video_track::VideoTrack;
pub use crate::{MediaType, RefCounted, RtcError, RtcErrorType};
