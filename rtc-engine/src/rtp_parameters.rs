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

use crate::{MediaType, RefCounted};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtpTransceiverDirection {
    SendRecv,
    SendOnly,
    RecvOnly,
    Inactive,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtpCodecCapability {
    pub mime_type: String,
    pub clock_rate: Option<u64>,
    pub channels: Option<u16>,
    pub sdp_fmtp_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtpHeaderExtensionCapability {
    pub uri: String,
    pub direction: RtpTransceiverDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RtpCapabilities {
    pub codecs: Vec<RtpCodecCapability>,
    pub header_extensions: Vec<RtpHeaderExtensionCapability>,
}

fn codec(
    mime_type: &str,
    clock_rate: u64,
    channels: Option<u16>,
    fmtp: Option<&str>,
) -> RtpCodecCapability {
    RtpCodecCapability {
        mime_type: mime_type.to_owned(),
        clock_rate: Some(clock_rate),
        channels,
        sdp_fmtp_line: fmtp.map(str::to_owned),
    }
}

fn extension(uri: &str, direction: RtpTransceiverDirection) -> RtpHeaderExtensionCapability {
    RtpHeaderExtensionCapability { uri: uri.to_owned(), direction }
}

fn audio_capabilities(direction: RtpTransceiverDirection) -> RtpCapabilities {
    RtpCapabilities {
        codecs: vec![
            codec("audio/opus", 48000, Some(2), Some("minptime=10;useinbandfec=1")),
            codec("audio/G722", 8000, Some(1), None),
            codec("audio/PCMU", 8000, Some(1), None),
            codec("audio/PCMA", 8000, Some(1), None),
            codec("audio/telephone-event", 8000, Some(1), None),
        ],
        header_extensions: vec![
            extension("urn:ietf:params:rtp-hdrext:ssrc-audio-level", direction),
            extension("http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time", direction),
            extension(
                "http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01",
                direction,
            ),
            extension("urn:ietf:params:rtp-hdrext:sdes:mid", direction),
        ],
    }
}

fn video_capabilities(direction: RtpTransceiverDirection) -> RtpCapabilities {
    RtpCapabilities {
        codecs: vec![
            codec("video/VP8", 90000, None, None),
            codec("video/VP9", 90000, None, Some("profile-id=0")),
            codec(
                "video/H264",
                90000,
                None,
                Some("level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42e01f"),
            ),
            codec("video/AV1", 90000, None, None),
        ],
        header_extensions: vec![
            extension("urn:ietf:params:rtp-hdrext:toffset", direction),
            extension("http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time", direction),
            extension("urn:3gpp:video-orientation", direction),
            extension(
                "http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01",
                direction,
            ),
            extension("http://www.webrtc.org/experiments/rtp-hdrext/playout-delay", direction),
            extension("urn:ietf:params:rtp-hdrext:sdes:mid", direction),
        ],
    }
}

/// Capabilities for `media_type`. Data and unsupported kinds have none.
pub(crate) fn capabilities_for(
    media_type: MediaType,
    direction: RtpTransceiverDirection,
) -> RefCounted<RtpCapabilities> {
    let capabilities = match media_type {
        MediaType::Audio => audio_capabilities(direction),
        MediaType::Video => video_capabilities(direction),
        MediaType::Data | MediaType::Unsupported => RtpCapabilities::default(),
    };
    RefCounted::new(capabilities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_by_media_type() {
        let audio = capabilities_for(MediaType::Audio, RtpTransceiverDirection::SendOnly);
        assert_eq!(audio.codecs[0].mime_type, "audio/opus");
        assert_eq!(audio.codecs.len(), 5);
        assert!(audio
            .header_extensions
            .iter()
            .all(|ext| ext.direction == RtpTransceiverDirection::SendOnly));

        let video = capabilities_for(MediaType::Video, RtpTransceiverDirection::RecvOnly);
        assert!(video.codecs.iter().any(|c| c.mime_type == "video/AV1"));

        let data = capabilities_for(MediaType::Data, RtpTransceiverDirection::SendOnly);
        assert!(data.codecs.is_empty());
        assert!(data.header_extensions.is_empty());
    }
}
