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

use std::sync::atomic::{AtomicBool, Ordering};

use crate::MediaType;

pub const AUDIO_TRACK_KIND: &str = "audio";
pub const VIDEO_TRACK_KIND: &str = "video";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtcTrackState {
    Live,
    Ended,
}

/// Behaviour shared by audio and video tracks.
pub trait MediaStreamTrack: Send + Sync {
    fn media_type(&self) -> MediaType;
    fn kind(&self) -> &'static str;
    fn id(&self) -> String;
    fn enabled(&self) -> bool;
    /// Returns true if the flag actually changed.
    fn set_enabled(&self, enabled: bool) -> bool;
    fn state(&self) -> RtcTrackState;
}

#[derive(Debug)]
pub(crate) struct TrackCore {
    id: String,
    enabled: AtomicBool,
}

impl TrackCore {
    pub(crate) fn new(id: &str) -> Self {
        Self { id: id.to_owned(), enabled: AtomicBool::new(true) }
    }

    pub(crate) fn id(&self) -> String {
        self.id.clone()
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub(crate) fn set_enabled(&self, enabled: bool) -> bool {
        self.enabled.swap(enabled, Ordering::AcqRel) != enabled
    }
}

macro_rules! impl_media_stream_track {
    ($track:ty, $media_type:expr, $kind:expr) => {
        impl $crate::media_stream_track::MediaStreamTrack for $track {
            fn media_type(&self) -> $crate::MediaType {
                $media_type
            }

            fn kind(&self) -> &'static str {
                $kind
            }

            fn id(&self) -> String {
                self.core.id()
            }

            fn enabled(&self) -> bool {
                self.core.enabled()
            }

            fn set_enabled(&self, enabled: bool) -> bool {
                self.core.set_enabled(enabled)
            }

            fn state(&self) -> $crate::media_stream_track::RtcTrackState {
                $crate::media_stream_track::RtcTrackState::Live
            }
        }
    };
}

pub(crate) use impl_media_stream_track;
