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

use std::ops::RangeInclusive;

use parking_lot::Mutex;

use crate::{
    audio_source::AudioSource,
    media_stream_track::{impl_media_stream_track, TrackCore, AUDIO_TRACK_KIND},
    MediaType, RefCounted, RtcError, RtcErrorType, RtcResult,
};

pub const VOLUME_RANGE: RangeInclusive<f64> = 0.0..=10.0;

#[derive(Debug)]
pub struct AudioTrack {
    core: TrackCore,
    source: RefCounted<AudioSource>,
    volume: Mutex<f64>,
}

impl_media_stream_track!(AudioTrack, MediaType::Audio, AUDIO_TRACK_KIND);

impl AudioTrack {
    pub(crate) fn new(id: &str, source: RefCounted<AudioSource>) -> Self {
        Self { core: TrackCore::new(id), source, volume: Mutex::new(1.0) }
    }

    pub fn source(&self) -> RefCounted<AudioSource> {
        self.source.clone()
    }

    pub fn volume(&self) -> f64 {
        *self.volume.lock()
    }

    pub fn set_volume(&self, volume: f64) -> RtcResult<()> {
        if !VOLUME_RANGE.contains(&volume) {
            return Err(RtcError::new(
                RtcErrorType::OutOfRange,
                format!("volume {volume} is outside of {VOLUME_RANGE:?}"),
            ));
        }
        *self.volume.lock() = volume;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_stream_track::MediaStreamTrack;

    #[test]
    fn volume_is_bounded() {
        let source = RefCounted::new(AudioSource::new("mic"));
        let track = AudioTrack::new("audio0", source);

        assert_eq!(track.kind(), "audio");
        assert!(track.set_volume(10.0).is_ok());
        assert_eq!(track.volume(), 10.0);
        assert_eq!(track.set_volume(10.5).unwrap_err().error_type, RtcErrorType::OutOfRange);
        assert!(track.set_volume(f64::NAN).is_err());
        assert_eq!(track.volume(), 10.0);
    }
}
