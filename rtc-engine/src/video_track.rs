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
    media_stream_track::{impl_media_stream_track, TrackCore, VIDEO_TRACK_KIND},
    video_source::VideoSource,
    MediaType, RefCounted,
};

#[derive(Debug)]
pub struct VideoTrack {
    core: TrackCore,
    source: RefCounted<VideoSource>,
}

impl_media_stream_track!(VideoTrack, MediaType::Video, VIDEO_TRACK_KIND);

impl VideoTrack {
    pub(crate) fn new(id: &str, source: RefCounted<VideoSource>) -> Self {
        Self { core: TrackCore::new(id), source }
    }

    pub fn source(&self) -> RefCounted<VideoSource> {
        self.source.clone()
    }
}
