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

use parking_lot::Mutex;

use crate::{
    audio_track::AudioTrack, media_stream_track::MediaStreamTrack, video_track::VideoTrack,
    RefCounted,
};

#[derive(Debug)]
pub struct MediaStream {
    id: String,
    audio_tracks: Mutex<Vec<RefCounted<AudioTrack>>>,
    video_tracks: Mutex<Vec<RefCounted<VideoTrack>>>,
}

// A track id may only appear once per kind.
fn add_track<T: MediaStreamTrack + 'static>(
    tracks: &Mutex<Vec<RefCounted<T>>>,
    track: RefCounted<T>,
) -> bool {
    let mut tracks = tracks.lock();
    let id = track.id();
    if tracks.iter().any(|t| t.id() == id) {
        return false;
    }
    tracks.push(track);
    true
}

fn remove_track<T: MediaStreamTrack + 'static>(
    tracks: &Mutex<Vec<RefCounted<T>>>,
    track: &RefCounted<T>,
) -> bool {
    let mut tracks = tracks.lock();
    let len = tracks.len();
    tracks.retain(|t| !RefCounted::ptr_eq(t, track));
    tracks.len() != len
}

fn find_track<T: MediaStreamTrack + 'static>(
    tracks: &Mutex<Vec<RefCounted<T>>>,
    track_id: &str,
) -> Option<RefCounted<T>> {
    tracks.lock().iter().find(|t| t.id() == track_id).cloned()
}

impl MediaStream {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            audio_tracks: Default::default(),
            video_tracks: Default::default(),
        }
    }

    pub fn id(&self) -> String {
        self.id.clone()
    }

    /// Streams created locally are labelled with their id.
    pub fn label(&self) -> String {
        self.id.clone()
    }

    pub fn add_audio_track(&self, track: RefCounted<AudioTrack>) -> bool {
        add_track(&self.audio_tracks, track)
    }

    pub fn add_video_track(&self, track: RefCounted<VideoTrack>) -> bool {
        add_track(&self.video_tracks, track)
    }

    pub fn remove_audio_track(&self, track: &RefCounted<AudioTrack>) -> bool {
        remove_track(&self.audio_tracks, track)
    }

    pub fn remove_video_track(&self, track: &RefCounted<VideoTrack>) -> bool {
        remove_track(&self.video_tracks, track)
    }

    /// Snapshot of the audio tracks, each entry holds its own reference.
    pub fn audio_tracks(&self) -> Vec<RefCounted<AudioTrack>> {
        self.audio_tracks.lock().clone()
    }

    pub fn video_tracks(&self) -> Vec<RefCounted<VideoTrack>> {
        self.video_tracks.lock().clone()
    }

    pub fn find_audio_track(&self, track_id: &str) -> Option<RefCounted<AudioTrack>> {
        find_track(&self.audio_tracks, track_id)
    }

    pub fn find_video_track(&self, track_id: &str) -> Option<RefCounted<VideoTrack>> {
        find_track(&self.video_tracks, track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio_source::AudioSource;

    fn audio_track(id: &str) -> RefCounted<AudioTrack> {
        let source = RefCounted::new(AudioSource::new("source"));
        RefCounted::new(AudioTrack::new(id, source))
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let stream = MediaStream::new("stream");
        assert!(stream.add_audio_track(audio_track("a")));
        assert!(!stream.add_audio_track(audio_track("a")));
        assert!(stream.add_audio_track(audio_track("b")));
        assert_eq!(stream.audio_tracks().len(), 2);
        assert!(stream.video_tracks().is_empty());
    }

    #[test]
    fn stream_holds_a_reference_on_its_tracks() {
        let stream = MediaStream::new("stream");
        let track = audio_track("a");
        assert!(stream.add_audio_track(track.clone()));
        assert_eq!(RefCounted::ref_count(&track), 2);

        let found = stream.find_audio_track("a").unwrap();
        assert!(RefCounted::ptr_eq(&found, &track));
        drop(found);

        assert!(stream.remove_audio_track(&track));
        assert!(!stream.remove_audio_track(&track));
        assert_eq!(RefCounted::ref_count(&track), 1);
        assert!(stream.find_audio_track("a").is_none());
    }
}
