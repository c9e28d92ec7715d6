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

use crate::{
    desktop_media_list::MediaSource,
    video_frame::{RgbFrame, VideoFrameClearType},
    RefCounted,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CaptureState {
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct DesktopCapturer {
    source: RefCounted<MediaSource>,
    running: AtomicBool,
}

impl DesktopCapturer {
    pub(crate) fn new(source: RefCounted<MediaSource>) -> Self {
        Self { source, running: AtomicBool::new(false) }
    }

    pub fn source(&self) -> RefCounted<MediaSource> {
        self.source.clone()
    }

    pub fn start(&self) -> CaptureState {
        if !self.running.swap(true, Ordering::AcqRel) {
            log::debug!("desktop capture of {} started", self.source.id());
        }
        CaptureState::Running
    }

    pub fn stop(&self) {
        if self.running.swap(false, Ordering::AcqRel) {
            log::debug!("desktop capture of {} stopped", self.source.id());
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn capture_frame(&self) -> Option<RgbFrame> {
        if !self.is_running() {
            return None;
        }
        let (width, height) = self.source.size();
        Some(RgbFrame::new(width, height, VideoFrameClearType::ColorBar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DesktopSourceInfo, ThumbnailConfig},
        desktop_device::DesktopType,
    };

    #[test]
    fn start_and_stop() {
        let info =
            DesktopSourceInfo { id: "s0".into(), name: "Screen".into(), width: 32, height: 8 };
        let source = RefCounted::new(MediaSource::new(
            DesktopType::Screen,
            info,
            ThumbnailConfig::default(),
        ));
        let capturer = DesktopCapturer::new(source.clone());
        assert_eq!(RefCounted::ref_count(&source), 2);

        assert!(!capturer.is_running());
        assert!(capturer.capture_frame().is_none());
        assert_eq!(capturer.start(), CaptureState::Running);
        assert!(capturer.is_running());
        assert_eq!(capturer.capture_frame().unwrap().width(), 32);
        capturer.stop();
        assert!(!capturer.is_running());
    }
}
