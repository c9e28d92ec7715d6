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

#[cfg(feature = "desktop-device")]
use crate::desktop_capturer::DesktopCapturer;
use crate::{media_constraints::MediaConstraints, video_device::VideoCapturer, RefCounted};

/// What feeds frames into a [`VideoSource`].
#[derive(Debug, Clone)]
pub enum VideoCapture {
    Camera(RefCounted<VideoCapturer>),
    #[cfg(feature = "desktop-device")]
    Desktop(RefCounted<DesktopCapturer>),
}

#[derive(Debug)]
pub struct VideoSource {
    label: String,
    capture: VideoCapture,
    constraints: Option<RefCounted<MediaConstraints>>,
}

impl VideoSource {
    pub(crate) fn new(
        label: &str,
        capture: VideoCapture,
        constraints: Option<RefCounted<MediaConstraints>>,
    ) -> Self {
        Self { label: label.to_owned(), capture, constraints }
    }

    pub fn label(&self) -> String {
        self.label.clone()
    }

    pub fn capture(&self) -> VideoCapture {
        self.capture.clone()
    }

    pub fn constraints(&self) -> Option<RefCounted<MediaConstraints>> {
        self.constraints.clone()
    }

    pub fn is_screencast(&self) -> bool {
        match self.capture {
            VideoCapture::Camera(_) => false,
            #[cfg(feature = "desktop-device")]
            VideoCapture::Desktop(_) => true,
        }
    }
}
