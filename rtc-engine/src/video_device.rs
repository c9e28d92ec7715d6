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
    check_index,
    config::VideoDeviceInfo,
    video_frame::{RgbFrame, VideoFrameClearType},
    RefCounted, RtcError, RtcErrorType, RtcResult,
};

#[derive(Debug)]
pub struct VideoDevice {
    devices: Vec<VideoDeviceInfo>,
}

impl VideoDevice {
    pub(crate) fn new(devices: Vec<VideoDeviceInfo>) -> Self {
        Self { devices }
    }

    pub fn number_of_devices(&self) -> usize {
        self.devices.len()
    }

    pub fn get_device_name(&self, index: i32) -> RtcResult<VideoDeviceInfo> {
        let index = check_index(index, self.devices.len())?;
        Ok(self.devices[index].clone())
    }

    pub fn create_capturer(
        &self,
        name: &str,
        index: i32,
        width: i32,
        height: i32,
        target_fps: i32,
    ) -> RtcResult<RefCounted<VideoCapturer>> {
        let device = check_index(index, self.devices.len())?;
        let (Ok(width), Ok(height), Ok(fps)) =
            (u32::try_from(width), u32::try_from(height), u32::try_from(target_fps))
        else {
            return Err(RtcError::new(
                RtcErrorType::InvalidParameter,
                format!("invalid capture format {width}x{height}@{target_fps}"),
            ));
        };
        if width == 0 || height == 0 || fps == 0 {
            return Err(RtcError::new(
                RtcErrorType::InvalidParameter,
                format!("invalid capture format {width}x{height}@{fps}"),
            ));
        }

        log::debug!("creating capturer {} on {}", name, self.devices[device].name);
        Ok(RefCounted::new(VideoCapturer {
            name: name.to_owned(),
            device: self.devices[device].clone(),
            width,
            height,
            fps,
            started: AtomicBool::new(false),
        }))
    }
}

#[derive(Debug)]
pub struct VideoCapturer {
    name: String,
    device: VideoDeviceInfo,
    width: u32,
    height: u32,
    fps: u32,
    started: AtomicBool,
}

impl VideoCapturer {
    pub fn name(&self) -> String {
        self.name.clone()
    }

    pub fn device(&self) -> &VideoDeviceInfo {
        &self.device
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Returns true once the capturer is running, including when it already was.
    pub fn start_capture(&self) -> bool {
        if !self.started.swap(true, Ordering::AcqRel) {
            log::debug!("capturer {} started", self.name);
        }
        true
    }

    pub fn capture_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    pub fn stop_capture(&self) {
        if self.started.swap(false, Ordering::AcqRel) {
            log::debug!("capturer {} stopped", self.name);
        }
    }

    /// The frame the virtual camera currently shows, `None` while stopped.
    pub fn capture_frame(&self) -> Option<RgbFrame> {
        self.capture_started()
            .then(|| RgbFrame::new(self.width, self.height, VideoFrameClearType::ColorBar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn device() -> VideoDevice {
        VideoDevice::new(EngineConfig::default().video_devices)
    }

    #[test]
    fn device_names_are_indexed() {
        let device = device();
        assert_eq!(device.number_of_devices(), 1);
        assert_eq!(device.get_device_name(0).unwrap().unique_id, "virtual-camera-0");
        assert_eq!(device.get_device_name(1).unwrap_err().error_type, RtcErrorType::OutOfRange);
        assert_eq!(device.get_device_name(-1).unwrap_err().error_type, RtcErrorType::OutOfRange);
    }

    #[test]
    fn capturer_lifecycle() {
        let capturer = device().create_capturer("cam", 0, 64, 32, 30).unwrap();
        assert!(!capturer.capture_started());
        assert!(capturer.capture_frame().is_none());

        assert!(capturer.start_capture());
        assert!(capturer.start_capture());
        assert!(capturer.capture_started());
        let frame = capturer.capture_frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (64, 32));

        capturer.stop_capture();
        assert!(!capturer.capture_started());
    }

    #[test]
    fn invalid_capture_format() {
        let err = device().create_capturer("cam", 0, 0, 480, 30).unwrap_err();
        assert_eq!(err.error_type, RtcErrorType::InvalidParameter);
        let err = device().create_capturer("cam", 0, 640, 480, -1).unwrap_err();
        assert_eq!(err.error_type, RtcErrorType::InvalidParameter);
        let err = device().create_capturer("cam", 3, 640, 480, 30).unwrap_err();
        assert_eq!(err.error_type, RtcErrorType::OutOfRange);
    }
}
