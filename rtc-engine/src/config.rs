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

//! Device catalog of the in-process engine.
//!
//! The engine does not probe platform devices. What it exposes as audio
//! devices, cameras, screens and windows comes from an [`EngineConfig`], read
//! from the JSON file named by `RTC_ENGINE_CONFIG` or built from defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{RtcError, RtcErrorType, RtcResult};

pub const CONFIG_ENV: &str = "RTC_ENGINE_CONFIG";

/// Upper bound of microphone and speaker volumes.
pub const MAX_VOLUME: u32 = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDeviceInfo {
    pub name: String,
    pub guid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDeviceInfo {
    pub name: String,
    pub unique_id: String,
    #[serde(default)]
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSourceInfo {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
    pub quality: u8,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self { width: 160, height: 90, quality: 75 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub playout_devices: Vec<AudioDeviceInfo>,
    pub recording_devices: Vec<AudioDeviceInfo>,
    pub video_devices: Vec<VideoDeviceInfo>,
    pub screens: Vec<DesktopSourceInfo>,
    pub windows: Vec<DesktopSourceInfo>,
    pub microphone_volume: u32,
    pub speaker_volume: u32,
    pub thumbnail: ThumbnailConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            playout_devices: vec![AudioDeviceInfo {
                name: "Default Playout Device".to_owned(),
                guid: "default-playout".to_owned(),
            }],
            recording_devices: vec![AudioDeviceInfo {
                name: "Default Recording Device".to_owned(),
                guid: "default-recording".to_owned(),
            }],
            video_devices: vec![VideoDeviceInfo {
                name: "Virtual Camera".to_owned(),
                unique_id: "virtual-camera-0".to_owned(),
                product_id: "virtual".to_owned(),
            }],
            screens: vec![DesktopSourceInfo {
                id: "screen-0".to_owned(),
                name: "Screen 1".to_owned(),
                width: 1920,
                height: 1080,
            }],
            windows: Vec::new(),
            microphone_volume: MAX_VOLUME,
            speaker_volume: MAX_VOLUME,
            thumbnail: ThumbnailConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reads the file named by `RTC_ENGINE_CONFIG`, or returns the defaults
    /// when the variable is unset.
    pub fn from_env() -> RtcResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> RtcResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|err| {
            RtcError::new(
                RtcErrorType::InvalidParameter,
                format!("failed to read engine config {}: {err}", path.display()),
            )
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> RtcResult<Self> {
        let config: Self = serde_json::from_str(data).map_err(|err| {
            RtcError::new(RtcErrorType::InvalidParameter, format!("invalid engine config: {err}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> RtcResult<()> {
        if self.microphone_volume > MAX_VOLUME || self.speaker_volume > MAX_VOLUME {
            return Err(RtcError::new(
                RtcErrorType::OutOfRange,
                format!("volumes must be within 0..={MAX_VOLUME}"),
            ));
        }
        if self.thumbnail.quality == 0 || self.thumbnail.quality > 100 {
            return Err(RtcError::new(
                RtcErrorType::OutOfRange,
                "thumbnail quality must be within 1..=100",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(
            r#"{ "windows": [{ "id": "w1", "name": "Editor", "width": 800, "height": 600 }] }"#,
        )
        .unwrap();

        assert_eq!(config.windows.len(), 1);
        assert_eq!(config.windows[0].name, "Editor");
        assert_eq!(config.playout_devices, EngineConfig::default().playout_devices);
        assert_eq!(config.thumbnail, ThumbnailConfig::default());
    }

    #[test]
    fn out_of_range_volume_is_rejected() {
        let err = EngineConfig::from_json(r#"{ "speaker_volume": 1000 }"#).unwrap_err();
        assert_eq!(err.error_type, RtcErrorType::OutOfRange);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_type, RtcErrorType::InvalidParameter);
    }
}
