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

#![allow(non_snake_case)]

pub mod audio_device;
pub mod configuration;
#[cfg(feature = "desktop-device")]
pub mod desktop_capturer;
#[cfg(feature = "desktop-device")]
pub mod desktop_device;
#[cfg(feature = "desktop-device")]
pub mod desktop_media_list;
pub mod libwebrtc;
pub mod media_constraints;
#[cfg(feature = "desktop-device")]
pub mod media_source;
pub mod media_stream;
pub mod media_track;
pub mod peer_connection;
pub mod peer_connection_factory;
pub mod ref_counted;
pub mod rtp_capabilities;
pub mod video_capturer;
pub mod video_device;
