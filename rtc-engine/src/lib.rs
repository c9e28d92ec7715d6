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

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaType {
    Audio,
    Video,
    Data,
    Unsupported,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtcErrorType {
    Internal,
    InvalidState,
    InvalidParameter,
    NotInitialized,
    NotFound,
    OutOfRange,
    Closed,
    InvalidMediaKind,
    Unsupported,
}

#[derive(Error, Debug)]
#[error("an RtcError occured: {error_type:?} - {message}")]
pub struct RtcError {
    pub error_type: RtcErrorType,
    pub message: String,
}

impl RtcError {
    pub(crate) fn new(error_type: RtcErrorType, message: impl Into<String>) -> Self {
        Self { error_type, message: message.into() }
    }
}

pub type RtcResult<T> = Result<T, RtcError>;

// `0 <= index < count`, against a count read from the live collection.
pub(crate) fn check_index(index: i32, count: usize) -> RtcResult<usize> {
    usize::try_from(index).ok().filter(|index| *index < count).ok_or_else(|| {
        RtcError::new(RtcErrorType::OutOfRange, format!("index {index} is out of 0..{count}"))
    })
}

pub mod audio_device;
pub mod audio_source;
pub mod audio_track;
pub mod config;
#[cfg(feature = "desktop-device")]
pub mod desktop_capturer;
#[cfg(feature = "desktop-device")]
pub mod desktop_device;
#[cfg(feature = "desktop-device")]
pub mod desktop_media_list;
#[cfg(feature = "desktop-device")]
pub mod jpeg_util;
pub mod media_constraints;
pub mod media_stream;
pub mod media_stream_track;
pub mod peer_connection;
pub mod peer_connection_factory;
pub mod prelude;
pub mod refcount;
pub mod rtp_parameters;
pub mod runtime;
pub mod video_device;
pub mod video_frame;
pub mod video_source;
pub mod video_track;

pub use refcount::RefCounted;
