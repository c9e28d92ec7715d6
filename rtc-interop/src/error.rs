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

use rtc_engine::{RtcError, RtcErrorType};
use thiserror::Error;

use crate::result::RtcResultU4;

pub type InteropResult<T> = Result<T, InteropError>;

#[derive(Error, Debug)]
pub enum InteropError {
    #[error("null {0} handle")]
    NullHandle(&'static str),
    #[error("{name} is not a {expected} handle (found {found})")]
    WrongHandleType { name: &'static str, expected: &'static str, found: &'static str },
    #[error("{name} is a {found} track, expected a {expected} track")]
    WrongMediaKind { name: &'static str, expected: &'static str, found: &'static str },
    #[error("null out pointer {0}")]
    NullPointer(&'static str),
    #[error("null parameter {0}")]
    NullParameter(&'static str),
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("no {name} with id {id}")]
    NotFound { name: &'static str, id: String },
    #[error("index {index} is out of range 0..{count}")]
    OutOfRange { index: i64, count: usize },
    #[error("buffer of {capacity} bytes cannot hold {required} bytes")]
    BufferTooSmall { required: usize, capacity: usize },
    #[error("the library is not initialized")]
    NotInitialized,
    #[error(transparent)]
    Engine(#[from] RtcError),
}

impl InteropError {
    pub fn code(&self) -> RtcResultU4 {
        match self {
            Self::NullHandle(_) | Self::WrongHandleType { .. } => {
                RtcResultU4::INVALID_NATIVE_HANDLE
            }
            Self::WrongMediaKind { .. } => RtcResultU4::INVALID_MEDIA_KIND,
            Self::NullPointer(_) => RtcResultU4::INVALID_POINTER,
            Self::NullParameter(_) | Self::InvalidParameter { .. } => {
                RtcResultU4::INVALID_PARAMETER
            }
            Self::NotFound { .. } => RtcResultU4::NOT_FOUND,
            Self::OutOfRange { .. } => RtcResultU4::OUT_OF_RANGE,
            Self::BufferTooSmall { .. } => RtcResultU4::BUFFER_TOO_SMALL,
            Self::NotInitialized => RtcResultU4::NOT_INITIALIZED,
            Self::Engine(err) => match err.error_type {
                RtcErrorType::Internal => RtcResultU4::UNKNOWN_ERROR,
                RtcErrorType::InvalidState => RtcResultU4::INVALID_OPERATION,
                RtcErrorType::InvalidParameter => RtcResultU4::INVALID_PARAMETER,
                RtcErrorType::NotInitialized => RtcResultU4::NOT_INITIALIZED,
                RtcErrorType::NotFound => RtcResultU4::NOT_FOUND,
                RtcErrorType::OutOfRange => RtcResultU4::OUT_OF_RANGE,
                RtcErrorType::Closed => RtcResultU4::PEER_CONNECTION_CLOSED,
                RtcErrorType::InvalidMediaKind => RtcResultU4::INVALID_MEDIA_KIND,
                RtcErrorType::Unsupported => RtcResultU4::UNSUPPORTED,
            },
        }
    }
}
