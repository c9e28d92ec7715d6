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

use std::fmt::{Display, Formatter};

/// 32-bit result code returned by every fallible entry point.
///
/// A newtype over `u32` rather than an enum: callers may hand any bit
/// pattern back to [`crate::interop::libwebrtc::LibWebRTC_GetErrorMessage`].
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RtcResultU4(pub u32);

impl RtcResultU4 {
    pub const SUCCESS: Self = Self(0);

    pub const UNKNOWN_ERROR: Self = Self(0x8000_0000);
    pub const INVALID_PARAMETER: Self = Self(0x8000_0001);
    pub const INVALID_OPERATION: Self = Self(0x8000_0002);
    pub const WRONG_THREAD: Self = Self(0x8000_0003);
    pub const NOT_FOUND: Self = Self(0x8000_0004);
    pub const INVALID_NATIVE_HANDLE: Self = Self(0x8000_0005);
    pub const NOT_INITIALIZED: Self = Self(0x8000_0006);
    pub const UNSUPPORTED: Self = Self(0x8000_0007);
    pub const OUT_OF_RANGE: Self = Self(0x8000_0008);
    pub const BUFFER_TOO_SMALL: Self = Self(0x8000_0009);

    // Peer connection (0x1xx)
    pub const PEER_CONNECTION_CLOSED: Self = Self(0x8000_0101);

    // Data (0x3xx)
    pub const SCTP_NOT_NEGOTIATED: Self = Self(0x8000_0301);
    pub const INVALID_DATA_CHANNEL_ID: Self = Self(0x8000_0302);

    // Media (0x4xx)
    pub const INVALID_MEDIA_KIND: Self = Self(0x8000_0401);
    pub const AUDIO_RESAMPLING_NOT_SUPPORTED: Self = Self(0x8000_0402);

    pub const INVALID_POINTER: Self = Self(0x8000_4003);

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::SUCCESS => "The operation was successful.",
            Self::UNKNOWN_ERROR => "Unknown internal error.",
            Self::INVALID_PARAMETER => "A parameter passed to the API function was invalid.",
            Self::INVALID_OPERATION => "The operation cannot be performed in the current state.",
            Self::WRONG_THREAD => "A call was made to an API function on the wrong thread.",
            Self::NOT_FOUND => "An object was not found.",
            Self::INVALID_NATIVE_HANDLE => {
                "An interop handle referencing a native object instance is invalid."
            }
            Self::NOT_INITIALIZED => "The API object is not initialized.",
            Self::UNSUPPORTED => "The current operation is not supported by the implementation.",
            Self::OUT_OF_RANGE => "An argument was passed with a value out of the expected range.",
            Self::BUFFER_TOO_SMALL => "The buffer provided by the caller was too small.",
            Self::PEER_CONNECTION_CLOSED => {
                "The peer connection is closed, but the operation requires an open connection."
            }
            Self::SCTP_NOT_NEGOTIATED => {
                "The SCTP handshake for data channels encryption was not performed."
            }
            Self::INVALID_DATA_CHANNEL_ID => "The specified data channel ID is invalid.",
            Self::INVALID_MEDIA_KIND => {
                "An audio-only function was called on a video-only object or vice-versa."
            }
            Self::AUDIO_RESAMPLING_NOT_SUPPORTED => {
                "The audio resampler does not support the requested frequency ratio."
            }
            Self::INVALID_POINTER => "A null or invalid pointer was passed.",
            _ => "Unknown result code.",
        }
    }
}

impl Display for RtcResultU4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x} ({})", self.0, self.message())
    }
}
