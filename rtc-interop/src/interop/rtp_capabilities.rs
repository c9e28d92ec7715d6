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

use std::os::raw::{c_char, c_int};

use rtc_engine::rtp_parameters::RtpCapabilities;

use crate::{
    buffer::{capacity, clear_text, write_text},
    error::InteropError,
    handle::{check_index, guard, guard_value, object, out_ref, reset_out},
    result::RtcResultU4,
    types::{RtcRtpCapabilitiesHandle, RtcRtpTransceiverDirection},
};

/// # Safety
/// `capabilities` must be null or a live capabilities handle.
#[no_mangle]
pub unsafe extern "C" fn RTCRtpCapabilities_GetCodecCount(
    capabilities: RtcRtpCapabilitiesHandle,
) -> c_int {
    guard_value("RTCRtpCapabilities_GetCodecCount", 0, || {
        let capabilities = object::<RtpCapabilities>(capabilities, "capabilities")?;
        Ok(capabilities.codecs.len().try_into().unwrap_or(c_int::MAX))
    })
}

/// Reads one codec. `clock_rate` and `channels` are 0 when the codec does not
/// specify them. `sdp_fmtp_line` is optional and skipped when null.
///
/// # Safety
/// `capabilities` must be null or live, every pointer null or valid for its
/// size.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn RTCRtpCapabilities_GetCodec(
    capabilities: RtcRtpCapabilitiesHandle,
    index: c_int,
    mime_type: *mut c_char,
    cch_mime_type: c_int,
    clock_rate: *mut c_int,
    channels: *mut c_int,
    sdp_fmtp_line: *mut c_char,
    cch_sdp_fmtp_line: c_int,
) -> RtcResultU4 {
    let cch_mime_type = capacity(cch_mime_type);
    let cch_sdp_fmtp_line = capacity(cch_sdp_fmtp_line);
    clear_text(mime_type, cch_mime_type);
    clear_text(sdp_fmtp_line, cch_sdp_fmtp_line);
    reset_out(clock_rate, 0);
    reset_out(channels, 0);

    guard("RTCRtpCapabilities_GetCodec", || {
        let capabilities = object::<RtpCapabilities>(capabilities, "capabilities")?;
        if mime_type.is_null() {
            return Err(InteropError::NullPointer("mime_type"));
        }
        let clock_rate = out_ref(clock_rate, "clock_rate")?;
        let channels = out_ref(channels, "channels")?;

        let codec = &capabilities.codecs[check_index(index, capabilities.codecs.len())?];
        *clock_rate = codec.clock_rate.and_then(|r| c_int::try_from(r).ok()).unwrap_or(0);
        *channels = codec.channels.map(c_int::from).unwrap_or(0);

        let mut result = write_text(&codec.mime_type, mime_type, cch_mime_type);
        if !sdp_fmtp_line.is_null() {
            let fmtp = codec.sdp_fmtp_line.as_deref().unwrap_or_default();
            result = result.and(write_text(fmtp, sdp_fmtp_line, cch_sdp_fmtp_line));
        }
        result
    })
}

/// # Safety
/// `capabilities` must be null or a live capabilities handle.
#[no_mangle]
pub unsafe extern "C" fn RTCRtpCapabilities_GetHeaderExtensionCount(
    capabilities: RtcRtpCapabilitiesHandle,
) -> c_int {
    guard_value("RTCRtpCapabilities_GetHeaderExtensionCount", 0, || {
        let capabilities = object::<RtpCapabilities>(capabilities, "capabilities")?;
        Ok(capabilities.header_extensions.len().try_into().unwrap_or(c_int::MAX))
    })
}

/// # Safety
/// `capabilities` must be null or live, `uri` null or valid for `cch_uri`
/// bytes, `direction` null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn RTCRtpCapabilities_GetHeaderExtension(
    capabilities: RtcRtpCapabilitiesHandle,
    index: c_int,
    uri: *mut c_char,
    cch_uri: c_int,
    direction: *mut RtcRtpTransceiverDirection,
) -> RtcResultU4 {
    let cch_uri = capacity(cch_uri);
    clear_text(uri, cch_uri);
    reset_out(direction, RtcRtpTransceiverDirection::Inactive);

    guard("RTCRtpCapabilities_GetHeaderExtension", || {
        let capabilities = object::<RtpCapabilities>(capabilities, "capabilities")?;
        if uri.is_null() {
            return Err(InteropError::NullPointer("uri"));
        }
        let direction = out_ref(direction, "direction")?;

        let extensions = &capabilities.header_extensions;
        let extension = &extensions[check_index(index, extensions.len())?];
        *direction = extension.direction.into();
        write_text(&extension.uri, uri, cch_uri)
    })
}
