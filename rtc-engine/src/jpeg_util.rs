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

use std::io::Cursor;

use image::{codecs::jpeg::JpegEncoder, ColorType};

use crate::{RtcError, RtcErrorType, RtcResult};

/// Encodes packed 8-bit pixels as JPEG. `channels` is 1 (gray), 3 (RGB) or
/// 4 (RGBA, alpha is dropped).
pub fn encode_rgb_to_jpeg(
    data: &[u8],
    width: u32,
    height: u32,
    channels: u8,
    quality: u8,
) -> RtcResult<Vec<u8>> {
    let expected = width as usize * height as usize * channels as usize;
    if width == 0 || height == 0 || data.len() < expected {
        return Err(RtcError::new(
            RtcErrorType::InvalidParameter,
            format!("{} bytes cannot hold a {width}x{height}x{channels} image", data.len()),
        ));
    }

    let rgb;
    let (pixels, color_type) = match channels {
        1 => (&data[..expected], ColorType::L8),
        3 => (&data[..expected], ColorType::Rgb8),
        4 => {
            rgb = data[..expected]
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect::<Vec<u8>>();
            (rgb.as_slice(), ColorType::Rgb8)
        }
        _ => {
            return Err(RtcError::new(
                RtcErrorType::Unsupported,
                format!("{channels} channels cannot be encoded as jpeg"),
            ))
        }
    };

    let mut buf = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100))
        .encode(pixels, width, height, color_type)
        .map_err(|err| {
            RtcError::new(RtcErrorType::Internal, format!("jpeg encode failed: {err}"))
        })?;
    Ok(buf.into_inner())
}
