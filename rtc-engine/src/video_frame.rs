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

/// Channels per pixel in an [`RgbFrame`].
pub const RGB_CHANNELS: u8 = 3;

// SMPTE-style bars, left to right.
const COLOR_BARS: [[u8; 3]; 8] = [
    [235, 235, 235],
    [235, 235, 16],
    [16, 235, 235],
    [16, 235, 16],
    [235, 16, 235],
    [235, 16, 16],
    [16, 16, 235],
    [16, 16, 16],
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VideoFrameClearType {
    Black,
    ColorBar,
}

/// Packed 8-bit RGB frame.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbFrame {
    pub fn new(width: u32, height: u32, clear: VideoFrameClearType) -> Self {
        let mut frame = Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * RGB_CHANNELS as usize],
        };
        if clear == VideoFrameClearType::ColorBar {
            frame.fill_color_bars();
        }
        frame
    }

    fn fill_color_bars(&mut self) {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(width * RGB_CHANNELS as usize) {
            for (x, pixel) in row.chunks_exact_mut(RGB_CHANNELS as usize).enumerate() {
                pixel.copy_from_slice(&COLOR_BARS[x * COLOR_BARS.len() / width]);
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for RgbFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("RgbFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_bars_span_the_frame() {
        let frame = RgbFrame::new(16, 2, VideoFrameClearType::ColorBar);
        assert_eq!(frame.data().len(), 16 * 2 * 3);
        assert_eq!(&frame.data()[0..3], &COLOR_BARS[0]);
        assert_eq!(&frame.data()[15 * 3..16 * 3], &COLOR_BARS[7]);
        // second row repeats the first
        assert_eq!(&frame.data()[16 * 3..16 * 3 + 3], &COLOR_BARS[0]);

        let black = RgbFrame::new(4, 4, VideoFrameClearType::Black);
        assert!(black.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn empty_frame() {
        let frame = RgbFrame::new(0, 0, VideoFrameClearType::ColorBar);
        assert!(frame.data().is_empty());
    }
}
