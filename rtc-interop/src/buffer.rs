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

//! Copies engine strings and bytes into caller supplied buffers.
//!
//! Text is always NUL terminated and never split inside a UTF-8 sequence. A
//! value that does not fit leaves a terminated prefix and reports
//! [`InteropError::BufferTooSmall`].

use std::{
    os::raw::{c_char, c_int},
    ptr,
};

use crate::error::{InteropError, InteropResult};

/// Capacity of a caller buffer, negative sizes count as empty.
pub(crate) fn capacity(cch: c_int) -> usize {
    usize::try_from(cch).unwrap_or(0)
}

/// Zero-fills a text buffer so that it reads as an empty string.
///
/// # Safety
/// `buf` must be null or valid for `capacity` bytes.
pub(crate) unsafe fn clear_text(buf: *mut c_char, capacity: usize) {
    if !buf.is_null() && capacity > 0 {
        ptr::write_bytes(buf, 0, capacity);
    }
}

fn prefix_len(value: &str, max: usize) -> usize {
    if value.len() <= max {
        return value.len();
    }
    (0..=max).rev().find(|i| value.is_char_boundary(*i)).unwrap_or(0)
}

/// # Safety
/// `buf` must be valid for `capacity` bytes.
pub(crate) unsafe fn write_text(
    value: &str,
    buf: *mut c_char,
    capacity: usize,
) -> InteropResult<()> {
    let required = value.len() + 1;
    if capacity < 1 {
        return Err(InteropError::BufferTooSmall { required, capacity });
    }

    let len = prefix_len(value, capacity - 1);
    ptr::copy_nonoverlapping(value.as_ptr() as *const c_char, buf, len);
    *buf.add(len) = 0;

    if len < value.len() {
        return Err(InteropError::BufferTooSmall { required, capacity });
    }
    Ok(())
}

/// Copies `data` when it fits, `size` always ends up holding the payload size.
///
/// # Safety
/// `size` must be valid, `buf` must be valid for `*size` bytes or null when
/// `*size` is 0.
pub(crate) unsafe fn write_bytes(
    data: &[u8],
    buf: *mut u8,
    size: *mut c_int,
) -> InteropResult<()> {
    let capacity = capacity(*size);
    let required = c_int::try_from(data.len()).map_err(|_| InteropError::InvalidParameter {
        name: "buffer size",
        value: data.len().to_string(),
    })?;

    *size = required;
    if data.len() > capacity || (buf.is_null() && !data.is_empty()) {
        return Err(InteropError::BufferTooSmall { required: data.len(), capacity });
    }
    if !data.is_empty() {
        ptr::copy_nonoverlapping(data.as_ptr(), buf, data.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn read(buf: &[c_char]) -> &str {
        unsafe { CStr::from_ptr(buf.as_ptr()) }.to_str().unwrap()
    }

    #[test]
    fn fits_with_terminator() {
        let mut buf = [0x7f as c_char; 6];
        unsafe { write_text("audio", buf.as_mut_ptr(), buf.len()) }.unwrap();
        assert_eq!(read(&buf), "audio");
    }

    #[test]
    fn truncates_to_a_terminated_prefix() {
        let mut buf = [0 as c_char; 4];
        let err = unsafe { write_text("video", buf.as_mut_ptr(), buf.len()) }.unwrap_err();
        assert!(matches!(err, InteropError::BufferTooSmall { required: 6, capacity: 4 }));
        assert_eq!(read(&buf), "vid");
    }

    #[test]
    fn never_splits_a_character() {
        let mut buf = [0 as c_char; 4];
        // "é" is two bytes, only one of them would fit after "ab"
        let res = unsafe { write_text("abé", buf.as_mut_ptr(), buf.len()) };
        assert!(res.is_err());
        assert_eq!(read(&buf), "ab");
    }

    #[test]
    fn zero_capacity() {
        let mut buf = [0x41 as c_char; 2];
        assert!(unsafe { write_text("x", buf.as_mut_ptr(), 0) }.is_err());
        assert_eq!(buf, [0x41, 0x41]);
        assert_eq!(capacity(-5), 0);
    }

    #[test]
    fn bytes_report_required_size() {
        let data = [1u8, 2, 3, 4];
        let mut buf = [0u8; 2];
        let mut size: c_int = 2;
        assert!(unsafe { write_bytes(&data, buf.as_mut_ptr(), &mut size) }.is_err());
        assert_eq!(size, 4);
        assert_eq!(buf, [0, 0]);

        let mut buf = [0u8; 8];
        let mut size: c_int = 8;
        unsafe { write_bytes(&data, buf.as_mut_ptr(), &mut size) }.unwrap();
        assert_eq!(size, 4);
        assert_eq!(&buf[..4], &data);
    }
}
