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

//! C ABI over `rtc-engine`.
//!
//! Every engine object crosses the boundary as an opaque handle owning one
//! reference. Handles are released with `RefCountedObject_Release`; using a
//! handle after its last release, or releasing it more often than it was
//! acquired, is undefined behavior.
//!
//! Fallible entry points return an [`RtcResultU4`] and never unwind into the
//! caller.

mod buffer;
mod conversion;
pub mod error;
pub mod globals;
mod handle;
pub mod interop;
pub mod result;
pub mod types;

pub use error::{InteropError, InteropResult};
pub use result::RtcResultU4;
pub use types::*;
