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

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::error::{InteropError, InteropResult};

#[derive(Debug, Default)]
struct LibraryState {
    initialized: bool,
}

lazy_static! {
    static ref LIBRARY: Mutex<LibraryState> = Mutex::new(LibraryState::default());
}

/// Marks the library initialized and installs the logger. Returns false if it
/// already was.
pub(crate) fn initialize() -> bool {
    let mut state = LIBRARY.lock();
    if state.initialized {
        return false;
    }

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    state.initialized = true;
    log::info!("rtc-interop v{} initialized", env!("CARGO_PKG_VERSION"));
    true
}

/// Returns false if the library was not initialized.
pub(crate) fn terminate() -> bool {
    let mut state = LIBRARY.lock();
    if !state.initialized {
        return false;
    }
    state.initialized = false;
    log::info!("rtc-interop terminated");
    true
}

pub fn is_initialized() -> bool {
    LIBRARY.lock().initialized
}

pub(crate) fn check_initialized() -> InteropResult<()> {
    if is_initialized() {
        Ok(())
    } else {
        Err(InteropError::NotInitialized)
    }
}
