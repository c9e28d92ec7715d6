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

use std::{collections::HashMap, sync::Arc};

use parking_lot::{Mutex, RwLock};

use crate::{
    config::{DesktopSourceInfo, EngineConfig, ThumbnailConfig},
    desktop_capturer::DesktopCapturer,
    desktop_media_list::{DesktopMediaList, MediaSource},
    runtime::EngineRuntime,
    RefCounted,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DesktopType {
    Screen,
    Window,
}

/// Lists the capturable screens or windows.
pub trait DesktopSourceEnumerator: Send + Sync {
    fn sources(&self, desktop_type: DesktopType) -> Vec<DesktopSourceInfo>;
}

/// In-memory desktop seeded from the engine config. Sources can be swapped at
/// runtime to simulate windows opening and closing.
#[derive(Debug, Default)]
pub struct VirtualDesktop {
    screens: RwLock<Vec<DesktopSourceInfo>>,
    windows: RwLock<Vec<DesktopSourceInfo>>,
}

impl VirtualDesktop {
    pub fn new(screens: Vec<DesktopSourceInfo>, windows: Vec<DesktopSourceInfo>) -> Self {
        Self { screens: RwLock::new(screens), windows: RwLock::new(windows) }
    }

    pub fn set_sources(&self, desktop_type: DesktopType, sources: Vec<DesktopSourceInfo>) {
        match desktop_type {
            DesktopType::Screen => *self.screens.write() = sources,
            DesktopType::Window => *self.windows.write() = sources,
        }
    }
}

impl DesktopSourceEnumerator for VirtualDesktop {
    fn sources(&self, desktop_type: DesktopType) -> Vec<DesktopSourceInfo> {
        match desktop_type {
            DesktopType::Screen => self.screens.read().clone(),
            DesktopType::Window => self.windows.read().clone(),
        }
    }
}

pub struct DesktopDevice {
    enumerator: Arc<dyn DesktopSourceEnumerator>,
    thumbnail: ThumbnailConfig,
    runtime: Arc<EngineRuntime>,
    media_lists: Mutex<HashMap<DesktopType, RefCounted<DesktopMediaList>>>,
}

impl std::fmt::Debug for DesktopDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("DesktopDevice").field("thumbnail", &self.thumbnail).finish()
    }
}

impl DesktopDevice {
    pub(crate) fn new(config: &EngineConfig, runtime: Arc<EngineRuntime>) -> Self {
        let desktop = VirtualDesktop::new(config.screens.clone(), config.windows.clone());
        Self::with_enumerator(Arc::new(desktop), config.thumbnail, runtime)
    }

    pub fn with_enumerator(
        enumerator: Arc<dyn DesktopSourceEnumerator>,
        thumbnail: ThumbnailConfig,
        runtime: Arc<EngineRuntime>,
    ) -> Self {
        Self { enumerator, thumbnail, runtime, media_lists: Default::default() }
    }

    /// One media list per desktop type, shared by every caller.
    pub fn get_desktop_media_list(
        &self,
        desktop_type: DesktopType,
    ) -> RefCounted<DesktopMediaList> {
        self.media_lists
            .lock()
            .entry(desktop_type)
            .or_insert_with(|| {
                RefCounted::new(DesktopMediaList::new(
                    desktop_type,
                    self.enumerator.clone(),
                    self.thumbnail,
                    self.runtime.clone(),
                ))
            })
            .clone()
    }

    pub fn create_desktop_capturer(
        &self,
        source: RefCounted<MediaSource>,
    ) -> RefCounted<DesktopCapturer> {
        RefCounted::new(DesktopCapturer::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_lists_are_cached_per_type() {
        let runtime = Arc::new(EngineRuntime::new().unwrap());
        let device = DesktopDevice::new(&EngineConfig::default(), runtime);

        let screens = device.get_desktop_media_list(DesktopType::Screen);
        let again = device.get_desktop_media_list(DesktopType::Screen);
        let windows = device.get_desktop_media_list(DesktopType::Window);

        assert!(RefCounted::ptr_eq(&screens, &again));
        assert!(!RefCounted::ptr_eq(&screens, &windows));
        assert_eq!(windows.desktop_type(), DesktopType::Window);
    }
}
