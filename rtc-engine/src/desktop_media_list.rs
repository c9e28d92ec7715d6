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

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::{
    check_index,
    config::{DesktopSourceInfo, ThumbnailConfig},
    desktop_device::{DesktopSourceEnumerator, DesktopType},
    jpeg_util::encode_rgb_to_jpeg,
    runtime::EngineRuntime,
    video_frame::{RgbFrame, VideoFrameClearType, RGB_CHANNELS},
    RefCounted, RtcResult,
};

/// Receives media list changes on an engine thread.
pub trait MediaListObserver: Send + Sync {
    fn on_media_source_added(&self, source: &RefCounted<MediaSource>);
    fn on_media_source_removed(&self, source: &RefCounted<MediaSource>);
    fn on_media_source_name_changed(&self, source: &RefCounted<MediaSource>);
    fn on_media_source_thumbnail_changed(&self, source: &RefCounted<MediaSource>);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MediaListEvent {
    Added,
    Removed,
    NameChanged,
    ThumbnailChanged,
}

/// A screen or window that can be captured.
pub struct MediaSource {
    id: String,
    desktop_type: DesktopType,
    info: RwLock<DesktopSourceInfo>,
    thumbnail_config: ThumbnailConfig,
    thumbnail: RwLock<Vec<u8>>,
}

impl std::fmt::Debug for MediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("MediaSource")
            .field("id", &self.id)
            .field("desktop_type", &self.desktop_type)
            .field("name", &self.info.read().name)
            .finish()
    }
}

// Fits the source aspect ratio inside the thumbnail box.
fn thumbnail_size(info: &DesktopSourceInfo, config: &ThumbnailConfig) -> (u32, u32) {
    if info.width == 0 || info.height == 0 {
        return (config.width.max(1), config.height.max(1));
    }
    let scale = f64::min(
        config.width as f64 / info.width as f64,
        config.height as f64 / info.height as f64,
    );
    let width = ((info.width as f64 * scale) as u32).max(1);
    let height = ((info.height as f64 * scale) as u32).max(1);
    (width, height)
}

impl MediaSource {
    pub(crate) fn new(
        desktop_type: DesktopType,
        info: DesktopSourceInfo,
        thumbnail_config: ThumbnailConfig,
    ) -> Self {
        Self {
            id: info.id.clone(),
            desktop_type,
            info: RwLock::new(info),
            thumbnail_config,
            thumbnail: Default::default(),
        }
    }

    pub fn id(&self) -> String {
        self.id.clone()
    }

    pub fn name(&self) -> String {
        self.info.read().name.clone()
    }

    pub fn desktop_type(&self) -> DesktopType {
        self.desktop_type
    }

    pub fn size(&self) -> (u32, u32) {
        let info = self.info.read();
        (info.width, info.height)
    }

    /// Last rendered JPEG thumbnail, empty until one was captured.
    pub fn thumbnail(&self) -> Vec<u8> {
        self.thumbnail.read().clone()
    }

    pub fn update_thumbnail(&self) -> bool {
        match self.refresh_thumbnail() {
            Ok(_) => true,
            Err(err) => {
                log::warn!("failed to capture thumbnail for {}: {}", self.id, err);
                false
            }
        }
    }

    // Returns whether the thumbnail bytes changed.
    fn refresh_thumbnail(&self) -> RtcResult<bool> {
        let (width, height) = thumbnail_size(&self.info.read(), &self.thumbnail_config);
        let frame = RgbFrame::new(width, height, VideoFrameClearType::ColorBar);
        let jpeg = encode_rgb_to_jpeg(
            frame.data(),
            width,
            height,
            RGB_CHANNELS,
            self.thumbnail_config.quality,
        )?;

        let mut thumbnail = self.thumbnail.write();
        let changed = *thumbnail != jpeg;
        *thumbnail = jpeg;
        Ok(changed)
    }

    // Returns whether the name changed.
    fn update_info(&self, info: DesktopSourceInfo) -> bool {
        let mut current = self.info.write();
        let renamed = current.name != info.name;
        *current = info;
        renamed
    }
}

pub struct DesktopMediaList {
    desktop_type: DesktopType,
    enumerator: Arc<dyn DesktopSourceEnumerator>,
    thumbnail_config: ThumbnailConfig,
    runtime: Arc<EngineRuntime>,
    sources: RwLock<Vec<RefCounted<MediaSource>>>,
    observer: Mutex<Option<Arc<dyn MediaListObserver>>>,
}

impl std::fmt::Debug for DesktopMediaList {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("DesktopMediaList")
            .field("desktop_type", &self.desktop_type)
            .field("sources", &self.sources.read().len())
            .finish()
    }
}

impl DesktopMediaList {
    pub(crate) fn new(
        desktop_type: DesktopType,
        enumerator: Arc<dyn DesktopSourceEnumerator>,
        thumbnail_config: ThumbnailConfig,
        runtime: Arc<EngineRuntime>,
    ) -> Self {
        Self {
            desktop_type,
            enumerator,
            thumbnail_config,
            runtime,
            sources: Default::default(),
            observer: Default::default(),
        }
    }

    pub fn desktop_type(&self) -> DesktopType {
        self.desktop_type
    }

    /// Replaces any previously registered observer.
    pub fn register_media_list_observer(&self, observer: Arc<dyn MediaListObserver>) {
        *self.observer.lock() = Some(observer);
    }

    /// Callbacks already posted to the engine thread still run, the observer
    /// is kept alive until they are done.
    pub fn deregister_media_list_observer(&self) {
        self.observer.lock().take();
    }

    /// Re-enumerates the sources and reports the differences to the observer.
    /// With `force_reload` every known source is reported removed and then
    /// added again. Returns the new source count.
    pub fn update_source_list(&self, force_reload: bool, get_thumbnail: bool) -> usize {
        let current = self.enumerator.sources(self.desktop_type);
        let mut events = Vec::new();
        let mut sources = self.sources.write();

        if force_reload {
            events.extend(sources.drain(..).map(|source| (MediaListEvent::Removed, source)));
        }

        sources.retain(|source| {
            let alive = current.iter().any(|info| info.id == source.id);
            if !alive {
                events.push((MediaListEvent::Removed, source.clone()));
            }
            alive
        });

        for info in current {
            match sources.iter().find(|source| source.id == info.id).cloned() {
                Some(source) => {
                    if source.update_info(info) {
                        events.push((MediaListEvent::NameChanged, source.clone()));
                    }
                    if get_thumbnail && self.capture_thumbnail(&source) {
                        events.push((MediaListEvent::ThumbnailChanged, source));
                    }
                }
                None => {
                    let source = RefCounted::new(MediaSource::new(
                        self.desktop_type,
                        info,
                        self.thumbnail_config,
                    ));
                    if get_thumbnail {
                        self.capture_thumbnail(&source);
                    }
                    events.push((MediaListEvent::Added, source.clone()));
                    sources.push(source);
                }
            }
        }

        let count = sources.len();
        drop(sources);
        self.notify(events);
        count
    }

    fn capture_thumbnail(&self, source: &MediaSource) -> bool {
        source.refresh_thumbnail().unwrap_or_else(|err| {
            log::warn!("failed to capture thumbnail for {}: {}", source.id, err);
            false
        })
    }

    pub fn get_source_count(&self) -> usize {
        self.sources.read().len()
    }

    pub fn get_source(&self, index: i32) -> RtcResult<RefCounted<MediaSource>> {
        let sources = self.sources.read();
        let index = check_index(index, sources.len())?;
        Ok(sources[index].clone())
    }

    pub fn sources(&self) -> Vec<RefCounted<MediaSource>> {
        self.sources.read().clone()
    }

    /// Refreshes the thumbnail of a source of this list. With `notify` the
    /// observer hears about it whether or not the image changed.
    pub fn get_thumbnail(&self, source: &RefCounted<MediaSource>, notify: bool) -> bool {
        let known = self.sources.read().iter().any(|s| RefCounted::ptr_eq(s, source));
        if !known {
            return false;
        }
        if !source.update_thumbnail() {
            return false;
        }
        if notify {
            self.notify(vec![(MediaListEvent::ThumbnailChanged, source.clone())]);
        }
        true
    }

    fn notify(&self, events: Vec<(MediaListEvent, RefCounted<MediaSource>)>) {
        if events.is_empty() {
            return;
        }
        let Some(observer) = self.observer.lock().clone() else {
            return;
        };

        self.runtime.post("media_list_observer", move || {
            for (event, source) in &events {
                match event {
                    MediaListEvent::Added => observer.on_media_source_added(source),
                    MediaListEvent::Removed => observer.on_media_source_removed(source),
                    MediaListEvent::NameChanged => observer.on_media_source_name_changed(source),
                    MediaListEvent::ThumbnailChanged => {
                        observer.on_media_source_thumbnail_changed(source)
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop_device::VirtualDesktop;
    use std::{sync::mpsc, time::Duration};

    struct ChannelObserver {
        tx: Mutex<mpsc::Sender<(&'static str, String)>>,
    }

    impl ChannelObserver {
        fn send(&self, event: &'static str, source: &RefCounted<MediaSource>) {
            let _ = self.tx.lock().send((event, source.id()));
        }
    }

    impl MediaListObserver for ChannelObserver {
        fn on_media_source_added(&self, source: &RefCounted<MediaSource>) {
            self.send("added", source);
        }

        fn on_media_source_removed(&self, source: &RefCounted<MediaSource>) {
            self.send("removed", source);
        }

        fn on_media_source_name_changed(&self, source: &RefCounted<MediaSource>) {
            self.send("name_changed", source);
        }

        fn on_media_source_thumbnail_changed(&self, source: &RefCounted<MediaSource>) {
            self.send("thumbnail_changed", source);
        }
    }

    fn window(id: &str, name: &str, width: u32, height: u32) -> DesktopSourceInfo {
        DesktopSourceInfo { id: id.to_owned(), name: name.to_owned(), width, height }
    }

    type Events = mpsc::Receiver<(&'static str, String)>;

    fn setup() -> (Arc<VirtualDesktop>, DesktopMediaList, Events) {
        let desktop = Arc::new(VirtualDesktop::default());
        let list = DesktopMediaList::new(
            DesktopType::Window,
            desktop.clone(),
            ThumbnailConfig::default(),
            Arc::new(EngineRuntime::new().unwrap()),
        );
        let (tx, rx) = mpsc::channel();
        list.register_media_list_observer(Arc::new(ChannelObserver { tx: Mutex::new(tx) }));
        (desktop, list, rx)
    }

    fn recv(rx: &Events) -> (&'static str, String) {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn diffs_are_reported_in_order() {
        let (desktop, list, rx) = setup();
        desktop.set_sources(
            DesktopType::Window,
            vec![window("w1", "Editor", 800, 600), window("w2", "Shell", 640, 480)],
        );

        assert_eq!(list.update_source_list(false, true), 2);
        assert_eq!(recv(&rx), ("added", "w1".to_owned()));
        assert_eq!(recv(&rx), ("added", "w2".to_owned()));
        assert!(!list.get_source(0).unwrap().thumbnail().is_empty());

        desktop.set_sources(
            DesktopType::Window,
            vec![window("w2", "Shell - ssh", 1280, 480), window("w3", "Browser", 800, 600)],
        );
        assert_eq!(list.update_source_list(false, true), 2);
        assert_eq!(recv(&rx), ("removed", "w1".to_owned()));
        assert_eq!(recv(&rx), ("name_changed", "w2".to_owned()));
        assert_eq!(recv(&rx), ("thumbnail_changed", "w2".to_owned()));
        assert_eq!(recv(&rx), ("added", "w3".to_owned()));
        assert_eq!(list.get_source(0).unwrap().name(), "Shell - ssh");
    }

    #[test]
    fn force_reload_reports_everything_again() {
        let (desktop, list, rx) = setup();
        desktop.set_sources(DesktopType::Window, vec![window("w1", "Editor", 800, 600)]);
        list.update_source_list(false, false);
        assert_eq!(recv(&rx), ("added", "w1".to_owned()));
        let before = list.get_source(0).unwrap();

        list.update_source_list(true, false);
        assert_eq!(recv(&rx), ("removed", "w1".to_owned()));
        assert_eq!(recv(&rx), ("added", "w1".to_owned()));
        assert!(!RefCounted::ptr_eq(&before, &list.get_source(0).unwrap()));
    }

    #[test]
    fn get_thumbnail_only_for_own_sources() {
        let (desktop, list, rx) = setup();
        desktop.set_sources(DesktopType::Window, vec![window("w1", "Editor", 800, 600)]);
        list.update_source_list(false, false);
        assert_eq!(recv(&rx), ("added", "w1".to_owned()));

        let source = list.get_source(0).unwrap();
        assert!(source.thumbnail().is_empty());
        assert!(list.get_thumbnail(&source, true));
        assert_eq!(recv(&rx), ("thumbnail_changed", "w1".to_owned()));
        assert!(!source.thumbnail().is_empty());

        let stranger = RefCounted::new(MediaSource::new(
            DesktopType::Window,
            window("x", "Other", 10, 10),
            ThumbnailConfig::default(),
        ));
        assert!(!list.get_thumbnail(&stranger, false));
        assert!(list.get_source(1).is_err());
    }

    #[test]
    fn thumbnail_keeps_aspect_ratio() {
        let config = ThumbnailConfig::default();
        assert_eq!(thumbnail_size(&window("s", "s", 1920, 1080), &config), (160, 90));
        assert_eq!(thumbnail_size(&window("s", "s", 900, 900), &config), (90, 90));
        assert_eq!(thumbnail_size(&window("s", "s", 0, 0), &config), (160, 90));
    }
}
