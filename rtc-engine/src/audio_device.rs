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

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use parking_lot::{Mutex, RwLock};

use crate::{
    check_index,
    config::{AudioDeviceInfo, EngineConfig, MAX_VOLUME},
    runtime::EngineRuntime,
    RtcError, RtcErrorType, RtcResult,
};

pub type DeviceChangeCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Default)]
struct DeviceList {
    devices: Vec<AudioDeviceInfo>,
    selected: Option<usize>,
}

impl DeviceList {
    fn new(devices: Vec<AudioDeviceInfo>) -> Self {
        let selected = (!devices.is_empty()).then_some(0);
        Self { devices, selected }
    }

    // Keeps the selection on the same guid when it survives the update.
    fn replace(&mut self, devices: Vec<AudioDeviceInfo>) {
        let selected_guid = self.selected.map(|i| self.devices[i].guid.clone());
        let selected = selected_guid
            .and_then(|guid| devices.iter().position(|d| d.guid == guid))
            .or_else(|| (!devices.is_empty()).then_some(0));
        self.devices = devices;
        self.selected = selected;
    }
}

pub struct AudioDevice {
    playout: RwLock<DeviceList>,
    recording: RwLock<DeviceList>,
    microphone_volume: AtomicU32,
    speaker_volume: AtomicU32,
    on_device_change: Mutex<Option<DeviceChangeCallback>>,
    runtime: Arc<EngineRuntime>,
}

impl std::fmt::Debug for AudioDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AudioDevice")
            .field("playout", &*self.playout.read())
            .field("recording", &*self.recording.read())
            .finish()
    }
}

fn check_volume(volume: u32) -> RtcResult<u32> {
    if volume > MAX_VOLUME {
        return Err(RtcError::new(
            RtcErrorType::OutOfRange,
            format!("volume {volume} is above {MAX_VOLUME}"),
        ));
    }
    Ok(volume)
}

impl AudioDevice {
    pub(crate) fn new(config: &EngineConfig, runtime: Arc<EngineRuntime>) -> Self {
        Self {
            playout: RwLock::new(DeviceList::new(config.playout_devices.clone())),
            recording: RwLock::new(DeviceList::new(config.recording_devices.clone())),
            microphone_volume: AtomicU32::new(config.microphone_volume),
            speaker_volume: AtomicU32::new(config.speaker_volume),
            on_device_change: Default::default(),
            runtime,
        }
    }

    pub fn playout_devices(&self) -> usize {
        self.playout.read().devices.len()
    }

    pub fn recording_devices(&self) -> usize {
        self.recording.read().devices.len()
    }

    pub fn playout_device_name(&self, index: i32) -> RtcResult<AudioDeviceInfo> {
        let list = self.playout.read();
        let index = check_index(index, list.devices.len())?;
        Ok(list.devices[index].clone())
    }

    pub fn recording_device_name(&self, index: i32) -> RtcResult<AudioDeviceInfo> {
        let list = self.recording.read();
        let index = check_index(index, list.devices.len())?;
        Ok(list.devices[index].clone())
    }

    pub fn set_playout_device(&self, index: i32) -> RtcResult<()> {
        let mut list = self.playout.write();
        list.selected = Some(check_index(index, list.devices.len())?);
        Ok(())
    }

    pub fn set_recording_device(&self, index: i32) -> RtcResult<()> {
        let mut list = self.recording.write();
        list.selected = Some(check_index(index, list.devices.len())?);
        Ok(())
    }

    pub fn playout_device(&self) -> Option<usize> {
        self.playout.read().selected
    }

    pub fn recording_device(&self) -> Option<usize> {
        self.recording.read().selected
    }

    /// Replaces the device change callback, `None` unregisters it.
    pub fn register_device_change_callback(&self, callback: Option<DeviceChangeCallback>) {
        *self.on_device_change.lock() = callback;
    }

    pub fn set_microphone_volume(&self, volume: u32) -> RtcResult<()> {
        self.microphone_volume.store(check_volume(volume)?, Ordering::Release);
        Ok(())
    }

    pub fn microphone_volume(&self) -> u32 {
        self.microphone_volume.load(Ordering::Acquire)
    }

    pub fn set_speaker_volume(&self, volume: u32) -> RtcResult<()> {
        self.speaker_volume.store(check_volume(volume)?, Ordering::Release);
        Ok(())
    }

    pub fn speaker_volume(&self) -> u32 {
        self.speaker_volume.load(Ordering::Acquire)
    }

    /// Applies a hotplug event and notifies the registered callback on an
    /// engine thread.
    pub fn update_devices(
        &self,
        playout: Vec<AudioDeviceInfo>,
        recording: Vec<AudioDeviceInfo>,
    ) {
        self.playout.write().replace(playout);
        self.recording.write().replace(recording);

        let callback = self.on_device_change.lock().clone();
        if let Some(callback) = callback {
            self.runtime.post("device_change", move || callback());
        }
    }
}
