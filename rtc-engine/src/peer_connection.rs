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

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::{
    media_constraints::MediaConstraints, media_stream::MediaStream,
    peer_connection_factory::RtcConfiguration, RefCounted, RtcError, RtcErrorType, RtcResult,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PeerConnectionState {
    New,
    Closed,
}

#[derive(Debug)]
pub struct PeerConnection {
    configuration: RtcConfiguration,
    constraints: Option<RefCounted<MediaConstraints>>,
    closed: AtomicBool,
    local_streams: Mutex<Vec<RefCounted<MediaStream>>>,
}

impl PeerConnection {
    pub(crate) fn new(
        configuration: RtcConfiguration,
        constraints: Option<RefCounted<MediaConstraints>>,
    ) -> Self {
        Self {
            configuration,
            constraints,
            closed: AtomicBool::new(false),
            local_streams: Default::default(),
        }
    }

    pub fn configuration(&self) -> RtcConfiguration {
        self.configuration.clone()
    }

    pub fn constraints(&self) -> Option<RefCounted<MediaConstraints>> {
        self.constraints.clone()
    }

    pub fn connection_state(&self) -> PeerConnectionState {
        if self.is_closed() {
            PeerConnectionState::Closed
        } else {
            PeerConnectionState::New
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Closing is final, the local streams are released.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            log::debug!("closing peer connection");
            self.local_streams.lock().clear();
        }
    }

    fn check_open(&self) -> RtcResult<()> {
        if self.is_closed() {
            return Err(RtcError::new(RtcErrorType::Closed, "peer connection is closed"));
        }
        Ok(())
    }

    pub fn add_stream(&self, stream: RefCounted<MediaStream>) -> RtcResult<()> {
        self.check_open()?;
        let mut streams = self.local_streams.lock();
        if streams.iter().any(|s| s.id() == stream.id()) {
            return Err(RtcError::new(
                RtcErrorType::InvalidState,
                format!("stream {} was already added", stream.id()),
            ));
        }
        streams.push(stream);
        Ok(())
    }

    pub fn remove_stream(&self, stream: &RefCounted<MediaStream>) -> RtcResult<()> {
        self.check_open()?;
        let mut streams = self.local_streams.lock();
        let Some(position) = streams.iter().position(|s| RefCounted::ptr_eq(s, stream)) else {
            return Err(RtcError::new(
                RtcErrorType::NotFound,
                format!("stream {} is not attached", stream.id()),
            ));
        };
        streams.remove(position);
        Ok(())
    }

    pub fn local_streams(&self) -> Vec<RefCounted<MediaStream>> {
        self.local_streams.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(id: &str) -> RefCounted<MediaStream> {
        RefCounted::new(MediaStream::new(id))
    }

    #[test]
    fn streams_attach_until_closed() {
        let pc = PeerConnection::new(RtcConfiguration::default(), None);
        let s = stream("s0");

        pc.add_stream(s.clone()).unwrap();
        assert_eq!(
            pc.add_stream(stream("s0")).unwrap_err().error_type,
            RtcErrorType::InvalidState
        );
        assert_eq!(pc.local_streams().len(), 1);
        assert_eq!(RefCounted::ref_count(&s), 2);

        pc.close();
        assert!(pc.is_closed());
        assert_eq!(pc.connection_state(), PeerConnectionState::Closed);
        assert_eq!(RefCounted::ref_count(&s), 1);
        assert_eq!(pc.add_stream(s.clone()).unwrap_err().error_type, RtcErrorType::Closed);
        assert_eq!(pc.remove_stream(&s).unwrap_err().error_type, RtcErrorType::Closed);
    }

    #[test]
    fn remove_unknown_stream() {
        let pc = PeerConnection::new(RtcConfiguration::default(), None);
        let err = pc.remove_stream(&stream("nope")).unwrap_err();
        assert_eq!(err.error_type, RtcErrorType::NotFound);
    }
}
