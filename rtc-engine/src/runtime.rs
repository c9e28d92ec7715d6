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

use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::{RtcError, RtcErrorType, RtcResult};

const SLOW_CALLBACK: Duration = Duration::from_secs(2);

struct Job {
    name: &'static str,
    f: Box<dyn FnOnce() + Send>,
}

struct Inner {
    runtime: tokio::runtime::Runtime,
    jobs: mpsc::UnboundedSender<Job>,
}

/// Engine owned threads. Posted callbacks run one at a time, in posting order.
pub struct EngineRuntime {
    inner: Mutex<Option<Inner>>,
}

impl EngineRuntime {
    pub fn new() -> RtcResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name_fn(|| {
                static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
                format!("rtc-signaling-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
            })
            .enable_time()
            .build()
            .map_err(|err| {
                RtcError::new(
                    RtcErrorType::Internal,
                    format!("failed to start engine threads: {err}"),
                )
            })?;

        let (jobs, rx) = mpsc::unbounded_channel();
        runtime.spawn(dispatch(rx));
        Ok(Self { inner: Mutex::new(Some(Inner { runtime, jobs })) })
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Queues `f` for an engine thread. Returns false if the runtime was
    /// already shut down, in which case `f` is dropped without running.
    pub fn post<F>(&self, name: &'static str, f: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let guard = self.inner.lock();
        let posted = guard
            .as_ref()
            .map(|inner| inner.jobs.send(Job { name, f: Box::new(f) }).is_ok())
            .unwrap_or(false);
        if !posted {
            log::warn!("engine threads are stopped, dropping {}", name);
        }
        posted
    }

    /// Stops the engine threads without waiting for in-flight callbacks.
    pub fn shutdown(&self) {
        if let Some(inner) = self.inner.lock().take() {
            drop(inner.jobs);
            inner.runtime.shutdown_background();
        }
    }
}

impl Drop for EngineRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn dispatch(mut jobs: mpsc::UnboundedReceiver<Job>) {
    while let Some(Job { name, f }) = jobs.recv().await {
        let mut task = tokio::task::spawn_blocking(f);
        let result = tokio::select! {
            result = &mut task => result,
            _ = tokio::time::sleep(SLOW_CALLBACK) => {
                log::error!("{} took too much time, is the callback blocking?", name);
                (&mut task).await
            }
        };
        if let Err(err) = result {
            log::error!("{} failed: {}", name, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn post_runs_off_the_calling_thread() {
        let runtime = EngineRuntime::new().unwrap();
        let caller = std::thread::current().id();
        let (tx, rx) = mpsc::channel();

        assert!(runtime.post("test", move || {
            tx.send(std::thread::current().id()).unwrap();
        }));

        let callee = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_ne!(caller, callee);
    }

    #[test]
    fn posts_run_in_order() {
        let runtime = EngineRuntime::new().unwrap();
        let (tx, rx) = mpsc::channel();
        for i in 0..16 {
            let tx = tx.clone();
            runtime.post("test", move || tx.send(i).unwrap());
        }

        let received: Vec<i32> =
            (0..16).map(|_| rx.recv_timeout(Duration::from_secs(5)).unwrap()).collect();
        assert_eq!(received, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn post_after_shutdown_is_dropped() {
        let runtime = EngineRuntime::new().unwrap();
        runtime.shutdown();
        assert!(!runtime.is_running());
        assert!(!runtime.post("test", || panic!("must not run")));
    }
}
