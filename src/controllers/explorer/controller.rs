use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::data::render_request::RenderRequest;
use crate::controllers::explorer::errors::render::RenderError;
use crate::controllers::explorer::events::render::RenderEvent;
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::core::actions::render_pass::{RenderPassError, render_pass_cancelable};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Shared between the submitting side and the worker thread. The mailbox
/// holds only the newest request; submitting again before the worker picks
/// the old one up simply replaces it.
struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn ExplorerPresenterPort>,
}

/// Renders requests on a dedicated worker thread, newest-wins.
///
/// Every request is stamped with a generation. The worker cancels a pass as
/// soon as a newer generation appears, and completed results are only
/// presented while still current, so the presenter never sees a stale frame
/// overwrite a newer one. Each pass builds its own frame buffer, which keeps
/// concurrent passes from ever sharing one.
pub struct ExplorerController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl ExplorerController {
    pub fn new(presenter_port: Arc<dyn ExplorerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request` and returns its generation stamp.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut mailbox = self.shared.latest_request.lock().unwrap();
            *mailbox = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    /// Generation of the most recent pass that ran to completion (frame or
    /// error). A session is idle when this has caught up with the latest
    /// submitted generation.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut mailbox = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = mailbox.take() {
                        break job;
                    }

                    mailbox = shared.wake.wait(mailbox).unwrap();
                }
            };

            let cancel = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = render_pass_cancelable(
                request.variant,
                request.viewport,
                request.display_size,
                &cancel,
            );
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            match result {
                Ok(frame_buffer) => {
                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        frame_buffer,
                        render_duration,
                    }));
                }
                Err(RenderPassError::Cancelled(_)) => {
                    continue;
                }
                Err(RenderPassError::FrameBuffer(error)) => {
                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message: error.to_string(),
                        }));
                }
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for ExplorerController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
