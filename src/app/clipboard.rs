//! Clipboard writes for the generated prompt.
//!
//! One worker thread, started with the helper, owns the clipboard for the
//! whole session. Copy requests go to it over a channel and results come
//! back over a second channel that the UI polls once per frame, the same way
//! other background work reports to the egui loop.
//!
//! The worker keeps its `arboard::Clipboard` alive until the helper is
//! dropped: on X11 and Wayland the copied text is served by the process that
//! set it, and only for as long as a clipboard handle exists. A single owner
//! thread also keeps every clipboard call on one thread, which Windows needs.
//!
//! When no system clipboard can be opened at startup, the text goes through
//! egui's own copy command instead, which has no failure channel.

use eframe::egui;
use std::sync::mpsc::{channel, sync_channel, Receiver, Sender, TryRecvError};
use std::thread;

use crate::{log_error, log_warn, trace_debug};

/// Anything that can put text on the system clipboard. Owned and called
/// only by the clipboard worker.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// `arboard`-backed system clipboard.
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn open() -> anyhow::Result<Self> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| anyhow::anyhow!("failed to open clipboard: {}", e))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.clipboard
            .set_text(text.to_owned())
            .map_err(|e| anyhow::anyhow!("failed to write clipboard: {}", e))
    }
}

/// Which control asked for the copy. Decides what a failure looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySource {
    CopyButton,
    OpenTool,
}

/// Immediate result of [`ClipboardHelper::copy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Queued for the worker; the result arrives through [`ClipboardHelper::poll`].
    Pending,
    /// Copied through egui's copy command; counts as success.
    Fallback,
}

#[derive(Debug)]
pub struct CopyCompletion {
    pub source: CopySource,
    pub result: anyhow::Result<()>,
}

struct CopyRequest {
    text: String,
    source: CopySource,
    repaint: egui::Context,
}

struct ClipboardWorker {
    requests: Sender<CopyRequest>,
    completions: Receiver<CopyCompletion>,
}

impl ClipboardWorker {
    /// Start the worker and wait until it has opened its writer.
    ///
    /// `open` runs on the worker thread, so the writer never crosses threads.
    /// Returns `None` when the writer cannot be opened.
    fn start<F>(open: F) -> Option<Self>
    where
        F: FnOnce() -> anyhow::Result<Box<dyn ClipboardWriter>> + Send + 'static,
    {
        let (request_tx, request_rx) = channel::<CopyRequest>();
        let (completion_tx, completion_rx) = channel();
        let (ready_tx, ready_rx) = sync_channel(1);

        let spawned = thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || {
                let mut writer = match open() {
                    Ok(writer) => {
                        let _ = ready_tx.send(true);
                        writer
                    }
                    Err(e) => {
                        log_warn!("System clipboard unavailable, using fallback copy: {:#}", e);
                        let _ = ready_tx.send(false);
                        return;
                    }
                };

                // Runs until the helper drops its sender
                for request in request_rx {
                    let result = writer.write_text(&request.text);
                    if completion_tx
                        .send(CopyCompletion {
                            source: request.source,
                            result,
                        })
                        .is_err()
                    {
                        break;
                    }
                    request.repaint.request_repaint();
                }
                trace_debug!("Clipboard worker stopped");
            });

        if let Err(e) = spawned {
            log_error!("Failed to start clipboard worker: {}", e);
            return None;
        }

        match ready_rx.recv() {
            Ok(true) => Some(Self {
                requests: request_tx,
                completions: completion_rx,
            }),
            _ => None,
        }
    }
}

pub struct ClipboardHelper {
    worker: Option<ClipboardWorker>,
    in_flight: usize,
}

impl Default for ClipboardHelper {
    fn default() -> Self {
        Self::spawn(|| Ok(Box::new(SystemClipboard::open()?) as Box<dyn ClipboardWriter>))
    }
}

impl ClipboardHelper {
    /// Start a worker around the writer built by `open`. Falls back to
    /// egui's copy command when `open` fails.
    pub fn spawn<F>(open: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<Box<dyn ClipboardWriter>> + Send + 'static,
    {
        Self {
            worker: ClipboardWorker::start(open),
            in_flight: 0,
        }
    }

    /// Use `writer` as the clipboard, or the egui fallback for `None`.
    pub fn with_writer(writer: Option<Box<dyn ClipboardWriter + Send>>) -> Self {
        match writer {
            Some(writer) => Self::spawn(move || Ok(writer as Box<dyn ClipboardWriter>)),
            None => Self {
                worker: None,
                in_flight: 0,
            },
        }
    }

    pub fn has_system_clipboard(&self) -> bool {
        self.worker.is_some()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn copy(&mut self, ctx: &egui::Context, text: &str, source: CopySource) -> CopyOutcome {
        if let Some(worker) = &self.worker {
            let request = CopyRequest {
                text: text.to_owned(),
                source,
                repaint: ctx.clone(),
            };
            let queued = worker.requests.send(request).is_ok();
            if queued {
                self.in_flight += 1;
                return CopyOutcome::Pending;
            }
            log_warn!("Clipboard worker is gone; switching to fallback copy");
            self.worker = None;
            self.in_flight = 0;
        }

        trace_debug!("Copying {} chars via egui copy command ({:?})", text.len(), source);
        ctx.copy_text(text.to_owned());
        CopyOutcome::Fallback
    }

    /// Collect every copy that finished since the last call, oldest first.
    pub fn poll(&mut self) -> Vec<CopyCompletion> {
        let mut completed = Vec::new();
        let Some(worker) = &self.worker else {
            return completed;
        };

        let disconnected = loop {
            match worker.completions.try_recv() {
                Ok(completion) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    completed.push(completion);
                }
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => break true,
            }
        };
        if disconnected {
            log_warn!("Clipboard worker disconnected unexpectedly");
            self.worker = None;
            self.in_flight = 0;
        }
        completed
    }
}
