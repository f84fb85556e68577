//! Capture worker thread
//!
//! Crops committed selections out of the capture provider and writes PNGs on
//! a dedicated thread. `CaptureWorker::capture` hands one request over and
//! waits for its reply, so the caller is blocked until the file is written.

use capture::{CaptureProvider, Rect};
use crossbeam_channel::{bounded, Receiver, Sender};
use export::PngExporter;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// Capture worker commands
pub enum CaptureCommand {
    Capture { local: Rect, output: PathBuf },
    Shutdown,
}

/// Capture worker result
#[derive(Debug)]
pub enum CaptureReply {
    Saved { path: PathBuf, width: u32, height: u32 },
    Error(String),
}

pub struct CaptureWorker {
    cmd_tx: Sender<CaptureCommand>,
    reply_rx: Receiver<CaptureReply>,
    handle: Option<JoinHandle<()>>,
}

impl CaptureWorker {
    pub fn spawn(provider: Box<dyn CaptureProvider + Send>) -> Self {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (reply_tx, reply_rx) = bounded(4);

        let handle = thread::spawn(move || {
            capture_worker(provider, cmd_rx, reply_tx);
        });

        Self {
            cmd_tx,
            reply_rx,
            handle: Some(handle),
        }
    }

    /// Capture `local` and wait for the worker's answer
    pub fn capture(&self, local: Rect, output: PathBuf) -> CaptureReply {
        if self.cmd_tx.send(CaptureCommand::Capture { local, output }).is_err() {
            return CaptureReply::Error("capture worker stopped".into());
        }
        self.reply_rx
            .recv()
            .unwrap_or_else(|_| CaptureReply::Error("capture worker stopped".into()))
    }
}

impl Drop for CaptureWorker {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(CaptureCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn capture_worker(
    provider: Box<dyn CaptureProvider + Send>,
    cmd_rx: Receiver<CaptureCommand>,
    reply_tx: Sender<CaptureReply>,
) {
    for cmd in cmd_rx.iter() {
        match cmd {
            CaptureCommand::Capture { local, output } => {
                let reply = match provider.capture(local) {
                    Ok(frame) => match PngExporter::save(&frame, &output) {
                        Ok(path) => CaptureReply::Saved {
                            path,
                            width: frame.width,
                            height: frame.height,
                        },
                        Err(e) => CaptureReply::Error(e.to_string()),
                    },
                    Err(e) => CaptureReply::Error(e.to_string()),
                };

                if let CaptureReply::Error(ref msg) = reply {
                    tracing::error!(?local, error = %msg, "capture failed");
                }
                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
            CaptureCommand::Shutdown => break,
        }
    }

    tracing::debug!("capture worker exiting");
}
