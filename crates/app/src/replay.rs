//! Drive one selection session from a script against a frozen desktop

use crate::config::AppConfig;
use crate::script::{Script, Step};
use crate::state::{SavedCapture, StateMachine};
use crate::worker::{CaptureReply, CaptureWorker};
use anyhow::{Context, Result};
use capture::{DisplayProvider, FrozenDesktop, Rect};
use crossbeam_channel::{unbounded, Receiver};
use export::PngExporter;
use overlay::{
    ChannelListener, CompletedSelection, OverlayError, SelectionEngine, SelectionEvent,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Saved,
    Cancelled,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RectSummary {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl From<Rect> for RectSummary {
    fn from(r: Rect) -> Self {
        Self { x: r.x, y: r.y, width: r.width, height: r.height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarSummary {
    pub x: i32,
    pub y: i32,
    pub flip_left: bool,
    pub flip_top: bool,
}

/// What happened during a replayed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub outcome: Outcome,
    pub too_small: u32,
    pub rect: Option<RectSummary>,
    pub local: Option<RectSummary>,
    pub toolbar: Option<ToolbarSummary>,
    pub path: Option<PathBuf>,
    pub error: Option<String>,
}

impl Summary {
    fn new() -> Self {
        Self {
            outcome: Outcome::Cancelled,
            too_small: 0,
            rect: None,
            local: None,
            toolbar: None,
            path: None,
            error: None,
        }
    }

    fn record_selection(&mut self, selection: &CompletedSelection) {
        self.rect = Some(selection.rect.into());
        self.local = Some(selection.local.into());
        self.toolbar = Some(ToolbarSummary {
            x: selection.toolbar.x,
            y: selection.toolbar.y,
            flip_left: selection.toolbar.flip_left,
            flip_top: selection.toolbar.flip_top,
        });
    }
}

pub fn run(
    desktop: FrozenDesktop,
    script: &Script,
    config: &AppConfig,
    out: Option<PathBuf>,
) -> Result<Summary> {
    let output = out.unwrap_or_else(|| config.output_dir.join(PngExporter::default_file_name()));
    let bounds = desktop.virtual_screen().context("querying virtual screen")?;

    let mut app = StateMachine::new();
    app.start_selecting();
    tracing::info!(state = app.state().display_text(), ?bounds, "overlay up");

    let (tx, rx) = unbounded();
    let mut engine = SelectionEngine::new(config.policy, ChannelListener::new(tx));
    let session = engine.start_session(bounds).context("starting selection session")?;
    tracing::debug!(session = session.id(), "replaying {} steps", script.steps.len());

    let worker = CaptureWorker::spawn(Box::new(desktop));
    let mut summary = Summary::new();

    for step in &script.steps {
        let applied = match *step {
            Step::Down(pos) => engine.on_pointer_down(pos.into()),
            Step::Move { x, y, locked } => engine.on_pointer_move(capture::Point::new(x, y), locked),
            Step::Up => engine.on_pointer_up(),
            Step::Escape => engine.on_escape(),
            Step::Cancel => {
                engine.cancel();
                Ok(())
            }
        };

        match applied {
            Ok(()) => {}
            Err(OverlayError::NoActiveSession) => {
                tracing::warn!(?step, "input after session ended ignored");
            }
            Err(e) => return Err(e.into()),
        }

        drain(&rx, &mut app, &worker, &output, &mut summary);
    }

    // Input ran out before the user committed or cancelled
    engine.cancel();
    drain(&rx, &mut app, &worker, &output, &mut summary);

    if let Some(saved) = app.last_capture() {
        tracing::info!(
            path = %saved.path.display(),
            width = saved.width,
            height = saved.height,
            state = app.state().display_text(),
            "capture done"
        );
    }

    Ok(summary)
}

fn drain(
    rx: &Receiver<SelectionEvent>,
    app: &mut StateMachine,
    worker: &CaptureWorker,
    output: &Path,
    summary: &mut Summary,
) {
    for event in rx.try_iter() {
        match event {
            SelectionEvent::Changed { rect, .. } => {
                tracing::trace!(?rect, "selection changed");
            }
            SelectionEvent::TooSmall => {
                summary.too_small += 1;
                tracing::info!("selection too small, drag a larger region");
            }
            SelectionEvent::Cleared => {
                tracing::debug!("selection cleared");
            }
            SelectionEvent::Completed(selection) => {
                summary.record_selection(&selection);
                app.start_capturing();
                tracing::info!(state = app.state().display_text(), rect = ?selection.rect);

                match worker.capture(selection.local, output.to_path_buf()) {
                    CaptureReply::Saved { path, width, height } => {
                        summary.outcome = Outcome::Saved;
                        summary.path = Some(path.clone());
                        app.finish_capturing(SavedCapture { path, width, height });
                    }
                    CaptureReply::Error(e) => {
                        summary.outcome = Outcome::Failed;
                        summary.error = Some(e);
                        app.fail_capturing();
                    }
                }
            }
            SelectionEvent::Cancelled => {
                summary.outcome = Outcome::Cancelled;
                app.cancel_selecting();
                tracing::info!("selection cancelled");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capture::{FrameData, Point};

    fn desktop(origin: Point, width: u32, height: u32) -> FrozenDesktop {
        let frame = FrameData::new(vec![200; (width * height * 4) as usize], width, height).unwrap();
        FrozenDesktop::new(frame, origin)
    }

    #[test]
    fn retry_then_save() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("shot.png");
        let script = Script::parse(
            r#"{ "steps": [
                { "down": { "x": 50, "y": 50 } },
                { "move": { "x": 55, "y": 53 } },
                "up",
                { "down": { "x": 50, "y": 50 } },
                { "move": { "x": 250, "y": 200 } },
                "up",
                { "move": { "x": 10, "y": 10 } }
            ] }"#,
        )
        .unwrap();

        let summary = run(
            desktop(Point::new(0, 0), 400, 300),
            &script,
            &AppConfig::default(),
            Some(out.clone()),
        )
        .unwrap();

        assert_eq!(summary.outcome, Outcome::Saved);
        assert_eq!(summary.too_small, 1);
        assert_eq!(summary.rect, Some(RectSummary { x: 50, y: 50, width: 200, height: 150 }));
        assert_eq!(summary.path, Some(out.clone()));
        let img = image::open(&out).unwrap();
        assert_eq!((img.width(), img.height()), (200, 150));
    }

    #[test]
    fn negative_origin_is_localised_for_capture() {
        let dir = tempfile::tempdir().unwrap();
        let script = Script::parse(
            r#"{ "steps": [
                { "down": { "x": -90, "y": 10 } },
                { "move": { "x": -60, "y": 40 } },
                "up"
            ] }"#,
        )
        .unwrap();

        let summary = run(
            desktop(Point::new(-100, 0), 200, 100),
            &script,
            &AppConfig::default(),
            Some(dir.path().join("left.png")),
        )
        .unwrap();

        assert_eq!(summary.outcome, Outcome::Saved);
        assert_eq!(summary.local, Some(RectSummary { x: 10, y: 10, width: 30, height: 30 }));
    }

    #[test]
    fn script_ending_mid_drag_cancels() {
        let script = Script::parse(
            r#"{ "steps": [ { "down": { "x": 5, "y": 5 } }, { "move": { "x": 80, "y": 80 } } ] }"#,
        )
        .unwrap();

        let summary = run(desktop(Point::new(0, 0), 100, 100), &script, &AppConfig::default(), None)
            .unwrap();

        assert_eq!(summary.outcome, Outcome::Cancelled);
        assert_eq!(summary.path, None);
    }
}
