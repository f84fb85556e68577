//! Display and capture providers

use crate::{CaptureError, CaptureResult, FrameData, Point, Rect};
use image::RgbaImage;

/// Reports the virtual screen: the union of all monitors.
pub trait DisplayProvider {
    fn virtual_screen(&self) -> CaptureResult<Rect>;
}

/// Produces pixels for a rectangle relative to the virtual screen origin.
pub trait CaptureProvider {
    fn capture(&self, local: Rect) -> CaptureResult<FrameData>;
}

/// Virtual desktop frozen at the moment selection started
#[derive(Debug, Clone)]
pub struct FrozenDesktop {
    frame: FrameData,
    origin: Point,
}

impl FrozenDesktop {
    pub fn new(frame: FrameData, origin: Point) -> Self {
        Self { frame, origin }
    }

    pub fn from_rgba_image(img: RgbaImage, origin: Point) -> Self {
        Self::new(FrameData::from_rgba_image(img), origin)
    }

    pub fn frame(&self) -> &FrameData {
        &self.frame
    }

    /// Convert screen coordinates to snapshot coordinates
    pub fn screen_to_local(&self, x: i32, y: i32) -> (i32, i32) {
        (x - self.origin.x, y - self.origin.y)
    }

    /// Convert snapshot coordinates to screen coordinates
    pub fn local_to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        (x + self.origin.x, y + self.origin.y)
    }
}

impl DisplayProvider for FrozenDesktop {
    fn virtual_screen(&self) -> CaptureResult<Rect> {
        Ok(Rect::new(
            self.origin.x,
            self.origin.y,
            self.frame.width,
            self.frame.height,
        ))
    }
}

impl CaptureProvider for FrozenDesktop {
    fn capture(&self, local: Rect) -> CaptureResult<FrameData> {
        if !self.frame.bounds().contains_rect(&local) {
            return Err(CaptureError::InvalidTarget(local));
        }
        tracing::debug!(?local, "cropping frozen desktop");
        self.frame.crop(&local)
    }
}
