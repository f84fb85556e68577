//! BGRA frame buffers

use crate::{CaptureError, CaptureResult, Rect};
use image::{ImageBuffer, RgbaImage};

/// Captured pixels, 32-bit BGRA, top-down rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl FrameData {
    /// Wrap a raw BGRA buffer, checking its length
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> CaptureResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CaptureError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, width, height })
    }

    /// Convert an RGBA image into a BGRA frame
    pub fn from_rgba_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        for chunk in data.chunks_exact_mut(4) {
            chunk.swap(0, 2);
        }
        Self { data, width, height }
    }

    /// Convert BGRA data to RGBA image
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut rgba_data = self.data.clone();

        for chunk in rgba_data.chunks_exact_mut(4) {
            chunk.swap(0, 2);
        }

        // Length is checked on construction
        ImageBuffer::from_raw(self.width, self.height, rgba_data)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Bounds of the frame in its own coordinate space
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Crop frame to a rectangle in frame-local coordinates.
    ///
    /// Parts of `rect` outside the frame are dropped; an empty result is an
    /// error.
    pub fn crop(&self, rect: &Rect) -> CaptureResult<FrameData> {
        let src_x = rect.x.max(0) as u32;
        let src_y = rect.y.max(0) as u32;
        let right = (rect.right().max(0) as u32).min(self.width);
        let bottom = (rect.bottom().max(0) as u32).min(self.height);
        let crop_width = right.saturating_sub(src_x);
        let crop_height = bottom.saturating_sub(src_y);

        if crop_width == 0 || crop_height == 0 {
            return Err(CaptureError::InvalidTarget(*rect));
        }

        let mut cropped_data = Vec::with_capacity((crop_width * crop_height * 4) as usize);

        for y in 0..crop_height {
            let src_offset = ((src_y + y) * self.width + src_x) as usize * 4;
            let row_data = &self.data[src_offset..src_offset + (crop_width as usize * 4)];
            cropped_data.extend_from_slice(row_data);
        }

        Ok(FrameData {
            data: cropped_data,
            width: crop_width,
            height: crop_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x3 frame whose blue channel encodes the pixel index
    fn indexed_frame() -> FrameData {
        let mut data = Vec::new();
        for i in 0..12u8 {
            data.extend_from_slice(&[i, 0, 0, 255]);
        }
        FrameData::new(data, 4, 3).unwrap()
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let err = FrameData::new(vec![0; 7], 1, 2).unwrap_err();
        assert!(matches!(err, CaptureError::BufferSize { expected: 8, actual: 7 }));
    }

    #[test]
    fn crop_copies_rows() {
        let frame = indexed_frame();
        let cropped = frame.crop(&Rect::new(1, 1, 2, 2)).unwrap();
        assert_eq!((cropped.width, cropped.height), (2, 2));
        let blues: Vec<u8> = cropped.data.chunks_exact(4).map(|p| p[0]).collect();
        assert_eq!(blues, vec![5, 6, 9, 10]);
    }

    #[test]
    fn crop_drops_out_of_frame_parts() {
        let frame = indexed_frame();
        let cropped = frame.crop(&Rect::new(-2, 2, 10, 10)).unwrap();
        assert_eq!((cropped.width, cropped.height), (4, 1));
    }

    #[test]
    fn empty_crop_is_an_error() {
        let frame = indexed_frame();
        assert!(frame.crop(&Rect::new(10, 0, 5, 5)).is_err());
        assert!(frame.crop(&Rect::new(0, 0, 0, 3)).is_err());
    }

    #[test]
    fn rgba_round_trip_swaps_channels() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
        let frame = FrameData::from_rgba_image(img);
        assert_eq!(frame.data, vec![30, 20, 10, 255]);
        assert_eq!(frame.to_rgba_image().get_pixel(0, 0).0, [10, 20, 30, 255]);
    }
}
