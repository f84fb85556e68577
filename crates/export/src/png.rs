//! PNG export

use crate::{ExportError, ExportResult};
use capture::FrameData;
use std::fs;
use std::path::{Path, PathBuf};

/// PNG exporter
pub struct PngExporter;

impl PngExporter {
    /// Write a frame as PNG, creating parent directories as needed
    pub fn save(frame: &FrameData, path: &Path) -> ExportResult<PathBuf> {
        if frame.width == 0 || frame.height == 0 {
            return Err(ExportError::EmptyFrame {
                width: frame.width,
                height: frame.height,
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        frame
            .to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)?;

        tracing::info!(path = %path.display(), width = frame.width, height = frame.height, "saved capture");
        Ok(path.to_path_buf())
    }

    /// Unique file name for a new capture
    pub fn default_file_name() -> String {
        format!("snip-{}.png", uuid::Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.png");
        // one blue pixel, one red pixel (BGRA)
        let frame = FrameData::new(vec![255, 0, 0, 255, 0, 0, 255, 255], 2, 1).unwrap();

        let written = PngExporter::save(&frame, &path).unwrap();
        assert_eq!(written, path);

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn empty_frame_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let frame = FrameData::new(Vec::new(), 0, 0).unwrap();
        let err = PngExporter::save(&frame, &dir.path().join("x.png")).unwrap_err();
        assert!(matches!(err, ExportError::EmptyFrame { .. }));
    }

    #[test]
    fn default_names_are_unique_pngs() {
        let a = PngExporter::default_file_name();
        let b = PngExporter::default_file_name();
        assert!(a.starts_with("snip-") && a.ends_with(".png"));
        assert_ne!(a, b);
    }
}
