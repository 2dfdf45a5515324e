use crate::{
    BOX_THICKNESS, DetectError, DetectResult, LABEL_FONT_SIZE, LABEL_OFFSET_Y, LabeledDetection,
};

use std::panic::Location;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use error_location::ErrorLocation;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

/// Draws detection boxes and captions onto frames.
///
/// Captions need a font; without one only the boxes are drawn.
pub struct Annotator {
    thickness: u32,
    font: Option<FontVec>,
    font_size: f32,
}

impl Default for Annotator {
    fn default() -> Self {
        Self {
            thickness: BOX_THICKNESS,
            font: None,
            font_size: LABEL_FONT_SIZE,
        }
    }
}

impl Annotator {
    pub fn with_font(mut self, font: FontVec) -> Self {
        self.font = Some(font);
        self
    }

    /// Load a TTF/OTF file for captions.
    #[track_caller]
    pub fn with_font_file(self, path: &Path) -> DetectResult<Self> {
        let data = std::fs::read(path).map_err(|e| DetectError::FontRead {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let font = FontVec::try_from_vec(data).map_err(|_| DetectError::InvalidFont {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(self.with_font(font))
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness.max(1);
        self
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Draw every detection in `color`.
    pub fn annotate(&self, image: &mut RgbImage, detections: &[LabeledDetection], color: [u8; 3]) {
        for detection in detections {
            self.draw_one(image, detection, Rgb(color));
        }
    }

    fn draw_one(&self, image: &mut RgbImage, detection: &LabeledDetection, color: Rgb<u8>) {
        let Some(bbox) = detection.bbox.clamped(image.width(), image.height()) else {
            return;
        };

        // Nested rectangles grow the border inward
        for inset in 0..self.thickness as i32 {
            let width = bbox.width() - 2 * inset;
            let height = bbox.height() - 2 * inset;
            if width <= 0 || height <= 0 {
                break;
            }

            let rect = Rect::at(bbox.x1 + inset, bbox.y1 + inset)
                .of_size(width as u32 + 1, height as u32 + 1);
            draw_hollow_rect_mut(image, rect, color);
        }

        if let Some(font) = &self.font {
            let y = (bbox.y1 - LABEL_OFFSET_Y - self.font_size as i32).max(0);
            draw_text_mut(
                image,
                color,
                bbox.x1,
                y,
                PxScale::from(self.font_size),
                font,
                &detection.caption(),
            );
        }
    }
}
