use crate::{DetectResult, Detector, LabeledDetection, ModelKind, fallback_label};

use image::RgbImage;
use log::debug;

/// One model plus the post-processing every demo applies to it.
pub struct DetectionPipeline {
    kind: ModelKind,
    detector: Box<dyn Detector>,
}

impl DetectionPipeline {
    pub fn new(kind: ModelKind, detector: Box<dyn Detector>) -> Self {
        Self { kind, detector }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Infer, drop detections below `threshold` or without a class, and label the rest.
    pub fn run(&mut self, image: &RgbImage, threshold: f32) -> DetectResult<Vec<LabeledDetection>> {
        let raw = self.detector.infer(image)?;
        let total = raw.len();

        let labeled: Vec<LabeledDetection> = raw
            .into_iter()
            .filter(|d| d.confidence >= threshold)
            .filter_map(|d| {
                let class_id = d.class_id?;
                let label = match self.detector.class_name(class_id) {
                    Some(name) => self.kind.display_label(name),
                    None => fallback_label(class_id),
                };

                Some(LabeledDetection {
                    bbox: d.bbox,
                    label,
                    confidence: d.confidence,
                })
            })
            .collect();

        debug!(
            "{}: kept {}/{} detections at threshold {:.2}",
            self.kind,
            labeled.len(),
            total,
            threshold
        );

        Ok(labeled)
    }
}
