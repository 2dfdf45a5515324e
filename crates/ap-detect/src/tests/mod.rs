
use crate::{BoundingBox, DetectError, DetectResult, Detection, Detector, LabeledDetection};

use std::collections::HashMap;

use image::RgbImage;

/// Detector that returns the same detections for every frame
pub(crate) struct FakeDetector {
    detections: Vec<Detection>,
    names: HashMap<u32, String>,
    fail: bool,
}

impl FakeDetector {
    pub(crate) fn new(detections: Vec<Detection>) -> Self {
        Self {
            detections,
            names: HashMap::new(),
            fail: false,
        }
    }

    pub(crate) fn with_name(mut self, class_id: u32, name: &str) -> Self {
        self.names.insert(class_id, name.to_string());
        self
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }
}

impl Detector for FakeDetector {
    fn infer(&mut self, _image: &RgbImage) -> DetectResult<Vec<Detection>> {
        if self.fail {
            return Err(DetectError::inference("fake failure"));
        }
        Ok(self.detections.clone())
    }

    fn class_name(&self, class_id: u32) -> Option<&str> {
        self.names.get(&class_id).map(String::as_str)
    }
}

pub(crate) fn detection(class_id: Option<u32>, confidence: f32) -> Detection {
    Detection {
        bbox: BoundingBox::new(10, 10, 50, 50),
        class_id,
        confidence,
    }
}

pub(crate) fn labeled(label: &str, confidence: f32) -> LabeledDetection {
    LabeledDetection {
        bbox: BoundingBox::new(10, 10, 50, 50),
        label: label.to_string(),
        confidence,
    }
}
