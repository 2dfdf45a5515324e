use crate::{DetectResult, Detection};

use std::path::Path;

use image::RgbImage;

/// A loaded object-detection model.
///
/// Implemented by the inference runtime; everything after `infer` is
/// handled by [`crate::DetectionPipeline`].
pub trait Detector: Send {
    /// Run the network on one RGB frame.
    fn infer(&mut self, image: &RgbImage) -> DetectResult<Vec<Detection>>;

    /// Class name the model was trained with, if it carries one.
    fn class_name(&self, class_id: u32) -> Option<&str>;
}

/// Loads a detector from a weights file.
pub type DetectorLoader = dyn Fn(&Path) -> DetectResult<Box<dyn Detector>>;
