//! Post-processing around pretrained object detectors.
//!
//! Inference itself is supplied by an external runtime through the
//! [`Detector`] trait. This crate thresholds raw detections, resolves and
//! translates labels, draws annotations, summarizes results, and drives a
//! cancellable frame loop for live sources.

mod annotator;
mod cancel_token;
mod detection;
mod detector;
mod error;
mod labels;
mod model_kind;
mod pipeline;
mod registry;
mod stream;
mod summary;

#[cfg(test)]
mod tests;

pub use annotator::Annotator;
pub use cancel_token::CancelToken;
pub use detection::{BoundingBox, Detection, LabeledDetection};
pub use detector::{Detector, DetectorLoader};
pub use error::{DetectError, DetectResult};
pub use labels::{fallback_label, translate_traffic_sign};
pub use model_kind::ModelKind;
pub use pipeline::DetectionPipeline;
pub use registry::ModelRegistry;
pub use stream::{FrameSource, StreamStats, run_stream};
pub use summary::{combined_summary, summarize};

const BOX_THICKNESS: u32 = 3;
const LABEL_OFFSET_Y: i32 = 10;
const LABEL_FONT_SIZE: f32 = 16.0;
const SUMMARY_MAX_LINES: usize = 10;
