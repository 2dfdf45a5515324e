use crate::{Annotator, CancelToken, DetectResult, DetectionPipeline};

use image::RgbImage;
use log::{debug, info};

/// A source of RGB frames, e.g. a camera.
pub trait FrameSource {
    /// Next frame, or None when the source is exhausted.
    fn next_frame(&mut self) -> DetectResult<Option<RgbImage>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub frames: u64,
    pub detections: u64,
    pub cancelled: bool,
}

/// Annotate frames from `source` until it runs dry or `cancel` is set.
///
/// The token is checked before each frame is pulled, so a cancel takes
/// effect after at most one in-flight frame.
pub fn run_stream<S, F>(
    source: &mut S,
    pipeline: &mut DetectionPipeline,
    annotator: &Annotator,
    threshold: f32,
    cancel: &CancelToken,
    mut sink: F,
) -> DetectResult<StreamStats>
where
    S: FrameSource + ?Sized,
    F: FnMut(RgbImage) -> DetectResult<()>,
{
    let mut stats = StreamStats::default();
    let color = pipeline.kind().color();

    info!("{} stream started (threshold {:.2})", pipeline.kind(), threshold);

    loop {
        if cancel.is_cancelled() {
            stats.cancelled = true;
            break;
        }

        let Some(mut frame) = source.next_frame()? else {
            debug!("Frame source exhausted");
            break;
        };

        let detections = pipeline.run(&frame, threshold)?;
        annotator.annotate(&mut frame, &detections, color);

        stats.frames += 1;
        stats.detections += detections.len() as u64;

        sink(frame)?;
    }

    info!(
        "{} stream stopped after {} frames ({} detections)",
        pipeline.kind(),
        stats.frames,
        stats.detections
    );

    Ok(stats)
}
