use crate::{LabeledDetection, ModelKind, SUMMARY_MAX_LINES};

const NO_OBJECTS: &str = "No objects detected";

/// Text shown under a single-model result.
pub fn summarize(detections: &[LabeledDetection]) -> String {
    if detections.is_empty() {
        return NO_OBJECTS.to_string();
    }

    let mut text = format!("Detected {} objects", detections.len());
    for detection in detections.iter().take(SUMMARY_MAX_LINES) {
        text.push_str(&format!(
            "\n{}: {:.2}",
            detection.label, detection.confidence
        ));
    }

    if detections.len() > SUMMARY_MAX_LINES {
        text.push_str(&format!(
            "\n... and {} more",
            detections.len() - SUMMARY_MAX_LINES
        ));
    }

    text
}

/// Text shown under the combined result: a total and one count per model.
///
/// Models with no detections are omitted.
pub fn combined_summary(results: &[(ModelKind, Vec<LabeledDetection>)]) -> String {
    let total: usize = results.iter().map(|(_, d)| d.len()).sum();
    if total == 0 {
        return NO_OBJECTS.to_string();
    }

    let mut text = format!("Total Detections: {total}\n");
    for (kind, detections) in results.iter().filter(|(_, d)| !d.is_empty()) {
        text.push_str(&format!("\n{} {}: {}", kind.icon(), kind, detections.len()));
    }

    text
}
