use crate::{DetectResult, DetectionPipeline, DetectorLoader, LabeledDetection, ModelKind};

use std::collections::BTreeMap;
use std::path::Path;

use image::RgbImage;
use log::{error, info, warn};

/// All models that could be loaded, keyed by kind.
///
/// A model whose weights are missing or fail to load is logged and left
/// out; the remaining models stay usable.
#[derive(Default)]
pub struct ModelRegistry {
    pipelines: BTreeMap<ModelKind, DetectionPipeline>,
}

impl ModelRegistry {
    pub fn load(base_dir: &Path, kinds: &[ModelKind], loader: &DetectorLoader) -> Self {
        let mut pipelines = BTreeMap::new();

        for &kind in kinds {
            let path = base_dir.join(kind.weights_path());

            if !path.exists() {
                warn!("{kind} model not found at {}", path.display());
                continue;
            }

            match loader(&path) {
                Ok(detector) => {
                    info!("{kind} model loaded");
                    pipelines.insert(kind, DetectionPipeline::new(kind, detector));
                }
                Err(e) => {
                    error!("Error loading {kind}: {e}");
                }
            }
        }

        Self { pipelines }
    }

    pub fn insert(&mut self, pipeline: DetectionPipeline) {
        self.pipelines.insert(pipeline.kind(), pipeline);
    }

    pub fn get_mut(&mut self, kind: ModelKind) -> Option<&mut DetectionPipeline> {
        self.pipelines.get_mut(&kind)
    }

    pub fn is_loaded(&self, kind: ModelKind) -> bool {
        self.pipelines.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    pub fn loaded(&self) -> impl Iterator<Item = ModelKind> + '_ {
        self.pipelines.keys().copied()
    }

    /// Run every loaded model on one frame, in kind order.
    pub fn run_all(
        &mut self,
        image: &RgbImage,
        threshold: f32,
    ) -> DetectResult<Vec<(ModelKind, Vec<LabeledDetection>)>> {
        let mut results = Vec::with_capacity(self.pipelines.len());
        for pipeline in self.pipelines.values_mut() {
            results.push((pipeline.kind(), pipeline.run(image, threshold)?));
        }
        Ok(results)
    }
}
