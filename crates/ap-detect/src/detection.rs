/// Pixel-space box, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Clamp to an image of the given size. Returns None when nothing is left.
    pub fn clamped(&self, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let max_x = width as i32 - 1;
        let max_y = height as i32 - 1;
        let clamped = Self {
            x1: self.x1.clamp(0, max_x),
            y1: self.y1.clamp(0, max_y),
            x2: self.x2.clamp(0, max_x),
            y2: self.y2.clamp(0, max_y),
        };

        (clamped.x1 < clamped.x2 && clamped.y1 < clamped.y2).then_some(clamped)
    }
}

/// Raw output of a detector before thresholding.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub bbox: BoundingBox,
    /// None when the runtime produced no class for this box
    pub class_id: Option<u32>,
    pub confidence: f32,
}

/// A detection that passed the threshold, with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDetection {
    pub bbox: BoundingBox,
    pub label: String,
    pub confidence: f32,
}

impl LabeledDetection {
    /// Caption drawn next to the box, e.g. "Stop 0.87".
    pub fn caption(&self) -> String {
        format!("{} {:.2}", self.label, self.confidence)
    }
}
