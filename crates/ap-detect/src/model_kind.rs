use crate::translate_traffic_sign;

use std::fmt;

/// The pretrained models shipped with the demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    LtvHtv,
    Pedestrian,
    TrafficLight,
    TrafficSign,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::LtvHtv,
        ModelKind::Pedestrian,
        ModelKind::TrafficLight,
        ModelKind::TrafficSign,
    ];

    /// Key used in the server table and summaries.
    pub fn key(&self) -> &'static str {
        match self {
            ModelKind::LtvHtv => "LTV_HTV",
            ModelKind::Pedestrian => "Pedestrian",
            ModelKind::TrafficLight => "TrafficLight",
            ModelKind::TrafficSign => "TrafficSign",
        }
    }

    /// Weights file relative to the project directory.
    pub fn weights_path(&self) -> &'static str {
        match self {
            ModelKind::LtvHtv => "LTV_HTV_Model/LTV_HTV.pt",
            ModelKind::Pedestrian => "Pedestrian_Model/last.pt",
            ModelKind::TrafficLight => "Traffic_Light_Model/epoch70.pt",
            ModelKind::TrafficSign => "TRAFFIC_SIGN_MODEL/trafic.pt",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ModelKind::LtvHtv => "🚙",
            ModelKind::Pedestrian => "🚶",
            ModelKind::TrafficLight => "🚦",
            ModelKind::TrafficSign => "🚸",
        }
    }

    /// Annotation color (RGB).
    pub fn color(&self) -> [u8; 3] {
        match self {
            ModelKind::LtvHtv => [0, 255, 0],
            ModelKind::Pedestrian => [255, 0, 0],
            ModelKind::TrafficLight => [255, 165, 0],
            ModelKind::TrafficSign => [255, 0, 255],
        }
    }

    /// Map a raw class label to what is shown to the user.
    pub fn display_label(&self, raw: &str) -> String {
        match self {
            ModelKind::TrafficSign => translate_traffic_sign(raw).unwrap_or(raw).to_string(),
            _ => raw.to_string(),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
