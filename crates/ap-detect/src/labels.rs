/// Label used when a model has no name for a class.
pub fn fallback_label(class_id: u32) -> String {
    format!("Class_{class_id}")
}

/// English display name for a traffic-sign class.
///
/// The sign model was trained with Turkish class names; unknown names
/// return None and are shown as-is.
pub fn translate_traffic_sign(label: &str) -> Option<&'static str> {
    let translated = match label {
        "20" => "Speed Limit 20",
        "30" => "Speed Limit 30",
        "dur" => "Stop",
        "durak" => "Bus Stop",
        "girisyok" => "No Entry",
        "ilerisag" => "Go Straight & Turn Right",
        "ilerisol" => "Go Straight & Turn Left",
        "kirmizi" => "Red Light",
        "park" => "Parking",
        "parkyasak" => "No Parking",
        "sag" => "Right",
        "sagadonulmez" => "No Right Turn",
        "sari" => "Yellow Light",
        "sol" => "Left",
        "soladonulmez" => "No Left Turn",
        "yesil" => "Green Light",
        "parkyasak2" => "No Parking (Variant)",
        "arac" => "Vehicle",
        "yaya" => "Pedestrian",
        "otobus" => "Bus",
        "bisikletli" => "Cyclist",
        "yapılar" => "Buildings",
        "yayagecidi" => "Pedestrian Crossing",
        "tasitrafiginekapali" => "Closed to Vehicle Traffic",
        _ => return None,
    };

    Some(translated)
}
