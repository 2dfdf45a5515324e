use crate::DEFAULT_UI_PATH;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Landing page opened in the browser, relative to the config directory
    pub path: String,
    /// Supporting assets checked by `autopilot check`, relative to the config directory
    pub extra_files: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_UI_PATH),
            extra_files: vec![
                "UI/home.css".into(),
                "UI/table1.html".into(),
                "UI/table2.html".into(),
                "UI/table3.html".into(),
            ],
        }
    }
}
