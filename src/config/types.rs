use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Presentation settings shared by both front ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown in the header bar (default: "MVP Counter Example").
    #[serde(default = "default_title")]
    pub title: String,
    /// Text placed before the count (default: "Counter: ").
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
    /// Show key hints in the footer (default: true).
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

fn default_title() -> String {
    "MVP Counter Example".to_string()
}

fn default_label_prefix() -> String {
    "Counter: ".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            label_prefix: default_label_prefix(),
            show_hints: default_show_hints(),
        }
    }
}

impl UiConfig {
    /// Label text for `value`, e.g. "Counter: 3".
    pub fn label_text(&self, value: u64) -> String {
        format!("{}{}", self.label_prefix, value)
    }
}
