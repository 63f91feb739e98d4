use serde::{Deserialize, Serialize};

/// A concept card: title and definition, plus an optional icon, alt text
/// and example.
///
/// Authors often leave the optional fields as empty strings instead of
/// omitting them, so the accessors treat blank values as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyConcept {
    pub title: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl KeyConcept {
    #[must_use]
    pub fn new(title: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            definition: definition.into(),
            icon: None,
            alt_text: None,
            example: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>, alt_text: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self.alt_text = Some(alt_text.into());
        self
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Opaque image reference, passed through untouched.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        present(self.icon.as_deref())
    }

    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        present(self.alt_text.as_deref())
    }

    #[must_use]
    pub fn example(&self) -> Option<&str> {
        present(self.example.as_deref())
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
