use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{KeyConcept, Question};

/// Scoring mode value used by lessons that are never graded.
pub const UNSCORED: &str = "unscored";

/// Root content value for one interactive lesson.
///
/// Supplied whole by the embedding application and only ever read: the
/// interaction state lives next to it, never inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: String,
    pub metadata_badges: Vec<String>,
    pub scenario_hook: String,
    pub section1: ConceptSection,
    pub section2: GuidanceSection,
    pub section3: ResourceSection,
    pub self_reflection: SelfReflection,
    pub glossary: Vec<GlossaryItem>,
    pub scoring: String,
}

impl Lesson {
    /// # Errors
    ///
    /// Returns `Error::Parse` when the payload does not have the lesson shape.
    pub fn from_json_str(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `Error::Parse` for malformed payloads and `Error::Io` when the
    /// reader fails.
    pub fn from_json_reader(mut reader: impl Read) -> Result<Self, Error> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.self_reflection.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.self_reflection.questions.get(index)
    }

    #[must_use]
    pub fn resources(&self) -> &[ResourceItem] {
        &self.section3.resources
    }

    #[must_use]
    pub fn is_unscored(&self) -> bool {
        self.scoring.trim().eq_ignore_ascii_case(UNSCORED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSection {
    pub title: String,
    pub opening_text: String,
    pub key_concepts: Vec<KeyConcept>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceSection {
    pub title: String,
    pub guidance: Vec<GuidanceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSection {
    pub title: String,
    pub resources: Vec<ResourceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfReflection {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceItem {
    pub point: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub name: String,
    pub usage: String,
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryItem {
    pub term: String,
    pub definition: String,
    pub context: String,
}
