//! Built-in lesson used when no payload is supplied, and by tests.

use crate::model::{
    AnswerOption, ConceptSection, FeedbackItem, GlossaryItem, GuidanceItem, GuidanceSection,
    KeyConcept, Lesson, Question, ResourceItem, ResourceSection, SelfReflection, UNSCORED,
};

/// "Identifying Valid Screening Tests for Students": two concept cards, two
/// guidance points, two resources, two A-D questions and three glossary
/// terms.
#[must_use]
pub fn screening_tests_lesson() -> Lesson {
    Lesson {
        title: "Identifying Valid Screening Tests for Students".to_string(),
        metadata_badges: ["10 min", "Assessment", "Beginner", "Interactive"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        scenario_hook: "You’re a school psychologist deciding how to support a new student with \
                        learning concerns. The team asks you to recommend a screening test—but \
                        which one is best suited?"
            .to_string(),
        section1: ConceptSection {
            title: "What Makes a Screening Test Valid?".to_string(),
            opening_text: "Understanding validity helps you select tools that truly reflect \
                           student needs."
                .to_string(),
            key_concepts: vec![
                KeyConcept::new(
                    "Construct Validity",
                    "The test actually measures the concept it claims to measure.",
                )
                .with_icon("", "Target icon")
                .with_example("A reading test measures reading, not memory."),
                KeyConcept::new(
                    "Predictive Validity",
                    "The test predicts future performance or outcomes.",
                )
                .with_icon("", "Graph icon")
                .with_example("A screener forecasts later math performance."),
            ],
        },
        section2: GuidanceSection {
            title: "Common Pitfalls to Avoid".to_string(),
            guidance: vec![
                guidance(
                    "Assuming all tests are equal",
                    "Not all screeners are backed by evidence.",
                ),
                guidance(
                    "Ignoring student background",
                    "Cultural and linguistic context matters.",
                ),
            ],
        },
        section3: ResourceSection {
            title: "Where to Find Valid Screeners".to_string(),
            resources: vec![
                resource(
                    "National Center on Intensive Intervention",
                    "Browse their tools chart for rated screeners.",
                    "Evidence-based ratings to compare tools.",
                ),
                resource(
                    "Your District’s Approved List",
                    "Check what’s already validated locally.",
                    "Easier implementation and compliance.",
                ),
            ],
        },
        self_reflection: SelfReflection {
            questions: vec![
                question(
                    "Which screener is best if you want to forecast a student’s academic future?",
                    [
                        ("A", "One that is quick and easy"),
                        ("B", "One that is teacher-approved"),
                        ("C", "One with predictive validity"),
                        ("D", "One used by another school"),
                    ],
                    [
                        ("A", "Speed is helpful, but accuracy in forecasting matters more."),
                        ("B", "Expert buy-in is great—but look for evidence-based validity."),
                        (
                            "C",
                            "Correct! Predictive validity ensures future outcomes are considered.",
                        ),
                        ("D", "Other schools’ use doesn’t guarantee validity."),
                    ],
                ),
                question(
                    "How might you apply this in your next student support meeting?",
                    [
                        ("A", "Suggest any available screener"),
                        ("B", "Ask about the test's predictive validity"),
                        ("C", "Choose based on parent preference"),
                        ("D", "Use the one you know from grad school"),
                    ],
                    [
                        ("A", "It's best to vet for purpose and validity."),
                        ("B", "Correct! That shows you’re grounding the decision in data."),
                        (
                            "C",
                            "Parent insights matter, but aren’t a replacement for validity.",
                        ),
                        ("D", "Outdated familiarity may not meet current standards."),
                    ],
                ),
            ],
        },
        glossary: vec![
            glossary(
                "Validity",
                "Accuracy of what the test measures.",
                "Select tools with demonstrated validity.",
            ),
            glossary(
                "Screening Test",
                "A brief assessment to identify risk.",
                "Used early to flag potential needs.",
            ),
            glossary(
                "Predictive Validity",
                "How well a test forecasts outcomes.",
                "Important when planning long-term support.",
            ),
        ],
        scoring: UNSCORED.to_string(),
    }
}

fn guidance(point: &str, explanation: &str) -> GuidanceItem {
    GuidanceItem {
        point: point.to_string(),
        explanation: explanation.to_string(),
    }
}

fn resource(name: &str, usage: &str, benefit: &str) -> ResourceItem {
    ResourceItem {
        name: name.to_string(),
        usage: usage.to_string(),
        benefit: benefit.to_string(),
    }
}

fn glossary(term: &str, definition: &str, context: &str) -> GlossaryItem {
    GlossaryItem {
        term: term.to_string(),
        definition: definition.to_string(),
        context: context.to_string(),
    }
}

fn question<const N: usize>(
    prompt: &str,
    options: [(&str, &str); N],
    feedback: [(&str, &str); N],
) -> Question {
    Question {
        prompt: prompt.to_string(),
        options: options
            .into_iter()
            .map(|(label, text)| AnswerOption::new(label, text))
            .collect(),
        feedback: feedback
            .into_iter()
            .map(|(label, text)| FeedbackItem::new(label, text))
            .collect(),
    }
}
