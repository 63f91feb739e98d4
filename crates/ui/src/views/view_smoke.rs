use lesson_core::model::KeyConcept;
use lesson_core::sample::screening_tests_lesson;

use crate::vm::LessonIntent;

use super::test_harness::{chosen_option_labels, setup_lesson_harness};

const Q0_FEEDBACK_A: &str = "Speed is helpful, but accuracy in forecasting matters more.";
const Q0_FEEDBACK_C: &str = "Correct! Predictive validity ensures future outcomes are considered.";
const Q1_FEEDBACK_B: &str = "Correct! That shows you’re grounding the decision in data.";

#[test]
fn lesson_view_smoke_renders_static_sections() {
    let harness = setup_lesson_harness(screening_tests_lesson());
    let html = harness.render();

    for expected in [
        "Identifying Valid Screening Tests for Students",
        "Assessment",
        "Scenario",
        "What Makes a Screening Test Valid?",
        "Construct Validity",
        "Example: A reading test measures reading, not memory.",
        "Common Pitfalls to Avoid",
        "Assuming all tests are equal",
        "Where to Find Valid Screeners",
        "National Center on Intensive Intervention",
        "Self-Reflection",
        "A. One that is quick and easy",
        "Reveal Feedback",
        "Glossary",
        "(Used early to flag potential needs.)",
        "Scoring: unscored",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[test]
fn lesson_view_smoke_initial_state_is_unanswered_and_closed() {
    let harness = setup_lesson_harness(screening_tests_lesson());
    let html = harness.render();

    assert!(chosen_option_labels(&html).is_empty(), "unexpected choice in {html}");
    assert!(!html.contains("reflection-feedback"), "unexpected feedback in {html}");
    assert!(!html.contains("lesson-resource-body"), "unexpected open resource in {html}");
    assert!(!html.contains("Browse their tools chart"), "resource usage leaked in {html}");
}

#[test]
fn lesson_view_smoke_select_reveal_then_change_answer() {
    let mut harness = setup_lesson_harness(screening_tests_lesson());

    harness.select(0, "C");
    let html = harness.render();
    assert_eq!(
        chosen_option_labels(&html),
        vec!["C. One with predictive validity".to_string()]
    );
    assert!(!html.contains(Q0_FEEDBACK_C), "feedback before reveal in {html}");

    harness.dispatch(LessonIntent::RevealFeedback(0));
    let html = harness.render();
    assert!(html.contains(Q0_FEEDBACK_C), "missing C feedback in {html}");

    harness.select(0, "A");
    let html = harness.render();
    assert_eq!(
        chosen_option_labels(&html),
        vec!["A. One that is quick and easy".to_string()]
    );
    assert!(html.contains(Q0_FEEDBACK_A), "missing A feedback in {html}");
    assert!(!html.contains(Q0_FEEDBACK_C), "stale C feedback in {html}");
}

#[test]
fn lesson_view_smoke_selection_without_reveal_shows_no_feedback() {
    let mut harness = setup_lesson_harness(screening_tests_lesson());

    harness.select(1, "B");
    let html = harness.render();
    let chosen = chosen_option_labels(&html);
    assert_eq!(chosen.len(), 1, "expected one choice in {html}");
    assert!(chosen[0].starts_with("B. Ask about the test"), "wrong choice {chosen:?}");
    assert!(!html.contains(Q1_FEEDBACK_B), "feedback without reveal in {html}");
    assert!(!html.contains("reflection-feedback"), "feedback area in {html}");

    let interaction = harness.interaction();
    let state = interaction.reflection.question(1).expect("question state");
    assert!(state.is_chosen("B"));
    assert!(!state.is_revealed());
}

#[test]
fn lesson_view_smoke_reveal_is_idempotent() {
    let mut harness = setup_lesson_harness(screening_tests_lesson());

    harness.select(1, "B");
    harness.dispatch(LessonIntent::RevealFeedback(1));
    let once = harness.render();
    harness.dispatch(LessonIntent::RevealFeedback(1));
    let twice = harness.render();

    assert_eq!(once, twice);
    assert!(twice.contains(Q1_FEEDBACK_B), "missing feedback in {twice}");
}

#[test]
fn lesson_view_smoke_reveal_before_answer_waits_for_selection() {
    let mut harness = setup_lesson_harness(screening_tests_lesson());

    harness.dispatch(LessonIntent::RevealFeedback(0));
    let html = harness.render();
    assert!(!html.contains("reflection-feedback"), "feedback without answer in {html}");

    harness.select(0, "C");
    let html = harness.render();
    assert!(html.contains(Q0_FEEDBACK_C), "missing feedback in {html}");
}

#[test]
fn lesson_view_smoke_questions_are_independent() {
    let mut harness = setup_lesson_harness(screening_tests_lesson());

    harness.select(0, "C");
    harness.dispatch(LessonIntent::RevealFeedback(0));
    harness.select(1, "D");
    let html = harness.render();

    assert_eq!(chosen_option_labels(&html).len(), 2);
    assert!(html.contains(Q0_FEEDBACK_C), "missing q0 feedback in {html}");
    assert!(
        !html.contains("Outdated familiarity may not meet current standards."),
        "q1 feedback without reveal in {html}"
    );
}

#[test]
fn lesson_view_smoke_resource_toggles_are_independent() {
    let mut harness = setup_lesson_harness(screening_tests_lesson());

    harness.dispatch(LessonIntent::ToggleResource(1));
    let html = harness.render();
    assert!(html.contains("Easier implementation and compliance."), "missing body in {html}");
    assert!(!html.contains("Browse their tools chart"), "first entry opened in {html}");

    harness.dispatch(LessonIntent::ToggleResource(0));
    let html = harness.render();
    assert!(html.contains("Browse their tools chart"), "missing first body in {html}");
    assert!(html.contains("Easier implementation and compliance."), "second closed in {html}");

    harness.dispatch(LessonIntent::ToggleResource(1));
    let html = harness.render();
    assert!(html.contains("Browse their tools chart"), "first closed in {html}");
    assert!(!html.contains("Easier implementation and compliance."), "second still open in {html}");

    let interaction = harness.interaction();
    assert!(interaction.resources.is_open(0));
    assert!(!interaction.resources.is_open(1));
}

#[test]
fn lesson_view_smoke_out_of_range_intent_changes_nothing() {
    let mut harness = setup_lesson_harness(screening_tests_lesson());
    let before = harness.render();

    harness.dispatch(LessonIntent::RevealFeedback(7));
    harness.dispatch(LessonIntent::ToggleResource(7));
    harness.select(7, "A");

    assert_eq!(harness.render(), before);
}

#[test]
fn lesson_view_smoke_optional_concept_parts_follow_presence() {
    let mut lesson = screening_tests_lesson();
    lesson.section1.key_concepts = vec![
        KeyConcept::new("Bare Concept", "Nothing optional."),
        KeyConcept::new("Iconic Concept", "Has an icon.").with_icon("icons/graph.svg", "Graph icon"),
    ];
    let harness = setup_lesson_harness(lesson);
    let html = harness.render();

    assert_eq!(html.matches("lesson-card-icon").count(), 1, "icon count in {html}");
    assert!(html.contains("icons/graph.svg"), "missing icon src in {html}");
    assert!(html.contains("Graph icon"), "missing alt text in {html}");
    assert!(!html.contains("lesson-card-example"), "unexpected example in {html}");
    assert!(!html.contains("Example:"), "unexpected example label in {html}");
}

#[test]
fn lesson_view_smoke_sample_blank_icons_render_no_image() {
    let harness = setup_lesson_harness(screening_tests_lesson());
    let html = harness.render();

    assert!(!html.contains("<img"), "blank icon rendered an image in {html}");
    assert!(!html.contains("Target icon"), "alt text without icon in {html}");
}
