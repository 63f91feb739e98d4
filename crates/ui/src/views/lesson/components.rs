use dioxus::prelude::*;
use lesson_core::model::GlossaryItem;

use crate::vm::{
    ConceptCardVm, ConceptSectionVm, GuidanceSectionVm, LessonIntent, QuestionVm, ResourceItemVm,
    ResourceSectionVm,
};

#[component]
pub(super) fn ConceptSection(section: ConceptSectionVm) -> Element {
    rsx! {
        section { class: "lesson-section lesson-concepts",
            h2 { class: "lesson-section-title", "{section.title}" }
            p { class: "lesson-text", "{section.opening_text}" }
            div { class: "lesson-card-grid",
                for (idx, card) in section.cards.iter().enumerate() {
                    ConceptCard { key: "{idx}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn ConceptCard(card: ConceptCardVm) -> Element {
    rsx! {
        div { class: "lesson-card",
            div { class: "lesson-card-title", "{card.title}" }
            if let Some(icon) = card.icon.as_ref() {
                img {
                    class: "lesson-card-icon",
                    src: "{icon.src}",
                    alt: icon.alt.clone(),
                }
            }
            p { class: "lesson-card-definition", "{card.definition}" }
            if let Some(example) = card.example_label.as_ref() {
                em { class: "lesson-card-example", "{example}" }
            }
        }
    }
}

#[component]
pub(super) fn GuidanceSection(section: GuidanceSectionVm) -> Element {
    rsx! {
        section { class: "lesson-section lesson-guidance",
            h2 { class: "lesson-section-title", "{section.title}" }
            ul { class: "lesson-list",
                for (idx, item) in section.items.iter().enumerate() {
                    li { key: "{idx}",
                        strong { "{item.point}" }
                        ": {item.explanation}"
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn ResourceAccordion(
    section: ResourceSectionVm,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        section { class: "lesson-section lesson-resources",
            h2 { class: "lesson-section-title", "{section.title}" }
            div { class: "lesson-accordion",
                for item in section.items.iter() {
                    AccordionItem { key: "{item.index}", item: item.clone(), on_intent: on_intent }
                }
            }
        }
    }
}

#[component]
fn AccordionItem(item: ResourceItemVm, on_intent: EventHandler<LessonIntent>) -> Element {
    let index = item.index;
    let class = if item.open {
        "lesson-resource lesson-resource--open"
    } else {
        "lesson-resource"
    };
    rsx! {
        div { class: "{class}",
            div {
                class: "lesson-resource-header",
                role: "button",
                onclick: move |_| on_intent.call(LessonIntent::ToggleResource(index)),
                "{item.name} {item.caret}"
            }
            if item.open {
                div { class: "lesson-resource-body",
                    p { "{item.usage}" }
                    em { class: "lesson-resource-benefit", "{item.benefit}" }
                }
            }
        }
    }
}

#[component]
pub(super) fn ReflectionSection(
    questions: Vec<QuestionVm>,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        section { class: "lesson-section lesson-reflection",
            h2 { class: "lesson-section-title", "Self-Reflection" }
            for question in questions.iter() {
                ReflectionQuestion { key: "{question.index}", question: question.clone(), on_intent: on_intent }
            }
        }
    }
}

#[component]
fn ReflectionQuestion(question: QuestionVm, on_intent: EventHandler<LessonIntent>) -> Element {
    let index = question.index;
    let options = question.options.iter().map(|option| {
        let label = option.label.clone();
        let row_class = if option.chosen {
            "reflection-option reflection-option--chosen"
        } else {
            "reflection-option"
        };
        rsx! {
            div { key: "{option.input_id}", class: "{row_class}",
                input {
                    class: "reflection-option-input",
                    r#type: "radio",
                    name: "{question.group_name}",
                    id: "{option.input_id}",
                    checked: option.chosen,
                    onchange: move |_| {
                        on_intent.call(LessonIntent::SelectOption {
                            question: index,
                            label: label.clone(),
                        });
                    },
                }
                label { class: "reflection-option-label", r#for: "{option.input_id}", "{option.display}" }
            }
        }
    });

    rsx! {
        div { class: "reflection-question",
            p { class: "reflection-prompt", "{question.prompt}" }
            div { class: "reflection-options",
                {options}
                button {
                    class: "btn btn-primary reflection-reveal",
                    r#type: "button",
                    onclick: move |_| on_intent.call(LessonIntent::RevealFeedback(index)),
                    "Reveal Feedback"
                }
                if let Some(feedback) = question.feedback.as_ref() {
                    div { class: "reflection-feedback", "{feedback}" }
                }
            }
        }
    }
}

#[component]
pub(super) fn GlossarySection(items: Vec<GlossaryItem>) -> Element {
    rsx! {
        section { class: "lesson-section lesson-glossary",
            h2 { class: "lesson-section-title", "Glossary" }
            ul { class: "lesson-list",
                for (idx, item) in items.iter().enumerate() {
                    li { key: "{idx}",
                        strong { "{item.term}" }
                        ": {item.definition} "
                        em { "({item.context})" }
                    }
                }
            }
        }
    }
}
