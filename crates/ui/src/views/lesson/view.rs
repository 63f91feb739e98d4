use std::sync::Arc;

use dioxus::prelude::*;
use lesson_core::interaction::LessonInteraction;
use lesson_core::model::Lesson;
use tracing::debug;

use crate::vm::{LessonIntent, map_lesson};

use super::components::{
    ConceptSection, GlossarySection, GuidanceSection, ReflectionSection, ResourceAccordion,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn LessonView(lesson: Arc<Lesson>) -> Element {
    // Fresh per mount, dropped on unmount.
    let mut interaction = use_signal(|| LessonInteraction::for_lesson(&lesson));

    let dispatch_intent = use_callback(move |intent: LessonIntent| {
        let applied = intent.apply(&mut interaction.write());
        if applied {
            debug!(?intent, "lesson intent applied");
        } else {
            debug!(?intent, "lesson intent ignored: index out of range");
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch_intent, interaction);
            }
        }
    }

    let vm = map_lesson(&lesson, &interaction.read());

    rsx! {
        div { class: "page lesson-page",
            header { class: "view-header lesson-header",
                h1 { class: "view-title lesson-title", "{vm.title}" }
                div { class: "lesson-badges",
                    for (idx, badge) in vm.badges.iter().enumerate() {
                        span { key: "{idx}", class: "lesson-badge", "{badge}" }
                    }
                }
            }
            section { class: "lesson-section lesson-scenario",
                h2 { class: "lesson-section-title", "Scenario" }
                p { class: "lesson-text", "{vm.scenario}" }
            }
            ConceptSection { section: vm.concepts.clone() }
            GuidanceSection { section: vm.guidance.clone() }
            ResourceAccordion { section: vm.resources.clone(), on_intent: dispatch_intent }
            ReflectionSection { questions: vm.questions.clone(), on_intent: dispatch_intent }
            GlossarySection { items: vm.glossary.clone() }
            if let Some(note) = vm.scoring_note.as_ref() {
                footer { class: "lesson-scoring", "{note}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LessonIntent>>>>,
    interaction: Rc<RefCell<Option<Signal<LessonInteraction>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<LessonIntent>,
        interaction: Signal<LessonInteraction>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.interaction.borrow_mut() = Some(interaction);
    }

    pub(crate) fn dispatch(&self) -> Callback<LessonIntent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }

    pub(crate) fn interaction(&self) -> Signal<LessonInteraction> {
        (*self.interaction.borrow()).expect("lesson interaction registered")
    }
}
