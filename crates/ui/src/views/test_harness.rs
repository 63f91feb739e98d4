use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use lesson_core::interaction::LessonInteraction;
use lesson_core::model::Lesson;

use crate::views::LessonView;
use crate::views::lesson::LessonTestHandles;
use crate::vm::LessonIntent;

#[derive(Props, Clone)]
struct LessonHarnessProps {
    lesson: Arc<Lesson>,
    handles: LessonTestHandles,
}

impl PartialEq for LessonHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for LessonHarnessProps {}

#[component]
fn LessonViewHarness(props: LessonHarnessProps) -> Element {
    use_context_provider(|| props.handles.clone());
    rsx! { LessonView { lesson: props.lesson.clone() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: LessonTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Send an intent through the view's own dispatcher, then settle the DOM.
    pub fn dispatch(&mut self, intent: LessonIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn select(&mut self, question: usize, label: &str) {
        self.dispatch(LessonIntent::SelectOption {
            question,
            label: label.to_string(),
        });
    }

    pub fn interaction(&self) -> LessonInteraction {
        let interaction = self.handles.interaction();
        self.dom.in_runtime(|| interaction.peek().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_lesson_harness(lesson: Lesson) -> ViewHarness {
    let handles = LessonTestHandles::default();
    let dom = VirtualDom::new_with_props(
        LessonViewHarness,
        LessonHarnessProps {
            lesson: Arc::new(lesson),
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}

/// Text of every option row rendered as chosen, in document order.
pub fn chosen_option_labels(html: &str) -> Vec<String> {
    html.split("reflection-option--chosen")
        .skip(1)
        .filter_map(|rest| {
            let start = rest.find("reflection-option-label")?;
            let label = &rest[start..];
            let open = label.find('>')? + 1;
            let close = label.find("</label>")?;
            Some(label[open..close].to_string())
        })
        .collect()
}
