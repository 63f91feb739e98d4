use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::LessonView;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let lesson = ctx.lesson();
    let title = lesson.title.clone();

    rsx! {
        document::Stylesheet { href: asset!("/assets/lesson.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                main { class: "content",
                    LessonView { lesson: lesson.clone() }
                }
            }
        }
    }
}
