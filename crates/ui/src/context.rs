use std::sync::Arc;

use lesson_core::model::Lesson;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn lesson(&self) -> Arc<Lesson>;
}

#[derive(Clone)]
pub struct AppContext {
    lesson: Arc<Lesson>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lesson: app.lesson(),
        }
    }

    #[must_use]
    pub fn lesson(&self) -> Arc<Lesson> {
        Arc::clone(&self.lesson)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
