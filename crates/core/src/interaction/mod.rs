mod disclosure;
mod reflection;

pub use disclosure::ResourceDisclosure;
pub use reflection::{Answer, FeedbackVisibility, QuestionState, ReflectionState};

use crate::model::Lesson;

/// Everything a lesson view mutates in response to the user.
///
/// Created empty when a view mounts and dropped with it. The lesson itself
/// is never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonInteraction {
    pub reflection: ReflectionState,
    pub resources: ResourceDisclosure,
}

impl LessonInteraction {
    #[must_use]
    pub fn for_lesson(lesson: &Lesson) -> Self {
        Self {
            reflection: ReflectionState::new(lesson.questions().len()),
            resources: ResourceDisclosure::new(lesson.resources().len()),
        }
    }
}
