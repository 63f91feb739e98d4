mod components;
mod view;

pub use view::LessonView;

#[cfg(test)]
pub(crate) use view::LessonTestHandles;
