mod concept;
mod lesson;
mod question;

pub use concept::KeyConcept;
pub use lesson::{
    ConceptSection, GlossaryItem, GuidanceItem, GuidanceSection, Lesson, ResourceItem,
    ResourceSection, SelfReflection, UNSCORED,
};
pub use question::{AnswerOption, FeedbackItem, Question};
