mod lesson_vm;

pub use lesson_vm::{
    ConceptCardVm, ConceptIconVm, ConceptSectionVm, GuidanceSectionVm, LessonIntent, LessonVm,
    OptionVm, QuestionVm, ResourceItemVm, ResourceSectionVm, map_lesson,
};
