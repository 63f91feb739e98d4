use lesson_core::interaction::{LessonInteraction, QuestionState};
use lesson_core::model::{GlossaryItem, GuidanceItem, KeyConcept, Lesson, Question, ResourceItem};

/// User actions the lesson view reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    SelectOption { question: usize, label: String },
    RevealFeedback(usize),
    ToggleResource(usize),
}

impl LessonIntent {
    /// Applies the intent to `interaction`. Returns `false` when it names an
    /// index the lesson does not have, in which case nothing changes.
    pub fn apply(&self, interaction: &mut LessonInteraction) -> bool {
        match self {
            Self::SelectOption { question, label } => interaction
                .reflection
                .select_option(*question, label.clone()),
            Self::RevealFeedback(question) => interaction.reflection.reveal_feedback(*question),
            Self::ToggleResource(resource) => interaction.resources.toggle(*resource),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub title: String,
    pub badges: Vec<String>,
    pub scenario: String,
    pub concepts: ConceptSectionVm,
    pub guidance: GuidanceSectionVm,
    pub resources: ResourceSectionVm,
    pub questions: Vec<QuestionVm>,
    pub glossary: Vec<GlossaryItem>,
    pub scoring_note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConceptSectionVm {
    pub title: String,
    pub opening_text: String,
    pub cards: Vec<ConceptCardVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConceptCardVm {
    pub title: String,
    pub definition: String,
    pub icon: Option<ConceptIconVm>,
    pub example_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConceptIconVm {
    pub src: String,
    pub alt: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuidanceSectionVm {
    pub title: String,
    pub items: Vec<GuidanceItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceSectionVm {
    pub title: String,
    pub items: Vec<ResourceItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceItemVm {
    pub index: usize,
    pub name: String,
    pub usage: String,
    pub benefit: String,
    pub open: bool,
    pub caret: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub prompt: String,
    pub group_name: String,
    pub options: Vec<OptionVm>,
    pub revealed: bool,
    pub feedback: Option<String>,
}

impl QuestionVm {
    #[must_use]
    pub fn chosen_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.chosen)
            .map(|option| option.label.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub display: String,
    pub input_id: String,
    pub chosen: bool,
}

/// Project the lesson and its current interaction state into what the view
/// draws. Pure: the same inputs always give the same output.
#[must_use]
pub fn map_lesson(lesson: &Lesson, interaction: &LessonInteraction) -> LessonVm {
    let cards = lesson
        .section1
        .key_concepts
        .iter()
        .map(map_concept_card)
        .collect();

    let resources = lesson
        .resources()
        .iter()
        .enumerate()
        .map(|(index, resource)| {
            map_resource(index, resource, interaction.resources.is_open(index))
        })
        .collect();

    let questions = lesson
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            map_question(index, question, interaction.reflection.question(index))
        })
        .collect();

    let scoring = lesson.scoring.trim();
    let scoring_note = if scoring.is_empty() {
        None
    } else {
        Some(format!("Scoring: {scoring}"))
    };

    LessonVm {
        title: lesson.title.clone(),
        badges: lesson.metadata_badges.clone(),
        scenario: lesson.scenario_hook.clone(),
        concepts: ConceptSectionVm {
            title: lesson.section1.title.clone(),
            opening_text: lesson.section1.opening_text.clone(),
            cards,
        },
        guidance: GuidanceSectionVm {
            title: lesson.section2.title.clone(),
            items: lesson.section2.guidance.clone(),
        },
        resources: ResourceSectionVm {
            title: lesson.section3.title.clone(),
            items: resources,
        },
        questions,
        glossary: lesson.glossary.clone(),
        scoring_note,
    }
}

fn map_concept_card(concept: &KeyConcept) -> ConceptCardVm {
    let icon = concept.icon().map(|src| ConceptIconVm {
        src: src.to_string(),
        alt: concept.alt_text().map(str::to_string),
    });
    ConceptCardVm {
        title: concept.title.clone(),
        definition: concept.definition.clone(),
        icon,
        example_label: concept.example().map(|example| format!("Example: {example}")),
    }
}

fn map_resource(index: usize, resource: &ResourceItem, open: bool) -> ResourceItemVm {
    ResourceItemVm {
        index,
        name: resource.name.clone(),
        usage: resource.usage.clone(),
        benefit: resource.benefit.clone(),
        open,
        caret: if open { "▲" } else { "▼" },
    }
}

fn map_question(index: usize, question: &Question, state: Option<&QuestionState>) -> QuestionVm {
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(position, option)| OptionVm {
            label: option.label.clone(),
            display: format!("{}. {}", option.label, option.text),
            input_id: format!("q{index}-opt{position}"),
            chosen: state.is_some_and(|state| state.is_chosen(&option.label)),
        })
        .collect();

    QuestionVm {
        index,
        prompt: question.prompt.clone(),
        group_name: format!("question-{index}"),
        options,
        revealed: state.is_some_and(QuestionState::is_revealed),
        feedback: state
            .and_then(|state| state.visible_feedback(question))
            .map(str::to_string),
    }
}
