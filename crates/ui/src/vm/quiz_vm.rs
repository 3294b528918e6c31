use mindmap_core::model::{
    AppState, GradeResult, GradeVerdict, Question, QuestionGrade, QuizAttempt,
};
use services::{PendingSave, QuizLookup, QuizService, Verification};

/// Message shown in the modal when no question set exists for a card.
pub const QUIZ_UNAVAILABLE: &str = "Quiz no disponible para esta sección.";

/// What the quiz overlay is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuizPanel {
    #[default]
    Closed,
    Unavailable,
    Open(QuizSessionVm),
}

impl QuizPanel {
    #[must_use]
    pub fn from_lookup(lookup: QuizLookup) -> Self {
        match lookup {
            QuizLookup::Available(attempt) => Self::Open(QuizSessionVm::new(attempt)),
            QuizLookup::Unavailable { .. } => Self::Unavailable,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// An attempt in progress plus the grade of the last verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSessionVm {
    attempt: QuizAttempt,
    result: Option<GradeResult>,
}

impl QuizSessionVm {
    #[must_use]
    pub fn new(attempt: QuizAttempt) -> Self {
        Self {
            attempt,
            result: None,
        }
    }

    #[must_use]
    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    #[must_use]
    pub fn result(&self) -> Option<&GradeResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.attempt.question_set().title()
    }

    /// Record a radio choice. Earlier feedback stays visible until the next
    /// verification.
    pub fn select(&mut self, quiz: &QuizService, question: usize, option: usize) {
        // Rejected indices are logged by the service; the radio simply stays unset.
        let _ = quiz.record(&mut self.attempt, question, option);
    }

    /// Grade the attempt and keep the result for rendering. On a pass `state`
    /// gained a review and the returned save records it.
    pub fn verify(&mut self, quiz: &QuizService, state: &mut AppState) -> Option<PendingSave> {
        let Verification { result, save } = quiz.verify(state, &self.attempt);
        self.result = Some(result);
        save
    }

    pub fn restart(&mut self, quiz: &QuizService) {
        self.attempt = quiz.restart(&self.attempt);
        self.result = None;
    }

    #[must_use]
    pub fn questions(&self) -> Vec<QuestionVm> {
        self.attempt
            .question_set()
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = self.attempt.selection(index);
                let feedback = self
                    .result
                    .as_ref()
                    .and_then(|result| result.per_question.get(index))
                    .map(|grade| FeedbackVm::new(question, grade));
                QuestionVm::new(index, question, selected, feedback)
            })
            .collect()
    }

    #[must_use]
    pub fn banner(&self) -> Option<ResultBannerVm> {
        self.result.as_ref().map(ResultBannerVm::from)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub input_id: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub heading: String,
    pub prompt: String,
    pub group: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
}

impl QuestionVm {
    fn new(
        index: usize,
        question: &Question,
        selected: Option<usize>,
        feedback: Option<FeedbackVm>,
    ) -> Self {
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(option, label)| OptionVm {
                index: option,
                input_id: format!("q{index}_opt{option}"),
                label: label.clone(),
                checked: selected == Some(option),
            })
            .collect();
        Self {
            index,
            heading: format!("Pregunta {}", index + 1),
            prompt: question.prompt().to_string(),
            group: format!("question_{index}"),
            options,
            feedback,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub class: &'static str,
    pub headline: &'static str,
    pub explanation: Option<String>,
}

impl FeedbackVm {
    fn new(question: &Question, grade: &QuestionGrade) -> Self {
        let explanation = Some(question.explanation().to_string());
        match (grade.answered, grade.correct) {
            (false, _) => Self {
                class: "quiz-explanation quiz-explanation--missing",
                headline: "⚠ No seleccionaste una opción.",
                explanation: None,
            },
            (true, true) => Self {
                class: "quiz-explanation quiz-explanation--correct",
                headline: "✓ Correcto!",
                explanation,
            },
            (true, false) => Self {
                class: "quiz-explanation quiz-explanation--incorrect",
                headline: "✗ Incorrecto.",
                explanation,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultBannerVm {
    pub headline: String,
    pub score_label: String,
}

impl From<&GradeResult> for ResultBannerVm {
    fn from(result: &GradeResult) -> Self {
        let (emoji, message) = match result.verdict() {
            GradeVerdict::Perfect => ("🎯", "¡Perfecto!"),
            GradeVerdict::WellDone => ("👍", "¡Muy bien!"),
            GradeVerdict::KeepPracticing => ("📚", "Sigue practicando"),
        };
        Self {
            headline: format!("{emoji} {message}"),
            score_label: format!(
                "{} / {} ({}%)",
                result.scored,
                result.total,
                result.percentage()
            ),
        }
    }
}
