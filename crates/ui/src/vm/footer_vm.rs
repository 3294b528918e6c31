use std::fmt;

use services::BookmarkSummary;

/// How long the reset button keeps its confirmation label.
pub const RESET_CONFIRMATION_MS: u64 = 2_000;

pub const RESET_PROMPT: &str = "¿Estás seguro de que quieres reiniciar todo tu progreso?";

const COMING_SOON: &str = "Herramienta en desarrollo - Próximamente disponible.";

/// Reset button lifecycle: ask, then flash a confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetPhase {
    #[default]
    Idle,
    Confirming,
    Done,
}

impl ResetPhase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle | Self::Confirming => "Reiniciar Progreso",
            Self::Done => "¡Reiniciado!",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Idle | Self::Confirming => "fas fa-redo",
            Self::Done => "fas fa-check",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterTool {
    GenerateQuiz,
    Flashcards,
    PrintSummary,
    MechanismSimulator,
    ReactionPredictor,
    SynthesisPlanner,
}

impl FooterTool {
    pub const ALL: [Self; 6] = [
        Self::GenerateQuiz,
        Self::Flashcards,
        Self::PrintSummary,
        Self::MechanismSimulator,
        Self::ReactionPredictor,
        Self::SynthesisPlanner,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GenerateQuiz => "Generar Quiz",
            Self::Flashcards => "Tarjetas de Estudio",
            Self::PrintSummary => "Imprimir Resumen",
            Self::MechanismSimulator => "Simulador de Mecanismos",
            Self::ReactionPredictor => "Predictor de Reacciones",
            Self::SynthesisPlanner => "Planificador de Síntesis",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::GenerateQuiz => "fas fa-question-circle",
            Self::Flashcards => "fas fa-layer-group",
            Self::PrintSummary => "fas fa-print",
            Self::MechanismSimulator => "fas fa-cogs",
            Self::ReactionPredictor => "fas fa-magic",
            Self::SynthesisPlanner => "fas fa-route",
        }
    }

    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::GenerateQuiz => "generateQuiz",
            Self::Flashcards => "flashcards",
            Self::PrintSummary => "printSummary",
            Self::MechanismSimulator => "mechanismSimulator",
            Self::ReactionPredictor => "reactionPredictor",
            Self::SynthesisPlanner => "synthesisPlanner",
        }
    }

    /// Notice shown after clicking the tool. `None` means the tool acts instead
    /// (printing).
    #[must_use]
    pub fn notice(self, bookmarks: BookmarkSummary) -> Option<String> {
        match self {
            Self::GenerateQuiz => Some(
                "Próximamente: Generador de quizzes personalizados basado en tu progreso."
                    .to_string(),
            ),
            Self::Flashcards => Some(bookmarks.message()),
            Self::PrintSummary => None,
            Self::MechanismSimulator | Self::ReactionPredictor | Self::SynthesisPlanner => {
                Some(COMING_SOON.to_string())
            }
        }
    }
}

impl fmt::Display for FooterTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}
