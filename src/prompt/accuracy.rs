use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How literally the model should read the question
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Accuracy {
    /// Only what the question literally asks
    Precise,
    /// Moderate flexibility (default)
    #[default]
    Balanced,
    /// Free reinterpretation of vague questions
    Creative,
}

impl Accuracy {
    pub(crate) const ALL: [Accuracy; 3] =
        [Accuracy::Precise, Accuracy::Balanced, Accuracy::Creative];

    /// Dropdown label
    pub(crate) fn label(self) -> &'static str {
        match self {
            Accuracy::Precise => "Precise (100%)",
            Accuracy::Balanced => "Balanced(50%-90%)",
            Accuracy::Creative => "Creative (<50%)",
        }
    }

    /// Instruction appended to the question in the prompt
    pub(crate) fn tuning_instruction(self) -> &'static str {
        match self {
            Accuracy::Precise => {
                "ONLY generate SQL that directly matches the question. \
                 DO NOT make any assumptions, DO NOT infer or simplify. \
                 Stick to the exact words in the question."
            }
            Accuracy::Balanced => {
                "Interpret the question with moderate flexibility. \
                 You may infer straightforward relationships, but do not guess. \
                 Make the SQL slightly broader if it improves clarity."
            }
            Accuracy::Creative => {
                "Be imaginative and exploratory. You can freely assume relationships or missing conditions. \
                 Reframe or reinterpret vague questions. \
                 Even if the question is unclear or partial, still try to generate a reasonable SQL query that adds your own interpretation."
            }
        }
    }

    /// Parse a level typed at the prompt: "precise", "p", "balanced", ...
    pub(crate) fn parse_level(input: &str) -> Option<Self> {
        let lowered = input.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|level| {
            let name = level.name();
            name == lowered || name.starts_with(&lowered) || level.label().to_lowercase() == lowered
        })
    }

    fn name(self) -> &'static str {
        match self {
            Accuracy::Precise => "precise",
            Accuracy::Balanced => "balanced",
            Accuracy::Creative => "creative",
        }
    }
}
