//! Sample questions offered on the home page

use serde::Serialize;

/// Label shown when no sample is selected
pub(crate) const PLACEHOLDER: &str = "Select a query";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Tier {
    Simple,
    Medium,
    Complex,
}

impl Tier {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Tier::Simple => "Simple",
            Tier::Medium => "Medium",
            Tier::Complex => "Complex",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct Sample {
    pub(crate) tier: Tier,
    pub(crate) label: &'static str,
    pub(crate) question: &'static str,
}

impl Sample {
    /// Dropdown text, e.g. "Simple → Count students"
    pub(crate) fn display_label(&self) -> String {
        format!("{} → {}", self.tier.label(), self.label)
    }
}

const fn sample(tier: Tier, label: &'static str, question: &'static str) -> Sample {
    Sample {
        tier,
        label,
        question,
    }
}

pub(crate) const SAMPLES: &[Sample] = &[
    sample(Tier::Simple, "Count students", "How many students are in the database?"),
    sample(Tier::Simple, "Companies in Finance", "Find companies in the Finance sector."),
    sample(
        Tier::Simple,
        "Students in CS branch",
        "List all students in the Computer Science branch.",
    ),
    sample(
        Tier::Simple,
        "Offers above 10 LPA",
        "Show job offers where the package is more than 10 LPA.",
    ),
    sample(Tier::Medium, "Students with high CGPA", "List students who have a CGPA above 9."),
    sample(
        Tier::Medium,
        "Companies visiting in December",
        "Which companies are visiting in December?",
    ),
    sample(
        Tier::Medium,
        "Total offers per student",
        "Show the number of offers each student received.",
    ),
    sample(
        Tier::Medium,
        "Average package per company",
        "Find the average offered package for each company.",
    ),
    sample(
        Tier::Complex,
        "Students placed in tech sector with >20 LPA",
        "List students placed in tech companies with a package over 20 LPA.",
    ),
    sample(
        Tier::Complex,
        "Students not placed",
        "Find students who haven't received any job offers.",
    ),
    sample(
        Tier::Complex,
        "Offers with multiple students per role",
        "List job roles offered to more than one student.",
    ),
    sample(
        Tier::Complex,
        "Students placed before graduation year 2024",
        "Which students got placed before their graduation year 2024?",
    ),
    sample(
        Tier::Complex,
        "Top 3 highest package offers with student & company",
        "Show top 3 highest package offers along with student and company details.",
    ),
];

/// Look up a sample by its 1-based position in the dropdown
pub(crate) fn sample_at(number: usize) -> Option<&'static Sample> {
    number.checked_sub(1).and_then(|i| SAMPLES.get(i))
}
