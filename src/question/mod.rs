//! Question preprocessing
//!
//! Everything that looks at the user's English question before a prompt is
//! assembled: salary normalisation, the incompleteness heuristic and the
//! sample questions offered in the dropdown.

mod incomplete;
mod salary;
mod samples;

pub(crate) use incomplete::is_incomplete;
pub(crate) use salary::normalize_unless_lpa;
pub(crate) use samples::{PLACEHOLDER, SAMPLES, Sample, sample_at};
