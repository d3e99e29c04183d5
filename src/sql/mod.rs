//! SQL handling: extraction from model replies, the read-only guard and
//! execution against the placement database.

mod executor;
mod extract;
mod guard;
mod seed;

pub(crate) use executor::{CellValue, Database, QueryOutcome, QueryResult};
pub(crate) use extract::{explanation, extract_sql};
