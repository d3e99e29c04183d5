mod csv;
mod format;
mod json;
mod page;
mod table;

pub(crate) use csv::{result_csv, samples_csv};
pub(crate) use json::{exec_json, samples_json, session_json};
pub(crate) use page::{render_about, render_outcome, render_page};
pub(crate) use table::samples_table;
