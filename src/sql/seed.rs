//! Create the placement schema (and optional demo rows) in a new SQLite file

use rusqlite::Connection;

use crate::error::QueryError;

use super::executor::Database;

const SCHEMA_SQL: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS student (
    student_id      INTEGER PRIMARY KEY,
    name            TEXT NOT NULL,
    branch          TEXT NOT NULL,
    skills          TEXT,
    cgpa            REAL,
    graduation_year INTEGER
);

CREATE TABLE IF NOT EXISTS companies (
    company_id  INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    sector      TEXT,
    visit_month TEXT
);

CREATE TABLE IF NOT EXISTS offers (
    offer_id    INTEGER PRIMARY KEY,
    student_id  INTEGER NOT NULL REFERENCES student(student_id),
    company_id  INTEGER NOT NULL REFERENCES companies(company_id),
    package_lpa REAL NOT NULL,
    job_role    TEXT
);
";

const SAMPLE_DATA_SQL: &str = "
INSERT INTO student (student_id, name, branch, skills, cgpa, graduation_year) VALUES
    (1, 'Aarav Sharma', 'CSE', 'Python, SQL, Machine Learning', 9.2, 2024),
    (2, 'Diya Patel', 'ECE', 'Embedded C, VLSI', 8.4, 2024),
    (3, 'Rohan Gupta', 'CSE', 'Java, Spring', 7.9, 2025),
    (4, 'Ananya Iyer', 'IT', 'Python, Data Analysis', 9.5, 2024),
    (5, 'Kabir Singh', 'MECH', 'AutoCAD, Python', 7.1, 2025),
    (6, 'Meera Nair', 'CSE', 'C++, Algorithms', 8.8, 2023),
    (7, 'Vikram Rao', 'EEE', 'MATLAB, Power Systems', 6.9, 2025),
    (8, 'Sneha Reddy', 'IT', 'JavaScript, React', 8.1, 2024);

INSERT INTO companies (company_id, name, sector, visit_month) VALUES
    (1, 'Google', 'Tech', 'December'),
    (2, 'Microsoft', 'Tech', 'November'),
    (3, 'Goldman Sachs', 'Finance', 'October'),
    (4, 'Deloitte', 'Consulting', 'September'),
    (5, 'JP Morgan', 'Finance', 'January'),
    (6, 'Infosys', 'IT Services', 'August');

INSERT INTO offers (offer_id, student_id, company_id, package_lpa, job_role) VALUES
    (1, 1, 1, 32.0, 'Software Engineer'),
    (2, 4, 3, 24.5, 'Analyst'),
    (3, 6, 2, 28.0, 'Software Engineer'),
    (4, 2, 6, 6.5, 'Systems Engineer'),
    (5, 3, 4, 9.0, 'Consultant'),
    (6, 8, 6, 6.5, 'Systems Engineer'),
    (7, 1, 5, 18.0, 'Quant Developer'),
    (8, 4, 1, 30.0, 'Data Scientist');
";

impl Database {
    /// Create the three placement tables, optionally filled with demo rows
    pub(crate) fn initialize(&self, sample_data: bool) -> Result<(), QueryError> {
        let conn = Connection::open(self.path())?;
        conn.execute_batch(SCHEMA_SQL)?;
        if sample_data {
            conn.execute_batch(SAMPLE_DATA_SQL)?;
        }
        tracing::info!(
            database = %self.path().display(),
            sample_data,
            "database initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::CellValue;

    #[test]
    fn empty_schema_has_three_tables() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("empty.db"));
        db.initialize(false).unwrap();

        let result = db
            .execute("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name;")
            .unwrap();
        let names: Vec<String> = result.rows.iter().map(|r| r[0].to_string()).collect();
        assert_eq!(names, vec!["companies", "offers", "student"]);

        let count = db.execute("SELECT COUNT(*) FROM student;").unwrap();
        assert_eq!(count.rows[0][0], CellValue::Integer(0));
    }

    #[test]
    fn sample_data_answers_the_unplaced_question() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("demo.db"));
        db.initialize(true).unwrap();

        let result = db
            .execute(
                "SELECT s.name FROM student s
                 LEFT JOIN offers o ON s.student_id = o.student_id
                 WHERE o.offer_id IS NULL
                 ORDER BY s.student_id;",
            )
            .unwrap();
        let names: Vec<String> = result.rows.iter().map(|r| r[0].to_string()).collect();
        assert_eq!(names, vec!["Kabir Singh", "Vikram Rao"]);
    }

    #[test]
    fn offers_reference_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("fk.db"));
        db.initialize(true).unwrap();

        let orphans = db
            .execute(
                "SELECT COUNT(*) FROM offers o
                 LEFT JOIN student s ON s.student_id = o.student_id
                 LEFT JOIN companies c ON c.company_id = o.company_id
                 WHERE s.student_id IS NULL OR c.company_id IS NULL;",
            )
            .unwrap();
        assert_eq!(orphans.rows[0][0], CellValue::Integer(0));
    }
}
