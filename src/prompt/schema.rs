/// First prompt part: the placement schema, worked examples and output rules
pub(crate) const SCHEMA_PROMPT: &str = r#"
You are an expert in converting English questions to SQL queries!
The SQL database contains the following tables and columns:

1 **STUDENT Table**
   - student_id (Primary Key)
   - name
   - branch
   - skills
   - cgpa
   - graduation_year

2 **COMPANIES Table**
   - company_id (Primary Key)
   - name
   - sector
   - visit_month

3 **OFFERS Table**
   - offer_id (Primary Key)
   - student_id (Foreign Key → STUDENT.student_id)
   - company_id (Foreign Key → COMPANIES.company_id)
   - package_lpa
   - job_role

**Examples:**
- "How many students are in the database?"
  **SQL Query:** SELECT COUNT(*) FROM student;

- "List all students in the Computer Science branch."
  **SQL Query:** SELECT * FROM student WHERE branch = 'CSE';

- "Find companies in the Finance sector."
  **SQL Query:** SELECT * FROM companies WHERE sector = 'Finance';

- "Show job offers where the package is more than 20 LPA."
  **SQL Query:** SELECT * FROM offers WHERE package_lpa > 20;

- "Find all students who have offers in Google."
  **SQL Query:**
    SELECT s.name, o.job_role, o.package_lpa
    FROM student s
    JOIN offers o ON s.student_id = o.student_id
    JOIN companies c ON o.company_id = c.company_id
    WHERE c.name = 'Google';

**Important Rules:**
- The SQL query should NOT include ```sql formatting or backticks.
- The SQL query should be properly formatted for SQLite.
"#;

/// Table descriptions for the about page: (table, [(column, type, note)])
pub(crate) const SCHEMA_TABLES: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "student",
        &[
            ("student_id", "INTEGER", "Primary Key"),
            ("name", "TEXT", ""),
            ("branch", "TEXT", ""),
            ("skills", "TEXT", ""),
            ("cgpa", "REAL", ""),
            ("graduation_year", "INTEGER", ""),
        ],
    ),
    (
        "companies",
        &[
            ("company_id", "INTEGER", "Primary Key"),
            ("name", "TEXT", ""),
            ("sector", "TEXT", ""),
            ("visit_month", "TEXT", ""),
        ],
    ),
    (
        "offers",
        &[
            ("offer_id", "INTEGER", "Primary Key"),
            ("student_id", "INTEGER", "Foreign Key → student.student_id"),
            ("company_id", "INTEGER", "Foreign Key → companies.company_id"),
            ("package_lpa", "REAL", ""),
            ("job_role", "TEXT", ""),
        ],
    ),
];
