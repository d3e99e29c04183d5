use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Nothing listens on the discard port, so model calls fail fast
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("llmsql-{prefix}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

/// Run the binary with `home` as an isolated HOME and no inherited settings
fn run_llmsql(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_llmsql").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("llmsql.exe");
        } else {
            path.push("llmsql");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("DB_PATH")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("RUST_LOG");
    let output = cmd.output().expect("run llmsql");
    (output.status.success(), output.stdout, output.stderr)
}

fn init_demo_db(root: &Path) -> PathBuf {
    let db = root.join("placement.db");
    let db_arg = db.to_string_lossy().into_owned();
    let (ok, _, stderr) = run_llmsql(&["init-db", "-d", &db_arg], root);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    db
}

#[test]
fn exec_json_returns_rows_from_seeded_database() {
    let root = unique_temp_dir("exec-json");
    let db = init_demo_db(&root);
    let db_arg = db.to_string_lossy().into_owned();

    let (ok, stdout, stderr) = run_llmsql(
        &[
            "exec",
            "-j",
            "-d",
            &db_arg,
            "SELECT name FROM companies WHERE sector = 'Finance' ORDER BY company_id;",
        ],
        &root,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["result"]["columns"], serde_json::json!(["name"]));
    assert_eq!(
        json["result"]["rows"],
        serde_json::json!([["Goldman Sachs"], ["JP Morgan"]])
    );
    assert_eq!(json["result"]["row_count"].as_u64(), Some(2));
    assert!(json["generated_at"].as_str().is_some());
}

#[test]
fn exec_rejects_delete_and_leaves_data() {
    let root = unique_temp_dir("exec-delete");
    let db = init_demo_db(&root);
    let db_arg = db.to_string_lossy().into_owned();

    let (ok, stdout, _) = run_llmsql(&["exec", "-d", &db_arg, "DELETE FROM student;"], &root);
    assert!(!ok);
    let stdout = String::from_utf8_lossy(&stdout);
    assert!(stdout.contains("Error: Can't delete from the database."), "{stdout}");

    let (ok, stdout, _) = run_llmsql(
        &["exec", "--csv", "-d", &db_arg, "SELECT COUNT(*) AS n FROM student;"],
        &root,
    );
    assert!(ok);
    assert_eq!(String::from_utf8_lossy(&stdout), "n\n8\n");
}

#[test]
fn exec_without_database_fails() {
    let root = unique_temp_dir("exec-missing");
    let db_arg = root.join("absent.db").to_string_lossy().into_owned();

    let (ok, stdout, _) = run_llmsql(&["exec", "-d", &db_arg, "SELECT 1;"], &root);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stdout).contains("Error: Database not found"));
}

#[test]
fn init_db_requires_force_to_replace() {
    let root = unique_temp_dir("init-force");
    let db = init_demo_db(&root);
    let db_arg = db.to_string_lossy().into_owned();

    let (ok, _, stderr) = run_llmsql(&["init-db", "-d", &db_arg], &root);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Database already exists"));

    let (ok, _, stderr) = run_llmsql(&["init-db", "--force", "--empty", "-d", &db_arg], &root);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let (ok, stdout, _) = run_llmsql(
        &["exec", "--csv", "-d", &db_arg, "SELECT COUNT(*) AS n FROM offers;"],
        &root,
    );
    assert!(ok);
    assert_eq!(String::from_utf8_lossy(&stdout), "n\n0\n");
}

#[test]
fn samples_json_lists_every_sample() {
    let root = unique_temp_dir("samples");
    let (ok, stdout, stderr) = run_llmsql(&["samples", "-j"], &root);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 13);
    assert_eq!(arr[0]["question"].as_str(), Some("How many students are in the database?"));
    assert_eq!(arr[12]["number"].as_u64(), Some(13));
}

#[test]
fn samples_csv_outputs_header() {
    let root = unique_temp_dir("samples-csv");
    let (ok, stdout, _) = run_llmsql(&["samples", "--csv"], &root);
    assert!(ok);
    let stdout = String::from_utf8_lossy(&stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("number,tier,label,question"));
    assert_eq!(lines.count(), 13);
}

#[test]
fn ask_against_unreachable_api_reports_error() {
    let root = unique_temp_dir("ask-unreachable");
    let (ok, stdout, _) = run_llmsql(
        &[
            "ask",
            "-j",
            "--api-base",
            UNREACHABLE_API,
            "--api-key",
            "dummy",
            "--timeout",
            "5",
            "How many students are in the database?",
        ],
        &root,
    );
    assert!(!ok);

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["notice"]["level"].as_str(), Some("error"));
    assert!(
        json["notice"]["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Error:"))
    );
    assert!(json["sql"].is_null());
}

#[test]
fn ask_without_api_key_reports_error() {
    let root = unique_temp_dir("ask-no-key");
    let (ok, stdout, _) = run_llmsql(
        &["ask", "--api-base", UNREACHABLE_API, "How many students are in the database?"],
        &root,
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stdout).contains("Error: GOOGLE_API_KEY is not set"));
}

#[test]
fn ask_incomplete_question_only_warns() {
    let root = unique_temp_dir("ask-incomplete");
    let (ok, stdout, stderr) = run_llmsql(
        &["ask", "--api-base", UNREACHABLE_API, "--api-key", "dummy", "list data"],
        &root,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let stdout = String::from_utf8_lossy(&stdout);
    assert!(stdout.contains("looks incomplete"), "{stdout}");
    assert!(!stdout.contains("Generated SQL Query"));
}

#[test]
fn about_page_lists_schema() {
    let root = unique_temp_dir("about");
    let (ok, stdout, _) = run_llmsql(&["about", "--no-color"], &root);
    assert!(ok);
    let stdout = String::from_utf8_lossy(&stdout);
    assert!(stdout.contains("About LLM SQL Query Generator"));
    assert!(stdout.contains("package_lpa"));
}

#[test]
fn config_file_supplies_database_path() {
    let root = unique_temp_dir("config-db");
    let db = init_demo_db(&root);
    write_file(
        &root.join(".llmsql.toml"),
        &format!("database = {:?}\n", db.to_string_lossy()),
    );

    let (ok, stdout, stderr) = run_llmsql(
        &["exec", "--csv", "SELECT COUNT(*) AS n FROM companies;"],
        &root,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert_eq!(String::from_utf8_lossy(&stdout), "n\n6\n");
}

#[test]
fn unknown_flag_exits_with_error() {
    let root = unique_temp_dir("bad-flag");
    let (ok, _, stderr) = run_llmsql(&["samples", "--bogus"], &root);
    assert!(!ok);
    assert!(!stderr.is_empty());
}
