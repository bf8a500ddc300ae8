//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use studentgen_core::NewStudent;
use studentgen_store::Storage;

/// A command isolated from the developer's config, `.env`, and API keys.
fn studentgen(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("studentgen").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("STUDENTGEN_API_KEY")
        .env_remove("MY_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn student(name: &str, age: u32, marks: u32, department: &str, hobbies: &str) -> NewStudent {
    NewStudent {
        name: name.into(),
        age,
        marks,
        department: department.into(),
        hobbies: hobbies.into(),
        sport: "Cricket".into(),
    }
}

async fn seed(db: &Path) {
    let storage = Storage::open(db).await.unwrap();
    for s in [
        student("Asha", 20, 80, "Computer Science", "Reading, Chess"),
        student("Ben", 22, 65, "Mechanical", "Chess"),
        student("Cara", 24, 80, "Computer Science", "Painting"),
    ] {
        storage.insert_student(&s).await.unwrap();
    }
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("synthetic student records"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("studentgen"));
}

#[test]
fn questions_lists_triggers() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("average age"))
        .stdout(predicate::str::contains("distribution of marks"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    studentgen(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created studentgen.toml"));

    assert!(dir.path().join("studentgen.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    studentgen(dir.path()).arg("init").assert().success();

    studentgen(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn unrecognised_question_gets_sentinel() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .args(["ask", "What", "is", "the", "weather?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sorry, I couldn't understand the question.",
        ));
}

#[test]
fn aggregate_over_empty_store_fails() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .args(["ask", "What is the average age of the students?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("studentgen generate"));
}

#[test]
fn records_on_empty_store() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .arg("records")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found in the database."));

    assert!(dir.path().join("student.db").exists());
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .args(["--config", "nope.toml", "records"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn generate_without_api_key_fails() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .args(["generate", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API key configured"));
}

#[tokio::test]
async fn ask_answers_from_seeded_store() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("seeded.db");
    seed(&db).await;

    studentgen(dir.path())
        .arg("--db")
        .arg(&db)
        .args(["ask", "What is the average age of the students?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The average age of the students is 22.00 years.",
        ));

    studentgen(dir.path())
        .arg("--db")
        .arg(&db)
        .args(["ask", "Count the students in the Computer Science department"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There are 2 students in the Computer Science department.",
        ));

    studentgen(dir.path())
        .arg("--db")
        .arg(&db)
        .args(["ask", "What are the most common hobbies?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The most common hobby among students is Chess.",
        ));
}

#[tokio::test]
async fn ask_distribution_as_json() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("seeded.db");
    seed(&db).await;

    let output = studentgen(dir.path())
        .arg("--db")
        .arg(&db)
        .args(["ask", "--json", "Show the distribution of marks"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "frequency");
    assert_eq!(value["value"]["80"], 2);
    assert_eq!(value["value"]["65"], 1);
}

#[tokio::test]
async fn records_shows_table() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("seeded.db");
    seed(&db).await;

    studentgen(dir.path())
        .arg("--db")
        .arg(&db)
        .args(["records", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asha"))
        .stdout(predicate::str::contains("Ben"))
        .stdout(predicate::str::contains("Cara").not())
        .stdout(predicate::str::contains("Showing 2 of 3 records."));
}

#[test]
fn generate_with_mock_provider() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("studentgen.toml"),
        "database_path = \"data/students.db\"\n\n[provider]\ntype = \"mock\"\n",
    )
    .unwrap();

    studentgen(dir.path())
        .args(["generate", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted 3 generated student records"));

    studentgen(dir.path())
        .args(["ask", "List all student names"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ananya Rao"));

    studentgen(dir.path())
        .args(["ask", "List all student sports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Badminton"));
}

#[test]
fn generate_skips_blank_responses() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("studentgen.toml"),
        "[provider]\ntype = \"mock\"\nresponses = [\"**Name:** Zoe\\n**Age:** 21\", \"\"]\n",
    )
    .unwrap();

    studentgen(dir.path())
        .args(["generate", "--count", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted 2 generated student records"));
}

#[test]
fn generate_rejects_zero_count() {
    let dir = TempDir::new().unwrap();
    studentgen(dir.path())
        .args(["generate", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
