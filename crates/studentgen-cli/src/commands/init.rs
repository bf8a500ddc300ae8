//! The `studentgen init` command.

use std::path::Path;

use anyhow::Result;

const CONFIG_FILE: &str = "studentgen.toml";

pub fn execute() -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Export STUDENTGEN_API_KEY (or MY_API_KEY) with your Gemini key");
    println!("  2. Run: studentgen generate --count 10");
    println!("  3. Run: studentgen ask \"What is the average age of the students?\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studentgen configuration

model = "gemini-2.0-flash"
temperature = 1.0
max_tokens = 1024
timeout_secs = 120
database_path = "student.db"

[provider]
type = "gemini"
api_key = "${STUDENTGEN_API_KEY}"

# OpenAI-compatible endpoint instead:
# [provider]
# type = "openai"
# api_key = "${OPENAI_API_KEY}"
# base_url = "http://localhost:8000"

# Offline runs with canned profiles:
# [provider]
# type = "mock"
"#;
