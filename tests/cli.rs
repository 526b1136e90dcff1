//! CLI behavior tests: exit codes, artifact layout, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_REPORT: &str = r#"{
  "suites": [
    {
      "title": "auth.spec.ts",
      "file": "auth.spec.ts",
      "specs": [
        {"title": "logs in", "results": [{"status": "passed", "duration": 120}]},
        {"title": "rejects bad password", "results": [{"status": "failed", "duration": 80, "error": {"message": "expected 401"}}]}
      ],
      "suites": [
        {
          "title": "password reset",
          "specs": [
            {"title": "sends email", "results": [{"status": "skipped"}]}
          ]
        }
      ]
    }
  ]
}"#;

fn tidy_report_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tidy-report"))
}

fn write_sample(dir: &Path) {
    fs::write(dir.join("results.json"), SAMPLE_REPORT).unwrap();
}

#[test]
fn generate_missing_input_exit_1() {
    let dir = TempDir::new().unwrap();
    let mut cmd = tidy_report_cmd();
    cmd.current_dir(dir.path()).arg("generate");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn generate_unparseable_json_exit_1() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.json"), "{broken").unwrap();
    let mut cmd = tidy_report_cmd();
    cmd.current_dir(dir.path()).arg("generate");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn generate_writes_artifact_directory() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path());
    let mut cmd = tidy_report_cmd();
    cmd.current_dir(dir.path()).arg("generate");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Report generated"));

    let out = dir.path().join("html-report");
    assert!(out.join("index.html").exists());
    assert!(out.join("style.css").exists());
    assert!(out.join("app.js").exists());
}

#[test]
fn generate_accepts_explicit_input_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("run.json"), SAMPLE_REPORT).unwrap();
    let mut cmd = tidy_report_cmd();
    cmd.current_dir(dir.path()).arg("generate").arg("run.json");
    cmd.assert().success();
    assert!(dir.path().join("html-report/index.html").exists());
}

#[test]
fn generated_page_embeds_report_data() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path());
    tidy_report_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("html-report/index.html")).unwrap();
    assert!(html.contains("<script id=\"report-data\" type=\"application/json\">"));

    let open = "<script id=\"report-data\" type=\"application/json\">";
    let start = html.find(open).unwrap() + open.len();
    let end = html[start..].find("</script>").unwrap() + start;
    let parsed: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
    assert_eq!(parsed["summary"]["total"], 3);
    assert_eq!(parsed["summary"]["passed"], 1);
    assert_eq!(parsed["summary"]["failed"], 1);
    assert_eq!(parsed["summary"]["skipped"], 1);
    assert_eq!(parsed["summary"]["passRate"], "33%");
    assert_eq!(parsed["tests"][0]["fullTitle"], "auth.spec.ts > logs in");
}

#[test]
fn json_flag_prints_report_without_writing_files() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path());
    let output = tidy_report_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let s = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(parsed["summary"]["total"], 3);
    assert!(
        !dir.path().join("html-report").exists(),
        "--json must not write the HTML artifact"
    );
}

#[test]
fn quiet_flag_suppresses_summary() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path());
    let output = tidy_report_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--quiet")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("Test Run Summary"),
        "quiet mode should not print the summary block"
    );
    assert!(dir.path().join("html-report/index.html").exists());
}

#[test]
fn output_flag_overrides_destination() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path());
    tidy_report_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--output")
        .arg("public/report")
        .assert()
        .success();
    assert!(dir.path().join("public/report/index.html").exists());
    assert!(!dir.path().join("html-report").exists());
}

#[test]
fn missing_suites_key_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.json"), "{}").unwrap();
    tidy_report_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stderr(predicate::str::contains("No suites found"));

    let html = fs::read_to_string(dir.path().join("html-report/index.html")).unwrap();
    assert!(html.contains("\"total\": 0"));
    assert!(html.contains("\"passRate\": \"0%\""));
}

#[test]
fn template_dir_with_missing_asset_exit_1() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path());
    let templates = dir.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("index.html"), "<body></body>").unwrap();
    // style.css and app.js deliberately absent

    tidy_report_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .arg("--template-dir")
        .arg("templates")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing template asset"));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("run.json"), SAMPLE_REPORT).unwrap();
    fs::write(
        dir.path().join(".tidyreportrc.json"),
        r#"{"input": "run.json", "output": "out"}"#,
    )
    .unwrap();
    tidy_report_cmd()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success();
    assert!(dir.path().join("out/index.html").exists());
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    let mut cmd = tidy_report_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert().success();

    let config_path = dir.path().join(".tidyreportrc.json");
    assert!(config_path.exists(), ".tidyreportrc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("input"));
    assert!(content.contains("output"));
}

#[test]
fn init_twice_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    tidy_report_cmd()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success();
    tidy_report_cmd()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_with_templates_exports_assets() {
    let dir = TempDir::new().unwrap();
    tidy_report_cmd()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--templates")
        .assert()
        .success();

    let tdir = dir.path().join("report-templates");
    assert!(tdir.join("index.html").exists());
    assert!(tdir.join("style.css").exists());
    assert!(tdir.join("app.js").exists());

    let config = fs::read_to_string(dir.path().join(".tidyreportrc.json")).unwrap();
    assert!(config.contains("report-templates"));
}
