//! Integration tests for the confwarden CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn get_cmd() -> Command {
    let mut cmd = Command::cargo_bin("confwarden").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a config that verifies only the given files
fn write_verify_config(root: &Path, env: &[&str], server: &[&str], compose: &[&str]) {
    let list = |items: &[&str]| {
        items
            .iter()
            .map(|i| format!("\"{}\"", i))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let content = format!(
        "[verify]\nenv_files = [{}]\nserver_configs = [{}]\ncompose_files = [{}]\n",
        list(env),
        list(server),
        list(compose)
    );
    fs::write(root.join(".confwarden.toml"), content).unwrap();
}

#[test]
fn test_verify_fails_on_default_secret() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join(".env"),
        "# secrets\nJWT_SECRET=your_super_secure_jwt_secret_key_here\n",
    )
    .unwrap();
    write_verify_config(root, &[".env"], &[], &[]);

    get_cmd()
        .current_dir(root)
        .arg("verify")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Line 2: JWT_SECRET still has default value",
        ))
        .stdout(predicate::str::contains("Total issues found: 1"));
}

#[test]
fn test_verify_passes_on_clean_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".env"), "JWT_SECRET=Jd8s0qP1mZkx93\n").unwrap();
    fs::write(root.join("prod.conf"), "server_name shop.acme.io;\n").unwrap();
    write_verify_config(root, &[".env"], &["prod.conf"], &["docker-compose.yml"]);

    get_cmd()
        .current_dir(root)
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("All configuration files look good!"))
        .stdout(predicate::str::contains("docker-compose.yml: Not found"));
}

#[test]
fn test_verify_detects_compose_and_domain_issues() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join("docker-compose.prod.yml"),
        "services:\n  db:\n    environment:\n      POSTGRES_PASSWORD: postgres123\n      HOST: localhost\n",
    )
    .unwrap();
    fs::write(root.join("site.conf"), "server {\n    server_name example.com;\n}\n").unwrap();
    write_verify_config(root, &[], &["site.conf"], &["docker-compose.prod.yml"]);

    get_cmd()
        .current_dir(root)
        .arg("verify")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Default PostgreSQL password 'postgres123' found",
        ))
        .stdout(predicate::str::contains(
            "Default domain 'example.com' found in server_name directive",
        ))
        .stdout(predicate::str::contains("Total issues found: 3"));
}

#[test]
fn test_verify_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".env"), "SMTP_PASS=\n").unwrap();
    write_verify_config(root, &[".env"], &[], &[]);

    let output = get_cmd()
        .current_dir(root)
        .args(["verify", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["clean"], false);
    assert_eq!(value["total_issues"], 1);
    assert_eq!(value["files"][0]["issues"][0]["description"], "SMTP_PASS is empty");
}

#[test]
fn test_verify_writes_report_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_verify_config(root, &[".env"], &[], &[]);

    get_cmd()
        .current_dir(root)
        .args(["verify", "--format", "json", "--output", "report.json"])
        .assert()
        .success();

    let report = fs::read_to_string(root.join("report.json")).unwrap();
    assert!(report.contains("\"missing_files\": 1"));
}

#[test]
fn test_verify_with_explicit_config_and_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".env"), "DOMAIN=courseplatform.com\n").unwrap();
    write_verify_config(root, &[".env"], &[], &[]);

    get_cmd()
        .args(["-C", root.to_str().unwrap(), "verify"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("DOMAIN still has default value"));
}

#[test]
fn test_invalid_config_is_a_runtime_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("broken.toml"), "backup_dir = [").unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["-c", "broken.toml", "verify"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_annotate_from_manifest_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let env = root.join(".env");
    let original = "POSTGRES_PASSWORD=abc123\nLOG_LEVEL=info\n";
    fs::write(&env, original).unwrap();
    let manifest = root.join("files.txt");
    fs::write(&manifest, format!("{}\n", env.display())).unwrap();
    let backups = root.join("backups");

    let annotate = || {
        get_cmd()
            .current_dir(root)
            .arg("annotate")
            .arg("--manifest")
            .arg(&manifest)
            .arg("--backup-dir")
            .arg(&backups)
            .assert()
            .success()
    };

    annotate().stdout(predicate::str::contains(
        "Found 1 configuration files to process",
    ));
    let first = fs::read_to_string(&env).unwrap();
    assert_eq!(
        first,
        "# CHANGE THIS TO: A strong PostgreSQL password (generate with: openssl rand -base64 32)\n\
         POSTGRES_PASSWORD=abc123\nLOG_LEVEL=info\n"
    );
    assert_eq!(fs::read_to_string(backups.join(".env.backup")).unwrap(), original);

    annotate().stdout(predicate::str::contains("0 added, 1 already present"));
    assert_eq!(fs::read_to_string(&env).unwrap(), first);
}

#[test]
fn test_annotate_reports_missing_files_and_continues() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("nginx.conf"), "server {\n    server_name shop.local;\n}\n").unwrap();

    get_cmd()
        .current_dir(root)
        .args([
            "annotate",
            "--backup-dir",
            "backups",
            "gone.env",
            "nginx.conf",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found: gone.env"))
        .stdout(predicate::str::contains("Annotation complete!"));

    let content = fs::read_to_string(root.join("nginx.conf")).unwrap();
    assert_eq!(
        content,
        "server {\n# CHANGE THIS TO: Your actual domain names\n    server_name shop.local;\n}\n"
    );
}

#[test]
fn test_annotate_dry_run_does_not_modify() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".env"), "JWT_SECRET=abc\n").unwrap();

    get_cmd()
        .current_dir(root)
        .args(["annotate", "--dry-run", "--backup-dir", "backups", ".env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+# CHANGE THIS TO: A strong JWT secret key"))
        .stdout(predicate::str::contains("no files were modified"));

    assert_eq!(fs::read_to_string(root.join(".env")).unwrap(), "JWT_SECRET=abc\n");
    assert!(!root.join("backups").exists());
}

#[test]
fn test_annotate_missing_manifest_fails() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["annotate", "--manifest", "nowhere.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read manifest"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join(".confwarden.toml")).unwrap();
    assert!(content.contains("backup_dir = \"/tmp/config-backups\""));
    assert!(content.contains("[verify]"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".confwarden.toml");
    fs::write(&config_path, "backup_dir = \"keep\"\n").unwrap();

    get_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "backup_dir = \"keep\"\n");

    get_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&config_path)
        .unwrap()
        .contains("/tmp/config-backups"));
}
