/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.acme</groupId>
  <artifactId>remove-maven-extension-test</artifactId>
  <version>0.0.1-SNAPSHOT</version>
  <dependencies>
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-resteasy</artifactId>
    </dependency>
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-agroal</artifactId>
    </dependency>
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-arc</artifactId>
    </dependency>
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-jdbc-postgresql</artifactId>
    </dependency>
    <dependency>
      <groupId>io.quarkus</groupId>
      <artifactId>quarkus-hibernate-search-elasticsearch</artifactId>
    </dependency>
    <dependency>
      <groupId>commons-io</groupId>
      <artifactId>commons-io</artifactId>
      <version>2.6</version>
    </dependency>
  </dependencies>
</project>
"#;

const BUILD_GRADLE: &str = r#"dependencies {
    implementation enforcedPlatform("${quarkusPlatformGroupId}:${quarkusPlatformArtifactId}:${quarkusPlatformVersion}")
    implementation 'io.quarkus:quarkus-resteasy'
    implementation 'io.quarkus:quarkus-vertx'
    implementation 'commons-io:commons-io:2.6'
}
"#;

fn project_with(file: &str, content: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(file), content).unwrap();
    temp_dir
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - every query matched
    #[test]
    fn test_exit_code_success() {
        let project = project_with("pom.xml", POM);

        cargo_bin_cmd!("ext-remove")
            .arg("-p")
            .arg(project.path())
            .arg("agroal")
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("ext-remove").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("ext-remove").arg("--version").assert().code(0);
    }

    /// Exit code 1: at least one query did not match
    #[test]
    fn test_exit_code_unmatched_query() {
        let project = project_with("pom.xml", POM);

        cargo_bin_cmd!("ext-remove")
            .arg("-p")
            .arg(project.path())
            .args(["missing", "agroal"])
            .assert()
            .code(1);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("ext-remove")
            .args(["--invalid-option", "agroal"])
            .assert()
            .code(2);
    }

    /// Exit code 2: No extension given
    #[test]
    fn test_exit_code_missing_extensions() {
        cargo_bin_cmd!("ext-remove").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("ext-remove")
            .args(["-f", "invalid_format", "agroal"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent project path
    #[test]
    fn test_exit_code_application_error_nonexistent_path() {
        cargo_bin_cmd!("ext-remove")
            .args(["-p", "/nonexistent/path/that/does/not/exist", "agroal"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Directory does not exist"));
    }

    /// Exit code 3: Application error - path is a file, not a directory
    #[test]
    fn test_exit_code_application_error_file_not_directory() {
        cargo_bin_cmd!("ext-remove")
            .args(["-p", "Cargo.toml", "agroal"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - no build descriptor
    #[test]
    fn test_exit_code_application_error_no_descriptor() {
        let empty = TempDir::new().unwrap();

        cargo_bin_cmd!("ext-remove")
            .arg("-p")
            .arg(empty.path())
            .arg("agroal")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No build descriptor found"));
    }
}

#[test]
fn test_e2e_maven_mixed_queries() {
    let project = project_with("pom.xml", POM);

    cargo_bin_cmd!("ext-remove")
        .arg("-p")
        .arg(project.path())
        .args(["jdbc-postgre,agroal", "quarkus-arc", "commons-io:commons-io:2.6"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "✅ Removed io.quarkus:quarkus-jdbc-postgresql ('jdbc-postgre')",
        ))
        .stdout(predicate::str::contains("📦 Removed 4 dependency(ies)"));

    let pom = read(project.path(), "pom.xml");
    assert!(pom.contains("quarkus-resteasy"));
    assert!(pom.contains("quarkus-hibernate-search-elasticsearch"));
    assert!(!pom.contains("quarkus-agroal"));
    assert!(!pom.contains("<artifactId>quarkus-arc</artifactId>"));
    assert!(!pom.contains("quarkus-jdbc-postgresql"));
    assert!(!pom.contains("commons-io"));
}

#[test]
fn test_e2e_rerun_reports_unmatched() {
    let project = project_with("pom.xml", POM);
    let run = || {
        cargo_bin_cmd!("ext-remove")
            .arg("-p")
            .arg(project.path())
            .arg("commons-io:commons-io:2.6")
            .assert()
    };

    run().code(0);
    run()
        .code(1)
        .stdout(predicate::str::contains(
            "❌ Cannot find a dependency matching 'commons-io:commons-io:2.6', maybe a typo?",
        ))
        .stdout(predicate::str::contains("📦 No changes to"));
}

#[test]
fn test_e2e_invalid_coordinate() {
    let project = project_with("pom.xml", POM);

    cargo_bin_cmd!("ext-remove")
        .arg("-p")
        .arg(project.path())
        .arg("io.quarkus:")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "'io.quarkus:' is not a valid group:artifact[:version] coordinate",
        ));

    assert_eq!(read(project.path(), "pom.xml"), POM);
}

#[test]
fn test_e2e_gradle_glob_and_fragment() {
    let project = project_with("build.gradle", BUILD_GRADLE);

    cargo_bin_cmd!("ext-remove")
        .arg("-p")
        .arg(project.path())
        .args(["vert.x", "commons-*"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Build tool: gradle"));

    assert_eq!(
        read(project.path(), "build.gradle"),
        "dependencies {\n    implementation enforcedPlatform(\"${quarkusPlatformGroupId}:${quarkusPlatformArtifactId}:${quarkusPlatformVersion}\")\n    implementation 'io.quarkus:quarkus-resteasy'\n}\n"
    );
}

#[test]
fn test_e2e_explicit_build_tool() {
    let project = project_with("build.gradle", BUILD_GRADLE);
    fs::write(project.path().join("pom.xml"), POM).unwrap();

    cargo_bin_cmd!("ext-remove")
        .arg("-p")
        .arg(project.path())
        .args(["-b", "gradle", "resteasy"])
        .assert()
        .code(0);

    assert!(!read(project.path(), "build.gradle").contains("quarkus-resteasy"));
    assert_eq!(read(project.path(), "pom.xml"), POM);
}

#[test]
fn test_e2e_dry_run_leaves_descriptor_untouched() {
    let project = project_with("pom.xml", POM);

    cargo_bin_cmd!("ext-remove")
        .arg("-p")
        .arg(project.path())
        .args(["--dry-run", "agroal"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "✅ Would remove io.quarkus:quarkus-agroal ('agroal')",
        ))
        .stdout(predicate::str::contains("🔎 Dry run"));

    assert_eq!(read(project.path(), "pom.xml"), POM);
}

#[test]
fn test_e2e_json_format() {
    let project = project_with("pom.xml", POM);

    let output = cargo_bin_cmd!("ext-remove")
        .arg("-p")
        .arg(project.path())
        .args(["-f", "json", "arc", "missing"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["changed"], true);
    assert_eq!(report["dropped"], 1);
    assert_eq!(report["success"], false);
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["unmatched"], serde_json::json!(["missing"]));
    assert_eq!(report["removed"][0]["artifact"], "quarkus-arc");
    assert_eq!(report["queries"][0]["status"], "removed");
    assert_eq!(report["queries"][1]["status"], "not_found");
}

#[test]
fn test_e2e_quiet_keeps_warnings() {
    let project = project_with("pom.xml", POM);

    cargo_bin_cmd!("ext-remove")
        .arg("-p")
        .arg(project.path())
        .args(["-q", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No dependency matches 'missing'"))
        .stderr(predicate::str::contains("Loading build descriptor").not());
}
