// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, setup_gradle_project};
use anyhow::Result;
use kus::{Config, OracleError, ProjectIndex, Statistic, compute, count};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_project_is_unavailable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = ProjectIndex::open(&temp_dir.path().join("nowhere"), &Config::default());

    let Err(OracleError::Unavailable { reason, .. }) = result else {
        panic!("expected an unavailable project");
    };
    assert_eq!(reason, "directory does not exist");
    Ok(())
}

#[test]
fn test_empty_project() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let index = ProjectIndex::open(temp_dir.path(), &Config::default())?;
    assert_eq!(compute(&index)?, Statistic::new(0.0, 0.0));
    Ok(())
}

#[test]
fn test_directories_only_project() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::create_dir_all(temp_dir.path().join("src/main/kotlin"))?;
    fs::create_dir_all(temp_dir.path().join("src/test/kotlin"))?;

    let index = ProjectIndex::open(temp_dir.path(), &Config::default())?;
    assert_eq!(compute(&index)?, Statistic::new(0.0, 0.0));
    Ok(())
}

#[test]
fn test_hidden_files_inside_roots_are_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "src/main/kotlin/App.kt", "")?;
    create_test_file(temp_dir.path(), "src/main/kotlin/.Scratch.java", "")?;

    let counts = count(&ProjectIndex::open(temp_dir.path(), &Config::default())?)?;
    assert_eq!((counts.kotlin_source, counts.total_source), (1, 1));
    Ok(())
}

#[test]
fn test_extra_excluded_directories() -> Result<()> {
    let temp_dir = setup_gradle_project()?;
    let mut config = Config::default();
    config.extend_exclude("java");

    let counts = count(&ProjectIndex::open(temp_dir.path(), &config)?)?;
    assert_eq!((counts.kotlin_source, counts.total_source), (3, 5));
    assert_eq!((counts.kotlin_test, counts.total_test), (1, 2));
    Ok(())
}

#[test]
fn test_project_changes_are_picked_up() -> Result<()> {
    let temp_dir = setup_gradle_project()?;
    let index = ProjectIndex::open(temp_dir.path(), &Config::default())?;
    let before = count(&index)?;

    create_test_file(temp_dir.path(), "src/main/kotlin/New.kt", "")?;
    let after = count(&index)?;

    assert_eq!(after.total_source, before.total_source + 1);
    assert_eq!(after.kotlin_source, before.kotlin_source + 1);
    Ok(())
}
