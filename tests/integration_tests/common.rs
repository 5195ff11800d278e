// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, rules: &[&str]) -> Result<()> {
    let content = rules.join("\n");
    create_test_file(dir, kus::core::ignore::IGNORE_FILE_NAME, &content)
}

pub fn create_config_file(dir: &Path, content: &str) -> Result<()> {
    create_test_file(dir, kus::config::CONFIG_FILE_NAME, content)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Gradle project:
/// * source content: 7 files, 3 of them Kotlin
/// * test-source content: 3 files, 1 of them Kotlin
/// * plus build output, hidden caches and root files outside any content root
pub fn setup_gradle_project() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(root, "settings.gradle.kts", "rootProject.name = \"sample\"")?;
    create_test_file(root, "build.gradle.kts", "plugins { kotlin(\"jvm\") }")?;
    create_test_file(root, "README.md", "# Sample")?;

    create_test_file(root, "src/main/kotlin/App.kt", "fun main() {}")?;
    create_test_file(root, "src/main/kotlin/util/Strings.kt", "object Strings")?;
    create_test_file(root, "src/main/java/Legacy.java", "class Legacy {}")?;
    create_test_file(root, "src/main/resources/config.properties", "key=value")?;

    create_test_file(root, "src/test/kotlin/AppTest.kt", "class AppTest")?;
    create_test_file(root, "src/test/java/LegacyTest.java", "class LegacyTest {}")?;
    create_test_file(root, "src/test/resources/fixture.json", "{}")?;

    create_test_file(root, "build/generated/src/main/kotlin/Gen.kt", "object Gen")?;
    create_test_file(root, ".gradle/src/main/kotlin/Cache.kt", "object Cache")?;
    create_test_file(root, ".idea/src/main/kotlin/Workspace.kt", "object Workspace")?;

    Ok(temp_dir)
}
