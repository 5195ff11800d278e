// tests/integration_tests/statistic_test.rs
use super::common::assert_close;
use anyhow::Result;
use kus::{FileRecord, MemoryTree, Statistic, compute, count};

#[test]
fn test_third_of_sources_are_kotlin() -> Result<()> {
    let tree = MemoryTree::new(vec![
        FileRecord::directory("src"),
        FileRecord::file("src/A.kt", "Kotlin").in_source(),
        FileRecord::file("src/B.java", "Java").in_source(),
        FileRecord::file("src/C.java", "Java").in_source(),
    ]);

    let statistic = compute(&tree)?;
    assert_close(statistic.source_percentage, 100.0 / 3.0);
    assert_eq!(statistic.test_percentage, 0.0);
    Ok(())
}

#[test]
fn test_all_kotlin_tests_no_kotlin_sources() -> Result<()> {
    let mut records = vec![
        FileRecord::file("ATest.kt", "Kotlin").in_test_source(),
        FileRecord::file("BTest.kt", "Kotlin").in_test_source(),
    ];
    records.extend((0..4).map(|i| FileRecord::file(format!("S{i}.java"), "Java").in_source()));

    assert_eq!(compute(&MemoryTree::new(records))?, Statistic::new(0.0, 100.0));
    Ok(())
}

#[test]
fn test_no_files() -> Result<()> {
    assert_eq!(compute(&MemoryTree::default())?, Statistic::new(0.0, 0.0));
    Ok(())
}

#[test]
fn test_only_directories() -> Result<()> {
    let tree: MemoryTree = ["src", "src/main", "src/main/kotlin", "src/test"]
        .into_iter()
        .map(|path| FileRecord::directory(path).in_source().in_test_source())
        .collect();

    assert_eq!(compute(&tree)?, Statistic::new(0.0, 0.0));
    Ok(())
}

#[test]
fn test_shared_file_counts_in_both_totals() -> Result<()> {
    let tree = MemoryTree::new(vec![
        FileRecord::file("Fixture.kt", "Kotlin").in_source().in_test_source(),
        FileRecord::file("Main.java", "Java").in_source(),
    ]);

    let counts = count(&tree)?;
    assert_eq!((counts.kotlin_source, counts.total_source), (1, 2));
    assert_eq!((counts.kotlin_test, counts.total_test), (1, 1));
    assert_eq!(compute(&tree)?, Statistic::new(50.0, 100.0));
    Ok(())
}

#[test]
fn test_repeated_compute_is_stable() -> Result<()> {
    let tree = MemoryTree::new(vec![
        FileRecord::file("A.kt", "Kotlin").in_source(),
        FileRecord::file("B.kt", "Kotlin").in_test_source(),
        FileRecord::file("C.java", "Java").in_source().in_test_source(),
    ]);

    let first = compute(&tree)?;
    let second = compute(&tree)?;
    assert_eq!(first, second);
    Ok(())
}
