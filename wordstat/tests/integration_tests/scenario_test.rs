// tests/integration_tests/scenario_test.rs
use super::common::{CollectingReporter, create_test_file, settings, setup_numbered_directory};
use anyhow::Result;
use tempfile::TempDir;
use wordstat::{FsLineSource, TextStats, analyze_directory};

#[test]
fn test_single_file_with_three_lines() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "greeting.txt", "Hello world\nHello again world\n\n")?;
    let mut reporter = CollectingReporter::default();

    let summary = analyze_directory(temp_dir.path(), FsLineSource, &settings(2), &mut reporter)?;

    assert_eq!(summary.files, 1);
    assert_eq!(summary.batches, 1);
    let total = &summary.total;
    assert_eq!(total.lines, 3);
    assert_eq!(total.words, 5);
    assert_eq!(total.chars, 28);
    assert_eq!(total.top_words(5), vec![("hello", 2), ("world", 2), ("again", 1)]);
    assert_eq!(reporter.total.as_ref(), Some(total));
    Ok(())
}

#[test]
fn test_seven_files_in_two_batches() -> Result<()> {
    let temp_dir = setup_numbered_directory(7)?;
    let mut reporter = CollectingReporter::default();

    let summary = analyze_directory(temp_dir.path(), FsLineSource, &settings(4), &mut reporter)?;

    assert_eq!(summary.batches, 2);
    assert_eq!(reporter.batches.len(), 2);
    assert_eq!(reporter.batches[0].files.len(), 5);
    assert_eq!(reporter.batches[1].files, vec!["doc05.txt", "doc06.txt"]);

    let second = &reporter.batches[1];
    assert_eq!(second.stats.lines, 4);
    assert_eq!(second.stats.frequency.get("document"), Some(&4));
    assert_eq!(
        second.info.map(|i| (i.first, i.last, i.total_files)),
        Some((6, 7, 7))
    );

    let mut merged = TextStats::new("All Files");
    for batch in &reporter.batches {
        merged.merge(batch.stats.clone());
    }
    assert_eq!(summary.total, merged);
    assert_eq!(summary.total.frequency.get("document"), Some(&14));
    Ok(())
}

#[test]
fn test_chunk_boundary_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let hundred: String = (0..100).map(|i| format!("row {i}\n")).collect();
    let hundred_one: String = (0..101).map(|i| format!("row {i}\n")).collect();
    create_test_file(temp_dir.path(), "a_hundred.txt", &hundred)?;
    create_test_file(temp_dir.path(), "b_hundred_one.txt", &hundred_one)?;
    let mut reporter = CollectingReporter::default();

    let summary = analyze_directory(temp_dir.path(), FsLineSource, &settings(2), &mut reporter)?;

    assert_eq!(summary.total.lines, 201);
    assert_eq!(summary.total.frequency.get("row"), Some(&201));
    assert_eq!(summary.total.frequency.get("100"), Some(&1));
    assert_eq!(summary.total.words, summary.total.frequency_total());
    Ok(())
}

#[test]
fn test_totals_are_stable_across_worker_counts() -> Result<()> {
    let temp_dir = setup_numbered_directory(12)?;
    let mut totals = Vec::new();

    for workers in [1, 2, 6] {
        let mut reporter = CollectingReporter::default();
        let summary =
            analyze_directory(temp_dir.path(), FsLineSource, &settings(workers), &mut reporter)?;
        totals.push(summary.total);
    }

    assert!(totals.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}
