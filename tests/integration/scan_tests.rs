use dupes::duplicates::{DuplicateFinder, FinderConfig, LogObserver};
use dupes::scanner::{FileFilter, HashAlgorithm};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let finder = DuplicateFinder::with_defaults();

    let report = finder.find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);

    assert!(report.clusters.is_empty());
    assert_eq!(report.stats.files_examined, 0);
    assert!(!report.indexed);
}

#[test]
fn test_scan_unique_files() {
    let dir = tempdir().unwrap();

    // Same size, different content
    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"content a")
        .unwrap();
    File::create(dir.path().join("b.txt"))
        .unwrap()
        .write_all(b"content b")
        .unwrap();
    File::create(dir.path().join("c.txt"))
        .unwrap()
        .write_all(b"content c")
        .unwrap();

    let report = DuplicateFinder::with_defaults()
        .find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);

    assert!(report.clusters.is_empty());
    assert_eq!(report.stats.files_examined, 3);
    assert_eq!(report.stats.duplicates_found, 0);
    assert!(report.indexed);
}

#[test]
fn test_scan_nested_duplicates_first_seen_is_original() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/deep")).unwrap();
    fs::create_dir_all(dir.path().join("b")).unwrap();

    fs::write(dir.path().join("a/deep/one.txt"), "nested").unwrap();
    fs::write(dir.path().join("b/two.txt"), "nested").unwrap();
    fs::write(dir.path().join("z.txt"), "nested").unwrap();

    let report = DuplicateFinder::with_defaults()
        .find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);

    assert_eq!(report.clusters.len(), 1);
    let cluster = &report.clusters[0];
    assert_eq!(cluster.original, dir.path().join("a/deep/one.txt"));
    assert_eq!(
        cluster.duplicates,
        vec![dir.path().join("b/two.txt"), dir.path().join("z.txt")]
    );
    assert_eq!(report.stats.bytes_wasted, 12);
}

#[test]
fn test_clusters_sorted_by_original() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a1"), "first").unwrap();
    fs::write(dir.path().join("a2"), "first").unwrap();
    fs::write(dir.path().join("b1"), "second!").unwrap();
    fs::write(dir.path().join("b2"), "second!").unwrap();

    let report = DuplicateFinder::with_defaults()
        .find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);

    let originals: Vec<_> = report.clusters.iter().map(|c| c.original.clone()).collect();
    assert_eq!(originals, vec![dir.path().join("a1"), dir.path().join("b1")]);
}

#[test]
fn test_rescan_is_stable() {
    let dir = tempdir().unwrap();
    for (name, content) in [("x", "aa"), ("y", "aa"), ("z", "bb"), ("w", "bb"), ("v", "cc")] {
        fs::write(dir.path().join(name), content).unwrap();
    }

    let finder = DuplicateFinder::with_defaults();
    let first = finder.find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);
    let second = finder.find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);

    assert_eq!(first.clusters, second.clusters);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_both_algorithms_agree() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), vec![7u8; 70_000]).unwrap();
    fs::write(dir.path().join("b"), vec![7u8; 70_000]).unwrap();
    let mut odd = vec![7u8; 70_000];
    odd[69_999] = 8;
    fs::write(dir.path().join("c"), odd).unwrap();

    for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
        let config = FinderConfig::default().with_algorithm(algorithm);
        let report = DuplicateFinder::new(config)
            .find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);
        assert_eq!(report.clusters.len(), 1, "{algorithm}");
        assert_eq!(report.clusters[0].duplicates, vec![dir.path().join("b")]);
        assert_eq!(report.algorithm, algorithm);
    }
}

#[test]
fn test_paranoid_scan_matches_plain_scan() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), "one").unwrap();
    fs::write(dir.path().join("b"), "one").unwrap();
    fs::write(dir.path().join("c"), "two").unwrap();
    fs::write(dir.path().join("d"), "one").unwrap();

    let plain = DuplicateFinder::with_defaults()
        .find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);
    let paranoid = DuplicateFinder::new(FinderConfig::default().with_paranoid(true))
        .find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);

    assert_eq!(plain.clusters, paranoid.clusters);
    assert_eq!(paranoid.collisions, 0);
    assert_eq!(paranoid.stats.duplicates_found, 2);
}

#[test]
fn test_min_size_zero_includes_empty_files() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("e1")).unwrap();
    File::create(dir.path().join("e2")).unwrap();

    let config = FinderConfig::default().with_filter(FileFilter::new(0, "*").unwrap());
    let report = DuplicateFinder::new(config)
        .find_duplicates(&[dir.path().to_path_buf()], &mut LogObserver);

    assert_eq!(report.stats.files_examined, 2);
    assert_eq!(report.stats.duplicates_found, 1);
    assert_eq!(report.stats.bytes_wasted, 0);
}
