use dupes::duplicates::{DuplicateFinder, LogObserver};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_roots_scanned_in_argument_order() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    fs::write(first.path().join("z"), "shared").unwrap();
    fs::write(second.path().join("a"), "shared").unwrap();

    // The second root is listed first, so its file becomes the original.
    let report = DuplicateFinder::with_defaults().find_duplicates(
        &[second.path().to_path_buf(), first.path().to_path_buf()],
        &mut LogObserver,
    );

    assert_eq!(report.clusters.len(), 1);
    assert_eq!(report.clusters[0].original, second.path().join("a"));
    assert_eq!(report.clusters[0].duplicates, vec![first.path().join("z")]);
}

#[test]
fn test_same_root_twice_reports_every_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("only"), "content").unwrap();

    let root = dir.path().to_path_buf();
    let report = DuplicateFinder::with_defaults().find_duplicates(&[root.clone(), root], &mut LogObserver);

    // The same path reached twice is indistinguishable from a copy.
    assert_eq!(report.stats.files_examined, 2);
    assert_eq!(report.clusters.len(), 1);
    assert_eq!(report.clusters[0].original, dir.path().join("only"));
    assert_eq!(report.clusters[0].duplicates, vec![dir.path().join("only")]);
}

#[test]
fn test_file_given_as_root() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("lonely.txt");
    fs::write(&file, "data").unwrap();
    let other = tempdir().unwrap();
    fs::write(other.path().join("copy.txt"), "data").unwrap();

    let report = DuplicateFinder::with_defaults().find_duplicates(
        &[file.clone(), other.path().to_path_buf()],
        &mut LogObserver,
    );

    assert_eq!(report.clusters.len(), 1);
    assert_eq!(report.clusters[0].original, file);
}

#[test]
fn test_clusters_from_many_roots() {
    let roots: Vec<_> = (0..4).map(|_| tempdir().unwrap()).collect();
    for (i, root) in roots.iter().enumerate() {
        fs::write(root.path().join("common"), "everywhere").unwrap();
        fs::write(root.path().join("unique"), format!("root {i}")).unwrap();
    }

    let paths: Vec<_> = roots.iter().map(|r| r.path().to_path_buf()).collect();
    let report = DuplicateFinder::with_defaults().find_duplicates(&paths, &mut LogObserver);

    assert_eq!(report.clusters.len(), 1);
    assert_eq!(report.clusters[0].duplicates.len(), 3);
    assert_eq!(report.stats.files_examined, 8);
    assert_eq!(report.stats.bytes_wasted, 30);
}
