//! Integration tests for mechmine-store
//!
//! These tests verify papers-database reads and JSON artifact
//! round-trips against real files.

use mechmine_domain::traits::{ReportSink, SampleSource};
use mechmine_domain::{Rating, ReviewedMatch, ScoredCandidate};
use mechmine_eval::aggregate;
use mechmine_store::{artifacts, FileReportSink, FileSampleSource, PaperStore, StoreError};

fn seed_papers(store: &PaperStore) {
    store
        .connection()
        .execute_batch(
            "CREATE TABLE papers (
                id INTEGER PRIMARY KEY,
                arxiv_id TEXT NOT NULL,
                title TEXT NOT NULL,
                abstract TEXT,
                domain TEXT NOT NULL,
                subdomain TEXT
            );
            INSERT INTO papers VALUES
                (1, '2401.00001', 'Feedback', 'Feedback in networks.', 'nlin', NULL),
                (2, '2401.00002', 'No abstract', NULL, 'econ', NULL),
                (3, '2401.00003', 'Empty abstract', '', 'cs', 'cs.SI'),
                (4, '2401.00004', 'Populations', 'Interacting populations.', 'q-bio', 'q-bio.PE');",
        )
        .unwrap();
}

#[test]
fn test_open_missing_database_is_not_found() {
    let result = PaperStore::open("/nonexistent/papers.db");
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_papers_with_abstracts_skips_empty() {
    let store = PaperStore::open_in_memory().unwrap();
    seed_papers(&store);

    let papers = store.papers_with_abstracts().unwrap();
    let ids: Vec<i64> = papers.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 4]);

    assert_eq!(papers[0].abstract_text.as_deref(), Some("Feedback in networks."));
    assert_eq!(papers[1].subdomain.as_deref(), Some("q-bio.PE"));
}

#[test]
fn test_paper_count() {
    let store = PaperStore::open_in_memory().unwrap();
    seed_papers(&store);
    assert_eq!(store.paper_count().unwrap(), 4);
}

#[test]
fn test_candidates_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("candidates.json");

    let candidates = vec![
        ScoredCandidate {
            paper_id: 1,
            score: 4,
            categories: vec!["feedback".to_string(), "network".to_string()],
        },
        ScoredCandidate {
            paper_id: 2,
            score: 0,
            categories: vec![],
        },
    ];

    artifacts::write_candidates(&path, &candidates).unwrap();
    let loaded = artifacts::read_candidates(&path).unwrap();
    assert_eq!(loaded, candidates);
}

#[test]
fn test_missing_sample_is_not_found() {
    let source = FileSampleSource::new("/nonexistent/sample.json");
    assert!(matches!(
        source.reviewed_matches(),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_sample_with_unknown_rating_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.json");
    std::fs::write(
        &path,
        r#"[{"bucket": "a", "manual_rating": "superb"}]"#,
    )
    .unwrap();

    let result = artifacts::read_reviewed_sample(&path);
    assert!(matches!(result, Err(StoreError::Serialization(_))));
}

#[test]
fn test_sample_round_trip_preserves_extras() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.json");
    std::fs::write(
        &path,
        r#"[{"bucket": "a", "manual_rating": "good", "similarity": 0.91}]"#,
    )
    .unwrap();

    let sample = artifacts::read_reviewed_sample(&path).unwrap();
    artifacts::write_reviewed_sample(&path, &sample).unwrap();

    let reloaded = artifacts::read_reviewed_sample(&path).unwrap();
    assert_eq!(reloaded, sample);
    assert_eq!(reloaded[0].extra["similarity"].as_f64(), Some(0.91));
}

#[test]
fn test_report_sink_writes_expected_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("precision.json");

    let report = aggregate(&[
        ReviewedMatch::rated("A", Rating::Excellent),
        ReviewedMatch::rated("A", Rating::Weak),
        ReviewedMatch::rated("B", Rating::Good),
    ]);

    let sink = FileReportSink::new(path.clone());
    sink.write_report(&report).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["buckets"]["A"]["total"].as_u64(), Some(2));
    assert_eq!(raw["buckets"]["A"]["fp"].as_u64(), Some(0));
    assert_eq!(raw["overall"]["total"].as_u64(), Some(3));
    assert_eq!(raw["overall"]["false_positive"].as_u64(), Some(0));
    let precision = raw["overall"]["precision"].as_f64().unwrap();
    assert!((precision - 2.0 / 3.0).abs() < 1e-9);
}
