//! Export tests: CSV files, JSON and Markdown renderings of scored papers.

use mentoredge::formatters::{
    export_recommendations_csv, format_recommendations_json, format_recommendations_markdown,
    render_report,
};
use mentoredge::models::{
    Paper, RecommendationRecord, ResponseFormat, ScoredPaper, ScoringWeights, UserProfile,
};

fn scored(id: &str, title: &str, year: Option<i32>, citations: Option<i32>) -> ScoredPaper {
    ScoredPaper {
        paper: Paper {
            paper_id: id.to_string(),
            title: title.to_string(),
            authors: vec!["Ada Lovelace".into(), "Alan Turing".into()],
            year,
            r#abstract: Some("Line one,\nline two".into()),
            citation_count: citations,
            url: Some(format!("https://example.org/{id}")),
        },
        score: 0.123_456,
        relevance_norm: 1.0,
        citations_norm: 0.5,
        recency_norm: 0.1,
        matched_keywords: vec!["gnn".into(), "attention".into()],
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("mentoredge-{}-{name}.csv", std::process::id()))
}

#[test]
fn test_export_writes_one_row_per_recommendation() {
    let path = temp_path("rows");
    let papers = vec![
        scored("p1", "First, with comma", Some(2023), Some(10)),
        scored("p2", "Second", None, None),
    ];

    export_recommendations_csv(&path, &papers).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, RecommendationRecord::FIELDS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);

    assert_eq!(&rows[0][0], "p1");
    assert_eq!(&rows[0][1], "First, with comma");
    assert_eq!(&rows[0][2], "Ada Lovelace; Alan Turing");
    assert_eq!(&rows[0][3], "2023");
    assert_eq!(&rows[0][4], "Line one,\nline two");
    assert_eq!(&rows[0][7], "0.1235");
    assert_eq!(&rows[0][11], "gnn, attention");

    assert_eq!(&rows[1][3], "");
    assert_eq!(&rows[1][5], "0");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_empty_list_writes_header_only() {
    let path = temp_path("empty");

    export_recommendations_csv(&path, &[]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.trim_end(), RecommendationRecord::FIELDS.join(","));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_replaces_existing_file() {
    let path = temp_path("replace");
    std::fs::write(&path, "stale contents that are longer than the new file\n".repeat(50)).unwrap();

    export_recommendations_csv(&path, &[scored("p1", "Only", Some(2020), Some(1))]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("stale"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_json_keeps_full_precision_scores() {
    let json = format_recommendations_json(&[scored("p1", "T", Some(2020), Some(3))]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["score"], 0.123_456);
    assert_eq!(value[0]["authors"][1], "Alan Turing");
}

#[test]
fn test_markdown_lists_breakdown() {
    let markdown = format_recommendations_markdown(&[scored("p1", "T", None, None)]);

    assert!(markdown.contains("**Year**: N/A | **Citations**: 0 | **Score**: 0.1235"));
    assert!(markdown.contains("Relevance=1.000"));
}

fn profile() -> UserProfile {
    UserProfile::new("Dr. Test", vec!["gnn".into()], ScoringWeights::default()).unwrap()
}

#[test]
fn test_json_report_is_bare_parseable_json() {
    let papers = [scored("p1", "T", Some(2020), Some(3))];

    let report = render_report(&profile(), &papers, ResponseFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value[0]["paperId"], "p1");

    let empty = render_report(&profile(), &[], ResponseFormat::Json).unwrap();
    assert_eq!(serde_json::from_str::<serde_json::Value>(&empty).unwrap(), serde_json::json!([]));
}

#[test]
fn test_csv_report_starts_with_header() {
    let report = render_report(&profile(), &[], ResponseFormat::Csv).unwrap();
    assert_eq!(report.trim_end(), RecommendationRecord::FIELDS.join(","));
}

#[test]
fn test_markdown_report_leads_with_profile() {
    let papers = [scored("p1", "T", Some(2020), Some(3))];

    let report = render_report(&profile(), &papers, ResponseFormat::Markdown).unwrap();
    assert!(report.starts_with("# User Profile"));
    assert!(report.contains("# Top 1 Recommendations"));
}
