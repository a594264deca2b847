//! Integration tests for MentorEdge.
//!
//! These tests hit the real Semantic Scholar API.
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use std::sync::Arc;

use mentoredge::client::SemanticScholarClient;
use mentoredge::config::Config;
use mentoredge::models::{ScoringWeights, UserProfile};
use mentoredge::Recommender;

fn create_client() -> Arc<SemanticScholarClient> {
    let config = Config::from_env().expect("Failed to read config");
    Arc::new(SemanticScholarClient::new(config).expect("Failed to create client"))
}

#[tokio::test]
async fn test_live_search_returns_ranked_papers() {
    let client = create_client();

    let papers = client
        .search_papers("attention is all you need", 5, None, None)
        .await
        .expect("search failed");

    println!("Found {} papers", papers.len());
    for paper in &papers {
        println!("  {} ({:?})", paper.title_or_default(), paper.year);
    }

    assert!(!papers.is_empty());
    assert!(papers.len() <= 5);
    assert!(papers.iter().all(|p| p.has_id()));
}

#[tokio::test]
async fn test_live_search_respects_year_range() {
    let client = create_client();

    let papers = client
        .search_papers("graph neural networks", 10, Some(2021), Some(2023))
        .await
        .expect("search failed");

    assert!(
        papers.iter().filter_map(|p| p.year).all(|y| (2021..=2023).contains(&y)),
        "year filter not applied"
    );
}

#[tokio::test]
async fn test_live_recommendations() {
    let recommender = Recommender::new(create_client());
    let profile = UserProfile::new(
        "Integration Test",
        vec!["graph neural networks".into(), "large language models".into()],
        ScoringWeights::default(),
    )
    .expect("valid profile")
    .with_min_year(Some(2020));

    let results = recommender.build(&profile, 10, 5).await.expect("run failed");

    for (i, scored) in results.iter().enumerate() {
        println!(
            "{}. {:.4} {} {:?}",
            i + 1,
            scored.score,
            scored.paper.title_or_default(),
            scored.matched_keywords
        );
    }

    assert!(results.len() <= 5);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(results.iter().all(|s| !s.matched_keywords.is_empty()));
}
