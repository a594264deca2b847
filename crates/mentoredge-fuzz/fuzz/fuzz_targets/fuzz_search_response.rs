#![no_main]

use libfuzzer_sys::fuzz_target;
use mentoredge::models::{Paper, SearchResponse};

fuzz_target!(|data: &[u8]| {
    // A parsed response must yield one outcome per item, never a panic
    if let Ok(response) = serde_json::from_slice::<SearchResponse>(data) {
        let items = response.data.len();
        let (papers, skipped) = response.into_papers();
        assert_eq!(papers.len() + skipped, items);
    }

    if let Ok(item) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = Paper::from_item(item);
    }
});
