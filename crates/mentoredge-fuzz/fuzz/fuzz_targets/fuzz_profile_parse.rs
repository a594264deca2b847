#![no_main]

use libfuzzer_sys::fuzz_target;
use mentoredge::models::{RecommendInput, UserProfile, WEIGHT_SUM_TOLERANCE};

fuzz_target!(|data: &[u8]| {
    // Any profile that deserializes has passed validation
    if let Ok(profile) = serde_json::from_slice::<UserProfile>(data) {
        assert!(!profile.primary_keywords().is_empty());
        assert!((profile.weights().sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE + 1e-9);
    }

    if let Ok(input) = serde_json::from_slice::<RecommendInput>(data) {
        let _ = input.validate();
        let _ = UserProfile::try_from(input.profile);
    }
});
