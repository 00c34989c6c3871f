use catalog_core::{normalize, resolve_colors, similarity, ResolutionConfig};
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn resolution_is_never_empty(name in "\\PC{0,40}") {
        let config = ResolutionConfig::reference();
        prop_assert!(!resolve_colors(&name, &config).is_empty());
    }

    #[test]
    fn resolution_is_deterministic(name in "[a-zA-ZáéíóúñÁÉÍÓÚÑ \\-]{0,40}") {
        let config = ResolutionConfig::reference();
        prop_assert_eq!(resolve_colors(&name, &config), resolve_colors(&name, &config));
    }

    #[test]
    fn normalize_is_idempotent(text in "[a-zA-Z0-9àáâäèéêëìíîïòóôöùúûüñçÀÁÂÄÈÉÊËÌÍÎÏÒÓÔÖÙÚÛÜÑÇ\u{0300}-\u{036f} \\t\\-,.]{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn similarity_stays_in_unit_interval(a in "[a-z ]{0,30}", b in "[a-z ]{0,30}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} for {:?} / {:?}", score, a, b);
    }
}
