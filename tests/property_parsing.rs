mod common;

use common::load;
use joularjx_config::LoggerLevel;
use proptest::prelude::*;

/// Arbitrary mixed-case spelling of `word`.
fn mixed_case(word: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    /// Property: boolean keys ignore letter case
    #[test]
    fn prop_booleans_case_insensitive(
        yes in mixed_case("true"),
        no in mixed_case("false"),
    ) {
        let properties = load(&format!(
            "save-runtime-data={yes}\noverwrite-runtime-data={no}"
        ));
        prop_assert!(properties.save_runtime_data());
        prop_assert!(!properties.overwrite_runtime_data());
    }

    /// Property: filter method names come back in file order
    #[test]
    fn prop_filter_names_round_trip(
        names in prop::collection::vec("[a-z][a-z0-9_]{0,8}(\\.[a-z][a-z0-9_]{0,8}){0,3}", 1..8)
    ) {
        let properties = load(&format!("filter-method-names={}", names.join(",")));
        prop_assert_eq!(properties.filter_method_names(), names.as_slice());
    }

    /// Property: arbitrary values never fail loading and always yield one of
    /// the four supported levels
    #[test]
    fn prop_logger_level_total(value in "[A-Za-z]{0,12}") {
        let properties = load(&format!("logger-level={value}"));
        let expected = match value.to_ascii_uppercase().as_str() {
            "OFF" => LoggerLevel::Off,
            "SEVERE" => LoggerLevel::Severe,
            "WARNING" => LoggerLevel::Warning,
            _ => LoggerLevel::Info,
        };
        prop_assert_eq!(properties.logger_level(), expected);
    }

    /// Property: single backslashes in paths survive verbatim
    ///
    /// Segments never start with `u`, which could form a `\uXXXX` escape.
    #[test]
    fn prop_windows_paths_preserved(
        segments in prop::collection::vec("[A-Za-tv-z][A-Za-z0-9]{0,8}", 1..5)
    ) {
        let path = format!("C:\\{}", segments.join("\\"));
        let properties = load(&format!("powermonitor-path={path}"));
        prop_assert_eq!(properties.power_monitor_path(), Some(path.as_str()));
    }
}
