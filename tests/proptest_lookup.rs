//! Property-based tests for product mapping, input parsing, and row output.

use eol_lookup::lifecycle::{ReleaseRecord, Resolution};
use eol_lookup::reports::{read_rows, serialize_row, OutputRow};
use eol_lookup::{map_product, read_requests, resolve};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn map_product_is_idempotent(s in "[ -~]{0,60}") {
        let once = map_product(&s);
        let twice = map_product(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn map_product_has_no_spaces_or_uppercase(s in "[ -~]{0,60}") {
        let slug = map_product(&s);
        prop_assert!(!slug.as_str().contains(' '));
        prop_assert!(!slug.as_str().chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(slug.as_str().len(), s.len());
    }

    #[test]
    fn rows_round_trip_through_csv(
        label in "\\PC{0,40}",
        version in "[a-zA-Z0-9 .,\"'()-]{0,30}",
        category in "[a-z,\"]{0,10}",
        eol in "(null|true|false|20[0-9]{2}-[01][0-9]-[0-3][0-9])",
    ) {
        let row = OutputRow { label, version, category, eol };
        let line = serialize_row(&row).unwrap();

        prop_assert!(line.starts_with('"'));
        prop_assert!(line.ends_with("\"\n"));

        let parsed = read_rows(line.as_bytes()).unwrap();
        prop_assert_eq!(parsed, vec![row]);
    }

    #[test]
    fn read_requests_never_yields_empty_fields(input in "[a-z0-9 ,\"\\n]{0,200}") {
        let requests = read_requests(input.as_bytes()).unwrap();
        for request in requests {
            prop_assert!(!request.product.is_empty());
            prop_assert!(!request.version.is_empty());
            prop_assert_eq!(request.product.trim(), request.product.as_str());
        }
    }

    #[test]
    fn every_data_line_yields_one_request(
        rows in prop::collection::vec(("[a-z\"]{1,10}", "[0-9.\"]{1,6}"), 0..20)
    ) {
        let input: String = rows.iter().map(|(p, v)| format!("{p},{v}\n")).collect();
        let requests = read_requests(input.as_bytes()).unwrap();
        prop_assert_eq!(requests.len(), rows.len());
        for (request, (product, version)) in requests.iter().zip(&rows) {
            prop_assert_eq!(&request.product, product);
            prop_assert_eq!(&request.version, version);
        }
    }

    #[test]
    fn cycle_match_beats_later_name_match(wanted in "[0-9]{1,3}(\\.[0-9]{1,2})?") {
        let by_name = ReleaseRecord {
            name: Some(wanted.as_str().into()),
            label: Some("by name".into()),
            ..Default::default()
        };
        let by_cycle = ReleaseRecord {
            cycle: Some(wanted.as_str().into()),
            label: Some("by cycle".into()),
            ..Default::default()
        };

        match resolve(&[by_name, by_cycle], &wanted) {
            Resolution::Found(release) => prop_assert_eq!(release.label, "by cycle"),
            Resolution::NotFound => prop_assert!(false, "expected a match"),
        }
    }
}
