use chrono::NaiveDate;
use docdash_catalog::{filter_documents, sort_documents, SortDirection, SortField, SortState};
use docdash_contract::{DocumentRecord, DocumentType};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn record_strategy() -> impl Strategy<Value = DocumentRecord> {
    (
        0_u64..10_000,
        "[A-Za-z_]{1,12}\\.(pdf|docx|xlsx)",
        "[A-Z][a-z]{1,6} [A-Z][a-z]{1,8}",
        0_i64..3_650,
        "[0-9]{1,4}(\\.[0-9])? (KB|MB|GB)",
    )
        .prop_map(|(id, name, owner, offset, size)| DocumentRecord {
            id,
            name,
            version: "v1.0".to_string(),
            last_modified: NaiveDate::from_ymd_opt(2015, 1, 1).expect("epoch")
                + chrono::Duration::days(offset),
            owner,
            size,
            doc_type: DocumentType::Pdf,
        })
}

fn field_strategy() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::Name),
        Just(SortField::LastModified),
        Just(SortField::Owner),
        Just(SortField::Size),
    ]
}

fn direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn filter_keeps_only_matching_records(
        records in proptest::collection::vec(record_strategy(), 0..20),
        query in "[A-Za-z]{1,3}"
    ) {
        let hits = filter_documents(&records, &query);
        prop_assert!(hits.len() <= records.len());
        let needle = query.to_lowercase();
        for hit in &hits {
            prop_assert!(
                hit.name.to_lowercase().contains(&needle)
                    || hit.owner.to_lowercase().contains(&needle)
            );
        }
    }

    #[test]
    fn empty_query_is_identity(records in proptest::collection::vec(record_strategy(), 0..20)) {
        prop_assert_eq!(filter_documents(&records, ""), records);
    }

    #[test]
    fn sort_is_idempotent(
        records in proptest::collection::vec(record_strategy(), 0..20),
        field in field_strategy(),
        direction in direction_strategy()
    ) {
        let once = sort_documents(&records, field, direction);
        let twice = sort_documents(&once, field, direction);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_a_permutation(
        records in proptest::collection::vec(record_strategy(), 0..20),
        field in field_strategy(),
        direction in direction_strategy()
    ) {
        let sorted = sort_documents(&records, field, direction);
        let mut before: Vec<u64> = records.iter().map(|r| r.id).collect();
        let mut after: Vec<u64> = sorted.iter().map(|r| r.id).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn double_toggle_restores_order(
        records in proptest::collection::vec(record_strategy(), 0..20),
        field in field_strategy()
    ) {
        let mut state = SortState::default();
        state.toggle(field);
        let original = state.apply(&records);

        state.toggle(field);
        state.toggle(field);
        prop_assert_eq!(state.apply(&records), original);
    }
}
