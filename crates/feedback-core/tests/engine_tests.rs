// Rust guideline compliant 2026-02-06

//! Unit tests for the statistics, distribution, filter, and sort engines.

use feedback_core::{
    compute_distribution, compute_statistics, filter_records, sort_records, FeedbackRecord,
    FilterSelector, SortKey,
};

/// Helper to create a test record.
fn record(n: u32, rating: u8, created_at: i64) -> FeedbackRecord {
    FeedbackRecord {
        id: format!("fb-{:08x}", n),
        name: format!("User {}", n),
        rating,
        comment: None,
        created_at,
    }
}

fn ids(records: &[FeedbackRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_statistics_scenario() {
    let records = vec![record(1, 5, 1), record(2, 3, 2), record(3, 5, 3)];
    let stats = compute_statistics(&records);

    assert_eq!(stats.count, 3);
    assert!((stats.average_rating - 13.0 / 3.0).abs() < 1e-12);
    assert_eq!(stats.rounded_average(), 4.3);
    assert_eq!(stats.display_average(), "4.3");
    assert_eq!(stats.satisfied_count, 2);
    assert_eq!(stats.neutral_count, 1);
    assert_eq!(stats.unsatisfied_count, 0);
}

#[test]
fn test_statistics_empty() {
    let stats = compute_statistics(&[]);
    assert_eq!(stats.count, 0);
    assert_eq!(stats.average_rating, 0.0);
    assert_eq!(stats.display_average(), "0.0");
    assert_eq!(stats.satisfied_count, 0);
    assert_eq!(stats.neutral_count, 0);
    assert_eq!(stats.unsatisfied_count, 0);
}

#[test]
fn test_average_rounds_half_away_from_zero() {
    // 17 / 4 = 4.25 is exact in binary; display must read 4.3.
    let records = vec![record(1, 5, 1), record(2, 4, 2), record(3, 4, 3), record(4, 4, 4)];
    let stats = compute_statistics(&records);
    assert_eq!(stats.display_average(), "4.3");
}

#[test]
fn test_average_rounds_the_exact_mean() {
    // 87 / 20 = 4.35 and 23 / 20 = 1.15 round up even though their nearest
    // doubles sit just below the midpoint.
    let ratings: Vec<u8> = [vec![5; 13], vec![4; 5], vec![1; 2]].concat();
    let records: Vec<FeedbackRecord> = ratings
        .iter()
        .enumerate()
        .map(|(i, &r)| record(i as u32, r, i as i64))
        .collect();
    assert_eq!(compute_statistics(&records).display_average(), "4.4");

    let ratings: Vec<u8> = [vec![1; 17], vec![2; 3]].concat();
    let records: Vec<FeedbackRecord> = ratings
        .iter()
        .enumerate()
        .map(|(i, &r)| record(i as u32, r, i as i64))
        .collect();
    assert_eq!(compute_statistics(&records).display_average(), "1.2");
}

#[test]
fn test_statistics_tolerates_out_of_range_ratings() {
    let records = vec![record(1, 0, 1), record(2, 9, 2)];
    let stats = compute_statistics(&records);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.unsatisfied_count, 1);
    assert_eq!(stats.satisfied_count, 1);
    assert_eq!(stats.average_rating, 3.0);
}

#[test]
fn test_distribution_counts_per_rating() {
    let records = vec![
        record(1, 5, 1),
        record(2, 3, 2),
        record(3, 5, 3),
        record(4, 1, 4),
    ];
    let dist = compute_distribution(&records);
    assert_eq!(dist.counts(), [1, 0, 1, 0, 2]);
    assert_eq!(dist.count_for(5), 2);
    assert_eq!(dist.count_for(0), 0);
    assert_eq!(dist.total(), 4);
    assert_eq!(
        dist.iter().collect::<Vec<_>>(),
        vec![(1, 1), (2, 0), (3, 1), (4, 0), (5, 2)]
    );
}

#[test]
fn test_distribution_empty_is_five_zeros() {
    let dist = compute_distribution(&[]);
    assert_eq!(dist.counts(), [0, 0, 0, 0, 0]);
    assert_eq!(dist.shares(), [0.0; 5]);
}

#[test]
fn test_distribution_shares() {
    let records = vec![record(1, 5, 1), record(2, 5, 2), record(3, 1, 3), record(4, 2, 4)];
    let shares = compute_distribution(&records).shares();
    assert_eq!(shares, [25.0, 25.0, 0.0, 0.0, 50.0]);
}

#[test]
fn test_distribution_serializes_as_array() {
    let dist = compute_distribution(&[record(1, 2, 1)]);
    let json = serde_json::to_string(&dist).unwrap();
    assert_eq!(json, "[0,1,0,0,0]");
}

#[test]
fn test_filter_exact_and_satisfied() {
    let records = vec![
        record(1, 5, 1),
        record(2, 3, 2),
        record(3, 4, 3),
        record(4, 5, 4),
    ];

    let exact = filter_records(records.clone(), FilterSelector::Exact(5));
    assert_eq!(ids(&exact), vec!["fb-00000001", "fb-00000004"]);

    let satisfied = filter_records(records.clone(), FilterSelector::Satisfied);
    assert_eq!(ids(&satisfied), vec!["fb-00000001", "fb-00000003", "fb-00000004"]);

    let all = filter_records(records.clone(), FilterSelector::All);
    assert_eq!(all, records);
}

#[test]
fn test_filter_large_collection_preserves_order() {
    let records: Vec<FeedbackRecord> = (0..2_500u32)
        .map(|n| record(n, (n % 5 + 1) as u8, i64::from(n)))
        .collect();
    let filtered = filter_records(records.clone(), FilterSelector::Exact(3));

    let expected: Vec<FeedbackRecord> = records.into_iter().filter(|r| r.rating == 3).collect();
    assert_eq!(filtered, expected);
}

#[test]
fn test_sort_by_timestamp() {
    let records = vec![record(1, 5, 20), record(2, 3, 10), record(3, 4, 30)];

    let newest = sort_records(records.clone(), SortKey::Newest);
    assert_eq!(ids(&newest), vec!["fb-00000003", "fb-00000001", "fb-00000002"]);

    let oldest = sort_records(records, SortKey::Oldest);
    assert_eq!(ids(&oldest), vec!["fb-00000002", "fb-00000001", "fb-00000003"]);
}

#[test]
fn test_sort_by_rating_is_stable() {
    let records = vec![
        record(1, 4, 1),
        record(2, 5, 2),
        record(3, 4, 3),
        record(4, 5, 4),
        record(5, 1, 5),
    ];

    let highest = sort_records(records.clone(), SortKey::Highest);
    assert_eq!(
        ids(&highest),
        vec!["fb-00000002", "fb-00000004", "fb-00000001", "fb-00000003", "fb-00000005"]
    );

    let lowest = sort_records(records, SortKey::Lowest);
    assert_eq!(
        ids(&lowest),
        vec!["fb-00000005", "fb-00000001", "fb-00000003", "fb-00000002", "fb-00000004"]
    );
}

#[test]
fn test_sort_equal_timestamps_keep_input_order() {
    let records = vec![record(1, 1, 7), record(2, 2, 7), record(3, 3, 7)];
    let newest = sort_records(records.clone(), SortKey::Newest);
    assert_eq!(newest, records);
    let oldest = sort_records(records.clone(), SortKey::Oldest);
    assert_eq!(oldest, records);
}

#[test]
fn test_selector_and_key_parsing() {
    assert_eq!("all".parse::<FilterSelector>().unwrap(), FilterSelector::All);
    assert_eq!("3".parse::<FilterSelector>().unwrap(), FilterSelector::Exact(3));
    assert_eq!("4-5".parse::<FilterSelector>().unwrap(), FilterSelector::Satisfied);
    assert_eq!(
        "Satisfied".parse::<FilterSelector>().unwrap(),
        FilterSelector::Satisfied
    );
    assert!("0".parse::<FilterSelector>().is_err());
    assert!("6".parse::<FilterSelector>().is_err());
    assert!("best".parse::<FilterSelector>().is_err());

    assert_eq!("HIGHEST".parse::<SortKey>().unwrap(), SortKey::Highest);
    assert!("random".parse::<SortKey>().is_err());
}

#[test]
fn test_selector_serde_uses_text_form() {
    let json = serde_json::to_string(&FilterSelector::Satisfied).unwrap();
    assert_eq!(json, "\"4-5\"");
    let parsed: FilterSelector = serde_json::from_str("\"2\"").unwrap();
    assert_eq!(parsed, FilterSelector::Exact(2));
    assert!(serde_json::from_str::<FilterSelector>("\"9\"").is_err());

    let json = serde_json::to_string(&SortKey::Oldest).unwrap();
    assert_eq!(json, "\"oldest\"");
}
