// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use assert_matches::assert_matches;
use employee_search::*;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_pinned_buckets_repeat_first_interval() {
    let buckets = create_range_buckets(0, 10, 5).unwrap();

    assert_eq!(
        serde_json::to_value(&buckets).unwrap(),
        serde_json::json!([
            { "to": 0 },
            { "from": 0, "to": 5 },
            { "from": 0, "to": 5 },
            { "from": 10 },
        ])
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_pinned_bucket_count_rounds_up() {
    let buckets = create_range_buckets(20, 65, 10).unwrap();

    // ceil(45 / 10) closed buckets plus two open ones
    assert_eq!(buckets.len(), 7);
    assert_eq!(buckets.first(), Some(&RangeBucket::OpenStart { to: 20 }));
    assert_eq!(buckets.last(), Some(&RangeBucket::OpenEnd { from: 65 }));
    assert!(
        buckets[1..6]
            .iter()
            .all(|b| *b == RangeBucket::Closed { from: 20, to: 30 })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_stepped_buckets_follow_cursor() {
    let buckets = create_range_buckets_with(0, 12, 5, RangeBucketBounds::Stepped).unwrap();

    assert_eq!(
        buckets,
        vec![
            RangeBucket::OpenStart { to: 0 },
            RangeBucket::Closed { from: 0, to: 5 },
            RangeBucket::Closed { from: 5, to: 10 },
            RangeBucket::Closed { from: 10, to: 12 },
            RangeBucket::OpenEnd { from: 12 },
        ]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_first_and_last_buckets_are_open() {
    for (start, end, step) in [(0, 1, 1), (-50, 50, 7), (1_000, 250_000, 10_000)] {
        for bounds in [RangeBucketBounds::Pinned, RangeBucketBounds::Stepped] {
            let buckets = create_range_buckets_with(start, end, step, bounds).unwrap();
            assert_eq!(buckets.first(), Some(&RangeBucket::OpenStart { to: start }));
            assert_eq!(buckets.last(), Some(&RangeBucket::OpenEnd { from: end }));
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_empty_stepped_region() {
    assert_eq!(
        create_range_buckets(10, 10, 5).unwrap(),
        vec![
            RangeBucket::OpenStart { to: 10 },
            RangeBucket::OpenEnd { from: 10 },
        ]
    );

    assert_eq!(
        create_range_buckets(30, 10, 5).unwrap(),
        vec![
            RangeBucket::OpenStart { to: 30 },
            RangeBucket::OpenEnd { from: 10 },
        ]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_non_positive_step_is_rejected() {
    assert_matches!(
        create_range_buckets(0, 10, 0),
        Err(InvalidRangeError::NonPositiveStep {
            start: 0,
            end: 10,
            step: 0
        })
    );

    assert_matches!(
        create_range_buckets_with(0, 10, -5, RangeBucketBounds::Stepped),
        Err(InvalidRangeError::NonPositiveStep { step: -5, .. })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_bucket_count_is_capped() {
    let closed = i64::try_from(MAX_RANGE_BUCKETS - 2).unwrap();

    for bounds in [RangeBucketBounds::Pinned, RangeBucketBounds::Stepped] {
        let buckets = create_range_buckets_with(0, closed, 1, bounds).unwrap();
        assert_eq!(buckets.len(), MAX_RANGE_BUCKETS);

        assert_matches!(
            create_range_buckets_with(0, closed + 1, 1, bounds),
            Err(InvalidRangeError::TooManyBuckets { count, .. })
                if count == MAX_RANGE_BUCKETS as u128 + 1
        );
    }

    // Partial last step still counts as a bucket
    assert_matches!(
        create_range_buckets(0, closed * 10 + 1, 10),
        Err(InvalidRangeError::TooManyBuckets { .. })
    );
}

#[test]
fn test_huge_range_is_rejected_before_allocating() {
    assert_matches!(
        create_range_buckets(0, 30_000_000, 1),
        Err(InvalidRangeError::TooManyBuckets {
            count: 30_000_002,
            ..
        })
    );

    assert_matches!(
        create_range_buckets_with(i64::MIN, i64::MAX, 1, RangeBucketBounds::Stepped),
        Err(InvalidRangeError::TooManyBuckets { count, .. })
            if count == u128::from(u64::MAX) + 2
    );

    // Wide ranges with a matching step stay small
    let buckets =
        create_range_buckets_with(i64::MIN, i64::MAX, i64::MAX, RangeBucketBounds::Stepped)
            .unwrap();
    assert_eq!(
        buckets,
        vec![
            RangeBucket::OpenStart { to: i64::MIN },
            RangeBucket::Closed { from: i64::MIN, to: -1 },
            RangeBucket::Closed { from: -1, to: i64::MAX - 1 },
            RangeBucket::Closed { from: i64::MAX - 1, to: i64::MAX },
            RangeBucket::OpenEnd { from: i64::MAX },
        ]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_bucket_bounds_serde() {
    assert_eq!(
        serde_json::to_value(RangeBucketBounds::Stepped).unwrap(),
        serde_json::json!("stepped")
    );
    assert_eq!(
        serde_json::from_value::<RangeBucketBounds>(serde_json::json!("pinned")).unwrap(),
        RangeBucketBounds::Pinned
    );
    assert_eq!(RangeBucketBounds::default(), RangeBucketBounds::Pinned);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
