// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Single entry of a `range` aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeBucket {
    Closed { from: i64, to: i64 },
    OpenStart { to: i64 },
    OpenEnd { from: i64 },
}

/// How closed buckets are bounded while the cursor advances
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeBucketBounds {
    /// Every closed bucket is `[start, start + step)`; only the count follows the
    /// cursor
    #[default]
    Pinned,

    /// Closed buckets follow the cursor: `[cursor, min(cursor + step, end))`
    Stepped,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Upper bound on buckets in a single `range` aggregation, open ones included.
/// Mirrors the default `search.max_buckets` of Elasticsearch.
pub const MAX_RANGE_BUCKETS: usize = 65_536;

pub fn create_range_buckets(
    start: i64,
    end: i64,
    step: i64,
) -> Result<Vec<RangeBucket>, InvalidRangeError> {
    create_range_buckets_with(start, end, step, RangeBucketBounds::Pinned)
}

/// Produces `{to: start}`, one closed bucket per step between `start` and
/// `end`, then `{from: end}`. When `start >= end` only the two open buckets
/// are returned.
pub fn create_range_buckets_with(
    start: i64,
    end: i64,
    step: i64,
    bounds: RangeBucketBounds,
) -> Result<Vec<RangeBucket>, InvalidRangeError> {
    if step <= 0 {
        return Err(InvalidRangeError::NonPositiveStep { start, end, step });
    }

    let count = range_bucket_count(start, end, step);
    let capacity = match usize::try_from(count) {
        Ok(capacity) if capacity <= MAX_RANGE_BUCKETS => capacity,
        _ => {
            return Err(InvalidRangeError::TooManyBuckets {
                start,
                end,
                step,
                count,
            });
        }
    };

    let mut buckets = Vec::with_capacity(capacity);
    buckets.push(RangeBucket::OpenStart { to: start });

    let mut cursor = start;
    while cursor < end {
        let bucket = match bounds {
            RangeBucketBounds::Pinned => RangeBucket::Closed {
                from: start,
                to: start.saturating_add(step),
            },
            RangeBucketBounds::Stepped => RangeBucket::Closed {
                from: cursor,
                to: cursor.saturating_add(step).min(end),
            },
        };
        buckets.push(bucket);

        cursor = cursor.saturating_add(step);
    }

    buckets.push(RangeBucket::OpenEnd { from: end });

    Ok(buckets)
}

/// Number of buckets the loop above would emit, computed without overflow
fn range_bucket_count(start: i64, end: i64, step: i64) -> u128 {
    let closed = if start < end {
        let span = (i128::from(end) - i128::from(start)).unsigned_abs();
        span.div_ceil(u128::from(step.unsigned_abs()))
    } else {
        0
    };

    closed + 2
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRangeError {
    #[error("Invalid range start={start} end={end}: step must be positive, got {step}")]
    NonPositiveStep { start: i64, end: i64, step: i64 },

    #[error(
        "Invalid range start={start} end={end} step={step}: {count} buckets exceed the limit of \
         {max}",
        max = MAX_RANGE_BUCKETS
    )]
    TooManyBuckets {
        start: i64,
        end: i64,
        step: i64,
        count: u128,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
