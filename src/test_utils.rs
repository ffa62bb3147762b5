//! Arbitrary generators shared by the property tests.

use crate::status_ty::{CustomStatus, StatusDuration};
use chrono::{DateTime, Utc};
use proptest::prelude::*;

// 0001-01-01T00:00:00Z and 9999-12-31T23:59:59Z.
const MIN_UNIX_SECONDS: i64 = -62_135_596_800;
const MAX_UNIX_SECONDS: i64 = 253_402_300_799;

pub fn arb_duration() -> impl Strategy<Value = Option<StatusDuration>> {
    prop_oneof![
        Just(None),
        prop::sample::select(StatusDuration::ALL.to_vec()).prop_map(Some),
        any::<String>().prop_map(|tag| StatusDuration::from_tag(&tag)),
    ]
}

pub fn arb_expiry() -> impl Strategy<Value = Option<DateTime<Utc>>> {
    prop_oneof![
        Just(None),
        Just(DateTime::from_timestamp(MIN_UNIX_SECONDS, 0)),
        (MIN_UNIX_SECONDS..=MAX_UNIX_SECONDS, 0u32..1_000_000_000)
            .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos)),
    ]
}

pub fn arb_custom_status() -> impl Strategy<Value = CustomStatus> {
    (any::<String>(), any::<String>(), arb_duration(), arb_expiry()).prop_map(
        |(emoji, text, duration, expires_at)| CustomStatus {
            emoji,
            text,
            duration,
            expires_at,
        },
    )
}
