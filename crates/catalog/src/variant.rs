//! Display-variant classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cardstock_core::Money;

/// Days after release during which a product counts as newly released,
/// same-day inclusive.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// Mutually exclusive display mode of a product card.
///
/// Derived per render from the product's sale price and release date;
/// never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantCategory {
    OnSale,
    NewRelease,
    Default,
}

impl VariantCategory {
    /// Classify a product from its sale price and release date.
    ///
    /// First match wins: a present sale price (any amount, zero included)
    /// dominates recency. The reference time is an explicit parameter, so
    /// the result is deterministic for a fixed `now`.
    ///
    /// A release date in the future never qualifies as new.
    pub fn classify(
        sale_price: Option<Money>,
        released_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        if sale_price.is_some() {
            return Self::OnSale;
        }
        if released_at <= now
            && now.signed_duration_since(released_at).num_days() <= NEW_RELEASE_WINDOW_DAYS
        {
            return Self::NewRelease;
        }
        Self::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        reference_now() - Duration::days(days)
    }

    #[test]
    fn sale_price_wins_regardless_of_release_date() {
        let now = reference_now();
        for released_at in [days_ago(10), days_ago(3650), days_ago(-10)] {
            assert_eq!(
                VariantCategory::classify(Some(Money::usd(5000)), released_at, now),
                VariantCategory::OnSale,
            );
        }
    }

    #[test]
    fn zero_sale_price_still_counts_as_on_sale() {
        assert_eq!(
            VariantCategory::classify(Some(Money::usd(0)), days_ago(400), reference_now()),
            VariantCategory::OnSale,
        );
    }

    #[test]
    fn recent_release_without_sale_is_new() {
        assert_eq!(
            VariantCategory::classify(None, days_ago(5), reference_now()),
            VariantCategory::NewRelease,
        );
    }

    #[test]
    fn same_day_release_is_new() {
        assert_eq!(
            VariantCategory::classify(None, reference_now(), reference_now()),
            VariantCategory::NewRelease,
        );
    }

    #[test]
    fn window_boundary_is_inclusive() {
        assert_eq!(
            VariantCategory::classify(None, days_ago(30), reference_now()),
            VariantCategory::NewRelease,
        );
        assert_eq!(
            VariantCategory::classify(None, days_ago(31), reference_now()),
            VariantCategory::Default,
        );
    }

    #[test]
    fn old_release_without_sale_is_default() {
        assert_eq!(
            VariantCategory::classify(None, days_ago(730), reference_now()),
            VariantCategory::Default,
        );
    }

    #[test]
    fn future_release_is_not_new() {
        // Even an hour ahead: unreleased products are not "just released".
        for released_at in [
            reference_now() + Duration::hours(1),
            days_ago(-10),
            days_ago(-365),
        ] {
            assert_eq!(
                VariantCategory::classify(None, released_at, reference_now()),
                VariantCategory::Default,
            );
        }
    }

    #[test]
    fn both_conditions_true_resolves_to_on_sale() {
        assert_eq!(
            VariantCategory::classify(Some(Money::usd(2000)), days_ago(5), reference_now()),
            VariantCategory::OnSale,
        );
    }

    #[test]
    fn serializes_as_kebab_case_tags() {
        let json = serde_json::to_string(&VariantCategory::OnSale).unwrap();
        assert_eq!(json, "\"on-sale\"");
        let json = serde_json::to_string(&VariantCategory::NewRelease).unwrap();
        assert_eq!(json, "\"new-release\"");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any present sale price classifies as on-sale, no
            /// matter where the release date sits.
            #[test]
            fn present_sale_price_always_wins(
                amount in 0u64..1_000_000,
                offset_days in -400i64..400
            ) {
                let category = VariantCategory::classify(
                    Some(Money::usd(amount)),
                    days_ago(offset_days),
                    reference_now(),
                );
                prop_assert_eq!(category, VariantCategory::OnSale);
            }

            /// Property: without a sale price, only past releases inside the
            /// window are new.
            #[test]
            fn recency_window_is_exact(offset_days in -400i64..400) {
                let category = VariantCategory::classify(
                    None,
                    days_ago(offset_days),
                    reference_now(),
                );
                let expected = if (0..=NEW_RELEASE_WINDOW_DAYS).contains(&offset_days) {
                    VariantCategory::NewRelease
                } else {
                    VariantCategory::Default
                };
                prop_assert_eq!(category, expected);
            }

            /// Property: classification is idempotent for a fixed reference
            /// time.
            #[test]
            fn classification_is_idempotent(
                amount in proptest::option::of(0u64..1_000_000),
                offset_days in -400i64..400
            ) {
                let sale_price = amount.map(Money::usd);
                let released_at = days_ago(offset_days);
                let first = VariantCategory::classify(sale_price, released_at, reference_now());
                let second = VariantCategory::classify(sale_price, released_at, reference_now());
                prop_assert_eq!(first, second);
            }
        }
    }
}
