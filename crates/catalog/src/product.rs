//! Product record as delivered by the listing source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cardstock_core::{DomainError, Entity, Money, ProductSlug};

use crate::variant::VariantCategory;

/// A single catalog entry.
///
/// Externally owned and immutable for the duration of one render. The
/// record holds data only; display decisions live in [`VariantCategory`]
/// and the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    slug: ProductSlug,
    name: String,
    image_src: String,
    price: Money,
    sale_price: Option<Money>,
    released_at: DateTime<Utc>,
    color_count: u32,
}

impl Product {
    /// Build a product record, rejecting structurally malformed input.
    ///
    /// Only well-formedness is checked. A sale price at or above the base
    /// price is passed through as given; the catalog source owns that data.
    pub fn new(
        slug: ProductSlug,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
        sale_price: Option<Money>,
        released_at: DateTime<Utc>,
        color_count: u32,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            slug,
            name,
            image_src: image_src.into(),
            price,
            sale_price,
            released_at,
            color_count,
        })
    }

    pub fn slug(&self) -> &ProductSlug {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn sale_price(&self) -> Option<Money> {
        self.sale_price
    }

    pub fn released_at(&self) -> DateTime<Utc> {
        self.released_at
    }

    pub fn color_count(&self) -> u32 {
        self.color_count
    }

    /// Display variant at the given reference time.
    ///
    /// Pure delegation: only the sale price and release date feed the
    /// decision.
    pub fn variant(&self, now: DateTime<Utc>) -> VariantCategory {
        VariantCategory::classify(self.sale_price, self.released_at, now)
    }
}

impl Entity for Product {
    type Id = ProductSlug;

    fn id(&self) -> &Self::Id {
        &self.slug
    }
}
