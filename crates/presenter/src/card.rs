//! Card view composition.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cardstock_catalog::{Product, VariantCategory};
use cardstock_core::ValueObject;

use crate::badge::Badge;
use crate::format::pluralize;
use crate::link::LinkTemplate;

/// Base price line: formatted text plus strike-through state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLine {
    pub text: String,
    pub struck: bool,
}

impl ValueObject for PriceLine {}

/// Renderer-agnostic description of one product card.
///
/// This is the output contract of the library: the host's rendering layer
/// consumes it as data (directly or as JSON) and owns everything visual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub image_src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    pub price: PriceLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    pub color_label: String,
    pub href: String,
}

impl ValueObject for CardView {}

impl CardView {
    /// Lay out a card for an already-classified product.
    ///
    /// The strike-through on the base price and the secondary price follow
    /// whether a non-zero sale price is present, not the category: both
    /// read the same field as classification, but they are separate
    /// decisions. A zero sale price classifies as on-sale yet gets no
    /// price styling.
    pub fn compose(product: &Product, category: VariantCategory, links: &LinkTemplate) -> Self {
        let discount = product.sale_price().filter(|p| !p.is_zero());
        let view = Self {
            title: product.name().to_owned(),
            image_src: product.image_src().to_owned(),
            badge: Badge::of(category),
            price: PriceLine {
                text: product.price().to_string(),
                struck: discount.is_some(),
            },
            sale_price: discount.map(|p| p.to_string()),
            color_label: pluralize("Color", product.color_count()),
            href: links.resolve(product.slug()),
        };
        tracing::debug!(slug = %product.slug(), ?category, "composed product card");
        view
    }

    /// Classify at `now` and compose in one step.
    pub fn for_product(product: &Product, now: DateTime<Utc>, links: &LinkTemplate) -> Self {
        Self::compose(product, product.variant(now), links)
    }
}
