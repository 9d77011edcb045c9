//! Badge selection per display variant.

use serde::Serialize;

use cardstock_catalog::VariantCategory;
use cardstock_core::ValueObject;

/// Abstract styling hook for a badge. Concrete colors, spacing, and
/// typography belong to the host's styling layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleToken {
    Primary,
    Secondary,
}

/// Overlay flag shown on non-default cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub style: StyleToken,
}

impl ValueObject for Badge {}

impl Badge {
    /// Badge for a display variant. Default cards carry none.
    ///
    /// The mapping is a total match on the enum, so adding a variant
    /// without choosing its badge fails to compile.
    pub fn of(category: VariantCategory) -> Option<Self> {
        match category {
            VariantCategory::OnSale => Some(Self {
                label: "Sale",
                style: StyleToken::Primary,
            }),
            VariantCategory::NewRelease => Some(Self {
                label: "Just Released!",
                style: StyleToken::Secondary,
            }),
            VariantCategory::Default => None,
        }
    }
}
