//! Navigation target construction.

use cardstock_core::ProductSlug;

/// Path template with a `{slug}` placeholder.
///
/// The presenter only fills in the identifier; route structure belongs to
/// the host application, which may supply its own template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    template: String,
}

impl LinkTemplate {
    const PLACEHOLDER: &'static str = "{slug}";

    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Fill the placeholder with the product identifier.
    pub fn resolve(&self, slug: &ProductSlug) -> String {
        self.template.replace(Self::PLACEHOLDER, slug.as_str())
    }
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self::new("/products/{slug}")
    }
}
