//! Card presenter: turns a classified product into a renderer-agnostic
//! view description.
//!
//! No pixels are drawn here. The output is a plain serializable value the
//! host's rendering/styling layer consumes; style hooks are abstract
//! tokens, never concrete colors.

pub mod badge;
pub mod card;
pub mod format;
pub mod link;

pub use badge::{Badge, StyleToken};
pub use card::{CardView, PriceLine};
pub use format::pluralize;
pub use link::LinkTemplate;
