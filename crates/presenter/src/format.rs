//! Small text formatting helpers.

/// Count-prefixed label: `pluralize("Color", 1)` is `"1 Color"`,
/// `pluralize("Color", 3)` is `"3 Colors"`. Zero pluralizes.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
