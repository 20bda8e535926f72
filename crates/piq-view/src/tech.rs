//! Technology stack grouping.

use piq_core::display;
use piq_core::entities::TechItem;
use piq_core::enums::ConfidenceTier;
use serde::Serialize;

/// Group name for technologies without a category.
pub const OTHER_CATEGORY: &str = "Other";

/// Technologies sharing one category, in their original relative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a TechItem>,
}

/// Group `items` by category. Groups appear in the order their category is
/// first seen; an absent or empty category is [`OTHER_CATEGORY`].
#[must_use]
pub fn group_by_category(items: &[TechItem]) -> Vec<TechGroup<'_>> {
    let mut groups: Vec<TechGroup<'_>> = Vec::new();
    for item in items {
        let category = display::or(item.category.as_deref(), OTHER_CATEGORY);
        match groups.iter_mut().find(|group| group.category == category) {
            Some(group) => group.items.push(item),
            None => groups.push(TechGroup {
                category,
                items: vec![item],
            }),
        }
    }
    groups
}

#[must_use]
pub fn tier(item: &TechItem) -> ConfidenceTier {
    ConfidenceTier::from_label(item.confidence.as_deref())
}
