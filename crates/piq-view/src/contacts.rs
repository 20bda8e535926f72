//! Contact table ordering.

use std::cmp::Ordering;
use std::fmt;

use piq_core::entities::Contact;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Title,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
        }
    }

    fn value(self, contact: &Contact) -> &str {
        let field = match self {
            Self::Name => contact.name.as_deref(),
            Self::Title => contact.title.as_deref(),
        };
        field.unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Current sort of the contact table. Defaults to name, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for ContactSort {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl ContactSort {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Selecting the active key flips the direction; selecting another key
    /// switches to it in ascending order.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if key == self.key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}

/// Contacts ordered by `sort`.
///
/// Comparison is byte-wise and case-sensitive; a missing key sorts as the
/// empty string. The sort is stable in both directions, so contacts with
/// equal keys keep their original relative order.
#[must_use]
pub fn sort_contacts(contacts: &[Contact], sort: ContactSort) -> Vec<&Contact> {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    sorted.sort_by(|a, b| {
        let ordering: Ordering = sort.key.value(a).cmp(sort.key.value(b));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn contact(name: Option<&str>, title: Option<&str>) -> Contact {
        Contact {
            name: name.map(str::to_string),
            title: title.map(str::to_string),
            ..Default::default()
        }
    }

    fn names<'a>(contacts: &[&'a Contact]) -> Vec<&'a str> {
        contacts.iter().map(|c| c.name.as_deref().unwrap_or("<none>")).collect()
    }

    #[test]
    fn ascending_by_name_is_case_sensitive() {
        let contacts = vec![
            contact(Some("bob"), None),
            contact(Some("Alice"), None),
            contact(Some("Bob"), None),
        ];
        let sorted = sort_contacts(&contacts, ContactSort::default());
        assert_eq!(names(&sorted), vec!["Alice", "Bob", "bob"]);
    }

    #[test]
    fn title_sort_orders_by_title_not_name() {
        let contacts = vec![contact(Some("Bob"), Some("Zed")), contact(Some("Ann"), Some("Abe"))];
        let asc = sort_contacts(&contacts, ContactSort::new(SortKey::Title, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["Ann", "Bob"]);
        let desc = sort_contacts(&contacts, ContactSort::new(SortKey::Title, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["Bob", "Ann"]);
    }

    #[test]
    fn missing_key_sorts_first_ascending_and_last_descending() {
        let contacts = vec![contact(Some("Zed"), Some("CEO")), contact(None, Some("CTO"))];
        let asc = sort_contacts(&contacts, ContactSort::default());
        assert_eq!(names(&asc), vec!["<none>", "Zed"]);
        let desc = sort_contacts(&contacts, ContactSort::new(SortKey::Name, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["Zed", "<none>"]);
    }

    #[test]
    fn equal_keys_keep_original_order_both_ways() {
        let contacts = vec![
            contact(Some("A"), Some("VP")),
            contact(Some("B"), Some("CEO")),
            contact(Some("C"), Some("VP")),
        ];
        let asc = sort_contacts(&contacts, ContactSort::new(SortKey::Title, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["B", "A", "C"]);
        let desc = sort_contacts(&contacts, ContactSort::new(SortKey::Title, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["A", "C", "B"]);
    }

    #[test]
    fn sorting_does_not_touch_source() {
        let contacts = vec![contact(Some("b"), None), contact(Some("a"), None)];
        let _ = sort_contacts(&contacts, ContactSort::default());
        assert_eq!(contacts[0].name.as_deref(), Some("b"));
    }

    #[test]
    fn toggle_flips_same_key_and_resets_new_key() {
        let sort = ContactSort::default();
        let flipped = sort.toggle(SortKey::Name);
        assert_eq!(flipped.direction, SortDirection::Descending);
        assert_eq!(flipped.toggle(SortKey::Name), sort);

        let by_title = flipped.toggle(SortKey::Title);
        assert_eq!(by_title, ContactSort::new(SortKey::Title, SortDirection::Ascending));
    }
}
