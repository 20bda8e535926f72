use piq_core::enums::EmployeeSize;
use piq_view::contacts::{ContactSort, SortDirection, SortKey};

use crate::cli::ContactSortArg;

/// Parse an employee-size bucket such as `51-200` or `5000+`.
pub fn parse_size(raw: &str) -> anyhow::Result<EmployeeSize> {
    raw.parse::<EmployeeSize>().map_err(anyhow::Error::from)
}

/// Contact ordering from `--sort` and `--desc`.
#[must_use]
pub const fn contact_sort(key: ContactSortArg, desc: bool) -> ContactSort {
    let key = match key {
        ContactSortArg::Name => SortKey::Name,
        ContactSortArg::Title => SortKey::Title,
    };
    let direction = if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    ContactSort::new(key, direction)
}
