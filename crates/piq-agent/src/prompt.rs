//! Natural-language prompts sent to the agents.

use piq_core::entities::LEAD_GEOGRAPHY;
use piq_core::query::{IntelQuery, LeadQuery};

/// `Research the company: <name>`, plus optional domain and contact lines.
#[must_use]
pub fn intel(query: &IntelQuery) -> String {
    let mut message = format!("Research the company: {}", query.company);
    if let Some(domain) = &query.domain {
        message.push_str("\nDomain: ");
        message.push_str(domain);
    }
    if let Some(contacts) = &query.contacts {
        message.push_str("\nKey contacts to look up: ");
        message.push_str(contacts);
    }
    message
}

#[must_use]
pub fn leads(query: &LeadQuery) -> String {
    format!(
        "Find companies in {geo} with {size} employees that have a {designation} \
         (or equivalent) role. For each company return company_name, industry, city, \
         employee_size_range, website, designation_found, contact_person and source.\n\
         Designation: {designation}\nEmployee size: {size}\nGeography: {geo}",
        geo = LEAD_GEOGRAPHY,
        size = query.employee_size,
        designation = query.designation,
    )
}
