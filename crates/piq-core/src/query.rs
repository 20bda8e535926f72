//! Validated search inputs.
//!
//! A query can only be built from non-blank required fields, so a value of
//! these types is always safe to send to the agent. Every field is stored
//! trimmed.

use serde::Serialize;

use crate::enums::EmployeeSize;
use crate::errors::CoreError;

/// A company-research request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntelQuery {
    pub company: String,
    pub domain: Option<String>,
    pub contacts: Option<String>,
}

impl IntelQuery {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `company` is blank.
    pub fn new(company: &str, domain: Option<&str>, contacts: Option<&str>) -> Result<Self, CoreError> {
        let company = company.trim();
        if company.is_empty() {
            return Err(CoreError::Validation("company name is required".into()));
        }
        Ok(Self {
            company: company.to_string(),
            domain: non_blank(domain),
            contacts: non_blank(contacts),
        })
    }
}

/// A lead search. The geography is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadQuery {
    pub designation: String,
    pub employee_size: EmployeeSize,
}

impl LeadQuery {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `designation` is blank.
    pub fn new(designation: &str, employee_size: EmployeeSize) -> Result<Self, CoreError> {
        let designation = designation.trim();
        if designation.is_empty() {
            return Err(CoreError::Validation("designation is required".into()));
        }
        Ok(Self {
            designation: designation.to_string(),
            employee_size,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_company_is_rejected() {
        assert!(matches!(IntelQuery::new("   ", None, None), Err(CoreError::Validation(_))));
    }

    #[test]
    fn optional_fields_are_trimmed_or_dropped() {
        let query = IntelQuery::new(" Acme ", Some(" acme.com "), Some("  ")).unwrap();
        assert_eq!(query.company, "Acme");
        assert_eq!(query.domain.as_deref(), Some("acme.com"));
        assert_eq!(query.contacts, None);
    }

    #[test]
    fn blank_designation_is_rejected() {
        assert!(LeadQuery::new("", EmployeeSize::Medium).is_err());
        let query = LeadQuery::new(" CTO ", EmployeeSize::Medium).unwrap();
        assert_eq!(query.designation, "CTO");
    }
}
