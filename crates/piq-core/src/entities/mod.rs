//! Report entities and history snapshots.

mod history;
mod intel;
mod leads;

pub use history::{HistoryEntry, LeadHistoryEntry};
pub use intel::{
    CompanyOverview, Competitor, Contact, FundingRound, IntelligenceReport, Leader, NewsItem,
    TechItem,
};
pub use leads::{LEAD_GEOGRAPHY, LeadCompany, LeadFinderResult};
