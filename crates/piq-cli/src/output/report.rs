//! Terminal panels for an intelligence report.
//!
//! Four sections, each with a count in its title and a placeholder line when
//! it has nothing to show: overview, contacts, tech stack, market
//! intelligence.

use piq_core::display::{self, NO_HEADLINE, NO_VALUE, UNKNOWN};
use piq_core::entities::{CompanyOverview, Contact, IntelligenceReport};
use piq_view::contacts::{self, ContactSort};
use piq_view::tech;

use super::markdown;
use super::table::{TableOptions, bold, paint, render_entity_table, render_tier_table};

pub const NO_OVERVIEW: &str = "No company overview data available.";
pub const NO_CONTACTS: &str = "No contacts found.";
pub const NO_TECH: &str = "No tech stack data available.";
pub const NO_MARKET: &str = "No market intelligence data available.";

/// Render every section of `report`, contacts ordered by `sort`.
#[must_use]
pub fn render(report: &IntelligenceReport, sort: ContactSort, options: TableOptions) -> String {
    let mut out = Vec::new();

    if let Some(name) = report.company_name() {
        let industry = report
            .company_overview
            .as_ref()
            .and_then(|o| display::present(o.industry.as_deref()));
        let title = if options.color { bold(name) } else { name.to_string() };
        out.push(match industry {
            Some(industry) => format!("{title}  [{industry}]"),
            None => title,
        });
        out.push(String::new());
    }

    out.push(section("Company Overview", None, options));
    out.push(overview(report.company_overview.as_ref()));

    out.push(section("Key Contacts", Some(report.contacts.len()), options));
    out.push(contact_table(&report.contacts, sort, options));

    out.push(section("Tech Stack", Some(report.tech_stack.len()), options));
    out.push(tech_stack(report, options));

    out.push(section("Market Intelligence", Some(report.market_item_count()), options));
    out.push(market(report, options));

    out.join("\n")
}

fn section(title: &str, count: Option<usize>, options: TableOptions) -> String {
    let label = match count {
        Some(count) => format!("{title} ({count})"),
        None => title.to_string(),
    };
    let line = format!("\n== {label} ==");
    if options.color { paint(&line, "36") } else { line }
}

fn overview(overview: Option<&CompanyOverview>) -> String {
    let Some(o) = overview else {
        return NO_OVERVIEW.to_string();
    };

    let fields = [
        ("Revenue", o.revenue_estimate.as_deref()),
        ("Employees", o.employee_count.as_deref()),
        ("Founded", o.founding_year.as_deref()),
        ("HQ", o.headquarters.as_deref()),
        ("Industry", o.industry.as_deref()),
        ("Company Type", o.company_type.as_deref()),
        ("Website", o.website_url.as_deref()),
    ];
    let mut lines: Vec<String> = fields
        .iter()
        .map(|(label, value)| format!("{label:<13} {}", display::or_na(*value)))
        .collect();

    if let Some(description) = display::present(o.description.as_deref()) {
        lines.push(String::new());
        lines.push(description.to_string());
    }

    if !o.leadership.is_empty() {
        lines.push(String::new());
        lines.push(String::from("Leadership"));
        for leader in &o.leadership {
            let name = display::or_na(leader.name.as_deref());
            let title = display::or_empty(leader.title.as_deref());
            lines.push(format!("  {name}  {title}").trim_end().to_string());
        }
    }

    lines.join("\n")
}

fn contact_table(contacts: &[Contact], sort: ContactSort, options: TableOptions) -> String {
    if contacts.is_empty() {
        return NO_CONTACTS.to_string();
    }
    let rows: Vec<Vec<String>> = contacts::sort_contacts(contacts, sort)
        .into_iter()
        .map(|c| {
            vec![
                display::or_na(c.name.as_deref()).to_string(),
                display::or_empty(c.title.as_deref()).to_string(),
                display::or(c.email.as_deref(), NO_VALUE).to_string(),
                display::or(c.phone.as_deref(), NO_VALUE).to_string(),
                display::or(c.linkedin_url.as_deref(), NO_VALUE).to_string(),
                c.social().unwrap_or_else(|| NO_VALUE.to_string()),
            ]
        })
        .collect();
    let headers = ["Name", "Title", "Email", "Phone", "LinkedIn", "Social"];
    let arrow = match sort.direction {
        contacts::SortDirection::Ascending => "asc",
        contacts::SortDirection::Descending => "desc",
    };
    format!(
        "{}\n(sorted by {} {arrow})",
        render_entity_table(&headers, &rows, options),
        sort.key
    )
}

fn tech_stack(report: &IntelligenceReport, options: TableOptions) -> String {
    let mut lines = Vec::new();
    if report.tech_stack.is_empty() {
        lines.push(NO_TECH.to_string());
    } else {
        for group in tech::group_by_category(&report.tech_stack) {
            let rows: Vec<Vec<String>> = group
                .items
                .iter()
                .map(|item| {
                    vec![
                        display::or(item.technology_name.as_deref(), UNKNOWN).to_string(),
                        tech::tier(item).to_string(),
                    ]
                })
                .collect();
            lines.push(format!("[{}]", group.category));
            lines.push(render_tier_table(&["Technology", "Confidence"], &rows, options, 1));
            lines.push(String::new());
        }
        lines.pop();
    }

    if let Some(summary) = display::present(report.tech_summary.as_deref()) {
        lines.push(String::new());
        lines.push(summary.to_string());
    }
    lines.join("\n")
}

fn market(report: &IntelligenceReport, options: TableOptions) -> String {
    let positioning = display::present(report.market_positioning.as_deref());
    if report.market_item_count() == 0 && positioning.is_none() {
        return NO_MARKET.to_string();
    }

    let mut blocks = Vec::new();

    if !report.recent_news.is_empty() {
        let mut lines = vec![String::from("Recent News")];
        for item in &report.recent_news {
            lines.push(format!("  {}", display::or(item.headline.as_deref(), NO_HEADLINE)));
            let source = display::or_empty(item.source.as_deref());
            let meta = match display::present(item.date.as_deref()) {
                Some(date) => format!("{source} | {date}"),
                None => source.to_string(),
            };
            let meta = meta.trim();
            if !meta.is_empty() {
                lines.push(format!("    {meta}"));
            }
            if let Some(summary) = display::present(item.summary.as_deref()) {
                lines.push(format!("    {summary}"));
            }
        }
        blocks.push(lines.join("\n"));
    }

    if !report.funding_rounds.is_empty() {
        let rows: Vec<Vec<String>> = report
            .funding_rounds
            .iter()
            .map(|f| {
                vec![
                    display::or_na(f.round_type.as_deref()).to_string(),
                    display::or_na(f.amount.as_deref()).to_string(),
                    display::or_empty(f.date.as_deref()).to_string(),
                    display::or_empty(f.investors.as_deref()).to_string(),
                ]
            })
            .collect();
        blocks.push(format!(
            "Funding Rounds\n{}",
            render_entity_table(&["Round", "Amount", "Date", "Investors"], &rows, options)
        ));
    }

    if !report.competitors.is_empty() {
        let mut lines = vec![String::from("Competitors")];
        for c in &report.competitors {
            let name = display::or(c.name.as_deref(), UNKNOWN);
            let notes = display::or_empty(c.notes.as_deref());
            lines.push(format!("  {name}  {notes}").trim_end().to_string());
        }
        blocks.push(lines.join("\n"));
    }

    if let Some(text) = positioning {
        blocks.push(format!(
            "Market Positioning\n{}",
            markdown::render(text, options.color)
        ));
    }

    blocks.join("\n\n")
}
