//! Lead lists as a SpreadsheetML 2003 workbook.
//!
//! The output is a single XML document that Excel opens as a legacy `.xls`
//! workbook: one worksheet, a bold filled header row, then one row per
//! company. Absent fields become empty cells.

use piq_core::display;
use piq_core::entities::LeadCompany;

/// Excel's limit on worksheet name length, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Worksheet name used when the designation is blank.
pub const FALLBACK_SHEET_NAME: &str = "Leads";

type Field = fn(&LeadCompany) -> Option<&str>;

/// Column headers and the field each column reads, in output order.
pub const COLUMNS: [(&str, Field); 8] = [
    ("Company Name", |c| c.company_name.as_deref()),
    ("Industry", |c| c.industry.as_deref()),
    ("City", |c| c.city.as_deref()),
    ("Employee Size", |c| c.employee_size_range.as_deref()),
    ("Website", |c| c.website.as_deref()),
    ("Designation Found", |c| c.designation_found.as_deref()),
    ("Contact Person", |c| c.contact_person.as_deref()),
    ("Source", |c| c.source.as_deref()),
];

const HEADER_STYLE_ID: &str = "header";

const PREAMBLE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:o="urn:schemas-microsoft-com:office:office"
 xmlns:x="urn:schemas-microsoft-com:office:excel"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:html="http://www.w3.org/TR/REC-html40">
 <Styles>
  <Style ss:ID="header">
   <Font ss:Bold="1"/>
   <Interior ss:Color="#D9E1F2" ss:Pattern="Solid"/>
  </Style>
 </Styles>
"##;

/// Render `companies` as a workbook whose sheet is named after `designation`.
///
/// `employee_size` is accepted so callers pass the full search context; it
/// only affects the suggested file name
/// ([`filename::leads_spreadsheet`](crate::filename::leads_spreadsheet)).
#[must_use]
pub fn export(companies: &[LeadCompany], designation: &str, employee_size: &str) -> Vec<u8> {
    let mut doc = String::with_capacity(PREAMBLE.len() + 256 * (companies.len() + 1));
    doc.push_str(PREAMBLE);

    doc.push_str(" <Worksheet ss:Name=\"");
    doc.push_str(&escape_xml(&sheet_name(designation)));
    doc.push_str("\">\n  <Table>\n");

    push_row(&mut doc, COLUMNS.iter().map(|(header, _)| *header), Some(HEADER_STYLE_ID));
    for company in companies {
        push_row(
            &mut doc,
            COLUMNS.iter().map(|(_, field)| display::or_empty(field(company))),
            None,
        );
    }

    doc.push_str("  </Table>\n </Worksheet>\n</Workbook>\n");
    tracing::debug!(
        rows = companies.len(),
        designation,
        employee_size,
        "spreadsheet rendered"
    );
    doc.into_bytes()
}

fn push_row<'a>(doc: &mut String, cells: impl Iterator<Item = &'a str>, style: Option<&str>) {
    doc.push_str("   <Row>\n");
    for value in cells {
        doc.push_str("    <Cell");
        if let Some(style) = style {
            doc.push_str(" ss:StyleID=\"");
            doc.push_str(style);
            doc.push('"');
        }
        doc.push_str("><Data ss:Type=\"String\">");
        doc.push_str(&escape_xml(value));
        doc.push_str("</Data></Cell>\n");
    }
    doc.push_str("   </Row>\n");
}

/// Worksheet name derived from the designation.
///
/// Characters Excel forbids in sheet names (`[ ] : * ? / \`) become `_`, the
/// result is cut to [`MAX_SHEET_NAME_LEN`] characters, and a blank designation
/// falls back to [`FALLBACK_SHEET_NAME`].
#[must_use]
pub fn sheet_name(designation: &str) -> String {
    let trimmed = designation.trim();
    if trimmed.is_empty() {
        return FALLBACK_SHEET_NAME.to_string();
    }
    trimmed
        .chars()
        .map(|ch| match ch {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Escape the five XML special characters and drop control characters
/// XML 1.0 cannot carry (everything below U+0020 except tab, LF and CR).
#[must_use]
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            c if c < '\u{20}' => {}
            c => out.push(c),
        }
    }
    out
}
