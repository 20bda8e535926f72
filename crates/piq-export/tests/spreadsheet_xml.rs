use piq_core::entities::LeadCompany;
use piq_core::sample::sample_leads;
use piq_export::spreadsheet::{COLUMNS, export};
use pretty_assertions::assert_eq;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Parse the workbook and return the text of every `<Data>` cell, row by row.
fn parse_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let doc = std::str::from_utf8(bytes).expect("utf-8 output");
    let mut reader = Reader::from_str(doc);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut in_data = false;
    let mut cell = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"Row" => rows.push(Vec::new()),
                b"Data" => {
                    in_data = true;
                    cell.clear();
                }
                _ => {}
            },
            Ok(Event::Text(e)) if in_data => {
                cell.push_str(&e.unescape().expect("valid entity"));
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"Data" => {
                in_data = false;
                rows.last_mut().expect("cell inside a row").push(cell.clone());
            }
            Ok(Event::Eof) => break,
            Err(error) => panic!("malformed XML at {}: {error}", reader.buffer_position()),
            _ => {}
        }
    }
    rows
}

#[test]
fn empty_list_is_well_formed_with_header_only() {
    let rows = parse_rows(&export(&[], "CTO", "51-200"));
    assert_eq!(rows.len(), 1);
    let headers: Vec<&str> = COLUMNS.iter().map(|(h, _)| *h).collect();
    assert_eq!(rows[0], headers);
}

#[test]
fn special_characters_survive_a_parse() {
    let nasty = LeadCompany {
        company_name: Some("Shop & Ship <Logistics>".into()),
        industry: Some("\"Quoted\" 'industry'".into()),
        city: Some("Pune".into()),
        ..Default::default()
    };
    let rows = parse_rows(&export(&[nasty], "R&D <Head>", "11-50"));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "Shop & Ship <Logistics>");
    assert_eq!(rows[1][1], "\"Quoted\" 'industry'");
    assert_eq!(rows[1][2], "Pune");
    assert_eq!(rows[1][3], "");
}

#[test]
fn sample_leads_export_one_row_per_company() {
    let leads = sample_leads();
    let rows = parse_rows(&export(&leads.companies, "CTO", "51-200"));
    assert_eq!(rows.len(), leads.companies.len() + 1);
    assert!(rows[1..].iter().all(|row| row.len() == COLUMNS.len()));
    assert_eq!(
        rows[1][0],
        leads.companies[0].company_name.clone().unwrap_or_default()
    );
}

#[test]
fn workbook_declares_excel_progid() {
    let doc = String::from_utf8(export(&[], "CTO", "51-200")).unwrap();
    assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<?mso-application progid=\"Excel.Sheet\"?>"));
    assert!(doc.contains("<Worksheet ss:Name=\"CTO\">"));
}

#[test]
fn control_characters_never_reach_the_document() {
    let company = LeadCompany {
        company_name: Some("Acme\u{1}\u{b}Corp".into()),
        city: Some("A & B <Corp> \"X\"".into()),
        ..Default::default()
    };
    let bytes = export(&[company], "CTO\u{7}", "51-200");
    let forbidden = bytes
        .iter()
        .any(|b| *b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r'));
    assert!(!forbidden, "workbook carries a character XML 1.0 forbids");

    let rows = parse_rows(&bytes);
    assert_eq!(rows[1][0], "AcmeCorp");
    assert_eq!(rows[1][2], "A & B <Corp> \"X\"");
}
