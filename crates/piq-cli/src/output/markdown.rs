//! Terminal rendering of parsed market-positioning text.

use piq_view::markdown::{self, Block, Span};

use super::table::{bold, paint};

/// Render markdown-subset `input` for the terminal. Headings are underlined
/// by level, unordered items get `•`, ordered items are renumbered from 1.
#[must_use]
pub fn render(input: &str, color: bool) -> String {
    let mut lines = Vec::new();
    for block in markdown::parse(input) {
        match block {
            Block::Heading { level, spans } => {
                let text = inline(&spans, color);
                lines.push(if color { bold(&text) } else { text });
                if level < 3 {
                    let rule = if level == 1 { '=' } else { '-' };
                    lines.push(rule.to_string().repeat(plain_len(&spans)));
                }
            }
            Block::List { ordered, items } => {
                for (n, item) in items.iter().enumerate() {
                    let marker = if ordered {
                        format!("{}.", n + 1)
                    } else {
                        String::from("•")
                    };
                    lines.push(format!("  {marker} {}", inline(item, color)));
                }
            }
            Block::Paragraph { spans } => lines.push(inline(&spans, color)),
            Block::Break => lines.push(String::new()),
        }
    }
    lines.join("\n")
}

fn inline(spans: &[Span], color: bool) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(text) => text.clone(),
            Span::Strong(text) if color => paint(text, "1"),
            Span::Strong(text) => format!("*{text}*"),
        })
        .collect()
}

fn plain_len(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(text) | Span::Strong(text) => text.chars().count(),
        })
        .sum()
}
