//! The markdown subset used in market-positioning text.
//!
//! Input is classified line by line:
//!
//! | line starts with       | block                 |
//! |------------------------|-----------------------|
//! | `# `, `## `, `### `    | heading level 1/2/3   |
//! | `- ` or `* `           | unordered list item   |
//! | digits, `.`, whitespace| ordered list item     |
//! | (blank)                | break                 |
//! | anything else          | paragraph             |
//!
//! Consecutive list items of the same kind are grouped into one list. Inside
//! any text, `**text**` is emphasis; an unmatched `**` stays literal.

use serde::Serialize;

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Strong(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    List { ordered: bool, items: Vec<Vec<Span>> },
    Paragraph { spans: Vec<Span> },
    Break,
}

enum Line<'a> {
    Heading(u8, &'a str),
    Item { ordered: bool, text: &'a str },
    Blank,
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix("### ") {
        return Line::Heading(3, rest);
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Line::Heading(2, rest);
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return Line::Heading(1, rest);
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Line::Item {
            ordered: false,
            text: rest,
        };
    }
    if let Some(rest) = ordered_item(line) {
        return Line::Item {
            ordered: true,
            text: rest,
        };
    }
    if line.trim().is_empty() {
        return Line::Blank;
    }
    Line::Text(line)
}

/// `12. text` -> `text`: one or more ASCII digits, a dot, one whitespace char.
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let mut chars = rest.chars();
    let ws = chars.next().filter(|c| c.is_whitespace())?;
    Some(&rest[ws.len_utf8()..])
}

/// Parse `input` into blocks.
#[must_use]
pub fn parse(input: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    if input.is_empty() {
        return blocks;
    }
    for line in input.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match classify(line) {
            Line::Heading(level, text) => blocks.push(Block::Heading {
                level,
                spans: spans(text),
            }),
            Line::Item { ordered, text } => {
                let item = spans(text);
                match blocks.last_mut() {
                    Some(Block::List {
                        ordered: current,
                        items,
                    }) if *current == ordered => items.push(item),
                    _ => blocks.push(Block::List {
                        ordered,
                        items: vec![item],
                    }),
                }
            }
            Line::Blank => blocks.push(Block::Break),
            Line::Text(text) => blocks.push(Block::Paragraph { spans: spans(text) }),
        }
    }
    blocks
}

/// Split `text` into plain and emphasized runs.
#[must_use]
pub fn spans(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            out.push(Span::Text(rest[..open].to_string()));
        }
        out.push(Span::Strong(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }
    if !rest.is_empty() {
        out.push(Span::Text(rest.to_string()));
    }
    out
}
