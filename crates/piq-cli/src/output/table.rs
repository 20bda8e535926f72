use piq_core::enums::ConfidenceTier;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    render(headers, rows, options, None)
}

/// Like [`render_entity_table`], but cells in `tier_column` are colored by
/// confidence tier when `options.color` is set.
#[must_use]
pub fn render_tier_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
    tier_column: usize,
) -> String {
    render(headers, rows, options, Some(tier_column))
}

fn render(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
    tier_column: Option<usize>,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            let text = if options.color { bold(&text) } else { text };
            format_cell(&text, *width)
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider = "-".repeat(strip_ansi(&header_line).chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("", String::as_str);
                let truncated = truncate_text(value, *width);
                let colored = if options.color && tier_column == Some(index) {
                    colorize_tier(&truncated)
                } else {
                    truncated
                };
                format_cell(&colored, *width)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_WIDTH: usize = 4;

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].chars().count().max(MIN_WIDTH);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

pub fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn format_cell(value: &str, width: usize) -> String {
    let plain_len = strip_ansi(value).chars().count();
    let pad = width.saturating_sub(plain_len);
    format!("{}{}", value, " ".repeat(pad))
}

fn colorize_tier(value: &str) -> String {
    let code = match ConfidenceTier::from_label(Some(value)) {
        ConfidenceTier::Confirmed => "32",
        ConfidenceTier::Likely => "34",
        ConfidenceTier::Possible => "33",
        ConfidenceTier::Unknown => return value.to_string(),
    };
    paint(value, code)
}

/// Wrap `value` in an SGR escape.
#[must_use]
pub fn paint(value: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[must_use]
pub fn bold(value: &str) -> String {
    paint(value, "1")
}

#[must_use]
pub fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}
