#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table of string rows. Column widths are measured in
/// characters and shrunk, widest first, to fit `max_width`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
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
                .max(MIN_COLUMN)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false, None))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let clipped = clip(cell, *width);
                let numeric = looks_numeric(&clipped);
                let color = if options.color { color_code(&clipped) } else { None };
                pad(&clipped, *width, numeric, color)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
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

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn pad(value: &str, width: usize, right_align: bool, color: Option<&str>) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    let value = match color {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    };
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// ANSI color for verdict-like cell values.
fn color_code(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "real" | "likely_real" | "trusted" | "supports" | "true" | "healthy" => Some("32"),
        "inconclusive" | "neutral" | "ml_only" | "unavailable" | "unknown" => Some("33"),
        "fake" | "likely_fake" | "suspect" | "refutes" | "false" | "failed" | "error" => {
            Some("31")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_mixed_widths() {
        let rows = vec![
            vec!["1".to_string(), "REAL".to_string()],
            vec!["200".to_string(), "FAKE".to_string()],
        ];
        let table = render_table(&["index", "prediction"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "index   prediction");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "     1  REAL      ");
        assert_eq!(lines[3], "   200  FAKE      ");
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let rows = vec![vec!["key".to_string(), "x".repeat(80)]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_table(&["key", "value"], &rows, options);
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "{line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_verdict_cells() {
        let rows = vec![vec!["FAKE".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(&["prediction"], &rows, options);
        assert!(table.contains("\u{1b}[31mFAKE\u{1b}[0m"));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let table = render_table(&["a", "b"], &rows, PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.contains('-')));
    }
}
