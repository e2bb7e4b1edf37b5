use crate::domain::model::LanguageStatistics;

pub const TABLE_HEADERS: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Draws `statistics` as a double-line box table with `title` in the top border.
///
/// ```text
/// ╔HeadHunter Moscow═════╦═════════════════╦═════════════════════╦════════════════╗
/// ║ Programming language ║ Vacancies found ║ Vacancies processed ║ Average salary ║
/// ╠══════════════════════╬═════════════════╬═════════════════════╬════════════════╣
/// ║ Python               ║ 1253            ║ 402                 ║ 187000         ║
/// ╚══════════════════════╩═════════════════╩═════════════════════╩════════════════╝
/// ```
pub fn render_table(title: &str, statistics: &LanguageStatistics) -> String {
    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = statistics
        .iter()
        .map(|(language, stat)| {
            vec![
                language.to_string(),
                stat.vacancies_found.to_string(),
                stat.vacancies_processed.to_string(),
                stat.average_salary.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(with_title(border(&widths, '╔', '╦', '╗'), title));
    lines.push(row_line(&header, &widths));
    lines.push(border(&widths, '╠', '╬', '╣'));
    for row in &rows {
        lines.push(row_line(row, &widths));
    }
    lines.push(border(&widths, '╚', '╩', '╝'));

    lines.join("\n")
}

/// Renders every section one after another, separated by a blank line.
pub fn render_report<'a, I>(sections: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a LanguageStatistics)>,
{
    sections
        .into_iter()
        .map(|(title, statistics)| render_table(title, statistics))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let separator = middle.to_string();
    let segments: Vec<String> = widths.iter().map(|w| "═".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(separator.as_str()), right)
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(padding))
        })
        .collect();
    format!("║{}║", padded.join("║"))
}

// Title replaces the start of the top border; dropped if it does not fit.
fn with_title(top: String, title: &str) -> String {
    let chars: Vec<char> = top.chars().collect();
    let inner = chars.len() - 2;
    let title_len = title.chars().count();
    if title.is_empty() || title_len > inner {
        return top;
    }

    let mut line = String::with_capacity(top.len() + title.len());
    line.push(chars[0]);
    line.push_str(title);
    line.extend(&chars[1 + title_len..]);
    line
}
