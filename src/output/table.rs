use crate::collect::ProviderReport;

const HEADER: [&str; 4] = ["Language", "Vacancies found", "Vacancies processed", "Average salary"];

/// Render a report as an ASCII table with the title set into the top border:
///
/// ```text
/// +HeadHunter Moscow---+-----------------+---------------------+----------------+
/// | Language           | Vacancies found | Vacancies processed | Average salary |
/// +--------------------+-----------------+---------------------+----------------+
/// | Python             | 1203            | 417                 | 231000         |
/// +--------------------+-----------------+---------------------+----------------+
/// ```
pub fn render(report: &ProviderReport) -> String {
    let mut rows: Vec<[String; 4]> = vec![HEADER.map(str::to_string)];
    for row in report.languages.rows() {
        rows.push([
            row.language.clone(),
            row.summary.vacancies_found.to_string(),
            row.summary.vacancies_processed.to_string(),
            row.summary.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();
    out.push_str(&titled(&border, &report.title));
    out.push('\n');
    for (i, row) in rows.iter().enumerate() {
        out.push('|');
        for (cell, w) in row.iter().zip(widths) {
            let pad = w - cell.chars().count();
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 1));
            out.push('|');
        }
        out.push('\n');
        if i == 0 {
            out.push_str(&border);
            out.push('\n');
        }
    }
    out.push_str(&border);
    out.push('\n');
    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

// The title overwrites the border right after the leading '+' when it fits.
fn titled(border: &str, title: &str) -> String {
    let border: Vec<char> = border.chars().collect();
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border.len() {
        return border.into_iter().collect();
    }
    let mut out = String::from("+");
    out.push_str(title);
    out.extend(&border[1 + title_len..]);
    out
}
