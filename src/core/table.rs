use crate::domain::model::{LanguageRow, SalaryStatistics};
use crate::utils::error::{Result, StatsError};

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

fn check_row(row: &LanguageRow) -> Result<()> {
    let stats = &row.stats;
    if stats.vacancies_processed > stats.vacancies_found {
        return Err(StatsError::ProcessingError {
            message: format!(
                "{}: {} vacancies processed but only {} found",
                row.language, stats.vacancies_processed, stats.vacancies_found
            ),
        });
    }
    if stats.vacancies_processed == 0 && stats.average_salary != 0 {
        return Err(StatsError::ProcessingError {
            message: format!(
                "{}: average salary {} without any processed vacancy",
                row.language, stats.average_salary
            ),
        });
    }
    Ok(())
}

fn border(widths: &[usize], left: &str, junction: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(junction), right)
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<width$} ", cell, width = *width))
        .collect();
    format!("│{}│", padded.join("│"))
}

/// 標題嵌入上框線；放不下就省略
fn title_border(top: &str, title: &str) -> String {
    let top_chars: Vec<char> = top.chars().collect();
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > top_chars.len() {
        return top.to_string();
    }

    let mut line = String::new();
    line.push(top_chars[0]);
    line.push_str(title);
    line.extend(&top_chars[1 + title_len..]);
    line
}

/// 將各語言統計畫成表格，列順序與呼叫端給的語言順序相同
pub fn render_table(statistics: &SalaryStatistics) -> Result<String> {
    let mut rows: Vec<Vec<String>> = vec![HEADERS.iter().map(|h| h.to_string()).collect()];
    for row in &statistics.languages {
        check_row(row)?;
        rows.push(vec![
            row.language.clone(),
            row.stats.vacancies_found.to_string(),
            row.stats.vacancies_processed.to_string(),
            row.stats.average_salary.to_string(),
        ]);
    }

    let mut widths = vec![0usize; HEADERS.len()];
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let top = border(&widths, "┌", "┬", "┐");
    let mut lines = vec![title_border(&top, &statistics.title)];
    lines.push(row_line(&rows[0], &widths));
    lines.push(border(&widths, "├", "┼", "┤"));
    for cells in &rows[1..] {
        lines.push(row_line(cells, &widths));
    }
    lines.push(border(&widths, "└", "┴", "┘"));

    Ok(lines.join("\n"))
}
