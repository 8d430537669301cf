use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use std::io::Write;

use super::colors::*;
use crate::error::AppError;
use crate::models::MatchOutcome;

/// Width of the rendered page in characters
pub const PAGE_WIDTH: usize = 72;
const TITLE_WIDTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRow {
    Heading(String),
    Text(String),
    /// Indented secondary line, e.g. a goal under its match
    Detail(String),
    /// Colored result letters, oldest first
    Results(Vec<MatchOutcome>),
    Blank,
}

/// A text page: title bar, subheader and content rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsPage {
    title: String,
    subheader: String,
    rows: Vec<PageRow>,
}

/// Single-letter result marker (Vinst, Förlust, Oavgjort).
pub fn outcome_letter(outcome: MatchOutcome) -> char {
    match outcome {
        MatchOutcome::Win => 'V',
        MatchOutcome::Loss => 'F',
        MatchOutcome::Draw => 'O',
    }
}

impl StatsPage {
    pub fn new(title: impl Into<String>, subheader: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subheader: subheader.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_heading(&mut self, text: impl Into<String>) {
        if !self.rows.is_empty() {
            self.rows.push(PageRow::Blank);
        }
        self.rows.push(PageRow::Heading(text.into()));
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.rows.push(PageRow::Text(text.into()));
    }

    pub fn add_detail(&mut self, text: impl Into<String>) {
        self.rows.push(PageRow::Detail(text.into()));
    }

    pub fn add_results(&mut self, results: Vec<MatchOutcome>) {
        self.rows.push(PageRow::Results(results));
    }

    pub fn rows(&self) -> &[PageRow] {
        &self.rows
    }

    /// The page as uncolored lines, header first.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![self.header_line(), self.subheader.clone()];
        lines.extend(self.rows.iter().map(row_text));
        lines
    }

    fn header_line(&self) -> String {
        format!(
            "{:<title$}{:>rest$}",
            self.title,
            crate::constants::TEAM_NAME,
            title = TITLE_WIDTH,
            rest = PAGE_WIDTH - TITLE_WIDTH
        )
    }

    /// Writes the page with colors to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        queue!(
            out,
            SetBackgroundColor(header_bg()),
            SetForegroundColor(header_fg()),
            Print(self.header_line()),
            ResetColor,
            Print("\n"),
            SetForegroundColor(subheader_fg()),
            Print(&self.subheader),
            ResetColor,
            Print("\n\n")
        )?;

        for row in &self.rows {
            match row {
                PageRow::Heading(text) => {
                    queue!(out, SetForegroundColor(heading_fg()), Print(text))?;
                }
                PageRow::Text(text) => {
                    queue!(out, SetForegroundColor(text_fg()), Print(text))?;
                }
                PageRow::Detail(text) => {
                    queue!(out, SetForegroundColor(detail_fg()), Print(format!("  {text}")))?;
                }
                PageRow::Results(results) => {
                    for (i, outcome) in results.iter().enumerate() {
                        if i > 0 {
                            queue!(out, Print(" "))?;
                        }
                        queue!(
                            out,
                            SetForegroundColor(outcome_fg(*outcome)),
                            Print(outcome_letter(*outcome))
                        )?;
                    }
                }
                PageRow::Blank => {}
            }
            queue!(out, ResetColor, Print("\n"))?;
        }

        out.flush()?;
        Ok(())
    }
}

fn row_text(row: &PageRow) -> String {
    match row {
        PageRow::Heading(text) | PageRow::Text(text) => text.clone(),
        PageRow::Detail(text) => format!("  {text}"),
        PageRow::Results(results) => results
            .iter()
            .map(|o| outcome_letter(*o).to_string())
            .collect::<Vec<_>>()
            .join(" "),
        PageRow::Blank => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_follow_row_order() {
        let mut page = StatsPage::new("ÖVERSIKT", "Säsong");
        page.add_heading("Senaste 5 matcherna");
        page.add_results(vec![MatchOutcome::Win, MatchOutcome::Draw, MatchOutcome::Loss]);
        page.add_heading("Målratio");
        page.add_detail("12 - 8");

        let lines = page.plain_lines();
        assert!(lines[0].starts_with("ÖVERSIKT"));
        assert!(lines[0].ends_with(crate::constants::TEAM_NAME));
        assert_eq!(lines[1], "Säsong");
        assert_eq!(
            &lines[2..],
            &[
                "Senaste 5 matcherna".to_string(),
                "V O F".to_string(),
                String::new(),
                "Målratio".to_string(),
                "  12 - 8".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_writes_every_row() {
        let mut page = StatsPage::new("STATISTIK", "Skytteliga");
        page.add_text("1. Erik Andersson");
        page.add_results(vec![MatchOutcome::Win]);

        let mut out = Vec::new();
        page.render(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains("STATISTIK"));
        assert!(rendered.contains("1. Erik Andersson"));
        assert!(rendered.contains('V'));
        assert!(rendered.contains("\x1b["));
    }
}
