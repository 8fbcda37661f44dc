mod colors;

use crate::types::{Category, Summary};
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

const SEPARATOR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Header(String),
    Separator,
    Clean,
    Count { category: Category, count: usize },
    Total(usize),
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Header(label) => write!(f, "📊 Git status for {}", label),
            ReportLine::Separator => write!(f, "{}", "─".repeat(SEPARATOR_WIDTH)),
            ReportLine::Clean => write!(f, "✨ Working tree clean, nothing pending"),
            ReportLine::Count { category, count } => {
                write!(f, "{} {}: {}", category.symbol(), category.label(), count)
            }
            ReportLine::Total(total) => write!(f, "📦 Total: {}", total),
        }
    }
}

impl ReportLine {
    fn styled(&self) -> String {
        let text = self.to_string();
        let color = match self {
            ReportLine::Header(_) => colors::HEADER,
            ReportLine::Separator => colors::SEPARATOR,
            ReportLine::Clean => colors::CLEAN,
            ReportLine::Count { category, .. } => colors::category(*category),
            ReportLine::Total(_) => colors::TOTAL,
        };
        let painted = text.as_str().color(color);
        match self {
            ReportLine::Header(_) | ReportLine::Total(_) => painted.bold().to_string(),
            _ => painted.to_string(),
        }
    }
}

pub fn render(summary: &Summary, label: &str) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::Header(label.to_string()), ReportLine::Separator];

    if summary.is_clean() {
        lines.push(ReportLine::Clean);
        lines.push(ReportLine::Separator);
        return lines;
    }

    lines.extend(Category::ALL.into_iter().filter_map(|category| {
        let count = summary.count(category);
        (count > 0).then_some(ReportLine::Count { category, count })
    }));

    lines.push(ReportLine::Separator);
    lines.push(ReportLine::Total(summary.total));
    lines.push(ReportLine::Separator);
    lines
}

pub fn write_report(out: &mut impl Write, lines: &[ReportLine], color: bool) -> io::Result<()> {
    for line in lines {
        if color {
            writeln!(out, "{}", line.styled())?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()
}
