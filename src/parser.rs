use crate::types::{Category, Summary};

const UNTRACKED_CODE: &str = "??";

/// Categories are not exclusive: one line can bump several counters while
/// `total` grows by one. Unrecognised codes only count toward `total`.
pub fn parse_porcelain(output: &str) -> Summary {
    let mut summary = Summary::default();

    for line in output.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        summary.total += 1;

        // Short lines only match against the characters they have.
        let code: String = line.chars().take(2).collect();

        for category in Category::ALL {
            let matched = match category.status_char() {
                Some(c) => code.contains(c),
                None => code == UNTRACKED_CODE,
            };
            if matched {
                summary.bump(category);
            }
        }
    }

    summary
}
