use crate::types::Category;
use colored::Color;

pub const HEADER: Color = Color::Cyan;
pub const CLEAN: Color = Color::Green;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TOTAL: Color = Color::White;

pub fn category(category: Category) -> Color {
    match category {
        Category::Modified => Color::Yellow,
        Category::Added => Color::Green,
        Category::Deleted => Color::Red,
        Category::Renamed => Color::Magenta,
        Category::Untracked => Color::BrightBlack,
    }
}
