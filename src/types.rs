#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Modified,
    Added,
    Deleted,
    Renamed,
    Untracked,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Modified,
        Category::Added,
        Category::Deleted,
        Category::Renamed,
        Category::Untracked,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Modified => "Modified",
            Category::Added => "Added",
            Category::Deleted => "Deleted",
            Category::Renamed => "Renamed",
            Category::Untracked => "Untracked",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Category::Modified => "📝",
            Category::Added => "➕",
            Category::Deleted => "🗑️",
            Category::Renamed => "🔀",
            Category::Untracked => "❓",
        }
    }

    pub fn status_char(&self) -> Option<char> {
        match self {
            Category::Modified => Some('M'),
            Category::Added => Some('A'),
            Category::Deleted => Some('D'),
            Category::Renamed => Some('R'),
            Category::Untracked => None,
        }
    }
}

// `total` counts lines, not the sum of the categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub modified: usize,
    pub added: usize,
    pub deleted: usize,
    pub renamed: usize,
    pub untracked: usize,
    pub total: usize,
}

impl Summary {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Modified => self.modified,
            Category::Added => self.added,
            Category::Deleted => self.deleted,
            Category::Renamed => self.renamed,
            Category::Untracked => self.untracked,
        }
    }

    pub(crate) fn bump(&mut self, category: Category) {
        let slot = match category {
            Category::Modified => &mut self.modified,
            Category::Added => &mut self.added,
            Category::Deleted => &mut self.deleted,
            Category::Renamed => &mut self.renamed,
            Category::Untracked => &mut self.untracked,
        };
        *slot += 1;
    }

    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}
