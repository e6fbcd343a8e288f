//! FAQ behavior: category tabs, live search, and the accordion.
//!
//! The search is word-based and case-insensitive: the query is split on
//! whitespace and an item stays visible only when its combined question and
//! answer text contains every word. While a query is active the category
//! filter is suspended and all categories are searched; clearing the query
//! restores the active category's normal item set. Expansion state is kept
//! across filtering.

use std::collections::HashSet;

use unicode_width::UnicodeWidthStr;

use crate::page::{FaqCategory, FaqEntry};
use crate::widgets::input_field::InputField;

/// Interactive state for the FAQ section.
#[derive(Debug, Clone)]
pub struct FaqWidget {
    pub active_category: FaqCategory,
    pub search: InputField,
    /// Indices into the catalog of items whose answers are open.
    expanded: HashSet<usize>,
}

impl FaqWidget {
    /// Activate on the given catalog. Nothing to do without entries.
    pub fn mount(catalog: &[FaqEntry]) -> Option<Self> {
        if catalog.is_empty() {
            return None;
        }
        Some(Self {
            active_category: FaqCategory::Algemeen,
            search: InputField::new(),
            expanded: HashSet::new(),
        })
    }

    /// Lowercased whitespace-split words of the current query.
    fn query_words(&self) -> Vec<String> {
        self.search
            .value()
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn matches(entry: &FaqEntry, words: &[String]) -> bool {
        let haystack = format!("{} {}", entry.question, entry.answer).to_lowercase();
        words.iter().all(|word| haystack.contains(word.as_str()))
    }

    /// Catalog indices of the items currently shown, in catalog order.
    pub fn visible_indices(&self, catalog: &[FaqEntry]) -> Vec<usize> {
        let words = self.query_words();
        catalog
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                if words.is_empty() {
                    entry.category == self.active_category
                } else {
                    Self::matches(entry, &words)
                }
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether a query is currently filtering across categories.
    pub fn searching(&self) -> bool {
        !self.query_words().is_empty()
    }

    /// Items in `category`, for the tab counts.
    pub fn count_for(category: FaqCategory, catalog: &[FaqEntry]) -> usize {
        catalog.iter().filter(|e| e.category == category).count()
    }

    /// Switch tabs. Leaves search mode so the tab's items actually show.
    pub fn set_category(&mut self, category: FaqCategory) {
        self.active_category = category;
        self.search.clear();
    }

    /// Open or close an item's answer.
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// The `+` / `−` accordion indicator for an item.
    pub fn indicator(&self, index: usize) -> char {
        if self.is_expanded(index) {
            '−'
        } else {
            '+'
        }
    }

    /// Rows the item list occupies at `width` columns: one row per visible
    /// question plus the wrapped answer rows of expanded items.
    pub fn list_rows(&self, catalog: &[FaqEntry], width: u16) -> u16 {
        let mut rows = 0u16;
        for index in self.visible_indices(catalog) {
            rows = rows.saturating_add(1);
            if self.is_expanded(index) {
                let answer_rows = wrap_words(catalog[index].answer, answer_width(width)).len();
                rows = rows.saturating_add(answer_rows as u16);
            }
        }
        rows
    }
}

/// Columns available to wrapped answer text inside the list at `width`.
pub fn answer_width(width: u16) -> u16 {
    width.saturating_sub(6).max(10)
}

/// Greedy word wrap on display width. Words wider than the line get a line
/// of their own rather than being split.
pub fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
