//! Data Grid State
//!
//! Sorting, quick filtering and pagination for the record tables.
//! All of it is client-side over the fetched list; the rendering lives in
//! `components::record_grid`.

use std::cmp::Ordering;

/// Rows-per-page choices; the first is the default
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [20, 50, 100];

/// A displayed data column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub header: &'static str,
    /// Right-aligned
    pub numeric: bool,
}

/// One cell value; numbers sort numerically, text case-insensitively
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(u32),
    Text(String),
}

impl Cell {
    fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => a.cmp(b),
            _ => self.to_string().to_lowercase().cmp(&other.to_string().to_lowercase()),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// A record that can be shown as a grid row
pub trait GridRow {
    fn columns() -> &'static [Column];

    /// Value for the column at `index` in [`GridRow::columns`]
    fn cell(&self, index: usize) -> Cell;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    sort: Option<(usize, SortDirection)>,
    quick_filter: String,
    page: usize,
    page_size: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            sort: None,
            quick_filter: String::new(),
            page: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

/// The rows visible on the current page plus footer figures
#[derive(Debug, Clone, PartialEq)]
pub struct GridPage<T> {
    pub rows: Vec<T>,
    /// Rows left after filtering
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    page_size: usize,
}

impl<T> GridPage<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// e.g. `21–40 of 45`
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0–0 of 0".to_string();
        }
        let first = self.page * self.page_size + 1;
        let last = first + self.rows.len() - 1;
        format!("{}–{} of {}", first, last, self.total)
    }
}

impl GridState {
    pub fn sort(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    /// Header click: ascending, then descending, then unsorted.
    /// Clicking a different column starts over at ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn quick_filter(&self) -> &str {
        &self.quick_filter
    }

    pub fn set_quick_filter(&mut self, text: &str) {
        self.quick_filter = text.to_string();
        self.page = 0;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sizes outside [`PAGE_SIZE_OPTIONS`] are ignored
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            self.page_size = size;
            self.page = 0;
        }
    }

    pub fn next_page(&mut self, total: usize) {
        let page = self.clamped_page(total);
        self.page = if (page + 1) * self.page_size < total { page + 1 } else { page };
    }

    pub fn prev_page(&mut self, total: usize) {
        self.page = self.clamped_page(total).saturating_sub(1);
    }

    fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    fn clamped_page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total) - 1)
    }

    fn matches<T: GridRow>(terms: &[String], row: &T) -> bool {
        let cells: Vec<String> = (0..T::columns().len())
            .map(|index| row.cell(index).to_string().to_lowercase())
            .collect();
        terms
            .iter()
            .all(|term| cells.iter().any(|cell| cell.contains(term.as_str())))
    }

    /// Filter, sort and slice `rows` into the visible page
    pub fn view<T: GridRow + Clone>(&self, rows: &[T]) -> GridPage<T> {
        let terms: Vec<String> = self
            .quick_filter
            .split_whitespace()
            .map(|term| term.to_lowercase())
            .collect();

        let mut visible: Vec<&T> = rows
            .iter()
            .filter(|row| Self::matches(&terms, *row))
            .collect();

        if let Some((column, direction)) = self.sort {
            visible.sort_by(|a, b| {
                let ordering = a.cell(column).compare(&b.cell(column));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let total = visible.len();
        let page = self.clamped_page(total);
        let rows = visible
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();

        GridPage {
            rows,
            total,
            page,
            page_count: self.page_count(total),
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        number: u32,
        name: &'static str,
    }

    const COLUMNS: [Column; 2] = [
        Column { header: "Number", numeric: true },
        Column { header: "Name", numeric: false },
    ];

    impl GridRow for Row {
        fn columns() -> &'static [Column] {
            &COLUMNS
        }

        fn cell(&self, index: usize) -> Cell {
            match index {
                0 => Cell::Number(self.number),
                _ => Cell::Text(self.name.to_string()),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { number: 10, name: "bravo" },
            Row { number: 9, name: "Alpha" },
            Row { number: 100, name: "charlie delta" },
        ]
    }

    fn numbers(page: &GridPage<Row>) -> Vec<u32> {
        page.rows.iter().map(|r| r.number).collect()
    }

    #[test]
    fn test_unsorted_keeps_fetch_order() {
        let page = GridState::default().view(&rows());
        assert_eq!(numbers(&page), vec![10, 9, 100]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_sort_cycle() {
        let mut grid = GridState::default();

        grid.toggle_sort(0);
        assert_eq!(numbers(&grid.view(&rows())), vec![9, 10, 100]);

        grid.toggle_sort(0);
        assert_eq!(numbers(&grid.view(&rows())), vec![100, 10, 9]);

        grid.toggle_sort(0);
        assert_eq!(grid.sort(), None);
        assert_eq!(numbers(&grid.view(&rows())), vec![10, 9, 100]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let mut grid = GridState::default();
        grid.toggle_sort(0);
        grid.toggle_sort(1);

        assert_eq!(grid.sort(), Some((1, SortDirection::Ascending)));
        assert_eq!(numbers(&grid.view(&rows())), vec![9, 10, 100]);
    }

    #[test]
    fn test_quick_filter_terms_all_match() {
        let mut grid = GridState::default();

        grid.set_quick_filter("ALPHA");
        assert_eq!(numbers(&grid.view(&rows())), vec![9]);

        grid.set_quick_filter("delta 100");
        assert_eq!(numbers(&grid.view(&rows())), vec![100]);

        grid.set_quick_filter("delta 9");
        assert_eq!(grid.view(&rows()).total, 0);

        grid.set_quick_filter("   ");
        assert_eq!(grid.view(&rows()).total, 3);
    }

    #[test]
    fn test_pagination() {
        let many: Vec<Row> = (1..=45).map(|n| Row { number: n, name: "row" }).collect();
        let mut grid = GridState::default();

        let first = grid.view(&many);
        assert_eq!(first.rows.len(), 20);
        assert_eq!(first.page_count, 3);
        assert!(!first.has_prev());
        assert_eq!(first.range_label(), "1–20 of 45");

        grid.next_page(45);
        grid.next_page(45);
        grid.next_page(45);
        let last = grid.view(&many);
        assert_eq!(last.page, 2);
        assert_eq!(last.rows.len(), 5);
        assert!(!last.has_next());
        assert_eq!(last.range_label(), "41–45 of 45");

        grid.set_page_size(50);
        let single = grid.view(&many);
        assert_eq!(single.page, 0);
        assert_eq!(single.rows.len(), 45);

        grid.set_page_size(30);
        assert_eq!(grid.page_size(), 50);
    }

    #[test]
    fn test_filter_resets_page_and_page_is_clamped() {
        let many: Vec<Row> = (1..=45).map(|n| Row { number: n, name: "row" }).collect();
        let mut grid = GridState::default();
        grid.next_page(45);
        grid.next_page(45);

        // Records deleted elsewhere: the stale page index falls back to the last page
        let page = grid.view(&many[..10]);
        assert_eq!(page.page, 0);
        assert_eq!(page.rows.len(), 10);

        grid.set_quick_filter("row");
        assert_eq!(grid.view(&many).page, 0);
    }

    #[test]
    fn test_empty_grid() {
        let page = GridState::default().view::<Row>(&[]);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.range_label(), "0–0 of 0");
        assert!(!page.has_next());
    }
}
