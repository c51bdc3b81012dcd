//! Task Filtering
//!
//! Search, status filters and client-side pagination for the task table.
//! Displayed rows are always a projection of the last loaded task list.

use chrono::NaiveDate;

use crate::models::Task;

/// Named status filter chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Completed,
    Pending,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 2] = [StatusFilter::Completed, StatusFilter::Pending];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Completed => "Completed",
            StatusFilter::Pending => "Pending",
        }
    }

    /// Pending excludes overdue tasks, so an overdue task matches neither filter
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            StatusFilter::Completed => task.is_completed,
            StatusFilter::Pending => !task.is_completed && !is_overdue(task, today),
        }
    }
}

/// Due date strictly before today and not completed
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.is_completed && task.due_date.is_some_and(|due| due < today)
}

/// Case-insensitive substring match on title or description
pub fn matches_search(task: &Task, search: &str) -> bool {
    let needle = search.to_lowercase();
    task.title.to_lowercase().contains(&needle) || task.description_text().to_lowercase().contains(&needle)
}

/// Transient per-page filter state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    search: String,
    completed: bool,
    pending: bool,
    page: usize,
}

impl TaskFilter {
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Changing the predicate returns to the first page
    pub fn set_search(&mut self, search: String) {
        if self.search != search {
            self.search = search;
            self.page = 0;
        }
    }

    pub fn toggle(&mut self, status: StatusFilter) {
        match status {
            StatusFilter::Completed => self.completed = !self.completed,
            StatusFilter::Pending => self.pending = !self.pending,
        }
        self.page = 0;
    }

    pub fn is_active(&self, status: StatusFilter) -> bool {
        match status {
            StatusFilter::Completed => self.completed,
            StatusFilter::Pending => self.pending,
        }
    }

    pub fn active(&self) -> Vec<StatusFilter> {
        StatusFilter::ALL.into_iter().filter(|s| self.is_active(*s)).collect()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Keep the page index in range after the underlying list shrinks
    pub fn clamp_page(&mut self, total_rows: usize, per_page: usize) {
        let last = page_count(total_rows, per_page).saturating_sub(1);
        self.page = self.page.min(last);
    }

    pub fn apply(&self, tasks: &[Task], today: NaiveDate) -> Vec<Task> {
        let active = self.active();
        tasks
            .iter()
            .filter(|task| matches_search(task, &self.search))
            .filter(|task| active.is_empty() || active.iter().any(|f| f.matches(task, today)))
            .cloned()
            .collect()
    }
}

/// Rows of page `page` (0-based); out-of-range pages are empty
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    items[start..end].to_vec()
}

pub fn page_count(total_rows: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_rows.div_ceil(per_page)
}

/// Whether a page after `page` holds any rows
pub fn has_next_page(page: usize, total_rows: usize, per_page: usize) -> bool {
    page.saturating_add(1) < page_count(total_rows, per_page)
}

/// "start-end of total" for the pagination footer (1-based, inclusive)
pub fn page_range_label(page: usize, total_rows: usize, per_page: usize) -> String {
    if total_rows == 0 || per_page == 0 {
        return format!("0 of {}", total_rows);
    }
    let start = page.saturating_mul(per_page).min(total_rows - 1) + 1;
    let end = start.saturating_add(per_page - 1).min(total_rows);
    format!("{}-{} of {}", start, end, total_rows)
}
