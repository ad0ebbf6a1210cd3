use super::{
    comment::Comment,
    error::AppError,
    filter::{Category, DateRange, FilterCriteria},
};
use crate::services::api::CommentSource;
use chrono::NaiveDate;
use std::rc::Rc;

/// Outcome of a successful `load`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Records accepted into the raw list
    pub loaded: usize,
    /// Malformed records excluded from the raw list
    pub rejected: usize,
}

/// Holds the fetched comments and the active filter criteria.
///
/// The filtered list is a pure derivation of `(comments, criteria)` and is
/// recomputed synchronously after every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentStore {
    comments: Rc<Vec<Comment>>,
    criteria: FilterCriteria,
    filtered: Rc<Vec<Comment>>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store directly from validated comments.
    pub fn from_comments(comments: Vec<Comment>) -> Self {
        let mut store = Self::default();
        store.replace_comments(comments);
        store
    }

    /// Fetches the raw list from `source`.
    ///
    /// Records that fail validation are excluded and counted. On error the
    /// current raw list is left untouched.
    pub async fn load<S: CommentSource>(&mut self, source: &S) -> Result<LoadReport, AppError> {
        let records = source.fetch_comments().await?;
        let total = records.len();

        let comments: Vec<Comment> = records
            .into_iter()
            .filter_map(|raw| Comment::try_from(raw).ok())
            .collect();

        let report = LoadReport {
            loaded: comments.len(),
            rejected: total - comments.len(),
        };

        self.replace_comments(comments);
        Ok(report)
    }

    /// Swaps in `criteria` and refilters the raw list against it
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    fn replace_comments(&mut self, comments: Vec<Comment>) {
        self.comments = Rc::new(comments);
        self.recompute();
    }

    /// Replaces the accepted values for one category
    pub fn set_filter<I, S>(&mut self, category: Category, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.set_values(category, values);
        self.recompute();
    }

    /// Sets the inclusive date bound. The range only restricts once both ends
    /// are chosen; `None`/`None` clears it.
    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.criteria.date_range = match (start, end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        };
        self.recompute();
    }

    pub fn set_text_query(&mut self, query: Option<&str>) {
        self.criteria.set_text_query(query);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.apply_criteria(FilterCriteria::default());
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered_comments(&self) -> &[Comment] {
        &self.filtered
    }

    /// Shared handle to the filtered list, for memoized chart inputs
    pub fn filtered_handle(&self) -> Rc<Vec<Comment>> {
        Rc::clone(&self.filtered)
    }

    /// Distinct values of `category` over the raw list, in first-seen order
    pub fn options(&self, category: Category) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.comments
            .iter()
            .map(|c| category.value_of(c))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }

    fn recompute(&mut self) {
        self.filtered = if self.criteria.is_empty() {
            Rc::clone(&self.comments)
        } else {
            Rc::new(
                self.comments
                    .iter()
                    .filter(|c| self.criteria.matches(c))
                    .cloned()
                    .collect(),
            )
        };
    }
}
