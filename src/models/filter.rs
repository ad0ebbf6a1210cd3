use super::{
    comment::{Comment, Sentiment},
    error::AppError,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// The categorical fields a user can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Source,
    Sentiment,
    Topic,
}

impl Category {
    /// Label shown next to the picker
    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Sentiment => "Sentiment",
            Self::Topic => "Topic",
        }
    }

    /// All filterable categories, in picker order.
    pub fn all() -> &'static [Self] {
        &[Self::Source, Self::Sentiment, Self::Topic]
    }

    /// Returns the value of this category for a comment
    pub fn value_of<'a>(&self, comment: &'a Comment) -> &'a str {
        match self {
            Self::Source => &comment.source,
            Self::Sentiment => comment.sentiment.label(),
            Self::Topic => &comment.topic,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "source" => Ok(Self::Source),
            "sentiment" => Ok(Self::Sentiment),
            "topic" => Ok(Self::Topic),
            _ => Err(AppError::ConfigError(format!("Invalid filter category: {s}"))),
        }
    }
}

/// Inclusive range of calendar days (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range; bounds given in reverse order are swapped.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, comment: &Comment) -> bool {
        let day = comment.date.date_naive();
        self.start <= day && day <= self.end
    }
}

/// Active user-selected constraints. Empty sets and `None` mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub sources: HashSet<String>,
    pub sentiments: HashSet<String>,
    pub topics: HashSet<String>,
    pub date_range: Option<DateRange>,
    /// Lowercased free-text query matched against comment text
    text_query: Option<String>,
}

impl FilterCriteria {
    pub fn values(&self, category: Category) -> &HashSet<String> {
        match category {
            Category::Source => &self.sources,
            Category::Sentiment => &self.sentiments,
            Category::Topic => &self.topics,
        }
    }

    /// Replaces the accepted values for one category. Sentiment values are
    /// stored under their canonical label, so `"positive"` selects POSITIVE.
    pub fn set_values<I, S>(&mut self, category: Category, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into);
        match category {
            Category::Source => self.sources = values.collect(),
            Category::Sentiment => {
                self.sentiments = values
                    .map(|value| {
                        let Ok(sentiment) = value.parse::<Sentiment>();
                        sentiment.label().to_string()
                    })
                    .collect();
            }
            Category::Topic => self.topics = values.collect(),
        }
    }

    pub fn text_query(&self) -> Option<&str> {
        self.text_query.as_deref()
    }

    /// Sets the search query; a blank query clears it
    pub fn set_text_query(&mut self, query: Option<&str>) {
        self.text_query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
    }

    /// True when no criterion restricts the list
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// A comment passes when it satisfies every active criterion; within a
    /// category any selected value matches.
    pub fn matches(&self, comment: &Comment) -> bool {
        Category::all().iter().all(|category| {
            let accepted = self.values(*category);
            accepted.is_empty() || accepted.contains(category.value_of(comment))
        }) && self.date_range.is_none_or(|range| range.contains(comment))
            && self
                .text_query
                .as_deref()
                .is_none_or(|q| comment.text.to_lowercase().contains(q))
    }
}
