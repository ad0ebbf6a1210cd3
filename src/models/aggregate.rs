//! Pure aggregations turning a comment list into chart-ready series.

use super::comment::{Comment, Sentiment};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A `(label, value)` pair handed to the chart renderer
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Headline figures for the summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub comments: usize,
    pub topics: usize,
    pub sources: usize,
}

/// Label → occurrence count, in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelCounts {
    entries: Vec<(String, usize)>,
    /// Position of each label in `entries`
    index: HashMap<String, usize>,
}

/// Counts per sentiment label
pub type SentimentCounts = LabelCounts;

impl LabelCounts {
    fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Self {
        let mut counts = Self::default();
        for label in labels {
            counts.add(label);
        }
        counts
    }

    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).map(|&pos| self.entries[pos].1)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn to_series(&self) -> Vec<SeriesPoint> {
        self.iter()
            .map(|(label, count)| SeriesPoint::new(label, count as f64))
            .collect()
    }
}

pub fn sentiment_counts(comments: &[Comment]) -> SentimentCounts {
    LabelCounts::tally(comments.iter().map(|c| c.sentiment.label()))
}

pub fn pie_series(comments: &[Comment]) -> Vec<SeriesPoint> {
    sentiment_counts(comments).to_series()
}

/// One point per comment, in input order: POSITIVE → 1, NEGATIVE → -1, else 0
pub fn line_series(comments: &[Comment]) -> Vec<SeriesPoint> {
    comments
        .iter()
        .enumerate()
        .map(|(i, c)| {
            SeriesPoint::new(
                format!("Comment {}", i + 1),
                f64::from(c.sentiment.trend_value()),
            )
        })
        .collect()
}

pub fn bar_series(comments: &[Comment]) -> Vec<SeriesPoint> {
    pie_series(comments)
}

pub fn summary(comments: &[Comment]) -> Summary {
    let topics: HashSet<&str> = comments.iter().map(|c| c.topic.as_str()).collect();
    let sources: HashSet<&str> = comments.iter().map(|c| c.source.as_str()).collect();

    Summary {
        comments: comments.len(),
        topics: topics.len(),
        sources: sources.len(),
    }
}

pub fn source_counts(comments: &[Comment]) -> LabelCounts {
    LabelCounts::tally(comments.iter().map(|c| c.source.as_str()))
}

/// Daily share of POSITIVE comments for one source
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTrend {
    pub source: String,
    /// `(day, percent positive)` sorted by day
    pub points: Vec<(NaiveDate, f64)>,
}

/// Percentage of POSITIVE comments per source and day. Sources appear in
/// first-seen order; days within a source are ascending.
pub fn positive_share_by_day(comments: &[Comment]) -> Vec<SourceTrend> {
    let mut order: Vec<&str> = Vec::new();
    let mut per_source: HashMap<&str, BTreeMap<NaiveDate, (usize, usize)>> = HashMap::new();

    for comment in comments {
        let source = comment.source.as_str();
        let days = per_source.entry(source).or_insert_with(|| {
            order.push(source);
            BTreeMap::new()
        });
        let (positive, total) = days.entry(comment.date.date_naive()).or_default();
        *total += 1;
        if comment.sentiment == Sentiment::Positive {
            *positive += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|source| {
            per_source.remove(source).map(|days| SourceTrend {
                source: source.to_string(),
                points: days
                    .into_iter()
                    .map(|(day, (positive, total))| {
                        (day, positive as f64 / total as f64 * 100.0)
                    })
                    .collect(),
            })
        })
        .collect()
}

/// Most frequent words for one topic
#[derive(Debug, Clone, PartialEq)]
pub struct TopicWords {
    pub topic: String,
    pub words: Vec<(String, usize)>,
}

/// The `limit` most frequent words per topic. Punctuation is stripped and
/// words lowercased; equal counts keep first-occurrence order.
pub fn top_words(comments: &[Comment], limit: usize) -> Vec<TopicWords> {
    let mut order: Vec<&str> = Vec::new();
    let mut per_topic: HashMap<&str, LabelCounts> = HashMap::new();

    for comment in comments {
        let topic = comment.topic.as_str();
        let counts = per_topic.entry(topic).or_insert_with(|| {
            order.push(topic);
            LabelCounts::default()
        });
        for word in normalize_words(comment.words_source()) {
            counts.add(&word);
        }
    }

    order
        .into_iter()
        .filter_map(|topic| per_topic.remove(topic).map(|counts| (topic, counts)))
        .map(|(topic, counts)| {
            let mut ranked: Vec<(String, usize)> = counts
                .iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect();
            // Stable sort keeps first-occurrence order among ties
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            ranked.truncate(limit);

            TopicWords {
                topic: topic.to_string(),
                words: ranked,
            }
        })
        .collect()
}

fn normalize_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    cleaned.to_lowercase().split_whitespace().map(str::to_string).collect()
}
