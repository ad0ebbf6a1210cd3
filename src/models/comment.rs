use super::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::convert::Infallible;

/// Label given to records that arrive without any sentiment
pub const UNKNOWN_SENTIMENT: &str = "UNKNOWN";

/// Sentiment label attached upstream to each comment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    /// Any label outside the known vocabulary, kept verbatim
    Other(String),
}

impl Sentiment {
    /// Returns the label shown in pickers and chart legends
    pub fn label(&self) -> &str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Other(label) => label,
        }
    }

    /// Value plotted on the sentiment trend line
    pub const fn trend_value(&self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_uppercase().as_str() {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            "" => Self::Other(UNKNOWN_SENTIMENT.to_string()),
            _ => Self::Other(trimmed.to_string()),
        })
    }
}

/// A scored comment, validated and immutable once fetched
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub date: DateTime<Utc>,
    pub source: String,
    pub topic: String,
    pub sentiment: Sentiment,
    pub text: String,
    /// Pre-cleaned text from the scoring pipeline, used for word counts when present
    pub cleaned_text: Option<String>,
}

impl Comment {
    /// Text used for word frequency counts
    pub fn words_source(&self) -> &str {
        self.cleaned_text.as_deref().unwrap_or(&self.text)
    }
}

/// Comment record as it arrives over the wire. Every field is optional so a
/// single bad record can be rejected without failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default, alias = "text")]
    pub comment: Option<String>,
    #[serde(default)]
    pub cleaned_comment: Option<String>,
}

impl TryFrom<RawComment> for Comment {
    type Error = AppError;

    fn try_from(raw: RawComment) -> Result<Self, Self::Error> {
        let date = required(raw.date, "date")?;
        let date = parse_comment_date(&date)?;
        let source = required(raw.source, "source")?;
        let topic = required(raw.topic, "topic")?;

        let Ok(sentiment) = raw
            .sentiment
            .as_deref()
            .unwrap_or_default()
            .parse::<Sentiment>();

        Ok(Self {
            date,
            source,
            topic,
            sentiment,
            text: raw.comment.unwrap_or_default(),
            cleaned_text: raw.cleaned_comment.filter(|s| !s.trim().is_empty()),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::DataError(format!("Missing required field '{field}'")))
}

/// Parses the date formats the comment API is known to emit
pub fn parse_comment_date(s: &str) -> Result<DateTime<Utc>, AppError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Flask's jsonify renders datetimes as RFC 2822 ("Tue, 01 Oct 2024 10:00:00 GMT")
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(day.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(AppError::DataError(format!("Failed to parse date '{s}'")))
}
