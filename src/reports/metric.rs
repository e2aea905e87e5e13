//! Metric and aggregation selectors for speaker rankings.

use serde::Serialize;

/// The NRC lexicon emotion dimensions carried by every speech encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Trust,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Anger,
        Emotion::Anticipation,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Trust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Anticipation => "anticipation",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "anger" => Some(Emotion::Anger),
            "anticipation" => Some(Emotion::Anticipation),
            "disgust" => Some(Emotion::Disgust),
            "fear" => Some(Emotion::Fear),
            "joy" => Some(Emotion::Joy),
            "sadness" => Some(Emotion::Sadness),
            "surprise" => Some(Emotion::Surprise),
            "trust" => Some(Emotion::Trust),
            _ => None,
        }
    }

    /// Column name on the `nrc_encoding` table. Always a fixed identifier,
    /// never caller input, so it is safe to splice into SQL.
    pub fn column(&self) -> &'static str {
        self.as_str()
    }
}

/// What a ranking report measures per speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Number of speeches delivered.
    SpeechCount,
    /// Intensity of one emotion dimension.
    Emotion(Emotion),
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::SpeechCount => "speech_count",
            Metric::Emotion(emotion) => emotion.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s == "speech_count" {
            return Some(Metric::SpeechCount);
        }
        Emotion::parse(s).map(Metric::Emotion)
    }
}

impl Serialize for Metric {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Aggregation applied to the metric within each speaker group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    Average,
}

impl Aggregate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Count => "count",
            Aggregate::Average => "average",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "count" => Some(Aggregate::Count),
            "average" => Some(Aggregate::Average),
            _ => None,
        }
    }
}

impl Serialize for Aggregate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ascending" | "asc" => Some(SortDirection::Ascending),
            "descending" | "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    /// SQL ORDER BY keyword.
    pub fn sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl Serialize for SortDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
