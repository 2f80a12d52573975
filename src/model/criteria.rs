//! User-chosen search criteria.
//!
//! Every field is a raw form value. An empty string means the field imposes
//! no constraint.

use std::fmt;

/// Settable criteria fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriteriaField {
    /// Free-text query.
    Query,
    /// Exact sentiment label.
    Sentiment,
    /// Source platform, compared case-insensitively.
    Source,
    /// Exact team name.
    Team,
    /// Comment type category.
    CommentType,
    /// Inclusive lower date bound.
    StartDate,
    /// Inclusive upper date bound.
    EndDate,
}

impl CriteriaField {
    /// All fields in evaluation order.
    pub const ALL: [CriteriaField; 7] = [
        CriteriaField::Sentiment,
        CriteriaField::Source,
        CriteriaField::Team,
        CriteriaField::Query,
        CriteriaField::StartDate,
        CriteriaField::EndDate,
        CriteriaField::CommentType,
    ];

    /// Canonical camelCase name.
    pub fn as_str(self) -> &'static str {
        match self {
            CriteriaField::Query => "query",
            CriteriaField::Sentiment => "sentiment",
            CriteriaField::Source => "source",
            CriteriaField::Team => "team",
            CriteriaField::CommentType => "commentType",
            CriteriaField::StartDate => "startDate",
            CriteriaField::EndDate => "endDate",
        }
    }
}

impl fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-scoped search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Criteria {
    /// Free-text query matched against content, author and keywords.
    pub query: String,
    /// Sentiment wire name (`positive`, `negative`, `neutral`).
    pub sentiment: String,
    /// Source platform name.
    pub source: String,
    /// Team name.
    pub team: String,
    /// Comment type category. Recorded but never constrains results.
    pub comment_type: String,
    /// Inclusive lower bound against the comment timestamp.
    pub start_date: String,
    /// Inclusive upper bound against the comment timestamp.
    pub end_date: String,
}

impl Criteria {
    /// Criteria with only the query set.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Read a field.
    pub fn get(&self, field: CriteriaField) -> &str {
        match field {
            CriteriaField::Query => &self.query,
            CriteriaField::Sentiment => &self.sentiment,
            CriteriaField::Source => &self.source,
            CriteriaField::Team => &self.team,
            CriteriaField::CommentType => &self.comment_type,
            CriteriaField::StartDate => &self.start_date,
            CriteriaField::EndDate => &self.end_date,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: CriteriaField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CriteriaField::Query => self.query = value,
            CriteriaField::Sentiment => self.sentiment = value,
            CriteriaField::Source => self.source = value,
            CriteriaField::Team => self.team = value,
            CriteriaField::CommentType => self.comment_type = value,
            CriteriaField::StartDate => self.start_date = value,
            CriteriaField::EndDate => self.end_date = value,
        }
    }

    /// Fields holding a non-empty value, in evaluation order.
    pub fn active_fields(&self) -> Vec<CriteriaField> {
        CriteriaField::ALL
            .into_iter()
            .filter(|field| !self.get(*field).is_empty())
            .collect()
    }

    /// True when no field holds a value.
    pub fn is_unconstrained(&self) -> bool {
        CriteriaField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}
