//! Query predicates understood by every [`DocumentStore`](super::store::DocumentStore).
//!
//! A [`Filter`] is a small tree of predicates over document fields. Backends
//! either render it into the database's own query language ([`Filter::to_query`])
//! or evaluate it in process ([`Filter::compile`] + [`CompiledFilter::matches`]).

use super::protocol::Document;
use super::store::{StorageError, StorageResult};

use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Logical AND. An empty list matches every document.
    And(Vec<Filter>),
    /// Field is a string matching `pattern`.
    Regex {
        field: String,
        pattern: String,
        case_insensitive: bool,
    },
    /// Field is a number `>= value`.
    Gte { field: String, value: f64 },
    /// Field is a number `<= value`.
    Lte { field: String, value: f64 },
}

impl Filter {
    pub fn all() -> Self {
        Filter::And(Vec::new())
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::And(filters)
    }

    pub fn regex_ci(field: &str, pattern: &str) -> Self {
        Filter::Regex {
            field: field.to_string(),
            pattern: pattern.to_string(),
            case_insensitive: true,
        }
    }

    pub fn gte(field: &str, value: f64) -> Self {
        Filter::Gte {
            field: field.to_string(),
            value,
        }
    }

    pub fn lte(field: &str, value: f64) -> Self {
        Filter::Lte {
            field: field.to_string(),
            value,
        }
    }

    /// True when the filter places no constraint on documents.
    pub fn is_match_all(&self) -> bool {
        match self {
            Filter::And(filters) => filters.iter().all(Filter::is_match_all),
            _ => false,
        }
    }

    /// Renders the filter in document-database query syntax.
    ///
    /// The empty conjunction becomes `{}` since the database rejects `$and: []`.
    pub fn to_query(&self) -> Value {
        match self {
            Filter::And(filters) => {
                let clauses: Vec<Value> = filters
                    .iter()
                    .filter(|f| !f.is_match_all())
                    .map(Filter::to_query)
                    .collect();
                if clauses.is_empty() {
                    Value::Object(Map::new())
                } else {
                    json!({ "$and": clauses })
                }
            }
            Filter::Regex {
                field,
                pattern,
                case_insensitive,
            } => {
                let options = if *case_insensitive { "i" } else { "" };
                json!({ field.as_str(): { "$regex": pattern, "$options": options } })
            }
            Filter::Gte { field, value } => json!({ field.as_str(): { "$gte": value } }),
            Filter::Lte { field, value } => json!({ field.as_str(): { "$lte": value } }),
        }
    }

    /// Prepares the filter for in-process evaluation, compiling any patterns.
    pub fn compile(&self) -> StorageResult<CompiledFilter> {
        Ok(match self {
            Filter::And(filters) => CompiledFilter::And(
                filters
                    .iter()
                    .map(Filter::compile)
                    .collect::<StorageResult<Vec<_>>>()?,
            ),
            Filter::Regex {
                field,
                pattern,
                case_insensitive,
            } => {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(*case_insensitive)
                    .build()
                    .map_err(|e| StorageError::InvalidFilter(e.to_string()))?;
                CompiledFilter::Regex {
                    field: field.clone(),
                    regex,
                }
            }
            Filter::Gte { field, value } => CompiledFilter::Gte {
                field: field.clone(),
                value: *value,
            },
            Filter::Lte { field, value } => CompiledFilter::Lte {
                field: field.clone(),
                value: *value,
            },
        })
    }
}

#[derive(Debug)]
pub enum CompiledFilter {
    And(Vec<CompiledFilter>),
    Regex { field: String, regex: Regex },
    Gte { field: String, value: f64 },
    Lte { field: String, value: f64 },
}

impl CompiledFilter {
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            CompiledFilter::And(filters) => filters.iter().all(|f| f.matches(document)),
            CompiledFilter::Regex { field, regex } => document
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| regex.is_match(s)),
            CompiledFilter::Gte { field, value } => document
                .get(field)
                .and_then(Value::as_f64)
                .is_some_and(|n| n >= *value),
            CompiledFilter::Lte { field, value } => document
                .get(field)
                .and_then(Value::as_f64)
                .is_some_and(|n| n <= *value),
        }
    }
}
