//! Question record model and operations
//!
//! A `Question` mirrors one row of the external tabular store. Field names
//! follow the store's wire contract (camelCase) when serialized. The
//! operations here are pure state transitions; persistence is the external
//! store's job.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Question
// ============================================================================

/// One question/answer record
///
/// Searchable content is `question`, `question_description`, and `answer`;
/// the remaining fields are identity and audit metadata that the search
/// layer never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Store-assigned record identifier
    pub record_id: String,
    /// Owning company display name
    #[serde(default)]
    pub company_name: String,
    /// Owning company identifier
    #[serde(default)]
    pub company_id: i64,
    /// The question text (non-empty)
    pub question: String,
    /// Optional longer description of the question
    pub question_description: Option<String>,
    /// Answer text, if answered
    pub answer: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Principal that created the record
    pub created_by: String,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
    /// Principal that last updated the record
    pub updated_by: String,
    /// Assignee, if assigned
    pub assigned_to: Option<String>,
    /// Free-form key/value tags
    pub properties: Option<BTreeMap<String, String>>,
}

/// Parameters for creating a new question
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    /// The question text
    pub question: String,
    /// Optional longer description
    pub question_description: Option<String>,
    /// Initial key/value tags
    pub properties: Option<BTreeMap<String, String>>,
    /// Initial answer, when known at creation time
    pub answer: Option<String>,
    /// Initial assignee
    pub assigned_to: Option<String>,
}

impl Question {
    /// Create a new question record
    ///
    /// Assigns a fresh record id, sets both timestamps to now, and records
    /// `current_user` as creator and last updater.
    pub fn create(request: CreateQuestionRequest, current_user: &str) -> Self {
        let now = Utc::now();
        Question {
            record_id: format!("rec{}", Uuid::new_v4().simple()),
            company_name: String::new(),
            company_id: 0,
            question: request.question,
            question_description: request.question_description,
            answer: request.answer,
            created_at: now,
            created_by: current_user.to_string(),
            updated_at: now,
            updated_by: current_user.to_string(),
            assigned_to: request.assigned_to,
            properties: request.properties,
        }
    }

    /// Set the answer and bump the audit fields
    pub fn update_answer(&mut self, answer: impl Into<String>, current_user: &str) {
        self.answer = Some(answer.into());
        self.touch(current_user);
    }

    /// Assign the question and bump the audit fields
    ///
    /// Bulk assignment is a caller-side loop over this.
    pub fn assign(&mut self, assignee: impl Into<String>, current_user: &str) {
        self.assigned_to = Some(assignee.into());
        self.touch(current_user);
    }

    /// Insert a key/value tag, creating the map if absent
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
    }

    fn touch(&mut self, current_user: &str) {
        self.updated_at = Utc::now();
        self.updated_by = current_user.to_string();
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Questions assigned to exactly `assignee`
pub fn filter_by_assignee<'a>(questions: &'a [Question], assignee: &str) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| q.assigned_to.as_deref() == Some(assignee))
        .collect()
}

/// Questions whose `key` property equals `value`
pub fn filter_by_property<'a>(
    questions: &'a [Question],
    key: &str,
    value: &str,
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| {
            q.properties
                .as_ref()
                .is_some_and(|props| props.get(key).map(String::as_str) == Some(value))
        })
        .collect()
}
