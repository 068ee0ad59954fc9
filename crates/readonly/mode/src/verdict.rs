//! Verdict types
//!
//! A verdict is the outcome of filtering one form under one mode state.
//! [`Verdict::Rejected`] is a normal outcome, not an error.

use crate::form::FormId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of filtering a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Form renders and submits normally
    FullAccess,

    /// Form renders, submission is disabled
    ViewOnly,

    /// Form is blocked
    Rejected,
}

impl Verdict {
    /// Check if the form has full access
    pub fn is_full_access(&self) -> bool {
        matches!(self, Self::FullAccess)
    }

    /// Check if the form is restricted to viewing
    pub fn is_view_only(&self) -> bool {
        matches!(self, Self::ViewOnly)
    }

    /// Check if the form is rejected
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Whether a submission may go through
    pub fn can_submit(&self) -> bool {
        self.is_full_access()
    }

    /// Whether the form may be rendered at all
    pub fn can_render(&self) -> bool {
        !self.is_rejected()
    }

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullAccess => "full_access",
            Self::ViewOnly => "view_only",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit card for one verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictCard {
    /// Unique identifier for this decision
    pub id: String,

    /// Request the decision belongs to
    pub request_id: String,

    /// Form that was evaluated
    pub form_id: FormId,

    /// Mode flag as read for this decision
    pub read_only: bool,

    /// The verdict
    pub verdict: Verdict,

    /// When the decision was made
    pub timestamp: DateTime<Utc>,
}

impl VerdictCard {
    /// Create a new verdict card
    pub fn new(
        request_id: impl Into<String>,
        form_id: impl Into<FormId>,
        read_only: bool,
        verdict: Verdict,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            request_id: request_id.into(),
            form_id: form_id.into(),
            read_only,
            verdict,
            timestamp: Utc::now(),
        }
    }
}
