//! Translating verdicts into what the caller should do
//!
//! The filter only classifies. These helpers turn a [`Verdict`] into a
//! rendering restriction or a denial carrying the configured notices.

use crate::config::ReadOnlySettings;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// What to do with a form that is about to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Enforcement {
    /// Render and accept submissions as usual
    Proceed,

    /// Render with submission disabled
    RenderViewOnly {
        /// Notice to show alongside the form
        notice: String,
    },

    /// Do not render the form
    Deny {
        /// Notice explaining the denial
        message: String,
        /// Redirect target, if configured
        redirect: Option<String>,
    },
}

impl Enforcement {
    /// Map a verdict onto an action using the site settings
    pub fn from_verdict(verdict: Verdict, settings: &ReadOnlySettings) -> Self {
        match verdict {
            Verdict::FullAccess => Self::Proceed,
            Verdict::ViewOnly => Self::RenderViewOnly {
                notice: settings.message.clone(),
            },
            Verdict::Rejected => Self::Deny {
                message: settings.message.clone(),
                redirect: settings.redirect_url.clone(),
            },
        }
    }

    /// Whether the form should be rendered
    pub fn renders(&self) -> bool {
        !matches!(self, Self::Deny { .. })
    }
}

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Submission may be processed
    Accepted,

    /// Submission must be dropped
    Blocked {
        /// Notice for the submitter
        message: String,
    },
}

impl SubmissionOutcome {
    /// Decide a submission
    ///
    /// Only full access lets a submission through. This also catches forms
    /// that were rendered before read-only mode was switched on.
    pub fn from_verdict(verdict: Verdict, settings: &ReadOnlySettings) -> Self {
        if verdict.can_submit() {
            Self::Accepted
        } else {
            Self::Blocked {
                message: settings.form_not_saved_message.clone(),
            }
        }
    }

    /// Check if the submission was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}
