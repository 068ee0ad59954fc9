//! Read-only gate and per-request scopes
//!
//! A [`ReadOnlyGate`] is built once at startup and shared. Each request
//! calls [`ReadOnlyGate::begin_request`] to get a [`RequestScope`] with
//! its own freshly built lists, so concurrent requests never share
//! mutable list state.

use crate::config::ReadOnlySettings;
use crate::enforce::{Enforcement, SubmissionOutcome};
use crate::filter::ModeFilter;
use crate::hooks::AlterRegistry;
use crate::mode::ModeSource;
use crate::verdict::{Verdict, VerdictCard};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Long-lived read-only mode service
#[derive(Debug, Clone)]
pub struct ReadOnlyGate {
    /// Site settings
    settings: Arc<ReadOnlySettings>,

    /// Registered alteration hooks
    registry: AlterRegistry,

    /// Source of the read-only flag
    mode: Arc<dyn ModeSource>,

    /// Whether to log each verdict
    emit_audit_events: bool,
}

impl ReadOnlyGate {
    /// Create a gate that reads the mode flag from the settings
    pub fn new(settings: ReadOnlySettings) -> Self {
        let settings = Arc::new(settings);
        Self {
            mode: Arc::clone(&settings) as Arc<dyn ModeSource>,
            settings,
            registry: AlterRegistry::new(),
            emit_audit_events: true,
        }
    }

    /// Read the mode flag from another source
    pub fn with_mode_source(mut self, mode: Arc<dyn ModeSource>) -> Self {
        self.mode = mode;
        self
    }

    /// Set the alteration hooks
    pub fn with_registry(mut self, registry: AlterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set whether to log each verdict
    pub fn with_emit_audit_events(mut self, emit: bool) -> Self {
        self.emit_audit_events = emit;
        self
    }

    /// Site settings
    pub fn settings(&self) -> &ReadOnlySettings {
        &self.settings
    }

    /// Registered hooks
    pub fn registry(&self) -> &AlterRegistry {
        &self.registry
    }

    /// Whether read-only mode is active right now
    pub fn is_read_only(&self) -> bool {
        self.mode.is_read_only()
    }

    /// Start an evaluation context with fresh lists
    pub fn begin_request(&self, request_id: impl Into<String>) -> RequestScope {
        let request_id = request_id.into();
        let filter = ModeFilter::build(
            self.settings.seed_allowed(),
            self.settings.seed_viewonly(),
            &self.registry,
        );

        debug!(
            request_id = %request_id,
            allowed = filter.allowed().len(),
            view_only = filter.view_only().len(),
            "Began read-only request scope"
        );

        RequestScope {
            request_id,
            filter,
            settings: Arc::clone(&self.settings),
            mode: Arc::clone(&self.mode),
            emit_audit_events: self.emit_audit_events,
        }
    }

    /// Start an evaluation context with a generated request id
    pub fn begin_anonymous_request(&self) -> RequestScope {
        self.begin_request(uuid::Uuid::new_v4().to_string())
    }
}

/// One request's view of read-only mode
///
/// Lists are frozen for the lifetime of the scope. The mode flag is read
/// again on every decision.
#[derive(Debug, Clone)]
pub struct RequestScope {
    request_id: String,
    filter: ModeFilter,
    settings: Arc<ReadOnlySettings>,
    mode: Arc<dyn ModeSource>,
    emit_audit_events: bool,
}

impl RequestScope {
    /// Request id for correlation
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The frozen filter for this request
    pub fn filter(&self) -> &ModeFilter {
        &self.filter
    }

    /// Classify a form and record the decision
    pub fn evaluate(&self, form_id: &str) -> VerdictCard {
        let read_only = self.mode.is_read_only();
        let verdict = self.filter.decide(form_id, read_only);
        let card = VerdictCard::new(&self.request_id, form_id, read_only, verdict);

        if self.emit_audit_events {
            log_verdict(&card);
        }

        card
    }

    /// Classify a form and say how to render it
    pub fn enforce(&self, form_id: &str) -> (VerdictCard, Enforcement) {
        let card = self.evaluate(form_id);
        let enforcement = Enforcement::from_verdict(card.verdict, &self.settings);
        (card, enforcement)
    }

    /// Decide whether a submission of this form may be processed
    pub fn check_submission(&self, form_id: &str) -> SubmissionOutcome {
        let card = self.evaluate(form_id);
        let outcome = SubmissionOutcome::from_verdict(card.verdict, &self.settings);

        if !outcome.is_accepted() {
            warn!(
                request_id = %card.request_id,
                form = %card.form_id,
                "Blocked form submission in read-only mode"
            );
        }

        outcome
    }
}

/// Log a verdict for audit
fn log_verdict(card: &VerdictCard) {
    match card.verdict {
        Verdict::FullAccess => {
            debug!(
                request_id = %card.request_id,
                form = %card.form_id,
                read_only = card.read_only,
                "Form has full access"
            );
        }
        Verdict::ViewOnly => {
            info!(
                request_id = %card.request_id,
                form = %card.form_id,
                "Form restricted to view-only"
            );
        }
        Verdict::Rejected => {
            warn!(
                request_id = %card.request_id,
                form = %card.form_id,
                "Form rejected in read-only mode"
            );
        }
    }
}
