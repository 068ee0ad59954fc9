//! # Read-Only Mode
//!
//! Form filtering for a site-wide read-only mode.
//!
//! ## Overview
//!
//! While read-only mode is active, state-changing forms are blocked. Two
//! lists decide what still works:
//!
//! - **Allow list**: forms that keep working normally (login, password reset, search)
//! - **View-only list**: forms that may render but never submit
//!
//! Anything on neither list is rejected. Outside read-only mode the filter
//! is inert and every form gets full access.
//!
//! ## Key Components
//!
//! - [`FormListAlter`]: Trait for hooks that add or remove list entries
//! - [`AlterRegistry`]: Explicit, ordered registration of alteration hooks
//! - [`ModeFilter`]: One evaluation context's frozen lists plus [`decide`]
//! - [`ReadOnlyGate`]: Long-lived service that hands out per-request scopes
//! - [`Verdict`] / [`VerdictCard`]: Decision outcome and its audit record
//! - [`ReadOnlySettings`]: TOML-backed site settings
//!
//! ## Example
//!
//! ```rust
//! use readonly_mode::{
//!     AlterRegistry, FnAlter, FormSet, ReadOnlyGate, ReadOnlySettings, Verdict,
//! };
//!
//! let mut settings = ReadOnlySettings::default();
//! settings.enabled = true;
//!
//! let registry = AlterRegistry::new()
//!     .with_allowed(FnAlter::new("my_module", |forms: &mut FormSet| {
//!         forms.insert("my_module_form_id");
//!         forms.remove("system_modules");
//!     }));
//!
//! let gate = ReadOnlyGate::new(settings).with_registry(registry);
//! let scope = gate.begin_request("req-1");
//!
//! assert_eq!(scope.evaluate("my_module_form_id").verdict, Verdict::FullAccess);
//! assert_eq!(scope.evaluate("system_modules").verdict, Verdict::Rejected);
//! assert_eq!(scope.evaluate("views_form_user_admin_page").verdict, Verdict::ViewOnly);
//! ```
//!
//! ## Precedence
//!
//! A form present on both lists gets [`Verdict::FullAccess`]: the allow
//! list is checked before the view-only list.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod config;
pub mod defaults;
pub mod enforce;
pub mod error;
pub mod filter;
pub mod form;
pub mod gate;
pub mod hooks;
pub mod mode;
pub mod verdict;

// Re-exports
pub use config::ReadOnlySettings;
pub use defaults::{default_forms_allowed, default_forms_viewonly};
pub use enforce::{Enforcement, SubmissionOutcome};
pub use error::{ReadOnlyError, Result};
pub use filter::{build, decide, FormLists, ModeFilter};
pub use form::{AllowList, FormId, FormSet, ViewOnlyList};
pub use gate::{ReadOnlyGate, RequestScope};
pub use hooks::{AlterRegistry, FnAlter, FormListAlter};
pub use mode::{Mode, ModeSource, ModeSwitch, StaticMode};
pub use verdict::{Verdict, VerdictCard};
