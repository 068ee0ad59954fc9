//! Mode flag sources
//!
//! The read-only flag is owned by some other component (site settings, an
//! operator switch). The filter only reads it, once per decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Source of the read-only flag
pub trait ModeSource: Send + Sync + fmt::Debug {
    /// Whether read-only mode is currently active
    fn is_read_only(&self) -> bool;

    /// Current mode as an enum
    fn mode(&self) -> Mode {
        Mode::from_flag(self.is_read_only())
    }
}

/// Operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Filter is inert
    Normal,

    /// State-changing forms are restricted
    ReadOnly,
}

impl Mode {
    /// Map the boolean flag onto a mode
    pub fn from_flag(read_only: bool) -> Self {
        if read_only {
            Self::ReadOnly
        } else {
            Self::Normal
        }
    }

    /// Check if this is read-only mode
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

/// Fixed mode flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMode(pub bool);

impl ModeSource for StaticMode {
    fn is_read_only(&self) -> bool {
        self.0
    }
}

/// Shared mode toggle
///
/// Clones share the same flag, so an operator can flip it while request
/// scopes keep reading it.
#[derive(Debug, Clone, Default)]
pub struct ModeSwitch {
    read_only: Arc<AtomicBool>,
}

impl ModeSwitch {
    /// Create a switch with an initial state
    pub fn new(read_only: bool) -> Self {
        Self {
            read_only: Arc::new(AtomicBool::new(read_only)),
        }
    }

    /// Turn read-only mode on
    pub fn enable(&self) {
        self.set(true);
    }

    /// Turn read-only mode off
    pub fn disable(&self) {
        self.set(false);
    }

    /// Set the flag
    pub fn set(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl ModeSource for ModeSwitch {
    fn is_read_only(&self) -> bool {
        self.read_only.load(Ordering::SeqCst)
    }
}
