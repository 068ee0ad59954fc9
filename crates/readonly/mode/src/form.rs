//! Form identifiers and form sets
//!
//! A [`FormId`] is an opaque token; nothing here interprets it. A
//! [`FormSet`] is the mutable set handed to alteration hooks, and
//! [`AllowList`] / [`ViewOnlyList`] are the frozen results of a build.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a form or operation kind
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    /// Create a new form identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FormId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&String> for FormId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

impl AsRef<str> for FormId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FormId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Mutable set of form identifiers
///
/// Membership is all that matters: insertion order is not kept and
/// duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSet {
    forms: BTreeSet<FormId>,
}

impl FormSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a form, returning `true` if it was not already present
    pub fn insert(&mut self, form: impl Into<FormId>) -> bool {
        self.forms.insert(form.into())
    }

    /// Remove a form, returning `true` if it was present
    pub fn remove(&mut self, form: &str) -> bool {
        self.forms.remove(form)
    }

    /// Check membership
    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(form)
    }

    /// Number of forms in the set
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Iterate over the forms in sorted order
    pub fn iter(&self) -> btree_set::Iter<'_, FormId> {
        self.forms.iter()
    }
}

impl<F: Into<FormId>> Extend<F> for FormSet {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.forms.extend(iter.into_iter().map(Into::into));
    }
}

impl<F: Into<FormId>> FromIterator<F> for FormSet {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a FormSet {
    type Item = &'a FormId;
    type IntoIter = btree_set::Iter<'a, FormId>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}

macro_rules! frozen_list {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
        #[serde(transparent)]
        pub struct $name(FormSet);

        impl $name {
            /// Check membership
            pub fn contains(&self, form: &str) -> bool {
                self.0.contains(form)
            }

            /// Number of forms in the list
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether the list is empty
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Iterate over the forms in sorted order
            pub fn iter(&self) -> btree_set::Iter<'_, FormId> {
                self.0.iter()
            }

            /// Borrow the underlying set
            pub fn as_set(&self) -> &FormSet {
                &self.0
            }
        }

        impl From<FormSet> for $name {
            fn from(set: FormSet) -> Self {
                Self(set)
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a FormId;
            type IntoIter = btree_set::Iter<'a, FormId>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

frozen_list!(
    /// Forms that keep full access while read-only mode is active
    AllowList
);

frozen_list!(
    /// Forms that may render but not submit while read-only mode is active
    ViewOnlyList
);
