//! Mode filter
//!
//! [`build`] seeds the two lists and runs the registered hooks;
//! [`decide`] classifies a form against the frozen result.

use crate::form::{AllowList, FormSet, ViewOnlyList};
use crate::hooks::{self, AlterRegistry};
use crate::verdict::Verdict;
use serde::Serialize;
use tracing::debug;

/// Frozen lists for one evaluation context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormLists {
    /// Forms with full access during read-only mode
    pub allowed: AllowList,

    /// Forms restricted to viewing during read-only mode
    pub view_only: ViewOnlyList,
}

/// Seed both lists from the defaults and run every hook over them
///
/// Allow-list hooks only see the allow set and view-only hooks only see
/// the view-only set. Within each list, hooks run strictly in
/// registration order.
pub fn build(
    defaults_allowed: FormSet,
    defaults_viewonly: FormSet,
    registry: &AlterRegistry,
) -> FormLists {
    let mut allowed = defaults_allowed;
    hooks::apply(registry.allowed_hooks(), &mut allowed);

    let mut view_only = defaults_viewonly;
    hooks::apply(registry.viewonly_hooks(), &mut view_only);

    debug!(
        allowed = allowed.len(),
        view_only = view_only.len(),
        allowed_hooks = registry.allowed_hooks().len(),
        viewonly_hooks = registry.viewonly_hooks().len(),
        "Built read-only form lists"
    );

    FormLists {
        allowed: AllowList::from(allowed),
        view_only: ViewOnlyList::from(view_only),
    }
}

/// Classify a form
///
/// Outside read-only mode every form gets full access. In read-only mode
/// the allow list is checked first, so a form on both lists gets full
/// access; unknown forms are rejected.
pub fn decide(
    form_id: &str,
    read_only: bool,
    allowed: &AllowList,
    view_only: &ViewOnlyList,
) -> Verdict {
    if !read_only {
        return Verdict::FullAccess;
    }

    if allowed.contains(form_id) {
        Verdict::FullAccess
    } else if view_only.contains(form_id) {
        Verdict::ViewOnly
    } else {
        Verdict::Rejected
    }
}

/// Filter owning one context's frozen lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeFilter {
    lists: FormLists,
}

impl ModeFilter {
    /// Build the lists for a new context
    pub fn build(
        defaults_allowed: FormSet,
        defaults_viewonly: FormSet,
        registry: &AlterRegistry,
    ) -> Self {
        Self {
            lists: build(defaults_allowed, defaults_viewonly, registry),
        }
    }

    /// Wrap lists that were already built
    pub fn from_lists(lists: FormLists) -> Self {
        Self { lists }
    }

    /// Classify a form against this filter's lists
    pub fn decide(&self, form_id: &str, read_only: bool) -> Verdict {
        decide(form_id, read_only, &self.lists.allowed, &self.lists.view_only)
    }

    /// The allow list
    pub fn allowed(&self) -> &AllowList {
        &self.lists.allowed
    }

    /// The view-only list
    pub fn view_only(&self) -> &ViewOnlyList {
        &self.lists.view_only
    }

    /// Both lists
    pub fn lists(&self) -> &FormLists {
        &self.lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::FnAlter;
    use proptest::prelude::*;

    fn set(ids: &[&str]) -> FormSet {
        ids.iter().copied().collect()
    }

    fn lists(allowed: &[&str], view_only: &[&str]) -> (AllowList, ViewOnlyList) {
        (
            AllowList::from(set(allowed)),
            ViewOnlyList::from(set(view_only)),
        )
    }

    #[test]
    fn test_inert_outside_read_only() {
        let (allowed, view_only) = lists(&[], &["user_admin_page"]);
        assert_eq!(
            decide("anything", false, &allowed, &view_only),
            Verdict::FullAccess
        );
        assert_eq!(
            decide("user_admin_page", false, &allowed, &view_only),
            Verdict::FullAccess
        );
    }

    #[test]
    fn test_allow_beats_view_only() {
        let (allowed, view_only) = lists(&["both"], &["both"]);
        assert_eq!(decide("both", true, &allowed, &view_only), Verdict::FullAccess);
    }

    #[test]
    fn test_view_only_and_rejected() {
        let (allowed, view_only) = lists(&["user_login"], &["user_admin_page"]);
        assert_eq!(
            decide("user_admin_page", true, &allowed, &view_only),
            Verdict::ViewOnly
        );
        assert_eq!(
            decide("node_form", true, &allowed, &view_only),
            Verdict::Rejected
        );
    }

    #[test]
    fn test_hooks_only_see_their_list() {
        let registry = AlterRegistry::new()
            .with_allowed(FnAlter::new("allow", |forms: &mut FormSet| {
                assert!(forms.contains("seed_allowed"));
                assert!(!forms.contains("seed_viewonly"));
                forms.insert("added");
            }))
            .with_viewonly(FnAlter::new("viewonly", |forms: &mut FormSet| {
                assert!(forms.contains("seed_viewonly"));
                assert!(!forms.contains("added"));
            }));

        let lists = build(set(&["seed_allowed"]), set(&["seed_viewonly"]), &registry);
        assert!(lists.allowed.contains("added"));
        assert!(!lists.view_only.contains("added"));
    }

    #[test]
    fn test_hook_order_matters() {
        let add = || {
            FnAlter::new("add", |forms: &mut FormSet| {
                forms.insert("x");
            })
        };
        let remove = || {
            FnAlter::new("remove", |forms: &mut FormSet| {
                forms.remove("x");
            })
        };

        let add_then_remove = AlterRegistry::new()
            .with_allowed(add())
            .with_allowed(remove());
        let lists = build(FormSet::new(), FormSet::new(), &add_then_remove);
        assert!(!lists.allowed.contains("x"));

        let remove_then_add = AlterRegistry::new()
            .with_allowed(remove())
            .with_allowed(add());
        let lists = build(FormSet::new(), FormSet::new(), &remove_then_add);
        assert!(lists.allowed.contains("x"));
    }

    #[test]
    fn test_build_is_repeatable() {
        let registry = AlterRegistry::new().with_allowed(FnAlter::new(
            "custom",
            |forms: &mut FormSet| {
                forms.insert("custom_form");
            },
        ));

        let first = ModeFilter::build(set(&["a"]), set(&["b"]), &registry);
        let second = ModeFilter::build(set(&["a"]), set(&["b"]), &registry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mode_filter_decide() {
        let filter = ModeFilter::build(
            set(&["contact_form"]),
            set(&["report"]),
            &AlterRegistry::new(),
        );
        assert_eq!(filter.decide("contact_form", true), Verdict::FullAccess);
        assert_eq!(filter.decide("report", true), Verdict::ViewOnly);
        assert_eq!(filter.decide("other", true), Verdict::Rejected);
        assert_eq!(filter.allowed().len(), 1);
        assert_eq!(filter.view_only().len(), 1);
    }

    fn id_strategy() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[a-z_]{1,8}"]
    }

    fn ids_strategy() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(id_strategy(), 0..8)
    }

    proptest! {
        #[test]
        fn property_inert_when_not_read_only(
            form in id_strategy(),
            allowed in ids_strategy(),
            view_only in ids_strategy()
        ) {
            let allowed = AllowList::from(allowed.into_iter().collect::<FormSet>());
            let view_only = ViewOnlyList::from(view_only.into_iter().collect::<FormSet>());
            prop_assert_eq!(decide(&form, false, &allowed, &view_only), Verdict::FullAccess);
        }

        #[test]
        fn property_verdict_follows_membership(
            form in id_strategy(),
            allowed in ids_strategy(),
            view_only in ids_strategy()
        ) {
            let in_allowed = allowed.contains(&form);
            let in_view_only = view_only.contains(&form);
            let allowed = AllowList::from(allowed.into_iter().collect::<FormSet>());
            let view_only = ViewOnlyList::from(view_only.into_iter().collect::<FormSet>());

            let expected = if in_allowed {
                Verdict::FullAccess
            } else if in_view_only {
                Verdict::ViewOnly
            } else {
                Verdict::Rejected
            };
            prop_assert_eq!(decide(&form, true, &allowed, &view_only), expected);
        }

        #[test]
        fn property_build_is_deterministic(
            allowed in ids_strategy(),
            view_only in ids_strategy(),
            extra in id_strategy()
        ) {
            let registry = AlterRegistry::new().with_allowed(FnAlter::new(
                "extra",
                move |forms: &mut FormSet| {
                    forms.insert(extra.clone());
                },
            ));

            let first = build(
                allowed.iter().collect(),
                view_only.iter().collect(),
                &registry,
            );
            let second = build(
                allowed.iter().rev().collect(),
                view_only.iter().rev().collect(),
                &registry,
            );
            prop_assert_eq!(first, second);
        }
    }
}
