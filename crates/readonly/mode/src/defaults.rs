//! Built-in seed lists

use crate::form::FormSet;

/// Forms that stay usable in read-only mode out of the box
pub const DEFAULT_FORMS_ALLOWED: &[&str] = &[
    "user_login",
    "user_login_block",
    "user_pass",
    "user_pass_reset",
    "search_form",
    "search_block_form",
    "system_modules",
    "system_modules_confirm_form",
    "system_site_maintenance_mode",
    "readonlymode_admin_settings",
];

/// Forms that render without submission in read-only mode out of the box
pub const DEFAULT_FORMS_VIEWONLY: &[&str] = &["views_form_user_admin_page"];

/// Fresh copy of the default allow list
pub fn default_forms_allowed() -> FormSet {
    DEFAULT_FORMS_ALLOWED.iter().copied().collect()
}

/// Fresh copy of the default view-only list
pub fn default_forms_viewonly() -> FormSet {
    DEFAULT_FORMS_VIEWONLY.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let allowed = default_forms_allowed();
        assert!(allowed.contains("user_login"));
        assert!(allowed.contains("system_modules"));
        assert_eq!(allowed.len(), DEFAULT_FORMS_ALLOWED.len());

        let view_only = default_forms_viewonly();
        assert!(view_only.contains("views_form_user_admin_page"));
    }
}
