//! Typed hook configuration

use super::context::RawContext;
use super::flags::is_yes;
use crate::license::License;

/// Answers after coercion; built once, read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    pub use_tests: bool,
    /// Carried through verbatim; only reported, the template already rendered it
    pub test_framework: String,
    pub use_subtree: bool,
    pub use_assets: bool,
    pub use_documents: bool,
    pub add_readme_for_users: bool,
    pub license: License,
    pub use_package_init: bool,
    pub init_git: bool,
    pub git_config_local: bool,
    pub author_name: String,
    pub author_email: String,
}

impl HookConfig {
    /// Coerce rendered answers; missing answers count as empty strings
    pub fn from_raw(raw: &RawContext) -> Self {
        let flag = |value: &Option<String>| value.as_deref().map(is_yes).unwrap_or(false);
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            use_tests: flag(&raw.use_tests),
            test_framework: text(&raw.test_framework),
            use_subtree: flag(&raw.use_subtree),
            use_assets: flag(&raw.use_assets),
            use_documents: flag(&raw.use_documents),
            add_readme_for_users: flag(&raw.add_readme_for_users),
            license: License::parse(raw.license.as_deref().unwrap_or_default()),
            use_package_init: flag(&raw.use_package_init),
            init_git: flag(&raw.init_git),
            git_config_local: flag(&raw.git_config_local),
            author_name: text(&raw.author_name),
            author_email: text(&raw.author_email),
        }
    }
}
