//! # Default Naming Rules
//!
//! Names are `label.namespace`:
//!
//! - characters limited to `a-z`, `0-9`, `-`, `_`, `+` (and the single `.`)
//! - label non-empty, namespace 1-19 characters
//! - at most 37 characters in total

use crate::ports::outbound::NameRules;

/// Maximum length of a fully qualified name.
pub const MAX_NAME_LEN: usize = 37;

/// Maximum length of a namespace id.
pub const MAX_NAMESPACE_LEN: usize = 19;

/// Blockchain naming rules for `label.namespace` names.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockstackNameRules;

fn is_name_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-' | '_' | '+')
}

impl NameRules for BlockstackNameRules {
    fn is_valid_name(&self, name: &str) -> bool {
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return false;
        }
        let Some((label, namespace)) = name.split_once('.') else {
            return false;
        };
        !label.is_empty()
            && !namespace.is_empty()
            && namespace.len() <= MAX_NAMESPACE_LEN
            && label.chars().all(is_name_char)
            && namespace.chars().all(is_name_char)
    }
}
