//! Modifier prefix resolution

use smallvec::SmallVec;

use crate::event::Modifiers;
use crate::tables::MODIFIER_TABLE;

/// Resolve the ordered, hyphen-joined modifier prefix for an event.
///
/// `base_token` is the already-resolved token of the key or button the
/// event is about (or `"wheel"`). When the base token coincides with an
/// active modifier token, its first occurrence is excluded from the
/// prefix, so pressing Control alone yields `"control"` rather than
/// `"control-control"`. A non-empty prefix carries a trailing `"-"`,
/// ready for direct concatenation with the base token.
pub fn modifier_prefix(modifiers: Modifiers, base_token: &str) -> String {
    let mut tokens: SmallVec<[&'static str; 4]> = SmallVec::new();
    for (flag, token) in MODIFIER_TABLE.iter().copied() {
        if modifiers.contains(flag) {
            if let Some(token) = token {
                tokens.push(token);
            }
        }
    }
    let mut prefix = tokens.join("-");

    if let Some(position) = tokens.iter().position(|token| *token == base_token) {
        tokens.remove(position);
        prefix = tokens.join("-");
    }

    if prefix == "-" {
        prefix.clear();
    }
    if !prefix.is_empty() {
        prefix.push('-');
    }
    prefix
}
