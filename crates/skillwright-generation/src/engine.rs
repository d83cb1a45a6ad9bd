//! Minimal template engine
//!
//! Replaces `{{PLACEHOLDER}}` values and resolves `{{#if KEY}}...{{/if}}`
//! conditional blocks against a flat [`TemplateContext`]. Single pass:
//! markers introduced by substitution are never reprocessed. Pure and
//! side-effect-free.
//!
//! `<!-- YOUR PROJECT: ... -->` markers and placeholders with no matching
//! key are left verbatim so a partially-templated document stays legible
//! for manual completion.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::context::{ContextValue, TemplateContext};

/// `{{#if KEY}}body{{/if}}`, non-greedy, body may span lines
static CONDITIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\{#if\s+(\w+)\}\}(.*?)\{\{/if\}\}").unwrap());

/// `{{KEY}}`
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

/// Three or more consecutive line breaks, an artifact of removed blocks
static EXCESS_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Render a template against a context
///
/// Processing order is load-bearing: conditionals resolve before
/// placeholders, because kept conditional bodies may contain placeholders
/// of their own.
///
/// 1. Each conditional block is kept (markers stripped) when its key is
///    truthy, and removed entirely when the key is falsy or unknown.
/// 2. Each remaining placeholder is replaced with the string form of its
///    context value. A missing key, or a key bound to a boolean flag,
///    leaves the token verbatim.
/// 3. Runs of three or more line breaks collapse to exactly two.
pub fn render(template: &str, ctx: &TemplateContext) -> String {
    let after_conditionals = CONDITIONAL.replace_all(template, |caps: &Captures| {
        let truthy = ctx
            .get(&caps[1])
            .map(ContextValue::is_truthy)
            .unwrap_or(false);
        if truthy {
            caps[2].to_string()
        } else {
            String::new()
        }
    });

    let after_placeholders =
        PLACEHOLDER.replace_all(&after_conditionals, |caps: &Captures| match ctx.get(&caps[1]) {
            Some(ContextValue::Str(value)) => value.clone(),
            // Flags are only for conditionals; unknown keys stay verbatim
            Some(ContextValue::Flag(_)) | None => caps[0].to_string(),
        });

    EXCESS_BLANKS
        .replace_all(&after_placeholders, "\n\n")
        .into_owned()
}
