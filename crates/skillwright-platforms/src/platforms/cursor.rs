//! Cursor platform generator
//!
//! Output structure: one `.mdc` rule file per kept entry under
//! `.cursor/rules/`, each wrapped in MDC frontmatter (description + globs)
//! looked up from a static table keyed by normalized basename, with a
//! generic fallback for unmatched names.
//!
//! Granular playwright-cli reference files are too fine-grained for Cursor
//! rules: only the pack's own `SKILL.md` survives, renamed to the fixed
//! basename `playwright-cli`.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use skillwright_generation::{AssetStore, SkillEntry, SkillKind};

use super::emit;
use crate::error::GenerateError;
use crate::fs::FileStore;

/// Frontmatter metadata for one rule file
#[derive(Debug, Clone, Copy)]
struct RuleMeta {
    description: &'static str,
    globs: &'static str,
}

static RULE_META: Lazy<HashMap<&'static str, RuleMeta>> = Lazy::new(|| {
    HashMap::from([
        (
            "playwright-patterns",
            RuleMeta {
                description: "Playwright API patterns: waitForResponse, toPass, expect.poll, network-first safeguards",
                globs: "**/*.spec.ts,**/*.page.ts",
            },
        ),
        (
            "data-strategy",
            RuleMeta {
                description: "Test data strategy: static vs dynamic factories",
                globs: "**/test-data/**,**/*.spec.ts",
            },
        ),
        (
            "test-review",
            RuleMeta {
                description: "Test review checklist: assertions, selectors, timing, isolation, POM, readability, reliability",
                globs: "**/*.spec.ts",
            },
        ),
        (
            "page-object-conventions",
            RuleMeta {
                description: "Page Object Model conventions: class structure, selectors, component composition",
                globs: "**/*.page.ts,**/components/**",
            },
        ),
        (
            "project-conventions",
            RuleMeta {
                description: "Project conventions: MUST/SHOULD/WON'T rules, file organization, CI/CD",
                globs: "**/*.spec.ts,**/*.page.ts,**/fixtures/**",
            },
        ),
        (
            "test-debugging",
            RuleMeta {
                description: "Test debugging: failure patterns, root cause classification, decision tree",
                globs: "**/*.spec.ts",
            },
        ),
        (
            "test-generation",
            RuleMeta {
                description: "Test generation: templates, import rules, fixture docs, page factory",
                globs: "**/*.spec.ts,**/*.page.ts",
            },
        ),
        (
            "test-planning",
            RuleMeta {
                description: "Test planning: exploration workflow, plan template, checklist",
                globs: "**/*.spec.ts",
            },
        ),
        (
            "playwright-cli",
            RuleMeta {
                description: "Playwright CLI: browser automation commands for testing and exploration",
                globs: "**/*.spec.ts",
            },
        ),
    ])
});

const FALLBACK_GLOBS: &str = "**/*.spec.ts";

fn rule_meta(basename: &str) -> (String, String) {
    match RULE_META.get(basename) {
        Some(meta) => (meta.description.to_string(), meta.globs.to_string()),
        None => (
            format!("Playwright skill: {basename}"),
            FALLBACK_GLOBS.to_string(),
        ),
    }
}

fn wrap_in_frontmatter(content: &str, description: &str, globs: &str) -> String {
    format!(
        "---\ndescription: {description}\nglobs: \"{globs}\"\n---\n\n{content}"
    )
}

/// Lay out skill entries as Cursor rule files
pub fn generate(
    dest: &Path,
    entries: &[SkillEntry],
    assets: &AssetStore,
    fs: &mut dyn FileStore,
) -> Result<Vec<String>, GenerateError> {
    let mut files = Vec::new();

    let index = assets.read("indexes/cursor-rules.mdc")?;
    emit(
        fs,
        dest,
        ".cursor/rules/playwright-e2e.mdc".to_string(),
        &index,
        &mut files,
    )?;

    for entry in entries {
        // Collapse the reference pack to its index entry alone
        if entry.kind == SkillKind::Reference && entry.name != "SKILL.md" {
            continue;
        }

        let basename = if entry.kind == SkillKind::Reference {
            "playwright-cli".to_string()
        } else {
            entry.name.trim_end_matches(".md").to_string()
        };

        let (description, globs) = rule_meta(&basename);
        let wrapped = wrap_in_frontmatter(&entry.content, &description, &globs);
        emit(
            fs,
            dest,
            format!(".cursor/rules/{basename}.mdc"),
            &wrapped,
            &mut files,
        )?;
    }

    debug!(files = files.len(), "cursor layout written");
    Ok(files)
}
