//! The `init` command: wizard, estimate confirmation, and generation run

use anyhow::Context;

use skillwright_generation::{estimate_file_count, AssetStore, ProjectSettings};
use skillwright_platforms::{generate, DiskStore, GenerateOptions};

use crate::cli::InitArgs;
use crate::detect::detect_project;
use crate::output::OutputStyle;
use crate::prompt::{self, SelectOption};

const PLATFORM_OPTIONS: [SelectOption; 4] = [
    SelectOption {
        id: "claude",
        label: "Claude Code",
        hint: ".claude/skills/",
    },
    SelectOption {
        id: "cursor",
        label: "Cursor",
        hint: ".cursor/rules/",
    },
    SelectOption {
        id: "copilot",
        label: "GitHub Copilot",
        hint: ".github/copilot-instructions.md",
    },
    SelectOption {
        id: "generic",
        label: "Generic",
        hint: ".agent-skills/",
    },
];

const PACK_OPTIONS: [SelectOption; 3] = [
    SelectOption {
        id: "core",
        label: "Core patterns",
        hint: "playwright-patterns, data-strategy, test-review",
    },
    SelectOption {
        id: "playwright-cli",
        label: "Playwright CLI reference",
        hint: "browser automation skill",
    },
    SelectOption {
        id: "templates",
        label: "Project templates",
        hint: "conventions, POM, debugging, generation, planning",
    },
];

/// Run `skillwright init`
pub fn run(args: InitArgs) -> anyhow::Result<()> {
    let style = OutputStyle::default();
    let interactive = args.platforms.is_empty() || args.packs.is_empty();

    // Step 1: project detection (advisory only)
    println!("{}", style.step(1, "Project Detection"));
    let detection = detect_project(&args.dest);
    if detection.has_playwright_config {
        println!("{}", style.success("Found playwright.config"));
    } else {
        println!(
            "{}",
            style.warning("No playwright.config found — will generate generic setup")
        );
    }
    if detection.is_typescript {
        println!("{}", style.success("TypeScript project detected"));
    } else {
        println!(
            "{}",
            style.info("JavaScript project (TypeScript recommended)")
        );
    }

    // Step 2: platforms
    println!("{}", style.step(2, "Agent Platform(s)"));
    let platforms = if args.platforms.is_empty() {
        prompt::multi_select(&style, "Which AI assistant(s) do you use?", &PLATFORM_OPTIONS)?
    } else {
        args.platforms.clone()
    };

    // Step 3: packs
    println!("{}", style.step(3, "Skill Packs"));
    let packs = if args.packs.is_empty() {
        prompt::multi_select(
            &style,
            "Which skill packs do you want to install?",
            &PACK_OPTIONS,
        )?
    } else {
        args.packs.clone()
    };

    // Step 4: project info, only relevant when templates are selected
    let defaults = ProjectSettings::default();
    let mut settings = ProjectSettings {
        project_name: args.project_name.unwrap_or(defaults.project_name),
        base_url: args.base_url.unwrap_or(defaults.base_url),
        fixture_import_path: args.fixture_import_path.unwrap_or(defaults.fixture_import_path),
        page_objects_dir: args.page_objects_dir.unwrap_or(defaults.page_objects_dir),
        test_dir: args.test_dir.unwrap_or(defaults.test_dir),
    };

    if interactive && packs.iter().any(|p| p == "templates") {
        println!("{}", style.step(4, "Project Info (for templates)"));
        settings.project_name = prompt::text(&style, "Project name:", &settings.project_name)?;
        settings.base_url = prompt::text(&style, "Base URL:", &settings.base_url)?;
        settings.fixture_import_path = prompt::text(
            &style,
            "Fixture import path (or \"none\" for @playwright/test):",
            &settings.fixture_import_path,
        )?;
        settings.page_objects_dir =
            prompt::text(&style, "Page objects directory:", &settings.page_objects_dir)?;
        settings.test_dir = prompt::text(&style, "Test directory pattern:", &settings.test_dir)?;
    }

    // Step 5: estimate, confirm, generate
    println!("{}", style.step(5, "Confirm & Generate"));
    let estimate = estimate_file_count(&platforms, &packs);
    if !args.yes {
        let proceed = prompt::confirm(
            &style,
            &format!(
                "Will create {} files across {} platform(s). Proceed?",
                estimate,
                platforms.len()
            ),
        )?;
        if !proceed {
            println!("{}", style.info("Setup cancelled."));
            return Ok(());
        }
    }

    let assets = AssetStore::resolve().context("asset resolution failed")?;
    let options = GenerateOptions {
        platforms,
        packs,
        settings,
        dest: args.dest,
    };
    let mut store = DiskStore;
    let result = generate(&options, &assets, &mut store).context("generation failed")?;
    tracing::debug!(
        estimated = estimate,
        written = result.files_created,
        "generation run complete"
    );

    println!(
        "{}",
        style.success(&format!("Generated {} files", result.files_created))
    );
    for file in &result.files {
        println!("  {}", style.dim(file));
    }
    println!(
        "Done! Next: customize the <!-- YOUR PROJECT: ... --> markers in the generated docs."
    );

    Ok(())
}
