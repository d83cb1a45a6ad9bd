//! The closed-form file-count estimate must match actual output for every
//! combination of platform set × pack set.

mod common;

use std::path::PathBuf;

use common::{ids, seeded_assets};
use skillwright_generation::{estimate_file_count, ProjectSettings};
use skillwright_platforms::{generate, GenerateOptions, MemoryStore};

const PLATFORMS: [&str; 4] = ["claude", "cursor", "copilot", "generic"];
const PACKS: [&str; 3] = ["core", "playwright-cli", "templates"];

fn subsets<'a>(items: &'a [&'a str]) -> Vec<Vec<&'a str>> {
    let mut out = Vec::new();
    for mask in 0..(1u32 << items.len()) {
        out.push(
            items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, v)| *v)
                .collect(),
        );
    }
    out
}

#[test]
fn estimate_matches_actual_for_every_selection() {
    let (_dir, assets) = seeded_assets();

    for platform_set in subsets(&PLATFORMS) {
        for pack_set in subsets(&PACKS) {
            let platforms = ids(&platform_set);
            let packs = ids(&pack_set);
            let estimate = estimate_file_count(&platforms, &packs);

            let mut fs = MemoryStore::new();
            let options = GenerateOptions {
                platforms: platforms.clone(),
                packs: packs.clone(),
                settings: ProjectSettings::default(),
                dest: PathBuf::from("proj"),
            };
            let result = generate(&options, &assets, &mut fs).unwrap();

            assert_eq!(
                estimate, result.files_created,
                "estimate mismatch for platforms={platform_set:?} packs={pack_set:?}"
            );
            assert_eq!(result.files_created, result.files.len());
        }
    }
}

#[test]
fn reference_collapsing_platforms_write_one_reference_file() {
    let (_dir, assets) = seeded_assets();

    for platform in ["cursor", "copilot"] {
        let mut fs = MemoryStore::new();
        let options = GenerateOptions {
            platforms: ids(&[platform]),
            packs: ids(&["playwright-cli"]),
            settings: ProjectSettings::default(),
            dest: PathBuf::from("proj"),
        };
        let result = generate(&options, &assets, &mut fs).unwrap();

        // Neither platform may emit granular reference sub-entries.
        assert!(
            result.files.iter().all(|f| !f.contains("references/")),
            "{platform} leaked granular reference files: {:?}",
            result.files
        );
    }
}

#[test]
fn identical_input_yields_identical_ordering_across_runs() {
    let (_dir, assets) = seeded_assets();
    let options = GenerateOptions {
        platforms: ids(&["claude", "generic"]),
        packs: ids(&["templates", "core"]),
        settings: ProjectSettings::default(),
        dest: PathBuf::from("proj"),
    };

    let mut fs_a = MemoryStore::new();
    let mut fs_b = MemoryStore::new();
    let a = generate(&options, &assets, &mut fs_a).unwrap();
    let b = generate(&options, &assets, &mut fs_b).unwrap();

    assert_eq!(a, b);
}
