// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const VULNERABILITIES_DIR: &str = "security/vulnerabilities";
pub const VIBE_TOOLS_DIR: &str = "vibe-coding-tools";
pub const STACKS_DIR: &str = "security/stacks";
pub const CHECKLISTS_DIR: &str = "security/checklists";
pub const PROMPTS_DIR: &str = "prompts";

/// Number of category entries per content section, shown by the site layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryCounts {
    pub vulnerabilities: usize,
    pub vibe_tools: usize,
    pub stacks: usize,
    pub checklists: usize,
    pub prompts: usize,
}

impl DirectoryCounts {
    pub fn collect(kb_root: &Path) -> Self {
        Self {
            vulnerabilities: count_subdirectories(&kb_root.join(VULNERABILITIES_DIR)),
            vibe_tools: count_subdirectories(&kb_root.join(VIBE_TOOLS_DIR)),
            stacks: count_subdirectories(&kb_root.join(STACKS_DIR)),
            checklists: count_subdirectories(&kb_root.join(CHECKLISTS_DIR)),
            prompts: count_subdirectories(&kb_root.join(PROMPTS_DIR)),
        }
    }
}

/// Counts the direct children of `path` that are directories.
///
/// Symlinks are followed when classifying a child. A missing, unreadable or
/// non-directory `path` yields 0; a missing category must never break the page.
pub fn count_subdirectories(path: &Path) -> usize {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(error) => {
            debug!("Counting {} as empty: {}", path.display(), error);
            return 0;
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            fs::metadata(entry.path())
                .map(|metadata| metadata.is_dir())
                .unwrap_or(false)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::TestFixtureRoot;

    #[test]
    fn counts_only_direct_child_directories() {
        let fixture = TestFixtureRoot::new_unique("counts-direct").unwrap();
        let base = fixture.path().join("section");
        fs::create_dir_all(base.join("one")).unwrap();
        fs::create_dir_all(base.join("two").join("nested")).unwrap();
        fs::write(base.join("readme.md"), b"# not a directory").unwrap();

        assert_eq!(count_subdirectories(&base), 2);
    }

    #[test]
    fn missing_path_counts_as_zero() {
        let fixture = TestFixtureRoot::new_unique("counts-missing").unwrap();
        assert_eq!(count_subdirectories(&fixture.path().join("absent")), 0);
    }

    #[test]
    fn file_path_counts_as_zero() {
        let fixture = TestFixtureRoot::new_unique("counts-file").unwrap();
        let file = fixture.path().join("plain.txt");
        fs::write(&file, b"text").unwrap();
        assert_eq!(count_subdirectories(&file), 0);
    }

    #[test]
    fn empty_directory_counts_as_zero() {
        let fixture = TestFixtureRoot::new_unique("counts-empty").unwrap();
        assert_eq!(count_subdirectories(fixture.path()), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_counted_and_dangling_link_is_not() {
        use std::os::unix::fs::symlink;

        let fixture = TestFixtureRoot::new_unique("counts-symlink").unwrap();
        let target = fixture.path().join("target");
        let base = fixture.path().join("section");
        fs::create_dir_all(&target).unwrap();
        fs::create_dir_all(&base).unwrap();
        symlink(&target, base.join("linked")).unwrap();
        symlink(fixture.path().join("nowhere"), base.join("dangling")).unwrap();

        assert_eq!(count_subdirectories(&base), 1);
    }

    #[test]
    fn collect_reads_each_category_independently() {
        let fixture = TestFixtureRoot::new_unique("counts-collect").unwrap();
        let kb = fixture.path().join("kb");
        for name in ["sql-injection", "xss", "idor"] {
            fs::create_dir_all(kb.join(VULNERABILITIES_DIR).join(name)).unwrap();
        }
        fs::create_dir_all(kb.join(STACKS_DIR).join("nextjs-supabase")).unwrap();
        fs::create_dir_all(kb.join(PROMPTS_DIR).join("fix-xss")).unwrap();
        fs::create_dir_all(kb.join(PROMPTS_DIR).join("fix-cors")).unwrap();

        let counts = DirectoryCounts::collect(&kb);
        assert_eq!(
            counts,
            DirectoryCounts {
                vulnerabilities: 3,
                vibe_tools: 0,
                stacks: 1,
                checklists: 0,
                prompts: 2,
            }
        );
    }

    #[test]
    fn counts_serialize_with_camel_case_keys() {
        let counts = DirectoryCounts {
            vulnerabilities: 1,
            vibe_tools: 2,
            stacks: 3,
            checklists: 4,
            prompts: 5,
        };
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vulnerabilities": 1,
                "vibeTools": 2,
                "stacks": 3,
                "checklists": 4,
                "prompts": 5
            })
        );
    }
}
