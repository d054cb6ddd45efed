// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::CONFIG_FILE_NAME;

const FIXTURE_CONFIG: &str = "server:\n  host: \"127.0.0.1\"\n  port: 5466\n  workers: 1\napp:\n  name: \"Test App\"\n  description: \"Test Description\"\nlogging:\n  level: \"info\"\n";

#[derive(Debug)]
pub struct TestFixtureRoot {
    path: PathBuf,
}

impl TestFixtureRoot {
    pub fn new_fixed(name: &str) -> std::io::Result<Self> {
        let root = fixtures_root().join(name);
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { path: root })
    }

    pub fn new_unique(prefix: &str) -> std::io::Result<Self> {
        let name = format!("{}-{}", prefix, Uuid::new_v4());
        Self::new_fixed(&name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kb_dir(&self) -> PathBuf {
        self.path.join("content").join("kb")
    }

    pub fn site_dir(&self) -> PathBuf {
        self.path.join("site")
    }

    pub fn write_default_config(&self) -> std::io::Result<()> {
        fs::write(self.path.join(CONFIG_FILE_NAME), FIXTURE_CONFIG)
    }

    /// Creates one directory per entry under `kb_dir()/<category>`.
    pub fn seed_category(&self, category: &str, entries: &[&str]) -> std::io::Result<()> {
        let base = self.kb_dir().join(category);
        fs::create_dir_all(&base)?;
        for entry in entries {
            fs::create_dir_all(base.join(entry))?;
        }
        Ok(())
    }
}

impl Drop for TestFixtureRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("test-fixtures")
}
