// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::path::Path;

pub mod counts;
pub mod routes;
pub mod summary;

pub use counts::{DirectoryCounts, count_subdirectories};
pub use routes::{ChangeFrequency, PathRecord, Priority, RouteTable};
pub use summary::SummaryDocument;

#[derive(Debug)]
pub enum ContentError {
    Read(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Read(msg) => write!(f, "Content read error: {}", msg),
            ContentError::Parse(msg) => write!(f, "Content parse error: {}", msg),
            ContentError::Invalid(msg) => write!(f, "Content validation error: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    Override,
}

/// Site-level content tables, loaded once at startup.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub routes: RouteTable,
    pub summary: SummaryDocument,
    pub routes_source: AssetSource,
    pub summary_source: AssetSource,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Ok(Self {
            routes: RouteTable::embedded()?,
            summary: SummaryDocument::embedded(),
            routes_source: AssetSource::Embedded,
            summary_source: AssetSource::Embedded,
        })
    }

    /// Loads the embedded tables, replacing each one that has a file of the
    /// same name in `site_dir`.
    pub fn load(site_dir: &Path) -> Result<Self, ContentError> {
        let routes_path = site_dir.join(routes::ROUTES_FILE_NAME);
        let (routes, routes_source) = if routes_path.is_file() {
            (RouteTable::from_file(&routes_path)?, AssetSource::Override)
        } else {
            (RouteTable::embedded()?, AssetSource::Embedded)
        };

        let summary_path = site_dir.join(summary::SUMMARY_FILE_NAME);
        let (summary, summary_source) = if summary_path.is_file() {
            (
                SummaryDocument::from_file(&summary_path)?,
                AssetSource::Override,
            )
        } else {
            (SummaryDocument::embedded(), AssetSource::Embedded)
        };

        Ok(Self {
            routes,
            summary,
            routes_source,
            summary_source,
        })
    }

    /// One line per asset, naming where it was loaded from.
    pub fn source_lines(&self, site_dir: &Path) -> Vec<String> {
        let routes = match self.routes_source {
            AssetSource::Override => format!(
                "Sitemap routes: {} entries from {}",
                self.routes.len(),
                site_dir.join(routes::ROUTES_FILE_NAME).display()
            ),
            AssetSource::Embedded => {
                format!("Sitemap routes: {} embedded entries", self.routes.len())
            }
        };
        let summary = match self.summary_source {
            AssetSource::Override => format!(
                "llms.txt: {}",
                site_dir.join(summary::SUMMARY_FILE_NAME).display()
            ),
            AssetSource::Embedded => "llms.txt: embedded document".to_string(),
        };
        vec![routes, summary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::TestFixtureRoot;
    use std::fs;

    #[test]
    fn load_without_overrides_uses_embedded_assets() {
        let fixture = TestFixtureRoot::new_unique("site-content-embedded").unwrap();
        let content = SiteContent::load(&fixture.path().join("site")).expect("site content");
        assert_eq!(content.routes_source, AssetSource::Embedded);
        assert_eq!(content.summary_source, AssetSource::Embedded);
        assert_eq!(content.routes, RouteTable::embedded().unwrap());
    }

    #[test]
    fn load_prefers_override_files() {
        let fixture = TestFixtureRoot::new_unique("site-content-override").unwrap();
        let site_dir = fixture.path().join("site");
        fs::create_dir_all(&site_dir).unwrap();
        fs::write(
            site_dir.join(routes::ROUTES_FILE_NAME),
            "routes:\n  - path: \"/kb\"\n    priority: 0.9\n    changefreq: weekly\n",
        )
        .unwrap();
        fs::write(site_dir.join(summary::SUMMARY_FILE_NAME), "# Override\n").unwrap();

        let content = SiteContent::load(&site_dir).expect("site content");
        assert_eq!(content.routes_source, AssetSource::Override);
        assert_eq!(content.summary_source, AssetSource::Override);
        assert_eq!(content.routes.len(), 1);
        assert_eq!(content.summary.as_str(), "# Override\n");

        let lines = content.source_lines(&site_dir);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Sitemap routes: 1 entries from "));
        assert!(lines[0].ends_with(routes::ROUTES_FILE_NAME));
        assert!(lines[1].ends_with(summary::SUMMARY_FILE_NAME));
    }

    #[test]
    fn invalid_override_fails_loading() {
        let fixture = TestFixtureRoot::new_unique("site-content-invalid").unwrap();
        let site_dir = fixture.path().join("site");
        fs::create_dir_all(&site_dir).unwrap();
        fs::write(site_dir.join(routes::ROUTES_FILE_NAME), "routes: [").unwrap();

        let err = SiteContent::load(&site_dir).expect_err("broken yaml");
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
