// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::ContentError;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

pub const ROUTES_FILE_NAME: &str = "sitemap_routes.yaml";

const EMBEDDED_ROUTES: &str = include_str!("assets/sitemap_routes.yaml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap priority in `[0, 1]`, kept as authored (`0.50` stays `0.50`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Priority(String);

impl Priority {
    /// Accepts a plain decimal such as `1`, `0.9` or `0.85`.
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text, None),
        };
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole) || fraction.is_some_and(|fraction| !is_digits(fraction)) {
            return Err(format!("priority is not a decimal number: '{}'", text));
        }

        let value = text
            .parse::<f64>()
            .map_err(|_| format!("priority is not a decimal number: '{}'", text))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("priority must be between 0.0 and 1.0, got: {}", text));
        }
        Ok(Self(text.to_string()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.contains('.') {
            f.write_str(&self.0)
        } else {
            write!(f, "{}.0", self.0)
        }
    }
}

// Plain YAML scalars (`1.00`) and quoted ones (`"0.50"`) both arrive as their
// source text, so trailing zeros survive.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Priority::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathRecord {
    pub path: String,
    pub priority: Priority,
    pub changefreq: ChangeFrequency,
}

#[derive(Debug, Deserialize)]
struct RouteTableFile {
    routes: Vec<PathRecord>,
}

/// Ordered list of pages advertised in the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    records: Vec<PathRecord>,
}

impl RouteTable {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(EMBEDDED_ROUTES, "embedded sitemap_routes.yaml")
    }

    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ContentError::Read(format!(
                "Failed to read route table '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    pub fn parse(contents: &str, source: &str) -> Result<Self, ContentError> {
        let file: RouteTableFile = serde_yaml::from_str(contents).map_err(|e| {
            ContentError::Parse(format!("Failed to parse route table '{}': {}", source, e))
        })?;
        Self::from_records(file.routes)
            .map_err(|message| ContentError::Invalid(format!("{}: {}", source, message)))
    }

    pub fn from_records(records: Vec<PathRecord>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for record in &records {
            if !record.path.starts_with('/') {
                return Err(format!("route path must start with '/': '{}'", record.path));
            }
            if record.path.chars().any(char::is_whitespace) {
                return Err(format!("route path must not contain whitespace: '{}'", record.path));
            }
            if !seen.insert(record.path.as_str()) {
                return Err(format!("duplicate route path: '{}'", record.path));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
