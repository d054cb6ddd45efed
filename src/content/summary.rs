// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::ContentError;
use std::path::Path;

pub const SUMMARY_FILE_NAME: &str = "llms.txt";

const EMBEDDED_SUMMARY: &str = include_str!("assets/llms.txt");

/// Plain-text taxonomy digest served at `/llms.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDocument {
    body: String,
}

impl SummaryDocument {
    pub fn embedded() -> Self {
        Self {
            body: EMBEDDED_SUMMARY.to_string(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let body = std::fs::read_to_string(path).map_err(|e| {
            ContentError::Read(format!(
                "Failed to read summary document '{}': {}",
                path.display(),
                e
            ))
        })?;
        if body.trim().is_empty() {
            return Err(ContentError::Invalid(format!(
                "Summary document '{}' is empty",
                path.display()
            )));
        }
        Ok(Self { body })
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }
}
