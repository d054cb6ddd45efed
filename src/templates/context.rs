// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::content::DirectoryCounts;
use minijinja::{Value, context};

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name
        }
    }
}

/// Data handed to the site layout: app identity plus the section counts.
#[derive(Debug, Clone)]
pub struct LayoutPageContext {
    app_name: String,
    app_description: String,
    counts: DirectoryCounts,
}

impl LayoutPageContext {
    pub fn new(app_name: &str, app_description: &str, counts: DirectoryCounts) -> Self {
        Self {
            app_name: app_name.to_string(),
            app_description: app_description.to_string(),
            counts,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            app_description => &self.app_description,
            counts => Value::from_serialize(&self.counts)
        }
    }
}
