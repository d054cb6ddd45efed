// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use crate::config::{
    AppConfig, ContentConfig, LoggingConfig, ServerConfig, SiteConfig, ValidatedConfig,
};

#[derive(Debug, Clone)]
pub struct TestConfigBuilder {
    config: ValidatedConfig,
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatedConfig {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 5466,
                    workers: 1,
                },
                app: AppConfig {
                    name: "Test App".to_string(),
                    description: "Test Description".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                site: SiteConfig::default(),
                content: ContentConfig::default(),
            },
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.site.base_url = Some(base_url.to_string());
        self
    }

    pub fn with_kb_dir(mut self, kb_dir: &str) -> Self {
        self.config.content.kb_dir = kb_dir.to_string();
        self
    }

    pub fn build(self) -> ValidatedConfig {
        self.config
    }
}
