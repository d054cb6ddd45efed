// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use env_logger::Logger;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Rewrites the level of records whose target starts with `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRule {
    pub target: String,
    pub from: Level,
    pub to: Level,
}

impl LevelRule {
    pub fn new(target: &str, from: Level, to: Level) -> Self {
        Self {
            target: target.to_string(),
            from,
            to,
        }
    }
}

/// Rules applied to every server run: actix announces each worker start at info.
pub fn default_rules() -> Vec<LevelRule> {
    vec![
        LevelRule::new("actix_server", Level::Info, Level::Debug),
        LevelRule::new("mio", Level::Debug, Level::Trace),
    ]
}

struct LevelModifierLogger {
    inner: Logger,
    rules: Vec<LevelRule>,
}

impl LevelModifierLogger {
    fn new(inner: Logger, rules: Vec<LevelRule>) -> Self {
        LevelModifierLogger { inner, rules }
    }
}

fn rewrite_level(rules: &[LevelRule], target: &str, original: Level) -> Level {
    rules
        .iter()
        .find(|rule| rule.from == original && target.starts_with(&rule.target))
        .map(|rule| rule.to)
        .unwrap_or(original)
}

impl Log for LevelModifierLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let new_level = rewrite_level(&self.rules, metadata.target(), metadata.level());
        let new_metadata = Metadata::builder()
            .level(new_level)
            .target(metadata.target())
            .build();
        self.inner.enabled(&new_metadata)
    }

    fn log(&self, record: &Record) {
        let new_level = rewrite_level(&self.rules, record.target(), record.level());
        let new_record = Record::builder()
            .level(new_level)
            .target(record.target())
            .args(*record.args())
            .module_path(record.module_path())
            .file(record.file())
            .line(record.line())
            .build();
        self.inner.log(&new_record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn init_logger(rules: Vec<LevelRule>, logger: Logger) -> Result<(), SetLoggerError> {
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(LevelModifierLogger::new(logger, rules)))?;
    log::set_max_level(max_level);
    Ok(())
}
