// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use std::sync::Arc;
use vibeship::app_state::AppState;
use vibeship::config::ValidatedConfig;
use vibeship::content::SiteContent;
use vibeship::headers;
use vibeship::public;
use vibeship::runtime_paths::RuntimePaths;
use vibeship::util::TestConfigBuilder;
use vibeship::util::test_fixtures::TestFixtureRoot;

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub config: Arc<ValidatedConfig>,
    pub runtime_paths: RuntimePaths,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(TestConfigBuilder::new())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(TestConfigBuilder::new().with_base_url(base_url))
    }

    /// Builds a harness whose site assets are loaded after `prepare` has had a
    /// chance to write override files into the fixture.
    pub fn with_site_overrides(prepare: impl FnOnce(&TestFixtureRoot)) -> Self {
        Self::build(TestConfigBuilder::new(), prepare)
    }

    pub fn with_config(builder: TestConfigBuilder) -> Self {
        Self::build(builder, |_| {})
    }

    fn build(builder: TestConfigBuilder, prepare: impl FnOnce(&TestFixtureRoot)) -> Self {
        let fixture = TestFixtureRoot::new_unique("http-test-suite").expect("fixture root");
        fixture.write_default_config().expect("fixture config");
        prepare(&fixture);

        let config = Arc::new(builder.build());
        let runtime_paths =
            RuntimePaths::from_root(fixture.path(), &config).expect("runtime paths");
        let site_content = SiteContent::load(&runtime_paths.site_dir).expect("site content");
        let app_state = Arc::new(AppState::new(
            &config.app.name,
            runtime_paths.clone(),
            site_content,
        ));

        Self {
            fixture,
            config,
            runtime_paths,
            app_state,
        }
    }
}

pub fn build_test_app(
    harness: &TestHarness,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::from(harness.config.clone()))
        .app_data(web::Data::from(harness.app_state.clone()))
        .wrap(headers::Headers)
        .configure(public::configure)
}

pub fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
