// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::http::StatusCode;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::test;
use std::fs;
use vibeship::util::TestConfigBuilder;

fn count_span(html: &str, section: &str) -> Option<String> {
    let marker = format!("data-section=\"{}\">", section);
    let start = html.find(&marker)? + marker.len();
    let end = html[start..].find('<')? + start;
    Some(html[start..end].trim().to_string())
}

#[actix_web::test]
async fn layout_renders_directory_counts() {
    let harness = common::TestHarness::new();
    harness
        .fixture
        .seed_category("security/vulnerabilities", &["sql-injection", "xss", "idor"])
        .unwrap();
    harness
        .fixture
        .seed_category("vibe-coding-tools", &["cursor", "bolt"])
        .unwrap();
    harness
        .fixture
        .seed_category("security/stacks", &["nextjs-supabase"])
        .unwrap();
    harness
        .fixture
        .seed_category("prompts", &["auth", "rls", "headers", "secrets"])
        .unwrap();
    // Files next to entries are not entries.
    fs::write(
        harness.fixture.kb_dir().join("prompts").join("README.md"),
        "notes",
    )
    .unwrap();

    let app = test::init_service(common::build_test_app(&harness)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(CACHE_CONTROL).unwrap().to_str().unwrap(),
        "public, s-maxage=300, max-age=0, must-revalidate"
    );

    let html = common::body_text(&test::read_body(resp).await);
    assert!(html.contains("Test App"));
    assert_eq!(count_span(&html, "vulnerabilities").as_deref(), Some("3"));
    assert_eq!(count_span(&html, "vibeTools").as_deref(), Some("2"));
    assert_eq!(count_span(&html, "stacks").as_deref(), Some("1"));
    assert_eq!(count_span(&html, "checklists").as_deref(), Some("0"));
    assert_eq!(count_span(&html, "prompts").as_deref(), Some("4"));
}

#[actix_web::test]
async fn layout_reports_zero_when_knowledge_base_is_missing() {
    let harness = common::TestHarness::new();
    assert!(!harness.fixture.kb_dir().exists());

    let app = test::init_service(common::build_test_app(&harness)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = common::body_text(&test::read_body(resp).await);
    for section in ["vulnerabilities", "vibeTools", "stacks", "checklists", "prompts"] {
        assert_eq!(count_span(&html, section).as_deref(), Some("0"), "{}", section);
    }
}

#[actix_web::test]
async fn layout_counts_follow_the_filesystem_between_requests() {
    let harness = common::TestHarness::new();
    harness
        .fixture
        .seed_category("security/checklists", &["launch"])
        .unwrap();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let html = common::body_text(
        &test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await,
    );
    assert_eq!(count_span(&html, "checklists").as_deref(), Some("1"));

    harness
        .fixture
        .seed_category("security/checklists", &["pre-deploy"])
        .unwrap();
    let html = common::body_text(
        &test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await,
    );
    assert_eq!(count_span(&html, "checklists").as_deref(), Some("2"));
}

#[actix_web::test]
async fn layout_counts_come_from_configured_kb_dir() {
    let harness =
        common::TestHarness::with_config(TestConfigBuilder::new().with_kb_dir("library"));
    let library = harness.fixture.path().join("library");
    for entry in ["xss", "csrf"] {
        fs::create_dir_all(library.join("security/vulnerabilities").join(entry)).unwrap();
    }
    harness
        .fixture
        .seed_category("security/vulnerabilities", &["ignored"])
        .unwrap();

    let app = test::init_service(common::build_test_app(&harness)).await;
    let html = common::body_text(
        &test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await,
    );
    assert_eq!(count_span(&html, "vulnerabilities").as_deref(), Some("2"));
}
