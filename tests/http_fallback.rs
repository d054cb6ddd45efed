// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::http::StatusCode;
use actix_web::http::header::{CACHE_CONTROL, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use actix_web::test;

#[actix_web::test]
async fn unknown_path_renders_404_page() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(&harness)).await;

    let req = test::TestRequest::get().uri("/no/such/page").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(CACHE_CONTROL).unwrap().to_str().unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(
        resp.headers().get(X_CONTENT_TYPE_OPTIONS).unwrap().to_str().unwrap(),
        "nosniff"
    );
    assert_eq!(
        resp.headers().get(X_FRAME_OPTIONS).unwrap().to_str().unwrap(),
        "SAMEORIGIN"
    );

    let body = common::body_text(&test::read_body(resp).await);
    assert!(body.contains("404 - Page Not Found | Test App"));
}
