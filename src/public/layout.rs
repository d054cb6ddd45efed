// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use crate::config::ValidatedConfig;
use crate::content::DirectoryCounts;
use crate::headers::{CacheDirective, set_cache_directive};
use crate::public::error::html_escape;
use crate::templates::{LayoutPageContext, render_minijinja_template};
use actix_web::{HttpRequest, HttpResponse, Result, web};

const LAYOUT_TEMPLATE: &str = "public/layout.html";

/// Site shell. Section counts are read from disk on every request so new
/// knowledge-base entries show up without a restart.
pub async fn index(
    req: HttpRequest,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let counts = DirectoryCounts::collect(&app_state.runtime_paths.kb_dir);
    log::debug!("Layout counts: {:?}", counts);

    let context =
        LayoutPageContext::new(&config.app.name, &config.app.description, counts).to_value();

    let html = match render_minijinja_template(
        app_state.templates.as_ref(),
        LAYOUT_TEMPLATE,
        context,
    ) {
        Ok(html) => html,
        Err(e) => {
            log::error!("Failed to render layout template: {}", e);
            fallback_layout_html(&config.app.name, &counts)
        }
    };

    set_cache_directive(&req, CacheDirective::StaticHtml);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

fn fallback_layout_html(app_name: &str, counts: &DirectoryCounts) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>{name}</title></head>
<body><h1>{name}</h1>
<ul>
<li>Vulnerabilities: {vulnerabilities}</li>
<li>Vibe coding tools: {vibe_tools}</li>
<li>Stacks: {stacks}</li>
<li>Checklists: {checklists}</li>
<li>Prompts: {prompts}</li>
</ul>
</body></html>"#,
        name = html_escape(app_name),
        vulnerabilities = counts.vulnerabilities,
        vibe_tools = counts.vibe_tools,
        stacks = counts.stacks,
        checklists = counts.checklists,
        prompts = counts.prompts,
    )
}
