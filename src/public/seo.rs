// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use crate::config::ValidatedConfig;
use crate::content::RouteTable;
use crate::headers::public_max_age;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use chrono::{NaiveDate, Utc};
use std::fmt::Write;

pub const LLMS_TXT_MAX_AGE: u32 = 3600;
pub const ROBOTS_TXT_MAX_AGE: u32 = 86400;
pub const SITEMAP_XML_MAX_AGE: u32 = 3600;

pub const SITEMAP_PATH: &str = "/sitemap.xml";

const SEARCH_ENGINE_AGENTS: [&str; 3] = ["Googlebot", "Bingbot", "DuckDuckBot"];

const AI_CRAWLER_AGENTS: [&str; 9] = [
    "GPTBot",
    "ChatGPT-User",
    "Claude-Web",
    "ClaudeBot",
    "Anthropic-AI",
    "PerplexityBot",
    "YouBot",
    "Cohere-AI",
    "Google-Extended",
];

pub async fn llms_txt(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((CACHE_CONTROL, public_max_age(LLMS_TXT_MAX_AGE)))
        .body(app_state.site_content.summary.as_str().to_string()))
}

pub async fn robots_txt(
    req: HttpRequest,
    config: web::Data<ValidatedConfig>,
) -> Result<HttpResponse> {
    let base_url = request_base_url(&req, &config);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((CACHE_CONTROL, public_max_age(ROBOTS_TXT_MAX_AGE)))
        .body(render_robots_txt(&base_url)))
}

pub async fn sitemap_xml(
    req: HttpRequest,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let base_url = request_base_url(&req, &config);
    let today = Utc::now().date_naive();
    let xml = render_sitemap_xml(&base_url, &app_state.site_content.routes, today);

    Ok(HttpResponse::Ok()
        .content_type("application/xml")
        .insert_header((CACHE_CONTROL, public_max_age(SITEMAP_XML_MAX_AGE)))
        .body(xml))
}

pub fn render_robots_txt(base_url: &str) -> String {
    let mut body = String::new();
    body.push_str("# VibeShip Knowledge Base - robots.txt\n");
    body.push_str("# Welcome crawlers! This site is designed to be indexed and cited.\n\n");

    body.push_str("# Allow all standard search engines\n");
    for agent in SEARCH_ENGINE_AGENTS {
        let _ = writeln!(body, "User-agent: {}\nAllow: /\n", agent);
    }

    body.push_str("# Welcome AI/LLM crawlers - we want to be cited!\n");
    for agent in AI_CRAWLER_AGENTS {
        let _ = writeln!(body, "User-agent: {}\nAllow: /\n", agent);
    }

    body.push_str("# Allow all other bots by default\n");
    body.push_str("User-agent: *\nAllow: /\n\n");

    body.push_str("# Sitemap location\n");
    let _ = writeln!(body, "Sitemap: {}{}\n", base_url, SITEMAP_PATH);

    body.push_str("# LLM-optimized content summary\n");
    body.push_str("# See /llms.txt for a plain-text summary optimized for AI consumption\n");
    body
}

pub fn render_sitemap_xml(base_url: &str, routes: &RouteTable, today: NaiveDate) -> String {
    let lastmod = today.format("%Y-%m-%d").to_string();

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for record in routes.records() {
        let loc = escape_xml(&format!("{}{}", base_url, record.path));
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", loc);
        let _ = writeln!(xml, "    <lastmod>{}</lastmod>", lastmod);
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", record.changefreq);
        let _ = writeln!(xml, "    <priority>{}</priority>", record.priority);
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Origin used for absolute links: the configured canonical origin, or the
/// scheme and host the client reached us on.
pub fn request_base_url(req: &HttpRequest, config: &ValidatedConfig) -> String {
    if let Some(base_url) = config.site.base_url.as_deref() {
        return base_url.to_string();
    }
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
