// This file is part of the product VibeShip Knowledge Base.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{
    CACHE_CONTROL, HeaderName, HeaderValue, PRAGMA, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use actix_web::{Error, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ok};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

pub const STATIC_HTML_CACHE_CONTROL: &str = "public, s-maxage=300, max-age=0, must-revalidate";
pub const DYNAMIC_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

/// Cache policy a handler asks for when it does not write `Cache-Control` itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CacheDirective {
    #[default]
    Default,
    StaticHtml,
}

pub fn set_cache_directive(req: &HttpRequest, directive: CacheDirective) {
    req.extensions_mut().insert(directive);
}

/// Cache-Control value for a public document cached for `max_age_seconds`.
pub fn public_max_age(max_age_seconds: u32) -> String {
    format!("public, max-age={}", max_age_seconds)
}

pub struct Headers;

impl<S, B> Transform<S, ServiceRequest> for Headers
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = HeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(HeadersMiddleware {
            service: Rc::new(service),
        })
    }
}

pub struct HeadersMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for HeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            let directive = res
                .request()
                .extensions()
                .get::<CacheDirective>()
                .copied()
                .unwrap_or_default();

            let headers = res.headers_mut();
            headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
            headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
            headers.insert(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            );

            // Handlers that publish their own lifetime (robots, sitemap, llms) win.
            if !headers.contains_key(CACHE_CONTROL) {
                match directive {
                    CacheDirective::StaticHtml => {
                        headers.insert(
                            CACHE_CONTROL,
                            HeaderValue::from_static(STATIC_HTML_CACHE_CONTROL),
                        );
                    }
                    CacheDirective::Default => {
                        headers.insert(
                            CACHE_CONTROL,
                            HeaderValue::from_static(DYNAMIC_CACHE_CONTROL),
                        );
                        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
                    }
                }
            }

            Ok(res)
        })
    }
}
