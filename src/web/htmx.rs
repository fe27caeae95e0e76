//! HTMX response headers and the multi-fragment response builder.
//!
//! A demo response is often several partials concatenated: the primary
//! fragment for the request target plus out-of-band fragments for other page
//! regions. [`Fragments`] renders them in order into one body.

use askama::Template;
use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;

/// Overrides the swap strategy, `none` skips swapping.
pub const HX_RESWAP: HeaderName = HeaderName::from_static("hx-reswap");
/// CSS selector replacing the request's target.
pub const HX_RETARGET: HeaderName = HeaderName::from_static("hx-retarget");
/// URL pushed into browser history.
pub const HX_PUSH_URL: HeaderName = HeaderName::from_static("hx-push-url");
/// Client events raised after the swap settles.
pub const HX_TRIGGER_AFTER_SETTLE: HeaderName = HeaderName::from_static("hx-trigger-after-settle");

/// Builder for an HTML response made of one or more fragments.
#[derive(Debug)]
pub struct Fragments {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl Default for Fragments {
    fn default() -> Self {
        Self::new()
    }
}

impl Fragments {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Renders `template` and appends it to the body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the template fails to render.
    pub fn render<T: Template>(mut self, template: &T) -> Result<Self, AppError> {
        template.render_into(&mut self.body)?;
        Ok(self)
    }

    /// Appends trusted markup as is.
    pub fn html(mut self, markup: &str) -> Self {
        self.body.push_str(markup);
        self
    }

    /// Sets `HX-Reswap: none` so the client keeps the current content.
    pub fn skip_swap(self) -> Self {
        self.header(HX_RESWAP, HeaderValue::from_static("none"))
    }

    pub fn retarget(self, selector: &'static str) -> Self {
        self.header(HX_RETARGET, HeaderValue::from_static(selector))
    }

    pub fn push_url(self, url: &'static str) -> Self {
        self.header(HX_PUSH_URL, HeaderValue::from_static(url))
    }

    /// Sets `HX-Trigger-After-Settle` to `events`, a JSON object keyed by
    /// event name.
    pub fn trigger_after_settle(self, events: &'static str) -> Self {
        self.header(HX_TRIGGER_AFTER_SETTLE, HeaderValue::from_static(events))
    }

    fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

impl IntoResponse for Fragments {
    fn into_response(self) -> Response {
        (self.status, self.headers, Html(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::templates::{PageMessage, Severity};

    #[tokio::test]
    async fn test_fragments_concatenate_in_order() {
        let response = Fragments::new()
            .html("<p>first</p>")
            .render(&PageMessage::new(Severity::Info, "second"))
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        let first = body.find("first").unwrap();
        let second = body.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_headers() {
        let response = Fragments::new()
            .status(StatusCode::UNPROCESSABLE_ENTITY)
            .skip_swap()
            .retarget("body")
            .push_url("errorpage")
            .trigger_after_settle(r#"{"ping" : 1}"#)
            .into_response();

        let headers = response.headers();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(headers["hx-reswap"], "none");
        assert_eq!(headers["hx-retarget"], "body");
        assert_eq!(headers["hx-push-url"], "errorpage");
        assert_eq!(headers["hx-trigger-after-settle"], r#"{"ping" : 1}"#);
        assert_eq!(headers["content-type"], "text/html; charset=utf-8");
    }
}
