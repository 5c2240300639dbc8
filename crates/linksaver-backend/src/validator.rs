// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Link validation — checks a candidate URL, fetches the page, and fills in
// the title and description the user left blank.
//
// Caller-supplied title/description always win over fetched values. After
// validation both fields are `Some`; a page without a title yields `Some("")`.

use std::future::Future;
use std::time::Duration;

use linksaver_core::error::{LinkSaverError, Result};
use linksaver_core::types::Link;
use tracing::{debug, instrument, warn};

/// Normalizes and checks a candidate link, returning the finalized record.
///
/// The seam between the UI flow and the network: tests substitute a fake
/// implementation so no validation test ever touches the network.
pub trait LinkValidator {
    fn validate(&self, candidate: Link) -> impl Future<Output = Result<Link>> + Send;
}

/// Validator that fetches the candidate page over HTTP.
#[derive(Debug, Clone)]
pub struct WebpageValidator {
    http: reqwest::Client,
}

impl WebpageValidator {
    /// Fails only when the HTTP client cannot be constructed, e.g. when the
    /// TLS backend fails to initialise.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("linksaver/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LinkSaverError::Bridge(format!("HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

impl LinkValidator for WebpageValidator {
    #[instrument(skip_all, fields(url = %candidate.url))]
    async fn validate(&self, candidate: Link) -> Result<Link> {
        // Reject bad URLs before any network traffic.
        let parsed = check_url(&candidate.url)?;

        let response = self.http.get(parsed).send().await.map_err(|e| {
            warn!(error = %e, "page fetch failed");
            LinkSaverError::Fetch {
                url: candidate.url.clone(),
                detail: e.to_string(),
            }
        })?;

        let status = response.status();
        if let Err(e) = check_status(status) {
            warn!(%status, "page rejected");
            return Err(e);
        }

        // The final URL after redirects replaces whatever the user typed.
        let final_url = response.url().to_string();

        let body = response.text().await.map_err(|e| LinkSaverError::Fetch {
            url: candidate.url.clone(),
            detail: e.to_string(),
        })?;

        let meta = extract_metadata(&body);
        debug!(
            final_url,
            title = meta.title.as_deref().unwrap_or(""),
            "page fetched"
        );

        Ok(Link {
            url: final_url,
            title: candidate.title.or(meta.title).or_else(|| Some(String::new())),
            description: candidate
                .description
                .or(meta.description)
                .or_else(|| Some(String::new())),
            ..candidate
        })
    }
}

/// Syntactic checks only, no network.  Used when metadata fetching is
/// disabled; blank title/description are floored to `Some("")` so the stored
/// shape matches fetched links.
pub fn validate_offline(candidate: Link) -> Result<Link> {
    check_url(&candidate.url)?;
    Ok(Link {
        title: candidate.title.or_else(|| Some(String::new())),
        description: candidate.description.or_else(|| Some(String::new())),
        ..candidate
    })
}

/// Parse the candidate URL and require an http(s) scheme.
fn check_url(url: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(url).map_err(|_| LinkSaverError::InvalidUrl(url.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(LinkSaverError::InvalidUrl(url.to_string()));
    }
    Ok(parsed)
}

/// A 4xx/5xx response means the page does not exist for saving purposes.
fn check_status(status: reqwest::StatusCode) -> Result<()> {
    if status.is_client_error() || status.is_server_error() {
        return Err(LinkSaverError::Rejected(format!(
            "the page returned {status}"
        )));
    }
    Ok(())
}

/// Title and description scraped from a page.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Pull `<title>` and `<meta name="description">` out of an HTML document.
///
/// Offsets are computed on an ASCII-lowercased copy, which has the same byte
/// layout as the original, so slices are taken from the original text.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let lower = html.to_ascii_lowercase();

    let title = find_title(html, &lower);
    let description = find_meta_description(html, &lower);

    PageMetadata { title, description }
}

fn find_title(html: &str, lower: &str) -> Option<String> {
    let open = lower.find("<title")?;
    let content_start = open + lower[open..].find('>')? + 1;
    let content_len = lower[content_start..].find("</title")?;
    let raw = &html[content_start..content_start + content_len];
    Some(decode_entities(raw.trim()))
}

fn find_meta_description(html: &str, lower: &str) -> Option<String> {
    let mut at = 0;
    while let Some(rel) = lower[at..].find("<meta") {
        let tag_start = at + rel;
        let tag_end = tag_start + lower[tag_start..].find('>')?;
        let tag_lower = &lower[tag_start..tag_end];

        if attr_value(tag_lower, tag_lower, "name").as_deref() == Some("description") {
            return attr_value(&html[tag_start..tag_end], tag_lower, "content")
                .map(|v| decode_entities(v.trim()));
        }
        at = tag_end;
    }
    None
}

/// Extract a quoted attribute value from a single tag. `tag` and `tag_lower`
/// must be the same slice of the document in original and lowercased form.
fn attr_value(tag: &str, tag_lower: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=");
    let at = tag_lower.find(&needle)? + needle.len();
    let rest = tag.get(at..)?;
    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let inner = &rest[1..];
    let end = inner.find(quote)?;
    Some(inner[..end].to_string())
}

/// Decode the handful of entities that commonly appear in titles.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_construction_succeeds() {
        assert!(WebpageValidator::new().is_ok());
    }

    #[tokio::test]
    async fn invalid_url_rejected_without_network() {
        let validator = WebpageValidator::new().expect("client");
        let err = validator
            .validate(Link::new("youtubecom"))
            .await
            .expect_err("must reject");
        assert!(matches!(err, LinkSaverError::InvalidUrl(u) if u == "youtubecom"));
    }

    #[tokio::test]
    async fn non_http_scheme_rejected() {
        let validator = WebpageValidator::new().expect("client");
        let err = validator
            .validate(Link::new("ftp://example.com/file"))
            .await
            .expect_err("must reject");
        assert!(matches!(err, LinkSaverError::InvalidUrl(_)));
    }

    #[test]
    fn error_statuses_reject_the_link() {
        let err = check_status(reqwest::StatusCode::NOT_FOUND).expect_err("404 rejects");
        assert!(matches!(err, LinkSaverError::Rejected(_)));
        let err = check_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR).expect_err("500");
        assert!(matches!(err, LinkSaverError::Rejected(_)));

        assert!(check_status(reqwest::StatusCode::OK).is_ok());
        assert!(check_status(reqwest::StatusCode::FOUND).is_ok());
    }

    #[test]
    fn offline_validation_fills_blank_fields() {
        let link = validate_offline(Link::new("https://a.com").title("Kept")).expect("valid");
        assert_eq!(link.title.as_deref(), Some("Kept"));
        assert_eq!(link.description.as_deref(), Some(""));
    }

    #[test]
    fn offline_validation_rejects_bad_urls() {
        let err = validate_offline(Link::new("not a url")).expect_err("must reject");
        assert!(matches!(err, LinkSaverError::InvalidUrl(_)));
    }

    #[test]
    fn extracts_title_and_description() {
        let html = r#"<html><head>
            <TITLE> Rust &amp; Friends </TITLE>
            <meta name="description" content="A website about Rust">
        </head><body></body></html>"#;

        let meta = extract_metadata(html);
        assert_eq!(meta.title.as_deref(), Some("Rust & Friends"));
        assert_eq!(meta.description.as_deref(), Some("A website about Rust"));
    }

    #[test]
    fn single_quoted_attributes() {
        let html = "<meta name='description' content='single quoted'>";
        let meta = extract_metadata(html);
        assert_eq!(meta.description.as_deref(), Some("single quoted"));
    }

    #[test]
    fn attribute_order_does_not_matter() {
        let html = r#"<meta content="described first" name="description">"#;
        let meta = extract_metadata(html);
        assert_eq!(meta.description.as_deref(), Some("described first"));
    }

    #[test]
    fn missing_metadata_yields_none() {
        let meta = extract_metadata("<html><body>plain</body></html>");
        assert_eq!(meta.title, None);
        assert_eq!(meta.description, None);
    }

    #[test]
    fn other_meta_tags_are_skipped() {
        let html = r#"<meta name="viewport" content="width=device-width">
            <meta name="description" content="the real one">"#;
        let meta = extract_metadata(html);
        assert_eq!(meta.description.as_deref(), Some("the real one"));
    }
}
