// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Link service — typed operations over the raw storage blob, including the
// append-and-validate flow for new links.
//
// The collection is rewritten whole on every change and the UI is the single
// writer; overlapping appends would race (both read the same base list), so
// callers must not run two mutations concurrently.

use linksaver_backend::{LinkValidator, validate_offline};
use linksaver_core::error::Result;
use linksaver_core::types::{Link, LinkId};
use tracing::{info, instrument};

use crate::backend::LinkStore;

/// Typed access to the persisted link collection.
///
/// The storage backend is injected at construction (see
/// [`crate::select_backend`]); the validator is the external collaborator
/// that finalizes candidate links before they are appended.
pub struct LinkService<V> {
    store: Box<dyn LinkStore>,
    validator: V,
}

impl<V: LinkValidator> LinkService<V> {
    pub fn new(store: Box<dyn LinkStore>, validator: V) -> Self {
        Self { store, validator }
    }

    /// The stored collection; an empty vec when nothing was ever saved.
    ///
    /// Stored data that is not a valid JSON array is an error — unlike an
    /// absent file, it means a previously written collection was corrupted.
    pub fn load_links(&self) -> Result<Vec<Link>> {
        match self.store.load() {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize and persist the full collection.
    pub fn save_links(&self, links: &[Link]) -> Result<()> {
        let json = serde_json::to_string(links)?;
        self.store.save(&json)
    }

    /// Validate `candidate` and append the finalized record.
    ///
    /// On validation failure the stored collection is untouched — there is no
    /// partial append.  Returns the finalized record as the validator
    /// produced it.
    #[instrument(skip_all, fields(url = %candidate.url))]
    pub async fn add_link(&self, candidate: Link) -> Result<Link> {
        let mut links = self.load_links()?;

        let finalized = self.validator.validate(candidate).await?;

        links.push(finalized.clone());
        self.save_links(&links)?;

        info!(id = %finalized.id, total = links.len(), "link saved");
        Ok(finalized)
    }

    /// Append `candidate` after syntactic checks only — no page fetch.
    ///
    /// The offline counterpart of [`Self::add_link`], for when metadata
    /// fetching is disabled.  The same no-partial-append rule applies.
    #[instrument(skip_all, fields(url = %candidate.url))]
    pub fn add_link_offline(&self, candidate: Link) -> Result<Link> {
        let mut links = self.load_links()?;

        let finalized = validate_offline(candidate)?;

        links.push(finalized.clone());
        self.save_links(&links)?;

        info!(id = %finalized.id, total = links.len(), "link saved without fetching");
        Ok(finalized)
    }

    /// Replace the stored link with the same id.  Returns `false` when no
    /// such link exists.
    pub fn replace_link(&self, updated: &Link) -> Result<bool> {
        let mut links = self.load_links()?;
        let Some(slot) = links.iter_mut().find(|l| l.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated.clone();
        self.save_links(&links)?;
        Ok(true)
    }

    /// Delete a link by id.  Returns `false` when no such link exists.
    pub fn remove_link(&self, id: LinkId) -> Result<bool> {
        let mut links = self.load_links()?;
        let before = links.len();
        links.retain(|l| l.id != id);
        if links.len() == before {
            return Ok(false);
        }
        self.save_links(&links)?;
        info!(%id, "link removed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use linksaver_core::error::LinkSaverError;

    /// Validator double: accepts URLs starting with "https://", filling in a
    /// fetched-looking title; rejects everything else.
    struct FakeValidator;

    impl LinkValidator for FakeValidator {
        async fn validate(&self, candidate: Link) -> Result<Link> {
            if !candidate.url.starts_with("https://") {
                return Err(LinkSaverError::InvalidUrl(candidate.url));
            }
            Ok(Link {
                title: candidate.title.or_else(|| Some("Fetched Title".into())),
                description: candidate.description.or_else(|| Some(String::new())),
                ..candidate
            })
        }
    }

    fn service() -> LinkService<FakeValidator> {
        LinkService::new(Box::new(MemoryStore::new()), FakeValidator)
    }

    #[test]
    fn load_links_on_fresh_store_is_empty() {
        let svc = service();
        assert!(svc.load_links().expect("load").is_empty());
    }

    #[tokio::test]
    async fn accepted_link_is_appended_as_validated() {
        let svc = service();
        svc.save_links(&[Link::new("https://first.com")]).expect("seed");

        let returned = svc
            .add_link(Link::new("https://a.com"))
            .await
            .expect("accepted");

        let links = svc.load_links().expect("load");
        assert_eq!(links.len(), 2);
        assert_eq!(links.last(), Some(&returned));
        // The validator's normalization is what got stored.
        assert_eq!(returned.title.as_deref(), Some("Fetched Title"));
    }

    #[tokio::test]
    async fn rejected_link_leaves_collection_unchanged() {
        let svc = service();
        svc.save_links(&[]).expect("seed empty");

        let err = svc
            .add_link(Link::new("not-a-url"))
            .await
            .expect_err("rejected");
        assert!(matches!(err, LinkSaverError::InvalidUrl(_)));

        assert!(svc.load_links().expect("load").is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips_typed() {
        let svc = service();
        let saved = vec![
            Link::new("https://a.com").title("A"),
            Link::new("https://b.com").title("B").complete(true),
        ];
        svc.save_links(&saved).expect("save");
        assert_eq!(svc.load_links().expect("load"), saved);
    }

    #[test]
    fn offline_add_skips_the_validator() {
        let svc = service();
        let returned = svc
            .add_link_offline(Link::new("https://a.com").title("Mine"))
            .expect("accepted");

        // FakeValidator would have filled "Fetched Title"; offline keeps ours
        // and floors the description.
        assert_eq!(returned.title.as_deref(), Some("Mine"));
        assert_eq!(returned.description.as_deref(), Some(""));
        assert_eq!(svc.load_links().expect("load"), vec![returned]);
    }

    #[test]
    fn offline_add_still_rejects_invalid_urls() {
        let svc = service();
        let err = svc
            .add_link_offline(Link::new("not-a-url"))
            .expect_err("rejected");
        assert!(matches!(err, LinkSaverError::InvalidUrl(_)));
        assert!(svc.load_links().expect("load").is_empty());
    }

    #[test]
    fn corrupt_blob_is_a_serialization_error() {
        let store = MemoryStore::new();
        store.save("{not an array").expect("raw save");
        let svc = LinkService::new(Box::new(store), FakeValidator);

        assert!(matches!(
            svc.load_links(),
            Err(LinkSaverError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn replace_and_remove_by_id() {
        let svc = service();
        let link = svc
            .add_link(Link::new("https://a.com"))
            .await
            .expect("accepted");

        let mut updated = link.clone();
        updated.complete = true;
        assert!(svc.replace_link(&updated).expect("replace"));
        assert!(svc.load_links().expect("load")[0].complete);

        assert!(svc.remove_link(link.id).expect("remove"));
        assert!(!svc.remove_link(link.id).expect("remove again"));
        assert!(svc.load_links().expect("load").is_empty());
    }
}
