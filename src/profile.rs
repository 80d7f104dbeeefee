use crate::{models, Account, Client, Media};
use eyre::{eyre, Result, WrapErr};
use rand::seq::SliceRandom;
use rand::Rng;

/// An account's public profile: the first page of its timeline media.
#[derive(Debug)]
pub struct Profile {
    /// Account the profile belongs to.
    account: Account,
    /// Timeline media, in document order.
    media: Vec<Media>,
}

impl Profile {
    /// Fetches and decodes the page document for `account`.
    pub fn new(client: &Client, account: &Account) -> Result<Self> {
        let document = client
            .get_json::<models::profile::PageDocument>(&account.page_url())
            .with_context(|| format!("get page document for {account}"))?;

        Ok(Self::from_document(account.clone(), document))
    }

    /// Decodes an already-fetched page document payload.
    pub fn from_page_json(account: Account, payload: &str) -> Result<Self> {
        let document =
            serde_json::from_str::<models::profile::PageDocument>(payload)
                .context("malformed page document")?;

        Ok(Self::from_document(account, document))
    }

    fn from_document(
        account: Account,
        document: models::profile::PageDocument,
    ) -> Self {
        let media = document
            .graphql
            .user
            .edge_owner_to_timeline_media
            .edges
            .into_iter()
            .map(Media::from)
            .collect();

        Self { account, media }
    }

    /// Returns the account of this profile.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Returns the number of timeline media.
    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    /// Returns the timeline media.
    pub fn media(
        &self,
    ) -> impl Iterator<Item = &Media> + ExactSizeIterator + '_ {
        self.media.iter()
    }

    /// Picks one media uniformly at random.
    ///
    /// The generator is supplied by the caller, so tests can be
    /// deterministic. An empty timeline is an error, not a panic.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Result<&Media> {
        self.media
            .choose(rng)
            .ok_or_else(|| eyre!("no media available for {}", self.account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn account() -> Account {
        "example".parse().expect("valid handle")
    }

    fn page_json(urls: &[&str]) -> String {
        let edges = urls
            .iter()
            .map(|url| format!(r#"{{"node":{{"display_url":"{url}"}}}}"#))
            .collect::<Vec<_>>()
            .join(",");

        format!(
            r#"{{"graphql":{{"user":{{"edge_owner_to_timeline_media":{{"edges":[{edges}]}}}}}}}}"#
        )
    }

    #[test]
    fn decodes_timeline_media() {
        let payload = page_json(&["https://img/a.jpg", "https://img/b.jpg"]);

        let profile = Profile::from_page_json(account(), payload.as_str())
            .expect("valid document");

        assert_eq!(profile.account().name(), "example");
        assert_eq!(profile.media_count(), 2);
        let urls = profile
            .media()
            .map(|media| media.display_url().as_str())
            .collect::<Vec<_>>();
        assert_eq!(urls, vec!["https://img/a.jpg", "https://img/b.jpg"]);
    }

    #[test]
    fn missing_path_is_malformed() {
        let payload = r#"{"graphql":{"user":{}}}"#;

        let res = Profile::from_page_json(account(), payload);

        let err = res.expect_err("malformed document must fail");
        assert!(format!("{err:#}").contains("malformed page document"));
    }

    #[test]
    fn missing_display_url_is_malformed() {
        let payload = r#"{"graphql":{"user":{"edge_owner_to_timeline_media":{"edges":[{"node":{"shortcode":"abc"}}]}}}}"#;

        let res = Profile::from_page_json(account(), payload);

        assert!(res.is_err());
    }

    #[test]
    fn pick_random_on_empty_timeline_fails() {
        let profile = Profile::from_page_json(account(), &page_json(&[]))
            .expect("valid document");
        let mut rng = StdRng::seed_from_u64(0);

        let res = profile.pick_random(&mut rng);

        let err = res.expect_err("empty timeline must fail");
        assert!(format!("{err:#}").contains("no media available"));
    }

    #[test]
    fn pick_random_single_entry() {
        let profile =
            Profile::from_page_json(account(), &page_json(&["https://img/a.jpg"]))
                .expect("valid document");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let media = profile.pick_random(&mut rng).expect("one media");
            assert_eq!(media.display_url().as_str(), "https://img/a.jpg");
        }
    }

    #[test]
    fn pick_random_reaches_every_entry() {
        let payload = page_json(&[
            "https://img/a.jpg",
            "https://img/b.jpg",
            "https://img/c.jpg",
        ]);
        let profile = Profile::from_page_json(account(), &payload)
            .expect("valid document");
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let media = profile.pick_random(&mut rng).expect("some media");
            seen.insert(media.display_url().as_str().to_owned());
        }

        // Uniform selection: every entry shows up, nothing else does.
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn pick_random_never_invents_values() {
        let payload = page_json(&["https://img/a.jpg", "https://img/b.jpg"]);
        let profile = Profile::from_page_json(account(), &payload)
            .expect("valid document");
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            let url = profile
                .pick_random(&mut rng)
                .expect("some media")
                .display_url()
                .as_str()
                .to_owned();
            assert!(
                url == "https://img/a.jpg" || url == "https://img/b.jpg",
                "unexpected URL: {url}"
            );
        }
    }
}
