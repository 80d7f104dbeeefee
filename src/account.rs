use eyre::{ensure, Result};
use std::{fmt, str::FromStr};
use url::Url;

/// An Instagram account handle.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Account(String);

impl Account {
    /// Returns the handle as text.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the URL of the account's page document.
    ///
    /// The handle is embedded verbatim as a path segment.
    pub fn page_url(&self) -> Url {
        Url::parse(&format!("https://www.instagram.com/{}/?__a=1", self.0))
            .expect("valid account page URL")
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl FromStr for Account {
    type Err = eyre::Report;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // No other validation: semantic validity is the network's concern.
        ensure!(!value.is_empty(), "account handle must not be empty");

        Ok(Self(value.to_owned()))
    }
}
