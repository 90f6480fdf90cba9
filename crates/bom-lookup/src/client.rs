//! HTTP client for the part catalog service.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use bom_model::{LookupResult, PartRecord};

use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::response::parse_search_response;
use crate::template::{PART_NUMBER_PLACEHOLDER, UrlTemplate};

/// Resolves a part identifier to its best catalog match.
///
/// Implementations are shared across enrichment workers, so they must be
/// safe to call concurrently. Every call is independent: nothing is cached
/// between identifiers, and nothing is retried.
pub trait LookupClient: Send + Sync {
    /// Look up an identifier, keeping the reason when nothing was found.
    fn lookup_detailed(&self, identifier: &str) -> Result<PartRecord>;

    /// Look up an identifier. Every failure collapses to
    /// [`LookupResult::NotFound`].
    fn lookup(&self, identifier: &str) -> LookupResult {
        match self.lookup_detailed(identifier) {
            Ok(record) => LookupResult::Found(record),
            Err(_) => LookupResult::NotFound,
        }
    }
}

impl<T: LookupClient + ?Sized> LookupClient for &T {
    fn lookup_detailed(&self, identifier: &str) -> Result<PartRecord> {
        (**self).lookup_detailed(identifier)
    }
}

/// Blocking HTTP implementation issuing one GET per identifier.
pub struct HttpLookupClient {
    client: Client,
    template: UrlTemplate,
}

impl HttpLookupClient {
    pub fn new(template: impl Into<String>, config: LookupConfig) -> Result<Self> {
        let template = UrlTemplate::new(template);
        if !template.has_placeholder() {
            warn!(
                template = template.as_str(),
                placeholder = PART_NUMBER_PLACEHOLDER,
                "lookup URL has no placeholder, every row will query the same URL"
            );
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self { client, template })
    }
}

impl LookupClient for HttpLookupClient {
    fn lookup_detailed(&self, identifier: &str) -> Result<PartRecord> {
        let url = self.template.expand(identifier);
        debug!(url = %url, "catalog lookup");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        parse_search_response(&body)
    }
}
