//! Proxied entity chain header.
//!
//! Lets a trusted client act on behalf of an end user through one or more
//! intermediaries. Each identity is encoded by an [`EntityEncoder`] and the
//! results are concatenated, in order, into a single
//! `X-ProxiedEntitiesChain` header.

use crate::encoding::{EntityEncoder, StandardEntityEncoder};

use super::types::RequestConfigError;
use super::{Headers, RequestConfig};

pub const PROXIED_ENTITIES_CHAIN_HEADER: &str = "X-ProxiedEntitiesChain";

/// Produces the `X-ProxiedEntitiesChain` header for a fixed list of identities.
#[derive(Debug, Clone)]
pub struct ProxiedEntityRequestConfig<E = StandardEntityEncoder> {
    entities: Vec<String>,
    encoder: E,
}

impl ProxiedEntityRequestConfig<StandardEntityEncoder> {
    pub fn new<I, S>(entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_encoder(entities, StandardEntityEncoder)
    }

    /// Build from a list that may be missing altogether, e.g. one read
    /// from an external source. `None` is rejected; `Some(vec![])` means
    /// no proxied entities.
    pub fn try_from_optional(entities: Option<Vec<String>>) -> Result<Self, RequestConfigError> {
        entities.map(Self::new).ok_or_else(|| {
            RequestConfigError::InvalidArgument("proxied entities must be provided".to_string())
        })
    }
}

impl<E: EntityEncoder> ProxiedEntityRequestConfig<E> {
    pub fn with_encoder<I, S>(entities: I, encoder: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entities: entities.into_iter().map(Into::into).collect(),
            encoder,
        }
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    /// The encoded chain, or `None` when there are no identities.
    pub fn chain_value(&self) -> Result<Option<String>, RequestConfigError> {
        if self.entities.is_empty() {
            return Ok(None);
        }

        let mut chain = String::new();
        for entity in &self.entities {
            chain.push_str(&self.encoder.encode_entity(entity)?);
        }
        Ok(Some(chain))
    }
}

impl<E: EntityEncoder> RequestConfig for ProxiedEntityRequestConfig<E> {
    fn headers(&self) -> Result<Headers, RequestConfigError> {
        let mut headers = Headers::new();
        if let Some(chain) = self.chain_value()? {
            tracing::trace!(entities = self.entities.len(), "built proxied entities chain");
            headers.insert(PROXIED_ENTITIES_CHAIN_HEADER.to_string(), chain);
        }
        Ok(headers)
    }
}
