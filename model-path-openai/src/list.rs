//! Conversion of native model listings into OpenAI model lists.

use chrono::{DateTime, Utc};
use model_path::ModelPath;
use serde::{Deserialize, Serialize};

use crate::config::ListConfig;

/// A model as reported by the native listing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedModel {
    /// Canonical reference, e.g. `registry.example.com/library/mistral:latest`
    pub name: String,
    /// Last modification time
    pub modified_at: DateTime<Utc>,
}

impl ListedModel {
    /// Creates a listing entry.
    #[must_use]
    pub fn new(name: impl Into<String>, modified_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            modified_at,
        }
    }
}

/// One entry of an OpenAI model list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCard {
    /// The model reference exactly as listed
    pub id: String,
    /// Always `"model"`
    pub object: &'static str,
    /// Unix timestamp in seconds
    pub created: i64,
    /// Namespace of the reference, or the configured fallback
    pub owned_by: String,
}

/// An OpenAI model list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelList {
    /// Always `"list"`
    pub object: &'static str,
    /// The listed models
    pub data: Vec<ModelCard>,
}

impl ModelCard {
    /// Builds a card from a listing entry.
    ///
    /// Returns `None` only when the name is malformed and
    /// [`ListConfig::skip_invalid`] is set.
    #[must_use]
    pub fn from_listed(model: &ListedModel, config: &ListConfig) -> Option<Self> {
        let path = ModelPath::parse(&model.name);
        if !path.is_valid() {
            tracing::debug!(name = %model.name, "listed model has a malformed reference");
            if config.skip_invalid {
                return None;
            }
        }

        let owned_by = match path.namespace() {
            "" => config.fallback_owner(),
            namespace => namespace,
        };

        Some(Self {
            id: model.name.clone(),
            object: "model",
            created: model.modified_at.timestamp(),
            owned_by: owned_by.to_string(),
        })
    }
}

impl ModelList {
    /// Builds a list response from listing entries, preserving their order.
    #[must_use]
    pub fn from_listed(models: &[ListedModel], config: &ListConfig) -> Self {
        let data: Vec<_> = models
            .iter()
            .filter_map(|m| ModelCard::from_listed(m, config))
            .collect();

        tracing::debug!(
            listed = models.len(),
            returned = data.len(),
            "converted model listing"
        );

        Self {
            object: "list",
            data,
        }
    }

    /// Returns true if no models are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn owner_is_namespace() {
        let m = ListedModel::new(
            "registry.example.com/library/mistral:latest",
            at(1_700_000_000),
        );
        let card = ModelCard::from_listed(&m, &ListConfig::default()).unwrap();
        assert_eq!(card.id, "registry.example.com/library/mistral:latest");
        assert_eq!(card.object, "model");
        assert_eq!(card.created, 1_700_000_000);
        assert_eq!(card.owned_by, "library");
    }

    #[test]
    fn two_segment_name_owner_is_first_segment() {
        let m = ListedModel::new("jdoe/mistral:7b", at(0));
        let card = ModelCard::from_listed(&m, &ListConfig::default()).unwrap();
        assert_eq!(card.owned_by, "jdoe");
    }

    #[test]
    fn missing_namespace_uses_fallback() {
        let m = ListedModel::new("mistral:latest", at(0));

        let card = ModelCard::from_listed(&m, &ListConfig::default()).unwrap();
        assert_eq!(card.owned_by, "");

        let config = ListConfig::new().with_default_owner("library");
        let card = ModelCard::from_listed(&m, &config).unwrap();
        assert_eq!(card.owned_by, "library");
    }

    #[test]
    fn malformed_names_kept_by_default() {
        let m = ListedModel::new("x/y/z/foo", at(0));
        let card = ModelCard::from_listed(&m, &ListConfig::default()).unwrap();
        assert_eq!(card.id, "x/y/z/foo");
        assert_eq!(card.owned_by, "");
    }

    #[test]
    fn malformed_names_skipped_when_configured() {
        let models = [
            ListedModel::new("library/mistral:latest", at(1)),
            ListedModel::new("mi tral", at(2)),
            ListedModel::new("llama2", at(3)),
        ];
        let config = ListConfig::new().with_skip_invalid(true);
        let list = ModelList::from_listed(&models, &config);

        let ids: Vec<_> = list.data.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["library/mistral:latest", "llama2"]);
    }

    #[test]
    fn empty_listing() {
        let list = ModelList::from_listed(&[], &ListConfig::default());
        assert_eq!(list.object, "list");
        assert!(list.is_empty());
    }
}
