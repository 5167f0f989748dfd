use crate::common::*;

/// A single entry of the `actions` array sent to `POST /_aliases`.
///
/// The payload is forwarded verbatim so cluster-specific keys such as
/// `routing`, `filter` or `is_write_index` pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasAction {
    Add(Map<String, Value>),
    Remove(Map<String, Value>),
}

impl AliasAction {
    #[doc = "Shorthand for the common `{\"add\": {\"index\": .., \"alias\": ..}}` form"]
    pub fn add(index: &str, alias: &str) -> Self {
        AliasAction::Add(Self::index_alias_pair(index, alias))
    }

    #[doc = "Shorthand for the common `{\"remove\": {\"index\": .., \"alias\": ..}}` form"]
    pub fn remove(index: &str, alias: &str) -> Self {
        AliasAction::Remove(Self::index_alias_pair(index, alias))
    }

    fn index_alias_pair(index: &str, alias: &str) -> Map<String, Value> {
        let mut pair: Map<String, Value> = Map::new();
        pair.insert("index".to_string(), Value::from(index));
        pair.insert("alias".to_string(), Value::from(alias));
        pair
    }
}
