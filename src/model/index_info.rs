use crate::common::*;

use crate::utils_modules::time_utils::*;

#[doc = "One row of `GET /_cat/indices?format=json` as the cluster sends it"]
/// Every column arrives as a string; closed indices report `null` counts.
#[derive(Debug, Deserialize, Default)]
pub struct CatIndexRecord {
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub index: String,
    #[serde(rename = "docs.count", default)]
    pub docs_count: Option<String>,
    #[serde(rename = "store.size", default)]
    pub store_size: Option<String>,
    #[serde(rename = "creation.date.string", default)]
    pub creation_date: Option<String>,
}

/// Snapshot of a single index, rebuilt on every listing call.
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct IndexInfo {
    name: String,
    health: String,
    status: String,
    docs_count: u64,
    store_size: String,
    create_time: DateTime<Utc>,
}

impl From<CatIndexRecord> for IndexInfo {
    fn from(record: CatIndexRecord) -> Self {
        /* Lenient coercion: bad counts become 0, bad timestamps become the zero time. */
        let docs_count: u64 = record
            .docs_count
            .as_deref()
            .and_then(|cnt| cnt.trim().parse::<u64>().ok())
            .unwrap_or(0);

        let create_time: DateTime<Utc> =
            parse_rfc3339_or_zero(record.creation_date.as_deref().unwrap_or(""));

        IndexInfo {
            name: record.index,
            health: record.health.unwrap_or_default(),
            status: record.status.unwrap_or_default(),
            docs_count,
            store_size: record.store_size.unwrap_or_default(),
            create_time,
        }
    }
}

#[doc = "Function that decodes a `_cat/indices` JSON body into index descriptors"]
/// # Arguments
/// * `body` - raw response text
///
/// # Returns
/// * anyhow::Result<Vec<IndexInfo>> - listing order is preserved
pub fn parse_cat_indices(body: &str) -> anyhow::Result<Vec<IndexInfo>> {
    let records: Vec<CatIndexRecord> = serde_json::from_str(body)?;
    Ok(records.into_iter().map(IndexInfo::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_doc_count_defaults_to_zero() {
        let body: &str = r#"[{"health":"green","status":"open","index":"logs-a","docs.count":"n/a","store.size":"1kb","creation.date.string":"2024-03-01T10:00:00.000Z"}]"#;

        let indices: Vec<IndexInfo> = parse_cat_indices(body).unwrap();

        assert_eq!(indices.len(), 1);
        assert_eq!(indices[0].docs_count, 0);
        assert_eq!(indices[0].name, "logs-a");
        assert_eq!(
            indices[0].create_time,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn closed_index_with_null_columns_is_accepted() {
        let body: &str = r#"[{"health":null,"status":"close","index":"old","docs.count":null,"store.size":null}]"#;

        let indices: Vec<IndexInfo> = parse_cat_indices(body).unwrap();

        assert_eq!(indices[0].status, "close");
        assert_eq!(indices[0].health, "");
        assert_eq!(indices[0].docs_count, 0);
        assert_eq!(indices[0].create_time, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn empty_array_is_an_empty_listing() {
        assert!(parse_cat_indices("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_cat_indices("{\"error\":").is_err());
    }

    #[test]
    fn listing_order_is_kept() {
        let body: &str = r#"[{"index":"b","docs.count":"12"},{"index":"a","docs.count":"3"}]"#;
        let names: Vec<String> = parse_cat_indices(body)
            .unwrap()
            .into_iter()
            .map(|idx| idx.name)
            .collect();
        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
    }
}
