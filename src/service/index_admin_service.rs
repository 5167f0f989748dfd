use crate::common::*;

use crate::traits::{
    repository::es_repository_trait::*, service::index_admin_service_trait::*,
};

use crate::enums::{admin_error::*, request_method::*};

use crate::model::{alias_action::*, es_response::*, index_info::*, settings::*};

use crate::utils_modules::{pattern_utils::*, time_utils::*};

/// Columns requested from `_cat/indices`; the creation date is not part of the default set.
const CAT_INDICES_COLUMNS: &str = "health,status,index,docs.count,store.size,creation.date.string";

#[derive(Clone, Debug, new)]
pub struct IndexAdminServiceImpl<R: EsRepository> {
    elastic_obj: Arc<R>,
}

impl<R> IndexAdminServiceImpl<R>
where
    R: EsRepository + Sync + Send,
{
    #[doc = "Function that sends a request and turns any status >= 400 into an `AdminError::Api`"]
    /// # Arguments
    /// * `cancel`      - caller's cancellation signal
    /// * `method`      - HTTP method
    /// * `path`        - request path
    /// * `body`        - optional JSON body
    /// * `err_context` - operation-identifying prefix of the failure message
    ///
    /// # Returns
    /// * anyhow::Result<EsResponse>
    async fn execute(
        &self,
        cancel: &CancellationToken,
        method: RequestMethod,
        path: &str,
        body: Option<Value>,
        err_context: &str,
    ) -> anyhow::Result<EsResponse> {
        let response: EsResponse = self
            .elastic_obj
            .send_request(cancel, method, path, &[], body)
            .await?;

        if response.is_error() {
            let status: u16 = *response.status();
            return Err(AdminError::api(err_context, status, response.into_body()).into());
        }

        Ok(response)
    }

    #[doc = "Function that lists the cluster and keeps the names matching `pattern`"]
    /// Fails with `AdminError::NoMatch` when nothing matches, before any mutating request.
    ///
    /// # Arguments
    /// * `cancel`  - caller's cancellation signal
    /// * `pattern` - shell-glob pattern
    ///
    /// # Returns
    /// * anyhow::Result<Vec<String>> - matched names in listing order
    async fn matching_index_names(
        &self,
        cancel: &CancellationToken,
        pattern: &str,
    ) -> anyhow::Result<Vec<String>> {
        let indices: Vec<IndexInfo> = self.list_indices(cancel).await?;

        let matched: Vec<String> =
            filter_by_glob(pattern, indices.iter().map(|idx| idx.name().as_str()))?;

        if matched.is_empty() {
            return Err(AdminError::NoMatch {
                pattern: pattern.to_string(),
            }
            .into());
        }

        Ok(matched)
    }
}

#[async_trait]
impl<R> IndexAdminService for IndexAdminServiceImpl<R>
where
    R: EsRepository + Sync + Send,
{
    #[doc = "Function that returns every index of the cluster"]
    /// # Arguments
    /// * `cancel` - caller's cancellation signal
    ///
    /// # Returns
    /// * anyhow::Result<Vec<IndexInfo>>
    async fn list_indices(&self, cancel: &CancellationToken) -> anyhow::Result<Vec<IndexInfo>> {
        let response: EsResponse = self
            .elastic_obj
            .send_request(
                cancel,
                RequestMethod::Get,
                "/_cat/indices",
                &[("format", "json"), ("h", CAT_INDICES_COLUMNS)],
                None,
            )
            .await?;

        if response.is_error() {
            let status: u16 = *response.status();
            return Err(
                AdminError::api("failed to list indices", status, response.into_body()).into(),
            );
        }

        parse_cat_indices(response.body())
    }

    #[doc = "Function that deletes every index matching a glob pattern in one bulk request"]
    /// # Arguments
    /// * `cancel`  - caller's cancellation signal
    /// * `pattern` - shell-glob pattern
    ///
    /// # Returns
    /// * anyhow::Result<()>
    async fn delete_indices(
        &self,
        cancel: &CancellationToken,
        pattern: &str,
    ) -> anyhow::Result<()> {
        let to_delete: Vec<String> = self.matching_index_names(cancel, pattern).await?;

        info!(
            "[IndexAdminServiceImpl->delete_indices] pattern '{}' -> deleting {:?}",
            pattern, to_delete
        );

        let path: String = format!("/{}", to_delete.join(","));
        self.execute(
            cancel,
            RequestMethod::Delete,
            &path,
            None,
            "failed to delete indices",
        )
        .await?;

        Ok(())
    }

    #[doc = "Function that closes every index matching a glob pattern in one bulk request"]
    async fn close_indices(&self, cancel: &CancellationToken, pattern: &str) -> anyhow::Result<()> {
        let to_close: Vec<String> = self.matching_index_names(cancel, pattern).await?;

        info!(
            "[IndexAdminServiceImpl->close_indices] pattern '{}' -> closing {:?}",
            pattern, to_close
        );

        let path: String = format!("/{}/_close", to_close.join(","));
        self.execute(
            cancel,
            RequestMethod::Post,
            &path,
            None,
            "failed to close indices",
        )
        .await?;

        Ok(())
    }

    #[doc = "Function that deletes indices with the given prefix created more than `days` days ago"]
    /// Nothing to delete is a success, unlike the pattern-based operations.
    ///
    /// # Arguments
    /// * `cancel` - caller's cancellation signal
    /// * `prefix` - index name prefix, e.g. `logs-`
    /// * `days`   - retention window
    ///
    /// # Returns
    /// * anyhow::Result<()>
    async fn cleanup_by_age(
        &self,
        cancel: &CancellationToken,
        prefix: &str,
        days: i64,
    ) -> anyhow::Result<()> {
        /* The cutoff is fixed before listing so a slow listing cannot shift it. */
        let cutoff: DateTime<Utc> = cutoff_before_days(Utc::now(), days)?;

        let indices: Vec<IndexInfo> = self.list_indices(cancel).await?;

        let to_delete: Vec<String> = indices
            .into_iter()
            .filter(|idx| idx.name().starts_with(prefix) && *idx.create_time() < cutoff)
            .map(|idx| idx.name().to_string())
            .collect();

        if to_delete.is_empty() {
            info!(
                "[IndexAdminServiceImpl->cleanup_by_age] no '{}' index older than {}",
                prefix,
                convert_date_to_str_human(cutoff)
            );
            return Ok(());
        }

        info!(
            "[IndexAdminServiceImpl->cleanup_by_age] deleting {} index(es) older than {}: {:?}",
            to_delete.len(),
            convert_date_to_str_human(cutoff),
            to_delete
        );

        let path: String = format!("/{}", to_delete.join(","));
        self.execute(
            cancel,
            RequestMethod::Delete,
            &path,
            None,
            "failed to delete old indices",
        )
        .await?;

        Ok(())
    }

    #[doc = "Function that applies alias actions as one atomic batch, in the given order"]
    async fn manage_aliases(
        &self,
        cancel: &CancellationToken,
        actions: &[AliasAction],
    ) -> anyhow::Result<()> {
        let body: Value = json!({ "actions": actions });

        self.execute(
            cancel,
            RequestMethod::Post,
            "/_aliases",
            Some(body),
            "failed to manage aliases",
        )
        .await?;

        Ok(())
    }

    #[doc = "Function that rolls an alias over; conditions are forwarded untouched"]
    async fn rollover(
        &self,
        cancel: &CancellationToken,
        alias: &str,
        conditions: &Settings,
    ) -> anyhow::Result<()> {
        let body: Value = json!({ "conditions": conditions });
        let path: String = format!("/{}/_rollover", alias);

        self.execute(
            cancel,
            RequestMethod::Post,
            &path,
            Some(body),
            "failed to rollover index",
        )
        .await?;

        Ok(())
    }

    #[doc = "Function that copies documents from `source` into `dest`, optionally filtered"]
    /// Waits for the HTTP response only; completion of the cluster-side task is not polled.
    async fn reindex(
        &self,
        cancel: &CancellationToken,
        source: &str,
        dest: &str,
        query: Option<&Settings>,
    ) -> anyhow::Result<()> {
        let mut source_body: Settings = Settings::new();
        source_body.insert("index".to_string(), Value::from(source));

        if let Some(query) = query {
            source_body.insert("query".to_string(), Value::Object(query.clone()));
        }

        let body: Value = json!({
            "source": source_body,
            "dest": { "index": dest }
        });

        self.execute(
            cancel,
            RequestMethod::Post,
            "/_reindex",
            Some(body),
            "failed to reindex",
        )
        .await?;

        Ok(())
    }

    async fn open_index(&self, cancel: &CancellationToken, name: &str) -> anyhow::Result<()> {
        let path: String = format!("/{}/_open", name);

        self.execute(cancel, RequestMethod::Post, &path, None, "failed to open index")
            .await?;

        Ok(())
    }

    async fn update_index_settings(
        &self,
        cancel: &CancellationToken,
        name: &str,
        settings: &Settings,
    ) -> anyhow::Result<()> {
        let body: Value = json!({ "settings": settings });
        let path: String = format!("/{}/_settings", name);

        self.execute(
            cancel,
            RequestMethod::Put,
            &path,
            Some(body),
            "failed to update index settings",
        )
        .await?;

        Ok(())
    }

    #[doc = "Function that shrinks `source` into `target`"]
    /// Steps: close source, shrink, reopen source, open target, restore replicas
    /// and lift the write block on target. A failing step returns at once and
    /// nothing done before it is undone; e.g. a failed shrink leaves the source closed.
    ///
    /// # Arguments
    /// * `cancel`   - caller's cancellation signal
    /// * `source`   - index to shrink
    /// * `target`   - index to create
    /// * `settings` - target settings; `number_of_shards` and `number_of_replicas` are read from it
    ///
    /// # Returns
    /// * anyhow::Result<()>
    async fn shrink_index(
        &self,
        cancel: &CancellationToken,
        source: &str,
        target: &str,
        settings: &Settings,
    ) -> anyhow::Result<()> {
        info!(
            "[IndexAdminServiceImpl->shrink_index] '{}' -> '{}' start",
            source, target
        );

        /* 1. Close the source index */
        if let Err(e) = self.close_indices(cancel, source).await {
            error!(
                "[IndexAdminServiceImpl->shrink_index] closing '{}' failed: {:?}",
                source, e
            );
            return Err(e.context("failed to close source index"));
        }

        /* 2. Shrink preconditions override whatever the caller passed for the same keys */
        let mut shrink_preconditions: Settings = Settings::new();
        shrink_preconditions.insert("index.blocks.write".to_string(), Value::Bool(true));
        shrink_preconditions.insert("index.number_of_replicas".to_string(), json!(0));
        shrink_preconditions.insert(
            "index.number_of_shards".to_string(),
            setting_or_null(settings, "number_of_shards"),
        );

        let shrink_body: Value = json!({
            "settings": merge_settings(settings, &shrink_preconditions)
        });

        /* 3. Shrink. On failure the source stays closed. */
        let shrink_path: String = format!("/{}/_shrink/{}", source, target);

        let response: EsResponse = self
            .elastic_obj
            .send_request(cancel, RequestMethod::Post, &shrink_path, &[], Some(shrink_body))
            .await
            .context("failed to execute shrink request")?;

        if response.is_error() {
            error!(
                "[IndexAdminServiceImpl->shrink_index] shrink '{}' -> '{}' rejected, '{}' is left closed",
                source, target, source
            );
            let status: u16 = *response.status();
            let err_context: String = format!("shrink failed with status {}", status);
            return Err(AdminError::api(&err_context, status, response.into_body()).into());
        }

        /* 4. Reopen the source index */
        if let Err(e) = self.open_index(cancel, source).await {
            error!(
                "[IndexAdminServiceImpl->shrink_index] '{}' may already exist but '{}' is still closed: {:?}",
                target, source, e
            );
            return Err(e.context("failed to reopen source index"));
        }

        /* 5. Open the new index */
        if let Err(e) = self.open_index(cancel, target).await {
            error!(
                "[IndexAdminServiceImpl->shrink_index] opening '{}' failed: {:?}",
                target, e
            );
            return Err(e.context("failed to open target index"));
        }

        /* 6. Restore the requested replicas and lift the write block */
        let mut final_settings: Settings = Settings::new();
        final_settings.insert(
            "index.number_of_replicas".to_string(),
            setting_or_null(settings, "number_of_replicas"),
        );
        final_settings.insert("index.blocks.write".to_string(), Value::Null);

        if let Err(e) = self
            .update_index_settings(cancel, target, &final_settings)
            .await
        {
            error!(
                "[IndexAdminServiceImpl->shrink_index] '{}' is open but still write-blocked: {:?}",
                target, e
            );
            return Err(e.context("failed to apply final settings"));
        }

        info!(
            "[IndexAdminServiceImpl->shrink_index] '{}' -> '{}' done",
            source, target
        );

        Ok(())
    }
}
