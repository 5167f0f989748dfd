use crate::common::*;

use crate::model::{alias_action::*, index_info::*, settings::*};

#[async_trait]
pub trait IndexAdminService {
    async fn list_indices(&self, cancel: &CancellationToken) -> anyhow::Result<Vec<IndexInfo>>;
    async fn delete_indices(&self, cancel: &CancellationToken, pattern: &str)
        -> anyhow::Result<()>;
    async fn close_indices(&self, cancel: &CancellationToken, pattern: &str) -> anyhow::Result<()>;
    async fn cleanup_by_age(
        &self,
        cancel: &CancellationToken,
        prefix: &str,
        days: i64,
    ) -> anyhow::Result<()>;
    async fn manage_aliases(
        &self,
        cancel: &CancellationToken,
        actions: &[AliasAction],
    ) -> anyhow::Result<()>;
    async fn rollover(
        &self,
        cancel: &CancellationToken,
        alias: &str,
        conditions: &Settings,
    ) -> anyhow::Result<()>;
    async fn reindex(
        &self,
        cancel: &CancellationToken,
        source: &str,
        dest: &str,
        query: Option<&Settings>,
    ) -> anyhow::Result<()>;
    async fn open_index(&self, cancel: &CancellationToken, name: &str) -> anyhow::Result<()>;
    async fn update_index_settings(
        &self,
        cancel: &CancellationToken,
        name: &str,
        settings: &Settings,
    ) -> anyhow::Result<()>;
    async fn shrink_index(
        &self,
        cancel: &CancellationToken,
        source: &str,
        target: &str,
        settings: &Settings,
    ) -> anyhow::Result<()>;
}
