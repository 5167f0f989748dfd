use crate::common::*;

use crate::traits::service::index_admin_service_trait::*;

use crate::model::{alias_action::*, cli_args::*, index_info::*, settings::*};

use crate::utils_modules::{io_utils::*, time_utils::*};

#[derive(Debug, new)]
pub struct MainController<S: IndexAdminService> {
    index_admin_service: Arc<S>,
}

impl<S> MainController<S>
where
    S: IndexAdminService + Send + Sync + 'static,
{
    #[doc = "Function that runs one administrative command against the cluster"]
    /// # Arguments
    /// * `cancel`  - cancelled on Ctrl+C
    /// * `command` - parsed command line
    ///
    /// # Returns
    /// * anyhow::Result<()>
    pub async fn main_task(
        &self,
        cancel: &CancellationToken,
        command: AdminCommand,
    ) -> anyhow::Result<()> {
        let service: &S = self.index_admin_service.as_ref();

        match command {
            AdminCommand::List => {
                let indices: Vec<IndexInfo> = service.list_indices(cancel).await?;
                println!("{}", format_index_table(&indices));
            }
            AdminCommand::Delete { pattern } => {
                service.delete_indices(cancel, &pattern).await?;
                println!("deleted indices matching '{}'", pattern);
            }
            AdminCommand::Close { pattern } => {
                service.close_indices(cancel, &pattern).await?;
                println!("closed indices matching '{}'", pattern);
            }
            AdminCommand::Cleanup { prefix, days } => {
                service.cleanup_by_age(cancel, &prefix, days).await?;
                println!("cleanup of '{}*' older than {} day(s) finished", prefix, days);
            }
            AdminCommand::Aliases { actions } => {
                let actions: Vec<AliasAction> = serde_json::from_str(&actions)
                    .map_err(|e| anyhow!("[MainController::main_task] invalid alias actions: {}", e))?;
                service.manage_aliases(cancel, &actions).await?;
                println!("applied {} alias action(s)", actions.len());
            }
            AdminCommand::Rollover { alias, conditions } => {
                let conditions: Settings = parse_json_object(&conditions, "conditions")?;
                service.rollover(cancel, &alias, &conditions).await?;
                println!("rolled over '{}'", alias);
            }
            AdminCommand::Reindex {
                source,
                dest,
                query,
            } => {
                let query: Option<Settings> = query
                    .as_deref()
                    .map(|raw| parse_json_object(raw, "query"))
                    .transpose()?;
                service
                    .reindex(cancel, &source, &dest, query.as_ref())
                    .await?;
                println!("reindexed '{}' into '{}'", source, dest);
            }
            AdminCommand::Open { name } => {
                service.open_index(cancel, &name).await?;
                println!("opened '{}'", name);
            }
            AdminCommand::UpdateSettings { name, settings } => {
                let settings: Settings = parse_json_object(&settings, "settings")?;
                service.update_index_settings(cancel, &name, &settings).await?;
                println!("updated settings of '{}'", name);
            }
            AdminCommand::Shrink {
                source,
                target,
                settings,
            } => {
                let settings: Settings = parse_json_object(&settings, "settings")?;
                service
                    .shrink_index(cancel, &source, &target, &settings)
                    .await?;
                println!("shrunk '{}' into '{}'", source, target);
            }
        }

        Ok(())
    }
}

#[doc = "Function that renders an index listing as an aligned text table"]
pub fn format_index_table(indices: &[IndexInfo]) -> String {
    let name_width: usize = indices
        .iter()
        .map(|idx| idx.name().len())
        .max()
        .unwrap_or(0)
        .max("index".len());

    let mut lines: Vec<String> = Vec::with_capacity(indices.len() + 1);
    lines.push(format!(
        "{:<name_width$}  {:<7}  {:<6}  {:>12}  {:>10}  {}",
        "index", "health", "status", "docs.count", "store.size", "created"
    ));

    for idx in indices {
        lines.push(format!(
            "{:<name_width$}  {:<7}  {:<6}  {:>12}  {:>10}  {}",
            idx.name(),
            idx.health(),
            idx.status(),
            idx.docs_count(),
            idx.store_size(),
            convert_date_to_str_human(*idx.create_time())
        ));
    }

    lines.join("\n")
}
