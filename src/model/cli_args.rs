use clap::{Parser, Subcommand};

/// Index maintenance for OpenSearch / Elasticsearch clusters.
#[derive(Debug, Parser)]
#[command(name = "opensearch_curator", version, about)]
pub struct CliArgs {
    /// Path of the toml configuration file
    #[arg(long, global = true, env = "ADMIN_CONFIG_PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum AdminCommand {
    /// List every index of the cluster
    List,
    /// Delete all indices matching a glob pattern
    Delete { pattern: String },
    /// Close all indices matching a glob pattern
    Close { pattern: String },
    /// Delete indices with a prefix created more than N days ago
    Cleanup {
        #[arg(long)]
        prefix: String,
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        days: i64,
    },
    /// Apply alias actions atomically, e.g. '[{"add":{"index":"a","alias":"b"}}]'
    Aliases {
        #[arg(long)]
        actions: String,
    },
    /// Roll an alias over, e.g. --conditions '{"max_age":"7d"}'
    Rollover {
        alias: String,
        #[arg(long)]
        conditions: String,
    },
    /// Copy documents from one index into another
    Reindex {
        source: String,
        dest: String,
        #[arg(long)]
        query: Option<String>,
    },
    /// Open a closed index
    Open { name: String },
    /// Update the settings of an index
    UpdateSettings {
        name: String,
        #[arg(long)]
        settings: String,
    },
    /// Shrink an index into a new one with fewer shards
    Shrink {
        source: String,
        target: String,
        #[arg(long)]
        settings: String,
    },
}
