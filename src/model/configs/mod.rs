pub mod cluster_conn_config;
pub mod config;
