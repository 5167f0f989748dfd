use crate::common::*;

use crate::model::configs::cluster_conn_config::*;

use crate::utils_modules::io_utils::*;

#[derive(Serialize, Deserialize, Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct AdminConfig {
    pub cluster: ClusterConnConfig,
}

impl AdminConfig {
    #[doc = "Function that reads the admin configuration from a toml file"]
    /// # Arguments
    /// * `config_path` - path of the toml file
    ///
    /// # Returns
    /// * anyhow::Result<Self>
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        info!("[AdminConfig::load] reading configuration from '{}'", config_path);

        let mut config: AdminConfig = read_toml_from_file::<AdminConfig>(config_path)
            .with_context(|| format!("[AdminConfig::load] failed to read '{}'", config_path))?;

        config.apply_env_overrides(
            std::env::var("ES_ID").ok().as_deref(),
            std::env::var("ES_PW").ok().as_deref(),
        );

        Ok(config)
    }

    #[doc = "Credentials from the environment take precedence over the file"]
    fn apply_env_overrides(&mut self, es_id: Option<&str>, es_pw: Option<&str>) {
        if let Some(id) = es_id.filter(|id| !id.is_empty()) {
            self.cluster.es_id = id.to_string();
        }

        if let Some(pw) = es_pw.filter(|pw| !pw.is_empty()) {
            self.cluster.es_pw = pw.to_string();
        }
    }
}
