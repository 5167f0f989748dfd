use crate::common::*;

#[doc = "env 헬퍼함수 정의"]
fn get_env_or_default(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}

#[doc = "Function to globally initialize the 'ADMIN_CONFIG_PATH' variable"]
pub static ADMIN_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("ADMIN_CONFIG_PATH", "./config/admin_config.toml"));

#[doc = "Function to globally initialize the 'LOG_DIR' variable"]
pub static LOG_DIR: once_lazy<String> = once_lazy::new(|| get_env_or_default("LOG_DIR", "logs"));
