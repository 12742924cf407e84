use std::sync::LazyLock;

use derive_from_env::FromEnv;

#[derive(FromEnv)]
#[from_env(prefix = "SHLOG")]
#[allow(non_snake_case)]
pub struct ShlogConfig {
    #[from_env(default = "log.txt")]
    pub FILE: String,
    #[from_env(default = "INFO")]
    pub LEVEL: String,
}

pub static SHLOG_CONFIG: LazyLock<ShlogConfig> = LazyLock::new(|| ShlogConfig::from_env().unwrap());
