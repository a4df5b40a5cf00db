use crate::model::ConfigError;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Process-wide settings, loaded once in `main` and handed to constructors.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub mongodb_collection: String,
    /// Upper bound on how long a request waits for an unreachable database.
    pub mongodb_server_selection_timeout_ms: u64,
    pub api_host: String,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    pub seed_count: usize,
    pub frontend_dir: String,
    pub frontend_port: u16,
    pub mongo_data_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: "mongodb://127.0.0.1:27017/dacdb".into(),
            mongodb_db: "dacdb".into(),
            mongodb_collection: "usuarios".into(),
            mongodb_server_selection_timeout_ms: 5000,
            api_host: "0.0.0.0".into(),
            api_port: default_api_port(),
            seed_count: 60,
            frontend_dir: ".".into(),
            frontend_port: 3000,
            mongo_data_dir: ".mongo-data".into(),
        }
    }
}

fn default_api_port() -> u16 {
    5000
}

/// Layers built-in defaults, the optional JSON file at `path` and finally
/// environment variables (`MONGODB_URI`, `API_PORT`, ...).
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    load_config_from(path, config::Environment::default())
}

/// Same layering as [`load_config`] with the environment layer supplied by
/// the caller. `PY_BACKEND_PORT` is read as the API port when no layer sets
/// `api_port`.
pub fn load_config_from(path: &Path, env: config::Environment) -> Result<AppConfig, ConfigError> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(
            config::File::from(path)
                .format(config::FileFormat::Json)
                .required(false),
        )
        .add_source(env.try_parsing(true))
        .build()?;

    let mut cfg: AppConfig = settings.clone().try_deserialize()?;
    if settings.get::<u16>("api_port").is_err() {
        if let Ok(port) = settings.get::<u16>("py_backend_port") {
            cfg.api_port = port;
        }
    }
    Ok(cfg)
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    let d = AppConfig::default();
    builder
        .set_default("mongodb_uri", d.mongodb_uri)?
        .set_default("mongodb_db", d.mongodb_db)?
        .set_default("mongodb_collection", d.mongodb_collection)?
        .set_default(
            "mongodb_server_selection_timeout_ms",
            d.mongodb_server_selection_timeout_ms as i64,
        )?
        .set_default("api_host", d.api_host)?
        .set_default("seed_count", d.seed_count as i64)?
        .set_default("frontend_dir", d.frontend_dir)?
        .set_default("frontend_port", d.frontend_port as i64)?
        .set_default("mongo_data_dir", d.mongo_data_dir)
}
