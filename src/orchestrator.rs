// Local stack: mongod bootstrap, seed, frontend process and the API
use crate::config::AppConfig;
use crate::model::OrchestratorError;
use crate::seeder::{log_report, run_seed};
use crate::server::{self, SharedStore};
use crate::storage::MongoStorage;
use mongodb::options::{ClientOptions, ServerAddress};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tokio::time::{Duration, sleep, timeout};
use tracing::{error, info, warn};

const DEFAULT_MONGO_HOST: &str = "127.0.0.1";
const DEFAULT_MONGO_PORT: u16 = 27017;
const STARTUP_ATTEMPTS: u32 = 20;
const CONNECT_TIMEOUT: Duration = Duration::from_millis(1500);
const STOP_TIMEOUT: Duration = Duration::from_secs(10);

/// Host and port of the first server in a `mongodb://` URI. SRV URIs and
/// anything the driver cannot parse fall back to the local default.
pub async fn mongo_endpoint(uri: &str) -> (String, u16) {
    let default = || (DEFAULT_MONGO_HOST.to_string(), DEFAULT_MONGO_PORT);

    // SRV records resolve to remote clusters; parsing them would hit DNS.
    if uri.starts_with("mongodb+srv://") {
        return default();
    }

    let options = match ClientOptions::parse(uri).await {
        Ok(options) => options,
        Err(e) => {
            warn!("Could not parse MongoDB URI, assuming local default: {}", e);
            return default();
        }
    };

    match options.hosts.into_iter().next() {
        Some(ServerAddress::Tcp { host, port }) => (host, port.unwrap_or(DEFAULT_MONGO_PORT)),
        _ => default(),
    }
}

pub async fn is_port_open(host: &str, port: u16) -> bool {
    matches!(
        timeout(CONNECT_TIMEOUT, TcpStream::connect((host, port))).await,
        Ok(Ok(_))
    )
}

/// Makes sure a MongoDB server answers on the configured endpoint. Returns
/// the `mongod` child when this call had to start one.
pub async fn start_local_mongodb(config: &AppConfig) -> Result<Option<Child>, OrchestratorError> {
    let (host, port) = mongo_endpoint(&config.mongodb_uri).await;

    if is_port_open(&host, port).await {
        info!("MongoDB already running on {}:{}", host, port);
        return Ok(None);
    }

    let data_dir = Path::new(&config.mongo_data_dir);
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join("mongod.log");
    let mut log = OpenOptions::new().create(true).append(true).open(&log_path)?;
    writeln!(log, "\n=== local mongod start ===")?;

    info!("Starting local mongod on {}:{}...", host, port);
    let mut command = Command::new("mongod");
    command
        .arg("--dbpath")
        .arg(data_dir)
        .args(["--bind_ip", host.as_str(), "--port", &port.to_string()]);
    if host.contains(':') {
        command.arg("--ipv6");
    }
    let spawned = command
        .stdout(Stdio::from(log.try_clone()?))
        .stderr(Stdio::from(log))
        .kill_on_drop(true)
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(OrchestratorError::MongodNotFound);
        }
        Err(e) => return Err(e.into()),
    };

    for _ in 0..STARTUP_ATTEMPTS {
        if child.try_wait()?.is_some() {
            break;
        }
        if is_port_open(&host, port).await {
            info!("Local mongod is up");
            return Ok(Some(child));
        }
        sleep(Duration::from_secs(1)).await;
    }

    stop_child(&mut child, "mongod").await;
    Err(OrchestratorError::MongodStartup {
        host,
        port,
        log: log_path.display().to_string(),
    })
}

/// Installs and starts the web frontend when `frontend_dir` holds a Node
/// project. Returns `None` when there is nothing to start.
pub async fn start_frontend(config: &AppConfig) -> Result<Option<Child>, OrchestratorError> {
    let dir = Path::new(&config.frontend_dir);
    if !dir.join("package.json").exists() {
        warn!("No package.json in {}, skipping frontend", dir.display());
        return Ok(None);
    }

    info!("Installing frontend dependencies...");
    let status = Command::new("npm").arg("install").current_dir(dir).status().await?;
    if !status.success() {
        return Err(OrchestratorError::Command {
            command: "npm install".into(),
            status,
        });
    }

    info!("Starting frontend on port {}...", config.frontend_port);
    let child = Command::new("npm")
        .arg("start")
        .current_dir(dir)
        .env("PORT", config.frontend_port.to_string())
        .kill_on_drop(true)
        .spawn()?;
    info!("Dashboard at http://localhost:{}", config.frontend_port);
    Ok(Some(child))
}

async fn stop_child(child: &mut Child, name: &str) {
    if let Err(e) = child.start_kill() {
        warn!("Failed to signal {}: {}", name, e);
        return;
    }
    match timeout(STOP_TIMEOUT, child.wait()).await {
        Ok(Ok(status)) => info!("{} stopped ({})", name, status),
        Ok(Err(e)) => warn!("Failed to reap {}: {}", name, e),
        Err(_) => warn!("{} did not exit within {:?}", name, STOP_TIMEOUT),
    }
}

async fn stop_optional(child: Option<Child>, name: &str) {
    if let Some(mut child) = child {
        stop_child(&mut child, name).await;
    }
}

/// Brings up database, seed data, frontend and API; tears down what it
/// started once the API stops.
pub async fn run_all(config: &AppConfig) -> Result<(), OrchestratorError> {
    info!("Bringing up local stack...");
    let mongod = start_local_mongodb(config).await?;

    let store: SharedStore = Arc::new(MongoStorage::new(config));
    match run_seed(store.as_ref(), config.seed_count).await {
        Ok(report) => log_report(&report),
        Err(e) => warn!("Seed failed, continuing: {}", e),
    }

    let frontend = match start_frontend(config).await {
        Ok(frontend) => frontend,
        Err(e) => {
            error!("Frontend setup failed: {}", e);
            stop_optional(mongod, "mongod").await;
            return Err(e);
        }
    };

    info!("Press Ctrl+C to stop");
    let served = server::serve(config, store, server::shutdown_signal()).await;

    stop_optional(frontend, "frontend").await;
    stop_optional(mongod, "mongod").await;
    info!("Services stopped");

    served.map_err(OrchestratorError::from)
}
