use clap::{value_parser, Arg, Command};
use scene_control::{SceneStore, ServerConfig};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Command::new("scene-control")
        .version(scene_control::VERSION)
        .about("Scene Control API server")
        .arg(
            Arg::new("addr")
                .long("addr")
                .default_value("127.0.0.1")
                .value_parser(value_parser!(IpAddr))
                .help("Address to bind"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .default_value("8000")
                .value_parser(value_parser!(u16))
                .help("Port to bind"),
        )
        .arg(
            Arg::new("static-dir")
                .long("static-dir")
                .default_value("public")
                .value_parser(value_parser!(PathBuf))
                .help("Directory served as the web root"),
        );

    let matches = cli.get_matches();
    let addr = *matches.get_one::<IpAddr>("addr").unwrap();
    let port = *matches.get_one::<u16>("port").unwrap();
    let static_dir = matches.get_one::<PathBuf>("static-dir").unwrap().clone();

    let config = ServerConfig::new()
        .with_addr(addr)
        .with_port(port)
        .with_static_dir(static_dir);

    let store = Arc::new(SceneStore::new());
    tracing::info!(params = ?store.get(), "store initialized with defaults");

    scene_control::server::run(store, config).await;
}
