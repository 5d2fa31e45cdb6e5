use tinyhttp::config::Config;
use tinyhttp::server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::from_args(std::env::args())?;

    server::listener::run(&cfg).await
}
