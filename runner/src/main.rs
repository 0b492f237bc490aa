use {
  clap::Parser,
  predicate_runner::{launch, SystemSettings},
  std::process::ExitCode,
  tracing::debug,
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
  let dotenv = dotenvy::dotenv();

  tracing::subscriber::set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(
        EnvFilter::try_from_default_env()
          .unwrap_or_else(|_| EnvFilter::new("info")),
      )
      .finish(),
  )?;

  match dotenv {
    Ok(path) => debug!("loaded environment from {}", path.display()),
    Err(e) => debug!("no .env file loaded: {e}"),
  }

  // nothing below runs without a complete configuration
  let settings = SystemSettings::parse();
  let config = settings.config()?;
  let chain = config.chain_info()?;

  Ok(launch(&settings, &config, &chain).await.code())
}
