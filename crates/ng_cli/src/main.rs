use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use ng_client::NewsApiClient;
use ng_core::config::{DEFAULT_BASE_URL, DEFAULT_COUNTRY};
use ng_core::{Category, Config};
use ng_web::{create_app, AppState, Page, PageController};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod duration;

use duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve top headlines from newsapi.org as a card grid")]
pub struct Cli {
    /// newsapi.org API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Base URL of the news API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Country used for the breaking news page
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    country: String,
    /// How long a category page is reused before it is fetched again (e.g. 5m, 90s, 1h)
    #[arg(long, default_value = "5m")]
    revalidate: HumanDuration,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the web server
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// List every category route
    Categories,
    /// Render one page (e.g. / or /categories/technology) to stdout
    Render { path: String },
    /// Write every page as static HTML under a directory
    Build {
        #[arg(long)]
        out: PathBuf,
    },
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let api_key = self
            .api_key
            .clone()
            .context("an API key is required (--api-key or NEWS_API_KEY)")?;
        let config = Config::new(api_key)?
            .with_base_url(&self.base_url)?
            .with_country(self.country.clone())
            .with_revalidate(self.revalidate.0);
        Ok(config)
    }

    fn controller(&self) -> anyhow::Result<PageController> {
        let config = self.config()?;
        let client = NewsApiClient::new(&config)?;
        Ok(PageController::new(Arc::new(client), config))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Serve { bind } => {
            let controller = cli.controller()?;
            info!(config = ?controller.config(), "🗞️ Page controller ready");
            let app = create_app(AppState::new(controller));
            let listener = tokio::net::TcpListener::bind(*bind).await?;
            info!("🚀 Listening on http://{}", listener.local_addr()?);
            axum::serve(listener, app).await?;
        }
        Commands::Categories => {
            for path in Category::paths() {
                println!("{}", path);
            }
        }
        Commands::Render { path } => {
            let Some(page) = Page::from_path(path) else {
                bail!("no page at {}", path);
            };
            let html = cli.controller()?.render_page(&page).await?;
            println!("{}", html);
        }
        Commands::Build { out } => {
            let controller = cli.controller()?;
            let written = ng_web::site::build_site(&controller, out).await?;
            info!("✨ Built {} pages into {}", written.len(), out.display());
        }
    }

    Ok(())
}
