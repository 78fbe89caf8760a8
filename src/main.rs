//! DataVision CLI
//!
//! Terminal client for the DataVision backend:
//! - Log in and out
//! - Show the current session
//! - Count work code communications over a date range
//! - Choose the display language

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use datavision::client::{ApiClient, ReqwestTransport};
use datavision::config::{generate_default_config, Config, LoggingConfig};
use datavision::i18n::{Language, TextKey};
use datavision::router::{MemoryLocation, Route, Router};
use datavision::storage::{FileStorage, Storage};
use datavision::views::{Dashboard, LoginForm};
use datavision::{Field, Shell};

#[derive(Parser)]
#[command(name = "datavision")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "UCCP DataVision - work code statistics for any date range")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: platform config dir, then ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        /// Read from stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Count communications in a date range
    Count {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: String,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: String,
        /// Work code filter, e.g. PCMO.OC1 (default: all types)
        #[arg(short, long)]
        workcode: Option<String>,
    },

    /// Show or set the display language
    Language {
        /// en or de
        code: Option<Language>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Everything a command needs, built once per run
struct App {
    shell: Shell,
    client: ApiClient<ReqwestTransport>,
}

impl App {
    /// A run is one page load starting at `initial`
    fn new(config: &Config, initial: Route) -> anyhow::Result<Self> {
        let path = config.storage.path();
        let storage: Rc<dyn Storage> = Rc::new(
            FileStorage::open(&path)
                .with_context(|| format!("Failed to open storage at {:?}", path))?,
        );

        let transport = ReqwestTransport::new(config.api.request_timeout())?;
        let client = ApiClient::new(&config.api.base_url, transport, Rc::clone(&storage))
            .with_query_timeout(config.api.query_timeout());

        let router = Router::new(Rc::new(MemoryLocation::new(initial.fragment())));
        let shell = Shell::with_default_language(storage, router, config.ui.default_language);

        Ok(Self { shell, client })
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("datavision={}", config.level))
    });
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Login { username, password } => {
            let ctx = App::new(&config, Route::Login)?;
            let password = match password {
                Some(password) => password,
                None => prompt(&ctx.shell.text(TextKey::PasswordLabel))?,
            };

            let mut form = LoginForm::new();
            form.username = username;
            form.password = password;
            if !form.can_submit() {
                bail!("Username and password are required");
            }

            form.submit(&ctx.client, ctx.shell.storage(), |user| {
                ctx.shell.logged_in(user)
            })
            .await;

            if let Some(message) = form.error_message(ctx.shell.language(), ctx.shell.catalog()) {
                bail!(message);
            }
            let name = ctx.shell.display_name().unwrap_or_default();
            println!("{} {}", ctx.shell.text(TextKey::LoggedInAs), name);
        }

        Commands::Logout => {
            let ctx = App::new(&config, Route::Dashboard)?;
            ctx.shell.logout();
            println!("{}", ctx.shell.text(TextKey::Logout));
        }

        Commands::Whoami => {
            let ctx = App::new(&config, Route::Dashboard)?;
            ctx.shell.bootstrap(&ctx.client).await;
            let Some(session) = ctx.shell.session() else {
                bail!("Not logged in. Run `datavision login` first.");
            };
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&session.user)?),
                OutputFormat::Text => println!(
                    "{} {}",
                    ctx.shell.text(TextKey::LoggedInAs),
                    ctx.shell.display_name().unwrap_or_else(|| "-".to_string())
                ),
            }
        }

        Commands::Count { from, to, workcode } => {
            let ctx = App::new(&config, Route::Dashboard)?;
            ctx.shell.bootstrap(&ctx.client).await;
            let guarded = Dashboard::guard(ctx.shell.storage(), ctx.shell.router());
            if ctx.shell.route() == Route::Login || !guarded {
                bail!("Not logged in. Run `datavision login` first.");
            }

            let mut dashboard = Dashboard::new();
            dashboard.edit(Field::Workcode, workcode.unwrap_or_default());
            dashboard.edit(Field::From, from);
            dashboard.edit(Field::To, to);
            dashboard.submit(&ctx.client, ctx.shell.router()).await;

            if ctx.shell.route() == Route::Login {
                bail!("Session expired. Run `datavision login` again.");
            }

            let (language, catalog) = (ctx.shell.language(), ctx.shell.catalog());
            if let Some(message) = dashboard.error_message(language, catalog) {
                bail!("{}: {}", ctx.shell.text(TextKey::ErrorTitle), message);
            }

            match (cli.format, dashboard.result(), dashboard.summary(language, catalog)) {
                (OutputFormat::Json, Some(result), _) => {
                    println!("{}", serde_json::to_string_pretty(result)?)
                }
                (OutputFormat::Text, _, Some(summary)) => {
                    println!("{}", ctx.shell.text(TextKey::ResultTitle));
                    let label = |key| ctx.shell.text(key);
                    println!("  {} {}", label(TextKey::ResultCommunication), summary.filter);
                    println!("  {} {}", label(TextKey::ResultDateRange), summary.range);
                    println!(
                        "  {} {} {}",
                        ctx.shell.text(TextKey::ResultCount),
                        summary.count,
                        ctx.shell.text(TextKey::ResultCountSuffix)
                    );
                }
                _ => bail!("No result received"),
            }
        }

        Commands::Language { code } => {
            let ctx = App::new(&config, Route::Dashboard)?;
            if let Some(language) = code {
                ctx.shell.set_language(language);
            }
            let current = ctx.shell.language();
            println!(
                "{}: {} ({})",
                ctx.shell.text(TextKey::LanguageLabel),
                current.display_name(),
                current.code()
            );
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                std::fs::write(&path, content)?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

/// Read one line from stdin after printing `label` to stderr
fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{}: ", label);
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
