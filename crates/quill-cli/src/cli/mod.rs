//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use quill_core::api::BlogClient;
use quill_core::{config, logging};
use tracing_appender::non_blocking::WorkerGuard;

mod commands;

#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "Terminal client for the blog platform")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the blog API (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse and create posts
    Posts {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// Add a comment to a post
    Comment {
        /// Post to comment on
        #[arg(value_name = "POST_ID")]
        post_id: u64,
        /// Comment text
        #[arg(value_name = "CONTENT")]
        content: String,
    },
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "QUILL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the saved session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "QUILL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum PostCommands {
    /// List all posts, newest first as the server orders them
    List,
    /// Show a post with its comments
    Show {
        #[arg(value_name = "POST_ID")]
        id: u64,
    },
    /// Create a post as the signed-in user
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "")]
        category: String,
        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
    /// List posts by a user (defaults to the signed-in user)
    ByUser {
        #[arg(value_name = "USER_ID")]
        user_id: Option<u64>,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the API base URL in the config file
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

/// Config, API client and log guard shared by the networked commands.
struct Connected {
    config: config::Config,
    client: BlogClient,
    _log_guard: WorkerGuard,
}

fn connect(api_url: Option<&str>) -> Result<Connected> {
    let config = config::Config::load().context("load config")?;
    let log_guard = logging::init(&config).context("init logging")?;
    let client = BlogClient::from_config(&config, api_url)?;
    tracing::debug!(api = client.base_url(), "client ready");
    Ok(Connected {
        config,
        client,
        _log_guard: log_guard,
    })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_url } = cli;
    let api_url = api_url.as_deref();

    // default to the interactive client
    let Some(command) = command else {
        let Connected {
            config,
            client,
            _log_guard,
        } = connect(api_url)?;
        return commands::tui::run(config, client).await;
    };

    match command {
        Commands::Posts { command } => {
            let app = connect(api_url)?;
            match command {
                PostCommands::List => commands::posts::list(&app.client).await,
                PostCommands::Show { id } => commands::posts::show(&app.client, id).await,
                PostCommands::Create {
                    title,
                    content,
                    category,
                    tags,
                } => commands::posts::create(&app.client, title, content, category, &tags).await,
                PostCommands::ByUser { user_id } => {
                    commands::posts::by_user(&app.client, user_id).await
                }
            }
        }
        Commands::Comment { post_id, content } => {
            let app = connect(api_url)?;
            commands::comments::add(&app.client, post_id, &content).await
        }
        Commands::Login { username, password } => {
            let app = connect(api_url)?;
            commands::auth::login(&app.client, username, password).await
        }
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(),
        Commands::Register {
            username,
            email,
            password,
        } => {
            let app = connect(api_url)?;
            commands::auth::register(&app.client, username, email, password).await
        }

        // Config commands work with a missing or broken config file.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}
