//! Command-line subcommands
//!
//! Each command drives the same views the site uses and prints their
//! text rendering.

use anyhow::{anyhow, Context as _};
use clap::Subcommand;
use tracing::debug;

use dewhitepaper::render;
use dewhitepaper::shares::{format_units, parse_raw, SHARE_DECIMALS};
use dewhitepaper::{
    now_millis, Config, ContentResolver, ExpectationDetailView, ExpectationListView,
    GatewayResolver, MockExpectationStore, OfflineResolver, Route, ShareBreakdown, StatusFilter,
    VoteChoice, WalletSession,
};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List expectations
    List {
        /// Status tab (all, ongoing, fulfilled, rejected)
        #[arg(short, long, default_value = "all")]
        status: String,
    },

    /// Show one expectation by milestone URI or site route
    Show {
        /// e.g. ipfs://QmMock1 or /dewhitepaper/expectation/ipfs%3A%2F%2FQmMock1
        target: String,
    },

    /// Vote on an expectation
    Vote {
        /// Milestone URI
        uri: String,
        /// approve or disapprove
        #[arg(short, long)]
        choice: String,
        /// Optional comment
        #[arg(long)]
        comment: Option<String>,
        /// Wallet account (overrides config)
        #[arg(short, long, env = "WALLET_ACCOUNT")]
        wallet: Option<String>,
    },

    /// Print the first gateway URL for a milestone URI
    GatewayUrl {
        uri: String,
    },

    /// Show the revenue-share breakdown from raw 6-decimal amounts
    Shares {
        #[arg(long)]
        yours: Option<String>,
        #[arg(long)]
        available: Option<String>,
        #[arg(long)]
        sold: Option<String>,
        #[arg(long)]
        team: Option<String>,
    },
}

/// Text to print and whether the command achieved what was asked.
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self { text, success: true }
    }

    fn failed(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }
}

/// Shared state for one CLI invocation.
pub struct Context {
    pub config: Config,
    pub store: MockExpectationStore,
    pub resolver: Box<dyn ContentResolver>,
}

impl Context {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = MockExpectationStore::new().with_latency(config.store.latency());
        let resolver: Box<dyn ContentResolver> = if config.gateway.offline {
            Box::new(OfflineResolver)
        } else {
            Box::new(config.gateway.build_resolver()?)
        };
        Ok(Self {
            config,
            store,
            resolver,
        })
    }
}

pub async fn execute_command(ctx: &Context, cmd: Commands) -> anyhow::Result<CommandOutput> {
    let now = now_millis();

    match cmd {
        Commands::List { status } => {
            let filter = StatusFilter::parse(&status)
                .ok_or_else(|| anyhow!("unknown status filter: {}", status))?;
            list(ctx, filter, now).await
        }

        Commands::Show { target } => {
            let route = if target.starts_with('/') {
                Route::parse(&target)?
            } else {
                Route::Expectation { uri: target }
            };

            match route {
                Route::Expectation { uri } => show(ctx, &uri, now).await,
                Route::Expectations => list(ctx, StatusFilter::All, now).await,
                Route::Whitepaper => Ok(CommandOutput::ok(render::render_shares(
                    &ShareBreakdown::default(),
                ))),
            }
        }

        Commands::Vote {
            uri,
            choice,
            comment,
            wallet,
        } => {
            let choice = VoteChoice::parse(&choice)
                .ok_or_else(|| anyhow!("choice must be approve or disapprove, got {}", choice))?;

            let session = match wallet.or_else(|| ctx.config.wallet.account.clone()) {
                Some(account) => WalletSession::connected(account)?,
                None => WalletSession::disconnected(),
            };

            let mut view = ExpectationDetailView::new(&uri);
            if view.load(&ctx.store, ctx.resolver.as_ref()).await.is_err() {
                return Ok(CommandOutput::failed(render::render_detail(&view, now)));
            }
            if let Some(comment) = comment {
                view.panel_mut().set_comment(comment);
            }

            let outcome = view.vote(&ctx.store, &session, choice, now).await?;
            debug!(status = ?outcome.status, "Vote finished");

            let mut text = render::render_notification(&outcome.notification);
            if let Some(expectation) = view.expectation() {
                text.push_str(&render::render_voting(expectation, view.panel(), now));
            }

            if outcome.is_recorded() {
                Ok(CommandOutput::ok(text))
            } else {
                Ok(CommandOutput::failed(text))
            }
        }

        Commands::GatewayUrl { uri } => {
            let resolver = GatewayResolver::new(
                ctx.config.gateway.urls.clone(),
                ctx.config.gateway.timeout(),
            )?;
            Ok(CommandOutput::ok(format!("{}\n", resolver.gateway_url(&uri))))
        }

        Commands::Shares {
            yours,
            available,
            sold,
            team,
        } => {
            let raw = |value: Option<String>, default: u128| -> anyhow::Result<u128> {
                match value {
                    Some(v) => parse_raw(&v).context("reading share amount"),
                    None => Ok(default),
                }
            };
            let yours = raw(yours, 0)?;
            let breakdown = ShareBreakdown::from_raw(
                yours,
                raw(available, 100_000_000)?,
                raw(sold, 0)?,
                raw(team, 0)?,
            );
            let mut text = format!(
                "Your balance: {} shares\n",
                format_units(yours, SHARE_DECIMALS)
            );
            text.push_str(&render::render_shares(&breakdown));
            Ok(CommandOutput::ok(text))
        }
    }
}

async fn list(ctx: &Context, filter: StatusFilter, now: i64) -> anyhow::Result<CommandOutput> {
    let mut view = ExpectationListView::new();
    view.set_filter(filter);
    let loaded = view.load(&ctx.store).await;
    let text = render::render_list(&view, now);
    Ok(match loaded {
        Ok(()) => CommandOutput::ok(text),
        Err(_) => CommandOutput::failed(text),
    })
}

async fn show(ctx: &Context, uri: &str, now: i64) -> anyhow::Result<CommandOutput> {
    let mut view = ExpectationDetailView::new(uri);
    let loaded = view.load(&ctx.store, ctx.resolver.as_ref()).await;
    let text = render::render_detail(&view, now);
    Ok(match loaded {
        Ok(()) => CommandOutput::ok(text),
        Err(_) => CommandOutput::failed(text),
    })
}
