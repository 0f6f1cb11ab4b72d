//! Entry point for the portfolio site.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use folio_core::{Page, Rgb, SiteConfig, ThemeKind};
use folio_site::router::SiteRoute;
use folio_site::{STYLES_CSS, config};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-site")]
#[command(about = "Personal portfolio site")]
struct Args {
    /// Starting palette
    #[arg(long, default_value = "dark")]
    theme: ThemeKind,

    /// Starting accent color as hex, e.g. "#6b86f9"
    #[arg(long)]
    accent: Option<Rgb>,

    /// Page to open first (/, /about, /projects or /contact)
    #[arg(long, default_value = "/")]
    route: Page,

    /// Milliseconds after a page opens before scrolling navigates
    #[arg(long, default_value_t = 500)]
    grace_ms: u64,

    /// Milliseconds after a scroll navigation before the next one
    #[arg(long, default_value_t = 1000)]
    cooldown_ms: u64,

    /// Skip the home page intro animation
    #[arg(long)]
    no_animations: bool,
}

impl From<Args> for SiteConfig {
    fn from(args: Args) -> Self {
        let defaults = SiteConfig::default();
        SiteConfig {
            theme: args.theme,
            accent: args.accent.unwrap_or(defaults.accent),
            start_page: args.route,
            grace_ms: args.grace_ms,
            cooldown_ms: args.cooldown_ms,
            animations: !args.no_animations,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let site = SiteConfig::from(args);
    tracing::info!(config = ?site, "Starting folio site");
    config::install(site);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Rohail Alam")
                        .with_inner_size(LogicalSize::new(1200, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Manrope:wght@400;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);
}

/// Root component hosting the router.
#[component]
fn App() -> Element {
    use_drop(|| tracing::info!("Shutting down folio site"));

    rsx! {
        Router::<SiteRoute> {}
    }
}
