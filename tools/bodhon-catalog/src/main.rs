//! Bodhon storefront catalog tool.
//!
//! Drives the same catalog, search and cart state the web storefront uses,
//! from the terminal. Handy for checking catalog data files before they ship
//! and for replaying search keystrokes against the debouncer.

mod render;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use bodhon_common::catalog::{Catalog, CategoryFilter};
use bodhon_common::config::{HomeLayout, StorefrontConfig};
use bodhon_common::currency::Grouping;
use bodhon_common::detail::DetailTab;
use bodhon_common::product::ProductId;
use bodhon_common::session::Storefront;
use bodhon_common::showcase::Showcase;

#[derive(Parser)]
#[command(name = "bodhon-catalog", about = "Bodhon Sellers storefront catalog tool")]
struct Cli {
    /// Catalog JSON file (default: bundled mock catalog).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Storefront config JSON file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Homepage layout, overriding the config file.
    #[arg(long, global = true)]
    layout: Option<HomeLayout>,

    /// Group prices in lakh/crore style (1,25,000).
    #[arg(long, global = true)]
    indian_grouping: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    All,
    Fashion,
    Food,
}

impl From<CategoryArg> for CategoryFilter {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => CategoryFilter::All,
            CategoryArg::Fashion => CategoryFilter::Fashion,
            CategoryArg::Food => CategoryFilter::Food,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List products matching a category and search text.
    List {
        #[arg(long, value_enum, default_value_t = CategoryArg::All)]
        category: CategoryArg,
        #[arg(long, default_value = "")]
        search: String,
        /// Print matching products as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show one product's detail page.
    Show {
        id: u32,
        /// Show the reviews panel instead of specifications.
        #[arg(long)]
        reviews: bool,
    },
    /// Add products to a fresh cart (one unit per id) and print totals.
    Cart {
        #[arg(required = true)]
        ids: Vec<u32>,
    },
    /// Replay search keystrokes given as `text@millis` and print what the
    /// catalog shows at `--at`.
    Replay {
        #[arg(required = true)]
        keystrokes: Vec<String>,
        /// Observation time in milliseconds (default: after the last deadline).
        #[arg(long)]
        at: Option<u64>,
    },
    /// Outline the homepage for the configured layout.
    Home,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let catalog = load_catalog(cli.catalog.as_deref())?;
    tracing::info!(products = catalog.len(), layout = %config.home_layout, "catalog loaded");

    let mut storefront = Storefront::new(catalog, &config);
    let grouping = config.grouping;

    match cli.command {
        Command::List {
            category,
            search,
            json,
        } => {
            storefront.select_category(category.into());
            let ticket = storefront.type_query(search, Duration::ZERO);
            storefront.settle_query(ticket);
            let visible = storefront.visible_products();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print!(
                    "{}",
                    render::product_list(&visible, storefront.filter.is_active(), storefront.filter.query(), grouping)?
                );
            }
        }
        Command::Show { id, reviews } => {
            storefront.open_product(ProductId(id));
            if reviews {
                storefront.set_detail_tab(DetailTab::Reviews);
            }
            match storefront.detail() {
                Some(detail) => print!("{}", render::product_detail(&detail, grouping)?),
                None => bail!("no product with id {id}"),
            }
        }
        Command::Cart { ids } => {
            for id in ids {
                let id = ProductId(id);
                if storefront.catalog().find(id).is_none() {
                    tracing::warn!(%id, "skipping unknown product");
                    continue;
                }
                storefront.add_to_cart(id);
            }
            print!("{}", render::cart(&storefront.cart, grouping)?);
        }
        Command::Replay { keystrokes, at } => {
            let mut last = Duration::ZERO;
            for raw in &keystrokes {
                let (text, millis) = parse_keystroke(raw)?;
                let now = Duration::from_millis(millis);
                if now < last {
                    bail!("keystroke {raw:?} is earlier than the one before it");
                }
                storefront.type_query(text, now);
                last = now;
            }
            let observe = at
                .map(Duration::from_millis)
                .unwrap_or(last + storefront.filter.quiet_period());
            storefront.poll_query(observe);
            tracing::debug!(raw = storefront.filter.raw_query(), settled = storefront.filter.query(), "replay finished");

            println!("at {}ms the search box holds {:?}", observe.as_millis(), storefront.filter.raw_query());
            println!("filtering on {:?}", storefront.filter.query());
            let visible = storefront.visible_products();
            print!(
                "{}",
                render::product_list(&visible, storefront.filter.is_active(), storefront.filter.query(), grouping)?
            );
        }
        Command::Home => {
            let showcase = Showcase::builtin();
            let visible = storefront.visible_products();
            print!("{}", render::home(config.home_layout, &showcase, &visible, grouping)?);
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<StorefrontConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            StorefrontConfig::from_json(&json)?
        }
        None => StorefrontConfig::default(),
    };
    if let Some(layout) = cli.layout {
        config.home_layout = layout;
    }
    if cli.indian_grouping {
        config.grouping = Grouping::Indian;
    }
    Ok(config)
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json(&json).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Split `text@millis`. The last `@` separates the time so search text may
/// itself contain one.
fn parse_keystroke(raw: &str) -> Result<(&str, u64)> {
    let Some((text, millis)) = raw.rsplit_once('@') else {
        bail!("keystroke {raw:?} should look like text@millis");
    };
    let millis = millis
        .parse()
        .with_context(|| format!("keystroke {raw:?} has a bad time"))?;
    Ok((text, millis))
}
