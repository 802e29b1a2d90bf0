//! Terminal client for country rankings.
//!
//! Talks to the countries provider directly, without the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Largest countries by area in Europe
//! cargo run --bin ranks -- list --region Europe --sort area
//!
//! # Page through the ranking interactively
//! cargo run --bin ranks -- list --interactive
//!
//! # Country detail with neighbors
//! cargo run --bin ranks -- show DEU
//!
//! # Walk from neighbor to neighbor
//! cargo run --bin ranks -- explore FRA
//!
//! # Selectable regions and sort keys
//! cargo run --bin ranks -- regions
//! ```
//!
//! # Environment Variables
//!
//! - `COUNTRIES_API_URL` (optional): Provider base URL
//! - `HTTP_TIMEOUT_SECONDS` (optional): Provider request timeout

use world_ranks::application::services::DetailService;
use world_ranks::application::views::{DetailState, DetailView, RankingView};
use world_ranks::domain::entities::{Country, CountryDetail};
use world_ranks::domain::options::{DEFAULT_PAGE_SIZE, RankingOptions};
use world_ranks::domain::pipeline::SortKey;
use world_ranks::domain::repositories::CountrySource;
use world_ranks::infrastructure::rest_countries::{DEFAULT_BASE_URL, RestCountriesClient};
use world_ranks::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Select;
use std::sync::Arc;
use std::time::Duration;

/// Browse country rankings from the terminal.
#[derive(Parser)]
#[command(name = "ranks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Provider base URL
    #[arg(long, env = "COUNTRIES_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Provider request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECONDS", default_value_t = 30)]
    timeout: u64,

    /// Log provider calls
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank countries
    List {
        /// Case-insensitive text matched against name, region and subregion
        #[arg(short, long)]
        search: Option<String>,

        /// Region to include; repeat for several
        #[arg(short, long = "region")]
        regions: Vec<String>,

        /// UN members only
        #[arg(long)]
        un_member: bool,

        /// Independent countries only
        #[arg(long)]
        independent: bool,

        /// population, name or area
        #[arg(long, default_value = "population")]
        sort: String,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Print every match instead of one page
        #[arg(short, long)]
        all: bool,

        /// Navigate pages with prompts
        #[arg(short, long)]
        interactive: bool,
    },

    /// Show one country with its neighbors
    Show {
        /// Country code, e.g. DEU
        code: String,
    },

    /// Walk from a country to its neighbors interactively
    Explore {
        /// Starting country code
        code: String,
    },

    /// List selectable regions and sort keys
    Regions,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init(if cli.verbose { "world_ranks=debug" } else { "warn" }, "text")?;

    let client = RestCountriesClient::new(&cli.api_url, Duration::from_secs(cli.timeout))
        .context("Failed to create countries client")?;
    let source: Arc<dyn CountrySource> = Arc::new(client);

    match cli.command {
        Commands::List {
            search,
            regions,
            un_member,
            independent,
            sort,
            page,
            page_size,
            all,
            interactive,
        } => {
            let options = RankingOptions::default().with_page_size(page_size.max(1));
            let mut view = RankingView::new(options);
            if let Some(search) = search {
                view.set_search(search);
            }
            for region in &regions {
                view.toggle_region(region);
            }
            view.set_un_member_only(un_member);
            view.set_independent_only(independent);
            view.set_sort(SortKey::parse(&sort));

            load_countries(source.as_ref(), &mut view).await?;

            if !view.go_to_page(page) && view.total_pages() > 0 {
                println!(
                    "{}",
                    format!(
                        "⚠️  Page {} does not exist, showing page 1 of {}",
                        page,
                        view.total_pages()
                    )
                    .yellow()
                );
            }
            if all {
                view.show_all();
            }

            if interactive {
                browse(&mut view)?;
            } else {
                print_ranking(&view);
            }
        }
        Commands::Show { code } => {
            let view = DetailView::new(Arc::new(DetailService::new(source)));
            match view.open(&code).await {
                DetailState::Ready(detail) => print_detail(&detail),
                DetailState::Failed { message, .. } => anyhow::bail!(message),
                _ => anyhow::bail!("Country code must not be empty"),
            }
        }
        Commands::Explore { code } => {
            let view = DetailView::new(Arc::new(DetailService::new(source)));
            explore(&view, &code).await?;
        }
        Commands::Regions => print_options(&RankingOptions::default()),
    }

    Ok(())
}

/// Fetches the full list into `view`.
async fn load_countries(source: &dyn CountrySource, view: &mut RankingView) -> Result<()> {
    println!("{}", "🌍 Loading countries...".bright_black());

    let countries = source.fetch_all().await?;
    view.set_countries(Arc::new(countries));

    Ok(())
}

/// Prompts for page moves until the user quits.
fn browse(view: &mut RankingView) -> Result<()> {
    loop {
        print_ranking(view);

        if view.found() == 0 {
            return Ok(());
        }

        let mut actions = Vec::new();
        if view.is_view_all() {
            actions.push("Paginate");
        } else {
            if view.page_number() < view.total_pages() {
                actions.push("Next page");
            }
            if view.page_number() > 1 {
                actions.push("Previous page");
            }
            actions.push("View all");
        }
        actions.push("Quit");

        let choice = Select::new()
            .with_prompt("Navigate")
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            "Next page" => view.next_page(),
            "Previous page" => view.prev_page(),
            "View all" => view.show_all(),
            "Paginate" => view.show_paginated(),
            _ => return Ok(()),
        }
    }
}

/// Opens `code` and offers its neighbors as the next stop.
async fn explore<S: CountrySource + ?Sized>(view: &DetailView<S>, code: &str) -> Result<()> {
    let mut history: Vec<String> = Vec::new();
    let mut state = view.open(code).await;

    loop {
        let mut labels = Vec::new();
        let mut targets = Vec::new();

        match &state {
            DetailState::Ready(detail) => {
                print_detail(detail);
                for neighbor in &detail.neighbors {
                    labels.push(country_label(neighbor));
                    targets.push(Some(neighbor.code.clone()));
                }
            }
            DetailState::Failed { code, message } => {
                println!("{} {}: {}", "❌".red(), code.cyan(), message.red());
                labels.push("Retry".to_string());
                targets.push(None);
            }
            _ => anyhow::bail!("Country code must not be empty"),
        }

        let back = history.last().cloned();
        if let Some(prev) = &back {
            labels.push(format!("Back to {prev}"));
            targets.push(Some(prev.clone()));
        }
        labels.push("Quit".to_string());

        let choice = Select::new()
            .with_prompt("Go to")
            .items(&labels)
            .default(0)
            .interact()?;

        match targets.get(choice) {
            None => return Ok(()),
            Some(None) => state = view.refetch().await,
            Some(Some(next)) => {
                let current = view.target().await;
                if back.as_ref() == Some(next) {
                    history.pop();
                } else if let Some(current) = current {
                    history.push(current);
                }
                state = view.open(next).await;
            }
        }
    }
}

/// Prints the current page as a table.
///
/// # Output Format
///
/// ```text
/// 🏆 Ranking by Population (Page 1 of 5, 250 found)
///
///   #    Name                           Code  Population       Area (km²)    Region
///   ──────────────────────────────────────────────────────────────────────────────────────
///   1    China                          CHN   1,402,112,000    9,706,961     Asia
/// ```
fn print_ranking(view: &RankingView) {
    let page = view.current_page();

    println!();
    let position = if page.view_all {
        "All".to_string()
    } else {
        format!("Page {} of {}", page.page, page.total_pages.max(1))
    };
    println!(
        "{}",
        format!(
            "🏆 Ranking by {} ({}, {} found)",
            view.sort_key().label(),
            position,
            view.found()
        )
        .bright_blue()
        .bold()
    );
    println!();

    if page.items.is_empty() {
        println!("{}", "  No countries match".yellow());
        println!();
        return;
    }

    println!(
        "  {:<4} {:<30} {:<5} {:<16} {:<13} {}",
        "#".bright_white().bold(),
        "Name".bright_white().bold(),
        "Code".bright_white().bold(),
        "Population".bright_white().bold(),
        "Area (km²)".bright_white().bold(),
        "Region".bright_white().bold()
    );
    println!("  {}", "─".repeat(86).bright_black());

    let offset = if page.view_all {
        0
    } else {
        (page.page - 1) * page.page_size
    };

    for (i, country) in page.items.iter().enumerate() {
        println!(
            "  {:<4} {:<30} {:<5} {:<16} {:<13} {}",
            (offset + i + 1).to_string().bright_black(),
            country.name.cyan(),
            country.code,
            country
                .population
                .map(group_digits)
                .unwrap_or_else(|| "-".to_string()),
            country
                .area
                .map(|a| group_digits(a.round() as u64))
                .unwrap_or_else(|| "-".to_string()),
            country.region.as_deref().unwrap_or("-").bright_black()
        );
    }
    println!();
}

fn print_detail(detail: &CountryDetail) {
    let country = &detail.country;

    println!();
    println!(
        "{}",
        format!("🗺️  {} ({})", country.name, country.code)
            .bright_blue()
            .bold()
    );
    println!();
    print_field("Official name", country.official_name.as_deref());
    print_field(
        "Capital",
        (!country.capital.is_empty())
            .then(|| country.capital.join(", "))
            .as_deref(),
    );
    print_field(
        "Population",
        country.population.map(group_digits).as_deref(),
    );
    print_field(
        "Area",
        country
            .area
            .map(|a| format!("{} km²", group_digits(a.round() as u64)))
            .as_deref(),
    );
    print_field("Region", country.region.as_deref());
    print_field("Subregion", country.subregion.as_deref());
    print_field("UN member", Some(yes_no(country.un_member)));
    print_field("Independent", Some(yes_no(country.independent)));
    print_field("Flag", country.flag.svg.as_deref().or(country.flag.png.as_deref()));
    println!();

    if !country.has_borders() {
        println!("{}", "  No bordering countries".bright_black());
    } else if detail.neighbors.is_empty() {
        println!("{}", "  ⚠️  Neighbors unavailable".yellow());
    } else {
        println!("  {}", "Neighbors:".bright_white().bold());
        for neighbor in &detail.neighbors {
            println!("    {} {}", neighbor.code.bright_black(), neighbor.name.cyan());
        }
    }
    println!();
}

fn print_field(label: &str, value: Option<&str>) {
    println!(
        "  {:<14} {}",
        format!("{label}:").bright_white(),
        value.unwrap_or("-")
    );
}

fn print_options(options: &RankingOptions) {
    println!("{}", "🧭 Regions".bright_blue().bold());
    for region in &options.regions {
        println!("  {}", region.cyan());
    }
    println!();
    println!("{}", "↕️  Sort keys".bright_blue().bold());
    for key in &options.sort_keys {
        println!("  {:<12} {}", key.as_str().cyan(), key.label().bright_black());
    }
    println!();
}

fn country_label(country: &Country) -> String {
    format!("{} ({})", country.name, country.code)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Formats `n` with comma thousands separators.
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
