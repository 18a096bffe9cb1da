// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! PeopleMover CLI - drop targets and board reassignments

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use peoplemover::commands;
use peoplemover::commands::offset::{parse_point, parse_rect};
use peoplemover::commands::products::ProductsArgs;
use peoplemover::geometry::{Point, Rect};
use peoplemover::products::{ProductFilter, SortBy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "peoplemover")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "PEOPLEMOVER_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true, value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the reassignments between two board snapshots
    Compare {
        /// Board before the changes
        before: PathBuf,

        /// Board after the changes
        after: PathBuf,
    },

    /// Resolve which product a dragged card was dropped on
    Drop {
        /// Layout file with candidate and dropped rectangles
        layout: PathBuf,
    },

    /// Compute where a card was grabbed relative to its top-left corner
    Offset {
        /// Card bounding box as top,left,right,bottom
        #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
        rect: Rect,

        /// Pointer position as x,y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        pointer: Point,
    },

    /// List a board's products as they appear on a date
    Products {
        /// Board snapshot
        board: PathBuf,

        /// Product order (name, location, none); defaults to the configured order
        #[arg(long)]
        sort: Option<SortBy>,

        /// Only products at this location (repeatable)
        #[arg(long = "location")]
        locations: Vec<String>,

        /// Only products carrying one of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Viewing date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Include archived, ended and unassigned products
        #[arg(long)]
        all: bool,

        /// Also write the listed products to this board snapshot
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Days each person has spent on their active product
    TimeOnProduct {
        /// Board snapshot
        board: PathBuf,

        /// Viewing date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Get or set configuration ("list" shows every key)
    Config {
        /// Configuration key
        key: String,

        /// Value to set (omit to get)
        value: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(peoplemover::config::default_path);
    let settings = peoplemover::config::load(&config_path)?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => settings.level()?,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.no_color && settings.color)
        .with_writer(std::io::stderr)
        .init();

    let style = settings.report_style(!cli.no_color && !cli.json);

    // Execute command
    match cli.command {
        Commands::Compare { before, after } => {
            commands::compare::run(&before, &after, cli.json, &style)
        }
        Commands::Drop { layout } => {
            commands::drop::run(&layout, cli.json)
        }
        Commands::Offset { rect, pointer } => {
            commands::offset::run(&rect, pointer, cli.json)
        }
        Commands::Products { board, sort, locations, tags, date, all, output } => {
            let args = ProductsArgs {
                sort_by: sort.unwrap_or(settings.sort_by),
                filter: ProductFilter { locations, product_tags: tags },
                date: date.unwrap_or_else(today),
                all,
                output,
            };
            commands::products::run(&board, &args, cli.json)
        }
        Commands::TimeOnProduct { board, date } => {
            commands::time_on_product::run(&board, date.unwrap_or_else(today), cli.json)
        }
        Commands::Config { key, value } => {
            commands::config::run(&config_path, &key, value)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
