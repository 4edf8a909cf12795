//! # wiretab
//!
//! A CLI tool for browsing magnet-wire product specification tables.
//!
//! ## Overview
//!
//! wiretab is built on top of wiretablib and prints the built-in product
//! tables in the terminal. Small reference tables are shown as-is; larger
//! tables support global search, multi-column sorting and pagination.
//!
//! ## Features
//!
//! - **Catalog listing**: every built-in table with its row count and weight unit
//! - **Column formatting**: optional fixed decimals and unit suffixes for
//!   numeric values
//! - **Search, sort, paginate**: the same controls as an interactive table
//! - **Multiple output formats**: styled table (default), text, JSON via
//!   `--output`, and CSV via `--csv`
//!
//! ## Usage
//!
//! ```bash
//! # List the built-in tables
//! wiretab list
//!
//! # Show a table with its catalog defaults
//! wiretab show single-etfe-002
//!
//! # Search, sort by gauge descending then weight, show the second page
//! wiretab show triple-etfe-003 --search TXX --sort awg:desc --sort weightLbKft --page 2
//!
//! # Output as JSON
//! wiretab show double-tca2-001 --output json
//!
//! # Raw numbers as CSV
//! wiretab show double-tca2-001 --raw --csv
//! ```

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use wiretablib::{Catalog, ColumnConfig, SortSpec, TableOptions};

use render::{
    build_catalog_context, build_wire_table_context, catalog_csv, catalog_entries, create_theme,
    wire_table_csv, CATALOG_TEMPLATE, WIRE_TABLE_TEMPLATE,
};

fn csv_arg() -> Arg {
    Arg::new("csv")
        .long("csv")
        .action(ArgAction::SetTrue)
        .help("Print comma-separated values instead of a table")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("wiretab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render wire and cable specification tables in the terminal")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug events to stderr"),
        )
        .subcommand(
            Command::new("list")
                .about("List the built-in product tables")
                .arg(csv_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show one product table")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .help("Table id, as printed by `wiretab list`"),
                )
                .arg(
                    Arg::new("format-numeric")
                        .long("format-numeric")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("raw")
                        .help("Render numeric values with fixed decimals and units"),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .action(ArgAction::SetTrue)
                        .help("Render numeric values as stored, without units"),
                )
                .arg(
                    Arg::new("kft")
                        .long("kft")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("ft")
                        .help("Show the weight per thousand feet column"),
                )
                .arg(
                    Arg::new("ft")
                        .long("ft")
                        .action(ArgAction::SetTrue)
                        .help("Show the weight per foot column"),
                )
                .arg(
                    Arg::new("simple")
                        .long("simple")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("full")
                        .help("Show a plain table without search, sort or pages"),
                )
                .arg(
                    Arg::new("full")
                        .long("full")
                        .action(ArgAction::SetTrue)
                        .help("Show a table with search, sort and pages"),
                )
                .arg(
                    Arg::new("search")
                        .short('s')
                        .long("search")
                        .help("Only show rows with a cell containing this text"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .action(ArgAction::Append)
                        .help("Sort by column key, optionally :asc or :desc (can be repeated)"),
                )
                .arg(
                    Arg::new("page")
                        .short('p')
                        .long("page")
                        .value_parser(value_parser!(usize))
                        .default_value("1")
                        .help("Page to show, starting at 1"),
                )
                .arg(
                    Arg::new("page-size")
                        .long("page-size")
                        .value_parser(value_parser!(usize))
                        .help("Rows per page"),
                )
                .arg(csv_arg()),
        )
}

/// Log filter: `-v` shows debug events, otherwise `RUST_LOG` applies with
/// warnings as the default level.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Install the stderr log subscriber
fn init_tracing(matches: &ArgMatches) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(matches.get_flag("verbose"), rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn list_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    init_tracing(matches);
    let catalog = Catalog::builtin()?;
    let entries = catalog_entries(&catalog);

    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&entries)?));
    }
    if matches.get_flag("csv") {
        return Ok(Output::Render(serde_json::to_value(catalog_csv(&entries))?));
    }

    let context = build_catalog_context(&entries);
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Column config from the catalog defaults and the formatting flags
fn column_config(matches: &ArgMatches, base: ColumnConfig) -> ColumnConfig {
    let mut config = base;
    if matches.get_flag("format-numeric") {
        config = config.format_numeric(true);
    } else if matches.get_flag("raw") {
        config = config.format_numeric(false);
    }
    if matches.get_flag("kft") {
        config = config.use_kft(true);
    } else if matches.get_flag("ft") {
        config = config.use_kft(false);
    }
    config
}

fn table_options(matches: &ArgMatches, simple: bool, title: &str) -> anyhow::Result<TableOptions> {
    let mut options = TableOptions::new().with_simple(simple).title(title);

    if let Some(text) = matches.get_one::<String>("search") {
        options = options.search(text.as_str());
    }
    if let Some(specs) = matches.get_many::<String>("sort") {
        for spec in specs {
            let spec: SortSpec = spec.parse()?;
            options = options.sort_by(spec);
        }
    }

    // Simple tables have no pages, so the page number is not checked there
    let page = matches.get_one::<usize>("page").copied().unwrap_or(1);
    if page == 0 && !simple {
        return Err(anyhow::anyhow!("page numbers start at 1"));
    }
    options = options.page(page.saturating_sub(1));
    if let Some(size) = matches.get_one::<usize>("page-size") {
        options = options.page_size(*size);
    }

    let controls = ["search", "sort", "page-size"]
        .iter()
        .any(|id| matches.value_source(id).is_some())
        || page != 1;
    if simple && controls {
        tracing::warn!("search, sort and page options are ignored for a simple table");
    }

    Ok(options)
}

fn show_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    init_tracing(matches);
    let catalog = Catalog::builtin()?;
    let id = matches
        .get_one::<String>("id")
        .context("missing table id")?;
    let table = catalog.get(id)?;

    let config = column_config(matches, table.config);
    let simple = if matches.get_flag("simple") {
        true
    } else if matches.get_flag("full") {
        false
    } else {
        table.simple
    };

    let options = table_options(matches, simple, &table.title)?;
    tracing::debug!(table = %table.id, simple, ?config, "showing table");

    let rendered = table.render_with(&config, &options)?;

    // For JSON mode, return the rendered table itself
    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::to_value(&rendered)?));
    }
    if matches.get_flag("csv") {
        return Ok(Output::Render(serde_json::to_value(wire_table_csv(&rendered))?));
    }

    let context = build_wire_table_context(&rendered);
    Ok(Output::Render(serde_json::to_value(&context)?))
}

fn main() -> ExitCode {
    let cmd = build_command();
    let theme = create_theme();

    let result = App::builder()
        .theme(theme)
        .command("list", list_handler, CATALOG_TEMPLATE)
        .command("show", show_handler, WIRE_TABLE_TEMPLATE)
        .run_to_string(cmd, std::env::args());

    match result {
        RunResult::Handled(output) => {
            if output.starts_with("Error:") {
                eprintln!("{}", output.trim_end());
                return ExitCode::FAILURE;
            }
            print!("{}", output);
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => ExitCode::SUCCESS,
        RunResult::NoMatch(_) => {
            eprintln!("Error: no command given");
            ExitCode::FAILURE
        }
    }
}
