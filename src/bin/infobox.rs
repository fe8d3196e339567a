//! Command-line interface for infobox
//! Dumps item data read from wiki pages, or shows the fields of a single page.
//!
//! Usage:
//!   infobox stats --items `<items.json>` [--pages `<dir>`] [--out `<dir>`]   - Dump item stats
//!   infobox limits --items `<items.json>` [--pages `<dir>`] [--out `<dir>`]  - Dump exchange buy limits
//!   infobox variations --items `<items.json>` [--out `<dir>`]              - Dump item name variations
//!   infobox fields `<path>` [--template `<name>`]                           - Print the fields of one page

use clap::{Arg, ArgAction, ArgMatches, Command};
use infobox::dump::{self, DumpConfig, DumpError, Loader, PageDirectory};
use infobox::wiki::{locator, table};
use std::path::PathBuf;
use tracing::Level;

fn main() {
    let items_arg = || {
        Arg::new("items")
            .long("items")
            .short('i')
            .help("JSON array of {\"id\", \"name\"} item records")
            .required(true)
    };
    let pages_arg = || {
        Arg::new("pages")
            .long("pages")
            .short('p')
            .help("Directory of raw page text, one <title>.<extension> file per page")
    };
    let out_arg = || {
        Arg::new("out")
            .long("out")
            .short('o')
            .help("Output directory")
    };

    let matches = Command::new("infobox")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract item data from wiki infoboxes and exchange modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug output)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("stats")
                .about("Dump item stats from item infoboxes")
                .arg(items_arg())
                .arg(pages_arg())
                .arg(out_arg()),
        )
        .subcommand(
            Command::new("limits")
                .about("Dump exchange buy limits from exchange data modules")
                .arg(items_arg())
                .arg(pages_arg())
                .arg(out_arg()),
        )
        .subcommand(
            Command::new("variations")
                .about("Dump groups of items that share a normalized name")
                .arg(items_arg())
                .arg(out_arg()),
        )
        .subcommand(
            Command::new("fields")
                .about("Print the raw fields of one page as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the page text")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .short('t')
                        .help("Template name; without it the page is read as a table literal"),
                ),
        )
        .get_matches();

    let (command, sub_matches) = matches
        .subcommand()
        .expect("subcommand is required");
    init_tracing(sub_matches.get_count("verbose"));

    let result = match command {
        "stats" => handle_stats_command(sub_matches),
        "limits" => handle_limits_command(sub_matches),
        "variations" => handle_variations_command(sub_matches),
        "fields" => handle_fields_command(sub_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the configuration from defaults, `--config` and per-command flags.
fn load_config(matches: &ArgMatches) -> Result<DumpConfig, DumpError> {
    let mut loader = Loader::new();

    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(dir) = matches.try_get_one::<String>("pages").ok().flatten() {
        loader = loader.set_override("pages.dir", dir.as_str())?;
    }
    if let Some(dir) = matches.try_get_one::<String>("out").ok().flatten() {
        loader = loader.set_override("output.dir", dir.as_str())?;
    }

    Ok(loader.build()?)
}

fn load_items(matches: &ArgMatches) -> Result<Vec<dump::ItemRecord>, DumpError> {
    let path = matches
        .get_one::<String>("items")
        .expect("items is required");
    dump::load_items(&PathBuf::from(path))
}

/// Handle the stats command
fn handle_stats_command(matches: &ArgMatches) -> Result<(), DumpError> {
    let config = load_config(matches)?;
    let items = load_items(matches)?;
    let pages = PageDirectory::from_config(&config.pages);

    let stats = dump::stats::dump_item_stats(&items, &pages, &config.templates)?;
    dump::write_json(&config.output.dir, dump::STATS_FILE, &stats, config.output.pretty)?;
    eprintln!("Dumped {} item stats", stats.len());
    Ok(())
}

/// Handle the limits command
fn handle_limits_command(matches: &ArgMatches) -> Result<(), DumpError> {
    let config = load_config(matches)?;
    let items = load_items(matches)?;
    let pages = PageDirectory::from_config(&config.pages);

    let limits = dump::limits::dump_item_limits(&items, &pages, &config.pages.exchange_prefix)?;
    dump::write_json(&config.output.dir, dump::LIMITS_FILE, &limits, config.output.pretty)?;
    eprintln!("Dumped {} item limits", limits.len());
    Ok(())
}

/// Handle the variations command
fn handle_variations_command(matches: &ArgMatches) -> Result<(), DumpError> {
    let config = load_config(matches)?;
    let items = load_items(matches)?;

    let variations = dump::variations::group_variations(&items);
    dump::write_json(
        &config.output.dir,
        dump::VARIATIONS_FILE,
        &variations,
        config.output.pretty,
    )?;
    eprintln!("Dumped {} item variations", variations.len());
    Ok(())
}

/// Handle the fields command
fn handle_fields_command(matches: &ArgMatches) -> Result<(), DumpError> {
    let path = PathBuf::from(matches.get_one::<String>("path").expect("path is required"));
    let text = std::fs::read_to_string(&path).map_err(|source| DumpError::Read {
        path: path.clone(),
        source,
    })?;

    let parsed = match matches.get_one::<String>("template") {
        Some(name) => locator::locate(name, &text),
        None => table::parse_pairs(&text),
    };

    match parsed {
        Ok(pairs) => {
            let json = serde_json::to_string_pretty(&pairs).map_err(DumpError::Serialize)?;
            println!("{}", json);
        }
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            std::process::exit(2);
        }
    }
    Ok(())
}
