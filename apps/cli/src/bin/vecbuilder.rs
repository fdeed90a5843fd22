//! vecbuilder - vector map editor in the terminal
//!
//! Builds an AAV expression vector from the built-in parts catalog and prints
//! one view of it.
//!
//! ## Usage
//!
//! ```bash
//! vecbuilder --orfs 1 --assign promoter=CMV --assign orf-1=GFP table
//! vecbuilder --select orf-1 sequence
//! vecbuilder --category orf catalog
//! vecbuilder --assign promoter=CAG --slot promoter detail --json
//! ```
//!
//! Log output goes to stderr; set `RUST_LOG=debug` to trace every edit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use vecbuilder_cli::commands::{self, catalog, map, sequence, table};
use vecbuilder_cli::config::{default_config_path, load_config};
use vecbuilder_cli::render;
use vecbuilder_cli::session::{Clipboard, ClipboardError, Intent, Session};
use vecbuilder_components::Catalog;
use vecbuilder_core::{SlotCategory, VectorTemplate};

/// View to print after the edits are applied
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    /// Circular map segments with angles and labels
    Map,
    /// Component table with positions and catalog descriptions
    Table,
    /// Step-by-step summary with the total size
    Summary,
    /// Full numbered sequence
    Sequence,
    /// Catalog entries for one category, or search results
    Catalog,
    /// Details and sequence listing for one slot
    Detail,
}

/// Copies by printing to stdout, so the text can be piped elsewhere.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        println!("{}", text);
        Ok(())
    }
}

/// vecbuilder - compose an expression vector and inspect it
///
/// Edits are applied in order: --orfs, then every --assign, then every
/// --clear, then --select.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// View to print
    #[arg(value_enum, default_value = "map")]
    view: ViewArg,

    /// Config file (defaults to the user config directory)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of ORF groups (1-3)
    #[arg(short = 'n', long = "orfs")]
    orfs: Option<usize>,

    /// Fill a slot from the catalog, e.g. promoter=CMV
    #[arg(short = 'a', long = "assign", value_parser = commands::parse_assignment)]
    assign: Vec<Intent>,

    /// Empty a slot again
    #[arg(long = "clear")]
    clear: Vec<String>,

    /// Select a slot
    #[arg(short = 's', long = "select")]
    select: Option<String>,

    /// Catalog category for the catalog view (promoter, orf, linker, regulatory)
    #[arg(long = "category", default_value = "orf")]
    category: String,

    /// Search every category by name instead of listing one
    #[arg(long = "search")]
    search: Option<String>,

    /// Slot for the detail view (defaults to the selection)
    #[arg(long = "slot")]
    slot: Option<String>,

    /// Copy a slot's sequence to stdout instead of printing a view
    #[arg(long = "copy")]
    copy: Option<String>,

    /// Print the view as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path);

    let mut session = Session::new(
        &VectorTemplate::aav(),
        config.initial_orf_groups,
        Catalog::builtin(),
    )?;

    for intent in edits(&args) {
        session.apply(intent)?;
    }

    if let Some(slot_id) = &args.copy {
        let copied = session.copy_sequence(slot_id, &mut StdoutClipboard)?;
        log::info!("Copied {} bp of {}", copied, slot_id);
        return Ok(());
    }

    let output = match args.view {
        ViewArg::Map => emit(
            &map::map_view(&session, &config.map),
            args.json,
            render::render_map,
        )?,
        ViewArg::Table => emit(
            &table::component_table(&session),
            args.json,
            |rows: &Vec<_>| render::render_table(rows),
        )?,
        ViewArg::Summary => emit(
            &table::summary(&session),
            args.json,
            render::render_summary,
        )?,
        ViewArg::Sequence => emit(
            &sequence::sequence_view(&session, &config.sequence),
            args.json,
            render::render_sequence,
        )?,
        ViewArg::Catalog => {
            let view = match &args.search {
                Some(query) => catalog::search_catalog(&session, query),
                None => {
                    let category = SlotCategory::from_key(&args.category)
                        .filter(SlotCategory::is_editable)
                        .with_context(|| format!("Unknown catalog category: {}", args.category))?;
                    catalog::catalog_view(&session, category)
                }
            };
            emit(&view, args.json, render::render_catalog)?
        }
        ViewArg::Detail => {
            let slot_id = args
                .slot
                .as_deref()
                .or_else(|| session.selection().selected())
                .context("The detail view needs --slot or --select")?;
            let detail = sequence::part_detail(&session, slot_id, &config.sequence)?;
            emit(&detail, args.json, render::render_detail)?
        }
    };

    print!("{}", output);
    Ok(())
}

/// Intents from the command line, in the order they are applied.
fn edits(args: &Args) -> Vec<Intent> {
    let mut intents = Vec::new();
    if let Some(count) = args.orfs {
        intents.push(Intent::SetOrfGroups { count });
    }
    intents.extend(args.assign.iter().cloned());
    intents.extend(args.clear.iter().map(|slot_id| Intent::Clear {
        slot_id: slot_id.clone(),
    }));
    if let Some(slot_id) = &args.select {
        intents.push(Intent::Select {
            slot_id: slot_id.clone(),
        });
    }
    intents
}

fn emit<T, F>(view: &T, json: bool, text: F) -> Result<String>
where
    T: serde::Serialize,
    F: Fn(&T) -> String,
{
    if json {
        let mut out = serde_json::to_string_pretty(view)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text(view))
    }
}
