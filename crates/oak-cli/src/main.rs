//! Oak CLI: `oak` command.
//!
//! Derives inverse predicate names, evaluates library predicates on JSON
//! values, and lists the generated library.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use oak::{library, Args, Kind, Namespace, RuleSet, Value};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Oak CLI: kind predicates and their generated logical inverses.
#[derive(Parser, Debug)]
#[command(
    name = "oak",
    about = "Oak CLI",
    version,
    long_about = "oak: Of A Kind\n\nDerive inverse predicate names from rewrite rules, evaluate\nis_<kind> / isnt_<kind> predicates on JSON values, and list the library."
)]
struct Cli {
    /// JSON rule-set file used to name inverses (default: is_ -> isnt_, fallback not_)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive the inverse name of a predicate name
    Derive {
        /// Predicate name (e.g. is_str)
        name: String,
    },

    /// Evaluate a library predicate on a value
    Check {
        /// Predicate name (e.g. is_list, isnt_none, is_of)
        predicate: String,

        /// Value as JSON (e.g. '[1, 2]', '"x"', 'null')
        value: String,

        /// Comma-separated kinds passed as the second argument (for is_of / isnt_of);
        /// an empty string passes no kinds
        #[arg(long, value_delimiter = ',')]
        kinds: Option<Vec<String>>,

        /// Parse VALUE as a tagged oak value (e.g. '{"Tuple": [{"Int": 1}]}')
        #[arg(long)]
        typed: bool,
    },

    /// List every predicate in the library
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective rule set as JSON
    Rules,
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let verbose = cli.verbose;
    let rules_path = cli.rules.clone();

    let result = match cli.command {
        Commands::Derive { name } => cmd_derive(&name, rules_path.as_deref(), verbose),
        Commands::Check {
            predicate,
            value,
            kinds,
            typed,
        } => cmd_check(
            &predicate,
            &value,
            kinds.as_deref(),
            typed,
            rules_path.as_deref(),
            verbose,
        ),
        Commands::List { json } => cmd_list(json, rules_path.as_deref(), verbose),
        Commands::Rules => cmd_rules(rules_path.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => RuleSet::load(path)
            .with_context(|| format!("failed to load rule set from {}", path.display())),
        None => Ok(RuleSet::default()),
    }
}

fn load_library(path: Option<&Path>) -> Result<Namespace> {
    let rules = load_rules(path)?;
    library::build_with(rules).context("failed to build predicate library")
}

fn parse_value(raw: &str, typed: bool) -> Result<Value> {
    if typed {
        return serde_json::from_str::<Value>(raw)
            .with_context(|| format!("invalid typed value: {raw}"));
    }
    let json: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("invalid JSON value: {raw}"))?;
    Ok(Value::from(json))
}

fn parse_kinds(names: &[String]) -> Result<Value> {
    let kinds = names
        .iter()
        .filter(|n| !n.trim().is_empty())
        .map(|n| n.parse::<Kind>())
        .collect::<oak::Result<Vec<_>>>()?;
    Ok(Value::kinds(kinds))
}

// ── Command implementations ───────────────────────────────────────────────────

/// `oak derive NAME`
fn cmd_derive(name: &str, rules_path: Option<&Path>, verbose: bool) -> Result<()> {
    let rules = load_rules(rules_path)?;
    let derived = oak::derive(name, &rules)?;

    if verbose {
        println!("{name} -> {derived}");
    } else {
        println!("{derived}");
    }
    Ok(())
}

/// `oak check PREDICATE VALUE [--kinds K,...] [--typed]`
fn cmd_check(
    predicate: &str,
    raw_value: &str,
    kinds: Option<&[String]>,
    typed: bool,
    rules_path: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let ns = load_library(rules_path)?;
    let pred = ns
        .resolve(predicate)
        .map_err(|_| anyhow!("unknown predicate '{predicate}' (see `oak list`)"))?;

    let value = parse_value(raw_value, typed)?;
    let value_type = value.type_name();
    let mut args = Args::new().arg(value);
    if let Some(kinds) = kinds {
        args = args.arg(parse_kinds(kinds)?);
    }

    let result = pred.call(&args)?;

    if verbose {
        println!("{} on {value_type}: {result}", pred);
        if let Some(doc) = pred.doc() {
            println!("  {doc}");
        }
    } else {
        println!("{result}");
    }
    Ok(())
}

#[derive(Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    params: &'a [String],
    doc: Option<&'a str>,
}

/// `oak list [--json]`
fn cmd_list(json: bool, rules_path: Option<&Path>, verbose: bool) -> Result<()> {
    let ns = load_library(rules_path)?;

    if json {
        let entries: Vec<ListEntry<'_>> = ns
            .iter()
            .map(|(name, pred)| ListEntry {
                name,
                params: pred.signature().params(),
                doc: pred.doc(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:<24} {:<14} DOC", "NAME", "PARAMS");
    println!("{}", "-".repeat(72));
    for (name, pred) in ns.iter() {
        println!(
            "{:<24} {:<14} {}",
            name,
            pred.signature().to_string(),
            pred.doc().unwrap_or("")
        );
    }

    if verbose {
        println!();
        println!("{} predicates in namespace '{}'", ns.len(), ns.id());
    }
    Ok(())
}

/// `oak rules`
fn cmd_rules(rules_path: Option<&Path>) -> Result<()> {
    let rules = load_rules(rules_path)?;
    println!("{}", rules.to_json_pretty()?);
    Ok(())
}
