//! CLI entry point for overlay-settings
//!
//! Provides command-line tools for checking settings files, listing key
//! names and localized strings, and previewing text helpers.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use overlay_settings::core::{
    keycodes::{code_to_name, key_table, name_to_code},
    parser::{
        is_blank_or_comment, parse_ini_line, parse_keybind_line, parse_removal_line,
        parse_slot_line,
    },
    text::{component_name_to_mesh_id, wrap_text_width, DEFAULT_WRAP_WIDTH},
    types::{IniLine, KeybindLine, RemovalLine, SlotLine},
    KeybindSet,
};
use overlay_settings::i18n::Localization;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "overlay-settings")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log skipped lines and load details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Settings file formats
#[derive(Clone, Copy, ValueEnum)]
enum FileKind {
    Removals,
    Quickbuild,
    Keybinds,
    Ini,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a settings file and report lines that would be skipped
    Check {
        /// Format of the file
        #[arg(value_enum)]
        kind: FileKind,

        /// Path to the settings file
        file: PathBuf,

        /// Language file for key names
        #[arg(short, long)]
        strings: Option<PathBuf>,
    },

    /// List every named key code
    Keys {
        /// Language file for key names
        #[arg(short, long)]
        strings: Option<PathBuf>,
    },

    /// Show localized strings
    Strings {
        /// Language file merged over the defaults
        #[arg(short, long)]
        overrides: Option<PathBuf>,

        /// Show a single key
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Preview tooltip wrapping
    Wrap {
        prefix: String,
        value: String,

        /// Maximum line length
        #[arg(short, long, default_value_t = DEFAULT_WRAP_WIDTH)]
        width: usize,
    },

    /// Strip the numeric instance suffix from a component name
    MeshId { name: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            kind,
            file,
            strings,
        } => check_file(kind, &file, strings.as_deref())?,
        Commands::Keys { strings } => list_keys(strings.as_deref())?,
        Commands::Strings { overrides, key } => show_strings(overrides.as_deref(), key)?,
        Commands::Wrap {
            prefix,
            value,
            width,
        } => println!("{}", wrap_text_width(&prefix, &value, width)),
        Commands::MeshId { name } => println!("{}", component_name_to_mesh_id(&name)),
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Expands `~` and returns the resulting path.
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Defaults, merged with a language file when one is given.
fn load_strings(overrides: Option<&Path>) -> anyhow::Result<Localization> {
    let mut strings = Localization::with_defaults();
    if let Some(path) = overrides {
        let path = expand_path(path)?;
        let merged = strings.load_overrides(&path)?;
        println!("{} Merged {} strings from {}", "✓".green(), merged, path.display());
    }
    Ok(strings)
}

/// Parse a settings file and report skipped lines
fn check_file(kind: FileKind, file: &Path, strings: Option<&Path>) -> anyhow::Result<()> {
    let path = expand_path(file)?;
    let content = fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))?;
    let strings = load_strings(strings)?;

    println!("{} Parsing: {}", "→".cyan(), path.display());

    let mut accepted = 0;
    let mut skipped = 0;

    for (line_num, line) in content.lines().enumerate() {
        if is_blank_or_comment(line) {
            continue;
        }

        match describe_line(kind, line, &strings) {
            Some(description) => {
                accepted += 1;
                println!("  {} {}", format!("{:>4}", line_num + 1).dimmed(), description);
            }
            None => {
                skipped += 1;
                println!(
                    "  {} {} {}",
                    format!("{:>4}", line_num + 1).dimmed(),
                    "skipped".yellow(),
                    line.trim()
                );
            }
        }
    }

    if let FileKind::Keybinds = kind {
        let conflicts = KeybindSet::from_text(&content).conflicts();
        for conflict in &conflicts {
            let actions = conflict
                .actions
                .iter()
                .map(|a| a.ini_key())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{} {} is bound to {}",
                "⚠".yellow().bold(),
                code_to_name(conflict.code, &strings).cyan(),
                actions
            );
        }
    }

    println!(
        "\n{} {} accepted, {} skipped",
        if skipped == 0 { "✓".green() } else { "⚠".yellow() },
        accepted,
        skipped
    );

    Ok(())
}

fn describe_line(kind: FileKind, line: &str, strings: &Localization) -> Option<String> {
    match kind {
        FileKind::Removals => match parse_removal_line(line) {
            RemovalLine::Entry(entry) => Some(format!(
                "{} {}",
                if entry.is_type_rule() { "type".magenta() } else { "position".blue() },
                entry.display_label(strings)
            )),
            RemovalLine::Skip => None,
        },
        FileKind::Quickbuild => match parse_slot_line(line) {
            SlotLine::Slot(slot) => Some(format!(
                "{} {} {}",
                format!("slot {}", slot.index).blue(),
                slot.display_name,
                slot.texture_name.dimmed()
            )),
            SlotLine::Rotation(rotation) => {
                Some(format!("{} {}°", "rotation".magenta(), rotation.step))
            }
            SlotLine::Skip => None,
        },
        FileKind::Keybinds => match parse_keybind_line(line) {
            KeybindLine::Bind(keybind) => Some(format!(
                "{} → {}",
                keybind
                    .action()
                    .map(|a| a.ini_key())
                    .unwrap_or_default()
                    .green(),
                code_to_name(keybind.code, strings).cyan().bold()
            )),
            KeybindLine::Modifier(modifier) => {
                Some(format!("{} {}", "modifier".magenta(), modifier))
            }
            KeybindLine::Skip => None,
        },
        FileKind::Ini => match parse_ini_line(line) {
            IniLine::Section(name) => Some(format!("[{}]", name).bold().to_string()),
            IniLine::KeyValue { key, value } => {
                let resolved = name_to_code(&value, strings)
                    .map(|code| format!(" (key 0x{:02X})", code))
                    .unwrap_or_default();
                Some(format!("{} = {}{}", key.green(), value, resolved.dimmed()))
            }
            IniLine::Skip => None,
        },
    }
}

/// List every named key code
fn list_keys(strings: Option<&Path>) -> anyhow::Result<()> {
    let strings = load_strings(strings)?;
    let table = key_table(&strings);

    for (code, name) in &table {
        println!("{}  {}", format!("0x{:02X}", code).dimmed(), name.cyan());
    }

    println!("\n{} Total: {} named keys", "✓".green(), table.len());

    Ok(())
}

/// Show localized strings
fn show_strings(overrides: Option<&Path>, key: Option<String>) -> anyhow::Result<()> {
    let strings = load_strings(overrides)?;

    match key {
        Some(key) => {
            if !strings.contains_key(&key) {
                anyhow::bail!("No string for key '{}'", key);
            }
            println!("{}", strings.get(&key));
        }
        None => {
            for (key, value) in strings.sorted_entries() {
                println!("{} = {}", key.green(), value);
            }
            println!("\n{} Total: {} strings", "✓".green(), strings.len());
        }
    }

    Ok(())
}
