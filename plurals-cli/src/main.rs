//! plurals CLI - inspect CLDR plural rules and classify numbers.
//!
//! # Commands
//!
//! - `plurals select <locale> <values...>` - Plural category of each value
//! - `plurals categories <locale>` - Categories and rule text of a locale
//! - `plurals resolve <locale>` - How a locale name is normalized and looked up
//! - `plurals locales` - Locales with rule data
//! - `plurals check <rules-file>` - Validate a CLDR JSON/TOML rule table
//! - `plurals completions <shell>` - Generate shell completions

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use plurals_config::{ConfigBuilder, PluralsConfig};
use plurals_core::PluralRuleType;
use std::io;
use std::path::PathBuf;

mod commands;
mod error;

use commands::{check, inspect, select};
use error::CliResult;

/// Plural category selection driven by CLDR rules
#[derive(Parser)]
#[command(name = "plurals")]
#[command(version)]
#[command(about = "Inspect CLDR plural rules and classify numbers by locale")]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = format!(
    "{}\n  {} plurals select ru 1 2 5 21\n  {} plurals select en 1 2 3 --ordinal\n  {} plurals categories ar\n  {} plurals resolve iw_IL\n  {} plurals check cldr/plurals.json",
    "Examples:".bright_cyan().bold(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.json, .toml or .env)
    #[arg(short, long, global = true, env = "PLURALS_CONFIG")]
    config: Option<PathBuf>,

    /// CLDR rule table consulted before the built-in rules
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plural category of each value
    #[command(alias = "s")]
    Select(SelectArgs),

    /// Categories a locale distinguishes, with their rules
    #[command(alias = "c")]
    Categories(LocaleArgs),

    /// Show how a locale name is normalized and looked up
    #[command(alias = "r")]
    Resolve {
        /// Locale name (e.g. en_US, pt-PT, iw)
        locale: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List locales with rule data
    #[command(alias = "l")]
    Locales(TypeArgs),

    /// Validate a CLDR JSON or TOML rule table
    Check {
        /// Path to the rule table
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct SelectArgs {
    /// Locale name (e.g. en_US, pt-PT, iw)
    locale: String,

    /// Values to classify: integers, decimals ("1.50") or compact ("1.2c6")
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    #[command(flatten)]
    rule_type: TypeArgs,
}

#[derive(Args)]
struct LocaleArgs {
    /// Locale name (e.g. en_US, pt-PT, iw)
    locale: String,

    #[command(flatten)]
    rule_type: TypeArgs,
}

#[derive(Args)]
struct TypeArgs {
    /// Use ordinal rules (1st, 2nd, 3rd) instead of cardinal rules
    #[arg(short, long, conflicts_with = "cardinal")]
    ordinal: bool,

    /// Use cardinal rules even if the configuration selects ordinal
    #[arg(long)]
    cardinal: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl TypeArgs {
    fn rule_type(&self, config: &PluralsConfig) -> PluralRuleType {
        if self.ordinal {
            PluralRuleType::Ordinal
        } else if self.cardinal {
            PluralRuleType::Cardinal
        } else {
            config.rule_type
        }
    }
}

fn load_config(cli: &Cli) -> CliResult<PluralsConfig> {
    let mut builder = ConfigBuilder::new().load_dotenv(None).load_env();
    if let Some(path) = &cli.config {
        builder = builder.add_file(path.clone());
    }
    if let Some(path) = &cli.rules {
        builder = builder.set("rules_file", path.display().to_string());
    }
    let config = builder.build()?;

    config.apply_logging();
    if cli.verbose {
        plurals_log::set_level(plurals_log::Level::Debug);
    } else if cli.quiet {
        plurals_log::set_level(plurals_log::Level::Error);
    }
    Ok(config)
}

fn run(cli: Cli) -> CliResult<()> {
    if let Commands::Completions { shell } = &cli.command {
        generate(*shell, &mut Cli::command(), "plurals", &mut io::stdout());
        return Ok(());
    }

    // `check` validates its own file; a broken table in the config should
    // not prevent that.
    if let Commands::Check { file, json } = &cli.command {
        return check::run(file, *json, cli.quiet);
    }

    let config = load_config(&cli)?;
    let selector = config.build_selector()?;

    match &cli.command {
        Commands::Select(args) => select::run(
            &selector,
            &args.locale,
            &args.values,
            args.rule_type.rule_type(&config),
            args.rule_type.json,
        ),
        Commands::Categories(args) => inspect::categories(
            &selector,
            &args.locale,
            args.rule_type.rule_type(&config),
            args.rule_type.json,
        ),
        Commands::Resolve { locale, json } => inspect::resolve(&selector, locale, *json),
        Commands::Locales(args) => {
            inspect::locales(&selector, args.rule_type(&config), args.json)
        }
        Commands::Check { .. } | Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle color preferences
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_select_accepts_negative_values() {
        let cli = Cli::try_parse_from(["plurals", "select", "ru", "-1", "-22", "--ordinal"]).unwrap();
        match cli.command {
            Commands::Select(args) => {
                assert_eq!(args.values, vec!["-1", "-22"]);
                assert!(args.rule_type.ordinal);
            }
            _ => panic!("expected select"),
        }
    }

    #[test]
    fn test_rule_type_flags() {
        let config = PluralsConfig {
            rule_type: PluralRuleType::Ordinal,
            ..PluralsConfig::default()
        };
        let args = TypeArgs {
            ordinal: false,
            cardinal: true,
            json: false,
        };
        assert_eq!(args.rule_type(&config), PluralRuleType::Cardinal);

        let args = TypeArgs {
            ordinal: false,
            cardinal: false,
            json: false,
        };
        assert_eq!(args.rule_type(&config), PluralRuleType::Ordinal);

        assert!(Cli::try_parse_from(["plurals", "locales", "--ordinal", "--cardinal"]).is_err());
    }
}
