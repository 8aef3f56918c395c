use clap::{Args, Parser, Subcommand};
use ncraft::domain::Industry;
use ncraft::domain::suffix::SuffixSet;
use std::path::PathBuf;

/// Business-name ideation: candidates, trademark risk, availability and logos.
#[derive(Debug, Parser)]
#[command(name = "ncraft", version, about)]
pub(crate) struct Cli {
    /// Configuration file (`.toml`, `.json` or `.yaml`); `NCRAFT__*` variables override it.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Generate candidate names and screen each of them.
    Generate(GenerateArgs),
    /// Classify the trademark risk of a single name.
    Assess {
        name: String,
    },
    /// Write the SVG logo of a name to disk.
    Logo {
        name: String,
        #[arg(short, long)]
        industry: Option<Industry>,
        /// Target directory; defaults to `storage.export_dir`.
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// Manage the favorites list.
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// List the supported industries.
    Industries,
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// Keywords; each may hold several words.
    #[arg(required = true, num_args = 1..)]
    pub keywords: Vec<String>,

    #[arg(short, long)]
    pub industry: Option<Industry>,

    /// Use the pattern-based flow instead of plain affixes.
    #[arg(short, long)]
    pub extended: bool,

    /// Domain suffix to check, e.g. `.io`; repeatable.
    #[arg(short, long = "suffix", value_name = "SUFFIX", value_parser = parse_suffix)]
    pub suffixes: Vec<SuffixSet>,

    /// Pins candidate selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulate the GitHub and Instagram lookups.
    #[arg(long)]
    pub offline: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum FavoritesCommand {
    List,
    Add { name: String },
    Remove { name: String },
    Toggle { name: String },
}

fn parse_suffix(label: &str) -> Result<SuffixSet, String> {
    SuffixSet::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = SuffixSet::all().labels().collect();
        format!("unsupported suffix '{label}', expected one of {}", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_collects_suffixes() {
        let cli = Cli::parse_from(["ncraft", "generate", "cloud data", "-s", "io", "-s", ".dev"]);
        let Command::Generate(args) = cli.command else { panic!("expected generate") };

        assert_eq!(args.keywords, ["cloud data"]);
        assert_eq!(args.suffixes, [SuffixSet::IO, SuffixSet::DEV]);
    }

    #[test]
    fn unknown_suffix_is_rejected() {
        assert!(Cli::try_parse_from(["ncraft", "generate", "cloud", "-s", ".xyz"]).is_err());
    }

    #[test]
    fn industry_is_parsed_by_id() {
        let cli = Cli::parse_from(["ncraft", "logo", "Acme", "-i", "Finance"]);
        let Command::Logo { industry, .. } = cli.command else { panic!("expected logo") };
        assert_eq!(industry, Some(Industry::Finance));
    }
}
