use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(name = "studbook", version, about = "Large-dog breed studbook CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Dataset source: base URL or local directory (default: built-in snapshot)"
    )]
    pub data: Option<String>,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_API_BASE,
        help = "Curation API base URL"
    )]
    pub api: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter, sort, and render the dataset
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        order: SortArgs,
        #[arg(long, value_enum, default_value_t = ViewMode::Table)]
        view: ViewMode,
    },
    /// Write the filtered subset as CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        order: SortArgs,
        #[arg(long, help = "Output file (default: stdout)")]
        out: Option<PathBuf>,
    },
    /// Full card for a single breed, ratings included
    Show { name: String },
    /// Derived numeric bounds, facet domains, and rating trait keys
    Ranges,
    /// Add a breed through the curation API
    Add { name: String },
    /// Remove a breed through the curation API
    Remove { name: String },
    /// Schema and semantic checks over the loaded dataset
    Validate,
    /// Service-aptitude ranking derived from the ratings
    Score {
        #[arg(long, default_value_t = false, help = "Store derived bands into a directory-sourced dataset")]
        write: bool,
    },
}

/// Filter flags shared by `browse` and `export`. Omitted flags leave the
/// corresponding predicate unrestricted.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, help = "Substring match over name, origin, temperament, purpose")]
    pub search: Option<String>,
    #[arg(long, value_parser = parse_window, help = "Weight window in lbs, e.g. 60..120")]
    pub weight: Option<[f64; 2]>,
    #[arg(long, value_parser = parse_window, help = "Height window in inches")]
    pub height: Option<[f64; 2]>,
    #[arg(long, value_parser = parse_window, help = "Lifespan window in years")]
    pub lifespan: Option<[f64; 2]>,
    #[arg(long, value_parser = parse_score_window, help = "Service score window, e.g. 3..5")]
    pub service_score: Option<[u8; 2]>,
    #[arg(long, help = "Allowed origin, repeatable")]
    pub origin: Vec<String>,
    #[arg(long, help = "Allowed exercise level (Low/Moderate/High), repeatable")]
    pub exercise: Vec<String>,
    #[arg(long, help = "Allowed grooming level, repeatable")]
    pub grooming: Vec<String>,
    #[arg(long, help = "Allowed shedding level, repeatable")]
    pub shedding: Vec<String>,
    #[arg(long, help = "Allowed trainability, repeatable")]
    pub trainability: Vec<String>,
    #[arg(long, help = "Allowed coat type, repeatable")]
    pub coat: Vec<String>,
    #[arg(long, help = "Required purpose tag, repeatable")]
    pub purpose: Vec<String>,
    #[arg(long, help = "Required temperament tag, repeatable")]
    pub temperament: Vec<String>,
    #[arg(long, value_enum, help = "Good with kids")]
    pub kids: Option<YesNo>,
    #[arg(long, value_enum, help = "Good with other dogs")]
    pub dogs: Option<YesNo>,
    #[arg(
        long = "rating",
        value_parser = parse_rating_window,
        help = "Rating trait window as KEY=LO..HI (see `ranges` for keys), repeatable"
    )]
    pub rating: Vec<(String, [u8; 2])>,
}

#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    #[arg(long, default_value = "name", help = "Sort field or rating trait key")]
    pub sort: String,
    #[arg(long, default_value_t = false, help = "Sort descending")]
    pub desc: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    Table,
    Cards,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

fn parse_window(raw: &str) -> Result<[f64; 2], String> {
    let (lo, hi) = raw
        .split_once("..")
        .ok_or_else(|| format!("expected LO..HI, got '{}'", raw))?;
    let lo: f64 = lo
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", lo.trim()))?;
    let hi: f64 = hi
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", hi.trim()))?;
    if lo > hi {
        return Err(format!("window is inverted: {} > {}", lo, hi));
    }
    Ok([lo, hi])
}

fn parse_score_window(raw: &str) -> Result<[u8; 2], String> {
    let [lo, hi] = parse_window(raw)?;
    if lo < 1.0 || hi > 5.0 || lo.fract() != 0.0 || hi.fract() != 0.0 {
        return Err(format!("scores run 1..5, got '{}'", raw));
    }
    Ok([lo as u8, hi as u8])
}

fn parse_rating_window(raw: &str) -> Result<(String, [u8; 2]), String> {
    let (key, window) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=LO..HI, got '{}'", raw))?;
    Ok((key.trim().to_string(), parse_score_window(window)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_parsing() {
        assert_eq!(parse_window("60..120").unwrap(), [60.0, 120.0]);
        assert_eq!(parse_window(" 7 .. 10.5 ").unwrap(), [7.0, 10.5]);
        assert!(parse_window("120..60").is_err());
        assert!(parse_window("60-120").is_err());
    }

    #[test]
    fn test_score_window_parsing() {
        assert_eq!(parse_score_window("3..5").unwrap(), [3, 5]);
        assert!(parse_score_window("0..5").is_err());
        assert!(parse_score_window("1..9").is_err());
        assert!(parse_score_window("1.5..4").is_err());
    }

    #[test]
    fn test_rating_window_parsing() {
        assert_eq!(
            parse_rating_window("rat_train=4..5").unwrap(),
            ("rat_train".to_string(), [4, 5])
        );
        assert!(parse_rating_window("rat_train").is_err());
    }

    #[test]
    fn test_cli_parses_browse_flags() {
        let cli = Cli::try_parse_from([
            "studbook",
            "browse",
            "--search",
            "mastiff",
            "--weight",
            "80..160",
            "--origin",
            "Germany",
            "--origin",
            "Japan",
            "--kids",
            "yes",
            "--rating",
            "rat_train=3..5",
            "--sort",
            "weight_max",
            "--desc",
            "--view",
            "cards",
        ])
        .unwrap();
        match cli.command {
            Commands::Browse { filters, order, view } => {
                assert_eq!(filters.search.as_deref(), Some("mastiff"));
                assert_eq!(filters.weight, Some([80.0, 160.0]));
                assert_eq!(filters.origin, ["Germany", "Japan"]);
                assert_eq!(filters.kids, Some(YesNo::Yes));
                assert_eq!(filters.rating, [("rat_train".to_string(), [3, 5])]);
                assert_eq!(order.sort, "weight_max");
                assert!(order.desc);
                assert_eq!(view, ViewMode::Cards);
            }
            other => panic!("parsed wrong command: {:?}", other),
        }
    }
}
