//! Football Sentiment Analysis - Entry Point

use clap::Parser;
use fsa::config::{CliOverrides, ResolvedConfig};
use fsa::model::{AppError, CriteriaField, Sentiment};
use fsa::state::{suggestion, SearchSession, SUGGESTIONS};
use fsa::view::{ColorConfig, Palette, RenderOptions};
use fsa::view_state::{terminal_prefers_dark, PanelVisibility, Theme};
use std::path::PathBuf;
use tracing::{debug, info};

/// Football Sentiment Analysis - search and summarize fan comments
#[derive(Parser, Debug)]
#[command(name = "fsa")]
#[command(version)]
#[command(about = "Search football fan comments and summarize their sentiment")]
pub struct Args {
    /// Free-text query matched against content, author and keywords
    pub query: Option<String>,

    /// Only comments with this sentiment
    #[arg(long, value_parser = parse_sentiment)]
    pub sentiment: Option<Sentiment>,

    /// Only comments from this source (case-insensitive)
    #[arg(long)]
    pub source: Option<String>,

    /// Only comments tagged with this team
    #[arg(long)]
    pub team: Option<String>,

    /// Comment type (recorded, not used for filtering)
    #[arg(long = "type")]
    pub comment_type: Option<String>,

    /// Earliest timestamp, e.g. 2026-02-18 or "2026-02-18 14:00"
    #[arg(long)]
    pub from: Option<String>,

    /// Latest timestamp; a bare date includes the whole day
    #[arg(long)]
    pub to: Option<String>,

    /// Search for the N-th suggestion (1-based)
    #[arg(long, value_parser = parse_suggestion)]
    pub suggestion: Option<usize>,

    /// Show sentiment statistics after the results
    #[arg(long)]
    pub stats: bool,

    /// List the teams in the corpus and exit
    #[arg(long)]
    pub teams: bool,

    /// JSONL corpus file (built-in sample corpus if not provided)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Refuse a corpus file containing malformed lines
    #[arg(long)]
    pub strict: bool,

    /// Color theme
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Card width in columns
    #[arg(long, value_parser = clap::value_parser!(u16).range(20..))]
    pub width: Option<u16>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Whether any criteria flag was given. A bare invocation stays Idle.
    fn requests_search(&self) -> bool {
        self.query.is_some()
            || self.sentiment.is_some()
            || self.source.is_some()
            || self.team.is_some()
            || self.comment_type.is_some()
            || self.from.is_some()
            || self.to.is_some()
    }

    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            theme: self.theme,
            show_stats: self.stats.then_some(true),
            corpus_path: self.corpus.clone(),
            content_width: self.width.map(usize::from),
        }
    }
}

fn parse_sentiment(raw: &str) -> Result<Sentiment, String> {
    raw.to_lowercase().parse().map_err(|_| {
        format!(
            "expected one of: {}",
            Sentiment::ALL.map(Sentiment::as_str).join(", ")
        )
    })
}

fn parse_suggestion(raw: &str) -> Result<usize, String> {
    let expected = || format!("expected a number from 1 to {}", SUGGESTIONS.len());
    let position: usize = raw.parse().map_err(|_| expected())?;
    match suggestion(position) {
        Some(_) => Ok(position),
        None => Err(expected()),
    }
}

fn parse_theme(raw: &str) -> Result<Theme, String> {
    raw.parse()
        .map_err(|_| format!("expected one of: {}", Theme::NAMES.join(", ")))
}

/// Apply the command line to a fresh session.
fn apply_args(session: &mut SearchSession, args: &Args) {
    let fields = [
        (CriteriaField::Query, args.query.as_deref()),
        (CriteriaField::Sentiment, args.sentiment.map(Sentiment::as_str)),
        (CriteriaField::Source, args.source.as_deref()),
        (CriteriaField::Team, args.team.as_deref()),
        (CriteriaField::CommentType, args.comment_type.as_deref()),
        (CriteriaField::StartDate, args.from.as_deref()),
        (CriteriaField::EndDate, args.to.as_deref()),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            session.set_criteria_field(field, value);
        }
    }

    if let Some(text) = args.suggestion.and_then(suggestion) {
        session.apply_suggestion(text);
    } else if args.requests_search() {
        session.execute_search();
    }
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, fsa::config::ConfigError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = fsa::config::load_config_with_precedence(args.config.clone())?;
    let merged = fsa::config::merge_config(config_file);
    let with_env = fsa::config::apply_env_overrides(merged);
    Ok(fsa::config::apply_cli_overrides(with_env, args.cli_overrides()))
}

fn render_options(config: &ResolvedConfig, no_color: bool) -> RenderOptions {
    let system_dark = terminal_prefers_dark(std::env::var("COLORFGBG").ok().as_deref());
    let dark = config.theme.resolve(system_dark);
    RenderOptions {
        width: config.content_width,
        palette: Palette::new(ColorConfig::from_env_and_args(no_color), dark),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = resolve_config(args)?;

    fsa::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = fsa::source::detect_corpus_source(config.corpus_path.clone())?;
    let loaded = source.load()?;
    let corpus = if args.strict {
        loaded.into_strict()?
    } else {
        if !loaded.errors.is_empty() {
            eprintln!(
                "warning: skipped {} malformed corpus line(s); see {}",
                loaded.errors.len(),
                config.log_file_path.display()
            );
        }
        loaded.corpus
    };

    let mut session = SearchSession::new(corpus);

    if args.teams {
        println!("{}", fsa::view::render_teams(&session.teams()));
        return Ok(());
    }

    apply_args(&mut session, args);

    let mut panels = PanelVisibility::new();
    if config.show_stats {
        panels.toggle_stats();
    }

    let options = render_options(&config, args.no_color);
    println!("{}", fsa::view::render_screen(&mut session, panels, &options));

    debug!(
        hits = session.cache_hits(),
        misses = session.cache_misses(),
        "Result cache usage"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fsa::corpus::Corpus;
    use fsa::state::SearchState;

    fn session_for(argv: &[&str]) -> SearchSession {
        let args = Args::parse_from(argv);
        let mut session = SearchSession::new(Corpus::seed());
        apply_args(&mut session, &args);
        session
    }

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["fsa", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["fsa", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["fsa"]);
        assert_eq!(args.query, None);
        assert_eq!(args.sentiment, None);
        assert_eq!(args.suggestion, None);
        assert!(!args.stats);
        assert!(!args.teams);
        assert!(!args.strict);
        assert!(!args.no_color);
        assert_eq!(args.theme, None);
        assert_eq!(args.config, None);
        assert!(!args.requests_search());
    }

    #[test]
    fn test_query_is_positional() {
        let args = Args::parse_from(["fsa", "Messi"]);
        assert_eq!(args.query, Some("Messi".to_string()));
        assert!(args.requests_search());
    }

    #[test]
    fn test_sentiment_is_case_insensitive() {
        let args = Args::parse_from(["fsa", "--sentiment", "Positive"]);
        assert_eq!(args.sentiment, Some(Sentiment::Positive));
    }

    #[test]
    fn test_sentiment_invalid_rejects() {
        let result = Args::try_parse_from(["fsa", "--sentiment", "angry"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_type_flag_populates_comment_type() {
        let args = Args::parse_from(["fsa", "--type", "match"]);
        assert_eq!(args.comment_type, Some("match".to_string()));
    }

    #[test]
    fn test_suggestion_rejects_zero() {
        let result = Args::try_parse_from(["fsa", "--suggestion", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_suggestion_accepts_last_position() {
        let last = SUGGESTIONS.len().to_string();
        let args = Args::parse_from(["fsa", "--suggestion", last.as_str()]);
        assert_eq!(args.suggestion, Some(SUGGESTIONS.len()));
    }

    #[test]
    fn test_suggestion_rejects_past_last_position() {
        let past = (SUGGESTIONS.len() + 1).to_string();
        let result = Args::try_parse_from(["fsa", "--suggestion", past.as_str()]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_suggestion_rejects_non_number() {
        let result = Args::try_parse_from(["fsa", "--suggestion", "first"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_values() {
        for (raw, theme) in [
            ("light", Theme::Light),
            ("dark", Theme::Dark),
            ("system", Theme::System),
        ] {
            let args = Args::parse_from(["fsa", "--theme", raw]);
            assert_eq!(args.theme, Some(theme));
        }
    }

    #[test]
    fn test_theme_invalid_rejects() {
        let result = Args::try_parse_from(["fsa", "--theme", "monokai"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_width_rejects_tiny_values() {
        let result = Args::try_parse_from(["fsa", "--width", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["fsa", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_bare_invocation_stays_idle() {
        let mut session = session_for(&["fsa"]);

        assert_eq!(session.state(), SearchState::Idle);
        assert!(session.filtered_comments().is_empty());
        assert_eq!(session.suggestions().len(), 5);
    }

    #[test]
    fn test_type_alone_still_searches() {
        let mut session = session_for(&["fsa", "--type", "match"]);

        assert_eq!(session.state(), SearchState::Searched);
        assert_eq!(session.filtered_comments().len(), 12);
    }

    #[test]
    fn test_combined_flags_are_conjunctive() {
        let mut session = session_for(&["fsa", "--sentiment", "negative", "--source", "twitter"]);

        let ids: Vec<String> = session
            .filtered_comments()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["5", "8"]);
    }

    #[test]
    fn test_suggestion_replaces_query() {
        let session = session_for(&["fsa", "ignored", "--suggestion", "1"]);

        assert_eq!(session.state(), SearchState::Searched);
        assert_eq!(session.criteria().query, "Ronaldo performance");
    }

    #[test]
    fn test_date_flags_set_range() {
        let mut session = session_for(&["fsa", "--from", "2026-02-18", "--to", "2026-02-17"]);

        assert!(session.filtered_comments().is_empty());
    }

    #[test]
    fn test_stats_flag_overrides_config() {
        let args = Args::parse_from(["fsa", "--stats", "--width", "60"]);
        let config = fsa::config::apply_cli_overrides(ResolvedConfig::default(), args.cli_overrides());

        assert!(config.show_stats);
        assert_eq!(config.content_width, 60);
    }

    #[test]
    fn test_missing_stats_flag_keeps_config_value() {
        let args = Args::parse_from(["fsa"]);
        let base = ResolvedConfig {
            show_stats: true,
            ..ResolvedConfig::default()
        };

        let config = fsa::config::apply_cli_overrides(base, args.cli_overrides());

        assert!(config.show_stats);
    }
}
