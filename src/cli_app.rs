//! Top-level CLI definition and dispatch.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};
use serde_json::json;
use thiserror::Error;

use careercraft::core::config::Config;
use careercraft::core::errors::CcError;
use careercraft::keywords::KeywordTable;
use careercraft::logger::jsonl::{EventType, JsonlWriter, LogEntry, Severity};
use careercraft::profile::{TemplateTable, export_text};
use careercraft::resume::scorer::{ScoreReport, analyze, report_html};
use careercraft::trainer::favorites::FavoritesStore;
use careercraft::trainer::questions::QuestionBank;
use careercraft::trainer::session::{InterviewSession, Rating};

/// CareerCraft — local career-preparation toolkit.
#[derive(Debug, Parser)]
#[command(
    name = "ccraft",
    author,
    version,
    about = "CareerCraft - Resume scoring, keywords, interview drills, profiles",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Score resume text against the section rubric.
    Analyze(AnalyzeArgs),
    /// Look up role-specific keyword suggestions.
    Keywords(KeywordsArgs),
    /// Practice interview questions for a category.
    Drill(DrillArgs),
    /// List persisted favorite questions.
    Favorites(FavoritesArgs),
    /// Generate a professional-profile blurb for a role.
    Profile(ProfileArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args, Default)]
struct AnalyzeArgs {
    /// Resume text file; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
    /// Emit the report as an HTML fragment.
    #[arg(long, conflicts_with = "json")]
    html: bool,
}

#[derive(Debug, Clone, Args)]
struct KeywordsArgs {
    /// Job title to look up (fuzzy match against known roles).
    #[arg(value_name = "QUERY", num_args = 1.., trailing_var_arg = true)]
    query: Vec<String>,
}

#[derive(Debug, Clone, Args)]
struct DrillArgs {
    /// Question category (hr, technical, behavioral).
    #[arg(value_name = "CATEGORY")]
    category: String,
    /// Seed the question draw for reproducible sessions.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Draw a single question and exit instead of starting the drill loop.
    #[arg(long)]
    one: bool,
}

#[derive(Debug, Clone, Args, Default)]
struct FavoritesArgs {}

#[derive(Debug, Clone, Args, Default)]
struct ProfileArgs {
    /// Role key (developer, data analyst, designer).
    #[arg(value_name = "ROLE", required_unless_present = "list")]
    role: Option<String>,
    /// List known roles instead of generating.
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Shell to generate completion script for.
    #[arg(value_enum)]
    shell: CompletionShell,
}

/// CLI-level failures: core errors plus input-channel problems.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CcError),
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

const fn output_mode(cli: &Cli) -> OutputMode {
    if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    }
}

/// Parse-free entry point used by `main`.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color || !io::stdout().is_terminal() {
        control::set_override(false);
    }

    match &cli.command {
        Command::Analyze(args) => run_analyze(cli, args),
        Command::Keywords(args) => run_keywords(cli, args),
        Command::Drill(args) => run_drill(cli, args),
        Command::Favorites(args) => run_favorites(cli, args),
        Command::Profile(args) => run_profile(cli, args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "ccraft", &mut io::stdout());
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    Ok(Config::load(cli.config.as_deref())?)
}

fn open_logger(config: &Config) -> JsonlWriter {
    JsonlWriter::open(config.paths.jsonl_log.clone())
}

// ──────────────────────── analyze ────────────────────────

fn run_analyze(cli: &Cli, args: &AnalyzeArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let text = read_resume_text(args.file.as_deref())?;
    let report = analyze(&text);

    let mut logger = open_logger(&config);
    let mut entry = LogEntry::new(EventType::ResumeAnalyzed, Severity::Info);
    entry.score = Some(report.score);
    entry.word_count = Some(report.word_count);
    logger.write_entry(&entry);

    if args.html {
        println!("{}", report_html(&report));
        return Ok(());
    }

    match output_mode(cli) {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&report).map_err(CcError::from)?);
        }
        OutputMode::Human => print_report(&report),
    }
    Ok(())
}

fn read_resume_text(file: Option<&std::path::Path>) -> Result<String, CliError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
    }
}

fn print_report(report: &ScoreReport) {
    let score_line = format!("Score: {}%", report.score);
    let colored_score = match report.score {
        100 => score_line.green().bold(),
        50..=99 => score_line.yellow().bold(),
        _ => score_line.red().bold(),
    };
    println!("{colored_score}");
    println!("Detected words: {}", report.word_count);
    println!();
    println!("{}", "Suggestions".bold());
    if report.missing.is_empty() {
        println!("  All key sections found — consider quantifying achievements.");
    } else {
        for item in &report.missing {
            println!("  - {item}");
        }
    }
}

// ──────────────────────── keywords ────────────────────────

fn run_keywords(cli: &Cli, args: &KeywordsArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let query = args.query.join(" ");
    let trimmed = query.trim();
    if trimmed.is_empty() {
        println!("Please enter a job title.");
        return Ok(());
    }

    let table = KeywordTable::built_in();
    let Some((role, keywords)) = table.lookup(trimmed) else {
        match output_mode(cli) {
            OutputMode::Json => {
                println!("{}", json!({ "query": trimmed, "matched": null }));
            }
            OutputMode::Human => {
                println!("No data found for \"{trimmed}\". Try \"software engineer\".");
            }
        }
        return Ok(());
    };

    let mut logger = open_logger(&config);
    let mut entry = LogEntry::new(EventType::KeywordLookup, Severity::Info);
    entry.role = Some(role.to_string());
    entry.details = Some(trimmed.to_string());
    logger.write_entry(&entry);

    match output_mode(cli) {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "query": trimmed,
                    "matched": role,
                    "keywords": keywords,
                }))
                .map_err(CcError::from)?
            );
        }
        OutputMode::Human => {
            println!("{} {role}", "Matched role:".bold());
            print_keyword_group("Technical", keywords.technical);
            print_keyword_group("Tools", keywords.tools);
            print_keyword_group("Soft skills", keywords.soft);
            println!();
            println!("Tip: include top 3 technical skills & 2 tools for ATS match.");
        }
    }
    Ok(())
}

fn print_keyword_group(label: &str, items: &[&str]) {
    println!();
    println!("{}", label.bold());
    println!("  {}", items.join(", "));
}

// ──────────────────────── drill ────────────────────────

fn run_drill(cli: &Cli, args: &DrillArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let store = FavoritesStore::new(config.paths.favorites_file.clone());
    let mut session = args.seed.map_or_else(
        || InterviewSession::new(store.clone()),
        |seed| InterviewSession::with_seed(store.clone(), seed),
    );
    let mut logger = open_logger(&config);
    let mut category = args.category.clone();

    let drawn = session.next_question(&category);
    log_draw(&mut logger, &category, &drawn.text);

    if args.one {
        match output_mode(cli) {
            OutputMode::Json => {
                println!(
                    "{}",
                    json!({
                        "category": category,
                        "question": drawn.text,
                        "is_favorite": drawn.is_favorite,
                    })
                );
            }
            OutputMode::Human => print_question(&drawn.text, drawn.is_favorite),
        }
        return Ok(());
    }

    print_question(&drawn.text, drawn.is_favorite);
    print_drill_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(CliError::Stdin)?;
        let input = line.trim();
        match input {
            "" | "n" => {
                let drawn = session.next_question(&category);
                log_draw(&mut logger, &category, &drawn.text);
                print_question(&drawn.text, drawn.is_favorite);
            }
            "f" => match session.toggle_favorite()? {
                None => println!("No question drawn yet."),
                Some(update) => {
                    let event = if update.is_favorite {
                        println!(
                            "{} ({} total)",
                            "Added to favorites".green(),
                            update.count
                        );
                        EventType::FavoriteAdded
                    } else {
                        println!(
                            "{} ({} total)",
                            "Removed from favorites".yellow(),
                            update.count
                        );
                        EventType::FavoriteRemoved
                    };
                    let mut entry = LogEntry::new(event, Severity::Info);
                    entry.question = session.current_question().map(str::to_string);
                    entry.favorites_count = Some(update.count);
                    logger.write_entry(&entry);
                }
            },
            "1" | "2" | "3" => {
                let level: u8 = input.parse().unwrap_or(0);
                if let Some(rating) = Rating::from_level(level) {
                    match session.current_question() {
                        Some(question) => {
                            println!("{question} — (You rated: {})", rating.feedback());
                        }
                        None => println!("{}", rating.feedback()),
                    }
                }
            }
            "q" => break,
            other => {
                if let Some(next) = other.strip_prefix("c ") {
                    category = next.trim().to_string();
                    let drawn = session.next_question(&category);
                    log_draw(&mut logger, &category, &drawn.text);
                    print_question(&drawn.text, drawn.is_favorite);
                } else {
                    print_drill_help();
                }
            }
        }
    }
    Ok(())
}

fn log_draw(logger: &mut JsonlWriter, category: &str, question: &str) {
    let severity = if QuestionBank::is_known(category) {
        Severity::Info
    } else {
        Severity::Warning
    };
    let mut entry = LogEntry::new(EventType::QuestionDrawn, severity);
    entry.category = Some(category.to_string());
    entry.question = Some(question.to_string());
    logger.write_entry(&entry);
}

fn print_question(text: &str, is_favorite: bool) {
    let marker = if is_favorite { " ★" } else { "" };
    println!();
    println!("{}{marker}", text.bold());
}

fn print_drill_help() {
    println!(
        "{}",
        "[n]ext  [f]avorite  [1-3] rate  [c CATEGORY] switch  [q]uit".dimmed()
    );
}

// ──────────────────────── favorites ────────────────────────

fn run_favorites(cli: &Cli, _args: &FavoritesArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let favorites = FavoritesStore::new(config.paths.favorites_file.clone()).load();

    match output_mode(cli) {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "count": favorites.len(),
                    "favorites": favorites,
                }))
                .map_err(CcError::from)?
            );
        }
        OutputMode::Human => {
            if favorites.is_empty() {
                println!("No favorites yet. Mark questions with 'f' during a drill.");
            } else {
                println!("{} ({})", "Favorites".bold(), favorites.len());
                for question in &favorites {
                    println!("  ★ {question}");
                }
            }
        }
    }
    Ok(())
}

// ──────────────────────── profile ────────────────────────

fn run_profile(cli: &Cli, args: &ProfileArgs) -> Result<(), CliError> {
    let config = load_config(cli)?;
    let table = TemplateTable::built_in();

    if args.list {
        match output_mode(cli) {
            OutputMode::Json => {
                let roles: Vec<&str> = table.roles().collect();
                println!("{}", json!({ "roles": roles }));
            }
            OutputMode::Human => {
                for role in table.roles() {
                    println!("{role}");
                }
            }
        }
        return Ok(());
    }

    let role = args.role.as_deref().unwrap_or_default();
    let Some(template) = table.template(role) else {
        println!("No template found.");
        return Ok(());
    };

    let mut logger = open_logger(&config);
    let mut entry = LogEntry::new(EventType::ProfileGenerated, Severity::Info);
    entry.role = Some(role.to_string());
    logger.write_entry(&entry);

    match output_mode(cli) {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "role": role,
                    "headline": template.headline,
                    "about": template.about,
                    "skills": template.skills,
                    "export": export_text(template),
                }))
                .map_err(CcError::from)?
            );
        }
        OutputMode::Human => {
            println!("{}", export_text(template));
        }
    }
    Ok(())
}
