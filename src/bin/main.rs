use anyhow::Context;
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;
use vocab_core::config::{BuildConfig, AUDIT_FILE_NAME, TABLE_FILE_NAME};
use vocab_core::core::expansion::{DuplicateReport, SkippedVariantReport};
use vocab_core::escapes::{fix_messages, MessagesFile};
use vocab_core::persistence::{load_json, load_vocabulary, save_json};
use vocab_core::{pipeline, VocabError};

#[derive(Debug, Parser)]
#[command(author, version, about = "Builds the extended AGI word table from a translated vocabulary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate the vocabulary and write the word table.
    Build {
        /// Path to vocabulary.json.
        vocabulary: PathBuf,

        /// Directory receiving the table and the audit listing.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        #[arg(long, default_value = TABLE_FILE_NAME)]
        table_name: String,

        #[arg(long, default_value = AUDIT_FILE_NAME)]
        audit_name: String,
    },
    /// Validate the vocabulary without writing anything.
    Check {
        vocabulary: PathBuf,
    },
    /// Restore escape sequences stripped from translated messages.
    FixEscapes {
        /// Path to messages.json.
        messages: PathBuf,

        /// Report what would change without rewriting the file.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Build {
            vocabulary,
            out_dir,
            table_name,
            audit_name,
        } => {
            let config = BuildConfig {
                output_dir: out_dir,
                table_file_name: table_name,
                audit_file_name: audit_name,
                ..BuildConfig::default()
            };
            match pipeline::build_from_file(&vocabulary, &config) {
                Ok(summary) => {
                    println!(
                        "{} {} with {} words",
                        "Generated".green(),
                        summary.table_path.display(),
                        summary.word_count
                    );
                    if let Some(audit) = &summary.audit_path {
                        println!(
                            "  ({} prefix variants skipped due to conflicts - see {})",
                            summary.skipped.len(),
                            audit.display()
                        );
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(VocabError::AmbiguousVocabulary(duplicates)) => {
                    print_duplicates(&duplicates);
                    Ok(ExitCode::FAILURE)
                }
                Err(e) => Err(e).context("word table generation failed"),
            }
        }
        Command::Check { vocabulary } => {
            let vocab = load_vocabulary(&vocabulary)?;
            match pipeline::check(&vocab) {
                Ok(skipped) => {
                    println!("{} {} word groups, no duplicates", "OK".green(), vocab.groups.len());
                    print_skipped(&skipped);
                    Ok(ExitCode::SUCCESS)
                }
                Err(VocabError::AmbiguousVocabulary(duplicates)) => {
                    print_duplicates(&duplicates);
                    Ok(ExitCode::FAILURE)
                }
                Err(e) => Err(e.into()),
            }
        }
        Command::FixEscapes { messages, dry_run } => {
            let mut file: MessagesFile = load_json(&messages)?;
            let stats = fix_messages(&mut file, dry_run);

            println!("Messages checked: {}", stats.checked);
            if stats.fixed == 0 {
                println!("{}", "No issues found. All escape sequences are correct.".green());
            } else if dry_run {
                println!("{} messages would be fixed (run without --dry-run to apply)", stats.fixed);
            } else {
                save_json(&messages, &file)
                    .with_context(|| format!("writing {}", messages.display()))?;
                println!("{} {} messages, updated {}", "Fixed".green(), stats.fixed, messages.display());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_duplicates(duplicates: &[DuplicateReport]) {
    eprintln!(
        "{}",
        "Duplicate words found in vocabulary! Each word must map to exactly one word number."
            .red()
            .bold()
    );
    for dup in duplicates {
        eprintln!("  \"{}\" appears in:", dup.word);
        for occ in &dup.occurrences {
            eprintln!("    - Word #{} ({})", occ.word_number, occ.provenance);
        }
    }
}

fn print_skipped(skipped: &[SkippedVariantReport]) {
    if skipped.is_empty() {
        return;
    }
    println!("{} prefix variants skipped due to homographs:", skipped.len());
    for s in skipped {
        println!(
            "  {} not added to #{} ({}); owned by #{} ({})",
            s.variant.as_str().yellow(),
            s.source_word_number,
            s.source_word,
            s.conflict_word_number,
            s.conflict_word
        );
    }
}
