//! Command-line front end for textlab
//!
//! Usage:
//!   textlab concordance data.txt --word happy --left 2 --right 3 --sort left
//!   textlab plagiarism original.txt suspicious.txt --threshold 0.3 --report

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use textlab::{
    accumulate_diff_stats, calculate_frequencies, calculate_text_plagiarism_score,
    create_diff_report, get_adjacent_words, get_concordance, get_top_n_words, read_from_file,
    remove_stop_words, sort_concordance, sort_concordance_stable, tokenize, tokenize_by_lines,
    write_to_file, ConcordanceConfig, PlagiarismConfig, Result, StopwordFilter,
};

#[derive(Parser, Debug)]
#[command(name = "textlab")]
#[command(about = "Concordances and sentence-level plagiarism scores")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Top words and context windows of a word
    Concordance {
        /// Text file to analyse
        file: PathBuf,

        /// Word to build the concordance for
        #[arg(short, long)]
        word: String,

        /// Left context size
        #[arg(short, long, default_value = "2")]
        left: usize,

        /// Right context size
        #[arg(short, long, default_value = "3")]
        right: usize,

        /// Sort windows by their left or right context
        #[arg(long, value_enum)]
        sort: Option<SortSide>,

        /// Keep windows whose sort keys are equal
        #[arg(long)]
        keep_duplicates: bool,

        /// Print only the outermost context words
        #[arg(long)]
        adjacent: bool,

        /// Comma-separated stopwords removed before counting
        #[arg(long, value_delimiter = ',')]
        stopwords: Vec<String>,

        /// Also remove the built-in stopwords of this language
        #[arg(long)]
        language: Option<String>,

        /// Number of most frequent words to print
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// JSON concordance config, overrides the size/sort/top flags
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the windows to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare a suspicious text with the original, line by line
    Plagiarism {
        /// Original text, one sentence per line
        original: PathBuf,

        /// Suspicious text, one sentence per line
        suspicious: PathBuf,

        /// Minimum LCS share for a sentence pair to count
        #[arg(short, long, default_value = "0.3")]
        threshold: f64,

        /// Print the line-by-line difference report
        #[arg(long)]
        report: bool,

        /// Print the accumulated statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortSide {
    Left,
    Right,
}

struct ConcordanceArgs {
    file: PathBuf,
    word: String,
    config: ConcordanceConfig,
    sorted: bool,
    keep_duplicates: bool,
    adjacent: bool,
    language: Option<String>,
    output: Option<PathBuf>,
}

fn run_concordance(args: ConcordanceArgs, verbose: bool) -> Result<()> {
    args.config.validate()?;

    let text = read_from_file(&args.file)?;
    let tokens = tokenize(&text);

    let mut filter = match &args.language {
        Some(language) => StopwordFilter::new(language),
        None => StopwordFilter::empty(),
    };
    filter.add_stopwords(&args.config.stopwords);
    let content_words = remove_stop_words(&tokens, &filter);

    if verbose {
        println!(
            "{} tokens, {} after stopword removal",
            tokens.len(),
            content_words.len()
        );
    }

    let frequencies = calculate_frequencies(&content_words);
    let top = get_top_n_words(&frequencies, args.config.top_n);
    println!("Top {} words:", top.len());
    for word in &top {
        println!("  {} ({})", word, frequencies.get(word));
    }

    let (left, right) = (
        args.config.left_context_size,
        args.config.right_context_size,
    );

    if args.adjacent {
        println!("Adjacent words of '{}':", args.word);
        for words in get_adjacent_words(&tokens, &args.word, left, right) {
            println!("  {}", words.join(" ... "));
        }
        return Ok(());
    }

    let left_sort = args.config.left_sort;
    let windows = if !args.sorted {
        get_concordance(&tokens, &args.word, left, right)
    } else if args.keep_duplicates {
        sort_concordance_stable(&tokens, &args.word, left, right, left_sort)
    } else {
        sort_concordance(&tokens, &args.word, left, right, left_sort)
    };

    println!("Concordance of '{}' ({} windows):", args.word, windows.len());
    for window in &windows {
        println!("  {}", window.join(" "));
    }

    if let Some(path) = &args.output {
        write_to_file(&windows, path)?;
        if verbose {
            println!("Saved to {}", path.display());
        }
    }
    Ok(())
}

fn run_plagiarism(
    original: PathBuf,
    suspicious: PathBuf,
    config: PlagiarismConfig,
    report: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    config.validate()?;

    let original_text = tokenize_by_lines(&read_from_file(&original)?);
    let suspicious_text = tokenize_by_lines(&read_from_file(&suspicious)?);

    if verbose {
        println!(
            "{} original sentences, {} suspicious sentences",
            original_text.len(),
            suspicious_text.len()
        );
    }

    if report || json {
        let stats = accumulate_diff_stats(&original_text, &suspicious_text, config.threshold)?;
        if json {
            println!("{}", stats.to_json()?);
        }
        if report {
            println!(
                "{}",
                create_diff_report(&original_text, &suspicious_text, &stats)
            );
        }
        return Ok(());
    }

    let score =
        calculate_text_plagiarism_score(&original_text, &suspicious_text, config.threshold)?;
    println!("Text plagiarism: {:.1}%", score * 100.0);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Command::Concordance {
            file,
            word,
            left,
            right,
            sort,
            keep_duplicates,
            adjacent,
            stopwords,
            language,
            top,
            config,
            output,
        } => {
            // A config file always sorts; --sort picks the side and overrides it.
            let sorted = sort.is_some() || config.is_some();
            let config = match config {
                Some(path) => read_from_file(&path)
                    .and_then(|json| ConcordanceConfig::from_json(&json)),
                None => Ok(ConcordanceConfig::new()
                    .with_context(left, right)
                    .with_top_n(top)),
            };
            config.and_then(|mut config| {
                if let Some(side) = sort {
                    config = config.with_left_sort(matches!(side, SortSide::Left));
                }
                if !stopwords.is_empty() {
                    config = config.with_stopwords(&stopwords);
                }
                run_concordance(
                    ConcordanceArgs {
                        file,
                        word,
                        config,
                        sorted,
                        keep_duplicates,
                        adjacent,
                        language,
                        output,
                    },
                    args.verbose,
                )
            })
        }
        Command::Plagiarism {
            original,
            suspicious,
            threshold,
            report,
            json,
        } => run_plagiarism(
            original,
            suspicious,
            PlagiarismConfig::new().with_threshold(threshold),
            report,
            json,
            args.verbose,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
