//! CLI module - Command-line interface definition and orchestration

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::counter::FrequencyMap;
use crate::core::file_reader::read_joined;
use crate::core::model::WordReport;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::tokenizer::{tokenize, words, SeparatorSet};

/// wordtally - count word frequencies in a text file and render a report.
#[derive(Parser, Debug)]
#[command(name = "wordtally")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordtally reads a text file, splits it into words on the fixed separator
set (space, comma, period, hyphen, exclamation mark), counts occurrences of
each distinct word (case-sensitive), and writes a report listing the words
alphabetically (case-insensitive) with their counts.

Output formats:
- html: a fixed-structure HTML table (default)
- text: a human-friendly plain-text table
- json: an array of {word, count} rows

When INPUT or --output is omitted, the missing path is prompted for on stdin.

Examples:
    wordtally notes.txt -o report.html
    wordtally notes.txt -o rows.json --format json --pretty
    wordtally notes.txt -o report.html --stats
"#
)]
pub struct Cli {
    /// Input text file to count words in.
    #[arg(
        value_name = "INPUT",
        long_help = "Input text file. Read in full before processing; lines are joined\n\
with a single space. If omitted, the path is prompted for on stdin."
    )]
    pub input: Option<PathBuf>,

    /// Output report file.
    #[arg(
        short,
        long,
        value_name = "OUTPUT",
        long_help = "Output report file. The report title and heading embed this path\n\
verbatim. If omitted, the path is prompted for on stdin."
    )]
    pub output: Option<PathBuf>,

    /// Output format (html/text/json).
    #[arg(
        long,
        default_value = "html",
        value_name = "FORMAT",
        long_help = "Select the output format for the report.\n\n\
Supported values:\n\
- html (default)\n\
- text\n\
- json"
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON output with indentation for human readability.\n\n\
Has no effect on html/text formats."
    )]
    pub pretty: bool,

    /// Print tally statistics to stderr.
    #[arg(
        long,
        long_help = "Print tally statistics (token, word and character totals) to stderr\n\
after the report is written. Never alters the report itself."
    )]
    pub stats: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        long_help = "Suppress the confirmation line printed to stderr after the report is\n\
written. The report file is still produced."
    )]
    pub quiet: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let input = match cli.input {
        Some(path) => path,
        None => prompt_for_path("Input file name: ")?,
    };
    let output = match cli.output {
        Some(path) => path,
        None => prompt_for_path("Output file name: ")?,
    };

    let text = read_joined(&input)?;

    let separators = SeparatorSet::standard();
    let counts = FrequencyMap::from_words(words(&text, separators));
    let report = WordReport::from_counts(output.display().to_string(), &counts);

    write_report(&report, &output, render_config)?;

    if cli.stats {
        print_stats(&text, &counts);
    }

    if !cli.quiet {
        eprintln!(
            "wrote {} ({} distinct words)",
            output.display(),
            report.len()
        );
    }

    Ok(())
}

/// Write the rendered report to the destination file in full
fn write_report(report: &WordReport, output: &Path, config: RenderConfig) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let renderer = Renderer::with_config(config);
    renderer
        .render_to(report, &mut writer)
        .with_context(|| format!("failed to write report: {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write report: {}", output.display()))?;

    Ok(())
}

/// Prompt on stdout and read one path from stdin
fn prompt_for_path(prompt: &str) -> Result<PathBuf> {
    print!("{}", prompt);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read file name from stdin")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("no file name given");
    }

    Ok(PathBuf::from(trimmed))
}

/// Print the tally summary to stderr
fn print_stats(text: &str, counts: &FrequencyMap) {
    let token_total = tokenize(text, SeparatorSet::standard()).count();

    eprintln!("{}", "Tally Statistics".bold());
    eprintln!("═══════════════════════════════════════");
    eprintln!("  Word tokens:    {}", counts.total());
    eprintln!("  Distinct words: {}", counts.len());
    eprintln!("  All tokens:     {}", token_total);
    eprintln!("  Characters:     {}", text.chars().count());
    eprintln!("═══════════════════════════════════════");
}
