//! `tidy_lyrics` - analyze a corpus of song lyrics from the command line.
//!
//! Usage: tidy_lyrics <songs.json | lyrics_dir> [--out DIR] [--stop-words FILE]
//!        [--no-stop-words] [--lexicon FILE] [--top N]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use tidy_lyrics::analysis::Pipeline;
use tidy_lyrics::config::Config;
use tidy_lyrics::constants::env::TOP_WORDS;
use tidy_lyrics::constants::export::{LINES_FILE, REPORTS_FILE};
use tidy_lyrics::corpus;
use tidy_lyrics::export;
use tidy_lyrics::lyrics::parse_songs;
use tidy_lyrics::sentiment::Lexicon;
use tidy_lyrics::tidy::StopWords;

const USAGE: &str = "usage: tidy_lyrics <songs.json | lyrics_dir> [--out DIR] [--stop-words FILE] [--no-stop-words] [--lexicon FILE] [--top N]";

/// Command-line options. Unset options fall back to the loaded `Config`.
#[derive(Debug, Default)]
struct Args {
    input: PathBuf,
    out: Option<PathBuf>,
    stop_words: Option<PathBuf>,
    no_stop_words: bool,
    lexicon: Option<PathBuf>,
    top: Option<usize>,
}

impl Args {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut parsed = Self::default();
        let mut input = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => parsed.out = Some(PathBuf::from(value(&mut args, "--out")?)),
                "--stop-words" => {
                    parsed.stop_words = Some(PathBuf::from(value(&mut args, "--stop-words")?));
                }
                "--no-stop-words" => parsed.no_stop_words = true,
                "--lexicon" => parsed.lexicon = Some(PathBuf::from(value(&mut args, "--lexicon")?)),
                "--top" => {
                    let raw = value(&mut args, "--top")?;
                    let top = raw
                        .parse()
                        .with_context(|| format!("invalid --top value {raw:?}"))?;
                    parsed.top = Some(top);
                }
                "-h" | "--help" => bail!(USAGE),
                other if other.starts_with("--") => bail!("unknown option {other}\n{USAGE}"),
                other => {
                    if input.replace(PathBuf::from(other)).is_some() {
                        bail!("only one input path is accepted\n{USAGE}");
                    }
                }
            }
        }

        let Some(input) = input else {
            bail!(USAGE);
        };
        parsed.input = input;
        Ok(parsed)
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().with_context(|| format!("{flag} needs a value"))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tidy_lyrics=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    // `--top` wins over the environment, so its variable is not parsed at all
    let overridden: &[&str] = if args.top.is_some() { &[TOP_WORDS] } else { &[] };
    let config = Config::load_except(overridden).context("Failed to load config")?;
    tracing::debug!("{} {} starting", config.app_name(), config.app_version());

    let mut pipeline = Pipeline::new().with_top_words(args.top.unwrap_or(config.top_words));

    if !args.no_stop_words {
        let stop_words = match args.stop_words.as_ref().or(config.stop_words_path.as_ref()) {
            Some(path) => StopWords::load(path)
                .with_context(|| format!("Failed to load stop words from {}", path.display()))?,
            None => StopWords::english(),
        };
        pipeline = pipeline.with_stop_words(stop_words);
    }

    if let Some(path) = args.lexicon.as_ref().or(config.lexicon_path.as_ref()) {
        let lexicon = Lexicon::load(path)
            .with_context(|| format!("Failed to load lexicon from {}", path.display()))?;
        pipeline = pipeline.with_lexicon(lexicon);
    }

    let songs = corpus::load(&args.input)
        .with_context(|| format!("Failed to load songs from {}", args.input.display()))?;
    let parsed = parse_songs(&songs, pipeline.parser());
    let reports = pipeline.report_all(&parsed);

    for report in &reports {
        let top = report
            .top_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect::<Vec<_>>()
            .join(", ");
        let sentiment = report.sentiment.as_ref().map_or_else(String::new, |s| {
            format!(" | net {} | polarity {}", s.net_value, s.polarity())
        });
        println!(
            "{} - {} lines, {} words{sentiment}\n    {top}",
            report.title, report.line_count, report.word_count
        );
    }

    if let Some(out_dir) = args.out.or(config.output_dir) {
        export::write_lines_csv_file(&out_dir.join(LINES_FILE), &parsed)?;
        export::write_reports_json_file(&out_dir.join(REPORTS_FILE), &reports)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn test_parse_full_args() {
        let args =
            parse(&["songs.json", "--out", "out", "--lexicon", "afinn.csv", "--top", "3"]).unwrap();
        assert_eq!(args.input, PathBuf::from("songs.json"));
        assert_eq!(args.out, Some(PathBuf::from("out")));
        assert_eq!(args.lexicon, Some(PathBuf::from("afinn.csv")));
        assert_eq!(args.top, Some(3));
        assert!(!args.no_stop_words);
    }

    #[test]
    fn test_parse_requires_input() {
        assert!(parse(&["--top", "3"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(parse(&["x.json", "--top", "many"]).is_err());
        assert!(parse(&["x.json", "--out"]).is_err());
        assert!(parse(&["x.json", "--bogus"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}
