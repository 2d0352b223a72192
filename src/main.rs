use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use garbell::output::{default_output_dir, write_report};
use garbell::reader::{CorpusReader, ReaderConfig};
use garbell::wordlists;
use garbell::{
    collect_candidates, AcceptAll, CatalanNumbers, DictionarySpeller, FilterContext,
    FilterOptions, FilterPipeline, HeuristicTagger, RuleSplitter, RunStats, SpellChecker,
};

#[derive(Parser, Debug)]
#[command(name = "garbell")]
#[command(about = "Sentence-corpus filter for speech-corpus construction")]
#[command(version)]
struct Args {
    /// Input corpus, one or more raw sentences per line
    #[arg(short, long)]
    file: PathBuf,

    /// Word list that force-excludes any sentence containing an entry
    #[arg(short, long)]
    list: Option<PathBuf>,

    /// Output directory (default: resultats_filtre_<stem>_<timestamp> next to the input)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Reject sentences containing digits instead of transcribing them
    #[arg(short, long)]
    num: bool,

    /// Keep only sentences with at least one verb
    #[arg(short, long)]
    verb: bool,

    /// Keep only sentences ending in terminal punctuation
    #[arg(short, long)]
    punt: bool,

    /// Keep only sentences starting with an uppercase letter
    #[arg(short, long)]
    cap: bool,

    /// Exclude sentences containing a detected proper name
    #[arg(long)]
    noms_propis: bool,

    /// Surname list used by --noms-propis
    #[arg(long, default_value = "data/cognoms_list.txt")]
    surnames: PathBuf,

    /// Spelling word list; without it the spelling gate accepts everything
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Suppress the console progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if !args.file.exists() {
        anyhow::bail!("Input corpus does not exist: {}", args.file.display());
    }

    let options = FilterOptions {
        numbers: args.num,
        verb: args.verb,
        punctuation: args.punt,
        capitals: args.cap,
        proper_nouns: args.noms_propis,
    };

    // The surname list only matters when the name gate is active; then a
    // missing file is a configuration error, not a soft default.
    let surnames = if args.noms_propis {
        wordlists::load_surnames(&args.surnames)?
    } else {
        HashSet::new()
    };
    let exclusion_words = wordlists::load_exclusion_words(args.list.as_deref())?;
    let speller: Box<dyn SpellChecker> = match &args.dict {
        Some(path) => Box::new(DictionarySpeller::from_file(path)?),
        None => Box::new(AcceptAll),
    };
    let tagger = HeuristicTagger::new();
    let transcriber = CatalanNumbers;

    let start_time = Instant::now();
    let reader = CorpusReader::new(ReaderConfig::default());
    let (lines, read_stats) = reader.read_lines(&args.file).await?;

    let splitter = RuleSplitter::new();
    let candidates = collect_candidates(&lines, &splitter);
    info!(
        "Collected {} candidate sentences from {} lines",
        candidates.len(),
        read_stats.lines_read
    );

    let ctx = FilterContext {
        options: &options,
        tagger: &tagger,
        speller: speller.as_ref(),
        transcriber: &transcriber,
        surnames: &surnames,
        exclusion_words: &exclusion_words,
    };
    let mut pipeline = FilterPipeline::new(ctx);

    let bar = if args.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(candidates.len() as u64)
    };
    for candidate in &candidates {
        pipeline.process(candidate);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let mut report = pipeline.into_report();
    report.total_lines = read_stats.lines_read;
    if !report.discarded_tokens.is_empty() {
        debug!(
            "Spelling gate discarded {} tokens",
            report.discarded_tokens.len()
        );
    }

    let stem = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "corpus".to_string());

    for line in options.selected_lines(&stem) {
        println!("{line}");
    }
    println!("---------");
    for line in report.statistics_lines() {
        println!("{line}");
    }

    let out_dir = args
        .dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.file));
    let run_stats = RunStats::from_report(
        &report,
        args.file.display().to_string(),
        options.selected_lines(&stem),
        start_time.elapsed().as_millis() as u64,
    );
    write_report(&out_dir, &stem, &options, &report, &run_stats).await?;

    println!("Resultats escrits a {}", out_dir.display());
    Ok(())
}
