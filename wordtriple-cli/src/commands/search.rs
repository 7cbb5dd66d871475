//! Search command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordtriple_core::{
    ExecutionMode, SearchConfig, SearchStats, TripleResult, TripleSearch, Vocabulary,
    WordQualityFilter,
};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::load_words;
use crate::output::{self, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Word list files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: json]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Minimum letters the bridge word must share with the seam
    #[arg(long, value_name = "N")]
    pub min_overlap: Option<usize>,

    /// Stop after this many triples
    #[arg(long, value_name = "N")]
    pub max_results: Option<usize>,

    /// Search left words in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel search
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Drop words that make poor puzzle answers before searching
    #[arg(long)]
    pub curate: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print search statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting triple search");
        log::debug!("Arguments: {self:?}");

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let search_config = self.search_config(&file_config)?;
        let format = self.output_format(&file_config)?;

        let mut words = load_words(&self.input)?;
        if self.curate {
            let filter = WordQualityFilter::new().map_err(CliError::from)?;
            let before = words.len();
            words.retain(|w| filter.accepts(w));
            log::info!("Curation kept {} of {} entries", words.len(), before);
        }

        let vocabulary = Vocabulary::normalize(&words);
        let search = TripleSearch::new(&vocabulary, search_config).map_err(CliError::from)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(vocabulary.len());
        let result = search.run().map_err(CliError::from)?;
        progress.finish(result.triples.len());

        self.write_output(&result.triples, format, file_config.output.pretty)?;

        if self.stats {
            eprint!("{}", render_stats(&result.stats));
        }

        Ok(())
    }

    /// Merge command-line flags over the configuration file
    fn search_config(&self, file: &CliConfig) -> Result<SearchConfig> {
        let parallel = self.parallel || file.performance.parallel;
        let threads = self
            .threads
            .or((file.performance.threads > 0).then_some(file.performance.threads));

        let config = SearchConfig::builder()
            .min_overlap(self.min_overlap.unwrap_or(file.search.min_overlap))
            .max_results(self.max_results.unwrap_or(file.search.max_results))
            .execution_mode(if parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Sequential
            })
            .threads(threads)
            .build()
            .map_err(CliError::from)?;

        Ok(config)
    }

    fn output_format(&self, file: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => Ok(file.output.format.parse()?),
        }
    }

    fn write_output(
        &self,
        triples: &[TripleResult],
        format: OutputFormat,
        pretty: bool,
    ) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Json => Box::new(JsonFormatter::with_pretty(writer, pretty)),
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        };

        output::write_all(formatter.as_mut(), triples)?;

        if let Some(path) = &self.output {
            log::info!("Wrote {} triples to {}", triples.len(), path.display());
        }
        Ok(())
    }
}

/// Human-readable statistics block
fn render_stats(stats: &SearchStats) -> String {
    let mode = stats.mode_used.map_or("none", |m| m.name());
    let r = &stats.rejections;
    format!(
        "Vocabulary:      {} words ({} prefixes)\n\
         Pairs examined:  {}\n\
         Candidates:      {}\n\
         Duplicates:      {}\n\
         Rejected:        {} (same word {}, edge letters {}, containment {}, bridge miss {})\n\
         Truncated:       {}\n\
         Mode:            {}\n\
         Elapsed:         {:.3?}\n",
        stats.vocabulary_size,
        stats.index_keys,
        stats.pairs_examined,
        stats.candidates_scanned,
        stats.duplicates,
        r.total(),
        r.same_word,
        r.edge_letters,
        r.containment,
        r.bridge_miss,
        stats.truncated,
        mode,
        stats.duration,
    )
}
