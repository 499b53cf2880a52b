use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use veridoc::config::{self, RunConfig};
use veridoc::pipeline::analysis::OllamaEvaluator;
use veridoc::pipeline::chunker::ChunkConfig;
use veridoc::pipeline::reader::DocumentKind;
use veridoc::pipeline::runner::DocumentAnalyzer;

#[derive(Parser, Debug)]
#[command(
    name = "veridoc",
    version,
    about = "Analyze a document against a catalog of named compliance rules"
)]
struct Cli {
    /// Directory containing the input document; both exports land here too
    #[arg(short = 'i', long)]
    input_dir: PathBuf,

    /// Input filename within the input directory
    #[arg(short = 'n', long)]
    input_file: String,

    /// Input document type
    #[arg(short = 'f', long, value_enum)]
    file_type: FileType,

    /// Rule catalog: a JSON object mapping rule name to template text
    #[arg(long, default_value = "templates/rules.json")]
    rules: PathBuf,

    /// Chunk budget in characters for oversized documents
    #[arg(long, default_value_t = ChunkConfig::default().max_chars)]
    max_chunk_chars: usize,

    /// Characters shared between consecutive chunks
    #[arg(long, default_value_t = ChunkConfig::default().overlap_chars)]
    overlap_chars: usize,

    /// Base URL of the Ollama instance used for evaluation
    #[arg(
        long,
        env = "VERIDOC_OLLAMA_URL",
        default_value = "http://localhost:11434"
    )]
    ollama_url: String,

    /// Model name passed to the evaluation backend
    #[arg(long, env = "VERIDOC_MODEL", default_value = "llama3")]
    model: String,

    /// Per-call timeout for evaluation requests, in seconds
    #[arg(long, default_value_t = 300)]
    timeout_secs: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FileType {
    Pdf,
    Txt,
}

impl From<FileType> for DocumentKind {
    fn from(value: FileType) -> Self {
        match value {
            FileType::Pdf => DocumentKind::Pdf,
            FileType::Txt => DocumentKind::Text,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

    let run = RunConfig {
        input_dir: cli.input_dir,
        input_filename: cli.input_file,
        document_kind: cli.file_type.into(),
        catalog_path: cli.rules,
        chunking: ChunkConfig {
            max_chars: cli.max_chunk_chars,
            overlap_chars: cli.overlap_chars,
        },
    };

    let evaluator = OllamaEvaluator::new(&cli.ollama_url, &cli.model, cli.timeout_secs);
    let analyzer = DocumentAnalyzer::new(Box::new(evaluator));

    match analyzer.run(&run) {
        Ok(outcome) => {
            tracing::info!(
                rules = outcome.rules_evaluated,
                chunks = outcome.chunk_count,
                structured = %outcome.structured_path.display(),
                tabular = %outcome.tabular_path.display(),
                "analysis complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "analysis failed");
            ExitCode::FAILURE
        }
    }
}
