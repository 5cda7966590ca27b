use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};

use lottiec::pipeline::{DiagnosticsSink, TranslationOptions, run_batch, run_file};
use lottiec::Language;

#[derive(Parser, Debug)]
#[command(name = "lottiec", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate composition files and write generated source.
    Generate(GenerateArgs),
    /// Print layer/mask/gradient statistics for one composition.
    Stats(StatsArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input composition JSON files.
    inputs: Vec<PathBuf>,

    /// Target language (csharp, cpp). May repeat.
    #[arg(long = "language", default_value = "csharp")]
    languages: Vec<String>,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Treat any issue as a hard failure for that file.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Skip the semantic tree-rewriting optimizer.
    #[arg(long, default_value_t = false)]
    disable_translation_optimizer: bool,

    /// Skip structural dedup and shared-node naming.
    #[arg(long, default_value_t = false)]
    disable_codegen_optimizer: bool,

    /// Suppress run-varying content so output is byte-reproducible.
    #[arg(long, default_value_t = false)]
    test_mode: bool,
}

#[derive(Parser, Debug)]
struct StatsArgs {
    /// Input composition JSON file.
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    if args.inputs.is_empty() {
        bail!("no input files");
    }

    let languages = args
        .languages
        .iter()
        .map(|l| l.parse::<Language>().map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let options = TranslationOptions {
        languages,
        strict: args.strict,
        disable_translation_optimizer: args.disable_translation_optimizer,
        disable_codegen_optimizer: args.disable_codegen_optimizer,
        test_mode: args.test_mode,
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let sink = DiagnosticsSink::stderr();
    let outcome = run_batch(&args.inputs, &options, &sink);

    for file in &outcome.files {
        let Ok(result) = &file.result else { continue };
        for output in &result.outputs {
            for generated in &output.files {
                let path = args.out_dir.join(&generated.file_name);
                std::fs::write(&path, &generated.text)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("{}", path.display());
            }
            for asset in &output.asset_references {
                eprintln!(
                    "{}: references external asset {asset}",
                    file.path.display()
                );
            }
        }
    }

    if !outcome.all_succeeded() {
        bail!("one or more files failed");
    }
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    let result = run_file(&args.input, &TranslationOptions::default())?;
    println!("{}", serde_json::to_string_pretty(&result.stats)?);
    Ok(())
}
