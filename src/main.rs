use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graphql_cypher::{
    config::TranslatorConfig, selection::FlatSelectionCompiler,
    utils::id_generation::UuidGenerator, ResolvedOperation, Translator,
};

/// graphql-cypher - Translate a resolved GraphQL operation into Cypher
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Resolved operation as JSON (reads stdin when omitted or "-")
    operation: Option<PathBuf>,

    /// YAML configuration file (defaults to GRAPHQL_CYPHER_* environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the generated query
    #[arg(long)]
    pretty: bool,
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize logger - defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => TranslatorConfig::from_yaml_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => TranslatorConfig::from_env().context("loading configuration from environment")?,
    };

    let input = match &cli.operation {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading operation from {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading operation from stdin")?;
            buf
        }
    };
    let operation: ResolvedOperation =
        serde_json::from_str(&input).context("parsing resolved operation")?;
    log::info!(
        "Translating {} '{}'",
        if operation.is_mutation() { "mutation" } else { "query" },
        operation.field_name
    );

    let selection_compiler = FlatSelectionCompiler;
    let id_generator = UuidGenerator;
    let query = Translator::new(&selection_compiler, &id_generator)
        .with_config(config)
        .translate(&operation)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&query)?
    } else {
        serde_json::to_string(&query)?
    };
    println!("{}", output);
    Ok(())
}
