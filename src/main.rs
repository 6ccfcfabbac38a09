use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use nldbml::synth::Generator;
use nldbml::{Compiler, DetailLevel};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nldbml", about = "Compile plain-English schema descriptions to DBML, SQL and diagrams")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    #[arg(long, short = 'i', global = true)]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(long, short = 'o', global = true)]
    output: Option<PathBuf>,

    /// Schema name
    #[arg(long, short = 'n', env = "NLDBML_SCHEMA_NAME", default_value = "database", global = true)]
    name: String,

    /// Diagram detail level: tables, pk, pk_fk, all
    #[arg(long, short = 'd', default_value = "all", global = true)]
    detail: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// DBML markup
    Dbml,
    /// SQL migration
    Sql {
        /// postgresql, mysql or sqlite
        #[arg(long, env = "NLDBML_DIALECT", default_value = "postgresql")]
        dialect: String,
    },
    /// Mermaid erDiagram code
    Mermaid,
    /// ASCII box view
    Ascii,
    /// HTML table view
    Html,
    /// Synthetic rows as JSON
    Data {
        /// Rows per table
        #[arg(long, default_value_t = 10)]
        rows: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Schema statistics as JSON
    Summary,
    /// Report integrity problems; exits with 2 when any are found
    Validate,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {message}");
    process::exit(1);
}

fn read_input(path: Option<&PathBuf>) -> String {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("failed to read {}: {e}", path.display()))),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| fail(format!("failed to read stdin: {e}")));
            buf
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let detail = DetailLevel::from_str(&cli.detail)
        .unwrap_or_else(|| fail(format!("invalid detail level: {}", cli.detail)));

    let input = read_input(cli.input.as_ref());
    let mut compiler = Compiler::new().with_detail(detail);
    compiler.compile(&input, &cli.name);

    let mut exit_code = 0;
    let rendered = match cli.command {
        Command::Dbml => compiler.to_dbml(),
        Command::Sql { dialect } => compiler.generate_migration(&dialect),
        Command::Mermaid => compiler.visualize_mermaid(),
        Command::Ascii => compiler.visualize_ascii(),
        Command::Html => compiler.visualize_html(),
        Command::Data { rows, seed } => {
            let mut generator = seed.map(Generator::seeded).unwrap_or_default();
            compiler
                .generate_test_data_with(&mut generator, rows)
                .map(|data| serde_json::to_string_pretty(&data).unwrap_or_else(|e| fail(e)))
        }
        Command::Summary => compiler
            .summary()
            .map(|summary| serde_json::to_string_pretty(&summary).unwrap_or_else(|e| fail(e))),
        Command::Validate => compiler.validate().map(|(valid, errors)| {
            if valid {
                "Schema is valid".to_string()
            } else {
                exit_code = 2;
                errors.join("\n")
            }
        }),
    };

    let text = rendered.unwrap_or_else(|e| fail(e));
    match cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, format!("{text}\n")) {
                fail(format!("failed to write {}: {e}", path.display()));
            }
        }
        None => println!("{text}"),
    }

    process::exit(exit_code);
}
