use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use clap::Parser;
use plex::{lexer::lexer::Lexer, render, RenderOptions};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Tokenizer for a small Pascal-like language")]
struct Cli {
    /// Source file to tokenize
    file_path: PathBuf,

    /// Leave comment tokens out of the printed listing
    #[arg(long)]
    hide_comments: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = match read_to_string(&cli.file_path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %cli.file_path.display(), "failed to read source file");
            eprintln!("Failed to read {}: {}", cli.file_path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let options = RenderOptions {
        display_comments: !cli.hide_comments,
    };

    let mut lexer = Lexer::new(source);
    let tokens = lexer.get_tokens();

    info!(
        tokens = tokens.len(),
        errors = lexer.errors().len(),
        "tokenized {}",
        cli.file_path.display()
    );

    print!("{}", render(&lexer, &tokens, &options));

    if lexer.status() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
