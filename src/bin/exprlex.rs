use std::{
    cell::RefCell,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use exprlex::{
    base::{
        self,
        log::{Message, Severity},
        source_file::SourceFile,
        FsProvider, Handler,
    },
    lexical::InvalidToken,
    Lexer, TokenStream,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Lists the tokens of an expression source file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the file to tokenize
    input: PathBuf,

    /// Path to the file the token listing is written to
    output: PathBuf,
}

/// Writes tokens and diagnostics to the same output, in the order they are produced.
struct Listing<W: Write> {
    out: RefCell<W>,
    failure: RefCell<Option<std::io::Error>>,
}

impl<W: Write> Listing<W> {
    fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            failure: RefCell::new(None),
        }
    }

    fn line(&self, line: impl std::fmt::Display) {
        if self.failure.borrow().is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out.borrow_mut(), "{line}") {
            *self.failure.borrow_mut() = Some(err);
        }
    }

    fn finish(self) -> base::Result<()> {
        if let Some(err) = self.failure.into_inner() {
            return Err(err.into());
        }
        self.out.into_inner().flush()?;
        Ok(())
    }
}

impl<W: Write> Handler<InvalidToken> for Listing<W> {
    fn receive(&self, error: InvalidToken) {
        self.line(error);
    }
}

fn run(cli: &Cli) -> base::Result<()> {
    let source_file = SourceFile::load(&cli.input, &FsProvider::default())?;
    info!(
        path = ?source_file.path_relative(),
        "read {} line(s)",
        source_file.line_amount()
    );

    let output = File::create(&cli.output)
        .map_err(|err| base::Error::IoError(format!("{}: {err}", cli.output.display())))?;
    let listing = Listing::new(BufWriter::new(output));

    let invalid = TokenStream::scan(
        Lexer::new(source_file.iter()),
        |token| listing.line(token),
        |err| {
            if let Some(location) = source_file.get_location(err.start()) {
                debug!(line = location.line, column = location.column, "invalid token");
            }
            listing.receive(err);
        },
    );

    info!(invalid, "wrote token listing to {}", cli.output.display());

    listing.finish()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e}");
        eprintln!("{}", Message::new(Severity::Error, e));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
