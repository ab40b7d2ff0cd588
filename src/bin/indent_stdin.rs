//! Reads HTML from stdin and writes it back to stdout, indented.
//!
//! Set `RUST_LOG=debug` to see parse diagnostics on stderr.

use std::io::{self, Read};

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        std::process::exit(1);
    }

    let tree = rs_htree::parse_bytes(&html);

    if let Err(err) = rs_htree::indentln(io::stdout().lock(), tree.root(), 0) {
        eprintln!("Failed to render: {err}");
        std::process::exit(1);
    }
}
