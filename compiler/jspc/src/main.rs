//! Page-template compiler CLI.
//!
//! `jspc demo/pages/Index.jsp` writes `demo/pages/Index.java` holding a
//! `demo.pages.Index` class whose `toString()` renders the page.

use std::path::Path;

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=jspc=debug`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .init();
    }
}

fn print_usage() {
    eprintln!("Usage: jspc <file.jsp>...");
    eprintln!();
    eprintln!("Compiles each page template into a .java source file next to it.");
    eprintln!("The qualified class name is derived from the template path, so run");
    eprintln!("from the source root: demo/pages/Index.jsp -> demo.pages.Index");
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    if matches!(args[1].as_str(), "-h" | "--help" | "help") {
        print_usage();
        return;
    }

    for file in &args[1..] {
        match jspc::compile_file(Path::new(file)) {
            Ok(output) => println!("{file} -> {}", output.display()),
            Err(error) => {
                eprintln!("error: {error}");
                std::process::exit(1);
            }
        }
    }
}
