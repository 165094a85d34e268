use blext_meta::{cli, logging};

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }

    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);

        // Print the error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("Caused by: {}", err);
            source = err.source();
        }

        std::process::exit(1);
    }
}
