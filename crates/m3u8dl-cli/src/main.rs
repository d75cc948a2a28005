mod cli;

fn main() {
    // Parse CLI, initialize logging, and run the pipeline.
    if let Err(err) = cli::run_from_args() {
        eprintln!("{} error: {:#}", m3u8dl_core::APP_NAME, err);
        std::process::exit(1);
    }
}
