//! KuponGo performance analyzer entry point.

fn main() {
    if let Err(e) = kupongo_perf_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
