//! Finch CLI - container development on a managed virtual machine

use clap::Parser;

use finch_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: cannot start async runtime: {e}");
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(cli.run());
    // An interrupted confirmation leaves a stdin read parked on a blocking
    // thread; do not wait for it.
    runtime.shutdown_background();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
