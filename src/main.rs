use clap::Parser;
use mvp_counter::app;
use mvp_counter::cli::Cli;
use mvp_counter::logging::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    if let Err(err) = app::run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
