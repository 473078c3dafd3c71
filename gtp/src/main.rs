use gtp::handlers;
use gtp_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let cmd = commands::command_argument_builder();
    let matches = cmd.get_matches();

    if !matches.get_flag("quiet") {
        print_banner();
    }

    if let Err(e) = handlers::handle_walk(&matches).await {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}
