pub mod graph;
pub mod run;

use colored::Colorize;

pub use graph::{DotGraph, Edge, edges_from_walk};
pub use run::{SeedOutcome, WalkOptions, WalkProgressCallback, execute_walks, generate_walk_report};

pub fn print_banner() {
    let banner = r#"
        __
  ___ _/ /_____
 / _ `/ __/ _ \
 \_, /\__/ .__/
/___/   /_/
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "{}  {}\n",
        "getting to philosophy".bright_white().bold(),
        concat!("v", env!("CARGO_PKG_VERSION")).bright_black()
    );
}
