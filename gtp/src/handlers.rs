use anyhow::{Context, bail};
use clap::ArgMatches;
use colored::Colorize;
use gtp_core::{DotGraph, WalkOptions, execute_walks, generate_walk_report};
use gtp_scanner::{Topic, default_terminal_labels};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use url::Url;

/// Seed topics used when none are given on the command line.
pub const DEFAULT_TOPICS: &[&str] = &[
    "https://en.wikipedia.org/wiki/Xkcd",
    "https://en.wikipedia.org/wiki/GNU_Project",
    "https://en.wikipedia.org/wiki/Bertrand_Russell",
    "https://en.wikipedia.org/wiki/Plague_of_Justinian",
    "https://en.wikipedia.org/wiki/Spark_plug",
    "https://en.wikipedia.org/wiki/Quantum_entanglement",
    "https://en.wikipedia.org/wiki/Toilet_paper",
];

pub fn default_topics() -> Vec<String> {
    DEFAULT_TOPICS.iter().map(|s| s.to_string()).collect()
}

/// Choose the graph file name: a single requested topic names the file
/// after its final path segment, otherwise the fixed default is used.
pub fn output_filename(seeds: &[String]) -> String {
    if seeds.len() == 1 {
        let label = Topic::new(seeds[0].as_str()).display_label().to_string();
        if !label.is_empty() {
            return format!("{}.dot", label);
        }
    }
    "gtp_graph.dot".to_string()
}

/// Look for the graphviz `dot` program on PATH.
pub fn dot_available() -> bool {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join("dot").is_file()))
        .unwrap_or(false)
}

/// Render the graph file with `dot -O`, one pass per output format.
/// Returns the files graphviz produced.
pub fn render_graph(path: &Path) -> Vec<PathBuf> {
    let mut rendered = Vec::new();
    for format in ["pdf", "svg", "png"] {
        let status = Command::new("dot")
            .arg(format!("-T{}", format))
            .arg("-O")
            .arg(path)
            .status();
        match status {
            Ok(status) if status.success() => {
                rendered.push(PathBuf::from(format!("{}.{}", path.display(), format)));
            }
            Ok(status) => {
                eprintln!(
                    "{} dot -T{} exited with {}",
                    "[!]".yellow(),
                    format,
                    status
                );
            }
            Err(e) => {
                eprintln!("{} Failed to run dot -T{}: {}", "[!]".yellow(), format, e);
            }
        }
    }
    rendered
}

pub async fn handle_walk(matches: &ArgMatches) -> anyhow::Result<()> {
    let seeds: Vec<String> = matches
        .get_many::<Url>("TOPICS")
        .map(|urls| urls.map(|u| u.as_str().to_string()).collect())
        .unwrap_or_else(default_topics);
    let max_hops = *matches.get_one::<usize>("max-hops").unwrap_or(&100);
    let timeout_secs = *matches.get_one::<u64>("timeout").unwrap_or(&10);
    let json = matches.get_flag("json");
    let no_render = matches.get_flag("no-render");
    let quiet = matches.get_flag("quiet");

    let output_path = match matches.get_one::<String>("output") {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        None => PathBuf::from(output_filename(&seeds)),
    };

    if !no_render && !dot_available() {
        bail!(
            "the program \"dot\" does not seem to be installed; \
            install it with your package manager (e.g. \"apt install graphviz\") \
            or pass --no-render"
        );
    }

    if !quiet && !json {
        println!("Walking {} seed topic(s)", seeds.len());
        println!("Hop bound: {}", max_hops);
        println!("Graph file: {}\n", output_path.display());
    }

    let mut graph = DotGraph::create(&output_path)
        .with_context(|| format!("Failed to create graph file {}", output_path.display()))?;

    let options = WalkOptions {
        seeds,
        max_sequence_len: max_hops + 1,
        terminal_labels: default_terminal_labels(),
        timeout_secs,
        show_progress_bars: !quiet && !json,
    };

    let progress_callback: Option<gtp_core::WalkProgressCallback> = if json {
        None
    } else {
        Some(Arc::new(|msg: String| {
            println!("{}", msg);
        }))
    };

    let outcomes = execute_walks(options, &mut graph, progress_callback)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    graph.finalize().context("Failed to finalize graph file")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print!("{}", generate_walk_report(&outcomes));
        println!(
            "\n{} Graph information written to {}",
            "✓".green().bold(),
            output_path.display().to_string().bright_white()
        );
    }

    if !no_render {
        let rendered = render_graph(&output_path);
        if !json {
            for file in rendered {
                println!(
                    "{} Rendered {}",
                    "✓".green().bold(),
                    file.display().to_string().bright_white()
                );
            }
        }
    }

    Ok(())
}
