use clap::arg;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("gtp")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("gtp")
        .styles(CLAP_STYLING)
        .about(
            "Follow the first in-body link of each seed article, hop by hop, until \
            Philosophy (or a cycle, or the hop bound), and emit the chains as a \
            graphviz digraph.",
        )
        .arg(
            arg!([TOPICS] ... "Seed topic URLs")
                .required(false)
                .value_parser(clap::value_parser!(Url))
                .help("Seed topic URLs (defaults to a built-in topic list)"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help(
                    "Output graph file (default: named after a single topic, \
                    otherwise gtp_graph.dot)",
                ),
        )
        .arg(
            arg!(--"max-hops" <N>)
                .required(false)
                .help("Maximum hops to follow from each seed")
                .value_parser(clap::value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(--"json")
                .required(false)
                .help("Print the run report as JSON instead of text")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"no-render")
                .required(false)
                .help("Skip rendering the graph with graphviz")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
}
