use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waypath_cli::commands::cities::handle_cities_command;
use waypath_cli::commands::route::{handle_route_command, MetricArg, RouteCommandArgs};
use waypath_cli::output::OutputFormat;
use waypath_lib::{resolve_topology_path, DEFAULT_HOP_CUTOFF};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plan multi-stop journeys over a city topology and report the routes"
)]
struct Cli {
    /// Topology JSON file (defaults to $WAYPATH_TOPOLOGY, then ./topology.json).
    #[arg(long, global = true)]
    topology_file: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route visiting every city in the journey.
    Route {
        /// Comma separated list of cities; the first is the start, the last the destination.
        #[arg(long)]
        journey: String,
        /// Visit the cities in exactly the order given instead of nearest first.
        #[arg(long)]
        strict: bool,
        /// Leg cost used when building the route.
        #[arg(long, value_enum, default_value_t = MetricArg::Weight)]
        metric: MetricArg,
        /// Also run the all-pairs coverage and bounded simple-path searches.
        #[arg(long)]
        extra: bool,
        /// Maximum links per path in the bounded simple-path search.
        #[arg(long, default_value_t = DEFAULT_HOP_CUTOFF)]
        hop_cutoff: usize,
        /// Write a Graphviz DOT diagram with the route highlighted.
        #[arg(long)]
        diagram_file: Option<PathBuf>,
    },
    /// Print every city in the topology in alphabetical order.
    Cities,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let topology_path = resolve_topology_path(cli.topology_file.as_deref());

    match cli.command {
        Command::Route {
            journey,
            strict,
            metric,
            extra,
            hop_cutoff,
            diagram_file,
        } => {
            let args = RouteCommandArgs {
                journey,
                strict,
                metric,
                extra,
                hop_cutoff,
                diagram_file,
            };
            handle_route_command(&topology_path, cli.format, &args)
        }
        Command::Cities => handle_cities_command(&topology_path, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
