//! Command implementations and argument parsing for the signet CLI.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::SmallRng};
use signet_core::{
    AdjacencyMatrix, BarabasiAlbertGenerator, DEFAULT_ATTACHMENTS_PER_NODE, DEFAULT_CORE_SIZE,
    ErdosRenyiGenerator, GraphError, SignedEdgeSet,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::seed::{mix_seed, resolve_seed};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "signet", about = "Generate and analyse random signed graphs.")]
pub struct Cli {
    /// Seed for the random source; drawn from OS entropy when omitted.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Raise log verbosity; repeat for more detail.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one Erdős–Rényi graph.
    ErdosRenyi(ErdosRenyiArgs),
    /// Generate one Barabási–Albert graph.
    BarabasiAlbert(BarabasiAlbertArgs),
    /// Generate a batch of graphs and write each to its own file.
    Sweep(SweepCommand),
}

/// Graph model used to produce an edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// Independent edge inclusion.
    ErdosRenyi,
    /// Preferential attachment.
    BarabasiAlbert,
}

impl Model {
    /// Returns the command-line name of the model.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ErdosRenyi => "erdos-renyi",
            Self::BarabasiAlbert => "barabasi-albert",
        }
    }
}

/// Encodings available for a generated graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Dense adjacency matrix: 0 = none, 1 = positive, 2 = negative.
    #[default]
    Matrix,
    /// One `source<TAB>target<TAB>sign` line per edge.
    Edges,
    /// Counts and the positive-edge ratio.
    Summary,
}

/// Output options shared by the single-graph commands.
#[derive(Debug, Args, Clone, Default)]
pub struct OutputArgs {
    /// Flip this many randomly chosen negative edges to positive.
    #[arg(long)]
    pub recolor: Option<usize>,

    /// Encoding of the generated graph.
    #[arg(long, value_enum, default_value_t = OutputFormat::Matrix)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Erdős–Rényi parameters.
#[derive(Debug, Args, Clone)]
pub struct ErdosRenyiArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Probability that any pair of nodes is joined.
    #[arg(long = "edge-probability")]
    pub edge_probability: f64,

    /// Probability that an edge is positive.
    #[arg(long = "positive-probability")]
    pub positive_probability: f64,

    /// Output options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Barabási–Albert parameters.
#[derive(Debug, Args, Clone)]
pub struct BarabasiAlbertArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Probability that an edge is positive.
    #[arg(long = "positive-probability")]
    pub positive_probability: f64,

    /// Size of the initial complete graph.
    #[arg(long = "core-size", default_value_t = DEFAULT_CORE_SIZE)]
    pub core_size: usize,

    /// Edges attached by every arriving node.
    #[arg(long, default_value_t = DEFAULT_ATTACHMENTS_PER_NODE)]
    pub attachments: usize,

    /// Output options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Model to sweep.
    #[command(subcommand)]
    pub model: SweepModel,
}

/// Models supported by the `sweep` command.
#[derive(Debug, Subcommand, Clone)]
pub enum SweepModel {
    /// Sweep node counts and edge probabilities.
    ErdosRenyi(ErdosRenyiSweepArgs),
    /// Sweep node counts and attachment counts.
    BarabasiAlbert(BarabasiAlbertSweepArgs),
}

/// Erdős–Rényi sweep grid.
#[derive(Debug, Args, Clone)]
pub struct ErdosRenyiSweepArgs {
    /// Directory receiving the generated matrices.
    #[arg(long = "output-dir")]
    pub output_dir: PathBuf,

    /// Comma-separated node counts.
    #[arg(long, value_delimiter = ',', required = true)]
    pub sizes: Vec<usize>,

    /// Comma-separated edge probabilities.
    #[arg(long = "edge-probabilities", value_delimiter = ',', required = true)]
    pub edge_probabilities: Vec<f64>,

    /// Probability that an edge is positive.
    #[arg(long = "positive-probability")]
    pub positive_probability: f64,
}

/// Barabási–Albert sweep grid.
#[derive(Debug, Args, Clone)]
pub struct BarabasiAlbertSweepArgs {
    /// Directory receiving the generated matrices.
    #[arg(long = "output-dir")]
    pub output_dir: PathBuf,

    /// Comma-separated node counts.
    #[arg(long, value_delimiter = ',', required = true)]
    pub sizes: Vec<usize>,

    /// Comma-separated attachment counts.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [DEFAULT_ATTACHMENTS_PER_NODE],
    )]
    pub attachments: Vec<usize>,

    /// Size of the initial complete graph.
    #[arg(long = "core-size", default_value_t = DEFAULT_CORE_SIZE)]
    pub core_size: usize,

    /// Probability that an edge is positive.
    #[arg(long = "positive-probability")]
    pub positive_probability: f64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing an output file or directory failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Graph configuration or analysis failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A generated graph together with how it was produced.
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    /// Model that produced the edges.
    pub model: Model,
    /// The generated (and possibly recoloured) edges.
    pub edges: SignedEdgeSet,
    /// Number of negative edges flipped after generation.
    pub recoloured: usize,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A single graph to be rendered on stdout.
    Graph {
        /// The generated graph.
        graph: GeneratedGraph,
        /// Requested encoding.
        format: OutputFormat,
    },
    /// Graphs already written to disk.
    Written {
        /// Files produced, in generation order.
        paths: Vec<PathBuf>,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parameters are invalid or output cannot be
/// written.
///
/// # Examples
/// ```
/// # use signet_cli::cli::{Cli, Command, ErdosRenyiArgs, ExecutionSummary, OutputArgs, run_cli};
/// let cli = Cli {
///     seed: Some(7),
///     verbose: 0,
///     command: Command::ErdosRenyi(ErdosRenyiArgs {
///         nodes: 4,
///         edge_probability: 1.0,
///         positive_probability: 0.0,
///         output: OutputArgs::default(),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let ExecutionSummary::Graph { graph, .. } = summary else {
///     panic!("expected a graph");
/// };
/// assert_eq!(graph.edges.number_of_edges(), 6);
/// # Ok::<(), signet_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty, seed = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let seed = resolve_seed(cli.seed);
    let span = Span::current();
    span.record("seed", seed);
    match cli.command {
        Command::ErdosRenyi(args) => {
            span.record("command", field::display(Model::ErdosRenyi.as_str()));
            let generator =
                ErdosRenyiGenerator::new(args.nodes, args.edge_probability, args.positive_probability)?;
            let mut rng = SmallRng::seed_from_u64(seed);
            let edges = generator.generate(&mut rng);
            finish_graph(Model::ErdosRenyi, edges, &mut rng, args.output)
        }
        Command::BarabasiAlbert(args) => {
            span.record("command", field::display(Model::BarabasiAlbert.as_str()));
            let generator = BarabasiAlbertGenerator::new(
                args.nodes,
                args.positive_probability,
                args.core_size,
                args.attachments,
            )?;
            let mut rng = SmallRng::seed_from_u64(seed);
            let edges = generator.generate(&mut rng);
            finish_graph(Model::BarabasiAlbert, edges, &mut rng, args.output)
        }
        Command::Sweep(sweep) => {
            span.record("command", field::display("sweep"));
            run_sweep(&sweep, seed)
        }
    }
}

fn finish_graph(
    model: Model,
    mut edges: SignedEdgeSet,
    rng: &mut SmallRng,
    output: OutputArgs,
) -> Result<ExecutionSummary, CliError> {
    let recoloured = output
        .recolor
        .map_or(0, |count| edges.recolor(rng, count));
    info!(
        model = model.as_str(),
        nodes = edges.node_count(),
        edges = edges.number_of_edges(),
        recoloured,
        "generated graph"
    );
    let graph = GeneratedGraph {
        model,
        edges,
        recoloured,
    };

    match output.output {
        None => Ok(ExecutionSummary::Graph {
            graph,
            format: output.format,
        }),
        Some(path) => {
            write_file(&path, |writer| render_graph(&graph, output.format, writer))?;
            Ok(ExecutionSummary::Written { paths: vec![path] })
        }
    }
}

/// One cell of a sweep grid.
struct SweepJob {
    path: PathBuf,
    generator: SweepGenerator,
}

enum SweepGenerator {
    ErdosRenyi(ErdosRenyiGenerator),
    BarabasiAlbert(BarabasiAlbertGenerator),
}

impl SweepGenerator {
    fn generate(&self, rng: &mut SmallRng) -> SignedEdgeSet {
        match self {
            Self::ErdosRenyi(generator) => generator.generate(rng),
            Self::BarabasiAlbert(generator) => generator.generate(rng),
        }
    }
}

fn sweep_jobs(command: &SweepCommand) -> Result<Vec<SweepJob>, CliError> {
    let mut jobs = Vec::new();
    match &command.model {
        SweepModel::ErdosRenyi(args) => {
            for &size in &args.sizes {
                for &p in &args.edge_probabilities {
                    let generator = ErdosRenyiGenerator::new(size, p, args.positive_probability)?;
                    let dir = args.output_dir.join(format!("p_{p}"));
                    jobs.push(SweepJob {
                        path: dir.join(format!("er_relation_{size}points_p_{p}.txt")),
                        generator: SweepGenerator::ErdosRenyi(generator),
                    });
                }
            }
        }
        SweepModel::BarabasiAlbert(args) => {
            for &size in &args.sizes {
                for &m in &args.attachments {
                    let generator = BarabasiAlbertGenerator::new(
                        size,
                        args.positive_probability,
                        args.core_size,
                        m,
                    )?;
                    let dir = args.output_dir.join(format!("m_{m}"));
                    jobs.push(SweepJob {
                        path: dir.join(format!("ba_relation_{size}points_m_{m}.txt")),
                        generator: SweepGenerator::BarabasiAlbert(generator),
                    });
                }
            }
        }
    }
    Ok(jobs)
}

#[instrument(name = "cli.sweep", err, skip(command), fields(jobs = field::Empty))]
fn run_sweep(command: &SweepCommand, seed: u64) -> Result<ExecutionSummary, CliError> {
    let jobs = sweep_jobs(command)?;
    Span::current().record("jobs", jobs.len());

    let mut paths = Vec::with_capacity(jobs.len());
    for (index, job) in jobs.into_iter().enumerate() {
        let mut rng = SmallRng::seed_from_u64(mix_seed(seed, index));
        let edges = job.generator.generate(&mut rng);
        if let Some(parent) = job.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CliError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        write_file(&job.path, |writer| {
            AdjacencyMatrix::from_edge_set(&edges).write_to(writer)
        })?;
        info!(
            path = %job.path.display(),
            nodes = edges.node_count(),
            edges = edges.number_of_edges(),
            "wrote adjacency matrix"
        );
        paths.push(job.path);
    }
    Ok(ExecutionSummary::Written { paths })
}

fn write_file(
    path: &Path,
    render: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), CliError> {
    let to_cli_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_cli_error)?;
    let mut writer = BufWriter::new(file);
    render(&mut writer).map_err(to_cli_error)?;
    writer.flush().map_err(to_cli_error)
}

/// Renders `graph` to `writer` using `format`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_graph(
    graph: &GeneratedGraph,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    let edges = &graph.edges;
    match format {
        OutputFormat::Matrix => AdjacencyMatrix::from_edge_set(edges).write_to(writer),
        OutputFormat::Edges => {
            for edge in edges {
                writeln!(writer, "{}\t{}\t{}", edge.source(), edge.target(), edge.sign())?;
            }
            Ok(())
        }
        OutputFormat::Summary => {
            writeln!(writer, "model: {}", graph.model.as_str())?;
            writeln!(writer, "nodes: {}", edges.node_count())?;
            writeln!(writer, "edges: {}", edges.number_of_edges())?;
            writeln!(writer, "positive: {}", edges.positive_count())?;
            writeln!(writer, "negative: {}", edges.negative_count())?;
            writeln!(writer, "recoloured: {}", graph.recoloured)?;
            match edges.q_rate() {
                Some(rate) => writeln!(writer, "q_rate: {rate:.4}"),
                None => writeln!(writer, "q_rate: n/a"),
            }
        }
    }
}

/// Renders `summary` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::path::PathBuf;
/// # use signet_cli::cli::{ExecutionSummary, render_summary};
/// let summary = ExecutionSummary::Written {
///     paths: vec![PathBuf::from("out/graph.txt")],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(buffer, b"wrote out/graph.txt\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Graph { graph, format } => render_graph(graph, *format, writer),
        ExecutionSummary::Written { paths } => {
            for path in paths {
                writeln!(writer, "wrote {}", path.display())?;
            }
            Ok(())
        }
    }
}
