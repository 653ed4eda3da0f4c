//! Command-line interface orchestration for signet.
//!
//! Offers one command per graph model for generating a single graph, plus a
//! `sweep` command that writes a grid of adjacency matrices to disk.

mod commands;
mod seed;

pub use commands::{
    BarabasiAlbertArgs, BarabasiAlbertSweepArgs, Cli, CliError, Command, ErdosRenyiArgs,
    ErdosRenyiSweepArgs, ExecutionSummary, GeneratedGraph, Model, OutputArgs, OutputFormat,
    SweepCommand, SweepModel, render_graph, render_summary, run_cli,
};
