//! TimeTutor CLI Application
//!
//! Command-line interface for the TimeTutor study planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, ViewArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use timetutor_core::{DayBoundary, PlanStatus, RepositoryBuilder};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        local_dates,
        command,
    } = Args::parse();

    let day_boundary = if local_dates {
        DayBoundary::Local
    } else {
        DayBoundary::Utc
    };

    let repository = RepositoryBuilder::new()
        .with_database_path(database_file)
        .with_day_boundary(day_boundary)
        .build()
        .context("Failed to open plan storage")?;

    let cli = Cli::new(repository, TerminalRenderer::new(!no_color));

    info!("TimeTutor started");

    match command.unwrap_or(View(ViewArgs::default())) {
        Add(args) => cli.add_plan(args),
        View(args) => cli.view_day(args.date),
        Track => cli.track_progress(),
        Done(args) => cli.set_status(args, PlanStatus::Complete),
        Skip(args) => cli.set_status(args, PlanStatus::Skipped),
        Reset(args) => cli.set_status(args, PlanStatus::Incomplete),
        List(args) => cli.list_plans(args),
        Quote => cli.show_quote(),
    }
}
