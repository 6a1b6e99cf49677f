use std::{fs, path::PathBuf, time::Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use lib_gridrun::{
    grid::CostGrid,
    run_bounds::RunBounds,
    search::{RunSearch, SearchCounters, SearchOutcome},
};
use log::{LevelFilter, info};
use serde::Serialize;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The path to the grid file: one line of decimal digits per grid row.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// The minimum number of cells a straight run must cover before the path
    /// may turn or stop.
    #[clap(long, default_value = "4")]
    min_run: usize,

    /// The maximum number of cells a straight run may cover.
    #[clap(long, default_value = "10")]
    max_run: usize,

    /// The file to store the search statistics in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct SearchStatistics {
    cost: u64,
    duration_seconds: f64,
    counters: SearchCounters,
}

pub fn cli(cli: Cli) -> Result<()> {
    // The logger is process-global and may already be set up, e.g. when the
    // integration tests run several commands in one process.
    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    info!("Loading grid file {:?}", cli.input);
    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("Unable to read input file {:?}", cli.input))?;
    let grid: CostGrid = input.parse()?;
    info!("Loaded a {}x{} grid", grid.rows(), grid.cols());

    let bounds = RunBounds::new(cli.min_run, cli.max_run)?;
    let search = RunSearch::new(grid, bounds);

    let start_time = Instant::now();
    let result = search.solve();
    let duration = start_time.elapsed().as_secs_f64();

    info!(
        "Expanded {} tokens ({} stale), relaxed {} runs",
        result.counters.expanded_tokens, result.counters.stale_tokens, result.counters.relaxed_runs
    );

    let SearchOutcome::PathFound { cost } = result.outcome else {
        bail!("{}", result.outcome);
    };

    println!("Minimum path cost: {cost}");
    println!("Took {duration} seconds");

    if let Some(output) = &cli.output {
        info!("Writing statistics file {output:?}");
        let statistics = SearchStatistics {
            cost: cost.as_u64(),
            duration_seconds: duration,
            counters: result.counters,
        };
        fs::write(output, toml::to_string(&statistics)?)
            .with_context(|| format!("Unable to write statistics file {output:?}"))?;
    }

    Ok(())
}
