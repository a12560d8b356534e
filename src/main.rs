use clap::Parser;

use grid_pathfinding_core::config::Config;
use grid_pathfinding_core::error::CoreResult;
use grid_pathfinding_core::simulation::{Frame, Simulation};
use grid_pathfinding_core::statistics::comparison_table;
use log::{error, info};
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();
    let config = Config::parse();

    if !config.quiet {
        println!("Starting pathfinding simulation...");
        println!("Grid size: {}x{}", config.rows, config.cols);
        if config.compare {
            println!("Algorithm: all");
        } else {
            println!("Algorithm: {}", config.algorithm);
        }
        if let Some(maze) = config.maze {
            println!("Maze: {}", maze);
        }
        if config.animate() {
            println!("Visualization enabled with {}ms delay", config.delay_ms);
        } else {
            println!("Visualization disabled - running in fast mode");
        }
        println!();
    }

    if let Err(e) = run(&config) {
        error!("simulation failed: {}", e);
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> CoreResult<()> {
    let mut simulation = Simulation::new(config.rows, config.cols)?
        .with_heuristic(config.heuristic)
        .with_maze_options(config.maze_options());

    if let Some(kind) = config.maze {
        let steps = simulation.generate_maze(kind)?;
        info!("maze built in {} steps", steps);
    }

    if config.compare {
        let results = simulation.run_all()?;
        println!("\n=== COMPARISON ===");
        print!("{}", comparison_table(&results));
        return Ok(());
    }

    let outcome = simulation.run_search(config.algorithm)?;
    info!("search outcome: {:?}", outcome);

    if config.animate() {
        animate(&mut simulation, Duration::from_millis(config.delay_ms))?;
    } else if !config.quiet {
        simulation.rewind();
        while simulation.tick() != Frame::Done {}
        println!("{}", simulation.render()?);
    }

    if let Some(stats) = simulation.statistics() {
        println!("\n=== FINAL RESULTS ===");
        println!("{}", stats);
    }
    Ok(())
}

fn animate(simulation: &mut Simulation, delay: Duration) -> CoreResult<()> {
    simulation.rewind();
    loop {
        let frame = simulation.tick();
        // Clear screen and move the cursor home.
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", simulation.render()?);
        if frame == Frame::Done {
            return Ok(());
        }
        thread::sleep(delay);
    }
}
