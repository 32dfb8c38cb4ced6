use gridsight::config::Config;
use gridsight::loader::grid_from_layout;
use gridsight::snapshot::GridSnapshot;
use gridsight::visibility::check_line_of_sight;
use gridsight::{Cell, Grid};
use std::fs;

/// Render the grid with the query endpoints marked.
fn print_grid(grid: &Grid, source: (i32, i32), target: (i32, i32)) {
    for y in 0..grid.height {
        let mut line = String::new();
        for x in 0..grid.width {
            let ch = if (x, y) == source {
                'S'
            } else if (x, y) == target {
                'T'
            } else {
                match grid.get_cell(x, y) {
                    Cell::Blocking => 'X',
                    _ => '-',
                }
            };
            line.push(ch);
        }
        println!("{}", line);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    // Usage: gridsight [source_x source_y target_x target_y]
    let args: Vec<String> = std::env::args().collect();
    let (sx, sy, tx, ty) = if args.len() >= 5 {
        (
            args[1].parse()?,
            args[2].parse()?,
            args[3].parse()?,
            args[4].parse()?,
        )
    } else {
        (
            config.query.source_x,
            config.query.source_y,
            config.query.target_x,
            config.query.target_y,
        )
    };

    let layout = fs::read_to_string(&config.layout.path)?;
    let grid = grid_from_layout(&layout)?;

    println!(
        "Loaded {}x{} grid from {}",
        grid.width, grid.height, config.layout.path
    );
    print_grid(&grid, (sx, sy), (tx, ty));

    let result = check_line_of_sight(&grid, sx, sy, tx, ty);
    match (result.source_corner, result.target_corners) {
        (Some(corner), Some(targets)) => println!(
            "({}, {}) -> ({}, {}): line of sight from {:?} to {:?}",
            sx, sy, tx, ty, corner, targets
        ),
        _ => println!("({}, {}) -> ({}, {}): no line of sight", sx, sy, tx, ty),
    }

    if config.snapshot.enabled {
        GridSnapshot::from_grid(&grid).save_to_file(&config.snapshot.path)?;
        println!("Snapshot written to {}", config.snapshot.path);
    }

    Ok(())
}
