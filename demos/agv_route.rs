use agv_pathfinding::{clamp_cell, plan_route, GridConfig, GridView, Severity};
use std::process::ExitCode;

// Plans a route on the reference warehouse floor and prints it:
//
//   cargo run --example agv_route -- 0 0 9 9
//
// Arguments are start row, start column, goal row and goal column. Values outside the floor
// are clamped to its edges. Set RUST_LOG=debug to see the search log.

fn parse_args() -> Result<[i64; 4], String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        return Ok([0, 0, 9, 9]);
    }
    if args.len() != 4 {
        return Err(format!("expected 4 coordinates, got {}", args.len()));
    }
    let mut coords = [0; 4];
    for (slot, arg) in coords.iter_mut().zip(&args) {
        *slot = arg
            .parse()
            .map_err(|e| format!("invalid coordinate {:?}: {}", arg, e))?;
    }
    Ok(coords)
}

fn main() -> ExitCode {
    env_logger::init();
    let [sr, sc, gr, gc] = match parse_args() {
        Ok(coords) => coords,
        Err(e) => {
            eprintln!("usage: agv_route [START_ROW START_COL GOAL_ROW GOAL_COL]: {}", e);
            return ExitCode::from(2);
        }
    };
    let config = GridConfig::reference();
    let start = clamp_cell(&config, sr, sc);
    let goal = clamp_cell(&config, gr, gc);

    let outcome = plan_route(&config, start, goal);
    let label = match outcome.severity() {
        Severity::Success => "success",
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    println!("[{}] {}", label, outcome.message());
    if let Some(path) = outcome.path() {
        print!("{}", GridView::new(&config).with_route(start, goal, Some(path)));
        println!("{}", path);
    }
    match outcome.severity() {
        Severity::Error => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
