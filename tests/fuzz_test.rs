/// Fuzzes the pathfinding system by checking for many random grids that a path is found exactly
/// when the goal is reachable, and that its length matches a breadth-first search.
use agv_pathfinding::{plan_route, Cell, GridConfig, GridView, PathFinder, RouteOutcome};
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

fn random_grid(n: usize, rng: &mut StdRng, density: f64, keep_free: &[Cell]) -> GridConfig {
    let mut obstacles = Vec::new();
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            let cell = Cell::new(row, col);
            if !keep_free.contains(&cell) && rng.gen_bool(density) {
                obstacles.push(cell);
            }
        }
    }
    GridConfig::new(n, n, obstacles).unwrap()
}

fn random_grid_cell(config: &GridConfig, rng: &mut StdRng) -> Cell {
    Cell::new(
        rng.gen_range(0..config.rows()) as i32,
        rng.gen_range(0..config.cols()) as i32,
    )
}

/// Breadth-first search distance from start to goal, if any.
fn bfs_distance(config: &GridConfig, start: Cell, goal: Cell) -> Option<usize> {
    let mut dist: HashMap<Cell, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        if cell == goal {
            return Some(d);
        }
        for n in config.passable_neighbours(&cell) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(0, 0);
    let end = Cell::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let config = random_grid(N, &mut rng, 0.4, &[start, end]);
        let reachable = config.reachable(&start, &end);
        let path = PathFinder::new(&config).find_path(start, end);
        // Show the grid if the result disagrees with the components
        if path.is_some() != reachable {
            print!("{}", GridView::new(&config).with_route(start, end, None));
        }
        assert_eq!(path.is_some(), reachable);
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let config = random_grid(N, &mut rng, 0.3, &[]);
        let start = random_grid_cell(&config, &mut rng);
        let goal = random_grid_cell(&config, &mut rng);
        let finder = PathFinder::new(&config);
        let path = finder.find_path(start, goal);
        if !config.is_passable(&start) || !config.is_passable(&goal) {
            assert!(path.is_none());
            continue;
        }
        let expected = bfs_distance(&config, start, goal);
        assert_eq!(path.as_ref().map(|p| p.steps()), expected);
        if let Some(path) = path {
            assert_eq!(path.start(), start);
            assert_eq!(path.goal(), goal);
            assert!(path.is_contiguous());
            assert!(path.cells().iter().all(|c| config.is_passable(c)));
            assert_eq!(finder.find_path(start, goal), Some(path));
        }
    }
}

#[test]
fn fuzz_outcomes() {
    const N: usize = 6;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..1000 {
        let config = random_grid(N, &mut rng, 0.25, &[]);
        let start = random_grid_cell(&config, &mut rng);
        let goal = random_grid_cell(&config, &mut rng);
        match plan_route(&config, start, goal) {
            RouteOutcome::PathFound { steps } => {
                assert_eq!(Some(steps.steps()), bfs_distance(&config, start, goal))
            }
            RouteOutcome::NoPathFound => assert!(!config.reachable(&start, &goal)),
            RouteOutcome::RejectedSameCell => assert_eq!(start, goal),
            RouteOutcome::RejectedBlockedCell(cell) => {
                assert_ne!(start, goal);
                assert!(config.is_blocked(&cell));
            }
            RouteOutcome::RejectedOutOfBounds(_) => unreachable!(),
        }
    }
}
