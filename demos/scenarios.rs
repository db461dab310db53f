use grid_astar::{
    geometric_length, path_cost, Bounds, Connectivity, ContainsPoint, GridAStarPathfinder,
    Polygon, SearchError,
};
use grid_util::point::Point;

// Runs a few obstacle layouts and prints each grid with
// - # marking a blocked cell
// - S marking the start
// - G marking the goal
// - * marking the path
// with y pointing up.

fn render(bounds: &Bounds, obstacles: &[Polygon], path: &[Point], start: &Point, goal: &Point) {
    for y in (0..=bounds.max_y).rev() {
        let row = (0..=bounds.max_x)
            .map(|x| {
                let p = Point::new(x, y);
                if p == *start {
                    'S'
                } else if p == *goal {
                    'G'
                } else if path.contains(&p) {
                    '*'
                } else if obstacles.iter().any(|o| o.contains_point(&p)) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{row}");
    }
}

fn run(title: &str, obstacles: &[Polygon], start: Point, goal: Point, connectivity: Connectivity) {
    let bounds = Bounds::new(12, 12);
    println!("{title}");
    let solver = GridAStarPathfinder::new(connectivity);
    match solver.find_path(start, goal, obstacles, &bounds) {
        Ok(path) if path.is_empty() => println!("No path found."),
        Ok(path) => {
            render(&bounds, obstacles, &path, &start, &goal);
            println!(
                "{} steps, length {:.2}",
                path_cost(&path),
                geometric_length(&path)
            );
        }
        Err(SearchError::InvalidEndpoint { endpoint, issue, .. }) => {
            println!("Cannot search: {endpoint:?} is {issue:?}")
        }
        Err(e) => println!("Search failed: {e}"),
    }
    println!();
}

fn main() {
    run(
        "Simple pathfinding",
        &[
            Polygon::rect(5.0, 2.0, 7.0, 4.0),
            Polygon::rect(2.0, 6.0, 4.0, 8.0),
        ],
        Point::new(1, 1),
        Point::new(10, 9),
        Connectivity::Eight,
    );
    run(
        "Narrow corridor navigation",
        &[
            Polygon::rect(3.0, 2.0, 4.0, 10.0),
            Polygon::rect(6.0, 2.0, 7.0, 10.0),
        ],
        Point::new(1, 6),
        Point::new(9, 6),
        Connectivity::Eight,
    );
    let block = Polygon::rect(4.0, 4.0, 8.0, 8.0);
    run(
        "Trapped goal",
        &[block.clone()],
        Point::new(2, 5),
        Point::new(7, 5),
        Connectivity::Four,
    );
    run(
        "Enclosed goal",
        &[
            Polygon::rect(4.0, 4.0, 8.0, 4.0),
            Polygon::rect(4.0, 8.0, 8.0, 8.0),
            Polygon::rect(4.0, 4.0, 4.0, 8.0),
            Polygon::rect(8.0, 4.0, 8.0, 8.0),
        ],
        Point::new(2, 5),
        Point::new(6, 6),
        Connectivity::Four,
    );
    run(
        "Trap recovery",
        &[block],
        Point::new(2, 5),
        Point::new(9, 6),
        Connectivity::Four,
    );
}
