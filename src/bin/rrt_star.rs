// RRT* planning demo on a 2-D circle-obstacle map

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure};

use rrt_star_planner::{
    config_from, Config, Environment, EuclideanEnv, RRTStarConfig, RRTStarPlanner, SphereObstacle,
};

fn visualize<E: Environment>(planner: &RRTStarPlanner<E>, env: &EuclideanEnv, path: &[Config]) {
    let mut fg = Figure::new();
    let axes = fg.axes2d();

    // Plot obstacles
    let obs_x: Vec<f64> = env.obstacles().iter().map(|obs| obs.center[0]).collect();
    let obs_y: Vec<f64> = env.obstacles().iter().map(|obs| obs.center[1]).collect();
    axes.points(&obs_x, &obs_y, &[Caption("Obstacles"), Color("black")]);

    // Plot tree
    let tree = planner.tree();
    for (child, parent) in tree.edges() {
        let c = tree.config(child);
        let p = tree.config(parent);
        axes.lines(&[p[0], c[0]], &[p[1], c[1]], &[Color("blue")]);
    }

    // Plot path
    if !path.is_empty() {
        let path_x: Vec<f64> = path.iter().map(|config| config[0]).collect();
        let path_y: Vec<f64> = path.iter().map(|config| config[1]).collect();
        axes.lines(&path_x, &path_y, &[Caption("RRT* Path"), Color("red")]);
    }

    axes.set_title("RRT* Path Planning", &[])
        .set_x_label("X [m]", &[])
        .set_y_label("Y [m]", &[])
        .set_aspect_ratio(AutoOption::Fix(1.0));

    let output_path = "img/rrt_star_result.png";
    fg.save_to_png(output_path, 800, 600).unwrap();
    println!("Plot saved to: {}", output_path);

    fg.show().unwrap();
}

fn main() {
    println!("RRT* path planning start!!");

    let env = EuclideanEnv::new(
        &[(0.0, 30.0), (0.0, 30.0)],
        vec![
            SphereObstacle::new(config_from(&[10.0, 10.0]), 2.0),
            SphereObstacle::new(config_from(&[18.0, 14.0]), 3.0),
            SphereObstacle::new(config_from(&[8.0, 22.0]), 2.0),
            SphereObstacle::new(config_from(&[22.0, 24.0]), 2.0),
        ],
        config_from(&[27.0, 27.0]),
        2.0,
    );

    let config = RRTStarConfig {
        bias: 0.1,
        max_iterations: 3_000,
        rand_seed: 42,
        ..Default::default()
    };

    let mut planner = RRTStarPlanner::new(env.clone(), config).expect("2-D c-space");
    let start = config_from(&[2.0, 2.0]);
    let goal = config_from(&[27.0, 27.0]);

    match planner.plan(&start, &goal) {
        Ok(path) => {
            println!(
                "Found path: {} waypoints, cost {:.4}, elapsed {:.3}s, tree size {}",
                path.len(),
                path.cost,
                path.elapsed.as_secs_f64(),
                planner.tree().len()
            );
            visualize(&planner, &env, &path.configs);
        }
        Err(err) => {
            println!("Planning failed: {}", err);
            visualize(&planner, &env, &[]);
        }
    }

    println!("RRT* path planning finish!!");
}
