//! Runs the sandbox without a window, standing in for the render loop.
//!
//! `RUST_LOG=debug cargo run --example headless` also prints per-step stats.

use sandsim::{config::TARGET_FPS, Controls, Sandbox};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut sandbox = Sandbox::default();
    let mut controls = Controls {
        body_count: 24,
        gravity: 60.0,
        ..Controls::default()
    };

    let dt = 1.0 / TARGET_FPS as f32;
    for frame in 0..(TARGET_FPS * 5) {
        // Edits are applied only between steps.
        if frame == TARGET_FPS * 2 {
            controls.radius = 6;
            controls.body_count = 32;
        }
        if let Err(err) = sandbox.apply_controls(&mut controls) {
            log::warn!("{err}");
        }

        let stats = sandbox.step(dt, &controls.params());
        if frame % TARGET_FPS == 0 {
            log::info!(
                "t={}s bodies={} overlaps={} impulses={}",
                frame / TARGET_FPS,
                stats.body_count,
                stats.overlaps,
                stats.impulses_applied
            );
        }
    }

    for (index, body) in sandbox.bodies().iter().enumerate() {
        println!(
            "#{index:02} pos=({:7.2}, {:7.2}) vel=({:8.2}, {:8.2}) r={}",
            body.position.x, body.position.y, body.velocity.x, body.velocity.y, body.radius
        );
    }
}
