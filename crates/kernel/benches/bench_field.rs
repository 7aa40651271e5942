use std::hint::black_box;
use std::time::Instant;

use glam::{Quat, Vec3};
use gravfield_common::InputState;
use gravfield_kernel::{GravField, Player, SceneConfig};

fn make_field(size: usize, node_count: usize) -> GravField {
    SceneConfig {
        field_size: size,
        mass_count: node_count,
        ..SceneConfig::default()
    }
    .build()
    .expect("valid bench scene")
}

fn bench_calculate(size: usize, node_count: usize, iterations: usize) {
    let mut field = make_field(size, node_count);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(&mut field).calculate();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  calculate (size={size}, {node_count} nodes, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_nearest(node_count: usize, iterations: usize) {
    let field = make_field(32, node_count);
    let probe = Vec3::splat(16.5);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(field.nearest(black_box(probe)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  nearest ({node_count} nodes, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_player_update(node_count: usize, iterations: usize) {
    let field = make_field(64, node_count);
    let mut player = Player::spawn(Vec3::splat(32.0));
    let input = InputState {
        move_forward: true,
        ..InputState::default()
    };

    let start = Instant::now();
    for i in 0..iterations {
        let look = Quat::from_rotation_y((i % 628) as f32 * 0.01);
        let _ = black_box(player.update(1.0 / 60.0, black_box(&field), &input, look));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  player update ({node_count} nodes, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn main() {
    println!("=== Gravity Field Benchmarks ===\n");

    println!("Field calculate (full size^3 x nodes rebuild):");
    bench_calculate(32, 10, 10);
    bench_calculate(64, 10, 3);
    bench_calculate(100, 10, 1);

    println!("\nNearest node (linear scan):");
    bench_nearest(10, 100_000);
    bench_nearest(100, 100_000);
    bench_nearest(1000, 10_000);

    println!("\nPlayer frame update:");
    bench_player_update(10, 100_000);
    bench_player_update(100, 10_000);

    println!("\n=== Done ===");
}
