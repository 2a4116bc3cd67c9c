//! Headless timing of `next_generation` on randomized boards

use std::time::Instant;

use life_board::GameOfLife;
use rand::{SeedableRng, rngs::StdRng};

fn time_generations(size: usize, iterations: u32) -> life_board::Result<f64> {
    let mut game = GameOfLife::new(size, size)?;
    game.randomize_with(&mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        game.next_generation();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> life_board::Result<()> {
    println!("=== Game of Life step benchmark ===\n");
    println!("{:>10} {:>14} {:>16} {:>12}", "Size", "ms/gen", "cells/s", "gen/s");

    for (size, iterations) in [(20, 2000), (40, 1000), (100, 200), (200, 50), (500, 10)] {
        let ms = time_generations(size, iterations)?;
        let cells_per_sec = (size * size) as f64 / (ms / 1000.0);
        println!(
            "{:>10} {:>14.3} {:>16.0} {:>12.1}",
            format!("{size}x{size}"),
            ms,
            cells_per_sec,
            1000.0 / ms
        );
    }

    Ok(())
}
