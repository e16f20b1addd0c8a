//! Repaint benchmark: gridlines plus cell fills over random packed buffers

use std::time::Instant;
use rand::Rng;
use life_canvas::domain::{CellView, packed_len};
use life_canvas::rendering::{self, RenderConfig};

/// Budget of one frame at 60Hz
const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

fn random_cells(width: u32, height: u32) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..packed_len(width, height)).map(|_| rng.random::<u8>()).collect()
}

/// Average milliseconds for one full repaint
fn benchmark_repaint(size: u32, cell_size: u32, iterations: u32) -> f64 {
    let config = RenderConfig { cell_size, ..RenderConfig::default() };
    let layout = config.layout(size, size);
    let palette = config.palette();
    let mut surface = rendering::new_surface(&layout, &config);
    let cells = random_cells(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        rendering::draw_grid(&mut surface, &layout, &palette);
        let view = CellView::new(&cells, size, size);
        rendering::draw_cells(&mut surface, &layout, &view, &palette);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Grid Repaint Benchmark ===\n");

    let sizes = [32, 64, 128, 256, 512];
    let cell_sizes = [1, 5, 10];
    let iterations = 50;

    print!("{:>10}", "Grid");
    for cell_size in cell_sizes {
        print!(" {:>12}", format!("cell={}px", cell_size));
    }
    println!(" {:>10}", "Budget");
    println!("{:-<60}", "");

    for size in sizes {
        print!("{:>10}", format!("{}x{}", size, size));
        let mut within_budget = true;
        for cell_size in cell_sizes {
            // Skip surfaces the image backend cannot hold
            if (cell_size + 1) * size + 1 > u16::MAX as u32 {
                print!(" {:>12}", "-");
                continue;
            }
            let ms = benchmark_repaint(size, cell_size, iterations);
            within_budget &= ms < FRAME_BUDGET_MS;
            print!(" {:>10.3}ms", ms);
        }
        println!(" {:>10}", if within_budget { "ok" } else { "over" });
    }

    println!("\n=== Throughput at 128x128, 5px cells ===\n");
    let ms = benchmark_repaint(128, 5, 200);
    let cells = 128.0 * 128.0;
    println!(
        "{:.3} ms/repaint, {:.1}M cells/sec, {:.1}% of frame budget",
        ms,
        cells / (ms / 1000.0) / 1_000_000.0,
        ms / FRAME_BUDGET_MS * 100.0
    );
}
