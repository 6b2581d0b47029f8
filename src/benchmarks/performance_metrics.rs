//! Output formatting and verification helpers for benchmarks.

use super::benchmark_types::KernelTiming;

/// Line printed when the accelerator pre-check comes back empty.
pub const NO_GPU_MESSAGE: &str = "No GPU available. Skipping GPU computation.";

/// Timing line for one device, seconds with 4 decimal places.
pub fn format_device_time(label: &str, seconds: f64) -> String {
    format!("Time taken on {}: {:.4} seconds", label, seconds)
}

/// Speedup line, ratio with 2 decimal places.
pub fn format_speedup(ratio: f64) -> String {
    format!("Speedup: {:.2}x", ratio)
}

/// Compare two result vectors element by element.
///
/// Returns whether every pairwise difference stays within `tolerance`,
/// together with the largest difference seen.
pub fn outputs_match(expected: &[f32], actual: &[f32], tolerance: f32) -> (bool, f32) {
    if expected.len() != actual.len() {
        return (false, f32::MAX);
    }

    let mut max_diff: f32 = 0.0;
    for (e, a) in expected.iter().zip(actual.iter()) {
        max_diff = max_diff.max((e - a).abs());
    }

    (max_diff < tolerance, max_diff)
}

/// Prints the side-by-side kernel comparison. The first entry is the
/// baseline the other timings are measured against.
pub fn print_kernel_comparison(timings: &[KernelTiming]) {
    if timings.is_empty() {
        return;
    }

    let baseline = &timings[0];

    println!("\n{}", "=".repeat(80));
    println!("Kernel Comparison");
    println!("{}", "=".repeat(80));

    for timing in timings {
        if timing.label == baseline.label {
            println!("  {:<16} {:.4} seconds (baseline)", timing.label, timing.seconds);
        } else {
            println!(
                "  {:<16} {:.4} seconds ({:.2}x vs {})",
                timing.label,
                timing.seconds,
                timing.speedup_vs(baseline),
                baseline.label
            );
        }
    }

    let mut ranked: Vec<&KernelTiming> = timings.iter().collect();
    ranked.sort_by(|x, y| x.seconds.total_cmp(&y.seconds));

    println!("\nFastest to slowest:");
    for (i, timing) in ranked.iter().enumerate() {
        println!("  {}. {} ({:.4} seconds)", i + 1, timing.label, timing.seconds);
    }
    println!("{}", "=".repeat(80));
}
