//! GPU kernel tests comparing with CPU results.
//!
//! Every test starts with the availability pre-check and returns early when
//! no adapter is present, mirroring the check-then-skip policy the benchmark
//! runner applies.

use devicebench::benchmarks::outputs_match;
use devicebench::{
    measure, probe_gpu, random_vector, AddKernel, DeviceSelector, ElementWiseAdd,
    ExecutionContext, HostMatrix, MatrixMultiply, Operation,
};

const TOLERANCE: f32 = 1e-6;

fn gpu_context_or_skip() -> Option<ExecutionContext> {
    if probe_gpu().is_none() {
        eprintln!("No GPU available. Skipping GPU computation.");
        return None;
    }
    Some(
        ExecutionContext::bind(DeviceSelector::Gpu)
            .expect("probe found an adapter but binding failed"),
    )
}

#[test]
fn add_kernel_variants_match_cpu_reference_at_full_length() {
    let Some(cx) = gpu_context_or_skip() else {
        return;
    };

    let len = 1_048_576;
    let a = random_vector(len);
    let b = random_vector(len);
    let expected = ElementWiseAdd::new(&a, &b, AddKernel::Naive).execute_cpu();

    for kernel in AddKernel::ALL {
        let op = ElementWiseAdd::new(&a, &b, kernel);
        let result = measure(&cx, &op).unwrap();

        assert!(result.seconds() >= 0.0);
        assert_eq!(result.output.len(), len);
        let (ok, max_diff) = outputs_match(&expected, &result.output, TOLERANCE);
        assert!(ok, "{} kernel diverged (max diff {:.3e})", kernel, max_diff);
    }
}

#[test]
fn add_kernels_handle_lengths_that_straddle_workgroups() {
    let Some(cx) = gpu_context_or_skip() else {
        return;
    };

    // 4099 is not a multiple of 64 or of 256 * 4, so the bounds checks in
    // every kernel variant are exercised.
    let len = 4099;
    let a = random_vector(len);
    let b = random_vector(len);
    let expected = ElementWiseAdd::new(&a, &b, AddKernel::Naive).execute_cpu();

    for kernel in AddKernel::ALL {
        let op = ElementWiseAdd::new(&a, &b, kernel);
        let result = measure(&cx, &op).unwrap();

        assert_eq!(result.output.len(), len);
        let (ok, max_diff) = outputs_match(&expected, &result.output, TOLERANCE);
        assert!(ok, "{} kernel diverged (max diff {:.3e})", kernel, max_diff);
    }
}

#[test]
fn gpu_matmul_matches_cpu_reference() {
    let Some(cx) = gpu_context_or_skip() else {
        return;
    };

    // Non-square and not multiples of the 16x16 workgroup tiles.
    let a = HostMatrix::random(33, 47);
    let b = HostMatrix::random(47, 29);
    let op = MatrixMultiply::new(&a, &b);
    let expected = op.execute_cpu();

    let result = measure(&cx, &op).unwrap();
    assert_eq!(result.output.len(), 33 * 29);

    let tolerance = 47.0 * 2e-4;
    let (ok, max_diff) = outputs_match(&expected, &result.output, tolerance);
    assert!(ok, "GPU matmul diverged (max diff {:.3e})", max_diff);
}

#[test]
fn one_gpu_context_serves_sequential_measurements() {
    let Some(cx) = gpu_context_or_skip() else {
        return;
    };

    let a = random_vector(512);
    let b = random_vector(512);
    let op = ElementWiseAdd::new(&a, &b, AddKernel::Naive);

    let first = measure(&cx, &op).unwrap();
    let second = measure(&cx, &op).unwrap();
    assert_eq!(first.output, second.output);
}

#[test]
#[ignore = "times a 5000x5000 matrix multiplication; run with --ignored on a machine with time to spare"]
fn full_size_device_comparison() {
    let n = 5000;
    let a = HostMatrix::random(n, n);
    let b = HostMatrix::random(n, n);
    let op = MatrixMultiply::new(&a, &b);

    let cpu = measure(&ExecutionContext::Cpu, &op).unwrap();
    assert!(cpu.seconds() > 0.0);
    println!("Time taken on CPU: {:.4} seconds", cpu.seconds());

    match probe_gpu() {
        Some(_) => {
            let cx = ExecutionContext::bind(DeviceSelector::Gpu).unwrap();
            let gpu = measure(&cx, &op).unwrap();
            assert!(gpu.seconds() > 0.0);
            println!("Time taken on GPU: {:.4} seconds", gpu.seconds());
            println!("Speedup: {:.2}x", cpu.seconds() / gpu.seconds());
        }
        None => println!("No GPU available. Skipping GPU computation."),
    }
}
