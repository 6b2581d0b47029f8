//! Timed runner tests on the CPU path.
//!
//! GPU-dependent behavior lives in `gpu_kernel_tests.rs`; everything here runs
//! on any machine.

use devicebench::{
    measure, measure_on, AddKernel, DeviceSelector, ElementWiseAdd, ExecutionContext, HostMatrix,
    MatrixMultiply,
};

#[test]
fn cpu_add_measurement_returns_nonnegative_duration() {
    let a = vec![1.0f32; 1024];
    let b = vec![2.0f32; 1024];
    let op = ElementWiseAdd::new(&a, &b, AddKernel::Naive);

    let result = measure(&ExecutionContext::Cpu, &op).unwrap();
    assert!(result.seconds() >= 0.0);
    assert_eq!(result.output.len(), 1024);
    assert!(result.output.iter().all(|&v| v == 3.0));
}

#[test]
fn cpu_matmul_measurement_produces_expected_output() {
    let a = HostMatrix::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    let b = HostMatrix::from_data(2, 2, vec![5.0, 6.0, 7.0, 8.0]);
    let op = MatrixMultiply::new(&a, &b);

    let result = measure(&ExecutionContext::Cpu, &op).unwrap();
    assert!(result.seconds() >= 0.0);
    assert_eq!(result.output, vec![19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn repeated_measurements_return_identical_outputs() {
    // Durations are explicitly non-deterministic, so only the outputs and the
    // non-negativity of each timing are asserted.
    let a = HostMatrix::random(64, 64);
    let b = HostMatrix::random(64, 64);
    let op = MatrixMultiply::new(&a, &b);

    let first = measure(&ExecutionContext::Cpu, &op).unwrap();
    let second = measure(&ExecutionContext::Cpu, &op).unwrap();

    assert!(first.seconds() >= 0.0);
    assert!(second.seconds() >= 0.0);
    assert_eq!(first.output, second.output);
}

#[test]
fn output_shape_matches_input_shape_for_add() {
    let a = vec![0.5f32; 333];
    let b = vec![0.25f32; 333];

    for kernel in AddKernel::ALL {
        let op = ElementWiseAdd::new(&a, &b, kernel);
        let result = measure(&ExecutionContext::Cpu, &op).unwrap();
        assert_eq!(result.output.len(), a.len());
    }
}

#[test]
fn measure_on_binds_the_cpu_without_probing() {
    let a = vec![1.0f32; 16];
    let b = vec![1.0f32; 16];
    let op = ElementWiseAdd::new(&a, &b, AddKernel::Naive);

    let result = measure_on(DeviceSelector::Cpu, &op).unwrap();
    assert_eq!(result.output, vec![2.0f32; 16]);
}
