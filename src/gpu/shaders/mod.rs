//! WGSL shader sources for the benchmark kernels.
//!
//! Array dimensions are compile-time constants prepended to the source when a
//! shader is requested, so the kernels can bounds-check without a uniform
//! block. Dispatch geometry computed by callers must agree with the
//! `@workgroup_size` declared in each kernel; the constants below are the
//! single source for that geometry.

/// Threads per workgroup axis of the matrix multiply kernel (16x16 tiles).
pub const MATMUL_WORKGROUP_DIM: u32 = 16;

/// Threads per workgroup of the naive and shared-memory add kernels.
pub const ADD_WORKGROUP_SIZE: u32 = 64;

/// Threads per workgroup of the tuned add kernel.
pub const TUNED_WORKGROUP_SIZE: u32 = 256;

/// Elements each thread of the tuned add kernel processes.
pub const TUNED_ELEMENTS_PER_THREAD: u32 = 4;

/// Matrix multiply shader for `rows x inner` times `inner x cols`.
pub fn matmul_shader(rows: u32, inner: u32, cols: u32) -> String {
    format!(
        r#"// Generated dimensions: A is {rows}x{inner}, B is {inner}x{cols}
const M: u32 = {rows}u;
const K: u32 = {inner}u;
const N: u32 = {cols}u;

{body}"#,
        body = include_str!("matmul.wgsl"),
    )
}

/// Naive element-wise add shader over `len` elements.
pub fn add_naive_shader(len: u32) -> String {
    format!(
        r#"const LEN: u32 = {len}u;

{body}"#,
        body = include_str!("add_naive.wgsl"),
    )
}

/// Workgroup-shared-memory add shader over `len` elements.
pub fn add_shared_shader(len: u32) -> String {
    format!(
        r#"const LEN: u32 = {len}u;

{body}"#,
        body = include_str!("add_shared.wgsl"),
    )
}

/// Tuned add shader (larger workgroups, several elements per thread) over
/// `len` elements.
pub fn add_tuned_shader(len: u32) -> String {
    format!(
        r#"const LEN: u32 = {len}u;

{body}"#,
        body = include_str!("add_tuned.wgsl"),
    )
}
