//! Benchmarks for find sessions and position lookups
//!
//! Run with: cargo bench search

use librenote::editable::{offset_to_line_col, TextBuffer};
use librenote::model::find::{find_backward, find_forward};
use librenote::model::{FindSession, SearchDirection};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_buffer(line_count: usize) -> TextBuffer {
    TextBuffer::from_text(&"The quick brown fox jumps over the lazy dog.\n".repeat(line_count))
}

// ============================================================================
// Single lookups
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_forward_last_line(bencher: divan::Bencher, line_count: usize) {
    let buffer = sample_buffer(line_count);
    // Start on the last line so the scan covers the whole tail
    let from = buffer.len_chars().saturating_sub(45);
    bencher.bench_local(|| find_forward(divan::black_box(&buffer), "lazy", from));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_backward_from_end(bencher: divan::Bencher, line_count: usize) {
    let buffer = sample_buffer(line_count);
    let before = buffer.len_chars();
    bencher.bench_local(|| find_backward(divan::black_box(&buffer), "quick", before));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_missing_needle(bencher: divan::Bencher, line_count: usize) {
    let buffer = sample_buffer(line_count);
    bencher.bench_local(|| find_forward(divan::black_box(&buffer), "absent", 0));
}

// ============================================================================
// Session walks
// ============================================================================

#[divan::bench(args = [100, 1_000])]
fn session_walk_forward(bencher: divan::Bencher, line_count: usize) {
    bencher
        .with_inputs(|| sample_buffer(line_count))
        .bench_local_values(|mut buffer| {
            let mut session = FindSession::new("fox");
            for _ in 0..=line_count {
                session.find(&mut buffer, SearchDirection::Forward);
            }
            buffer
        });
}

#[divan::bench(args = [100, 1_000])]
fn session_walk_backward(bencher: divan::Bencher, line_count: usize) {
    bencher
        .with_inputs(|| sample_buffer(line_count))
        .bench_local_values(|mut buffer| {
            let mut session = FindSession::new("fox");
            for _ in 0..=line_count + 1 {
                session.find(&mut buffer, SearchDirection::Backward);
            }
            buffer
        });
}

// ============================================================================
// Status bar position
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn offset_to_line_col_at_end(bencher: divan::Bencher, line_count: usize) {
    let buffer = sample_buffer(line_count);
    let offset = buffer.len_chars();
    bencher.bench_local(|| offset_to_line_col(divan::black_box(&buffer), offset));
}
