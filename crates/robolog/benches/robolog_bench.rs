// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use robolog::linear::build_linear;
use robolog::{CollapseState, parse_lines, render};

/// Generate console output for `suites` suites of `tests` tests each
fn synthetic_run(suites: usize, tests: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let sep = "=".repeat(78);
    let dash = "-".repeat(78);
    lines.push(sep.clone());
    lines.push("Bench".to_string());
    for s in 0..suites {
        lines.push(sep.clone());
        lines.push(format!("Bench.Suite {s}"));
        lines.push(sep.clone());
        for t in 0..tests {
            if t % 5 == 0 {
                lines.push(format!("Test {s}-{t} :: documented | FAIL |"));
                lines.push("AssertionError: expected 1 but was 2".to_string());
                lines.push("  at keyword Should Be Equal".to_string());
            } else {
                lines.push(format!("Test {s}-{t}"));
                lines.push("keyword output".to_string());
                lines.push("| PASS |".to_string());
            }
            lines.push(dash.clone());
        }
        lines.push(format!("Bench.Suite {s}                  | FAIL |"));
        lines.push(format!("{tests} tests, 0 passed, {tests} failed"));
    }
    lines.push(sep.clone());
    lines.push("Bench                                  | FAIL |".to_string());
    lines.push("1 test, 0 passed, 1 failed".to_string());
    lines.push(sep);
    lines.push("Report: /tmp/bench/report.html".to_string());
    lines
}

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10usize, 100, 1000] {
        let lines = synthetic_run(size, 20);
        group.bench_with_input(BenchmarkId::new("linear", size), &lines, |b, lines| {
            b.iter(|| build_linear(std::hint::black_box(lines)))
        });
        group.bench_with_input(BenchmarkId::new("full", size), &lines, |b, lines| {
            b.iter(|| parse_lines(std::hint::black_box(lines)))
        });
    }

    group.finish();
}

fn render_benchmarks(c: &mut Criterion) {
    let forest = parse_lines(&synthetic_run(100, 20));
    let state = CollapseState::new();

    c.bench_function("render_default_state", |b| {
        b.iter(|| render(std::hint::black_box(&forest), &state))
    });
}

criterion_group!(benches, parse_benchmarks, render_benchmarks);
criterion_main!(benches);
