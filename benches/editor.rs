//! Editing core benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use termline::{LineBuffer, Prompt, Renderer};

fn bench_buffer_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    let text = "Hello, World! ".repeat(100);
    group.throughput(Throughput::Elements(text.chars().count() as u64));

    group.bench_function("insert_at_end", |b| {
        b.iter(|| {
            let mut buf = LineBuffer::new();
            buf.insert_str(black_box(&text));
            black_box(buf)
        })
    });

    group.bench_function("insert_at_start", |b| {
        b.iter(|| {
            let mut buf = LineBuffer::new();
            for chunk in text.as_bytes().chunks(14) {
                buf.insert_at(0, std::str::from_utf8(chunk).unwrap());
            }
            black_box(buf)
        })
    });

    group.finish();
}

fn bench_buffer_delete_backward(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    let text = "x".repeat(1000);
    group.throughput(Throughput::Elements(1000));

    group.bench_function("delete_backward", |b| {
        b.iter(|| {
            let mut buf = LineBuffer::new();
            buf.insert_str(&text);
            while !buf.is_empty() {
                black_box(buf.delete(-1));
            }
            black_box(buf)
        })
    });

    group.finish();
}

fn bench_render_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let prompt = Prompt::new("> ");
    let long_line: Vec<char> = "abcdefghij".repeat(100).chars().collect();

    group.bench_function("append_one_glyph", |b| {
        b.iter(|| {
            let mut renderer = Renderer::new();
            renderer.diff(&long_line, long_line.len());
            let mut extended = long_line.clone();
            extended.push('!');
            black_box(renderer.diff(&extended, extended.len()))
        })
    });

    group.bench_function("mid_line_edit", |b| {
        b.iter(|| {
            let mut renderer = Renderer::new();
            renderer.diff(&long_line, 500);
            let mut edited = long_line.clone();
            edited.insert(500, '!');
            black_box(renderer.diff(&edited, 501))
        })
    });

    group.bench_function("full_repaint", |b| {
        let mut buf = LineBuffer::new();
        buf.insert_str(&"abcdefghij".repeat(100));
        b.iter(|| {
            let mut renderer = Renderer::new();
            black_box(renderer.draw_line(&prompt, &buf))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_buffer_insert,
    bench_buffer_delete_backward,
    bench_render_diff
);
criterion_main!(benches);
