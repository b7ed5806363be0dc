use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a realistic JSON event of one of a few shapes, resembling what a
/// structured logger emits to its console sink.
fn generate_event(variant: usize) -> String {
    match variant % 4 {
        0 => {
            // request log with caller (~230 bytes)
            r#"{"time":"2026-01-15T10:30:00.123Z","level":"info","caller":"server/handler.go:42","message":"request completed","method":"GET","path":"/api/v1/users","status":200,"latency_ms":42,"request_id":"req_xyz789"}"#.to_string()
        }
        1 => {
            // error event with promoted field (~200 bytes)
            r#"{"time":"2026-01-15T10:30:01.456Z","level":"error","message":"connection refused","retries":3,"error":"dial tcp 10.0.0.1:5432: connect: connection refused","backoff_ms":250}"#.to_string()
        }
        2 => {
            // numeric epoch time, raw array value (~180 bytes)
            r#"{"time":1768473000,"level":"debug","message":"cache warmup","shards":[1,2,3,4],"hit_ratio":0.94,"evicted":false,"pool":"primary"}"#.to_string()
        }
        _ => {
            // minimal event (~90 bytes)
            r#"{"time":1768473000,"level":"warn","message":"high memory usage","memory_mb":1842}"#.to_string()
        }
    }
}

fn generate_batch(count: usize) -> Vec<String> {
    (0..count).map(generate_event).collect()
}

fn bench_render(c: &mut Criterion) {
    let config = logline::Config {
        no_color: true,
        time_input: logline::TimeInputFormat::Rfc3339,
        ..logline::Config::default()
    };
    let events = generate_batch(1000);

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("render_1k_events", |b| {
        let mut out = String::with_capacity(512);
        b.iter(|| {
            for event in &events {
                out.clear();
                logline::render_into(
                    criterion::black_box(event.as_bytes()),
                    &config,
                    &mut out,
                )
                .unwrap();
                criterion::black_box(&out);
            }
        });
    });

    group.finish();
}

fn bench_render_colorized(c: &mut Criterion) {
    let config = logline::Config::default();
    let events = generate_batch(1000);

    let mut group = c.benchmark_group("render_color");
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("render_1k_events_colorized", |b| {
        let mut out = String::with_capacity(512);
        b.iter(|| {
            for event in &events {
                out.clear();
                logline::render_into(
                    criterion::black_box(event.as_bytes()),
                    &config,
                    &mut out,
                )
                .unwrap();
                criterion::black_box(&out);
            }
        });
    });

    group.finish();
}

fn bench_decode_only(c: &mut Criterion) {
    let events = generate_batch(1000);

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("decode_1k_events", |b| {
        b.iter(|| {
            for event in &events {
                let _ = logline::decode(criterion::black_box(event.as_bytes())).unwrap();
            }
        });
    });

    group.finish();
}

fn bench_event_sizes(c: &mut Criterion) {
    let config = logline::Config {
        no_color: true,
        ..logline::Config::default()
    };

    let mut group = c.benchmark_group("event_size");

    for size_label in &["small_100b", "medium_500b", "large_1kb"] {
        let event = match *size_label {
            "small_100b" => {
                r#"{"level":"info","message":"ok","time":"2026-01-15T10:30:00Z","port":8080}"#
                    .to_string()
            }
            "medium_500b" => {
                let mut s = r#"{"level":"debug","message":"request details","time":"2026-01-15T10:30:00Z","method":"POST","path":"/api/v1/orders","status":201"#.to_string();
                for i in 0..10 {
                    write!(s, r#","field_{i}":"value_{i}_padding_data""#).unwrap();
                }
                s.push('}');
                s
            }
            _ => {
                let mut s =
                    r#"{"level":"warn","message":"large payload","time":"2026-01-15T10:30:00Z""#
                        .to_string();
                for i in 0..40 {
                    write!(s, r#","field_{i}":"value_with_extra_content_{i}""#).unwrap();
                }
                s.push('}');
                s
            }
        };

        group.throughput(Throughput::Bytes(event.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_label), &event, |b, event| {
            let mut out = String::with_capacity(event.len() * 2);
            b.iter(|| {
                out.clear();
                logline::render_into(criterion::black_box(event.as_bytes()), &config, &mut out)
                    .unwrap();
                criterion::black_box(&out);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_render_colorized,
    bench_decode_only,
    bench_event_sizes,
);
criterion_main!(benches);
