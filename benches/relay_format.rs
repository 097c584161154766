//! Benchmark for the payload transform and response formatting

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use message_relay::{format_response, reverse, Channel};
use serde_json::json;

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("relay_format");

    for size in [16usize, 1024, 64 * 1024] {
        let payload = "relay-payload-é".repeat(size / 16 + 1);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_function(format!("reverse_{}", size), |b| {
            b.iter(|| reverse(black_box(&payload)));
        });
    }

    group.finish();
}

fn bench_format_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("relay_format");
    group.throughput(Throughput::Elements(1));

    let result = Some(json!({"MessageId": "12345", "MD5OfMessageBody": "d41d8cd98f00b204e9800998ecf8427e"}));
    group.bench_function("format_queue_response", |b| {
        b.iter(|| format_response(Channel::Queue, black_box("dlrow"), black_box(&result)));
    });

    group.bench_function("format_absent_response", |b| {
        b.iter(|| format_response(Channel::Service, black_box("tset"), black_box(&None)));
    });

    group.finish();
}

criterion_group!(benches, bench_reverse, bench_format_response);
criterion_main!(benches);
