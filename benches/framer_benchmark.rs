//! Performance benchmarks for event framing and record decoding
//!
//! Measures line splitting plus frame assembly over bodies of varying size,
//! and the two-stage decode of one effect payload.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use horizon_client::records::decode_effect;
use horizon_client::sse::{FrameParser, LineSplitter};

const EFFECT: &str = r#"{"_links":{"operation":{"href":"https://horizon-testnet.stellar.org/operations/2531135896703017"}},"id":"0002531135896703017-0000000001","paging_token":"2531135896703017-1","account":"GBNZN27NAOHRJRCMHQF2ZN2F6TAPVEWKJIGZIRNKIADWIS2HDENIS6CI","type":"account_credited","type_i":2,"created_at":"2019-04-03T10:14:17Z","asset_type":"credit_alphanum4","asset_code":"qwop","asset_issuer":"GBM4HXXNDBWWQBXOL4QCTZIUQAP6XFUI3FPINUGUPBMULMTEHJPIKX6T","amount":"0.0460000"}"#;

/// Generate a body of `events` frames, cut into 1 KiB chunks
fn generate_body(events: usize) -> Vec<Vec<u8>> {
    let text: String = (0..events)
        .map(|i| format!("id: {}\ndata: {}\n\n", i, EFFECT))
        .collect();
    text.as_bytes().chunks(1024).map(<[u8]>::to_vec).collect()
}

fn frame_all(chunks: &[Vec<u8>]) -> usize {
    let mut lines = LineSplitter::new();
    let mut parser = FrameParser::new();
    let mut count = 0;
    for chunk in chunks {
        lines.push(chunk);
        while let Some(line) = lines.next_line() {
            if parser.feed_line(&line).is_some() {
                count += 1;
            }
        }
    }
    count
}

fn bench_framing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sse_framing");

    for events in [1, 10, 100, 1000].iter() {
        let chunks = generate_body(*events);
        let bytes: usize = chunks.iter().map(Vec::len).sum();
        group.throughput(Throughput::Bytes(bytes as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_events", events)),
            &chunks,
            |b, chunks| {
                b.iter(|| black_box(frame_all(black_box(chunks))));
            },
        );
    }

    group.finish();
}

fn bench_decode_effect(c: &mut Criterion) {
    c.bench_function("decode_account_credited", |b| {
        b.iter(|| {
            let effect = decode_effect(black_box(EFFECT.as_bytes()));
            black_box(effect)
        });
    });
}

criterion_group!(benches, bench_framing, bench_decode_effect);
criterion_main!(benches);
