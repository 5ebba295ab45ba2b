use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use qtclog::{
    adif::read_adif,
    contact::ContactRecord,
    core::{batcher::next_batch, cabrillo::format_lines, parser::parse_text},
    qtc::MatchPolicy,
};

fn adif_log(n: usize) -> String {
    let mut out = String::from("<ADIF_VER:5>3.1.4<EOH>\n");
    for i in 0..n {
        let call = format!("K{i}ABC");
        out.push_str(&format!(
            "<TIME_ON:6>{:04}00<CALL:{}>{call}<SRX:4>{:04}<EOR>\n",
            i % 2400,
            call.len(),
            i % 10_000
        ));
    }
    out
}

fn bench_read_adif(c: &mut Criterion) {
    let text = adif_log(50_000);
    c.bench_function("read_adif_50k", |b| {
        b.iter(|| {
            let _ = read_adif(&text).expect("adif");
        });
    });
}

fn bench_batches(c: &mut Criterion) {
    let contacts: Vec<ContactRecord> = read_adif(&adif_log(10_000)).expect("adif");
    c.bench_function("next_batch_walk_10k", |b| {
        b.iter(|| {
            let mut start = 0;
            while let Ok(qtclog::core::batcher::BatchOutcome::Ready { next_index, .. }) =
                next_batch(&contacts, start, 10)
            {
                start = next_index;
            }
        });
    });
}

fn bench_parse_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_block");
    for n in [10usize, 100usize, 1000usize] {
        let mut raw = format!("QTC 1/{n} RX 14080 2024-01-15 12:34Z\n");
        for i in 0..n {
            raw.push_str(&format!("{:04}-W{i}ZD-{i}\n", i % 2400));
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &raw, |b, raw| {
            b.iter(|| {
                let parsed = parse_text(raw, MatchPolicy::SecondMatch).expect("parse");
                let _ = format_lines(&parsed.block, "N1AAA", "W2BBB");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read_adif, bench_batches, bench_parse_block);
criterion_main!(benches);
