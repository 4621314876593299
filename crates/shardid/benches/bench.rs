use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shardid::{Base58UidExt, Uid, decode, decode_local_id, encode};

// Number of tokens processed per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn components() -> Vec<(u64, u64, u64)> {
    (0..TOTAL_IDS as u64)
        .map(|i| {
            (
                (i * 2_654_435_761 + 1) & Uid::max_local_id(),
                i % (Uid::max_object_type() + 1),
                (i * 40_503) & Uid::max_shard_id(),
            )
        })
        .collect()
}

fn tokens() -> Vec<String> {
    components()
        .into_iter()
        .map(|(l, t, s)| Uid::from(l, t, s).encode().as_string())
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let inputs = components();
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("string/elems/{}", TOTAL_IDS), |b| {
        b.iter(|| {
            for &(l, t, s) in &inputs {
                black_box(encode(black_box(l), black_box(t), black_box(s)).ok());
            }
        });
    });

    group.bench_function(format!("buf/elems/{}", TOTAL_IDS), |b| {
        let ids: Vec<Uid> = inputs.iter().map(|&(l, t, s)| Uid::from(l, t, s)).collect();
        let mut buf = Uid::buf();
        b.iter(|| {
            for id in &ids {
                let token = id.encode_to_buf(&mut buf);
                black_box(token.len());
            }
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let tokens = tokens();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("uid/elems/{}", TOTAL_IDS), |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(decode(black_box(token)).ok());
            }
        });
    });

    group.bench_function(format!("local_id/elems/{}", TOTAL_IDS), |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(decode_local_id(black_box(token)).ok());
            }
        });
    });

    group.bench_function(format!("rejected/elems/{}", TOTAL_IDS), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(decode(black_box("11111111")).is_err());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
