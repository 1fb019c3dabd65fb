use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tlekit::{ParseMode, TleRecord};

const LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_record");

    group.bench_function("lazy", |b| {
        b.iter(|| TleRecord::from_lines(black_box(LINE1), black_box(LINE2), ParseMode::Lazy))
    });

    group.bench_function("eager", |b| {
        b.iter(|| TleRecord::from_lines(black_box(LINE1), black_box(LINE2), ParseMode::Eager))
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let Ok(record) = TleRecord::from_lines(LINE1, LINE2, ParseMode::Eager) else {
        panic!("benchmark input must be a valid TLE");
    };

    c.bench_function("parse_record/serialize", |b| {
        b.iter(|| black_box(&record).serialize())
    });

    c.bench_function("parse_record/position", |b| {
        b.iter(|| black_box(&record).position())
    });
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
