use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use digipin::{Coordinate, Digipin, DigipinBuilder};

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let digipin = Digipin::default();

    group.bench_function("encode", |b| {
        b.iter(|| {
            digipin
                .encode(black_box(28.6139), black_box(77.2090))
                .unwrap()
        })
    });

    group.bench_function("decode", |b| {
        b.iter(|| digipin.decode(black_box("39J438TJC7")).unwrap())
    });

    group.bench_function("decode_grouped", |b| {
        b.iter(|| digipin.decode(black_box("39J-438-TJC7")).unwrap())
    });

    group.bench_function("is_valid_code", |b| {
        b.iter(|| digipin.is_valid_code(black_box("39J438TJC7")))
    });

    for precision in [4usize, 7, 10] {
        let coarse = DigipinBuilder::new().precision(precision).build().unwrap();
        group.bench_with_input(
            BenchmarkId::new("encode_precision", precision),
            &precision,
            |b, _| {
                b.iter(|| {
                    coarse
                        .encode(black_box(12.9716), black_box(77.5946))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let digipin = Digipin::default();

    for radius in [1i64, 3, 10] {
        group.bench_with_input(BenchmarkId::new("neighbors", radius), &radius, |b, &r| {
            b.iter(|| digipin.neighbors(black_box("39J438TJC7"), r).unwrap())
        });
    }

    let center = Coordinate::new(28.6139, 77.2090).unwrap();
    for meters in [10.0, 50.0, 200.0] {
        group.bench_with_input(
            BenchmarkId::new("within_radius", meters as u64),
            &meters,
            |b, &m| b.iter(|| digipin.within_radius(black_box(&center), m).unwrap()),
        );
    }

    group.finish();
}

fn benchmark_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let digipin = Digipin::default();
    let code = digipin.decode("39J438TJC7").unwrap().into_inner();
    let from = Coordinate::new(28.6139, 77.2090).unwrap();
    let to = Coordinate::new(19.076, 72.8777).unwrap();

    group.bench_function("distance_meters", |b| {
        b.iter(|| digipin.distance_meters(black_box(&from), black_box(&to)))
    });

    group.bench_function("precision_description", |b| {
        b.iter(|| digipin.precision_description(black_box(&code)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_codec, benchmark_search, benchmark_metrics);
criterion_main!(benches);
