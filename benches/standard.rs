use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use earclip::{FixedPoint, FloatingPoint, Triangulate, formats};
use earclip::tests::util;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resources");

    for (name, polygon) in util::resource_polygons() {
        group.throughput(Throughput::Elements(polygon.len() as u64));
        group.bench_with_input(format!("{} (fixed)", name), &polygon, |b, p| {
            b.iter(|| p.triangulate(FixedPoint::default(), formats::IndexedListFormat::new(Vec::<usize>::new())).expect("Triangulation failed"))
        });
        group.bench_with_input(format!("{} (floating)", name), &polygon, |b, p| {
            b.iter(|| p.triangulate(FloatingPoint::default(), formats::IndexedListFormat::new(Vec::<usize>::new())).expect("Triangulation failed"))
        });
    }

    group.finish();

    let comb = util::polygon::comb(200);
    c.bench_function("comb", |b| b.iter(|| {
        black_box(&comb).triangulate(FixedPoint::default(), formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).expect("Triangulation failed")
    }));

    let circle = util::polygon::regular(1000, 100.);
    c.bench_function("circle", |b| b.iter(|| {
        black_box(&circle).triangulate(FixedPoint::default(), formats::IndexedListFormat::new(Vec::<[usize; 3]>::new())).expect("Triangulation failed")
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
