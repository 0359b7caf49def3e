use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use isa_descriptors::descriptors::{from_rows, from_sparse_table, to_rows, to_sparse_table};
use isa_descriptors::ontology::{Comment, OntologyAnnotation};

fn make_designs(count: usize) -> Vec<OntologyAnnotation> {
    (0..count)
        .map(|i| {
            let mut design = OntologyAnnotation::new(&format!("design {}", i))
                .with_term_source_ref("OBI")
                .with_term_accession_number(&format!("OBI:{:07}", i));
            if i % 3 == 0 {
                design = design.with_comment(Comment::new("Unit", "days"));
            }
            if i % 5 == 0 {
                design = design.with_comment(Comment::new(&format!("Note {}", i % 4), "checked"));
            }
            design
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("design_descriptors");

    for count in [10usize, 100, 1000] {
        let designs = make_designs(count);
        let table = to_sparse_table(&designs);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("encode", count), &designs, |b, designs| {
            b.iter(|| to_sparse_table(black_box(designs)))
        });

        group.bench_with_input(BenchmarkId::new("decode", count), &table, |b, table| {
            b.iter(|| from_sparse_table(black_box(table)))
        });

        group.bench_with_input(BenchmarkId::new("rows_roundtrip", count), &designs, |b, designs| {
            b.iter(|| {
                let mut rows = to_rows(Some("Study Design"), designs);
                from_rows(Some("Study Design"), 0, &mut rows).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
