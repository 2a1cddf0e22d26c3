use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsontree::parse;

fn build_document(records: usize) -> String {
    let mut doc = String::from("[");
    for i in 0..records {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!(
            r#"{{"id":{i},"name":"record {i}","score":{i}.2500,"tags":["a","b"],"active":{},"meta":null}}"#,
            i % 2 == 0
        ));
    }
    doc.push(']');
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = build_document(200);

    c.bench_function("parse_document", |b| {
        b.iter(|| parse(black_box(&doc)).unwrap());
    });

    let tree = parse(&doc).unwrap();
    c.bench_function("print_document", |b| {
        b.iter(|| black_box(&tree).to_string());
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
