//! Tokenizer benchmarks.
//!
//! Run with: `cargo bench --package jackc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jackc_lex::scan;

const SMALL: &str = "let x = 42;";

const CLASS: &str = r#"
// Computes the n-th square.
class Square {
    field int size;

    constructor Square new(int n) {
        let size = n;
        return this;
    }

    /* Multiply through the runtime library. */
    method int area() {
        return size * size;
    }

    function void main() {
        var Square s;
        var int i;
        let s = Square.new(3);
        while (i < 10) {
            do Output.printInt(s.area());
            let i = i + 1;
        }
        return;
    }
}
"#;

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    group.throughput(Throughput::Bytes(SMALL.len() as u64));
    group.bench_function("statement", |b| b.iter(|| scan(black_box(SMALL)).len()));

    group.throughput(Throughput::Bytes(CLASS.len() as u64));
    group.bench_function("class", |b| b.iter(|| scan(black_box(CLASS)).len()));

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
