use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = include_str!("../tests/data/lvm.conf");

fn large_config(copies: usize) -> String {
    let mut out = String::with_capacity(SAMPLE.len() * copies + copies * 16);
    for idx in 0..copies {
        out.push_str(&format!("host{idx} {{\n"));
        out.push_str(SAMPLE);
        out.push_str("}\n");
    }
    out
}

fn bench_load_write(c: &mut Criterion) {
    let input = large_config(200);
    let document = volcfg::from_str(&input).expect("parse failed");

    let mut group = c.benchmark_group("lvm_conf_x200");
    group.bench_function("load", |b| {
        b.iter(|| {
            let document = volcfg::from_str(black_box(&input)).expect("parse failed");
            black_box(document);
        });
    });
    group.bench_function("write", |b| {
        b.iter(|| {
            let text = volcfg::to_string(black_box(&document)).expect("write failed");
            black_box(text);
        });
    });
    group.bench_function("find_int", |b| {
        b.iter(|| {
            let path = black_box("host199/activation/thin/pool_autoextend_threshold");
            black_box(document.find_int(path, '/', 0));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_load_write);
criterion_main!(benches);
