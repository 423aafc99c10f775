// benches/translit_bench.rs
//
// Forward/reverse transliteration, detection and slugs over growing inputs.
//
// Run with `cargo bench --bench tb`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use transliterate::{Direction, Transliterator};

const SAMPLES: &[(&str, &str, &str)] = &[
    ("hy", "Lorem ipsum dolor sit amet, shun t'ev voch", "Լօրեմ իպսում դօլօր սիտ ամետ, շուն թեվ ոչ"),
    ("ka", "sak'art'velo ts'ali T'bilisi", "საქართველო წალი თბილისი"),
    ("ru", "Schuka zhizn' ob''ekt e'to jolka", "Щука жизнь объект это ёлка"),
];

const LENGTH_CONFIGS: &[(&str, usize)] = &[("short", 500), ("medium", 2000), ("long", 10000)];

fn generate_text(base: &str, target_bytes: usize) -> String {
    let mut result = String::with_capacity(target_bytes + base.len());
    while result.len() < target_bytes {
        result.push_str(base);
        result.push(' ');
    }
    result
}

fn bench_translit(c: &mut Criterion) {
    let t = Transliterator::new();
    let mut group = c.benchmark_group("translit");

    for &(code, latin, script) in SAMPLES {
        for &(label, size) in LENGTH_CONFIGS {
            let latin = generate_text(latin, size);
            let script = generate_text(script, size);

            group.bench_with_input(
                BenchmarkId::new(format!("{code}/forward"), label),
                &latin,
                |b, text| b.iter(|| t.translit(black_box(text), code, Direction::Forward)),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{code}/reverse"), label),
                &script,
                |b, text| b.iter(|| t.translit(black_box(text), code, Direction::Reverse)),
            );
        }
    }
    group.finish();
}

fn bench_detect_and_slug(c: &mut Criterion) {
    let t = Transliterator::new();
    let mut group = c.benchmark_group("detect_slug");

    for &(code, _, script) in SAMPLES {
        let text = generate_text(script, 2000);
        group.bench_with_input(BenchmarkId::new("detect", code), &text, |b, text| {
            b.iter(|| t.detect_language(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("slugify", code), &text, |b, text| {
            b.iter(|| t.slugify(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_translit, bench_detect_and_slug);
criterion_main!(benches);
