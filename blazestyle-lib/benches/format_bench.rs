extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use blazestyle_lib::blaze_generate::blaze_style;
use blazestyle_lib::{styles_to_string, Condition, Declarations, StyleBlock};

fn wide_declarations(count: usize) -> Declarations {
    (0..count)
        .map(|i| (format!("customPropertyNumber{}", i), format!("{}px", i)))
        .collect()
}

fn bench_wide_block(c: &mut Criterion) {
    let block = StyleBlock::new(".wide").declarations(wide_declarations(10_000));

    c.bench_function("wide_block", |b| b.iter(|| styles_to_string(&block)));
}

fn bench_many_conditions(c: &mut Criterion) {
    let mut block = StyleBlock::new(".responsive").declarations(wide_declarations(8));
    for i in 0..1000 {
        block = block.condition(Condition::media(
            &format!("(max-width: {}em)", i),
            wide_declarations(8),
        ));
    }

    c.bench_function("many_conditions", |b| b.iter(|| styles_to_string(&block)));
}

fn bench_stylesheet(c: &mut Criterion) {
    let blocks: Vec<StyleBlock> = (0..10_000)
        .map(|i| StyleBlock::new(format!(".b{}", i)).declarations(wide_declarations(6)))
        .collect();

    c.bench_function("stylesheet_10k_blocks", |b| {
        b.iter(|| blaze_style::format_stylesheet(&blocks))
    });
}

criterion_group!(benches, bench_wide_block, bench_many_conditions, bench_stylesheet);
criterion_main!(benches);
