use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panlaw_dsp::{pan_block, prepare_table, PanLaw, PanPosition};

fn bench_pan(c: &mut Criterion) {
    let law = PanLaw::TRACKER;
    c.bench_function("pan law all positions", |b| {
        b.iter(|| {
            for pos in PanPosition::iter() {
                black_box(law.gains(black_box(pos)));
            }
        })
    });

    prepare_table();
    let input = vec![0.5f32; 2 * 512];
    let mut output = vec![0.0f32; 2 * 512];
    let pan = PanPosition::new(-12).unwrap();
    c.bench_function("pan block 2x512", |b| {
        b.iter(|| pan_block(black_box(&input), &mut output, 0.8, pan))
    });
}

criterion_group!(benches, bench_pan);
criterion_main!(benches);
