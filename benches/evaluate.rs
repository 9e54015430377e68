use criterion::{black_box, criterion_group, criterion_main, Criterion};

use plategate::domain::{Plate, Policy};
use plategate::rules::RuleSet;

fn bench_evaluate(c: &mut Criterion) {
    let ruleset = RuleSet::from_policy(&Policy::default());

    let allowed = Plate::new("1234571");
    let denied_first_rule = Plate::new("1234525");
    let denied_last_rule = Plate::new("1111111");

    c.bench_function("evaluate_allowed", |b| {
        b.iter(|| ruleset.evaluate(black_box(&allowed)))
    });

    c.bench_function("evaluate_denied_first_rule", |b| {
        b.iter(|| ruleset.evaluate(black_box(&denied_first_rule)))
    });

    c.bench_function("evaluate_denied_last_rule", |b| {
        b.iter(|| ruleset.evaluate(black_box(&denied_last_rule)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
