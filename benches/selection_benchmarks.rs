use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use plurals::{Condition, PluralOperands, PluralRuleType, PluralRules, PluralSelector, resolve};
use std::hint::black_box;

fn bench_condition_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition_parsing");

    let conditions = [
        ("english_one", "i = 1 and v = 0"),
        (
            "russian_few",
            "v = 0 and i % 10 = 2..4 and i % 100 != 12..14",
        ),
        (
            "breton_few",
            "n % 10 = 3..4,9 and n % 100 != 10..19,70..79,90..99",
        ),
        (
            "latvian_one",
            "n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11 or v != 2 and f % 10 = 1",
        ),
    ];

    for (name, text) in conditions {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| Condition::parse(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn bench_operands(c: &mut Criterion) {
    let mut group = c.benchmark_group("operands");

    group.bench_function("from_integer", |b| {
        b.iter(|| PluralOperands::from(black_box(1_234_567i64)))
    });

    group.bench_function("from_decimal_str", |b| {
        b.iter(|| black_box("1234.5670").parse::<PluralOperands>().unwrap())
    });

    group.bench_function("from_compact_str", |b| {
        b.iter(|| black_box("1.2c6").parse::<PluralOperands>().unwrap())
    });

    group.bench_function("from_f64", |b| {
        b.iter(|| PluralOperands::try_from(black_box(0.25f64)).unwrap())
    });

    group.finish();
}

fn bench_locale_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_resolution");

    for name in ["en", "pt_PT", "zh-Hant-TW", "iw_IL"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| resolve(black_box(name)).unwrap())
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for locale in ["en", "ru", "ar", "cy"] {
        let rules = PluralRules::for_locale(locale).unwrap();
        group.bench_with_input(BenchmarkId::new("select_0_to_200", locale), &rules, |b, rules| {
            b.iter(|| {
                for n in 0..200i64 {
                    black_box(rules.select(black_box(n)));
                }
            })
        });
    }

    let fr = PluralRules::try_new("fr", PluralRuleType::Cardinal).unwrap();
    group.bench_function("select_str_fr", |b| {
        b.iter(|| fr.select_str(black_box("1000000.0")).unwrap())
    });

    group.finish();
}

fn bench_selector(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector");

    let cached = PluralSelector::new();
    group.bench_function("cached_lookup", |b| {
        b.iter(|| cached.select(black_box("ru_RU"), black_box(21i64)).unwrap())
    });

    let uncached = PluralSelector::builder().cache(false).build();
    group.bench_function("uncached_lookup", |b| {
        b.iter(|| uncached.select(black_box("ru_RU"), black_box(21i64)).unwrap())
    });

    group.bench_function("build_rules", |b| {
        b.iter(|| PluralRules::for_locale(black_box("ar_EG")).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_condition_parsing,
    bench_operands,
    bench_locale_resolution,
    bench_selection,
    bench_selector
);
criterion_main!(benches);
