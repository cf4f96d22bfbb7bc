use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use deck_synergy::cards::{Card, CardPool};
use deck_synergy::combos::{ComboIndex, ComboRanker, RawComboRecord};
use deck_synergy::core::{AnalysisConfig, AnalysisContext};
use deck_synergy::features::TextPatternClassifier;
use deck_synergy::graph::SynergyGraphAnalyzer;
use deck_synergy::analysis::SynergyAnalysis;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

const TEXTS: &[&str] = &[
    "{T}: Add {G}.",
    "Draw two cards.",
    "Destroy target creature.",
    "Create two 1/1 white Soldier creature tokens.",
    "Sacrifice a creature: Draw a card.",
    "Whenever another creature you control dies, each opponent loses 1 life.",
    "Proliferate.",
    "Put a +1/+1 counter on target creature.",
    "Counter target spell.",
    "Return target creature card from your graveyard to your hand.",
];

fn synthetic_pool(size: usize, rng: &mut ChaCha8Rng) -> CardPool {
    (0..size)
        .map(|i| {
            let text = TEXTS[rng.gen_range(0..TEXTS.len())];
            Card::new(format!("Card {i}"))
                .with_type_line(if i % 3 == 0 { "Creature — Human" } else { "Artifact" })
                .with_text(text)
                .with_mana_value(rng.gen_range(0..8) as f64)
        })
        .collect()
}

fn synthetic_combos(pool_size: usize, count: usize, rng: &mut ChaCha8Rng) -> Vec<RawComboRecord> {
    let names: Vec<String> = (0..pool_size).map(|i| format!("Card {i}")).collect();
    (0..count)
        .map(|i| {
            let len = rng.gen_range(2..=4);
            let cards: Vec<&String> = names.choose_multiple(rng, len).collect();
            let effect = if i % 4 == 0 { "Win the game" } else { "Infinite mana" };
            RawComboRecord::new(i.to_string(), cards.into_iter().cloned(), effect)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let pool = synthetic_pool(2_000, &mut rng);
    let ctx = AnalysisContext::new(AnalysisConfig::default()).unwrap();
    let classifier = TextPatternClassifier::new(ctx.features());

    c.bench_function("tag_pool_2000", |b| {
        b.iter(|| black_box(classifier.tag_pool(black_box(&pool))))
    });
}

fn bench_rank_and_core(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_and_core");

    for combos in [1_000, 10_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pool = synthetic_pool(1_000, &mut rng);
        let index = ComboIndex::build(synthetic_combos(1_000, combos, &mut rng), &pool);

        group.bench_with_input(BenchmarkId::new("rank", combos), &index, |b, index| {
            b.iter(|| black_box(ComboRanker::new(index, &pool).rank("Card 0").unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("kcore", combos), &index, |b, index| {
            let claimed = FxHashSet::default();
            b.iter(|| black_box(SynergyGraphAnalyzer::new(index, &pool, 20, 40).analyze(&claimed)))
        });
    }

    group.finish();
}

fn bench_full_analysis(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let pool = synthetic_pool(1_000, &mut rng);
    let index = ComboIndex::build(synthetic_combos(1_000, 5_000, &mut rng), &pool);
    let ctx = AnalysisContext::new(AnalysisConfig::default()).unwrap();

    c.bench_function("full_analysis", |b| {
        b.iter(|| black_box(SynergyAnalysis::run(&ctx, &pool, &index, "Card 0", None).unwrap()))
    });
}

criterion_group!(benches, bench_classify, bench_rank_and_core, bench_full_analysis);
criterion_main!(benches);
