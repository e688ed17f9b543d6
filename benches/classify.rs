use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_rank::cards::{parse_cards, Card, Face, Suit};
use poker_rank::evaluator::classify;
use poker_rank::rules::RuleSet;
use poker_rank::showdown::winners;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn random_hands(count: usize, size: usize, seed: u64) -> Vec<Vec<Card>> {
    let deck: Vec<Card> =
        Suit::ALL.iter().flat_map(|&s| Face::NATURAL.iter().map(move |&f| Card::new(f, s))).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut cards = deck.clone();
            cards.shuffle(&mut rng);
            cards.truncate(size);
            cards
        })
        .collect()
}

fn bench_classify_fixed(c: &mut Criterion) {
    let rules = RuleSet::standard();
    let deuces = RuleSet::named("deuceswild");
    let hi = parse_cards("Ah Kd 7s 5c 2d").unwrap_or_default();
    let royal = parse_cards("As Ks Qs Js Ts").unwrap_or_default();
    let wild = parse_cards("2h 2c 9s 8s 6s").unwrap_or_default();

    let mut g = c.benchmark_group("classify_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| classify(black_box(input), &rules))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &royal, |b, input| {
        b.iter(|| classify(black_box(input), &rules))
    });
    g.bench_with_input(BenchmarkId::new("deuces_wild", "2,2,9,8,6"), &wild, |b, input| {
        b.iter(|| classify(black_box(input), &deuces))
    });
    g.finish();
}

fn bench_classify_seven(c: &mut Criterion) {
    let rules = RuleSet::standard();
    let hands = random_hands(256, 7, 42);
    c.bench_function("classify_seven_random", |b| {
        b.iter(|| {
            for cards in &hands {
                let _ = black_box(classify(black_box(cards), &rules));
            }
        })
    });
}

fn bench_winners(c: &mut Criterion) {
    let rules = RuleSet::standard();
    let hands: Vec<_> =
        random_hands(9, 7, 7).iter().filter_map(|cards| classify(cards, &rules).ok()).collect();
    c.bench_function("winners_nine_hands", |b| b.iter(|| winners(black_box(&hands))));
}

criterion_group!(benches, bench_classify_fixed, bench_classify_seven, bench_winners);
criterion_main!(benches);
