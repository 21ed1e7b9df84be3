criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        ranking_five_card_lookup,
        ranking_seven_card_best,
        ranking_omaha_constraint,
        ranking_razz_low,
        computing_turn_equity_exact,
        computing_flop_equity_exact,
        sampling_preflop_monte_carlo,
        sampling_stud_hilo,
}

fn ranking_five_card_lookup(c: &mut criterion::Criterion) {
    let table = RankTable::shared();
    let hand = Hand::from("As Kd 8c 8h 2s");
    c.bench_function("rank a 5-card Hand by table lookup", |b| {
        b.iter(|| table.rank(hand))
    });
}

fn ranking_seven_card_best(c: &mut criterion::Criterion) {
    let table = RankTable::shared();
    let hand = Hand::from("As Kd 8c 8h 2s Jc Td");
    c.bench_function("rank the best 5 of a 7-card Hand", |b| {
        b.iter(|| high::best_of(table, hand))
    });
}

fn ranking_omaha_constraint(c: &mut criterion::Criterion) {
    let table = RankTable::shared();
    let hole = Hand::from("As Ad 7c 6c");
    let board = Hand::from("Ks Qs 8c 8h 2s");
    c.bench_function("rank a 4-card hole under the Omaha constraint", |b| {
        b.iter(|| high::best_omaha(table, hole, board))
    });
}

fn ranking_razz_low(c: &mut criterion::Criterion) {
    let hand = Hand::from("As 2d 4c 5h 8s 8d Kc");
    c.bench_function("evaluate a 7-card Razz low", |b| {
        b.iter(|| low::razz(hand))
    });
}

fn computing_turn_equity_exact(c: &mut criterion::Criterion) {
    let hero = Hand::from("Ah Kh");
    let villain = Hand::from("8c 8d");
    let board = Hand::from("Qh Jh 4c 4d");
    c.bench_function("exhaust Turn equity", |b| {
        b.iter(|| Engine::seeded(0).exact(hero, villain, board))
    });
}

fn computing_flop_equity_exact(c: &mut criterion::Criterion) {
    let hero = Hand::from("Ah Kh");
    let villain = Hand::from("8c 8d");
    let board = Hand::from("Qh Jh 4c");
    c.bench_function("exhaust Flop equity", |b| {
        b.iter(|| Engine::seeded(0).exact(hero, villain, board))
    });
}

fn sampling_preflop_monte_carlo(c: &mut criterion::Criterion) {
    let hero = Hand::from("Ah Kh");
    let villain = Hand::from("8c 8d");
    c.bench_function("sample 1k preflop run-outs", |b| {
        b.iter(|| {
            let engine = Engine::seeded(0);
            let ref mut rng = engine.rng(0);
            engine.monte_carlo(hero, villain, Hand::empty(), 1_000, rng)
        })
    });
}

fn sampling_stud_hilo(c: &mut criterion::Criterion) {
    let hero = Hand::from("As 2s 3s");
    let villain = Hand::from("Kh Qd Jc");
    c.bench_function("sample 1k stud hi-lo deals", |b| {
        b.iter(|| {
            let engine = Engine::seeded(0);
            let ref mut rng = engine.rng(0);
            engine.stud(hero, villain, Hand::empty(), StudGame::HighLow8, 1_000, rng)
        })
    });
}

use potshare::cards::hand::Hand;
use potshare::equity::engine::Engine;
use potshare::equity::stud::StudGame;
use potshare::evaluation::high;
use potshare::evaluation::low;
use potshare::evaluation::table::RankTable;
