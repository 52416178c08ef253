use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use clinch_core::analysis::analyze_all_teams;
use clinch_core::chains::RuleChain;
use clinch_core::conditions::{analyze, AnalysisOptions};
use clinch_core::conference::Conference;
use clinch_core::game::Game;
use clinch_core::scenario::{enumerate, EnumerationOptions};
use clinch_core::standings::standings;
use clinch_core::tiebreak::resolve_standings;

/// Round robin among `teams` teams with the last `unplayed` games left open.
///
/// Results follow a fixed pattern that leaves plenty of ties.
fn create_conference(teams: usize, unplayed: usize) -> Conference {
    let names: Vec<String> = (0..teams).map(|i| format!("Team{}", i)).collect();
    let mut pairs = Vec::new();
    for i in 0..teams {
        for j in i + 1..teams {
            pairs.push((i, j));
        }
    }

    let open_from = pairs.len().saturating_sub(unplayed);
    let games = pairs
        .iter()
        .enumerate()
        .map(|(id, &(i, j))| {
            let (home, away) = (&names[i], &names[j]);
            if id >= open_from {
                Game::unplayed(id as u32, home, away)
            } else if (i + j) % 2 == 0 {
                Game::played(id as u32, home, away)
            } else {
                Game::played(id as u32, away, home)
            }
        })
        .collect();

    Conference::new("Bench", names, games).expect("valid bench conference")
}

fn bench_standings(c: &mut Criterion) {
    let conference = create_conference(14, 0);

    c.bench_function("standings_14_teams", |b| {
        b.iter(|| standings(black_box(conference.teams()), black_box(conference.games())))
    });
}

fn bench_tie_resolution(c: &mut Criterion) {
    let conference = create_conference(14, 0);
    let records = conference.standings();
    let chain = RuleChain::default();

    c.bench_function("resolve_standings_14_teams", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| resolve_standings(black_box(&records), conference.games(), &chain, &mut rng))
    });
}

fn bench_enumeration(c: &mut Criterion) {
    let conference = create_conference(8, 10);
    let chain = RuleChain::default();
    let options = EnumerationOptions::seeded(42);

    c.bench_function("enumerate_8_teams_10_games", |b| {
        b.iter(|| enumerate(black_box(&conference), &chain, &options))
    });
}

fn bench_conditions(c: &mut Criterion) {
    let conference = create_conference(8, 10);
    let scenarios = enumerate(&conference, &RuleChain::default(), &EnumerationOptions::seeded(42));
    let unplayed = conference.unplayed_games();
    let options = AnalysisOptions::default();

    c.bench_function("conditions_single_team_10_games", |b| {
        b.iter(|| analyze(black_box(&scenarios), &unplayed, "Team0", &options))
    });

    c.bench_function("conditions_all_teams_10_games", |b| {
        b.iter(|| analyze_all_teams(black_box(&scenarios), &unplayed, conference.teams(), &options))
    });
}

criterion_group!(
    benches,
    bench_standings,
    bench_tie_resolution,
    bench_enumeration,
    bench_conditions,
);
criterion_main!(benches);
