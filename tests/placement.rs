mod common;
use common::SimBuilder;
use std::collections::HashSet;
use wormforage_lib::model::error::ConfigError;
use wormforage_lib::model::grid::Coord;
use wormforage_lib::model::Simulation;
use wormforage_lib::model::state::BehaviorKind;

#[test]
fn test_uniform_start_has_one_worm_per_cell() {
    let sim = SimBuilder::new().with_grid(10).with_agents(100).build();
    let cells: HashSet<Coord> = sim.worms().iter().map(|w| w.state.pos).collect();
    assert_eq!(cells.len(), 100);
    for (_, c) in sim.grid().coord_iter() {
        assert_eq!(sim.grid().worm_count_at(c), 1);
    }
}

#[test]
fn test_uniform_start_rejects_overcrowding() {
    let config = SimBuilder::new().with_grid(5).with_agents(26).config();
    assert_eq!(
        Simulation::with_seed(config, 1).err(),
        Some(ConfigError::TooManyAgents {
            requested: 26,
            available: 25
        })
    );
}

#[test]
fn test_clustered_start_stays_within_radius() {
    for seed in 0..10 {
        let sim = SimBuilder::new()
            .with_seed(seed)
            .with_grid(35)
            .with_agents(40)
            .clustered()
            .build();
        let positions: Vec<Coord> = sim.worms().iter().map(|w| w.state.pos).collect();
        let unique: HashSet<&Coord> = positions.iter().collect();
        assert_eq!(unique.len(), 40);

        // radius ceil(sqrt(40)/2) = 4, so every pair is at most 8 apart per axis
        for a in &positions {
            for b in &positions {
                let (dx, dy) = a.toroidal_delta(*b, 35);
                assert!(dx.abs() <= 8 && dy.abs() <= 8, "{} and {} too far apart", a, b);
            }
        }
    }
}

#[test]
fn test_clustered_start_away_from_single_spot() {
    let sim = SimBuilder::new()
        .with_grid(35)
        .with_agents(40)
        .with_spots(1)
        .clustered()
        .build();
    let center = Coord::new(30, 4);
    for w in sim.worms() {
        let (dx, dy) = w.state.pos.toroidal_delta(center, 35);
        assert!(dx.abs() <= 4 && dy.abs() <= 4);
    }
}

#[test]
fn test_clustered_start_rejects_overflow() {
    let config = SimBuilder::new().with_grid(4).with_agents(17).clustered().config();
    assert!(matches!(
        Simulation::with_seed(config, 2),
        Err(ConfigError::ClusterTooSmall { requested: 17, .. })
    ));
}

#[test]
fn test_factory_picks_one_strategy_per_run() {
    let cases = [
        (false, false, BehaviorKind::Solitary),
        (true, false, BehaviorKind::Social),
        (false, true, BehaviorKind::StrainSolitary),
        (true, true, BehaviorKind::StrainSocial),
    ];
    for (social, strain, kind) in cases {
        let sim = SimBuilder::new().with_behavior(social, strain).build();
        assert!(sim.worms().iter().all(|w| w.state.kind == kind));
        assert!(sim.worms().iter().all(|w| w.behavior.kind() == kind));
    }
}
