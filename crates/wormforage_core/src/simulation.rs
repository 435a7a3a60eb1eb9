//! The simulation orchestrator.
//!
//! A [`Simulation`] owns the grid, the worm roster, the step counter, the
//! random source and the metrics stream of a single run. Construction
//! follows a fixed order: grid, worms, food, first snapshot. Every
//! [`Simulation::step`] samples the metrics, activates each worm once in a
//! freshly shuffled order, bumps the step counter and samples again.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use wormforage_data::{WormId, WormState};

use crate::behavior::Behavior;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::food;
use crate::grid::Grid;
use crate::metrics::MetricsCollector;
use crate::placement;
use crate::rng::create_rng;

/// A worm together with the strategy driving it.
#[derive(Debug, Clone)]
pub struct Worm {
    pub state: WormState,
    pub behavior: Behavior,
}

/// One simulation run.
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    worms: Vec<Worm>,
    steps: u64,
    initial_food: u64,
    rng: ChaCha8Rng,
    metrics: MetricsCollector,
    activation_order: Vec<WormId>,
}

impl Simulation {
    /// Builds a run from `config`, drawing every random choice from `rng`.
    pub fn new(config: SimulationConfig, mut rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        let strategy = config.placement()?;
        let layout = config.food_layout()?;

        let mut grid = Grid::new(config.dim_grid)?;

        let positions = placement::place(&grid, config.n_agents, strategy, &mut rng)?;
        let behavior = Behavior::select(config.social, config.strain_specific);
        let worms: Vec<Worm> = positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| {
                let id = WormId(i);
                grid.place_agent(id, pos);
                Worm {
                    state: WormState::new(id, pos, behavior.kind()),
                    behavior,
                }
            })
            .collect();

        food::generate(&mut grid, config.n_food, layout, &mut rng);
        let initial_food = grid.get_total_food();

        tracing::debug!(
            agents = worms.len(),
            food = initial_food,
            dim = config.dim_grid,
            kind = ?behavior.kind(),
            "Simulation constructed"
        );

        let mut sim = Self {
            config,
            grid,
            worms,
            steps: 0,
            initial_food,
            rng,
            metrics: MetricsCollector::new(),
            activation_order: Vec::new(),
        };
        sim.collect();
        Ok(sim)
    }

    /// Builds a run with a generator seeded from `seed`.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::new(config, create_rng(seed))
    }

    /// Advances the run by one step.
    pub fn step(&mut self) {
        self.collect();

        let mut order: Vec<usize> = (0..self.worms.len()).collect();
        order.shuffle(&mut self.rng);
        for &i in &order {
            let worm = &mut self.worms[i];
            worm.behavior
                .activate(&mut worm.state, &mut self.grid, &mut self.rng);
        }
        self.activation_order.clear();
        self.activation_order.extend(order.into_iter().map(WormId));

        self.steps += 1;
        self.collect();

        if self.steps % 1000 == 0 {
            tracing::debug!(step = self.steps, food = self.total_food(), "Simulation step");
        }
    }

    fn collect(&mut self) {
        self.metrics
            .collect(self.steps, &self.grid, self.worms.iter().map(|w| &w.state));
    }

    /// Remaining food across the whole grid.
    #[must_use]
    pub fn total_food(&self) -> u64 {
        self.grid.get_total_food()
    }

    /// Food on the grid right after generation.
    #[must_use]
    pub fn initial_food(&self) -> u64 {
        self.initial_food
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether remaining food fell below `fraction` of the initial amount.
    #[must_use]
    pub fn is_depleted(&self, fraction: f64) -> bool {
        (self.total_food() as f64) < self.initial_food as f64 * fraction
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn worms(&self) -> &[Worm] {
        &self.worms
    }

    #[must_use]
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// Order in which worms were activated during the latest step.
    #[must_use]
    pub fn activation_order(&self) -> &[WormId] {
        &self.activation_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use wormforage_data::BehaviorKind;

    fn config() -> SimulationConfig {
        SimulationConfig {
            n_agents: 8,
            n_food: 200,
            clustering: 1.0,
            dim_grid: 12,
            social: true,
            multispot: false,
            num_spots: 1,
            clustered: false,
            strain_specific: false,
        }
    }

    #[test]
    fn test_construction_registers_worms_and_food() {
        let sim = Simulation::with_seed(config(), 1).unwrap();
        assert_eq!(sim.worms().len(), 8);
        assert_eq!(sim.total_food(), 200);
        assert_eq!(sim.initial_food(), 200);
        assert_eq!(sim.steps(), 0);
        assert_eq!(sim.metrics().steps(), vec![0]);
        for w in sim.worms() {
            assert_eq!(w.state.kind, BehaviorKind::Social);
            assert_eq!(sim.grid().cell(w.state.pos).worms, vec![w.state.id]);
        }
    }

    #[test]
    fn test_step_activates_every_worm_once() {
        let mut sim = Simulation::with_seed(config(), 2).unwrap();
        sim.step();
        assert_eq!(sim.steps(), 1);
        let mut order: Vec<usize> = sim.activation_order().iter().map(|id| id.0).collect();
        order.sort_unstable();
        assert_eq!(order, (0..8).collect::<Vec<_>>());
        assert!(sim.worms().iter().all(|w| w.state.steps_taken == 1));
    }

    #[test]
    fn test_invalid_spot_count_is_fatal() {
        let cfg = SimulationConfig {
            multispot: true,
            num_spots: 3,
            ..config()
        };
        assert!(matches!(
            Simulation::with_seed(cfg, 3),
            Err(ConfigError::UnsupportedSpotCount(3))
        ));
    }

    #[test]
    fn test_too_many_agents_is_fatal() {
        let cfg = SimulationConfig {
            n_agents: 145,
            ..config()
        };
        assert!(matches!(
            Simulation::with_seed(cfg, 4),
            Err(ConfigError::TooManyAgents { .. })
        ));
    }

    #[test]
    fn test_is_depleted_threshold() {
        let sim = Simulation::with_seed(config(), 5).unwrap();
        assert!(!sim.is_depleted(0.1));
        assert!(sim.is_depleted(1.5));
    }
}
