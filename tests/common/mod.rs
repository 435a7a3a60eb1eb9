use wormforage_lib::model::config::SimulationConfig;
use wormforage_lib::model::grid::Coord;
use wormforage_lib::model::Simulation;

#[allow(dead_code)]
pub struct SimBuilder {
    config: SimulationConfig,
    seed: u64,
}

#[allow(dead_code)]
impl SimBuilder {
    pub fn new() -> Self {
        Self {
            config: SimulationConfig {
                n_agents: 10,
                n_food: 1000,
                clustering: 1.0,
                dim_grid: 20,
                social: false,
                multispot: false,
                num_spots: 1,
                clustered: false,
                strain_specific: false,
            },
            seed: 42,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimulationConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agents(mut self, n: usize) -> Self {
        self.config.n_agents = n;
        self
    }

    pub fn with_food(mut self, n: u64) -> Self {
        self.config.n_food = n;
        self
    }

    pub fn with_grid(mut self, dim: u32) -> Self {
        self.config.dim_grid = dim;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.config.clustering = gamma;
        self.config.multispot = false;
        self
    }

    pub fn with_spots(mut self, n: u32) -> Self {
        self.config.multispot = true;
        self.config.num_spots = n;
        self
    }

    pub fn with_behavior(mut self, social: bool, strain_specific: bool) -> Self {
        self.config.social = social;
        self.config.strain_specific = strain_specific;
        self
    }

    pub fn clustered(mut self) -> Self {
        self.config.clustered = true;
        self
    }

    pub fn config(&self) -> SimulationConfig {
        self.config.clone()
    }

    pub fn build(self) -> Simulation {
        Simulation::with_seed(self.config, self.seed).expect("Failed to build simulation")
    }
}

/// Positions of every food unit, in placement order.
#[allow(dead_code)]
pub fn food_positions(sim: &Simulation) -> Vec<Coord> {
    sim.grid().food_units().iter().map(|f| f.pos).collect()
}

/// Mean toroidal distance over all pairs of points.
#[allow(dead_code)]
pub fn mean_pairwise_distance(points: &[Coord], dim: u32) -> f64 {
    let mut sum = 0.0;
    let mut pairs = 0u64;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            sum += a.toroidal_distance(*b, dim);
            pairs += 1;
        }
    }
    if pairs == 0 {
        0.0
    } else {
        sum / pairs as f64
    }
}
