use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::*;
use crate::simulation::{Simulation, Tick};
use crate::snapshot::{Counts, Snapshot};

/// The state of the simulation.
#[derive(Debug, Clone)]
pub struct Model {
    population: Vec<Cell>,
    time: Tick,
    config: Config,
}

impl Model {
    /// Builds `cells` cells inside the default bounds. The first
    /// `infected_num` start infected and the following `immune_num` immune.
    pub fn new(cells: i64, speed: f64, infected_num: i64, immune_num: i64) -> Result<Model> {
        let config = Config {
            cell_count: cells,
            cell_speed: speed,
            infected_count: infected_num,
            immune_count: immune_num,
            ..Default::default()
        };
        Model::with_config(&config)
    }

    /// Builds a model from every parameter in `config`, seeding the random
    /// placement from `config.seed` when present.
    pub fn with_config(config: &Config) -> Result<Model> {
        match config.seed {
            Some(seed) => Model::with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => Model::with_rng(config, &mut StdRng::from_entropy()),
        }
    }

    pub fn with_rng<R: Rng>(config: &Config, rng: &mut R) -> Result<Model> {
        let cells = config.cell_count;
        let infected_num = config.infected_count;
        let immune_num = config.immune_count;
        if infected_num >= cells || infected_num <= 0 {
            return Err(Error::InvalidArgument(format!(
                "some but not all of the {} cells must begin infected, got {}",
                cells, infected_num
            )));
        }
        if immune_num > cells || immune_num < 0 {
            return Err(Error::InvalidArgument(format!(
                "immune cell count must be within 0..={}, got {}",
                cells, immune_num
            )));
        }
        config.validate()?;

        let mut population: Vec<Cell> = (0..cells)
            .map(|_| {
                let location = random_location(config, rng);
                let direction = random_direction(config.cell_speed, rng);
                Cell::new(location, direction)
            })
            .collect();
        for cell in population.iter_mut().take(infected_num as usize) {
            cell.contract_disease();
        }
        if infected_num + immune_num > cells {
            warn!(
                "{} infected and {} immune exceed {} cells; immune range truncated",
                infected_num, immune_num, cells
            );
        }
        for cell in population
            .iter_mut()
            .skip(infected_num as usize)
            .take(immune_num as usize)
        {
            cell.immunize();
        }
        debug!(
            "model: {} cells, {} infected, {} immune, speed {}",
            cells, infected_num, immune_num, config.cell_speed
        );

        Ok(Model::from_cells(config.clone(), population))
    }

    /// Wraps already placed cells without checking the initial counts.
    pub fn from_cells(config: Config, population: Vec<Cell>) -> Model {
        Model {
            population,
            time: 0,
            config,
        }
    }

    pub fn population(&self) -> &[Cell] {
        &self.population
    }

    pub fn time(&self) -> Tick {
        self.time
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn counts(&self) -> Counts {
        let mut counts = Counts::default();
        for cell in self.population.iter() {
            match cell.sickness() {
                Sickness::Vulnerable => counts.vulnerable += 1,
                Sickness::Infected(_) => counts.infected += 1,
                Sickness::Immune => counts.immune += 1,
            }
        }
        counts
    }

    /// Advances every cell by one step. Contacts are rechecked across the
    /// whole population after each single cell moves, before that cell is
    /// bounced back into bounds.
    pub fn tick(&mut self) {
        self.time += 1;
        let recovery_period = self.config.recovery_period;
        for i in 0..self.population.len() {
            self.population[i].tick(recovery_period);
            self.check_contacts();
            enforce_bounds(&self.config, &mut self.population[i]);
        }
        trace!("tick {}: {:?}", self.time, self.counts());
    }

    pub fn check_contacts(&mut self) {
        let radius = self.config.cell_radius;
        for i in 0..self.population.len() {
            for j in (i + 1)..self.population.len() {
                let (left, right) = self.population.as_mut_slice().split_at_mut(j);
                let ref mut cell = left[i];
                let ref mut other = right[0];
                if cell.location.distance(other.location) < radius {
                    cell.contact_with(other);
                }
            }
        }
    }

    pub fn enforce_bounds(&self, cell: &mut Cell) {
        enforce_bounds(&self.config, cell);
    }

    pub fn is_complete(&self) -> bool {
        !self.population.iter().any(|cell| cell.is_infected())
    }
}

impl Simulation for Model {
    fn tick(&mut self) {
        Model::tick(self);
    }

    fn is_complete(&self) -> bool {
        Model::is_complete(self)
    }

    fn time(&self) -> Tick {
        self.time
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self)
    }
}

fn random_location<R: Rng>(config: &Config, rng: &mut R) -> Point {
    Point::new(
        rng.gen_range(config.min_x()..config.max_x()),
        rng.gen_range(config.min_y()..config.max_y()),
    )
}

fn random_direction<R: Rng>(speed: f64, rng: &mut R) -> Point {
    Point::from_polar(speed, rng.gen_range(0.0..2.0 * PI))
}

/// Bounces a cell that left the bounding rectangle. Each axis is clamped
/// and reflected on its own.
fn enforce_bounds(config: &Config, cell: &mut Cell) {
    if cell.location.x > config.max_x() {
        cell.location.x = config.max_x();
        cell.direction.x *= -1.0;
    }
    if cell.location.y > config.max_y() {
        cell.location.y = config.max_y();
        cell.direction.y *= -1.0;
    }
    if cell.location.x < config.min_x() {
        cell.location.x = config.min_x();
        cell.direction.x *= -1.0;
    }
    if cell.location.y < config.min_y() {
        cell.location.y = config.min_y();
        cell.direction.y *= -1.0;
    }
}
