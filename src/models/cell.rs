use crate::models::*;

/// Elapsed ticks since a cell contracted the disease.
pub type InfectionTicks = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sickness {
    Vulnerable,
    Infected(InfectionTicks),
    Immune,
}

impl Default for Sickness {
    fn default() -> Sickness {
        Sickness::Vulnerable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Infected,
    Immune,
    Vulnerable,
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Infected => "red",
            Color::Immune => "cornflower blue",
            Color::Vulnerable => "gray",
        }
    }
}

/// An individual subject in the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub location: Point,
    pub direction: Point,
    sickness: Sickness,
}

impl Cell {
    pub fn new(location: Point, direction: Point) -> Cell {
        Cell {
            location,
            direction,
            sickness: Sickness::Vulnerable,
        }
    }

    pub fn sickness(&self) -> Sickness {
        self.sickness
    }

    /// Moves the cell one step, then advances its infection. An infection
    /// counter past `recovery_period` turns into immunity.
    pub fn tick(&mut self, recovery_period: InfectionTicks) {
        self.location = self.location.add(self.direction);
        if let Sickness::Infected(ticks) = self.sickness {
            let ticks = ticks + 1;
            self.sickness = Sickness::Infected(ticks);
            if ticks > recovery_period {
                self.immunize();
            }
        }
    }

    pub fn color(&self) -> Color {
        if self.is_infected() {
            Color::Infected
        } else if self.is_immune() {
            Color::Immune
        } else {
            Color::Vulnerable
        }
    }

    pub fn contract_disease(&mut self) {
        self.sickness = Sickness::Infected(0);
    }

    pub fn immunize(&mut self) {
        self.sickness = Sickness::Immune;
    }

    pub fn is_vulnerable(&self) -> bool {
        self.sickness == Sickness::Vulnerable
    }

    pub fn is_infected(&self) -> bool {
        match self.sickness {
            Sickness::Infected(_) => true,
            _ => false,
        }
    }

    pub fn is_immune(&self) -> bool {
        self.sickness == Sickness::Immune
    }

    /// Spreads the disease between two cells in contact. Both directions are
    /// checked, but a cell is never vulnerable and infected at once, so at most
    /// one of them catches it.
    pub fn contact_with(&mut self, contactor: &mut Cell) {
        if contactor.is_infected() && self.is_vulnerable() {
            self.contract_disease();
        }
        if contactor.is_vulnerable() && self.is_infected() {
            contactor.contract_disease();
        }
    }
}
