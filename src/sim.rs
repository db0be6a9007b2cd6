//! Simulation driver: the sense -> plan -> act -> plot tick loop.

use crate::render::Plotter;
use crate::strategy::{DynStrategy, Strategy};
use crate::world::GridWorld;

/// Drives one strategy against one world, one tick at a time.
///
/// Each tick runs sense, plan, act, and plot in order. A stop signal
/// raised in any phase suppresses the remaining mutating phases of that
/// tick (plot still runs). The first tick after the stop signal performs
/// a single final plot and the simulation becomes terminal.
pub struct Simulation<P: Plotter> {
    world: GridWorld,
    strategy: DynStrategy,
    plotter: P,
    ticks: usize,
    finished: bool,
}

impl<P: Plotter> Simulation<P> {
    /// Create a simulation over `world` driven by `strategy`.
    pub fn new(world: GridWorld, strategy: DynStrategy, plotter: P) -> Self {
        Self {
            world,
            strategy,
            plotter,
            ticks: 0,
            finished: false,
        }
    }

    /// Run one tick.
    ///
    /// Returns `false` once the simulation is terminal; calling again
    /// after that is a no-op.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return false;
        }

        if self.world.is_stopped() {
            // Final frame for the display, then terminal.
            self.strategy.plot(&mut self.plotter);
            self.finished = true;
            return false;
        }

        self.strategy.sense(&mut self.world);
        if !self.world.is_stopped() {
            self.strategy.plan(&mut self.world);
        }
        if !self.world.is_stopped() {
            self.strategy.act(&mut self.world);
        }
        self.strategy.plot(&mut self.plotter);

        self.ticks += 1;
        true
    }

    /// Number of ticks that ran the phase sequence.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// The simulated world.
    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    /// The driving strategy.
    pub fn strategy(&self) -> &DynStrategy {
        &self.strategy
    }

    /// The display collaborator.
    pub fn plotter(&self) -> &P {
        &self.plotter
    }
}
