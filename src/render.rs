//! Display collaborators: the plot seam and the console renderer.

use std::collections::HashSet;

use crate::core::{GridCoord, Pose};

/// One-way display seam.
///
/// Strategies hand their found-obstacle set over once per tick;
/// implementations decide what (if anything) to do with it. No return
/// value, no acknowledgement.
pub trait Plotter {
    /// Receive the current found-obstacle set.
    fn plot(&mut self, obstacles: &HashSet<GridCoord>);
}

/// Plotter that discards everything (headless runs, tests).
pub struct NullPlotter;

impl Plotter for NullPlotter {
    fn plot(&mut self, _obstacles: &HashSet<GridCoord>) {}
}

/// ASCII grid renderer.
///
/// Stores the latest plotted obstacle set and renders frames on demand:
/// dash borders, rows printed top to bottom, the robot as a heading
/// glyph (`^ < v >`), found obstacles as `*`.
pub struct ConsolePlotter {
    width: i32,
    height: i32,
    found: HashSet<GridCoord>,
}

impl ConsolePlotter {
    /// Create a renderer for a `width` x `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            found: HashSet::new(),
        }
    }

    /// Render one frame with the robot at `robot`.
    pub fn frame(&self, robot: Pose) -> String {
        let border = "-".repeat(self.width as usize + 2);

        let mut out = String::with_capacity((self.width as usize + 3) * (self.height as usize + 2));
        out.push_str(&border);
        out.push('\n');

        for y in (0..self.height).rev() {
            out.push('|');
            for x in 0..self.width {
                let cell = GridCoord::new(x, y);
                let glyph = if cell == robot.position {
                    robot.heading.glyph()
                } else if self.found.contains(&cell) {
                    '*'
                } else {
                    ' '
                };
                out.push(glyph);
            }
            out.push('|');
            out.push('\n');
        }

        out.push_str(&border);
        out
    }
}

impl Plotter for ConsolePlotter {
    fn plot(&mut self, obstacles: &HashSet<GridCoord>) {
        self.found = obstacles.clone();
    }
}
