//! Live readouts of the simulation state

use crate::physics::Simulation;

/// Number of telemetry lines shown on screen
pub const LINE_COUNT: usize = 9;

const LABELS: [(&str, &str); LINE_COUNT] = [
    ("Charge Q1", "nC"),
    ("Charge Q2", "nC"),
    ("Speed Q1", "m/s"),
    ("Speed Q2", "m/s"),
    ("Position Q1", "m"),
    ("Position Q2", "m"),
    ("Distance between Q1 and Q2", "m"),
    ("Force Applied to Q1", "N"),
    ("Force Applied to Q2", "N"),
];

/// Snapshot of the values displayed each frame, in display units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub values: [f32; LINE_COUNT],
}

impl Telemetry {
    pub fn capture(sim: &Simulation) -> Self {
        let [a, b] = &sim.particles;
        let scale = sim.params.scale;
        Self {
            values: [
                a.charge,
                b.charge,
                (a.velocity / scale).abs(),
                (b.velocity / scale).abs(),
                a.position / scale,
                b.position / scale,
                sim.distance(),
                a.force,
                b.force,
            ],
        }
    }

    /// Formatted lines, top to bottom
    pub fn lines(&self) -> [String; LINE_COUNT] {
        std::array::from_fn(|i| {
            let (label, unit) = LABELS[i];
            format!("{}: {:.4} {}", label, self.values[i], unit)
        })
    }
}
