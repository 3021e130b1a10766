//! Two-body electrostatic physics on a line
//!
//! Two point charges interact through Coulomb's law with linear velocity
//! damping. Positions live in scaled pixel units (`position / scale` gives
//! metres) and the state is advanced with explicit Euler.

use common::constants::{ELECTRON_MASS, K_COULOMB, PIXEL_SCALE};

/// Distance floor of two scaled pixels. Only applied when
/// [`Parameters::min_separation`] is set.
pub const MIN_SEPARATION_FLOOR: f32 = 2.0 * PIXEL_SCALE;

/// A point charge constrained to the horizontal axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Signed charge in nanocoulombs
    pub charge: f32,
    /// Position in scaled pixel units
    pub position: f32,
    pub velocity: f32,
    pub mass: f32,
    /// Force from the most recent tick, damping included
    pub force: f32,
}

impl Particle {
    pub fn new(charge: f32, position: f32, velocity: f32, mass: f32) -> Self {
        Self {
            charge,
            position,
            velocity,
            mass,
            force: 0.0,
        }
    }

    /// Horizontal centre of the sprite: shifted by half a sprite towards the
    /// positive side for positive charges and the negative side otherwise.
    pub fn sprite_x(&self, half_width: f32) -> f32 {
        if self.charge > 0.0 {
            self.position + half_width
        } else {
            self.position - half_width
        }
    }
}

/// Constants of the force law and integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub coulomb_k: f32,
    pub scale: f32,
    pub friction: f32,
    pub dt: f32,
    pub sprite_width: f32,
    /// Lower bound on the separation used by the force law, if any
    pub min_separation: Option<f32>,
}

impl Parameters {
    pub fn half_width(&self) -> f32 {
        self.sprite_width / 2.0
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            coulomb_k: K_COULOMB,
            scale: PIXEL_SCALE,
            friction: 2.0,
            dt: 0.01,
            sprite_width: 10.0,
            min_separation: None,
        }
    }
}

/// Starting state of both charges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    pub charges: [f32; 2],
    pub positions: [f32; 2],
    pub velocities: [f32; 2],
    pub masses: [f32; 2],
}

impl Default for InitialConditions {
    fn default() -> Self {
        let speed = 0.01 * PIXEL_SCALE;
        Self {
            charges: [1.0, 1.0],
            positions: [5.0, -5.0],
            velocities: [speed, speed],
            masses: [ELECTRON_MASS, ELECTRON_MASS],
        }
    }
}

/// The physics simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    pub particles: [Particle; 2],
    pub params: Parameters,
    pub ticks: u64,
}

impl Simulation {
    pub fn new(params: Parameters, initial: InitialConditions) -> Self {
        let particles = [0, 1].map(|i| {
            Particle::new(
                initial.charges[i],
                initial.positions[i],
                initial.velocities[i],
                initial.masses[i],
            )
        });

        Self {
            particles,
            params,
            ticks: 0,
        }
    }

    /// Separation fed to the force law: the gap in metres padded by one
    /// sprite width, floored if a minimum is configured.
    pub fn effective_separation(&self) -> f32 {
        let [a, b] = &self.particles;
        let p = &self.params;
        let r = (b.position - a.position).abs() / p.scale + 2.0 * p.half_width();
        match p.min_separation {
            Some(floor) => r.max(floor),
            None => r,
        }
    }

    /// Distance between the charges in metres
    pub fn distance(&self) -> f32 {
        let [a, b] = &self.particles;
        (a.position - b.position).abs() / self.params.scale
    }

    /// Unsigned Coulomb force between the charges at the current separation
    pub fn coulomb_magnitude(&self) -> f32 {
        let [a, b] = &self.particles;
        let r = self.effective_separation();
        self.params.coulomb_k * (a.charge * b.charge).abs() / (r * r)
    }

    /// +1 for like charges (repulsion), -1 for opposite charges
    pub fn polarity(&self) -> f32 {
        let [a, b] = &self.particles;
        if a.charge * b.charge < 0.0 {
            -1.0
        } else {
            1.0
        }
    }

    /// Recompute both forces from the current state.
    ///
    /// Forces are equal and opposite apart from each particle's own damping
    /// term. The sign depends only on the charge product.
    pub fn update_forces(&mut self) {
        let magnitude = self.coulomb_magnitude();
        let direction = self.polarity();
        let scale = self.params.scale;
        let friction = self.params.friction;

        let [a, b] = &mut self.particles;
        a.force = direction * magnitude * scale / a.mass - friction * a.velocity;
        b.force = -direction * magnitude * scale / b.mass - friction * b.velocity;
    }

    /// One explicit Euler update from the stored forces.
    pub fn integrate(&mut self) {
        let dt = self.params.dt;
        for particle in &mut self.particles {
            particle.velocity += particle.force * dt;
            particle.position += particle.velocity * dt;
        }
    }

    /// Step the simulation forward by one tick
    pub fn step(&mut self) {
        self.update_forces();
        self.integrate();
        self.ticks += 1;

        let [a, b] = &self.particles;
        log::trace!(
            "tick {}: x1={:.4} v1={:.4} f1={:.4} x2={:.4} v2={:.4} f2={:.4}",
            self.ticks,
            a.position,
            a.velocity,
            a.force,
            b.position,
            b.velocity,
            b.force
        );
    }

    /// Simulated seconds elapsed
    pub fn elapsed(&self) -> f32 {
        self.ticks as f32 * self.params.dt
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Parameters::default(), InitialConditions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_rest(charges: [f32; 2]) -> Simulation {
        Simulation::new(
            Parameters::default(),
            InitialConditions {
                charges,
                velocities: [0.0, 0.0],
                ..Default::default()
            },
        )
    }

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn like_charges_repel_with_equal_and_opposite_force() {
        let mut sim = at_rest([1.0, 1.0]);
        sim.update_forces();

        let [a, b] = sim.particles;
        assert!(a.force > 0.0);
        assert_eq!(a.force, -b.force);

        // 10 px apart => 1e13 m, padded by one 10-unit sprite.
        let r = 10.0f64 / 1e-12 + 10.0;
        let expected = 8.99e9 / (r * r) * 1e-12 / 9.109_383_56e-31;
        assert!(
            relative_error(a.force as f64, expected) < 1e-4,
            "force {} vs expected {}",
            a.force,
            expected
        );
    }

    #[test]
    fn opposite_charges_flip_the_sign() {
        let mut like = at_rest([1.0, 1.0]);
        let mut unlike = at_rest([1.0, -1.0]);
        like.update_forces();
        unlike.update_forces();

        assert_eq!(unlike.polarity(), -1.0);
        assert_eq!(unlike.particles[0].force, -like.particles[0].force);
        assert_eq!(unlike.particles[1].force, -like.particles[1].force);
    }

    #[test]
    fn sign_ignores_which_side_each_particle_is_on() {
        let mut sim = at_rest([1.0, 1.0]);
        sim.particles[0].position = -5.0;
        sim.particles[1].position = 5.0;
        sim.update_forces();

        assert!(sim.particles[0].force > 0.0);
        assert!(sim.particles[1].force < 0.0);
    }

    #[test]
    fn neutral_charge_leaves_only_damping() {
        let mut sim = at_rest([0.0, 1.0]);
        sim.particles[0].velocity = 3.0;
        sim.particles[1].velocity = -1.5;
        sim.update_forces();

        assert_eq!(sim.coulomb_magnitude(), 0.0);
        assert_eq!(sim.particles[0].force, -6.0);
        assert_eq!(sim.particles[1].force, 3.0);
    }

    #[test]
    fn damping_opposes_velocity() {
        let mut moving = at_rest([1.0, 1.0]);
        let mut still = at_rest([1.0, 1.0]);
        moving.particles[0].velocity = 4.0;
        moving.update_forces();
        still.update_forces();

        let diff = moving.particles[0].force - still.particles[0].force;
        assert!((diff + 8.0).abs() < 1e-3, "damping delta was {diff}");
    }

    #[test]
    fn euler_uses_updated_velocity_for_position() {
        let mut sim = at_rest([0.0, 0.0]);
        sim.params.friction = 0.0;
        sim.particles[0].force = 100.0;
        sim.particles[0].velocity = 1.0;
        sim.integrate();

        // v = 1 + 100 * 0.01 = 2, x = 5 + 2 * 0.01
        assert!((sim.particles[0].velocity - 2.0).abs() < 1e-6);
        assert!((sim.particles[0].position - 5.02).abs() < 1e-5);
    }

    #[test]
    fn step_counts_ticks() {
        let mut sim = Simulation::default();
        for _ in 0..3 {
            sim.step();
        }
        assert_eq!(sim.ticks, 3);
        assert!((sim.elapsed() - 0.03).abs() < 1e-6);
    }

    #[test]
    fn separation_floor_is_off_by_default() {
        let mut sim = at_rest([1.0, 1.0]);
        sim.params.sprite_width = 0.0;
        sim.particles[1].position = sim.particles[0].position;
        assert_eq!(sim.effective_separation(), 0.0);

        sim.params.min_separation = Some(MIN_SEPARATION_FLOOR);
        assert_eq!(sim.effective_separation(), MIN_SEPARATION_FLOOR);
    }

    #[test]
    fn separation_is_padded_by_sprite_width() {
        let sim = at_rest([1.0, 1.0]);
        let expected = 10.0 / PIXEL_SCALE + 10.0;
        assert!(relative_error(sim.effective_separation() as f64, expected as f64) < 1e-6);
        assert!(relative_error(sim.distance() as f64, 1e13) < 1e-6);
    }

    #[test]
    fn sprites_shift_towards_charge_sign() {
        let positive = Particle::new(1.0, 5.0, 0.0, 1.0);
        let negative = Particle::new(-1.0, 5.0, 0.0, 1.0);
        assert_eq!(positive.sprite_x(5.0), 10.0);
        assert_eq!(negative.sprite_x(5.0), 0.0);
    }

    #[test]
    fn defaults_start_symmetric() {
        let sim = Simulation::default();
        let [a, b] = sim.particles;
        assert_eq!(a.position, -b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.mass, ELECTRON_MASS);
        assert_eq!(a.force, 0.0);
    }
}
