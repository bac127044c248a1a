//! Decorative particle field with wall-bounce reflection.
//!
//! DESIGN
//! ======
//! The field owns the physics state and one [`Sprite`] per particle. Moving
//! the sprite is the only side effect of a frame: the browser sprite updates a
//! DOM node's transform, tests use a recording sprite. Dropping the field
//! drops every sprite, which is how the browser side tears the nodes down.
//!
//! Steady-state motion reflects velocity at the walls without touching
//! position, so a particle may sit up to one step outside the bounds for a
//! frame. [`ParticleField::resize`] is the only place positions are clamped.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;

use crate::consts::{
    PARTICLE_OPACITY_MAX, PARTICLE_OPACITY_MIN, PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN, PARTICLE_SPEED,
};
use crate::error::EffectsError;

/// Viewport extent in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject negative or non-finite dimensions.
    pub fn validated(self) -> Result<Self, EffectsError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(self)
        } else {
            Err(EffectsError::InvalidBounds { width: self.width, height: self.height })
        }
    }
}

/// Source of the current viewport extent. Queried once per frame.
pub trait BoundsProvider {
    fn bounds(&self) -> Bounds;
}

impl<F: Fn() -> Bounds> BoundsProvider for F {
    fn bounds(&self) -> Bounds {
        self()
    }
}

/// Visual handle owned by exactly one particle.
pub trait Sprite {
    /// Move the sprite so it renders at `(x, y)`.
    fn place(&mut self, x: f64, y: f64);
}

/// Presentation-only attributes chosen at spawn time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Look {
    pub radius: f64,
    pub opacity: f64,
}

/// One moving point.
#[derive(Debug)]
pub struct Particle<S> {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    look: Look,
    sprite: S,
}

impl<S: Sprite> Particle<S> {
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    #[must_use]
    pub fn look(&self) -> Look {
        self.look
    }

    #[must_use]
    pub fn sprite(&self) -> &S {
        &self.sprite
    }

    fn step(&mut self, bounds: Bounds) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x <= 0.0 || self.x >= bounds.width {
            self.vx = -self.vx;
        }
        if self.y <= 0.0 || self.y >= bounds.height {
            self.vy = -self.vy;
        }
        self.sprite.place(self.x, self.y);
    }

    fn clamp_into(&mut self, bounds: Bounds) {
        let outside = self.x < 0.0 || self.x > bounds.width || self.y < 0.0 || self.y > bounds.height;
        if !outside {
            return;
        }
        self.x = self.x.clamp(0.0, bounds.width);
        self.y = self.y.clamp(0.0, bounds.height);
        self.sprite.place(self.x, self.y);
    }
}

/// Fixed-size set of independently moving particles.
pub struct ParticleField<S, P> {
    particles: Vec<Particle<S>>,
    provider: P,
}

impl<S: Sprite, P: BoundsProvider> ParticleField<S, P> {
    /// Spawn `count` particles inside the provider's current bounds.
    ///
    /// `make_sprite` is called once per particle with its look; the returned
    /// sprite is placed at the spawn position before the field is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::InvalidBounds`] if the provider reports a
    /// negative or non-finite extent.
    pub fn initialize<R, F>(count: usize, provider: P, rng: &mut R, mut make_sprite: F) -> Result<Self, EffectsError>
    where
        R: Rng + ?Sized,
        F: FnMut(Look) -> S,
    {
        Self::try_initialize(count, provider, rng, |look| Ok::<S, EffectsError>(make_sprite(look)))
    }

    /// [`Self::initialize`] with a fallible sprite factory.
    ///
    /// # Errors
    ///
    /// Invalid bounds, or the first error `make_sprite` returns. Sprites
    /// created before the failure are dropped.
    pub fn try_initialize<R, F, E>(count: usize, provider: P, rng: &mut R, mut make_sprite: F) -> Result<Self, E>
    where
        R: Rng + ?Sized,
        F: FnMut(Look) -> Result<S, E>,
        E: From<EffectsError>,
    {
        let bounds = provider.bounds().validated()?;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.random::<f64>() * bounds.width;
            let y = rng.random::<f64>() * bounds.height;
            let vx = rng.random_range(-1.0..1.0) * PARTICLE_SPEED;
            let vy = rng.random_range(-1.0..1.0) * PARTICLE_SPEED;
            let look = Look {
                radius: rng.random_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
                opacity: rng.random_range(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX),
            };
            let mut sprite = make_sprite(look)?;
            sprite.place(x, y);
            particles.push(Particle { x, y, vx, vy, look, sprite });
        }
        Ok(Self { particles, provider })
    }

    /// Move every particle one step, reflecting at the current bounds.
    pub fn advance(&mut self) {
        let bounds = self.provider.bounds();
        for particle in &mut self.particles {
            particle.step(bounds);
        }
    }

    /// Pull any particle outside the new bounds back onto the boundary.
    ///
    /// Velocities are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::InvalidBounds`] for negative or non-finite
    /// dimensions; the field is not modified in that case.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), EffectsError> {
        let bounds = Bounds::new(width, height).validated()?;
        for particle in &mut self.particles {
            particle.clamp_into(bounds);
        }
        Ok(())
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle<S>] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
