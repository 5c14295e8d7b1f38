// Re-export parry for the f64 build
pub use parry3d_f64 as parry3d;

// Our Real scalar type:
pub type Real = f64;

/// Tolerance used for plane classification and degenerate-edge checks.
pub const EPSILON: Real = 1e-8;

// Tau
/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
