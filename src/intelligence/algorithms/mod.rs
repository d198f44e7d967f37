// ABOUTME: Calorie algorithms for each supported workout type
// ABOUTME: Running, sports walking, and swimming implementations of Training

/// Running calorie formula
pub mod running;

/// Sports walking calorie formula with quantized speed/height term
pub mod walking;

/// Swimming mean speed and calorie formula
pub mod swimming;
