//! Presentation layer for the recovery calculator: terminal rendering and
//! file reporters. The core stays presentation-agnostic; everything here
//! applies the 2-decimal display rounding.

pub mod export;
pub mod render;
