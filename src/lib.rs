//! Bounded averages of ages and random person records.

pub mod people;
pub mod stats;
