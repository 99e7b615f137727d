#[macro_use]
extern crate approx;

mod contact_shapes;
mod expanding_simplex;
mod swept_epa;
