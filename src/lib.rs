pub mod graphs;
pub mod monte_carlo;
pub mod search;
pub mod utility;
