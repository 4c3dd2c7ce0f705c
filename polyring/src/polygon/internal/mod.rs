pub mod pgon_contains;
pub mod pgon_cut;
pub mod pgon_inject;
pub mod pgon_intersects;
pub mod pgon_nearest;
pub mod pgon_validity;
