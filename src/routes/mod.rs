pub mod default_route;
pub mod footprint_route;
