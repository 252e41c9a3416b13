mod socify_world;
mod steps;

pub use socify_world::SocifyWorld;
