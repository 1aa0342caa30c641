mod fantasy_api;

pub use fantasy_api::*;
