mod fixture;
mod yahoo;

pub use fixture::FixtureAdapter;
pub use yahoo::YahooDailyAdapter;
