mod date;
mod models;
mod symbol;
mod timestamp;

pub use date::TradingDate;
pub use models::{PriceObservation, RankedChange};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
