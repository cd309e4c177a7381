//! Domain types for WeekdayLab

pub mod observation;
pub mod pair;
pub mod result;
pub mod series;
pub mod weekday;

pub use observation::{PriceObservation, RawObservation};
pub use pair::{Role, WeekdayPair};
pub use result::BacktestResult;
pub use series::{SeriesError, TimeSeries};
pub use weekday::{DayOfWeek, WeekdayError};
