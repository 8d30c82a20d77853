mod breakdown;
mod gap;
mod phrase;

pub use breakdown::CalendarUnitBreakdown;
pub use gap::{Direction, Gap};
pub use phrase::{Phrase, Style, Unit};
