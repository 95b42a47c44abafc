//! Traveler Units - Travel-sized unit conversion
//!
//! Converts everyday quantities a traveler runs into abroad.
//!
//! Categories:
//! - Length (in, cm, m, ft)
//! - Speed (km/h, mph)
//! - Volume (gal, L)
//! - Mass (lb, oz, kg)
//! - Temperature (C, F, K) - affine, handled by formula rather than table
//!
//! Linear categories go through a static [`UnitTable`] holding one canonical
//! factor per unit pair; reverse directions are derived on construction.

mod category;
mod unit;
mod units;
mod convert;
mod temperature;

pub use category::UnitCategory;
pub use unit::Unit;
pub use units::{UnitTable, UNITS};
pub use convert::convert;
pub use temperature::{TemperatureScale, convert_temperature};
