//! Convlab Units - Unit Conversion
//!
//! Static unit tables with a scale factor to one base unit per category,
//! plus the affine temperature converter and the display formatter.
//!
//! Categories:
//! - Length (m, km, ft, mi, nmi, ...)
//! - Weight (kg, g, lb, oz, st, ...)
//! - Temperature (°C, °F, K)
//! - Speed (m/s, km/h, mph, kn, ft/s)
//! - Area (m², ft², acre, ha, ...)
//! - Volume (m³, L, gal, qt, ...)
//! - Time (s, min, h, d, ...)
//! - Digital storage (bit, byte, KB, KiB, ...)
//! - Energy (J, cal, kWh, eV, BTU, ...)
//! - Pressure (Pa, bar, psi, atm, ...)

mod category;
mod unit;
mod units;
mod temperature;
mod convert;
mod format;
mod parse;

pub use category::UnitCategory;
pub use unit::{UnitDefinition, UnitOption, ConversionError};
pub use units::{UNITS, UnitRegistry, UnitTable};
pub use temperature::{TemperatureUnit, convert_temperature};
pub use convert::{
    convert, convert_linear,
    convert_length, convert_weight, convert_speed, convert_area, convert_volume,
    convert_time, convert_digital, convert_energy, convert_pressure,
};
pub use format::format_conversion;
pub use parse::{parse_numeric_input, accepts_keystroke};

/// Convert a raw input string and render the result the way a unit
/// converter shows it. `Ok(None)` means the input holds no number yet.
pub fn convert_and_format(
    category: UnitCategory,
    input: &str,
    from: &str,
    to: &str,
) -> Result<Option<String>, ConversionError> {
    let Some(value) = parse_numeric_input(input) else {
        return Ok(None);
    };
    let converted = convert(category, value, from, to)?;
    Ok(Some(format_conversion(converted, category.id())))
}
