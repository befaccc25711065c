//! 단위 정의 및 변환표 모듈 모음.

mod factors;
pub mod table;
pub mod temperature;

pub use table::{Category, CategoryDefinition, CategoryKind, ConversionTable, TableError, Unit};
pub use temperature::{convert_temperature, TemperatureUnit};
