use std::fmt;
use std::num::NonZeroU32;

use crate::decimal::{Decimal, DecimalContext};

/// 온도 단위를 정의한다. 배율표를 쓰지 않고 고정된 1차식으로만 변환한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// 메뉴 표시 순서.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// 표에 등록된 이름과 정확히 일치할 때만 단위를 돌려준다.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.name() == name)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const NINE: NonZeroU32 = match NonZeroU32::new(9) {
    Some(n) => n,
    None => unreachable!(),
};
const FIVE: NonZeroU32 = match NonZeroU32::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

fn kelvin_offset() -> Decimal {
    Decimal::new(27315, -2)
}

fn fahrenheit_offset() -> Decimal {
    Decimal::from(32)
}

// v * 9/5 + 32
fn celsius_to_fahrenheit(ctx: &DecimalContext, value: &Decimal) -> Decimal {
    ctx.add(&ctx.mul_ratio(value, 9, FIVE), &fahrenheit_offset())
}

// (v - 32) * 5/9
fn fahrenheit_to_celsius(ctx: &DecimalContext, value: &Decimal) -> Decimal {
    ctx.mul_ratio(&ctx.sub(value, &fahrenheit_offset()), 5, NINE)
}

/// 온도를 서로 다른 단위로 변환한다. 기준 단위를 거치지 않고 단위 쌍마다 고정식을 쓴다.
///
/// 물리적으로 불가능한 값(0 K 미만 등)도 그대로 계산한다. 같은 단위 간 변환은 입력을 그대로 돌려준다.
pub fn convert_temperature(
    ctx: &DecimalContext,
    value: &Decimal,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Decimal {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Fahrenheit) => celsius_to_fahrenheit(ctx, value),
        (Celsius, Kelvin) => ctx.add(value, &kelvin_offset()),
        (Fahrenheit, Celsius) => fahrenheit_to_celsius(ctx, value),
        (Fahrenheit, Kelvin) => ctx.add(&fahrenheit_to_celsius(ctx, value), &kelvin_offset()),
        (Kelvin, Celsius) => ctx.sub(value, &kelvin_offset()),
        (Kelvin, Fahrenheit) => celsius_to_fahrenheit(ctx, &ctx.sub(value, &kelvin_offset())),
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value.clone(),
    }
}
