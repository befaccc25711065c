//! 변환 법칙에 대한 속성 기반 테스트.
//!
//! - 같은 단위 간 변환은 항등
//! - A -> B -> A 왕복은 유효숫자 범위 안에서 원래 값
//! - 선형 변환은 부호를 보존
//! - 입력 문자열은 엔진 호출 없이 Invalid Entry로 걸러진다

use proptest::prelude::*;

use unit_converter::conversion::Converter;
use unit_converter::decimal::{Decimal, DecimalContext};
use unit_converter::shell::{parse_input, Shell, INVALID_ENTRY};
use unit_converter::units::{convert_temperature, ConversionTable, TemperatureUnit};

// =============================================================================
// Strategies
// =============================================================================

/// 선형 카테고리 안의 모든 (카테고리, 변환 전, 변환 후) 조합.
fn linear_triples() -> Vec<(&'static str, &'static str, &'static str)> {
    let table = ConversionTable::standard().expect("standard table");
    let mut triples = Vec::new();
    for category in table.categories().iter().filter(|c| !c.is_temperature()) {
        let units = category.unit_names();
        for from in &units {
            for to in &units {
                triples.push((category.name, *from, *to));
            }
        }
    }
    triples
}

fn linear_strategy() -> impl Strategy<Value = (&'static str, &'static str, &'static str)> {
    prop::sample::select(linear_triples())
}

fn temperature_strategy() -> impl Strategy<Value = TemperatureUnit> {
    prop_oneof![
        Just(TemperatureUnit::Celsius),
        Just(TemperatureUnit::Fahrenheit),
        Just(TemperatureUnit::Kelvin),
    ]
}

fn value_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), -1.0e6..1.0e6f64, -1.0..1.0f64]
}

fn decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).expect("finite value")
}

// =============================================================================
// Linear conversion laws
// =============================================================================

proptest! {
    /// 같은 단위 간 변환은 입력을 그대로 돌려준다.
    #[test]
    fn linear_identity((category, unit, _) in linear_strategy(), value in value_strategy()) {
        let engine = Converter::standard().unwrap();
        let v = decimal(value);
        let out = engine.convert_linear(category, unit, unit, &v).unwrap();
        prop_assert_eq!(out, v);
    }

    /// 왕복 변환은 상대 오차 1e-9 이내로 원래 값이 된다.
    #[test]
    fn linear_round_trip((category, from, to) in linear_strategy(), value in value_strategy()) {
        let engine = Converter::standard().unwrap();
        let v = decimal(value);
        let there = engine.convert_linear(category, from, to, &v).unwrap();
        let back = engine.convert_linear(category, to, from, &there).unwrap();
        let tol = 1e-9 * value.abs();
        prop_assert!(
            (back.to_f64() - value).abs() <= tol,
            "{category}: {from} -> {to} -> {from}: {value} became {back}"
        );
    }

    /// 배율이 모두 양수이므로 부호가 바뀌지 않는다.
    #[test]
    fn linear_preserves_sign((category, from, to) in linear_strategy(), value in value_strategy()) {
        let engine = Converter::standard().unwrap();
        let v = decimal(value);
        let out = engine.convert_linear(category, from, to, &v).unwrap();
        prop_assert_eq!(out.is_zero(), v.is_zero());
        prop_assert_eq!(out.is_negative(), v.is_negative());
    }
}

// =============================================================================
// Temperature laws
// =============================================================================

proptest! {
    #[test]
    fn temperature_identity(unit in temperature_strategy(), value in value_strategy()) {
        let v = decimal(value);
        let out = convert_temperature(&DecimalContext::default(), &v, unit, unit);
        prop_assert_eq!(out, v);
    }

    /// 온도 왕복 변환 오차는 값 크기에 비례해 1e-7 이내.
    #[test]
    fn temperature_round_trip(
        from in temperature_strategy(),
        to in temperature_strategy(),
        value in -1.0e4..1.0e4f64,
    ) {
        let ctx = DecimalContext::default();
        let v = decimal(value);
        let there = convert_temperature(&ctx, &v, from, to);
        let back = convert_temperature(&ctx, &there, to, from);
        let tol = 1e-7 * value.abs().max(1.0);
        prop_assert!((back.to_f64() - value).abs() <= tol, "{from} -> {to}: {value} became {back}");
    }
}

// =============================================================================
// Input filtering
// =============================================================================

proptest! {
    /// 숫자가 아닌 입력(inf, nan 포함)은 항상 Invalid Entry가 된다.
    #[test]
    fn alphabetic_input_is_invalid_entry(text in "[a-zA-Z ]*[a-zA-Z][a-zA-Z ]*") {
        let engine = Converter::standard().unwrap();
        let mut shell = Shell::new(&engine);
        shell.select_category("Length").unwrap();
        shell.select_from("Metre").unwrap();
        shell.select_to("Foot").unwrap();
        shell.set_input(&text);
        prop_assert_eq!(shell.output(), INVALID_ENTRY);
    }

    /// 유한한 f64 표기는 모두 받아들인다.
    #[test]
    fn finite_numbers_parse(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let parsed = parse_input(&value.to_string());
        prop_assert!(parsed.is_some(), "{value}");
        prop_assert_eq!(parsed.unwrap().to_f64(), value);
    }
}
