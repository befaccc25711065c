//! 화면 상태(`Shell`) 테스트. 엔진 호출 횟수는 대역 엔진으로 센다.
use std::cell::Cell;

use unit_converter::conversion::{ConversionError, Converter};
use unit_converter::decimal::{Decimal, DecimalContext};
use unit_converter::shell::{
    format_result, parse_input, ConversionEngine, Shell, ShellError, ShellState, INVALID_ENTRY,
};

/// 선형 변환은 2배, 온도 변환은 +1을 돌려주는 대역 엔진.
#[derive(Default)]
struct CountingEngine {
    linear_calls: Cell<usize>,
    temperature_calls: Cell<usize>,
}

impl CountingEngine {
    fn calls(&self) -> usize {
        self.linear_calls.get() + self.temperature_calls.get()
    }
}

impl ConversionEngine for CountingEngine {
    fn category_names(&self) -> Vec<&str> {
        vec!["Length", "Temperature"]
    }

    fn unit_names(&self, category: &str) -> Vec<&str> {
        match category {
            "Length" => vec!["Metre", "Foot"],
            "Temperature" => vec!["Celsius", "Kelvin"],
            _ => Vec::new(),
        }
    }

    fn is_temperature(&self, category: &str) -> bool {
        category == "Temperature"
    }

    fn convert_linear(
        &self,
        _category: &str,
        _from: &str,
        _to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        self.linear_calls.set(self.linear_calls.get() + 1);
        Ok(DecimalContext::default().mul(value, &Decimal::from(2)))
    }

    fn convert_temperature(
        &self,
        _from: &str,
        _to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        self.temperature_calls.set(self.temperature_calls.get() + 1);
        Ok(DecimalContext::default().add(value, &Decimal::from(1)))
    }
}

fn ready_shell<'a>(
    engine: &'a CountingEngine,
    category: &str,
    from: &str,
    to: &str,
) -> Shell<&'a CountingEngine> {
    let mut shell = Shell::new(engine);
    shell.select_category(category).unwrap();
    shell.select_from(from).unwrap();
    shell.select_to(to).unwrap();
    shell
}

#[test]
fn invalid_entry_never_reaches_the_engine() {
    let engine = CountingEngine::default();
    let mut shell = ready_shell(&engine, "Length", "Metre", "Foot");
    for text in ["abc", "1.2.3", "12m", "inf", "NaN", "1/2"] {
        shell.set_input(text);
        assert_eq!(shell.output(), INVALID_ENTRY, "{text}");
    }
    assert_eq!(engine.calls(), 0);

    shell.set_input("3");
    assert_eq!(shell.output(), "6");
    assert_eq!(engine.linear_calls.get(), 1);
}

#[test]
fn temperature_category_uses_temperature_conversion() {
    let engine = CountingEngine::default();
    let mut shell = ready_shell(&engine, "Temperature", "Celsius", "Kelvin");
    shell.set_input("-4.5");
    assert_eq!(shell.output(), "-3.5");
    assert_eq!(engine.temperature_calls.get(), 1);
    assert_eq!(engine.linear_calls.get(), 0);
}

#[test]
fn state_follows_selection() {
    let engine = CountingEngine::default();
    let mut shell = Shell::new(&engine);
    assert_eq!(shell.state(), ShellState::NoCategory);
    assert!(shell.units().is_empty());
    assert_eq!(shell.select_from("Metre"), Err(ShellError::NoCategory));

    shell.select_category("Length").unwrap();
    assert_eq!(shell.state(), ShellState::CategorySelected);
    assert_eq!(shell.units(), vec!["Metre", "Foot"]);

    shell.select_from("Metre").unwrap();
    assert_eq!(shell.state(), ShellState::CategorySelected);
    shell.select_to("Metre").unwrap();
    assert_eq!(shell.state(), ShellState::Ready);
}

#[test]
fn input_before_ready_is_kept_and_converted_once_units_are_chosen() {
    let engine = CountingEngine::default();
    let mut shell = Shell::new(&engine);
    shell.select_category("Length").unwrap();
    shell.set_input("21");
    shell.select_from("Metre").unwrap();
    assert_eq!(shell.output(), "");
    assert_eq!(engine.calls(), 0);

    shell.select_to("Foot").unwrap();
    assert_eq!(shell.input(), "21");
    assert_eq!(shell.output(), "42");
}

#[test]
fn changing_a_unit_reconverts_current_input() {
    let engine = CountingEngine::default();
    let mut shell = ready_shell(&engine, "Length", "Metre", "Foot");
    shell.set_input("5");
    shell.select_to("Metre").unwrap();
    shell.select_from("Foot").unwrap();
    assert_eq!(engine.linear_calls.get(), 3);
    assert_eq!(shell.output(), "10");
}

#[test]
fn category_change_resets_units_and_output() {
    let engine = CountingEngine::default();
    let mut shell = ready_shell(&engine, "Length", "Metre", "Foot");
    shell.set_input("5");
    assert_eq!(shell.output(), "10");

    shell.select_category("Temperature").unwrap();
    assert_eq!(shell.state(), ShellState::CategorySelected);
    assert_eq!(shell.selection().from, None);
    assert_eq!(shell.selection().to, None);
    assert_eq!(shell.input(), "");
    assert_eq!(shell.output(), "");
    assert_eq!(shell.units(), vec!["Celsius", "Kelvin"]);
}

#[test]
fn names_not_offered_are_refused() {
    let engine = CountingEngine::default();
    let mut shell = Shell::new(&engine);
    assert_eq!(
        shell.select_category("Mass"),
        Err(ShellError::UnknownCategory("Mass".to_string()))
    );
    shell.select_category("Length").unwrap();
    assert_eq!(
        shell.select_from("Celsius"),
        Err(ShellError::UnknownUnit("Celsius".to_string()))
    );
    assert_eq!(
        shell.select_to("metre"),
        Err(ShellError::UnknownUnit("metre".to_string()))
    );
    assert_eq!(shell.state(), ShellState::CategorySelected);
}

#[test]
fn empty_input_clears_output() {
    let engine = CountingEngine::default();
    let mut shell = ready_shell(&engine, "Length", "Metre", "Foot");
    shell.set_input("1");
    assert_eq!(shell.output(), "2");
    shell.set_input("   ");
    assert_eq!(shell.output(), "");
    assert_eq!(engine.calls(), 1);
}

#[test]
fn real_engine_shows_integers_without_fraction() {
    let converter = Converter::standard().unwrap();
    let mut shell = Shell::new(&converter);
    shell.select_category("Mass").unwrap();
    shell.select_from("Gram").unwrap();
    shell.select_to("Kilogram").unwrap();
    shell.set_input("1000");
    assert_eq!(shell.output(), "1");

    shell.set_input(" 2.5 ");
    assert_eq!(shell.output(), "0.0025");

    shell.select_category("Temperature").unwrap();
    shell.select_from("Fahrenheit").unwrap();
    shell.select_to("Celsius").unwrap();
    shell.set_input("98.6");
    assert_eq!(shell.output(), "37");
}

#[test]
fn real_engine_rounds_ties_to_even() {
    let converter = Converter::standard().unwrap();
    let mut shell = Shell::new(&converter);
    shell.select_category("Length").unwrap();
    shell.select_from("Kilometre").unwrap();
    shell.select_to("Metre").unwrap();
    shell.set_input("2000000000025");
    assert_eq!(shell.output(), "2000000000020000");
    shell.set_input("-2000000000035");
    assert_eq!(shell.output(), "-2000000000040000");
}

#[test]
fn input_parsing_accepts_only_finite_numbers() {
    assert_eq!(parse_input(" 42 "), Some(Decimal::from(42)));
    assert_eq!(parse_input("-0.5"), Some(Decimal::new(-5, -1)));
    assert_eq!(parse_input("1e3"), Some(Decimal::from(1000)));
    assert_eq!(parse_input(""), None);
    assert_eq!(parse_input("inf"), None);
    assert_eq!(parse_input("nan"), None);
    assert_eq!(parse_input("twelve"), None);
}

#[test]
fn results_are_formatted_for_display() {
    assert_eq!(format_result(&Decimal::from(1000)), "1000");
    assert_eq!(format_result(&Decimal::new(15, -1)), "1.5");
    assert_eq!(format_result(&Decimal::new(-25, -3)), "-0.025");
}
