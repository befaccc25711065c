//! 화면과 무관한 변환 화면 상태.
//!
//! GUI와 CLI는 모두 이 `Shell`에 선택/입력 이벤트를 전달하고 `output()`을 그대로 그린다.
//! 엔진은 `ConversionEngine` 트레이트로만 접근하므로 테스트에서 대역(double)으로 바꿀 수 있다.

use std::fmt;

use tracing::{error, trace};

use crate::conversion::{ConversionError, Converter};
use crate::decimal::Decimal;

/// 숫자로 해석할 수 없는 입력에 표시하는 고정 문구.
pub const INVALID_ENTRY: &str = "Invalid Entry";

/// 화면이 엔진에 요구하는 기능.
pub trait ConversionEngine {
    fn category_names(&self) -> Vec<&str>;
    fn unit_names(&self, category: &str) -> Vec<&str>;
    fn is_temperature(&self, category: &str) -> bool;
    fn convert_linear(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError>;
    fn convert_temperature(
        &self,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError>;
}

impl ConversionEngine for Converter {
    fn category_names(&self) -> Vec<&str> {
        self.table().category_names()
    }

    fn unit_names(&self, category: &str) -> Vec<&str> {
        self.table().unit_names(category)
    }

    fn is_temperature(&self, category: &str) -> bool {
        self.table().is_temperature(category)
    }

    fn convert_linear(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        Converter::convert_linear(self, category, from, to, value)
    }

    fn convert_temperature(
        &self,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        self.convert_temperature_named(from, to, value)
    }
}

impl<T: ConversionEngine + ?Sized> ConversionEngine for &T {
    fn category_names(&self) -> Vec<&str> {
        (**self).category_names()
    }

    fn unit_names(&self, category: &str) -> Vec<&str> {
        (**self).unit_names(category)
    }

    fn is_temperature(&self, category: &str) -> bool {
        (**self).is_temperature(category)
    }

    fn convert_linear(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        (**self).convert_linear(category, from, to, value)
    }

    fn convert_temperature(
        &self,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        (**self).convert_temperature(from, to, value)
    }
}

/// 사용자가 고른 카테고리와 두 단위.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// 선택 상태에서 파생되는 화면 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    NoCategory,
    CategorySelected,
    Ready,
}

/// 화면 조작 오류. 엔진이 제공하지 않은 이름은 선택할 수 없다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// 카테고리를 고르기 전에 단위를 고름
    NoCategory,
    UnknownCategory(String),
    UnknownUnit(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::NoCategory => write!(f, "select a category first"),
            ShellError::UnknownCategory(c) => write!(f, "category not offered: {c}"),
            ShellError::UnknownUnit(u) => write!(f, "unit not offered: {u}"),
        }
    }
}

impl std::error::Error for ShellError {}

/// 변환 결과를 화면 문자열로 만든다. 정수는 소수부 없이 표시한다.
pub fn format_result(value: &Decimal) -> String {
    value.to_string()
}

/// 입력 문자열을 숫자로 해석한다. 앞뒤 공백은 무시하며 유한한 값만 받는다.
pub fn parse_input(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let number = trimmed.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Decimal::parse(trimmed)
        .or_else(|_| Decimal::from_f64(number))
        .ok()
}

/// 변환 화면 상태.
#[derive(Debug)]
pub struct Shell<E> {
    engine: E,
    selection: Selection,
    input: String,
    output: String,
}

impl<E: ConversionEngine> Shell<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            selection: Selection::default(),
            input: String::new(),
            output: String::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// 결과 표시 문자열. 아직 변환 전이면 빈 문자열.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn state(&self) -> ShellState {
        match &self.selection {
            Selection { category: None, .. } => ShellState::NoCategory,
            Selection {
                from: Some(_),
                to: Some(_),
                ..
            } => ShellState::Ready,
            _ => ShellState::CategorySelected,
        }
    }

    pub fn categories(&self) -> Vec<&str> {
        self.engine.category_names()
    }

    /// 선택된 카테고리의 단위 목록. 카테고리 선택 전에는 비어 있다.
    pub fn units(&self) -> Vec<&str> {
        match &self.selection.category {
            Some(category) => self.engine.unit_names(category),
            None => Vec::new(),
        }
    }

    /// 카테고리를 고른다. 두 단위 선택과 입력/결과를 모두 초기화한다.
    pub fn select_category(&mut self, name: &str) -> Result<(), ShellError> {
        if !self.categories().contains(&name) {
            return Err(ShellError::UnknownCategory(name.to_string()));
        }
        self.selection = Selection {
            category: Some(name.to_string()),
            from: None,
            to: None,
        };
        self.input.clear();
        self.output.clear();
        Ok(())
    }

    pub fn select_from(&mut self, unit: &str) -> Result<(), ShellError> {
        let unit = self.offered_unit(unit)?;
        self.selection.from = Some(unit);
        self.refresh();
        Ok(())
    }

    pub fn select_to(&mut self, unit: &str) -> Result<(), ShellError> {
        let unit = self.offered_unit(unit)?;
        self.selection.to = Some(unit);
        self.refresh();
        Ok(())
    }

    /// 입력값이 바뀔 때마다 호출한다. 두 단위가 모두 선택된 경우 즉시 다시 변환한다.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.refresh();
    }

    fn offered_unit(&self, unit: &str) -> Result<String, ShellError> {
        if self.selection.category.is_none() {
            return Err(ShellError::NoCategory);
        }
        if !self.units().contains(&unit) {
            return Err(ShellError::UnknownUnit(unit.to_string()));
        }
        Ok(unit.to_string())
    }

    fn refresh(&mut self) {
        let Selection {
            category: Some(category),
            from: Some(from),
            to: Some(to),
        } = &self.selection
        else {
            return;
        };
        if self.input.trim().is_empty() {
            self.output.clear();
            return;
        }
        let Some(value) = parse_input(&self.input) else {
            trace!(input = %self.input, "rejected input");
            self.output = INVALID_ENTRY.to_string();
            return;
        };

        let result = if self.engine.is_temperature(category) {
            self.engine.convert_temperature(from, to, &value)
        } else {
            self.engine.convert_linear(category, from, to, &value)
        };
        self.output = match result {
            Ok(converted) => format_result(&converted),
            Err(e) => {
                error!(error = %e, "conversion failed");
                format!("Error: {e}")
            }
        };
    }
}
