use tracing::debug;

use crate::decimal::{Decimal, DecimalContext, DecimalError, DEFAULT_PRECISION};
use crate::units::{self, CategoryKind, ConversionTable, TableError, TemperatureUnit};

/// 단위 변환 시 발생 가능한 오류.
///
/// 화면의 메뉴는 변환표에서만 채워지므로 정상 흐름에서는 발생하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 카테고리
    UnknownCategory(String),
    /// 카테고리에 없는 단위
    UnknownUnit { category: String, unit: String },
    /// 배율표로 변환할 수 없는 카테고리(온도)
    NotLinear(String),
    /// 10진 연산 오류
    Arithmetic(DecimalError),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownCategory(c) => write!(f, "unknown category: {c}"),
            ConversionError::UnknownUnit { category, unit } => {
                write!(f, "unknown unit in {category}: {unit}")
            }
            ConversionError::NotLinear(c) => {
                write!(f, "{c} does not use conversion factors")
            }
            ConversionError::Arithmetic(e) => write!(f, "arithmetic error: {e}"),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<DecimalError> for ConversionError {
    fn from(value: DecimalError) -> Self {
        ConversionError::Arithmetic(value)
    }
}

/// 변환 엔진. 불변 변환표와 정밀도 컨텍스트만 가진다.
#[derive(Debug, Clone)]
pub struct Converter {
    table: ConversionTable,
    context: DecimalContext,
}

impl Converter {
    /// 기본 변환표와 지정한 유효숫자 자릿수로 엔진을 만든다.
    pub fn new(precision: usize) -> Result<Self, TableError> {
        Ok(Self::with_table(
            ConversionTable::standard()?,
            DecimalContext::new(precision),
        ))
    }

    /// 기본 변환표, 유효숫자 12자리.
    pub fn standard() -> Result<Self, TableError> {
        Self::new(DEFAULT_PRECISION)
    }

    pub fn with_table(table: ConversionTable, context: DecimalContext) -> Self {
        Self { table, context }
    }

    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    pub fn context(&self) -> DecimalContext {
        self.context
    }

    /// 배율표 기반 변환: `value * (factor(from) / factor(to))`.
    ///
    /// 배율 비와 곱셈 각각의 결과를 컨텍스트 자릿수로 반올림한다.
    /// 같은 단위끼리는 입력값을 그대로 돌려준다.
    pub fn convert_linear(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        let cat = self
            .table
            .category(category)
            .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
        if let CategoryKind::Temperature = cat.kind {
            return Err(ConversionError::NotLinear(category.to_string()));
        }
        let unknown = |unit: &str| ConversionError::UnknownUnit {
            category: category.to_string(),
            unit: unit.to_string(),
        };
        let from_factor = cat.factor(from).ok_or_else(|| unknown(from))?;
        let to_factor = cat.factor(to).ok_or_else(|| unknown(to))?;

        let result = if from == to {
            value.clone()
        } else {
            let ratio = self.context.div(from_factor, to_factor)?;
            self.context.mul(value, &ratio)
        };
        debug!(category, from, to, %value, %result, "linear conversion");
        Ok(result)
    }

    /// 온도 변환. 단위 쌍별 고정식을 사용한다.
    pub fn convert_temperature(
        &self,
        from: TemperatureUnit,
        to: TemperatureUnit,
        value: &Decimal,
    ) -> Decimal {
        let result = units::convert_temperature(&self.context, value, from, to);
        debug!(%from, %to, %value, %result, "temperature conversion");
        result
    }

    /// 이름으로 지정한 온도 변환.
    pub fn convert_temperature_named(
        &self,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        let resolve = |unit: &str| {
            TemperatureUnit::from_name(unit).ok_or_else(|| ConversionError::UnknownUnit {
                category: "Temperature".to_string(),
                unit: unit.to_string(),
            })
        };
        let from = resolve(from)?;
        let to = resolve(to)?;
        Ok(self.convert_temperature(from, to, value))
    }

    /// 카테고리 종류에 따라 선형 변환 또는 온도 변환으로 보낸다.
    pub fn convert(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: &Decimal,
    ) -> Result<Decimal, ConversionError> {
        if self.table.is_temperature(category) {
            self.convert_temperature_named(from, to, value)
        } else {
            self.convert_linear(category, from, to, value)
        }
    }
}
