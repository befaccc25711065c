use std::fmt;

use crate::decimal::{Decimal, DecimalError};

use super::factors::STANDARD_TABLE;
use super::temperature::TemperatureUnit;

/// 표 정의 한 줄. 선형 카테고리는 (단위 이름, 배율 표기) 목록을 갖는다.
#[derive(Debug, Clone, Copy)]
pub enum CategoryDefinition {
    Linear(&'static [(&'static str, &'static str)]),
    Temperature,
}

/// 배율을 가진 단위.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub factor: Decimal,
}

/// 카테고리 종류. 온도는 배율표 대신 고정식을 사용한다.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryKind {
    Linear(Vec<Unit>),
    Temperature,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub kind: CategoryKind,
}

impl Category {
    pub fn is_temperature(&self) -> bool {
        matches!(self.kind, CategoryKind::Temperature)
    }

    /// 메뉴에 표시할 단위 이름 목록(표 순서).
    pub fn unit_names(&self) -> Vec<&'static str> {
        match &self.kind {
            CategoryKind::Linear(units) => units.iter().map(|u| u.name).collect(),
            CategoryKind::Temperature => TemperatureUnit::ALL.iter().map(|u| u.name()).collect(),
        }
    }

    /// 선형 단위의 배율. 온도 카테고리이거나 없는 단위면 `None`.
    pub fn factor(&self, unit: &str) -> Option<&Decimal> {
        match &self.kind {
            CategoryKind::Linear(units) => units.iter().find(|u| u.name == unit).map(|u| &u.factor),
            CategoryKind::Temperature => None,
        }
    }
}

/// 변환표 구성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// 배율 표기를 숫자로 해석할 수 없음
    InvalidFactor {
        category: &'static str,
        unit: &'static str,
        source: DecimalError,
    },
    /// 0 또는 음수 배율
    NonPositiveFactor {
        category: &'static str,
        unit: &'static str,
    },
    DuplicateCategory(&'static str),
    DuplicateUnit {
        category: &'static str,
        unit: &'static str,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidFactor {
                category,
                unit,
                source,
            } => write!(f, "invalid factor for {category}/{unit}: {source}"),
            TableError::NonPositiveFactor { category, unit } => {
                write!(f, "factor for {category}/{unit} must be positive")
            }
            TableError::DuplicateCategory(name) => write!(f, "duplicate category: {name}"),
            TableError::DuplicateUnit { category, unit } => {
                write!(f, "duplicate unit in {category}: {unit}")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// 카테고리 -> 단위 -> 배율 변환표. 시작 시 한 번 만들고 이후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    categories: Vec<Category>,
}

impl ConversionTable {
    /// 기본 제공 변환표를 만든다.
    pub fn standard() -> Result<Self, TableError> {
        Self::from_definitions(STANDARD_TABLE)
    }

    /// 정의 목록을 검증하며 표를 만든다.
    ///
    /// 배율은 모두 양수여야 하고, 카테고리 이름은 표 전체에서, 단위 이름은 카테고리 안에서 유일해야 한다.
    pub fn from_definitions(
        definitions: &[(&'static str, CategoryDefinition)],
    ) -> Result<Self, TableError> {
        let mut categories: Vec<Category> = Vec::with_capacity(definitions.len());
        for &(name, definition) in definitions {
            if categories.iter().any(|c| c.name == name) {
                return Err(TableError::DuplicateCategory(name));
            }
            let kind = match definition {
                CategoryDefinition::Temperature => CategoryKind::Temperature,
                CategoryDefinition::Linear(entries) => {
                    CategoryKind::Linear(build_units(name, entries)?)
                }
            };
            categories.push(Category { name, kind });
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.name).collect()
    }

    /// 카테고리의 단위 이름 목록. 없는 카테고리면 빈 목록.
    pub fn unit_names(&self, category: &str) -> Vec<&'static str> {
        self.category(category)
            .map(Category::unit_names)
            .unwrap_or_default()
    }

    pub fn is_temperature(&self, category: &str) -> bool {
        self.category(category).is_some_and(Category::is_temperature)
    }

    /// 대소문자/앞뒤 공백을 무시하고 표에 등록된 카테고리 이름을 찾는다.
    pub fn canonical_category(&self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        self.categories
            .iter()
            .map(|c| c.name)
            .find(|name| name.eq_ignore_ascii_case(input))
    }

    /// 대소문자/앞뒤 공백을 무시하고 카테고리 안의 단위 이름을 찾는다.
    pub fn canonical_unit(&self, category: &str, input: &str) -> Option<&'static str> {
        let input = input.trim();
        self.unit_names(category)
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(input))
    }
}

fn build_units(
    category: &'static str,
    entries: &[(&'static str, &'static str)],
) -> Result<Vec<Unit>, TableError> {
    let mut units: Vec<Unit> = Vec::with_capacity(entries.len());
    for &(unit, literal) in entries {
        if units.iter().any(|u| u.name == unit) {
            return Err(TableError::DuplicateUnit { category, unit });
        }
        let factor = Decimal::parse(literal).map_err(|source| TableError::InvalidFactor {
            category,
            unit,
            source,
        })?;
        if !factor.is_positive() {
            return Err(TableError::NonPositiveFactor { category, unit });
        }
        units.push(Unit { name: unit, factor });
    }
    Ok(units)
}
