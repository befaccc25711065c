//! 10진 부동소수점 연산 모듈.
//!
//! 내부 표현은 dashu-float의 10진 `FBig`(유효숫자 * 10^지수, 짝수 반올림)이며,
//! 변환 계산에서 이진 부동소수점 잡음(0.1 + 0.2 류)이 화면에 드러나지 않도록 모든 연산 결과를 유효숫자 단위로 반올림한다.
//! 정밀도는 전역 상태가 아니라 `DecimalContext` 값에 묶여 호출 단위로만 적용된다.

use std::fmt;
use std::num::NonZeroU32;

use dashu_float::round::mode::HalfEven;
use dashu_float::FBig;
use dashu_int::IBig;

/// 기본 유효숫자 자릿수.
pub const DEFAULT_PRECISION: usize = 12;
/// 설정으로 허용하는 최대 유효숫자 자릿수.
pub const MAX_PRECISION: usize = 30;
/// 중간 계산용 자릿수. 반올림 직전까지 피연산자를 이 정밀도로 유지한다.
const WORK_PRECISION: usize = 40;

/// 10진 표현, 동률은 짝수 쪽으로 반올림한다(ROUND_HALF_EVEN).
type Repr = FBig<HalfEven, 10>;

/// 10진 수 파싱/연산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// 숫자로 해석할 수 없는 문자열
    Parse(String),
    /// 0으로 나누기
    DivisionByZero,
    /// NaN 또는 무한대
    NotFinite,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::Parse(s) => write!(f, "invalid number: {s:?}"),
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::NotFinite => write!(f, "number is not finite"),
        }
    }
}

impl std::error::Error for DecimalError {}

/// 임의 정밀도 10진 수.
#[derive(Debug, Clone)]
pub struct Decimal {
    inner: Repr,
}

impl Decimal {
    /// `mantissa * 10^exponent` 값을 만든다.
    pub fn new(mantissa: i64, exponent: isize) -> Self {
        Self {
            inner: Repr::from_parts(IBig::from(mantissa), exponent),
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// 문자열을 10진 수로 해석한다.
    ///
    /// 지원 형식: `"42"`, `"-3.5"`, `".5"`, `"1e06"`, `"1.602176565e-19"`, 그리고 분수 `"4840/1.19599"`.
    /// 분수는 작업 정밀도로 나눈 값이 된다.
    pub fn parse(s: &str) -> Result<Self, DecimalError> {
        let s = s.trim();
        if let Some((num, den)) = s.split_once('/') {
            let num = parse_scientific(num.trim())?;
            let den = parse_scientific(den.trim())?;
            if den.is_zero() {
                return Err(DecimalError::DivisionByZero);
            }
            return Ok(Self {
                inner: work(&num) / work(&den),
            });
        }
        parse_scientific(s)
    }

    /// f64 값을 가장 짧은 10진 표기를 거쳐 변환한다. (`0.1` -> 정확히 0.1)
    pub fn from_f64(value: f64) -> Result<Self, DecimalError> {
        if !value.is_finite() {
            return Err(DecimalError::NotFinite);
        }
        parse_scientific(&format!("{value:e}"))
    }

    /// 표시/비교용 근사 f64.
    pub fn to_f64(&self) -> f64 {
        let (negative, digits, exponent) = self.normalized_parts();
        let sign = if negative { "-" } else { "" };
        format!("{sign}{digits}e{exponent}")
            .parse::<f64>()
            .unwrap_or(f64::NAN)
    }

    pub fn is_zero(&self) -> bool {
        self.normalized_parts().1 == "0"
    }

    pub fn is_negative(&self) -> bool {
        self.normalized_parts().0
    }

    /// 0보다 큰지 여부.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// 소수부가 없는 값인지 여부.
    pub fn is_integer(&self) -> bool {
        self.normalized_parts().2 >= 0
    }

    /// (음수 여부, 끝자리 0을 제거한 유효숫자 문자열, 10의 지수)
    ///
    /// 0은 항상 `(false, "0", 0)`으로 정규화된다.
    fn normalized_parts(&self) -> (bool, String, isize) {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let text = significand.to_string();
        let negative = text.starts_with('-');
        let digits = text.trim_start_matches('-');
        let trimmed = digits.trim_end_matches('0');
        if trimmed.is_empty() {
            return (false, "0".to_string(), 0);
        }
        let exponent = exponent + (digits.len() - trimmed.len()) as isize;
        (negative, trimmed.to_string(), exponent)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl std::str::FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_parts() == other.normalized_parts()
    }
}

/// 정수는 정수 표기(`1`, `1000`), 그 외에는 일반 소수 표기를 쓴다.
/// 선행 자릿수가 10^-5 이하로 작은 값은 `1.5e-27`처럼 지수 표기로 출력한다.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, digits, exponent) = self.normalized_parts();
        let sign = if negative { "-" } else { "" };
        if exponent >= 0 {
            let zeros = "0".repeat(exponent as usize);
            return write!(f, "{sign}{digits}{zeros}");
        }

        // 최상위 자릿수의 10의 지수
        let adjusted = digits.len() as isize - 1 + exponent;
        if adjusted < -4 {
            let (head, tail) = digits.split_at(1);
            if tail.is_empty() {
                write!(f, "{sign}{head}e{adjusted}")
            } else {
                write!(f, "{sign}{head}.{tail}e{adjusted}")
            }
        } else if adjusted >= 0 {
            let (int_part, frac_part) = digits.split_at(adjusted as usize + 1);
            write!(f, "{sign}{int_part}.{frac_part}")
        } else {
            let zeros = "0".repeat((-adjusted - 1) as usize);
            write!(f, "{sign}0.{zeros}{digits}")
        }
    }
}

/// 연산마다 결과를 지정된 유효숫자로 반올림하는 계산 컨텍스트.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    digits: usize,
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl DecimalContext {
    /// 유효숫자 자릿수를 지정한다. 범위는 1..=MAX_PRECISION으로 보정된다.
    pub fn new(digits: usize) -> Self {
        Self {
            digits: digits.clamp(1, MAX_PRECISION),
        }
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn round(&self, value: &Decimal) -> Decimal {
        self.finish(work(value))
    }

    pub fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.finish(work(a) + work(b))
    }

    pub fn sub(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.finish(work(a) - work(b))
    }

    pub fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.finish(work(a) * work(b))
    }

    pub fn div(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, DecimalError> {
        if b.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        Ok(self.finish(work(a) / work(b)))
    }

    /// `value * numerator / denominator`. 곱셈은 작업 정밀도로 두고 나눗셈 결과만 반올림한다.
    pub fn mul_ratio(&self, value: &Decimal, numerator: u32, denominator: NonZeroU32) -> Decimal {
        let scaled = work(value) * work(&Decimal::from(i64::from(numerator)));
        let divisor = work(&Decimal::from(i64::from(denominator.get())));
        self.finish(scaled / divisor)
    }

    fn finish(&self, value: Repr) -> Decimal {
        Decimal {
            inner: value.with_precision(self.digits).value(),
        }
    }
}

fn work(value: &Decimal) -> Repr {
    value.inner.clone().with_precision(WORK_PRECISION).value()
}

/// 부호, 정수부, 소수부, 지수부를 직접 분해해 `Repr::from_parts`로 정확히 구성한다.
fn parse_scientific(s: &str) -> Result<Decimal, DecimalError> {
    let err = || DecimalError::Parse(s.to_string());
    let lower = s.to_ascii_lowercase();
    let (mantissa, exponent) = match lower.split_once('e') {
        Some((m, e)) => (m, e.parse::<isize>().map_err(|_| err())?),
        None => (lower.as_str(), 0),
    };
    let (negative, mantissa) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(err());
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(err());
    }

    let digits = format!("{int_part}{frac_part}");
    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };
    let significand: IBig = digits.parse().map_err(|_| err())?;
    let significand = if negative { -significand } else { significand };
    let exponent = exponent - frac_part.len() as isize;
    Ok(Decimal {
        inner: Repr::from_parts(significand, exponent),
    })
}
