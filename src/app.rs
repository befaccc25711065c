use std::io::{self, BufRead, Write};

use tracing::info;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::conversion::{ConversionError, Converter};
use crate::shell::{Shell, ShellError, INVALID_ENTRY};
use crate::ui_cli::{Console, MenuChoice};
use crate::units::TableError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 변환표 구성 오류
    Table(TableError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 화면 선택 오류
    Shell(ShellError),
    /// 숫자로 해석할 수 없는 입력
    InvalidEntry(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Table(e) => write!(f, "conversion table error: {e}"),
            AppError::Conversion(e) => write!(f, "{e}"),
            AppError::Shell(e) => write!(f, "{e}"),
            AppError::InvalidEntry(input) => write!(f, "{INVALID_ENTRY}: {input:?}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<io::Error> for AppError {
    fn from(value: io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<TableError> for AppError {
    fn from(value: TableError) -> Self {
        AppError::Table(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<ShellError> for AppError {
    fn from(value: ShellError) -> Self {
        AppError::Shell(value)
    }
}

impl AppError {
    fn is_eof(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// CLI 명령을 실행한다. 하위 명령이 없으면 대화형 메뉴를 띄운다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let converter = Converter::new(config.precision)?;
    info!(
        precision = converter.context().digits(),
        categories = converter.table().categories().len(),
        "conversion engine ready"
    );

    match &cli.command {
        None => run_interactive(converter, &mut Console::stdio()),
        Some(Commands::Categories) => {
            for name in converter.table().category_names() {
                println!("{name}");
            }
            Ok(())
        }
        Some(Commands::Units { category }) => {
            let category = resolve_category(&converter, category)?;
            for unit in converter.table().unit_names(category) {
                println!("{unit}");
            }
            Ok(())
        }
        Some(Commands::Convert {
            category,
            from,
            to,
            value,
        }) => {
            let output = convert_once(&converter, category, from, to, value)?;
            println!("{output}");
            Ok(())
        }
    }
}

/// 한 번의 변환을 화면 규칙 그대로 수행해 표시 문자열을 돌려준다.
///
/// 이름은 대소문자를 구분하지 않는다. 숫자가 아닌 값은 `InvalidEntry` 오류가 된다.
pub fn convert_once(
    converter: &Converter,
    category: &str,
    from: &str,
    to: &str,
    value: &str,
) -> Result<String, AppError> {
    let table = converter.table();
    let category = resolve_category(converter, category)?;
    let unit = |name: &str| {
        table
            .canonical_unit(category, name)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: category.to_string(),
                unit: name.to_string(),
            })
    };
    let (from, to) = (unit(from)?, unit(to)?);

    let mut shell = Shell::new(converter);
    shell.select_category(category)?;
    shell.select_from(from)?;
    shell.select_to(to)?;
    shell.set_input(value);
    if shell.output() == INVALID_ENTRY {
        return Err(AppError::InvalidEntry(value.to_string()));
    }
    Ok(shell.output().to_string())
}

fn resolve_category(converter: &Converter, name: &str) -> Result<&'static str, AppError> {
    converter
        .table()
        .canonical_category(name)
        .ok_or_else(|| ConversionError::UnknownCategory(name.to_string()).into())
}

/// 대화형 메뉴 루프. 입력이 닫히면 정상 종료한다.
pub fn run_interactive<R: BufRead, W: Write>(
    converter: Converter,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let mut shell = Shell::new(converter);
    loop {
        let step = match console.main_menu() {
            Ok(MenuChoice::Convert) => console.handle_conversion(&mut shell),
            Ok(MenuChoice::ListUnits) => console.handle_list(&shell),
            Ok(MenuChoice::Exit) => break,
            Err(e) => Err(e),
        };
        match step {
            Ok(()) => {}
            Err(e) if e.is_eof() => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
