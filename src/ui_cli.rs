use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::shell::{ConversionEngine, Shell, INVALID_ENTRY};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    ListUnits,
    Exit,
}

/// 메뉴 입출력 대상. 실행 시에는 표준 입출력, 테스트에서는 메모리 버퍼를 쓴다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 메인 메뉴를 표시하고 선택값을 반환한다.
    pub fn main_menu(&mut self) -> Result<MenuChoice, AppError> {
        writeln!(self.output, "\n=== Unit Converter ===")?;
        writeln!(self.output, "1) Convert")?;
        writeln!(self.output, "2) List categories and units")?;
        writeln!(self.output, "0) Exit")?;
        loop {
            let sel = self.read_line("Select: ")?;
            match sel.trim() {
                "1" => return Ok(MenuChoice::Convert),
                "2" => return Ok(MenuChoice::ListUnits),
                "0" => return Ok(MenuChoice::Exit),
                _ => writeln!(self.output, "Invalid selection, try again.")?,
            }
        }
    }

    /// 카테고리와 두 단위를 고른 뒤, 빈 줄이 들어올 때까지 입력값을 계속 변환한다.
    pub fn handle_conversion<E: ConversionEngine>(
        &mut self,
        shell: &mut Shell<E>,
    ) -> Result<(), AppError> {
        writeln!(self.output, "\n-- Convert --")?;
        let category = self.choose("Type of units", &shell.categories())?;
        shell.select_category(&category)?;
        let from = self.choose("Convert from", &shell.units())?;
        shell.select_from(&from)?;
        let to = self.choose("Convert to", &shell.units())?;
        shell.select_to(&to)?;

        writeln!(
            self.output,
            "{from} -> {to}. Enter values (blank line to return)."
        )?;
        loop {
            let input = self.read_line("Value: ")?;
            if input.trim().is_empty() {
                break;
            }
            shell.set_input(&input);
            if shell.output() == INVALID_ENTRY {
                writeln!(self.output, "{INVALID_ENTRY}")?;
            } else {
                writeln!(self.output, "= {} {to}", shell.output())?;
            }
        }
        Ok(())
    }

    /// 카테고리별 단위 목록을 출력한다.
    pub fn handle_list<E: ConversionEngine>(&mut self, shell: &Shell<E>) -> Result<(), AppError> {
        for category in shell.categories() {
            let units = shell.engine().unit_names(category);
            writeln!(self.output, "{category}: {}", units.join(", "))?;
        }
        Ok(())
    }

    /// 번호 목록을 보여주고 고른 항목을 돌려준다.
    fn choose(&mut self, title: &str, options: &[&str]) -> Result<String, AppError> {
        writeln!(self.output, "{title}:")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{:>3}) {option}", i + 1)?;
        }
        loop {
            let sel = self.read_line("Number: ")?;
            match sel.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].to_string()),
                _ => writeln!(self.output, "Invalid selection, try again.")?,
            }
        }
    }

    /// 입력이 닫히면 `UnexpectedEof` I/O 오류를 돌려준다.
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(buf)
    }
}
