#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use unit_converter::{
    config,
    conversion::Converter,
    logging,
    shell::{Shell, ShellState},
};

const CATEGORY_PLACEHOLDER: &str = "--Select the Type of Units--";
const UNIT_PLACEHOLDER: &str = "--Select Units--";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_cfg = config::load_or_default().unwrap_or_default();
    logging::init_logger(&app_cfg.log_level);
    let converter = Converter::new(app_cfg.precision)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Unit Converter")
            .with_inner_size([650.0, 250.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Unit Converter",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(converter))),
    )?;
    Ok(())
}

struct GuiApp {
    shell: Shell<Converter>,
    // 입력 칸 버퍼. 카테고리가 바뀌면 비운다.
    value_input: String,
}

impl GuiApp {
    fn new(converter: Converter) -> Self {
        Self {
            shell: Shell::new(converter),
            value_input: String::new(),
        }
    }

    fn pick_category(&mut self, name: &str) {
        if let Err(e) = self.shell.select_category(name) {
            tracing::warn!(error = %e, "category selection ignored");
            return;
        }
        self.value_input.clear();
    }

    fn pick_from(&mut self, unit: &str) {
        if let Err(e) = self.shell.select_from(unit) {
            tracing::warn!(error = %e, "unit selection ignored");
        }
    }

    fn pick_to(&mut self, unit: &str) {
        if let Err(e) = self.shell.select_to(unit) {
            tracing::warn!(error = %e, "unit selection ignored");
        }
    }

    fn edit_value(&mut self) {
        self.shell.set_input(&self.value_input);
    }

    fn category_label(&self) -> String {
        self.shell
            .selection()
            .category
            .clone()
            .unwrap_or_else(|| CATEGORY_PLACEHOLDER.to_string())
    }
}

/// 선택지 목록 콤보 박스. 새로 고른 항목이 있으면 돌려준다.
fn choice_combo(
    ui: &mut egui::Ui,
    id: &str,
    width: f32,
    current: Option<&str>,
    placeholder: &str,
    options: &[&str],
) -> Option<String> {
    let mut picked = None;
    egui::ComboBox::from_id_source(id)
        .selected_text(current.unwrap_or(placeholder))
        .width(width)
        .show_ui(ui, |ui| {
            for option in options {
                if ui.selectable_label(current == Some(*option), *option).clicked() {
                    picked = Some(option.to_string());
                }
            }
        });
    picked
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);

            // 단위 종류
            let categories = self.shell.categories();
            let category_label = self.category_label();
            let current_category =
                (self.shell.state() != ShellState::NoCategory).then_some(category_label.as_str());
            let picked_category = choice_combo(
                ui,
                "unit_type",
                600.0,
                current_category,
                CATEGORY_PLACEHOLDER,
                &categories,
            );
            if let Some(name) = picked_category {
                self.pick_category(&name);
            }
            ui.add_space(12.0);

            // 변환 전/후 단위
            let units = self.shell.units();
            let selection = self.shell.selection().clone();
            let (mut picked_from, mut picked_to) = (None, None);
            ui.horizontal(|ui| {
                picked_from = choice_combo(
                    ui,
                    "unit_from",
                    280.0,
                    selection.from.as_deref(),
                    UNIT_PLACEHOLDER,
                    &units,
                );
                ui.add_space(20.0);
                picked_to = choice_combo(
                    ui,
                    "unit_to",
                    280.0,
                    selection.to.as_deref(),
                    UNIT_PLACEHOLDER,
                    &units,
                );
            });
            if let Some(unit) = picked_from {
                self.pick_from(&unit);
            }
            if let Some(unit) = picked_to {
                self.pick_to(&unit);
            }
            ui.add_space(20.0);

            // 입력값과 결과. 입력이 바뀔 때마다 다시 변환한다.
            ui.horizontal(|ui| {
                let edit = egui::TextEdit::singleline(&mut self.value_input).desired_width(200.0);
                if ui.add(edit).changed() {
                    self.edit_value();
                }
                ui.add_space(20.0);
                ui.label(egui::RichText::new(self.shell.output()).size(18.0));
            });
        });
    }
}
