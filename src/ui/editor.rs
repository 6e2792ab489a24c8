use crate::guide::Cause;
use crate::theme::Theme;
use crate::ui::Action;
use crate::workflow::{CauseSelection, GuideDraft};
use eframe::egui::{self, RichText, ScrollArea};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Promote,
    Edit,
    Add,
}

impl FormKind {
    fn save_label(self) -> &'static str {
        match self {
            Self::Promote => "가이드 저장",
            Self::Edit => "변경사항 저장",
            Self::Add => "새 가이드 저장",
        }
    }

    fn cause_options(self) -> Vec<CauseSelection> {
        let mut options = Vec::with_capacity(Cause::PRESETS.len() + 2);
        if self == Self::Promote {
            options.push(CauseSelection::Unselected);
        }
        options.extend(Cause::PRESETS.into_iter().map(CauseSelection::Preset));
        options.push(CauseSelection::Custom);
        options
    }
}

pub fn render_guide_form(
    ui: &mut egui::Ui,
    theme: &Theme,
    draft: &mut GuideDraft,
    kind: FormKind,
    current_attachment: Option<&Path>,
    actions: &mut Vec<Action>,
) {
    let salt = format!("{kind:?}");
    ScrollArea::vertical()
        .id_salt(("guide_form", &salt))
        .max_height((ui.available_height() - 48.0).max(160.0))
        .show(ui, |ui| {
            if kind == FormKind::Add {
                ui.label("질문 (Prompt)");
                ui.text_edit_singleline(&mut draft.prompt);
                ui.label("답변 (Response)");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.response)
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );
            } else {
                theme.card_frame().show(ui, |ui| {
                    ui.strong("질문 (원본)");
                    ui.label(&draft.prompt);
                    ui.add_space(theme.spacing_8);
                    ui.strong("답변 (원본)");
                    ui.label(&draft.original_response);
                    ui.add_space(theme.spacing_4);
                    ui.label(
                        RichText::new(format!("원본 출처: {}", draft.source))
                            .color(theme.text_muted)
                            .small(),
                    );
                });
                ui.separator();
                ui.strong(if kind == FormKind::Edit { "답변 수정" } else { "답변 (가이드용)" });
                ui.add(
                    egui::TextEdit::multiline(&mut draft.response)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
            }

            ui.strong("원인/분석");
            egui::ComboBox::from_id_salt(("cause", &salt))
                .selected_text(draft.cause.label().to_string())
                .width(240.0)
                .show_ui(ui, |ui| {
                    for option in kind.cause_options() {
                        let label = option.label().to_string();
                        ui.selectable_value(&mut draft.cause, option, label);
                    }
                });
            if draft.cause == CauseSelection::Custom {
                ui.add(
                    egui::TextEdit::singleline(&mut draft.custom_cause)
                        .hint_text("상세 원인 입력..."),
                );
            }

            ui.separator();
            render_attachment_picker(ui, theme, draft, kind, current_attachment, actions);
        });

    ui.separator();
    ui.horizontal(|ui| {
        let save = egui::Button::new(RichText::new(kind.save_label()).color(theme.text_primary))
            .fill(theme.accent_muted);
        if ui.add(save).clicked() {
            actions.push(Action::SaveEditor);
        }
        if ui.button("취소").clicked() {
            actions.push(Action::CancelEditor);
        }
    });
}

fn render_attachment_picker(
    ui: &mut egui::Ui,
    theme: &Theme,
    draft: &mut GuideDraft,
    kind: FormKind,
    current_attachment: Option<&Path>,
    actions: &mut Vec<Action>,
) {
    ui.strong("참고 파일");
    if kind == FormKind::Edit {
        let current = current_attachment
            .filter(|path| path.exists())
            .and_then(Path::file_name)
            .map(|name| format!("현재 파일: {}", name.to_string_lossy()))
            .unwrap_or_else(|| "현재 첨부된 파일 없음".to_string());
        ui.label(RichText::new(current).color(theme.text_muted).small());
        ui.label("새 파일 첨부 (기존 파일 대체)");
    }

    let mut clear = false;
    if let Some(pending) = &draft.attachment {
        ui.horizontal(|ui| {
            ui.label(format!("선택된 파일: {}", pending.file_name));
            clear = ui.small_button("제거").clicked();
        });
    }
    if clear {
        draft.attachment = None;
    }

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut draft.attachment_input)
                .hint_text("파일 경로 입력 또는 창에 끌어다 놓기")
                .desired_width(280.0),
        );
        let has_input = !draft.attachment_input.trim().is_empty();
        if ui.add_enabled(has_input, egui::Button::new("첨부")).clicked() {
            actions.push(Action::AttachTypedPath);
        }
    });
}
