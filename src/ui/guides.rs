use crate::guide::{search, Guide};
use crate::theme::Theme;
use crate::ui::editor::{self, FormKind};
use crate::ui::{render_notice, Action};
use crate::workflow::{EditorMode, ViewModel};
use eframe::egui::{self, RichText, ScrollArea};

pub fn render_guides(
    ctx: &egui::Context,
    theme: &Theme,
    view: &mut ViewModel,
    guides: &[Guide],
    load_error: Option<&str>,
    actions: &mut Vec<Action>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("가이드 목록");
        ui.separator();
        render_notice(ui, theme, view);

        if let Some(error) = load_error {
            ui.label(RichText::new(error).color(theme.danger));
        }

        if ui
            .add_sized([ui.available_width(), 30.0], egui::Button::new("지식베이스에 추가하기"))
            .clicked()
        {
            actions.push(Action::BeginAdd);
        }

        if let EditorMode::AddingNewGuide(draft) = &mut view.editor {
            ui.add_space(theme.spacing_8);
            ui.strong("새 가이드 직접 추가");
            theme.card_frame().show(ui, |ui| {
                editor::render_guide_form(ui, theme, draft, FormKind::Add, None, actions);
            });
            return;
        }

        if guides.is_empty() {
            ui.label(
                "아직 생성된 가이드가 없습니다. 상담 시스템에서 가이드를 추가하거나, 위 버튼을 눌러 직접 추가해주세요.",
            );
            return;
        }

        ui.add(
            egui::TextEdit::singleline(&mut view.search)
                .hint_text("질문, 답변, 원인 내용으로 검색...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(theme.spacing_8);

        let hits = search(guides, &view.search);
        if hits.is_empty() {
            ui.label(RichText::new("검색 결과가 없습니다.").color(theme.text_muted));
        }

        ScrollArea::vertical().id_salt("guide_list").show(ui, |ui| {
            for guide in hits {
                match &mut view.editor {
                    EditorMode::EditingExistingGuide {
                        id,
                        draft,
                        current_attachment,
                    } if *id == guide.id => {
                        ui.strong(format!("가이드 수정: {}...", preview(&guide.prompt, 30)));
                        theme.card_frame().show(ui, |ui| {
                            editor::render_guide_form(
                                ui,
                                theme,
                                draft,
                                FormKind::Edit,
                                current_attachment.as_deref(),
                                actions,
                            );
                        });
                    }
                    _ => render_guide_card(ui, theme, guide, actions),
                }
                ui.add_space(theme.spacing_4);
            }
        });
    });
}

fn render_guide_card(ui: &mut egui::Ui, theme: &Theme, guide: &Guide, actions: &mut Vec<Action>) {
    egui::CollapsingHeader::new(RichText::new(format!("Q. {}", guide.prompt)).strong())
        .id_salt(guide.id)
        .show(ui, |ui| {
            ui.strong("A. 답변");
            theme.card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(&guide.response);
            });

            ui.columns(3, |columns| {
                columns[0].strong("원인/분석");
                columns[0].label(guide.cause.label());
                columns[1].strong("담당자");
                columns[1].label(if guide.counselor_name.is_empty() {
                    "미지정"
                } else {
                    guide.counselor_name.as_str()
                });
                columns[2].strong("생성일");
                columns[2].label(guide.created_at.format("%Y-%m-%d %H:%M").to_string());
            });

            // The export button is omitted when the file has gone missing.
            if let Some(path) = guide.attachment_path.as_ref().filter(|path| path.exists()) {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default();
                if ui.button(format!("파일 내보내기 ({name})")).clicked() {
                    actions.push(Action::ExportAttachment(path.clone()));
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("수정").clicked() {
                    actions.push(Action::BeginEdit(guide.id));
                }
                if ui
                    .button(RichText::new("삭제").color(theme.danger))
                    .clicked()
                {
                    actions.push(Action::DeleteGuide(guide.id));
                }
            });
        });
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
