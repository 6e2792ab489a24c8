use crate::session::{Role, Session};
use crate::theme::Theme;
use crate::ui::editor::{self, FormKind};
use crate::ui::{render_notice, Action, SessionEntry};
use crate::workflow::{EditorMode, ViewModel};
use eframe::egui::{self, RichText, ScrollArea};

pub fn render_sidebar(
    ctx: &egui::Context,
    theme: &Theme,
    view: &mut ViewModel,
    entries: &[SessionEntry],
    active: Option<&Session>,
    actions: &mut Vec<Action>,
) {
    egui::SidePanel::left("session_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("상담 목록");
            ui.label("현재 상담원 이름");
            ui.text_edit_singleline(&mut view.counselor)
                .on_hover_text("새로운 상담/가이드를 저장할 때 이 이름으로 담당자가 설정됩니다.");
            if ui
                .add_sized([ui.available_width(), 28.0], egui::Button::new("새 상담 시작하기"))
                .clicked()
            {
                actions.push(Action::NewSession);
            }

            ui.separator();
            ScrollArea::vertical()
                .id_salt("session_list")
                .max_height(350.0)
                .show(ui, |ui| {
                    if entries.is_empty() {
                        ui.label(RichText::new("저장된 상담이 없습니다.").color(theme.text_muted));
                    }
                    for entry in entries {
                        let is_current = view.active_session.as_deref() == Some(entry.id.as_str());
                        let label = if entry.readable {
                            RichText::new(&entry.label)
                        } else {
                            RichText::new(&entry.label).color(theme.danger)
                        };
                        let button = egui::Button::new(label).wrap();
                        let enabled = entry.readable && !is_current;
                        if ui
                            .add_enabled(enabled, button)
                            .on_disabled_hover_text(&entry.id)
                            .clicked()
                        {
                            actions.push(Action::OpenSession(entry.id.clone()));
                        }
                    }
                });

            let Some(session) = active else {
                return;
            };

            ui.separator();
            ui.strong("상담 제목 수정");
            ui.text_edit_singleline(&mut view.title_draft);
            if ui.button("제목 저장").clicked() {
                actions.push(Action::RenameSession);
            }

            ui.add_space(theme.spacing_8);
            ui.strong("상담 요약");
            ui.add(
                egui::TextEdit::multiline(&mut view.summary_draft)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("요약 저장").clicked() {
                actions.push(Action::UpdateSummary);
            }

            ui.add_space(theme.spacing_8);
            ui.label(
                RichText::new(format!(
                    "시작: {}",
                    session.start_time.format("%Y-%m-%d %H:%M")
                ))
                .color(theme.text_muted)
                .small(),
            );
            match session.end_time {
                Some(end) => {
                    ui.label(
                        RichText::new(format!("종료: {}", end.format("%Y-%m-%d %H:%M")))
                            .color(theme.text_muted)
                            .small(),
                    );
                }
                None => {
                    if ui.button("상담 종료").clicked() {
                        actions.push(Action::EndSession);
                    }
                }
            }
        });
}

/// Right-hand editor shown while a chat exchange is being promoted.
pub fn render_promotion_panel(
    ctx: &egui::Context,
    theme: &Theme,
    view: &mut ViewModel,
    actions: &mut Vec<Action>,
) {
    let EditorMode::PromotingToGuide(draft) = &mut view.editor else {
        return;
    };
    egui::SidePanel::right("guide_editor")
        .resizable(true)
        .default_width(440.0)
        .show(ctx, |ui| {
            ui.heading("새 가이드 생성");
            ui.separator();
            editor::render_guide_form(ui, theme, draft, FormKind::Promote, None, actions);
        });
}

pub fn render_chat(
    ctx: &egui::Context,
    theme: &Theme,
    view: &mut ViewModel,
    active: Option<&Session>,
    actions: &mut Vec<Action>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        render_notice(ui, theme, view);

        let Some(session) = active else {
            ui.label("새 상담을 시작하거나 사이드바에서 기존 상담을 선택해주세요.");
            return;
        };

        let counselor = if session.counselor_name.is_empty() {
            "미지정"
        } else {
            session.counselor_name.as_str()
        };
        ui.heading(format!("챗봇 대화 (담당: {counselor})"));
        ui.separator();

        let transcript_height = (ui.available_height() - 64.0).max(120.0);
        ScrollArea::vertical()
            .id_salt("chat_transcript")
            .max_height(transcript_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for (index, turn) in session.messages.iter().enumerate() {
                    let (speaker, fill) = match turn.role {
                        Role::User => ("상담원", theme.user_bubble),
                        Role::Assistant => ("챗봇", theme.assistant_bubble),
                    };
                    theme.bubble_frame(fill).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(speaker).color(theme.text_muted).small());
                        ui.label(&turn.content);
                        if let Some(source) = turn.source.as_deref() {
                            ui.label(
                                RichText::new(format!("출처: {source}"))
                                    .color(theme.text_muted)
                                    .small(),
                            );
                        }
                        if session.is_promotable(index) && ui.small_button("가이드에 추가").clicked() {
                            actions.push(Action::Promote(index));
                        }
                    });
                    ui.add_space(theme.spacing_4);
                }
            });

        ui.separator();
        let mut send_now = false;
        ui.horizontal(|ui| {
            let input_width = (ui.available_width() - 72.0).max(120.0);
            let response = ui.add(
                egui::TextEdit::singleline(&mut view.chat_input)
                    .desired_width(input_width)
                    .hint_text("메시지를 입력하세요..."),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send_now = true;
            }
            let has_text = !view.chat_input.trim().is_empty();
            send_now |= ui.add_enabled(has_text, egui::Button::new("전송")).clicked();
        });
        if send_now {
            actions.push(Action::Ask);
        }
    });
}
