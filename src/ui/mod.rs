use crate::theme::Theme;
use crate::workflow::{Page, ViewModel};
use eframe::egui::{self, RichText};
use std::path::PathBuf;
use uuid::Uuid;

pub mod chat;
pub mod editor;
pub mod guides;

/// A user action collected while rendering and applied after the frame.
/// Text payloads (titles, questions, drafts) are read from the view-model.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SwitchPage(Page),
    NewSession,
    OpenSession(String),
    RenameSession,
    UpdateSummary,
    EndSession,
    Ask,
    Promote(usize),
    BeginAdd,
    BeginEdit(Uuid),
    AttachTypedPath,
    SaveEditor,
    CancelEditor,
    DeleteGuide(Uuid),
    ExportAttachment(PathBuf),
}

impl Action {
    pub fn to_log_line(&self) -> String {
        match self {
            Self::SwitchPage(page) => format!("switch_page page={page:?}"),
            Self::OpenSession(id) => format!("open_session id={id}"),
            Self::Promote(index) => format!("promote index={index}"),
            Self::BeginEdit(id) => format!("begin_edit guide={id}"),
            Self::DeleteGuide(id) => format!("delete_guide guide={id}"),
            Self::ExportAttachment(path) => format!("export_attachment path={}", path.display()),
            other => format!("{other:?}").to_lowercase(),
        }
    }
}

/// One row of the session sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub id: String,
    pub label: String,
    pub readable: bool,
}

pub fn render_top_bar(ctx: &egui::Context, view: &ViewModel, actions: &mut Vec<Action>) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong("상담 관리 시스템");
            ui.separator();
            if ui
                .selectable_label(view.page == Page::Chat, "상담 시스템")
                .clicked()
            {
                actions.push(Action::SwitchPage(Page::Chat));
            }
            if ui
                .selectable_label(view.page == Page::Guides, "가이드 목록")
                .clicked()
            {
                actions.push(Action::SwitchPage(Page::Guides));
            }
        });
    });
}

pub fn render_notice(ui: &mut egui::Ui, theme: &Theme, view: &mut ViewModel) {
    let Some(notice) = &view.notice else {
        return;
    };
    let mut dismissed = false;
    theme.card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&notice.text).color(theme.notice_color(notice.level)));
            dismissed = ui.small_button("닫기").clicked();
        });
    });
    if dismissed {
        view.notice = None;
    }
}
