use crate::error::StoreError;
use crate::guide::store::GuideStore;
use crate::guide::Guide;
use crate::responder::Responder;
use crate::session::store::SessionStore;
use crate::session::Session;
use crate::theme::{self, Theme};
use crate::ui::{self, chat, guides, Action, SessionEntry};
use crate::workflow::{self, EditorMode, NoticeLevel, Page, ViewModel};
use chrono::Local;
use eframe::egui;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub struct GuideDeskApp {
    sessions: SessionStore,
    guides: GuideStore,
    responder: Box<dyn Responder>,
    theme: Theme,
    view: ViewModel,
    export_dir: PathBuf,
    session_entries: Vec<SessionEntry>,
    active: Option<Session>,
    guide_list: Vec<Guide>,
    guide_error: Option<String>,
    diagnostics_log: Vec<String>,
}

impl GuideDeskApp {
    pub fn new(
        sessions: SessionStore,
        guides: GuideStore,
        responder: Box<dyn Responder>,
        view: ViewModel,
        export_dir: PathBuf,
    ) -> Self {
        let mut app = Self {
            sessions,
            guides,
            responder,
            theme: Theme::default(),
            view,
            export_dir,
            session_entries: Vec::new(),
            active: None,
            guide_list: Vec::new(),
            guide_error: None,
            diagnostics_log: Vec::new(),
        };

        app.refresh_sessions();
        if let Some(newest) = app.session_entries.first().map(|entry| entry.id.clone()) {
            app.open_session(&newest);
        }
        app.refresh_guides();
        app
    }

    pub fn setup(&self, ctx: &egui::Context, font_path: Option<&Path>) {
        self.theme.apply_visuals(ctx);
        theme::install_fonts(ctx, font_path);
    }

    fn log_diagnostic(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.diagnostics_log.push(format!(
            "[{}] {}",
            Local::now().format("%H:%M:%S"),
            message
        ));
    }

    fn report(&mut self, context: &str, err: impl Display) {
        error!("{context}: {err}");
        self.diagnostics_log.push(format!(
            "[{}] {context}: {err}",
            Local::now().format("%H:%M:%S")
        ));
        self.view.notify(NoticeLevel::Error, format!("{context}: {err}"));
    }

    fn refresh_sessions(&mut self) {
        let ids = match self.sessions.list_sessions() {
            Ok(ids) => ids,
            Err(err) => {
                self.report("상담 목록을 불러오지 못했습니다", err);
                return;
            }
        };

        let mut unreadable = Vec::new();
        let entries: Vec<SessionEntry> = ids
            .into_iter()
            .map(|id| match self.sessions.load(&id) {
                Ok(session) => {
                    let counselor = if session.counselor_name.is_empty() {
                        "미지정"
                    } else {
                        session.counselor_name.as_str()
                    };
                    SessionEntry {
                        label: format!("{} (담당: {counselor})", session.title),
                        readable: true,
                        id,
                    }
                }
                Err(err) => {
                    unreadable.push(err.to_string());
                    SessionEntry {
                        label: format!("{id} (읽을 수 없음)"),
                        readable: false,
                        id,
                    }
                }
            })
            .collect();
        self.session_entries = entries;

        for warning in unreadable {
            self.log_diagnostic(format!("session load warning: {warning}"));
        }
    }

    fn refresh_guides(&mut self) {
        match self.guides.list_guides() {
            Ok(guides) => {
                self.guide_list = guides;
                self.guide_error = None;
            }
            Err(err) => {
                self.log_diagnostic(format!("guide load warning: {err}"));
                self.guide_list.clear();
                self.guide_error = Some(format!("가이드 파일을 읽을 수 없습니다: {err}"));
            }
        }
    }

    fn open_session(&mut self, id: &str) {
        match self.sessions.load(id) {
            Ok(session) => {
                self.view.open_session(id, &session);
                self.active = Some(session);
            }
            Err(err) => {
                self.view.close_session();
                self.active = None;
                self.report(&format!("{id} 파일을 불러오는 데 실패했습니다"), err);
            }
        }
    }

    /// Applies a session mutation to the active session and refreshes the sidebar.
    fn update_active(
        &mut self,
        success: &str,
        mutate: impl FnOnce(&SessionStore, &str) -> Result<Session, StoreError>,
    ) {
        let Some(id) = self.view.active_session.clone() else {
            return;
        };
        match mutate(&self.sessions, &id) {
            Ok(session) => {
                self.active = Some(session);
                self.view.notify(NoticeLevel::Success, success);
                self.refresh_sessions();
            }
            Err(err) => self.report("상담을 저장하지 못했습니다", err),
        }
    }

    fn apply(&mut self, action: Action) {
        debug!(action = %action.to_log_line(), "applying ui action");
        match action {
            Action::SwitchPage(page) => {
                self.view.switch_page(page);
                match page {
                    Page::Chat => self.refresh_sessions(),
                    Page::Guides => self.refresh_guides(),
                }
            }
            Action::NewSession => match self.sessions.create(&self.view.counselor) {
                Ok((id, session)) => {
                    self.view.open_session(&id, &session);
                    self.active = Some(session);
                    self.refresh_sessions();
                }
                Err(err) => self.report("새 상담을 만들지 못했습니다", err),
            },
            Action::OpenSession(id) => self.open_session(&id),
            Action::RenameSession => {
                let title = self.view.title_draft.clone();
                self.update_active("제목이 저장되었습니다.", |store, id| store.rename(id, &title));
            }
            Action::UpdateSummary => {
                let summary = self.view.summary_draft.clone();
                self.update_active("요약이 저장되었습니다.", |store, id| {
                    store.update_summary(id, &summary)
                });
            }
            Action::EndSession => {
                self.update_active("상담이 종료되었습니다.", |store, id| store.end(id));
            }
            Action::Ask => self.ask(),
            Action::Promote(index) => {
                if let Some(session) = &self.active {
                    if !self.view.promote(session, index) {
                        warn!(index, "ignored promotion of a turn without a paired question");
                    }
                }
            }
            Action::BeginAdd => self.view.begin_add(),
            Action::BeginEdit(id) => match self.guides.get(id) {
                Ok(Some(guide)) => self.view.begin_edit(&guide),
                Ok(None) => {
                    self.view
                        .notify(NoticeLevel::Warning, "이미 삭제된 가이드입니다.");
                    self.refresh_guides();
                }
                Err(err) => self.report("가이드를 불러오지 못했습니다", err),
            },
            Action::AttachTypedPath => {
                let accepted = self
                    .view
                    .editor
                    .draft_mut()
                    .map(|draft| draft.accept_attachment_input());
                if accepted == Some(false) {
                    self.view
                        .notify(NoticeLevel::Warning, "파일을 찾을 수 없습니다.");
                }
            }
            Action::SaveEditor => self.save_editor(),
            Action::CancelEditor => self.view.cancel(),
            Action::DeleteGuide(id) => {
                match self.guides.delete(id) {
                    Ok(true) => self.view.notify(NoticeLevel::Success, "가이드가 삭제되었습니다."),
                    Ok(false) => self
                        .view
                        .notify(NoticeLevel::Warning, "이미 삭제된 가이드입니다."),
                    Err(err) => self.report("가이드를 삭제하지 못했습니다", err),
                }
                if self.view.editor.editing_id() == Some(id) {
                    self.view.cancel();
                }
                self.refresh_guides();
            }
            Action::ExportAttachment(path) => {
                match self.guides.export_attachment(&path, &self.export_dir) {
                    Ok(target) => self.view.notify(
                        NoticeLevel::Success,
                        format!("파일을 저장했습니다: {}", target.display()),
                    ),
                    Err(err) => self.report("파일을 내보내지 못했습니다", err),
                }
            }
        }
    }

    fn ask(&mut self) {
        let Some(id) = self.view.active_session.clone() else {
            return;
        };
        let question = std::mem::take(&mut self.view.chat_input);
        match workflow::ask(&self.sessions, self.responder.as_ref(), &id, &question) {
            Ok(Some(session)) => self.active = Some(session),
            Ok(None) => {}
            Err(err) => {
                self.view.chat_input = question;
                self.report("대화를 저장하지 못했습니다", err);
            }
        }
    }

    fn save_editor(&mut self) {
        let success = match &self.view.editor {
            EditorMode::Browsing => return,
            EditorMode::PromotingToGuide(_) => "가이드가 성공적으로 저장되었습니다!",
            EditorMode::EditingExistingGuide { .. } => "가이드가 성공적으로 수정되었습니다.",
            EditorMode::AddingNewGuide(_) => "새 가이드가 성공적으로 추가되었습니다.",
        };

        match self.view.save(&self.guides) {
            Ok(_) => {
                self.view.notify(NoticeLevel::Success, success);
                self.refresh_guides();
            }
            Err(err) if err.is_validation() => {
                self.view.notify(NoticeLevel::Warning, err.to_string());
            }
            Err(err) => self.report("가이드를 저장하지 못했습니다", err),
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|input| {
            input
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        let Some(path) = dropped.first() else {
            return;
        };

        match self.view.editor.draft_mut() {
            Some(draft) => {
                if !draft.accept_dropped(path) {
                    self.view.notify(
                        NoticeLevel::Warning,
                        "파일 이름을 읽을 수 없어 첨부하지 않았습니다.",
                    );
                }
            }
            None => self.view.notify(
                NoticeLevel::Warning,
                "파일을 첨부하려면 먼저 가이드 편집기를 여세요.",
            ),
        }
    }

    fn render_diagnostics(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("diagnostics").show(ctx, |ui| {
            egui::CollapsingHeader::new(format!("진단 로그 ({})", self.diagnostics_log.len()))
                .default_open(false)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("diagnostics_log")
                        .max_height(90.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in &self.diagnostics_log {
                                ui.label(entry);
                            }
                        });
                });
        });
    }
}

impl eframe::App for GuideDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        let mut actions = Vec::new();
        ui::render_top_bar(ctx, &self.view, &mut actions);
        self.render_diagnostics(ctx);

        match self.view.page {
            Page::Chat => {
                chat::render_sidebar(
                    ctx,
                    &self.theme,
                    &mut self.view,
                    &self.session_entries,
                    self.active.as_ref(),
                    &mut actions,
                );
                chat::render_promotion_panel(ctx, &self.theme, &mut self.view, &mut actions);
                chat::render_chat(
                    ctx,
                    &self.theme,
                    &mut self.view,
                    self.active.as_ref(),
                    &mut actions,
                );
            }
            Page::Guides => guides::render_guides(
                ctx,
                &self.theme,
                &mut self.view,
                &self.guide_list,
                self.guide_error.as_deref(),
                &mut actions,
            ),
        }

        if !actions.is_empty() {
            for action in actions {
                self.apply(action);
            }
            ctx.request_repaint();
        }
    }
}
