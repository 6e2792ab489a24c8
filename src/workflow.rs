//! View-model for both pages and the guide editor state machine.
//!
//! Render code receives a `&mut ViewModel`; nothing about the current
//! session or open editor lives anywhere else.

use crate::error::{EditorError, StoreError};
use crate::guide::store::GuideStore;
use crate::guide::{
    Cause, Guide, EMPTY_CUSTOM_CAUSE, MANUAL_COUNSELOR, MANUAL_SOURCE, UNKNOWN_SOURCE,
};
use crate::responder::Responder;
use crate::session::store::SessionStore;
use crate::session::{Session, Turn};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Chat,
    Guides,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CauseSelection {
    #[default]
    Unselected,
    Preset(Cause),
    /// Free text typed into the draft's `custom_cause`.
    Custom,
}

impl CauseSelection {
    pub fn for_cause(cause: &Cause) -> Self {
        if cause.is_preset() {
            Self::Preset(cause.clone())
        } else {
            Self::Custom
        }
    }

    pub fn resolve(&self, custom: &str) -> Option<Cause> {
        match self {
            Self::Unselected => None,
            Self::Preset(cause) => Some(cause.clone()),
            Self::Custom => {
                let custom = custom.trim();
                if custom.is_empty() {
                    Some(Cause::Other(EMPTY_CUSTOM_CAUSE.to_string()))
                } else {
                    Some(Cause::from_label(custom))
                }
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Unselected => "선택하세요",
            Self::Preset(cause) => cause.label(),
            Self::Custom => "기타 (직접 입력)",
        }
    }
}

/// A file chosen in the editor, copied into the attachment directory on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttachment {
    pub file_name: String,
    pub source: PathBuf,
}

impl PendingAttachment {
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(Self {
            file_name,
            source: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuideDraft {
    pub prompt: String,
    pub original_response: String,
    pub response: String,
    pub source: String,
    pub cause: CauseSelection,
    pub custom_cause: String,
    pub attachment: Option<PendingAttachment>,
    /// Path typed into the attachment field, not yet accepted.
    pub attachment_input: String,
}

impl GuideDraft {
    /// Accepts the typed attachment path if it names a readable file.
    pub fn accept_attachment_input(&mut self) -> bool {
        let path = PathBuf::from(self.attachment_input.trim());
        if !path.is_file() {
            return false;
        }
        match PendingAttachment::from_path(&path) {
            Some(pending) => {
                self.attachment = Some(pending);
                self.attachment_input.clear();
                true
            }
            None => false,
        }
    }

    /// Replaces the pending attachment with a dropped file. A path whose name
    /// cannot be stored keeps the current choice and returns false.
    pub fn accept_dropped(&mut self, path: &Path) -> bool {
        match PendingAttachment::from_path(path) {
            Some(pending) => {
                self.attachment = Some(pending);
                true
            }
            None => false,
        }
    }

    fn resolved_cause(&self) -> Result<Cause, EditorError> {
        self.cause
            .resolve(&self.custom_cause)
            .ok_or(EditorError::CauseRequired)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorMode {
    #[default]
    Browsing,
    PromotingToGuide(GuideDraft),
    EditingExistingGuide {
        id: Uuid,
        draft: GuideDraft,
        current_attachment: Option<PathBuf>,
    },
    AddingNewGuide(GuideDraft),
}

impl EditorMode {
    pub fn is_browsing(&self) -> bool {
        matches!(self, Self::Browsing)
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        match self {
            Self::EditingExistingGuide { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut GuideDraft> {
        match self {
            Self::Browsing => None,
            Self::PromotingToGuide(draft) | Self::AddingNewGuide(draft) => Some(draft),
            Self::EditingExistingGuide { draft, .. } => Some(draft),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub page: Page,
    pub active_session: Option<String>,
    pub counselor: String,
    pub editor: EditorMode,
    pub chat_input: String,
    pub title_draft: String,
    pub summary_draft: String,
    pub search: String,
    pub notice: Option<Notice>,
}

impl ViewModel {
    pub fn new(counselor: impl Into<String>) -> Self {
        Self {
            page: Page::Chat,
            active_session: None,
            counselor: counselor.into(),
            editor: EditorMode::Browsing,
            chat_input: String::new(),
            title_draft: String::new(),
            summary_draft: String::new(),
            search: String::new(),
            notice: None,
        }
    }

    pub fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
        });
    }

    /// Makes `id` the active session. Any open editor is discarded.
    pub fn open_session(&mut self, id: &str, session: &Session) {
        self.active_session = Some(id.to_string());
        self.title_draft = session.title.clone();
        self.summary_draft = session.summary.clone();
        self.editor = EditorMode::Browsing;
    }

    pub fn close_session(&mut self) {
        self.active_session = None;
        self.title_draft.clear();
        self.summary_draft.clear();
        self.editor = EditorMode::Browsing;
    }

    pub fn switch_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.editor = EditorMode::Browsing;
            self.notice = None;
        }
    }

    /// Opens the editor on the exchange ending at `index`.
    /// Returns false when `index` is not an assistant turn answering a user turn.
    pub fn promote(&mut self, session: &Session, index: usize) -> bool {
        if !session.is_promotable(index) {
            return false;
        }
        let question = &session.messages[index - 1];
        let answer = &session.messages[index];
        self.editor = EditorMode::PromotingToGuide(GuideDraft {
            prompt: question.content.clone(),
            original_response: answer.content.clone(),
            response: answer.content.clone(),
            source: answer
                .source
                .clone()
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            ..GuideDraft::default()
        });
        debug!(index, "promoting exchange to guide draft");
        true
    }

    pub fn begin_edit(&mut self, guide: &Guide) {
        let custom_cause = match &guide.cause {
            Cause::Other(text) => text.clone(),
            _ => String::new(),
        };
        self.editor = EditorMode::EditingExistingGuide {
            id: guide.id,
            draft: GuideDraft {
                prompt: guide.prompt.clone(),
                original_response: guide.response.clone(),
                response: guide.response.clone(),
                source: guide.original_source.clone(),
                cause: CauseSelection::for_cause(&guide.cause),
                custom_cause,
                ..GuideDraft::default()
            },
            current_attachment: guide.attachment_path.clone(),
        };
    }

    pub fn begin_add(&mut self) {
        self.editor = EditorMode::AddingNewGuide(GuideDraft {
            cause: CauseSelection::Preset(Cause::SimpleInquiry),
            source: MANUAL_SOURCE.to_string(),
            ..GuideDraft::default()
        });
    }

    pub fn cancel(&mut self) {
        self.editor = EditorMode::Browsing;
    }

    pub fn save(&mut self, guides: &GuideStore) -> Result<Guide, EditorError> {
        self.save_at(guides, Local::now().naive_local())
    }

    /// Commits the open editor and returns to browsing. On error the editor stays open.
    pub fn save_at(&mut self, guides: &GuideStore, now: NaiveDateTime) -> Result<Guide, EditorError> {
        let saved = match &self.editor {
            EditorMode::Browsing => return Err(EditorError::NotEditing),
            EditorMode::PromotingToGuide(draft) => {
                let cause = draft.resolved_cause()?;
                let attachment_path = store_pending(guides, draft.attachment.as_ref())?;
                guides.append(Guide {
                    id: Uuid::new_v4(),
                    prompt: draft.prompt.clone(),
                    response: draft.response.clone(),
                    cause,
                    attachment_path,
                    counselor_name: self.counselor.clone(),
                    created_at: now,
                    original_source: draft.source.clone(),
                })?
            }
            EditorMode::AddingNewGuide(draft) => {
                if draft.prompt.trim().is_empty() || draft.response.trim().is_empty() {
                    return Err(EditorError::PromptAndResponseRequired);
                }
                let cause = draft.resolved_cause()?;
                let attachment_path = store_pending(guides, draft.attachment.as_ref())?;
                guides.append(Guide {
                    id: Uuid::new_v4(),
                    prompt: draft.prompt.clone(),
                    response: draft.response.clone(),
                    cause,
                    attachment_path,
                    counselor_name: MANUAL_COUNSELOR.to_string(),
                    created_at: now,
                    original_source: MANUAL_SOURCE.to_string(),
                })?
            }
            EditorMode::EditingExistingGuide { id, draft, .. } => {
                let cause = draft.resolved_cause()?;
                let replacement = store_pending(guides, draft.attachment.as_ref())?;
                let response = draft.response.clone();
                guides.update(*id, move |guide| {
                    guide.response = response;
                    guide.cause = cause;
                    if let Some(path) = replacement {
                        guide.attachment_path = Some(path);
                    }
                })?
            }
        };

        self.editor = EditorMode::Browsing;
        Ok(saved)
    }
}

fn store_pending(
    guides: &GuideStore,
    pending: Option<&PendingAttachment>,
) -> Result<Option<PathBuf>, EditorError> {
    let Some(pending) = pending else {
        return Ok(None);
    };
    let bytes = fs::read(&pending.source).map_err(|source| EditorError::AttachmentUnreadable {
        path: pending.source.clone(),
        source,
    })?;
    Ok(Some(guides.store_attachment(&pending.file_name, &bytes)?))
}

/// Records a question and the responder's answer as a user/assistant pair.
/// Blank questions are ignored.
pub fn ask(
    sessions: &SessionStore,
    responder: &dyn Responder,
    id: &str,
    question: &str,
) -> Result<Option<Session>, StoreError> {
    let question = question.trim();
    if question.is_empty() {
        return Ok(None);
    }

    let asked_at = Local::now().naive_local();
    let answer = responder.respond(question);
    // Both turns land in one rewrite so a failed save never leaves a lone question.
    let session = sessions.append_turns(
        id,
        [
            Turn::user(question, asked_at),
            Turn::assistant(answer.text, answer.source, Local::now().naive_local()),
        ],
    )?;
    info!(session = %id, turns = session.messages.len(), "recorded exchange");
    Ok(Some(session))
}

#[cfg(test)]
mod tests {
    use super::{ask, CauseSelection, EditorMode, Page, PendingAttachment, ViewModel};
    use crate::error::{EditorError, StoreError};
    use crate::guide::store::GuideStore;
    use crate::guide::{Cause, Guide, EMPTY_CUSTOM_CAUSE, MANUAL_COUNSELOR, MANUAL_SOURCE};
    use crate::responder::{Answer, EchoResponder, Responder};
    use crate::session::store::SessionStore;
    use crate::session::{Role, Session, Turn};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;
    use uuid::Uuid;

    struct Fixture {
        dir: TempDir,
        sessions: SessionStore,
        guides: GuideStore,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let sessions = SessionStore::open(dir.path().join("history")).expect("sessions open");
        let guides = GuideStore::open(
            dir.path().join("guide").join("guide.json"),
            dir.path().join("guide").join("attachments"),
        )
        .expect("guides open");
        Fixture {
            dir,
            sessions,
            guides,
        }
    }

    fn at(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .and_then(|date| date.and_hms_opt(10, minute, 0))
            .expect("fixture time should be valid")
    }

    fn chat(prompt: &str, answer: &str) -> Session {
        Session {
            title: "상담".to_string(),
            summary: String::new(),
            counselor_name: "담당자A".to_string(),
            start_time: at(0),
            end_time: None,
            messages: vec![
                Turn::user(prompt, at(1)),
                Turn::assistant(answer, "https://docs.example.com", at(1)),
            ],
        }
    }

    fn seeded_guide(fx: &Fixture, cause: Cause) -> Guide {
        fx.guides
            .append(Guide {
                id: Uuid::new_v4(),
                prompt: "reset password".to_string(),
                response: "Use the reset link.".to_string(),
                cause,
                attachment_path: None,
                counselor_name: "담당자A".to_string(),
                created_at: at(5),
                original_source: "https://docs.example.com".to_string(),
            })
            .expect("seed guide")
    }

    #[test]
    fn promote_then_save_creates_exactly_one_record() {
        let fx = fixture();
        let mut view = ViewModel::new("담당자A");
        let session = chat("P", "A");

        assert!(view.promote(&session, 1));
        let draft = view.editor.draft_mut().expect("promotion opens a draft");
        draft.cause = CauseSelection::Custom;
        draft.custom_cause = "기타 문의".to_string();

        let saved = view.save_at(&fx.guides, at(30)).expect("save succeeds");
        assert!(view.editor.is_browsing());

        let guides = fx.guides.list_guides().expect("listing");
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0], saved);
        assert_eq!(saved.prompt, "P");
        assert_eq!(saved.response, "A");
        assert_eq!(saved.cause.label(), "기타 문의");
        assert_eq!(saved.created_at, at(30));
        assert_eq!(saved.counselor_name, "담당자A");
        assert_eq!(saved.original_source, "https://docs.example.com");
    }

    #[test]
    fn promotion_requires_a_cause() {
        let fx = fixture();
        let mut view = ViewModel::new("담당자A");
        assert!(view.promote(&chat("P", "A"), 1));

        let err = view.save_at(&fx.guides, at(30)).expect_err("cause is required");
        assert!(matches!(err, EditorError::CauseRequired));
        assert!(err.is_validation());
        assert!(matches!(view.editor, EditorMode::PromotingToGuide(_)));
        assert!(fx.guides.list_guides().expect("listing").is_empty());
    }

    #[test]
    fn empty_custom_cause_gets_placeholder() {
        let fx = fixture();
        let mut view = ViewModel::new("담당자A");
        assert!(view.promote(&chat("P", "A"), 1));
        if let Some(draft) = view.editor.draft_mut() {
            draft.cause = CauseSelection::Custom;
        }

        let saved = view.save_at(&fx.guides, at(30)).expect("save succeeds");
        assert_eq!(saved.cause.label(), EMPTY_CUSTOM_CAUSE);
    }

    #[test]
    fn only_answers_to_questions_are_promotable() {
        let mut view = ViewModel::new("담당자A");
        let session = chat("P", "A");

        assert!(!view.promote(&session, 0));
        assert!(!view.promote(&session, 2));
        assert!(view.editor.is_browsing());
    }

    #[test]
    fn entering_one_editor_replaces_another() {
        let fx = fixture();
        let guide = seeded_guide(&fx, Cause::AccountAccess);
        let mut view = ViewModel::new("담당자A");

        assert!(view.promote(&chat("P", "A"), 1));
        view.begin_add();
        assert!(matches!(view.editor, EditorMode::AddingNewGuide(_)));

        view.begin_edit(&guide);
        assert_eq!(view.editor.editing_id(), Some(guide.id));

        view.switch_page(Page::Guides);
        assert!(view.editor.is_browsing());
    }

    #[test]
    fn edit_then_cancel_leaves_stored_record_unchanged() {
        let fx = fixture();
        let guide = seeded_guide(&fx, Cause::AccountAccess);
        let before = fs::read(fx.guides.path()).expect("guide file reads");
        let mut view = ViewModel::new("담당자A");

        view.begin_edit(&guide);
        if let Some(draft) = view.editor.draft_mut() {
            draft.response = "완전히 다른 답변".to_string();
        }
        view.cancel();

        assert!(view.editor.is_browsing());
        assert_eq!(fs::read(fx.guides.path()).expect("guide file reads"), before);
    }

    #[test]
    fn edit_save_updates_response_cause_and_attachment() {
        let fx = fixture();
        let guide = seeded_guide(&fx, Cause::Other("결제 오류 문의".to_string()));
        let upload = fx.dir.path().join("steps.txt");
        fs::write(&upload, "1. 설정 2. 재설정").expect("upload fixture writes");
        let mut view = ViewModel::new("담당자A");

        view.begin_edit(&guide);
        let draft = view.editor.draft_mut().expect("edit opens a draft");
        assert_eq!(draft.cause, CauseSelection::Custom);
        assert_eq!(draft.custom_cause, "결제 오류 문의");
        draft.response = "재설정 링크를 사용하세요.".to_string();
        draft.attachment = PendingAttachment::from_path(&upload);

        let saved = view.save_at(&fx.guides, at(40)).expect("save succeeds");
        assert_eq!(saved.id, guide.id);
        assert_eq!(saved.prompt, guide.prompt);
        assert_eq!(saved.created_at, guide.created_at);
        assert_eq!(saved.response, "재설정 링크를 사용하세요.");
        assert_eq!(saved.cause, Cause::Other("결제 오류 문의".to_string()));

        let stored_file = saved.attachment_path.expect("attachment recorded");
        assert_eq!(
            stored_file,
            fx.dir.path().join("guide").join("attachments").join("steps.txt")
        );
        assert_eq!(
            fs::read_to_string(stored_file).expect("attachment reads"),
            "1. 설정 2. 재설정"
        );
    }

    #[test]
    fn edit_of_deleted_guide_reports_missing() {
        let fx = fixture();
        let guide = seeded_guide(&fx, Cause::Misc);
        let mut view = ViewModel::new("담당자A");

        view.begin_edit(&guide);
        assert!(fx.guides.delete(guide.id).expect("delete"));

        let err = view.save_at(&fx.guides, at(40)).expect_err("guide is gone");
        assert!(matches!(err, EditorError::Store(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn manual_add_requires_prompt_and_response() {
        let fx = fixture();
        let mut view = ViewModel::new("담당자A");
        view.begin_add();
        if let Some(draft) = view.editor.draft_mut() {
            draft.prompt = "환불 규정".to_string();
        }

        let err = view.save_at(&fx.guides, at(50)).expect_err("response missing");
        assert!(matches!(err, EditorError::PromptAndResponseRequired));

        if let Some(draft) = view.editor.draft_mut() {
            draft.response = "7일 이내 가능합니다.".to_string();
        }
        let saved = view.save_at(&fx.guides, at(50)).expect("save succeeds");
        assert_eq!(saved.cause, Cause::SimpleInquiry);
        assert_eq!(saved.counselor_name, MANUAL_COUNSELOR);
        assert_eq!(saved.original_source, MANUAL_SOURCE);
        assert!(view.editor.is_browsing());
    }

    #[test]
    fn unreadable_attachment_keeps_editor_open() {
        let fx = fixture();
        let mut view = ViewModel::new("담당자A");
        assert!(view.promote(&chat("P", "A"), 1));
        if let Some(draft) = view.editor.draft_mut() {
            draft.cause = CauseSelection::Preset(Cause::HowToUse);
            draft.attachment = PendingAttachment::from_path(&fx.dir.path().join("gone.pdf"));
        }

        let err = view.save_at(&fx.guides, at(30)).expect_err("attachment missing");
        assert!(matches!(err, EditorError::AttachmentUnreadable { .. }));
        assert!(matches!(view.editor, EditorMode::PromotingToGuide(_)));
    }

    #[test]
    fn typed_attachment_path_must_exist() {
        let fx = fixture();
        let upload = fx.dir.path().join("manual.pdf");
        fs::write(&upload, b"%PDF").expect("upload fixture writes");
        let mut view = ViewModel::new("담당자A");
        view.begin_add();
        let draft = view.editor.draft_mut().expect("add opens a draft");

        draft.attachment_input = fx.dir.path().join("nope.pdf").display().to_string();
        assert!(!draft.accept_attachment_input());
        assert!(draft.attachment.is_none());

        draft.attachment_input = format!("  {}  ", upload.display());
        assert!(draft.accept_attachment_input());
        assert!(draft.attachment_input.is_empty());
        assert_eq!(
            draft.attachment.as_ref().map(|pending| pending.file_name.as_str()),
            Some("manual.pdf")
        );
    }

    #[cfg(unix)]
    #[test]
    fn unusable_dropped_name_keeps_current_attachment() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let fx = fixture();
        let mut view = ViewModel::new("담당자A");
        view.begin_add();
        let draft = view.editor.draft_mut().expect("add opens a draft");

        assert!(draft.accept_dropped(&fx.dir.path().join("manual.pdf")));
        let bad = fx.dir.path().join(OsStr::from_bytes(b"bad\xff.pdf"));
        assert!(!draft.accept_dropped(&bad));
        assert_eq!(
            draft.attachment.as_ref().map(|pending| pending.file_name.as_str()),
            Some("manual.pdf")
        );
    }

    #[test]
    fn ask_appends_question_and_answer() {
        let fx = fixture();
        let (id, _) = fx.sessions.create("담당자A").expect("create");

        assert!(ask(&fx.sessions, &EchoResponder, &id, "   ").expect("blank").is_none());

        let session = ask(&fx.sessions, &EchoResponder, &id, "비밀번호 변경")
            .expect("ask")
            .expect("question recorded");
        let expected = EchoResponder.respond("비밀번호 변경");
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, Role::User);
        assert_eq!(session.messages[0].content, "비밀번호 변경");
        assert_eq!(session.messages[1].role, Role::Assistant);
        assert_eq!(session.messages[1].content, expected.text);
        assert_eq!(session.messages[1].source.as_deref(), Some(expected.source.as_str()));
        assert_eq!(fx.sessions.load(&id).expect("reload"), session);
    }

    struct InspectingResponder<'a> {
        sessions: &'a SessionStore,
        id: String,
        seen: Cell<Option<usize>>,
    }

    impl Responder for InspectingResponder<'_> {
        fn respond(&self, question: &str) -> Answer {
            let turns = self
                .sessions
                .load(&self.id)
                .map(|session| session.messages.len())
                .ok();
            self.seen.set(turns);
            EchoResponder.respond(question)
        }
    }

    #[test]
    fn question_is_not_written_before_its_answer() {
        let fx = fixture();
        let (id, _) = fx.sessions.create("담당자A").expect("create");
        let responder = InspectingResponder {
            sessions: &fx.sessions,
            id: id.clone(),
            seen: Cell::new(None),
        };

        let session = ask(&fx.sessions, &responder, &id, "환불 문의")
            .expect("ask")
            .expect("question recorded");
        assert_eq!(responder.seen.get(), Some(0));
        assert_eq!(session.messages.len(), 2);
        assert!(session.is_promotable(1));
    }

    #[test]
    fn failed_exchange_leaves_session_untouched() {
        let fx = fixture();
        let (id, _) = fx.sessions.create("담당자A").expect("create");
        let path = fx.sessions.dir().join(format!("{id}.json"));
        fs::write(&path, "not json").expect("corrupt fixture writes");

        let err = ask(&fx.sessions, &EchoResponder, &id, "환불 문의").expect_err("corrupt session");
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert_eq!(fs::read_to_string(&path).expect("fixture reads"), "not json");
    }

    #[test]
    fn opening_a_session_discards_the_editor() {
        let mut view = ViewModel::new("담당자A");
        let session = chat("P", "A");
        assert!(view.promote(&session, 1));

        view.open_session("history20240701_100000", &session);
        assert!(view.editor.is_browsing());
        assert_eq!(view.title_draft, "상담");
        assert_eq!(view.active_session.as_deref(), Some("history20240701_100000"));
    }
}
