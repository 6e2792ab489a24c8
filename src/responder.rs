#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: String,
}

/// Produces one answer and one citation per question.
pub trait Responder {
    fn respond(&self, question: &str) -> Answer;
}

/// Placeholder that echoes the question back.
#[derive(Debug, Clone, Default)]
pub struct EchoResponder;

impl EchoResponder {
    pub const SOURCE: &'static str = "https://docs.example.com/guidedesk";
}

impl Responder for EchoResponder {
    fn respond(&self, question: &str) -> Answer {
        Answer {
            text: format!("'{question}'에 대한 답변입니다. 이 답변은 예시입니다."),
            source: Self::SOURCE.to_string(),
        }
    }
}
