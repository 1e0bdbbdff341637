//! Built-in question set used when the service asks for more information
//! without saying what it needs.

use super::question::ClarificationQuestion;

/// Feedback shown when a clarification response carries no message of its own
pub const DEFAULT_FEEDBACK: &str = "추가 정보가 필요합니다.";

/// The standard audience / tone / goal questions
pub fn default_questions() -> Vec<ClarificationQuestion> {
    vec![
        ClarificationQuestion::new("target", "대상 독자/고객은 누구인가요?").with_options([
            "일반 사용자",
            "전문가/개발자",
            "학생",
            "비즈니스 리더",
        ]),
        ClarificationQuestion::new("tone", "어떤 톤과 스타일로 작성할까요?").with_options([
            "전문적/학술적",
            "친근한/대화체",
            "간결한/명확한",
            "창의적/영감을 주는",
        ]),
        ClarificationQuestion::new("goal", "주요 목표는 무엇인가요?").with_options([
            "정보 제공",
            "설득/제안",
            "문제 해결",
            "아이디어 브레인스토밍",
        ]),
    ]
}
