//! Prompt assembly for the diagnosis and chat flows.
//!
//! All user-facing text is Korean; the product serves Korean small-business
//! owners. The diagnosis system prompt pins the JSON reply shape that
//! `forewarn-diagnosis` extracts downstream.

use forewarn_core::DiagnosisRequest;

use crate::chat::ChatContext;

pub const DIAGNOSIS_SYSTEM_PROMPT: &str = r#"당신은 자영업 경영 컨설턴트입니다. 사용자가 제공하는 비즈니스 데이터를 분석하여 위험도를 평가해주세요.

다음 형식의 JSON으로 응답해주세요:
{
  "overallScore": 0-100 사이의 점수 (높을수록 안전),
  "riskLevel": "GREEN" | "YELLOW" | "ORANGE" | "RED",
  "components": {
    "sales": { "score": 0-100, "trend": "설명" },
    "customer": { "score": 0-100, "trend": "설명" },
    "market": { "score": 0-100, "trend": "설명" }
  },
  "recommendations": [
    { "title": "제목", "description": "설명", "priority": "HIGH" | "MEDIUM" | "LOW" }
  ],
  "insights": ["인사이트1", "인사이트2", "인사이트3"]
}"#;

pub const CHAT_SYSTEM_PROMPT: &str = r#"당신은 한국의 자영업자를 위한 경영 컨설팅 AI 어시스턴트입니다.

역할:
- 자영업자의 경영 상태를 분석하고 실질적인 조언을 제공합니다
- 친근하고 이해하기 쉬운 한국어로 대화합니다
- 구체적이고 실행 가능한 개선 방안을 제시합니다
- 긍정적이면서도 현실적인 태도를 유지합니다

답변 스타일:
- 존댓말을 사용하되 너무 격식적이지 않게 합니다
- 복잡한 용어는 쉽게 풀어서 설명합니다
- 구체적인 예시와 수치를 활용합니다
- 3-5문장으로 간결하게 답변합니다"#;

const UNKNOWN_FIELD: &str = "정보 없음";

/// User message carrying the business data for one diagnosis. Amounts are
/// digit-grouped the way the dashboard renders them.
pub fn build_diagnosis_message(request: &DiagnosisRequest) -> String {
    format!(
        "업종: {}\n운영 기간: {}년\n월 매출: {}원\n월 지출: {}원\n고객 수: {}명",
        request.industry,
        request.years_in_business,
        format_amount(request.monthly_revenue),
        format_amount(request.monthly_expenses),
        group_digits(&request.customer_count.to_string()),
    )
}

/// Chat system prompt, extended with the user's diagnosis context when one
/// was supplied.
pub fn build_chat_system_prompt(context: Option<&ChatContext>) -> String {
    let Some(context) = context else {
        return CHAT_SYSTEM_PROMPT.to_string();
    };
    let field = |value: &Option<String>| -> String {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => UNKNOWN_FIELD.to_string(),
        }
    };
    format!(
        "{CHAT_SYSTEM_PROMPT}\n\n현재 사용자의 진단 정보:\n- 업종: {}\n- 영업 기간: {}\n- 최근 매출 변화: {}\n- 고객 수 변화: {}\n- 배달 매출 비중: {}\n\n이 정보를 바탕으로 맞춤형 조언을 제공하세요.",
        field(&context.industry),
        field(&context.business_period),
        field(&context.sales_change),
        field(&context.customer_change),
        field(&context.delivery_ratio),
    )
}

/// Groups the integer part of a validated non-negative amount, keeping any
/// fractional digits as-is.
fn format_amount(value: f64) -> String {
    let rendered = value.to_string();
    match rendered.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_digits(int)),
        None => group_digits(&rendered),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
