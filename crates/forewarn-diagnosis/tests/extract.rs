use forewarn_core::Priority;
use forewarn_diagnosis::{diagnose_narrative, fallback_diagnosis, parse_assessment, ExtractError};

const FENCED_NARRATIVE: &str = r#"사장님의 사업 현황을 진단한 결과입니다.

```json
{
  "overallScore": 72,
  "riskLevel": "YELLOW",
  "components": {
    "sales": { "score": 68, "trend": "매출이 꾸준히 유지되고 있습니다." },
    "customer": { "score": 75, "trend": "고객 수가 증가하는 추세입니다." },
    "market": { "score": 70, "trend": "시장 경쟁이 심화되고 있습니다." }
  },
  "recommendations": [
    { "title": "비용 절감", "description": "고정비 항목을 점검해보세요.", "priority": "HIGH" }
  ],
  "insights": ["수익성이 업계 평균을 상회합니다."]
}
```

추가 문의는 상담 기능을 이용해주세요."#;

#[test]
fn extracts_from_fenced_block() {
    let assessment = parse_assessment(FENCED_NARRATIVE).expect("fenced narrative parses");
    assert_eq!(assessment.overall_score, 72.0);
    assert_eq!(assessment.reported_level, "YELLOW");
    assert_eq!(assessment.components.sales.score, 68.0);
    assert_eq!(assessment.components.customer.trend, "고객 수가 증가하는 추세입니다.");
    assert_eq!(assessment.recommendations.len(), 1);
    assert_eq!(assessment.recommendations[0].priority, Priority::High);
    assert_eq!(assessment.insights.len(), 1);
}

#[test]
fn extracts_bare_json() {
    let narrative = r#"{"overallScore": 55, "riskLevel": "ORANGE", "components": {
        "sales": {"score": 50, "trend": "a"},
        "customer": {"score": 55, "trend": "b"},
        "market": {"score": 60, "trend": "c"}}}"#;
    let assessment = parse_assessment(narrative).expect("bare object parses");
    assert_eq!(assessment.overall_score, 55.0);
    assert_eq!(assessment.reported_level, "ORANGE");
    assert!(assessment.recommendations.is_empty());
    assert!(assessment.insights.is_empty());
}

#[test]
fn extracts_json_wrapped_in_prose() {
    let narrative = format!(
        "분석 결과는 다음과 같습니다. {} 이상입니다.",
        r#"{"overallScore": 41, "riskLevel": "ORANGE", "components": {
            "sales": {"score": 40, "trend": ""},
            "customer": {"score": 41, "trend": ""},
            "market": {"score": 42, "trend": ""}}}"#
    );
    let assessment = parse_assessment(&narrative).expect("embedded object parses");
    assert_eq!(assessment.overall_score, 41.0);
    assert_eq!(assessment.components.market.score, 42.0);
}

#[test]
fn missing_trend_defaults_to_empty() {
    let narrative = r#"{"overallScore": 60, "riskLevel": "YELLOW", "components": {
        "sales": {"score": 58},
        "customer": {"score": 61, "trend": "유지"},
        "market": {"score": 62}}}"#;
    let assessment = parse_assessment(narrative).expect("parses");
    assert_eq!(assessment.components.sales.trend, "");
    assert_eq!(assessment.components.customer.trend, "유지");
}

#[test]
fn malformed_recommendations_are_dropped() {
    let narrative = r#"{"overallScore": 60, "riskLevel": "YELLOW", "components": {
        "sales": {"score": 60, "trend": ""},
        "customer": {"score": 60, "trend": ""},
        "market": {"score": 60, "trend": ""}},
        "recommendations": [
            {"title": "첫 번째", "description": "설명", "priority": "urgent"},
            {"title": "제목만 있음"},
            {"description": "설명만 있음", "priority": "LOW"},
            {"title": "  ", "description": "빈 제목", "priority": "LOW"},
            "문자열은 권고가 아닙니다",
            42
        ]}"#;
    let assessment = parse_assessment(narrative).expect("parses");
    assert_eq!(assessment.recommendations.len(), 1);
    assert_eq!(assessment.recommendations[0].title, "첫 번째");
    assert_eq!(assessment.recommendations[0].priority, Priority::Medium);
}

#[test]
fn non_string_insights_are_dropped() {
    let narrative = r#"{"overallScore": 60, "riskLevel": "YELLOW", "components": {
        "sales": {"score": 60, "trend": ""},
        "customer": {"score": 60, "trend": ""},
        "market": {"score": 60, "trend": ""}},
        "insights": ["첫 번째 인사이트", 42, {"text": "객체"}, "두 번째 인사이트"]}"#;
    let assessment = parse_assessment(narrative).expect("parses");
    assert_eq!(assessment.insights, ["첫 번째 인사이트", "두 번째 인사이트"]);
}

#[test]
fn no_json_reports_and_falls_back() {
    assert!(matches!(parse_assessment("분석할 수 없습니다."), Err(ExtractError::NoJson)));
    assert_eq!(diagnose_narrative("분석할 수 없습니다."), fallback_diagnosis());
}

#[test]
fn broken_json_reports_and_falls_back() {
    let narrative = "```json\n{\"overallScore\": 70,\n```";
    assert!(matches!(parse_assessment(narrative), Err(ExtractError::Parse(_))));
    assert_eq!(diagnose_narrative(narrative), fallback_diagnosis());
}

#[test]
fn missing_required_fields_fall_back() {
    let no_overall = r#"{"riskLevel": "RED", "components": {
        "sales": {"score": 1, "trend": ""},
        "customer": {"score": 1, "trend": ""},
        "market": {"score": 1, "trend": ""}}}"#;
    assert!(matches!(
        parse_assessment(no_overall),
        Err(ExtractError::MissingField("overallScore"))
    ));

    let no_level = r#"{"overallScore": 50, "components": {
        "sales": {"score": 1, "trend": ""},
        "customer": {"score": 1, "trend": ""},
        "market": {"score": 1, "trend": ""}}}"#;
    assert!(matches!(
        parse_assessment(no_level),
        Err(ExtractError::MissingField("riskLevel"))
    ));

    let no_market_score = r#"{"overallScore": 50, "riskLevel": "ORANGE", "components": {
        "sales": {"score": 1, "trend": ""},
        "customer": {"score": 1, "trend": ""},
        "market": {"trend": "하락"}}}"#;
    assert_eq!(diagnose_narrative(no_market_score), fallback_diagnosis());
}

#[test]
fn pipeline_is_total_over_hostile_input() {
    let inputs = [
        "",
        "   ",
        "{",
        "}",
        "{}",
        "{{{",
        "```json",
        "```json\n```",
        "{not json}",
        "null",
        "[1, 2, 3]",
        "{\"overallScore\": \"높음\"}",
        "평범한 한국어 문장입니다.",
    ];
    for input in inputs {
        assert_eq!(diagnose_narrative(input), fallback_diagnosis(), "input {input:?}");
    }
}

#[test]
fn fallback_serializes_byte_identically() {
    let first = serde_json::to_vec(&diagnose_narrative("")).unwrap();
    let second = serde_json::to_vec(&diagnose_narrative("no json here")).unwrap();
    let direct = serde_json::to_vec(&fallback_diagnosis()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, direct);
}
