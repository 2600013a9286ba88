use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// User id recorded for unauthenticated diagnoses. Records under this id are
/// written but never listed back out.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Raw diagnosis request body, exactly as submitted. Every field is optional
/// at the wire level so that validation can report all problems at once
/// instead of failing on the first missing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisInput {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub years_in_business: Option<f64>,
    #[serde(default)]
    pub monthly_revenue: Option<f64>,
    #[serde(default)]
    pub monthly_expenses: Option<f64>,
    #[serde(default)]
    pub customer_count: Option<f64>,
}

/// A diagnosis request that passed validation. Construction goes through
/// [`DiagnosisInput::validate`]; the numeric fields are guaranteed finite
/// and non-negative, and `industry` is non-blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiagnosisRequest {
    pub user_id: String,
    pub industry: String,
    pub years_in_business: f64,
    pub monthly_revenue: f64,
    pub monthly_expenses: f64,
    pub customer_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    /// Wire-level field name, e.g. `monthlyRevenue`.
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[error("invalid diagnosis request: {}", .errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>().join(", "))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl DiagnosisInput {
    /// Validates the raw input and binds it to a user id. All field errors
    /// are collected in a single pass.
    pub fn validate(self, user_id: impl Into<String>) -> Result<DiagnosisRequest, ValidationError> {
        let mut errors = Vec::new();

        let industry = match self.industry.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(s.to_owned()),
            Some(_) => {
                errors.push(FieldError {
                    field: "industry".into(),
                    message: "industry must not be blank".into(),
                });
                None
            }
            None => {
                errors.push(FieldError {
                    field: "industry".into(),
                    message: "industry is required".into(),
                });
                None
            }
        };

        let years_in_business = check_amount(&mut errors, "yearsInBusiness", self.years_in_business);
        let monthly_revenue = check_amount(&mut errors, "monthlyRevenue", self.monthly_revenue);
        let monthly_expenses = check_amount(&mut errors, "monthlyExpenses", self.monthly_expenses);
        let customer_count = check_count(&mut errors, "customerCount", self.customer_count);

        if !errors.is_empty() {
            return Err(ValidationError { errors });
        }

        Ok(DiagnosisRequest {
            user_id: user_id.into(),
            industry: industry.unwrap_or_default(),
            years_in_business: years_in_business.unwrap_or_default(),
            monthly_revenue: monthly_revenue.unwrap_or_default(),
            monthly_expenses: monthly_expenses.unwrap_or_default(),
            customer_count: customer_count.unwrap_or_default(),
        })
    }
}

/// Required, finite, non-negative.
fn check_amount(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Some(v),
        Some(_) => {
            errors.push(FieldError {
                field: field.into(),
                message: format!("{field} must be a non-negative number"),
            });
            None
        }
        None => {
            errors.push(FieldError {
                field: field.into(),
                message: format!("{field} is required"),
            });
            None
        }
    }
}

/// Required, a whole number representable as `u32`.
fn check_count(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) -> Option<u32> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => {
            Some(v as u32)
        }
        Some(_) => {
            errors.push(FieldError {
                field: field.into(),
                message: format!("{field} must be a non-negative whole number"),
            });
            None
        }
        None => {
            errors.push(FieldError {
                field: field.into(),
                message: format!("{field} is required"),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> DiagnosisInput {
        DiagnosisInput {
            industry: Some("카페".into()),
            years_in_business: Some(2.0),
            monthly_revenue: Some(45_000_000.0),
            monthly_expenses: Some(38_000_000.0),
            customer_count: Some(500.0),
        }
    }

    #[test]
    fn valid_input_passes() {
        let req = complete_input().validate("user-1").expect("valid");
        assert_eq!(req.user_id, "user-1");
        assert_eq!(req.industry, "카페");
        assert_eq!(req.customer_count, 500);
    }

    #[test]
    fn empty_input_reports_every_field() {
        let err = DiagnosisInput::default().validate("u").unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "industry",
                "yearsInBusiness",
                "monthlyRevenue",
                "monthlyExpenses",
                "customerCount"
            ]
        );
    }

    #[test]
    fn blank_industry_and_negative_revenue_reported_together() {
        let mut input = complete_input();
        input.industry = Some("   ".into());
        input.monthly_revenue = Some(-1.0);
        let err = input.validate("u").unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["industry", "monthlyRevenue"]);
    }

    #[test]
    fn fractional_customer_count_rejected() {
        let mut input = complete_input();
        input.customer_count = Some(10.5);
        let err = input.validate("u").unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "customerCount");
    }

    #[test]
    fn zero_values_are_allowed() {
        let mut input = complete_input();
        input.years_in_business = Some(0.0);
        input.monthly_revenue = Some(0.0);
        input.monthly_expenses = Some(0.0);
        input.customer_count = Some(0.0);
        assert!(input.validate("u").is_ok());
    }

    #[test]
    fn industry_is_trimmed() {
        let mut input = complete_input();
        input.industry = Some("  cafe  ".into());
        let req = input.validate("u").expect("valid");
        assert_eq!(req.industry, "cafe");
    }

    #[test]
    fn camel_case_wire_names_deserialize() {
        let input: DiagnosisInput = serde_json::from_str(
            r#"{"industry":"cafe","yearsInBusiness":2,"monthlyRevenue":1,"monthlyExpenses":1,"customerCount":3}"#,
        )
        .unwrap();
        assert_eq!(input.customer_count, Some(3.0));
    }

    #[test]
    fn unknown_wire_keys_are_ignored() {
        let input: DiagnosisInput = serde_json::from_str(
            r#"{"industry":"cafe","yearsInBusiness":2,"monthlyRevenue":1,"monthlyExpenses":1,"customerCount":3,"riskLevel":"GREEN"}"#,
        )
        .unwrap();
        let req = input.validate("u").expect("valid");
        assert_eq!(serde_json::to_value(&req).unwrap().get("riskLevel"), None);
    }
}
