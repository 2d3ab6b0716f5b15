use crate::error::CoreResult;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ProbeReport {
    Ok { body: Value },
    Failed { status: u16, text: String },
}

impl ProbeReport {
    /// Only 200 counts as success; a 200 whose body is not JSON is an error.
    pub fn from_response(status: u16, text: &str) -> CoreResult<Self> {
        if status == 200 {
            let body: Value = serde_json::from_str(text)?;
            return Ok(ProbeReport::Ok { body });
        }
        Ok(ProbeReport::Failed {
            status,
            text: text.to_string(),
        })
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeReport::Ok { .. })
    }

    pub fn render(&self) -> Vec<String> {
        match self {
            ProbeReport::Ok { body } => {
                let mut lines = vec![
                    "✅ API key works! Response:".to_string(),
                    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string()),
                ];
                if let Some(summary) = co2e_summary(body) {
                    lines.push(summary);
                }
                lines
            }
            ProbeReport::Failed { status, text } => vec![
                "❌ Something went wrong:".to_string(),
                format!("Status code: {}", status),
                text.clone(),
            ],
        }
    }
}

fn co2e_summary(body: &Value) -> Option<String> {
    let co2e = body.get("co2e")?;
    let unit = body.get("co2e_unit").and_then(|u| u.as_str())?;
    Some(format!("co2e: {} {}", co2e, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_report_renders_body_and_co2e() {
        let r = ProbeReport::from_response(200, r#"{"co2e":0.4,"co2e_unit":"kg"}"#).unwrap();
        assert!(r.is_ok());
        let lines = r.render();
        assert_eq!(lines[0], "✅ API key works! Response:");
        assert_eq!(lines.last().unwrap(), "co2e: 0.4 kg");
    }

    #[test]
    fn ok_without_co2e_has_two_lines() {
        let r = ProbeReport::from_response(200, r#"{"estimate":{}}"#).unwrap();
        assert_eq!(r.render().len(), 2);
    }

    #[test]
    fn non_200_keeps_raw_text() {
        let r = ProbeReport::from_response(401, "{\"error\":\"invalid_api_key\"}").unwrap();
        assert_eq!(
            r.render(),
            vec![
                "❌ Something went wrong:".to_string(),
                "Status code: 401".to_string(),
                "{\"error\":\"invalid_api_key\"}".to_string(),
            ]
        );
    }

    #[test]
    fn created_is_not_success() {
        let r = ProbeReport::from_response(201, "{}").unwrap();
        assert!(!r.is_ok());
    }

    #[test]
    fn unparseable_200_is_an_error() {
        assert!(ProbeReport::from_response(200, "<html>").is_err());
    }
}
