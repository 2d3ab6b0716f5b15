use eco_core::classifier::{MaterialClassifier, ZeroShotClassifier};
use eco_core::error::{CoreError, CoreResult};
use eco_core::materials::Material;
use eco_core::net::{HttpResponse, HttpTransport};
use eco_core::pipeline::{process_raw, Analyzer};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

type Calls = Rc<RefCell<Vec<(Vec<(String, String)>, Value)>>>;

struct ScriptedTransport {
    replies: RefCell<Vec<CoreResult<HttpResponse>>>,
    calls: Calls,
}

impl ScriptedTransport {
    fn new(replies: Vec<CoreResult<HttpResponse>>) -> (Self, Calls) {
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let t = Self {
            replies: RefCell::new(replies.into_iter().rev().collect()),
            calls: calls.clone(),
        };
        (t, calls)
    }
}

impl HttpTransport for ScriptedTransport {
    fn post_json(
        &self,
        _url: &str,
        headers: &[(String, String)],
        body: &Value,
    ) -> CoreResult<HttpResponse> {
        self.calls
            .borrow_mut()
            .push((headers.to_vec(), body.clone()));
        self.replies
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(CoreError::Transport("no scripted reply".to_string())))
    }
}

fn ok(body: Value) -> CoreResult<HttpResponse> {
    Ok(HttpResponse {
        status: 200,
        text: body.to_string(),
    })
}

fn classifier(replies: Vec<CoreResult<HttpResponse>>) -> (ZeroShotClassifier, Calls) {
    let (t, calls) = ScriptedTransport::new(replies);
    let c = ZeroShotClassifier::new(
        Box::new(t),
        "http://127.0.0.1:9/classify",
        Some("hf_token".to_string()),
    );
    (c, calls)
}

#[test]
fn materials_keep_labels_above_threshold() {
    let (c, calls) = classifier(vec![ok(json!({
        "labels": ["Glass", "Metal", "Paper", "Unobtainium"],
        "scores": [0.92, 0.31, 0.3, 0.99]
    }))]);
    let found = c.detect_materials("Jam jar", "glass with metal lid");
    assert_eq!(found, vec![Material::Glass, Material::Metal]);

    let calls = calls.borrow();
    let (headers, body) = &calls[0];
    assert!(headers.contains(&("Authorization".to_string(), "Bearer hf_token".to_string())));
    assert_eq!(body["inputs"], json!("jam jar. glass with metal lid"));
    assert_eq!(body["parameters"]["multi_label"], json!(true));
    assert_eq!(body["parameters"]["candidate_labels"].as_array().unwrap().len(), 18);
}

#[test]
fn ethics_takes_top_label() {
    let (c, calls) = classifier(vec![ok(json!([
        {"label": "Unethical", "score": 0.7},
        {"label": "Moderately ethical", "score": 0.2},
        {"label": "Highly ethical", "score": 0.1}
    ]))]);
    let r = c.ethical_sourcing(&[Material::Leather, Material::Cotton]);
    assert_eq!(r.ethical_rating, "Unethical");
    assert_eq!(r.ethical_score, 0.2);

    let calls = calls.borrow();
    assert_eq!(
        calls[0].1["inputs"],
        json!("The following materials are used: Leather, Cotton")
    );
    assert_eq!(calls[0].1["parameters"]["multi_label"], json!(false));
}

#[test]
fn unreachable_service_falls_back_to_heuristics() {
    let (c, _) = classifier(vec![
        Err(CoreError::Transport("connection refused".to_string())),
        Ok(HttpResponse {
            status: 503,
            text: "loading".to_string(),
        }),
    ]);
    assert_eq!(
        c.detect_materials("Bamboo Toothbrush", "made of bamboo"),
        vec![Material::Bamboo]
    );
    let r = c.ethical_sourcing(&[Material::Bamboo]);
    assert_eq!(r.ethical_rating, "Highly ethical");
    assert_eq!(r.ethical_score, 0.85);
}

#[test]
fn garbage_body_falls_back_to_heuristics() {
    let (c, _) = classifier(vec![Ok(HttpResponse {
        status: 200,
        text: "<html>".to_string(),
    })]);
    assert_eq!(c.detect_materials("Leather belt", ""), vec![Material::Leather]);
}

#[test]
fn pipeline_with_failing_service_still_succeeds() {
    let (c, _) = classifier(vec![]);
    let analyzer = Analyzer::new(Box::new(c));
    let v = process_raw(r#"{"item_name": "Aluminum can"}"#, &analyzer).to_value();
    assert_eq!(v["success"], json!(true));
    assert_eq!(v["data"]["materials"], json!(["Aluminum"]));
    assert_eq!(v["data"]["recyclability"]["recyclable_percent"], json!(95.0));
}
