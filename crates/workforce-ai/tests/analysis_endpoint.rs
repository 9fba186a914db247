use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use workforce_ai::workflows::productivity::productivity_router;

const ROSTER_CSV: &str = "\
EmpID,Name,Role,SalaryINR,DateOfJoining
201,Devika Nair,Analyst,500000,02/05/2022
";

const ACTIVITIES_CSV: &str = "\
EmpID,Activity,TimeFreq,Importance,Points
201,Reporting,4,5,1.0
201,Forecasting,4,5,1.0
201,Dashboards,4,5,1.0
201,Reviews,4,5,1.0
201,Planning,4,5,1.0
201,Mentoring,4,5,1.0
201,Audits,4,5,1.0
";

const SKILLS_CSV: &str = "\
Keyword,Program,SkillArea,CostExternalPerPersonINR,CostInhousePerSessionINR,ExpectedLift
audits,Audit Bootcamp,Quality,4000,12000,0.2
";

fn analyze_request(payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/productivity/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn analyze_endpoint_returns_every_result_table() {
    let payload = serde_json::json!({
        "roster_csv": ROSTER_CSV,
        "activities_csv": ACTIVITIES_CSV,
        "skills_csv": SKILLS_CSV,
        "today": "2026-03-01",
    });

    let response = productivity_router()
        .oneshot(analyze_request(&payload))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["activities_with_metrics"].as_array().unwrap().len(), 7);
    assert_eq!(
        body["activities_with_metrics"][0]["EmpID"],
        serde_json::json!(201)
    );
    assert_eq!(body["activities_with_metrics"][0]["WPI"], 1.0);
    assert_eq!(body["hiring"]["HireNeeded"], false);
    assert_eq!(body["risks"][0]["Remark"], "No issues");
    assert_eq!(
        body["appraisal"][0]["AppraisalSuggestion"],
        "Normal Increment (~5%)"
    );
    // One catalog-matched deficit (Audits at 1.0 points).
    assert_eq!(body["training"].as_array().unwrap().len(), 1);
    assert!(body["rebalance"]
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["Suggestion"] == "No change"));
}

#[tokio::test]
async fn analyze_endpoint_rejects_invalid_tables_with_detail() {
    let payload = serde_json::json!({
        "roster_csv": ROSTER_CSV,
        "activities_csv": ACTIVITIES_CSV.replace("201,Audits", "999,Audits"),
        "skills_csv": SKILLS_CSV,
        "today": "2026-03-01",
    });

    let response = productivity_router()
        .oneshot(analyze_request(&payload))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    let message = body["error"].as_str().expect("error message present");
    assert!(message.contains("999"), "offender is named: {message}");
}

#[tokio::test]
async fn analyze_endpoint_rejects_partial_settings_overrides() {
    let payload = serde_json::json!({
        "roster_csv": ROSTER_CSV,
        "activities_csv": ACTIVITIES_CSV,
        "skills_csv": SKILLS_CSV,
        "today": "2026-03-01",
        "settings": { "WorkloadMaxTI": 175.0 },
    });

    let response = productivity_router()
        .oneshot(analyze_request(&payload))
        .await
        .expect("router responds");
    // A settings object missing keys fails fast at deserialization.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analyze_endpoint_honors_full_settings_overrides() {
    let mut settings =
        serde_json::to_value(workforce_ai::workflows::productivity::AnalysisSettings::default())
            .expect("settings serialize");
    // Drop the overload cap below this team's 140 TI so a hire triggers.
    settings["WorkloadMaxTI"] = serde_json::json!(120.0);

    let payload = serde_json::json!({
        "roster_csv": ROSTER_CSV,
        "activities_csv": ACTIVITIES_CSV,
        "skills_csv": SKILLS_CSV,
        "today": "2026-03-01",
        "settings": settings,
    });

    let response = productivity_router()
        .oneshot(analyze_request(&payload))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["hiring"]["HireNeeded"], true);
}
