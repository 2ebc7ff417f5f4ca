use super::handlers::*;
use crate::coaching::Explainer;
use crate::settings::Settings;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(settings: Settings, explainer: Explainer) -> Result<(), std::io::Error> {
        let explainer = web::Data::new(explainer);
        log::info!("starting quiz server on {}", settings.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(explainer.clone())
                .configure(routes)
        })
        .workers(settings.workers)
        .bind(settings.bind.as_str())?
        .run()
        .await
    }
}

/// Route table, shared by the server and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .service(
                    web::resource("/evaluate-action")
                        .route(web::post().to(evaluate_action))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/generate-explanation")
                        .route(web::post().to(generate_explanation))
                        .default_service(web::to(method_not_allowed)),
                )
                .route("/deal", web::get().to(deal)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coaching::coach::doubles::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;
    use serde_json::json;

    fn hand(a: (&str, &str), b: (&str, &str)) -> Value {
        json!([{"rank": a.0, "suit": a.1}, {"rank": b.0, "suit": b.1}])
    }

    fn style(category: &str, label: &str) -> Value {
        json!({"category": category, "type": label, "characteristics": "test"})
    }

    async fn post(explainer: Explainer, uri: &str, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(explainer))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }

    #[actix_web::test]
    async fn pocket_aces_raise_is_correct() {
        let body = json!({
            "hand": hand(("A", "spades"), ("A", "hearts")),
            "action": "Raise 3BB",
            "position": "SB",
            "bbStyle": style("Balanced", "regular"),
        });
        let (status, body) = post(explainer(Fixed("Raise for value.")), "/api/evaluate-action", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isCorrect"], json!(true));
        assert_eq!(body["bestAction"], json!("raise"));
        assert_eq!(body["explanation"], json!("Raise for value."));
        assert!((body["ev"].as_f64().unwrap() - 3.3).abs() < 1e-4);
        assert_eq!(body["evs"]["fold"].as_f64().unwrap(), 0.);
        assert!(body.get("warning").is_none());
    }

    #[actix_web::test]
    async fn weak_offsuit_call_against_tight_is_wrong() {
        let body = json!({
            "hand": hand(("7", "diamonds"), ("2", "clubs")),
            "action": "Call",
            "position": "SB",
            "bbStyle": style("Tight", "Turtle"),
        });
        let (status, body) = post(explainer(Fixed("Too loose.")), "/api/evaluate-action", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isCorrect"], json!(false));
        assert_eq!(body["bestAction"], json!("raise"));
        assert!(body["gap"].as_f64().unwrap() > 0.);
    }

    #[actix_web::test]
    async fn duplicate_cards_are_rejected() {
        let body = json!({
            "hand": hand(("A", "hearts"), ("A", "hearts")),
            "action": "Call",
            "position": "SB",
            "bbStyle": style("Tight", "Turtle"),
        });
        let (status, body) = post(explainer(Fixed("unused")), "/api/evaluate-action", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("invalid hand"));
    }

    #[actix_web::test]
    async fn coach_failure_still_answers() {
        let body = json!({
            "hand": hand(("K", "diamonds"), ("Q", "diamonds")),
            "action": "Fold",
            "position": "BTN",
            "bbStyle": style("Loose", "Caller"),
        });
        let (status, body) = post(explainer(Failing), "/api/evaluate-action", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isCorrect"], json!(false));
        let text = body["explanation"].as_str().unwrap();
        assert!(text.starts_with("Fold from BTN is not optimal"));
    }

    #[actix_web::test]
    async fn unknown_action_is_scored_zero_with_warning() {
        let body = json!({
            "hand": hand(("A", "spades"), ("A", "hearts")),
            "action": "Limp",
            "position": "SB",
        });
        let (status, body) = post(Explainer::offline(), "/api/evaluate-action", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isCorrect"], json!(false));
        assert_eq!(body["ev"].as_f64().unwrap(), 0.);
        assert!(body["warning"].is_string());
    }

    #[actix_web::test]
    async fn missing_fields_are_rejected() {
        let body = json!({ "action": "Call" });
        let (status, body) = post(Explainer::offline(), "/api/evaluate-action", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn blank_fields_are_rejected_before_coaching() {
        let body = json!({
            "hand": hand(("A", "spades"), ("A", "hearts")),
            "action": "",
            "position": "",
            "bbStyle": style("Tight", "Turtle"),
        });
        let (status, body) = post(explainer(Fixed("unused")), "/api/evaluate-action", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("action"));
        assert!(body.get("explanation").is_none());
        let body = json!({
            "hand": hand(("A", "spades"), ("A", "hearts")),
            "action": "Raise 3BB",
            "position": "   ",
        });
        let (status, body) = post(explainer(Fixed("unused")), "/api/evaluate-action", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("position"));
    }

    #[actix_web::test]
    async fn only_post_evaluates() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Explainer::offline()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/evaluate-action").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(res).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn explanation_endpoint_never_fails() {
        let (status, body) = post(explainer(Failing), "/api/generate-explanation", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["explanation"].is_string());
        let body = json!({
            "hand": hand(("A", "spades"), ("K", "spades")),
            "action": "Raise 3BB",
            "isCorrect": true,
            "position": "CO",
            "bbStyle": style("Aggressive", "Viking"),
        });
        let (status, body) = post(explainer(Fixed("Great raise.")), "/api/generate-explanation", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["explanation"], json!("Great raise."));
    }

    #[actix_web::test]
    async fn deals_a_scenario() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Explainer::offline()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/deal").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["hand"].as_array().unwrap().len(), 2);
        assert_eq!(body["options"].as_array().unwrap().len(), 3);
        assert!(body["bbStyle"]["type"].is_string());
    }

    #[actix_web::test]
    async fn health_reports_coach() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Explainer::offline()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], json!("ok"));
        assert_eq!(body["coach"], json!(false));
    }
}
