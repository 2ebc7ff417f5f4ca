use super::request::EvaluateRequest;
use super::request::ExplainRequest;
use super::response::*;
use crate::Error;
use crate::coaching::Context;
use crate::coaching::Explainer;
use crate::decision::Choice;
use crate::decision::Table;
use crate::decision::Verdict;
use crate::evaluation::Strength;
use crate::quiz::Round;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// Maps a domain error to its status: caller mistakes are 400, the rest 500.
fn failure(e: &Error) -> HttpResponse {
    match e.is_client() {
        true => HttpResponse::BadRequest().json(ErrorResponse::from(e)),
        false => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::from(e))
        }
    }
}

pub async fn evaluate_action(
    explainer: web::Data<Explainer>,
    req: web::Json<EvaluateRequest>,
) -> impl Responder {
    let req = req.into_inner();
    if let Err(e) = req.validate() {
        log::info!("rejected evaluation: {}", e);
        return failure(&e);
    }
    let hole = match req.hole() {
        Ok(hole) => hole,
        Err(e) => {
            log::info!("rejected evaluation: {}", e);
            return failure(&e);
        }
    };
    let opponent = req.opponent();
    let table = Table::new(Strength::from(hole), &opponent);
    let verdict = Verdict::judge(&table, Choice::from(req.action.as_str()));
    log::debug!("{} {} vs {}: {}", hole, req.position, opponent, verdict);
    let context = Context::judged(hole, &req.action, &req.position, opponent, table, &verdict);
    let explanation = explainer.explain(&context).await;
    HttpResponse::Ok().json(EvaluateResponse::new(&table, &verdict, explanation.text))
}

/// Always 200: anything unusable in the body degrades to the fallback.
pub async fn generate_explanation(explainer: web::Data<Explainer>, body: web::Bytes) -> impl Responder {
    let req = serde_json::from_slice::<ExplainRequest>(&body)
        .inspect_err(|e| log::info!("unreadable explanation request: {}", e))
        .unwrap_or_default();
    let explanation = match req.hole() {
        Ok(hole) => {
            let context = Context::claimed(
                hole,
                req.action(),
                req.position(),
                req.opponent(),
                req.is_correct(),
            );
            explainer.explain(&context).await.text
        }
        Err(e) => {
            log::info!("explanation without a hand: {}", e);
            crate::coaching::fallback(req.position(), req.action(), req.is_correct(), None)
        }
    };
    HttpResponse::Ok().json(ExplainResponse { explanation })
}

pub async fn deal() -> impl Responder {
    match Round::deal(&mut rand::rng()) {
        Ok(round) => HttpResponse::Ok().json(DealResponse::from(&round)),
        Err(e) => failure(&e),
    }
}

pub async fn health(explainer: web::Data<Explainer>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        coach: explainer.is_online(),
    })
}

pub async fn method_not_allowed(req: HttpRequest) -> impl Responder {
    HttpResponse::MethodNotAllowed().json(ErrorResponse::from(format!(
        "method {} not allowed on {}",
        req.method(),
        req.path()
    )))
}

/// Malformed or incomplete JSON bodies answer 400 with an error object.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|e, _| {
        let body = ErrorResponse::from(e.to_string());
        actix_web::error::InternalError::from_response(e, HttpResponse::BadRequest().json(body))
            .into()
    })
}
