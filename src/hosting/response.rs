use super::request::CardBody;
use super::request::StyleBody;
use crate::Error;
use crate::Utility;
use crate::decision::Action;
use crate::decision::Table;
use crate::decision::Verdict;
use crate::quiz::Round;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EvsResponse {
    pub fold: Utility,
    pub call: Utility,
    pub raise: Utility,
}

impl From<&Table> for EvsResponse {
    fn from(table: &Table) -> Self {
        Self {
            fold: table.ev(Action::Fold),
            call: table.ev(Action::Call),
            raise: table.ev(Action::Raise),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub is_correct: bool,
    pub explanation: String,
    pub ev: Utility,
    pub best_action: Action,
    pub gap: Utility,
    pub evs: EvsResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl EvaluateResponse {
    pub fn new(table: &Table, verdict: &Verdict, explanation: String) -> Self {
        Self {
            is_correct: verdict.is_correct(),
            explanation,
            ev: verdict.ev(),
            best_action: verdict.best(),
            gap: verdict.gap(),
            evs: EvsResponse::from(table),
            warning: verdict.warning(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealResponse {
    pub hand: Vec<CardBody>,
    pub position: String,
    pub bb_style: StyleBody,
    pub options: Vec<String>,
}

impl From<&Round> for DealResponse {
    fn from(round: &Round) -> Self {
        Self {
            hand: round.hole().cards().into_iter().map(CardBody::from).collect(),
            position: round.seat().to_string(),
            bb_style: StyleBody::from(round.opponent()),
            options: round.options(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub coach: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&Error> for ErrorResponse {
    fn from(e: &Error) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

impl From<String> for ErrorResponse {
    fn from(error: String) -> Self {
        Self { error }
    }
}
