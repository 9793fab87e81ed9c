use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::database::activity_store::{ActivityStore, DirectorySnapshot};
use crate::models::{ActivityName, StudentEmail};
use crate::services::{activities_service, signup_service};

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn detail(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Value>) {
    (status, Json(serde_json::json!({ "detail": message.into() })))
}

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<DirectorySnapshot> {
    Json(activities_service::list_activities(&store))
}

/// Signup query string. A repeated `email` parameter resolves to its last value.
#[derive(Debug, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct SignupQuery {
    pub email: Option<StudentEmail>,
}

impl From<Vec<(String, String)>> for SignupQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| StudentEmail::new(value));
        Self { email }
    }
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(store): State<ActivityStore>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query.map_err(|rejection| {
        warn!(activity = %activity_name, reason = %rejection.body_text(), "signup_query_rejected");
        detail(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;
    let Some(email) = query.email else {
        warn!(activity = %activity_name, "signup_query_missing_email");
        return Err(detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing query parameter `email`",
        ));
    };

    let activity = ActivityName::new(activity_name);
    match signup_service::sign_up(&store, &activity, &email) {
        Ok(receipt) => {
            info!(
                activity = %receipt.activity,
                email = %receipt.email,
                participants = receipt.participants_count,
                max_participants = receipt.max_participants,
                "signup_ok"
            );
            if receipt.over_capacity() {
                warn!(activity = %receipt.activity, "activity_over_advisory_capacity");
            }
            Ok(Json(serde_json::json!({ "message": receipt.message() })))
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, code = e.code(), "signup_rejected");
            Err(detail(e.status(), e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn last_email_wins() {
        let query = SignupQuery::from(pairs(&[
            ("email", "a@mergington.edu"),
            ("other", "x"),
            ("email", "b@mergington.edu"),
        ]));
        assert_eq!(query.email, Some(StudentEmail::new("b@mergington.edu")));
    }

    #[test]
    fn missing_email_is_none() {
        let query = SignupQuery::from(pairs(&[("mail", "a@mergington.edu")]));
        assert_eq!(query.email, None);
    }

    #[test]
    fn deserializes_from_query_string() {
        let query = query_from("email=a%40mergington.edu&email=b%40mergington.edu");
        assert_eq!(query.email, Some(StudentEmail::new("b@mergington.edu")));
    }

    fn query_from(raw: &str) -> SignupQuery {
        let uri: axum::http::Uri = format!("/signup?{raw}").parse().unwrap();
        Query::<SignupQuery>::try_from_uri(&uri).unwrap().0
    }
}
