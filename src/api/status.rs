use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::api::response::serialize;
use crate::state::AppState;

/// 所有路径、所有 method 都走这里，响应始终是 200 + JSON
pub async fn service_status(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let document = data.handle(req.method().as_str(), req.path()).await;

    HttpResponse::Ok()
        .content_type("application/json")
        .body(serialize(&document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::services::router::tests::{fake_router, fake_stats};
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn app_state(config: &AgentConfig, outputs: &[(&str, &str)], connections: u64, body: &str) -> AppState {
        Arc::new(fake_router(config, outputs, connections, fake_stats(body)))
    }

    #[actix_rt::test]
    async fn test_known_route_over_http() {
        let state = app_state(&AgentConfig::default(), &[("nginx", "active")], 12, "");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .default_service(web::to(service_status)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/nginx").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.ends_with("}\n"));
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(value, json!({"nginx_status": "running", "nginx_connections": 12}));
    }

    #[actix_rt::test]
    async fn test_unknown_route_is_still_ok() {
        let state = app_state(&AgentConfig::default(), &[], 0, "");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .default_service(web::to(service_status)),
        )
        .await;

        let req = test::TestRequest::delete().uri("/unknown?x=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let value: Value = test::read_body_json(resp).await;
        assert_eq!(value, json!({"error": "Endpoint not found"}));
    }

    #[actix_rt::test]
    async fn test_any_method_and_query_string() {
        let mut config = AgentConfig::default();
        config.jicofo_stats_url = Some("http://localhost:8888/stats".to_string());
        let state = app_state(&config, &[("jicofo", "active")], 0, r#"{"conferences": 3}"#);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .default_service(web::to(service_status)),
        )
        .await;

        let req = test::TestRequest::post().uri("/index.php/jicofo?verbose=1").to_request();
        let value: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            value,
            json!({"jicofo_status": "running", "jicofo_API_stats": {"conferences": 3}})
        );
    }
}
