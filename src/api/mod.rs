pub mod response;
pub mod status;

pub use status::service_status;

use actix_web::middleware::DefaultHeaders;

/// 与 Jilo Web 前端跨域访问所需的响应头
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
}
