use actix_web::HttpResponse;
use actix_web::http::header::{CacheControl, CacheDirective, ContentType};

/// Serve the built-in task board page.
pub async fn index_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header(CacheControl(vec![CacheDirective::NoCache]))
        .body(include_str!("../../static/index.html"))
}
