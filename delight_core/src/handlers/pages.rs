//! Served pages: the order form and the login screen.

use axum::response::Html;

pub async fn order_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../../assets/login.html"))
}
