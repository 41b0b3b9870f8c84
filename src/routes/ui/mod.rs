use axum::Router;
use axum::response::Html;
use axum::routing::get;

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>VacancyHub</title>
    <style>
        body { font-family: system-ui; background: #1a1a2e; color: #e0e0e0; margin: 2rem; }
        h1 { color: #6366f1; }
        a { color: #818cf8; }
        .card { background: #16213e; padding: 1.5rem; border-radius: 0.5rem; margin: 1rem 0; }
    </style>
</head>
<body>
    <h1>VacancyHub</h1>
    <div class="card">
        <p>API is running. Fetch vacancies with <code>POST /api/v1/fetch</code>.</p>
        <p>Browse the collection: <a href="/api/v1/vacancies">/api/v1/vacancies</a></p>
        <p>Health: <a href="/healthz">/healthz</a></p>
    </div>
</body>
</html>"#,
    )
}
