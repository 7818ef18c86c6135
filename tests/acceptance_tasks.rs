use axum::body::to_bytes;
use axum::Router;
use todo_web::application::task_service::TaskServiceImpl;
use todo_web::domain::store::TaskStore;
use todo_web::http::routing::{self, tasks};
use todo_web::infrastructure::sqlite_store::SqliteTaskStore;

#[tokio::test]
async fn acceptance_add_toggle_delete_lifecycle() {
    let app = test_app().await;

    // empty list on the index page
    let body = body_of(request(&app, "GET", "/", None).await).await;
    assert_eq!(count_items(&body), 0);

    // add: the fresh table assigns id 1
    let body = body_of(request(&app, "POST", "/add", Some("title=Buy+milk")).await).await;
    assert_eq!(count_items(&body), 1);
    assert!(body.contains("Buy milk"));
    assert!(body.contains("[ ]"));

    // toggle to completed
    let body = body_of(request(&app, "POST", "/toggle/1", None).await).await;
    assert!(body.contains("[x]"));

    // toggle back
    let body = body_of(request(&app, "POST", "/toggle/1", None).await).await;
    assert!(body.contains("[ ]"));

    // delete
    let body = body_of(request(&app, "POST", "/delete/1", None).await).await;
    assert_eq!(count_items(&body), 0);

    // deleting again is a no-op, not an error
    let res = request(&app, "POST", "/delete/1", None).await;
    assert_eq!(res.status(), 200);
    let body = body_of(res).await;
    assert_eq!(count_items(&body), 0);
}

#[tokio::test]
async fn acceptance_empty_title_leaves_list_unchanged() {
    let app = test_app().await;
    body_of(request(&app, "POST", "/add", Some("title=Existing")).await).await;

    let body = body_of(request(&app, "POST", "/add", Some("title=")).await).await;
    assert_eq!(count_items(&body), 1);

    // missing field entirely
    let body = body_of(request(&app, "POST", "/add", Some("")).await).await;
    assert_eq!(count_items(&body), 1);
}

#[tokio::test]
async fn acceptance_toggle_of_unknown_id_renders_unchanged_list() {
    let app = test_app().await;
    body_of(request(&app, "POST", "/add", Some("title=Only")).await).await;

    let res = request(&app, "POST", "/toggle/999", None).await;
    assert_eq!(res.status(), 200);
    let body = body_of(res).await;
    assert_eq!(count_items(&body), 1);
    assert!(body.contains("[ ]"));
}

#[tokio::test]
async fn acceptance_titles_are_escaped_in_the_page() {
    let app = test_app().await;
    body_of(request(&app, "POST", "/add", Some("title=%3Cscript%3E")).await).await;

    let body = body_of(request(&app, "GET", "/", None).await).await;
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));
}

#[tokio::test]
async fn acceptance_health_endpoint() {
    let app = test_app().await;
    let res = request(&app, "GET", "/health", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(body_of(res).await, "ok");
}

async fn test_app() -> Router {
    // use in-memory sqlite for tests
    let store = SqliteTaskStore::connect("sqlite::memory:").await.unwrap();
    store.init().await.unwrap();
    let service = TaskServiceImpl::new(store);
    routing::app(tasks::router(tasks::AppState { service }))
}

async fn request(app: &Router, method: &str, path: &str, form: Option<&str>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match form {
        Some(encoded) => req
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(encoded.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

async fn body_of(res: hyper::Response<axum::body::Body>) -> String {
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn count_items(body: &str) -> usize {
    body.matches("<li").count()
}
