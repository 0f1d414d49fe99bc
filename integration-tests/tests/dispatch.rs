//! End-to-end dispatch behavior of the rendered request handler.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use integration_tests::{message, send};
use verso::{Body, Router};

#[tokio::test]
async fn test_exact_route_invoked_exactly_once() {
    let router = Router::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    router
        .get("/users")
        .handler(move |_req, res| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                res.text("users");
                Ok(())
            }
        })
        .create();

    let handler = router.render();
    let (status, body) = send(&handler, "GET", "/users").await;

    assert_eq!(status, 200);
    assert_eq!(body, Some(Body::Text("users".to_string())));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_ping_pong() {
    let router = Router::new();
    router
        .get_with("/ping", |_req, res| async move {
            res.text("pong");
            Ok(())
        })
        .create();

    let handler = router.render();
    let (status, body) = send(&handler, "GET", "/ping").await;

    // Default status: nothing set it, the sink starts at 200.
    assert_eq!(status, 200);
    assert_eq!(body, Some(Body::Text("pong".to_string())));
}

#[tokio::test]
async fn test_no_match_is_not_found() {
    let router = Router::new();
    router
        .get_with("/ping", |_req, res| async move {
            res.text("pong");
            Ok(())
        })
        .create();

    let handler = router.render();

    let (status, body) = send(&handler, "GET", "/missing").await;
    assert_eq!(status, 404);
    assert_eq!(message(body), "Route not found");

    // Right path, wrong method.
    let (status, body) = send(&handler, "POST", "/ping").await;
    assert_eq!(status, 404);
    assert_eq!(message(body), "Route not found");
}

#[tokio::test]
async fn test_first_registered_route_wins() {
    let router = Router::new();
    router
        .get_with("/a/b", |_req, res| async move {
            res.text("specific");
            Ok(())
        })
        .create();
    // The wildcard overlaps `/a/b` at request time but its own path is not
    // matched by the committed route, so this is not a duplicate.
    router
        .get_with("/a/*", |_req, res| async move {
            res.text("wildcard");
            Ok(())
        })
        .create();

    let handler = router.render();

    let (_, body) = send(&handler, "GET", "/a/b").await;
    assert_eq!(body, Some(Body::Text("specific".to_string())));

    let (_, body) = send(&handler, "GET", "/a/zzz").await;
    assert_eq!(body, Some(Body::Text("wildcard".to_string())));
}

#[tokio::test]
async fn test_param_route_matches_concrete_path() {
    let router = Router::new();
    router
        .get_with("/users/:id", |_req, res| async move {
            res.text("user");
            Ok(())
        })
        .create();

    let handler = router.render();

    let (status, _) = send(&handler, "GET", "/users/42").await;
    assert_eq!(status, 200);

    // The compiled pattern admits trailing segments after the capture.
    let (status, _) = send(&handler, "GET", "/users/42/extra").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_all_method_entry_points() {
    let router = Router::new();
    for (method, path) in [
        ("GET", "/resource/get"),
        ("POST", "/resource/post"),
        ("PUT", "/resource/put"),
        ("PATCH", "/resource/patch"),
        ("DELETE", "/resource/delete"),
    ] {
        let draft = match method {
            "GET" => router.get(path),
            "POST" => router.post(path),
            "PUT" => router.put(path),
            "PATCH" => router.patch(path),
            "DELETE" => router.delete(path),
            _ => unreachable!(),
        };
        let tag = method.to_lowercase();
        draft
            .handler(move |_req, res| {
                let tag = tag.clone();
                async move {
                    res.text(tag);
                    Ok(())
                }
            })
            .create();
    }

    let handler = router.render();
    for (method, path) in [
        ("GET", "/resource/get"),
        ("POST", "/resource/post"),
        ("PUT", "/resource/put"),
        ("PATCH", "/resource/patch"),
        ("DELETE", "/resource/delete"),
    ] {
        let (status, body) = send(&handler, method, path).await;
        assert_eq!(status, 200);
        assert_eq!(body, Some(Body::Text(method.to_lowercase())));
    }
}

#[tokio::test]
async fn test_typed_json_response() {
    #[derive(serde::Serialize)]
    struct Greeting {
        message: String,
    }

    let router = Router::new();
    router
        .get_with("/hello", |_req, res| async move {
            res.json(&Greeting {
                message: "hi".to_string(),
            });
            Ok(())
        })
        .create();

    let handler = router.render();
    let (status, body) = send(&handler, "GET", "/hello").await;

    assert_eq!(status, 200);
    assert_eq!(message(body), "hi");
}

#[tokio::test]
async fn test_query_string_does_not_affect_matching() {
    let router = Router::new();
    router
        .get_with("/search", |req, res| async move {
            let term = req
                .query_params
                .get("q")
                .cloned()
                .unwrap_or_default();
            res.text(term);
            Ok(())
        })
        .create();

    let handler = router.render();
    let (status, body) = send(&handler, "GET", "/search?q=routers").await;

    assert_eq!(status, 200);
    assert_eq!(body, Some(Body::Text("routers".to_string())));
}
