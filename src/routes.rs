use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{
    auth, banks, carts, categories, deliveries, payments, products, settings, system, users,
};
use crate::middleware::require_auth;
use crate::state::AppState;

/// Product images and payment receipts arrive as multipart bodies.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.cors_origins);

    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/login", post(auth::login))
        .route("/v1/logout", post(auth::logout))
        .route("/v1/user/register", post(users::register))
        .route("/v1/user/:id", get(users::show))
        .route("/v1/product/:id", get(products::show))
        .route("/v1/category/:id", get(categories::show))
        .route("/v1/bank/:id", get(banks::show))
        .route("/v1/delivery/:id", get(deliveries::show))
        .route("/v1/payment/:id", get(payments::show))
        .route("/v1/cart/:id", get(carts::show))
        .route("/v1/setting/:id", get(settings::show))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/me", get(auth::me))
        .merge(user_routes())
        .merge(product_routes())
        .merge(category_routes())
        .merge(bank_routes())
        .merge(delivery_routes())
        .merge(cart_routes())
        .merge(payment_routes())
        .route("/v1/setting/update/:id", put(settings::update))
        .route_layer(from_fn_with_state(state, require_auth))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/users", get(users::list))
        .route("/v1/users/role/:role", get(users::by_role))
        .route("/v1/user/update/:id", put(users::update))
        .route("/v1/user/delete/:id", delete(users::delete))
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/products", get(products::list))
        .route("/v1/products/category/:category_id", get(products::by_category))
        .route("/v1/products/:user_id", get(products::by_user))
        .route("/v1/products/:user_id/:category_id", get(products::by_user_and_category))
        .route("/v1/product/create", post(products::create))
        .route("/v1/product/update/:id", put(products::update))
        .route("/v1/product/delete/:id", delete(products::delete))
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/categories", get(categories::list))
        .route("/v1/category/create", post(categories::create))
        .route("/v1/category/update/:id", put(categories::update))
        .route("/v1/category/delete/:id", delete(categories::delete))
}

fn bank_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/banks", get(banks::list))
        .route("/v1/banks/admin", get(banks::admin))
        .route("/v1/banks/:user_id", get(banks::by_user))
        .route("/v1/bank/create", post(banks::create))
        .route("/v1/bank/update/:id", put(banks::update))
        .route("/v1/bank/delete/:id", delete(banks::delete))
}

fn delivery_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/deliveries", get(deliveries::list))
        .route("/v1/delivery/create", post(deliveries::create))
        .route("/v1/delivery/update/:id", put(deliveries::update))
        .route("/v1/delivery/delete/:id", delete(deliveries::delete))
}

fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/carts", get(carts::list))
        .route("/v1/carts/payment/:payment_id", get(carts::by_payment))
        .route("/v1/carts/product/:product_id", get(carts::by_product))
        .route("/v1/carts/total/:is_active/:user_id", get(carts::total))
        .route("/v1/carts/:is_active/:user_id", get(carts::by_status_and_user))
        .route("/v1/cart/create", post(carts::create))
        .route("/v1/cart/update/:id", put(carts::update))
        .route("/v1/cart/delete/:id", delete(carts::delete))
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/payments", get(payments::list))
        .route("/v1/payments/status/:status", get(payments::by_status))
        .route("/v1/payments/:user_id/:status", get(payments::by_user_and_status))
        .route("/v1/payment/create", post(payments::create))
        .route("/v1/payment/update/:id", put(payments::update))
        .route("/v1/payment/delete/:id", delete(payments::delete))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::password::hash_password;
    use crate::database::models::{Bank, Cart, Category, Delivery, Payment, Product, Setting, User};
    use crate::database::Store;
    use crate::state::Stores;
    use crate::testing::{shared, test_config, FakeStorage, MemoryStore};

    struct Harness {
        app: Router,
        storage: Arc<FakeStorage>,
        users: Arc<MemoryStore<User>>,
        products: Arc<MemoryStore<Product>>,
        categories: Arc<MemoryStore<Category>>,
        payments: Arc<MemoryStore<Payment>>,
        carts: Arc<MemoryStore<Cart>>,
        settings: Arc<MemoryStore<Setting>>,
    }

    async fn harness() -> Harness {
        harness_with(FakeStorage::default()).await
    }

    async fn harness_with(storage: FakeStorage) -> Harness {
        let storage = Arc::new(storage);
        let users = shared::<User>();
        let products = shared::<Product>();
        let categories = shared::<Category>();
        let payments = shared::<Payment>();
        let carts = shared::<Cart>();
        let settings = shared::<Setting>();

        users
            .seed(User {
                id: 7,
                name: "Siti".to_string(),
                email: "siti@example.com".to_string(),
                password: hash_password("rahasia").unwrap(),
                role: "customer".to_string(),
                ..Default::default()
            })
            .await;

        let stores = Stores {
            users: users.clone(),
            products: products.clone(),
            categories: categories.clone(),
            banks: shared::<Bank>(),
            deliveries: shared::<Delivery>(),
            payments: payments.clone(),
            carts: carts.clone(),
            settings: settings.clone(),
        };
        let state = AppState::new(test_config(), stores, storage.clone(), None).unwrap();

        Harness {
            app: app(state),
            storage,
            users,
            products,
            categories,
            payments,
            carts,
            settings,
        }
    }

    const BOUNDARY: &str = "pempek-boundary";
    const PNG: &[u8] = b"\x89PNG\r\n";

    /// Hand-built `multipart/form-data` request; `file` goes in the `image` part.
    fn multipart(
        method: &str,
        uri: &str,
        cookie: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> Request<Body> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, cookie)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    const PRODUCT_FIELDS: &[(&str, &str)] = &[
        ("user_id", "7"),
        ("category_id", "2"),
        ("name", "Kapal Selam"),
        ("description", "Pempek telur besar"),
        ("price", "25000"),
        ("stock", "10"),
    ];

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn login_cookie(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/v1/login",
                json!({"email": "siti@example.com", "password": "rahasia"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn authed(method: &str, uri: &str, cookie: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, cookie);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    #[tokio::test]
    async fn login_returns_token_and_week_long_cookie() {
        let h = harness().await;
        let response = h
            .app
            .clone()
            .oneshot(json_request(
                "POST",
                "/v1/login",
                json!({"email": "siti@example.com", "password": "rahasia"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
        assert!(set_cookie.starts_with("Authorization="));
        assert!(set_cookie.contains("Max-Age=604800"));
        assert!(set_cookie.contains("HttpOnly"));

        let body = body_json(response).await;
        assert_eq!(body["error"], false);
        assert_eq!(body["data"]["id"], 7);
        assert!(body["data"].get("password").is_none());
        assert!(!body["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_password_is_a_bad_request() {
        let h = harness().await;
        let response = h
            .app
            .oneshot(json_request(
                "POST",
                "/v1/login",
                json!({"email": "siti@example.com", "password": "salah"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Invalid email or password");
    }

    #[tokio::test]
    async fn protected_route_without_cookie_is_rejected() {
        let h = harness().await;
        let response = h
            .app
            .oneshot(Request::get("/v1/categories").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["msg"], "Login first!");
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn tampered_cookie_is_rejected() {
        let h = harness().await;
        let response = h
            .app
            .oneshot(authed("GET", "/v1/me", "Authorization=not.a.token", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn me_returns_the_session_identity() {
        let h = harness().await;
        let cookie = login_cookie(&h.app).await;

        let response = h.app.oneshot(authed("GET", "/v1/me", &cookie, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"], json!({"id": 7, "name": "Siti", "email": "siti@example.com"}));
    }

    #[tokio::test]
    async fn session_for_deleted_user_is_rejected() {
        let h = harness().await;
        let cookie = login_cookie(&h.app).await;
        h.users.delete(7).await.unwrap();

        let response = h.app.oneshot(authed("GET", "/v1/me", &cookie, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let h = harness().await;
        let response = h
            .app
            .oneshot(Request::get("/v1/category/99").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Category not found");
    }

    #[tokio::test]
    async fn malformed_id_is_a_bad_request() {
        let h = harness().await;
        let response = h
            .app
            .oneshot(Request::get("/v1/product/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Invalid product ID");
    }

    #[tokio::test]
    async fn update_keeps_fields_left_empty() {
        let h = harness().await;
        h.categories
            .seed(Category {
                id: 3,
                name: "Kapal Selam".to_string(),
                ..Default::default()
            })
            .await;
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .clone()
            .oneshot(authed("PUT", "/v1/category/update/3", &cookie, Some(json!({"name": ""}))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["name"], "Kapal Selam");

        let response = h
            .app
            .oneshot(authed("PUT", "/v1/category/update/3", &cookie, Some(json!({"name": "Lenjer"}))))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["name"], "Lenjer");
    }

    #[tokio::test]
    async fn validation_errors_are_listed() {
        let h = harness().await;
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .oneshot(authed("POST", "/v1/cart/create", &cookie, Some(json!({"user_id": 7}))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let messages: Vec<&str> = body["msg"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m.as_str().unwrap())
            .collect();
        assert!(messages.contains(&"Error on product_id field, condition required"));
        assert!(messages.contains(&"Error on isActived field, condition required"));
        assert!(!messages.iter().any(|m| m.contains("payment_id")));
    }

    #[tokio::test]
    async fn cart_total_sums_matching_rows() {
        let h = harness().await;
        for (id, price, active) in [(1, 15_000, "true"), (2, 5_000, "true"), (3, 9_000, "false")] {
            h.carts
                .seed(Cart {
                    id,
                    user_id: 7,
                    product_id: 1,
                    quantity: 1,
                    total_price: price,
                    is_active: active.to_string(),
                    ..Default::default()
                })
                .await;
        }
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .clone()
            .oneshot(authed("GET", "/v1/carts/total/true/7", &cookie, None))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"], 20_000);

        let response = h
            .app
            .oneshot(authed("GET", "/v1/carts/total/true/8", &cookie, None))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"], 0);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let h = harness().await;
        let request = json!({
            "name": "Siti Dua",
            "email": "siti@example.com",
            "password": "x",
            "whatsapp": "0812",
            "gender": "female",
            "role": "customer"
        });

        let response = h
            .app
            .oneshot(json_request("POST", "/v1/user/register", request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(h.users.len().await, 1);
    }

    #[tokio::test]
    async fn logout_expires_the_cookie() {
        let h = harness().await;
        let response = h
            .app
            .oneshot(Request::post("/v1/logout").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.contains("Max-Age=0"));
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Logged out successfully!");
    }

    #[tokio::test]
    async fn product_create_stores_the_uploaded_url() {
        let h = harness().await;
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .oneshot(multipart("POST", "/v1/product/create", &cookie, PRODUCT_FIELDS, Some(("p.png", PNG))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["image"], "https://cdn.test/p.png");
        assert_eq!(body["data"]["price"], 25000);
        assert_eq!(*h.storage.uploads.read().await, vec!["p.png".to_string()]);

        let stored = h.products.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].image, "https://cdn.test/p.png");
    }

    #[tokio::test]
    async fn product_create_requires_an_image() {
        let h = harness().await;
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .oneshot(multipart("POST", "/v1/product/create", &cookie, PRODUCT_FIELDS, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["msg"], json!(["Error on image field, condition required"]));
        assert!(h.storage.uploads.read().await.is_empty());
        assert_eq!(h.products.len().await, 0);
    }

    #[tokio::test]
    async fn failed_upload_is_bad_gateway_and_saves_nothing() {
        let h = harness_with(FakeStorage::failing()).await;
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .oneshot(multipart("POST", "/v1/product/create", &cookie, PRODUCT_FIELDS, Some(("p.png", PNG))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Failed to upload image");
        assert_eq!(h.products.len().await, 0);
    }

    #[tokio::test]
    async fn product_update_without_file_keeps_the_image() {
        let h = harness().await;
        h.products
            .seed(Product {
                id: 4,
                user_id: 7,
                category_id: 2,
                name: "Lenjer".to_string(),
                image: "https://cdn.test/old.png".to_string(),
                price: 20000,
                stock: 5,
                ..Default::default()
            })
            .await;
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .clone()
            .oneshot(multipart("PUT", "/v1/product/update/4", &cookie, &[("price", "22000")], None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["image"], "https://cdn.test/old.png");
        assert_eq!(body["data"]["price"], 22000);
        assert_eq!(body["data"]["name"], "Lenjer");
        assert!(h.storage.uploads.read().await.is_empty());

        let response = h
            .app
            .oneshot(multipart("PUT", "/v1/product/update/4", &cookie, &[], Some(("new.png", PNG))))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["image"], "https://cdn.test/new.png");
        assert_eq!(h.products.find_by_id(4).await.unwrap().image, "https://cdn.test/new.png");
    }

    #[tokio::test]
    async fn product_update_for_missing_row_does_not_upload() {
        let h = harness().await;
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .oneshot(multipart("PUT", "/v1/product/update/99", &cookie, &[], Some(("x.png", PNG))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(h.storage.uploads.read().await.is_empty());
    }

    #[tokio::test]
    async fn payment_create_uploads_the_receipt() {
        let h = harness().await;
        let cookie = login_cookie(&h.app).await;
        let fields = [
            ("user_id", "7"),
            ("total_price", "50000"),
            ("address", "Jl. Merdeka 1, Palembang"),
            ("whatsapp", "0812000"),
            ("payment_status", "pending"),
            ("delivery_name", "JNE"),
            ("resi", "-"),
        ];

        let response = h
            .app
            .clone()
            .oneshot(multipart("POST", "/v1/payment/create", &cookie, &fields, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(h.payments.len().await, 0);

        let response = h
            .app
            .oneshot(multipart("POST", "/v1/payment/create", &cookie, &fields, Some(("bukti.jpg", PNG))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["image"], "https://cdn.test/bukti.jpg");
        assert_eq!(body["data"]["delivery_id"], 0);
        assert_eq!(h.payments.len().await, 1);
        assert_eq!(*h.storage.uploads.read().await, vec!["bukti.jpg".to_string()]);
    }

    #[tokio::test]
    async fn setting_update_without_file_keeps_the_image() {
        let h = harness().await;
        h.settings
            .seed(Setting {
                id: 1,
                image: "https://cdn.test/logo.png".to_string(),
                description: "Pempek asli".to_string(),
                ..Default::default()
            })
            .await;
        let cookie = login_cookie(&h.app).await;

        let response = h
            .app
            .oneshot(multipart("PUT", "/v1/setting/update/1", &cookie, &[("instagram", "@tamanpempek")], None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["image"], "https://cdn.test/logo.png");
        assert_eq!(body["data"]["description"], "Pempek asli");
        assert_eq!(body["data"]["instagram"], "@tamanpempek");
    }

    #[tokio::test]
    async fn registration_is_open_without_a_session() {
        let h = harness().await;
        let request = json!({
            "name": "Budi",
            "email": "budi@example.com",
            "password": "pempek",
            "whatsapp": "0813",
            "gender": "male",
            "role": "customer"
        });

        let response = h
            .app
            .oneshot(json_request("POST", "/v1/user/register", request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["email"], "budi@example.com");
        assert!(body["data"].get("password").is_none());
        assert_eq!(h.users.len().await, 2);

        let stored = h.users.find_one_where(&[("email", "budi@example.com".into())]).await.unwrap().unwrap();
        assert_ne!(stored.password, "pempek");
    }

    #[test]
    fn oversized_session_lifetime_is_refused_at_startup() {
        let mut config = test_config();
        config.security.session_ttl_hours = 1_000_000_000_000;

        let stores = Stores {
            users: shared::<User>(),
            products: shared::<Product>(),
            categories: shared::<Category>(),
            banks: shared::<Bank>(),
            deliveries: shared::<Delivery>(),
            payments: shared::<Payment>(),
            carts: shared::<Cart>(),
            settings: shared::<Setting>(),
        };
        let result = AppState::new(config, stores, Arc::new(FakeStorage::default()), None);
        assert!(result.is_err());
    }
}
