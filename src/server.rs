use crate::{
    config::{Config, GatewayConfig},
    error::{CampaignError, Result},
    gateway::{ChatTransport, GatewayClient, HttpTransport},
    models::{CampaignRequest, CampaignResult},
    pipeline::CampaignPipeline,
};
use actix_web::{
    http::{Method, StatusCode},
    web, App, HttpRequest, HttpResponse, HttpResponseBuilder, HttpServer,
    ResponseError,
};
use serde_json::json;
use std::sync::Arc;

pub const CAMPAIGN_ROUTE: &str = "/generate-campaign";

const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
const ALLOW_HEADERS: (&str, &str) = (
    "Access-Control-Allow-Headers",
    "authorization, x-client-info, apikey, content-type",
);

pub struct AppState {
    pub gateway: GatewayConfig,
    pub transport: Arc<dyn ChatTransport>,
}

impl AppState {
    pub fn new(gateway: GatewayConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self { gateway, transport }
    }

    pub fn from_config(gateway: GatewayConfig) -> Self {
        let transport = Arc::new(HttpTransport::from_config(&gateway));
        Self::new(gateway, transport)
    }
}

/// Attach the permissive cross-origin headers every response carries.
pub fn cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header(ALLOW_ORIGIN)
        .insert_header(ALLOW_HEADERS)
}

async fn run_campaign(state: &AppState, body: &[u8]) -> Result<CampaignResult> {
    let gateway = GatewayClient::new(state.transport.clone(), &state.gateway)?;
    let request = CampaignRequest::from_slice(body)?;

    let pipeline = CampaignPipeline::new(gateway);
    log::info!(
        "[{}] Campaign request for brand '{}'",
        pipeline.request_id(),
        request.brand_name
    );
    pipeline.generate(&request).await
}

/// Body extraction failures are answered like every other campaign error.
fn body_error(e: actix_web::Error) -> CampaignError {
    log::warn!("Could not read campaign body: {}", e);
    if e.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
        CampaignError::PayloadTooLarge
    } else {
        CampaignError::InvalidRequest("could not read request body".to_string())
    }
}

pub async fn generate_campaign(
    req: HttpRequest,
    body: std::result::Result<web::Bytes, actix_web::Error>,
    state: web::Data<AppState>,
) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return cors(&mut HttpResponse::Ok()).finish();
    }

    let body = match body {
        Ok(body) => body,
        Err(e) => return body_error(e).error_response(),
    };

    match run_campaign(&state, &body).await {
        Ok(result) => cors(&mut HttpResponse::Ok()).json(result),
        Err(e) => {
            log::error!("generate-campaign error: {}", e);
            e.error_response()
        }
    }
}

pub async fn health() -> HttpResponse {
    cors(&mut HttpResponse::Ok()).json(json!({ "status": "ok" }))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::resource(CAMPAIGN_ROUTE).route(web::route().to(generate_campaign)),
    );
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let max_body_bytes = config.max_body_bytes;
    let state = web::Data::new(AppState::from_config(config.gateway.clone()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port()))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gateway::mock::ScriptedTransport,
        models::{ChatResponse, ErrorBody},
    };
    use actix_web::test;

    fn state(transport: &Arc<ScriptedTransport>, api_key: Option<&str>) -> web::Data<AppState> {
        let mut gateway = GatewayConfig::new();
        if let Some(key) = api_key {
            gateway = gateway.with_api_key(key);
        }
        web::Data::new(AppState::new(gateway, transport.clone()))
    }

    fn acme_body() -> serde_json::Value {
        json!({
            "brandName": "Acme",
            "industry": "Coffee",
            "theme": "Autumn",
            "headlineText": "Fall In Love",
            "visualStyle": "Pastel",
            "brandColor": "#E8D5D5"
        })
    }

    fn assert_cors<B>(resp: &actix_web::dev::ServiceResponse<B>) {
        let headers = resp.headers();
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(
            headers.get("access-control-allow-headers").unwrap(),
            "authorization, x-client-info, apikey, content-type"
        );
    }

    #[actix_web::test]
    async fn test_options_short_circuits_without_config() {
        let transport = ScriptedTransport::new(vec![]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, None))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(CAMPAIGN_ROUTE)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_cors(&resp);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
        assert_eq!(transport.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_missing_api_key_is_500_without_upstream_call() {
        let transport = ScriptedTransport::new(vec![Ok(ChatResponse::text("unused"))]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, None))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CAMPAIGN_ROUTE)
            .set_json(acme_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&resp);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "AI_GATEWAY_API_KEY is not configured");
        assert_eq!(transport.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_successful_campaign() {
        let transport = ScriptedTransport::new(vec![
            Ok(ChatResponse::text("A latte on warm oak.")),
            Ok(ChatResponse::image("https://cdn.example/flyer.png")),
            Ok(ChatResponse::text("Fall for it 🍂 #Acme #Autumn")),
        ]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, Some("sk-test")))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CAMPAIGN_ROUTE)
            .set_json(acme_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_cors(&resp);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "imageUrl": "https://cdn.example/flyer.png",
                "caption": "Fall for it 🍂 #Acme #Autumn",
                "prompt": "A latte on warm oak."
            })
        );
    }

    #[actix_web::test]
    async fn test_upstream_status_reaches_client() {
        for (upstream, expected, message) in [
            (429, 429, "Rate limit exceeded. Please try again shortly."),
            (402, 402, "AI credits exhausted. Please add credits."),
            (503, 500, "AI gateway error: 503"),
        ] {
            let transport =
                ScriptedTransport::new(vec![Err(CampaignError::from_upstream_status(upstream))]);
            let app = test::init_service(
                App::new()
                    .app_data(state(&transport, Some("sk-test")))
                    .configure(routes),
            )
            .await;

            let req = test::TestRequest::post()
                .uri(CAMPAIGN_ROUTE)
                .set_json(acme_body())
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status().as_u16(), expected);
            let body: ErrorBody = test::read_body_json(resp).await;
            assert_eq!(body.error, message);
        }
    }

    #[actix_web::test]
    async fn test_caption_failure_still_succeeds() {
        let transport = ScriptedTransport::new(vec![
            Ok(ChatResponse::text("Poster.")),
            Ok(ChatResponse::image("https://cdn.example/flyer.png")),
            Err(CampaignError::Request("connection reset".into())),
        ]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, Some("sk-test")))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CAMPAIGN_ROUTE)
            .set_json(acme_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: CampaignResult = test::read_body_json(resp).await;
        assert_eq!(body.caption, "");
        assert_eq!(body.prompt, "Poster.");
    }

    #[actix_web::test]
    async fn test_malformed_body_is_rejected() {
        let transport = ScriptedTransport::new(vec![]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, Some("sk-test")))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CAMPAIGN_ROUTE)
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(transport.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_oversized_body_is_413_with_cors() {
        let transport = ScriptedTransport::new(vec![]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, Some("sk-test")))
                .app_data(web::PayloadConfig::new(16))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CAMPAIGN_ROUTE)
            .set_json(acme_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_cors(&resp);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Request body is too large");
        assert_eq!(transport.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_transport_failure_hides_detail() {
        let transport = ScriptedTransport::new(vec![Err(CampaignError::Request(
            "error sending request for url (http://127.0.0.1:1/secret/internal/path): connection refused"
                .into(),
        ))]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, Some("sk-test")))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CAMPAIGN_ROUTE)
            .set_json(acme_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&resp);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "AI gateway request failed");
        assert!(!body.error.contains("127.0.0.1"));
        assert!(!body.error.contains("http://"));
    }

    #[actix_web::test]
    async fn test_undecodable_upstream_hides_detail() {
        let serde_detail = "invalid type: string \"nope\", expected a sequence at line 1 column 17";
        let transport = ScriptedTransport::new(vec![Err(CampaignError::MalformedResponse(
            serde_detail.into(),
        ))]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, Some("sk-test")))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CAMPAIGN_ROUTE)
            .set_json(acme_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Unexpected AI gateway response");
        assert!(!body.error.contains("invalid type"));
    }

    #[actix_web::test]
    async fn test_undecodable_image_reply_is_no_image() {
        let transport = ScriptedTransport::new(vec![
            Ok(ChatResponse::text("Poster.")),
            Err(CampaignError::MalformedResponse(
                "invalid type: null, expected a sequence".into(),
            )),
        ]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, Some("sk-test")))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CAMPAIGN_ROUTE)
            .set_json(acme_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "No image was generated. Please try again.");
        assert_eq!(transport.call_count(), 2);
    }

    #[actix_web::test]
    async fn test_health() {
        let transport = ScriptedTransport::new(vec![]);
        let app = test::init_service(
            App::new()
                .app_data(state(&transport, None))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
