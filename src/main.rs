//! 사용자 디렉터리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 검색 서비스를 초기화합니다.
//! Keycloak 관리 API를 서비스 계정 토큰으로 호출하는 검색 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_directory_service::config::ServerConfig;
use user_directory_service::core::registry::ServiceLocator;
use user_directory_service::routes::configure_all_routes;
use user_directory_service::services::auth::ServiceAccountTokenProvider;
use user_directory_service::services::users::{FinderSettings, UserFinderService};
use user_directory_service::utils::display_terminal::{print_boxed_title, print_sub_task};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 디렉터리 서비스 시작중...");

    let finder = initialize_finder().map_err(|e| {
        error!("사용자 검색 서비스 초기화 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    ServiceLocator::set(Arc::new(finder));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server().await
}

/// 환경 변수에서 토큰 제공자와 검색 설정을 읽어 검색 서비스를 만듭니다
///
/// # Errors
///
/// * `AppError::InternalError` - 필수 Keycloak 설정이 없는 경우
fn initialize_finder() -> user_directory_service::core::AppResult<UserFinderService> {
    let provider = ServiceAccountTokenProvider::from_env()?;
    let settings = FinderSettings::from_env()?;

    print_boxed_title("USER DIRECTORY SERVICE");
    print_sub_task("Token endpoint", provider.token_url());
    print_sub_task("Users endpoint", &settings.users_url);
    print_sub_task("Strict status", if settings.strict_status { "on" } else { "off" });

    Ok(UserFinderService::new(Arc::new(provider), settings))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let allowed_origins = ServerConfig::cors_allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 User search: POST http://{}/api/v1/users/search", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=user_directory_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// `CORS_ALLOWED_ORIGINS`의 오리진만 허용하는 CORS 미들웨어를 구성합니다
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
