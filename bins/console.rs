use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use uuid::Uuid;

use client::auth::HttpAuthApi;
use client::categories::HttpCategoryApi;
use client::http::ApiClient;
use configs::AppConfig;
use screens::categories::{self, CategoriesScreen};
use screens::errors::ScreenError;
use screens::hooks::RegisterHooks;
use screens::login::{self, LoginScreen};
use screens::register::{self, RegisterScreen};
use screens::term::TermView;
use screens::view::ViewPort;
use screens::{CATEGORIES_TARGET, LOGIN_TARGET};
use service::session::file_store::FileSessionStore;
use service::session::SessionStore;

const EXIT_TARGET: &str = "salir";

fn init_logging() {
    // Load .env first so RUST_LOG from the file applies to the subscriber.
    dotenv().ok();
    common::utils::logging::init_logging_default();
    info!(service = "console", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "console",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // Prefer config.toml; a missing file falls back to built-in defaults.
    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = AppConfig::default();
            if let Err(e) = cfg.normalize_and_validate() {
                error!(service = "console", event = "config_invalid", error = %e, "configuration rejected");
                return std::process::ExitCode::FAILURE;
            }
            cfg
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "console", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "console",
        event = "start",
        %service_id,
        pid,
        version,
        api = %cfg.api.base_url,
        "console starting"
    );

    rt.block_on(async move {
        match run(cfg).await {
            Ok(()) => {
                info!(service = "console", event = "stop", %service_id, pid, "console stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "console", event = "run_failed", error = %e, "console returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}

type Input = Lines<BufReader<Stdin>>;

async fn prompt(lines: &mut Input, label: &str) -> Result<String> {
    use std::io::Write;
    print!("{label}: ");
    std::io::stdout().flush()?;
    lines
        .next_line()
        .await?
        .ok_or_else(|| anyhow::anyhow!("stdin closed"))
}

async fn run(cfg: AppConfig) -> Result<()> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".into());
    common::env::ensure_env(&config_path, &cfg.storage.data_dir).await?;

    let api = ApiClient::from_config(&cfg.api);
    let auth = Arc::new(HttpAuthApi::new(api.clone(), &cfg.api.endpoints));
    let category_api = Arc::new(HttpCategoryApi::new(api, &cfg.api.endpoints));
    let sessions = FileSessionStore::open(cfg.storage.session_path()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    // A persisted session skips the login page, as the original screens do.
    let mut target = if sessions.load().await.is_some() {
        CATEGORIES_TARGET.to_string()
    } else {
        LOGIN_TARGET.to_string()
    };

    loop {
        target = match target.as_str() {
            LOGIN_TARGET => auth_menu(&mut lines, &cfg, &auth, &sessions).await?,
            CATEGORIES_TARGET => categories_menu(&mut lines, &category_api, &sessions).await?,
            _ => return Ok(()),
        };
    }
}

async fn auth_menu(
    lines: &mut Input,
    cfg: &AppConfig,
    auth: &Arc<HttpAuthApi>,
    sessions: &Arc<FileSessionStore>,
) -> Result<String> {
    println!();
    println!("[1] Iniciar sesión  [2] Crear cuenta  [q] Salir");
    match prompt(lines, ">").await?.trim() {
        "1" => {
            let mut view = TermView::with_elements(&[
                login::FORM_ID,
                login::FIELD_CORREO,
                login::FIELD_CLAVE,
            ]);
            view.set_field_value(login::FIELD_CORREO, &prompt(lines, "Correo electrónico").await?);
            view.set_field_value(login::FIELD_CLAVE, &prompt(lines, "Contraseña").await?);
            let mut screen = LoginScreen::bind(view, auth.clone(), sessions.clone(), cfg)?;
            screen.submit().await;
            let mut view = screen.into_view();
            Ok(view.take_navigation().unwrap_or_else(|| LOGIN_TARGET.to_string()))
        }
        "2" => {
            let mut view = TermView::with_elements(&[
                register::FORM_ID,
                register::FIELD_NOMBRE,
                register::FIELD_CORREO,
                register::FIELD_CLAVE,
                register::FIELD_CONFIRMAR,
            ]);
            for (field, label) in [
                (register::FIELD_NOMBRE, "Nombre completo"),
                (register::FIELD_CORREO, "Correo electrónico"),
                (register::FIELD_CLAVE, "Contraseña"),
                (register::FIELD_CONFIRMAR, "Confirmar contraseña"),
            ] {
                view.set_field_value(field, &prompt(lines, label).await?);
            }
            let mut screen = RegisterScreen::bind(view, auth.clone(), cfg, RegisterHooks::default())?;
            screen.confirm_password_blurred();
            screen.submit().await;
            let mut view = screen.into_view();
            Ok(view.take_navigation().unwrap_or_else(|| LOGIN_TARGET.to_string()))
        }
        "q" => Ok(EXIT_TARGET.to_string()),
        _ => Ok(LOGIN_TARGET.to_string()),
    }
}

async fn categories_menu(
    lines: &mut Input,
    api: &Arc<HttpCategoryApi>,
    sessions: &Arc<FileSessionStore>,
) -> Result<String> {
    let view = TermView::with_elements(&[categories::LIST_ID, categories::FIELD_NOMBRE]);
    let mut screen = match CategoriesScreen::bind(view, api.clone(), sessions.clone()).await {
        Ok(screen) => screen,
        Err(ScreenError::NoSession) => return Ok(LOGIN_TARGET.to_string()),
        Err(e) => return Err(e.into()),
    };

    println!();
    println!("Categorías de evento:");
    screen.refresh().await;

    loop {
        println!();
        println!("[l] Listar  [n] Nueva  [r] Renombrar  [e] Eliminar  [s] Cerrar sesión  [q] Salir");
        match prompt(lines, ">").await?.trim() {
            "l" => screen.refresh().await,
            "n" => {
                let nombre = prompt(lines, "Nombre de la categoría").await?;
                screen.view_mut().set_field_value(categories::FIELD_NOMBRE, &nombre);
                screen.create().await;
            }
            "r" => match prompt(lines, "Id").await?.trim().parse::<i64>() {
                Ok(id) => {
                    let nuevo = prompt(lines, "Nuevo nombre").await?;
                    screen.rename(id, "", &nuevo).await;
                }
                Err(_) => println!("[error] id inválido"),
            },
            "e" => match prompt(lines, "Id").await?.trim().parse::<i64>() {
                Ok(id) => screen.remove(id).await,
                Err(_) => println!("[error] id inválido"),
            },
            "s" => {
                screen.logout().await;
                return Ok(LOGIN_TARGET.to_string());
            }
            "q" => return Ok(EXIT_TARGET.to_string()),
            _ => {}
        }
    }
}
