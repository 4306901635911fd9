//! Login screen. Same pipeline as registration, with the session store at
//! the end: credentials are only persisted after the server accepted them.

use std::sync::Arc;
use std::time::Duration;

use client::auth::{AuthApi, LoginRequest};
use client::errors::{ApiError, ServerErrorKind};
use configs::{AppConfig, ValidationConfig};
use models::form::{FieldRule, FormData, RuleSet};
use models::session::Session;
use service::session::SessionStore;
use service::validation;
use tracing::{error, info};

use crate::errors::ScreenError;
use crate::state::FormPhase;
use crate::view::{AlertKind, ViewPort};
use crate::CATEGORIES_TARGET;

pub const FORM_ID: &str = "loginForm";
pub const FIELD_CORREO: &str = "correo";
pub const FIELD_CLAVE: &str = "clave";

pub const MSG_SUCCESS: &str = "¡Bienvenido! Redirigiendo...";
pub const MSG_BAD_CREDENTIALS: &str = "Correo o contraseña incorrectos.";
pub const MSG_CONNECTIVITY: &str = "Error de conexión. Verifica que el servidor esté funcionando.";
pub const MSG_GENERIC: &str = "Error al iniciar sesión. Por favor, intenta nuevamente.";

fn login_rules(cfg: &ValidationConfig) -> RuleSet {
    RuleSet::new()
        .field(FIELD_CORREO, FieldRule::required("Correo electrónico").email())
        .field(FIELD_CLAVE, FieldRule::required("Contraseña").min_length(cfg.password_min_length))
}

fn error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Network(_) => MSG_CONNECTIVITY,
        ApiError::Server { kind: ServerErrorKind::InvalidCredentials, .. } => MSG_BAD_CREDENTIALS,
        _ => MSG_GENERIC,
    }
}

pub struct LoginScreen<V, A, S> {
    view: V,
    auth: Arc<A>,
    sessions: Arc<S>,
    rules: RuleSet,
    redirect_delay: Duration,
    phase: FormPhase,
}

impl<V: ViewPort, A: AuthApi, S: SessionStore> LoginScreen<V, A, S> {
    pub fn bind(
        view: V,
        auth: Arc<A>,
        sessions: Arc<S>,
        cfg: &AppConfig,
    ) -> Result<Self, ScreenError> {
        if !view.element_exists(FORM_ID) {
            error!(form = FORM_ID, "login form not found; screen stays inert");
            return Err(ScreenError::MissingElement(FORM_ID.into()));
        }
        Ok(Self {
            view,
            auth,
            sessions,
            rules: login_rules(&cfg.validation),
            redirect_delay: Duration::from_millis(cfg.timeouts.redirect_delay_ms),
            phase: FormPhase::Idle,
        })
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Hand the view back once the screen is done with it.
    pub fn into_view(self) -> V {
        self.view
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        for name in [FIELD_CORREO, FIELD_CLAVE] {
            data.insert(name, &self.view.field_value(name));
        }
        data
    }

    pub async fn submit(&mut self) {
        self.view.clear_alerts();
        self.phase = FormPhase::Validating;

        let data = self.form_data();
        let result = validation::validate(&data, &self.rules);
        if !result.is_valid {
            self.view.show_alert(&result.errors.join("\n"), AlertKind::Error);
            self.phase = FormPhase::Idle;
            return;
        }

        self.phase = FormPhase::Submitting;
        self.view.set_loading(true);
        let request = LoginRequest {
            correo: data.get(FIELD_CORREO).to_string(),
            clave: data.get(FIELD_CLAVE).to_string(),
        };
        let outcome = self.auth.login(&request).await;
        self.view.set_loading(false);

        match outcome {
            Ok(response) => {
                self.phase = FormPhase::Success;
                let session =
                    Session::new(response.access_token, response.token_type, response.usuario);
                if let Err(e) = self.sessions.save(session).await {
                    error!(error = %e, "could not persist session");
                    self.view.show_alert(MSG_GENERIC, AlertKind::Error);
                    self.phase = FormPhase::Idle;
                    return;
                }
                info!(correo = %request.correo, "session established");
                self.view.show_alert(MSG_SUCCESS, AlertKind::Success);
                self.view.set_field_value(FIELD_CLAVE, "");
                tokio::time::sleep(self.redirect_delay).await;
                self.view.navigate(CATEGORIES_TARGET);
            }
            Err(err) => {
                self.phase = FormPhase::Failed;
                self.view.show_alert(error_message(&err), AlertKind::Error);
            }
        }
        self.phase = FormPhase::Idle;
    }
}
