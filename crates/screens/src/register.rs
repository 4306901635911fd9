//! Registration screen.
//!
//! Drives the submit pipeline over the abstract view: read fields, run the
//! validation engine (including the confirm-password cross check), send the
//! registration request, render the outcome and redirect to the login
//! screen after the configured delay.

use std::sync::Arc;
use std::time::Duration;

use client::auth::{AuthApi, RegisterRequest};
use client::errors::{ApiError, ServerErrorKind};
use configs::{AppConfig, ValidationConfig};
use models::form::{FieldRule, FormData, RuleSet};
use service::validation;
use tracing::{error, info};

use crate::errors::ScreenError;
use crate::hooks::RegisterHooks;
use crate::state::FormPhase;
use crate::view::{AlertKind, ViewPort};
use crate::LOGIN_TARGET;

pub const FORM_ID: &str = "registerForm";
pub const FIELD_NOMBRE: &str = "nombre";
pub const FIELD_CORREO: &str = "correo";
pub const FIELD_CLAVE: &str = "clave";
pub const FIELD_CONFIRMAR: &str = "confirmarClave";

const ALL_FIELDS: [&str; 4] = [FIELD_NOMBRE, FIELD_CORREO, FIELD_CLAVE, FIELD_CONFIRMAR];

pub const MSG_SUCCESS: &str = "¡Cuenta creada exitosamente! Redirigiendo al login...";
pub const MSG_DUPLICATE: &str =
    "Este correo electrónico ya está registrado. Usa otro correo o inicia sesión.";
pub const MSG_CONNECTIVITY: &str = "Error de conexión. Verifica que el servidor esté funcionando.";
pub const MSG_INVALID_DATA: &str = "Los datos ingresados no son válidos. Verifica la información.";
pub const MSG_GENERIC: &str = "Error al crear la cuenta. Por favor, intenta nuevamente.";

fn registration_rules(cfg: &ValidationConfig) -> RuleSet {
    RuleSet::new()
        .field(FIELD_NOMBRE, FieldRule::required("Nombre completo").min_length(cfg.name_min_length))
        .field(FIELD_CORREO, FieldRule::required("Correo electrónico").email())
        .field(FIELD_CLAVE, FieldRule::required("Contraseña").min_length(cfg.password_min_length))
        .field(
            FIELD_CONFIRMAR,
            FieldRule::required("Confirmar contraseña").min_length(cfg.password_min_length),
        )
}

fn error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Network(_) => MSG_CONNECTIVITY,
        ApiError::Server { kind: ServerErrorKind::DuplicateEmail, .. } => MSG_DUPLICATE,
        ApiError::Server { kind: ServerErrorKind::Validation, .. } => MSG_INVALID_DATA,
        _ => MSG_GENERIC,
    }
}

pub struct RegisterScreen<V, A> {
    view: V,
    auth: Arc<A>,
    rules: RuleSet,
    hooks: RegisterHooks,
    redirect_delay: Duration,
    phase: FormPhase,
}

impl<V: ViewPort, A: AuthApi> RegisterScreen<V, A> {
    /// Bind the screen to its view. Missing form element is fatal for this
    /// screen only.
    pub fn bind(
        view: V,
        auth: Arc<A>,
        cfg: &AppConfig,
        hooks: RegisterHooks,
    ) -> Result<Self, ScreenError> {
        if !view.element_exists(FORM_ID) {
            error!(form = FORM_ID, "register form not found; screen stays inert");
            return Err(ScreenError::MissingElement(FORM_ID.into()));
        }
        Ok(Self {
            view,
            auth,
            rules: registration_rules(&cfg.validation),
            hooks,
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
        for name in ALL_FIELDS {
            data.insert(name, &self.view.field_value(name));
        }
        data
    }

    /// One full submission attempt. Every path ends back in `Idle` with the
    /// fields editable.
    pub async fn submit(&mut self) {
        self.view.clear_alerts();
        self.phase = FormPhase::Validating;

        let data = self.form_data();
        let result =
            validation::validate_with_confirmation(&data, &self.rules, FIELD_CLAVE, FIELD_CONFIRMAR);
        if !result.is_valid {
            self.view.show_alert(&result.errors.join("\n"), AlertKind::Error);
            self.phase = FormPhase::Idle;
            return;
        }

        self.phase = FormPhase::Submitting;
        self.view.set_loading(true);
        // The confirmation value stays client-side.
        let request = RegisterRequest {
            nombre: data.get(FIELD_NOMBRE).to_string(),
            correo: data.get(FIELD_CORREO).to_string(),
            clave: data.get(FIELD_CLAVE).to_string(),
        };
        let outcome = self.auth.register(&request).await;
        self.view.set_loading(false);

        match outcome {
            Ok(payload) => {
                self.phase = FormPhase::Success;
                info!(correo = %request.correo, "registration accepted");
                self.view.show_alert(MSG_SUCCESS, AlertKind::Success);
                for name in ALL_FIELDS {
                    self.view.set_field_value(name, "");
                }
                if let Some(hook) = &self.hooks.on_success {
                    hook(&payload);
                }
                tokio::time::sleep(self.redirect_delay).await;
                let target = match &self.hooks.on_redirect {
                    Some(hook) => hook(),
                    None => LOGIN_TARGET.to_string(),
                };
                self.view.navigate(&target);
            }
            Err(err) => {
                self.phase = FormPhase::Failed;
                self.view.show_alert(error_message(&err), AlertKind::Error);
                if let Some(hook) = &self.hooks.on_error {
                    hook(&err);
                }
            }
        }
        self.phase = FormPhase::Idle;
    }

    /// Live feedback when the confirmation field loses focus: toggle the
    /// inline mismatch mark. Redundant with the submit-time cross check.
    pub fn confirm_password_blurred(&mut self) {
        let clave = self.view.field_value(FIELD_CLAVE);
        let confirmar = self.view.field_value(FIELD_CONFIRMAR);
        if !confirmar.is_empty() && clave != confirmar {
            self.view.mark_field_invalid(FIELD_CONFIRMAR, validation::MSG_PASSWORD_MISMATCH);
        } else {
            self.view.clear_field_invalid(FIELD_CONFIRMAR);
        }
    }

    /// Editing the primary password clears any mismatch mark right away.
    pub fn password_edited(&mut self) {
        self.view.clear_field_invalid(FIELD_CONFIRMAR);
    }
}
