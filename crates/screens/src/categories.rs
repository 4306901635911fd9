//! Category management screen. Guarded: without a stored session the
//! screen sends the view back to login instead of binding. All operations
//! reuse the single stored token; the rendered list is a transient copy of
//! whatever the server returned last.

use std::sync::Arc;

use client::categories::CategoryApi;
use models::category::CategoryInput;
use service::session::SessionStore;
use tracing::{error, warn};

use crate::errors::ScreenError;
use crate::view::{AlertKind, ViewPort};
use crate::LOGIN_TARGET;

pub const LIST_ID: &str = "listaCategorias";
pub const FIELD_NOMBRE: &str = "nombreCategoria";

pub const MSG_LIST_FAILED: &str = "No se pudieron cargar las categorías.";
pub const MSG_NAME_REQUIRED: &str = "El nombre de la categoría es requerido.";
pub const MSG_CREATE_FAILED: &str = "Error al crear la categoría.";
pub const MSG_UPDATE_FAILED: &str = "Error al actualizar la categoría.";
pub const MSG_DELETE_FAILED: &str = "Error al eliminar la categoría.";

pub struct CategoriesScreen<V, C, S> {
    view: V,
    api: Arc<C>,
    sessions: Arc<S>,
    token: String,
}

impl<V: ViewPort, C: CategoryApi, S: SessionStore> CategoriesScreen<V, C, S> {
    /// Bind the screen, enforcing the session guard: with no stored session
    /// the view is sent to the login target and binding fails.
    pub async fn bind(mut view: V, api: Arc<C>, sessions: Arc<S>) -> Result<Self, ScreenError> {
        if !view.element_exists(LIST_ID) {
            error!(list = LIST_ID, "category list element not found; screen stays inert");
            return Err(ScreenError::MissingElement(LIST_ID.into()));
        }
        let session = match sessions.load().await {
            Some(session) => session,
            None => {
                warn!("no stored session; redirecting to login");
                view.navigate(LOGIN_TARGET);
                return Err(ScreenError::NoSession);
            }
        };
        let token = session.bearer_token().to_string();
        Ok(Self { view, api, sessions, token })
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Fetch the list and render it. Errors leave the previous rendering
    /// in place.
    pub async fn refresh(&mut self) {
        match self.api.list(&self.token).await {
            Ok(items) => self.view.render_categories(&items),
            Err(err) => {
                warn!(error = %err, "category list failed");
                self.view.show_alert(MSG_LIST_FAILED, AlertKind::Error);
            }
        }
    }

    /// Create a category from the name input; on success the input clears
    /// and the list reloads.
    pub async fn create(&mut self) {
        let nombre = self.view.field_value(FIELD_NOMBRE);
        let input = match CategoryInput::new(&nombre) {
            Ok(input) => input,
            Err(_) => {
                self.view.show_alert(MSG_NAME_REQUIRED, AlertKind::Error);
                return;
            }
        };
        match self.api.create(&self.token, &input).await {
            Ok(()) => {
                self.view.set_field_value(FIELD_NOMBRE, "");
                self.refresh().await;
            }
            Err(err) => {
                warn!(error = %err, "category create failed");
                self.view.show_alert(MSG_CREATE_FAILED, AlertKind::Error);
            }
        }
    }

    /// Rename a category. An empty or unchanged name is a no-op, matching
    /// the prompt-driven flow this screen came from.
    pub async fn rename(&mut self, id: i64, current: &str, nuevo: &str) {
        let nuevo = nuevo.trim();
        if nuevo.is_empty() || nuevo == current {
            return;
        }
        let input = match CategoryInput::new(nuevo) {
            Ok(input) => input,
            Err(_) => return,
        };
        match self.api.update(&self.token, id, &input).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                warn!(error = %err, id, "category update failed");
                self.view.show_alert(MSG_UPDATE_FAILED, AlertKind::Error);
            }
        }
    }

    pub async fn remove(&mut self, id: i64) {
        match self.api.delete(&self.token, id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                warn!(error = %err, id, "category delete failed");
                self.view.show_alert(MSG_DELETE_FAILED, AlertKind::Error);
            }
        }
    }

    /// Drop the stored session and go back to login.
    pub async fn logout(&mut self) {
        if let Err(e) = self.sessions.clear().await {
            error!(error = %e, "session clear failed");
        }
        self.view.navigate(LOGIN_TARGET);
    }
}
