use client::errors::ApiError;

pub type SuccessHook = Box<dyn Fn(&serde_json::Value) + Send + Sync>;
pub type ErrorHook = Box<dyn Fn(&ApiError) + Send + Sync>;
pub type RedirectHook = Box<dyn Fn() -> String + Send + Sync>;

/// Optional extension callbacks for the registration screen, handed over
/// at construction instead of looked up from ambient globals.
#[derive(Default)]
pub struct RegisterHooks {
    /// Called with the server payload after a successful registration.
    pub on_success: Option<SuccessHook>,
    /// Called with the API error after a failed registration.
    pub on_error: Option<ErrorHook>,
    /// When present, its return value replaces the default navigation
    /// target after the post-success delay.
    pub on_redirect: Option<RedirectHook>,
}
