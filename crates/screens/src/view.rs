use models::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Everything a controller may do to its screen. Concrete views decide how
/// the identifiers map to widgets; controllers never look elements up
/// anywhere else.
pub trait ViewPort: Send {
    fn element_exists(&self, id: &str) -> bool;
    fn field_value(&self, id: &str) -> String;
    fn set_field_value(&mut self, id: &str, value: &str);
    fn show_alert(&mut self, message: &str, kind: AlertKind);
    fn clear_alerts(&mut self);
    /// While on, the submit control is disabled and a progress indicator
    /// shows. Advisory locking only: a programmatic caller can still
    /// submit twice.
    fn set_loading(&mut self, on: bool);
    /// Inline per-field mark, advisory only.
    fn mark_field_invalid(&mut self, id: &str, message: &str);
    fn clear_field_invalid(&mut self, id: &str);
    fn render_categories(&mut self, items: &[Category]);
    fn navigate(&mut self, target: &str);
}

/// Recording view for tests: a cloneable handle over shared state so the
/// test keeps inspecting it after the controller takes ownership.
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex, MutexGuard};

    #[derive(Default)]
    pub struct ViewState {
        pub elements: HashSet<String>,
        pub fields: HashMap<String, String>,
        pub alerts: Vec<(String, AlertKind)>,
        pub alert_clears: usize,
        pub loading: bool,
        pub loading_transitions: Vec<bool>,
        pub invalid_marks: HashMap<String, String>,
        pub rendered: Vec<Vec<Category>>,
        pub navigations: Vec<String>,
    }

    #[derive(Clone, Default)]
    pub struct MockViewPort {
        state: Arc<Mutex<ViewState>>,
    }

    impl MockViewPort {
        pub fn with_elements(ids: &[&str]) -> Self {
            let view = Self::default();
            {
                let mut state = view.state.lock().unwrap();
                state.elements = ids.iter().map(|id| id.to_string()).collect();
            }
            view
        }

        pub fn set_field(&self, id: &str, value: &str) {
            self.state.lock().unwrap().fields.insert(id.to_string(), value.to_string());
        }

        pub fn state(&self) -> MutexGuard<'_, ViewState> {
            self.state.lock().unwrap()
        }
    }

    impl ViewPort for MockViewPort {
        fn element_exists(&self, id: &str) -> bool {
            self.state.lock().unwrap().elements.contains(id)
        }

        fn field_value(&self, id: &str) -> String {
            self.state.lock().unwrap().fields.get(id).cloned().unwrap_or_default()
        }

        fn set_field_value(&mut self, id: &str, value: &str) {
            self.state.lock().unwrap().fields.insert(id.to_string(), value.to_string());
        }

        fn show_alert(&mut self, message: &str, kind: AlertKind) {
            self.state.lock().unwrap().alerts.push((message.to_string(), kind));
        }

        fn clear_alerts(&mut self) {
            let mut state = self.state.lock().unwrap();
            state.alerts.clear();
            state.alert_clears += 1;
        }

        fn set_loading(&mut self, on: bool) {
            let mut state = self.state.lock().unwrap();
            state.loading = on;
            state.loading_transitions.push(on);
        }

        fn mark_field_invalid(&mut self, id: &str, message: &str) {
            self.state.lock().unwrap().invalid_marks.insert(id.to_string(), message.to_string());
        }

        fn clear_field_invalid(&mut self, id: &str) {
            self.state.lock().unwrap().invalid_marks.remove(id);
        }

        fn render_categories(&mut self, items: &[Category]) {
            self.state.lock().unwrap().rendered.push(items.to_vec());
        }

        fn navigate(&mut self, target: &str) {
            self.state.lock().unwrap().navigations.push(target.to_string());
        }
    }
}
