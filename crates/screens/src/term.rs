//! Terminal rendition of the `ViewPort`: fields are an in-memory map the
//! console fills from prompts, alerts and lists print to stdout, and
//! navigation is recorded for the console loop to pick up.

use std::collections::{HashMap, HashSet};

use models::category::Category;

use crate::view::{AlertKind, ViewPort};

pub struct TermView {
    elements: HashSet<String>,
    fields: HashMap<String, String>,
    navigation: Option<String>,
}

impl TermView {
    /// A view whose "markup" consists of the given element ids.
    pub fn with_elements(ids: &[&str]) -> Self {
        Self {
            elements: ids.iter().map(|id| id.to_string()).collect(),
            fields: HashMap::new(),
            navigation: None,
        }
    }

    /// Navigation requested by the screen since the last call, if any.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation.take()
    }
}

impl ViewPort for TermView {
    fn element_exists(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn field_value(&self, id: &str) -> String {
        self.fields.get(id).cloned().unwrap_or_default()
    }

    fn set_field_value(&mut self, id: &str, value: &str) {
        self.fields.insert(id.to_string(), value.to_string());
    }

    fn show_alert(&mut self, message: &str, kind: AlertKind) {
        let tag = match kind {
            AlertKind::Error => "error",
            AlertKind::Success => "ok",
        };
        println!("[{tag}] {message}");
    }

    fn clear_alerts(&mut self) {
        // stdout scrolls; nothing to clear
    }

    fn set_loading(&mut self, on: bool) {
        if on {
            println!("Enviando...");
        }
    }

    fn mark_field_invalid(&mut self, id: &str, message: &str) {
        println!("[aviso] {id}: {message}");
    }

    fn clear_field_invalid(&mut self, _id: &str) {}

    fn render_categories(&mut self, items: &[Category]) {
        if items.is_empty() {
            println!("(sin categorías)");
            return;
        }
        for item in items {
            println!("  {}. {}", item.id, item.nombre);
        }
    }

    fn navigate(&mut self, target: &str) {
        self.navigation = Some(target.to_string());
    }
}
