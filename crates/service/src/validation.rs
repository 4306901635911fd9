//! Form validation engine.
//!
//! Pure functions over `FormData` + `RuleSet`: no state survives between
//! calls. Per field the rules run in fixed order (required, min_length,
//! email) and stop at the first failure, so a field contributes at most one
//! error per pass. Errors come out in field declaration order; cross-field
//! errors append last.

use models::form::{is_valid_email, FormData, RuleSet, ValidationResult};

pub const MSG_PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";

/// Validate every field of `rules` against `data`.
pub fn validate(data: &FormData, rules: &RuleSet) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for (name, rule) in rules.iter() {
        let value = data.get(name);
        if value.is_empty() {
            if rule.required {
                result.push_error(format!("{} es requerido", rule.label));
            }
            continue;
        }
        if let Some(min) = rule.min_length {
            if value.chars().count() < min {
                result.push_error(format!("{} debe tener al menos {} caracteres", rule.label, min));
                continue;
            }
        }
        if rule.email && !is_valid_email(value) {
            result.push_error(format!("{} no es válido", rule.label));
        }
    }
    result
}

/// Per-field validation plus the registration cross-field rule: when both
/// password fields are non-empty and differ, a mismatch error is appended.
/// The confirmation value itself never leaves the client.
pub fn validate_with_confirmation(
    data: &FormData,
    rules: &RuleSet,
    password_field: &str,
    confirm_field: &str,
) -> ValidationResult {
    let mut result = validate(data, rules);
    let password = data.get(password_field);
    let confirm = data.get(confirm_field);
    if !password.is_empty() && !confirm.is_empty() && password != confirm {
        result.push_error(MSG_PASSWORD_MISMATCH.to_string());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::form::FieldRule;

    fn registration_rules() -> RuleSet {
        RuleSet::new()
            .field("nombre", FieldRule::required("Nombre completo").min_length(2))
            .field("correo", FieldRule::required("Correo electrónico").email())
            .field("clave", FieldRule::required("Contraseña").min_length(6))
            .field("confirmarClave", FieldRule::required("Confirmar contraseña").min_length(6))
    }

    fn filled(nombre: &str, correo: &str, clave: &str, confirmar: &str) -> FormData {
        let mut data = FormData::new();
        data.insert("nombre", nombre);
        data.insert("correo", correo);
        data.insert("clave", clave);
        data.insert("confirmarClave", confirmar);
        data
    }

    #[test]
    fn complete_form_passes_with_no_errors() {
        let data = filled("Ana María", "ana@eventos.example.com", "secreta1", "secreta1");
        let result = validate_with_confirmation(&data, &registration_rules(), "clave", "confirmarClave");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn missing_required_field_reports_its_label_once() {
        let data = filled("", "ana@eventos.example.com", "secreta1", "secreta1");
        let result = validate(&data, &registration_rules());
        assert!(!result.is_valid);
        let hits: Vec<_> = result
            .errors
            .iter()
            .filter(|e| e.contains("Nombre completo"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], "Nombre completo es requerido");
    }

    #[test]
    fn at_most_one_error_per_field() {
        // One character fails min_length; required already passed, email
        // never runs for this field.
        let data = filled("A", "ana@eventos.example.com", "secreta1", "secreta1");
        let result = validate(&data, &registration_rules());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0], "Nombre completo debe tener al menos 2 caracteres");
    }

    #[test]
    fn errors_preserve_field_declaration_order() {
        let data = filled("", "not-an-email", "corta", "corta");
        let result = validate(&data, &registration_rules());
        assert_eq!(
            result.errors,
            vec![
                "Nombre completo es requerido",
                "Correo electrónico no es válido",
                "Contraseña debe tener al menos 6 caracteres",
                "Confirmar contraseña debe tener al menos 6 caracteres",
            ]
        );
    }

    #[test]
    fn password_mismatch_appends_distinct_error_last() {
        let data = filled("Ana", "a@b.co", "abc123", "abc124");
        let result = validate_with_confirmation(&data, &registration_rules(), "clave", "confirmarClave");
        assert!(!result.is_valid);
        assert_eq!(result.errors.last().unwrap(), MSG_PASSWORD_MISMATCH);
    }

    #[test]
    fn mismatch_is_independent_of_per_field_results() {
        // Both passwords fail min_length and also differ: per-field errors
        // plus the cross-field one.
        let data = filled("Ana", "a@b.co", "abc", "abd");
        let result = validate_with_confirmation(&data, &registration_rules(), "clave", "confirmarClave");
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.errors.last().unwrap(), MSG_PASSWORD_MISMATCH);
    }

    #[test]
    fn empty_confirmation_skips_the_cross_field_rule() {
        // The required rule already covers the empty field; no duplicate
        // mismatch noise.
        let data = filled("Ana", "a@b.co", "abc123", "");
        let result = validate_with_confirmation(&data, &registration_rules(), "clave", "confirmarClave");
        assert!(!result.is_valid);
        assert!(result.errors.iter().all(|e| e != MSG_PASSWORD_MISMATCH));
    }

    #[test]
    fn email_rule_examples_from_the_wild() {
        let rules = RuleSet::new().field("correo", FieldRule::required("Correo electrónico").email());
        let mut data = FormData::new();
        data.insert("correo", "not-an-email");
        assert!(!validate(&data, &rules).is_valid);
        data.insert("correo", "a@b.co");
        assert!(validate(&data, &rules).is_valid);
    }

    #[test]
    fn optional_empty_field_is_skipped_entirely() {
        let rules = RuleSet::new().field(
            "apodo",
            FieldRule { required: false, min_length: Some(3), email: false, label: "Apodo".into() },
        );
        let data = FormData::new();
        let result = validate(&data, &rules);
        assert!(result.is_valid);
    }
}
