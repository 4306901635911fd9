/// Lifecycle of one form submission. Both terminal states hand back to
/// `Idle` before `submit` returns, so the form is always editable for a
/// retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}
