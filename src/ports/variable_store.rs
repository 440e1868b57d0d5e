/// Port for the host's shared variable store.
///
/// Implementations replace any existing value under `name`. Writes go through
/// `&self` so one store can be shared across invocations.
pub trait VariableStore {
    /// Set `name` to `value`.
    fn set_var(&self, name: &str, value: String);
}

impl<T: VariableStore + ?Sized> VariableStore for &T {
    fn set_var(&self, name: &str, value: String) {
        (**self).set_var(name, value)
    }
}
