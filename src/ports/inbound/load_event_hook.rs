/// LoadEventHook - Inbound port called by the host's code-loading path
///
/// The host invokes this once per loaded code unit, possibly from many
/// threads at once. Implementations only observe: the content is handed back
/// unchanged and the call must return promptly without raising.
pub trait LoadEventHook: Send + Sync {
    /// Observes a code unit loaded from `origin`
    ///
    /// # Arguments
    /// * `origin` - Location the code unit was loaded from, if the host knows one
    /// * `content` - The loaded bytes
    ///
    /// # Returns
    /// `content`, untouched
    fn notify<'a>(&self, origin: Option<&str>, content: &'a [u8]) -> &'a [u8];
}
