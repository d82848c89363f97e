/// A boxed error type for shell and registry operations.
///
/// Win32 failures are formatted into strings and boxed; callers that
/// must never fail absorb them into a default instead of propagating.
pub type HidebarResult<T> = Result<T, Box<dyn std::error::Error>>;
