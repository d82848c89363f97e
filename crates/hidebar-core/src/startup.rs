//! Launch-at-login registration through a per-user run key.
//!
//! The run key stores one value per application, mapping its name to
//! an executable path. Registration only counts as enabled when that
//! path still points at the running executable, so a stale entry left
//! behind after the program moved reads as disabled.

use std::path::{Path, PathBuf};

use crate::HidebarResult;
use crate::{log_debug, log_warn};

/// Per-user run key storage.
pub trait RunKey {
    /// Reads a string value. `None` when the key or value is missing.
    fn read(&self, name: &str) -> Option<String>;

    /// Writes a string value, creating it if needed.
    fn write(&self, name: &str, value: &str) -> HidebarResult<()>;

    /// Deletes a value. Deleting a value that does not exist succeeds.
    fn delete(&self, name: &str) -> HidebarResult<()>;
}

/// Compares two paths the way Windows compares file names: ordinal,
/// ignoring case, with no normalisation.
///
/// Characters are compared one to one, so `ß` never equals `SS`.
pub fn paths_match(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars()
            .zip(b.chars())
            .all(|(x, y)| x == y || simple_upper(x) == simple_upper(y))
}

/// Uppercase mapping that never changes the length: characters whose
/// uppercase form expands to several characters map to themselves.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Picks the executable path to register.
///
/// `primary` is the OS-reported image path; `fallback` is the path the
/// process was launched with. Empty candidates are skipped. A relative
/// fallback is made absolute against `cwd`.
pub fn resolve_executable_path(
    primary: Option<PathBuf>,
    fallback: Option<PathBuf>,
    cwd: Option<&Path>,
) -> Option<String> {
    if let Some(path) = primary.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path.to_string_lossy().into_owned());
    }

    let path = fallback.filter(|p| !p.as_os_str().is_empty())?;
    let path = match cwd {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    };
    Some(path.to_string_lossy().into_owned())
}

/// Resolves the running executable from the process environment.
pub fn current_executable() -> Option<String> {
    let cwd = std::env::current_dir().ok();
    resolve_executable_path(
        std::env::current_exe().ok(),
        std::env::args_os().next().map(PathBuf::from),
        cwd.as_deref(),
    )
}

/// Reads and updates the launch-at-login entry for one application.
pub struct StartupRegistrar<K, L> {
    key: K,
    name: String,
    locate: L,
}

impl<K, L> StartupRegistrar<K, L>
where
    K: RunKey,
    L: Fn() -> Option<String>,
{
    /// Creates a registrar storing its entry under `name`.
    ///
    /// `locate` is called on every operation; the path is never cached.
    pub fn new(key: K, name: impl Into<String>, locate: L) -> Self {
        Self {
            key,
            name: name.into(),
            locate,
        }
    }

    /// Returns whether the entry exists and points at this executable.
    pub fn is_enabled(&self) -> bool {
        let Some(stored) = self.key.read(&self.name).filter(|v| !v.is_empty()) else {
            return false;
        };
        let Some(current) = (self.locate)() else {
            return false;
        };
        paths_match(&stored, &current)
    }

    /// Registers or unregisters this executable.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn set(&self, enabled: bool) {
        let result = if enabled {
            self.register()
        } else {
            self.key.delete(&self.name)
        };
        match result {
            Ok(()) => log_debug!("startup entry {}", if enabled { "written" } else { "removed" }),
            Err(e) => log_warn!("could not update startup entry: {e}"),
        }
    }

    /// Flips the registration and returns the state read back afterwards.
    ///
    /// A write that fails leaves the result unchanged.
    pub fn toggle(&self) -> bool {
        self.set(!self.is_enabled());
        self.is_enabled()
    }

    /// Returns the underlying run key.
    pub fn key(&self) -> &K {
        &self.key
    }

    fn register(&self) -> HidebarResult<()> {
        let path = (self.locate)()
            .filter(|p| !p.is_empty())
            .ok_or("could not resolve executable path")?;
        self.key.write(&self.name, &path)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    const EXE: &str = r"C:\Tools\Hidebar\hidebar.exe";

    /// In-memory run key. `None` models a key that cannot be opened.
    struct FakeRunKey {
        values: RefCell<Option<HashMap<String, String>>>,
    }

    impl FakeRunKey {
        fn empty() -> Self {
            Self {
                values: RefCell::new(Some(HashMap::new())),
            }
        }

        fn missing() -> Self {
            Self {
                values: RefCell::new(None),
            }
        }

        fn with(name: &str, value: &str) -> Self {
            let key = Self::empty();
            key.values
                .borrow_mut()
                .as_mut()
                .unwrap()
                .insert(name.into(), value.into());
            key
        }

        fn get(&self, name: &str) -> Option<String> {
            self.values.borrow().as_ref()?.get(name).cloned()
        }
    }

    impl RunKey for FakeRunKey {
        fn read(&self, name: &str) -> Option<String> {
            self.get(name)
        }

        fn write(&self, name: &str, value: &str) -> HidebarResult<()> {
            let mut values = self.values.borrow_mut();
            let values = values.as_mut().ok_or("key missing")?;
            values.insert(name.into(), value.into());
            Ok(())
        }

        fn delete(&self, name: &str) -> HidebarResult<()> {
            let mut values = self.values.borrow_mut();
            let values = values.as_mut().ok_or("key missing")?;
            values.remove(name);
            Ok(())
        }
    }

    fn exe() -> Option<String> {
        Some(EXE.into())
    }

    #[test]
    fn enable_then_query_reports_enabled() {
        // Arrange
        let registrar = StartupRegistrar::new(FakeRunKey::empty(), "Hidebar", exe);

        // Act
        registrar.set(true);

        // Assert
        assert!(registrar.is_enabled());
        assert_eq!(registrar.key().get("Hidebar").as_deref(), Some(EXE));
    }

    #[test]
    fn disable_then_query_reports_disabled() {
        // Arrange
        let registrar = StartupRegistrar::new(FakeRunKey::with("Hidebar", EXE), "Hidebar", exe);

        // Act
        registrar.set(false);

        // Assert
        assert!(!registrar.is_enabled());
        assert_eq!(registrar.key().get("Hidebar"), None);
    }

    #[test]
    fn relocated_executable_reads_disabled() {
        // Arrange
        let key = FakeRunKey::with("Hidebar", r"D:\Old\hidebar.exe");
        let registrar = StartupRegistrar::new(key, "Hidebar", exe);

        // Act / Assert
        assert!(!registrar.is_enabled());
    }

    #[test]
    fn stored_path_matches_regardless_of_case() {
        // Arrange
        let key = FakeRunKey::with("Hidebar", &EXE.to_uppercase());
        let registrar = StartupRegistrar::new(key, "Hidebar", exe);

        // Act / Assert
        assert!(registrar.is_enabled());
    }

    #[test]
    fn disabling_without_entry_is_harmless() {
        // Arrange
        let registrar = StartupRegistrar::new(FakeRunKey::empty(), "Hidebar", exe);

        // Act
        registrar.set(false);

        // Assert
        assert!(!registrar.is_enabled());
    }

    #[test]
    fn empty_value_reads_disabled() {
        // Arrange
        let registrar = StartupRegistrar::new(FakeRunKey::with("Hidebar", ""), "Hidebar", || {
            Some(String::new())
        });

        // Act / Assert
        assert!(!registrar.is_enabled());
    }

    #[test]
    fn missing_key_reads_disabled_and_skips_writes() {
        // Arrange
        let registrar = StartupRegistrar::new(FakeRunKey::missing(), "Hidebar", exe);

        // Act
        registrar.set(true);

        // Assert
        assert!(!registrar.is_enabled());
    }

    #[test]
    fn unresolved_executable_is_not_registered() {
        // Arrange
        let registrar = StartupRegistrar::new(FakeRunKey::empty(), "Hidebar", || None);

        // Act
        registrar.set(true);

        // Assert
        assert!(!registrar.is_enabled());
        assert_eq!(registrar.key().get("Hidebar"), None);
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        // Arrange
        let registrar = StartupRegistrar::new(FakeRunKey::empty(), "Hidebar", exe);

        // Act / Assert
        assert!(registrar.toggle());
        assert!(registrar.is_enabled());
        assert!(!registrar.toggle());
        assert!(!registrar.is_enabled());
    }

    #[test]
    fn toggle_without_key_reports_disabled() {
        // Arrange
        let registrar = StartupRegistrar::new(FakeRunKey::missing(), "Hidebar", exe);

        // Act
        let enabled = registrar.toggle();

        // Assert
        assert!(!enabled);
    }

    #[test]
    fn toggle_replaces_foreign_entry() {
        // Arrange
        let key = FakeRunKey::with("Hidebar", r"D:\Old\hidebar.exe");
        let registrar = StartupRegistrar::new(key, "Hidebar", exe);

        // Act
        let enabled = registrar.toggle();

        // Assert
        assert!(enabled);
        assert_eq!(registrar.key().get("Hidebar").as_deref(), Some(EXE));
    }

    #[test]
    fn paths_match_is_exact_apart_from_case() {
        assert!(paths_match(r"c:\apps\x.exe", r"C:\APPS\X.EXE"));
        assert!(paths_match("ä", "Ä"));
        assert!(!paths_match(r"C:\apps\x.exe ", r"C:\apps\x.exe"));
        assert!(!paths_match(r"C:\apps\x.exe", r"C:/apps/x.exe"));
    }

    #[test]
    fn paths_match_never_expands_characters() {
        assert!(!paths_match(r"C:\Straße\hidebar.exe", r"C:\STRASSE\hidebar.exe"));
        assert!(!paths_match("\u{FB03}.exe", "FFI.exe"));
        assert!(paths_match(r"C:\Straße\hidebar.exe", r"C:\STRAßE\HIDEBAR.EXE"));
    }

    #[test]
    fn relocated_to_expanded_spelling_reads_disabled() {
        // Arrange
        let key = FakeRunKey::with("Hidebar", r"C:\Straße\hidebar.exe");
        let registrar = StartupRegistrar::new(key, "Hidebar", || {
            Some(r"C:\STRASSE\hidebar.exe".to_string())
        });

        // Act / Assert
        assert!(!registrar.is_enabled());
    }

    #[test]
    fn resolve_prefers_process_image_path() {
        // Act
        let path = resolve_executable_path(
            Some(PathBuf::from("/opt/hidebar/hidebar")),
            Some(PathBuf::from("hidebar")),
            Some(Path::new("/home/user")),
        );

        // Assert
        assert_eq!(path.as_deref(), Some("/opt/hidebar/hidebar"));
    }

    #[test]
    fn resolve_falls_back_when_image_path_is_empty() {
        // Act
        let path = resolve_executable_path(
            Some(PathBuf::new()),
            Some(PathBuf::from("hidebar")),
            Some(Path::new("/home/user")),
        );

        // Assert
        assert_eq!(
            path.map(PathBuf::from),
            Some(Path::new("/home/user").join("hidebar"))
        );
    }

    #[test]
    fn resolve_returns_none_without_candidates() {
        assert_eq!(resolve_executable_path(None, None, None), None);
    }
}
