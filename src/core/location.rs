//! Call-site metadata attached to every event

use std::fmt;
use std::panic::Location;

/// Where a log call was made.
///
/// Captured implicitly, either through `#[track_caller]` on the logger
/// methods or by the logging macros, which also record the enclosing
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationInfo {
    file: &'static str,
    line: u32,
    column: u32,
    function: Option<&'static str>,
}

impl LocationInfo {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            column,
            function: Some(function),
        }
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    ///
    /// Rust does not expose the enclosing function through this path, so
    /// `function()` is `None`; use the macros when it matters.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn function(&self) -> Option<&'static str> {
        self.function
    }
}

impl From<&'static Location<'static>> for LocationInfo {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
            function: None,
        }
    }
}

impl fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(f, "{}:{}:{}:{}", self.file, function, self.line, self.column),
            None => write!(f, "{}:{}:{}", self.file, self.line, self.column),
        }
    }
}

/// Expands to the path of the enclosing function, closures stripped.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Capture a [`LocationInfo`] for the current source position.
///
/// ```
/// use rust_fanout_logger::location;
///
/// # fn main() {
/// let here = location!();
/// assert_eq!(here.file(), file!());
/// assert!(here.function().unwrap().ends_with("main"));
/// # }
/// ```
#[macro_export]
macro_rules! location {
    () => {
        $crate::LocationInfo::new(
            ::std::file!(),
            ::std::line!(),
            ::std::column!(),
            $crate::__function_name!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_reports_this_file() {
        let line = line!() + 1;
        let location = LocationInfo::caller();
        assert_eq!(location.file(), file!());
        assert_eq!(location.line(), line);
        assert!(location.function().is_none());
    }

    #[test]
    fn test_macro_captures_function() {
        let location = crate::location!();
        assert_eq!(location.file(), file!());
        assert_eq!(
            location.function(),
            Some("rust_fanout_logger::core::location::tests::test_macro_captures_function")
        );
    }

    #[test]
    fn test_macro_strips_closures() {
        let location = (|| crate::location!())();
        assert!(location
            .function()
            .unwrap()
            .ends_with("tests::test_macro_strips_closures"));
    }

    #[test]
    fn test_display() {
        let location = LocationInfo::new("src/main.rs", 10, 5, "app::main");
        assert_eq!(location.to_string(), "src/main.rs:app::main:10:5");

        let location = LocationInfo {
            function: None,
            ..location
        };
        assert_eq!(location.to_string(), "src/main.rs:10:5");
    }
}
