//! Message builders behind the printing macros.
//!
//! The macros evaluate their arguments and build the whole message before
//! the debug stream is locked, so arguments may print themselves.

use std::fmt::{Debug, Write};

/// Strip the helper item and closure segments from a `type_name` path.
#[doc(hidden)]
#[must_use]
pub fn function_path(type_name: &'static str, helper: &str) -> &'static str {
    let mut path = type_name
        .strip_suffix(helper)
        .and_then(|p| p.strip_suffix("::"))
        .unwrap_or(type_name);
    while let Some(rest) = path.strip_suffix("::{{closure}}") {
        path = rest;
    }
    path
}

/// `file:line: function`
#[must_use]
pub fn location(file: &str, line: u32, function: &str) -> String {
    format!("{file}:{line}: {function}")
}

/// Location on a line of its own.
#[must_use]
pub fn checkpoint(location: &str) -> String {
    format!("{location}\n")
}

/// Location followed by an indented message.
#[must_use]
pub fn message(location: &str, message: std::fmt::Arguments<'_>) -> String {
    format!("{location}:\n\t{message}\n")
}

/// Location followed by one `name = value` row per variable.
#[must_use]
pub fn show(location: &str, variables: &[(&str, &dyn Debug)]) -> String {
    let mut out = format!("{location}:");
    for (name, value) in variables {
        let _ = write!(out, "\n\t{name} = {value:?}");
    }
    out.push('\n');
    out
}

/// Elements with their index, one per row.
#[must_use]
pub fn container<I>(location: &str, name: &str, items: I) -> String
where
    I: IntoIterator,
    I::Item: Debug,
{
    let mut out = format!("{location}:\n\t{name} = [\n\t");
    for (i, item) in items.into_iter().enumerate() {
        let _ = write!(out, "{i:>6}: {item:?}\n\t");
    }
    out.push_str("]\n");
    out
}

/// Elements separated by commas on one line.
#[must_use]
pub fn container_flat<I>(location: &str, name: &str, items: I) -> String
where
    I: IntoIterator,
    I::Item: Debug,
{
    let mut out = format!("{location}:\n\t{name} = [");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item:?}");
    }
    out.push_str("]\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOC: &str = "src/main.rs:7: app::main";

    #[test]
    fn function_path_drops_helper_and_closures() {
        assert_eq!(
            function_path("app::run::{{closure}}::__here", "__here"),
            "app::run"
        );
        assert_eq!(function_path("app::main::__here", "__here"), "app::main");
    }

    #[test]
    fn show_lists_each_variable() {
        let i = 3;
        let name = "Bar baz!";
        let doubled = i * 2;
        let out = show(
            LOC,
            &[
                ("i", &i as &dyn Debug),
                ("name", &name as &dyn Debug),
                ("i * 2", &doubled as &dyn Debug),
            ],
        );
        assert_eq!(
            out,
            "src/main.rs:7: app::main:\n\ti = 3\n\tname = \"Bar baz!\"\n\ti * 2 = 6\n"
        );
    }

    #[test]
    fn message_is_indented() {
        let out = message(LOC, format_args!("Hello {}!", "world"));
        assert_eq!(out, "src/main.rs:7: app::main:\n\tHello world!\n");
    }

    #[test]
    fn container_rows_are_indexed() {
        let out = container(LOC, "foo", [100, 101]);
        assert_eq!(
            out,
            "src/main.rs:7: app::main:\n\tfoo = [\n\t     0: 100\n\t     1: 101\n\t]\n"
        );
    }

    #[test]
    fn flat_container_is_comma_separated() {
        assert_eq!(
            container_flat(LOC, "foo", &[1, 2, 3]),
            "src/main.rs:7: app::main:\n\tfoo = [1, 2, 3]\n"
        );
        assert_eq!(
            container_flat(LOC, "empty", Vec::<u8>::new()),
            "src/main.rs:7: app::main:\n\tempty = []\n"
        );
    }

    #[test]
    fn checkpoint_is_just_the_location() {
        assert_eq!(checkpoint(LOC), "src/main.rs:7: app::main\n");
    }
}
