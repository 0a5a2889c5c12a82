//! Printing macros. All output goes to the debug stream.

/// Path of the enclosing function, e.g. `my_app::parser::parse`.
#[macro_export]
macro_rules! enclosing_function {
    () => {{
        fn __calltally_debug_here() {}
        fn __calltally_debug_type_name<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::format::function_path(
            __calltally_debug_type_name(__calltally_debug_here),
            "__calltally_debug_here",
        )
    }};
}

/// `file:line: function` for the invocation site.
#[macro_export]
macro_rules! location {
    () => {
        $crate::format::location(::core::file!(), ::core::line!(), $crate::enclosing_function!())
    };
}

/// Print the current location.
#[macro_export]
macro_rules! checkpoint {
    () => {{
        $crate::stream::emit(&$crate::format::checkpoint(&$crate::location!()));
    }};
}

/// Print the current location and a formatted message.
///
/// ```ignore
/// calltally_debug::message!("retrying {} more times", attempts);
/// ```
#[macro_export]
macro_rules! message {
    ($($arg:tt)+) => {{
        $crate::stream::emit(&$crate::format::message(
            &$crate::location!(),
            ::core::format_args!($($arg)+),
        ));
    }};
}

/// Print each expression with its `Debug` value.
///
/// ```ignore
/// calltally_debug::show!(n, fibonacci(n), n * 2);
/// ```
#[macro_export]
macro_rules! show {
    ($($value:expr),+ $(,)?) => {{
        $crate::stream::emit(&$crate::format::show(
            &$crate::location!(),
            &[$((::core::stringify!($value), &$value as &dyn ::core::fmt::Debug)),+],
        ));
    }};
}

/// Print the elements of a collection, one indexed row each.
#[macro_export]
macro_rules! show_container {
    ($container:expr) => {{
        $crate::stream::emit(&$crate::format::container(
            &$crate::location!(),
            ::core::stringify!($container),
            &$container,
        ));
    }};
}

/// Print the elements of a collection on a single line.
#[macro_export]
macro_rules! show_container_flat {
    ($container:expr) => {{
        $crate::stream::emit(&$crate::format::container_flat(
            &$crate::location!(),
            ::core::stringify!($container),
            &$container,
        ));
    }};
}

/// Hexdump a slice (or anything that derefs to one) of plain-old-data, or
/// at most its first `len` bytes.
#[macro_export]
macro_rules! hexdump {
    (@dump $name:expr, $bytes:expr) => {{
        let mut text = ::std::format!("{}:\n{}:\n", $crate::location!(), $name);
        let mut dump = ::std::vec::Vec::<u8>::new();
        let _ = $crate::hexdump::hexdump(&mut dump, $bytes, $crate::hexdump::DEFAULT_COLUMNS);
        text.push_str(&::std::string::String::from_utf8_lossy(&dump));
        $crate::stream::emit(&text);
    }};
    ($data:expr) => {
        $crate::hexdump!(@dump ::core::stringify!($data), $crate::hexdump::pod_bytes(&$data[..]))
    };
    ($data:expr, $len:expr) => {{
        let bytes = $crate::hexdump::pod_bytes(&$data[..]);
        $crate::hexdump!(
            @dump
            ::core::stringify!($data, $len),
            &bytes[..bytes.len().min($len)]
        )
    }};
}

/// Print the time until the end of the enclosing block.
#[macro_export]
macro_rules! time_it {
    () => {
        let _calltally_timer = $crate::ScopedTimer::new(
            ::std::format!("{}:\n\telapsed time = ", $crate::location!()),
            $crate::DebugStream,
        );
    };
}
