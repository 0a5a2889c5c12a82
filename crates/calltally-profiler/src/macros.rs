//! Profiling macros.

/// Bare name of the enclosing function.
///
/// Inside a closure this is the function that defines the closure.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __calltally_here() {}
        fn __calltally_type_name<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let path = __calltally_type_name(__calltally_here);
        $crate::bare_function_name(path.strip_suffix("::__calltally_here").unwrap_or(path))
    }};
}

/// [`CallSiteKey`](crate::CallSiteKey) for the current source location.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSiteKey::new(::core::file!(), $crate::function_name!(), ::core::line!())
    };
}

/// Profile the rest of the enclosing block.
///
/// Without arguments the measurement goes to the [global](crate::global)
/// profiler; otherwise to the given one.
///
/// When the `profiling` feature is disabled, this macro expands to nothing.
///
/// # Examples
///
/// ```ignore
/// use calltally_profiler::profile_scope;
///
/// fn build_index() {
///     profile_scope!();
///     // ... measured code
/// } // timing recorded here
/// ```
///
/// With an explicit profiler:
/// ```ignore
/// let profiler = calltally_profiler::Profiler::new();
/// profile_scope!(profiler);
/// ```
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! profile_scope {
    () => {
        let _calltally_guard = $crate::ProfileGuard::new($crate::global(), $crate::call_site!());
    };
    ($profiler:expr) => {
        let _calltally_guard = ($profiler).scope($crate::call_site!());
    };
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    () => {};
    ($profiler:expr) => {
        let _ = &$profiler;
    };
}

/// Write the global profiler's report to stdout, or to a file.
///
/// Evaluates to a [`Result`](crate::Result).
#[macro_export]
macro_rules! profiler_report {
    () => {
        $crate::report()
    };
    ($path:expr) => {
        $crate::global().write_report_to_file($path)
    };
}
