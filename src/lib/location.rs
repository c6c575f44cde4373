/// Where a log call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub module: &'static str,
    pub function: &'static str,
}

impl SourceLocation {
    pub const fn new(
        file: &'static str,
        line: u32,
        module: &'static str,
        function: &'static str,
    ) -> Self {
        Self {
            file,
            line,
            module,
            function,
        }
    }
}

/// Strips directories from a source path, either separator.
pub fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Turns the `type_name` of a nested item into the path of the function that
/// contains it.
#[doc(hidden)]
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_suffix("::__f").unwrap_or(type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Path of the function this macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::location::enclosing_function(type_name_of(__f))
    }};
}

/// Captures the current file, line, module and enclosing function.
#[macro_export]
macro_rules! here {
    () => {
        $crate::SourceLocation::new(
            ::std::file!(),
            ::std::line!(),
            ::std::module_path!(),
            $crate::__function_name!(),
        )
    };
}
