//! Source location of a log call

use std::borrow::Cow;

/// Where a log call was issued.
///
/// Built at the call boundary, usually by the [`call_site!`](crate::call_site)
/// macro, and passed by reference into the writer. It is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: Cow<'a, str>,
    pub line: u32,
    pub function: Cow<'a, str>,
}

impl<'a> CallSite<'a> {
    pub fn new(file: impl Into<Cow<'a, str>>, line: u32, function: impl Into<Cow<'a, str>>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

/// Reduce a `type_name` path of a nested marker fn to the enclosing function name.
///
/// `my_crate::module::run::{{closure}}::__f` becomes `run`.
#[doc(hidden)]
pub fn function_name_from_type_name(type_name: &'static str) -> &'static str {
    let path = type_name.strip_suffix("::__f").unwrap_or(type_name);
    let mut path = path;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}
