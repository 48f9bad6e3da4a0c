// src/macros.rs

/// Owned copy of a `&str`.
#[macro_export]
macro_rules! s {
    ($text:expr) => {
        <str as ::std::borrow::ToOwned>::to_owned($text)
    };
}

/// Concatenate string-like pieces (`&str`, `&String`) into one `String`.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {
        [$(::std::convert::AsRef::<str>::as_ref(&$part)),+].concat()
    };
}
