/// # Examples
/// ```
/// use packed_word::common::log_format::LogFormat;
///
/// let fn_message = LogFormat::call("LinePointer", "new", &["'1024'".to_string()]);
/// assert_eq!(fn_message, "LinePointer::new('1024')");
/// ```
pub struct LogFormat;

impl LogFormat {

    pub fn call(class: &str, fn_name: &str, args: &[String]) -> String {
        let args_str = args.join(", ");
        format!("{}::{}({})", class, fn_name, args_str)
    }

    /// Format string argument for log output
    ///
    /// # Examples
    /// ```
    /// use packed_word::common::log_format::LogFormat;
    ///
    /// assert_eq!(LogFormat::format_str_arg("offset"), "'offset'");
    /// ```
    pub fn format_str_arg(s: &str) -> String {
        if s.len() > 50 {
            format!("'{}'...", &s[..47])
        } else {
            format!("'{}'", s)
        }
    }
}

/// Log macro: fn call
///
/// # Examples
/// ```ignore
/// use crate::fn_log;
///
/// fn_log!("LinePointer", "new", "1024");
/// // Logs: LinePointer::new('1024')
/// ```
#[macro_export]
macro_rules! fn_log {
    ($class:expr, $fun:expr $(, $arg:expr)*) => {{
        #[cfg(feature = "logging")]
        {
            let args: Vec<String> = vec![
                $(
                    $crate::common::log_format::LogFormat::format_str_arg($arg),
                )*
            ];
            log::debug!("{}", $crate::common::log_format::LogFormat::call($class, $fun, &args));
        }
    }};
}
