//! Format output dispatch helpers

/// Macro to dispatch output by format with minimal boilerplate.
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => { output_json()? },
///     human => { output_human(); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
        }
    };
}
