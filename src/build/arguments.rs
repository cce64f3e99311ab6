//! Command line assembly for a batch-mode editor run.

use std::fmt;
use std::path::Path;

/// One editor argument: a flag with an optional value.
///
/// Displays as `"<flag> <value>"` or `"<flag>"`. When handed to the child
/// process the flag and value become two separate argv entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildArgument {
    flag: String,
    value: Option<String>,
}

impl BuildArgument {
    /// A flag without a value, e.g. `-quit`
    pub fn flag(flag: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            value: None,
        }
    }

    /// A flag followed by its value, e.g. `-executeMethod Build.Run`
    pub fn with_value(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            value: Some(value.into()),
        }
    }

    /// Returns the flag name
    pub fn name(&self) -> &str {
        &self.flag
    }

    /// Returns the value, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the argv entries for this argument
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.flag.as_str()).chain(self.value.as_deref())
    }
}

impl fmt::Display for BuildArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.flag, value),
            None => f.write_str(&self.flag),
        }
    }
}

/// Ordered arguments for one editor invocation.
///
/// Always starts with `-batchmode -quit -projectPath <path>
/// -executeMethod <method> -logFile <path>`, followed by whatever
/// [`parse_custom_options`] extracted from the extra options string.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_unity::build::BuildArguments;
/// use std::path::Path;
///
/// let args = BuildArguments::new(
///     Path::new("/work/game"),
///     "BuildScript.Perform",
///     Path::new("logs/build_1.log"),
///     "-buildTarget Android -development",
/// );
/// assert_eq!(args.tokens()[5], "-buildTarget Android");
/// assert_eq!(args.tokens()[6], "-development");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildArguments {
    arguments: Vec<BuildArgument>,
}

impl BuildArguments {
    /// Assembles the fixed batch-build flags plus the parsed extra options.
    pub fn new(
        project_path: &Path,
        build_method: &str,
        log_file: &Path,
        custom_options: &str,
    ) -> Self {
        let mut arguments = vec![
            BuildArgument::flag("-batchmode"),
            BuildArgument::flag("-quit"),
            BuildArgument::with_value("-projectPath", project_path.to_string_lossy()),
            BuildArgument::with_value("-executeMethod", build_method),
            BuildArgument::with_value("-logFile", log_file.to_string_lossy()),
        ];
        arguments.extend(parse_custom_options(custom_options));

        Self { arguments }
    }

    /// Returns one display token per argument (`"-flag value"` or `"-flag"`)
    pub fn tokens(&self) -> Vec<String> {
        self.arguments.iter().map(ToString::to_string).collect()
    }

    /// Returns the flat argv list passed to the editor process
    pub fn argv(&self) -> Vec<&str> {
        self.arguments.iter().flat_map(|argument| argument.argv()).collect()
    }
}

impl fmt::Display for BuildArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

/// Re-tokenizes a free-form options string such as `-buildTarget Android -development`.
///
/// The string is split on single spaces. A token starting with `-` is a flag;
/// if the next token exists, is non-empty and does not start with `-`, it is
/// consumed as that flag's value. Any other token is silently dropped, so
/// `"stray -flag"` yields only `-flag`.
///
/// Quoted values containing spaces are not supported.
pub fn parse_custom_options(options: &str) -> Vec<BuildArgument> {
    let mut arguments = Vec::new();
    let mut tokens = options.split(' ').peekable();

    while let Some(token) = tokens.next() {
        if !token.starts_with('-') {
            if !token.is_empty() {
                log::debug!("Dropping custom option token without a flag: {token}");
            }
            continue;
        }

        let value = tokens.next_if(|next| !next.is_empty() && !next.starts_with('-'));
        arguments.push(match value {
            Some(value) => BuildArgument::with_value(token, value),
            None => BuildArgument::flag(token),
        });
    }

    arguments
}
