use std::env;

use crate::api::{Flag, FlagHandle, ParseError, RegistrationError};
use crate::constant::{is_help_token, MARKER};
use crate::model::Value;
use crate::parser::{
    coerce, help_requested, scan, stage, ConsoleInterface, InvalidConversion, Printer,
    UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The set of command line flags.
///
/// Construct one at program start, register flags, then parse once.
/// Not thread safe: registration, parsing and reading must happen on one thread (or be externally synchronized).
///
/// ### Example
/// ```
/// # use scanflags_core as scanflags;
/// use scanflags::FlagSet;
///
/// let mut flags = FlagSet::new();
/// let name = flags.create("name", "Who to greet.", "world", false).unwrap();
/// let times = flags.create("-times", "How many greetings.", 1u8, false).unwrap();
///
/// // Flags may appear in any position, mixed with other tokens.
/// flags.parse_tokens(&["extra", "-times=3", "more"], false).unwrap();
///
/// assert_eq!(name.get::<String>(), Some("world".to_string()));
/// assert_eq!(times.get::<u8>(), Some(3));
/// ```
pub struct FlagSet {
    flags: Vec<Flag>,
    help: bool,
    parsed: bool,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl Default for FlagSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSet")
            .field("flags", &self.flags)
            .field("help", &self.help)
            .field("parsed", &self.parsed)
            .finish()
    }
}

impl FlagSet {
    /// Create an empty flag set, reporting to the console.
    pub fn new() -> Self {
        Self::with_interface(Printer::terminal(), Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(printer: Printer, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            flags: Vec::default(),
            help: false,
            parsed: false,
            printer,
            user_interface,
        }
    }

    /// Register a flag as a Result.
    ///
    /// The `name` gets a leading `-` when missing.
    /// The type of `default` becomes the type of the flag.
    /// If `announce` is set, a creation report is printed.
    ///
    /// ### Example
    /// ```
    /// # use scanflags_core as scanflags;
    /// use scanflags::{FlagSet, RegistrationError};
    ///
    /// let mut flags = FlagSet::new();
    /// assert!(flags.try_create("ratio", "The ratio.", 1.5f64, false).is_ok());
    /// assert_eq!(
    ///     flags.try_create("", "Nameless.", 1.5f64, false).unwrap_err(),
    ///     RegistrationError::EmptyName,
    /// );
    /// assert_eq!(flags.count(), 1);
    /// ```
    pub fn try_create(
        &mut self,
        name: impl Into<String>,
        usage: impl Into<String>,
        default: impl Into<Value>,
        announce: bool,
    ) -> Result<FlagHandle, RegistrationError> {
        let name = normalize(name.into())?;
        let flag = Flag::new(name, usage.into(), default.into());

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering {flag:?}.");
        }

        if announce {
            self.printer.print_created(&flag, &*self.user_interface);
        }

        let handle = flag.handle();
        self.flags.push(flag);
        Ok(handle)
    }

    /// Register a flag.
    ///
    /// Same as [`FlagSet::try_create`], except an invalid name prints a diagnostic and returns `None`.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        usage: impl Into<String>,
        default: impl Into<Value>,
        announce: bool,
    ) -> Option<FlagHandle> {
        match self.try_create(name, usage, default, announce) {
            Ok(handle) => Some(handle),
            Err(error) => {
                self.user_interface.print_error(&error);
                None
            }
        }
    }

    /// Register a flag, binding its handle into `slot`.
    /// An invalid name prints a diagnostic and leaves `slot` untouched.
    ///
    /// ### Example
    /// ```
    /// # use scanflags_core as scanflags;
    /// use scanflags::{FlagHandle, FlagSet};
    ///
    /// let mut flags = FlagSet::new();
    /// let mut verbose: Option<FlagHandle> = None;
    /// flags.create_var(&mut verbose, "verbose", "Talk more.", false, false);
    ///
    /// flags.parse_tokens(&["-verbose=yes"], false).unwrap();
    /// // Booleans keep their raw text.
    /// assert_eq!(verbose.unwrap().get::<String>(), Some("yes".to_string()));
    /// ```
    pub fn create_var(
        &mut self,
        slot: &mut Option<FlagHandle>,
        name: impl Into<String>,
        usage: impl Into<String>,
        default: impl Into<Value>,
        announce: bool,
    ) {
        if let Some(handle) = self.create(name, usage, default, announce) {
            slot.replace(handle);
        }
    }

    /// The number of registered flags.
    pub fn count(&self) -> usize {
        self.flags.len()
    }

    /// Whether a parse has completed.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Whether a help token (`-h` or `-help`) was seen while parsing.
    pub fn help_requested(&self) -> bool {
        self.help
    }

    /// Run the flag set against the input tokens.
    ///
    /// Each flag takes its value from the first token that starts with the flag name followed by one separator character (ex: `-count=42`).
    /// Tokens may appear in any order, and tokens matching no flag are ignored.
    /// A flag that isn't found, or whose text is empty, takes its default.
    /// The text is then converted to the type of the default (`string` and `bool` flags keep the text).
    ///
    /// Matching is by prefix and every flag scans all tokens, so with flags `-count` and `-counter` the token `-counter=5` matches both.
    /// Flags are matched in registration order.
    ///
    /// If `announce` is set, a parsed report is printed for each flag before its conversion.
    /// If a help token is present, the usage of every flag is printed after parsing.
    ///
    /// On error no flag is modified.
    /// Parsing again re-runs the process, with each flag's current value taking the place of the default when not found.
    ///
    /// ### Example
    /// ```
    /// # use scanflags_core as scanflags;
    /// use scanflags::{FlagSet, ParseError};
    ///
    /// let mut flags = FlagSet::new();
    /// let count = flags.create("count", "How many.", 0i32, false).unwrap();
    ///
    /// assert_eq!(
    ///     flags.parse_tokens(&["-count"], false),
    ///     Err(ParseError::UndefinedFlagProvided { name: "-count".to_string() }),
    /// );
    /// assert!(!flags.parsed());
    ///
    /// flags.parse_tokens(&[], false).unwrap();
    /// assert_eq!(count.get::<i32>(), Some(0));
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str], announce: bool) -> Result<(), ParseError> {
        // 1. Look for the help tokens anywhere in the input.
        let help = help_requested(tokens);

        #[cfg(feature = "tracing_debug")]
        {
            if help {
                debug!("Help requested.");
            }
        }

        // 2. Match every flag against the raw tokens, still as raw strings.
        let mut staged = Vec::with_capacity(self.flags.len());

        for flag in &self.flags {
            let raw = scan(flag.name(), tokens)?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag {} matched {raw:?}.", flag.name());
            }

            staged.push(stage(flag.name(), raw, flag.value(), flag.default_value()));
        }

        // 3. Convert each of the raw strings into the type of the flag.
        let mut converted = Vec::with_capacity(staged.len());

        for (flag, value) in self.flags.iter().zip(staged) {
            if announce {
                self.printer
                    .print_parsed(flag.name(), &value, &*self.user_interface);
            }

            let value = coerce(value, flag.type_tag()).map_err(
                |InvalidConversion { token, type_name }| ParseError::ConversionFailure {
                    name: flag.name().to_string(),
                    token,
                    type_name,
                },
            )?;
            converted.push(value);
        }

        // 4. Only now mutate the flags.
        for (flag, value) in self.flags.iter().zip(converted) {
            flag.assign(value);
        }

        if help {
            self.help = true;
        }

        if self.help {
            for flag in self.flags.iter().filter(|flag| flag.is_set()) {
                self.printer.print_usage(flag, &*self.user_interface);
            }
        }

        self.parsed = true;
        Ok(())
    }

    /// Run the flag set against the Cli [`env::args`] (excluding the program name).
    ///
    /// See [`FlagSet::parse_tokens`] for the parsing rules.
    /// If an error is encountered, it is printed and the process exits (via [`std::process::exit`]) with [`ParseError::exit_code`]:
    /// `2` for a flag given without a value, `1` for a failed conversion.
    pub fn parse(&mut self, announce: bool) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
            announce,
        ) {
            Ok(()) => {}
            Err(error) => {
                self.user_interface.print_error(&error);
                std::process::exit(error.exit_code());
            }
        };
    }

    /// Visit, in lexicographical order of name, the flags that hold a current value.
    pub fn visit(&self, mut visit_fn: impl FnMut(&Flag)) {
        for flag in self.sorted(Flag::is_set) {
            visit_fn(flag);
        }
    }

    /// Visit every flag, in lexicographical order of name.
    pub fn visit_all(&self, mut visit_fn: impl FnMut(&Flag)) {
        for flag in self.sorted(|_| true) {
            visit_fn(flag);
        }
    }

    fn sorted(&self, keep: impl Fn(&Flag) -> bool) -> Vec<&Flag> {
        let mut flags: Vec<&Flag> = self.flags.iter().filter(|flag| keep(*flag)).collect();
        flags.sort_by(|a, b| a.name().cmp(b.name()));
        flags
    }

    /// Find the flag with the bare name (without the leading `-`).
    ///
    /// ### Example
    /// ```
    /// # use scanflags_core as scanflags;
    /// use scanflags::FlagSet;
    ///
    /// let mut flags = FlagSet::new();
    /// flags.create("count", "How many.", 0i32, false);
    ///
    /// assert_eq!(flags.lookup("count").unwrap().name(), "-count");
    /// assert!(flags.lookup("-count").is_none());
    /// assert!(flags.lookup("missing").is_none());
    /// ```
    pub fn lookup(&self, bare_name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.bare_name() == bare_name)
    }

    /// Print, in registration order, each flag's name, type, usage and default.
    pub fn print_defaults(&self) {
        self.printer
            .print_defaults(&self.flags, &*self.user_interface);
    }

    /// Print the creation report for `flag`.
    pub fn print_created(&self, flag: &Flag) {
        self.printer.print_created(flag, &*self.user_interface);
    }

    /// Print the parsed report for `flag`; nothing when it holds no current value.
    pub fn print_parsed(&self, flag: &Flag) {
        if let Some(value) = flag.value() {
            self.printer
                .print_parsed(flag.name(), &value, &*self.user_interface);
        }
    }
}

fn normalize(name: String) -> Result<String, RegistrationError> {
    if name.is_empty() {
        return Err(RegistrationError::EmptyName);
    }

    let name = if name.starts_with(MARKER) {
        name
    } else {
        format!("{MARKER}{name}")
    };

    if is_help_token(&name) {
        return Err(RegistrationError::ReservedName { name });
    }

    Ok(name)
}
