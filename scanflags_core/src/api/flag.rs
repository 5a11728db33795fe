use std::cell::RefCell;
use std::rc::Rc;

use crate::constant::MARKER;
use crate::model::{TypeTag, Value};

type Slot = Rc<RefCell<Option<Value>>>;

/// A registered flag.
///
/// The type of the flag is the type of its default value.
/// The current value is absent until [`FlagSet::parse`](crate::FlagSet::parse) runs.
pub struct Flag {
    name: String,
    usage: String,
    default: Value,
    current: Slot,
}

impl Flag {
    pub(crate) fn new(name: String, usage: String, default: Value) -> Self {
        Self {
            name,
            usage,
            default,
            current: Rc::new(RefCell::new(None)),
        }
    }

    /// The full name, including the leading `-`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without its leading `-`.
    pub fn bare_name(&self) -> &str {
        self.name.strip_prefix(MARKER).unwrap_or(&self.name)
    }

    /// The usage text.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// The default value.
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// The type of the flag (the type of its default).
    pub fn type_tag(&self) -> TypeTag {
        self.default.type_tag()
    }

    /// The current value, if parsed.
    pub fn value(&self) -> Option<Value> {
        self.current.borrow().clone()
    }

    /// Whether the flag holds a current value.
    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub(crate) fn handle(&self) -> FlagHandle {
        FlagHandle {
            slot: self.current.clone(),
        }
    }

    pub(crate) fn assign(&self, value: Value) {
        self.current.borrow_mut().replace(value);
    }
}

impl std::fmt::Debug for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Flag[{t}, {name}, {default}, {current:?}]",
            t = self.type_tag(),
            name = self.name,
            default = self.default,
            current = self.current.borrow(),
        )
    }
}

/// A shared handle onto a flag's current value.
///
/// Returned at registration; read it after [`FlagSet::parse`](crate::FlagSet::parse).
///
/// ### Example
/// ```
/// # use scanflags_core as scanflags;
/// use scanflags::FlagSet;
///
/// let mut flags = FlagSet::new();
/// let count = flags.create("count", "How many.", 0i32, false).unwrap();
/// assert_eq!(count.get::<i32>(), None);
///
/// flags.parse_tokens(&["-count=42"], false).unwrap();
/// assert_eq!(count.get::<i32>(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct FlagHandle {
    slot: Slot,
}

impl FlagHandle {
    /// The current value, if parsed.
    pub fn value(&self) -> Option<Value> {
        self.slot.borrow().clone()
    }

    /// The current value as `T`.
    /// Returns `None` when unparsed, or when the value is not a `T`.
    pub fn get<T: TryFrom<Value>>(&self) -> Option<T> {
        self.value().and_then(|value| T::try_from(value).ok())
    }

    /// Whether the flag holds a current value.
    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }
}
