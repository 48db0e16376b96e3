use core::fmt::Display;
use core::num::NonZeroUsize;

/// The kinds of reference-like types that can be in a nil state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ReferenceKind {
    Function,
    Channel,
    /// A dynamic holder, e.g. `dyn Any` or an `Option` of a value type.
    Holder,
    Map,
    Pointer,
    Sequence,
}

/// A handle to some referent, compared by address.
/// A reference without an address is nil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    pub kind: ReferenceKind,
    address: Option<NonZeroUsize>,
}

impl Reference {
    pub fn nil(kind: ReferenceKind) -> Self {
        Reference {
            kind,
            address: None,
        }
    }

    /// Creates a reference to `target`; a null `target` yields a nil reference.
    pub fn to<T: ?Sized>(kind: ReferenceKind, target: *const T) -> Self {
        Reference {
            kind,
            address: NonZeroUsize::new(target.cast::<()>() as usize),
        }
    }

    pub fn is_nil(&self) -> bool {
        self.address.is_none()
    }

    pub fn address(&self) -> Option<usize> {
        self.address.map(NonZeroUsize::get)
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.address() {
            Some(address) => core::write!(f, "{}({address:#x})", self.kind),
            None => core::write!(f, "{}(nil)", self.kind),
        }
    }
}
