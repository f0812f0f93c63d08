use derive_more::{Deref, Display, FromStr};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

// The three identifier roles every engine call distinguishes. Keeping them as
// separate newtypes stops a caller from passing an actor where a tenant
// partition key is expected.
macro_rules! ulid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, Deref, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq,
            PartialOrd, Serialize,
        )]
        #[repr(transparent)]
        pub struct $name(Ulid);

        impl Default for $name {
            fn default() -> Self {
                Self::NIL
            }
        }

        impl $name {
            /// The all-zero identifier, used as the "unassigned" sentinel.
            pub const NIL: Self = Self(Ulid::nil());

            /// Generate a fresh identifier from the current time and randomness.
            #[must_use]
            pub fn generate() -> Self {
                Self(Ulid::new())
            }

            #[must_use]
            pub const fn from_bytes(bytes: [u8; 16]) -> Self {
                Self(Ulid::from_bytes(bytes))
            }

            #[must_use]
            pub const fn is_nil(self) -> bool {
                self.0.0 == 0
            }
        }

        impl From<Ulid> for $name {
            fn from(ulid: Ulid) -> Self {
                Self(ulid)
            }
        }
    };
}

ulid_id!(
    ///
    /// RecordId
    ///
    /// Surrogate identifier of a persisted entity. Assigned once at insert,
    /// immutable thereafter.
    ///
    RecordId
);

ulid_id!(
    ///
    /// CompanyId
    ///
    /// Tenant partition key. Every entity and every mutating call carries one.
    ///
    CompanyId
);

ulid_id!(
    ///
    /// ActorId
    ///
    /// The authenticated principal a mutation is attributed to in the audit
    /// trail.
    ///
    ActorId
);
