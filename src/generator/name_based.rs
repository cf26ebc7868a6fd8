//! Name-based (version 3 and version 5) generation.

use crate::fields::Fields;
use crate::kind::UuidType;
use crate::{TagUri, Uuid};
use sha1::{Digest as _, Sha1};

/// The digest a [`NameBasedGenerator`] hashes names with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, producing version 3 UUIDs.
    Md5,
    /// SHA-1, producing version 5 UUIDs.
    Sha1,
}

/// Generates name-based UUIDs by hashing an optional namespace UUID followed by a name.
///
/// The same namespace and name always produce the same UUID. The generator keeps no state
/// between calls and can be shared freely.
///
/// # Examples
///
/// ```rust
/// use timeuuid::{HashAlgorithm, NameBasedGenerator, Uuid};
///
/// let g = NameBasedGenerator::new(Some(Uuid::NAMESPACE_DNS), HashAlgorithm::Sha1);
/// assert_eq!(
///     g.generate_str("python.org").to_string(),
///     "886313e1-3b8a-5372-9b90-0c9aee199e5d"
/// );
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NameBasedGenerator {
    namespace: Option<Uuid>,
    algorithm: HashAlgorithm,
}

impl NameBasedGenerator {
    /// Creates a generator. Without a namespace only the name is hashed.
    pub const fn new(namespace: Option<Uuid>, algorithm: HashAlgorithm) -> Self {
        Self {
            namespace,
            algorithm,
        }
    }

    /// Returns the namespace prepended to every name.
    pub const fn namespace(&self) -> Option<Uuid> {
        self.namespace
    }

    /// Returns [`UuidType::NameBasedMd5`] or [`UuidType::NameBasedSha1`].
    pub const fn uuid_type(&self) -> UuidType {
        match self.algorithm {
            HashAlgorithm::Md5 => UuidType::NameBasedMd5,
            HashAlgorithm::Sha1 => UuidType::NameBasedSha1,
        }
    }

    /// Generates the UUID for a name given as raw bytes.
    pub fn generate(&self, name: &[u8]) -> Uuid {
        let prefix = self.namespace.as_ref().map_or(&[][..], |ns| &ns.as_bytes()[..]);
        match self.algorithm {
            HashAlgorithm::Md5 => {
                let mut context = md5::Context::new();
                context.consume(prefix);
                context.consume(name);
                Uuid::from_fields(Fields::NameBasedMd5(context.compute().0))
            }
            HashAlgorithm::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(prefix);
                hasher.update(name);
                let digest = hasher.finalize();

                let mut bytes = [0u8; 16];
                bytes.copy_from_slice(&digest[..16]);
                Uuid::from_fields(Fields::NameBasedSha1(bytes))
            }
        }
    }

    /// Generates the UUID for the UTF-8 encoding of a name.
    pub fn generate_str(&self, name: &str) -> Uuid {
        self.generate(name.as_bytes())
    }

    /// Generates the UUID for the string representation of a tag URI.
    pub fn generate_tag_uri(&self, tag: &TagUri) -> Uuid {
        self.generate_str(tag.as_str())
    }
}
