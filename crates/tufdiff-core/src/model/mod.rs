pub mod root;

pub use root::{
    parse_root_envelope_bytes, KeyRecord, RoleRecord, RootMetadata, SignatureEntry,
    SignedRootEnvelope,
};
