//! # adaptmetric-credentials
//!
//! Resolves which environmental-data backend is authorized by walking an
//! ordered list of credential sources and returning the first one whose
//! payload parses as well-formed service-account credentials:
//!
//! 1. `WARP_GEE_CREDENTIALS` environment variable (managed-agent secret)
//! 2. `GEE_SERVICE_ACCOUNT_JSON` environment variable (legacy)
//! 3. `credentials.json` in the working directory
//! 4. `~/.adaptmetric/credentials.json`
//!
//! Resolution is fail-soft: a source whose payload fails to parse is logged
//! (without the payload) and skipped. An empty chain result is the `none`
//! handle, which callers must treat as "no remote backend available" rather
//! than an error. Handles are never serialized and their key material never
//! appears in `Debug` output.

mod handle;
mod resolver;
mod source;

pub use handle::{CredentialHandle, CredentialSourceName, ServiceAccountKey};
pub use resolver::CredentialResolver;
pub use source::{CredentialSource, EnvSource, FileSource};
