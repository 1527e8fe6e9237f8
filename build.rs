//! Build script for secure-ecies.
//!
//! This emits compile-time warnings for security-relevant feature flags.

fn main() {
    // Emit a compile-time warning when the software keyring backend is enabled
    #[cfg(feature = "os-keyring")]
    {
        // Note: Using single-colon syntax for MSRV 1.75.0 compatibility
        println!("cargo:warning=SECURITY NOTE: The 'os-keyring' feature is enabled.");
        println!("cargo:warning=KeyringStore keeps the P-256 scalar in the platform keyring, not in a hardware enclave.");
        println!("cargo:warning=The crate API never exports it, but the protection level is that of the OS keyring.");
    }
}
