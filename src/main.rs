// secure-ecies demo
//
// Parses CLI arguments, initializes structured logging (with a filter that
// never emits key material), runs the key generation / ECIES round trip once
// and prints the results.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use secure_ecies::core::Algorithm;
use secure_ecies::demo::{self, DemoConfig, DEFAULT_MESSAGE, DEFAULT_TAG};
use secure_ecies::keystore::{InMemoryKeyStore, KeyStore};

/// Generate a protected P-256 key, export its public key and run an ECIES
/// encrypt/decrypt round trip.
#[derive(Debug, Parser)]
#[command(name = "secure-ecies-demo", version, about)]
struct Cli {
    /// Application tag the private key is stored under.
    #[arg(long, default_value = DEFAULT_TAG)]
    tag: String,

    /// Message to encrypt.
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    message: String,

    /// Use the fixed-IV ECIES variant instead of the variable-IV one.
    #[arg(long)]
    fixed_iv: bool,

    /// Store the key in the platform keyring instead of process memory.
    #[cfg(feature = "os-keyring")]
    #[arg(long)]
    keyring: bool,
}

impl Cli {
    fn config(&self) -> DemoConfig {
        DemoConfig {
            tag: self.tag.clone(),
            message: self.message.clone(),
            algorithm: if self.fixed_iv {
                Algorithm::EciesCofactorX963Sha256AesGcm
            } else {
                Algorithm::EciesCofactorVariableIvX963Sha256AesGcm
            },
        }
    }

    fn store(&self) -> Box<dyn KeyStore> {
        #[cfg(feature = "os-keyring")]
        {
            if self.keyring {
                return Box::new(secure_ecies::keystore::KeyringStore::new());
            }
        }
        Box::new(InMemoryKeyStore::new())
    }
}

fn main() {
    // RUST_LOG=secure_ecies=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("secure_ecies=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let store = cli.store();
    let report = demo::run(store.as_ref(), &cli.config());

    print!("{report}");

    if !report.round_trip_ok() {
        std::process::exit(1);
    }
}
