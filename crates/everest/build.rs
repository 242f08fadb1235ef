//! Rebuild whenever the injected version changes, so that `env!`/`option_env!`
//! lookups in the crate are never stale.

fn main() {
    println!("cargo:rerun-if-env-changed=EVEREST_CLI_VERSION");
}
