//! bpfc_driver: Driver-side glue for the BPF backend.
//!
//! The relocation core assumes nothing from this layer; it exists so the
//! frontend driver has one place to derive target features from the
//! invocation arguments.

/// Derive the ordered list of enabled target features from the driver's
/// argument list.
///
/// Recognizes `-mcpu=<name>` and passes the name through as a feature;
/// everything else is ignored. Returns an empty list when no relevant
/// argument is present.
pub fn target_features(args: &[String]) -> Vec<String> {
    let mut features = Vec::new();
    for arg in args {
        if let Some(cpu) = arg.strip_prefix("-mcpu=") {
            features.push(format!("+{cpu}"));
        }
    }
    features
}
