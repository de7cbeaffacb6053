//! Registration macro mirroring the registry's convenience overloads

/// Register an error definition.
///
/// ```ignore
/// let a = register_error!(registry, "disk full");                       // critical
/// let b = register_error!(registry, "cache miss", critical: false);
/// let c = register_error!(registry, "io::write failed", "Could not save");
/// let d = register_error!(registry, "io::read failed", "Could not open", critical: false);
/// ```
#[macro_export]
macro_rules! register_error {
    // The two-argument `critical:` arm must come first so `critical: x` is
    // never handed to the expression parser.
    ($registry:expr, $message:expr, critical: $critical:expr) => {
        $registry.register_message_with($message, $critical)
    };

    ($registry:expr, $dev:expr, $user:expr, critical: $critical:expr) => {
        $registry.register($dev, $user, $critical)
    };

    ($registry:expr, $dev:expr, $user:expr) => {
        $registry.register_pair($dev, $user)
    };

    ($registry:expr, $message:expr) => {
        $registry.register_message($message)
    };
}
