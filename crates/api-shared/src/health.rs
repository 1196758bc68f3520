use crate::pb::HealthRes;

/// Simple health service that can be used by both gRPC and REST APIs
///
/// The scoring engine has no external dependencies, so being able to answer is the whole check.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Acuity is alive".into(),
        }
    }
}
