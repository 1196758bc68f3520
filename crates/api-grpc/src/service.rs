// Re-export the proto module from the shared `api-shared` crate so callers
// can reference `api_grpc::pb`.
pub use api_shared::pb;

use acuity_core::{
    calculate_severity_score, severity_trend_with_threshold, validate_trend_threshold,
    validate_vital_signs, vitals_report, CoreConfig, VitalSigns,
};
use api_shared::auth;
use api_shared::convert::normal_ranges_res;
use api_shared::pb::{
    acuity_server::Acuity, HealthRes, NormalRangesRes, SeverityRes, SeverityTrendReq,
    SeverityTrendRes, ValidationRes, VitalSignsReq, VitalsReportRes,
};
use api_shared::HealthService;
use std::sync::Arc;
use tonic::service::Interceptor;
use tonic::{Request, Response, Status};

/// Authentication interceptor for gRPC requests.
///
/// Every call must carry an `x-api-key` metadata entry equal to the key configured at startup.
#[derive(Clone)]
pub struct ApiKeyInterceptor {
    expected: Arc<str>,
}

impl ApiKeyInterceptor {
    pub fn new(expected: impl Into<Arc<str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Interceptor for ApiKeyInterceptor {
    fn call(&mut self, req: Request<()>) -> Result<Request<()>, Status> {
        let api_key = req
            .metadata()
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| Status::unauthenticated("Missing x-api-key header"))?;

        auth::validate_api_key(api_key, &self.expected)?;
        Ok(req)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AcuityService {
    cfg: Arc<CoreConfig>,
}

impl AcuityService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }
}

#[tonic::async_trait]
impl Acuity for AcuityService {
    async fn health(&self, _req: Request<()>) -> Result<Response<HealthRes>, Status> {
        Ok(Response::new(HealthService::check_health()))
    }

    async fn calculate_severity(
        &self,
        req: Request<VitalSignsReq>,
    ) -> Result<Response<SeverityRes>, Status> {
        let vitals = VitalSigns::from(req.into_inner());
        let result = calculate_severity_score(&vitals);
        Ok(Response::new(SeverityRes::from(&result)))
    }

    async fn validate_vitals(
        &self,
        req: Request<VitalSignsReq>,
    ) -> Result<Response<ValidationRes>, Status> {
        let vitals = VitalSigns::from(req.into_inner());
        Ok(Response::new(validate_vital_signs(&vitals).into()))
    }

    async fn severity_trend(
        &self,
        req: Request<SeverityTrendReq>,
    ) -> Result<Response<SeverityTrendRes>, Status> {
        let req = req.into_inner();
        let threshold = match req.threshold {
            Some(t) => validate_trend_threshold(t).map_err(|e| {
                tracing::error!("Severity trend error: {:?}", e);
                Status::invalid_argument(e.to_string())
            })?,
            None => self.cfg.trend_threshold(),
        };

        let trend = severity_trend_with_threshold(req.previous, req.current, threshold);
        Ok(Response::new(trend.into()))
    }

    async fn vitals_report(
        &self,
        req: Request<VitalSignsReq>,
    ) -> Result<Response<VitalsReportRes>, Status> {
        let vitals = VitalSigns::from(req.into_inner());
        Ok(Response::new(VitalsReportRes::from(&vitals_report(&vitals))))
    }

    async fn normal_ranges(&self, _req: Request<()>) -> Result<Response<NormalRangesRes>, Status> {
        Ok(Response::new(normal_ranges_res()))
    }
}
