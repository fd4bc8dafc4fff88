use std::sync::Arc;

use models::{CreateEmployeeInput, Employee};
use tracing::{error, info, instrument, warn};

use crate::employee::ranking::{self, TOP_EARNERS_LIMIT};
use crate::employee::upstream::EmployeeUpstream;
use crate::errors::ServiceError;

/// Stateless read-through service over the upstream employee store.
///
/// Read operations come in pairs: `try_*` returns the upstream failure, the
/// plain variant logs it and collapses it to an empty/absent/zero result.
#[derive(Clone)]
pub struct EmployeeService {
    upstream: Arc<dyn EmployeeUpstream>,
}

impl EmployeeService {
    pub fn new(upstream: Arc<dyn EmployeeUpstream>) -> Self { Self { upstream } }

    pub async fn try_list_all(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.upstream.fetch_all().await?)
    }

    /// Whole collection in upstream order; empty on any failure.
    pub async fn list_all(&self) -> Vec<Employee> {
        match self.try_list_all().await {
            Ok(list) => list,
            Err(e) => {
                error!(error = %e, "error fetching employees");
                Vec::new()
            }
        }
    }

    pub async fn try_get_by_id(&self, id: &str) -> Result<Option<Employee>, ServiceError> {
        Ok(self.upstream.fetch_one(id).await?)
    }

    /// `None` for both "no such id" and "upstream failed".
    pub async fn get_by_id(&self, id: &str) -> Option<Employee> {
        match self.try_get_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                error!(%id, error = %e, "employee lookup failed");
                None
            }
        }
    }

    pub async fn try_search_by_name(&self, needle: &str) -> Result<Vec<Employee>, ServiceError> {
        let all = self.upstream.fetch_all().await?;
        Ok(ranking::filter_by_name(all, needle))
    }

    pub async fn search_by_name(&self, needle: &str) -> Vec<Employee> {
        info!(search = %needle, "searching employees by name");
        match self.try_search_by_name(needle).await {
            Ok(hits) => hits,
            Err(e) => {
                error!(search = %needle, error = %e, "error while searching by name");
                Vec::new()
            }
        }
    }

    pub async fn try_highest_salary(&self) -> Result<i64, ServiceError> {
        let all = self.upstream.fetch_all().await?;
        Ok(ranking::highest_salary(&all))
    }

    /// 0 means "no employees" or "upstream failed"; the two are not told apart.
    pub async fn highest_salary(&self) -> i64 {
        match self.try_highest_salary().await {
            Ok(max) => max,
            Err(e) => {
                error!(error = %e, "error while fetching the highest salary");
                0
            }
        }
    }

    pub async fn try_top_earner_names(&self) -> Result<Vec<String>, ServiceError> {
        let all = self.upstream.fetch_all().await?;
        Ok(ranking::top_earner_names(&all, TOP_EARNERS_LIMIT))
    }

    pub async fn top_earner_names(&self) -> Vec<String> {
        match self.try_top_earner_names().await {
            Ok(names) => names,
            Err(e) => {
                error!(error = %e, "error while ranking top earners");
                Vec::new()
            }
        }
    }

    /// Forward a boundary-validated input; returns the record as the upstream stored it.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee, ServiceError> {
        match self.upstream.create(input).await {
            Ok(created) => {
                info!(id = %created.id, "created employee");
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "create employee failed");
                Err(ServiceError::CreateFailed(e.to_string()))
            }
        }
    }

    /// Resolve `id` to a name, then ask the upstream to delete by that name.
    ///
    /// The two calls are not atomic. A rename or removal between them is not
    /// detected; whatever the upstream does with the stale name stands.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<String, ServiceError> {
        let name = match self.upstream.fetch_one(id).await {
            Ok(Some(found)) if found.has_name() => found.name,
            Ok(_) => {
                warn!(%id, "delete requested for unknown or unnamed employee");
                return Err(ServiceError::not_found(id));
            }
            Err(e) if e.is_not_found() => return Err(ServiceError::not_found(id)),
            Err(e) => return Err(ServiceError::DeleteFailed(e.to_string())),
        };

        self.upstream
            .delete_by_name(&name)
            .await
            .map_err(|e| ServiceError::DeleteFailed(e.to_string()))?;

        info!(%id, %name, "deleted employee");
        Ok(format!("Employee {name} deleted successfully."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UpstreamError;
    use crate::test_support::{employee, Call, FakeUpstream};

    fn service(fake: &Arc<FakeUpstream>) -> EmployeeService {
        EmployeeService::new(fake.clone())
    }

    #[tokio::test]
    async fn list_all_passes_upstream_order_through() {
        let rows = vec![employee("b", "Bob", 2), employee("a", "Ann", 1)];
        let fake = Arc::new(FakeUpstream::with(rows.clone()));
        let svc = service(&fake);

        let first = svc.list_all().await;
        let second = svc.list_all().await;
        assert_eq!(first, rows);
        assert_eq!(first, second);
        assert_eq!(fake.count(|c| *c == Call::FetchAll), 2);
    }

    #[tokio::test]
    async fn reads_collapse_upstream_failures() {
        let fake = Arc::new(FakeUpstream::down(UpstreamError::Status(503)));
        let svc = service(&fake);

        assert!(svc.list_all().await.is_empty());
        assert!(svc.search_by_name("a").await.is_empty());
        assert_eq!(svc.highest_salary().await, 0);
        assert!(svc.top_earner_names().await.is_empty());
        assert!(svc.get_by_id("1").await.is_none());
        // one attempt per operation, no retries
        assert_eq!(fake.calls().len(), 5);
    }

    #[tokio::test]
    async fn strict_variants_expose_the_failure() {
        let fake = Arc::new(FakeUpstream::down(UpstreamError::Decode("eof".into())));
        let svc = service(&fake);

        assert!(matches!(
            svc.try_list_all().await,
            Err(ServiceError::Upstream(UpstreamError::Decode(_)))
        ));
        assert!(svc.try_highest_salary().await.is_err());
        assert!(svc.try_top_earner_names().await.is_err());
        assert!(svc.try_search_by_name("").await.is_err());
        assert!(svc.try_get_by_id("x").await.is_err());
    }

    #[tokio::test]
    async fn get_by_id_missing_is_none() {
        let fake = Arc::new(FakeUpstream::with(vec![employee("1", "Ann", 5)]));
        let svc = service(&fake);
        assert!(svc.get_by_id("nope").await.is_none());
        assert_eq!(svc.get_by_id("1").await.map(|e| e.name), Some("Ann".to_string()));
    }

    #[tokio::test]
    async fn search_and_ranking_use_one_bulk_fetch_each() {
        let fake = Arc::new(FakeUpstream::with(vec![
            employee("1", "xyz", 50_000),
            employee("2", "abc", 60_000),
        ]));
        let svc = service(&fake);

        let hits = svc.search_by_name("XYZ").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert_eq!(svc.highest_salary().await, 60_000);
        assert_eq!(svc.top_earner_names().await, vec!["abc", "xyz"]);
        assert_eq!(fake.count(|c| *c == Call::FetchAll), 3);
    }

    #[tokio::test]
    async fn highest_salary_of_empty_collection_is_zero() {
        let fake = Arc::new(FakeUpstream::with(Vec::new()));
        assert_eq!(service(&fake).highest_salary().await, 0);
    }

    #[tokio::test]
    async fn create_returns_upstream_payload_unchanged() {
        let created =
            Employee { email: Some("ann@company.com".into()), ..employee("new-id", "Ann", 100) };
        let mut fake = FakeUpstream::with(Vec::new());
        fake.create_result = Some(Ok(created.clone()));
        let fake = Arc::new(fake);

        let input = CreateEmployeeInput::new("Ann", 100, 30, "Engineer");
        let got = service(&fake).create(&input).await;
        assert_eq!(got.ok(), Some(created));
        assert_eq!(fake.calls(), vec![Call::Create(input)]);
    }

    #[tokio::test]
    async fn create_non_success_is_creation_failure() {
        let mut fake = FakeUpstream::with(Vec::new());
        fake.create_result = Some(Err(UpstreamError::Status(500)));
        let fake = Arc::new(fake);

        let res = service(&fake).create(&CreateEmployeeInput::new("Ann", 1, 20, "Dev")).await;
        assert!(matches!(res, Err(ServiceError::CreateFailed(_))));
    }

    #[tokio::test]
    async fn delete_resolves_then_deletes_by_name() {
        let fake = Arc::new(FakeUpstream::with(vec![employee("42", "Grace Hopper", 9)]));
        let msg = service(&fake).delete_by_id("42").await;

        assert_eq!(msg.ok().as_deref(), Some("Employee Grace Hopper deleted successfully."));
        assert_eq!(
            fake.calls(),
            vec![Call::FetchOne("42".into()), Call::DeleteByName("Grace Hopper".into())]
        );
    }

    #[tokio::test]
    async fn delete_unknown_id_never_deletes() {
        let fake = Arc::new(FakeUpstream::with(vec![employee("1", "Ann", 9)]));
        let res = service(&fake).delete_by_id("2").await;

        assert!(matches!(res, Err(ServiceError::EmployeeNotFound(ref id)) if id == "2"));
        assert_eq!(fake.count(|c| matches!(c, Call::DeleteByName(_))), 0);
    }

    #[tokio::test]
    async fn delete_unnamed_record_never_deletes() {
        let fake = Arc::new(FakeUpstream::with(vec![employee("7", "", 9)]));
        let res = service(&fake).delete_by_id("7").await;

        let err = res.expect_err("empty name must not resolve");
        assert_eq!(err.to_string(), "Employee not found with ID: 7");
        assert_eq!(fake.count(|c| matches!(c, Call::DeleteByName(_))), 0);
    }

    #[tokio::test]
    async fn delete_resolve_404_is_not_found_other_failures_are_generic() {
        let mut fake = FakeUpstream::with(Vec::new());
        fake.fetch_one_error = Some(UpstreamError::Status(404));
        let res = service(&Arc::new(fake)).delete_by_id("9").await;
        assert!(matches!(res, Err(ServiceError::EmployeeNotFound(_))));

        let fake = Arc::new(FakeUpstream::down(UpstreamError::Transport("refused".into())));
        let res = service(&fake).delete_by_id("9").await;
        assert!(matches!(res, Err(ServiceError::DeleteFailed(_))));
        assert_eq!(fake.count(|c| matches!(c, Call::DeleteByName(_))), 0);
    }

    #[tokio::test]
    async fn delete_phase_failure_is_generic_error() {
        let mut fake = FakeUpstream::with(vec![employee("1", "Ann", 9)]);
        fake.delete_error = Some(UpstreamError::Status(500));
        let fake = Arc::new(fake);

        let res = service(&fake).delete_by_id("1").await;
        assert!(matches!(res, Err(ServiceError::DeleteFailed(_))));
        assert_eq!(fake.calls().len(), 2);
    }
}
