//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::types::WorkationId;
use crate::domain::workation::{NewWorkation, Workation};
use crate::repository::errors::RepositoryResult;
use crate::repository::{WorkationListQuery, WorkationReader, WorkationWriter};

mock! {
    pub Repository {}

    impl WorkationReader for Repository {
        fn get_workation_by_id(&self, id: WorkationId) -> RepositoryResult<Option<Workation>>;
        fn list_workations(
            &self,
            query: WorkationListQuery,
        ) -> RepositoryResult<(usize, Vec<Workation>)>;
        fn count_workations(&self) -> RepositoryResult<usize>;
    }

    impl WorkationWriter for Repository {
        fn create_workation(&self, new_workation: &NewWorkation) -> RepositoryResult<Workation>;
        fn create_workations(&self, new_workations: &[NewWorkation]) -> RepositoryResult<usize>;
        fn update_workation(
            &self,
            id: WorkationId,
            updates: &NewWorkation,
        ) -> RepositoryResult<Workation>;
        fn delete_workation(&self, id: WorkationId) -> RepositoryResult<()>;
    }
}
