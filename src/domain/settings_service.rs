//! Settings service over the singleton preference record.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::ports::{SettingsService, SettingsStore, map_store_error};
use crate::domain::settings::{Settings, SettingsPatch};

/// Settings service backed by a [`SettingsStore`].
#[derive(Clone)]
pub struct SettingsServiceImpl<S> {
    store: Arc<S>,
}

impl<S> SettingsServiceImpl<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SettingsService for SettingsServiceImpl<S>
where
    S: SettingsStore,
{
    async fn get_settings(&self) -> Result<Settings, Error> {
        self.store.get().await.map_err(map_store_error)
    }

    async fn update_settings(&self, patch: SettingsPatch) -> Result<Settings, Error> {
        self.store.merge(patch).await.map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::ports::{MockSettingsStore, StoreError};

    #[tokio::test]
    async fn get_returns_the_stored_record() {
        let mut store = MockSettingsStore::new();
        store
            .expect_get()
            .times(1)
            .return_once(|| Ok(Settings::default()));

        let service = SettingsServiceImpl::new(Arc::new(store));
        let settings = service.get_settings().await.expect("get succeeds");
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn update_delegates_the_merge_to_the_store() {
        let mut store = MockSettingsStore::new();
        store.expect_merge().times(1).return_once(|patch| {
            let mut settings = Settings::default();
            settings.apply(patch);
            Ok(settings)
        });

        let service = SettingsServiceImpl::new(Arc::new(store));
        let settings = service
            .update_settings(SettingsPatch {
                dark_mode: Some(true),
                ..SettingsPatch::default()
            })
            .await
            .expect("update succeeds");
        assert!(settings.dark_mode);
        assert_eq!(settings.language, "English");
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_unavailable() {
        let mut store = MockSettingsStore::new();
        store
            .expect_get()
            .times(1)
            .return_once(|| Err(StoreError::connection("refused")));

        let service = SettingsServiceImpl::new(Arc::new(store));
        let err = service.get_settings().await.expect_err("store down");
        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
    }
}
