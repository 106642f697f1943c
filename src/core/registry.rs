//! # Service Registry
//!
//! 타입 기반의 전역 서비스 컨테이너입니다.
//! 애플리케이션 시작 시 `main`에서 서비스 인스턴스를 등록하고,
//! 핸들러는 요청마다 같은 `Arc<T>` 인스턴스를 꺼내 사용합니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // 시작 시 등록
//! ServiceLocator::set(Arc::new(finder));
//!
//! // 핸들러에서 조회
//! let finder = ServiceLocator::try_get::<UserFinderService>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use once_cell::sync::Lazy;

/// 싱글톤 인스턴스 컨테이너
///
/// `TypeId`를 키로 각 타입당 하나의 인스턴스를 보관합니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", type_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 조회합니다. 등록되지 않았으면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct RegistryProbe {
        label: &'static str,
    }

    struct NeverRegistered;

    #[test]
    fn test_set_then_get_returns_same_instance() {
        let probe = Arc::new(RegistryProbe { label: "probe" });
        ServiceLocator::set(probe.clone());

        let found = ServiceLocator::try_get::<RegistryProbe>().unwrap();
        assert!(Arc::ptr_eq(&probe, &found));
        assert_eq!(found.label, "probe");
    }

    #[test]
    fn test_unregistered_type_returns_none() {
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }
}
