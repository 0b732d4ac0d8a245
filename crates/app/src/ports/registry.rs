//! Registry port — the bridge's current list of services.

use coupling_domain::service::Service;

/// Read access to the services currently known to the bridge.
pub trait ServiceRegistry {
    /// Snapshot of all services, in registry order.
    fn services(&self) -> Vec<Service>;

    /// First service whose name equals `name` exactly.
    fn find_by_name(&self, name: &str) -> Option<Service> {
        self.services().into_iter().find(|s| s.service_name == name)
    }
}

impl<T: ServiceRegistry + ?Sized> ServiceRegistry for std::sync::Arc<T> {
    fn services(&self) -> Vec<Service> {
        (**self).services()
    }

    fn find_by_name(&self, name: &str) -> Option<Service> {
        (**self).find_by_name(name)
    }
}
