use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

// TenantTaskSupervisor owns the periodic background jobs of the surrounding
// system, keyed by tenant id. Registration is deduplicated so at most one
// periodic job runs per tenant; the owner decides when to shut it down.
#[derive(Default)]
pub struct TenantTaskSupervisor {
    tasks: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl TenantTaskSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    // Spawns a periodic job for the tenant; returns false and leaves the
    // existing job running when the tenant is already registered.
    pub fn register<F, Fut>(&self, tenant_id: &str, interval: Duration, job: F) -> bool
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let mut tasks = self.tasks.lock().expect("supervisor lock poisoned");
        if tasks.contains_key(tenant_id) {
            info!("periodic job for tenant {} already registered, skipping", tenant_id);
            return false;
        }
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so the job first
            // runs one full interval after registration.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                job().await;
            }
        });
        info!("periodic job for tenant {} registered", tenant_id);
        tasks.insert(tenant_id.to_string(), handle);
        true
    }

    pub fn is_registered(&self, tenant_id: &str) -> bool {
        self.tasks.lock().expect("supervisor lock poisoned").contains_key(tenant_id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.lock().expect("supervisor lock poisoned").is_empty()
    }

    pub fn deregister(&self, tenant_id: &str) -> bool {
        let mut tasks = self.tasks.lock().expect("supervisor lock poisoned");
        match tasks.remove(tenant_id) {
            Some(handle) => {
                handle.abort();
                info!("periodic job for tenant {} stopped", tenant_id);
                true
            }
            None => false,
        }
    }

    pub fn shutdown(&self) {
        let mut tasks = self.tasks.lock().expect("supervisor lock poisoned");
        for (tenant_id, handle) in tasks.drain() {
            handle.abort();
            info!("periodic job for tenant {} stopped", tenant_id);
        }
    }
}

impl Drop for TenantTaskSupervisor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
